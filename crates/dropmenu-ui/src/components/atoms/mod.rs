//! Shared UI atoms used by the dropdowns.

pub(crate) mod icons;
