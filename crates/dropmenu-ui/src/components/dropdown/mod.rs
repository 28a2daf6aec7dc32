//! Dropdown menu variants and the behavior they share.

mod controller;
mod multi_level;
mod outside;
mod parts;
mod single;
mod split;

pub(crate) use multi_level::MultiLevelDropdown;
pub(crate) use single::SingleLevelDropdown;
pub(crate) use split::SplitButtonDropdown;
