//! Core, DOM-free primitives and helpers for the Web UI.
pub mod menu;
pub mod routes;
pub mod store;
pub mod theme;
