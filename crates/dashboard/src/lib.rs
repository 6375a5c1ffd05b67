//! Pulse Dashboard - Dioxus UI for Katana DCL order monitoring
//!
//! Pages, layout and components. All data access goes through `pulse-client`;
//! the hooks here only mirror its fetch state into signals.

pub mod components;
pub mod hooks;
pub mod routes;
pub mod views;

pub use routes::Route;
