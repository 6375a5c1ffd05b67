//! Hooks binding the headless fetch layer to Dioxus components.

mod use_fetch;

pub use use_fetch::*;
