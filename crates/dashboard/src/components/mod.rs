//! Reusable components.

pub mod dashboard;
pub mod ui;
