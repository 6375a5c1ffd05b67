//! Shared types for the Pulse dashboard.
//!
//! Everything here is plain data: the records the backend serves, the
//! response envelopes wrapping them, the sales-order filter set and the
//! error taxonomy the client surfaces. No I/O happens in this crate.

pub mod error;
pub mod filters;
pub mod models;
pub mod protocol;

pub use error::*;
pub use filters::*;
pub use models::*;
pub use protocol::*;
