//! UI primitives (Button, Card, StatusBadge)

pub mod button;
pub mod card;
pub mod status_badge;

pub use button::*;
pub use card::*;
pub use status_badge::*;
