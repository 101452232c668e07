//! Shared value types used across StayHub crates.

pub mod filter;
pub mod guests;
pub mod stay;

pub use filter::{FilterField, FilterOp, FilterValue, OrderDirection, Ordering};
pub use guests::{GuestCount, UNIT_MAX_OCCUPANCY};
pub use stay::StayRange;
