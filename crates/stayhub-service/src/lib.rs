//! # stayhub-service
//!
//! Business logic service layer for StayHub. The pure pricing and
//! allocation modules compute quotes; the availability, inventory, and
//! booking services orchestrate the stores to turn a validated request
//! into a persisted reservation.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod allocation;
pub mod availability;
pub mod booking;
pub mod inventory;
pub mod pricing;
pub mod quote;

pub use allocation::{CategoryRequest, allocate_units, group_by_price};
pub use availability::AvailabilityService;
pub use booking::{BookingOutcome, BookingService, PersistenceIssue};
pub use inventory::{InventoryService, RoomInventory};
pub use pricing::{PricedCategory, UnitOccupancy, price_stay};
pub use quote::{BookingQuote, QuoteService};
