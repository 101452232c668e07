//! Concrete PostgreSQL repository implementations.

pub mod booking;
pub mod catalog;
pub mod inventory;

pub use booking::BookingRepository;
pub use catalog::CatalogRepository;
pub use inventory::InventoryRepository;
