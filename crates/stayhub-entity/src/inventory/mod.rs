//! Inventory domain entities.

pub mod model;

pub use model::InventoryRow;
