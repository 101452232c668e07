//! Property domain entities.

pub mod model;

pub use model::Property;
