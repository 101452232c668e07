//! # stayhub-core
//!
//! Core crate for StayHub. Contains configuration schemas, shared value
//! types (stay ranges, guest counts, query filters), and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other StayHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
