//! # stayhub-api
//!
//! Thin axum surface over the booking engine. Exposes inventory reads
//! and writes, availability checks, quotes, and booking creation — the
//! entire contract offered to checkout flows.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
