//! Application state shared across all handlers.

use std::sync::Arc;

use stayhub_core::config::AppConfig;
use stayhub_service::{AvailabilityService, BookingService, InventoryService, QuoteService};

/// Application state containing all shared dependencies.
///
/// Passed to every axum handler via `State<AppState>`. Services are
/// cheaply cloneable; the config is `Arc`-wrapped.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Availability checks.
    pub availability: AvailabilityService,
    /// Inventory reads and writes.
    pub inventory: InventoryService,
    /// Quote computation.
    pub quotes: QuoteService,
    /// Booking orchestration.
    pub bookings: BookingService,
}
