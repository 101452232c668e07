//! Route definitions for the StayHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! axum's `State` extractor.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(inventory_routes())
        .merge(availability_routes())
        .merge(quote_routes())
        .merge(booking_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Inventory reads and the admin-facing upsert.
fn inventory_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/rooms/{id}/inventory",
            get(handlers::inventory::get_room_inventory)
                .put(handlers::inventory::set_room_inventory),
        )
        .route(
            "/rooms/{id}/availability",
            get(handlers::inventory::check_room_availability),
        )
        .route(
            "/properties/{id}/inventory",
            get(handlers::inventory::property_inventory),
        )
}

/// Multi-room availability check.
fn availability_routes() -> Router<AppState> {
    Router::new().route(
        "/availability/check",
        post(handlers::availability::check_multi_room),
    )
}

/// Quote computation.
fn quote_routes() -> Router<AppState> {
    Router::new().route(
        "/properties/{id}/quotes",
        post(handlers::quotes::quote),
    )
}

/// Booking lifecycle.
fn booking_routes() -> Router<AppState> {
    Router::new()
        .route("/bookings", post(handlers::bookings::create_booking))
        .route("/bookings/{id}", get(handlers::bookings::get_booking))
        .route(
            "/bookings/{id}/confirm",
            post(handlers::bookings::confirm_booking),
        )
        .route(
            "/bookings/{id}/cancel",
            post(handlers::bookings::cancel_booking),
        )
        .route(
            "/guests/{id}/bookings",
            get(handlers::bookings::guest_bookings),
        )
}

/// Health endpoint.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
