//! End-to-end booking flows against the in-memory store.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use stayhub_database::MemoryStore;
use stayhub_database::store::InventoryStore;
use stayhub_entity::booking::{BookingStatus, CreateBooking, RoomRequest};
use stayhub_entity::property::Property;
use stayhub_entity::room::Room;
use stayhub_service::{BookingOutcome, BookingService, PersistenceIssue};

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
}

fn seed_property() -> Property {
    let now = Utc::now();
    Property {
        id: Uuid::new_v4(),
        name: "Harbor House".to_string(),
        base_price: 2000,
        max_guests: 8,
        max_bedrooms: 4,
        created_at: now,
        updated_at: now,
    }
}

fn seed_room(property_id: Uuid, name: &str) -> Room {
    let now = Utc::now();
    Room {
        id: Uuid::new_v4(),
        property_id,
        name: name.to_string(),
        base_price: Some(2000),
        amenities: vec!["wifi".to_string()],
        created_at: now,
        updated_at: now,
    }
}

fn header(property_id: Uuid, from: u32, to: u32) -> CreateBooking {
    CreateBooking {
        property_id,
        guest_id: Uuid::new_v4(),
        check_in: date(from),
        check_out: date(to),
        adults: 2,
        children: 0,
        total_price: 4000,
    }
}

fn request(room_id: Uuid, quantity: u32, from: u32, to: u32) -> RoomRequest {
    RoomRequest {
        room_id,
        quantity,
        check_in: date(from),
        check_out: date(to),
    }
}

async fn seed_inventory(store: &MemoryStore, room_id: Uuid, days: std::ops::RangeInclusive<u32>, available: i32) {
    for d in days {
        store
            .set_room_inventory(room_id, date(d), available)
            .await
            .unwrap();
    }
}

fn service(store: &Arc<MemoryStore>) -> BookingService {
    BookingService::new(store.clone(), store.clone())
}

#[tokio::test]
async fn happy_path_commits_header_lines_and_decrements() {
    let store = Arc::new(MemoryStore::new());
    let property = seed_property();
    let alpine = seed_room(property.id, "Alpine");
    let birch = seed_room(property.id, "Birch");
    store.insert_property(property.clone()).await;
    store.insert_room(alpine.clone()).await;
    store.insert_room(birch.clone()).await;
    seed_inventory(&store, alpine.id, 1..=2, 3).await;
    seed_inventory(&store, birch.id, 1..=2, 1).await;

    let requests = [
        request(alpine.id, 2, 1, 3),
        request(birch.id, 1, 1, 3),
    ];
    let outcome = service(&store)
        .create_multi_room_booking(&header(property.id, 1, 3), &requests, Some("pay_123"))
        .await
        .unwrap();

    let booking = match outcome {
        BookingOutcome::Committed(b) => b,
        other => panic!("expected Committed, got {other:?}"),
    };
    assert_eq!(booking.status, BookingStatus::Confirmed);
    assert_eq!(booking.payment_reference.as_deref(), Some("pay_123"));

    assert_eq!(store.bookings().await.len(), 1);
    let lines = store.room_lines().await;
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().any(|l| l.room_id == alpine.id && l.quantity == 2));
    assert!(lines.iter().any(|l| l.room_id == birch.id && l.quantity == 1));

    for d in 1..=2 {
        let rows = store.get_room_inventory(alpine.id, date(d), date(d)).await.unwrap();
        assert_eq!(rows[0].available, 1);
        let rows = store.get_room_inventory(birch.id, date(d), date(d)).await.unwrap();
        assert_eq!(rows[0].available, 0);
    }
}

#[tokio::test]
async fn failed_pre_check_writes_nothing() {
    let store = Arc::new(MemoryStore::new());
    let property = seed_property();
    let alpine = seed_room(property.id, "Alpine");
    store.insert_property(property.clone()).await;
    store.insert_room(alpine.clone()).await;
    seed_inventory(&store, alpine.id, 1..=2, 1).await;

    let outcome = service(&store)
        .create_multi_room_booking(
            &header(property.id, 1, 3),
            &[request(alpine.id, 2, 1, 3)],
            None,
        )
        .await
        .unwrap();

    assert!(matches!(outcome, BookingOutcome::Unavailable));
    assert!(store.bookings().await.is_empty());
    assert!(store.room_lines().await.is_empty());
    for d in 1..=2 {
        let rows = store.get_room_inventory(alpine.id, date(d), date(d)).await.unwrap();
        assert_eq!(rows[0].available, 1);
    }
}

#[tokio::test]
async fn without_payment_reference_booking_is_pending() {
    let store = Arc::new(MemoryStore::new());
    let property = seed_property();
    let alpine = seed_room(property.id, "Alpine");
    store.insert_property(property.clone()).await;
    store.insert_room(alpine.clone()).await;
    seed_inventory(&store, alpine.id, 1..=1, 1).await;

    let outcome = service(&store)
        .create_multi_room_booking(
            &header(property.id, 1, 2),
            &[request(alpine.id, 1, 1, 2)],
            None,
        )
        .await
        .unwrap();

    let booking = match outcome {
        BookingOutcome::Committed(b) => b,
        other => panic!("expected Committed, got {other:?}"),
    };
    assert_eq!(booking.status, BookingStatus::Pending);
    assert!(booking.payment_reference.is_none());
}

#[tokio::test]
async fn line_insert_failure_surfaces_as_incomplete() {
    let store = Arc::new(MemoryStore::new());
    let property = seed_property();
    let alpine = seed_room(property.id, "Alpine");
    store.insert_property(property.clone()).await;
    store.insert_room(alpine.clone()).await;
    seed_inventory(&store, alpine.id, 1..=1, 2).await;

    store.fail_line_inserts(true).await;
    let outcome = service(&store)
        .create_multi_room_booking(
            &header(property.id, 1, 2),
            &[request(alpine.id, 1, 1, 2)],
            Some("pay_456"),
        )
        .await
        .unwrap();

    let (booking, issues) = match outcome {
        BookingOutcome::Incomplete { booking, issues } => (booking, issues),
        other => panic!("expected Incomplete, got {other:?}"),
    };
    // The header exists even though its lines never landed; nothing is
    // rolled back.
    assert_eq!(store.bookings().await.len(), 1);
    assert!(store.room_lines().await.is_empty());
    assert_eq!(issues.len(), 1);
    assert!(matches!(
        issues[0],
        PersistenceIssue::LineInsert { room_id, .. } if room_id == alpine.id
    ));
    // The decrement still ran.
    let rows = store.get_room_inventory(alpine.id, date(1), date(1)).await.unwrap();
    assert_eq!(rows[0].available, 1);
    assert_eq!(booking.status, BookingStatus::Confirmed);
}

#[tokio::test]
async fn unseeded_room_books_vacuously_but_decrements_report_no_match() {
    // No inventory rows at all: the availability gate passes vacuously,
    // the header and line land, and every decrement reports a miss.
    let store = Arc::new(MemoryStore::new());
    let property = seed_property();
    let alpine = seed_room(property.id, "Alpine");
    store.insert_property(property.clone()).await;
    store.insert_room(alpine.clone()).await;

    let outcome = service(&store)
        .create_multi_room_booking(
            &header(property.id, 1, 3),
            &[request(alpine.id, 1, 1, 3)],
            None,
        )
        .await
        .unwrap();

    let issues = match outcome {
        BookingOutcome::Incomplete { issues, .. } => issues,
        other => panic!("expected Incomplete, got {other:?}"),
    };
    assert_eq!(issues.len(), 2);
    assert!(issues.iter().all(|i| matches!(
        i,
        PersistenceIssue::InventoryDecrement { room_id, .. } if *room_id == alpine.id
    )));
}

#[tokio::test]
async fn cancel_flips_status_without_restocking() {
    let store = Arc::new(MemoryStore::new());
    let property = seed_property();
    let alpine = seed_room(property.id, "Alpine");
    store.insert_property(property.clone()).await;
    store.insert_room(alpine.clone()).await;
    seed_inventory(&store, alpine.id, 1..=1, 2).await;

    let svc = service(&store);
    let outcome = svc
        .create_multi_room_booking(
            &header(property.id, 1, 2),
            &[request(alpine.id, 1, 1, 2)],
            Some("pay_789"),
        )
        .await
        .unwrap();
    let booking = match outcome {
        BookingOutcome::Committed(b) => b,
        other => panic!("expected Committed, got {other:?}"),
    };

    let cancelled = svc.cancel_booking(booking.id).await.unwrap();
    assert_eq!(cancelled.status, BookingStatus::Cancelled);

    // Inventory stays decremented after cancellation.
    let rows = store.get_room_inventory(alpine.id, date(1), date(1)).await.unwrap();
    assert_eq!(rows[0].available, 1);
}

#[tokio::test]
async fn confirm_attaches_reference_and_status() {
    let store = Arc::new(MemoryStore::new());
    let property = seed_property();
    let alpine = seed_room(property.id, "Alpine");
    store.insert_property(property.clone()).await;
    store.insert_room(alpine.clone()).await;
    seed_inventory(&store, alpine.id, 1..=1, 1).await;

    let svc = service(&store);
    let outcome = svc
        .create_multi_room_booking(
            &header(property.id, 1, 2),
            &[request(alpine.id, 1, 1, 2)],
            None,
        )
        .await
        .unwrap();
    let booking = match outcome {
        BookingOutcome::Committed(b) => b,
        other => panic!("expected Committed, got {other:?}"),
    };

    let confirmed = svc.confirm_booking(booking.id, "pay_settled").await.unwrap();
    assert_eq!(confirmed.status, BookingStatus::Confirmed);
    assert_eq!(confirmed.payment_reference.as_deref(), Some("pay_settled"));
}
