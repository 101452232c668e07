//! Booking quotes: resolve rooms, group tiers, allocate guests, price.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stayhub_core::AppResult;
use stayhub_core::config::PricingConfig;
use stayhub_core::error::AppError;
use stayhub_core::types::{GuestCount, StayRange};
use stayhub_database::store::CatalogStore;
use stayhub_entity::booking::RoomSelection;

use crate::allocation::{allocate_units, group_by_price};
use crate::pricing::{PricedCategory, price_stay};

/// A priced quote for a prospective stay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingQuote {
    /// Billable nights.
    pub nights: i64,
    /// Grand total in integer currency units.
    pub total_price: i64,
    /// Price tiers with their allocated units, in selection order.
    pub categories: Vec<PricedCategory>,
}

/// Produces quotes for checkout flows.
#[derive(Clone)]
pub struct QuoteService {
    catalog: Arc<dyn CatalogStore>,
    rates: PricingConfig,
}

impl QuoteService {
    /// Create a new quote service.
    pub fn new(catalog: Arc<dyn CatalogStore>, rates: PricingConfig) -> Self {
        Self { catalog, rates }
    }

    /// Quote a stay for the selected rooms and booking-wide guest totals.
    ///
    /// Rooms sharing an effective nightly price are grouped into one
    /// tier before allocation, in selection order.
    pub async fn quote(
        &self,
        property_id: Uuid,
        stay: &StayRange,
        selections: &[RoomSelection],
        guests: GuestCount,
    ) -> AppResult<BookingQuote> {
        let property = self
            .catalog
            .find_property(property_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Property {property_id} not found")))?;

        let ids: Vec<Uuid> = selections.iter().map(|s| s.room_id).collect();
        let rooms = self.catalog.find_rooms(&ids).await?;
        let rooms_by_id: HashMap<Uuid, _> = rooms.iter().map(|r| (r.id, r)).collect();

        let mut priced_selections = Vec::with_capacity(selections.len());
        for selection in selections {
            let room = rooms_by_id.get(&selection.room_id).ok_or_else(|| {
                AppError::not_found(format!("Room {} not found", selection.room_id))
            })?;
            if room.property_id != property.id {
                return Err(AppError::validation(format!(
                    "Room {} does not belong to property {property_id}",
                    room.id
                )));
            }
            priced_selections.push((room.effective_price(&property), selection.quantity));
        }

        let categories = group_by_price(&priced_selections);
        let allocated = allocate_units(&categories, guests);
        let total_price = price_stay(&self.rates, stay, &allocated)?;

        Ok(BookingQuote {
            nights: stay.nights(),
            total_price,
            categories: allocated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use stayhub_core::error::ErrorKind;
    use stayhub_database::MemoryStore;
    use stayhub_entity::property::Property;
    use stayhub_entity::room::Room;

    fn property(base_price: i64) -> Property {
        let now = Utc::now();
        Property {
            id: Uuid::new_v4(),
            name: "Seaside Villa".to_string(),
            base_price,
            max_guests: 8,
            max_bedrooms: 4,
            created_at: now,
            updated_at: now,
        }
    }

    fn room(property_id: Uuid, name: &str, base_price: Option<i64>) -> Room {
        let now = Utc::now();
        Room {
            id: Uuid::new_v4(),
            property_id,
            name: name.to_string(),
            base_price,
            amenities: vec!["wifi".to_string()],
            created_at: now,
            updated_at: now,
        }
    }

    fn one_night() -> StayRange {
        StayRange::new(
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 2).unwrap(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn two_tier_quote_gives_exhausted_tier_a_base_price_unit() {
        let store = Arc::new(MemoryStore::new());
        let prop = property(9999);
        let standard = room(prop.id, "Standard", Some(1800));
        let deluxe = room(prop.id, "Deluxe", Some(2500));
        store.insert_property(prop.clone()).await;
        store.insert_room(standard.clone()).await;
        store.insert_room(deluxe.clone()).await;

        let service = QuoteService::new(store, PricingConfig::default());
        let quote = service
            .quote(
                prop.id,
                &one_night(),
                &[
                    RoomSelection {
                        room_id: standard.id,
                        quantity: 1,
                    },
                    RoomSelection {
                        room_id: deluxe.id,
                        quantity: 1,
                    },
                ],
                GuestCount::new(2, 0),
            )
            .await
            .unwrap();

        // Both adults land in the first tier; the second tier still
        // bills one empty unit at base price.
        assert_eq!(quote.nights, 1);
        assert_eq!(quote.total_price, 1800 + 2500);
    }

    #[tokio::test]
    async fn room_without_price_falls_back_to_property_price() {
        let store = Arc::new(MemoryStore::new());
        let prop = property(3200);
        let loft = room(prop.id, "Loft", None);
        store.insert_property(prop.clone()).await;
        store.insert_room(loft.clone()).await;

        let service = QuoteService::new(store, PricingConfig::default());
        let quote = service
            .quote(
                prop.id,
                &one_night(),
                &[RoomSelection {
                    room_id: loft.id,
                    quantity: 1,
                }],
                GuestCount::new(2, 1),
            )
            .await
            .unwrap();

        assert_eq!(quote.total_price, 3200);
    }

    #[tokio::test]
    async fn unknown_room_is_not_found() {
        let store = Arc::new(MemoryStore::new());
        let prop = property(2000);
        store.insert_property(prop.clone()).await;

        let service = QuoteService::new(store, PricingConfig::default());
        let err = service
            .quote(
                prop.id,
                &one_night(),
                &[RoomSelection {
                    room_id: Uuid::new_v4(),
                    quantity: 1,
                }],
                GuestCount::new(1, 0),
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn foreign_room_is_rejected() {
        let store = Arc::new(MemoryStore::new());
        let prop = property(2000);
        let other = property(1500);
        let foreign = room(other.id, "Foreign", Some(1000));
        store.insert_property(prop.clone()).await;
        store.insert_property(other).await;
        store.insert_room(foreign.clone()).await;

        let service = QuoteService::new(store, PricingConfig::default());
        let err = service
            .quote(
                prop.id,
                &one_night(),
                &[RoomSelection {
                    room_id: foreign.id,
                    quantity: 1,
                }],
                GuestCount::new(1, 0),
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }
}
