//! Greedy guest-to-unit allocation.
//!
//! Guest totals are booking-wide, not per-room: the allocator seats them
//! across the requested units tier by tier, in the order tiers were
//! selected.

use serde::{Deserialize, Serialize};

use stayhub_core::types::{GuestCount, UNIT_MAX_OCCUPANCY};

use crate::pricing::{PricedCategory, UnitOccupancy};

/// A price tier and the number of units requested from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRequest {
    /// Nightly base price shared by every room in the tier.
    pub base_price: i64,
    /// Units requested.
    pub quantity: u32,
}

/// Group room selections into price tiers.
///
/// Rooms with an identical effective nightly price form one tier. The
/// result is an explicit ordered list — tiers appear in the order their
/// price is first encountered, which is the order downstream allocation
/// and pricing walk them.
pub fn group_by_price(selections: &[(i64, u32)]) -> Vec<CategoryRequest> {
    let mut categories: Vec<CategoryRequest> = Vec::new();
    for &(base_price, quantity) in selections {
        match categories.iter_mut().find(|c| c.base_price == base_price) {
            Some(category) => category.quantity += quantity,
            None => categories.push(CategoryRequest {
                base_price,
                quantity,
            }),
        }
    }
    categories
}

/// Distribute booking-wide guest totals across the requested units.
///
/// Each tier seats up to `quantity` units: a unit takes as many remaining
/// adults as fit (capped at [`UNIT_MAX_OCCUPANCY`]), then children up to
/// the cap. The exhaustion check runs **after** a unit is pushed, so a
/// tier's first unit always lands — even with zero guests remaining —
/// while later units are skipped once everyone is seated. The number of
/// priced units can therefore be smaller than the number requested; both
/// behaviors are part of the quoting contract and are pinned by tests.
pub fn allocate_units(categories: &[CategoryRequest], guests: GuestCount) -> Vec<PricedCategory> {
    let mut remaining = guests;
    let mut allocated = Vec::with_capacity(categories.len());

    for category in categories {
        let mut units = Vec::new();
        for _ in 0..category.quantity {
            let adults = remaining.adults.min(UNIT_MAX_OCCUPANCY);
            let children = remaining.children.min(UNIT_MAX_OCCUPANCY - adults);
            units.push(UnitOccupancy { adults, children });
            remaining.adults -= adults;
            remaining.children -= children;
            if remaining.is_empty() {
                break;
            }
        }
        allocated.push(PricedCategory {
            base_price: category.base_price,
            units,
        });
    }

    allocated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(adults: u32, children: u32) -> UnitOccupancy {
        UnitOccupancy { adults, children }
    }

    #[test]
    fn grouping_merges_equal_prices_in_first_seen_order() {
        let categories = group_by_price(&[(2500, 1), (1800, 2), (2500, 1)]);
        assert_eq!(
            categories,
            vec![
                CategoryRequest {
                    base_price: 2500,
                    quantity: 2
                },
                CategoryRequest {
                    base_price: 1800,
                    quantity: 2
                },
            ]
        );
    }

    #[test]
    fn fills_units_adults_first_then_children() {
        let categories = [CategoryRequest {
            base_price: 2000,
            quantity: 2,
        }];
        let allocated = allocate_units(&categories, GuestCount::new(5, 2));
        assert_eq!(allocated[0].units, vec![unit(4, 0), unit(1, 2)]);
    }

    #[test]
    fn stops_after_guests_are_seated() {
        // Three units requested, but everyone fits in the first.
        let categories = [CategoryRequest {
            base_price: 2000,
            quantity: 3,
        }];
        let allocated = allocate_units(&categories, GuestCount::new(2, 1));
        assert_eq!(allocated[0].units, vec![unit(2, 1)]);
    }

    #[test]
    fn exhausted_tier_still_receives_one_unit() {
        // All guests fit in the first tier; the second tier still pushes
        // one zero-guest unit because the exhaustion check follows the push.
        let categories = [
            CategoryRequest {
                base_price: 1800,
                quantity: 1,
            },
            CategoryRequest {
                base_price: 2500,
                quantity: 1,
            },
        ];
        let allocated = allocate_units(&categories, GuestCount::new(2, 0));
        assert_eq!(allocated[0].units, vec![unit(2, 0)]);
        assert_eq!(allocated[1].units, vec![unit(0, 0)]);
    }

    #[test]
    fn zero_guests_allocates_one_unit_per_tier() {
        let categories = [
            CategoryRequest {
                base_price: 1800,
                quantity: 2,
            },
            CategoryRequest {
                base_price: 2500,
                quantity: 2,
            },
        ];
        let allocated = allocate_units(&categories, GuestCount::default());
        assert_eq!(allocated[0].units, vec![unit(0, 0)]);
        assert_eq!(allocated[1].units, vec![unit(0, 0)]);
    }

    #[test]
    fn spreads_across_tiers_when_first_overflows() {
        let categories = [
            CategoryRequest {
                base_price: 1800,
                quantity: 1,
            },
            CategoryRequest {
                base_price: 2500,
                quantity: 1,
            },
        ];
        let allocated = allocate_units(&categories, GuestCount::new(6, 1));
        assert_eq!(allocated[0].units, vec![unit(4, 0)]);
        assert_eq!(allocated[1].units, vec![unit(2, 1)]);
    }
}
