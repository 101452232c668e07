//! Tiered occupancy pricing.
//!
//! Pure functions; every amount is integer currency units and every rate
//! applies per night.

use serde::{Deserialize, Serialize};

use stayhub_core::AppResult;
use stayhub_core::config::PricingConfig;
use stayhub_core::error::AppError;
use stayhub_core::types::{StayRange, UNIT_MAX_OCCUPANCY};

/// Guests seated in one priced unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitOccupancy {
    /// Adults in the unit.
    pub adults: u32,
    /// Children in the unit.
    pub children: u32,
}

/// A price tier with its allocated units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricedCategory {
    /// Nightly base price shared by every room in the tier.
    pub base_price: i64,
    /// Units to bill, as produced by the allocator.
    pub units: Vec<UnitOccupancy>,
}

/// Price a stay across all categories and units.
///
/// Fails with `CapacityExceeded` as soon as any unit holds more than
/// [`UNIT_MAX_OCCUPANCY`] guests; no partial total is produced.
pub fn price_stay(
    rates: &PricingConfig,
    stay: &StayRange,
    categories: &[PricedCategory],
) -> AppResult<i64> {
    let nights = stay.nights();
    let mut total = 0i64;
    for category in categories {
        for unit in &category.units {
            total += price_unit(rates, nights, category.base_price, unit)?;
        }
    }
    Ok(total)
}

/// Price one unit for the given number of nights.
///
/// Breakfast is billed on the excess beyond the included allowance
/// independently of the occupancy surcharge, so an extra adult pays both
/// the extra-adult rate and the adult breakfast rate. This mirrors the
/// billing contract exactly; both charges are quoted to the guest.
fn price_unit(
    rates: &PricingConfig,
    nights: i64,
    base_price: i64,
    unit: &UnitOccupancy,
) -> AppResult<i64> {
    if unit.adults + unit.children > UNIT_MAX_OCCUPANCY {
        return Err(AppError::capacity_exceeded(format!(
            "unit holds {} guests, limit is {UNIT_MAX_OCCUPANCY}",
            unit.adults + unit.children
        )));
    }

    let mut room_total = base_price * nights;

    let extra_adults = unit.adults.saturating_sub(rates.included_adults) as i64;
    if extra_adults > 0 {
        room_total += extra_adults * rates.extra_adult_rate * nights;
    }

    let breakfast_adults = unit.adults.saturating_sub(rates.included_adults) as i64;
    let breakfast_children = unit.children.saturating_sub(rates.included_children) as i64;
    room_total += breakfast_adults * rates.adult_breakfast_rate * nights;
    room_total += breakfast_children * rates.child_breakfast_rate * nights;

    Ok(room_total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use stayhub_core::error::ErrorKind;

    fn stay(nights: u64) -> StayRange {
        let check_in = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        StayRange::new(check_in, check_in + chrono::Days::new(nights)).unwrap()
    }

    fn one_unit(base_price: i64, adults: u32, children: u32) -> Vec<PricedCategory> {
        vec![PricedCategory {
            base_price,
            units: vec![UnitOccupancy { adults, children }],
        }]
    }

    #[test]
    fn base_allowance_pays_base_price_only() {
        let rates = PricingConfig::default();
        let total = price_stay(&rates, &stay(3), &one_unit(2000, 2, 1)).unwrap();
        assert_eq!(total, 6000);
    }

    #[test]
    fn extra_adult_pays_surcharge_and_breakfast() {
        // 2 nights at 2000, one extra adult: 4000 base
        // + 1500 x 1 x 2 surcharge + 350 x 1 x 2 breakfast = 7700.
        let rates = PricingConfig::default();
        let total = price_stay(&rates, &stay(2), &one_unit(2000, 3, 0)).unwrap();
        assert_eq!(total, 7700);
    }

    #[test]
    fn extra_child_pays_breakfast_only() {
        let rates = PricingConfig::default();
        let total = price_stay(&rates, &stay(1), &one_unit(2000, 2, 2)).unwrap();
        assert_eq!(total, 2000 + 250);
    }

    #[test]
    fn over_capacity_aborts_whole_computation() {
        let rates = PricingConfig::default();
        let categories = vec![
            PricedCategory {
                base_price: 2000,
                units: vec![UnitOccupancy {
                    adults: 2,
                    children: 0,
                }],
            },
            PricedCategory {
                base_price: 1800,
                units: vec![UnitOccupancy {
                    adults: 3,
                    children: 2,
                }],
            },
        ];
        let err = price_stay(&rates, &stay(1), &categories).unwrap_err();
        assert_eq!(err.kind, ErrorKind::CapacityExceeded);
    }

    #[test]
    fn full_occupancy_is_priced() {
        let rates = PricingConfig::default();
        // 4 adults: 2 extra, each paying surcharge + breakfast.
        let total = price_stay(&rates, &stay(1), &one_unit(1000, 4, 0)).unwrap();
        assert_eq!(total, 1000 + 2 * 1500 + 2 * 350);
    }

    #[test]
    fn price_is_monotone_in_nights_adults_children() {
        let rates = PricingConfig::default();
        let p = |nights, adults, children| {
            price_stay(&rates, &stay(nights), &one_unit(2000, adults, children)).unwrap()
        };
        assert!(p(2, 2, 1) >= p(1, 2, 1));
        assert!(p(1, 3, 1) >= p(1, 2, 1));
        assert!(p(1, 2, 2) >= p(1, 2, 1));
    }

    #[test]
    fn empty_unit_pays_base_price() {
        let rates = PricingConfig::default();
        let total = price_stay(&rates, &stay(1), &one_unit(2500, 0, 0)).unwrap();
        assert_eq!(total, 2500);
    }
}
