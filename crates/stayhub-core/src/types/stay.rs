//! Stay date range handling.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::result::AppResult;

/// A validated stay date range.
///
/// `check_in` is inclusive; `check_out` is exclusive — a guest occupying
/// the night of a date holds inventory for that date only. A stay with
/// `check_in == check_out` is legal and is billed as a single night even
/// though it spans no inventory dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayRange {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl StayRange {
    /// Create a stay range, rejecting a check-out before check-in.
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> AppResult<Self> {
        if check_out < check_in {
            return Err(AppError::validation(format!(
                "check-out {check_out} is before check-in {check_in}"
            )));
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    /// Check-in date (inclusive).
    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    /// Check-out date (exclusive).
    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Number of billable nights: the day difference clamped to at least 1.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days().max(1)
    }

    /// Iterate the inventory dates of the stay, `[check_in, check_out)`.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let nights = (self.check_out - self.check_in).num_days().max(0) as u64;
        (0..nights).map(move |offset| self.check_in + Days::new(offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn nights_is_day_difference() {
        let stay = StayRange::new(date(2025, 3, 1), date(2025, 3, 4)).unwrap();
        assert_eq!(stay.nights(), 3);
    }

    #[test]
    fn equal_dates_bill_one_night() {
        let stay = StayRange::new(date(2025, 3, 1), date(2025, 3, 1)).unwrap();
        assert_eq!(stay.nights(), 1);
        assert_eq!(stay.dates().count(), 0);
    }

    #[test]
    fn dates_exclude_check_out() {
        let stay = StayRange::new(date(2025, 3, 1), date(2025, 3, 3)).unwrap();
        let dates: Vec<_> = stay.dates().collect();
        assert_eq!(dates, vec![date(2025, 3, 1), date(2025, 3, 2)]);
    }

    #[test]
    fn reversed_range_is_rejected() {
        assert!(StayRange::new(date(2025, 3, 4), date(2025, 3, 1)).is_err());
    }
}
