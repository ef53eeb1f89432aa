//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type identifying the calendar month
//! a payroll record is generated for.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{PayrollError, PayrollResult};

/// Identifies the calendar month a payroll record covers.
///
/// Together with an employee id, a pay period uniquely identifies a
/// non-superseded payroll record.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayPeriod;
///
/// let period = PayPeriod::new(2025, 6).unwrap();
/// assert_eq!(period.to_string(), "2025-06");
/// assert!(PayPeriod::new(2025, 13).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The calendar year.
    pub year: i32,
    /// The calendar month (1-12).
    pub month: u32,
}

impl PayPeriod {
    /// Creates a pay period, rejecting months outside 1..=12.
    pub fn new(year: i32, month: u32) -> PayrollResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(PayrollError::InvalidPeriod { month });
        }
        Ok(Self { year, month })
    }

    /// Returns the first day of the period, used for effective-dated
    /// rate-table lookups.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::PayPeriod;
    /// use chrono::NaiveDate;
    ///
    /// let period = PayPeriod::new(2025, 6).unwrap();
    /// assert_eq!(period.first_day(), NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
    /// ```
    pub fn first_day(&self) -> NaiveDate {
        // Month is validated at construction, so the date always exists.
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or(NaiveDate::MIN)
    }
}

impl fmt::Display for PayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_months_accepted() {
        for month in 1..=12 {
            assert!(PayPeriod::new(2025, month).is_ok());
        }
    }

    #[test]
    fn test_month_zero_rejected() {
        match PayPeriod::new(2025, 0) {
            Err(PayrollError::InvalidPeriod { month }) => assert_eq!(month, 0),
            other => panic!("Expected InvalidPeriod, got {:?}", other),
        }
    }

    #[test]
    fn test_month_thirteen_rejected() {
        assert!(PayPeriod::new(2025, 13).is_err());
    }

    #[test]
    fn test_display_zero_pads() {
        let period = PayPeriod::new(2025, 3).unwrap();
        assert_eq!(period.to_string(), "2025-03");
    }

    #[test]
    fn test_first_day() {
        let period = PayPeriod::new(2024, 12).unwrap();
        assert_eq!(
            period.first_day(),
            NaiveDate::from_ymd_opt(2024, 12, 1).unwrap()
        );
    }

    #[test]
    fn test_ordering_by_year_then_month() {
        let earlier = PayPeriod::new(2024, 12).unwrap();
        let later = PayPeriod::new(2025, 1).unwrap();
        assert!(earlier < later);
    }

    #[test]
    fn test_serialization_round_trip() {
        let period = PayPeriod::new(2025, 6).unwrap();
        let json = serde_json::to_string(&period).unwrap();
        assert_eq!(json, r#"{"year":2025,"month":6}"#);
        let back: PayPeriod = serde_json::from_str(&json).unwrap();
        assert_eq!(back, period);
    }
}
