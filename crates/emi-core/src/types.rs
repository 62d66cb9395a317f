use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EmiCoreError;
use crate::EmiCoreResult;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.05 = 5%). Never as percentages.
pub type Rate = Decimal;

/// A calendar month label (year plus month 1-12) used to stamp schedule rows.
///
/// Month arithmetic is plain integer counting, so advancing a label never
/// touches the system clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
}

impl CalendarMonth {
    pub fn new(year: i32, month: u32) -> EmiCoreResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(EmiCoreError::InvalidInput {
                field: "month".into(),
                reason: format!("Month must be 1-12, got {month}"),
            });
        }
        Ok(Self { year, month })
    }

    /// The month containing the given date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The current local month.
    ///
    /// Outer layers only: the engine takes an explicit start so results stay
    /// reproducible.
    pub fn current() -> Self {
        Self::from_date(chrono::Local::now().date_naive())
    }

    /// This label advanced by `n` whole months, rolling the year as needed.
    pub fn plus_months(self, n: u32) -> Self {
        let total = i64::from(self.month) - 1 + i64::from(n);
        Self {
            year: self.year + (total / 12) as i32,
            month: (total % 12) as u32 + 1,
        }
    }
}

impl fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for CalendarMonth {
    type Err = EmiCoreError;

    /// Parses a `YYYY-MM` label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EmiCoreError::InvalidInput {
            field: "calendar_month".into(),
            reason: format!("Expected YYYY-MM, got '{s}'"),
        };
        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plus_months_within_year() {
        let m = CalendarMonth::new(2025, 3).unwrap();
        assert_eq!(m.plus_months(5), CalendarMonth::new(2025, 8).unwrap());
    }

    #[test]
    fn test_plus_months_rolls_year() {
        let m = CalendarMonth::new(2025, 12).unwrap();
        assert_eq!(m.plus_months(1), CalendarMonth::new(2026, 1).unwrap());
    }

    #[test]
    fn test_plus_months_many_years() {
        let m = CalendarMonth::new(2025, 7).unwrap();
        assert_eq!(m.plus_months(240), CalendarMonth::new(2045, 7).unwrap());
    }

    #[test]
    fn test_plus_months_zero_is_identity() {
        let m = CalendarMonth::new(2025, 1).unwrap();
        assert_eq!(m.plus_months(0), m);
    }

    #[test]
    fn test_out_of_range_month_rejected() {
        assert!(CalendarMonth::new(2025, 0).is_err());
        assert!(CalendarMonth::new(2025, 13).is_err());
    }

    #[test]
    fn test_parse_and_display_round_trip() {
        let m: CalendarMonth = "2031-02".parse().unwrap();
        assert_eq!(m, CalendarMonth::new(2031, 2).unwrap());
        assert_eq!(m.to_string(), "2031-02");
    }

    #[test]
    fn test_parse_rejects_malformed_labels() {
        assert!("2025".parse::<CalendarMonth>().is_err());
        assert!("2025-13".parse::<CalendarMonth>().is_err());
        assert!("202x-01".parse::<CalendarMonth>().is_err());
        assert!("".parse::<CalendarMonth>().is_err());
    }
}
