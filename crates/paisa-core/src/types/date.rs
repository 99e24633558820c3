//! Date type for financial calculations.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{PaisaError, PaisaResult};

/// Average days per year used for elapsed-time compounding.
///
/// A fixed convention, not calendar-aware: elapsed years are measured as
/// `days / 365.25` regardless of leap days actually crossed.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Average days per month used for elapsed-month counting.
pub const DAYS_PER_MONTH: f64 = 30.44;

/// A calendar date for financial calculations.
///
/// This is a newtype wrapper around `chrono::NaiveDate` providing the
/// elapsed-time conventions the metrics engine relies on and ensuring
/// type safety.
///
/// # Example
///
/// ```rust
/// use paisa_core::types::Date;
///
/// let date = Date::from_ymd(2025, 6, 15).unwrap();
/// let future = date.add_months(6);
/// assert_eq!(future.year(), 2025);
/// assert_eq!(future.month(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `PaisaError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> PaisaResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| PaisaError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `PaisaError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> PaisaResult<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|_| PaisaError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Returns today's date.
    #[must_use]
    pub fn today() -> Self {
        Date(chrono::Local::now().date_naive())
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Adds a number of days to the date.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Adds a number of months to the date.
    ///
    /// If the resulting day would be invalid (e.g., Jan 31 + 1 month),
    /// it rolls back to the last valid day of the month.
    #[must_use]
    pub fn add_months(&self, months: i32) -> Self {
        let total_months = self.year() * 12 + self.month() as i32 - 1 + months;
        let new_year = total_months.div_euclid(12);
        let new_month = (total_months.rem_euclid(12) + 1) as u32;

        // Clamp day to valid range for new month
        let max_day = days_in_month(new_year, new_month);
        let new_day = self.day().min(max_day);

        // Always valid after clamping
        Date(NaiveDate::from_ymd_opt(new_year, new_month, new_day).unwrap_or(self.0))
    }

    /// Returns the number of whole days from `earlier` to `self`.
    ///
    /// Negative when `self` precedes `earlier`.
    #[must_use]
    pub fn days_since(&self, earlier: Date) -> i64 {
        (self.0 - earlier.0).num_days()
    }

    /// Returns the elapsed time from `earlier` to `self` in average years.
    ///
    /// Uses the fixed [`DAYS_PER_YEAR`] convention; fractional values are
    /// meaningful and feed directly into continuous-exponent compounding.
    #[must_use]
    pub fn years_since(&self, earlier: Date) -> f64 {
        self.days_since(earlier) as f64 / DAYS_PER_YEAR
    }

    /// Returns the elapsed time from `earlier` to `self` in average months,
    /// rounded up so a partial month counts as a full one.
    ///
    /// Negative elapsed time (a start date in the future) yields a
    /// non-positive count; callers clamp as needed.
    #[must_use]
    pub fn months_since_ceil(&self, earlier: Date) -> i64 {
        (self.days_since(earlier) as f64 / DAYS_PER_MONTH).ceil() as i64
    }

    /// Returns the underlying `chrono::NaiveDate`.
    #[must_use]
    pub fn inner(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for Date {
    fn from(d: NaiveDate) -> Self {
        Date(d)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Returns the number of days in the given month.
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if NaiveDate::from_ymd_opt(year, 2, 29).is_some() => 29,
        _ => 28,
    }
}
