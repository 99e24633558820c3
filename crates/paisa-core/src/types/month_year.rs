//! The `"MMM YYYY"` month bucket used by budget entries.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Date;
use crate::error::{PaisaError, PaisaResult};

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A calendar month, the grouping key for budget entries.
///
/// Budget rows are persisted with a human-readable `"MMM YYYY"` key
/// (e.g. `"Sep 2026"`); this type gives that convention a total order,
/// arithmetic, and both the spaced label and the compact `"MMMYYYY"` form
/// chart code uses as a map key.
///
/// Serialized as its `"MMM YYYY"` label so records round-trip against the
/// store's column format unchanged.
///
/// # Example
///
/// ```rust
/// use paisa_core::types::MonthYear;
///
/// let m = MonthYear::parse("Jan 2026").unwrap();
/// assert_eq!(m.prev().label(), "Dec 2025");
/// assert_eq!(m.key(), "Jan2026");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct MonthYear {
    /// Year component.
    year: i32,
    /// Month component (1-12).
    month: u32,
}

impl MonthYear {
    /// Creates a month-year from components.
    ///
    /// # Errors
    ///
    /// Returns `PaisaError::InvalidMonthYear` if `month` is not in 1..=12.
    pub fn new(year: i32, month: u32) -> PaisaResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(PaisaError::invalid_month_year(format!("{year}-{month}")));
        }
        Ok(Self { year, month })
    }

    /// Parses a `"MMM YYYY"` label such as `"Sep 2026"`.
    pub fn parse(s: &str) -> PaisaResult<Self> {
        let mut parts = s.split_whitespace();
        let (Some(name), Some(year), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(PaisaError::invalid_month_year(s));
        };
        let month = MONTH_NAMES
            .iter()
            .position(|m| *m == name)
            .ok_or_else(|| PaisaError::invalid_month_year(s))?;
        let year: i32 = year
            .parse()
            .map_err(|_| PaisaError::invalid_month_year(s))?;
        Ok(Self {
            year,
            month: month as u32 + 1,
        })
    }

    /// Returns the month containing the given date.
    #[must_use]
    pub fn from_date(date: Date) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the spaced label, e.g. `"Sep 2026"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} {}", MONTH_NAMES[self.month as usize - 1], self.year)
    }

    /// Returns the compact key, e.g. `"Sep2026"`.
    #[must_use]
    pub fn key(&self) -> String {
        format!("{}{}", MONTH_NAMES[self.month as usize - 1], self.year)
    }

    /// Returns the following month.
    #[must_use]
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Returns the preceding month.
    #[must_use]
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Returns the `n` months ending at the month containing `today`,
    /// oldest first.
    ///
    /// This is the window the dashboard charts cover.
    #[must_use]
    pub fn last_n(n: usize, today: Date) -> Vec<Self> {
        let mut months = Vec::with_capacity(n);
        let mut current = Self::from_date(today);
        for _ in 0..n {
            months.push(current);
            current = current.prev();
        }
        months.reverse();
        months
    }
}

impl From<MonthYear> for String {
    fn from(m: MonthYear) -> Self {
        m.label()
    }
}

impl TryFrom<String> for MonthYear {
    type Error = PaisaError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        MonthYear::parse(&s)
    }
}

impl fmt::Display for MonthYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrip() {
        let m = MonthYear::parse("Sep 2026").unwrap();
        assert_eq!(m.year(), 2026);
        assert_eq!(m.month(), 9);
        assert_eq!(m.label(), "Sep 2026");
        assert_eq!(m.key(), "Sep2026");
    }

    #[test]
    fn test_parse_rejects_long_names() {
        assert!(MonthYear::parse("September 2026").is_err());
        assert!(MonthYear::parse("Sep").is_err());
        assert!(MonthYear::parse("Sep 2026 extra").is_err());
    }

    #[test]
    fn test_year_boundaries() {
        let jan = MonthYear::new(2026, 1).unwrap();
        assert_eq!(jan.prev().label(), "Dec 2025");
        let dec = MonthYear::new(2025, 12).unwrap();
        assert_eq!(dec.next().label(), "Jan 2026");
    }

    #[test]
    fn test_last_n_ends_at_current_month() {
        let today = Date::from_ymd(2026, 2, 14).unwrap();
        let months = MonthYear::last_n(5, today);
        let labels: Vec<String> = months.iter().map(MonthYear::label).collect();
        assert_eq!(
            labels,
            vec!["Oct 2025", "Nov 2025", "Dec 2025", "Jan 2026", "Feb 2026"]
        );
    }

    #[test]
    fn test_ordering() {
        let a = MonthYear::new(2025, 12).unwrap();
        let b = MonthYear::new(2026, 1).unwrap();
        assert!(a < b);
    }
}
