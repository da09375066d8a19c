//! # Column Headers
//!
//! A column header is an inclusive integer interval `[lower, upper]` that
//! answers "does this value fall into my bucket?". The sentinel values
//! `i32::MIN` and `i32::MAX` stand for negative and positive infinity, so a
//! header can be open-ended on either side. Headers are not required to
//! partition the value space: they may overlap (an item matching two headers
//! is counted in both) and may be degenerate single points.

use serde::{Deserialize, Serialize};

use crate::error::{MonitorError, Result};

/// Classification predicate for one report column.
pub trait ColumnHeader {
    /// Whether `value` falls into this bucket, inclusive on both ends.
    fn fits(&self, value: i32) -> bool;

    /// Human-readable column label.
    fn display(&self) -> String;
}

/// Column header bucketing items by their age in days.
///
/// The reference unit is whatever the surrounding report uses: calendar days,
/// or working days when the report was built through the
/// [`calendar`](crate::calendar) converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeIntervalColumnHeader {
    lower_age_limit: i32,
    upper_age_limit: i32,
}

impl TimeIntervalColumnHeader {
    /// Sentinel for an interval open towards the past.
    pub const OPEN_LOWER: i32 = i32::MIN;
    /// Sentinel for an interval open towards the future.
    pub const OPEN_UPPER: i32 = i32::MAX;

    /// Create a header for the inclusive interval `[lower, upper]`.
    ///
    /// Rejects `lower > upper` as a configuration error, before any
    /// aggregation can run against it.
    pub fn new(lower_age_limit: i32, upper_age_limit: i32) -> Result<Self> {
        if lower_age_limit > upper_age_limit {
            return Err(MonitorError::InvalidColumnHeader {
                lower: lower_age_limit,
                upper: upper_age_limit,
            });
        }
        Ok(Self {
            lower_age_limit,
            upper_age_limit,
        })
    }

    /// Degenerate single-day bucket `[age, age]`.
    pub fn at(age: i32) -> Self {
        Self {
            lower_age_limit: age,
            upper_age_limit: age,
        }
    }

    pub fn lower_age_limit(&self) -> i32 {
        self.lower_age_limit
    }

    pub fn upper_age_limit(&self) -> i32 {
        self.upper_age_limit
    }

    /// Largest finite absolute bound, if any bound is finite.
    ///
    /// Used by the working-day converter to size its precomputed window.
    pub fn largest_finite_bound(&self) -> Option<u32> {
        [self.lower_age_limit, self.upper_age_limit]
            .into_iter()
            .filter(|&b| b != Self::OPEN_LOWER && b != Self::OPEN_UPPER)
            .map(|b| b.unsigned_abs())
            .max()
    }
}

impl ColumnHeader for TimeIntervalColumnHeader {
    fn fits(&self, value: i32) -> bool {
        self.lower_age_limit <= value && value <= self.upper_age_limit
    }

    fn display(&self) -> String {
        match (self.lower_age_limit, self.upper_age_limit) {
            (Self::OPEN_LOWER, Self::OPEN_UPPER) => "all".to_string(),
            (Self::OPEN_LOWER, upper) => format!("<= {upper}"),
            (lower, Self::OPEN_UPPER) => format!(">= {lower}"),
            (lower, upper) if lower == upper => format!("{lower}"),
            (lower, upper) => format!("{lower} - {upper}"),
        }
    }
}

/// Column header bucketing items by task priority instead of age.
///
/// Same inclusive-interval and sentinel semantics as
/// [`TimeIntervalColumnHeader`]; reports using it feed the priority value
/// through the classification slot of their query items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriorityColumnHeader {
    lower_bound: i32,
    upper_bound: i32,
}

impl PriorityColumnHeader {
    pub fn new(lower_bound: i32, upper_bound: i32) -> Result<Self> {
        if lower_bound > upper_bound {
            return Err(MonitorError::InvalidColumnHeader {
                lower: lower_bound,
                upper: upper_bound,
            });
        }
        Ok(Self {
            lower_bound,
            upper_bound,
        })
    }

    pub fn lower_bound(&self) -> i32 {
        self.lower_bound
    }

    pub fn upper_bound(&self) -> i32 {
        self.upper_bound
    }
}

impl ColumnHeader for PriorityColumnHeader {
    fn fits(&self, value: i32) -> bool {
        self.lower_bound <= value && value <= self.upper_bound
    }

    fn display(&self) -> String {
        match (self.lower_bound, self.upper_bound) {
            (i32::MIN, i32::MAX) => "all".to_string(),
            (i32::MIN, upper) => format!("<= {upper}"),
            (lower, i32::MAX) => format!(">= {lower}"),
            (lower, upper) if lower == upper => format!("{lower}"),
            (lower, upper) => format!("{lower} - {upper}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_is_inclusive_on_both_ends() {
        let header = TimeIntervalColumnHeader::new(-5, 5).unwrap();
        assert!(header.fits(-5));
        assert!(header.fits(0));
        assert!(header.fits(5));
        assert!(!header.fits(-6));
        assert!(!header.fits(6));
    }

    #[test]
    fn test_open_ended_sentinels() {
        let past = TimeIntervalColumnHeader::new(TimeIntervalColumnHeader::OPEN_LOWER, -1).unwrap();
        assert!(past.fits(i32::MIN + 1));
        assert!(past.fits(-1));
        assert!(!past.fits(0));

        let future = TimeIntervalColumnHeader::new(1, TimeIntervalColumnHeader::OPEN_UPPER).unwrap();
        assert!(future.fits(1));
        assert!(future.fits(i32::MAX));
        assert!(!future.fits(0));
    }

    #[test]
    fn test_degenerate_point_bucket() {
        let header = TimeIntervalColumnHeader::at(3);
        assert!(header.fits(3));
        assert!(!header.fits(2));
        assert!(!header.fits(4));
        assert_eq!(header.display(), "3");
    }

    #[test]
    fn test_reversed_bounds_are_rejected() {
        let err = TimeIntervalColumnHeader::new(4, 2).unwrap_err();
        assert_eq!(err, MonitorError::InvalidColumnHeader { lower: 4, upper: 2 });

        let err = PriorityColumnHeader::new(10, 1).unwrap_err();
        assert_eq!(err, MonitorError::InvalidColumnHeader { lower: 10, upper: 1 });
    }

    #[test]
    fn test_largest_finite_bound_ignores_sentinels() {
        let header = TimeIntervalColumnHeader::new(TimeIntervalColumnHeader::OPEN_LOWER, -6).unwrap();
        assert_eq!(header.largest_finite_bound(), Some(6));

        let open = TimeIntervalColumnHeader::new(
            TimeIntervalColumnHeader::OPEN_LOWER,
            TimeIntervalColumnHeader::OPEN_UPPER,
        )
        .unwrap();
        assert_eq!(open.largest_finite_bound(), None);
    }

    #[test]
    fn test_display_formats() {
        assert_eq!(
            TimeIntervalColumnHeader::new(i32::MIN, -11).unwrap().display(),
            "<= -11"
        );
        assert_eq!(
            TimeIntervalColumnHeader::new(11, i32::MAX).unwrap().display(),
            ">= 11"
        );
        assert_eq!(TimeIntervalColumnHeader::new(2, 5).unwrap().display(), "2 - 5");
        assert_eq!(PriorityColumnHeader::new(250, i32::MAX).unwrap().display(), ">= 250");
    }
}
