//! # Working-Day / Calendar-Day Conversion
//!
//! Reports requested in working-day buckets need two translations: header
//! boundaries given in working days must expand to the calendar-day offsets
//! the query layer can filter on, and every returned item's calendar-day age
//! must collapse back to a working-day offset before insertion.
//!
//! The converter precomputes both directions once per (headers, reference
//! day) pair by direct day-by-day simulation over the bounded window implied
//! by the largest finite header boundary. Outside that window it saturates:
//! offsets pass through unchanged, since buckets out there are open-ended
//! anyway and need no translation.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Duration, NaiveDate, Utc};
use tracing::debug;

use super::business_calendar::BusinessCalendar;
use crate::monitor::TimeIntervalColumnHeader;

/// Bidirectional step-function mapping between calendar-day offsets and
/// working-day offsets from a reference day.
///
/// Immutable after construction. Two converters are equal only when built
/// from the same header bounds and the same reference *day* (time of day is
/// truncated away), so instances may be memoized per calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WorkingDayConverter {
    reference_date: NaiveDate,
    header_bounds: Vec<(i32, i32)>,
    days_to_working_days: BTreeMap<i32, i32>,
}

impl WorkingDayConverter {
    /// Precompute the conversion window for the given headers around the
    /// reference instant.
    ///
    /// The window limit is the largest finite absolute header bound; the
    /// forward cache is filled by walking outward from the reference day,
    /// one calendar day at a time, until the working-day counter reaches the
    /// limit on each side. Non-working days consume a calendar step without
    /// advancing the counter, so they inherit the offset of the last working
    /// day passed on the way out.
    pub fn initialize(
        headers: &[TimeIntervalColumnHeader],
        calendar: &BusinessCalendar,
        reference: DateTime<Utc>,
    ) -> Self {
        let reference_date = reference.date_naive();
        let limit = headers
            .iter()
            .filter_map(TimeIntervalColumnHeader::largest_finite_bound)
            .max()
            .unwrap_or(0) as i32;

        let mut days_to_working_days = BTreeMap::new();
        days_to_working_days.insert(0, 0);

        let mut working = 0;
        let mut day = 0;
        while working < limit {
            day += 1;
            if calendar.is_working_day(reference_date + Duration::days(i64::from(day))) {
                working += 1;
            }
            days_to_working_days.insert(day, working);
        }

        working = 0;
        day = 0;
        while working > -limit {
            day -= 1;
            if calendar.is_working_day(reference_date + Duration::days(i64::from(day))) {
                working -= 1;
            }
            days_to_working_days.insert(day, working);
        }

        debug!(
            reference = %reference_date,
            working_day_limit = limit,
            window = days_to_working_days.len(),
            "working day conversion window built"
        );

        Self {
            reference_date,
            header_bounds: headers
                .iter()
                .map(|h| (h.lower_age_limit(), h.upper_age_limit()))
                .collect(),
            days_to_working_days,
        }
    }

    /// Reference day the offsets are relative to.
    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Working-day offset reached after `days` calendar days. Offset 0 maps
    /// to 0; offsets outside the precomputed window pass through unchanged.
    pub fn convert_days_to_working_days(&self, days: i32) -> i32 {
        self.days_to_working_days.get(&days).copied().unwrap_or(days)
    }

    /// All calendar-day offsets inside the window that collapse onto
    /// `working_days` under the forward conversion; suitable for an
    /// `age IN (...)` predicate. Outside the window the set is the unchanged
    /// input itself.
    pub fn convert_working_days_to_days(&self, working_days: i32) -> BTreeSet<i32> {
        let days: BTreeSet<i32> = self
            .days_to_working_days
            .iter()
            .filter(|(_, &w)| w == working_days)
            .map(|(&d, _)| d)
            .collect();
        if days.is_empty() {
            BTreeSet::from([working_days])
        } else {
            days
        }
    }
}
