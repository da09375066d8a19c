//! # Working-Day Rules
//!
//! Decides whether a calendar date is a working day under a fixed
//! configuration: optional weekend exclusion, optional German public
//! holidays (fixed-date and Easter-relative), and caller-supplied custom
//! holidays recurring every year.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{MonitorError, Result};

/// Fixed-date German public holidays as (month, day).
const GERMAN_FIXED_HOLIDAYS: [(u32, u32); 5] = [
    (1, 1),   // New Year
    (5, 1),   // Labour Day
    (10, 3),  // Day of German Unity
    (12, 25), // Christmas Day
    (12, 26), // Second Christmas Day
];

/// Easter-relative German public holidays as day offsets from Easter Sunday.
const GERMAN_EASTER_OFFSETS: [i64; 4] = [
    -2, // Good Friday
    1,  // Easter Monday
    39, // Ascension Day
    50, // Whit Monday
];

/// A yearly recurring holiday given as month and day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomHoliday {
    month: u32,
    day: u32,
}

impl CustomHoliday {
    /// Validated month/day pair. February 29 is accepted and matches only in
    /// leap years.
    pub fn new(month: u32, day: u32) -> Result<Self> {
        // Year 2000 is a leap year, so every representable recurring date
        // passes through it.
        if NaiveDate::from_ymd_opt(2000, month, day).is_none() {
            return Err(MonitorError::InvalidHoliday { month, day });
        }
        Ok(Self { month, day })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

/// Calendar configuration. Constructed once, immutable, reusable across many
/// conversions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// Treat Saturday and Sunday as non-working.
    pub exclude_weekends: bool,
    /// Treat German public holidays (fixed and Easter-relative) as
    /// non-working.
    pub german_holidays: bool,
    /// Additional yearly recurring holidays.
    pub custom_holidays: Vec<CustomHoliday>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            exclude_weekends: true,
            german_holidays: false,
            custom_holidays: Vec::new(),
        }
    }
}

/// Answers `is_working_day` for a fixed [`CalendarConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessCalendar {
    config: CalendarConfig,
}

impl BusinessCalendar {
    pub fn new(config: CalendarConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// A date is a working day unless it is an excluded weekend day, an
    /// enabled German holiday, or a custom holiday.
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        !(self.is_weekend(date) || self.is_german_holiday(date) || self.is_custom_holiday(date))
    }

    fn is_weekend(&self, date: NaiveDate) -> bool {
        self.config.exclude_weekends
            && matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    fn is_german_holiday(&self, date: NaiveDate) -> bool {
        if !self.config.german_holidays {
            return false;
        }
        if GERMAN_FIXED_HOLIDAYS.contains(&(date.month(), date.day())) {
            return true;
        }
        let easter = easter_sunday(date.year());
        GERMAN_EASTER_OFFSETS
            .iter()
            .any(|&offset| easter + Duration::days(offset) == date)
    }

    fn is_custom_holiday(&self, date: NaiveDate) -> bool {
        self.config
            .custom_holidays
            .iter()
            .any(|holiday| holiday.month == date.month() && holiday.day == date.day())
    }
}

/// Easter Sunday in the Gregorian calendar, via the anonymous
/// (Meeus/Jones/Butcher) algorithm.
pub fn easter_sunday(year: i32) -> NaiveDate {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    // The algorithm only ever yields March or April.
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
        .unwrap_or_else(|| unreachable!("easter algorithm yielded invalid date"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn german_calendar() -> BusinessCalendar {
        BusinessCalendar::new(CalendarConfig {
            exclude_weekends: true,
            german_holidays: true,
            custom_holidays: Vec::new(),
        })
    }

    #[test]
    fn test_easter_sunday_known_years() {
        assert_eq!(easter_sunday(2018), date(2018, 4, 1));
        assert_eq!(easter_sunday(2024), date(2024, 3, 31));
        assert_eq!(easter_sunday(2025), date(2025, 4, 20));
    }

    #[test]
    fn test_weekends_are_not_working_days() {
        let calendar = BusinessCalendar::new(CalendarConfig::default());
        assert!(!calendar.is_working_day(date(2018, 2, 10))); // Saturday
        assert!(!calendar.is_working_day(date(2018, 2, 11))); // Sunday
        assert!(calendar.is_working_day(date(2018, 2, 12))); // Monday
    }

    #[test]
    fn test_weekends_included_when_not_excluded() {
        let calendar = BusinessCalendar::new(CalendarConfig {
            exclude_weekends: false,
            ..CalendarConfig::default()
        });
        assert!(calendar.is_working_day(date(2018, 2, 10)));
        assert!(calendar.is_working_day(date(2018, 2, 11)));
    }

    #[test]
    fn test_fixed_german_holidays() {
        let calendar = german_calendar();
        assert!(!calendar.is_working_day(date(2018, 1, 1)));
        assert!(!calendar.is_working_day(date(2018, 5, 1)));
        assert!(!calendar.is_working_day(date(2018, 10, 3)));
        assert!(!calendar.is_working_day(date(2018, 12, 25)));
        assert!(!calendar.is_working_day(date(2018, 12, 26)));
        // Not a holiday, a Thursday.
        assert!(calendar.is_working_day(date(2018, 12, 27)));
    }

    #[test]
    fn test_german_holidays_disabled_by_default() {
        let calendar = BusinessCalendar::new(CalendarConfig::default());
        // May 1 2018 is a Tuesday; without German holidays it is a working day.
        assert!(calendar.is_working_day(date(2018, 5, 1)));
    }

    #[test]
    fn test_easter_relative_german_holidays_2018() {
        let calendar = german_calendar();
        assert!(!calendar.is_working_day(date(2018, 3, 30))); // Good Friday
        assert!(!calendar.is_working_day(date(2018, 4, 2))); // Easter Monday
        assert!(!calendar.is_working_day(date(2018, 5, 10))); // Ascension
        assert!(!calendar.is_working_day(date(2018, 5, 21))); // Whit Monday
        // Tuesday after Easter Monday is ordinary.
        assert!(calendar.is_working_day(date(2018, 4, 3)));
    }

    #[test]
    fn test_easter_relative_german_holidays_2024() {
        let calendar = german_calendar();
        assert!(!calendar.is_working_day(date(2024, 3, 29))); // Good Friday
        assert!(!calendar.is_working_day(date(2024, 4, 1))); // Easter Monday
        assert!(!calendar.is_working_day(date(2024, 5, 9))); // Ascension
        assert!(!calendar.is_working_day(date(2024, 5, 20))); // Whit Monday
    }

    #[test]
    fn test_custom_holidays_recur_yearly() {
        let calendar = BusinessCalendar::new(CalendarConfig {
            custom_holidays: vec![CustomHoliday::new(12, 24).unwrap()],
            ..CalendarConfig::default()
        });
        assert!(!calendar.is_working_day(date(2018, 12, 24))); // Monday
        assert!(!calendar.is_working_day(date(2019, 12, 24))); // Tuesday
    }

    #[test]
    fn test_calendar_config_json_round_trip() {
        let config = CalendarConfig {
            exclude_weekends: true,
            german_holidays: true,
            custom_holidays: vec![
                CustomHoliday::new(12, 24).unwrap(),
                CustomHoliday::new(12, 31).unwrap(),
            ],
        };

        let json = serde_json::to_string(&config).unwrap();
        let restored: CalendarConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, config);

        // Configuration arriving from an external source deserializes into
        // the same rules a locally built config would.
        let parsed: CalendarConfig = serde_json::from_str(
            r#"{
                "exclude_weekends": true,
                "german_holidays": false,
                "custom_holidays": [{"month": 12, "day": 24}]
            }"#,
        )
        .unwrap();
        let calendar = BusinessCalendar::new(parsed);
        assert!(!calendar.is_working_day(date(2018, 12, 24)));
        assert!(calendar.is_working_day(date(2018, 5, 1)));
    }

    #[test]
    fn test_invalid_custom_holiday_is_rejected() {
        let err = CustomHoliday::new(2, 30).unwrap_err();
        assert_eq!(err, MonitorError::InvalidHoliday { month: 2, day: 30 });
        assert!(CustomHoliday::new(13, 1).is_err());
        assert!(CustomHoliday::new(2, 29).is_ok());
    }
}
