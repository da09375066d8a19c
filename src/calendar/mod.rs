//! # Business Calendar
//!
//! Working-day arithmetic for reports requested in working-day buckets: a
//! configurable calendar deciding whether a date is a working day, and a
//! converter translating between calendar-day and working-day offsets over
//! the bounded window implied by a report's column headers.

mod business_calendar;
mod converter;

pub use business_calendar::{BusinessCalendar, CalendarConfig, CustomHoliday};
pub use converter::WorkingDayConverter;
