//! Shorthand constructors shared by the unit tests.

use crate::CalendarDate;

/// Date at midnight. Panics on invalid input; test-only.
pub fn date(year: u16, month: u8, day: u8) -> CalendarDate {
    CalendarDate::from_parts(year, month, day, 0, 0, 0).unwrap()
}

/// Full date-time. Panics on invalid input; test-only.
pub fn datetime(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> CalendarDate {
    CalendarDate::from_parts(year, month, day, hour, minute, second).unwrap()
}
