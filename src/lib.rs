//! Calendar math and token-based date formatting for date pickers.
//!
//! Covers the pure logic a picker UI calls into: converting between
//! [`CalendarDate`] values and text through `yyyy`/`MM`/`dd`/`HH`/`mm`/`ss`
//! patterns, month boundary queries, filler-day computation for whole-week
//! calendar grids, and Sunday-first weekday labels per locale.
//!
//! The two picker entry points, [`format`] and [`parse`], never fail:
//! missing or invalid input degrades to an empty string or `None`, so UI
//! code can call them unguarded.

mod consts;
mod grid;
mod locale;
mod prelude;
#[cfg(test)]
mod test_utils;
mod types;

pub use consts::*;
pub use grid::{
    GridDay, MonthGrid, first_weekday, last_weekday, leading_filler_days, month_days,
    trailing_filler_days,
};
pub use locale::{Locale, weekday_labels};
pub use types::{Day, Hour, Minute, Month, Second, Year};

use crate::prelude::*;
use std::fmt;
use std::str::FromStr;

/// An exact calendar instant with seconds precision.
///
/// Values are immutable and validated on construction: a `CalendarDate`
/// holding February 30th or hour 24 cannot exist, so any value that was
/// built successfully is safe to format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: Year,
    month: Month,
    day: Day,
    hour: Hour,
    minute: Minute,
    second: Second,
}

/// Validation error for individual date-time components.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Invalid hour: {} (must be 0-{})", "_0", MAX_HOUR)]
    InvalidHour(u8),
    #[display(fmt = "Invalid minute: {} (must be 0-{})", "_0", MAX_MINUTE)]
    InvalidMinute(u8),
    #[display(fmt = "Invalid second: {} (must be 0-{})", "_0", MAX_SECOND)]
    InvalidSecond(u8),
}

impl std::error::Error for DateError {}

/// Error type for textual date conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Input matched none of the accepted layouts.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    /// A component was out of range.
    #[error(transparent)]
    Date(#[from] DateError),

    /// Empty input string.
    #[error("Empty date string")]
    EmptyInput,
}

impl CalendarDate {
    /// Creates a date at midnight from already-validated components.
    pub const fn new(year: Year, month: Month, day: Day) -> Self {
        Self {
            year,
            month,
            day,
            hour: Hour::ZERO,
            minute: Minute::ZERO,
            second: Second::ZERO,
        }
    }

    /// Returns the same date with the given time of day.
    pub const fn at(self, hour: Hour, minute: Minute, second: Second) -> Self {
        Self {
            year: self.year,
            month: self.month,
            day: self.day,
            hour,
            minute,
            second,
        }
    }

    /// Validates raw component values and builds a date.
    ///
    /// # Errors
    /// Returns the first failing component's `DateError`.
    pub fn from_parts(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, DateError> {
        Ok(Self {
            year: Year::new(year)?,
            month: Month::new(month)?,
            day: Day::new(day, year, month)?,
            hour: Hour::new(hour)?,
            minute: Minute::new(minute)?,
            second: Second::new(second)?,
        })
    }

    /// Raw `(year, month, day, hour, minute, second)` values.
    pub const fn to_parts(self) -> (u16, u8, u8, u8, u8, u8) {
        (
            self.year.get(),
            self.month.get(),
            self.day.get(),
            self.hour.get(),
            self.minute.get(),
            self.second.get(),
        )
    }

    /// Calendar year.
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Calendar month, 1-based (January = 1).
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Day of month.
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Hour of day (24-hour clock).
    pub const fn hour(&self) -> u8 {
        self.hour.get()
    }

    /// Minute of hour.
    pub const fn minute(&self) -> u8 {
        self.minute.get()
    }

    /// Second of minute.
    pub const fn second(&self) -> u8 {
        self.second.get()
    }
}

impl CalendarDate {
    /// Helper to parse u16 with better error messages
    fn parse_u16(s: &str) -> Result<u16, ParseError> {
        s.parse::<u16>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    /// Helper to parse u8 with better error messages
    fn parse_u8(s: &str) -> Result<u8, ParseError> {
        s.parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    /// Accepts `yyyy-MM-dd`, optionally followed by a time of day as
    /// ` HH:mm:ss` or `THH:mm:ss`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let (date_part, time_part) = match trimmed.find([' ', 'T']) {
            Some(at) => (&trimmed[..at], Some(&trimmed[at + 1..])),
            None => (trimmed, None),
        };

        let date_fields: Vec<&str> = date_part.split(DATE_SEPARATOR).collect();
        if date_fields.len() != 3 {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        }
        let year = Self::parse_u16(date_fields[0])?;
        let month = Self::parse_u8(date_fields[1])?;
        let day = Self::parse_u8(date_fields[2])?;

        let (hour, minute, second) = match time_part {
            Some(time) => {
                let time_fields: Vec<&str> = time.split(TIME_SEPARATOR).collect();
                if time_fields.len() != 3 {
                    return Err(ParseError::InvalidFormat(s.to_owned()));
                }
                (
                    Self::parse_u8(time_fields[0])?,
                    Self::parse_u8(time_fields[1])?,
                    Self::parse_u8(time_fields[2])?,
                )
            }
            None => (0, 0, 0),
        };

        Ok(Self::from_parts(year, month, day, hour, minute, second)?)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year.get(),
            self.month.get(),
            self.day.get(),
            self.hour.get(),
            self.minute.get(),
            self.second.get()
        )
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Input accepted by [`format`] and [`parse`].
///
/// The picker hands over whatever it currently holds: nothing, the raw
/// text of its input field, or an already-structured date. Matching on an
/// explicit union replaces sniffing the value's run-time type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DateInput {
    /// No value.
    #[default]
    Empty,
    /// A textual date.
    Text(String),
    /// An already-structured date.
    Date(CalendarDate),
}

impl From<CalendarDate> for DateInput {
    fn from(date: CalendarDate) -> Self {
        Self::Date(date)
    }
}

impl From<Option<CalendarDate>> for DateInput {
    fn from(date: Option<CalendarDate>) -> Self {
        date.map_or(Self::Empty, Self::Date)
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

/// Formats a date input through a token pattern.
///
/// Every occurrence of `yyyy`, `MM`, `dd`, `HH`, `mm` and `ss` in
/// `pattern` is substituted; all other text passes through unchanged.
/// Month, day and time fields are zero-padded to two digits, the year is
/// written at its natural width. Tokens are matched case-sensitively, in
/// exactly the listed forms.
///
/// Empty input, and text that fails conversion, format to an empty
/// string: this function never fails.
pub fn format(input: impl Into<DateInput>, pattern: &str) -> String {
    let date = match input.into() {
        DateInput::Empty => return String::new(),
        DateInput::Text(text) => match text.parse::<CalendarDate>() {
            Ok(date) => date,
            Err(_) => return String::new(),
        },
        DateInput::Date(date) => date,
    };

    pattern
        .replace(TOKEN_YEAR, &date.year().to_string())
        .replace(TOKEN_MONTH, &format!("{:02}", date.month()))
        .replace(TOKEN_DAY, &format!("{:02}", date.day()))
        .replace(TOKEN_HOUR, &format!("{:02}", date.hour()))
        .replace(TOKEN_MINUTE, &format!("{:02}", date.minute()))
        .replace(TOKEN_SECOND, &format!("{:02}", date.second()))
}

/// Parses a date input against a token pattern.
///
/// `Date` inputs pass through unchanged and empty input yields `None`.
/// Text is read positionally: each token's field is taken from the input
/// at the byte offset the token occupies in `pattern`, which assumes the
/// input's separators mirror the pattern's literal text. Fields whose
/// token is absent from the pattern default to zero and are range-checked
/// with the rest, so a composed value like month 13 — or a pattern with
/// no `dd` at all — yields `None` rather than an error.
pub fn parse(input: impl Into<DateInput>, pattern: &str) -> Option<CalendarDate> {
    let text = match input.into() {
        DateInput::Empty => return None,
        DateInput::Date(date) => return Some(date),
        DateInput::Text(text) => text,
    };
    if text.is_empty() {
        return None;
    }

    let year = token_field(&text, pattern, TOKEN_YEAR)?;
    let month = u8::try_from(token_field(&text, pattern, TOKEN_MONTH)?).ok()?;
    let day = u8::try_from(token_field(&text, pattern, TOKEN_DAY)?).ok()?;
    let hour = u8::try_from(token_field(&text, pattern, TOKEN_HOUR)?).ok()?;
    let minute = u8::try_from(token_field(&text, pattern, TOKEN_MINUTE)?).ok()?;
    let second = u8::try_from(token_field(&text, pattern, TOKEN_SECOND)?).ok()?;

    CalendarDate::from_parts(year, month, day, hour, minute, second).ok()
}

/// Reads one token's field out of `text` at the token's offset in
/// `pattern`. A token missing from the pattern defaults its field to 0;
/// a missing or non-numeric substring at the offset kills the parse.
fn token_field(text: &str, pattern: &str, token: &str) -> Option<u16> {
    match pattern.find(token) {
        None => Some(0),
        Some(at) => text
            .get(at..at + token.len())
            .and_then(|raw| raw.parse::<u16>().ok()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, datetime};

    const FULL_PATTERN: &str = "yyyy-MM-dd HH:mm:ss";

    #[test]
    fn test_format_empty_input() {
        assert_eq!(format(DateInput::Empty, FULL_PATTERN), "");
        assert_eq!(format(None::<CalendarDate>, "yyyy"), "");
        assert_eq!(format(DateInput::Empty, ""), "");
    }

    #[test]
    fn test_format_structured_date() {
        let d = datetime(2024, 3, 5, 7, 8, 9);
        assert_eq!(format(d, FULL_PATTERN), "2024-03-05 07:08:09");
        assert_eq!(format(d, "yyyy/MM/dd"), "2024/03/05");
        assert_eq!(format(d, "HH:mm"), "07:08");
    }

    #[test]
    fn test_format_textual_input() {
        assert_eq!(format("2024-03-05", "dd.MM.yyyy"), "05.03.2024");
        assert_eq!(
            format("2024-03-05 07:08:09", FULL_PATTERN),
            "2024-03-05 07:08:09"
        );
    }

    #[test]
    fn test_format_invalid_text_degrades_to_empty() {
        assert_eq!(format("2024-13-05", FULL_PATTERN), "");
        assert_eq!(format("2024-02-30", "yyyy-MM-dd"), "");
        assert_eq!(format("not a date", "yyyy"), "");
    }

    #[test]
    fn test_format_empty_pattern() {
        assert_eq!(format(date(2024, 3, 5), ""), "");
    }

    #[test]
    fn test_format_passes_literals_through() {
        assert_eq!(format(date(2024, 3, 5), "day: dd!"), "day: 05!");
    }

    #[test]
    fn test_format_replaces_every_occurrence() {
        assert_eq!(format(date(2024, 3, 5), "MM MM"), "03 03");
        assert_eq!(format(date(2024, 3, 5), "yyyy-yyyy"), "2024-2024");
    }

    #[test]
    fn test_format_year_natural_width() {
        assert_eq!(format(date(800, 1, 2), "yyyy-MM-dd"), "800-01-02");
        assert_eq!(format(date(800, 1, 2), "yyyy"), "800");
    }

    #[test]
    fn test_format_tokens_are_case_sensitive() {
        // Unrecognized casings are literal text
        assert_eq!(format(date(2024, 3, 5), "YYYY.DD.hh"), "YYYY.DD.hh");
        // mm is minutes, MM is months
        let d = datetime(2024, 3, 5, 0, 30, 0);
        assert_eq!(format(d, "mm"), "30");
        assert_eq!(format(d, "MM"), "03");
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse("", FULL_PATTERN), None);
        assert_eq!(parse(DateInput::Empty, FULL_PATTERN), None);
        assert_eq!(parse(None::<CalendarDate>, "yyyy"), None);
    }

    #[test]
    fn test_parse_structured_passthrough() {
        let d = datetime(2024, 3, 5, 7, 8, 9);
        assert_eq!(parse(d, FULL_PATTERN), Some(d));
        assert_eq!(parse(Some(d), ""), Some(d));
    }

    #[test]
    fn test_parse_full_pattern() {
        let parsed = parse("2024-03-05 07:08:09", FULL_PATTERN).unwrap();
        assert_eq!(parsed.to_parts(), (2024, 3, 5, 7, 8, 9));
    }

    #[test]
    fn test_parse_date_only_pattern_zeroes_time() {
        let parsed = parse("2024-03-05", "yyyy-MM-dd").unwrap();
        assert_eq!(parsed, date(2024, 3, 5));
        assert_eq!(parsed.hour(), 0);
    }

    #[test]
    fn test_round_trip() {
        let d = datetime(2024, 2, 29, 23, 59, 58);
        let text = format(d, FULL_PATTERN);
        assert_eq!(text, "2024-02-29 23:59:58");
        assert_eq!(parse(text, FULL_PATTERN), Some(d));
    }

    #[test]
    fn test_parse_rejects_out_of_range_composites() {
        assert_eq!(parse("2024-13-05", "yyyy-MM-dd"), None);
        assert_eq!(parse("2024-01-32", "yyyy-MM-dd"), None);
        assert_eq!(parse("2024-02-30", "yyyy-MM-dd"), None);
        assert_eq!(parse("2023-02-29", "yyyy-MM-dd"), None);
        assert_eq!(parse("2024-03-05 24:00:00", FULL_PATTERN), None);
        assert_eq!(parse("2024-03-05 12:60:00", FULL_PATTERN), None);
    }

    #[test]
    fn test_parse_missing_date_tokens_yields_none() {
        // Fields without a token default to 0, and year/month/day 0 never
        // validate
        assert_eq!(parse("07:08:09", "HH:mm:ss"), None);
        assert_eq!(parse("2024", "yyyy"), None);
        assert_eq!(parse("2024-03", "yyyy-MM"), None);
    }

    #[test]
    fn test_parse_positional_custom_layout() {
        let parsed = parse("05.03.2024", "dd.MM.yyyy").unwrap();
        assert_eq!(parsed, date(2024, 3, 5));

        let parsed = parse("2024/03/05 07h", "yyyy/MM/dd HHh").unwrap();
        assert_eq!(parsed.to_parts(), (2024, 3, 5, 7, 0, 0));
    }

    #[test]
    fn test_parse_misaligned_input_is_rejected() {
        // Unpadded fields shift every later offset; the strict field read
        // refuses the garbage instead of inventing a date
        assert_eq!(parse("2024-3-5", "yyyy-MM-dd"), None);
        assert_eq!(parse("abcd-03-05", "yyyy-MM-dd"), None);
    }

    #[test]
    fn test_parse_short_text_is_rejected() {
        assert_eq!(parse("202", "yyyy"), None);
        assert_eq!(parse("2024-03-0", "yyyy-MM-dd"), None);
    }

    #[test]
    fn test_parse_multibyte_text_is_rejected() {
        // Fullwidth digits are three bytes each; the positional read lands
        // off a char boundary and the parse dies cleanly
        assert_eq!(parse("２０２４", "yyyy"), None);
    }

    #[test]
    fn test_from_str_layouts() {
        let d: CalendarDate = "2024-03-05".parse().unwrap();
        assert_eq!(d, date(2024, 3, 5));

        let d: CalendarDate = "2024-03-05 07:08:09".parse().unwrap();
        assert_eq!(d, datetime(2024, 3, 5, 7, 8, 9));

        let d: CalendarDate = "2024-03-05T07:08:09".parse().unwrap();
        assert_eq!(d, datetime(2024, 3, 5, 7, 8, 9));

        let d: CalendarDate = "  2024-03-05  ".parse().unwrap();
        assert_eq!(d, date(2024, 3, 5));
    }

    #[test]
    fn test_from_str_errors() {
        assert!(matches!(
            "".parse::<CalendarDate>(),
            Err(ParseError::EmptyInput)
        ));
        assert!(matches!(
            "2024-03".parse::<CalendarDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2024-03-05 07:08".parse::<CalendarDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2024-XX-05".parse::<CalendarDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2024-13-05".parse::<CalendarDate>(),
            Err(ParseError::Date(DateError::InvalidMonth(13)))
        ));
        assert!(matches!(
            "2024-02-30".parse::<CalendarDate>(),
            Err(ParseError::Date(DateError::InvalidDay { .. }))
        ));
    }

    #[test]
    fn test_display_canonical_form() {
        assert_eq!(
            datetime(800, 1, 2, 3, 4, 5).to_string(),
            "0800-01-02 03:04:05"
        );
        assert_eq!(date(2024, 12, 31).to_string(), "2024-12-31 00:00:00");
    }

    #[test]
    fn test_constructors() {
        let d = CalendarDate::new(
            Year::new(2024).unwrap(),
            Month::new(3).unwrap(),
            Day::new(5, 2024, 3).unwrap(),
        );
        assert_eq!(d, date(2024, 3, 5));

        let with_time = d.at(
            Hour::new(7).unwrap(),
            Minute::new(8).unwrap(),
            Second::new(9).unwrap(),
        );
        assert_eq!(with_time, datetime(2024, 3, 5, 7, 8, 9));
        // `at` leaves the calendar date untouched
        assert_eq!((with_time.year(), with_time.month(), with_time.day()), (2024, 3, 5));
    }

    #[test]
    fn test_ordering_is_chronological() {
        assert!(date(2023, 12, 31) < date(2024, 1, 1));
        assert!(date(2024, 3, 5) < date(2024, 3, 6));
        assert!(date(2024, 3, 5) < datetime(2024, 3, 5, 0, 0, 1));
        assert!(datetime(2024, 3, 5, 7, 59, 59) < datetime(2024, 3, 5, 8, 0, 0));
    }

    #[test]
    fn test_serde_string_format() {
        let d = datetime(2024, 3, 5, 7, 8, 9);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#""2024-03-05 07:08:09""#);

        let parsed: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(d, parsed);
    }

    #[test]
    fn test_serde_rejects_invalid_dates() {
        let result: Result<CalendarDate, _> = serde_json::from_str(r#""2024-02-30""#);
        assert!(result.is_err());

        let result: Result<CalendarDate, _> = serde_json::from_str(r#""2024-03-05 25:00:00""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_date_input_conversions() {
        let d = date(2024, 3, 5);
        assert_eq!(DateInput::from(d), DateInput::Date(d));
        assert_eq!(DateInput::from(Some(d)), DateInput::Date(d));
        assert_eq!(DateInput::from(None::<CalendarDate>), DateInput::Empty);
        assert_eq!(
            DateInput::from("2024"),
            DateInput::Text("2024".to_owned())
        );
        assert_eq!(
            DateInput::from(String::from("2024")),
            DateInput::Text("2024".to_owned())
        );
        assert_eq!(DateInput::default(), DateInput::Empty);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DateError::InvalidMonth(13).to_string(),
            "Invalid month: 13 (must be 1-12)"
        );
        assert_eq!(
            DateError::InvalidDay {
                year: 2024,
                month: 2,
                day: 30
            }
            .to_string(),
            "Invalid day 30 for month 2024-02"
        );
        assert_eq!(
            ParseError::EmptyInput.to_string(),
            "Empty date string"
        );
    }

    #[test]
    fn test_constants() {
        assert_eq!(MAX_YEAR, 9999);
    }
}
