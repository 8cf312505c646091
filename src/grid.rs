//! Month boundaries and filler-day math for whole-week calendar grids.
//!
//! Every month parameter in this module is a zero-based index
//! (January = 0), the numbering a grid iterates with. The calendar month
//! type [`crate::Month`] stays 1-based; the two never mix.

use crate::consts::{DAYS_PER_WEEK, MAX_YEAR, MONTHS_PER_YEAR, SATURDAY};
use crate::types::{civil_from_days, days_from_civil, weekday_from_days};

/// Epoch day of the last day of `month`: the day before the 1st of the
/// following month.
fn last_day_epoch(year: u16, month: u8) -> i64 {
    let (next_year, next_month) = if month + 1 == MONTHS_PER_YEAR {
        (i32::from(year) + 1, 1)
    } else {
        (i32::from(year), month + 2)
    };
    days_from_civil(next_year, next_month, 1) - 1
}

/// Number of days in the zero-based `month` of `year`.
pub fn month_days(year: u16, month: u8) -> u8 {
    debug_assert!(year <= MAX_YEAR && month < MONTHS_PER_YEAR);
    civil_from_days(last_day_epoch(year, month)).2
}

/// Weekday index (Sunday = 0) of the 1st of the zero-based `month`.
pub fn first_weekday(year: u16, month: u8) -> u8 {
    debug_assert!(year <= MAX_YEAR && month < MONTHS_PER_YEAR);
    weekday_from_days(days_from_civil(i32::from(year), month + 1, 1))
}

/// Weekday index (Sunday = 0) of the last day of the zero-based `month`.
pub fn last_weekday(year: u16, month: u8) -> u8 {
    debug_assert!(year <= MAX_YEAR && month < MONTHS_PER_YEAR);
    weekday_from_days(last_day_epoch(year, month))
}

/// Day numbers borrowed from the previous month to left-pad the grid so
/// the 1st lands in column `first_weekday`.
///
/// Returns the trailing `first_weekday` day numbers of the previous
/// month in ascending order; empty when the month already starts on
/// Sunday.
pub fn leading_filler_days(year: u16, month: u8, first_weekday: u8) -> Vec<u8> {
    debug_assert!(year >= 1 && month < MONTHS_PER_YEAR && first_weekday < DAYS_PER_WEEK);
    let prev_month_days = if month == 0 {
        month_days(year - 1, MONTHS_PER_YEAR - 1)
    } else {
        month_days(year, month - 1)
    };
    (0..first_weekday)
        .map(|offset| prev_month_days - first_weekday + 1 + offset)
        .collect()
}

/// Day numbers `1..=(6 - last_weekday)` borrowed from the next month to
/// right-pad the final week row to seven columns; empty when the month
/// already ends on Saturday.
pub fn trailing_filler_days(year: u16, month: u8, last_weekday: u8) -> Vec<u8> {
    debug_assert!(year <= MAX_YEAR && month < MONTHS_PER_YEAR && last_weekday < DAYS_PER_WEEK);
    (1..=SATURDAY - last_weekday).collect()
}

/// One cell of a [`MonthGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridDay {
    /// Trailing day of the previous month, left-padding the first week.
    PrevMonth(u8),
    /// Day of the month the grid was built for.
    InMonth(u8),
    /// Leading day of the next month, right-padding the last week.
    NextMonth(u8),
}

impl GridDay {
    /// Day-of-month number shown in this cell.
    pub const fn day(self) -> u8 {
        match self {
            Self::PrevMonth(day) | Self::InMonth(day) | Self::NextMonth(day) => day,
        }
    }

    /// True for cells that belong to the month itself.
    pub const fn in_month(self) -> bool {
        matches!(self, Self::InMonth(_))
    }
}

/// A month laid out as whole calendar weeks: filler days borrowed from
/// the previous month, every day of the month itself, then filler days
/// from the next month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    leading: Vec<u8>,
    month_len: u8,
    trailing: Vec<u8>,
}

impl MonthGrid {
    /// Builds the grid for the zero-based `month` of `year`.
    pub fn new(year: u16, month: u8) -> Self {
        let leading = leading_filler_days(year, month, first_weekday(year, month));
        let trailing = trailing_filler_days(year, month, last_weekday(year, month));
        Self {
            leading,
            month_len: month_days(year, month),
            trailing,
        }
    }

    /// Previous-month day numbers padding the first week.
    pub fn leading(&self) -> &[u8] {
        &self.leading
    }

    /// Number of days in the month itself.
    pub const fn month_len(&self) -> u8 {
        self.month_len
    }

    /// Next-month day numbers padding the last week.
    pub fn trailing(&self) -> &[u8] {
        &self.trailing
    }

    /// Number of whole week rows.
    pub fn weeks(&self) -> usize {
        (self.leading.len() + usize::from(self.month_len) + self.trailing.len())
            / usize::from(DAYS_PER_WEEK)
    }

    /// All cells in display order, Sunday-first rows.
    pub fn cells(&self) -> impl Iterator<Item = GridDay> + '_ {
        self.leading
            .iter()
            .copied()
            .map(GridDay::PrevMonth)
            .chain((1..=self.month_len).map(GridDay::InMonth))
            .chain(self.trailing.iter().copied().map(GridDay::NextMonth))
    }
}
