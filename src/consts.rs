/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Upper bound for a day-of-month value in any month
pub const MAX_DAY: u8 = 31;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Last hour of the day (24-hour clock)
pub const MAX_HOUR: u8 = 23;

/// Last minute of the hour
pub const MAX_MINUTE: u8 = 59;

/// Last second of the minute
pub const MAX_SECOND: u8 = 59;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Months per year; grid month indices run `0..MONTHS_PER_YEAR`
pub const MONTHS_PER_YEAR: u8 = 12;

/// Columns in a calendar grid row
pub const DAYS_PER_WEEK: u8 = 7;

/// Weekday index of Saturday (Sunday = 0)
pub const SATURDAY: u8 = 6;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Year token, emitted at natural width
pub const TOKEN_YEAR: &str = "yyyy";
/// Month token, zero-padded to two digits
pub const TOKEN_MONTH: &str = "MM";
/// Day-of-month token, zero-padded to two digits
pub const TOKEN_DAY: &str = "dd";
/// Hour token (24-hour clock), zero-padded to two digits
pub const TOKEN_HOUR: &str = "HH";
/// Minute token, zero-padded to two digits
pub const TOKEN_MINUTE: &str = "mm";
/// Second token, zero-padded to two digits
pub const TOKEN_SECOND: &str = "ss";

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Time component separator
pub const TIME_SEPARATOR: char = ':';

/// Locale tag whose labels are served when a requested locale is unknown
pub const DEFAULT_LOCALE: &str = "zh-CN";
/// Locale tag for the English label set
pub const LOCALE_EN_US: &str = "en-US";

/// Sunday-first weekday labels for `zh-CN` (single characters)
pub const WEEKDAY_LABELS_ZH_CN: [&str; 7] = ["日", "一", "二", "三", "四", "五", "六"];

/// Sunday-first weekday labels for `en-US` (three-letter abbreviations)
pub const WEEKDAY_LABELS_EN_US: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
