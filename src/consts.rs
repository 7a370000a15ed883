/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum valid hour (23:xx:xx)
pub const MAX_HOUR: u8 = 23;

/// Maximum valid minute
pub const MAX_MINUTE: u8 = 59;

/// Maximum valid second
pub const MAX_SECOND: u8 = 59;

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

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Month-first format separator (legacy US format)
pub const MONTH_FIRST_SEPARATOR: char = '/';

/// Field widths of the strict `YYYY-MM-DD` fast path
pub(crate) const ISO_FIELD_WIDTHS: [usize; 3] = [4, 2, 2];
/// Field widths of the strict `MM/DD/YYYY` fast path
pub(crate) const MONTH_FIRST_FIELD_WIDTHS: [usize; 3] = [2, 2, 4];

/// Locale tag used when the caller passes none, and retried after a
/// locale the localization backend rejects
pub const DEFAULT_LOCALE: &str = "en";
