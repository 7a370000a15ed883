use crate::consts::{
    DATE_SEPARATOR, ISO_FIELD_WIDTHS, MONTH_FIRST_FIELD_WIDTHS, MONTH_FIRST_SEPARATOR,
};
use crate::{Instant, InvalidInput};
use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// A raw date value as supplied by the caller, before normalization.
///
/// The four accepted shapes: the current wall-clock time, an already
/// normalized instant, a Unix-epoch millisecond count, and a textual
/// representation.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DateInput {
    /// The current local time, resolved when normalization runs
    #[default]
    Now,
    /// An already-normalized value, passed through unchanged
    Instant(Instant),
    /// Milliseconds since the Unix epoch (UTC), converted to local
    /// calendar fields. Non-finite values are rejected.
    TimestampMillis(f64),
    /// A textual date, parsed per [`parse_text`]
    Text(String),
}

impl From<Instant> for DateInput {
    fn from(instant: Instant) -> Self {
        Self::Instant(instant)
    }
}

impl From<i64> for DateInput {
    fn from(millis: i64) -> Self {
        Self::TimestampMillis(millis as f64)
    }
}

impl From<f64> for DateInput {
    fn from(millis: f64) -> Self {
        Self::TimestampMillis(millis)
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Resolves any accepted input shape to a local-calendar [`Instant`].
///
/// # Errors
/// Returns [`InvalidInput`] when the input cannot be resolved to a valid
/// calendar instant. There is no silent fallback here; only locale
/// resolution downstream is allowed to degrade.
pub(crate) fn normalize(input: DateInput) -> Result<Instant, InvalidInput> {
    match input {
        DateInput::Now => from_naive(Local::now().naive_local()),
        DateInput::Instant(instant) => Ok(instant),
        DateInput::TimestampMillis(millis) => from_timestamp_millis(millis),
        DateInput::Text(text) => parse_text(&text),
    }
}

/// Parses a textual date, trying in order: the strict `YYYY-MM-DD` fast
/// path, the strict `MM/DD/YYYY` fast path, then the generic free-form
/// cascade.
///
/// Both fast paths use local calendar semantics. A date-only ISO string
/// must never be read as UTC midnight: in a timezone behind UTC that
/// shifts the displayed day backwards.
///
/// # Errors
/// Returns [`InvalidInput`] when every strategy fails, or when a string
/// matches a fast-path shape but carries out-of-range fields (month 13
/// is an error, not a fall-through to the free-form parser).
pub(crate) fn parse_text(text: &str) -> Result<Instant, InvalidInput> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InvalidInput::Empty);
    }
    if let Some(fields) = split_fixed_width(trimmed, DATE_SEPARATOR, ISO_FIELD_WIDTHS) {
        let [year, month, day] = fields;
        return local_date(year, month, day);
    }
    if let Some(fields) = split_fixed_width(trimmed, MONTH_FIRST_SEPARATOR, MONTH_FIRST_FIELD_WIDTHS)
    {
        let [month, day, year] = fields;
        return local_date(year, month, day);
    }
    match parse_free_form(trimmed) {
        Some(parsed) => from_naive(parsed),
        None => Err(InvalidInput::Unparseable(text.to_owned())),
    }
}

/// Splits `text` on `separator` into exactly three all-ASCII-digit
/// fields of the given widths. `None` means the shape does not match
/// and the caller should try the next strategy.
fn split_fixed_width(text: &str, separator: char, widths: [usize; 3]) -> Option<[&str; 3]> {
    let mut parts = text.split(separator);
    let fields = [parts.next()?, parts.next()?, parts.next()?];
    if parts.next().is_some() {
        return None;
    }
    for (field, width) in fields.iter().zip(widths) {
        if field.len() != width || !field.bytes().all(|byte| byte.is_ascii_digit()) {
            return None;
        }
    }
    Some(fields)
}

/// Builds a local midnight instant from already shape-checked digit
/// fields. Range errors (month 13, February 30) surface here.
fn local_date(year: &str, month: &str, day: &str) -> Result<Instant, InvalidInput> {
    let year = year
        .parse::<u16>()
        .map_err(|_| InvalidInput::Unparseable(year.to_owned()))?;
    let month = month
        .parse::<u8>()
        .map_err(|_| InvalidInput::Unparseable(month.to_owned()))?;
    let day = day
        .parse::<u8>()
        .map_err(|_| InvalidInput::Unparseable(day.to_owned()))?;
    Instant::from_ymd(year, month, day)
}

/// Offset-aware formats accepted by the free-form cascade are converted
/// to local time; naive formats are taken as local directly.
const NAIVE_DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const NAIVE_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%B %d, %Y", "%d %B %Y"];

fn parse_free_form(text: &str) -> Option<NaiveDateTime> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&Local).naive_local());
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(text) {
        return Some(parsed.with_timezone(&Local).naive_local());
    }
    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(text, format) {
            return Some(parsed);
        }
    }
    for format in NAIVE_DATE_FORMATS {
        if let Ok(parsed) = NaiveDate::parse_from_str(text, format) {
            return Some(parsed.and_time(NaiveTime::MIN));
        }
    }
    None
}

fn from_timestamp_millis(millis: f64) -> Result<Instant, InvalidInput> {
    if !millis.is_finite() {
        return Err(InvalidInput::NonFiniteTimestamp(millis));
    }
    let utc = DateTime::from_timestamp_millis(millis as i64)
        .ok_or(InvalidInput::TimestampOutOfRange(millis))?;
    from_naive(utc.with_timezone(&Local).naive_local())
}

fn from_naive(value: NaiveDateTime) -> Result<Instant, InvalidInput> {
    let year = u16::try_from(value.year()).map_err(|_| InvalidInput::Year(value.year()))?;
    Instant::new(
        year,
        value.month() as u8,
        value.day() as u8,
        value.hour() as u8,
        value.minute() as u8,
        value.second() as u8,
    )
}
