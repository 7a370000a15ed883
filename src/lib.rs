//! Turn a date — an [`Instant`], an epoch-millisecond count, or a
//! string — into a human-readable string for a locale and style.
//!
//! ```
//! use datefmt::{format_date_long, DateInput};
//!
//! let s = format_date_long("2023-06-15", Some("en")).unwrap();
//! assert_eq!(s, "June 15, 2023");
//!
//! // Omitted input means "now"; omitted locale means "en".
//! let today = datefmt::format_date_simple(DateInput::Now, None).unwrap();
//! assert_eq!(today.len(), 10);
//! ```

mod consts;
mod format;
mod instant;
mod localize;
mod normalize;
mod prelude;
mod types;

pub use consts::*;
pub use format::{FormatError, FormatOptions, Formatter, Style};
pub use instant::Instant;
pub use localize::{IcuLocalizer, LocaleError, Localizer, NamedFields};
pub use normalize::DateInput;
pub use types::{Day, Month, Year};

/// Error type for input normalization.
///
/// Normalization fails loudly: none of these are ever swallowed or
/// silently defaulted. Only locale resolution downstream is allowed to
/// fall back.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidInput {
    /// A string no parse strategy could resolve; carries the input.
    #[error("invalid date input: {0:?}")]
    Unparseable(String),

    /// An empty or all-whitespace date string.
    #[error("empty date string")]
    Empty,

    /// Year outside 1..=9999.
    #[error("invalid year: {0} (must be 1-9999)")]
    Year(i32),

    /// Month outside 1..=12.
    #[error("invalid month: {0} (must be 1-12)")]
    Month(u8),

    /// Day outside the month's range, leap years accounted for.
    #[error("invalid day {day} for month {year:04}-{month:02}")]
    Day { year: u16, month: u8, day: u8 },

    /// Time-of-day field outside 24-hour range.
    #[error("invalid time {hour:02}:{minute:02}:{second:02}")]
    Time { hour: u8, minute: u8, second: u8 },

    /// A NaN or infinite millisecond timestamp.
    #[error("non-finite timestamp: {0}")]
    NonFiniteTimestamp(f64),

    /// A millisecond timestamp outside the representable range.
    #[error("timestamp out of range: {0} ms")]
    TimestampOutOfRange(f64),
}

/// Resolves any accepted input shape to a local-calendar [`Instant`].
///
/// Pass [`DateInput::Now`] for the current local time. Strings take the
/// strict `YYYY-MM-DD` and `MM/DD/YYYY` fast paths (local calendar
/// semantics) before the generic free-form parser.
///
/// # Errors
/// Returns [`InvalidInput`] when the input cannot be resolved to a
/// valid calendar instant.
pub fn normalize(input: impl Into<DateInput>) -> Result<Instant, InvalidInput> {
    normalize::normalize(input.into())
}

/// Generic formatting entry point: normalizes `input` and renders it
/// per `options`. `None` locale means [`DEFAULT_LOCALE`].
///
/// # Errors
/// Returns [`FormatError::InvalidInput`] when the input is invalid.
/// Locale problems fall back to [`DEFAULT_LOCALE`] and do not error.
pub fn format(
    input: impl Into<DateInput>,
    locale: Option<&str>,
    options: FormatOptions,
) -> Result<String, FormatError> {
    Formatter::new().format(input, locale, options)
}

/// Formats a date as zero-padded `YYYY-MM-DD`.
///
/// # Errors
/// Returns [`FormatError::InvalidInput`] when the input is invalid.
pub fn format_date_simple(
    input: impl Into<DateInput>,
    locale: Option<&str>,
) -> Result<String, FormatError> {
    format(
        input,
        locale,
        FormatOptions {
            style: Style::Simple,
            include_time: false,
        },
    )
}

/// Formats a date with a localized month name and no weekday, e.g.
/// `June 15, 2023`.
///
/// # Errors
/// Returns [`FormatError::InvalidInput`] when the input is invalid.
pub fn format_date_long(
    input: impl Into<DateInput>,
    locale: Option<&str>,
) -> Result<String, FormatError> {
    format(
        input,
        locale,
        FormatOptions {
            style: Style::Long,
            include_time: false,
        },
    )
}

/// Formats a date with localized weekday and month names, e.g.
/// `Thursday, June 15, 2023`.
///
/// # Errors
/// Returns [`FormatError::InvalidInput`] when the input is invalid.
pub fn format_date_full(
    input: impl Into<DateInput>,
    locale: Option<&str>,
) -> Result<String, FormatError> {
    format(
        input,
        locale,
        FormatOptions {
            style: Style::Full,
            include_time: false,
        },
    )
}

/// Formats a date and time as `YYYY-MM-DD HH:MM:SS`.
///
/// # Errors
/// Returns [`FormatError::InvalidInput`] when the input is invalid.
pub fn format_date_time_simple(
    input: impl Into<DateInput>,
    locale: Option<&str>,
) -> Result<String, FormatError> {
    format(
        input,
        locale,
        FormatOptions {
            style: Style::Simple,
            include_time: true,
        },
    )
}

/// Formats a date and time in the full style, e.g.
/// `Thursday, June 15, 2023 14:30:45`.
///
/// # Errors
/// Returns [`FormatError::InvalidInput`] when the input is invalid.
pub fn format_date_time_full(
    input: impl Into<DateInput>,
    locale: Option<&str>,
) -> Result<String, FormatError> {
    format(
        input,
        locale,
        FormatOptions {
            style: Style::Full,
            include_time: true,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn june_15() -> Instant {
        Instant::new(2023, 6, 15, 14, 30, 45).unwrap()
    }

    #[test]
    fn test_reference_scenario() {
        // (2023, June, 15, 14:30:45) across the convenience surface.
        assert_eq!(format_date_simple(june_15(), None).unwrap(), "2023-06-15");
        assert_eq!(
            format_date_time_simple(june_15(), None).unwrap(),
            "2023-06-15 14:30:45"
        );

        let full = format_date_full(june_15(), Some("en")).unwrap();
        for token in ["Thursday", "June", "15", "2023"] {
            assert!(full.contains(token), "missing {token:?} in {full:?}");
        }

        let full_time = format_date_time_full(june_15(), Some("en")).unwrap();
        assert!(full_time.ends_with("14:30:45"), "got {full_time:?}");
    }

    #[test]
    fn test_long_style_en() {
        assert_eq!(
            format_date_long(june_15(), Some("en")).unwrap(),
            "June 15, 2023"
        );
    }

    #[test]
    fn test_us_string_to_international_order() {
        assert_eq!(
            format_date_simple("12/25/2022", None).unwrap(),
            "2022-12-25"
        );
    }

    #[test]
    fn test_simple_round_trips_through_normalize() {
        let rendered = format_date_simple(june_15(), None).unwrap();
        let back = normalize(rendered).unwrap();
        assert_eq!(back.year(), june_15().year());
        assert_eq!(back.month(), june_15().month());
        assert_eq!(back.day(), june_15().day());
    }

    #[test]
    fn test_local_date_invariant() {
        let instant = normalize("2023-06-15").unwrap();
        assert_eq!(
            (instant.year(), instant.month(), instant.day()),
            (2023, 6, 15)
        );
    }

    #[test]
    fn test_no_time_without_flag() {
        for style in [Style::Simple, Style::Long, Style::Full] {
            let rendered = format(
                june_15(),
                Some("en"),
                FormatOptions {
                    style,
                    include_time: false,
                },
            )
            .unwrap();
            assert!(!rendered.contains("14:30:45"), "got {rendered:?}");
            assert!(!rendered.contains(':'), "got {rendered:?}");
        }
    }

    #[test]
    fn test_unknown_style_tag_behaves_like_simple() {
        let bogus = format(
            june_15(),
            Some("en"),
            FormatOptions {
                style: Style::from_tag("bogus"),
                include_time: false,
            },
        )
        .unwrap();
        assert_eq!(bogus, format_date_simple(june_15(), Some("en")).unwrap());
    }

    #[test]
    fn test_unknown_locale_falls_back_without_error() {
        assert!(format_date_full(june_15(), Some("zz-ZZ")).is_ok());
        let rendered = format_date_long(june_15(), Some("not a locale!")).unwrap();
        assert_eq!(rendered, "June 15, 2023");
    }

    #[test]
    fn test_strict_locales_reject_malformed_tags() {
        let result = Formatter::new()
            .strict_locales(true)
            .render(&june_15(), "not a locale!", Style::Long, false);
        assert!(matches!(result, Err(FormatError::Locale { .. })));
    }

    #[test]
    fn test_invalid_inputs_error() {
        assert!(matches!(
            normalize("not-a-date"),
            Err(InvalidInput::Unparseable(_))
        ));
        assert!(matches!(
            normalize(f64::NAN),
            Err(InvalidInput::NonFiniteTimestamp(_))
        ));
        assert!(matches!(
            format_date_simple("not-a-date", None),
            Err(FormatError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_now_defaults() {
        let rendered = format_date_simple(DateInput::Now, None).unwrap();
        assert_eq!(rendered.len(), 10);
        assert_eq!(&rendered[4..5], "-");
        assert_eq!(&rendered[7..8], "-");

        let rendered = format_date_time_simple(DateInput::Now, None).unwrap();
        assert_eq!(rendered.len(), 19);
        assert_eq!(&rendered[10..11], " ");
    }

    #[test]
    fn test_timestamp_input() {
        // 2023-06-15T14:30:45Z in epoch millis; local fields depend on
        // the host timezone, so assert shape rather than exact values.
        let rendered = format_date_time_simple(1_686_839_445_000_i64, None).unwrap();
        assert_eq!(rendered.len(), 19);
        assert!(rendered.starts_with("2023-06-1"), "got {rendered:?}");
    }

    #[test]
    fn test_spanish_long_date() {
        let rendered = format_date_long(june_15(), Some("es")).unwrap();
        assert!(rendered.contains("junio"), "got {rendered:?}");
        assert!(rendered.contains("2023"), "got {rendered:?}");
    }
}
