use crate::consts::DEFAULT_LOCALE;
use crate::localize::{IcuLocalizer, LocaleError, Localizer, NamedFields};
use crate::normalize::{self, DateInput};
use crate::prelude::*;
use crate::{Instant, InvalidInput};

/// Output verbosity level, controlling which calendar fields are
/// spelled out by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Style {
    /// Zero-padded numeric fields only: `2023-06-15`
    #[display(fmt = "simple")]
    Simple,
    /// Localized month name, numeric day and year, no weekday
    #[display(fmt = "long")]
    Long,
    /// Localized weekday and month names
    #[display(fmt = "full")]
    Full,
}

impl Style {
    /// Resolves a caller-supplied style tag. Style is a convenience
    /// parameter, so unknown tags degrade to `Simple` instead of
    /// failing.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "long" => Self::Long,
            "full" => Self::Full,
            _ => Self::Simple,
        }
    }
}

/// Options for the generic [`Formatter::format`] entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Output verbosity, default `Simple`
    pub style: Style,
    /// Whether a zero-padded 24-hour `HH:MM:SS` is appended
    pub include_time: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            style: Style::Simple,
            include_time: false,
        }
    }
}

/// Error type for formatting operations.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// The input could not be resolved to a valid calendar instant.
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),

    /// The locale was rejected and the formatter is in strict mode, or
    /// the fallback locale itself failed.
    #[error("cannot format for locale {tag:?}: {source}")]
    Locale {
        /// The rejected tag
        tag: String,
        source: LocaleError,
    },
}

/// One entry in the fixed style matrix: which fields of a style are
/// spelled out by name.
#[derive(Debug, Clone, Copy)]
struct FormatSpec {
    style: Style,
    named_month: bool,
    named_weekday: bool,
}

const SIMPLE: FormatSpec = FormatSpec {
    style: Style::Simple,
    named_month: false,
    named_weekday: false,
};
const LONG: FormatSpec = FormatSpec {
    style: Style::Long,
    named_month: true,
    named_weekday: false,
};
const FULL: FormatSpec = FormatSpec {
    style: Style::Full,
    named_month: true,
    named_weekday: true,
};

/// Styles available for date-only output.
const DATE_SPECS: [FormatSpec; 3] = [SIMPLE, LONG, FULL];
/// Styles available once a time of day is included. There is no `long`
/// date-time style, so `long` resolves to `simple` here.
const DATE_TIME_SPECS: [FormatSpec; 2] = [SIMPLE, FULL];

/// Looks up the spec for a (style, content scope) pair. A style the
/// scope does not know resolves to the scope's `simple` entry.
fn resolve_spec(style: Style, include_time: bool) -> FormatSpec {
    let table: &[FormatSpec] = if include_time {
        &DATE_TIME_SPECS
    } else {
        &DATE_SPECS
    };
    table
        .iter()
        .find(|spec| spec.style == style)
        .copied()
        .unwrap_or(table[0])
}

/// Renders normalized instants as human-readable strings.
///
/// Stateless apart from its configuration; every call is independent
/// and idempotent given a stable host clock and locale database.
#[derive(Debug, Clone, Default)]
pub struct Formatter<L: Localizer = IcuLocalizer> {
    localizer: L,
    strict_locales: bool,
}

impl Formatter {
    /// A formatter using ICU4X locale data with lenient locale
    /// fallback.
    pub fn new() -> Self {
        Self {
            localizer: IcuLocalizer,
            strict_locales: false,
        }
    }
}

impl<L: Localizer> Formatter<L> {
    /// A formatter over a custom localization capability, e.g. a
    /// deterministic stub in tests.
    pub fn with_localizer(localizer: L) -> Self {
        Self {
            localizer,
            strict_locales: false,
        }
    }

    /// When strict, a rejected locale becomes [`FormatError::Locale`]
    /// instead of a logged retry with [`DEFAULT_LOCALE`].
    pub fn strict_locales(mut self, strict: bool) -> Self {
        self.strict_locales = strict;
        self
    }

    /// Normalizes `input` and renders it. `None` locale means
    /// [`DEFAULT_LOCALE`].
    ///
    /// # Errors
    /// [`FormatError::InvalidInput`] when normalization fails;
    /// [`FormatError::Locale`] only per the strict-locale policy.
    pub fn format(
        &self,
        input: impl Into<DateInput>,
        locale: Option<&str>,
        options: FormatOptions,
    ) -> Result<String, FormatError> {
        let instant = normalize::normalize(input.into())?;
        self.render(
            &instant,
            locale.unwrap_or(DEFAULT_LOCALE),
            options.style,
            options.include_time,
        )
    }

    /// Renders an already-normalized instant.
    ///
    /// # Errors
    /// [`FormatError::Locale`] per the strict-locale policy; never an
    /// error for an unknown style.
    pub fn render(
        &self,
        instant: &Instant,
        locale: &str,
        style: Style,
        include_time: bool,
    ) -> Result<String, FormatError> {
        let spec = resolve_spec(style, include_time);
        let date = if spec.named_month {
            let fields = if spec.named_weekday {
                NamedFields::WeekdayYearMonthDay
            } else {
                NamedFields::YearMonthDay
            };
            self.localized_date(instant, locale, fields)?
        } else {
            format!(
                "{:04}-{:02}-{:02}",
                instant.year(),
                instant.month(),
                instant.day()
            )
        };
        if include_time {
            Ok(format!(
                "{date} {:02}:{:02}:{:02}",
                instant.hour(),
                instant.minute(),
                instant.second()
            ))
        } else {
            Ok(date)
        }
    }

    fn localized_date(
        &self,
        instant: &Instant,
        locale: &str,
        fields: NamedFields,
    ) -> Result<String, FormatError> {
        match self.localizer.localized_date(instant, locale, fields) {
            Ok(rendered) => Ok(rendered),
            Err(source) if self.strict_locales => Err(FormatError::Locale {
                tag: locale.to_owned(),
                source,
            }),
            Err(source) => {
                tracing::warn!(locale, error = %source, "locale rejected, retrying with default");
                self.localizer
                    .localized_date(instant, DEFAULT_LOCALE, fields)
                    .map_err(|source| FormatError::Locale {
                        tag: DEFAULT_LOCALE.to_owned(),
                        source,
                    })
            }
        }
    }
}
