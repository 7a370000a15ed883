use crate::Instant;
use icu::calendar::Date;
use icu::datetime::DateTimeFormatter;
use icu::datetime::fieldsets::{YMD, YMDE};
use icu::locale::Locale;

/// Which calendar fields a named-date rendering spells out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedFields {
    /// Month name with numeric day and year, no weekday
    YearMonthDay,
    /// Weekday and month names with numeric day and year
    WeekdayYearMonthDay,
}

/// Error type for locale-aware rendering.
#[derive(Debug, thiserror::Error)]
pub enum LocaleError {
    /// The locale tag is not a well-formed BCP 47 identifier.
    #[error("malformed locale tag: {0}")]
    Tag(#[from] icu::locale::ParseError),

    /// No formatting data could be loaded for the locale.
    #[error("no formatting data for locale: {0}")]
    Data(#[from] icu::datetime::DateTimeFormatterLoadError),

    /// The date is outside the backend's representable range.
    #[error("date not representable: {0}")]
    Range(#[from] icu::calendar::RangeError),

    /// The tag was rejected by a custom [`Localizer`] implementation.
    #[error("unsupported locale tag: {0}")]
    Unsupported(String),
}

/// The host localization capability.
///
/// Month and weekday names, their ordering, and the punctuation between
/// them vary per language and region, so they are never hand-built;
/// they come from whatever implements this trait. The default is CLDR
/// data through ICU4X, and tests can inject a deterministic stub.
pub trait Localizer {
    /// Renders the date part of `instant` for `tag`, spelling out the
    /// fields named by `fields`.
    ///
    /// # Errors
    /// Returns [`LocaleError`] when the tag is malformed or no data
    /// exists for it. Callers decide whether to fall back or propagate.
    fn localized_date(
        &self,
        instant: &Instant,
        tag: &str,
        fields: NamedFields,
    ) -> Result<String, LocaleError>;
}

/// [`Localizer`] backed by ICU4X compiled CLDR data.
///
/// Unknown-but-well-formed tags fall back through ICU4X's own locale
/// fallback chain rather than erroring, matching how host platforms
/// treat unrecognized locales.
#[derive(Debug, Clone, Copy, Default)]
pub struct IcuLocalizer;

impl Localizer for IcuLocalizer {
    fn localized_date(
        &self,
        instant: &Instant,
        tag: &str,
        fields: NamedFields,
    ) -> Result<String, LocaleError> {
        let locale: Locale = tag.parse()?;
        let date = Date::try_new_iso(
            i32::from(instant.year()),
            instant.month(),
            instant.day(),
        )?;
        let rendered = match fields {
            NamedFields::YearMonthDay => DateTimeFormatter::try_new(locale.into(), YMD::long())?
                .format(&date)
                .to_string(),
            NamedFields::WeekdayYearMonthDay => {
                DateTimeFormatter::try_new(locale.into(), YMDE::long())?
                    .format(&date)
                    .to_string()
            }
        };
        Ok(rendered)
    }
}
