use serde::Deserialize;

use crate::number_format::NumberFormat;
use crate::unit::Locale;

/// Read-only view of the formatting options that belong to the file a duration is written to.
pub trait FormatContext {
    fn duration_format(&self) -> &NumberFormat;

    fn locale(&self) -> &Locale;
}

/// Per-file formatting options.
///
/// Loadable with serde from any self-describing format. All fields are optional:
/// ```
/// # use mpx_duration::{Duration, FileSettings, TimeUnit};
/// let settings: FileSettings = serde_json::from_str(
///     r##"{
///         "locale": "de",
///         "duration_format": { "pattern": "#.##", "decimal_separator": ",", "grouping_separator": "." }
///     }"##,
/// ).unwrap();
/// assert_eq!(Duration::new(1.25, TimeUnit::Years).format_for(&settings), "1,25j");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FileSettings {
    locale: Locale,
    duration_format: NumberFormat,
}

impl FileSettings {
    pub fn new(locale: Locale, duration_format: NumberFormat) -> Self {
        Self {
            locale,
            duration_format,
        }
    }
}

impl FormatContext for FileSettings {
    fn duration_format(&self) -> &NumberFormat {
        &self.duration_format
    }

    fn locale(&self) -> &Locale {
        &self.locale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = FileSettings::default();
        assert_eq!(settings.locale(), Locale::english());
        assert_eq!(settings.duration_format(), &NumberFormat::default());

        let empty: FileSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, settings);
    }

    #[test]
    fn load_from_json() {
        let settings: FileSettings = serde_json::from_str(
            r##"{
                "locale": "de",
                "duration_format": {
                    "pattern": "#,##0.##",
                    "decimal_separator": ",",
                    "grouping_separator": "."
                }
            }"##,
        )
        .unwrap();
        assert_eq!(settings.locale(), Locale::german());
        assert_eq!(settings.duration_format().pattern(), "#,##0.##");
        assert_eq!(settings.duration_format().decimal_separator(), ',');
    }

    #[test]
    fn rejects_unknown_locale_and_bad_pattern() {
        let err = serde_json::from_str::<FileSettings>(r##"{ "locale": "tlh" }"##).unwrap_err();
        assert!(err.to_string().contains("Unknown locale: tlh"));

        let err = serde_json::from_str::<FileSettings>(
            r##"{ "duration_format": { "pattern": "#x#" } }"##,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Invalid number format pattern"));

        let err = serde_json::from_str::<FileSettings>(
            r##"{ "duration_format": { "decimal_separator": "," } }"##,
        )
        .unwrap_err();
        assert!(err.to_string().contains("separators must differ"));
    }
}
