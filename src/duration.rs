use std::borrow::Cow;
use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::*;
use crate::number_format::{NumberFormat, DEFAULT_NUMBER_FORMAT};
use crate::settings::FormatContext;
use crate::unit::{Locale, TimeUnit};

mod conversions;
mod lexer;
mod zero;

/// A span of time, or a percentage, as written in an MPX file: a magnitude and the
/// [`TimeUnit`] it is measured in.
///
/// Durations are immutable. The factories return a [`Cow`] because every zero-magnitude
/// duration is served from a shared static table, one entry per unit; everything else is
/// owned. Equality is structural, so callers never need to care which one they got.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Duration {
    magnitude: f64,
    unit: TimeUnit,
}

impl Duration {
    /// Pairs `magnitude` and `unit` without consulting the zero table.
    pub const fn new(magnitude: f64, unit: TimeUnit) -> Self {
        Self { magnitude, unit }
    }

    pub fn from_value(magnitude: f64, unit: TimeUnit) -> Cow<'static, Duration> {
        // -0.0 == 0.0, so negative zero also resolves to the shared instance
        if magnitude == 0.0 {
            Cow::Borrowed(zero::zero(unit))
        } else {
            Cow::Owned(Self::new(magnitude, unit))
        }
    }

    pub fn from_int(magnitude: i32, unit: TimeUnit) -> Cow<'static, Duration> {
        Self::from_value(f64::from(magnitude), unit)
    }

    /// Reads a duration such as `3.5h` or `2ed`.
    ///
    /// The text is split after its last digit: the number before the split is read with
    /// `format`, the suffix after it is looked up in `locale`. A string with no suffix is a
    /// number of days, as written by MPX 3.
    pub fn parse(
        text: &str,
        format: &NumberFormat,
        locale: &Locale,
    ) -> ParseResult<Cow<'static, Duration>> {
        Self::parse_tokens(text, format, locale).map_err(|err| {
            debug!(input = text, locale = locale.tag(), error = %err, "failed to parse duration");
            err
        })
    }

    /// [`Duration::parse`] with the default `#.#` number format and English suffixes.
    pub fn parse_default(text: &str) -> ParseResult<Cow<'static, Duration>> {
        Self::parse(text, &DEFAULT_NUMBER_FORMAT, Locale::english())
    }

    fn parse_tokens(
        text: &str,
        format: &NumberFormat,
        locale: &Locale,
    ) -> ParseResult<Cow<'static, Duration>> {
        if text.is_empty() {
            return Err(ParseError::Empty);
        }

        let tokens = lexer::tokenize(text);
        let magnitude = format
            .parse(tokens.number)
            .map_err(|_| ParseError::InvalidNumber {
                input: text.to_string(),
                number: tokens.number.to_string(),
            })?;
        let unit = match tokens.suffix {
            None => TimeUnit::Days,
            Some(suffix) => locale
                .parse_unit(suffix)
                .map_err(|_| ParseError::UnknownUnit {
                    input: text.to_string(),
                    suffix: suffix.to_string(),
                    locale: locale.tag().to_string(),
                })?,
        };

        Ok(Self::from_value(magnitude, unit))
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// Renders `<magnitude><suffix>`, the inverse of [`Duration::parse`].
    pub fn format(&self, format: &NumberFormat, locale: &Locale) -> String {
        let mut output = format.format(self.magnitude);
        output.push_str(locale.suffix(self.unit));
        output
    }

    /// Renders this duration with the number format and locale configured for a file.
    pub fn format_for(&self, context: &impl FormatContext) -> String {
        self.format(context.duration_format(), context.locale())
    }

    /// Re-expresses this duration in `unit`.
    ///
    /// This is an *approximate* conversion through a day count, with 1 day = 24 hours =
    /// 1440 minutes, 1 week = 7 days, 1 month = 28 days and 1 year = 365 days. Working
    /// calendars are not consulted. Percentages have no day equivalent, so a percent
    /// magnitude is carried over unchanged, and a magnitude converted to a percent unit is
    /// left as a day count. If `unit` is already this duration's unit, `self` is returned.
    pub fn convert_to(&self, unit: TimeUnit) -> Cow<'_, Duration> {
        if unit == self.unit {
            return Cow::Borrowed(self);
        }

        let days = match self.unit.day_class() {
            Some(class) => class.to_days(self.magnitude),
            None => {
                debug!(from = ?self.unit, to = ?unit, "percent duration converted without scaling");
                self.magnitude
            }
        };
        let magnitude = match unit.day_class() {
            Some(class) => class.from_days(days),
            None => {
                debug!(from = ?self.unit, to = ?unit, "duration converted to percent without scaling");
                days
            }
        };
        trace!(from = ?self.unit, to = ?unit, magnitude, "converted duration");

        Self::from_value(magnitude, unit)
    }
}

impl PartialEq for Duration {
    fn eq(&self, other: &Self) -> bool {
        self.unit == other.unit && self.magnitude == other.magnitude
    }
}

/// Durations in different units are unordered; convert one of them first.
impl PartialOrd for Duration {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.unit == other.unit {
            self.magnitude.partial_cmp(&other.magnitude)
        } else {
            None
        }
    }
}
