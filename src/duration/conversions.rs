use std::fmt;
use std::str::FromStr;

use chrono::Duration as ChronoDuration;

use crate::duration::Duration;
use crate::error::*;
use crate::number_format::DEFAULT_NUMBER_FORMAT;
use crate::unit::{Locale, TimeUnit};

const MILLIS_PER_DAY: f64 = 86_400_000.0;
const MILLIS_PER_MINUTE: f64 = 60_000.0;

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(&DEFAULT_NUMBER_FORMAT, Locale::english()))
    }
}

impl FromStr for Duration {
    type Err = ParseError;

    fn from_str(s: &str) -> ParseResult<Self> {
        Duration::parse_default(s).map(|duration| duration.into_owned())
    }
}

impl Duration {
    /// An approximate [`chrono::Duration`] for this span, at millisecond precision and using
    /// the same day-equivalence constants as [`Duration::convert_to`]. Percentages, and
    /// magnitudes too large for a chrono duration, have no equivalent.
    pub fn to_chrono(&self) -> Option<ChronoDuration> {
        let class = self.unit.day_class()?;
        let millis = (class.to_days(self.magnitude) * MILLIS_PER_DAY).round();
        // i64::MAX as f64 rounds up, so this also rejects the exact boundary
        if !millis.is_finite() || millis.abs() >= i64::MAX as f64 {
            return None;
        }
        Some(ChronoDuration::milliseconds(millis as i64))
    }
}

// Chrono spans are exact, so they convert into minutes rather than a calendar-sized unit.
impl From<ChronoDuration> for Duration {
    fn from(duration: ChronoDuration) -> Self {
        let minutes = duration.num_milliseconds() as f64 / MILLIS_PER_MINUTE;
        Duration::from_value(minutes, TimeUnit::Minutes).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_default_format() {
        assert_eq!(Duration::new(3.5, TimeUnit::Hours).to_string(), "3.5h");
        assert_eq!(Duration::new(1.0, TimeUnit::ElapsedPercent).to_string(), "1e%");
        assert_eq!(Duration::new(0.2, TimeUnit::Days).to_string(), ".2d");
    }

    #[test]
    fn from_str() {
        let duration: Duration = "4.5ew".parse().unwrap();
        assert_eq!(duration, Duration::new(4.5, TimeUnit::ElapsedWeeks));
        assert!("4.5x".parse::<Duration>().is_err());
    }

    #[test]
    fn to_chrono() {
        assert_eq!(
            Duration::new(90.0, TimeUnit::Minutes).to_chrono(),
            Some(ChronoDuration::minutes(90))
        );
        assert_eq!(
            Duration::new(2.0, TimeUnit::ElapsedWeeks).to_chrono(),
            Some(ChronoDuration::days(14))
        );
        assert_eq!(
            Duration::new(1.0, TimeUnit::Years).to_chrono(),
            Some(ChronoDuration::days(365))
        );
        assert_eq!(Duration::new(10.0, TimeUnit::Percent).to_chrono(), None);
        assert_eq!(Duration::new(f64::NAN, TimeUnit::Days).to_chrono(), None);
        assert_eq!(Duration::new(1e300, TimeUnit::Years).to_chrono(), None);
    }

    #[test]
    fn from_chrono() {
        assert_eq!(
            Duration::from(ChronoDuration::hours(2)),
            Duration::new(120.0, TimeUnit::Minutes)
        );
        assert_eq!(
            Duration::from(ChronoDuration::seconds(30)),
            Duration::new(0.5, TimeUnit::Minutes)
        );
        assert_eq!(
            Duration::from(ChronoDuration::zero()),
            Duration::new(0.0, TimeUnit::Minutes)
        );
    }
}
