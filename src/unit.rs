use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use locale::Locale;

use crate::error::*;

pub(crate) mod locale;

/// Number of [`TimeUnit`] variants. Tables indexed by [`TimeUnit::ordinal`] have this length.
pub const UNIT_COUNT: usize = 14;

/// The unit a [`Duration`](crate::Duration) magnitude is expressed in.
///
/// Ordinals are stable and follow declaration order, with the six working-time units and
/// percent first, then their elapsed counterparts in the same order.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum TimeUnit {
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
    Years,
    Percent,
    ElapsedMinutes,
    ElapsedHours,
    ElapsedDays,
    ElapsedWeeks,
    ElapsedMonths,
    ElapsedYears,
    ElapsedPercent,
}

/// Groups units that convert with the same day-equivalence constant. An elapsed unit shares
/// its class with the matching working-time unit.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum DayClass {
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
    Years,
}

impl DayClass {
    /// How many of this unit make up one day.
    pub fn per_day(self) -> f64 {
        match self {
            DayClass::Minutes => 1440.0,
            DayClass::Hours => 24.0,
            DayClass::Days => 1.0,
            DayClass::Weeks => 1.0 / 7.0,
            DayClass::Months => 1.0 / 28.0,
            DayClass::Years => 1.0 / 365.0,
        }
    }

    pub(crate) fn to_days(self, magnitude: f64) -> f64 {
        match self {
            DayClass::Minutes => magnitude / 1440.0,
            DayClass::Hours => magnitude / 24.0,
            DayClass::Days => magnitude,
            DayClass::Weeks => magnitude * 7.0,
            DayClass::Months => magnitude * 28.0,
            DayClass::Years => magnitude * 365.0,
        }
    }

    pub(crate) fn from_days(self, days: f64) -> f64 {
        match self {
            DayClass::Minutes => days * 1440.0,
            DayClass::Hours => days * 24.0,
            DayClass::Days => days,
            DayClass::Weeks => days / 7.0,
            DayClass::Months => days / 28.0,
            DayClass::Years => days / 365.0,
        }
    }
}

impl TimeUnit {
    pub const ALL: [TimeUnit; UNIT_COUNT] = [
        TimeUnit::Minutes,
        TimeUnit::Hours,
        TimeUnit::Days,
        TimeUnit::Weeks,
        TimeUnit::Months,
        TimeUnit::Years,
        TimeUnit::Percent,
        TimeUnit::ElapsedMinutes,
        TimeUnit::ElapsedHours,
        TimeUnit::ElapsedDays,
        TimeUnit::ElapsedWeeks,
        TimeUnit::ElapsedMonths,
        TimeUnit::ElapsedYears,
        TimeUnit::ElapsedPercent,
    ];

    pub const fn ordinal(self) -> usize {
        self as usize
    }

    pub fn from_ordinal(ordinal: usize) -> Option<Self> {
        Self::ALL.get(ordinal).copied()
    }

    /// The conversion constant group, or `None` for the percent units which have no
    /// day equivalent.
    pub fn day_class(self) -> Option<DayClass> {
        match self {
            TimeUnit::Minutes | TimeUnit::ElapsedMinutes => Some(DayClass::Minutes),
            TimeUnit::Hours | TimeUnit::ElapsedHours => Some(DayClass::Hours),
            TimeUnit::Days | TimeUnit::ElapsedDays => Some(DayClass::Days),
            TimeUnit::Weeks | TimeUnit::ElapsedWeeks => Some(DayClass::Weeks),
            TimeUnit::Months | TimeUnit::ElapsedMonths => Some(DayClass::Months),
            TimeUnit::Years | TimeUnit::ElapsedYears => Some(DayClass::Years),
            TimeUnit::Percent | TimeUnit::ElapsedPercent => None,
        }
    }

    pub fn is_elapsed(self) -> bool {
        self.ordinal() >= TimeUnit::ElapsedMinutes.ordinal()
    }

    pub fn is_percent(self) -> bool {
        matches!(self, TimeUnit::Percent | TimeUnit::ElapsedPercent)
    }

    /// The elapsed counterpart of a working-time unit. Elapsed units map to themselves.
    pub fn to_elapsed(self) -> Self {
        if self.is_elapsed() {
            self
        } else {
            Self::ALL[self.ordinal() + ELAPSED_OFFSET]
        }
    }

    /// The working-time counterpart of an elapsed unit. Working-time units map to themselves.
    pub fn to_working(self) -> Self {
        if self.is_elapsed() {
            Self::ALL[self.ordinal() - ELAPSED_OFFSET]
        } else {
            self
        }
    }
}

const ELAPSED_OFFSET: usize = TimeUnit::ElapsedMinutes as usize;

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Locale::english().suffix(*self))
    }
}

impl FromStr for TimeUnit {
    type Err = ParseError;

    fn from_str(s: &str) -> ParseResult<Self> {
        Locale::english().parse_unit(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_follow_declaration_order() {
        for (index, unit) in TimeUnit::ALL.iter().enumerate() {
            assert_eq!(unit.ordinal(), index);
            assert_eq!(TimeUnit::from_ordinal(index), Some(*unit));
        }
        assert_eq!(TimeUnit::from_ordinal(UNIT_COUNT), None);
    }

    #[test]
    fn elapsed_pairs_share_day_class_but_not_identity() {
        for unit in TimeUnit::ALL.iter().take(ELAPSED_OFFSET) {
            let elapsed = unit.to_elapsed();
            assert_ne!(*unit, elapsed);
            assert_eq!(unit.day_class(), elapsed.day_class());
            assert!(elapsed.is_elapsed());
            assert!(!unit.is_elapsed());
            assert_eq!(elapsed.to_working(), *unit);
        }
        assert_eq!(TimeUnit::ElapsedDays.to_elapsed(), TimeUnit::ElapsedDays);
        assert_eq!(TimeUnit::Hours.to_working(), TimeUnit::Hours);
    }

    #[test]
    fn percent_has_no_day_class() {
        assert_eq!(TimeUnit::Percent.day_class(), None);
        assert_eq!(TimeUnit::ElapsedPercent.day_class(), None);
        assert!(TimeUnit::ElapsedPercent.is_percent());
        assert!(!TimeUnit::Days.is_percent());
    }

    #[test]
    fn day_class_constants() {
        assert_eq!(DayClass::Minutes.to_days(1440.0), 1.0);
        assert_eq!(DayClass::Hours.from_days(1.0), 24.0);
        assert_eq!(DayClass::Years.to_days(1.0), 365.0);
        assert_eq!(DayClass::Months.from_days(56.0), 2.0);
        assert_eq!(DayClass::Weeks.per_day(), 1.0 / 7.0);
    }

    #[test]
    fn display_and_from_str_use_english_suffixes() {
        assert_eq!(TimeUnit::Months.to_string(), "mo");
        assert_eq!(TimeUnit::ElapsedPercent.to_string(), "e%");
        assert_eq!("ew".parse::<TimeUnit>().unwrap(), TimeUnit::ElapsedWeeks);
        assert!("fortnight".parse::<TimeUnit>().is_err());
    }
}
