use crate::duration::Duration;
use crate::unit::{TimeUnit, UNIT_COUNT};

// Indexed by TimeUnit::ordinal.
static ZERO_DURATIONS: [Duration; UNIT_COUNT] = [
    Duration::new(0.0, TimeUnit::Minutes),
    Duration::new(0.0, TimeUnit::Hours),
    Duration::new(0.0, TimeUnit::Days),
    Duration::new(0.0, TimeUnit::Weeks),
    Duration::new(0.0, TimeUnit::Months),
    Duration::new(0.0, TimeUnit::Years),
    Duration::new(0.0, TimeUnit::Percent),
    Duration::new(0.0, TimeUnit::ElapsedMinutes),
    Duration::new(0.0, TimeUnit::ElapsedHours),
    Duration::new(0.0, TimeUnit::ElapsedDays),
    Duration::new(0.0, TimeUnit::ElapsedWeeks),
    Duration::new(0.0, TimeUnit::ElapsedMonths),
    Duration::new(0.0, TimeUnit::ElapsedYears),
    Duration::new(0.0, TimeUnit::ElapsedPercent),
];

/// The shared zero-magnitude duration for `unit`.
pub(crate) fn zero(unit: TimeUnit) -> &'static Duration {
    &ZERO_DURATIONS[unit.ordinal()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_ordinals() {
        for unit in TimeUnit::ALL.iter() {
            let zero = zero(*unit);
            assert_eq!(zero.unit(), *unit);
            assert_eq!(zero.magnitude(), 0.0);
        }
    }
}
