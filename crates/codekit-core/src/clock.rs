use chrono::{DateTime, Datelike, FixedOffset, Local, NaiveDate, Offset, Utc};

///
/// Clock
///
/// Injectable time source. Code that needs the current instant takes a
/// `&dyn Clock` (or a generic) instead of reading ambient system time, so
/// tests pin the instant by swapping the injected value.
///

pub trait Clock: Send + Sync {
    fn utc_now(&self) -> DateTime<Utc>;

    /// Current instant in the clock's civil offset.
    fn now(&self) -> DateTime<FixedOffset>;

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    fn utc_today(&self) -> NaiveDate {
        self.utc_now().date_naive()
    }
}

///
/// SystemClock
///
/// Live system time; the civil offset is the machine's local offset.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn utc_now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

///
/// FixedClock
///
/// Deterministic clock pinned to one UTC instant, with an optional civil
/// offset for local-time reads. Every `utc_now` returns exactly the pinned
/// instant until the injected clock is swapped out.
///

#[derive(Clone, Copy, Debug)]
pub struct FixedClock {
    instant: DateTime<Utc>,
    offset: FixedOffset,
}

impl FixedClock {
    #[must_use]
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self {
            instant,
            offset: Utc.fix(),
        }
    }

    #[must_use]
    pub const fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = offset;
        self
    }
}

impl Clock for FixedClock {
    fn utc_now(&self) -> DateTime<Utc> {
        self.instant
    }

    fn now(&self) -> DateTime<FixedOffset> {
        self.instant.with_timezone(&self.offset)
    }
}

/// Whole years elapsed between two dates.
///
/// Returns 0 when `from` is after `to`; otherwise the calendar-year
/// difference, decremented by one while the final year is still incomplete.
#[must_use]
pub fn years_passed(from: NaiveDate, to: NaiveDate) -> u32 {
    if from > to {
        return 0;
    }

    let mut years = to.year() - from.year();

    if (to.month(), to.day()) < (from.month(), from.day()) {
        years -= 1;
    }

    u32::try_from(years).unwrap_or(0)
}

/// Signed variant: negative when `from` is after `to`.
#[must_use]
pub fn years_passed_signed(from: NaiveDate, to: NaiveDate) -> i32 {
    if from <= to {
        i32::try_from(years_passed(from, to)).unwrap_or(i32::MAX)
    } else {
        -i32::try_from(years_passed(to, from)).unwrap_or(i32::MAX)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ---------------------
    // fixed clock
    // ---------------------

    #[test]
    fn fixed_clock_returns_the_pinned_instant() {
        let instant = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        let clock = FixedClock::at(instant);

        assert_eq!(clock.utc_now(), instant);
        assert_eq!(clock.utc_now(), instant);
        assert_eq!(clock.utc_today(), date(2024, 5, 1));
        assert_eq!(clock.today(), date(2024, 5, 1));
    }

    #[test]
    fn civil_offset_can_move_today_across_midnight() {
        let instant = Utc.with_ymd_and_hms(2024, 4, 30, 23, 30, 0).unwrap();
        let clock = FixedClock::at(instant).with_offset(FixedOffset::east_opt(2 * 3600).unwrap());

        assert_eq!(clock.utc_today(), date(2024, 4, 30));
        assert_eq!(clock.today(), date(2024, 5, 1));
    }

    // ---------------------
    // years_passed
    // ---------------------

    #[test]
    fn whole_years_count_once_the_anniversary_passes() {
        assert_eq!(years_passed(date(2020, 1, 1), date(2021, 6, 15)), 1);
        assert_eq!(years_passed(date(2020, 6, 15), date(2021, 6, 15)), 1);
        assert_eq!(years_passed(date(2020, 6, 15), date(2021, 6, 14)), 0);
        assert_eq!(years_passed(date(2020, 1, 1), date(2020, 12, 31)), 0);
    }

    #[test]
    fn reversed_ranges_clamp_to_zero() {
        assert_eq!(years_passed(date(2021, 6, 15), date(2020, 1, 1)), 0);
    }

    #[test]
    fn signed_variant_negates_reversed_ranges() {
        assert_eq!(years_passed_signed(date(2021, 6, 15), date(2020, 1, 1)), -1);
        assert_eq!(years_passed_signed(date(2020, 1, 1), date(2021, 6, 15)), 1);
        assert_eq!(years_passed_signed(date(2020, 1, 1), date(2020, 1, 1)), 0);
    }

    // ---------------------
    // properties
    // ---------------------

    fn arb_date() -> impl Strategy<Value = NaiveDate> {
        (1900..2100i32, 1..13u32, 1..29u32).prop_map(|(y, m, d)| date(y, m, d))
    }

    proptest! {
        #[test]
        fn signed_years_are_antisymmetric(a in arb_date(), b in arb_date()) {
            prop_assert_eq!(years_passed_signed(a, b), -years_passed_signed(b, a));
        }

        #[test]
        fn years_never_exceed_the_calendar_span(a in arb_date(), b in arb_date()) {
            let (from, to) = if a <= b { (a, b) } else { (b, a) };
            let span = to.year() - from.year();

            prop_assert!(years_passed(from, to) <= u32::try_from(span).unwrap());
        }
    }
}
