//! Applying a [`Duration`] to a point in time.
//!
//! Years and months are applied to the calendar date first. If that lands on a day which doesn't
//! exist (the 31st of a 30-day month, or the 29th of February outside a leap year), the date is
//! clamped back to the last day of the target month rather than rolling over into the next one.
//! Days are then added as whole days, and finally the remaining seconds are added, so "1 month
//! and 1 day after January 31st" is March 1st (or February 29th + 1 day in a leap year), never
//! March 4th.
//!
//! The duration is first broken down into years, months, days and seconds with
//! [`Duration::to_units`], so seconds-based amounts of a month or more (under the standard
//! profile) are applied as months: 30 days after January 1st is February 1st.

use crate::{Duration, Unit};

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// A point in time which durations can be applied to.
///
/// Implementations are provided for [`chrono::NaiveDateTime`] with the `chrono` feature and for
/// [`time::PrimitiveDateTime`] with the `time` feature. Timezones and leap seconds are not taken
/// into account: the timestamp is treated as a local calendar date plus a time of day.
pub trait Timestamp: Sized + Copy {
    /// Return a 3-tuple of the year, month, and day (one-based) for the date.
    fn ymd(self) -> (i32, u8, u8);

    /// The same time of day (including any fraction of a second) on the given date, if such a
    /// date is valid.
    fn with_ymd(self, y: i32, m: u8, d: u8) -> Option<Self>;

    /// Shift by a signed number of seconds, or `None` if the result is out of range.
    fn checked_add_seconds(self, seconds: i64) -> Option<Self>;

    /// The current time.
    fn now() -> Self;

    /// Like [`with_ymd`](Self::with_ymd), but if the day doesn't exist in that month, use the
    /// last day of the month instead.
    fn with_ymd_or_last(self, y: i32, m: u8, d: u8) -> Option<Self> {
        self.with_ymd(y, m, d).or_else(|| {
            let last = days_in_month(y, m)?;
            tracing::trace!(year = y, month = m, day = d, last, "clamping to end of month");
            self.with_ymd(y, m, last.min(d))
        })
    }
}

/// Number of days in the given month of the proleptic Gregorian calendar.
pub fn days_in_month(year: i32, month: u8) -> Option<u8> {
    Some(match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => return None,
    })
}

fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Apply `duration` going forward from `start`.
fn shift<T: Timestamp>(start: T, duration: &Duration) -> Option<T> {
    // Largest first, one count per unit.
    let parts = duration.to_units(&[Unit::Year, Unit::Month, Unit::Day, Unit::Second]);
    let mut counts = parts.into_iter().map(|(_, n)| n);
    let (years, months, days, seconds) = (counts.next()?, counts.next()?, counts.next()?, counts.next()?);

    let (y, m, d) = start.ymd();
    let month_index = i64::from(m) - 1 + months;
    let year = i64::from(y)
        .checked_add(years)?
        .checked_add(month_index.div_euclid(12))?;
    let year = i32::try_from(year).ok()?;
    // rem_euclid(12) is in 0..12.
    let month = month_index.rem_euclid(12) as u8 + 1;

    start
        .with_ymd_or_last(year, month, d)?
        .checked_add_seconds(days.checked_mul(SECONDS_PER_DAY)?)?
        .checked_add_seconds(seconds)
}

impl Duration {
    /// The point in time this duration after `time`, or `None` if it is out of the range the
    /// timestamp type can represent.
    pub fn checked_after<T: Timestamp>(&self, time: T) -> Option<T> {
        shift(time, self)
    }

    /// The point in time this duration before `time`, or `None` if it is out of the range the
    /// timestamp type can represent.
    pub fn checked_before<T: Timestamp>(&self, time: T) -> Option<T> {
        shift(time, &-*self)
    }

    /// The point in time this duration after `time`.
    ///
    /// ```
    /// # #[cfg(feature = "chrono")] {
    /// # use chrono::NaiveDate;
    /// # use timerizer::{Duration, Unit};
    /// let end_of_january = NaiveDate::from_ymd_opt(2000, 1, 31).unwrap().and_hms_opt(0, 0, 0).unwrap();
    /// let end_of_february = NaiveDate::from_ymd_opt(2000, 2, 29).unwrap().and_hms_opt(0, 0, 0).unwrap();
    /// assert_eq!(Duration::of(1, Unit::Month).after(end_of_january), end_of_february);
    /// # }
    /// ```
    ///
    /// Panics if the result is out of range for the timestamp type.
    pub fn after<T: Timestamp>(&self, time: T) -> T {
        self.checked_after(time).expect("timestamp out of range")
    }

    /// The point in time this duration before `time`.
    ///
    /// Panics if the result is out of range for the timestamp type.
    pub fn before<T: Timestamp>(&self, time: T) -> T {
        self.checked_before(time).expect("timestamp out of range")
    }

    /// This duration before the current time.
    pub fn ago<T: Timestamp>(&self) -> T {
        self.before(T::now())
    }

    /// This duration after the current time.
    pub fn from_now<T: Timestamp>(&self) -> T {
        self.after(T::now())
    }
}

#[cfg(test)]
macro_rules! tests {
    ($ty:ty, $ctor:expr) => {
        use crate::{Duration, Unit};

        fn compound() -> Duration {
            Duration::of(1, Unit::Year)
                .with(1, Unit::Month)
                .with(1, Unit::Week)
                .with(1, Unit::Day)
                .with(1, Unit::Hour)
                .with(1, Unit::Minute)
                .with(1, Unit::Second)
        }

        #[test]
        fn before() {
            let time = $ctor(2000, 1, 1, 3, 45, 0);
            assert_eq!(Duration::of(5, Unit::Minute).before(time), $ctor(2000, 1, 1, 3, 40, 0));
            assert_eq!(Duration::of(5, Unit::Month).before(time), $ctor(1999, 8, 1, 3, 45, 0));
            assert_eq!(Duration::of(65, Unit::Month).before(time), $ctor(1994, 8, 1, 3, 45, 0));
            assert_eq!(
                Duration::of(60, Unit::Minute).with(12, Unit::Month).before(time),
                $ctor(1999, 1, 1, 2, 45, 0)
            );
            assert_eq!(compound().before(time), $ctor(1998, 11, 23, 2, 43, 59));
        }

        #[test]
        fn before_clamps() {
            let end_of_march = $ctor(2000, 3, 31, 3, 45, 0);
            assert_eq!(Duration::of(1, Unit::Month).before(end_of_march), $ctor(2000, 2, 29, 3, 45, 0));
            assert_eq!(compound().before(end_of_march), $ctor(1999, 2, 20, 2, 43, 59));
        }

        #[test]
        fn after() {
            let time = $ctor(2000, 1, 1, 3, 45, 0);
            assert_eq!(Duration::of(5, Unit::Minute).after(time), $ctor(2000, 1, 1, 3, 50, 0));
            assert_eq!(Duration::of(5, Unit::Month).after(time), $ctor(2000, 6, 1, 3, 45, 0));
            assert_eq!(Duration::of(65, Unit::Month).after(time), $ctor(2005, 6, 1, 3, 45, 0));
            assert_eq!(
                Duration::of(60, Unit::Minute).with(12, Unit::Month).after(time),
                $ctor(2001, 1, 1, 4, 45, 0)
            );
            assert_eq!(compound().after(time), $ctor(2001, 2, 9, 4, 46, 1));
        }

        #[test]
        fn after_clamps() {
            let end_of_january = $ctor(2000, 1, 31, 3, 45, 0);
            assert_eq!(Duration::of(1, Unit::Month).after(end_of_january), $ctor(2000, 2, 29, 3, 45, 0));
            assert_eq!(compound().after(end_of_january), $ctor(2001, 3, 8, 4, 46, 1));
            assert_eq!(
                Duration::of(1, Unit::Year).after($ctor(2000, 2, 29, 0, 0, 0)),
                $ctor(2001, 2, 28, 0, 0, 0)
            );
            assert_eq!(
                Duration::of(1, Unit::Month).after($ctor(2000, 12, 31, 0, 0, 0)),
                $ctor(2001, 1, 31, 0, 0, 0)
            );
        }

        #[test]
        fn days_cross_months() {
            assert_eq!(
                Duration::of(1, Unit::Day).after($ctor(1999, 12, 31, 12, 0, 0)),
                $ctor(2000, 1, 1, 12, 0, 0)
            );
            assert_eq!(
                Duration::of(1, Unit::Second).after($ctor(1999, 12, 31, 23, 59, 59)),
                $ctor(2000, 1, 1, 0, 0, 0)
            );
        }

        #[test]
        fn whole_months_of_days() {
            assert_eq!(
                Duration::of(31, Unit::Day).after($ctor(2000, 1, 31, 0, 0, 0)),
                $ctor(2000, 3, 1, 0, 0, 0)
            );
            assert_eq!(
                Duration::of(30, Unit::Day).after($ctor(2000, 1, 1, 0, 0, 0)),
                $ctor(2000, 2, 1, 0, 0, 0)
            );
            assert_eq!(
                Duration::of(30, Unit::Day).before($ctor(2000, 3, 31, 0, 0, 0)),
                $ctor(2000, 2, 29, 0, 0, 0)
            );
        }

        #[test]
        fn negative_goes_the_other_way() {
            let time = $ctor(2000, 3, 31, 3, 45, 0);
            assert_eq!((-compound()).after(time), compound().before(time));
            assert_eq!((-compound()).before(time), compound().after(time));
        }

        #[test]
        fn operators() {
            let time = $ctor(2000, 1, 1, 0, 0, 0);
            let day = Duration::of(1, Unit::Day);
            assert_eq!(day + time, $ctor(2000, 1, 2, 0, 0, 0));
            assert_eq!(day + Duration::of(1, Unit::Month) + time, $ctor(2000, 2, 2, 0, 0, 0));
            assert_eq!(time + day, $ctor(2000, 1, 2, 0, 0, 0));
            assert_eq!(time - day, $ctor(1999, 12, 31, 0, 0, 0));
        }

        #[test]
        fn relative_to_now() {
            let earlier: $ty = Duration::of(1, Unit::Day).ago();
            let later: $ty = Duration::of(1, Unit::Day).from_now();
            assert!(earlier < later);
            assert!(later > <$ty as crate::Timestamp>::now());
        }

        #[test]
        fn out_of_range() {
            let huge = Duration::of(i64::MAX / 12_000, Unit::Millennium);
            assert_eq!(huge.checked_after($ctor(2000, 1, 1, 0, 0, 0)), None);
        }
    };
}

#[cfg(feature = "chrono")]
mod chrono_impl {
    use super::*;
    use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta};
    use std::ops::{Add, Sub};

    impl Timestamp for NaiveDateTime {
        fn ymd(self) -> (i32, u8, u8) {
            (self.year(),
                u8::try_from(self.month()).expect("month out of bounds"),
                u8::try_from(self.day()).expect("day out of bounds"))
        }

        fn with_ymd(self, y: i32, m: u8, d: u8) -> Option<Self> {
            NaiveDate::from_ymd_opt(y, u32::from(m), u32::from(d)).map(|date| date.and_time(self.time()))
        }

        fn checked_add_seconds(self, seconds: i64) -> Option<Self> {
            self.checked_add_signed(TimeDelta::try_seconds(seconds)?)
        }

        fn now() -> Self {
            chrono::Local::now().naive_local()
        }
    }

    impl Add<Duration> for NaiveDateTime {
        type Output = NaiveDateTime;

        fn add(self, rhs: Duration) -> NaiveDateTime {
            rhs.after(self)
        }
    }

    impl Sub<Duration> for NaiveDateTime {
        type Output = NaiveDateTime;

        fn sub(self, rhs: Duration) -> NaiveDateTime {
            rhs.before(self)
        }
    }

    impl Add<NaiveDateTime> for Duration {
        type Output = NaiveDateTime;

        fn add(self, rhs: NaiveDateTime) -> NaiveDateTime {
            self.after(rhs)
        }
    }

}

#[cfg(feature = "time")]
mod time_impl {
    use super::*;
    use std::ops::{Add, Sub};
    use time::{Date, OffsetDateTime, PrimitiveDateTime};

    impl Timestamp for PrimitiveDateTime {
        fn ymd(self) -> (i32, u8, u8) {
            let (y, m, d) = self.date().to_calendar_date();
            (y, m as u8, d)
        }

        fn with_ymd(self, y: i32, m: u8, d: u8) -> Option<Self> {
            Date::from_calendar_date(y, time::Month::try_from(m).ok()?, d)
                .ok()
                .map(|date| self.replace_date(date))
        }

        fn checked_add_seconds(self, seconds: i64) -> Option<Self> {
            self.checked_add(time::Duration::seconds(seconds))
        }

        /// The current UTC time, as the local offset can't be determined soundly on every
        /// platform.
        fn now() -> Self {
            let now = OffsetDateTime::now_utc();
            PrimitiveDateTime::new(now.date(), now.time())
        }
    }

    impl Add<Duration> for PrimitiveDateTime {
        type Output = PrimitiveDateTime;

        fn add(self, rhs: Duration) -> PrimitiveDateTime {
            rhs.after(self)
        }
    }

    impl Sub<Duration> for PrimitiveDateTime {
        type Output = PrimitiveDateTime;

        fn sub(self, rhs: Duration) -> PrimitiveDateTime {
            rhs.before(self)
        }
    }

    impl Add<PrimitiveDateTime> for Duration {
        type Output = PrimitiveDateTime;

        fn add(self, rhs: PrimitiveDateTime) -> PrimitiveDateTime {
            self.after(rhs)
        }
    }

}
