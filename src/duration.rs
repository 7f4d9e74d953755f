//! The [`Duration`] value, its arithmetic, and conversion between units.

use crate::unit::{Domain, Normalization, Unit};
use crate::Error;
use std::cmp::Ordering;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// A signed amount of time, kept as an exact number of seconds plus an exact number of months.
///
/// Seconds-based units (second, minute, hour, day, week) all accumulate into the seconds field,
/// and months-based units (month, year, decade, century, millennium) into the months field. The
/// two are never combined unless asked to with [`normalize`](Self::normalize),
/// [`denormalize`](Self::denormalize) or one of the conversions built on them, because the
/// number of seconds in a month depends on which month it is.
///
/// Equality compares both fields exactly, so `1 month` is not equal to `30 days`. Use
/// [`compare`](Self::compare) for an ordering that looks across domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Duration {
    seconds: i64,
    months: i64,
}

impl Duration {
    /// The empty duration.
    pub const ZERO: Duration = Duration { seconds: 0, months: 0 };

    /// Construct directly from the two base fields.
    pub const fn from_parts(seconds: i64, months: i64) -> Self {
        Duration { seconds, months }
    }

    /// `count` of the given unit.
    ///
    /// Overflows if `count` times the unit's [factor](Unit::factor) doesn't fit in an `i64`
    /// (panicking in debug builds), like integer multiplication.
    pub const fn of(count: i64, unit: Unit) -> Self {
        Self::ZERO.with(count, unit)
    }

    /// This duration plus `count` of the given unit, for building up compound durations:
    ///
    /// ```
    /// # use timerizer::{Duration, Unit};
    /// let d = Duration::of(1, Unit::Year).with(2, Unit::Day);
    /// assert_eq!(d, Duration::from_parts(2 * 86_400, 12));
    /// ```
    ///
    /// Overflows under the same conditions as [`of`](Self::of), or if the sum doesn't fit.
    pub const fn with(self, count: i64, unit: Unit) -> Self {
        // `Unit::factor` goes through the static table, which isn't usable in a const fn.
        match unit {
            Unit::Second => self.plus_seconds(count),
            Unit::Minute => self.plus_seconds(count * 60),
            Unit::Hour => self.plus_seconds(count * 3600),
            Unit::Day => self.plus_seconds(count * 86_400),
            Unit::Week => self.plus_seconds(count * 604_800),
            Unit::Month => self.plus_months(count),
            Unit::Year => self.plus_months(count * 12),
            Unit::Decade => self.plus_months(count * 120),
            Unit::Century => self.plus_months(count * 1200),
            Unit::Millennium => self.plus_months(count * 12_000),
        }
    }

    const fn plus_seconds(self, seconds: i64) -> Self {
        Duration { seconds: self.seconds + seconds, months: self.months }
    }

    const fn plus_months(self, months: i64) -> Self {
        Duration { seconds: self.seconds, months: self.months + months }
    }

    /// Build a duration from (unit name, count) pairs. Names may be singular or plural, and the
    /// same unit may appear more than once; all counts are summed.
    pub fn from_units<I, S>(units: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (S, i64)>,
        S: AsRef<str>,
    {
        units.into_iter().try_fold(Self::ZERO, |acc, (name, count)| {
            Ok(acc.with(count, Unit::from_name(name.as_ref())?))
        })
    }

    /// The raw count in one of the base fields.
    pub fn get(&self, domain: Domain) -> i64 {
        match domain {
            Domain::Seconds => self.seconds,
            Domain::Months => self.months,
        }
    }

    /// Whether both base fields are zero.
    pub fn is_zero(&self) -> bool {
        self.seconds == 0 && self.months == 0
    }

    /// Order two durations by their length once normalized to seconds with the
    /// [standard](Normalization::Standard) profile.
    ///
    /// This is what lets `13 months` be longer than `1 year`, and `366 days` longer than
    /// `1 year`, even though the latter converts to exactly one year.
    pub fn compare(&self, other: &Duration) -> Ordering {
        self.compare_with(other, Normalization::Standard)
    }

    /// Like [`compare`](Self::compare), with a chosen normalization profile.
    pub fn compare_with(&self, other: &Duration, method: Normalization) -> Ordering {
        self.normalize_with(method)
            .seconds
            .cmp(&other.normalize_with(method).seconds)
    }

    /// Multiply both fields by a scalar.
    ///
    /// Overflows like integer multiplication if either product doesn't fit in an `i64`.
    pub fn scale(self, factor: i64) -> Self {
        Duration {
            seconds: self.seconds * factor,
            months: self.months * factor,
        }
    }

    /// Divide both fields by a scalar, truncating each toward zero independently.
    ///
    /// Panics if `divisor` is zero.
    pub fn divide(self, divisor: i64) -> Self {
        Duration {
            seconds: self.seconds / divisor,
            months: self.months / divisor,
        }
    }

    /// The exact count of `unit` in this duration's own field for that unit's domain, with no
    /// approximation across domains.
    ///
    /// For example, `1 year, 1 month, 365 days` has 13 months in it, and 1 year, but 0 decades;
    /// the 365 days are not counted toward any of those.
    pub(crate) fn to_unit_part(&self, unit: Unit) -> i64 {
        self.get(unit.domain()) / unit.factor()
    }

    /// How many whole `unit`s this duration amounts to, using the
    /// [standard](Normalization::Standard) profile to cross domains.
    ///
    /// Partial units are truncated toward zero.
    pub fn to_unit(&self, unit: Unit) -> i64 {
        self.to_unit_with(unit, Normalization::Standard)
    }

    /// Like [`to_unit`](Self::to_unit), with a chosen normalization profile.
    pub fn to_unit_with(&self, unit: Unit, method: Normalization) -> i64 {
        match unit.domain() {
            Domain::Seconds => self.normalize_with(method).seconds / unit.factor(),
            Domain::Months => self.denormalize_with(method).months / unit.factor(),
        }
    }

    /// Break this duration down into the given units.
    ///
    /// Units are filled largest first, each taking as many whole units as it can from what the
    /// larger ones left over, so the result comes back sorted largest first regardless of the
    /// order asked for. A negative duration breaks down into negative counts.
    ///
    /// ```
    /// # use timerizer::{Duration, Unit};
    /// let d = Duration::of(180, Unit::Day);
    /// assert_eq!(
    ///     d.to_units(&[Unit::Day, Unit::Week]),
    ///     vec![(Unit::Week, 25), (Unit::Day, 5)]
    /// );
    /// ```
    pub fn to_units(&self, units: &[Unit]) -> Vec<(Unit, i64)> {
        self.to_units_with(units, Normalization::Standard)
    }

    /// Like [`to_units`](Self::to_units), with a chosen normalization profile.
    pub fn to_units_with(&self, units: &[Unit], method: Normalization) -> Vec<(Unit, i64)> {
        let mut sorted = units.to_vec();
        sorted.sort_by(|a, b| b.cmp(a));

        let mut remainder = *self;
        sorted
            .into_iter()
            .map(|unit| {
                let part = remainder.to_unit_with(unit, method);
                remainder -= Duration::of(part, unit);
                (unit, part)
            })
            .collect()
    }

    /// Like [`to_units`](Self::to_units), but takes unit names and gives the counts back keyed by
    /// the same spelling that was passed in.
    ///
    /// ```
    /// # use timerizer::{Duration, Unit};
    /// let d = Duration::of(90, Unit::Minute);
    /// assert_eq!(
    ///     d.to_named_units(&["minutes", "hour"]).unwrap(),
    ///     vec![("hour", 1), ("minutes", 30)]
    /// );
    /// ```
    pub fn to_named_units<'a>(&self, names: &[&'a str]) -> Result<Vec<(&'a str, i64)>, Error> {
        let mut named = names
            .iter()
            .map(|&name| Ok((Unit::from_name(name)?, name)))
            .collect::<Result<Vec<_>, Error>>()?;
        named.sort_by(|a, b| b.0.cmp(&a.0));

        let units = named.iter().map(|&(unit, _)| unit).collect::<Vec<_>>();
        Ok(self
            .to_units(&units)
            .into_iter()
            .zip(named)
            .map(|((_, count), (_, name))| (name, count))
            .collect())
    }

    /// Convert entirely into seconds, approximating months with the
    /// [standard](Normalization::Standard) profile.
    pub fn normalize(&self) -> Self {
        self.normalize_with(Normalization::Standard)
    }

    /// Convert entirely into seconds, approximating months with the given profile.
    ///
    /// Whole years are converted first with the profile's year length, then whatever months are
    /// left with its month length. The result always has a months field of zero.
    ///
    /// Overflows if the total number of seconds doesn't fit in an `i64`, which takes a months
    /// field of roughly 3 * 10^12 (about 2.9 * 10^11 years) or more.
    pub fn normalize_with(&self, method: Normalization) -> Self {
        let mut normalized = 0;
        let mut remainder = *self;
        for (unit, seconds_per_unit) in method.steps() {
            let part = remainder.to_unit_part(unit);
            normalized += part * seconds_per_unit;
            remainder -= Duration::of(part, unit);
        }
        debug_assert_eq!(remainder.months, 0);
        Duration::from_parts(normalized + remainder.seconds, 0)
    }

    /// Approximate as much of the seconds field as possible as months, with the
    /// [standard](Normalization::Standard) profile.
    pub fn denormalize(&self) -> Self {
        self.denormalize_with(Normalization::Standard)
    }

    /// Approximate as much of the seconds field as possible as months, with the given profile.
    ///
    /// Whole years are taken out of the seconds first, then whole months. Seconds too few to
    /// make up a month are left in the seconds field as they were.
    pub fn denormalize_with(&self, method: Normalization) -> Self {
        let mut denormalized = Duration::ZERO;
        let mut remainder = *self;
        for (unit, seconds_per_unit) in method.steps() {
            let count = remainder.seconds / seconds_per_unit;
            denormalized += Duration::of(count, unit);
            remainder.seconds -= count * seconds_per_unit;
        }
        denormalized + remainder
    }
}

impl From<Unit> for Duration {
    /// One of the given unit.
    fn from(unit: Unit) -> Self {
        Duration::of(1, unit)
    }
}

impl TryFrom<i64> for Duration {
    type Error = Error;

    /// Zero is the only integer that has an unambiguous meaning as a duration.
    fn try_from(n: i64) -> Result<Self, Error> {
        if n == 0 {
            Ok(Duration::ZERO)
        } else {
            Err(Error::InvalidOperand(n))
        }
    }
}

impl Add for Duration {
    type Output = Duration;

    fn add(self, rhs: Duration) -> Duration {
        Duration {
            seconds: self.seconds + rhs.seconds,
            months: self.months + rhs.months,
        }
    }
}

impl Sub for Duration {
    type Output = Duration;

    fn sub(self, rhs: Duration) -> Duration {
        Duration {
            seconds: self.seconds - rhs.seconds,
            months: self.months - rhs.months,
        }
    }
}

impl AddAssign for Duration {
    fn add_assign(&mut self, rhs: Duration) {
        *self = *self + rhs;
    }
}

impl SubAssign for Duration {
    fn sub_assign(&mut self, rhs: Duration) {
        *self = *self - rhs;
    }
}

impl Neg for Duration {
    type Output = Duration;

    fn neg(self) -> Duration {
        Duration {
            seconds: -self.seconds,
            months: -self.months,
        }
    }
}

impl Mul<i64> for Duration {
    type Output = Duration;

    fn mul(self, rhs: i64) -> Duration {
        self.scale(rhs)
    }
}

impl Div<i64> for Duration {
    type Output = Duration;

    fn div(self, rhs: i64) -> Duration {
        self.divide(rhs)
    }
}

impl Sum for Duration {
    fn sum<I: Iterator<Item = Duration>>(iter: I) -> Duration {
        iter.fold(Duration::ZERO, Add::add)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;
    use Unit::*;

    const DAY: i64 = 24 * 60 * 60;

    fn d(count: i64, unit: Unit) -> Duration {
        Duration::of(count, unit)
    }

    #[test]
    fn construct_from_names() {
        let zero = Duration::from_units(Vec::<(&str, i64)>::new()).unwrap();
        assert_eq!(zero.get(Domain::Seconds), 0);
        assert_eq!(zero.get(Domain::Months), 0);

        let mixed = Duration::from_units([("second", 10), ("minute", 20), ("hours", 30)]).unwrap();
        assert_eq!(mixed.get(Domain::Seconds), 10 + 20 * 60 + 30 * 3600);
        assert_eq!(mixed.get(Domain::Months), 0);

        let both = Duration::from_units([("hours", 1), ("days", 2), ("year", 10)]).unwrap();
        assert_eq!(both.get(Domain::Seconds), 3600 + 2 * DAY);
        assert_eq!(both.get(Domain::Months), 120);

        let repeated = Duration::from_units([("day", 1), ("days", 2)]).unwrap();
        assert_eq!(repeated, d(3, Day));

        assert_eq!(
            Duration::from_units([("days", 1), ("moons", 2)]),
            Err(Error::UnknownUnit("moons".to_owned()))
        );
    }

    #[test]
    fn only_zero_is_a_duration() {
        assert_eq!(d(1, Day) + Duration::try_from(0).unwrap(), d(1, Day));
        assert_eq!(d(1, Month) - Duration::try_from(0).unwrap(), d(1, Month));
        assert_eq!(Duration::try_from(3), Err(Error::InvalidOperand(3)));
    }

    #[test]
    fn arithmetic() {
        assert_eq!(d(1, Day) + d(2, Week), d(15, Day));
        assert_eq!(d(2, Week) - d(1, Day), d(13, Day));
        assert_eq!(
            (d(1, Month) - d(1, Day)).to_units(&[Day, Month]),
            vec![(Month, 1), (Day, -1)]
        );
        assert_eq!(-d(10, Year), d(-10, Year));
        assert_eq!(-d(10, Year).with(10, Second), d(-10, Second) - d(10, Year));
        assert_eq!(d(1, Day).with(1, Month) * 4, d(4, Day).with(4, Month));
        assert_eq!(d(1, Day).with(1, Month) * 0, Duration::ZERO);
        assert_eq!(d(8, Day).with(8, Month) / 2, d(4, Day).with(4, Month));
        assert_eq!(d(1, Second) / 2, Duration::ZERO);
        assert_eq!(d(-3, Second).divide(2), d(-1, Second));
        assert_eq!([d(1, Day), d(1, Month)].into_iter().sum::<Duration>(), d(1, Day).with(1, Month));
    }

    #[test]
    fn equality_is_exact() {
        assert_eq!(d(1, Minute), d(60, Second));
        assert_eq!(d(1, Week), d(7, Day));
        assert_eq!(d(12, Month), d(1, Year));
        assert_ne!(d(1, Month), d(30, Day));
    }

    #[test]
    fn comparison_crosses_domains() {
        assert_eq!(d(1, Minute).compare(&d(1, Hour)), Ordering::Less);
        assert_eq!(d(13, Month).compare(&d(1, Year)), Ordering::Greater);
        assert_eq!(d(1, Month).compare(&d(30, Day)), Ordering::Equal);
        assert_eq!(d(365, Day).compare(&d(1, Year)), Ordering::Equal);
        assert_eq!(d(366, Day).compare(&d(1, Year)), Ordering::Greater);
        assert_eq!(d(366, Day).to_unit(Year), 1);
        assert_eq!(
            d(366, Day).compare_with(&d(1, Year), Normalization::Maximum),
            Ordering::Equal
        );
    }

    #[test]
    fn to_seconds() {
        assert_eq!(d(10, Minute).with(3, Second).to_unit(Second), 603);
        assert_eq!(d(2, Week).to_unit(Second), 14 * DAY);
        assert_eq!(d(1, Month).to_unit(Second), 30 * DAY);
        assert_eq!(d(1, Year).to_unit(Second), 365 * DAY);
        assert_eq!(d(1, Year).with(1, Second).to_unit(Second), 365 * DAY + 1);
    }

    #[test]
    fn negative_to_seconds() {
        assert_eq!(d(-1, Second).to_unit(Second), -1);
        assert_eq!((d(-10, Minute) + d(3, Second)).to_unit(Second), -600 + 3);
        assert_eq!(d(-1, Month).to_unit(Second), -30 * DAY);
        assert_eq!((-d(1, Year).with(1, Second)).to_unit(Second), -365 * DAY - 1);
        assert_eq!((d(-1, Year) + d(1, Second)).to_unit(Second), -365 * DAY + 1);
    }

    #[test]
    fn to_seconds_based_units() {
        assert_eq!(d(10, Hour).with(3, Minute).to_unit(Minute), 603);
        assert_eq!(d(2, Day).to_unit(Hour), 48);
        assert_eq!(d(1, Month).to_unit(Day), 30);
        assert_eq!(d(1, Year).to_unit(Day), 365);
        assert_eq!(d(1, Year).with(3, Month).to_unit(Day), 365 + 90);
        assert_eq!((-d(1, Year).with(3, Month)).to_unit(Day), -365 - 90);
        assert_eq!((d(-1, Year) + d(3, Month)).to_unit(Day), -9 * 30);
    }

    #[test]
    fn to_months_based_units() {
        assert_eq!(d(1, Month).to_unit(Month), 1);
        assert_eq!(d(366, Day).to_unit(Month), 12);
        assert_eq!(d(10, Year).to_unit(Month), 120);
        assert_eq!(d(366, Day).with(1, Month).to_unit(Month), 13);
        assert_eq!(d(732, Day).to_unit(Year), 2);
        assert_eq!(d(500, Year).to_unit(Century), 5);
        assert_eq!(d(3660, Day).with(12, Month).to_unit(Year), 11);
        assert_eq!(d(30, Day).to_unit(Month), 1);
        assert_eq!(d(365, Day).to_unit(Year), 1);
    }

    #[test]
    fn truncates_partial_units() {
        assert_eq!(d(1, Second).to_unit(Minute), 0);
        assert_eq!(d(3, Day).with(2, Second).to_unit(Minute), 3 * 24 * 60);
        assert_eq!(d(367, Day).to_unit(Year), 1);
    }

    #[test]
    fn breaks_down() {
        assert_eq!(d(365, Day).to_units(&[Hour]), vec![(Hour, 365 * 24)]);
        assert_eq!(d(180, Day).to_units(&[Week, Day]), vec![(Week, 25), (Day, 5)]);
        assert_eq!(
            d(90, Minute).to_units(&[Day, Hour, Minute, Second]),
            vec![(Day, 0), (Hour, 1), (Minute, 30), (Second, 0)]
        );
        assert_eq!(
            d(2, Year).with(14, Month).to_units(&[Year, Hour]),
            vec![(Year, 3), (Hour, 1440)]
        );
    }

    #[test]
    fn breaks_down_negative() {
        assert_eq!(d(-365, Day).to_units(&[Hour]), vec![(Hour, -365 * 24)]);
        assert_eq!(d(-180, Day).to_units(&[Week, Day]), vec![(Week, -25), (Day, -5)]);
        assert_eq!(
            d(-90, Minute).to_units(&[Day, Hour, Minute, Second]),
            vec![(Day, 0), (Hour, -1), (Minute, -30), (Second, 0)]
        );
        assert_eq!(
            d(-2, Year).with(-14, Month).to_units(&[Year, Hour]),
            vec![(Year, -3), (Hour, -2 * 30 * 24)]
        );
        assert_eq!(
            (d(-14, Month) + d(1, Day)).to_units(&[Year, Hour]),
            vec![(Year, -1), (Hour, -2 * 30 * 24 + 24)]
        );
    }

    #[test]
    fn named_breakdown_keeps_spelling() {
        assert_eq!(
            Duration::ZERO
                .to_named_units(&["second", "minutes", "hour", "days"])
                .unwrap(),
            vec![("days", 0), ("hour", 0), ("minutes", 0), ("second", 0)]
        );
        assert_eq!(
            Duration::ZERO.to_named_units(&["jiffies"]),
            Err(Error::UnknownUnit("jiffies".to_owned()))
        );
    }

    #[test]
    fn normalize() {
        assert_eq!(d(1, Month).normalize().get(Domain::Seconds), 30 * DAY);
        assert_eq!(d(11, Month).normalize().get(Domain::Seconds), 11 * 30 * DAY);
        assert_eq!(d(14, Month).normalize().get(Domain::Seconds), 365 * DAY + 60 * DAY);
        assert_eq!(
            d(25, Month).with(366, Day).normalize().get(Domain::Seconds),
            3 * 365 * DAY + 30 * DAY + DAY
        );
        assert_eq!(d(25, Month).normalize().get(Domain::Months), 0);
    }

    #[test]
    fn normalize_negative() {
        assert_eq!(d(-1, Month).normalize().get(Domain::Seconds), -30 * DAY);
        assert_eq!(d(-14, Month).normalize().get(Domain::Seconds), -365 * DAY - 60 * DAY);
        assert_eq!(
            (-d(25, Month).with(366, Day)).normalize().get(Domain::Seconds),
            -3 * 365 * DAY - 30 * DAY - DAY
        );
        // -2 years - 1 month + 1 year + 1 day
        assert_eq!(
            (d(-25, Month) + d(366, Day)).normalize().get(Domain::Seconds),
            -365 * DAY - 30 * DAY + DAY
        );
    }

    #[test]
    fn normalize_profiles() {
        let secs = |n: Duration, m| n.normalize_with(m).get(Domain::Seconds);
        assert_eq!(secs(d(1, Month), Normalization::Minimum), 28 * DAY);
        assert_eq!(secs(d(1, Month), Normalization::Maximum), 31 * DAY);
        assert_eq!(secs(d(1, Year), Normalization::Minimum), 365 * DAY);
        assert_eq!(secs(d(1, Year), Normalization::Maximum), 366 * DAY);
    }

    #[test]
    fn denormalize() {
        assert_eq!(d(30, Day).denormalize().to_unit(Month), 1);
        assert_eq!(
            d(1, Month).with(100, Day).denormalize().to_units(&[Month, Day]),
            vec![(Month, 4), (Day, 10)]
        );
        assert_eq!(
            d(2, Year).with(366, Day).denormalize().to_units(&[Year, Day]),
            vec![(Year, 3), (Day, 1)]
        );
        assert_eq!(d(29, Day).denormalize(), d(29, Day));
    }

    #[test]
    fn denormalize_negative() {
        assert_eq!(d(-30, Day).denormalize().to_unit(Month), -1);
        assert_eq!(
            (-d(1, Month).with(100, Day)).denormalize().to_units(&[Month, Day]),
            vec![(Month, -4), (Day, -10)]
        );
        assert_eq!(
            (-d(2, Year).with(366, Day)).denormalize().to_units(&[Year, Day]),
            vec![(Year, -3), (Day, -1)]
        );
        assert_eq!(
            (d(-2, Year) + d(366, Day)).denormalize().to_units(&[Year, Day]),
            vec![(Year, -1), (Day, 1)]
        );
    }

    #[test]
    fn denormalize_profiles() {
        let parts = |n: Duration, m, units: &[Unit]| n.denormalize_with(m).to_units(units);
        assert_eq!(
            parts(d(32, Day), Normalization::Minimum, &[Month, Day]),
            vec![(Month, 1), (Day, 4)]
        );
        assert_eq!(
            parts(d(32, Day), Normalization::Maximum, &[Month, Day]),
            vec![(Month, 1), (Day, 1)]
        );
        assert_eq!(
            parts(d(367, Day), Normalization::Minimum, &[Year, Day]),
            vec![(Year, 1), (Day, 2)]
        );
        assert_eq!(
            parts(d(367, Day), Normalization::Maximum, &[Year, Day]),
            vec![(Year, 1), (Day, 1)]
        );
    }

    #[test]
    fn unit_part_ignores_other_domain() {
        let n = d(1, Year).with(1, Month).with(365, Day);
        assert_eq!(n.to_unit_part(Month), 13);
        assert_eq!(n.to_unit_part(Year), 1);
        assert_eq!(n.to_unit_part(Decade), 0);
        assert_eq!(d(25, Month).to_unit_part(Year), 2);
    }

    fn any_unit() -> impl Strategy<Value = Unit> {
        proptest::sample::select(Unit::ALL.to_vec())
    }

    fn any_duration() -> impl Strategy<Value = Duration> {
        (-1_000_000_000i64..1_000_000_000, -100_000i64..100_000)
            .prop_map(|(s, m)| Duration::from_parts(s, m))
    }

    proptest! {
        #[test]
        fn prop_unit_round_trip(n in -1_000_000i64..1_000_000, unit in any_unit()) {
            prop_assert_eq!(Duration::of(n, unit).to_unit(unit), n);
        }

        #[test]
        fn prop_negation_is_involution(n in any_duration()) {
            prop_assert_eq!(-(-n), n);
        }

        #[test]
        fn prop_sub_undoes_add(a in any_duration(), b in any_duration()) {
            prop_assert_eq!((a + b) - b, a);
        }

        #[test]
        fn prop_breakdown_is_symmetric(n in any_duration()) {
            let units = [Year, Month, Week, Day, Hour, Second];
            let negated = (-n)
                .to_units(&units)
                .into_iter()
                .map(|(u, c)| (u, -c))
                .collect::<Vec<_>>();
            prop_assert_eq!(n.to_units(&units), negated);
        }

        #[test]
        fn prop_breakdown_is_exact_within_a_domain(secs in -1_000_000_000i64..1_000_000_000) {
            let n = Duration::from_parts(secs, 0);
            let total: i64 = n
                .to_units(&[Week, Day, Hour, Minute, Second])
                .into_iter()
                .map(|(u, c)| c * u.factor())
                .sum();
            prop_assert_eq!(total, secs);
        }

        #[test]
        fn prop_divide_truncates_toward_zero(n in any_duration(), k in 1i64..1000) {
            let q = n / k;
            prop_assert_eq!(q.get(Domain::Seconds), n.get(Domain::Seconds) / k);
            prop_assert_eq!(q.get(Domain::Months), n.get(Domain::Months) / k);
        }
    }
}
