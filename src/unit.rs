//! The unit table: every unit a [`Duration`](crate::Duration) can be built from or broken down
//! into, and the profiles used to approximate months as seconds.

use crate::Error;
use std::fmt;
use std::str::FromStr;

/// One of the two base units every other unit is counted in.
///
/// Seconds-based units (second through week) have an exact length. Months-based units (month
/// through millennium) do not, since months and years vary in length, so the two are never mixed
/// without an explicit [`Normalization`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Domain {
    /// Counted in whole seconds.
    Seconds,
    /// Counted in whole months.
    Months,
}

impl FromStr for Domain {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "seconds" => Ok(Domain::Seconds),
            "months" => Ok(Domain::Months),
            _ => Err(Error::InvalidDomain(s.to_owned())),
        }
    }
}

/// A named unit of time.
///
/// Variants are declared in ascending order of length, so the derived `Ord` is the canonical
/// unit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[allow(missing_docs)]
pub enum Unit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
    Decade,
    Century,
    Millennium,
}

struct UnitInfo {
    name: &'static str,
    plural: &'static str,
    domain: Domain,
    factor: i64,
}

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

// Indexed by `Unit as usize`.
static UNITS: [UnitInfo; 10] = [
    UnitInfo { name: "second", plural: "seconds", domain: Domain::Seconds, factor: 1 },
    UnitInfo { name: "minute", plural: "minutes", domain: Domain::Seconds, factor: MINUTE },
    UnitInfo { name: "hour", plural: "hours", domain: Domain::Seconds, factor: HOUR },
    UnitInfo { name: "day", plural: "days", domain: Domain::Seconds, factor: DAY },
    UnitInfo { name: "week", plural: "weeks", domain: Domain::Seconds, factor: 7 * DAY },
    UnitInfo { name: "month", plural: "months", domain: Domain::Months, factor: 1 },
    UnitInfo { name: "year", plural: "years", domain: Domain::Months, factor: 12 },
    UnitInfo { name: "decade", plural: "decades", domain: Domain::Months, factor: 120 },
    UnitInfo { name: "century", plural: "centuries", domain: Domain::Months, factor: 1200 },
    UnitInfo { name: "millennium", plural: "millennia", domain: Domain::Months, factor: 12000 },
];

impl Unit {
    /// Every unit, shortest first.
    pub const ALL: [Unit; 10] = [
        Unit::Second,
        Unit::Minute,
        Unit::Hour,
        Unit::Day,
        Unit::Week,
        Unit::Month,
        Unit::Year,
        Unit::Decade,
        Unit::Century,
        Unit::Millennium,
    ];

    fn info(self) -> &'static UnitInfo {
        &UNITS[self as usize]
    }

    /// The singular name, e.g. `"century"`.
    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// The plural name, e.g. `"centuries"`.
    pub fn plural(self) -> &'static str {
        self.info().plural
    }

    /// Which base field of a [`Duration`](crate::Duration) this unit is counted in.
    pub fn domain(self) -> Domain {
        self.info().domain
    }

    /// How many of the domain's base unit (one second or one month) make up one of this unit.
    pub fn factor(self) -> i64 {
        self.info().factor
    }

    /// Look up a unit by its singular or plural name.
    pub fn from_name(name: &str) -> Result<Self, Error> {
        Self::ALL
            .iter()
            .copied()
            .find(|unit| unit.name() == name || unit.plural() == name)
            .ok_or_else(|| Error::UnknownUnit(name.to_owned()))
    }
}

impl FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Self::from_name(s)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How to approximate months-based units as seconds when crossing domains.
///
/// Only used by the operations which explicitly convert between domains; arithmetic within a
/// domain is always exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Normalization {
    /// 30-day months, 365-day years.
    #[default]
    Standard,
    /// 28-day months, 365-day years.
    Minimum,
    /// 31-day months, 366-day years.
    Maximum,
}

impl Normalization {
    /// Approximate length of one month, in seconds.
    pub fn month_seconds(self) -> i64 {
        match self {
            Normalization::Standard => 30 * DAY,
            Normalization::Minimum => 28 * DAY,
            Normalization::Maximum => 31 * DAY,
        }
    }

    /// Approximate length of one year, in seconds.
    pub fn year_seconds(self) -> i64 {
        match self {
            Normalization::Standard | Normalization::Minimum => 365 * DAY,
            Normalization::Maximum => 366 * DAY,
        }
    }

    /// The approximated months-based units, largest first, with their length in seconds.
    pub(crate) fn steps(self) -> [(Unit, i64); 2] {
        [
            (Unit::Year, self.year_seconds()),
            (Unit::Month, self.month_seconds()),
        ]
    }
}
