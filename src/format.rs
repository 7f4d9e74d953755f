//! Rendering durations as text.
//!
//! A [`Syntax`] says which units to break the duration into, what to call each of them, and how
//! to join the pieces together. Three presets are provided: [`Syntax::micro`] (`1h`),
//! [`Syntax::short`] (`1hr 3min`) and [`Syntax::long`] (`1 hour, 3 minutes, 4 seconds`), which
//! is also what the [`Display`](std::fmt::Display) implementation of [`Duration`] uses.
//!
//! Negative durations are shown with a sign on every piece: `-1 day, -2 hours`.

use crate::{Duration, Unit};
use std::borrow::Cow;
use std::fmt;

/// What to call a unit when rendering it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    /// The same text whatever the count.
    One(Cow<'static, str>),
    /// Singular and plural text.
    Pair(Cow<'static, str>, Cow<'static, str>),
}

impl Label {
    /// A label with distinct singular and plural forms.
    pub fn pair(singular: impl Into<Cow<'static, str>>, plural: impl Into<Cow<'static, str>>) -> Self {
        Label::Pair(singular.into(), plural.into())
    }

    fn for_count(&self, count: i64) -> &str {
        match self {
            Label::One(label) => label,
            Label::Pair(singular, _) if count.unsigned_abs() == 1 => singular,
            Label::Pair(_, plural) => plural,
        }
    }
}

impl From<&'static str> for Label {
    fn from(label: &'static str) -> Self {
        Label::One(Cow::Borrowed(label))
    }
}

impl From<String> for Label {
    fn from(label: String) -> Self {
        Label::One(Cow::Owned(label))
    }
}

impl From<(&'static str, &'static str)> for Label {
    fn from((singular, plural): (&'static str, &'static str)) -> Self {
        Label::pair(singular, plural)
    }
}

/// How many units to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Count {
    /// Every unit with a non-zero count.
    All,
    /// At most this many, starting from the largest.
    Max(usize),
}

/// Describes how to render a [`Duration`] as text.
///
/// Start from one of the presets or [`Syntax::new`] and override individual fields:
///
/// ```
/// # use timerizer::{Count, Duration, Syntax, Unit};
/// let d = Duration::of(8, Unit::Day);
/// assert_eq!(d.render(&Syntax::long().separator("_")), "1_week, 1_day");
/// assert_eq!(d.render(&Syntax::micro().count(Count::Max(2))), "1w 1d");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syntax {
    units: Vec<(Unit, Label)>,
    separator: Cow<'static, str>,
    delimiter: Cow<'static, str>,
    count: Count,
}

impl Syntax {
    /// A syntax showing the given units. Counts are separated from labels by a space, pieces
    /// are delimited by `", "`, and all non-zero units are shown.
    pub fn new<I, L>(units: I) -> Self
    where
        I: IntoIterator<Item = (Unit, L)>,
        L: Into<Label>,
    {
        Syntax {
            units: units.into_iter().map(|(unit, label)| (unit, label.into())).collect(),
            separator: Cow::Borrowed(" "),
            delimiter: Cow::Borrowed(", "),
            count: Count::All,
        }
    }

    /// Single-letter labels, showing only the largest unit: `1h`.
    pub fn micro() -> Self {
        Syntax::new([
            (Unit::Second, "s"),
            (Unit::Minute, "m"),
            (Unit::Hour, "h"),
            (Unit::Day, "d"),
            (Unit::Week, "w"),
            (Unit::Month, "mo"),
            (Unit::Year, "y"),
        ])
        .separator("")
        .delimiter(" ")
        .count(Count::Max(1))
    }

    /// Abbreviated labels, showing the two largest units: `1hr 3min`.
    pub fn short() -> Self {
        Syntax::new([
            (Unit::Second, "sec"),
            (Unit::Minute, "min"),
            (Unit::Hour, "hr"),
            (Unit::Day, "d"),
            (Unit::Week, "wk"),
            (Unit::Month, "mo"),
            (Unit::Year, "yr"),
        ])
        .separator("")
        .delimiter(" ")
        .count(Count::Max(2))
    }

    /// Full words, showing every unit: `1 hour, 3 minutes, 4 seconds`.
    pub fn long() -> Self {
        Syntax::new(
            [
                Unit::Second,
                Unit::Minute,
                Unit::Hour,
                Unit::Day,
                Unit::Week,
                Unit::Month,
                Unit::Year,
            ]
            .map(|unit| (unit, Label::pair(unit.name(), unit.plural()))),
        )
    }

    /// Replace the units and their labels.
    pub fn units<I, L>(self, units: I) -> Self
    where
        I: IntoIterator<Item = (Unit, L)>,
        L: Into<Label>,
    {
        Syntax {
            units: units.into_iter().map(|(unit, label)| (unit, label.into())).collect(),
            ..self
        }
    }

    /// Text between each count and its label.
    pub fn separator(self, separator: impl Into<Cow<'static, str>>) -> Self {
        Syntax { separator: separator.into(), ..self }
    }

    /// Text between each piece.
    pub fn delimiter(self, delimiter: impl Into<Cow<'static, str>>) -> Self {
        Syntax { delimiter: delimiter.into(), ..self }
    }

    /// How many units to show at most.
    pub fn count(self, count: Count) -> Self {
        Syntax { count, ..self }
    }

    fn label(&self, unit: Unit) -> Option<&Label> {
        self.units.iter().find(|(u, _)| *u == unit).map(|(_, label)| label)
    }

    fn limit(&self) -> usize {
        match self.count {
            Count::All => usize::MAX,
            Count::Max(n) => n,
        }
    }
}

/// A [`Duration`] paired with a [`Syntax`], for use with `format!` and friends.
///
/// Returned by [`Duration::display`].
#[derive(Debug, Clone, Copy)]
pub struct Rendered<'a> {
    duration: &'a Duration,
    syntax: &'a Syntax,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let syntax = self.syntax;
        let units = syntax.units.iter().map(|&(unit, _)| unit).collect::<Vec<_>>();
        let parts = self.duration.to_units(&units);

        let nonzero = parts.into_iter().filter(|&(_, n)| n != 0).collect::<Vec<_>>();

        if nonzero.is_empty() {
            if let Some(smallest) = units.iter().min() {
                tracing::debug!(unit = %smallest, "nothing to show, rendering as zero");
                if let Some(label) = syntax.label(*smallest) {
                    write!(f, "0{}{}", syntax.separator, label.for_count(0))?;
                }
            }
            return Ok(());
        }

        for (i, (unit, n)) in nonzero.into_iter().take(syntax.limit()).enumerate() {
            if i > 0 {
                f.write_str(&syntax.delimiter)?;
            }
            if let Some(label) = syntax.label(unit) {
                write!(f, "{}{}{}", n, syntax.separator, label.for_count(n))?;
            }
        }

        Ok(())
    }
}

impl Duration {
    /// Render with the given syntax, as something implementing
    /// [`Display`](std::fmt::Display).
    pub fn display<'a>(&'a self, syntax: &'a Syntax) -> Rendered<'a> {
        Rendered { duration: self, syntax }
    }

    /// Render with the given syntax.
    pub fn render(&self, syntax: &Syntax) -> String {
        self.display(syntax).to_string()
    }

    /// Render with the given syntax, but showing no more than the two largest units.
    pub fn to_rounded_string(&self, syntax: &Syntax) -> String {
        let limit = syntax.limit().min(2);
        self.render(&syntax.clone().count(Count::Max(limit)))
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display(&Syntax::long()), f)
    }
}
