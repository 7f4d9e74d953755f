#![deny(missing_docs, rust_2018_idioms)]

//! Durations which know the difference between a month and 30 days.
//!
//! A [`Duration`] is kept as two separate exact counts: a number of seconds, and a number of
//! months. Seconds, minutes, hours, days and weeks all have a fixed length and go into the first;
//! months, years, decades, centuries and millennia don't (a month is anywhere from 28 to 31 days,
//! a year 365 or 366) and go into the second. They are only mixed when explicitly asked for, using
//! one of the [`Normalization`] profiles to approximate.
//!
//! That lets a duration be applied to a date the way a person would expect: one month before
//! March 31st is the last day of February, not March 2nd or 3rd.
//!
//! ```
//! # #[cfg(feature = "chrono")] {
//! use chrono::NaiveDate;
//! use timerizer::{Duration, Unit};
//!
//! let end_of_march = NaiveDate::from_ymd_opt(2000, 3, 31).unwrap().and_hms_opt(3, 45, 0).unwrap();
//! let end_of_feb = NaiveDate::from_ymd_opt(2000, 2, 29).unwrap().and_hms_opt(3, 45, 0).unwrap();
//! assert_eq!(Duration::of(1, Unit::Month).before(end_of_march), end_of_feb);
//!
//! assert_eq!(Duration::of(400, Unit::Day).to_string(), "1 year, 1 month, 5 days");
//! # }
//! ```
//!
//! Durations can be applied to any type implementing [`Timestamp`]. This crate comes with
//! implementations for two types:
//!   - [`chrono::NaiveDateTime`] which is enabled by the `chrono` feature (on by default).
//!   - [`time::PrimitiveDateTime`] which can be enabled by compiling with the `time` feature.
//!
//! Timezones and leap seconds are not taken into account.

mod calendar;
mod duration;
mod error;
mod format;
mod unit;
mod wall_clock;

pub use calendar::{days_in_month, Timestamp};
pub use duration::Duration;
pub use error::Error;
pub use format::{Count, Label, Rendered, Syntax};
pub use unit::{Domain, Normalization, Unit};
pub use wall_clock::WallClock;
