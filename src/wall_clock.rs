//! Times of day, and converting durations into them.

use crate::{Duration, Error, Unit};
use std::fmt;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// A time of day on a 24-hour clock, with no date attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WallClock {
    hour: u8,
    minute: u8,
    second: u8,
}

impl WallClock {
    /// Construct from an hour (0-23), minute and second (0-59), if those are in range.
    pub fn new(hour: u8, minute: u8, second: u8) -> Option<Self> {
        if hour < 24 && minute < 60 && second < 60 {
            Some(WallClock { hour, minute, second })
        } else {
            None
        }
    }

    /// The time of day the given number of seconds after midnight.
    pub fn from_seconds(seconds: i64) -> Result<Self, Error> {
        if !(0..SECONDS_PER_DAY).contains(&seconds) {
            return Err(Error::TimeOutOfBounds);
        }
        // In range, so each component fits in a u8.
        Ok(WallClock {
            hour: (seconds / 3600) as u8,
            minute: (seconds / 60 % 60) as u8,
            second: (seconds % 60) as u8,
        })
    }

    #[allow(missing_docs)]
    pub fn hour(self) -> u8 {
        self.hour
    }

    #[allow(missing_docs)]
    pub fn minute(self) -> u8 {
        self.minute
    }

    #[allow(missing_docs)]
    pub fn second(self) -> u8 {
        self.second
    }

    /// Seconds since midnight.
    pub fn seconds_since_midnight(self) -> i64 {
        i64::from(self.hour) * 3600 + i64::from(self.minute) * 60 + i64::from(self.second)
    }
}

impl fmt::Display for WallClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

impl From<WallClock> for Duration {
    fn from(wall: WallClock) -> Self {
        Duration::of(wall.seconds_since_midnight(), Unit::Second)
    }
}

impl TryFrom<Duration> for WallClock {
    type Error = Error;

    fn try_from(duration: Duration) -> Result<Self, Error> {
        duration.to_wall()
    }
}

impl Duration {
    /// Interpret this duration as a time after midnight.
    ///
    /// Fails with [`Error::TimeOutOfBounds`] if there is any months component, or if the seconds
    /// are negative or amount to a whole day or more.
    pub fn to_wall(&self) -> Result<WallClock, Error> {
        if self.get(crate::Domain::Months) != 0 {
            return Err(Error::TimeOutOfBounds);
        }
        WallClock::from_seconds(self.get(crate::Domain::Seconds))
    }
}
