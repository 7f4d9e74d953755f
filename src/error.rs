//! The error type shared by the whole crate.

/// Errors returned by fallible operations in this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The name given is not a singular or plural name from the unit table.
    #[error("unknown unit: {0:?}")]
    UnknownUnit(String),

    /// A base domain was requested by a name other than `seconds` or `months`.
    #[error("invalid domain {0:?}, expected \"seconds\" or \"months\"")]
    InvalidDomain(String),

    /// A bare integer other than zero was used where a [`Duration`](crate::Duration) was expected.
    #[error("cannot use the integer {0} as a duration; only 0 is allowed")]
    InvalidOperand(i64),

    /// The duration has a month component, or does not fit within a single day, and so cannot
    /// be represented as a [`WallClock`](crate::WallClock) time.
    #[error("duration cannot be represented as a time of day")]
    TimeOutOfBounds,
}
