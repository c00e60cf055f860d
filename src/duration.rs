use crate::{Error, Format};
use std::ops::{Add, Sub};

pub(crate) const SECONDS_PER_MINUTE: u64 = 60;
pub(crate) const SECONDS_PER_HOUR: u64 = 3_600;
pub(crate) const SECONDS_PER_DAY: u64 = 86_400;

/// A non-negative span of time in whole seconds.
///
/// The day, hour, minute and second components are derived from the total
/// on every access, nothing else is stored.
///
/// ```
/// use hdur::{Duration, Format};
///
/// let duration = Duration::new(3_665)?;
///
/// assert_eq!(1, duration.hours());
/// assert_eq!(1, duration.minutes());
/// assert_eq!(5, duration.seconds());
/// assert_eq!(61, duration.total_minutes());
///
/// assert_eq!("1h 1min", duration.to_human_readable(&Format::Auto));
/// assert_eq!("1:01:05", duration.to_human_readable(&Format::ColonSeparated));
///
/// let later = duration + Duration::of_minutes(30)?;
/// assert_eq!("1h31min5sec", later.to_human_readable(&Format::Compact));
///
/// // Subtraction clamps at zero
/// assert_eq!(Duration::ZERO, duration - later);
///
/// # Ok::<(), hdur::Error>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration(u64);

impl Duration {
    /// A duration of zero seconds.
    pub const ZERO: Self = Self(0);

    /// Creates a duration of N seconds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `seconds` is negative.
    pub fn new(seconds: i64) -> crate::Result<Self> {
        u64::try_from(seconds)
            .map(Self)
            .map_err(|_| Error::negative(seconds))
    }

    /// Creates a duration of N seconds, which cannot fail.
    #[must_use]
    pub const fn from_secs(seconds: u64) -> Self {
        Self(seconds)
    }

    /// Creates a duration of N days.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `days` is negative,
    /// or [`Error::Overflow`] if the second count does not fit.
    pub fn of_days(days: i64) -> crate::Result<Self> {
        Self::of_unit(days, SECONDS_PER_DAY)
    }

    /// Creates a duration of N hours.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `hours` is negative,
    /// or [`Error::Overflow`] if the second count does not fit.
    pub fn of_hours(hours: i64) -> crate::Result<Self> {
        Self::of_unit(hours, SECONDS_PER_HOUR)
    }

    /// Creates a duration of N minutes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `minutes` is negative,
    /// or [`Error::Overflow`] if the second count does not fit.
    pub fn of_minutes(minutes: i64) -> crate::Result<Self> {
        Self::of_unit(minutes, SECONDS_PER_MINUTE)
    }

    /// Creates a duration of N seconds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `seconds` is negative.
    pub fn of_seconds(seconds: i64) -> crate::Result<Self> {
        Self::new(seconds)
    }

    fn of_unit(n: i64, unit: u64) -> crate::Result<Self> {
        Self::from_wide(i128::from(n) * i128::from(unit))
    }

    /// u64 * i64 always fits into an i128, so every product lands here unwrapped.
    fn from_wide(value: i128) -> crate::Result<Self> {
        if value < 0 {
            return Err(Error::negative(value));
        }
        u64::try_from(value).map(Self).map_err(|_| Error::Overflow)
    }

    /// Complete days.
    #[must_use]
    pub const fn days(&self) -> u64 {
        self.0 / SECONDS_PER_DAY
    }

    /// Hours left over after taking out complete days.
    #[must_use]
    pub const fn hours(&self) -> u64 {
        (self.0 % SECONDS_PER_DAY) / SECONDS_PER_HOUR
    }

    /// Minutes left over after taking out complete hours.
    #[must_use]
    pub const fn minutes(&self) -> u64 {
        (self.0 % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE
    }

    /// Seconds left over after taking out complete minutes.
    #[must_use]
    pub const fn seconds(&self) -> u64 {
        self.0 % SECONDS_PER_MINUTE
    }

    /// Whole minutes in the entire duration.
    #[must_use]
    pub const fn total_minutes(&self) -> u64 {
        self.0 / SECONDS_PER_MINUTE
    }

    /// Whole hours in the entire duration.
    #[must_use]
    pub const fn total_hours(&self) -> u64 {
        self.0 / SECONDS_PER_HOUR
    }

    /// Whole days in the entire duration.
    #[must_use]
    pub const fn total_days(&self) -> u64 {
        self.0 / SECONDS_PER_DAY
    }

    /// The entire duration in seconds.
    #[must_use]
    pub const fn total_seconds(&self) -> u64 {
        self.0
    }

    /// Returns `true` if this duration is zero seconds long.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if this duration is longer than zero seconds.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Adds two durations, returning `None` on overflow.
    #[must_use]
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.0.checked_add(rhs.0) {
            Some(total) => Some(Self(total)),
            None => None,
        }
    }

    /// Multiplies the duration by `factor`.
    ///
    /// Multiplying a zero duration by a negative factor stays zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the result would be negative,
    /// or [`Error::Overflow`] if it does not fit.
    pub fn multiply(self, factor: i64) -> crate::Result<Self> {
        Self::from_wide(i128::from(self.0) * i128::from(factor))
    }

    /// Divides the duration by `divisor`, truncating the quotient.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if `divisor` is zero,
    /// or [`Error::InvalidArgument`] if the quotient would be negative.
    pub fn divide(self, divisor: i64) -> crate::Result<Self> {
        if divisor == 0 {
            return Err(Error::DivisionByZero);
        }
        Self::from_wide(i128::from(self.0) / i128::from(divisor))
    }

    /// Renders the duration as text.
    ///
    /// See [`Format`] for the available layouts.
    #[must_use]
    pub fn to_human_readable(&self, format: &Format) -> String {
        format.render(*self)
    }
}

/// Saturates at the largest representable duration.
impl Add for Duration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

/// Clamps at zero, a duration never goes negative.
impl Sub for Duration {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl std::fmt::Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_human_readable(&Format::Auto))
    }
}

impl From<Duration> for std::time::Duration {
    fn from(value: Duration) -> Self {
        Self::from_secs(value.0)
    }
}

/// Drops the sub-second part.
impl From<std::time::Duration> for Duration {
    fn from(value: std::time::Duration) -> Self {
        Self(value.as_secs())
    }
}
