use crate::Duration;

/// Unit helpers on plain integers.
///
/// ```
/// use hdur::{Duration, IntoDuration};
///
/// let duration = 1_i64.hours()? + 30_i64.minutes()? + 45_i64.seconds()?;
///
/// assert_eq!(Duration::new(5_445)?, duration);
/// assert!((-2_i32).days().is_err());
///
/// # Ok::<(), hdur::Error>(())
/// ```
pub trait IntoDuration {
    /// Turns N days into a duration.
    ///
    /// # Errors
    ///
    /// Same as [`Duration::of_days`].
    fn days(self) -> crate::Result<Duration>;

    /// Turns N hours into a duration.
    ///
    /// # Errors
    ///
    /// Same as [`Duration::of_hours`].
    fn hours(self) -> crate::Result<Duration>;

    /// Turns N minutes into a duration.
    ///
    /// # Errors
    ///
    /// Same as [`Duration::of_minutes`].
    fn minutes(self) -> crate::Result<Duration>;

    /// Turns N seconds into a duration.
    ///
    /// # Errors
    ///
    /// Same as [`Duration::of_seconds`].
    fn seconds(self) -> crate::Result<Duration>;
}

impl IntoDuration for i64 {
    fn days(self) -> crate::Result<Duration> {
        Duration::of_days(self)
    }

    fn hours(self) -> crate::Result<Duration> {
        Duration::of_hours(self)
    }

    fn minutes(self) -> crate::Result<Duration> {
        Duration::of_minutes(self)
    }

    fn seconds(self) -> crate::Result<Duration> {
        Duration::of_seconds(self)
    }
}

macro_rules! widen_into_duration {
    ($($t:ty),*) => {$(
        impl IntoDuration for $t {
            fn days(self) -> crate::Result<Duration> {
                i64::from(self).days()
            }

            fn hours(self) -> crate::Result<Duration> {
                i64::from(self).hours()
            }

            fn minutes(self) -> crate::Result<Duration> {
                i64::from(self).minutes()
            }

            fn seconds(self) -> crate::Result<Duration> {
                i64::from(self).seconds()
            }
        }
    )*};
}

widen_into_duration!(i32, u32);
