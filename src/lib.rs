//! Whole-second durations that read and write like people do.
//!
//! A [`Duration`] is a non-negative number of seconds, broken down into days, hours,
//! minutes and seconds on demand. It renders into a handful of text layouts (see [`Format`])
//! and [`parse`] reads any of them back, along with most hand-written variations.
//!
//! There is no sub-second precision and no calendar: a day is always 86 400 seconds.
//!
//! ```
//! use hdur::{parse, Duration, Format, IntoDuration};
//!
//! let duration = 1_i64.days()? + 2_i64.hours()? + 30_i64.minutes()? + 45_i64.seconds()?;
//!
//! assert_eq!("1d 2h", duration.to_human_readable(&Format::Auto));
//! assert_eq!("1d2h30min45sec", duration.to_human_readable(&Format::Compact));
//! assert_eq!("1:02:30:45", duration.to_human_readable(&Format::ColonSeparated));
//! assert_eq!("1d 2h 30min 45sec", duration.to_human_readable(&Format::Verbose));
//! assert_eq!(
//!     "1 day, 02:30:45",
//!     duration.to_human_readable(&Format::Custom("{d} day, {hh}:{mm}:{ss}".into())),
//! );
//!
//! assert_eq!(Some(duration), parse("1:02:30:45"));
//! assert_eq!(Some(duration), parse("1d 2h 30m 45s"));
//! assert_eq!(Some(duration), parse("1 day 2 hours 30 minutes 45 seconds"));
//! assert_eq!(None, parse("soon"));
//!
//! // Durations never go negative
//! assert_eq!(Duration::ZERO, Duration::of_minutes(5)? - duration);
//! assert!(Duration::new(-1).is_err());
//!
//! # Ok::<(), hdur::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all, missing_docs, clippy::cargo)]
#![deny(clippy::unwrap_used)]
#![warn(clippy::indexing_slicing)]
#![warn(clippy::pedantic, clippy::nursery)]
#![warn(clippy::expect_used)]
#![allow(clippy::missing_const_for_fn)]
#![warn(clippy::multiple_crate_versions)]
#![warn(clippy::result_unit_err)]

mod duration;
mod error;
mod ext;
mod format;
mod parse;

pub use duration::Duration;
pub use error::{Error, Result};
pub use ext::IntoDuration;
pub use format::Format;
pub use parse::parse;
