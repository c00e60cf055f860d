pub mod pattern;

use crate::duration::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use crate::Duration;
use pattern::render_pattern;

/// Text layout used by [`Duration::to_human_readable`].
///
/// ```
/// use hdur::{Duration, Format};
///
/// let duration = Duration::new(95_445)?;
///
/// assert_eq!("1d 2h", duration.to_human_readable(&Format::Auto));
/// assert_eq!("1d2h30min45sec", duration.to_human_readable(&Format::Compact));
/// assert_eq!("1:02:30:45", duration.to_human_readable(&Format::ColonSeparated));
/// assert_eq!("1d 2h 30min 45sec", duration.to_human_readable(&Format::Verbose));
/// assert_eq!(
///     "21:30",
///     duration.to_human_readable(&Format::Custom("{h}{d}:{mm}".into())),
/// );
///
/// # Ok::<(), hdur::Error>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Format {
    /// At most two units, picked by magnitude: "45sec", "2min 30sec", "1h 30min", "1d 2h".
    #[default]
    Auto,

    /// Every non-zero unit without separators: "1d2h30min45sec".
    Compact,

    /// Clock style: "2:30", "1:30:00", "1:02:30:45".
    ColonSeparated,

    /// Every non-zero unit separated by spaces: "1d 2h 30min 45sec".
    Verbose,

    /// Template with placeholders.
    ///
    /// - `{d}`, `{h}`, `{m}`, `{s}`: values without padding
    /// - `{dd}`, `{hh}`, `{mm}`, `{ss}`: values zero-padded to two digits
    ///
    /// Values are the day/hour/minute/second components, not totals.
    /// Anything else is copied as is.
    Custom(String),
}

impl Format {
    pub(crate) fn render(&self, duration: Duration) -> String {
        match self {
            Self::Auto => render_auto(duration),
            Self::Compact => units(duration).concat(),
            Self::ColonSeparated => render_colon_separated(duration),
            Self::Verbose => units(duration).join(" "),
            Self::Custom(pattern) => render_pattern(pattern, duration),
        }
    }
}

fn render_auto(d: Duration) -> String {
    let total = d.total_seconds();

    // NOTE: The leading unit is a total, the trailing one a component
    if total < SECONDS_PER_MINUTE {
        format!("{}sec", d.seconds())
    } else if total < SECONDS_PER_HOUR {
        if d.seconds() == 0 {
            format!("{}min", d.total_minutes())
        } else {
            format!("{}min {}sec", d.total_minutes(), d.seconds())
        }
    } else if total < SECONDS_PER_DAY {
        if d.minutes() == 0 {
            format!("{}h", d.total_hours())
        } else {
            format!("{}h {}min", d.total_hours(), d.minutes())
        }
    } else if d.hours() == 0 {
        format!("{}d", d.days())
    } else {
        format!("{}d {}h", d.days(), d.hours())
    }
}

fn render_colon_separated(d: Duration) -> String {
    if d.days() > 0 {
        format!(
            "{}:{:02}:{:02}:{:02}",
            d.days(),
            d.hours(),
            d.minutes(),
            d.seconds()
        )
    } else if d.hours() > 0 {
        format!("{}:{:02}:{:02}", d.hours(), d.minutes(), d.seconds())
    } else {
        format!("{}:{:02}", d.minutes(), d.seconds())
    }
}

/// Non-zero components, largest first, or "0sec" if there are none.
fn units(d: Duration) -> Vec<String> {
    let mut parts = Vec::with_capacity(4);

    for (value, suffix) in [
        (d.days(), "d"),
        (d.hours(), "h"),
        (d.minutes(), "min"),
        (d.seconds(), "sec"),
    ] {
        if value > 0 {
            parts.push(format!("{value}{suffix}"));
        }
    }

    if parts.is_empty() {
        parts.push("0sec".to_owned());
    }

    parts
}
