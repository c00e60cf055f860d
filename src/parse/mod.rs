mod colon;
mod compact;
mod span;
mod verbose;

use crate::{Duration, Error};
use colon::parse_colon;
use compact::parse_compact;
use verbose::parse_verbose;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Grammar {
    Colon,
    Compact,
    Verbose,
}

impl std::fmt::Display for Grammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Colon => write!(f, "colon"),
            Self::Compact => write!(f, "compact"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

// Most structured grammar first
const GRAMMARS: [(Grammar, fn(&str) -> Option<Duration>); 3] = [
    (Grammar::Colon, parse_colon),
    (Grammar::Compact, parse_compact),
    (Grammar::Verbose, parse_verbose),
];

/// Reads a duration from free-form text.
///
/// Three grammars are tried in order, the first one that accepts the input wins:
///
/// 1. Colon separated: `2:30` (mm:ss), `1:30:45` (hh:mm:ss), `2:01:30:45` (dd:hh:mm:ss)
/// 2. Compact: `1h30m45s`, `90m`, `2 h`, also `1d 2h 30min 45sec`
/// 3. Verbose: `1 hour 30 minutes`, `2 days`
///
/// Units are case-insensitive.
/// Returns `None` if no grammar accepts the input, it never panics.
///
/// ```
/// use hdur::{parse, Duration, Format};
///
/// assert_eq!(Some(Duration::new(90_061)?), parse("1:01:01:01"));
/// assert_eq!(Some(Duration::new(3_665)?), parse("1 hour 1 minute 5 seconds"));
/// assert_eq!(None, parse("abc:def"));
///
/// let duration = Duration::new(95_445)?;
/// let text = duration.to_human_readable(&Format::Compact);
/// assert_eq!(Some(duration), parse(&text));
///
/// # Ok::<(), hdur::Error>(())
/// ```
#[must_use]
pub fn parse(input: &str) -> Option<Duration> {
    let input = input.trim();

    if input.is_empty() {
        return None;
    }

    for (grammar, parse_with) in GRAMMARS {
        if let Some(duration) = parse_with(input) {
            log::trace!("parsed {input:?} as {duration:?} using {grammar} grammar");
            return Some(duration);
        }
    }

    log::trace!("no grammar accepted {input:?}");

    None
}

impl std::str::FromStr for Duration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).ok_or_else(|| Error::InvalidFormat(s.to_owned()))
    }
}
