use crate::duration::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use crate::Duration;
use regex::Regex;
use std::sync::LazyLock;

#[allow(clippy::expect_used)]
fn unit_word(word: &str) -> Regex {
    Regex::new(&format!(r"(?i)([0-9]+)\s*{word}s?")).expect("should be valid regex")
}

static UNIT_WORDS: LazyLock<[(Regex, u64); 4]> = LazyLock::new(|| {
    [
        (unit_word("day"), SECONDS_PER_DAY),
        (unit_word("hour"), SECONDS_PER_HOUR),
        (unit_word("minute"), SECONDS_PER_MINUTE),
        (unit_word("second"), 1),
    ]
});

/// Reads spelled out units, e.g. `1 hour 30 minutes`.
///
/// Each unit is counted once, at its first occurrence.
pub fn parse_verbose(input: &str) -> Option<Duration> {
    let mut total = 0_u64;
    let mut matched = false;

    for (word, unit) in UNIT_WORDS.iter() {
        let Some(caps) = word.captures(input) else {
            continue;
        };
        matched = true;

        let value = caps.get(1)?.as_str().parse::<u64>().ok()?;
        total = value.checked_mul(*unit)?.checked_add(total)?;
    }

    matched.then_some(Duration::from_secs(total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn verbose_single_unit() {
        assert_eq!(Some(Duration::from_secs(1)), parse_verbose("1 second"));
        assert_eq!(Some(Duration::from_secs(60)), parse_verbose("1 minute"));
        assert_eq!(Some(Duration::from_secs(3_600)), parse_verbose("1 hour"));
        assert_eq!(Some(Duration::from_secs(86_400)), parse_verbose("1 day"));
        assert_eq!(Some(Duration::from_secs(172_800)), parse_verbose("2days"));
    }

    #[test]
    fn verbose_multiple_units() {
        assert_eq!(
            Some(Duration::from_secs(150)),
            parse_verbose("2 minutes 30 seconds")
        );
        assert_eq!(
            Some(Duration::from_secs(3_665)),
            parse_verbose("1 hour 1 minute 5 seconds")
        );
        assert_eq!(
            Some(Duration::from_secs(3_665)),
            parse_verbose("5 seconds and 1 minute after 1 hour")
        );
    }

    #[test]
    fn verbose_case_insensitive() {
        assert_eq!(Some(Duration::from_secs(3_600)), parse_verbose("1 HOUR"));
        assert_eq!(Some(Duration::from_secs(60)), parse_verbose("1 Minute"));
    }

    #[test]
    fn verbose_first_occurrence_per_unit() {
        assert_eq!(Some(Duration::from_secs(120)), parse_verbose("2 minutes, then 5 minutes"));
    }

    #[test]
    fn verbose_rejects() {
        assert_eq!(None, parse_verbose("invalid"));
        assert_eq!(None, parse_verbose("some hours"));
        assert_eq!(None, parse_verbose("99999999999999999999 seconds"));
    }
}
