use crate::duration::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use crate::Duration;
use regex::Regex;
use std::sync::LazyLock;

#[allow(clippy::expect_used)]
static UNIT_TERM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)\s*([dhms])").expect("should be valid regex"));

fn unit_seconds(unit: &str) -> Option<u64> {
    match unit {
        "d" => Some(SECONDS_PER_DAY),
        "h" => Some(SECONDS_PER_HOUR),
        "m" => Some(SECONDS_PER_MINUTE),
        "s" => Some(1),
        _ => None,
    }
}

/// Sums every `<number><unit>` term found anywhere in the input, e.g. `1h 30m`.
///
/// Only the first letter of a unit counts, so `2min 30sec` is read as `2m 30s`.
pub fn parse_compact(input: &str) -> Option<Duration> {
    let lowered = input.to_lowercase();

    let mut total = 0_u64;
    let mut matched = false;

    for caps in UNIT_TERM.captures_iter(&lowered) {
        matched = true;

        let value = caps.get(1)?.as_str().parse::<u64>().ok()?;
        let unit = unit_seconds(caps.get(2)?.as_str())?;

        total = value.checked_mul(unit)?.checked_add(total)?;
    }

    matched.then_some(Duration::from_secs(total))
}
