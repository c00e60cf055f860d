use super::span::{Column, Parse, ParseResult, Span};
use crate::duration::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use crate::Duration;
use nom::{
    bytes::complete::tag,
    character::complete::digit1,
    combinator::{all_consuming, map_res},
    multi::separated_list1,
};

const MM_SS: [u64; 2] = [SECONDS_PER_MINUTE, 1];
const HH_MM_SS: [u64; 3] = [SECONDS_PER_HOUR, SECONDS_PER_MINUTE, 1];
const DD_HH_MM_SS: [u64; 4] = [SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, 1];

/// Colon separated fields, e.g. `1:02:30`.
#[derive(Debug, Eq, PartialEq)]
pub struct ClockTime {
    pub fields: Vec<u64>,
}

impl ClockTime {
    fn parse_field(input: Span<'_>) -> ParseResult<'_, u64> {
        map_res(digit1, |digits: Span<'_>| digits.fragment().parse::<u64>())(input)
    }

    /// Interprets the fields by their count: `mm:ss`, `hh:mm:ss` or `dd:hh:mm:ss`.
    pub fn to_duration(&self) -> Option<Duration> {
        let units: &[u64] = match self.fields.len() {
            2 => &MM_SS,
            3 => &HH_MM_SS,
            4 => &DD_HH_MM_SS,
            _ => return None,
        };

        self.fields
            .iter()
            .zip(units)
            .try_fold(0_u64, |total, (value, unit)| {
                value.checked_mul(*unit)?.checked_add(total)
            })
            .map(Duration::from_secs)
    }
}

impl<'a> Parse<'a> for ClockTime {
    fn parse(input: Span<'a>) -> ParseResult<'a, Self> {
        let (input, fields) =
            all_consuming(separated_list1(tag(":"), Self::parse_field))(input)?;

        Ok((input, Self { fields }))
    }
}

pub fn parse_colon(input: &str) -> Option<Duration> {
    if !input.contains(':') {
        return None;
    }

    match ClockTime::parse_str(input) {
        Ok((_, clock)) => {
            let duration = clock.to_duration();
            if duration.is_none() {
                log::trace!("{} colon separated fields do not form a duration", clock.fields.len());
            }
            duration
        }
        Err(e) => {
            if let Some(column) = Column::of_failure(&e) {
                log::trace!("colon grammar rejected {input:?} at {column}");
            }
            None
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn parse_clock_fields() {
        let (_, clock) = ClockTime::parse_str("1:02:30").unwrap();

        assert_eq!(vec![1, 2, 30], clock.fields);
    }

    #[test]
    fn parse_clock_single_field() {
        let (_, clock) = ClockTime::parse_str("42").unwrap();

        assert_eq!(vec![42], clock.fields);
        assert_eq!(None, clock.to_duration());
    }

    #[test]
    fn parse_clock_stops_at_bad_field() {
        let err = ClockTime::parse_str("1:x:30").unwrap_err();

        assert_eq!(Some(Column(2)), Column::of_failure(&err));
    }

    #[test]
    fn parse_clock_rejects_overflowing_field() {
        assert!(ClockTime::parse_str("99999999999999999999:00").is_err());
    }

    #[test]
    fn colon_mm_ss() {
        assert_eq!(Some(Duration::from_secs(150)), parse_colon("2:30"));
        assert_eq!(Some(Duration::from_secs(3_600)), parse_colon("60:00"));
        assert_eq!(Some(Duration::ZERO), parse_colon("0:00"));
    }

    #[test]
    fn colon_hh_mm_ss() {
        assert_eq!(Some(Duration::from_secs(3_665)), parse_colon("1:01:05"));
    }

    #[test]
    fn colon_dd_hh_mm_ss() {
        assert_eq!(Some(Duration::from_secs(90_061)), parse_colon("1:01:01:01"));
    }

    #[test]
    fn colon_rejects() {
        assert_eq!(None, parse_colon("90"));
        assert_eq!(None, parse_colon("1:2:3:4:5"));
        assert_eq!(None, parse_colon("abc:def"));
        assert_eq!(None, parse_colon("1:x"));
        assert_eq!(None, parse_colon("1:"));
        assert_eq!(None, parse_colon(":30"));
        assert_eq!(None, parse_colon("-1:30"));
        assert_eq!(None, parse_colon("1: 30"));
        assert_eq!(None, parse_colon("213503982334602:00:00:00"));
    }
}
