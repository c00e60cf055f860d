use crate::Duration;
use logos::Logos;

#[derive(Logos, Debug, PartialEq, Eq)]
pub enum Token {
    #[token("{d}")]
    Days,

    #[token("{h}")]
    Hours,

    #[token("{m}")]
    Minutes,

    #[token("{s}")]
    Seconds,

    #[token("{dd}")]
    DaysPadded,

    #[token("{hh}")]
    HoursPadded,

    #[token("{mm}")]
    MinutesPadded,

    #[token("{ss}")]
    SecondsPadded,

    // A brace that does not start a placeholder is literal text
    #[token("{")]
    Brace,

    #[regex("[^{]+")]
    Text,
}

pub fn tokenize_pattern(s: &str) -> impl Iterator<Item = (Result<Token, ()>, &str)> + '_ {
    let lexer = Token::lexer(s);
    lexer.spanned().map(move |(tok, span)| (tok, s.get(span).unwrap_or_default()))
}

/// Substitutes every placeholder in a single pass, so `{d}` never eats into `{dd}`.
pub fn render_pattern(pattern: &str, duration: Duration) -> String {
    let mut out = String::with_capacity(pattern.len() + 8);

    for (tok, slice) in tokenize_pattern(pattern) {
        match tok {
            Ok(Token::Days) => out.push_str(&duration.days().to_string()),
            Ok(Token::Hours) => out.push_str(&duration.hours().to_string()),
            Ok(Token::Minutes) => out.push_str(&duration.minutes().to_string()),
            Ok(Token::Seconds) => out.push_str(&duration.seconds().to_string()),
            Ok(Token::DaysPadded) => out.push_str(&format!("{:02}", duration.days())),
            Ok(Token::HoursPadded) => out.push_str(&format!("{:02}", duration.hours())),
            Ok(Token::MinutesPadded) => out.push_str(&format!("{:02}", duration.minutes())),
            Ok(Token::SecondsPadded) => out.push_str(&format!("{:02}", duration.seconds())),
            Ok(Token::Brace | Token::Text) | Err(()) => out.push_str(slice),
        }
    }

    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use test_log::test;

    fn tokens(s: &str) -> Vec<Token> {
        tokenize_pattern(s).map(|(tok, _)| tok.unwrap()).collect()
    }

    #[test]
    fn tokenize_placeholders() {
        assert_eq!(
            vec![
                Token::Days,
                Token::Text,
                Token::HoursPadded,
                Token::Text,
                Token::Seconds
            ],
            tokens("{d}d {hh}:{s}"),
        );
    }

    #[test]
    fn tokenize_longest_match() {
        assert_eq!(vec![Token::DaysPadded, Token::Days], tokens("{dd}{d}"));
    }

    #[test]
    fn tokenize_unknown_placeholder() {
        assert_eq!(
            vec![Token::Brace, Token::Text, Token::Brace, Token::Text],
            tokens("{x}{ddd}"),
        );
    }

    #[test]
    fn render_all_placeholders() {
        let duration = Duration::from_secs(93_784);

        assert_eq!("1d 2h 3m 4s", render_pattern("{d}d {h}h {m}m {s}s", duration));
        assert_eq!("01:02:03:04", render_pattern("{dd}:{hh}:{mm}:{ss}", duration));
    }

    #[test]
    fn render_repeated_placeholders() {
        let duration = Duration::from_secs(3_665);

        assert_eq!("5 05 5", render_pattern("{s} {ss} {s}", duration));
    }

    #[test]
    fn render_literal_text() {
        let duration = Duration::from_secs(61);

        assert_eq!("no placeholders", render_pattern("no placeholders", duration));
        assert_eq!("{x} {1} {", render_pattern("{x} {1} {", duration));
        assert_eq!("{1}", render_pattern("{{m}}", duration));
        assert_eq!("", render_pattern("", duration));
    }

    #[test]
    fn render_padding_does_not_truncate() {
        let duration = Duration::of_days(123).unwrap();

        assert_eq!("123", render_pattern("{dd}", duration));
    }
}
