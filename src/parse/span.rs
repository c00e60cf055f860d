use nom::IResult;
use nom_locate::LocatedSpan;

pub type Span<'a> = LocatedSpan<&'a str>;

pub type ParseResult<'a, T> = IResult<Span<'a>, T>;

/// A fragment of duration text that can be read off a located span.
pub trait Parse<'a>: Sized {
    fn parse(input: Span<'a>) -> ParseResult<'a, Self>;

    fn parse_str(input: &'a str) -> ParseResult<'a, Self> {
        Self::parse(Span::new(input))
    }
}

/// 1-based column in the trimmed input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Column(pub usize);

impl Column {
    /// Where a combinator gave up, if it did not just run out of input.
    pub fn of_failure(err: &nom::Err<nom::error::Error<Span<'_>>>) -> Option<Self> {
        match err {
            nom::Err::Error(e) | nom::Err::Failure(e) => Some(Self(e.input.get_column())),
            nom::Err::Incomplete(_) => None,
        }
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "column {}", self.0)
    }
}
