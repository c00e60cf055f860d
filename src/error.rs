/// Error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A duration would have become negative.
    InvalidArgument(String),

    /// A second count does not fit into 64 bits.
    Overflow,

    /// Tried to divide a duration by zero.
    DivisionByZero,

    /// No duration grammar accepted the input.
    InvalidFormat(String),
}

impl Error {
    pub(crate) fn negative(value: impl std::fmt::Display) -> Self {
        Self::InvalidArgument(format!("Duration cannot be negative: {value}"))
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(msg) => {
                write!(f, "{msg}",)
            }
            Self::Overflow => {
                write!(f, "Overflow",)
            }
            Self::DivisionByZero => {
                write!(f, "DivisionByZero",)
            }
            Self::InvalidFormat(input) => {
                write!(f, "InvalidFormat: {input:?}",)
            }
        }
    }
}

impl std::error::Error for Error {}

/// Result helper type
pub type Result<T> = std::result::Result<T, Error>;
