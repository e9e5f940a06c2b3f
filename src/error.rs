use thiserror::Error;

/// Everything that can go wrong while parsing or solving a puzzle input.
#[derive(Error, Debug)]
pub enum Error {
    /// `line` is 1-based.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("range {lo}-{hi} has reversed bounds")]
    ReversedRange { lo: u64, hi: u64 },
    #[error("cannot select {wanted} digits from a bank of {available}")]
    NotEnoughDigits { wanted: usize, available: usize },
    #[error("invalid matrix: {0}")]
    InvalidMatrix(&'static str),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("answer does not fit in 64 bits")]
    Overflow,
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Error::Parse {
            line,
            message: message.into(),
        }
    }
}
