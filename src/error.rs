use std::num::ParseFloatError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("expected {expected:?} at offset {offset} of rectangle text")]
    UnexpectedText {
        expected: &'static str,
        offset: usize,
    },
    #[error("invalid number {text:?} in rectangle text")]
    InvalidNumber {
        text: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("unexpected input after rectangle text: {0:?}")]
    TrailingText(String),
    #[error("truncated rectangle encoding: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },
    #[error("{0} unexpected bytes after rectangle encoding")]
    TrailingBytes(usize),
    #[error("scale factor must be non-zero")]
    ZeroScale,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
