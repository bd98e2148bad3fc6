#[derive(Debug, thiserror::Error)]
pub enum ResponseError {
    #[error("Invalid status line: {0:?}")]
    InvalidStatusLine(String),

    #[error("Invalid header line: {0:?}")]
    InvalidHeaderLine(String),

    #[error("Body already consumed")]
    BodyAlreadyConsumed,

    #[error("Line exceeds limit of {limit} bytes")]
    LineTooLong { limit: usize },

    #[error("Line is not valid UTF-8")]
    InvalidUtf8,

    #[error("Unexpected end of input before body terminator")]
    UnexpectedEof,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
