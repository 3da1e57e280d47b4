use thiserror::Error;

/// Errors from parsing a compact tree expression.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected '{expected}' at byte {pos}, found '{found}'")]
    Expected {
        expected: char,
        found: char,
        pos: usize,
    },

    #[error("unexpected character '{found}' at byte {pos}")]
    UnexpectedChar { found: char, pos: usize },

    #[error("unexpected end of input")]
    UnexpectedEnd,

    #[error("unexpected trailing input at byte {0}")]
    TrailingInput(usize),
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Errors from emitting a diagram to an output sink.
///
/// The layout itself has no failure modes; only the sink can fail.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to write diagram: {0}")]
    Io(#[from] std::io::Error),
}

pub type RenderResult<T> = Result<T, RenderError>;
