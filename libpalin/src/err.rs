use std::fmt;

use crate::parse;

pub type Res<T> = Result<T, Err>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Err {
    ParseError(String),
    IoError(String),
    UnknownStrategy(String),
    /// Checking recursively would need `depth` stack frames, more than the
    /// configured `limit`.
    MaxRecursionDepthExceeded {
        depth: usize,
        limit: usize,
    },
}

impl fmt::Display for Err {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Err::ParseError(msg) => write!(f, "Unable to parse:\n{msg}"),
            Err::IoError(err) => f.write_str(err),
            Err::UnknownStrategy(name) => write!(
                f,
                "Unknown strategy `{name}` (expected `recursive`, `iterative` or `auto`)."
            ),
            Err::MaxRecursionDepthExceeded { depth, limit } => {
                write!(
                    f,
                    "A recursive check needs {depth} stack frames, but the limit is {limit}.",
                )
            }
        }
    }
}

impl std::error::Error for Err {}

impl From<std::io::Error> for Err {
    fn from(err: std::io::Error) -> Self {
        Err::IoError(err.to_string())
    }
}

impl From<parse::Error> for Err {
    fn from(err: parse::Error) -> Self {
        Err::ParseError(err.to_string())
    }
}
