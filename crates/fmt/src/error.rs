use std::fmt;

/// An error surfaced to the caller of [`crate::format`].
///
/// Hand-rolled rather than derived: matches the plain-struct-plus-`Display`
/// convention the dialect/core crates already use for their error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An option record failed validation: unknown option, unknown dialect
    /// tag, out-of-range numeric value, or wrong option type.
    Config(String),
    /// The query input itself was invalid (absent, or not valid UTF-8 text
    /// by the time it reaches this layer).
    Input(String),
    /// A `PLACEHOLDER` token could not be resolved against the supplied
    /// params table.
    Placeholder(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(msg) => write!(f, "config error: {msg}"),
            Error::Input(msg) => write!(f, "input error: {msg}"),
            Error::Placeholder(msg) => write!(f, "placeholder error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
