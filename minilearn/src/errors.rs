//! Definition of errors.

use std::error::Error;
use std::fmt;

pub type Result<T, E = MinilearnError> = std::result::Result<T, E>;

#[derive(Debug)]
pub enum MinilearnError {
    InvalidArgument(InvalidArgumentError),
}

impl MinilearnError {
    pub(crate) fn invalid_argument<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidArgument(InvalidArgumentError {
            arg,
            msg: msg.into(),
        })
    }
}

impl fmt::Display for MinilearnError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidArgument(e) => e.fmt(f),
        }
    }
}

impl Error for MinilearnError {}

/// Error used when the argument is invalid.
#[derive(Debug)]
pub struct InvalidArgumentError {
    /// Name of the argument.
    pub(crate) arg: &'static str,

    /// Error message.
    pub(crate) msg: String,
}

impl InvalidArgumentError {
    /// Gets the name of the rejected argument.
    pub fn arg(&self) -> &'static str {
        self.arg
    }
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidArgumentError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidArgumentError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let e = MinilearnError::invalid_argument("features", "expected 2 values, got 3");

        assert_eq!(
            "InvalidArgumentError: features: expected 2 values, got 3",
            e.to_string()
        );
    }

    #[test]
    fn test_invalid_argument_arg() {
        let MinilearnError::InvalidArgument(e) = MinilearnError::invalid_argument("labels", "bad");

        assert_eq!("labels", e.arg());
    }
}
