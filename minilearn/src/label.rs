use std::fmt;

use crate::errors::{MinilearnError, Result};

/// Binary class label.
#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
#[repr(u8)]
pub enum Label {
    /// Negative class. (e.g. "not spam", logical false)
    Negative = 0,

    /// Positive class. (e.g. "spam", logical true)
    Positive = 1,
}

impl Label {
    /// Converts a raw training label.
    ///
    /// # Errors
    ///
    /// [`MinilearnError::InvalidArgument`] will be returned if `value` is neither 0 nor 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use minilearn::Label;
    ///
    /// assert_eq!(Label::Positive, Label::from_i32(1).unwrap());
    /// assert!(Label::from_i32(2).is_err());
    /// ```
    pub fn from_i32(value: i32) -> Result<Self> {
        match value {
            0 => Ok(Self::Negative),
            1 => Ok(Self::Positive),
            _ => Err(MinilearnError::invalid_argument(
                "label",
                format!("must be 0 or 1, got {}", value),
            )),
        }
    }

    /// Gets the label as a signed integer, used for the perceptron error term.
    #[inline(always)]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for Label {
    type Error = MinilearnError;

    fn try_from(value: i32) -> Result<Self> {
        Self::from_i32(value)
    }
}

impl From<bool> for Label {
    fn from(value: bool) -> Self {
        if value {
            Self::Positive
        } else {
            Self::Negative
        }
    }
}

impl From<Label> for i32 {
    fn from(label: Label) -> Self {
        label.as_i32()
    }
}

impl From<Label> for u8 {
    fn from(label: Label) -> Self {
        label as u8
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", *self as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_from_i32() {
        assert_eq!(Label::Negative, Label::try_from(0).unwrap());
        assert_eq!(Label::Positive, Label::try_from(1).unwrap());
    }

    #[test]
    fn test_label_from_i32_out_of_range() {
        let e = Label::try_from(-1).unwrap_err();

        assert_eq!("InvalidArgumentError: label: must be 0 or 1, got -1", e.to_string());
    }

    #[test]
    fn test_label_conversions() {
        assert_eq!(1, i32::from(Label::Positive));
        assert_eq!(0u8, u8::from(Label::Negative));
        assert_eq!(Label::Positive, Label::from(true));
        assert_eq!("0", Label::Negative.to_string());
    }
}
