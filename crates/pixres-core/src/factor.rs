//! Integer factors for sampling strides, expansion multiples and
//! quantization steps.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

/// A positive integer factor (>= 1).
///
/// The same type drives down-sampling (stride), up-sampling (replication
/// multiple) and gray-level reduction (quantization step), so zero is
/// rejected once at construction instead of in every transform.
///
/// # Examples
///
/// ```
/// use pixres_core::Factor;
///
/// let f = Factor::new(4).unwrap();
/// assert_eq!(f.get(), 4);
/// assert!(Factor::new(0).is_err());
/// assert_eq!(Factor::default().get(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct Factor(NonZeroU32);

impl Factor {
    /// The identity factor.
    pub const ONE: Factor = Factor(NonZeroU32::MIN);

    /// Create a factor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFactor`] if `value` is 0.
    pub fn new(value: u32) -> Result<Self> {
        NonZeroU32::new(value)
            .map(Factor)
            .ok_or(Error::InvalidFactor(i64::from(value)))
    }

    /// Get the factor as a plain integer.
    #[inline]
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Check whether this is the identity factor.
    #[inline]
    pub fn is_identity(self) -> bool {
        self.get() == 1
    }
}

impl Default for Factor {
    fn default() -> Self {
        Factor(NonZeroU32::MIN.saturating_add(1))
    }
}

impl TryFrom<i64> for Factor {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        u32::try_from(value)
            .ok()
            .and_then(NonZeroU32::new)
            .map(Factor)
            .ok_or(Error::InvalidFactor(value))
    }
}

impl TryFrom<u32> for Factor {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        Factor::new(value)
    }
}

impl From<Factor> for u32 {
    fn from(factor: Factor) -> u32 {
        factor.get()
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_rejects_zero() {
        assert_eq!(Factor::new(0), Err(Error::InvalidFactor(0)));
    }

    #[test]
    fn test_factor_rejects_negative() {
        assert_eq!(Factor::try_from(-3i64), Err(Error::InvalidFactor(-3)));
    }

    #[test]
    fn test_factor_rejects_overflow() {
        let big = i64::from(u32::MAX) + 1;
        assert_eq!(Factor::try_from(big), Err(Error::InvalidFactor(big)));
    }

    #[test]
    fn test_factor_identity() {
        assert!(Factor::ONE.is_identity());
        assert!(!Factor::new(5).unwrap().is_identity());
        assert_eq!(Factor::ONE.get(), 1);
    }

    #[test]
    fn test_factor_default_is_two() {
        assert_eq!(Factor::default().get(), 2);
    }
}
