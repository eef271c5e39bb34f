//! `SecurityParameter` newtype for the puncturable PRF

use crate::error::PprfError;

/// Bit length of the RSA modulus (>= 2048, multiple of 8)
///
/// Also fixes the output length: every evaluation yields
/// `SecurityParameter / 8` bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SecurityParameter(u32);

impl SecurityParameter {
    /// Minimum accepted modulus size in bits
    pub const MIN: u32 = 2048;

    /// Creates a new security parameter
    ///
    /// # Errors
    /// Returns [`PprfError::Config`] if `bits` is below 2048 or not divisible by 8
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pprf::domain::SecurityParameter;
    ///
    /// let bits = SecurityParameter::new(2048).unwrap();
    /// assert_eq!(*bits, 2048);
    /// assert_eq!(bits.output_len(), 256);
    ///
    /// // Too small, or not byte aligned
    /// assert!(SecurityParameter::new(2047).is_err());
    /// assert!(SecurityParameter::new(3001).is_err());
    /// ```
    pub fn new(bits: u32) -> Result<Self, PprfError> {
        if bits < Self::MIN {
            return Err(PprfError::config(format!(
                "Security parameter must be at least {} bits (got {bits})",
                Self::MIN
            )));
        }
        if bits % 8 != 0 {
            return Err(PprfError::config(format!(
                "Security parameter must be divisible by 8 (got {bits})"
            )));
        }
        Ok(Self(bits))
    }

    /// Number of output bytes produced per evaluation
    #[must_use]
    pub fn output_len(self) -> usize {
        (self.0 / 8) as usize
    }
}

impl std::ops::Deref for SecurityParameter {
    type Target = u32;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for SecurityParameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} bits", self.0)
    }
}
