//! Configuration validation for PPRF construction

use crate::error::PprfError;

use super::{DomainSize, SecurityParameter};

/// Validated pair of security parameter and domain size
///
/// Holding a `PprfConfig` proves both values already passed validation,
/// so construction of the PPRF itself only fails on key generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PprfConfig {
    security: SecurityParameter,
    domain: DomainSize,
}

impl PprfConfig {
    /// Creates a configuration from already validated parts
    #[must_use]
    pub fn new(security: SecurityParameter, domain: DomainSize) -> Self {
        Self { security, domain }
    }

    /// Validates raw values and builds a configuration
    ///
    /// # Errors
    /// Returns [`PprfError::Config`] if either value violates its invariant
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pprf::domain::PprfConfig;
    ///
    /// let config = PprfConfig::from_raw(2048, 464).unwrap();
    /// assert_eq!(*config.security(), 2048);
    /// assert_eq!(config.domain().shard_count(), 2);
    ///
    /// assert!(PprfConfig::from_raw(2047, 464).is_err());
    /// assert!(PprfConfig::from_raw(2048, 100).is_err());
    /// ```
    pub fn from_raw(bits: u32, size: u64) -> Result<Self, PprfError> {
        Ok(Self::new(SecurityParameter::new(bits)?, DomainSize::new(size)?))
    }

    #[must_use]
    pub fn security(&self) -> SecurityParameter {
        self.security
    }

    #[must_use]
    pub fn domain(&self) -> DomainSize {
        self.domain
    }
}
