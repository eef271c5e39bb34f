//! `DomainSize` newtype for the puncturable PRF

use crate::error::PprfError;
use crate::primes::SHARD_WIDTH;

/// Number of addressable input points (>= 232, multiple of 232)
///
/// The domain is partitioned into `DomainSize / 232` shards of equal width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DomainSize(u64);

impl DomainSize {
    /// Width of one shard, and therefore the smallest valid domain
    pub const MIN: u64 = SHARD_WIDTH as u64;

    /// Creates a new domain size
    ///
    /// # Errors
    /// Returns [`PprfError::Config`] if `size` is below 232 or not a multiple of 232
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pprf::domain::DomainSize;
    ///
    /// let size = DomainSize::new(464).unwrap();
    /// assert_eq!(*size, 464);
    /// assert_eq!(size.shard_count(), 2);
    ///
    /// assert!(DomainSize::new(100).is_err());
    /// assert!(DomainSize::new(300).is_err());
    /// ```
    pub fn new(size: u64) -> Result<Self, PprfError> {
        if size < Self::MIN {
            return Err(PprfError::config(format!(
                "Domain size must be at least {} (got {size})",
                Self::MIN
            )));
        }
        if size % Self::MIN != 0 {
            return Err(PprfError::config(format!(
                "Domain size must be a multiple of {} (got {size})",
                Self::MIN
            )));
        }
        Ok(Self(size))
    }

    /// Number of shards needed to cover the domain
    #[must_use]
    pub fn shard_count(self) -> usize {
        usize::try_from(self.0 / Self::MIN).unwrap_or(usize::MAX)
    }

    /// Whether `index` lies inside the domain
    #[inline]
    #[must_use]
    pub fn contains(self, index: u64) -> bool {
        index < self.0
    }
}

impl std::ops::Deref for DomainSize {
    type Target = u64;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
