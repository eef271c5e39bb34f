//! Mapping from global domain indices to shard positions

use crate::error::PprfError;
use crate::primes::SHARD_WIDTH;

use super::DomainSize;

/// Position of a domain index inside the sharded layout
///
/// Every index in `[0, DomainSize)` maps to exactly one `(shard, local)`
/// pair, with `shard = index / 232` and `local = index % 232`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    shard: usize,
    local: usize,
}

impl Point {
    /// Locates `index` within a domain of the given size
    ///
    /// # Errors
    /// Returns [`PprfError::Domain`] if `index >= domain`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pprf::domain::{DomainSize, Point};
    ///
    /// let domain = DomainSize::new(464).unwrap();
    /// let point = Point::locate(300, domain).unwrap();
    /// assert_eq!(point.shard(), 1);
    /// assert_eq!(point.local(), 68);
    ///
    /// assert!(Point::locate(464, domain).is_err());
    /// ```
    pub fn locate(index: u64, domain: DomainSize) -> Result<Self, PprfError> {
        if !domain.contains(index) {
            return Err(PprfError::Domain {
                index,
                bound: *domain,
            });
        }
        let width = SHARD_WIDTH as u64;
        // Quotient is bounded by the shard count (a usize), remainder by 232
        #[allow(clippy::cast_possible_truncation)]
        let (shard, local) = ((index / width) as usize, (index % width) as usize);
        Ok(Self { shard, local })
    }

    /// Index of the owning shard
    #[must_use]
    pub fn shard(self) -> usize {
        self.shard
    }

    /// Index within the owning shard, in `[0, 232)`
    #[must_use]
    pub fn local(self) -> usize {
        self.local
    }

    /// First global index handled by the owning shard
    #[must_use]
    pub fn shard_offset(self) -> u64 {
        (self.shard * SHARD_WIDTH) as u64
    }
}
