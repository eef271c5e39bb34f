//! The puncturable PRF over `[0, DomainSize)`
//!
//! [`Pprf`] owns the shared modulus and one [`LeafShard`] per 232 domain
//! points. Every call is routed to exactly one shard by plain arithmetic,
//! so operations on different shards never interact.
//!
//! # Examples
//!
//! ```rust,no_run
//! use pprf::{Pprf, PprfConfig};
//!
//! # fn main() -> Result<(), pprf::PprfError> {
//! let prf = Pprf::new(PprfConfig::from_raw(2048, 464)?)?;
//!
//! let before = prf.evaluate(1)?;
//! prf.puncture(0)?;
//!
//! assert!(prf.evaluate(0).unwrap_err().is_punctured());
//! assert_eq!(before, prf.evaluate(1)?);
//! # Ok(())
//! # }
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::debug;
use num_bigint::BigUint;
use rand::rngs::OsRng;

use crate::arith::{NativePowMod, PowMod};
use crate::digest::PprfOutput;
use crate::domain::{DomainSize, Point, PprfConfig, SecurityParameter};
use crate::error::PprfError;
use crate::keygen::{ModulusSource, RsaModulusSource};
use crate::shard::LeafShard;

/// Puncturable PRF coordinator
///
/// `Pprf` is `Send + Sync`. Each shard sits behind its own lock, so
/// concurrent calls on different shards run in parallel while calls on
/// the same shard are serialized.
pub struct Pprf {
    config: PprfConfig,
    modulus: Arc<BigUint>,
    shards: Vec<Mutex<LeafShard>>,
}

impl Pprf {
    /// Creates a PPRF backed by a freshly generated RSA modulus
    ///
    /// # Errors
    /// Returns [`PprfError::KeyGeneration`] if modulus generation fails
    pub fn new(config: PprfConfig) -> Result<Self, PprfError> {
        Self::with_source(config, &mut RsaModulusSource::new())
    }

    /// Validates raw parameters, then behaves like [`Pprf::new`]
    ///
    /// # Errors
    /// - [`PprfError::Config`] if `bits` or `size` violate their invariants
    /// - [`PprfError::KeyGeneration`] if modulus generation fails
    pub fn from_raw(bits: u32, size: u64) -> Result<Self, PprfError> {
        Self::new(PprfConfig::from_raw(bits, size)?)
    }

    /// Creates a PPRF whose modulus comes from `source`
    ///
    /// # Errors
    /// Returns [`PprfError::KeyGeneration`] if `source` fails
    pub fn with_source<S: ModulusSource + ?Sized>(
        config: PprfConfig,
        source: &mut S,
    ) -> Result<Self, PprfError> {
        Self::with_parts(config, source, Arc::new(NativePowMod))
    }

    /// Creates a PPRF with an explicit modulus source and exponentiation routine
    ///
    /// # Errors
    /// Returns [`PprfError::KeyGeneration`] if `source` fails
    pub fn with_parts<S: ModulusSource + ?Sized>(
        config: PprfConfig,
        source: &mut S,
        pow: Arc<dyn PowMod>,
    ) -> Result<Self, PprfError> {
        let modulus = Arc::new(source.generate_modulus(config.security())?);
        let output_len = config.security().output_len();
        let mut rng = OsRng;

        let shards = (0..config.domain().shard_count())
            .map(|_| {
                Mutex::new(LeafShard::new(
                    Arc::clone(&modulus),
                    output_len,
                    Arc::clone(&pow),
                    &mut rng,
                ))
            })
            .collect::<Vec<_>>();

        debug!(
            "created PPRF: {}, domain {} ({} shards)",
            config.security(),
            *config.domain(),
            shards.len()
        );
        Ok(Self {
            config,
            modulus,
            shards,
        })
    }

    /// Evaluates the PPRF at `x`
    ///
    /// # Errors
    /// - [`PprfError::Domain`] if `x >= DomainSize`
    /// - [`PprfError::Punctured`] if `x` has been punctured
    pub fn evaluate(&self, x: u64) -> Result<PprfOutput, PprfError> {
        let point = Point::locate(x, self.config.domain())?;
        self.lock(point)
            .evaluate(point.local())
            .map_err(|e| e.globalize(point.shard_offset()))
    }

    /// Punctures the PPRF at `x`
    ///
    /// Puncturing an already punctured point is a no-op. Returns whether
    /// this call changed the state.
    ///
    /// # Errors
    /// Returns [`PprfError::Domain`] if `x >= DomainSize`
    pub fn puncture(&self, x: u64) -> Result<bool, PprfError> {
        let point = Point::locate(x, self.config.domain())?;
        let changed = self
            .lock(point)
            .puncture(point.local())
            .map_err(|e| e.globalize(point.shard_offset()))?;
        if changed {
            debug!("punctured point {x} in shard {}", point.shard());
        }
        Ok(changed)
    }

    /// Punctures every index in order, stopping at the first error
    ///
    /// Returns the number of points newly punctured.
    ///
    /// # Errors
    /// Returns [`PprfError::Domain`] for the first out-of-range index;
    /// indices before it stay punctured
    pub fn puncture_all<I: IntoIterator<Item = u64>>(&self, xs: I) -> Result<usize, PprfError> {
        let mut count = 0;
        for x in xs {
            if self.puncture(x)? {
                count += 1;
            }
        }
        Ok(count)
    }

    /// Whether `x` has been punctured
    ///
    /// # Errors
    /// Returns [`PprfError::Domain`] if `x >= DomainSize`
    pub fn is_punctured(&self, x: u64) -> Result<bool, PprfError> {
        let point = Point::locate(x, self.config.domain())?;
        Ok(self.lock(point).is_punctured(point.local()))
    }

    /// Total number of punctured points across all shards
    #[must_use]
    pub fn punctured_count(&self) -> usize {
        self.shards
            .iter()
            .map(|s| s.lock().unwrap_or_else(PoisonError::into_inner).punctured_count())
            .sum()
    }

    #[must_use]
    pub fn config(&self) -> PprfConfig {
        self.config
    }

    #[must_use]
    pub fn security_parameter(&self) -> SecurityParameter {
        self.config.security()
    }

    #[must_use]
    pub fn domain_size(&self) -> DomainSize {
        self.config.domain()
    }

    #[must_use]
    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    /// The public RSA modulus shared by all shards
    #[must_use]
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    // Shard state is only written after every fallible step of a call,
    // so a poisoned lock still guards a consistent shard.
    fn lock(&self, point: Point) -> MutexGuard<'_, LeafShard> {
        self.shards[point.shard()]
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for Pprf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pprf")
            .field("config", &self.config)
            .field("shards", &self.shards.len())
            .finish_non_exhaustive()
    }
}
