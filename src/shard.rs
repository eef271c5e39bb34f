//! Leaf shard: a puncturable PRF over 232 points
//!
//! A shard holds one accumulator `g` in `Z_N` and the set of punctured
//! local indices. Local index `i` is bound to the prime `p_i` from
//! [`PRIME_TABLE`]. Evaluating `i` raises `g` to the product of every
//! other still-evaluable prime:
//!
//! ```text
//! F(i) = H( g^(prod p_j : j != i, j not punctured) mod N )
//! ```
//!
//! Puncturing `i` folds `p_i` into the accumulator, `g <- g^(p_i)`, and
//! replaces the previous `g`. Because evaluation then skips `p_i`, the
//! value of every other point is unchanged, while recovering `F(i)` from
//! the new state would require a `p_i`-th root modulo `N` (strong RSA).

use std::collections::BTreeSet;
use std::sync::Arc;

use log::{debug, trace};
use num_bigint::BigUint;
use num_traits::One;
use rand::{CryptoRng, RngCore};

use crate::arith::PowMod;
use crate::digest::{PprfOutput, hash_to_bytes};
use crate::error::PprfError;
use crate::keygen::sample_below;
use crate::primes::{PRIME_TABLE, SHARD_WIDTH, prime_for};

/// One 232-point shard with its own accumulator and puncture set
pub struct LeafShard {
    modulus: Arc<BigUint>,
    generator: BigUint,
    punctured: BTreeSet<usize>,
    output_len: usize,
    pow: Arc<dyn PowMod>,
}

impl LeafShard {
    /// Creates a shard with a generator sampled uniformly from `[0, N)`
    pub fn new<R: RngCore + CryptoRng + ?Sized>(
        modulus: Arc<BigUint>,
        output_len: usize,
        pow: Arc<dyn PowMod>,
        rng: &mut R,
    ) -> Self {
        let generator = sample_below(rng, &modulus);
        Self::with_generator(modulus, generator, output_len, pow)
    }

    pub(crate) fn with_generator(
        modulus: Arc<BigUint>,
        generator: BigUint,
        output_len: usize,
        pow: Arc<dyn PowMod>,
    ) -> Self {
        Self {
            modulus,
            generator,
            punctured: BTreeSet::new(),
            output_len,
            pow,
        }
    }

    /// Evaluates the shard at local index `local`
    ///
    /// # Errors
    /// - [`PprfError::Domain`] if `local >= 232`
    /// - [`PprfError::Punctured`] if `local` has been punctured
    pub fn evaluate(&self, local: usize) -> Result<PprfOutput, PprfError> {
        let raw = self.raw_evaluate(local)?;
        let out = hash_to_bytes(&raw, self.output_len);
        trace!("evaluated local index {local}");
        Ok(out)
    }

    /// Punctures local index `local`
    ///
    /// Returns `true` if the call punctured the point and `false` if it
    /// was already punctured, in which case nothing changes.
    ///
    /// # Errors
    /// Returns [`PprfError::Domain`] if `local >= 232`
    pub fn puncture(&mut self, local: usize) -> Result<bool, PprfError> {
        let prime = Self::prime(local)?;
        if self.punctured.contains(&local) {
            return Ok(false);
        }

        self.generator = self
            .pow
            .pow_mod(&self.generator, &BigUint::from(prime), &self.modulus);
        self.punctured.insert(local);

        debug!(
            "punctured local index {local} ({} of {SHARD_WIDTH} punctured)",
            self.punctured.len()
        );
        Ok(true)
    }

    /// Whether `local` has been punctured; out-of-range indices never are
    #[must_use]
    pub fn is_punctured(&self, local: usize) -> bool {
        self.punctured.contains(&local)
    }

    #[must_use]
    pub fn punctured_count(&self) -> usize {
        self.punctured.len()
    }

    /// Accumulator raised to the product of the remaining primes except `local`
    fn raw_evaluate(&self, local: usize) -> Result<BigUint, PprfError> {
        Self::prime(local)?;
        if self.punctured.contains(&local) {
            return Err(PprfError::Punctured {
                index: local as u64,
            });
        }

        let mut exponent = BigUint::one();
        for (j, &p) in PRIME_TABLE.iter().enumerate() {
            if j != local && !self.punctured.contains(&j) {
                exponent *= p;
            }
        }
        Ok(self
            .pow
            .pow_mod(&self.generator, &exponent, &self.modulus))
    }

    fn prime(local: usize) -> Result<u32, PprfError> {
        prime_for(local).ok_or(PprfError::Domain {
            index: local as u64,
            bound: SHARD_WIDTH as u64,
        })
    }
}

impl std::fmt::Debug for LeafShard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the accumulator
        f.debug_struct("LeafShard")
            .field("punctured", &self.punctured)
            .field("output_len", &self.output_len)
            .finish_non_exhaustive()
    }
}
