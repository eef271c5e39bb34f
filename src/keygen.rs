//! RSA modulus generation and uniform sampling
//!
//! The PPRF needs a hard-to-factor modulus `N = p*q` but must never hold
//! on to `p` or `q`: anyone who learns the factorization can take roots
//! modulo `N` and undo punctures. Sources therefore hand out `N` only.

use log::debug;
use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::domain::SecurityParameter;
use crate::error::PprfError;
use crate::primes::PRIME_TABLE;

/// Miller-Rabin rounds with random bases per prime candidate
const MILLER_RABIN_ROUNDS: usize = 24;

/// Produces the RSA modulus for a new PPRF
pub trait ModulusSource {
    /// Returns a composite modulus of exactly `bits` bits
    ///
    /// # Errors
    /// Returns [`PprfError::KeyGeneration`] if no such modulus can be produced
    fn generate_modulus(&mut self, bits: SecurityParameter) -> Result<BigUint, PprfError>;
}

/// Generates `N = p*q` from two fresh random primes
///
/// The primes are dropped as soon as the product is formed; only `N`
/// leaves the source.
pub struct RsaModulusSource<R = OsRng> {
    rng: R,
}

impl RsaModulusSource<OsRng> {
    #[must_use]
    pub fn new() -> Self {
        Self { rng: OsRng }
    }
}

impl Default for RsaModulusSource<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + CryptoRng> RsaModulusSource<R> {
    /// Uses the given cryptographically secure RNG instead of the OS source
    ///
    /// A seeded RNG makes generation reproducible.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore + CryptoRng> ModulusSource for RsaModulusSource<R> {
    fn generate_modulus(&mut self, bits: SecurityParameter) -> Result<BigUint, PprfError> {
        let half = u64::from(*bits / 2);
        let p = random_prime(&mut self.rng, half);
        let mut q = random_prime(&mut self.rng, half);
        while q == p {
            q = random_prime(&mut self.rng, half);
        }

        let n = &p * &q;

        if n.bits() != u64::from(*bits) {
            return Err(PprfError::KeyGeneration(format!(
                "expected a {}-bit modulus, got {} bits",
                *bits,
                n.bits()
            )));
        }
        debug!("generated RSA modulus ({bits})");
        Ok(n)
    }
}

/// Hands out a modulus produced elsewhere, e.g. by a trusted setup ceremony
///
/// The modulus is checked for the requested bit length and oddness only;
/// its factorization is the caller's responsibility.
#[derive(Debug, Clone)]
pub struct TrustedModulus {
    modulus: BigUint,
}

impl TrustedModulus {
    #[must_use]
    pub fn new(modulus: BigUint) -> Self {
        Self { modulus }
    }
}

impl ModulusSource for TrustedModulus {
    fn generate_modulus(&mut self, bits: SecurityParameter) -> Result<BigUint, PprfError> {
        if self.modulus.bits() != u64::from(*bits) {
            return Err(PprfError::KeyGeneration(format!(
                "trusted modulus has {} bits, expected {}",
                self.modulus.bits(),
                *bits
            )));
        }
        if self.modulus.is_even() {
            return Err(PprfError::KeyGeneration(
                "trusted modulus must be odd".to_string(),
            ));
        }
        Ok(self.modulus.clone())
    }
}

/// Samples uniformly from `[0, bound)`
///
/// # Panics
/// Panics if `bound` is zero
pub fn sample_below<R: RngCore + CryptoRng + ?Sized>(rng: &mut R, bound: &BigUint) -> BigUint {
    rng.gen_biguint_below(bound)
}

/// Draws a random prime with exactly `bits` bits and its top two bits set
///
/// Setting the two top bits of both factors guarantees that their product
/// has exactly `2 * bits` bits.
fn random_prime<R: RngCore + CryptoRng + ?Sized>(rng: &mut R, bits: u64) -> BigUint {
    loop {
        let mut candidate = rng.gen_biguint(bits);
        candidate.set_bit(bits - 1, true);
        candidate.set_bit(bits - 2, true);
        candidate.set_bit(0, true);
        if is_probable_prime(rng, &candidate) {
            return candidate;
        }
    }
}

/// Trial division by the small prime table, then Miller-Rabin
fn is_probable_prime<R: RngCore + CryptoRng + ?Sized>(rng: &mut R, n: &BigUint) -> bool {
    let two = BigUint::from(2u32);
    if *n < two {
        return false;
    }
    if n.is_even() {
        return *n == two;
    }
    for &p in &PRIME_TABLE {
        let p = BigUint::from(p);
        if (n % &p).is_zero() {
            return *n == p;
        }
    }

    // n - 1 = d * 2^s with d odd
    let n_minus_one = n - 1u32;
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> s;

    'witness: for _ in 0..MILLER_RABIN_ROUNDS {
        let a = rng.gen_biguint_range(&two, &n_minus_one);
        let mut x = a.modpow(&d, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }
        for _ in 1..s {
            x = &x * &x % n;
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

/// Deterministic odd modulus of the requested size for unit tests
///
/// Not hard to factor in general; tests only rely on it being fixed.
#[cfg(test)]
pub(crate) fn test_modulus(bits: u32) -> BigUint {
    let mut n = BigUint::from(0x9e37_79b9_7f4a_7c15u64);
    while n.bits() < u64::from(bits) {
        n = &n * &n + 0x6a09_e667u32;
    }
    n >>= n.bits() - u64::from(bits);
    n.set_bit(u64::from(bits) - 1, true);
    n.set_bit(0, true);
    n
}
