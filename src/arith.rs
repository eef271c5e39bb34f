//! Modular exponentiation primitive
//!
//! Both shard operations reduce to `base^exponent mod N`. The routine is
//! pluggable through [`PowMod`]; any correct implementation yields the
//! same PPRF outputs, so the choice only affects speed.
//!
//! # Examples
//!
//! ```rust
//! use num_bigint::BigUint;
//! use pprf::arith::{NativePowMod, PowMod, SquareAndMultiply};
//!
//! let base = BigUint::from(4u32);
//! let exponent = BigUint::from(13u32);
//! let modulus = BigUint::from(497u32);
//!
//! assert_eq!(NativePowMod.pow_mod(&base, &exponent, &modulus), BigUint::from(445u32));
//! assert_eq!(SquareAndMultiply.pow_mod(&base, &exponent, &modulus), BigUint::from(445u32));
//! ```

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Computes `base^exponent mod modulus`
///
/// Implementations must be pure and deterministic. `modulus` is never
/// zero when called from this crate.
pub trait PowMod: Send + Sync {
    fn pow_mod(&self, base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> BigUint;
}

/// Delegates to `num-bigint`'s Montgomery-based `modpow`
#[derive(Debug, Clone, Copy, Default)]
pub struct NativePowMod;

impl PowMod for NativePowMod {
    #[inline]
    fn pow_mod(&self, base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> BigUint {
        base.modpow(exponent, modulus)
    }
}

/// Left-to-right binary exponentiation
///
/// Scans the exponent from its most significant bit: every bit squares
/// the running value (doubling the exponent so far) and a set bit
/// additionally multiplies by the base (adding one to it).
#[derive(Debug, Clone, Copy, Default)]
pub struct SquareAndMultiply;

impl PowMod for SquareAndMultiply {
    fn pow_mod(&self, base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> BigUint {
        if modulus.is_one() {
            return BigUint::zero();
        }
        let base = base % modulus;
        let mut acc = BigUint::one();
        for bit in (0..exponent.bits()).rev() {
            acc = &acc * &acc % modulus;
            if exponent.bit(bit) {
                acc = &acc * &base % modulus;
            }
        }
        acc
    }
}
