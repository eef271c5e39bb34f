//! Property tests for the exponentiation primitives

use num_bigint::BigUint;
use pprf::arith::{NativePowMod, PowMod, SquareAndMultiply};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

/// Binary exponentiation agrees with num-bigint's modpow
#[quickcheck]
fn prop_square_and_multiply_matches_native(base: u64, exponent: u64, modulus: u64) -> TestResult {
    if modulus == 0 {
        return TestResult::discard();
    }
    let (b, e, m) = (
        BigUint::from(base),
        BigUint::from(exponent),
        BigUint::from(modulus),
    );
    TestResult::from_bool(SquareAndMultiply.pow_mod(&b, &e, &m) == NativePowMod.pow_mod(&b, &e, &m))
}

/// Folding exponents one at a time equals one exponentiation by their product
#[quickcheck]
fn prop_folded_exponents_multiply(base: u64, exponents: Vec<u8>) -> TestResult {
    let modulus = BigUint::from(0xffff_ffff_ffff_ffc5u64);
    let base = BigUint::from(base);

    let mut folded = base.clone();
    let mut product = BigUint::from(1u32);
    for e in exponents.iter().take(16) {
        let e = BigUint::from(*e);
        folded = NativePowMod.pow_mod(&folded, &e, &modulus);
        product *= e;
    }
    TestResult::from_bool(folded == SquareAndMultiply.pow_mod(&base, &product, &modulus))
}
