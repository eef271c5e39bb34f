//! Property tests for puncturing
//!
//! Evaluations at 2048 bits are expensive, so each property keeps one
//! PPRF instance across its cases and runs a bounded number of them.

use std::sync::LazyLock;

use num_bigint::BigUint;
use pprf::keygen::TrustedModulus;
use pprf::{Pprf, PprfConfig};
use quickcheck::{QuickCheck, TestResult};

const DOMAIN: u64 = 464;
const CASES: u64 = 12;

fn fixed_pprf() -> Pprf {
    let mut n = BigUint::from(0xb7e1_5162_8aed_2a6bu64);
    while n.bits() < 2048 {
        n = &n * &n + 0x9e37_79b9u32;
    }
    n >>= n.bits() - 2048;
    n.set_bit(2047, true);
    n.set_bit(0, true);

    let config = PprfConfig::from_raw(2048, DOMAIN).expect("valid config");
    Pprf::with_source(config, &mut TrustedModulus::new(n)).expect("fixed modulus")
}

// Separate instances: the test harness runs both properties concurrently
static ISOLATION: LazyLock<Pprf> = LazyLock::new(fixed_pprf);
static PERMANENCE: LazyLock<Pprf> = LazyLock::new(fixed_pprf);

/// Puncturing x' never changes the output at x
fn isolation(x: u64, other: u64) -> TestResult {
    let (x, other) = (x % DOMAIN, other % DOMAIN);
    if x == other || ISOLATION.is_punctured(x).unwrap_or(true) {
        return TestResult::discard();
    }
    let Ok(before) = ISOLATION.evaluate(x) else {
        return TestResult::failed();
    };
    if ISOLATION.puncture(other).is_err() {
        return TestResult::failed();
    }
    TestResult::from_bool(ISOLATION.evaluate(x).is_ok_and(|after| after == before))
}

/// After puncture(x), evaluate(x) fails with a punctured error
fn permanence(x: u64) -> bool {
    let x = x % DOMAIN;
    PERMANENCE.puncture(x).is_ok()
        && PERMANENCE.is_punctured(x).unwrap_or(false)
        && PERMANENCE.evaluate(x).is_err_and(|e| e.is_punctured())
}

#[test]
fn prop_puncture_isolation() {
    QuickCheck::new()
        .tests(CASES)
        .max_tests(CASES * 10)
        .quickcheck(isolation as fn(u64, u64) -> TestResult);
}

#[test]
fn prop_puncture_permanence() {
    QuickCheck::new()
        .tests(CASES)
        .quickcheck(permanence as fn(u64) -> bool);
}
