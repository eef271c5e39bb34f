//! Property tests for domain routing

use pprf::{DomainSize, Point};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

/// Valid domain sizes: 1 to 64 shards
#[derive(Clone, Copy, Debug)]
struct ValidDomain(DomainSize);

impl Arbitrary for ValidDomain {
    fn arbitrary(g: &mut Gen) -> Self {
        let shards = u64::from(u8::arbitrary(g) % 64) + 1;
        ValidDomain(DomainSize::new(shards * 232).expect("multiple of 232"))
    }
}

/// Every in-range index maps back to itself through (shard, local)
#[quickcheck]
fn prop_locate_partitions_domain(domain: ValidDomain, index: u64) -> bool {
    let ValidDomain(domain) = domain;
    let x = index % *domain;
    let Ok(point) = Point::locate(x, domain) else {
        return false;
    };
    point.local() < 232
        && point.shard() < domain.shard_count()
        && point.shard_offset() + point.local() as u64 == x
}

/// Indices at or beyond the domain size are rejected
#[quickcheck]
fn prop_locate_rejects_out_of_range(domain: ValidDomain, excess: u32) -> bool {
    let ValidDomain(domain) = domain;
    let x = *domain + u64::from(excess);
    Point::locate(x, domain).is_err_and(|e| e.is_domain())
}

/// Sizes that are not positive multiples of 232 are rejected
#[quickcheck]
fn prop_domain_size_validation(size: u64) -> bool {
    let valid = size >= 232 && size % 232 == 0;
    DomainSize::new(size).is_ok() == valid
}
