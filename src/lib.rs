//! Puncturable pseudorandom function under the strong RSA assumption
//!
//! [`Pprf`] is a function over the integer domain `[0, DomainSize)` whose
//! evaluation can be disabled ("punctured") at individual points. A
//! punctured value cannot be recomputed afterwards, even by someone who
//! obtains the complete internal state, without factoring the modulus.
//!
//! The domain is split into shards of 232 points ([`shard::LeafShard`]),
//! each with its own accumulator; puncturing one point only touches the
//! shard that owns it.

pub mod arith;
#[cfg(feature = "cli")]
pub mod cli;
pub mod commands;
pub mod digest;
pub mod domain;
pub mod error;
pub mod keygen;
pub mod pprf;
pub mod primes;
pub mod shard;

pub use digest::PprfOutput;
pub use domain::{DomainSize, Point, PprfConfig, SecurityParameter};
pub use error::PprfError;
pub use pprf::Pprf;
