//! Domain types for the puncturable PRF
//!
//! This module contains validated newtypes and configuration:
//! - [`SecurityParameter`] - Modulus bit length (>= 2048, multiple of 8)
//! - [`DomainSize`] - Number of input points (>= 232, multiple of 232)
//! - [`Point`] - Shard and local position of a domain index
//! - [`PprfConfig`] - Validated security parameter and domain size pair

mod config;
mod domain_size;
mod point;
mod security_parameter;

pub use config::PprfConfig;
pub use domain_size::DomainSize;
pub use point::Point;
pub use security_parameter::SecurityParameter;
