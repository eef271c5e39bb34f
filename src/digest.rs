//! Output finalization with SHAKE256
//!
//! A shard's raw output is an element of `Z_N`. It is serialized as a
//! fixed-width little-endian integer and hashed with SHAKE256, reading
//! as many output bytes as the modulus is wide.

use num_bigint::BigUint;
use sha3::Shake256;
use sha3::digest::{ExtendableOutput, Update, XofReader};
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroizing;

/// A PPRF evaluation result
///
/// Wraps the digest in `Zeroizing` so it is wiped when dropped.
/// Equality runs in constant time over the digest bytes.
#[derive(Debug, Clone)]
pub struct PprfOutput(Zeroizing<Vec<u8>>);

impl ConstantTimeEq for PprfOutput {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.as_slice().ct_eq(other.0.as_slice())
    }
}

impl PartialEq for PprfOutput {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for PprfOutput {}

impl PprfOutput {
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowercase hex rendering of the digest
    #[must_use]
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl AsRef<[u8]> for PprfOutput {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Display for PprfOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for byte in self.0.iter() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Hashes `value` to exactly `output_len` bytes
///
/// `value` is encoded little-endian and zero-padded to `output_len`
/// bytes before hashing, so equal integers always hash identically
/// regardless of their leading zero bytes.
///
/// # Examples
///
/// ```rust
/// use num_bigint::BigUint;
/// use pprf::digest::hash_to_bytes;
///
/// let out = hash_to_bytes(&BigUint::from(42u32), 256);
/// assert_eq!(out.len(), 256);
/// assert_eq!(out, hash_to_bytes(&BigUint::from(42u32), 256));
/// ```
#[must_use]
pub fn hash_to_bytes(value: &BigUint, output_len: usize) -> PprfOutput {
    let mut encoded = Zeroizing::new(value.to_bytes_le());
    if encoded.len() < output_len {
        encoded.resize(output_len, 0);
    }

    let mut hasher = Shake256::default();
    hasher.update(&encoded);
    let mut reader = hasher.finalize_xof();

    let mut out = Zeroizing::new(vec![0u8; output_len]);
    reader.read(&mut out);
    PprfOutput(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_time_equality() {
        let a = hash_to_bytes(&BigUint::from(9u32), 32);
        let b = hash_to_bytes(&BigUint::from(9u32), 32);
        let c = hash_to_bytes(&BigUint::from(10u32), 32);
        assert!(bool::from(a.ct_eq(&b)));
        assert!(!bool::from(a.ct_eq(&c)));
        assert_eq!(a, b);
        assert_ne!(a, c);

        // Different lengths never compare equal
        let short = hash_to_bytes(&BigUint::from(9u32), 16);
        assert_ne!(short, a);
    }

    #[test]
    fn test_output_length() {
        for len in [1, 32, 256, 512] {
            assert_eq!(hash_to_bytes(&BigUint::from(7u32), len).len(), len);
        }
    }

    #[test]
    fn test_distinct_inputs_distinct_outputs() {
        let a = hash_to_bytes(&BigUint::from(1u32), 256);
        let b = hash_to_bytes(&BigUint::from(2u32), 256);
        assert_ne!(a, b);
    }

    #[test]
    fn test_shorter_read_is_prefix() {
        // Same padded input, XOF output is a stream
        let value = BigUint::from(0xdead_beefu32);
        let long = hash_to_bytes(&value, 64);
        let mut encoded = value.to_bytes_le();
        encoded.resize(64, 0);

        let mut hasher = Shake256::default();
        hasher.update(&encoded);
        let mut reader = hasher.finalize_xof();
        let mut prefix = [0u8; 16];
        reader.read(&mut prefix);
        assert_eq!(&long.as_bytes()[..16], &prefix);
    }

    #[test]
    fn test_shake256_empty_input_vector() {
        // SHAKE256("") first 32 bytes, FIPS 202 test vector
        let mut reader = Shake256::default().finalize_xof();
        let mut out = [0u8; 32];
        reader.read(&mut out);
        let hex: String = out.iter().map(|b| format!("{b:02x}")).collect();
        assert_eq!(
            hex,
            "46b9dd2b0ba88d13233b3feb743eeb243fcd52ea62b81b82b50c27646ed5762f"
        );
    }

    #[test]
    fn test_hex_display() {
        let out = hash_to_bytes(&BigUint::from(3u32), 4);
        let hex = out.to_hex();
        assert_eq!(hex.len(), 8);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
