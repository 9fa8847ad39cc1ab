//! Base field helpers: fixed-width big-endian serialization and the
//! restricted modular square root used for point decompression.

use crate::{Error, Result};
use alloc::{vec, vec::Vec};
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Serialize `value` as a big-endian integer left-padded with zeroes to
/// exactly `size` bytes.
///
/// Returns [`Error::CoordinateOverflow`] if the minimal encoding of `value`
/// is wider than `size`.
pub fn to_fixed_bytes(value: &BigUint, size: usize) -> Result<Vec<u8>> {
    if value.is_zero() {
        return Ok(vec![0u8; size]);
    }

    let bytes = value.to_bytes_be();

    if bytes.len() > size {
        return Err(Error::CoordinateOverflow);
    }

    let mut out = vec![0u8; size];
    out[(size - bytes.len())..].copy_from_slice(&bytes);
    Ok(out)
}

/// Parse a big-endian unsigned integer.
pub fn from_be_bytes(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Is `p ≡ 3 (mod 4)`?
pub fn is_3_mod_4(p: &BigUint) -> bool {
    (p % 4u32) == BigUint::from(3u32)
}

/// Compute a square root of `value` modulo the prime `p`.
///
/// Only primes with `p ≡ 3 (mod 4)` are supported, where the root is given
/// by `value^((p + 1) / 4) mod p`. Any other modulus is rejected with
/// [`Error::UnsupportedCurve`] on every call.
///
/// Returns `Ok(None)` if `value` is a quadratic non-residue.
///
/// The returned root is one of the two roots `s` and `p - s`; callers pick
/// between them by parity.
pub fn sqrt_3mod4(value: &BigUint, p: &BigUint) -> Result<Option<BigUint>> {
    if !is_3_mod_4(p) {
        return Err(Error::UnsupportedCurve);
    }

    let value = value % p;
    let exp = (p + BigUint::one()) >> 2u32;
    let root = value.modpow(&exp, p);

    if (&root * &root) % p == value {
        Ok(Some(root))
    } else {
        Ok(None)
    }
}
