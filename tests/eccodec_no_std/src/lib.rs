//! Checks that `eccodec` builds for targets without `std`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use eccodec::{AffinePoint, NamedCurve, Result};

/// Convert a compressed P-256 point to its uncompressed form.
pub fn decompress_p256(bytes: &[u8]) -> Result<Vec<u8>> {
    let params = NamedCurve::P256.params()?;
    AffinePoint::from_sec1_bytes(&params, bytes)?.to_sec1_bytes(&params, false)
}
