//! PEM armoring (RFC 7468) for the DER structures produced by this crate.

use crate::{Error, Result};
use alloc::{string::String, vec::Vec};
use pem_rfc7468::LineEnding;

/// Type label for SEC1 `ECPrivateKey` documents.
pub const SEC1_LABEL: &str = "EC PRIVATE KEY";

/// Type label for PKCS#8 `PrivateKeyInfo` documents.
pub const PKCS8_LABEL: &str = "PRIVATE KEY";

/// Type label for X.509 `SubjectPublicKeyInfo` documents.
pub const PUBLIC_KEY_LABEL: &str = "PUBLIC KEY";

/// Armor `der` under the given type label, with LF line endings.
pub fn encode(label: &str, der: &[u8]) -> Result<String> {
    Ok(pem_rfc7468::encode_string(label, LineEnding::LF, der)?)
}

/// Strip PEM armor, checking that the type label is `expected_label`.
///
/// Fails with [`Error::InvalidPem`] if the armor is malformed or carries a
/// different label.
pub fn decode(expected_label: &str, pem: &str) -> Result<Vec<u8>> {
    let (label, der) = pem_rfc7468::decode_vec(pem.as_bytes())?;

    if label != expected_label {
        return Err(Error::InvalidPem);
    }

    Ok(der)
}
