//! Secret keys for Weierstrass curves: private scalars, and the conversion
//! between the SEC1 `ECPrivateKey` and PKCS#8 `PrivateKeyInfo` structures
//! that carry them.
//!
//! ```text
//! ECPrivateKey ::= SEQUENCE {
//!   version        INTEGER { ecPrivkeyVer1(1) } (ecPrivkeyVer1),
//!   privateKey     OCTET STRING,
//!   parameters [0] ECParameters {{ NamedCurve }} OPTIONAL,
//!   publicKey  [1] BIT STRING OPTIONAL
//! }
//! ```
//!
//! Inside PKCS#8 the curve is named once, by the outer algorithm identifier,
//! and the inner `ECPrivateKey` omits `parameters`. A standalone SEC1 key
//! names its curve in `parameters`.

use crate::{AffinePoint, CurveParameters, Error, Result};
#[cfg(any(feature = "jwk", feature = "pem"))]
use alloc::string::String;
use alloc::{vec, vec::Vec};
use core::fmt;
use der::{Decode, Encode};
use pkcs8::{AlgorithmIdentifierRef, ObjectIdentifier, PrivateKeyInfo};
use sec1::{EcParameters, EcPrivateKey};
use zeroize::Zeroizing;

/// Algorithm [`ObjectIdentifier`] for elliptic curve public key cryptography
/// (`id-ecPublicKey`).
///
/// <http://oid-info.com/get/1.2.840.10045.2.1>
pub const ALGORITHM_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.2.1");

/// Re-frame a SEC1 `ECPrivateKey` as a PKCS#8 `PrivateKeyInfo`.
///
/// The curve moves from the SEC1 `parameters` field (if present) into the
/// PKCS#8 algorithm identifier. Scalar and public key bytes are carried
/// through unchanged. A scalar wider than the field fails with
/// [`Error::CoordinateOverflow`].
pub fn sec1_to_pkcs8(params: &CurveParameters, sec1_der: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
    let ec_private_key = EcPrivateKey::from_der(sec1_der)?;
    check_embedded_curve(params, &ec_private_key)?;
    check_scalar_len(params, ec_private_key.private_key)?;
    encode_pkcs8(params, ec_private_key.private_key, ec_private_key.public_key)
}

/// Re-frame a PKCS#8 `PrivateKeyInfo` as a standalone SEC1 `ECPrivateKey`.
///
/// The algorithm identifier must be `id-ecPublicKey` naming `params`'
/// curve, otherwise [`Error::CurveMismatch`] is returned. The curve OID is
/// written into the emitted SEC1 `parameters` field.
///
/// For a PKCS#8 v2 (`OneAsymmetricKey`) input whose inner key has no
/// public point, the outer `publicKey` is moved into the SEC1 structure.
pub fn pkcs8_to_sec1(params: &CurveParameters, pkcs8_der: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
    let private_key_info = PrivateKeyInfo::from_der(pkcs8_der)?;
    check_algorithm(params, &private_key_info.algorithm)?;

    let ec_private_key = decode_inner_key(params, &private_key_info)?;
    check_scalar_len(params, ec_private_key.private_key)?;
    encode_sec1(params, ec_private_key.private_key, ec_private_key.public_key)
}

fn encode_sec1(
    params: &CurveParameters,
    private_key: &[u8],
    public_key: Option<&[u8]>,
) -> Result<Zeroizing<Vec<u8>>> {
    let ec_private_key = EcPrivateKey {
        private_key,
        parameters: Some(EcParameters::NamedCurve(params.oid())),
        public_key,
    };

    Ok(Zeroizing::new(ec_private_key.to_der()?))
}

fn encode_pkcs8(
    params: &CurveParameters,
    private_key: &[u8],
    public_key: Option<&[u8]>,
) -> Result<Zeroizing<Vec<u8>>> {
    let ec_private_key = Zeroizing::new(
        EcPrivateKey {
            private_key,
            parameters: None,
            public_key,
        }
        .to_der()?,
    );

    let curve_oid = params.oid();
    let algorithm = AlgorithmIdentifierRef {
        oid: ALGORITHM_OID,
        parameters: Some((&curve_oid).into()),
    };

    let private_key_info = PrivateKeyInfo::new(algorithm, &ec_private_key);
    Ok(Zeroizing::new(private_key_info.to_der()?))
}

fn check_algorithm(params: &CurveParameters, algorithm: &AlgorithmIdentifierRef<'_>) -> Result<()> {
    match algorithm.oids()? {
        (oid, Some(curve_oid)) if oid == ALGORITHM_OID && curve_oid == params.oid() => Ok(()),
        _ => Err(Error::CurveMismatch),
    }
}

fn check_scalar_len(params: &CurveParameters, private_key: &[u8]) -> Result<()> {
    if private_key.len() > params.field_bytes_size() {
        return Err(Error::CoordinateOverflow);
    }
    Ok(())
}

/// Inner `ECPrivateKey` of a PKCS#8 document, with the v2 outer public key
/// filled in when the inner structure lacks one.
fn decode_inner_key<'a>(
    params: &CurveParameters,
    private_key_info: &PrivateKeyInfo<'a>,
) -> Result<EcPrivateKey<'a>> {
    let mut ec_private_key = EcPrivateKey::from_der(private_key_info.private_key)?;
    check_embedded_curve(params, &ec_private_key)?;

    if ec_private_key.public_key.is_none() {
        ec_private_key.public_key = private_key_info.public_key;
    }
    Ok(ec_private_key)
}

fn check_embedded_curve(params: &CurveParameters, ec_private_key: &EcPrivateKey<'_>) -> Result<()> {
    match ec_private_key.parameters {
        Some(EcParameters::NamedCurve(oid)) if oid != params.oid() => Err(Error::CurveMismatch),
        _ => Ok(()),
    }
}

/// Elliptic curve secret key: a private scalar, optionally paired with its
/// public point.
///
/// The scalar is held as a big-endian integer of exactly the curve's field
/// size and is zeroized on drop. Nothing here checks that the scalar is in
/// range for the group order, or that the public point matches it.
#[derive(Clone)]
pub struct SecretKey {
    params: CurveParameters,
    scalar: Zeroizing<Vec<u8>>,
    public_key: Option<AffinePoint>,
}

impl SecretKey {
    /// Create a secret key from a big-endian scalar.
    ///
    /// Shorter inputs are left-padded with zeroes. Inputs wider than the
    /// field size fail with [`Error::CoordinateOverflow`] unless the excess
    /// leading bytes are all zero.
    pub fn from_slice(params: &CurveParameters, scalar: &[u8]) -> Result<Self> {
        let size = params.field_bytes_size();
        let scalar = match scalar.len().checked_sub(size) {
            Some(excess) => {
                if scalar[..excess].iter().any(|&b| b != 0) {
                    return Err(Error::CoordinateOverflow);
                }
                Zeroizing::new(scalar[excess..].to_vec())
            }
            None => {
                let mut padded = Zeroizing::new(vec![0u8; size]);
                padded[(size - scalar.len())..].copy_from_slice(scalar);
                padded
            }
        };

        Ok(Self {
            params: params.clone(),
            scalar,
            public_key: None,
        })
    }

    /// Attach the public point corresponding to this key.
    pub fn with_public_key(mut self, public_key: AffinePoint) -> Self {
        self.public_key = Some(public_key);
        self
    }

    /// Curve this key belongs to.
    pub fn params(&self) -> &CurveParameters {
        &self.params
    }

    /// Serialized private scalar, exactly `field_bytes_size` bytes.
    ///
    /// # ⚠️ Warning
    ///
    /// This value is key material.
    ///
    /// Please treat it with the care it deserves!
    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        self.scalar.clone()
    }

    /// Public point, if known.
    pub fn public_key(&self) -> Option<&AffinePoint> {
        self.public_key.as_ref()
    }

    /// Parse a SEC1 `ECPrivateKey` in DER.
    ///
    /// If the structure names a curve it must be `params`' curve.
    pub fn from_sec1_der(params: &CurveParameters, der: &[u8]) -> Result<Self> {
        let ec_private_key = EcPrivateKey::from_der(der)?;
        check_embedded_curve(params, &ec_private_key)?;
        Self::from_ec_private_key(params, &ec_private_key)
    }

    /// Serialize as a SEC1 `ECPrivateKey` in DER, naming the curve and
    /// including the uncompressed public point when it is known.
    pub fn to_sec1_der(&self) -> Result<Zeroizing<Vec<u8>>> {
        let public_key = self.encoded_public_key()?;
        encode_sec1(&self.params, &self.scalar, public_key.as_deref())
    }

    /// Parse a PKCS#8 `PrivateKeyInfo` in DER.
    pub fn from_pkcs8_der(params: &CurveParameters, der: &[u8]) -> Result<Self> {
        let private_key_info = PrivateKeyInfo::from_der(der)?;
        check_algorithm(params, &private_key_info.algorithm)?;

        let ec_private_key = decode_inner_key(params, &private_key_info)?;
        Self::from_ec_private_key(params, &ec_private_key)
    }

    /// Serialize as a PKCS#8 `PrivateKeyInfo` in DER.
    pub fn to_pkcs8_der(&self) -> Result<Zeroizing<Vec<u8>>> {
        let public_key = self.encoded_public_key()?;
        encode_pkcs8(&self.params, &self.scalar, public_key.as_deref())
    }

    /// Parse a PEM-armored SEC1 `ECPrivateKey` (`EC PRIVATE KEY`).
    #[cfg(feature = "pem")]
    pub fn from_sec1_pem(params: &CurveParameters, pem: &str) -> Result<Self> {
        let der = Zeroizing::new(crate::pem::decode(crate::pem::SEC1_LABEL, pem)?);
        Self::from_sec1_der(params, &der)
    }

    /// Serialize as a PEM-armored SEC1 `ECPrivateKey`.
    #[cfg(feature = "pem")]
    pub fn to_sec1_pem(&self) -> Result<Zeroizing<String>> {
        let der = self.to_sec1_der()?;
        crate::pem::encode(crate::pem::SEC1_LABEL, &der).map(Zeroizing::new)
    }

    /// Parse a PEM-armored PKCS#8 `PrivateKeyInfo` (`PRIVATE KEY`).
    #[cfg(feature = "pem")]
    pub fn from_pkcs8_pem(params: &CurveParameters, pem: &str) -> Result<Self> {
        let der = Zeroizing::new(crate::pem::decode(crate::pem::PKCS8_LABEL, pem)?);
        Self::from_pkcs8_der(params, &der)
    }

    /// Serialize as a PEM-armored PKCS#8 `PrivateKeyInfo`.
    #[cfg(feature = "pem")]
    pub fn to_pkcs8_pem(&self) -> Result<Zeroizing<String>> {
        let der = self.to_pkcs8_der()?;
        crate::pem::encode(crate::pem::PKCS8_LABEL, &der).map(Zeroizing::new)
    }

    /// Parse a JWK holding a private key for `params`' curve.
    #[cfg(feature = "jwk")]
    pub fn from_jwk(params: &CurveParameters, jwk: &crate::JwkEcKey) -> Result<Self> {
        jwk.to_secret_key(params)
    }

    /// Parse a JSON-encoded JWK holding a private key.
    #[cfg(feature = "jwk")]
    pub fn from_jwk_str(params: &CurveParameters, jwk: &str) -> Result<Self> {
        jwk.parse::<crate::JwkEcKey>()
            .and_then(|jwk| Self::from_jwk(params, &jwk))
    }

    /// Serialize as a keypair JWK. Requires the public point.
    #[cfg(feature = "jwk")]
    pub fn to_jwk(&self) -> Result<crate::JwkEcKey> {
        crate::JwkEcKey::from_secret_key(self)
    }

    /// Serialize as a JSON-encoded keypair JWK.
    #[cfg(feature = "jwk")]
    pub fn to_jwk_string(&self) -> Result<Zeroizing<String>> {
        Ok(Zeroizing::new(alloc::string::ToString::to_string(&self.to_jwk()?)))
    }

    fn from_ec_private_key(params: &CurveParameters, ec_private_key: &EcPrivateKey<'_>) -> Result<Self> {
        let secret_key = Self::from_slice(params, ec_private_key.private_key)?;

        match ec_private_key.public_key {
            Some(bytes) => Ok(secret_key.with_public_key(AffinePoint::from_sec1_bytes(params, bytes)?)),
            None => Ok(secret_key),
        }
    }

    fn encoded_public_key(&self) -> Result<Option<Vec<u8>>> {
        self.public_key
            .as_ref()
            .map(|point| point.to_sec1_bytes(&self.params, false))
            .transpose()
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("curve", &self.params.name())
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}

impl PartialEq for SecretKey {
    fn eq(&self, other: &Self) -> bool {
        self.params == other.params
            && self.scalar.as_slice() == other.scalar.as_slice()
            && self.public_key == other.public_key
    }
}

impl Eq for SecretKey {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NamedCurve;
    use hex_literal::hex;

    const SCALAR: [u8; 32] = hex!("69624171561A63340DE0E7D869F2A05492558E1A04868B6A9F854A866788188D");

    #[test]
    fn short_scalar_is_padded() {
        let params = NamedCurve::P256.params().unwrap();
        let key = SecretKey::from_slice(&params, &[0x01]).unwrap();
        let bytes = key.to_bytes();
        assert_eq!(bytes.len(), 32);
        assert_eq!(bytes[31], 1);
        assert!(bytes[..31].iter().all(|&b| b == 0));
    }

    #[test]
    fn wide_scalar_with_leading_zero_is_accepted() {
        let params = NamedCurve::P256.params().unwrap();
        let mut wide = [0u8; 33];
        wide[1..].copy_from_slice(&SCALAR);
        let key = SecretKey::from_slice(&params, &wide).unwrap();
        assert_eq!(key.to_bytes().as_slice(), &SCALAR[..]);
    }

    #[test]
    fn wide_scalar_overflows() {
        let params = NamedCurve::P256.params().unwrap();
        let wide = [0xffu8; 33];
        assert_eq!(
            SecretKey::from_slice(&params, &wide).err(),
            Some(Error::CoordinateOverflow)
        );
    }

    #[test]
    fn debug_omits_scalar() {
        let params = NamedCurve::P256.params().unwrap();
        let key = SecretKey::from_slice(&params, &SCALAR).unwrap();
        let debug = alloc::format!("{:?}", key);
        assert!(debug.contains("P-256"));
        assert!(!debug.to_lowercase().contains("69624171"));
    }

    #[test]
    fn reframing_rejects_wide_scalar() {
        let params = NamedCurve::P256.params().unwrap();
        let sec1 = EcPrivateKey {
            private_key: &[0x11; 40],
            parameters: None,
            public_key: None,
        }
        .to_der()
        .unwrap();

        assert_eq!(
            sec1_to_pkcs8(&params, &sec1).err(),
            Some(Error::CoordinateOverflow)
        );
    }

    #[test]
    fn sec1_without_public_key_round_trip() {
        let params = NamedCurve::P384.params().unwrap();
        let key = SecretKey::from_slice(&params, &[0x42; 48]).unwrap();
        let der = key.to_sec1_der().unwrap();
        assert_eq!(SecretKey::from_sec1_der(&params, &der).unwrap(), key);
    }
}
