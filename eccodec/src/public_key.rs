//! X.509 `SubjectPublicKeyInfo` framing for elliptic curve public keys.
//!
//! ```text
//! SubjectPublicKeyInfo ::= SEQUENCE {
//!   algorithm         AlgorithmIdentifier,  -- id-ecPublicKey, namedCurve
//!   subjectPublicKey  BIT STRING            -- SEC1 encoded point
//! }
//! ```

use crate::{secret_key::ALGORITHM_OID, AffinePoint, CurveParameters, Error, Result};
use alloc::vec::Vec;
use der::{asn1::BitStringRef, Decode, Encode};
use pkcs8::{spki::SubjectPublicKeyInfoRef, AlgorithmIdentifierRef};

/// Serialize `point` as a DER `SubjectPublicKeyInfo`.
pub fn to_public_key_der(
    params: &CurveParameters,
    point: &AffinePoint,
    compress: bool,
) -> Result<Vec<u8>> {
    let point_bytes = point.to_sec1_bytes(params, compress)?;
    let curve_oid = params.oid();

    let spki = SubjectPublicKeyInfoRef {
        algorithm: AlgorithmIdentifierRef {
            oid: ALGORITHM_OID,
            parameters: Some((&curve_oid).into()),
        },
        subject_public_key: BitStringRef::from_bytes(&point_bytes)?,
    };

    Ok(spki.to_der()?)
}

/// Parse a DER `SubjectPublicKeyInfo` holding a point on `params`' curve.
///
/// The point may be compressed or uncompressed.
pub fn from_public_key_der(params: &CurveParameters, der: &[u8]) -> Result<AffinePoint> {
    let spki = SubjectPublicKeyInfoRef::from_der(der)?;

    match spki.algorithm.oids()? {
        (oid, Some(curve_oid)) if oid == ALGORITHM_OID && curve_oid == params.oid() => (),
        _ => return Err(Error::CurveMismatch),
    }

    let point_bytes = spki
        .subject_public_key
        .as_bytes()
        .ok_or(Error::MalformedPoint)?;

    AffinePoint::from_sec1_bytes(params, point_bytes)
}

/// Serialize `point` as a PEM-armored `SubjectPublicKeyInfo` (`PUBLIC KEY`).
#[cfg(feature = "pem")]
pub fn to_public_key_pem(
    params: &CurveParameters,
    point: &AffinePoint,
    compress: bool,
) -> Result<alloc::string::String> {
    let der = to_public_key_der(params, point, compress)?;
    crate::pem::encode(crate::pem::PUBLIC_KEY_LABEL, &der)
}

/// Parse a PEM-armored `SubjectPublicKeyInfo`.
#[cfg(feature = "pem")]
pub fn from_public_key_pem(params: &CurveParameters, pem: &str) -> Result<AffinePoint> {
    let der = crate::pem::decode(crate::pem::PUBLIC_KEY_LABEL, pem)?;
    from_public_key_der(params, &der)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NamedCurve;
    use hex_literal::hex;

    const BASEPOINT: [u8; 65] = hex!(
        "04 6B17D1F2E12C4247F8BCE6E563A440F277037D812DEB33A0F4A13945D898C296
            4FE342E2FE1A7F9B8EE7EB4A7C0F9E162BCE33576B315ECECBB6406837BF51F5"
    );

    #[test]
    fn spki_prefix() {
        let params = NamedCurve::P256.params().unwrap();
        let point = AffinePoint::from_sec1_bytes(&params, &BASEPOINT).unwrap();
        let der = to_public_key_der(&params, &point, false).unwrap();

        assert_eq!(der.len(), 91);
        assert_eq!(
            &der[..26],
            &hex!("3059301306072a8648ce3d020106082a8648ce3d030107034200")
        );
        assert_eq!(&der[26..], &BASEPOINT);
    }

    #[test]
    fn wrong_curve() {
        let p256 = NamedCurve::P256.params().unwrap();
        let k256 = NamedCurve::Secp256k1.params().unwrap();
        let point = AffinePoint::from_sec1_bytes(&p256, &BASEPOINT).unwrap();
        let der = to_public_key_der(&p256, &point, true).unwrap();

        assert_eq!(
            from_public_key_der(&k256, &der),
            Err(Error::CurveMismatch)
        );
    }
}
