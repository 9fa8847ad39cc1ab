//! JSON Web Key (JWK) support for elliptic curve keys.
//!
//! Specified in RFC 7518 Section 6: Cryptographic Algorithms for Keys:
//! <https://tools.ietf.org/html/rfc7518#section-6>
//!
//! Coordinates and private scalars are carried as unpadded base64url
//! strings of exactly the curve's field size.

use crate::{AffinePoint, CurveParameters, Error, Result, SecretKey};
use alloc::{borrow::ToOwned, string::String, vec::Vec};
use base64ct::{Base64UrlUnpadded as Base64Url, Encoding};
use core::{
    fmt::{self, Debug},
    str::FromStr,
};
use num_bigint::BigUint;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroizing;

/// Key Type (`kty`) for elliptic curve keys.
pub const EC_KTY: &str = "EC";

/// Encode a coordinate as unpadded base64url, padded to the field size.
pub fn encode_coordinate(params: &CurveParameters, coordinate: &BigUint) -> Result<String> {
    Ok(Base64Url::encode_string(
        &params.encode_field_element(coordinate)?,
    ))
}

/// Decode an unpadded base64url coordinate.
///
/// Fails with [`Error::InvalidJwkField`] if `field` is not base64url or
/// does not decode to exactly the field size.
pub fn decode_coordinate(params: &CurveParameters, field: &str) -> Result<BigUint> {
    params
        .decode_field_element(&decode_field(field)?)
        .map_err(|_| Error::InvalidJwkField)
}

fn decode_field(field: &str) -> Result<Vec<u8>> {
    Base64Url::decode_vec(field).map_err(|_| Error::InvalidJwkField)
}

/// `crv` value used for `params` in JWK documents.
///
/// Curves without a registered JWK name use their canonical name.
fn crv_for(params: &CurveParameters) -> &str {
    params.jwk_crv().unwrap_or_else(|| params.name())
}

/// JSON Web Key (JWK) with a `kty` of `"EC"` (elliptic curve).
///
/// This type can represent either a public/private keypair, or just a
/// public key, depending on whether or not the `d` parameter is present.
#[derive(Clone, Eq, PartialEq)]
pub struct JwkEcKey {
    /// The `crv` parameter which identifies a particular elliptic curve
    /// as defined in RFC 7518 Section 6.2.1.1.
    crv: String,

    /// x-coordinate of the public point (RFC 7518 6.2.1.2).
    x: String,

    /// y-coordinate of the public point (RFC 7518 6.2.1.3).
    y: String,

    /// The `d` ECC private key parameter (RFC 7518 6.2.2.1).
    ///
    /// Value is optional and if omitted, this JWK represents a public key.
    d: Option<Zeroizing<String>>,
}

impl JwkEcKey {
    /// Get the `crv` parameter for this JWK.
    pub fn crv(&self) -> &str {
        &self.crv
    }

    /// Is this JWK a keypair that includes a private key?
    pub fn is_keypair(&self) -> bool {
        self.d.is_some()
    }

    /// Does this JWK contain only a public key?
    pub fn is_public_key(&self) -> bool {
        self.d.is_none()
    }

    /// Create a public key JWK from a point on `params`' curve.
    pub fn from_public_point(params: &CurveParameters, point: &AffinePoint) -> Result<Self> {
        Ok(Self {
            crv: crv_for(params).to_owned(),
            x: encode_coordinate(params, point.x())?,
            y: encode_coordinate(params, point.y())?,
            d: None,
        })
    }

    /// Decode the public point of this JWK.
    ///
    /// Fails with [`Error::CurveMismatch`] if `crv` does not name `params`'
    /// curve.
    pub fn to_public_point(&self, params: &CurveParameters) -> Result<AffinePoint> {
        if self.crv != crv_for(params) {
            return Err(Error::CurveMismatch);
        }

        Ok(AffinePoint::new(
            decode_coordinate(params, &self.x)?,
            decode_coordinate(params, &self.y)?,
        ))
    }

    /// Create a keypair JWK from a secret key.
    ///
    /// The secret key must carry its public point, since a private key JWK
    /// includes `x` and `y`. Fails with [`Error::InvalidJwkField`] if it
    /// does not.
    pub fn from_secret_key(secret_key: &SecretKey) -> Result<Self> {
        let point = secret_key.public_key().ok_or(Error::InvalidJwkField)?;
        let mut jwk = Self::from_public_point(secret_key.params(), point)?;
        jwk.d = Some(Zeroizing::new(Base64Url::encode_string(
            &secret_key.to_bytes(),
        )));
        Ok(jwk)
    }

    /// Decode a keypair JWK into a [`SecretKey`] with its public point.
    pub fn to_secret_key(&self, params: &CurveParameters) -> Result<SecretKey> {
        let point = self.to_public_point(params)?;
        let d = self.d.as_ref().ok_or(Error::InvalidJwkField)?;
        let scalar = Zeroizing::new(decode_field(d)?);

        if scalar.len() != params.field_bytes_size() {
            return Err(Error::InvalidJwkField);
        }

        Ok(SecretKey::from_slice(params, &scalar)?.with_public_key(point))
    }
}

impl FromStr for JwkEcKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|_| Error::InvalidJwkField)
    }
}

impl fmt::Display for JwkEcKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = Zeroizing::new(serde_json::to_string(self).map_err(|_| fmt::Error)?);
        f.write_str(&json)
    }
}

impl Debug for JwkEcKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = if self.d.is_some() {
            "Some(...)"
        } else {
            "None"
        };

        // NOTE: this implementation omits the `d` private key parameter
        f.debug_struct("JwkEcKey")
            .field("crv", &self.crv)
            .field("x", &self.x)
            .field("y", &self.y)
            .field("d", &d)
            .finish()
    }
}

impl TryFrom<&SecretKey> for JwkEcKey {
    type Error = Error;

    fn try_from(secret_key: &SecretKey) -> Result<Self> {
        Self::from_secret_key(secret_key)
    }
}

/// Wire form of the JWK, including `kty`.
#[derive(Serialize)]
struct JwkDocumentRef<'a> {
    kty: &'a str,
    crv: &'a str,
    x: &'a str,
    y: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    d: Option<&'a str>,
}

#[derive(Deserialize)]
struct JwkDocument {
    kty: String,
    crv: String,
    x: String,
    y: String,
    #[serde(default)]
    d: Option<String>,
}

impl Serialize for JwkEcKey {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        JwkDocumentRef {
            kty: EC_KTY,
            crv: &self.crv,
            x: &self.x,
            y: &self.y,
            d: self.d.as_ref().map(|d| d.as_str()),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for JwkEcKey {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let doc = JwkDocument::deserialize(deserializer)?;

        if doc.kty != EC_KTY {
            return Err(de::Error::invalid_value(
                de::Unexpected::Str(&doc.kty),
                &EC_KTY,
            ));
        }

        Ok(Self {
            crv: doc.crv,
            x: doc.x,
            y: doc.y,
            d: doc.d.map(Zeroizing::new),
        })
    }
}
