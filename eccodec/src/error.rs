//! Error type

use core::fmt::{self, Display};

/// Result type with the `eccodec` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Elliptic curve codec errors.
///
/// Every error is terminal for the call that produced it: the codec is pure
/// computation, so there is nothing transient to retry.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Point encoding has an unknown tag byte, the wrong length for the
    /// curve, or an x-coordinate with no corresponding y on the curve.
    MalformedPoint,

    /// Curve field prime is not congruent to 3 mod 4.
    UnsupportedCurve,

    /// Integer does not fit in the curve's field element width.
    CoordinateOverflow,

    /// Key is tagged with a different curve than the one expected.
    CurveMismatch,

    /// DER structure is truncated or otherwise fails to parse.
    TruncatedInput,

    /// JWK member is missing, not base64url, or has the wrong length.
    InvalidJwkField,

    /// Curve name, OID, or JWK `crv` is not in the registry.
    UnknownCurve,

    /// PEM armor is malformed or carries an unexpected label.
    InvalidPem,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::MalformedPoint => "malformed elliptic curve point",
            Error::UnsupportedCurve => "unsupported curve: field prime is not 3 mod 4",
            Error::CoordinateOverflow => "integer exceeds field element size",
            Error::CurveMismatch => "key is for a different curve",
            Error::TruncatedInput => "malformed or truncated DER structure",
            Error::InvalidJwkField => "invalid JWK field",
            Error::UnknownCurve => "unknown curve",
            Error::InvalidPem => "invalid PEM document",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<der::Error> for Error {
    fn from(_: der::Error) -> Error {
        Error::TruncatedInput
    }
}

impl From<sec1::Error> for Error {
    fn from(_: sec1::Error) -> Error {
        Error::TruncatedInput
    }
}

impl From<pkcs8::Error> for Error {
    fn from(err: pkcs8::Error) -> Error {
        match err {
            pkcs8::Error::PublicKey(err) => err.into(),
            _ => Error::TruncatedInput,
        }
    }
}

impl From<pkcs8::spki::Error> for Error {
    fn from(err: pkcs8::spki::Error) -> Error {
        match err {
            pkcs8::spki::Error::OidUnknown { .. } => Error::CurveMismatch,
            _ => Error::TruncatedInput,
        }
    }
}

#[cfg(feature = "pem")]
impl From<pem_rfc7468::Error> for Error {
    fn from(_: pem_rfc7468::Error) -> Error {
        Error::InvalidPem
    }
}
