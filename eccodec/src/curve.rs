//! Elliptic curve domain parameters for short Weierstrass curves
//! `y² = x³ + ax + b` over a prime field, and the registry of named curves.

use crate::{field, Error, Result};
use alloc::{string::String, vec::Vec};
use core::{fmt, str::FromStr};
use num_bigint::BigUint;
use num_traits::Zero;
use pkcs8::ObjectIdentifier;

/// Domain parameters of a prime-field short Weierstrass curve, as far as
/// the point and key codecs need them.
///
/// Only curves whose field prime satisfies `p ≡ 3 (mod 4)` can be
/// constructed; see [`CurveParameters::new`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CurveParameters {
    name: String,
    oid: ObjectIdentifier,
    jwk_crv: Option<String>,
    p: BigUint,
    a: BigUint,
    b: BigUint,
    field_bytes_size: usize,
}

impl CurveParameters {
    /// Create curve parameters from the field prime `p` and the curve
    /// equation coefficients `a` and `b`.
    ///
    /// Fails with [`Error::UnsupportedCurve`] unless `p ≡ 3 (mod 4)`, which
    /// is required by the square root used for point decompression.
    /// Coefficients are reduced modulo `p`.
    pub fn new(
        name: impl Into<String>,
        oid: ObjectIdentifier,
        p: BigUint,
        a: BigUint,
        b: BigUint,
    ) -> Result<Self> {
        if !field::is_3_mod_4(&p) {
            return Err(Error::UnsupportedCurve);
        }

        let field_bytes_size = ((p.bits() + 7) / 8) as usize;
        let a = a % &p;
        let b = b % &p;

        Ok(Self {
            name: name.into(),
            oid,
            jwk_crv: None,
            p,
            a,
            b,
            field_bytes_size,
        })
    }

    /// Set the JWK `crv` value used for this curve (RFC 7518 § 6.2.1.1).
    pub fn with_jwk_crv(mut self, crv: impl Into<String>) -> Self {
        self.jwk_crv = Some(crv.into());
        self
    }

    /// Curve name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Object identifier naming this curve in SEC1/PKCS#8/SPKI structures.
    pub fn oid(&self) -> ObjectIdentifier {
        self.oid
    }

    /// JWK `crv` value, if this curve has one registered.
    pub fn jwk_crv(&self) -> Option<&str> {
        self.jwk_crv.as_deref()
    }

    /// Field prime `p`.
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// Curve equation coefficient `a`.
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// Curve equation coefficient `b`.
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// Size of a serialized field element: `ceil(bits(p) / 8)`.
    pub fn field_bytes_size(&self) -> usize {
        self.field_bytes_size
    }

    /// Serialize a field element as exactly [`field_bytes_size`] big-endian
    /// bytes.
    ///
    /// [`field_bytes_size`]: CurveParameters::field_bytes_size
    pub fn encode_field_element(&self, value: &BigUint) -> Result<Vec<u8>> {
        field::to_fixed_bytes(value, self.field_bytes_size)
    }

    /// Parse a field element serialized as exactly [`field_bytes_size`]
    /// big-endian bytes.
    ///
    /// [`field_bytes_size`]: CurveParameters::field_bytes_size
    pub fn decode_field_element(&self, bytes: &[u8]) -> Result<BigUint> {
        if bytes.len() != self.field_bytes_size {
            return Err(Error::CoordinateOverflow);
        }

        Ok(field::from_be_bytes(bytes))
    }

    /// Compute `x³ + ax + b mod p`.
    pub fn equation_rhs(&self, x: &BigUint) -> BigUint {
        let p = &self.p;
        let x = x % p;
        let x3 = (&x * &x % p) * &x % p;
        let ax = &self.a * &x % p;
        (x3 + ax + &self.b) % p
    }

    /// Square root modulo `p`, or `None` if `value` is a non-residue.
    pub fn sqrt(&self, value: &BigUint) -> Result<Option<BigUint>> {
        field::sqrt_3mod4(value, &self.p)
    }

    /// Negate a field element: `p - v mod p`.
    pub(crate) fn negate(&self, value: &BigUint) -> BigUint {
        if value.is_zero() {
            BigUint::zero()
        } else {
            &self.p - (value % &self.p)
        }
    }
}

impl fmt::Display for CurveParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Static description of a named curve.
struct CurveEntry {
    name: &'static str,
    aliases: &'static [&'static str],
    oid: ObjectIdentifier,
    jwk_crv: Option<&'static str>,
    p: &'static str,
    a: &'static str,
    b: &'static str,
}

/// NIST P-192 (secp192r1, prime192v1)
static P192: CurveEntry = CurveEntry {
    name: "P-192",
    aliases: &["secp192r1", "prime192v1", "nistp192"],
    oid: ObjectIdentifier::new_unwrap("1.2.840.10045.3.1.1"),
    jwk_crv: None,
    p: "fffffffffffffffffffffffffffffffeffffffffffffffff",
    a: "fffffffffffffffffffffffffffffffefffffffffffffffc",
    b: "64210519e59c80e70fa7e9ab72243049feb8deecc146b9b1",
};

/// NIST P-224 (secp224r1)
///
/// Its field prime is `1 mod 4`, so it is listed but cannot be materialized.
static P224: CurveEntry = CurveEntry {
    name: "P-224",
    aliases: &["secp224r1", "nistp224"],
    oid: ObjectIdentifier::new_unwrap("1.3.132.0.33"),
    jwk_crv: None,
    p: "ffffffffffffffffffffffffffffffff000000000000000000000001",
    a: "fffffffffffffffffffffffffffffffefffffffffffffffffffffffe",
    b: "b4050a850c04b3abf54132565044b0b7d7bfd8ba270b39432355ffb4",
};

/// NIST P-256 (secp256r1, prime256v1)
static P256: CurveEntry = CurveEntry {
    name: "P-256",
    aliases: &["secp256r1", "prime256v1", "nistp256"],
    oid: ObjectIdentifier::new_unwrap("1.2.840.10045.3.1.7"),
    jwk_crv: Some("P-256"),
    p: "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
    a: "ffffffff00000001000000000000000000000000fffffffffffffffffffffffc",
    b: "5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b",
};

/// NIST P-384 (secp384r1)
static P384: CurveEntry = CurveEntry {
    name: "P-384",
    aliases: &["secp384r1", "nistp384"],
    oid: ObjectIdentifier::new_unwrap("1.3.132.0.34"),
    jwk_crv: Some("P-384"),
    p: "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffff0000000000000000ffffffff",
    a: "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffff0000000000000000fffffffc",
    b: "b3312fa7e23ee7e4988e056be3f82d19181d9c6efe8141120314088f5013875ac656398d8a2ed19d2a85c8edd3ec2aef",
};

/// NIST P-521 (secp521r1)
static P521: CurveEntry = CurveEntry {
    name: "P-521",
    aliases: &["secp521r1", "nistp521"],
    oid: ObjectIdentifier::new_unwrap("1.3.132.0.35"),
    jwk_crv: Some("P-521"),
    p: "01ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
    a: "01fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffc",
    b: "0051953eb9618e1c9a1f929a21a0b68540eea2da725b99b315f3b8b489918ef109e156193951ec7e937b1652c0bd3bb1bf073573df883d2c34f1ef451fd46b503f00",
};

/// secp256k1
static SECP256K1: CurveEntry = CurveEntry {
    name: "secp256k1",
    aliases: &["K-256", "P-256K"],
    oid: ObjectIdentifier::new_unwrap("1.3.132.0.10"),
    jwk_crv: Some("secp256k1"),
    p: "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f",
    a: "00",
    b: "07",
};

/// brainpoolP256r1 (RFC 5639)
static BRAINPOOL_P256R1: CurveEntry = CurveEntry {
    name: "brainpoolP256r1",
    aliases: &["bp256r1"],
    oid: ObjectIdentifier::new_unwrap("1.3.36.3.3.2.8.1.1.7"),
    jwk_crv: None,
    p: "a9fb57dba1eea9bc3e660a909d838d726e3bf623d52620282013481d1f6e5377",
    a: "7d5a0975fc2c3057eef67530417affe7fb8055c126dc5c6ce94a4b44f330b5d9",
    b: "26dc5c6ce94a4b44f330b5d9bbd77cbf958416295cf7e1ce6bccdc18ff8c07b6",
};

/// brainpoolP384r1 (RFC 5639)
static BRAINPOOL_P384R1: CurveEntry = CurveEntry {
    name: "brainpoolP384r1",
    aliases: &["bp384r1"],
    oid: ObjectIdentifier::new_unwrap("1.3.36.3.3.2.8.1.1.11"),
    jwk_crv: None,
    p: "8cb91e82a3386d280f5d6f7e50e641df152f7109ed5456b412b1da197fb71123acd3a729901d1a71874700133107ec53",
    a: "7bc382c63d8c150c3c72080ace05afa0c2bea28e4fb22787139165efba91f90f8aa5814a503ad4eb04a8c7dd22ce2826",
    b: "04a8c7dd22ce28268b39b55416f0447c2fb77de107dcd2a62e880ea53eeb62d57cb4390295dbc9943ab78696fa504c11",
};

/// brainpoolP512r1 (RFC 5639)
static BRAINPOOL_P512R1: CurveEntry = CurveEntry {
    name: "brainpoolP512r1",
    aliases: &["bp512r1"],
    oid: ObjectIdentifier::new_unwrap("1.3.36.3.3.2.8.1.1.13"),
    jwk_crv: None,
    p: "aadd9db8dbe9c48b3fd4e6ae33c9fc07cb308db3b3c9d20ed6639cca703308717d4d9b009bc66842aecda12ae6a380e62881ff2f2d82c68528aa6056583a48f3",
    a: "7830a3318b603b89e2327145ac234cc594cbdd8d3df91610a83441caea9863bc2ded5d5aa8253aa10a2ef1c98b9ac8b57f1117a72bf2c7b9e7c1ac4d77fc94ca",
    b: "3df91610a83441caea9863bc2ded5d5aa8253aa10a2ef1c98b9ac8b57f1117a72bf2c7b9e7c1ac4d77fc94cadc083e67984050b75ebae5dd2809bd638016f723",
};

/// Curves known to the registry.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[non_exhaustive]
pub enum NamedCurve {
    /// NIST P-192
    P192,

    /// NIST P-224
    P224,

    /// NIST P-256
    P256,

    /// NIST P-384
    P384,

    /// NIST P-521
    P521,

    /// secp256k1
    Secp256k1,

    /// brainpoolP256r1
    BrainpoolP256r1,

    /// brainpoolP384r1
    BrainpoolP384r1,

    /// brainpoolP512r1
    BrainpoolP512r1,
}

impl NamedCurve {
    /// All registered curves.
    pub const ALL: [NamedCurve; 9] = [
        NamedCurve::P192,
        NamedCurve::P224,
        NamedCurve::P256,
        NamedCurve::P384,
        NamedCurve::P521,
        NamedCurve::Secp256k1,
        NamedCurve::BrainpoolP256r1,
        NamedCurve::BrainpoolP384r1,
        NamedCurve::BrainpoolP512r1,
    ];

    fn entry(self) -> &'static CurveEntry {
        match self {
            NamedCurve::P192 => &P192,
            NamedCurve::P224 => &P224,
            NamedCurve::P256 => &P256,
            NamedCurve::P384 => &P384,
            NamedCurve::P521 => &P521,
            NamedCurve::Secp256k1 => &SECP256K1,
            NamedCurve::BrainpoolP256r1 => &BRAINPOOL_P256R1,
            NamedCurve::BrainpoolP384r1 => &BRAINPOOL_P384R1,
            NamedCurve::BrainpoolP512r1 => &BRAINPOOL_P512R1,
        }
    }

    /// Canonical curve name.
    pub fn name(self) -> &'static str {
        self.entry().name
    }

    /// Curve OID.
    pub fn oid(self) -> ObjectIdentifier {
        self.entry().oid
    }

    /// JWK `crv` value, if one is registered for this curve.
    pub fn jwk_crv(self) -> Option<&'static str> {
        self.entry().jwk_crv
    }

    /// Look up a curve by its canonical name or a common alias.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|curve| {
                let entry = curve.entry();
                entry.name.eq_ignore_ascii_case(name)
                    || entry.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
            })
            .ok_or(Error::UnknownCurve)
    }

    /// Look up a curve by OID.
    pub fn from_oid(oid: ObjectIdentifier) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|curve| curve.oid() == oid)
            .ok_or(Error::UnknownCurve)
    }

    /// Look up a curve by JWK `crv` value.
    pub fn from_jwk_crv(crv: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|curve| curve.jwk_crv() == Some(crv))
            .ok_or(Error::UnknownCurve)
    }

    /// Materialize the [`CurveParameters`] for this curve.
    ///
    /// Fails with [`Error::UnsupportedCurve`] for curves whose field prime
    /// is not `3 mod 4` (i.e. P-224).
    pub fn params(self) -> Result<CurveParameters> {
        let entry = self.entry();
        let params = CurveParameters::new(
            entry.name,
            entry.oid,
            parse_hex(entry.p)?,
            parse_hex(entry.a)?,
            parse_hex(entry.b)?,
        )?;

        Ok(match entry.jwk_crv {
            Some(crv) => params.with_jwk_crv(crv),
            None => params,
        })
    }
}

impl fmt::Display for NamedCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NamedCurve {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl TryFrom<ObjectIdentifier> for NamedCurve {
    type Error = Error;

    fn try_from(oid: ObjectIdentifier) -> Result<Self> {
        Self::from_oid(oid)
    }
}

impl TryFrom<NamedCurve> for CurveParameters {
    type Error = Error;

    fn try_from(curve: NamedCurve) -> Result<Self> {
        curve.params()
    }
}

fn parse_hex(hex: &str) -> Result<BigUint> {
    BigUint::parse_bytes(hex.as_bytes(), 16).ok_or(Error::UnknownCurve)
}
