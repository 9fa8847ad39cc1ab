//! JSON Web Key tests.

#![cfg(feature = "jwk")]

use eccodec::{
    jwk::{decode_coordinate, encode_coordinate},
    AffinePoint, BigUint, Error, JwkEcKey, NamedCurve, SecretKey,
};
use hex_literal::hex;
use proptest::prelude::*;

/// Example private key. From RFC 7518 Appendix C:
/// <https://tools.ietf.org/html/rfc7518#appendix-C>
const JWK_PRIVATE_KEY: &str = r#"
    {
      "kty":"EC",
      "crv":"P-256",
      "x":"gI0GAILBdu7T53akrFmMyGcsF3n5dO7MmwNBHKW5SV0",
      "y":"SLW_xSffzlPWrHEVI30DHM_4egVwt3NQqeUD7nMFpps",
      "d":"0_NxaRPUMQoAJt50Gz8YiTr8gRTwyEaCumd-MToTmIo"
    }
"#;

/// Example public key. From RFC 7517 Appendix A.1:
/// <https://tools.ietf.org/html/rfc7517#appendix-A.1>
const JWK_PUBLIC_KEY: &str = r#"
    {
      "kty":"EC",
      "crv":"P-256",
      "x":"MKBCTNIcKUSDii11ySs3526iDZ8AiTo7Tu6KPAqv7D4",
      "y":"4Etl6SRW2YiLUrN5vfvVHuhp7x8PxltmWWlbbM4IFyM",
      "use":"enc",
      "kid":"1"
    }
"#;

/// Example P-521 private key. From RFC 7520 Section 3.2:
/// <https://tools.ietf.org/html/rfc7520#section-3.2>
const JWK_P521_PRIVATE_KEY: &str = r#"
    {
      "kty": "EC",
      "kid": "bilbo.baggins@hobbiton.example",
      "use": "sig",
      "crv": "P-521",
      "x": "AHKZLLOsCOzz5cY97ewNUajB957y-C-U88c3v13nmGZx6sYl_oJXu9A5RkTKqjqvjyekWF-7ytDyRXYgCF5cj0Kt",
      "y": "AdymlHvOiLxXkEhayXQnNCvDX4h9htZaCJN34kfmC6pV5OhQHiraVySsUdaQkAgDPrwQrJmbnX9cwlGfP-HqHZR1",
      "d": "AAhRON2r9cqXX1hg-RoI6R1tX5p2rUAYdmpHZoC1XNM56KtscrX6zbKipQrCW9CGZH3T4ubpnoTKLDYJ_fF3_rJt"
    }
"#;

/// SEC1 `ECPrivateKey` for the RFC 7518 Appendix C key.
const SEC1_PRIVATE_KEY: &[u8] = &hex!(
    "30770201010420d3f3716913d4310a0026de741b3f18893afc8114f0c84682ba677e313a13988a
     a00a06082a8648ce3d030107
     a14403420004808d060082c176eed3e776a4ac598cc8672c1779f974eecc9b03411ca5b9495d
     48b5bfc527dfce53d6ac7115237d031ccff87a0570b77350a9e503ee7305a69b"
);

#[test]
fn parse_public_key() {
    let jwk = JWK_PUBLIC_KEY.parse::<JwkEcKey>().unwrap();
    assert_eq!(jwk.crv(), "P-256");
    assert!(jwk.is_public_key());

    let params = NamedCurve::P256.params().unwrap();
    let point = jwk.to_public_point(&params).unwrap();
    assert_eq!(
        point.x(),
        &BigUint::from_bytes_be(&hex!(
            "30a0424cd21c2944838a2d75c92b37e76ea20d9f00893a3b4eee8a3c0aafec3e"
        ))
    );
}

#[test]
fn private_key_matches_sec1() {
    let params = NamedCurve::P256.params().unwrap();
    let jwk = JWK_PRIVATE_KEY.parse::<JwkEcKey>().unwrap();

    let secret_key = jwk.to_secret_key(&params).unwrap();
    assert_eq!(secret_key.to_sec1_der().unwrap().as_slice(), SEC1_PRIVATE_KEY);
    assert_eq!(
        SecretKey::from_sec1_der(&params, SEC1_PRIVATE_KEY)
            .unwrap()
            .to_jwk()
            .unwrap(),
        jwk
    );
}

#[test]
fn private_key_to_string() {
    let params = NamedCurve::P256.params().unwrap();
    let secret_key = SecretKey::from_jwk_str(&params, JWK_PRIVATE_KEY).unwrap();

    assert_eq!(
        secret_key.to_jwk_string().unwrap().as_str(),
        r#"{"kty":"EC","crv":"P-256","x":"gI0GAILBdu7T53akrFmMyGcsF3n5dO7MmwNBHKW5SV0","y":"SLW_xSffzlPWrHEVI30DHM_4egVwt3NQqeUD7nMFpps","d":"0_NxaRPUMQoAJt50Gz8YiTr8gRTwyEaCumd-MToTmIo"}"#
    );
}

#[test]
fn p521_leading_zeroes() {
    let params = NamedCurve::P521.params().unwrap();
    let jwk = JWK_P521_PRIVATE_KEY.parse::<JwkEcKey>().unwrap();
    let secret_key = jwk.to_secret_key(&params).unwrap();

    let scalar = secret_key.to_bytes();
    assert_eq!(scalar.len(), 66);
    assert_eq!(&scalar[..2], &[0x00, 0x08]);

    let point = secret_key.public_key().unwrap();
    assert_eq!(point.to_sec1_bytes(&params, true).unwrap()[1], 0x00);
    assert_eq!(secret_key.to_jwk().unwrap(), jwk);
}

#[test]
fn curve_mismatch() {
    let params = NamedCurve::P384.params().unwrap();
    let jwk = JWK_PRIVATE_KEY.parse::<JwkEcKey>().unwrap();

    assert_eq!(jwk.to_public_point(&params), Err(Error::CurveMismatch));
    assert_eq!(jwk.to_secret_key(&params).err(), Some(Error::CurveMismatch));
}

#[test]
fn public_key_is_not_a_secret_key() {
    let params = NamedCurve::P256.params().unwrap();
    let jwk = JWK_PUBLIC_KEY.parse::<JwkEcKey>().unwrap();
    assert_eq!(jwk.to_secret_key(&params).err(), Some(Error::InvalidJwkField));
}

#[test]
fn secret_key_without_public_point() {
    let params = NamedCurve::P256.params().unwrap();
    let secret_key = SecretKey::from_slice(&params, &[1]).unwrap();
    assert_eq!(secret_key.to_jwk().err(), Some(Error::InvalidJwkField));
}

#[test]
fn invalid_fields() {
    let params = NamedCurve::P256.params().unwrap();

    // x-coordinate with a leading zero byte, 33 bytes
    let long_x = JWK_PUBLIC_KEY.replace(
        "MKBCTNIcKUSDii11ySs3526iDZ8AiTo7Tu6KPAqv7D4",
        "ADCgQkzSHClEg4otdckrN-duog2fAIk6O07uijwKr-w-",
    );
    let jwk = long_x.parse::<JwkEcKey>().unwrap();
    assert_eq!(jwk.to_public_point(&params), Err(Error::InvalidJwkField));

    // padded base64
    let padded = JWK_PUBLIC_KEY.replace(
        "MKBCTNIcKUSDii11ySs3526iDZ8AiTo7Tu6KPAqv7D4",
        "MKBCTNIcKUSDii11ySs3526iDZ8AiTo7Tu6KPAqv7D4=",
    );
    let jwk = padded.parse::<JwkEcKey>().unwrap();
    assert_eq!(jwk.to_public_point(&params), Err(Error::InvalidJwkField));

    assert_eq!(
        "{}".parse::<JwkEcKey>().err(),
        Some(Error::InvalidJwkField)
    );
    assert_eq!(
        JWK_PUBLIC_KEY
            .replace(r#""kty":"EC""#, r#""kty":"RSA""#)
            .parse::<JwkEcKey>()
            .err(),
        Some(Error::InvalidJwkField)
    );
}

#[test]
fn serde_json_value() {
    let jwk = JWK_PUBLIC_KEY.parse::<JwkEcKey>().unwrap();
    let value = serde_json::to_value(&jwk).unwrap();

    assert_eq!(value["kty"], "EC");
    assert_eq!(value["crv"], "P-256");
    assert!(value.get("d").is_none());
    assert!(value.get("kid").is_none());

    let parsed: JwkEcKey = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, jwk);
}

#[test]
fn brainpool_uses_curve_name() {
    let params = NamedCurve::BrainpoolP256r1.params().unwrap();
    let point = AffinePoint::new(BigUint::from(1u32), BigUint::from(2u32));
    let jwk = JwkEcKey::from_public_point(&params, &point).unwrap();

    assert_eq!(jwk.crv(), "brainpoolP256r1");
    assert_eq!(jwk.to_public_point(&params).unwrap(), point);
}

proptest! {
    #[test]
    fn coordinate_round_trip(
        curve in prop::sample::select(vec![NamedCurve::P256, NamedCurve::P384, NamedCurve::P521]),
        bytes in prop::collection::vec(any::<u8>(), 66),
    ) {
        let params = curve.params().unwrap();
        let x = BigUint::from_bytes_be(&bytes) % params.p();

        let field = encode_coordinate(&params, &x).unwrap();
        // unpadded base64url of exactly field_bytes_size bytes
        prop_assert_eq!(field.len(), (params.field_bytes_size() * 4 + 2) / 3);
        prop_assert!(!field.contains('=') && !field.contains('+') && !field.contains('/'));

        prop_assert_eq!(decode_coordinate(&params, &field).unwrap(), x);
    }
}
