#![no_main]
// Feeds arbitrary bytes to the private key, public key and JWK parsers.
// Nothing may panic, and SEC1 <-> PKCS#8 conversion must round-trip.
use eccodec::{from_public_key_der, pkcs8_to_sec1, sec1_to_pkcs8, JwkEcKey, NamedCurve};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    for curve in [NamedCurve::P256, NamedCurve::P384, NamedCurve::P521] {
        let Ok(params) = curve.params() else {
            continue;
        };

        if let Ok(pkcs8) = sec1_to_pkcs8(&params, data) {
            let sec1 = pkcs8_to_sec1(&params, &pkcs8).unwrap();
            assert_eq!(sec1_to_pkcs8(&params, &sec1).unwrap(), pkcs8);
        }

        if let Ok(sec1) = pkcs8_to_sec1(&params, data) {
            let pkcs8 = sec1_to_pkcs8(&params, &sec1).unwrap();
            assert_eq!(pkcs8_to_sec1(&params, &pkcs8).unwrap(), sec1);
        }

        let _ = from_public_key_der(&params, data);

        if let Some(jwk) = core::str::from_utf8(data)
            .ok()
            .and_then(|s| s.parse::<JwkEcKey>().ok())
        {
            let _ = jwk.to_public_point(&params);
            let _ = jwk.to_secret_key(&params);
        }
    }
});
