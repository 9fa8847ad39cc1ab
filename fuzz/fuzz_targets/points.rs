#![no_main]
// Decodes arbitrary bytes as SEC1 points on every supported curve and checks
// that whatever decodes re-encodes to the same bytes.
use eccodec::{AffinePoint, NamedCurve};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    for curve in NamedCurve::ALL {
        let Ok(params) = curve.params() else {
            continue;
        };

        let Ok(point) = AffinePoint::from_sec1_bytes(&params, data) else {
            continue;
        };

        let compress = data[0] != 0x04;
        assert_eq!(point.to_sec1_bytes(&params, compress).unwrap(), data);

        // a decompressed point survives the uncompressed form
        if compress {
            let uncompressed = point.to_sec1_bytes(&params, false).unwrap();
            assert_eq!(AffinePoint::from_sec1_bytes(&params, &uncompressed).unwrap(), point);
        }
    }
});
