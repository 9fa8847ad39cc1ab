//! Compressed and uncompressed Weierstrass elliptic curve points.
//!
//! Serialized according to the `Elliptic-Curve-Point-to-Octet-String`
//! algorithm described in SEC 1: Elliptic Curve Cryptography (Version 2.0)
//! section 2.3.3 (page 10):
//!
//! <https://www.secg.org/sec1-v2.pdf>
//!
//! Decoding only recovers coordinates. Whether an uncompressed point
//! actually satisfies the curve equation is left to whoever consumes the
//! point.

use crate::{CurveParameters, Error, Result};
use alloc::vec::Vec;
use num_bigint::BigUint;

/// SEC1 point encoding tag byte.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Tag {
    /// Compressed point with even y-coordinate
    CompressedEvenY = 0x02,

    /// Compressed point with odd y-coordinate
    CompressedOddY = 0x03,

    /// Uncompressed point
    Uncompressed = 0x04,
}

impl Tag {
    /// Parse a tag byte.
    pub fn from_u8(byte: u8) -> Result<Self> {
        match byte {
            0x02 => Ok(Tag::CompressedEvenY),
            0x03 => Ok(Tag::CompressedOddY),
            0x04 => Ok(Tag::Uncompressed),
            _ => Err(Error::MalformedPoint),
        }
    }

    /// Tag for a compressed point with the given y-coordinate parity.
    pub fn compress_y(y_is_odd: bool) -> Self {
        if y_is_odd {
            Tag::CompressedOddY
        } else {
            Tag::CompressedEvenY
        }
    }

    /// Is this a compressed point tag?
    pub fn is_compressed(self) -> bool {
        matches!(self, Tag::CompressedEvenY | Tag::CompressedOddY)
    }

    /// Total length of a point encoding with this tag, including the tag
    /// byte itself, for a curve with `field_bytes_size`-byte coordinates.
    pub fn message_len(self, field_bytes_size: usize) -> usize {
        if self.is_compressed() {
            1 + field_bytes_size
        } else {
            1 + 2 * field_bytes_size
        }
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> u8 {
        tag as u8
    }
}

impl TryFrom<u8> for Tag {
    type Error = Error;

    fn try_from(byte: u8) -> Result<Self> {
        Self::from_u8(byte)
    }
}

/// Point on a short Weierstrass curve in affine coordinates.
///
/// Both coordinates are integers in `[0, p)`. The curve equation is not
/// checked on construction.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct AffinePoint {
    x: BigUint,
    y: BigUint,
}

impl AffinePoint {
    /// Create a point from its affine coordinates.
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Self { x, y }
    }

    /// x-coordinate
    pub fn x(&self) -> &BigUint {
        &self.x
    }

    /// y-coordinate
    pub fn y(&self) -> &BigUint {
        &self.y
    }

    /// Is the y-coordinate odd in the SEC1 sense: `y mod 2 == 1`?
    pub fn is_y_odd(&self) -> bool {
        self.y.bit(0)
    }

    /// Decompose into `(x, y)`.
    pub fn into_coordinates(self) -> (BigUint, BigUint) {
        (self.x, self.y)
    }

    /// Decode a point from its SEC1 encoding, compressed or uncompressed.
    pub fn from_sec1_bytes(params: &CurveParameters, bytes: &[u8]) -> Result<Self> {
        let tag = Tag::from_u8(*bytes.first().ok_or(Error::MalformedPoint)?)?;
        let size = params.field_bytes_size();

        if bytes.len() != tag.message_len(size) {
            return Err(Error::MalformedPoint);
        }

        let x = BigUint::from_bytes_be(&bytes[1..(1 + size)]);

        match tag {
            Tag::Uncompressed => {
                let y = BigUint::from_bytes_be(&bytes[(1 + size)..]);
                Ok(Self { x, y })
            }
            Tag::CompressedEvenY => Self::decompress(params, &x, false),
            Tag::CompressedOddY => Self::decompress(params, &x, true),
        }
    }

    /// Encode this point using SEC1 `Elliptic-Curve-Point-to-Octet-String`.
    ///
    /// Coordinates are left-padded to the curve's field size. Fails with
    /// [`Error::CoordinateOverflow`] if either coordinate is wider.
    pub fn to_sec1_bytes(&self, params: &CurveParameters, compress: bool) -> Result<Vec<u8>> {
        let tag = if compress {
            Tag::compress_y(self.is_y_odd())
        } else {
            Tag::Uncompressed
        };

        let mut bytes = Vec::with_capacity(tag.message_len(params.field_bytes_size()));
        bytes.push(tag.into());
        bytes.extend_from_slice(&params.encode_field_element(&self.x)?);

        if !compress {
            bytes.extend_from_slice(&params.encode_field_element(&self.y)?);
        }

        Ok(bytes)
    }

    /// Recover the point with the given x-coordinate whose y-coordinate has
    /// the requested parity.
    ///
    /// Fails with [`Error::MalformedPoint`] if `x` is not a field element or
    /// `x³ + ax + b` has no square root, i.e. no point on the curve has
    /// this x-coordinate.
    pub fn decompress(params: &CurveParameters, x: &BigUint, y_is_odd: bool) -> Result<Self> {
        if x >= params.p() {
            return Err(Error::MalformedPoint);
        }

        let alpha = params.equation_rhs(x);
        let beta = params.sqrt(&alpha)?.ok_or(Error::MalformedPoint)?;

        let y = if beta.bit(0) == y_is_odd {
            beta
        } else {
            params.negate(&beta)
        };

        if y.bit(0) != y_is_odd {
            return Err(Error::MalformedPoint);
        }

        Ok(Self { x: x.clone(), y })
    }

    /// Decode a raw uncompressed point serialized as `X ‖ Y` without the
    /// leading `0x04` tag.
    pub fn from_untagged_bytes(params: &CurveParameters, bytes: &[u8]) -> Result<Self> {
        let size = params.field_bytes_size();

        if bytes.len() != 2 * size {
            return Err(Error::MalformedPoint);
        }

        Ok(Self {
            x: BigUint::from_bytes_be(&bytes[..size]),
            y: BigUint::from_bytes_be(&bytes[size..]),
        })
    }

    /// Encode as raw `X ‖ Y` without a tag byte.
    pub fn to_untagged_bytes(&self, params: &CurveParameters) -> Result<Vec<u8>> {
        let mut bytes = params.encode_field_element(&self.x)?;
        bytes.extend_from_slice(&params.encode_field_element(&self.y)?);
        Ok(bytes)
    }
}
