#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//! ## Usage
//!
//! Every operation takes the [`CurveParameters`] of the curve it works on.
//! Parameters for the registered curves come from [`NamedCurve::params`];
//! other curves can be described with [`CurveParameters::new`] as long as
//! their field prime is congruent to 3 mod 4.
//!
//! ```
//! use eccodec::{AffinePoint, NamedCurve};
//!
//! let params = NamedCurve::P256.params()?;
//! let compressed = hex_literal::hex!(
//!     "03 6B17D1F2E12C4247F8BCE6E563A440F277037D812DEB33A0F4A13945D898C296"
//! );
//!
//! let point = AffinePoint::from_sec1_bytes(&params, &compressed)?;
//! assert_eq!(point.to_sec1_bytes(&params, false)?.len(), 65);
//! # Ok::<(), eccodec::Error>(())
//! ```

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod curve;
pub mod field;
pub mod point;
pub mod public_key;
pub mod secret_key;

#[cfg(feature = "jwk")]
pub mod jwk;
#[cfg(feature = "pem")]
pub mod pem;

mod error;

pub use crate::{
    curve::{CurveParameters, NamedCurve},
    error::{Error, Result},
    point::{AffinePoint, Tag},
    public_key::{from_public_key_der, to_public_key_der},
    secret_key::{pkcs8_to_sec1, sec1_to_pkcs8, SecretKey, ALGORITHM_OID},
};
pub use der;
pub use num_bigint::{self, BigUint};
pub use pkcs8;
pub use sec1;

#[cfg(feature = "jwk")]
pub use crate::jwk::JwkEcKey;
