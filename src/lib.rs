//! # LSAG
//! A library that implements Linkable Spontaneous Anonymous Group (LSAG)
//! [Ring Signatures](https://en.wikipedia.org/wiki/Ring_signature).
//!
//! A signer holding one private key out of a published, ordered ring of public keys produces a
//! signature that verifies against the whole ring without revealing which member signed. Each
//! signature also carries a key image (linkage tag) that is identical for every signature the
//! same key makes over the same ring, so double signing can be detected without deanonymizing
//! anyone.
//!
//! This library works with any 512-bit (64 byte output) hashing function, picked as a type
//! parameter. It uses the [Ristretto elliptic curve](https://doc.dalek.rs/curve25519_dalek/ristretto/)
//! as its prime-order group, and hashes into it by try-and-increment (see [`hash`]).
//!
//! ```
//! use curve25519_dalek::ristretto::RistrettoPoint;
//! use curve25519_dalek::scalar::Scalar;
//! use lsag::traits::{KeyImageGen, Link, Sign, Verify};
//! use lsag::LSAG;
//! use rand_core::OsRng;
//! use sha2::Sha512;
//!
//! let ks: Vec<Scalar> = (0..3).map(|_| Scalar::random(&mut OsRng)).collect();
//! let ring: Vec<RistrettoPoint> = ks.iter().map(RistrettoPoint::mul_base).collect();
//!
//! let signature = LSAG::sign::<Sha512, OsRng>(ks[1], 1, b"test", &ring)?;
//! assert!(signature.verify::<Sha512>(b"test", &ring)?);
//! assert!(!signature.verify::<Sha512>(b"tampered", &ring)?);
//!
//! let another = LSAG::sign::<Sha512, OsRng>(ks[1], 1, b"another message", &ring)?;
//! assert!(signature.link(&another));
//! assert_eq!(
//!     *signature.key_image(),
//!     LSAG::generate_key_image::<Sha512>(ks[1], &ring)?
//! );
//! # Ok::<(), lsag::Error>(())
//! ```
//!
//! This library is `#![no_std]` by default so it is possible to compile this library for embedded devices and WebAssembly.

#![no_std]
#[macro_use]
extern crate alloc;
extern crate curve25519_dalek;
extern crate digest;
extern crate rand_core;

pub mod error;
pub mod hash;
pub mod lsag;
pub mod traits;

pub use crate::error::Error;
pub use crate::lsag::LSAG;

/// Smallest ring accepted by both signing and verification.
pub const MIN_RING_SIZE: usize = 2;
