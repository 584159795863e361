//! Hashing into the group and into the scalar field.
//!
//! Both signer and verifier derive every hash input from the canonical 32-byte Ristretto
//! encoding, so [`encode_ring`] must stay byte-for-byte stable.

use crate::error::Error;
use alloc::vec::Vec;
use curve25519_dalek::ristretto::{CompressedRistretto, RistrettoPoint};
use curve25519_dalek::scalar::Scalar;
use curve25519_dalek::traits::IsIdentity;
use digest::generic_array::typenum::U64;
use digest::Digest;
use log::{debug, trace};

/// Ceiling on try-and-increment attempts used by [`hash_to_point`]. Roughly a quarter of
/// all candidates decode, so running out is a practical impossibility.
pub const MAX_HASH_TO_POINT_ATTEMPTS: u32 = 256;

/// Concatenates the compressed encoding of every ring member, in ring order.
pub fn encode_ring(ring: &[RistrettoPoint]) -> Vec<u8> {
    let mut encoded = Vec::with_capacity(ring.len() * 32);
    for k_point in ring {
        encoded.extend_from_slice(k_point.compress().as_bytes());
    }
    encoded
}

/// Deterministically maps `bytes` to a group element by try-and-increment, giving up after
/// [`MAX_HASH_TO_POINT_ATTEMPTS`] candidates.
pub fn hash_to_point<Hash: Digest<OutputSize = U64> + Clone + Default>(
    bytes: &[u8],
) -> Result<RistrettoPoint, Error> {
    hash_to_point_bounded::<Hash>(bytes, MAX_HASH_TO_POINT_ATTEMPTS)
}

/// Try-and-increment with an explicit ceiling.
///
/// Attempt `i` hashes `bytes || i` (counter as little-endian `u32`) and reads the first 32
/// digest bytes as a candidate Ristretto encoding. Bit 255 is cleared so the candidate is
/// below 2^255, and bit 0 is cleared so it selects the non-negative square root, which is
/// the one Ristretto treats as canonical. A candidate that does not decompress, or that
/// decodes to the identity, is rejected and the counter advances.
pub fn hash_to_point_bounded<Hash: Digest<OutputSize = U64> + Clone + Default>(
    bytes: &[u8],
    max_attempts: u32,
) -> Result<RistrettoPoint, Error> {
    let prefix = Hash::new().chain_update(bytes);

    for counter in 0..max_attempts {
        let digest = prefix.clone().chain_update(counter.to_le_bytes()).finalize();

        let mut candidate = [0u8; 32];
        candidate.copy_from_slice(&digest[..32]);
        candidate[31] &= 0x7f;
        candidate[0] &= 0xfe;

        match CompressedRistretto(candidate).decompress() {
            Some(point) if !point.is_identity() => {
                trace!("hash-to-point accepted candidate {}", counter);
                return Ok(point);
            }
            _ => trace!("hash-to-point rejected candidate {}", counter),
        }
    }

    debug!("hash-to-point exhausted {} attempts", max_attempts);
    Err(Error::HashToPointExhausted {
        attempts: max_attempts,
    })
}

/// Maps `bytes` to a scalar by reducing the 64-byte digest modulo the group order.
pub fn hash_to_scalar<Hash: Digest<OutputSize = U64> + Clone + Default>(bytes: &[u8]) -> Scalar {
    Scalar::from_hash(Hash::new().chain_update(bytes))
}
