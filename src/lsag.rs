use crate::error::Error;
use crate::hash::{encode_ring, hash_to_point};
use crate::traits::{KeyImageGen, Link, Sign, Verify};
use crate::MIN_RING_SIZE;
use alloc::vec::Vec;
use curve25519_dalek::constants;
use curve25519_dalek::ristretto::RistrettoPoint;
use curve25519_dalek::scalar::Scalar;
use curve25519_dalek::traits::{IsIdentity, MultiscalarMul, VartimeMultiscalarMul};
use digest::generic_array::typenum::U64;
use digest::Digest;
use log::debug;
use rand_core::{CryptoRng, RngCore};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Linkable Spontaneous Anonymous Group (LSAG) signatures
/// > A signer proves membership in a ring of public keys without revealing which member
/// > signed. Every signature carries a key image (the linkage tag) `k * H1(ring)`, so two
/// > signatures made with the same private key over the same ring can be recognised.
///
/// The ring itself is not part of the signature; signer and verifier must supply the same
/// ordered ring. A signature is immutable once produced.
///
/// Please read tests at the bottom of the source code for this module for examples on how to use
/// it
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LSAG {
    challenge: Scalar,
    responses: Vec<Scalar>,
    key_image: RistrettoPoint,
}

impl LSAG {
    /// Reassembles a signature from its parts, e.g. after it was received over the wire.
    /// Nothing is checked here; that is what `verify` is for.
    pub fn from_parts(challenge: Scalar, responses: Vec<Scalar>, key_image: RistrettoPoint) -> Self {
        LSAG {
            challenge,
            responses,
            key_image,
        }
    }

    /// The challenge at ring position 0
    pub fn challenge(&self) -> &Scalar {
        &self.challenge
    }

    /// One response per ring member, in ring order
    pub fn responses(&self) -> &[Scalar] {
        &self.responses
    }

    /// The linkage tag
    pub fn key_image(&self) -> &RistrettoPoint {
        &self.key_image
    }
}

fn check_ring(ring: &[RistrettoPoint]) -> Result<(), Error> {
    if ring.len() < MIN_RING_SIZE {
        debug!("rejecting ring of {} members", ring.len());
        return Err(Error::RingTooSmall { size: ring.len() });
    }
    if let Some(index) = ring.iter().position(|k_point| k_point.is_identity()) {
        debug!("rejecting ring with identity member at {}", index);
        return Err(Error::IdentityRingMember { index });
    }
    Ok(())
}

/// `H2(encode_ring(ring) || message || l || r)`, where `transcript` already holds the ring
/// and the message.
fn challenge<Hash: Digest<OutputSize = U64> + Clone>(
    transcript: &Hash,
    l: &RistrettoPoint,
    r: &RistrettoPoint,
) -> Scalar {
    let mut h: Hash = transcript.clone();
    h.update(l.compress().as_bytes());
    h.update(r.compress().as_bytes());
    Scalar::from_hash(h)
}

impl KeyImageGen<Scalar, [RistrettoPoint], RistrettoPoint> for LSAG {
    /// The linkage tag `k * H1(ring)`. It depends on the ring and the private key only, never
    /// on the message.
    fn generate_key_image<Hash: Digest<OutputSize = U64> + Clone + Default>(
        k: Scalar,
        ring: &[RistrettoPoint],
    ) -> Result<RistrettoPoint, Error> {
        check_ring(ring)?;
        let ring_point: RistrettoPoint = hash_to_point::<Hash>(&encode_ring(ring))?;

        Ok(k * ring_point)
    }
}

impl Sign<Scalar, [RistrettoPoint]> for LSAG {
    /// To sign you need `k` your private key, `secret_index` the position of your public key
    /// in `ring`, and the `message`. The ring must already contain your public key.
    fn sign<
        Hash: Digest<OutputSize = U64> + Clone + Default,
        CSPRNG: CryptoRng + RngCore + Default,
    >(
        k: Scalar,
        secret_index: usize,
        message: &[u8],
        ring: &[RistrettoPoint],
    ) -> Result<LSAG, Error> {
        let n = ring.len();

        check_ring(ring)?;
        if secret_index >= n {
            debug!("rejecting signer index {} for ring of {}", secret_index, n);
            return Err(Error::SignerIndexOutOfRange {
                index: secret_index,
                size: n,
            });
        }

        // Prover's public key
        let k_point: RistrettoPoint = RistrettoPoint::mul_base(&k);
        if k_point != ring[secret_index] {
            debug!("private key does not match ring member {}", secret_index);
            return Err(Error::KeyMismatch {
                index: secret_index,
            });
        }

        let encoded_ring = encode_ring(ring);
        let ring_point: RistrettoPoint = hash_to_point::<Hash>(&encoded_ring)?;
        let key_image: RistrettoPoint = k * ring_point;

        let mut csprng = CSPRNG::default();

        let a: Scalar = Scalar::random(&mut csprng);

        let mut rs: Vec<Scalar> = (0..n).map(|_| Scalar::random(&mut csprng)).collect();

        let mut cs: Vec<Scalar> = vec![Scalar::ZERO; n];

        // Ring and message are shared by all challenges H2(L, m, ....)
        let transcript: Hash = Hash::new().chain_update(&encoded_ring).chain_update(message);

        cs[(secret_index + 1) % n] = challenge(
            &transcript,
            &RistrettoPoint::mul_base(&a),
            &(a * ring_point),
        );

        for i in ((secret_index + 1)..(secret_index + n)).map(|i| i % n) {
            let l = RistrettoPoint::multiscalar_mul(
                &[rs[i], cs[i]],
                &[constants::RISTRETTO_BASEPOINT_POINT, ring[i]],
            );
            let r = RistrettoPoint::multiscalar_mul(&[rs[i], cs[i]], &[ring_point, key_image]);
            cs[(i + 1) % n] = challenge(&transcript, &l, &r);
        }

        // Close the ring
        rs[secret_index] = a - (cs[secret_index] * k);

        Ok(LSAG {
            challenge: cs[0],
            responses: rs,
            key_image,
        })
    }
}

impl Verify<[RistrettoPoint]> for LSAG {
    /// To verify a signature you need the `message` and the same ordered `ring` it was
    /// signed over
    fn verify<Hash: Digest<OutputSize = U64> + Clone + Default>(
        &self,
        message: &[u8],
        ring: &[RistrettoPoint],
    ) -> Result<bool, Error> {
        let n = ring.len();

        check_ring(ring)?;
        if self.responses.len() != n {
            debug!(
                "rejecting {} responses for ring of {}",
                self.responses.len(),
                n
            );
            return Err(Error::ResponseCountMismatch {
                responses: self.responses.len(),
                size: n,
            });
        }

        if self.key_image.is_identity() {
            debug!("signature carries the identity as key image");
            return Ok(false);
        }

        let encoded_ring = encode_ring(ring);
        let ring_point: RistrettoPoint = hash_to_point::<Hash>(&encoded_ring)?;
        let transcript: Hash = Hash::new().chain_update(&encoded_ring).chain_update(message);

        let mut reconstructed_c: Scalar = self.challenge;
        for (response, k_point) in self.responses.iter().zip(ring) {
            let l = RistrettoPoint::vartime_double_scalar_mul_basepoint(
                &reconstructed_c,
                k_point,
                response,
            );
            let r = RistrettoPoint::vartime_multiscalar_mul(
                &[*response, reconstructed_c],
                &[ring_point, self.key_image],
            );
            reconstructed_c = challenge(&transcript, &l, &r);
        }

        let valid = self.challenge == reconstructed_c;
        if !valid {
            debug!("challenge chain did not close over {} ring members", n);
        }
        Ok(valid)
    }
}

impl Link for LSAG {
    /// This is for linking two signatures over the same ring and checking if they are signed
    /// by the same person
    fn link(&self, other: &LSAG) -> bool {
        self.key_image == other.key_image
    }
}
