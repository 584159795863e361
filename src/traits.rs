use crate::error::Error;
use digest::generic_array::typenum::U64;
use digest::Digest;
use rand_core::{CryptoRng, RngCore};

/// The random generator is built inside `sign` from `CSPRNG::default()`, so a caller can
/// never supply or replay the signing nonce.
pub trait Sign<PrivateKey, Ring: ?Sized>: Sized {
    fn sign<
        Hash: Digest<OutputSize = U64> + Clone + Default,
        CSPRNG: CryptoRng + RngCore + Default,
    >(
        k: PrivateKey,
        secret_index: usize,
        message: &[u8],
        ring: &Ring,
    ) -> Result<Self, Error>;
}

/// `Ok(false)` means the signature is cryptographically invalid; `Err` means the call itself
/// was malformed.
pub trait Verify<Ring: ?Sized> {
    fn verify<Hash: Digest<OutputSize = U64> + Clone + Default>(
        &self,
        message: &[u8],
        ring: &Ring,
    ) -> Result<bool, Error>;
}

pub trait Link {
    fn link(&self, other: &Self) -> bool;
}

pub trait KeyImageGen<PrivateKey, Ring: ?Sized, KeyImage> {
    fn generate_key_image<Hash: Digest<OutputSize = U64> + Clone + Default>(
        k: PrivateKey,
        ring: &Ring,
    ) -> Result<KeyImage, Error>;
}
