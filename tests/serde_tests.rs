#![cfg(feature = "serde-derive")]

use lsag::lsag::LSAG;
use lsag::traits::{Link, Sign, Verify};

use curve25519_dalek::ristretto::RistrettoPoint;
use curve25519_dalek::scalar::Scalar;
use rand_core::OsRng;
use sha2::Sha512;

fn setup(n: usize) -> (Vec<Scalar>, Vec<RistrettoPoint>) {
    let mut csprng = OsRng;
    let ks: Vec<Scalar> = (0..n).map(|_| Scalar::random(&mut csprng)).collect();
    let ring: Vec<RistrettoPoint> = ks.iter().map(RistrettoPoint::mul_base).collect();
    (ks, ring)
}

#[test]
fn test_lsag_serde() {
    let (ks, ring) = setup(3);
    let secret_index = 2;
    let message: Vec<u8> = b"This is the message".iter().cloned().collect();

    let signature =
        LSAG::sign::<Sha512, OsRng>(ks[secret_index], secret_index, &message, &ring).unwrap();

    // Serialize to JSON
    let serialized = serde_json::to_string(&signature).unwrap();

    // Deserialize from JSON
    let deserialized: LSAG = serde_json::from_str(&serialized).unwrap();

    // Verify the deserialized signature works
    assert_eq!(deserialized, signature);
    assert!(deserialized.verify::<Sha512>(&message, &ring).unwrap());
    assert!(deserialized.link(&signature));
}

#[test]
fn test_lsag_serde_keeps_ring_detached() {
    let (ks, ring) = setup(2);
    let signature = LSAG::sign::<Sha512, OsRng>(ks[0], 0, b"test", &ring).unwrap();

    let value = serde_json::to_value(&signature).unwrap();
    let fields = value.as_object().unwrap();

    assert!(fields.contains_key("challenge"));
    assert!(fields.contains_key("responses"));
    assert!(fields.contains_key("key_image"));
    assert!(!fields.contains_key("ring"));
    assert_eq!(fields["responses"].as_array().unwrap().len(), 2);
}

#[test]
fn test_lsag_serde_rejects_non_canonical_scalar() {
    let (ks, ring) = setup(2);
    let signature = LSAG::sign::<Sha512, OsRng>(ks[1], 1, b"test", &ring).unwrap();

    let mut value = serde_json::to_value(&signature).unwrap();
    value["challenge"] = serde_json::to_value([0xffu8; 32]).unwrap();

    assert!(serde_json::from_value::<LSAG>(value).is_err());
}
