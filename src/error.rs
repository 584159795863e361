use crate::MIN_RING_SIZE;

/// Everything that can go wrong while signing or verifying.
///
/// A signature that simply does not check out is not an error: `verify` reports it as
/// `Ok(false)`. These variants are reserved for malformed calls and for the hash-to-point
/// search running out of attempts.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No valid group element was found within the try-and-increment ceiling
    #[error("hash-to-point found no valid group element in {attempts} attempts")]
    HashToPointExhausted { attempts: u32 },

    /// Returned when the ring has fewer members than the scheme accepts
    #[error("ring has {size} members but at least {min} are required", min = MIN_RING_SIZE)]
    RingTooSmall { size: usize },

    /// Returned when the signer's index does not point into the ring
    #[error("signer index {index} is out of range for a ring of {size} members")]
    SignerIndexOutOfRange { index: usize, size: usize },

    /// Returned when a signature does not carry exactly one response per ring member
    #[error("signature carries {responses} responses for a ring of {size} members")]
    ResponseCountMismatch { responses: usize, size: usize },

    /// Returned when a ring member is the identity point
    #[error("ring member {index} is the identity point")]
    IdentityRingMember { index: usize },

    /// Returned when the private key is not the discrete log of the signer's ring member
    #[error("private key does not correspond to ring member {index}")]
    KeyMismatch { index: usize },
}

impl Error {
    /// `true` for structural precondition violations, which are detected before any
    /// curve arithmetic takes place.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, Error::HashToPointExhausted { .. })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn exhausted_search_is_not_invalid_input() {
        assert!(!Error::HashToPointExhausted { attempts: 256 }.is_invalid_input());
        assert!(Error::RingTooSmall { size: 1 }.is_invalid_input());
        assert!(Error::SignerIndexOutOfRange { index: 3, size: 3 }.is_invalid_input());
        assert!(Error::ResponseCountMismatch { responses: 2, size: 3 }.is_invalid_input());
        assert!(Error::IdentityRingMember { index: 0 }.is_invalid_input());
        assert!(Error::KeyMismatch { index: 1 }.is_invalid_input());
    }

    #[test]
    fn messages_name_the_offending_values() {
        use alloc::string::ToString;

        assert_eq!(MIN_RING_SIZE, 2);

        assert_eq!(
            Error::RingTooSmall { size: 1 }.to_string(),
            "ring has 1 members but at least 2 are required"
        );
        assert_eq!(
            Error::SignerIndexOutOfRange { index: 5, size: 3 }.to_string(),
            "signer index 5 is out of range for a ring of 3 members"
        );
    }
}
