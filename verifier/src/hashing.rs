use alloy_primitives::{keccak256, Keccak256, B256};

use crate::error::VerifyError;

/// EIP-191 tag for a 32-byte payload: "\x19Ethereum Signed Message:\n" followed by "32".
pub const ETH_SIGNED_DIGEST_PREFIX: &[u8; 28] = b"\x19Ethereum Signed Message:\n32";

const PERSONAL_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n";

/// keccak256 of the message bytes, with no prefix or length framing.
#[inline]
pub fn hash(message: &[u8]) -> B256 {
    keccak256(message)
}

/// Domain-separated digest: keccak256(ETH_SIGNED_DIGEST_PREFIX || digest).
pub fn eth_signed_hash(digest: B256) -> B256 {
    let mut hasher = Keccak256::new();
    hasher.update(ETH_SIGNED_DIGEST_PREFIX);
    hasher.update(digest);
    hasher.finalize()
}

/// How the bytes handed to the verifier relate to what was actually signed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MessageMode {
    /// Signer signed the 32-byte keccak digest of the message, wallet style:
    /// eth_signed_hash(hash(message)).
    #[default]
    Digest,
    /// EIP-191 personal_sign over the raw message:
    /// keccak256("\x19Ethereum Signed Message:\n{len}" || message).
    Personal,
    /// `message` already is the 32-byte domain digest; use it as-is.
    Prehash,
}

/// Build the 32-byte digest that signature recovery runs against.
pub fn prehash_for(mode: MessageMode, message: &[u8]) -> Result<B256, VerifyError> {
    match mode {
        MessageMode::Digest => Ok(eth_signed_hash(hash(message))),
        MessageMode::Personal => {
            let len = message.len().to_string();
            let mut hasher = Keccak256::new();
            hasher.update(PERSONAL_MESSAGE_PREFIX);
            hasher.update(len.as_bytes());
            hasher.update(message);
            Ok(hasher.finalize())
        }
        MessageMode::Prehash => {
            if message.len() != 32 {
                return Err(VerifyError::InvalidPrehashLength { len: message.len() });
            }
            Ok(B256::from_slice(message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{b256, eip191_hash_message};

    #[test]
    fn empty_message_hashes_to_known_constant() {
        assert_eq!(
            hash(b""),
            b256!("c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470")
        );
    }

    #[test]
    fn hash_is_deterministic_and_distinguishes_inputs() {
        assert_eq!(hash(b"a"), hash(b"a"));
        assert_ne!(hash(b"a"), hash(b"b"));
    }

    #[test]
    fn prefix_is_28_bytes() {
        assert_eq!(ETH_SIGNED_DIGEST_PREFIX.len(), 28);
        assert!(ETH_SIGNED_DIGEST_PREFIX.ends_with(b":\n32"));
    }

    #[test]
    fn eth_signed_hash_matches_eip191_over_digest() {
        let digest = hash(b"hello");
        assert_eq!(eth_signed_hash(digest), eip191_hash_message(digest));
    }

    #[test]
    fn eth_signed_hash_differs_from_plain_rehash() {
        let digest = hash(b"hello");
        assert_ne!(eth_signed_hash(digest), keccak256(digest));
        assert_ne!(eth_signed_hash(digest), digest);
    }

    #[test]
    fn personal_mode_matches_eip191_over_message() {
        let message = b"hello world, this is longer than thirty-two bytes";
        assert_eq!(
            prehash_for(MessageMode::Personal, message).unwrap(),
            eip191_hash_message(message)
        );
    }

    #[test]
    fn digest_mode_is_domain_separated_digest() {
        assert_eq!(
            prehash_for(MessageMode::Digest, b"hello").unwrap(),
            eth_signed_hash(hash(b"hello"))
        );
    }

    #[test]
    fn prehash_mode_requires_32_bytes() {
        let digest = hash(b"x");
        assert_eq!(prehash_for(MessageMode::Prehash, digest.as_slice()).unwrap(), digest);

        let err = prehash_for(MessageMode::Prehash, &[0u8; 31]).unwrap_err();
        assert_eq!(err, VerifyError::InvalidPrehashLength { len: 31 });
    }
}
