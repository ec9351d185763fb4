use alloy_primitives::Address;
use thiserror::Error;

/// Malformed input handed to the verification path.
///
/// A signature that parses but recovers to the wrong account is not an error;
/// it is reported as `false` by the verifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    /// Raw signatures are exactly 65 bytes (r || s || v).
    #[error("invalid signature length: expected 65 bytes, got {len}")]
    InvalidSignatureLength { len: usize },
    /// Prehash mode requires the message to be the 32-byte digest itself.
    #[error("invalid prehash length: expected 32 bytes, got {len}")]
    InvalidPrehashLength { len: usize },
    /// Signature text that is not valid hex.
    #[error("invalid signature hex: {0}")]
    InvalidHex(String),
}

impl VerifyError {
    /// Stable machine-readable reason code.
    pub fn code(&self) -> &'static str {
        match self {
            VerifyError::InvalidSignatureLength { .. } => "INVALID_SIGNATURE_LENGTH",
            VerifyError::InvalidPrehashLength { .. } => "INVALID_PREHASH_LENGTH",
            VerifyError::InvalidHex(_) => "INVALID_SIGNATURE_HEX",
        }
    }
}

/// Errors raised by the membership registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("account {0:#x} is already a member")]
    AlreadyMember(Address),
}

impl RegistryError {
    /// Stable machine-readable reason code.
    pub fn code(&self) -> &'static str {
        match self {
            RegistryError::AlreadyMember(_) => "ALREADY_MEMBER",
        }
    }
}
