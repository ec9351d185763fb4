//! Positional decoding of 65-byte `r || s || v` signatures.

use alloy_primitives::{hex, B256};
use serde::{Deserialize, Serialize};

use crate::error::VerifyError;

/// Length of a raw `r || s || v` signature.
pub const SIGNATURE_LENGTH: usize = 65;

/// Offset added to a bare recovery bit to reach the legacy 27/28 encoding.
const LEGACY_V_OFFSET: u8 = 27;

/// The three components of a secp256k1 recoverable signature.
///
/// `v` is always stored normalized: encoders that emit the bare recovery bit
/// (0/1) are shifted into the 27/28 range by [`split`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureComponents {
    pub r: B256,
    pub s: B256,
    pub v: u8,
}

impl SignatureComponents {
    /// Parse a hex-encoded signature, with or without a `0x` prefix.
    pub fn from_hex(input: &str) -> Result<Self, VerifyError> {
        let trimmed = input.trim();
        let stripped = trimmed.strip_prefix("0x").unwrap_or(trimmed);
        let bytes = hex::decode(stripped).map_err(|e| VerifyError::InvalidHex(e.to_string()))?;
        split(&bytes)
    }

    /// y-parity selected by `v`, or `None` when `v` is neither 27 nor 28.
    pub fn recovery_parity(&self) -> Option<bool> {
        match self.v {
            27 => Some(false),
            28 => Some(true),
            _ => None,
        }
    }

    /// Re-encode as `r || s || v` with the normalized `v`.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LENGTH] {
        let mut out = [0u8; SIGNATURE_LENGTH];
        out[..32].copy_from_slice(self.r.as_slice());
        out[32..64].copy_from_slice(self.s.as_slice());
        out[64] = self.v;
        out
    }
}

/// Split a raw signature into `(r, s, v)`.
///
/// Bytes `[0, 32)` are `r`, `[32, 64)` are `s` and byte 64 is `v`. A `v` below
/// 27 gets 27 added; any other value is passed through untouched and left for
/// recovery to reject.
pub fn split(sig: &[u8]) -> Result<SignatureComponents, VerifyError> {
    if sig.len() != SIGNATURE_LENGTH {
        return Err(VerifyError::InvalidSignatureLength { len: sig.len() });
    }

    let r = B256::from_slice(&sig[..32]);
    let s = B256::from_slice(&sig[32..64]);
    let mut v = sig[64];
    if v < LEGACY_V_OFFSET {
        v += LEGACY_V_OFFSET;
    }

    Ok(SignatureComponents { r, s, v })
}
