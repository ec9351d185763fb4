use alloy_primitives::Address;
use tracing::debug;

use crate::error::VerifyError;
use crate::hashing::{eth_signed_hash, hash, prehash_for, MessageMode};
use crate::recovery::{recover, recover_signature};
use crate::signature::split;

/// Check that `claimed_signer` produced `sig` over `message`.
///
/// The message is hashed, domain separated with the 32-byte EIP-191 tag and
/// recovered against. Only a malformed signature length is an error; any other
/// problem with the signature is reported as `Ok(false)`.
pub fn verify(claimed_signer: Address, message: &[u8], sig: &[u8]) -> Result<bool, VerifyError> {
    let recovered = recover_signature(eth_signed_hash(hash(message)), sig)?;
    Ok(!recovered.is_zero() && recovered == claimed_signer)
}

/// Signature verifier bound to a [`MessageMode`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Verifier {
    mode: MessageMode,
}

impl Verifier {
    pub fn new(mode: MessageMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> MessageMode {
        self.mode
    }

    /// Recover the signer of `sig` over `message` under this verifier's mode.
    ///
    /// Yields [`Address::ZERO`] when the signature cannot be recovered.
    pub fn recover_signer(&self, message: &[u8], sig: &[u8]) -> Result<Address, VerifyError> {
        // Length is checked before hashing so a bad signature fails the same way in every mode.
        let components = split(sig)?;
        let prehash = prehash_for(self.mode, message)?;
        Ok(recover(prehash, &components))
    }

    pub fn verify(
        &self,
        claimed_signer: Address,
        message: &[u8],
        sig: &[u8],
    ) -> Result<bool, VerifyError> {
        let recovered = self.recover_signer(message, sig)?;
        if recovered.is_zero() {
            return Ok(false);
        }
        if recovered != claimed_signer {
            debug!(
                "recovered address {:#x} does not match claimed signer {:#x}",
                recovered, claimed_signer
            );
            return Ok(false);
        }
        Ok(true)
    }
}
