use alloy_primitives::{Address, Signature, B256, U256};
use tracing::debug;

use crate::error::VerifyError;
use crate::signature::{split, SignatureComponents};

/// secp256k1 group order n, big-endian.
const SECP256K1_ORDER: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE,
    0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36, 0x41, 0x41,
];

/// Scalars must lie in [1, n-1]. Big-endian arrays compare in numeric order.
fn is_valid_scalar(value: &B256) -> bool {
    !value.is_zero() && value.0 < SECP256K1_ORDER
}

/// Recover the account that produced `components` over `domain_digest`.
///
/// Returns [`Address::ZERO`] instead of an error when the components cannot
/// describe a signature: zero or out-of-range scalars, a `v` other than 27/28,
/// or no curve point for `r`.
pub fn recover(domain_digest: B256, components: &SignatureComponents) -> Address {
    if !is_valid_scalar(&components.r) || !is_valid_scalar(&components.s) {
        debug!("signature scalar out of range");
        return Address::ZERO;
    }
    let Some(parity) = components.recovery_parity() else {
        debug!(v = components.v, "unsupported recovery id");
        return Address::ZERO;
    };

    let signature = Signature::new(
        U256::from_be_bytes(components.r.0),
        U256::from_be_bytes(components.s.0),
        parity,
    );
    match signature.recover_address_from_prehash(&domain_digest) {
        Ok(address) => address,
        Err(e) => {
            debug!("recovery failed: {e}");
            Address::ZERO
        }
    }
}

/// Split a raw 65-byte signature and recover its signer.
pub fn recover_signature(domain_digest: B256, sig: &[u8]) -> Result<Address, VerifyError> {
    let components = split(sig)?;
    Ok(recover(domain_digest, &components))
}
