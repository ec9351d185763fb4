//! Verification of secp256k1 message signatures against claimed signers,
//! plus an audited allow-list of trusted signers.

pub mod audit;
pub mod error;
pub mod hashing;
pub mod recovery;
pub mod registry;
pub mod signature;
pub mod trusted;
pub mod verification;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

pub use audit::{AuditRecord, AuditSink, MemoryAuditLog, RegistryEvent};
pub use error::{RegistryError, VerifyError};
pub use hashing::{eth_signed_hash, hash, prehash_for, MessageMode, ETH_SIGNED_DIGEST_PREFIX};
pub use recovery::{recover, recover_signature};
pub use registry::MembershipRegistry;
pub use signature::{split, SignatureComponents, SIGNATURE_LENGTH};
pub use trusted::TrustedVerifier;
pub use verification::{verify, Verifier};

/// Outcome of verifying one signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationReport {
    /// Account the caller claimed produced the signature.
    pub signer: Address,
    /// Account actually recovered; zero when recovery failed.
    pub recovered: Address,
    pub signature_valid: bool,
    /// Registry membership of `signer`, if a registry was consulted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trusted: Option<bool>,
    pub accepted: bool,
}

impl VerificationReport {
    /// Report for a check without a registry: accepted iff the signature is valid.
    pub fn without_registry(signer: Address, recovered: Address) -> Self {
        let signature_valid = !recovered.is_zero() && recovered == signer;
        Self {
            signer,
            recovered,
            signature_valid,
            trusted: None,
            accepted: signature_valid,
        }
    }
}
