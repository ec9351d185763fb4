use alloy_primitives::Address;
use tracing::debug;

use crate::audit::AuditSink;
use crate::error::VerifyError;
use crate::registry::MembershipRegistry;
use crate::verification::Verifier;
use crate::VerificationReport;

/// Verifies signatures and gates them on membership of a trusted-signer registry.
pub struct TrustedVerifier<S> {
    verifier: Verifier,
    registry: MembershipRegistry<S>,
}

impl<S: AuditSink> TrustedVerifier<S> {
    pub fn new(verifier: Verifier, registry: MembershipRegistry<S>) -> Self {
        Self { verifier, registry }
    }

    pub fn registry(&self) -> &MembershipRegistry<S> {
        &self.registry
    }

    /// Verify `sig` for `signer` and look the claimed signer up in the registry.
    ///
    /// The lookup runs whether or not the signature is valid, so every call
    /// leaves an audit record.
    pub fn verify_trusted(
        &self,
        signer: Address,
        message: &[u8],
        sig: &[u8],
    ) -> Result<VerificationReport, VerifyError> {
        let recovered = self.verifier.recover_signer(message, sig)?;
        let mut report = VerificationReport::without_registry(signer, recovered);
        let trusted = self.registry.is_member(signer);
        debug!(
            signature_valid = report.signature_valid,
            trusted,
            "trusted verification for {:#x}",
            signer
        );

        report.trusted = Some(trusted);
        report.accepted = report.signature_valid && trusted;
        Ok(report)
    }
}
