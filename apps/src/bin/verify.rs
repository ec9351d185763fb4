use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info};

use alloy_primitives::Address;
use anyhow::{bail, Context, Result};
use clap::{ArgGroup, Parser, ValueEnum};

use sigverify::{
    MembershipRegistry, MemoryAuditLog, MessageMode, SignatureComponents, TrustedVerifier,
    VerificationReport, Verifier,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    /// EIP-191 over the keccak256 digest of the message.
    Digest,
    /// EIP-191 personal_sign over the raw message.
    Personal,
    /// The message is the 32-byte digest that was signed.
    Prehash,
}

impl From<Mode> for MessageMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Digest => MessageMode::Digest,
            Mode::Personal => MessageMode::Personal,
            Mode::Prehash => MessageMode::Prehash,
        }
    }
}

/// Verify that a signer produced a signature over a message.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
#[clap(group(ArgGroup::new("input").required(true).args(&["message", "message_file"])))]
struct Args {
    /// Inline message text.
    #[clap(long)]
    message: Option<String>,

    /// Path to a file whose raw bytes are the message.
    #[clap(long, value_name = "FILE")]
    message_file: Option<PathBuf>,

    /// Address that claims to have produced the signature.
    #[clap(long, env = "SIGNER_ADDRESS")]
    signer: Address,

    /// 65-byte r || s || v signature, hex encoded.
    #[clap(long)]
    signature: String,

    /// How the message relates to the signed digest.
    #[clap(long, value_enum, default_value = "digest")]
    mode: Mode,

    /// Trusted signer addresses; when set, the signer must be one of them.
    #[clap(long, env = "TRUSTED_SIGNERS", value_delimiter = ',')]
    trusted: Vec<Address>,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .init();

    // Load environment variables if present
    match dotenvy::dotenv() {
        Ok(path) => debug!("Loaded environment variables from {:?}", path),
        Err(e) if e.not_found() => debug!("No .env file found"),
        Err(e) => bail!("failed to load .env file: {}", e),
    }

    let args = Args::parse();

    let message = match (&args.message, &args.message_file) {
        (Some(text), _) => text.clone().into_bytes(),
        (None, Some(path)) => {
            fs::read(path).with_context(|| format!("failed to read {}", path.display()))?
        }
        (None, None) => bail!("either --message or --message-file is required"),
    };
    let signature = SignatureComponents::from_hex(&args.signature)?.to_bytes();
    let verifier = Verifier::new(args.mode.into());

    let report = if args.trusted.is_empty() {
        let recovered = verifier.recover_signer(&message, &signature)?;
        VerificationReport::without_registry(args.signer, recovered)
    } else {
        let log = Arc::new(MemoryAuditLog::new());
        let registry = MembershipRegistry::with_members(log.clone(), args.trusted.iter().copied())?;
        let gate = TrustedVerifier::new(verifier, registry);
        let report = gate.verify_trusted(args.signer, &message, &signature)?;
        debug!("Audit log:\n{}", log.to_json_lines()?);
        report
    };

    info!(
        "Recovered {:#x} for claimed signer {:#x}",
        report.recovered, report.signer
    );
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(if report.accepted {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
