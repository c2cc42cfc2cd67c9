//! `send-files` binary entry point.
//!
//! Recognizes JSON document files, checks them, signs them with a freshly
//! issued certificate and queues them in a sled outbox.

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use clap::Parser;
use std::path::PathBuf;
use stubwork_file_sender::infrastructure::{
    EcdsaCryptographer, JsonDocumentRecognizer, KeyAlgorithm, SenderConfig, SledOutboxSender,
    SystemClock,
};
use stubwork_file_sender::{Certificate, File, FileSender};
use tracing_subscriber::EnvFilter;

/// send-files CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "send-files")]
#[command(about = "Validate, sign and queue document files")]
struct Args {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Signing key algorithm (k256 or p256), overrides the configuration.
    #[arg(short = 'k', long)]
    key_algorithm: Option<KeyAlgorithm>,

    /// Outbox directory, overrides the configuration.
    #[arg(short, long)]
    outbox: Option<PathBuf>,

    /// Certificate subject.
    #[arg(long, default_value = "CN=stubwork")]
    subject: String,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Files to send.
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .init();

    let mut config = match &args.config {
        Some(path) => SenderConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => SenderConfig::default(),
    };
    if let Some(algorithm) = args.key_algorithm {
        config.key_algorithm = algorithm;
    }
    if let Some(outbox) = args.outbox {
        config.outbox_path = outbox;
    }

    let files = args
        .files
        .iter()
        .map(|path| {
            let content = std::fs::read(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Ok(File::new(path.display().to_string(), content))
        })
        .collect::<Result<Vec<_>>>()?;

    let certificate = Certificate::generate(args.subject, config.key_algorithm);
    tracing::info!(
        "Signing as {} with {:?} public key {}",
        certificate.subject(),
        config.key_algorithm,
        BASE64_STANDARD.encode(certificate.key_pair().public_key_bytes())
    );
    tracing::info!("Outbox: {:?}", config.outbox_path);

    let outbox = SledOutboxSender::open(&config.outbox_path).context("Failed to open outbox")?;
    let file_sender = FileSender::from_parts(
        JsonDocumentRecognizer,
        EcdsaCryptographer,
        outbox,
        config.document_checker(SystemClock),
    );

    let report = file_sender.send_files(&files, &certificate);

    println!("sent: {}", report.sent_count());
    for skipped in report.skipped() {
        println!("skipped: {} ({})", skipped.file.name(), skipped.reason);
    }

    Ok(())
}
