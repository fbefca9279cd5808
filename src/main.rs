use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use signed_url::{CodecConfig, ParameterSet, Timeout, UrlSigner};

#[derive(Parser)]
#[command(name = "signed-url")]
#[command(about = "Create and verify HMAC-signed URLs")]
struct Cli {
    /// Shared secret (falls back to SIGNED_URL_SECRET)
    #[arg(short, long, global = true)]
    secret: Option<String>,

    /// YAML file with parameter names (falls back to CONFIG_FILE)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign a URL and print the result
    Sign {
        /// URL to sign; its query parameters are kept
        url: String,

        /// Extra parameter as key=value, or a bare key
        #[arg(short, long = "param", value_name = "KEY[=VALUE]")]
        params: Vec<String>,

        /// Expiry: Unix timestamp or expression such as "+1 hour"
        #[arg(short, long, value_name = "TIMEOUT", allow_hyphen_values = true)]
        expires: Option<String>,
    },
    /// Verify a signed URL (exit 0 valid, 1 invalid, 2 malformed or expired)
    Verify {
        /// Signed URL to check
        url: String,
    },
    /// Print a new random secret, hex-encoded
    Keygen,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "signed_url=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Some(Commands::Sign {
            ref url,
            ref params,
            ref expires,
        }) => {
            let signer = build_signer(&cli)?;
            run_sign_command(&signer, url, params, expires.as_deref())?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Verify { ref url }) => {
            let signer = build_signer(&cli)?;
            Ok(ExitCode::from(run_verify_command(&signer, url)))
        }
        Some(Commands::Keygen) => {
            let signer = UrlSigner::with_random_secret();
            println!("{}", hex::encode(signer.secret()));
            Ok(ExitCode::SUCCESS)
        }
        None => {
            run_status_command(&cli);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn build_signer(cli: &Cli) -> anyhow::Result<UrlSigner> {
    let secret = cli
        .secret
        .clone()
        .or_else(|| std::env::var("SIGNED_URL_SECRET").ok())
        .context("No secret given: pass --secret or set SIGNED_URL_SECRET")?;

    Ok(UrlSigner::with_config(secret, load_config(cli)))
}

fn load_config(cli: &Cli) -> CodecConfig {
    cli.config
        .clone()
        .or_else(|| std::env::var("CONFIG_FILE").ok().map(PathBuf::from))
        .map(|path| CodecConfig::load_from_file(&path))
        .unwrap_or_default()
}

fn run_sign_command(
    signer: &UrlSigner,
    url: &str,
    params: &[String],
    expires: Option<&str>,
) -> anyhow::Result<()> {
    let data = parse_param_args(params);
    let timeout = expires.map(Timeout::from_arg);

    let signed = signer
        .create(url, data, timeout)
        .with_context(|| format!("Failed to sign {url}"))?;
    println!("{signed}");
    Ok(())
}

/// Returns the process exit status
fn run_verify_command(signer: &UrlSigner, url: &str) -> u8 {
    match signer.verify(url) {
        Ok(true) => {
            println!("valid");
            0
        }
        Ok(false) => {
            println!("invalid");
            1
        }
        Err(e) => {
            eprintln!("{}: {e}", e.kind());
            2
        }
    }
}

fn run_status_command(cli: &Cli) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let secret_set = cli.secret.is_some() || std::env::var("SIGNED_URL_SECRET").is_ok();
    let config_file = std::env::var("CONFIG_FILE").ok();
    let config = load_config(cli);

    println!("signed-url v{VERSION}");
    println!("HMAC-SHA256 signed URLs with optional expiry\n");

    println!("Environment Variables:");
    println!(
        "  SIGNED_URL_SECRET = {}",
        if secret_set { "(set)" } else { "(not set)" }
    );
    println!(
        "  CONFIG_FILE       = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    println!("\nParameters:");
    println!("  signature = {}", config.signature_param);
    println!("  expires   = {}", config.expires_param);

    println!("\nRun 'signed-url --help' for commands.");
}

/// Turn `key=value` / `key` arguments into a parameter set
fn parse_param_args(args: &[String]) -> ParameterSet {
    let mut params = ParameterSet::new();
    for arg in args {
        match arg.split_once('=') {
            Some((name, value)) => params.insert(name, value),
            None => params.insert_bare(arg.as_str()),
        }
    }
    params
}
