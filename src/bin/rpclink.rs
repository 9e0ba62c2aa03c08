//! rpclink CLI binary.
//!
//! Converts aria2 RPC endpoint lists to AriaNg options and back.
//!
//! # Commands
//!
//! - `export` - Endpoint records (JSON array) to AriaNg options
//! - `import` - AriaNg options to endpoint records
//! - `validate` - Check an RPC URL
//! - `parse` - Split a URL into address and secret
//! - `combine` - Embed a secret into a URL

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rpclink::{
    codec::EndpointUrlCodec, Config, EndpointListProjector, EndpointRecord, FailurePolicy,
    FlatOptions, TimestampIdGenerator, VERSION,
};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "rpclink")]
#[command(version = VERSION)]
#[command(about = "Convert aria2 RPC endpoint lists to AriaNg options and back", long_about = None)]
struct Cli {
    /// Config file (default: <config dir>/rpclink/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export endpoint records to AriaNg options
    Export {
        /// JSON array of records (or - for stdin)
        input: Option<String>,

        /// Input file path
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Existing AriaNg options to merge into
        #[arg(short, long)]
        base: Option<PathBuf>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Failure policy (abort_batch, skip_invalid)
        #[arg(long)]
        policy: Option<String>,

        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Import AriaNg options back into endpoint records
    Import {
        /// AriaNg options JSON (or - for stdin)
        input: Option<String>,

        /// Input file path
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Validate an RPC URL
    Validate {
        /// URL to check
        url: String,
    },

    /// Split a URL into address and secret
    Parse {
        /// URL with optional embedded secret
        url: String,
    },

    /// Embed a secret into a URL
    Combine {
        /// Target URL
        url: String,

        /// Secret to embed
        #[arg(short, long, default_value = "")]
        secret: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let config = load_config(cli.config)?;

    match cli.command {
        Commands::Export {
            input,
            file,
            base,
            output,
            policy,
            pretty,
        } => cmd_export(&config, input, file, base, output, policy, pretty),

        Commands::Import {
            input,
            file,
            output,
            pretty,
        } => cmd_import(&config, input, file, output, pretty),

        Commands::Validate { url } => cmd_validate(&url),

        Commands::Parse { url } => cmd_parse(&url),

        Commands::Combine { url, secret } => cmd_combine(&url, &secret),
    }
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<Config> {
    let file_config = match path {
        Some(path) => Config::from_file(&path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => match Config::default_path() {
            Some(path) if path.exists() => {
                tracing::debug!("Loading config from {}", path.display());
                Config::from_file(&path)
                    .with_context(|| format!("Failed to load config {}", path.display()))?
            },
            _ => Config::default(),
        },
    };
    Ok(file_config.merge(Config::from_env()))
}

fn cmd_export(
    config: &Config,
    input: Option<String>,
    file: Option<PathBuf>,
    base: Option<PathBuf>,
    output: Option<PathBuf>,
    policy: Option<String>,
    pretty: bool,
) -> anyhow::Result<()> {
    let content = read_input(input, file)?;
    let records: Vec<EndpointRecord> = serde_json::from_str(&content)?;

    let base = match base {
        Some(path) => Some(serde_json::from_str::<FlatOptions>(&std::fs::read_to_string(
            path,
        )?)?),
        None => None,
    };

    let policy = match policy {
        Some(policy) => policy.parse::<FailurePolicy>()?,
        None => config.export.failure_policy,
    };

    let projector = EndpointListProjector::with_id_generator(TimestampIdGenerator::new(
        config.export.id_tag.clone(),
    ))
    .with_policy(policy);

    let options = projector.export(&records, base);
    if options.is_none() {
        tracing::info!("No endpoints to export");
    }

    write_output(output, &to_json(&options, pretty || config.export.pretty)?)
}

fn cmd_import(
    config: &Config,
    input: Option<String>,
    file: Option<PathBuf>,
    output: Option<PathBuf>,
    pretty: bool,
) -> anyhow::Result<()> {
    let content = read_input(input, file)?;
    let options: FlatOptions = serde_json::from_str(&content)?;

    let records = EndpointListProjector::new().restore(&options)?;
    tracing::debug!("Restored {} endpoint(s)", records.len());

    write_output(output, &to_json(&records, pretty || config.export.pretty)?)
}

fn cmd_validate(url: &str) -> anyhow::Result<()> {
    if rpclink::validate_endpoint_url(url) {
        println!("valid");
        Ok(())
    } else {
        println!("invalid");
        std::process::exit(1);
    }
}

fn cmd_parse(url: &str) -> anyhow::Result<()> {
    let parsed = EndpointUrlCodec::new().parse_endpoint_url(url)?;
    let value = serde_json::json!({
        "address": parsed.address,
        "secret": parsed.secret,
    });
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn cmd_combine(url: &str, secret: &str) -> anyhow::Result<()> {
    println!("{}", EndpointUrlCodec::new().combine_url(secret, url)?);
    Ok(())
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    Ok(if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    })
}

fn read_input(input: Option<String>, file: Option<PathBuf>) -> anyhow::Result<String> {
    if let Some(path) = file {
        Ok(std::fs::read_to_string(path)?)
    } else if let Some(s) = input {
        if s == "-" {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        } else {
            Ok(s)
        }
    } else {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    }
}

fn write_output(output: Option<PathBuf>, content: &str) -> anyhow::Result<()> {
    if let Some(path) = output {
        std::fs::write(path, content)?;
    } else {
        println!("{content}");
    }
    Ok(())
}
