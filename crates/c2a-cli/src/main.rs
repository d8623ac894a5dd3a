mod commands;
mod config;
mod curves;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::convert::ConvertOptions;
use commands::placeholder::PlaceholderOptions;
use commands::ProofFiles;
use curves::CurveName;

#[derive(Parser)]
#[command(name = "c2a", version, about = "Convert snarkjs Groth16 proofs for arkworks verifiers")]
struct Cli {
    /// Print machine-readable JSON on stdout
    #[arg(long, global = true)]
    json: bool,
    /// Log conversion steps to stderr (RUST_LOG overrides the filter)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Verify a snarkjs proof natively
    Verify {
        #[command(flatten)]
        files: ProofFiles,
        /// Proof curve; defaults to the key's `curve` tag
        #[arg(long)]
        curve: Option<CurveName>,
    },
    /// Encode a proof as a witness for an outer verifier circuit
    Convert {
        #[command(flatten)]
        files: ProofFiles,
        #[arg(long)]
        curve: Option<CurveName>,
        /// Key is a circuit constant and left out of the witness
        #[arg(long, conflicts_with = "witness_vk")]
        fixed_vk: bool,
        /// Key is part of the witness
        #[arg(long)]
        witness_vk: bool,
        /// Curve whose scalar field the outer circuit uses
        #[arg(long)]
        circuit_field: Option<CurveName>,
        /// Write JSON here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Zero-valued witness skeleton for compiling an outer circuit
    Placeholder {
        /// verification_key.json
        #[arg(long)]
        vk: PathBuf,
        /// Number of public inputs
        #[arg(long, allow_negative_numbers = true)]
        inputs: i64,
        #[arg(long)]
        curve: Option<CurveName>,
        #[arg(long, conflicts_with = "witness_vk")]
        fixed_vk: bool,
        #[arg(long)]
        witness_vk: bool,
        #[arg(long)]
        circuit_field: Option<CurveName>,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Show or change defaults
    Config {
        #[command(subcommand)]
        action: ConfigCmd,
    },
}

#[derive(Subcommand)]
enum ConfigCmd {
    /// Print current settings
    Show,
    /// Set a config value
    Set { key: String, value: String },
}

fn init_tracing(verbose: bool) {
    let from_env = std::env::var_os("RUST_LOG").is_some();
    if !verbose && !from_env {
        return;
    }
    let filter = if from_env {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new("c2a_convert=debug,c2a=debug")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// `None` leaves the choice to the config file.
fn mode_flag(fixed_vk: bool, witness_vk: bool) -> Option<bool> {
    (fixed_vk || witness_vk).then(|| commands::fixed_vk(fixed_vk, witness_vk, true))
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Cmd::Verify { files, curve } => commands::verify::run(&files, curve)?,
        Cmd::Convert {
            files,
            curve,
            fixed_vk,
            witness_vk,
            circuit_field,
            out,
        } => commands::convert::run(
            &files,
            ConvertOptions {
                curve,
                fixed_vk: mode_flag(fixed_vk, witness_vk),
                circuit_field,
                out: out.as_deref(),
            },
        )?,
        Cmd::Placeholder {
            vk,
            inputs,
            curve,
            fixed_vk,
            witness_vk,
            circuit_field,
            out,
        } => commands::placeholder::run(
            &vk,
            PlaceholderOptions {
                inputs,
                curve,
                fixed_vk: mode_flag(fixed_vk, witness_vk),
                circuit_field,
                out: out.as_deref(),
            },
        )?,
        Cmd::Config { action } => match action {
            ConfigCmd::Show => commands::config::show()?,
            ConfigCmd::Set { key, value } => commands::config::set(&key, &value)?,
        },
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    output::set_json_mode(cli.json);
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        if output::is_reported(&e) {
            std::process::exit(1);
        }
        if output::is_json() {
            let _ = output::json_output(&serde_json::json!({ "error": format!("{e:#}") }));
        } else {
            output::error_msg(&format!("error: {e:#}"));
        }
        std::process::exit(1);
    }
}
