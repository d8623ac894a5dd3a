pub mod config;
pub mod convert;
pub mod placeholder;
pub mod verify;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::output;

/// The three snarkjs artifacts of one proof.
#[derive(Args, Debug)]
pub struct ProofFiles {
    /// verification_key.json
    #[arg(long)]
    pub vk: PathBuf,
    /// proof.json
    #[arg(long)]
    pub proof: PathBuf,
    /// public.json
    #[arg(long)]
    pub public: PathBuf,
}

/// Contents of a `ProofFiles` set, read once.
pub struct ProofInputs {
    pub vk: Vec<u8>,
    pub proof: String,
    pub public: String,
}

impl ProofFiles {
    pub fn read(&self) -> Result<ProofInputs> {
        Ok(ProofInputs {
            vk: read_bytes(&self.vk)?,
            proof: read_text(&self.proof)?,
            public: read_text(&self.public)?,
        })
    }
}

pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("cannot read {}", path.display()))
}

pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))
}

/// `--fixed-vk` / `--witness-vk` override the configured mode.
pub fn fixed_vk(fixed: bool, witness: bool, default: bool) -> bool {
    match (fixed, witness) {
        (true, _) => true,
        (_, true) => false,
        _ => default,
    }
}

/// Write `value` as pretty JSON to `out`, or to stdout when no file is given.
pub fn emit<T: Serialize>(value: &T, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            let json = serde_json::to_string_pretty(value)?;
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, json).with_context(|| format!("cannot write {}", path.display()))?;
            output::success(&format!("wrote {}", path.display()));
            Ok(())
        }
        None => output::json_output(value),
    }
}
