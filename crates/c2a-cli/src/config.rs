use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::curves::CurveName;
use crate::output;

pub const ALLOWED_KEYS: &[&str] = &["curve", "circuit_field", "fixed_vk"];

/// Defaults applied when a flag is not given.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Curve used when neither `--curve` nor the key names one.
    pub curve: CurveName,
    /// Curve whose scalar field the outer circuit runs over.
    pub circuit_field: CurveName,
    pub fixed_vk: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            curve: CurveName::Bn254,
            circuit_field: CurveName::Bn254,
            fixed_vk: true,
        }
    }
}

impl Settings {
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "curve" => self.curve = CurveName::parse(value)?,
            "circuit_field" => self.circuit_field = CurveName::parse(value)?,
            "fixed_vk" => {
                self.fixed_vk = value.parse().map_err(|_| {
                    output::fail_with_hint(
                        &format!("invalid fixed_vk value: {value}"),
                        "expected true or false",
                    )
                })?
            }
            _ => {
                return Err(output::fail_with_hint(
                    &format!("unknown config key: {key}"),
                    &format!("allowed keys: {}", ALLOWED_KEYS.join(", ")),
                ))
            }
        }
        Ok(())
    }
}

/// `$C2A_HOME`, or `~/.c2a`.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os("C2A_HOME") {
        return Ok(PathBuf::from(dir));
    }
    let home = dirs::home_dir().context("cannot determine home directory")?;
    Ok(home.join(".c2a"))
}

pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// A missing file yields the defaults.
pub fn load_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let data = fs::read_to_string(path)
        .with_context(|| format!("cannot read config at {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("invalid config JSON at {}", path.display()))
}

pub fn save_to(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json).with_context(|| format!("cannot write config at {}", path.display()))?;
    Ok(())
}

pub fn load() -> Result<Settings> {
    load_from(&config_path()?)
}

pub fn save(settings: &Settings) -> Result<()> {
    save_to(&config_path()?, settings)
}
