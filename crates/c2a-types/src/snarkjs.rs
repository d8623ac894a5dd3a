// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! snarkjs Groth16 JSON artifacts: `proof.json`, `verification_key.json`
//! and `public.json`.
//!
//! Coordinates are kept as strings; decoding into curve points happens in
//! `c2a-convert`, which knows the field width of each curve.

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
#[error("malformed {what} json: {source}")]
pub struct FormatError {
    pub what: &'static str,
    #[source]
    pub source: serde_json::Error,
}

/// Groth16 proof as emitted by snarkjs.
///
/// `pi_a` and `pi_c` usually carry a third projective coordinate (`"1"`),
/// `pi_b` a third row (`["1", "0"]`); decoders only require the first two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnarkjsProof {
    pub pi_a: Vec<String>,
    pub pi_b: Vec<Vec<String>>,
    pub pi_c: Vec<String>,
    #[serde(default)]
    pub protocol: String,
}

/// Groth16 verification key as emitted by snarkjs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnarkjsVerifyingKey {
    #[serde(default)]
    pub protocol: String,
    #[serde(default)]
    pub curve: String,
    #[serde(rename = "nPublic")]
    pub n_public: usize,
    pub vk_alpha_1: Vec<String>,
    pub vk_beta_2: Vec<Vec<String>>,
    pub vk_gamma_2: Vec<Vec<String>>,
    pub vk_delta_2: Vec<Vec<String>>,
    /// ic\[0\] = constant term, ic\[1..\] = public input coefficients
    #[serde(rename = "IC")]
    pub ic: Vec<Vec<String>>,
    /// Precomputed e(alpha, beta); never read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vk_alphabeta_12: Option<serde_json::Value>,
}

impl SnarkjsVerifyingKey {
    /// `len(IC) == nPublic + 1`. Not enforced at parse time.
    pub fn ic_matches_n_public(&self) -> bool {
        self.ic.len() == self.n_public + 1
    }
}

pub fn parse_proof(raw: &[u8]) -> Result<SnarkjsProof, FormatError> {
    serde_json::from_slice(raw).map_err(|source| FormatError { what: "proof", source })
}

pub fn parse_verifying_key(raw: &[u8]) -> Result<SnarkjsVerifyingKey, FormatError> {
    serde_json::from_slice(raw).map_err(|source| FormatError {
        what: "verification key",
        source,
    })
}

pub fn parse_public_signals(raw: &[u8]) -> Result<Vec<String>, FormatError> {
    serde_json::from_slice(raw).map_err(|source| FormatError {
        what: "public signals",
        source,
    })
}

/// Parse a proof and its public signals together.
pub fn parse_proof_and_signals(
    proof: &str,
    signals: &str,
) -> Result<(SnarkjsProof, Vec<String>), FormatError> {
    Ok((
        parse_proof(proof.as_bytes())?,
        parse_public_signals(signals.as_bytes())?,
    ))
}
