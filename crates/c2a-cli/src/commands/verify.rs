use anyhow::Result;
use c2a_convert::native::{proof_to_native, signals_to_scalars};
use c2a_convert::{vk_to_native, ConvertError, CurveProfile};
use c2a_types::{
    parse_proof, parse_public_signals, parse_verifying_key, SnarkjsProof, SnarkjsVerifyingKey,
};

use super::ProofFiles;
use crate::config;
use crate::curves::{resolve_curve, with_curve, CurveName};
use crate::output;

pub fn run(files: &ProofFiles, curve: Option<CurveName>) -> Result<()> {
    let settings = config::load()?;
    let inputs = files.read()?;
    let vk = parse_verifying_key(&inputs.vk)?;
    let proof = parse_proof(inputs.proof.as_bytes())?;
    let signals = parse_public_signals(inputs.public.as_bytes())?;

    let curve = resolve_curve(curve, Some(&vk.curve), settings.curve)?;
    if !vk.ic_matches_n_public() {
        output::warn(&format!(
            "key declares nPublic = {} but has {} IC points",
            vk.n_public,
            vk.ic.len()
        ));
    }
    with_curve!(curve, C => check::<C>(curve, &vk, &proof, &signals))
}

fn check<C: CurveProfile>(
    curve: CurveName,
    vk: &SnarkjsVerifyingKey,
    proof: &SnarkjsProof,
    signals: &[String],
) -> Result<()> {
    let proof = proof_to_native::<C>(proof)?;
    let inputs = signals_to_scalars::<C>(signals)?;

    let sp = output::spinner("preparing verifying key...");
    let key = vk_to_native::<C>(vk);
    sp.finish_and_clear();
    let key = key?;

    match key.verify(&proof, &inputs) {
        Ok(_) => {
            if output::is_json() {
                output::json_output(&serde_json::json!({
                    "valid": true,
                    "curve": curve,
                    "public_inputs": inputs.len(),
                }))?;
            } else {
                output::success("proof valid");
                output::label("curve", curve.as_str());
                output::label("public inputs", &inputs.len().to_string());
            }
            Ok(())
        }
        Err(ConvertError::Verification(reason)) => {
            if output::is_json() {
                output::json_output(&serde_json::json!({
                    "valid": false,
                    "curve": curve,
                    "reason": reason,
                }))?;
                return Err(output::Reported.into());
            }
            Err(output::fail_with_hint(
                &format!("proof rejected: {reason}"),
                "check that the proof, key and public signals come from the same circuit",
            ))
        }
        Err(e) => Err(e.into()),
    }
}
