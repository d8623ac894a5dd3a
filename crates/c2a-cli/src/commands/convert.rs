use std::path::Path;

use anyhow::Result;
use ark_ff::PrimeField;
use c2a_convert::{convert_proof_for_recursion, CurveProfile};
use c2a_types::parse_verifying_key;

use super::{emit, ProofFiles, ProofInputs};
use crate::config;
use crate::curves::{resolve_curve, with_circuit_field, with_curve, CurveName};
use crate::output;

pub struct ConvertOptions<'a> {
    pub curve: Option<CurveName>,
    pub fixed_vk: Option<bool>,
    pub circuit_field: Option<CurveName>,
    pub out: Option<&'a Path>,
}

pub fn run(files: &ProofFiles, opts: ConvertOptions<'_>) -> Result<()> {
    let settings = config::load()?;
    let inputs = files.read()?;
    let tag = parse_verifying_key(&inputs.vk)?.curve;

    let curve = resolve_curve(opts.curve, Some(&tag), settings.curve)?;
    let field = opts.circuit_field.unwrap_or(settings.circuit_field);
    let fixed_vk = opts.fixed_vk.unwrap_or(settings.fixed_vk);

    with_curve!(curve, C => with_circuit_field!(field, N => {
        convert::<C, N>(&inputs, fixed_vk, opts.out)
    }))?;

    if !output::is_json() && opts.out.is_some() {
        output::label("curve", curve.as_str());
        output::label("circuit field", field.as_str());
        output::label("vk", if fixed_vk { "fixed" } else { "witness" });
    }
    Ok(())
}

fn convert<C: CurveProfile, N: PrimeField>(
    inputs: &ProofInputs,
    fixed_vk: bool,
    out: Option<&Path>,
) -> Result<()> {
    let sp = output::spinner("converting proof...");
    let assignment =
        convert_proof_for_recursion::<C, N>(&inputs.vk, &inputs.proof, &inputs.public, fixed_vk);
    sp.finish_and_clear();
    let assignment = assignment?;
    tracing::debug!(
        public_inputs = assignment.public_inputs.public.len(),
        with_vk = assignment.vk.is_some(),
        "built recursion assignment"
    );
    emit(&assignment, out)
}
