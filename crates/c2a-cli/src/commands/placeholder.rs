use std::path::Path;

use anyhow::Result;
use ark_ff::PrimeField;
use c2a_convert::{input_count, placeholders_for_key, CurveProfile};
use c2a_types::parse_verifying_key;

use super::{emit, read_bytes};
use crate::config;
use crate::curves::{resolve_curve, with_circuit_field, with_curve, CurveName};
use crate::output;

pub struct PlaceholderOptions<'a> {
    pub inputs: i64,
    pub curve: Option<CurveName>,
    pub fixed_vk: Option<bool>,
    pub circuit_field: Option<CurveName>,
    pub out: Option<&'a Path>,
}

pub fn run(vk_path: &Path, opts: PlaceholderOptions<'_>) -> Result<()> {
    let n_public = input_count(opts.inputs)?;
    let settings = config::load()?;
    let raw = read_bytes(vk_path)?;

    // An empty key file is left for the converter to reject.
    let tag = if raw.iter().all(u8::is_ascii_whitespace) {
        None
    } else {
        let vk = parse_verifying_key(&raw)?;
        if vk.ic.len() != n_public + 1 {
            output::warn(&format!(
                "--inputs {n_public} does not match the key's {} IC points",
                vk.ic.len()
            ));
        }
        Some(vk.curve)
    };

    let curve = resolve_curve(opts.curve, tag.as_deref(), settings.curve)?;
    let field = opts.circuit_field.unwrap_or(settings.circuit_field);
    let fixed_vk = opts.fixed_vk.unwrap_or(settings.fixed_vk);

    with_curve!(curve, C => with_circuit_field!(field, N => {
        build::<C, N>(&raw, n_public, fixed_vk, opts.out)
    }))
}

fn build<C: CurveProfile, N: PrimeField>(
    raw: &[u8],
    n_public: usize,
    fixed_vk: bool,
    out: Option<&Path>,
) -> Result<()> {
    let sp = output::spinner("preparing verifying key...");
    let placeholders = placeholders_for_key::<C, N>(raw, n_public, fixed_vk);
    sp.finish_and_clear();
    emit(&placeholders?, out)
}
