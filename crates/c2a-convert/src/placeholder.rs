// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Zero-valued structures with the exact shape of a [`RecursionAssignment`],
//! so an outer circuit can be compiled before any real proof exists.

use ark_ff::PrimeField;
use c2a_types::SnarkjsVerifyingKey;
use serde::Serialize;

use crate::curve::CurveProfile;
use crate::emulated::{limb_count, EmulatedG1};
use crate::error::{ConvertError, ConvertResult};
use crate::native::{vk_to_native, PreparedKey};
use crate::recursion::{
    EmulatedProof, EmulatedVerifyingKey, EmulatedWitness, KeyAllocation, RecursionAssignment,
    VkMode,
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(bound = "")]
pub struct Placeholders<C: CurveProfile, N: PrimeField> {
    pub mode: VkMode,
    pub vk: EmulatedVerifyingKey<C, N>,
    pub witness: EmulatedWitness<C, N>,
    pub proof: EmulatedProof<C, N>,
}

impl<C: CurveProfile, N: PrimeField> Placeholders<C, N> {
    /// In fixed mode the key keeps its real values (they become circuit
    /// constants). In witness mode the IC entries are zeroed; only their
    /// count matters to the compiler.
    pub fn build(key: &PreparedKey<C>, n_public_inputs: usize, mode: VkMode) -> Self {
        if n_public_inputs + 1 != key.ic_len() {
            tracing::warn!(
                curve = C::NAME,
                n_public_inputs,
                ic = key.ic_len(),
                "placeholder input count disagrees with verifying key"
            );
        }
        let vk = match mode {
            VkMode::Fixed => EmulatedVerifyingKey::new(key, KeyAllocation::Constant),
            VkMode::Witness => {
                let mut vk = EmulatedVerifyingKey::new(key, KeyAllocation::Witness);
                vk.ic = vec![EmulatedG1::zero(); vk.ic.len()];
                vk
            }
        };
        Self {
            mode,
            vk,
            witness: EmulatedWitness::zero(n_public_inputs),
            proof: EmulatedProof::zero(),
        }
    }

    /// Whether `assignment` can be substituted into a circuit compiled
    /// from these placeholders.
    pub fn accepts(&self, assignment: &RecursionAssignment<C, N>) -> bool {
        let inputs_fit = assignment.public_inputs.public.len() == self.witness.public.len()
            && assignment
                .public_inputs
                .public
                .iter()
                .all(|e| e.limbs().len() == limb_count::<C::Fr>());
        let vk_fits = match (&assignment.vk, self.mode) {
            (None, VkMode::Fixed) => true,
            (Some(vk), VkMode::Witness) => vk.ic.len() == self.vk.ic.len(),
            _ => false,
        };
        inputs_fit && vk_fits
    }
}

/// Placeholders for a snarkjs key. `n_public_inputs` sizes the witness.
pub fn build_placeholders<C: CurveProfile, N: PrimeField>(
    vk: Option<&SnarkjsVerifyingKey>,
    n_public_inputs: usize,
    fixed_vk: bool,
) -> ConvertResult<Placeholders<C, N>> {
    let vk = vk.ok_or_else(|| ConvertError::InvalidArgument("no verifying key given".into()))?;
    let key = vk_to_native::<C>(vk)?;
    Ok(Placeholders::build(
        &key,
        n_public_inputs,
        VkMode::from_fixed(fixed_vk),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::Bn254;

    #[test]
    fn missing_key_is_invalid_argument() {
        let err = build_placeholders::<Bn254, ark_bn254::Fr>(None, 1, true).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidArgument(_)));
    }
}
