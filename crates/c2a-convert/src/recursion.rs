// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Recursion-ready assignments: a proof, its public inputs and (optionally)
//! its verifying key re-encoded as emulated values for an outer circuit.
//!
//! With [`VkMode::Fixed`] the key is compiled into the outer circuit as a
//! constant and left out of the assignment. With [`VkMode::Witness`] the key
//! travels with every assignment, so one outer circuit can check proofs
//! against keys only known at run time.

use ark_ff::PrimeField;
use c2a_types::{SnarkjsProof, SnarkjsVerifyingKey};
use serde::Serialize;

use crate::curve::CurveProfile;
use crate::emulated::{EmulatedElement, EmulatedG1, EmulatedG2, EmulatedGt, EmulatedScalar};
use crate::error::ConvertResult;
use crate::native::{proof_to_native, signals_to_scalars, vk_to_native, NativeProof, PreparedKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VkMode {
    /// Key baked into the outer circuit.
    Fixed,
    /// Key supplied as part of the witness.
    Witness,
}

impl VkMode {
    pub fn from_fixed(fixed_vk: bool) -> Self {
        if fixed_vk {
            VkMode::Fixed
        } else {
            VkMode::Witness
        }
    }

    pub fn is_fixed(self) -> bool {
        self == VkMode::Fixed
    }
}

/// How the outer circuit allocates a verifying key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAllocation {
    Constant,
    Witness,
}

/// Verifying key in the form an in-circuit Groth16 check consumes:
/// `e(alpha, beta)`, `-gamma`, `-delta` and the IC list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(bound = "")]
pub struct EmulatedVerifyingKey<C: CurveProfile, N: PrimeField> {
    pub allocation: KeyAllocation,
    pub alpha_beta: EmulatedGt<C, N>,
    pub gamma_neg: EmulatedG2<C, N>,
    pub delta_neg: EmulatedG2<C, N>,
    pub ic: Vec<EmulatedG1<C, N>>,
}

impl<C: CurveProfile, N: PrimeField> EmulatedVerifyingKey<C, N> {
    pub fn new(key: &PreparedKey<C>, allocation: KeyAllocation) -> Self {
        let vk = key.vk();
        Self {
            allocation,
            alpha_beta: EmulatedGt::new(&key.prepared().alpha_g1_beta_g2),
            gamma_neg: EmulatedG2::negated(&vk.gamma_g2),
            delta_neg: EmulatedG2::negated(&vk.delta_g2),
            ic: vk.gamma_abc_g1.iter().map(EmulatedG1::new).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(bound = "")]
pub struct EmulatedProof<C: CurveProfile, N: PrimeField> {
    pub a: EmulatedG1<C, N>,
    pub b: EmulatedG2<C, N>,
    pub c: EmulatedG1<C, N>,
}

impl<C: CurveProfile, N: PrimeField> EmulatedProof<C, N> {
    pub fn new(proof: &NativeProof<C>) -> Self {
        Self {
            a: EmulatedG1::new(&proof.a),
            b: EmulatedG2::new(&proof.b),
            c: EmulatedG1::new(&proof.c),
        }
    }

    pub fn zero() -> Self {
        Self {
            a: EmulatedG1::zero(),
            b: EmulatedG2::zero(),
            c: EmulatedG1::zero(),
        }
    }
}

/// Public inputs as emulated scalars, in signal order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(bound = "")]
pub struct EmulatedWitness<C: CurveProfile, N: PrimeField> {
    pub public: Vec<EmulatedScalar<C, N>>,
}

impl<C: CurveProfile, N: PrimeField> EmulatedWitness<C, N> {
    pub fn new(inputs: &[C::Fr]) -> Self {
        Self {
            public: inputs.iter().map(EmulatedElement::new).collect(),
        }
    }

    pub fn zero(n_public: usize) -> Self {
        Self {
            public: vec![EmulatedElement::zero(); n_public],
        }
    }
}

/// Witness values for one outer-circuit instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(bound = "")]
pub struct RecursionAssignment<C: CurveProfile, N: PrimeField> {
    pub proof: EmulatedProof<C, N>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vk: Option<EmulatedVerifyingKey<C, N>>,
    pub public_inputs: EmulatedWitness<C, N>,
}

impl<C: CurveProfile, N: PrimeField> RecursionAssignment<C, N> {
    /// Build against an already prepared key.
    pub fn build(
        key: &PreparedKey<C>,
        proof: &SnarkjsProof,
        signals: &[String],
        mode: VkMode,
    ) -> ConvertResult<Self> {
        let inputs = signals_to_scalars::<C>(signals)?;
        key.check_input_count(inputs.len())?;
        let proof = proof_to_native::<C>(proof)?;
        Ok(Self::from_native(key, &proof, &inputs, mode))
    }

    /// Encode native objects. Input count is assumed checked.
    pub fn from_native(
        key: &PreparedKey<C>,
        proof: &NativeProof<C>,
        inputs: &[C::Fr],
        mode: VkMode,
    ) -> Self {
        let vk = match mode {
            VkMode::Fixed => None,
            VkMode::Witness => Some(EmulatedVerifyingKey::new(key, KeyAllocation::Witness)),
        };
        Self {
            proof: EmulatedProof::new(proof),
            vk,
            public_inputs: EmulatedWitness::new(inputs),
        }
    }
}

/// Convert public inputs, proof and key, in that order, into an assignment.
pub fn build_recursion_assignment<C: CurveProfile, N: PrimeField>(
    vk: &SnarkjsVerifyingKey,
    proof: &SnarkjsProof,
    signals: &[String],
    fixed_vk: bool,
) -> ConvertResult<RecursionAssignment<C, N>> {
    let inputs = signals_to_scalars::<C>(signals)?;
    let native_proof = proof_to_native::<C>(proof)?;
    let key = vk_to_native::<C>(vk)?;
    key.check_input_count(inputs.len())?;
    Ok(RecursionAssignment::from_native(
        &key,
        &native_proof,
        &inputs,
        VkMode::from_fixed(fixed_vk),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_from_flag() {
        assert_eq!(VkMode::from_fixed(true), VkMode::Fixed);
        assert_eq!(VkMode::from_fixed(false), VkMode::Witness);
        assert!(VkMode::Fixed.is_fixed());
        assert!(!VkMode::Witness.is_fixed());
    }

    #[test]
    fn zero_witness_has_requested_length() {
        use crate::curve::Bn254;
        let w = EmulatedWitness::<Bn254, ark_bn254::Fr>::zero(3);
        assert_eq!(w.public.len(), 3);
        assert!(w.public.iter().all(|e| e.limbs().len() == 4));
    }
}
