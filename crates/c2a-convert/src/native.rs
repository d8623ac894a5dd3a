// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! snarkjs artifacts → arkworks Groth16 objects, and native verification.
//!
//! Verifying keys are built in two phases. [`decode_verifying_key`] only
//! decodes points. [`PreparedKey::prepare`] runs the pairing precomputation
//! once and returns an immutable handle that can be shared (`&` or `Arc`)
//! across any number of verifications.

use ark_groth16::{Groth16, PreparedVerifyingKey, Proof, VerifyingKey};
use ark_snark::SNARK;
use c2a_types::{codec, SnarkjsProof, SnarkjsVerifyingKey};

use crate::curve::{field_from_biguint, CurveProfile, G1, G2};
use crate::decode::{decode_g1, decode_g2};
use crate::error::{ConvertError, ConvertResult};

pub type NativeProof<C> = Proof<<C as CurveProfile>::Engine>;
pub type NativeVerifyingKey<C> = VerifyingKey<<C as CurveProfile>::Engine>;

/// Decode `A`, `B`, `C` into an arkworks proof.
pub fn proof_to_native<C: CurveProfile>(proof: &SnarkjsProof) -> ConvertResult<NativeProof<C>> {
    let a: G1<C> = decode_g1::<C>("pi_a", &proof.pi_a)?;
    let c: G1<C> = decode_g1::<C>("pi_c", &proof.pi_c)?;
    let b: G2<C> = decode_g2::<C>("pi_b", &proof.pi_b)?;
    Ok(Proof { a, b, c })
}

/// Decode the fixed points and the IC list. No precomputation.
pub fn decode_verifying_key<C: CurveProfile>(
    vk: &SnarkjsVerifyingKey,
) -> ConvertResult<NativeVerifyingKey<C>> {
    let alpha_g1 = decode_g1::<C>("vk_alpha_1", &vk.vk_alpha_1)?;
    let beta_g2 = decode_g2::<C>("vk_beta_2", &vk.vk_beta_2)?;
    let gamma_g2 = decode_g2::<C>("vk_gamma_2", &vk.vk_gamma_2)?;
    let delta_g2 = decode_g2::<C>("vk_delta_2", &vk.vk_delta_2)?;
    let gamma_abc_g1 = vk
        .ic
        .iter()
        .enumerate()
        .map(|(i, point)| decode_g1::<C>(&format!("IC[{i}]"), point))
        .collect::<ConvertResult<Vec<_>>>()?;

    tracing::debug!(curve = C::NAME, ic = gamma_abc_g1.len(), "decoded verifying key");
    Ok(VerifyingKey {
        alpha_g1,
        beta_g2,
        gamma_g2,
        delta_g2,
        gamma_abc_g1,
    })
}

/// Verifying key with its pairing precomputation done.
#[derive(Clone, Debug)]
pub struct PreparedKey<C: CurveProfile> {
    n_public: usize,
    pvk: PreparedVerifyingKey<C::Engine>,
}

impl<C: CurveProfile> PreparedKey<C> {
    /// Run the one-time precomputation over a decoded key.
    ///
    /// `n_public` is the count the key was declared with; it is only
    /// checked when inputs are later combined with the key.
    pub fn prepare(vk: NativeVerifyingKey<C>, n_public: usize) -> ConvertResult<Self> {
        if C::g1_xy(&vk.alpha_g1).is_none() {
            return Err(ConvertError::Precompute("alpha is the identity".into()));
        }
        for (name, point) in [
            ("beta", &vk.beta_g2),
            ("gamma", &vk.gamma_g2),
            ("delta", &vk.delta_g2),
        ] {
            if C::g2_xy(point).is_none() {
                return Err(ConvertError::Precompute(format!("{name} is the identity")));
            }
        }
        if vk.gamma_abc_g1.is_empty() {
            return Err(ConvertError::Precompute("IC has no constant term".into()));
        }

        tracing::debug!(curve = C::NAME, ic = vk.gamma_abc_g1.len(), "precomputing verifying key");
        let pvk = PreparedVerifyingKey::from(vk);
        Ok(Self { n_public, pvk })
    }

    pub fn vk(&self) -> &NativeVerifyingKey<C> {
        &self.pvk.vk
    }

    pub fn prepared(&self) -> &PreparedVerifyingKey<C::Engine> {
        &self.pvk
    }

    /// Declared `nPublic`.
    pub fn n_public(&self) -> usize {
        self.n_public
    }

    /// Length of the IC list (one more than the inputs the key accepts).
    pub fn ic_len(&self) -> usize {
        self.pvk.vk.gamma_abc_g1.len()
    }

    /// Reject an input count that disagrees with `nPublic` or with IC.
    pub fn check_input_count(&self, actual: usize) -> ConvertResult<()> {
        if actual != self.n_public {
            return Err(ConvertError::ShapeMismatch {
                what: "public inputs vs nPublic",
                expected: self.n_public,
                actual,
            });
        }
        if actual + 1 != self.ic_len() {
            return Err(ConvertError::ShapeMismatch {
                what: "public inputs vs IC",
                expected: self.ic_len().saturating_sub(1),
                actual,
            });
        }
        Ok(())
    }

    /// Pairing check. `Ok(true)` on acceptance; a well-formed but invalid
    /// proof is reported as [`ConvertError::Verification`].
    pub fn verify(&self, proof: &NativeProof<C>, inputs: &[C::Fr]) -> ConvertResult<bool> {
        self.check_input_count(inputs.len())?;
        match Groth16::<C::Engine>::verify_with_processed_vk(&self.pvk, inputs, proof) {
            Ok(true) => Ok(true),
            Ok(false) => Err(ConvertError::Verification(
                "pairing check rejected the proof".into(),
            )),
            Err(e) => Err(ConvertError::Verification(e.to_string())),
        }
    }
}

/// Decode and prepare in one step.
pub fn vk_to_native<C: CurveProfile>(vk: &SnarkjsVerifyingKey) -> ConvertResult<PreparedKey<C>> {
    PreparedKey::prepare(decode_verifying_key::<C>(vk)?, vk.n_public)
}

/// Public signals → scalar field elements, order preserved.
///
/// Values are reduced modulo the scalar field order. The first malformed
/// signal aborts the whole batch.
pub fn signals_to_scalars<C: CurveProfile>(signals: &[String]) -> ConvertResult<Vec<C::Fr>> {
    signals
        .iter()
        .enumerate()
        .map(|(i, s)| {
            codec::parse_integer(s)
                .map(|n| field_from_biguint::<C::Fr>(&n))
                .map_err(|e| ConvertError::codec(format!("public input {i}"), e))
        })
        .collect()
}

/// Proof, prepared key and public inputs, ready to check.
pub struct NativeBundle<C: CurveProfile> {
    pub proof: NativeProof<C>,
    pub key: PreparedKey<C>,
    pub public_inputs: Vec<C::Fr>,
}

impl<C: CurveProfile> NativeBundle<C> {
    pub fn from_snarkjs(
        vk: &SnarkjsVerifyingKey,
        proof: &SnarkjsProof,
        signals: &[String],
    ) -> ConvertResult<Self> {
        let public_inputs = signals_to_scalars::<C>(signals)?;
        let proof = proof_to_native::<C>(proof)?;
        let key = vk_to_native::<C>(vk)?;
        Ok(Self {
            proof,
            key,
            public_inputs,
        })
    }

    pub fn verify(&self) -> ConvertResult<bool> {
        self.key.verify(&self.proof, &self.public_inputs)
    }
}
