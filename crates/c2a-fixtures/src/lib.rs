// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Groth16 fixtures for exercising the converters end to end.
//!
//! [`SquaresCircuit`] proves knowledge of `x_i` with `y_i = x_i^2 + 5` for a
//! configurable number of public outputs `y_i`, over any pairing engine.

use ark_ec::pairing::Pairing;
use ark_ff::PrimeField;
use ark_groth16::{Groth16, Proof, ProvingKey, VerifyingKey};
use ark_r1cs_std::{alloc::AllocVar, eq::EqGadget, fields::fp::FpVar, fields::FieldVar};
use ark_relations::r1cs::{
    ConstraintSynthesizer, ConstraintSystem, ConstraintSystemRef, OptimizationGoal,
    SynthesisError, SynthesisMode,
};
use ark_snark::SNARK;
use ark_std::rand::{CryptoRng, RngCore};

/// "I know `x_i` such that `x_i^2 + 5 == y_i`" for every public `y_i`
#[derive(Clone)]
pub struct SquaresCircuit<F: PrimeField> {
    pub roots: Vec<Option<F>>,
}

impl<F: PrimeField> SquaresCircuit<F> {
    /// Shape-only instance for key generation.
    pub fn empty(n_public: usize) -> Self {
        Self {
            roots: vec![None; n_public],
        }
    }

    pub fn new(roots: &[F]) -> Self {
        Self {
            roots: roots.iter().copied().map(Some).collect(),
        }
    }
}

impl<F: PrimeField> ConstraintSynthesizer<F> for SquaresCircuit<F> {
    fn generate_constraints(self, cs: ConstraintSystemRef<F>) -> Result<(), SynthesisError> {
        // Keeps the system non-empty when there are no public outputs.
        let anchor = FpVar::new_witness(cs.clone(), || Ok(F::one()))?;
        anchor.square()?.enforce_equal(&anchor)?;

        for root in self.roots {
            let y = FpVar::new_input(cs.clone(), || {
                let x = root.ok_or(SynthesisError::AssignmentMissing)?;
                Ok(square_plus_five(x))
            })?;
            let x = FpVar::new_witness(cs.clone(), || {
                root.ok_or(SynthesisError::AssignmentMissing)
            })?;
            let computed = x.square()? + FpVar::Constant(F::from(5u64));
            computed.enforce_equal(&y)?;
        }
        Ok(())
    }
}

fn square_plus_five<F: PrimeField>(x: F) -> F {
    x.square() + F::from(5u64)
}

/// Public outputs for `roots`, in input order.
pub fn public_inputs<F: PrimeField>(roots: &[F]) -> Vec<F> {
    roots.iter().copied().map(square_plus_five).collect()
}

pub fn setup<E: Pairing, R: RngCore + CryptoRng>(
    n_public: usize,
    rng: &mut R,
) -> Result<(ProvingKey<E>, VerifyingKey<E>), SynthesisError> {
    Groth16::<E>::circuit_specific_setup(SquaresCircuit::empty(n_public), rng)
}

/// Prove for `roots`; returns the proof and its public inputs.
pub fn prove<E: Pairing, R: RngCore + CryptoRng>(
    pk: &ProvingKey<E>,
    roots: &[E::ScalarField],
    rng: &mut R,
) -> Result<(Proof<E>, Vec<E::ScalarField>), SynthesisError> {
    let proof = Groth16::<E>::prove(pk, SquaresCircuit::new(roots), rng)?;
    Ok((proof, public_inputs(roots)))
}

pub fn constraint_count<F: PrimeField>(n_public: usize) -> Result<usize, SynthesisError> {
    let cs = ConstraintSystem::<F>::new_ref();
    cs.set_optimization_goal(OptimizationGoal::Constraints);
    cs.set_mode(SynthesisMode::Setup);
    SquaresCircuit::<F>::empty(n_public).generate_constraints(cs.clone())?;
    Ok(cs.num_constraints())
}
