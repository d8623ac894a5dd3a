// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! # c2a-convert
//!
//! Turns snarkjs (circom) Groth16 artifacts into arkworks objects, either
//! for direct verification or re-encoded for an outer recursive verifier.
//!
//! Every routine is generic over a [`CurveProfile`]; [`Bn254`] and
//! [`Bls12_381`] are provided.
//!
//! ## Crate layout
//!
//! | Module | Purpose |
//! |---|---|
//! | *crate root* | JSON-in entry points (`verify_proof`, `convert_proof_for_recursion`, `placeholders_for_key`) |
//! | [`curve`] | Curve profiles, point validation, field helpers |
//! | [`decode`] | snarkjs coordinates → G1/G2 points |
//! | [`native`] | Proof/key conversion, prepared keys, native verification |
//! | [`emulated`] | Limb encoding of foreign field elements and points |
//! | [`recursion`] | Recursion assignments (fixed or witnessed key) |
//! | [`placeholder`] | Zero-valued assignments for circuit compilation |
//! | [`export`] | Arkworks → snarkjs JSON |
//!
//! ## Typical flow
//!
//! ```rust,no_run
//! use c2a_convert::{convert_proof_for_recursion, verify_proof, Bn254};
//!
//! # fn example(vk: &[u8], proof: &str, public: &str) -> c2a_convert::ConvertResult<()> {
//! let signals = c2a_types::parse_public_signals(public.as_bytes())?;
//! assert!(verify_proof::<Bn254>(vk, proof, &signals)?);
//!
//! // Witness for an outer circuit over the BN254 scalar field.
//! let assignment =
//!     convert_proof_for_recursion::<Bn254, ark_bn254::Fr>(vk, proof, public, false)?;
//! assert_eq!(assignment.public_inputs.public.len(), signals.len());
//! # Ok(())
//! # }
//! ```

pub mod curve;
pub mod decode;
pub mod emulated;
pub mod error;
pub mod export;
pub mod native;
pub mod placeholder;
pub mod recursion;

use ark_ff::PrimeField;
use c2a_types::{parse_proof, parse_proof_and_signals, parse_verifying_key};

pub use curve::{Bls12_381, Bn254, CurveProfile};
pub use decode::Encoding;
pub use error::{ConvertError, ConvertResult};
pub use native::{vk_to_native, NativeBundle, PreparedKey};
pub use placeholder::{build_placeholders, Placeholders};
pub use recursion::{build_recursion_assignment, RecursionAssignment, VkMode};

/// Verify a snarkjs proof against a snarkjs key.
///
/// `Ok(true)` when the proof checks; a well-formed proof that fails the
/// pairing check is [`ConvertError::Verification`].
pub fn verify_proof<C: CurveProfile>(
    vk_json: &[u8],
    proof_json: &str,
    public_signals: &[String],
) -> ConvertResult<bool> {
    let vk = parse_verifying_key(vk_json)?;
    let proof = parse_proof(proof_json.as_bytes())?;
    NativeBundle::<C>::from_snarkjs(&vk, &proof, public_signals)?.verify()
}

/// Re-encode a snarkjs proof as a witness for an outer circuit over `N`.
pub fn convert_proof_for_recursion<C: CurveProfile, N: PrimeField>(
    vk_json: &[u8],
    proof_json: &str,
    public_signals_json: &str,
    fixed_vk: bool,
) -> ConvertResult<RecursionAssignment<C, N>> {
    let vk = parse_verifying_key(vk_json)?;
    let (proof, signals) = parse_proof_and_signals(proof_json, public_signals_json)?;
    build_recursion_assignment::<C, N>(&vk, &proof, &signals, fixed_vk)
}

/// Placeholders for the key in `vk_json`. An empty buffer means no key.
pub fn placeholders_for_key<C: CurveProfile, N: PrimeField>(
    vk_json: &[u8],
    n_public_inputs: usize,
    fixed_vk: bool,
) -> ConvertResult<Placeholders<C, N>> {
    let vk = if vk_json.iter().all(u8::is_ascii_whitespace) {
        None
    } else {
        Some(parse_verifying_key(vk_json)?)
    };
    build_placeholders::<C, N>(vk.as_ref(), n_public_inputs, fixed_vk)
}

/// Validate a signed input count coming from a caller.
pub fn input_count(n: i64) -> ConvertResult<usize> {
    usize::try_from(n).map_err(|_| {
        ConvertError::InvalidArgument(format!("public input count must be >= 0, got {n}"))
    })
}
