// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Arkworks → snarkjs JSON, the inverse of the decoders.
//!
//! # Encodings
//!
//! - [`Encoding::Decimal`]: snarkjs layout. Points carry the projective
//!   third coordinate (`"1"`, `["1", "0"]`), G2 rows are `[c0, c1]`.
//! - [`Encoding::Hex`]: `0x`-prefixed big-endian, zero-padded to the
//!   coordinate width, G2 rows in wire order `[c1, c0]`.
//!
//! The identity is written as all-zero coordinates so it decodes back.
//!
//! # Example
//!
//! ```rust,no_run
//! use c2a_convert::curve::Bn254;
//! use c2a_convert::decode::Encoding;
//! use c2a_convert::export::{export_proof, export_verifying_key};
//!
//! # fn example(
//! #     vk: &ark_groth16::VerifyingKey<ark_bn254::Bn254>,
//! #     proof: &ark_groth16::Proof<ark_bn254::Bn254>,
//! # ) {
//! let vk_json = export_verifying_key::<Bn254>(vk, Encoding::Decimal);
//! let proof_json = export_proof::<Bn254>(proof, Encoding::Hex);
//! assert_eq!(vk_json.curve, "bn128");
//! # }
//! ```

use ark_ff::{BigInteger, PrimeField, Zero};
use c2a_types::{SnarkjsProof, SnarkjsVerifyingKey};

use crate::curve::{field_to_biguint, CurveProfile, G1, G2};
use crate::decode::Encoding;
use crate::native::{NativeProof, NativeVerifyingKey};

fn field_string<F: PrimeField>(f: &F, encoding: Encoding) -> String {
    match encoding {
        Encoding::Decimal => field_to_biguint(f).to_string(),
        Encoding::Hex => format!("0x{}", hex::encode(f.into_bigint().to_bytes_be())),
    }
}

pub fn export_g1<C: CurveProfile>(p: &G1<C>, encoding: Encoding) -> Vec<String> {
    let (x, y) = C::g1_xy(p).unwrap_or((C::Fq::zero(), C::Fq::zero()));
    let mut out = vec![field_string(&x, encoding), field_string(&y, encoding)];
    if encoding == Encoding::Decimal {
        out.push("1".into());
    }
    out
}

pub fn export_g2<C: CurveProfile>(p: &G2<C>, encoding: Encoding) -> Vec<Vec<String>> {
    let zero = [C::Fq::zero(), C::Fq::zero()];
    let (x, y) = C::g2_xy(p).unwrap_or((zero, zero));
    let row = |c: &[C::Fq; 2]| match encoding {
        Encoding::Decimal => vec![field_string(&c[0], encoding), field_string(&c[1], encoding)],
        Encoding::Hex => vec![field_string(&c[1], encoding), field_string(&c[0], encoding)],
    };
    let mut out = vec![row(&x), row(&y)];
    if encoding == Encoding::Decimal {
        out.push(vec!["1".into(), "0".into()]);
    }
    out
}

pub fn export_proof<C: CurveProfile>(proof: &NativeProof<C>, encoding: Encoding) -> SnarkjsProof {
    SnarkjsProof {
        pi_a: export_g1::<C>(&proof.a, encoding),
        pi_b: export_g2::<C>(&proof.b, encoding),
        pi_c: export_g1::<C>(&proof.c, encoding),
        protocol: "groth16".into(),
    }
}

/// `nPublic` is derived from the IC length.
pub fn export_verifying_key<C: CurveProfile>(
    vk: &NativeVerifyingKey<C>,
    encoding: Encoding,
) -> SnarkjsVerifyingKey {
    SnarkjsVerifyingKey {
        protocol: "groth16".into(),
        curve: C::NAME.into(),
        n_public: vk.gamma_abc_g1.len().saturating_sub(1),
        vk_alpha_1: export_g1::<C>(&vk.alpha_g1, encoding),
        vk_beta_2: export_g2::<C>(&vk.beta_g2, encoding),
        vk_gamma_2: export_g2::<C>(&vk.gamma_g2, encoding),
        vk_delta_2: export_g2::<C>(&vk.delta_g2, encoding),
        ic: vk
            .gamma_abc_g1
            .iter()
            .map(|p| export_g1::<C>(p, encoding))
            .collect(),
        vk_alphabeta_12: None,
    }
}

pub fn export_public_signals<C: CurveProfile>(inputs: &[C::Fr], encoding: Encoding) -> Vec<String> {
    inputs.iter().map(|f| field_string(f, encoding)).collect()
}
