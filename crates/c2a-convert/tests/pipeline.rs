// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! End-to-end: arkworks proof → snarkjs JSON → conversion, for both curves.

use std::sync::Arc;
use std::thread;

use ark_ec::pairing::Pairing;
use ark_ff::{PrimeField, Zero};
use ark_serialize::CanonicalSerialize;
use ark_std::rand::{rngs::StdRng, SeedableRng};
use c2a_convert::export::{export_proof, export_public_signals, export_verifying_key};
use c2a_convert::native::{proof_to_native, NativeProof, NativeVerifyingKey};
use c2a_convert::recursion::KeyAllocation;
use c2a_convert::{
    convert_proof_for_recursion, placeholders_for_key, verify_proof, vk_to_native, ConvertError,
    CurveProfile, Encoding, NativeBundle, PreparedKey, RecursionAssignment, VkMode,
};
use c2a_types::{parse_proof, parse_verifying_key};
use num_bigint::BigUint;

struct Fixture<C: CurveProfile> {
    vk: NativeVerifyingKey<C>,
    proof: NativeProof<C>,
    inputs: Vec<C::Fr>,
}

impl<C: CurveProfile> Fixture<C> {
    fn new(n_public: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(42);
        let roots: Vec<C::Fr> = (0..n_public as u64).map(|i| C::Fr::from(i + 3)).collect();
        let (pk, vk) = c2a_fixtures::setup::<C::Engine, _>(n_public, &mut rng).unwrap();
        let (proof, inputs) = c2a_fixtures::prove(&pk, &roots, &mut rng).unwrap();
        Self { vk, proof, inputs }
    }

    /// `(vk bytes, proof json, public signals json)`
    fn json(&self, encoding: Encoding) -> (Vec<u8>, String, String) {
        (
            serde_json::to_vec(&export_verifying_key::<C>(&self.vk, encoding)).unwrap(),
            serde_json::to_string(&export_proof::<C>(&self.proof, encoding)).unwrap(),
            serde_json::to_string(&export_public_signals::<C>(&self.inputs, encoding)).unwrap(),
        )
    }

    fn signals(&self, encoding: Encoding) -> Vec<String> {
        export_public_signals::<C>(&self.inputs, encoding)
    }
}

fn flip_bit(coordinate: &str, bit: usize) -> String {
    let v: BigUint = coordinate.parse().unwrap();
    (v ^ (BigUint::from(1u8) << bit)).to_string()
}

fn compressed<T: CanonicalSerialize>(value: &T) -> Vec<u8> {
    let mut buf = Vec::new();
    value.serialize_compressed(&mut buf).unwrap();
    buf
}

fn genuine_proof_verifies<C: CurveProfile>() {
    let fx = Fixture::<C>::new(2);
    for encoding in [Encoding::Decimal, Encoding::Hex] {
        let (vk, proof, _) = fx.json(encoding);
        assert!(verify_proof::<C>(&vk, &proof, &fx.signals(encoding)).unwrap());
    }
}

fn mutated_proof_rejected<C: CurveProfile>() {
    let fx = Fixture::<C>::new(1);
    let (vk, _, _) = fx.json(Encoding::Decimal);
    let signals = fx.signals(Encoding::Decimal);
    let original = export_proof::<C>(&fx.proof, Encoding::Decimal);

    for bit in [0, 1, 17, 200] {
        let mut candidates = Vec::new();
        let mut p = original.clone();
        p.pi_a[0] = flip_bit(&p.pi_a[0], bit);
        candidates.push(p);
        let mut p = original.clone();
        p.pi_c[1] = flip_bit(&p.pi_c[1], bit);
        candidates.push(p);
        let mut p = original.clone();
        p.pi_b[1][0] = flip_bit(&p.pi_b[1][0], bit);
        candidates.push(p);

        for proof in candidates {
            let json = serde_json::to_string(&proof).unwrap();
            assert!(
                verify_proof::<C>(&vk, &json, &signals).is_err(),
                "bit {bit} flip accepted"
            );
        }
    }
}

fn wrong_public_input_is_verification_error<C: CurveProfile>() {
    let fx = Fixture::<C>::new(1);
    let (vk, proof, _) = fx.json(Encoding::Decimal);
    let bumped = export_public_signals::<C>(
        &[fx.inputs[0] + C::Fr::from(1u64)],
        Encoding::Decimal,
    );
    let err = verify_proof::<C>(&vk, &proof, &bumped).unwrap_err();
    assert!(matches!(err, ConvertError::Verification(_)), "{err}");
}

fn hex_and_decimal_agree<C: CurveProfile>() {
    let fx = Fixture::<C>::new(2);
    let (dec_vk, dec_proof, _) = fx.json(Encoding::Decimal);
    let (hex_vk, hex_proof, _) = fx.json(Encoding::Hex);

    let a = proof_to_native::<C>(&parse_proof(dec_proof.as_bytes()).unwrap()).unwrap();
    let b = proof_to_native::<C>(&parse_proof(hex_proof.as_bytes()).unwrap()).unwrap();
    assert_eq!(a, b);
    assert_eq!(a, fx.proof);

    let ka = vk_to_native::<C>(&parse_verifying_key(&dec_vk).unwrap()).unwrap();
    let kb = vk_to_native::<C>(&parse_verifying_key(&hex_vk).unwrap()).unwrap();
    assert_eq!(ka.vk(), kb.vk());
    assert_eq!(ka.vk(), &fx.vk);
}

fn conversion_is_idempotent<C: CurveProfile, N: PrimeField>() {
    let fx = Fixture::<C>::new(2);
    let (vk, proof, signals) = fx.json(Encoding::Decimal);
    let vk_model = parse_verifying_key(&vk).unwrap();
    let proof_model = parse_proof(proof.as_bytes()).unwrap();
    let signal_list = fx.signals(Encoding::Decimal);

    let first = NativeBundle::<C>::from_snarkjs(&vk_model, &proof_model, &signal_list).unwrap();
    let second = NativeBundle::<C>::from_snarkjs(&vk_model, &proof_model, &signal_list).unwrap();
    assert_eq!(compressed(&first.proof), compressed(&second.proof));
    assert_eq!(compressed(first.key.vk()), compressed(second.key.vk()));
    assert_eq!(first.public_inputs, second.public_inputs);

    for fixed in [true, false] {
        let a = convert_proof_for_recursion::<C, N>(&vk, &proof, &signals, fixed).unwrap();
        let b = convert_proof_for_recursion::<C, N>(&vk, &proof, &signals, fixed).unwrap();
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}

fn placeholders_match_assignments<C: CurveProfile, N: PrimeField>() {
    for n in 0..=3 {
        let fx = Fixture::<C>::new(n);
        let (vk, proof, signals) = fx.json(Encoding::Decimal);
        for fixed in [true, false] {
            let holder = placeholders_for_key::<C, N>(&vk, n, fixed).unwrap();
            let assignment =
                convert_proof_for_recursion::<C, N>(&vk, &proof, &signals, fixed).unwrap();

            assert!(holder.accepts(&assignment), "n = {n}, fixed = {fixed}");
            assert_eq!(holder.witness.public.len(), n);
            assert_eq!(assignment.public_inputs.public.len(), n);
            assert_eq!(holder.vk.ic.len(), n + 1);
            match &assignment.vk {
                Some(key) => {
                    assert!(!fixed);
                    assert_eq!(key.ic.len(), holder.vk.ic.len());
                    assert_eq!(key.allocation, KeyAllocation::Witness);
                }
                None => assert!(fixed),
            }
        }
    }
}

fn placeholder_modes<C: CurveProfile, N: PrimeField>() {
    let fx = Fixture::<C>::new(2);
    let (vk, proof, signals) = fx.json(Encoding::Hex);

    let fixed = placeholders_for_key::<C, N>(&vk, 2, true).unwrap();
    assert_eq!(fixed.mode, VkMode::Fixed);
    assert_eq!(fixed.vk.allocation, KeyAllocation::Constant);
    let witnessed = convert_proof_for_recursion::<C, N>(&vk, &proof, &signals, false).unwrap();
    let real_vk = witnessed.vk.as_ref().unwrap();
    // Constants carry the real key.
    assert_eq!(fixed.vk.ic, real_vk.ic);
    assert_eq!(fixed.vk.alpha_beta, real_vk.alpha_beta);

    let holder = placeholders_for_key::<C, N>(&vk, 2, false).unwrap();
    assert_eq!(holder.mode, VkMode::Witness);
    assert_eq!(holder.vk.ic.len(), 3);
    assert!(holder.vk.ic.iter().all(|p| p.x.value() == BigUint::from(0u8)));
    assert!(holder.proof.a.x.limbs().iter().all(Zero::is_zero));

    // A fixed-mode assignment does not fit witness-mode placeholders.
    let fixed_assignment =
        convert_proof_for_recursion::<C, N>(&vk, &proof, &signals, true).unwrap();
    assert!(!holder.accepts(&fixed_assignment));
    assert!(fixed.accepts(&fixed_assignment));
}

fn alpha_beta_is_the_pairing<C: CurveProfile, N: PrimeField>() {
    let fx = Fixture::<C>::new(1);
    let (vk, proof, signals) = fx.json(Encoding::Decimal);
    let assignment = convert_proof_for_recursion::<C, N>(&vk, &proof, &signals, false).unwrap();
    let expected = C::Engine::pairing(fx.vk.alpha_g1, fx.vk.beta_g2).0;
    let coeffs = C::gt_coefficients(&expected);
    let key = assignment.vk.unwrap();
    let encoded = &key.alpha_beta.coefficients;
    assert_eq!(encoded.len(), 12);
    for (limbs, coeff) in encoded.iter().zip(&coeffs) {
        assert_eq!(limbs.value(), c2a_convert::curve::field_to_biguint(coeff));
    }
}

/// IC of length 4 with nPublic 3 is consistent. With nPublic 5 the key still
/// parses and prepares, and the mismatch only surfaces when inputs meet it.
fn n_public_boundary<C: CurveProfile, N: PrimeField>() {
    let fx = Fixture::<C>::new(3);
    let (vk, proof, signals) = fx.json(Encoding::Decimal);

    let model = parse_verifying_key(&vk).unwrap();
    assert_eq!(model.ic.len(), 4);
    assert_eq!(model.n_public, 3);
    assert!(model.ic_matches_n_public());
    assert!(verify_proof::<C>(&vk, &proof, &fx.signals(Encoding::Decimal)).unwrap());

    let mut skewed = model.clone();
    skewed.n_public = 5;
    let skewed_json = serde_json::to_vec(&skewed).unwrap();
    let reparsed = parse_verifying_key(&skewed_json).unwrap();
    assert!(!reparsed.ic_matches_n_public());
    let key = vk_to_native::<C>(&reparsed).unwrap();
    assert_eq!(key.n_public(), 5);
    assert_eq!(key.ic_len(), 4);

    let err = verify_proof::<C>(&skewed_json, &proof, &fx.signals(Encoding::Decimal)).unwrap_err();
    assert!(matches!(err, ConvertError::ShapeMismatch { expected: 5, actual: 3, .. }), "{err}");
    let err =
        convert_proof_for_recursion::<C, N>(&skewed_json, &proof, &signals, true).unwrap_err();
    assert!(matches!(err, ConvertError::ShapeMismatch { .. }), "{err}");

    // Five signals satisfy nPublic but not IC.
    let five: Vec<String> = (1..=5).map(|i| i.to_string()).collect();
    let err = verify_proof::<C>(&skewed_json, &proof, &five).unwrap_err();
    assert!(matches!(err, ConvertError::ShapeMismatch { expected: 3, actual: 5, .. }), "{err}");
}

fn prepared_key_is_shared<C: CurveProfile>() {
    let fx = Fixture::<C>::new(1);
    let key = Arc::new(c2a_convert::PreparedKey::<C>::prepare(fx.vk.clone(), 1).unwrap());
    let proof = fx.proof.clone();
    let inputs = fx.inputs.clone();

    let handles: Vec<_> = (0..2)
        .map(|_| {
            let key = Arc::clone(&key);
            let proof = proof.clone();
            let inputs = inputs.clone();
            thread::spawn(move || key.verify(&proof, &inputs))
        })
        .collect();
    for h in handles {
        assert!(h.join().unwrap().unwrap());
    }
}

/// One prepared key serves many assignments across threads.
fn assignments_from_shared_key<C: CurveProfile, N: PrimeField>() {
    let fx = Fixture::<C>::new(2);
    let key = Arc::new(PreparedKey::<C>::prepare(fx.vk.clone(), 2).unwrap());

    let handles: Vec<_> = [Encoding::Decimal, Encoding::Hex]
        .into_iter()
        .flat_map(|encoding| [(encoding, VkMode::Fixed), (encoding, VkMode::Witness)])
        .map(|(encoding, mode)| {
            let key = Arc::clone(&key);
            let proof = export_proof::<C>(&fx.proof, encoding);
            let signals = fx.signals(encoding);
            let (vk, proof_json, signals_json) = fx.json(encoding);
            thread::spawn(move || {
                let shared = RecursionAssignment::<C, N>::build(&key, &proof, &signals, mode);
                let fresh = convert_proof_for_recursion::<C, N>(
                    &vk,
                    &proof_json,
                    &signals_json,
                    mode == VkMode::Fixed,
                );
                (shared.unwrap(), fresh.unwrap())
            })
        })
        .collect();
    for h in handles {
        let (shared, fresh) = h.join().unwrap();
        assert_eq!(shared, fresh);
    }

    let proof = export_proof::<C>(&fx.proof, Encoding::Decimal);
    let short = &fx.signals(Encoding::Decimal)[..1];
    let err = RecursionAssignment::<C, N>::build(&key, &proof, short, VkMode::Fixed).unwrap_err();
    assert!(matches!(err, ConvertError::ShapeMismatch { expected: 2, actual: 1, .. }), "{err}");
}

fn identity_alpha_fails_precompute<C: CurveProfile>() {
    let fx = Fixture::<C>::new(1);
    let mut model = export_verifying_key::<C>(&fx.vk, Encoding::Decimal);
    model.vk_alpha_1 = vec!["0".into(), "0".into(), "1".into()];
    let err = vk_to_native::<C>(&model).unwrap_err();
    assert!(matches!(err, ConvertError::Precompute(_)), "{err}");
}

macro_rules! pipeline_tests {
    ($module:ident, $curve:ty, $outer:ty) => {
        mod $module {
            use super::*;

            type C = $curve;
            type N = $outer;

            #[test]
            fn test_genuine_proof_verifies() {
                genuine_proof_verifies::<C>();
            }

            #[test]
            fn test_mutated_proof_rejected() {
                mutated_proof_rejected::<C>();
            }

            #[test]
            fn test_wrong_public_input() {
                wrong_public_input_is_verification_error::<C>();
            }

            #[test]
            fn test_hex_and_decimal_agree() {
                hex_and_decimal_agree::<C>();
            }

            #[test]
            fn test_conversion_is_idempotent() {
                conversion_is_idempotent::<C, N>();
            }

            #[test]
            fn test_placeholders_match_assignments() {
                placeholders_match_assignments::<C, N>();
            }

            #[test]
            fn test_placeholder_modes() {
                placeholder_modes::<C, N>();
            }

            #[test]
            fn test_alpha_beta_is_the_pairing() {
                alpha_beta_is_the_pairing::<C, N>();
            }

            #[test]
            fn test_n_public_boundary() {
                n_public_boundary::<C, N>();
            }

            #[test]
            fn test_prepared_key_is_shared() {
                prepared_key_is_shared::<C>();
            }

            #[test]
            fn test_assignments_from_shared_key() {
                assignments_from_shared_key::<C, N>();
            }

            #[test]
            fn test_identity_alpha_fails_precompute() {
                identity_alpha_fails_precompute::<C>();
            }
        }
    };
}

pipeline_tests!(bn254, c2a_convert::Bn254, ark_bn254::Fr);
pipeline_tests!(bls12_381, c2a_convert::Bls12_381, ark_bn254::Fr);

#[test]
fn test_key_for_other_curve_rejected() {
    let fx = Fixture::<c2a_convert::Bn254>::new(1);
    let (vk, proof, _) = fx.json(Encoding::Decimal);
    let signals = fx.signals(Encoding::Decimal);
    assert!(verify_proof::<c2a_convert::Bls12_381>(&vk, &proof, &signals).is_err());
}
