// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Curve profiles: everything the converters need to know about a curve.
//!
//! The conversion logic is written once, generic over [`CurveProfile`].
//! Each supported curve is a zero-sized marker type whose impl is stamped
//! out by `curve_profile!`, so BN254 and BLS12-381 share the exact same
//! point validation and coordinate projection code.

use ark_ec::pairing::Pairing;
use ark_ff::{BigInteger, Field, PrimeField, Zero};
use num_bigint::BigUint;

pub type G1<C> = <<C as CurveProfile>::Engine as Pairing>::G1Affine;
pub type G2<C> = <<C as CurveProfile>::Engine as Pairing>::G2Affine;
pub type Gt<C> = <<C as CurveProfile>::Engine as Pairing>::TargetField;

pub trait CurveProfile: std::fmt::Debug + Copy + Eq + Default + Send + Sync + 'static {
    /// Curve tag used in snarkjs verification keys.
    const NAME: &'static str;
    /// Big-endian byte width of one base-field coordinate.
    const COORDINATE_BYTES: usize;
    /// Bits of the first wire byte that gnark reserves for point flags.
    const FLAG_MASK: u8;

    type Engine: Pairing<ScalarField = Self::Fr>;
    type Fr: PrimeField;
    type Fq: PrimeField;

    /// Affine G1 point from coordinates. `(0, 0)` is the identity; anything
    /// off the curve or outside the prime-order subgroup is rejected.
    fn g1_from_xy(x: Self::Fq, y: Self::Fq) -> Option<G1<Self>>;

    /// Affine G2 point from `[c0, c1]` coordinate pairs, validated like
    /// [`CurveProfile::g1_from_xy`].
    fn g2_from_xy(x: [Self::Fq; 2], y: [Self::Fq; 2]) -> Option<G2<Self>>;

    /// `None` for the identity.
    fn g1_xy(p: &G1<Self>) -> Option<(Self::Fq, Self::Fq)>;

    /// `None` for the identity.
    fn g2_xy(p: &G2<Self>) -> Option<([Self::Fq; 2], [Self::Fq; 2])>;

    /// Flatten a target-group element into its base-field coefficients.
    fn gt_coefficients(gt: &Gt<Self>) -> Vec<Self::Fq>;
}

macro_rules! curve_profile {
    ($(#[$meta:meta])* $profile:ident, $krate:ident, $engine:ident, $name:literal, $bytes:literal, $flags:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct $profile;

        impl CurveProfile for $profile {
            const NAME: &'static str = $name;
            const COORDINATE_BYTES: usize = $bytes;
            const FLAG_MASK: u8 = $flags;

            type Engine = $krate::$engine;
            type Fr = $krate::Fr;
            type Fq = $krate::Fq;

            fn g1_from_xy(x: Self::Fq, y: Self::Fq) -> Option<$krate::G1Affine> {
                if x.is_zero() && y.is_zero() {
                    return Some($krate::G1Affine::identity());
                }
                let p = $krate::G1Affine::new_unchecked(x, y);
                (p.is_on_curve() && p.is_in_correct_subgroup_assuming_on_curve()).then_some(p)
            }

            fn g2_from_xy(x: [Self::Fq; 2], y: [Self::Fq; 2]) -> Option<$krate::G2Affine> {
                if x.iter().chain(y.iter()).all(Zero::is_zero) {
                    return Some($krate::G2Affine::identity());
                }
                let p = $krate::G2Affine::new_unchecked(
                    $krate::Fq2::new(x[0], x[1]),
                    $krate::Fq2::new(y[0], y[1]),
                );
                (p.is_on_curve() && p.is_in_correct_subgroup_assuming_on_curve()).then_some(p)
            }

            fn g1_xy(p: &$krate::G1Affine) -> Option<(Self::Fq, Self::Fq)> {
                (!p.infinity).then_some((p.x, p.y))
            }

            fn g2_xy(p: &$krate::G2Affine) -> Option<([Self::Fq; 2], [Self::Fq; 2])> {
                (!p.infinity).then_some(([p.x.c0, p.x.c1], [p.y.c0, p.y.c1]))
            }

            fn gt_coefficients(gt: &$krate::Fq12) -> Vec<Self::Fq> {
                gt.to_base_prime_field_elements().collect()
            }
        }
    };
}

curve_profile!(
    /// BN254 (snarkjs `bn128`).
    Bn254,
    ark_bn254,
    Bn254,
    "bn128",
    32,
    0b1100_0000
);

curve_profile!(
    /// BLS12-381 (snarkjs `bls12381`).
    Bls12_381,
    ark_bls12_381,
    Bls12_381,
    "bls12381",
    48,
    0b1110_0000
);

/// Canonical integer value of a prime field element.
pub fn field_to_biguint<F: PrimeField>(f: &F) -> BigUint {
    BigUint::from_bytes_be(&f.into_bigint().to_bytes_be())
}

/// Field element from a big-endian integer, rejecting values `>= modulus`.
pub fn field_from_be_bytes<F: PrimeField>(bytes: &[u8]) -> Option<F> {
    let f = F::from_be_bytes_mod_order(bytes);
    (field_to_biguint(&f) == BigUint::from_bytes_be(bytes)).then_some(f)
}

/// Field element from an arbitrary integer, reduced modulo the field order.
pub fn field_from_biguint<F: PrimeField>(n: &BigUint) -> F {
    F::from_be_bytes_mod_order(&n.to_bytes_be())
}
