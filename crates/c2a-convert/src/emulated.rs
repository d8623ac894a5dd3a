// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Emulated (non-native) field and group encodings for an outer circuit.
//!
//! An outer verifier circuit over native field `N` cannot hold a
//! base-field or scalar-field element of the inner curve directly. Each such
//! value is split into little-endian 64-bit limbs, every limb stored as an
//! element of `N`. The limb count depends only on the target field, so a
//! zero element and a real one always have the same shape.

use std::marker::PhantomData;

use ark_ff::{PrimeField, Zero};
use num_bigint::BigUint;
use serde::ser::{SerializeSeq, Serializer};
use serde::Serialize;

use crate::curve::{field_to_biguint, CurveProfile, Gt, G1, G2};

pub const LIMB_BITS: usize = 64;

/// Number of limbs used for any element of `T`.
pub fn limb_count<T: PrimeField>() -> usize {
    T::zero().into_bigint().as_ref().len()
}

/// `T` element as 64-bit limbs in the outer field `N`, least significant first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmulatedElement<T, N> {
    limbs: Vec<N>,
    _target: PhantomData<T>,
}

impl<T: PrimeField, N: PrimeField> EmulatedElement<T, N> {
    pub fn new(value: &T) -> Self {
        debug_assert!(N::MODULUS_BIT_SIZE as usize > LIMB_BITS);
        let limbs = value
            .into_bigint()
            .as_ref()
            .iter()
            .map(|&word| N::from(word))
            .collect();
        Self {
            limbs,
            _target: PhantomData,
        }
    }

    pub fn zero() -> Self {
        Self {
            limbs: vec![N::zero(); limb_count::<T>()],
            _target: PhantomData,
        }
    }

    pub fn limbs(&self) -> &[N] {
        &self.limbs
    }

    /// Recombine the limbs into the integer they encode.
    pub fn value(&self) -> BigUint {
        self.limbs
            .iter()
            .rev()
            .fold(BigUint::zero(), |acc, limb| (acc << LIMB_BITS) + field_to_biguint(limb))
    }
}

impl<T: PrimeField, N: PrimeField> Serialize for EmulatedElement<T, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.limbs.len()))?;
        for limb in &self.limbs {
            seq.serialize_element(&field_to_biguint(limb).to_string())?;
        }
        seq.end()
    }
}

pub type EmulatedBase<C, N> = EmulatedElement<<C as CurveProfile>::Fq, N>;
pub type EmulatedScalar<C, N> = EmulatedElement<<C as CurveProfile>::Fr, N>;

/// G1 point; the identity is `(0, 0)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(bound = "")]
pub struct EmulatedG1<C: CurveProfile, N: PrimeField> {
    pub x: EmulatedBase<C, N>,
    pub y: EmulatedBase<C, N>,
}

impl<C: CurveProfile, N: PrimeField> EmulatedG1<C, N> {
    pub fn new(p: &G1<C>) -> Self {
        match C::g1_xy(p) {
            Some((x, y)) => Self {
                x: EmulatedElement::new(&x),
                y: EmulatedElement::new(&y),
            },
            None => Self::zero(),
        }
    }

    pub fn zero() -> Self {
        Self {
            x: EmulatedElement::zero(),
            y: EmulatedElement::zero(),
        }
    }
}

/// G2 point as `[c0, c1]` pairs; the identity is all zeros.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(bound = "")]
pub struct EmulatedG2<C: CurveProfile, N: PrimeField> {
    pub x: [EmulatedBase<C, N>; 2],
    pub y: [EmulatedBase<C, N>; 2],
}

impl<C: CurveProfile, N: PrimeField> EmulatedG2<C, N> {
    pub fn new(p: &G2<C>) -> Self {
        match C::g2_xy(p) {
            Some((x, y)) => Self::from_coordinates(x, y),
            None => Self::zero(),
        }
    }

    /// Encoding of `-p`.
    pub fn negated(p: &G2<C>) -> Self {
        match C::g2_xy(p) {
            Some((x, y)) => Self::from_coordinates(x, [-y[0], -y[1]]),
            None => Self::zero(),
        }
    }

    fn from_coordinates(x: [C::Fq; 2], y: [C::Fq; 2]) -> Self {
        Self {
            x: x.map(|c| EmulatedElement::new(&c)),
            y: y.map(|c| EmulatedElement::new(&c)),
        }
    }

    pub fn zero() -> Self {
        Self {
            x: [EmulatedElement::zero(), EmulatedElement::zero()],
            y: [EmulatedElement::zero(), EmulatedElement::zero()],
        }
    }
}

/// Target-group element as its flattened base-field coefficients.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(bound = "")]
pub struct EmulatedGt<C: CurveProfile, N: PrimeField> {
    pub coefficients: Vec<EmulatedBase<C, N>>,
}

impl<C: CurveProfile, N: PrimeField> EmulatedGt<C, N> {
    pub fn new(gt: &Gt<C>) -> Self {
        Self {
            coefficients: C::gt_coefficients(gt)
                .iter()
                .map(EmulatedElement::new)
                .collect(),
        }
    }
}
