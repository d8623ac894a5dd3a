// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! String coordinates → validated affine curve points.
//!
//! # Wire layout
//!
//! Coordinates are first packed into a big-endian buffer, each field
//! `C::COORDINATE_BYTES` wide, then read back as a point:
//!
//! - **G1**: `x | y`
//! - **G2**: `x.c1 | x.c0 | y.c1 | y.c0`
//!
//! All-zero coordinates denote the identity. Bytes past the point (from a
//! projective third coordinate) are ignored.
//!
//! Hex input may also carry gnark's flag bits in the top of the first byte.
//! `0b01` there with every other bit clear is the identity; compressed
//! points are rejected.
//!
//! # Encodings
//!
//! The encoding is chosen once per point from its first coordinate. Hex
//! producers already emit G2 limbs in wire order (`[c1, c0]` per row);
//! decimal producers (snarkjs) emit `[c0, c1]`, so the decimal branch swaps
//! the limbs of each row while packing.

use ark_ec::AffineRepr;
use c2a_types::codec;

use crate::curve::{field_from_be_bytes, CurveProfile, G1, G2};
use crate::error::{ConvertError, ConvertResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Hex,
    Decimal,
}

impl Encoding {
    pub fn detect(first: &str) -> Self {
        let first = first.trim_start();
        if first.len() > 2 && first.starts_with("0x") {
            Encoding::Hex
        } else {
            Encoding::Decimal
        }
    }
}

fn coordinate_bytes<C: CurveProfile>(
    s: &str,
    encoding: Encoding,
    field: &str,
) -> ConvertResult<Vec<u8>> {
    let bytes = match encoding {
        Encoding::Hex => {
            codec::decode_hex(s).and_then(|b| codec::left_pad(b, C::COORDINATE_BYTES))
        }
        Encoding::Decimal => codec::to_fixed_bytes(s, C::COORDINATE_BYTES),
    };
    bytes.map_err(|e| ConvertError::codec(field, e))
}

const FLAG_INFINITY: u8 = 0b0100_0000;
const FLAG_COMPRESSED: u8 = 0b1000_0000;

/// `true` when `point` is gnark's flagged identity.
fn flagged_infinity<C: CurveProfile>(field: &str, point: &[u8]) -> ConvertResult<bool> {
    let Some((&first, rest)) = point.split_first() else {
        return Ok(false);
    };
    let flags = first & C::FLAG_MASK;
    if flags & FLAG_COMPRESSED != 0 {
        return Err(ConvertError::point(field, "compressed point encodings are not supported"));
    }
    if flags != FLAG_INFINITY {
        return Ok(false);
    }
    if first & !C::FLAG_MASK != 0 || rest.iter().any(|b| *b != 0) {
        return Err(ConvertError::point(field, "infinity flag set on a non-zero point"));
    }
    Ok(true)
}

fn wire_coordinate<C: CurveProfile>(bytes: &[u8], field: &str) -> ConvertResult<C::Fq> {
    field_from_be_bytes(bytes)
        .ok_or_else(|| ConvertError::point(field, "coordinate exceeds the base field modulus"))
}

/// Pack G1 coordinates into wire layout.
pub fn g1_wire<C: CurveProfile>(field: &str, coords: &[String]) -> ConvertResult<Vec<u8>> {
    if coords.len() < 2 {
        return Err(ConvertError::point(
            field,
            format!("expected at least 2 coordinates, got {}", coords.len()),
        ));
    }
    let encoding = Encoding::detect(&coords[0]);
    let mut wire = Vec::with_capacity(coords.len() * C::COORDINATE_BYTES);
    for c in coords {
        wire.extend(coordinate_bytes::<C>(c, encoding, field)?);
    }
    Ok(wire)
}

/// Pack G2 coordinates into wire layout.
pub fn g2_wire<C: CurveProfile>(field: &str, coords: &[Vec<String>]) -> ConvertResult<Vec<u8>> {
    if coords.len() < 2 || coords[0].len() < 2 || coords[1].len() < 2 {
        return Err(ConvertError::point(field, "expected 2x2 coordinates"));
    }
    let encoding = Encoding::detect(&coords[0][0]);
    let mut wire = Vec::with_capacity(4 * C::COORDINATE_BYTES);
    match encoding {
        Encoding::Hex => {
            for c in coords.iter().flatten() {
                wire.extend(coordinate_bytes::<C>(c, encoding, field)?);
            }
        }
        Encoding::Decimal => {
            let limbs = [&coords[0][1], &coords[0][0], &coords[1][1], &coords[1][0]];
            for c in limbs {
                wire.extend(coordinate_bytes::<C>(c, encoding, field)?);
            }
        }
    }
    Ok(wire)
}

/// Read a G1 point from wire layout.
pub fn g1_from_wire<C: CurveProfile>(field: &str, wire: &[u8]) -> ConvertResult<G1<C>> {
    let w = C::COORDINATE_BYTES;
    if wire.len() < 2 * w {
        return Err(ConvertError::point(field, "buffer shorter than one G1 point"));
    }
    let x = wire_coordinate::<C>(&wire[..w], field)?;
    let y = wire_coordinate::<C>(&wire[w..2 * w], field)?;
    C::g1_from_xy(x, y)
        .ok_or_else(|| ConvertError::point(field, "not a point in the G1 subgroup"))
}

/// Read a G2 point from wire layout.
pub fn g2_from_wire<C: CurveProfile>(field: &str, wire: &[u8]) -> ConvertResult<G2<C>> {
    let w = C::COORDINATE_BYTES;
    if wire.len() < 4 * w {
        return Err(ConvertError::point(field, "buffer shorter than one G2 point"));
    }
    let limb = |i: usize| wire_coordinate::<C>(&wire[i * w..(i + 1) * w], field);
    let x = [limb(1)?, limb(0)?];
    let y = [limb(3)?, limb(2)?];
    C::g2_from_xy(x, y)
        .ok_or_else(|| ConvertError::point(field, "not a point in the G2 subgroup"))
}

pub fn decode_g1<C: CurveProfile>(field: &str, coords: &[String]) -> ConvertResult<G1<C>> {
    let wire = g1_wire::<C>(field, coords)?;
    if Encoding::detect(&coords[0]) == Encoding::Hex
        && flagged_infinity::<C>(field, &wire[..2 * C::COORDINATE_BYTES])?
    {
        return Ok(G1::<C>::zero());
    }
    g1_from_wire::<C>(field, &wire)
}

pub fn decode_g2<C: CurveProfile>(field: &str, coords: &[Vec<String>]) -> ConvertResult<G2<C>> {
    let wire = g2_wire::<C>(field, coords)?;
    if Encoding::detect(&coords[0][0]) == Encoding::Hex
        && flagged_infinity::<C>(field, &wire[..4 * C::COORDINATE_BYTES])?
    {
        return Ok(G2::<C>::zero());
    }
    g2_from_wire::<C>(field, &wire)
}
