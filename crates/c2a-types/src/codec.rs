// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Decimal / `0x`-hex integer strings → big integers and fixed-width bytes.
//!
//! Every numeric value in a snarkjs artifact is a string: either a base-10
//! integer or a `0x`-prefixed base-16 integer. Curve point decoders need
//! each coordinate as a big-endian buffer of exactly the field width, so
//! [`to_fixed_bytes`] left-pads short values with zeros and rejects values
//! that do not fit.

use num_bigint::BigUint;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("malformed integer {input:?}")]
    Malformed { input: String },

    #[error("value is {len} bytes, limit is {limit}")]
    TooLarge { len: usize, limit: usize },
}

/// Parse a decimal or `0x`-prefixed hex string.
///
/// Surrounding whitespace is ignored. Signs, underscores and empty digit
/// strings are rejected.
pub fn parse_integer(s: &str) -> Result<BigUint, CodecError> {
    let s = s.trim();
    let malformed = || CodecError::Malformed { input: s.to_string() };

    let (digits, radix) = match s.strip_prefix("0x") {
        Some(hex) => (hex, 16),
        None => (s, 10),
    };
    let valid = !digits.is_empty()
        && digits.bytes().all(|b| match radix {
            16 => b.is_ascii_hexdigit(),
            _ => b.is_ascii_digit(),
        });
    if !valid {
        return Err(malformed());
    }
    BigUint::parse_bytes(digits.as_bytes(), radix).ok_or_else(malformed)
}

/// Decode the digits of a hex string (prefix optional) into raw bytes.
///
/// Odd-length input is treated as if it had a leading `0` nibble.
pub fn decode_hex(s: &str) -> Result<Vec<u8>, CodecError> {
    let s = s.trim();
    let digits = s.strip_prefix("0x").unwrap_or(s);
    let decoded = if digits.len() % 2 == 1 {
        hex::decode(format!("0{digits}"))
    } else {
        hex::decode(digits)
    };
    decoded.map_err(|_| CodecError::Malformed { input: s.to_string() })
}

/// Big-endian bytes of `s`, left-padded with zeros to exactly `size` bytes.
///
/// `0x` input is hex-decoded as-is (leading zero bytes count towards the
/// length); decimal input uses the minimal big-endian encoding.
pub fn to_fixed_bytes(s: &str, size: usize) -> Result<Vec<u8>, CodecError> {
    let s = s.trim();
    let bytes = if s.starts_with("0x") {
        decode_hex(s)?
    } else {
        let n = parse_integer(s)?;
        if n.bits() == 0 {
            Vec::new()
        } else {
            n.to_bytes_be()
        }
    };
    left_pad(bytes, size)
}

/// Left-pad `bytes` with zeros to `size`, failing if it is already longer.
pub fn left_pad(bytes: Vec<u8>, size: usize) -> Result<Vec<u8>, CodecError> {
    if bytes.len() > size {
        return Err(CodecError::TooLarge {
            len: bytes.len(),
            limit: size,
        });
    }
    let mut padded = vec![0u8; size - bytes.len()];
    padded.extend_from_slice(&bytes);
    Ok(padded)
}
