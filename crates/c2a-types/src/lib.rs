// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Source-side types for circom2ark: the snarkjs JSON schema and the
//! numeric string codec shared by every decoder.

pub mod codec;
pub mod snarkjs;

pub use codec::{parse_integer, to_fixed_bytes, CodecError};
pub use snarkjs::{
    parse_proof, parse_proof_and_signals, parse_public_signals, parse_verifying_key, FormatError,
    SnarkjsProof, SnarkjsVerifyingKey,
};
