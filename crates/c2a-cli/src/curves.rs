//! Runtime curve names and the dispatch from a name to a curve profile.

use std::fmt;

use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::output;

/// Inner proof curve, or the curve whose scalar field an outer circuit uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum CurveName {
    #[value(name = "bn254")]
    #[serde(rename = "bn254")]
    Bn254,
    #[value(name = "bls12-381")]
    #[serde(rename = "bls12-381")]
    Bls12_381,
}

impl CurveName {
    /// Curve for a snarkjs `curve` tag.
    pub fn from_snarkjs_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "bn128" | "bn254" | "altbn128" => Some(CurveName::Bn254),
            "bls12381" | "bls12-381" | "bls12_381" => Some(CurveName::Bls12_381),
            _ => None,
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        <Self as ValueEnum>::from_str(s, true).map_err(|_| {
            output::fail_with_hint(
                &format!("unknown curve: {s}"),
                "expected one of: bn254, bls12-381",
            )
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CurveName::Bn254 => "bn254",
            CurveName::Bls12_381 => "bls12-381",
        }
    }
}

impl fmt::Display for CurveName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `--curve` wins, then the key's own tag, then the configured default.
pub fn resolve_curve(
    flag: Option<CurveName>,
    key_tag: Option<&str>,
    default: CurveName,
) -> Result<CurveName> {
    if let Some(curve) = flag {
        return Ok(curve);
    }
    match key_tag.map(str::trim).filter(|t| !t.is_empty()) {
        None => Ok(default),
        Some(tag) => CurveName::from_snarkjs_tag(tag).ok_or_else(|| {
            output::fail_with_hint(
                &format!("unsupported curve in verification key: {tag}"),
                "pass --curve bn254 or --curve bls12-381",
            )
        }),
    }
}

/// Bind `$profile` to the `c2a_convert` curve profile named by `$curve`.
macro_rules! with_curve {
    ($curve:expr, $profile:ident => $body:expr) => {
        match $curve {
            $crate::curves::CurveName::Bn254 => {
                type $profile = c2a_convert::Bn254;
                $body
            }
            $crate::curves::CurveName::Bls12_381 => {
                type $profile = c2a_convert::Bls12_381;
                $body
            }
        }
    };
}

/// Bind `$field` to the scalar field of the curve named by `$curve`.
macro_rules! with_circuit_field {
    ($curve:expr, $field:ident => $body:expr) => {
        match $curve {
            $crate::curves::CurveName::Bn254 => {
                type $field = ark_bn254::Fr;
                $body
            }
            $crate::curves::CurveName::Bls12_381 => {
                type $field = ark_bls12_381::Fr;
                $body
            }
        }
    };
}

pub(crate) use {with_circuit_field, with_curve};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snarkjs_tags() {
        assert_eq!(CurveName::from_snarkjs_tag("bn128"), Some(CurveName::Bn254));
        assert_eq!(CurveName::from_snarkjs_tag(" BLS12381 "), Some(CurveName::Bls12_381));
        assert_eq!(CurveName::from_snarkjs_tag("bls12377"), None);
    }

    #[test]
    fn test_resolution_order() {
        let default = CurveName::Bn254;
        assert_eq!(
            resolve_curve(Some(CurveName::Bn254), Some("bls12381"), default).unwrap(),
            CurveName::Bn254
        );
        assert_eq!(
            resolve_curve(None, Some("bls12381"), default).unwrap(),
            CurveName::Bls12_381
        );
        assert_eq!(resolve_curve(None, Some(""), default).unwrap(), default);
        assert_eq!(resolve_curve(None, None, CurveName::Bls12_381).unwrap(), CurveName::Bls12_381);
        assert!(resolve_curve(None, Some("secp256k1"), default).is_err());
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(CurveName::parse("bls12-381").unwrap(), CurveName::Bls12_381);
        assert_eq!(CurveName::parse("BN254").unwrap(), CurveName::Bn254);
        assert!(CurveName::parse("bn128x").is_err());
        assert_eq!(CurveName::Bls12_381.to_string(), "bls12-381");
    }

    #[test]
    fn test_dispatch_binds_profile() {
        use c2a_convert::CurveProfile;
        let width = with_curve!(CurveName::Bls12_381, C => C::COORDINATE_BYTES);
        assert_eq!(width, 48);
        let bits = with_circuit_field!(CurveName::Bn254, F => {
            <F as ark_ff::PrimeField>::MODULUS_BIT_SIZE
        });
        assert_eq!(bits, 254);
    }
}
