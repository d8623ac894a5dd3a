// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Typed errors for every conversion step.

use c2a_types::{CodecError, FormatError};

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("{field}: {source}")]
    Parse {
        field: String,
        #[source]
        source: CodecError,
    },

    #[error("{field}: coordinate is {len} bytes, field width is {limit}")]
    Size {
        field: String,
        len: usize,
        limit: usize,
    },

    #[error("{field}: {reason}")]
    PointDecode { field: String, reason: String },

    #[error("verifying key precomputation failed: {0}")]
    Precompute(String),

    #[error("proof verification failed: {0}")]
    Verification(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{what}: expected {expected}, got {actual}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl ConvertError {
    /// Attach a field label to a codec failure, splitting size overflows
    /// out of plain parse errors.
    pub(crate) fn codec(field: impl Into<String>, err: CodecError) -> Self {
        let field = field.into();
        match err {
            CodecError::TooLarge { len, limit } => Self::Size { field, len, limit },
            source => Self::Parse { field, source },
        }
    }

    pub(crate) fn point(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::PointDecode {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type ConvertResult<T> = Result<T, ConvertError>;
