//! Contract error taxonomy
//!
//! Every validation failure is local and non-fatal: the caller drops the
//! frame or rejects the settings change. Nothing here is retryable.

use thiserror::Error;

use crate::schema::SimulationKind;

/// Result alias used throughout the crate.
pub type ContractResult<T> = Result<T, ContractError>;

#[derive(Debug, Error)]
pub enum ContractError {
    /// Parallel per-particle sequences disagree in length
    #[error("shape mismatch: `{field}` has {actual} entries, expected {expected}")]
    ShapeMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A declared-positive scalar is zero, negative or not finite
    #[error("invalid scalar `{field}` = {value}")]
    InvalidScalar { field: String, value: f64 },

    #[error("invalid color at index {index}: {value:?}")]
    InvalidColor { index: usize, value: String },

    #[error("body count {declared} does not match body list length {actual}")]
    CountMismatch { declared: usize, actual: usize },

    #[error("`{field}` index {index} out of range 0..{len}")]
    IndexOutOfRange {
        field: String,
        index: i64,
        len: usize,
    },

    /// A contact pair references the same body twice
    #[error("contact pair {pair} references body {body} twice")]
    SelfPair { pair: usize, body: i64 },

    /// Mass or inertia inverse inconsistent with `isStatic`
    #[error("body {body}: `{field}` is {actual}, expected {expected}")]
    InertiaMismatch {
        body: usize,
        field: &'static str,
        expected: f64,
        actual: f64,
    },

    #[error("`{field}` = {value} outside [{min}, {max}]")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("unknown visual filter code {0}")]
    UnknownFilterCode(u8),

    #[error("non-finite value in `{field}` at index {index}")]
    NonFinite { field: String, index: usize },

    #[error("body {body}: bounding box min {min:?} exceeds max {max:?}")]
    InvalidAabb {
        body: usize,
        min: (f32, f32),
        max: (f32, f32),
    },

    #[error("body at position {position} carries index {index}")]
    BodyIndexMismatch { position: usize, index: i64 },

    #[error("{what} does not belong to the {kind} simulation")]
    KindMismatch {
        kind: SimulationKind,
        what: &'static str,
    },

    #[error("unknown event {0:?}")]
    UnknownEvent(String),

    #[error("event {0:?} requires a payload")]
    MissingPayload(String),

    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ContractError {
    pub(crate) fn scalar(field: impl Into<String>, value: f32) -> Self {
        Self::InvalidScalar {
            field: field.into(),
            value: f64::from(value),
        }
    }

    pub(crate) fn out_of_range(field: impl Into<String>, value: f64, min: f64, max: f64) -> Self {
        Self::OutOfRange {
            field: field.into(),
            value,
            min,
            max,
        }
    }

    /// Short machine-friendly name of the variant, used in diagnostics
    pub fn code(&self) -> &'static str {
        match self {
            Self::ShapeMismatch { .. } => "ShapeMismatch",
            Self::InvalidScalar { .. } => "InvalidScalar",
            Self::InvalidColor { .. } => "InvalidColor",
            Self::CountMismatch { .. } => "CountMismatch",
            Self::IndexOutOfRange { .. } => "IndexOutOfRange",
            Self::SelfPair { .. } => "SelfPair",
            Self::InertiaMismatch { .. } => "InertiaMismatch",
            Self::OutOfRange { .. } => "OutOfRange",
            Self::UnknownFilterCode(_) => "UnknownFilterCode",
            Self::NonFinite { .. } => "NonFinite",
            Self::InvalidAabb { .. } => "InvalidAabb",
            Self::BodyIndexMismatch { .. } => "BodyIndexMismatch",
            Self::KindMismatch { .. } => "KindMismatch",
            Self::UnknownEvent(_) => "UnknownEvent",
            Self::MissingPayload(_) => "MissingPayload",
            Self::Decode(_) => "Decode",
            Self::Io(_) => "Io",
        }
    }
}
