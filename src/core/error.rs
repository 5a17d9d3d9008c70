// src/core/error.rs

//! Error types for the selection core.
//!
//! None of these ever escape `collect_scan_results`: filter and security
//! failures are folded into the report. They surface only from the
//! fallible constructors and loaders.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised when building a [`ScanFilter`](crate::core::selection::filter::ScanFilter)
/// with [`try_new`](crate::core::selection::filter::ScanFilter::try_new).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanFilterError {
    /// The BSSID filter is not six colon-separated hex pairs.
    #[error("invalid BSSID filter '{input}': expected aa:bb:cc:dd:ee:ff")]
    InvalidBssid { input: String },
}

/// Errors raised while decoding or evaluating an RSN element.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RsnError {
    #[error("RSN element is empty")]
    Empty,

    #[error("unexpected element id {0}, expected 48")]
    WrongElementId(u8),

    #[error("RSN length byte says {declared} but {actual} bytes follow")]
    LengthMismatch { declared: usize, actual: usize },

    #[error("unsupported RSN version {0}")]
    UnsupportedVersion(u16),

    #[error("RSN element truncated while reading {field}")]
    Truncated { field: &'static str },

    /// Raised by evaluators that cannot make a decision at all.
    #[error("security evaluator failure: {0}")]
    Evaluator(String),
}

/// Errors raised when reading a scan batch from disk.
#[derive(Error, Debug)]
pub enum ScanLoadError {
    #[error("failed to read scan batch {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode scan batch {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
