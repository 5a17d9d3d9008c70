// src/core/mod.rs

// The `core` module holds everything that is independent of the terminal
// front end: the data model, the selection pipeline and the RSN decoder.

/// Scan batch, candidate AP and report types shared across the crate.
pub mod models;

/// Typed errors for filter construction, RSN decoding and batch loading.
pub mod error;

/// Filtering, compatibility classification and RSSI ranking of scan results.
pub mod selection;

/// RSN element decoding and the default WPA2-Personal evaluator.
pub mod rsne;
