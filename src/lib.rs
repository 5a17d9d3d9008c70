//! Post-processing of WLAN scan results.
//!
//! A scan batch goes through [`collect_scan_results`], which keeps the
//! entries matching a [`ScanFilter`], flags each one as compatible or not
//! through a [`SecurityEvaluator`], and ranks them by signed RSSI.

pub mod config;
pub mod core;
pub mod logging;

pub use crate::core::error::{RsnError, ScanFilterError, ScanLoadError};
pub use crate::core::models::{AccessPoint, BssDescription, BssidId, ScanConfirm, ScanNotice, ScanReport, UNKNOWN_RSSI};
pub use crate::core::rsne::{Rsne, Wpa2PersonalEvaluator, describe_security};
pub use crate::core::selection::compatibility::{SecurityEvaluator, is_bss_compatible};
pub use crate::core::selection::diagnostics::{ScanDiagnostics, TracingDiagnostics};
pub use crate::core::selection::filter::{ScanFilter, filter_scan_results};
pub use crate::core::selection::ranking::{compare_rssi, sort_by_rssi};
pub use crate::core::selection::{collect_scan_results, load_scan_confirm};
