// src/core/selection/mod.rs

// Public surface of the selection pipeline: filter, classify, rank.
pub mod compatibility;
pub mod diagnostics;
pub mod filter;
pub mod ranking;

use std::path::Path;

use chrono::Utc;
use tracing::{debug, info};

use crate::core::error::ScanLoadError;
use crate::core::models::{ScanConfirm, ScanNotice, ScanReport};
use self::compatibility::SecurityEvaluator;
use self::diagnostics::ScanDiagnostics;
use self::filter::{ScanFilter, filter_scan_results};
use self::ranking::sort_by_rssi;

/// Turns a scan-confirmation batch into a ranked list of candidate APs.
///
/// Entries are filtered in scan order, each survivor is classified against
/// `evaluator`, and the result is sorted strongest first with ties left in
/// scan order. Compatibility plays no part in the ranking.
///
/// # Arguments
/// * `resp` - The batch delivered by the scan source.
/// * `filter` - SSID / BSSID criteria.
/// * `evaluator` - Decides whether protected networks can be joined.
/// * `diagnostics` - Receives the "nothing matched" notice.
pub fn collect_scan_results(
    resp: &ScanConfirm,
    filter: &ScanFilter,
    evaluator: &dyn SecurityEvaluator,
    diagnostics: &dyn ScanDiagnostics,
) -> ScanReport {
    let scanned = resp.bss_description_set.len();

    // Capture the notice for the report while still forwarding it.
    let notice = std::cell::Cell::new(None);
    let forward = |n: &ScanNotice| {
        notice.set(Some(*n));
        diagnostics.notice(n);
    };

    let mut aps = filter_scan_results(&resp.bss_description_set, filter, &forward);
    for ap in aps.iter_mut() {
        ap.classify(evaluator);
    }
    sort_by_rssi(&mut aps);

    let compatible = aps.iter().filter(|ap| ap.is_compatible()).count();
    info!(scanned, matched = aps.len(), compatible, "Scan results collected.");

    ScanReport {
        generated_at: Utc::now(),
        scanned,
        access_points: aps,
        notice: notice.get(),
    }
}

/// Reads a JSON scan batch from disk.
pub fn load_scan_confirm(path: &Path) -> Result<ScanConfirm, ScanLoadError> {
    debug!(path = %path.display(), "Loading scan batch.");
    let content = std::fs::read_to_string(path).map_err(|source| ScanLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ScanLoadError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
