// src/core/selection/filter.rs

use tracing::{debug, warn};

use crate::core::error::ScanFilterError;
use crate::core::models::{AccessPoint, BssDescription, BssidId, ScanNotice};
use crate::core::selection::diagnostics::ScanDiagnostics;

/// How the BSSID criterion was given.
#[derive(Debug, Clone, PartialEq, Eq)]
enum BssidCriterion {
    Any,
    Exact(BssidId),
    /// Text that is not a BSSID. Matches nothing.
    Unmatchable,
}

/// Selection criteria for one filter pass. Empty text means "any".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanFilter {
    ssid: String,
    bssid: BssidCriterion,
}

impl ScanFilter {
    /// Builds a fail-closed filter: a malformed BSSID text is kept as a
    /// criterion that excludes every entry.
    pub fn new(ssid: &str, bssid: &str) -> Self {
        let criterion = match Self::parse_bssid(bssid) {
            Ok(criterion) => criterion,
            Err(e) => {
                warn!(error = %e, "BSSID filter cannot match any network.");
                BssidCriterion::Unmatchable
            }
        };
        Self { ssid: ssid.to_string(), bssid: criterion }
    }

    /// Builds a filter, rejecting a malformed BSSID text up front.
    pub fn try_new(ssid: &str, bssid: &str) -> Result<Self, ScanFilterError> {
        Ok(Self { ssid: ssid.to_string(), bssid: Self::parse_bssid(bssid)? })
    }

    /// A filter that lets everything through.
    pub fn any() -> Self {
        Self { ssid: String::new(), bssid: BssidCriterion::Any }
    }

    fn parse_bssid(text: &str) -> Result<BssidCriterion, ScanFilterError> {
        if text.is_empty() {
            return Ok(BssidCriterion::Any);
        }
        BssidId::parse(text).map(BssidCriterion::Exact)
    }

    /// BSSID first, then SSID. The SSID comparison is byte-exact.
    pub fn matches(&self, bss: &BssDescription) -> bool {
        let bssid_ok = match &self.bssid {
            BssidCriterion::Any => true,
            BssidCriterion::Exact(wanted) => *wanted == bss.bssid,
            BssidCriterion::Unmatchable => false,
        };
        bssid_ok && (self.ssid.is_empty() || self.ssid == bss.ssid)
    }
}

impl Default for ScanFilter {
    fn default() -> Self {
        Self::any()
    }
}

/// Keeps the entries `filter` accepts, in scan order, as unclassified
/// candidates.
///
/// When entries were scanned but none survived, a
/// [`ScanNotice::NoMatchingNetwork`] is handed to `diagnostics`.
pub fn filter_scan_results(
    raw: &[BssDescription],
    filter: &ScanFilter,
    diagnostics: &dyn ScanDiagnostics,
) -> Vec<AccessPoint> {
    let aps: Vec<AccessPoint> = raw
        .iter()
        .filter(|bss| filter.matches(bss))
        .map(AccessPoint::from_scan)
        .collect();

    debug!(scanned = raw.len(), matched = aps.len(), "Filtered scan results.");

    if !raw.is_empty() && aps.is_empty() {
        diagnostics.notice(&ScanNotice::NoMatchingNetwork { scanned: raw.len() });
    }
    aps
}
