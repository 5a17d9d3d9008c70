// src/core/selection/diagnostics.rs

use tracing::info;

use crate::core::models::ScanNotice;

/// Receives informational notices from the filter. Implementations must not
/// fail; the filter never looks at what they do.
pub trait ScanDiagnostics {
    fn notice(&self, notice: &ScanNotice);
}

/// Default sink: writes the notice to the tracing log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl ScanDiagnostics for TracingDiagnostics {
    fn notice(&self, notice: &ScanNotice) {
        match notice {
            ScanNotice::NoMatchingNetwork { scanned } => {
                info!(scanned = *scanned, "wlan: {notice}");
            }
        }
    }
}

impl<F> ScanDiagnostics for F
where
    F: Fn(&ScanNotice),
{
    fn notice(&self, notice: &ScanNotice) {
        self(notice)
    }
}
