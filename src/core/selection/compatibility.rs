// src/core/selection/compatibility.rs

use tracing::debug;

use crate::core::error::RsnError;
use crate::core::models::BssDescription;

/// Capability check owned by the security module: can this host join a
/// network advertising these RSN bytes?
pub trait SecurityEvaluator: Send + Sync {
    fn is_rsn_supported(&self, rsn: &[u8]) -> Result<bool, RsnError>;
}

/// Decides whether an AP is worth offering.
///
/// Open networks are always compatible here; whether the join actually
/// succeeds is the security module's business. A protected network is
/// compatible only when the evaluator says so without error.
pub fn is_bss_compatible(bss: &BssDescription, evaluator: &dyn SecurityEvaluator) -> bool {
    let Some(rsn) = bss.security_params() else {
        return true;
    };

    match evaluator.is_rsn_supported(rsn) {
        Ok(supported) => supported,
        Err(e) => {
            debug!(bssid = %bss.bssid, error = %e, "RSN evaluation failed, marking incompatible.");
            false
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::core::models::BssidId;
    use crate::core::rsne::{Wpa2PersonalEvaluator, tests::WPA2_PSK_CCMP};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Stub evaluator with a fixed answer.
    pub(crate) struct StubEvaluator(pub Result<bool, RsnError>);

    impl SecurityEvaluator for StubEvaluator {
        fn is_rsn_supported(&self, _rsn: &[u8]) -> Result<bool, RsnError> {
            self.0.clone()
        }
    }

    struct CountingEvaluator(AtomicUsize);

    impl SecurityEvaluator for CountingEvaluator {
        fn is_rsn_supported(&self, _rsn: &[u8]) -> Result<bool, RsnError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(true)
        }
    }

    fn bss(rsn: Option<Vec<u8>>) -> BssDescription {
        BssDescription {
            bssid: BssidId([1, 2, 3, 4, 5, 6]),
            ssid: "Lab".to_string(),
            rssi_measurement: 0xc4,
            channel: 11,
            beacon_period: 100,
            rsn,
        }
    }

    #[test]
    fn open_network_is_compatible() {
        let rejecting = StubEvaluator(Ok(false));
        assert!(is_bss_compatible(&bss(None), &rejecting));
        assert!(is_bss_compatible(&bss(Some(Vec::new())), &rejecting));
    }

    #[test]
    fn open_network_never_reaches_evaluator() {
        let counter = CountingEvaluator(AtomicUsize::new(0));
        is_bss_compatible(&bss(None), &counter);
        is_bss_compatible(&bss(Some(Vec::new())), &counter);
        assert_eq!(counter.0.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn protected_network_follows_evaluator() {
        let entry = bss(Some(vec![48, 2, 1, 0]));
        assert!(is_bss_compatible(&entry, &StubEvaluator(Ok(true))));
        assert!(!is_bss_compatible(&entry, &StubEvaluator(Ok(false))));
    }

    #[test]
    fn evaluator_error_is_incompatible() {
        let entry = bss(Some(vec![48, 2, 1, 0]));
        let failing = StubEvaluator(Err(RsnError::Evaluator("backend down".to_string())));
        assert!(!is_bss_compatible(&entry, &failing));
    }

    #[test]
    fn classification_is_repeatable() {
        let entry = bss(Some(WPA2_PSK_CCMP.to_vec()));
        let first = is_bss_compatible(&entry, &Wpa2PersonalEvaluator);
        let second = is_bss_compatible(&entry, &Wpa2PersonalEvaluator);
        assert!(first);
        assert_eq!(first, second);
    }

    #[test]
    fn garbage_rsn_is_incompatible_with_default_evaluator() {
        let entry = bss(Some(vec![0xde, 0xad, 0xbe, 0xef]));
        assert!(!is_bss_compatible(&entry, &Wpa2PersonalEvaluator));
    }
}
