// src/core/models.rs

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::error::ScanFilterError;
use crate::core::selection::compatibility::{SecurityEvaluator, is_bss_compatible};

/// RSSI value an AP carries before any measurement has been copied in.
/// Reads as -1 dBm once reinterpreted as signed.
pub const UNKNOWN_RSSI: u8 = 0xff;

// --- Identificatori ---
// Identifiers

/// A 6-byte IEEE 802.11 BSSID.
///
/// Serialized as the lowercase colon form (`"aa:bb:cc:dd:ee:ff"`) so scan
/// batches stay readable on disk.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BssidId(pub [u8; 6]);

impl BssidId {
    /// Parses the colon form. Each octet must be exactly two hex digits;
    /// case does not matter.
    pub fn parse(s: &str) -> Result<Self, ScanFilterError> {
        let invalid = || ScanFilterError::InvalidBssid { input: s.to_owned() };

        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 6 {
            return Err(invalid());
        }

        let mut bytes = [0u8; 6];
        for (slot, part) in bytes.iter_mut().zip(parts) {
            if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            *slot = u8::from_str_radix(part, 16).map_err(|_| invalid())?;
        }
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }
}

impl fmt::Debug for BssidId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BssidId({self})")
    }
}

impl fmt::Display for BssidId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

impl TryFrom<String> for BssidId {
    type Error = ScanFilterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<BssidId> for String {
    fn from(value: BssidId) -> Self {
        value.to_string()
    }
}

// --- Modelli di Scansione ---
// Scan Models

/// One BSS as reported by the scan source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BssDescription {
    pub bssid: BssidId,
    #[serde(default)]
    pub ssid: String,
    /// Raw RSSI byte; the scan source stores a signed dBm value in it.
    pub rssi_measurement: u8,
    #[serde(default)]
    pub channel: u8,
    #[serde(default)]
    pub beacon_period: u16,
    /// Raw RSN element, absent for open networks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rsn: Option<Vec<u8>>,
}

impl BssDescription {
    /// Returns the RSN bytes only when the AP actually declared some.
    pub fn security_params(&self) -> Option<&[u8]> {
        self.rsn.as_deref().filter(|rsn| !rsn.is_empty())
    }
}

/// A complete scan-confirmation batch, in the order the scan source delivered it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfirm {
    #[serde(default)]
    pub bss_description_set: Vec<BssDescription>,
}

// --- Candidati ---
// Candidates

/// A candidate access point produced by the filter.
///
/// Holds its own copy of the scan entry, so the batch it came from can be
/// dropped or reused freely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessPoint {
    bssid: BssidId,
    ssid: String,
    bss_desc: BssDescription,
    last_rssi: u8,
    is_compatible: bool,
}

impl AccessPoint {
    pub fn new(bss_desc: &BssDescription) -> Self {
        Self {
            bssid: bss_desc.bssid,
            ssid: bss_desc.ssid.clone(),
            bss_desc: bss_desc.clone(),
            last_rssi: UNKNOWN_RSSI,
            is_compatible: false,
        }
    }

    /// Builds the candidate and copies the scan's RSSI reading into it.
    pub fn from_scan(bss_desc: &BssDescription) -> Self {
        let mut ap = Self::new(bss_desc);
        ap.last_rssi = bss_desc.rssi_measurement;
        ap
    }

    /// Sets `is_compatible` from the stored description. Running it again
    /// with the same evaluator yields the same flag.
    pub fn classify(&mut self, evaluator: &dyn SecurityEvaluator) {
        self.is_compatible = is_bss_compatible(&self.bss_desc, evaluator);
    }

    pub fn bssid(&self) -> BssidId {
        self.bssid
    }

    pub fn ssid(&self) -> &str {
        &self.ssid
    }

    pub fn bss_desc(&self) -> &BssDescription {
        &self.bss_desc
    }

    pub fn last_rssi(&self) -> u8 {
        self.last_rssi
    }

    /// The RSSI byte read as two's-complement dBm.
    pub fn rssi_dbm(&self) -> i8 {
        self.last_rssi as i8
    }

    pub fn is_compatible(&self) -> bool {
        self.is_compatible
    }
}

// --- Report ---

/// Informational notices raised while filtering. Never errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScanNotice {
    NoMatchingNetwork { scanned: usize },
}

impl fmt::Display for ScanNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanNotice::NoMatchingNetwork { scanned } => {
                write!(f, "no matching network among {scanned} scanned")
            }
        }
    }
}

/// The ranked, classified snapshot handed back to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub generated_at: DateTime<Utc>,
    pub scanned: usize,
    pub access_points: Vec<AccessPoint>,
    pub notice: Option<ScanNotice>,
}

impl ScanReport {
    pub fn compatible(&self) -> impl Iterator<Item = &AccessPoint> {
        self.access_points.iter().filter(|ap| ap.is_compatible())
    }

    /// The strongest AP this host can actually join, if any.
    pub fn best(&self) -> Option<&AccessPoint> {
        self.compatible().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bss() -> BssDescription {
        BssDescription {
            bssid: BssidId([0x00, 0x11, 0x22, 0x33, 0x44, 0x55]),
            ssid: "Net1".to_string(),
            rssi_measurement: 0xf6,
            channel: 6,
            beacon_period: 100,
            rsn: Some(vec![48, 2, 1, 0]),
        }
    }

    #[test]
    fn bssid_display_is_lowercase_colon_form() {
        let id = BssidId([0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff]);
        assert_eq!(id.to_string(), "aa:bb:cc:dd:ee:ff");
    }

    #[test]
    fn bssid_parse_ignores_case() {
        let lower = BssidId::parse("aa:bb:cc:dd:ee:ff").unwrap();
        let upper = BssidId::parse("AA:BB:CC:DD:EE:FF").unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn bssid_parse_rejects_malformed_text() {
        for input in ["", "aa:bb:cc", "a:bb:cc:dd:ee:ff", "zz:bb:cc:dd:ee:ff", "aa-bb-cc-dd-ee-ff", "aa:bb:cc:dd:ee:ff:00", "+a:bb:cc:dd:ee:ff"] {
            assert_eq!(
                BssidId::parse(input),
                Err(ScanFilterError::InvalidBssid { input: input.to_string() }),
                "{input}"
            );
        }
    }

    #[test]
    fn new_access_point_starts_unknown_and_incompatible() {
        let ap = AccessPoint::new(&sample_bss());
        assert_eq!(ap.last_rssi(), UNKNOWN_RSSI);
        assert_eq!(ap.rssi_dbm(), -1);
        assert!(!ap.is_compatible());
    }

    #[test]
    fn from_scan_copies_rssi_and_description() {
        let bss = sample_bss();
        let ap = AccessPoint::from_scan(&bss);
        assert_eq!(ap.last_rssi(), 0xf6);
        assert_eq!(ap.rssi_dbm(), -10);
        assert_eq!(ap.bssid(), bss.bssid);
        assert_eq!(ap.ssid(), "Net1");
        assert_eq!(ap.bss_desc(), &bss);
    }

    #[test]
    fn access_point_owns_its_description() {
        let mut bss = sample_bss();
        let ap = AccessPoint::from_scan(&bss);

        bss.ssid.push_str("-changed");
        bss.rssi_measurement = 0x10;
        if let Some(rsn) = bss.rsn.as_mut() {
            rsn.clear();
        }

        assert_eq!(ap.ssid(), "Net1");
        assert_eq!(ap.bss_desc().ssid, "Net1");
        assert_eq!(ap.bss_desc().rssi_measurement, 0xf6);
        assert_eq!(ap.bss_desc().rsn.as_deref(), Some(&[48u8, 2, 1, 0][..]));
    }

    #[test]
    fn empty_rsn_counts_as_no_security() {
        let mut bss = sample_bss();
        bss.rsn = Some(Vec::new());
        assert_eq!(bss.security_params(), None);
        bss.rsn = None;
        assert_eq!(bss.security_params(), None);
    }

    #[test]
    fn scan_confirm_reads_json_batch() {
        let json = r#"{
            "bss_description_set": [
                { "bssid": "00:11:22:33:44:55", "ssid": "Net1", "rssi_measurement": 246 },
                { "bssid": "66:77:88:99:AA:BB", "ssid": "Net1", "rssi_measurement": 10, "channel": 36, "rsn": [48, 2, 1, 0] }
            ]
        }"#;
        let batch: ScanConfirm = serde_json::from_str(json).unwrap();
        assert_eq!(batch.bss_description_set.len(), 2);
        assert_eq!(batch.bss_description_set[1].bssid, BssidId([0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb]));
        assert_eq!(batch.bss_description_set[0].rsn, None);
        assert_eq!(batch.bss_description_set[1].channel, 36);
    }

    #[test]
    fn scan_confirm_rejects_bad_bssid() {
        let json = r#"{ "bss_description_set": [ { "bssid": "nope", "rssi_measurement": 1 } ] }"#;
        assert!(serde_json::from_str::<ScanConfirm>(json).is_err());
    }

    #[test]
    fn notice_message_counts_scanned_entries() {
        let notice = ScanNotice::NoMatchingNetwork { scanned: 3 };
        assert_eq!(notice.to_string(), "no matching network among 3 scanned");
    }
}
