// src/core/rsne.rs

//! Decoding of the RSN information element (IEEE 802.11-2016 §9.4.2.25)
//! and the default security evaluator built on top of it.
//!
//! The layout after the two-byte element header is:
//!
//! ```text
//! version(2) | group data cipher(4) | pairwise count(2) + suites(4n)
//!            | akm count(2) + suites(4n) | capabilities(2)
//!            | pmkid count(2) + ids(16n) | group mgmt cipher(4)
//! ```
//!
//! Everything after the version is optional, but a field that starts must
//! be complete.

use std::fmt;

use strum::{Display, FromRepr};
use tracing::debug;

use crate::core::error::RsnError;
use crate::core::selection::compatibility::SecurityEvaluator;

pub const RSNE_ELEMENT_ID: u8 = 48;
pub const RSNE_VERSION: u16 = 1;

/// OUI of suites defined by IEEE 802.11 itself.
pub const IEEE_OUI: [u8; 3] = [0x00, 0x0f, 0xac];

const PMKID_LEN: usize = 16;

/// Cipher suite selectors under the IEEE OUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, FromRepr)]
#[repr(u8)]
pub enum CipherSuiteType {
    #[strum(to_string = "WEP-40")]
    Wep40 = 1,
    #[strum(to_string = "TKIP")]
    Tkip = 2,
    #[strum(to_string = "CCMP-128")]
    Ccmp128 = 4,
    #[strum(to_string = "WEP-104")]
    Wep104 = 5,
    #[strum(to_string = "BIP-CMAC-128")]
    BipCmac128 = 6,
    #[strum(to_string = "GCMP-128")]
    Gcmp128 = 8,
    #[strum(to_string = "GCMP-256")]
    Gcmp256 = 9,
    #[strum(to_string = "CCMP-256")]
    Ccmp256 = 10,
}

/// AKM suite selectors under the IEEE OUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, FromRepr)]
#[repr(u8)]
pub enum AkmSuiteType {
    #[strum(to_string = "802.1X")]
    Dot1X = 1,
    #[strum(to_string = "PSK")]
    Psk = 2,
    #[strum(to_string = "FT-PSK")]
    FtPsk = 4,
    #[strum(to_string = "PSK-SHA256")]
    PskSha256 = 6,
    #[strum(to_string = "SAE")]
    Sae = 8,
}

/// A four-byte suite selector: OUI plus type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suite {
    pub oui: [u8; 3],
    pub suite_type: u8,
}

impl Suite {
    pub const fn ieee(suite_type: u8) -> Self {
        Self { oui: IEEE_OUI, suite_type }
    }

    fn is_ieee(&self) -> bool {
        self.oui == IEEE_OUI
    }

    pub fn cipher(&self) -> Option<CipherSuiteType> {
        self.is_ieee().then(|| CipherSuiteType::from_repr(self.suite_type)).flatten()
    }

    pub fn akm(&self) -> Option<AkmSuiteType> {
        self.is_ieee().then(|| AkmSuiteType::from_repr(self.suite_type)).flatten()
    }
}

/// A decoded RSN element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rsne {
    pub version: u16,
    pub group_data_cipher: Option<Suite>,
    pub pairwise_ciphers: Vec<Suite>,
    pub akm_suites: Vec<Suite>,
    pub capabilities: Option<u16>,
    pub pmkids: Vec<[u8; PMKID_LEN]>,
    pub group_mgmt_cipher: Option<Suite>,
}

/// Cursor over the element body.
struct Reader<'a> {
    buf: &'a [u8],
}

impl<'a> Reader<'a> {
    fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    fn take(&mut self, n: usize, field: &'static str) -> Result<&'a [u8], RsnError> {
        if self.buf.len() < n {
            return Err(RsnError::Truncated { field });
        }
        let (head, tail) = self.buf.split_at(n);
        self.buf = tail;
        Ok(head)
    }

    fn u16_le(&mut self, field: &'static str) -> Result<u16, RsnError> {
        let bytes = self.take(2, field)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    fn suite(&mut self, field: &'static str) -> Result<Suite, RsnError> {
        let bytes = self.take(4, field)?;
        Ok(Suite { oui: [bytes[0], bytes[1], bytes[2]], suite_type: bytes[3] })
    }

    fn suite_list(&mut self, field: &'static str) -> Result<Vec<Suite>, RsnError> {
        let count = self.u16_le(field)? as usize;
        (0..count).map(|_| self.suite(field)).collect()
    }
}

impl Rsne {
    /// Parses a full element, header included.
    pub fn parse(raw: &[u8]) -> Result<Self, RsnError> {
        let (&id, rest) = raw.split_first().ok_or(RsnError::Empty)?;
        if id != RSNE_ELEMENT_ID {
            return Err(RsnError::WrongElementId(id));
        }
        let (&len, body) = rest.split_first().ok_or(RsnError::Truncated { field: "length" })?;
        if len as usize != body.len() {
            return Err(RsnError::LengthMismatch { declared: len as usize, actual: body.len() });
        }

        let mut reader = Reader { buf: body };
        let version = reader.u16_le("version")?;
        if version != RSNE_VERSION {
            return Err(RsnError::UnsupportedVersion(version));
        }

        let mut rsne = Rsne { version, ..Default::default() };
        if reader.is_empty() {
            return Ok(rsne);
        }
        rsne.group_data_cipher = Some(reader.suite("group data cipher")?);
        if reader.is_empty() {
            return Ok(rsne);
        }
        rsne.pairwise_ciphers = reader.suite_list("pairwise cipher suites")?;
        if reader.is_empty() {
            return Ok(rsne);
        }
        rsne.akm_suites = reader.suite_list("AKM suites")?;
        if reader.is_empty() {
            return Ok(rsne);
        }
        rsne.capabilities = Some(reader.u16_le("RSN capabilities")?);
        if reader.is_empty() {
            return Ok(rsne);
        }
        let pmkid_count = reader.u16_le("PMKID count")? as usize;
        for _ in 0..pmkid_count {
            let mut id = [0u8; PMKID_LEN];
            id.copy_from_slice(reader.take(PMKID_LEN, "PMKID list")?);
            rsne.pmkids.push(id);
        }
        if reader.is_empty() {
            return Ok(rsne);
        }
        rsne.group_mgmt_cipher = Some(reader.suite("group management cipher")?);

        // Vendor extensions may follow; they do not affect the decision.
        Ok(rsne)
    }

    fn has_akm(&self, akm: AkmSuiteType) -> bool {
        self.akm_suites.iter().any(|s| s.akm() == Some(akm))
    }

    fn has_pairwise(&self, cipher: CipherSuiteType) -> bool {
        self.pairwise_ciphers.iter().any(|s| s.cipher() == Some(cipher))
    }

    /// Short label for UIs, e.g. `WPA2 (PSK/CCMP-128)`.
    pub fn describe(&self) -> String {
        let generation = if self.has_akm(AkmSuiteType::Sae) { "WPA3" } else { "WPA2" };
        let akm = self
            .akm_suites
            .first()
            .and_then(Suite::akm)
            .map_or_else(|| "?".to_string(), |a| a.to_string());
        let cipher = self
            .pairwise_ciphers
            .first()
            .and_then(Suite::cipher)
            .map_or_else(|| "?".to_string(), |c| c.to_string());
        format!("{generation} ({akm}/{cipher})")
    }
}

impl fmt::Display for Suite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.oui;
        write!(f, "{a:02x}-{b:02x}-{c:02x}:{}", self.suite_type)
    }
}

/// Human label for an AP's raw security parameters.
pub fn describe_security(rsn: Option<&[u8]>) -> String {
    match rsn {
        None => "Open".to_string(),
        Some(raw) => Rsne::parse(raw).map_or_else(|_| "Unreadable RSN".to_string(), |r| r.describe()),
    }
}

/// Accepts the configurations a WPA2-Personal supplicant can join: a
/// CCMP-128 or TKIP group cipher, CCMP-128 among the pairwise ciphers and
/// PSK among the AKMs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Wpa2PersonalEvaluator;

impl SecurityEvaluator for Wpa2PersonalEvaluator {
    fn is_rsn_supported(&self, rsn: &[u8]) -> Result<bool, RsnError> {
        let rsne = Rsne::parse(rsn)?;

        let group_ok = matches!(
            rsne.group_data_cipher.and_then(|s| s.cipher()),
            Some(CipherSuiteType::Ccmp128 | CipherSuiteType::Tkip)
        );
        let pairwise_ok = rsne.has_pairwise(CipherSuiteType::Ccmp128);
        let akm_ok = rsne.has_akm(AkmSuiteType::Psk);

        debug!(group_ok, pairwise_ok, akm_ok, "Evaluated RSN element.");
        Ok(group_ok && pairwise_ok && akm_ok)
    }
}
