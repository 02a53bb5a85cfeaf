//! **Medium Access Control (MAC)** address handling.
//!
//! A [`MacAddress`] only ever holds the canonical `XX:XX:XX:XX:XX:XX` form.
//! Text coming from platform tools or backup files goes through
//! [`MacAddress::normalize`] first, interactive input does not.
//!
//! Also home of the **Organizationally unique identifier (OUI)** lookup used to
//! put a vendor name next to an address.

use std::fmt;
use std::str::FromStr;
use std::sync::{LazyLock, OnceLock};

use mac_oui::Oui;
use regex::Regex;
use tracing::debug;

use crate::error::MacError;

static MAC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9a-fA-F]{2}:){5}[0-9a-fA-F]{2}$").expect("MAC pattern must compile")
});

static OUI_DB: OnceLock<Option<Oui>> = OnceLock::new();

/// Returns `true` iff `candidate` is six two-digit hex groups joined by colons.
///
/// No normalization happens here: `AA-BB-CC-11-22-33` is rejected.
pub fn is_valid_mac(candidate: &str) -> bool {
    MAC_PATTERN.is_match(candidate)
}

#[derive(Debug, Clone, Eq)]
pub struct MacAddress(String);

impl MacAddress {
    pub fn parse(candidate: &str) -> Result<Self, MacError> {
        if is_valid_mac(candidate) {
            Ok(Self(candidate.to_string()))
        } else {
            Err(MacError::InvalidMac(candidate.to_string()))
        }
    }

    /// Trims surrounding whitespace and turns dash separators into colons.
    pub fn normalize(raw: &str) -> String {
        raw.trim().replace('-', ":")
    }

    /// Parses text captured from a tool or a file, normalizing it first.
    pub fn from_captured(raw: &str) -> Option<Self> {
        Self::parse(&Self::normalize(raw)).ok()
    }

    /// A random, locally administered, unicast address.
    pub fn random() -> Self {
        let mut octets: [u8; 6] = rand::random();
        octets[0] = (octets[0] & 0b1111_1100) | 0b0000_0010;
        let text = octets
            .iter()
            .map(|octet| format!("{octet:02X}"))
            .collect::<Vec<_>>()
            .join(":");
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Identify the vendor of this address from its OUI prefix.
    pub fn vendor(&self) -> Option<String> {
        let db = get_oui_db().as_ref()?;
        match db.lookup_by_mac(&self.0) {
            Ok(Some(entry)) => Some(entry.company_name.clone()),
            _ => None,
        }
    }
}

/// Retrieves or initializes the **Organizationally unique identifier** database.
///
/// A database that fails to load only costs us the vendor column.
fn get_oui_db() -> &'static Option<Oui> {
    OUI_DB.get_or_init(|| match Oui::default() {
        Ok(db) => Some(db),
        Err(e) => {
            debug!("OUI database unavailable: {e:?}");
            None
        }
    })
}

impl PartialEq for MacAddress {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl FromStr for MacAddress {
    type Err = MacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
