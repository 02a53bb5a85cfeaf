//! One-line backup records, `<interface>_mac_backup.txt`.

use std::fs;
use std::path::{Path, PathBuf};

use macshift_common::error::MacError;
use macshift_common::network::interface::InterfaceName;
use macshift_common::network::mac::MacAddress;
use tracing::{error, info};

use crate::platform::PlatformDriver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreOutcome {
    Restored(MacAddress),
    /// The backup file held something that is not a MAC address.
    Invalid,
    /// The backup file could not be read at all.
    Unreadable,
}

pub struct BackupStore {
    dir: PathBuf,
}

impl BackupStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, interface: &InterfaceName) -> PathBuf {
        self.dir.join(format!("{interface}_mac_backup.txt"))
    }

    /// Saves the MAC currently on `interface`.
    ///
    /// Best-effort: an unreadable MAC or a failed write is logged and `None`
    /// is returned, nothing is propagated.
    pub fn backup(&self, driver: &dyn PlatformDriver, interface: &InterfaceName) -> Option<MacAddress> {
        let Some(mac) = driver.current_mac(interface) else {
            error!("Failed to backup MAC address.");
            return None;
        };

        let path = self.path_for(interface);
        if let Err(e) = write_record(&path, &mac) {
            error!("Failed to backup MAC address: {e}");
            return None;
        }

        info!("Backed up MAC address {mac} to {}.", path.display());
        Some(mac)
    }

    /// Reads the backup record of `interface` back.
    pub fn load(&self, interface: &InterfaceName) -> Result<MacAddress, MacError> {
        let path = self.path_for(interface);
        let contents = fs::read_to_string(&path).map_err(|source| MacError::Backup {
            path: path.clone(),
            source,
        })?;
        MacAddress::from_captured(&contents)
            .ok_or_else(|| MacError::InvalidMac(contents.trim().to_string()))
    }

    /// Puts the backed-up MAC back on `interface`.
    ///
    /// A missing, unreadable or corrupted record is logged and skipped. Only a
    /// failing platform command is returned as an error.
    pub fn restore(
        &self,
        driver: &dyn PlatformDriver,
        interface: &InterfaceName,
    ) -> Result<RestoreOutcome, MacError> {
        let mac = match self.load(interface) {
            Ok(mac) => mac,
            Err(MacError::InvalidMac(_)) => {
                error!("Invalid MAC address in backup file.");
                return Ok(RestoreOutcome::Invalid);
            }
            Err(e) => {
                error!("Error restoring MAC address: {e}");
                return Ok(RestoreOutcome::Unreadable);
            }
        };

        driver.change_mac(interface, &mac)?;
        info!("Restored MAC address to {mac} on {interface}.");
        Ok(RestoreOutcome::Restored(mac))
    }
}

fn write_record(path: &Path, mac: &MacAddress) -> Result<(), MacError> {
    fs::write(path, mac.as_str()).map_err(|source| MacError::Backup {
        path: path.to_path_buf(),
        source,
    })
}
