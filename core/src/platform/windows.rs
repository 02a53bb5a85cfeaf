//! Windows driver built on `ipconfig`, `getmac`, `netsh` and `whoami`.

use std::sync::LazyLock;

use macshift_common::error::MacError;
use macshift_common::network::interface::InterfaceName;
use macshift_common::network::mac::MacAddress;
use macshift_common::platform::Platform;
use regex::Regex;
use tracing::{debug, error};

use super::PlatformDriver;
use crate::command::CommandRunner;

static ETHERNET_ADAPTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^Ethernet adapter (.+):").expect("adapter pattern must compile")
});

static PHYSICAL_ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9a-fA-F-]{17}").expect("physical address pattern must compile")
});

const ADMIN_REQUIRED: &str = "This program requires administrator privileges.";

pub struct WindowsDriver<R> {
    runner: R,
}

impl<R: CommandRunner> WindowsDriver<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }
}

impl<R: CommandRunner> PlatformDriver for WindowsDriver<R> {
    fn platform(&self) -> Platform {
        Platform::Windows
    }

    /// `whoami /priv` succeeding is taken as a sign of administrator rights.
    fn check_privileges(&self) -> Result<(), MacError> {
        match self.runner.run("whoami", &["/priv"]) {
            Ok(output) if output.success() => Ok(()),
            Ok(output) => {
                debug!("whoami /priv exited with {:?}", output.code);
                Err(MacError::InsufficientPrivileges(ADMIN_REQUIRED))
            }
            Err(e) => {
                debug!("{e}");
                Err(MacError::InsufficientPrivileges(ADMIN_REQUIRED))
            }
        }
    }

    fn list_interfaces(&self) -> Result<Vec<InterfaceName>, MacError> {
        let output = self.runner.run_checked("ipconfig", &[])?;
        super::ensure_found(parse_adapters(&output))
    }

    fn current_mac(&self, interface: &InterfaceName) -> Option<MacAddress> {
        match self.runner.run_checked("getmac", &["/FO", "CSV", "/V"]) {
            Ok(output) => parse_getmac(&output, interface),
            Err(e) => {
                error!("Error getting MAC address: {e}");
                None
            }
        }
    }

    fn set_mac(&self, interface: &InterfaceName, mac: &MacAddress) -> Result<(), MacError> {
        let newmac = format!("newmac={mac}");
        self.runner.run_checked(
            "netsh",
            &["interface", "set", "interface", interface.as_str(), newmac.as_str()],
        )?;
        Ok(())
    }
}

/// Names from every `Ethernet adapter <name>:` line, in order.
fn parse_adapters(output: &str) -> Vec<InterfaceName> {
    ETHERNET_ADAPTER
        .captures_iter(output)
        .filter_map(|caps| caps.get(1))
        .map(|m| InterfaceName::new(m.as_str()))
        .collect()
}

/// Finds the physical address of `interface` in `getmac /FO CSV /V` output.
///
/// Rows whose connection name equals the interface win over rows that merely
/// mention it, so `Ethernet` does not pick up `Ethernet 2`.
fn parse_getmac(output: &str, interface: &InterfaceName) -> Option<MacAddress> {
    let name = interface.as_str();
    let (exact, partial): (Vec<&str>, Vec<&str>) = output
        .lines()
        .filter(|line| line.contains(name))
        .partition(|line| connection_name(line) == Some(name));

    exact.into_iter().chain(partial).find_map(physical_address)
}

fn connection_name(line: &str) -> Option<&str> {
    line.split(',').next().map(|field| field.trim().trim_matches('"'))
}

fn physical_address(line: &str) -> Option<MacAddress> {
    PHYSICAL_ADDRESS
        .find_iter(line)
        .find_map(|m| MacAddress::from_captured(m.as_str()))
}
