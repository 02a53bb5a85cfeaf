//! Pieces shared by the Linux and macOS drivers: both speak `ifconfig` and
//! both require the superuser.

use std::sync::LazyLock;

use macshift_common::error::MacError;
use macshift_common::network::interface::InterfaceName;
use macshift_common::network::mac::MacAddress;
use regex::Regex;
use tracing::error;

use crate::command::CommandRunner;

static INTERFACE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[^\s:]+").expect("interface pattern must compile"));

static ETHER_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:ether|HWaddr) ([0-9a-fA-F:]{17})").expect("ether pattern must compile")
});

pub(super) const ROOT_REQUIRED: &str =
    "This program requires root privileges. Please run with sudo.";

pub(super) fn check_privileges(is_root: fn() -> bool) -> Result<(), MacError> {
    if is_root() {
        Ok(())
    } else {
        Err(MacError::InsufficientPrivileges(ROOT_REQUIRED))
    }
}

pub(super) fn list_interfaces<R: CommandRunner>(runner: &R) -> Result<Vec<InterfaceName>, MacError> {
    let output = runner.run_checked("ifconfig", &[])?;
    super::ensure_found(parse_interfaces(&output))
}

pub(super) fn current_mac<R: CommandRunner>(
    runner: &R,
    interface: &InterfaceName,
) -> Option<MacAddress> {
    match runner.run_checked("ifconfig", &[interface.as_str()]) {
        Ok(output) => parse_mac(&output),
        Err(e) => {
            error!("Error getting MAC address: {e}");
            None
        }
    }
}

/// Every line that starts in column zero opens an interface block; its first
/// token up to a colon or whitespace is the interface name.
///
/// Order and duplicates are preserved.
pub(super) fn parse_interfaces(output: &str) -> Vec<InterfaceName> {
    INTERFACE_HEADER
        .find_iter(output)
        .map(|m| InterfaceName::new(m.as_str()))
        .collect()
}

/// First `ether xx:xx:..` (BSD, iproute-era net-tools) or `HWaddr xx:xx:..`
/// (old net-tools) address in `ifconfig <iface>` output.
pub(super) fn parse_mac(output: &str) -> Option<MacAddress> {
    ETHER_LINE
        .captures(output)
        .and_then(|caps| caps.get(1))
        .and_then(|m| MacAddress::from_captured(m.as_str()))
}
