//! The central **abstraction** over platform-native network tooling.
//!
//! Each supported operating system gets one driver implementing
//! [`PlatformDriver`]. The driver owns the exact command lines and the text
//! parsing of their output, so the session never branches on the platform.
//!
//! **Architectural Note:**
//! Drivers reach the outside world only through a [`CommandRunner`]. Swap the
//! runner and the whole driver can be exercised against captured output.

use macshift_common::error::MacError;
use macshift_common::network::interface::InterfaceName;
use macshift_common::network::mac::MacAddress;
use macshift_common::platform::Platform;
use tracing::info;

use crate::command::CommandRunner;

mod linux;
mod macos;
mod unix;
mod windows;

pub use linux::LinuxDriver;
pub use macos::MacOsDriver;
pub use windows::WindowsDriver;

pub trait PlatformDriver {
    fn platform(&self) -> Platform;

    /// Fails with [`MacError::InsufficientPrivileges`] unless the process may
    /// reconfigure network hardware.
    fn check_privileges(&self) -> Result<(), MacError>;

    /// Interface names in the order the platform tool printed them.
    ///
    /// Never returns an empty list: zero interfaces is [`MacError::NoInterfaces`].
    fn list_interfaces(&self) -> Result<Vec<InterfaceName>, MacError>;

    /// Reads the MAC currently assigned to `interface`.
    ///
    /// A tool that cannot be run is logged and reported as `None`, same as
    /// output without an address in it.
    fn current_mac(&self, interface: &InterfaceName) -> Option<MacAddress>;

    /// Runs the platform's command sequence for assigning `mac`.
    ///
    /// Stops at the first failing command without undoing earlier ones.
    fn set_mac(&self, interface: &InterfaceName, mac: &MacAddress) -> Result<(), MacError>;

    fn change_mac(&self, interface: &InterfaceName, mac: &MacAddress) -> Result<(), MacError> {
        self.set_mac(interface, mac)?;
        info!("MAC address changed to {mac} on {interface}.");
        Ok(())
    }
}

impl<D: PlatformDriver + ?Sized> PlatformDriver for &D {
    fn platform(&self) -> Platform {
        (**self).platform()
    }

    fn check_privileges(&self) -> Result<(), MacError> {
        (**self).check_privileges()
    }

    fn list_interfaces(&self) -> Result<Vec<InterfaceName>, MacError> {
        (**self).list_interfaces()
    }

    fn current_mac(&self, interface: &InterfaceName) -> Option<MacAddress> {
        (**self).current_mac(interface)
    }

    fn set_mac(&self, interface: &InterfaceName, mac: &MacAddress) -> Result<(), MacError> {
        (**self).set_mac(interface, mac)
    }
}

/// Builds the driver for `platform` on top of `runner`.
pub fn driver_for<'a, R>(platform: Platform, runner: R) -> Box<dyn PlatformDriver + 'a>
where
    R: CommandRunner + 'a,
{
    match platform {
        Platform::Linux => Box::new(LinuxDriver::new(runner)),
        Platform::MacOs => Box::new(MacOsDriver::new(runner)),
        Platform::Windows => Box::new(WindowsDriver::new(runner)),
    }
}

fn ensure_found(interfaces: Vec<InterfaceName>) -> Result<Vec<InterfaceName>, MacError> {
    if interfaces.is_empty() {
        Err(MacError::NoInterfaces)
    } else {
        Ok(interfaces)
    }
}
