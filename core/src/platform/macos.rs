use macshift_common::error::MacError;
use macshift_common::network::interface::InterfaceName;
use macshift_common::network::mac::MacAddress;
use macshift_common::platform::Platform;

use super::{PlatformDriver, unix};
use crate::command::CommandRunner;

pub struct MacOsDriver<R> {
    runner: R,
    is_root: fn() -> bool,
}

impl<R: CommandRunner> MacOsDriver<R> {
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            is_root: is_root::is_root,
        }
    }

    pub fn with_root_check(mut self, is_root: fn() -> bool) -> Self {
        self.is_root = is_root;
        self
    }
}

impl<R: CommandRunner> PlatformDriver for MacOsDriver<R> {
    fn platform(&self) -> Platform {
        Platform::MacOs
    }

    fn check_privileges(&self) -> Result<(), MacError> {
        unix::check_privileges(self.is_root)
    }

    fn list_interfaces(&self) -> Result<Vec<InterfaceName>, MacError> {
        unix::list_interfaces(&self.runner)
    }

    fn current_mac(&self, interface: &InterfaceName) -> Option<MacAddress> {
        unix::current_mac(&self.runner, interface)
    }

    fn set_mac(&self, interface: &InterfaceName, mac: &MacAddress) -> Result<(), MacError> {
        self.runner
            .run_checked("sudo", &["ifconfig", interface.as_str(), "ether", mac.as_str()])?;
        Ok(())
    }
}
