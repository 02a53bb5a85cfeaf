//! The interactive change flow.
//!
//! One [`Session::run`] is one invocation: check privileges, pick an
//! interface, back up its MAC, ask for a new one, apply and verify it, then
//! optionally restore the backup.

use macshift_common::error::MacError;
use macshift_common::network::interface::InterfaceName;
use macshift_common::network::mac::MacAddress;
use tracing::{info, warn};

use crate::backup::{BackupStore, RestoreOutcome};
use crate::platform::PlatformDriver;
use crate::ui::UserInterface;

pub const SELECT_PROMPT: &str = "Select the interface to modify (1, 2, ...): ";
pub const MAC_PROMPT: &str =
    "Enter the new MAC address (format: XX:XX:XX:XX:XX:XX, or 'random'): ";
pub const RESTORE_PROMPT: &str = "Do you want to restore the original MAC address? (y/n): ";

const RANDOM_KEYWORD: &str = "random";

/// What happened during a completed session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub interface: InterfaceName,
    pub backup: Option<MacAddress>,
    pub requested: MacAddress,
    /// The MAC read back after the change equals `requested`.
    pub verified: bool,
    pub restored: Option<RestoreOutcome>,
}

pub struct Session<'a> {
    driver: Box<dyn PlatformDriver + 'a>,
    store: BackupStore,
}

impl<'a> Session<'a> {
    pub fn new(driver: Box<dyn PlatformDriver + 'a>, store: BackupStore) -> Self {
        Self { driver, store }
    }

    /// Runs the whole flow once.
    ///
    /// Errors returned from here are fatal for the process. Read, backup and
    /// restore problems are logged along the way and never surface.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<SessionReport, MacError> {
        self.driver.check_privileges()?;

        let interfaces = self.driver.list_interfaces()?;
        ui.show_interfaces(&interfaces);
        let interface = select_interface(ui, &interfaces)?;

        let backup = self.store.backup(self.driver.as_ref(), &interface);
        ui.show_current_mac(&interface, backup.as_ref());

        let requested = prompt_new_mac(ui)?;
        self.driver.change_mac(&interface, &requested)?;
        let verified = self.verify(&interface, &requested);

        let restored = if confirmed(&ui.ask(RESTORE_PROMPT)?) {
            Some(self.store.restore(self.driver.as_ref(), &interface)?)
        } else {
            None
        };

        Ok(SessionReport {
            interface,
            backup,
            requested,
            verified,
            restored,
        })
    }

    fn verify(&self, interface: &InterfaceName, requested: &MacAddress) -> bool {
        match self.driver.current_mac(interface) {
            Some(current) if current == *requested => {
                info!("Success! MAC address changed to {current}.");
                true
            }
            Some(current) => {
                warn!("{interface} reports MAC address {current}, expected {requested}.");
                false
            }
            None => {
                warn!("Could not read back the MAC address of {interface}.");
                false
            }
        }
    }
}

/// Re-prompts until the answer names one of `interfaces`.
fn select_interface(
    ui: &mut dyn UserInterface,
    interfaces: &[InterfaceName],
) -> Result<InterfaceName, MacError> {
    loop {
        let answer = ui.ask(SELECT_PROMPT)?;
        match parse_selection(&answer, interfaces.len()) {
            Some(idx) => return Ok(interfaces[idx].clone()),
            None => warn!(
                "Invalid selection '{}'. Enter a number between 1 and {}.",
                answer.trim(),
                interfaces.len()
            ),
        }
    }
}

/// Maps a 1-based menu answer onto an index below `count`.
fn parse_selection(answer: &str, count: usize) -> Option<usize> {
    let choice: usize = answer.trim().parse().ok()?;
    (1..=count).contains(&choice).then(|| choice - 1)
}

fn prompt_new_mac(ui: &mut dyn UserInterface) -> Result<MacAddress, MacError> {
    loop {
        let answer = ui.ask(MAC_PROMPT)?;
        let answer = answer.trim();

        if answer.eq_ignore_ascii_case(RANDOM_KEYWORD) {
            let mac = MacAddress::random();
            info!("Generated random MAC address {mac}.");
            return Ok(mac);
        }

        match MacAddress::parse(answer) {
            Ok(mac) => return Ok(mac),
            Err(_) => warn!("Invalid MAC address format. Please try again."),
        }
    }
}

fn confirmed(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
