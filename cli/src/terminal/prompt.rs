use std::io::{self, BufRead};

use colored::*;
use console::Term;
use macshift_common::error::MacError;
use macshift_common::network::interface::InterfaceName;
use macshift_common::network::mac::MacAddress;
use macshift_core::ui::UserInterface;

use crate::terminal::{colors, print};

/// Menu and prompts on stdout, answers from stdin.
pub struct TerminalUi {
    term: Term,
}

impl Default for TerminalUi {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalUi {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

}

/// One answer line from `input`, without its line terminator.
///
/// Zero bytes read means the other end is gone, typed Ctrl-D and redirected
/// files alike.
fn read_answer<R: BufRead>(input: &mut R) -> Result<String, MacError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(MacError::InputClosed);
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

impl UserInterface for TerminalUi {
    fn show_interfaces(&mut self, interfaces: &[InterfaceName]) {
        print::header("network interfaces");
        for (idx, interface) in interfaces.iter().enumerate() {
            print::menu_entry(idx + 1, interface.as_str());
        }
    }

    fn show_current_mac(&mut self, interface: &InterfaceName, mac: Option<&MacAddress>) {
        print::header(interface.as_str());
        match mac {
            Some(mac) => {
                print::aligned_line("Current MAC", mac.to_string().color(colors::MAC_ADDR));
                if let Some(vendor) = mac.vendor() {
                    print::aligned_line("Vendor", vendor);
                }
            }
            None => print::aligned_line("Current MAC", "unknown".yellow()),
        }
    }

    fn ask(&mut self, question: &str) -> Result<String, MacError> {
        self.term
            .write_str(&format!("{} ", question.trim_end().color(colors::PRIMARY)))?;
        self.term.flush()?;
        read_answer(&mut io::stdin().lock())
    }
}
