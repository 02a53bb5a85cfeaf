#![cfg(test)]

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::io;

use macshift_common::error::MacError;
use macshift_common::network::interface::InterfaceName;
use macshift_common::network::mac::MacAddress;
use macshift_core::command::{CommandOutput, CommandRunner};
use macshift_core::ui::UserInterface;

/// Replays canned output keyed by the full command line.
///
/// Each command line owns a queue; the last entry keeps being replayed once
/// the queue is down to one. Unknown command lines fail to launch.
#[derive(Default)]
pub struct ScriptedRunner {
    responses: RefCell<HashMap<String, VecDeque<CommandOutput>>>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(self, command_line: &str, code: i32, stdout: &str) -> Self {
        self.responses
            .borrow_mut()
            .entry(command_line.to_string())
            .or_default()
            .push_back(CommandOutput {
                code: Some(code),
                stdout: stdout.to_string(),
                stderr: String::new(),
            });
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Calls whose command line starts with `prefix`.
    pub fn calls_starting_with(&self, prefix: &str) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|call| call.starts_with(prefix))
            .collect()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, MacError> {
        let command_line = std::iter::once(program)
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ");
        self.calls.borrow_mut().push(command_line.clone());

        let mut responses = self.responses.borrow_mut();
        let queue = responses
            .get_mut(&command_line)
            .filter(|queue| !queue.is_empty())
            .ok_or_else(|| MacError::CommandLaunch {
                program: program.to_string(),
                source: io::Error::from(io::ErrorKind::NotFound),
            })?;

        let output = if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        };
        Ok(output.unwrap_or_default())
    }
}

/// Answers prompts from a fixed script; running out means closed input.
pub struct ScriptedUi {
    answers: VecDeque<String>,
    pub menu: Vec<String>,
    pub questions: Vec<String>,
}

impl ScriptedUi {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            menu: Vec::new(),
            questions: Vec::new(),
        }
    }
}

impl UserInterface for ScriptedUi {
    fn show_interfaces(&mut self, interfaces: &[InterfaceName]) {
        self.menu = interfaces.iter().map(|i| i.to_string()).collect();
    }

    fn show_current_mac(&mut self, _interface: &InterfaceName, _mac: Option<&MacAddress>) {}

    fn ask(&mut self, question: &str) -> Result<String, MacError> {
        self.questions.push(question.to_string());
        self.answers.pop_front().ok_or(MacError::InputClosed)
    }
}

pub const LINUX_IFCONFIG: &str = "\
eth0: flags=4163<UP,BROADCAST,RUNNING,MULTICAST>  mtu 1500
        inet 192.168.1.23  netmask 255.255.255.0  broadcast 192.168.1.255
        ether 11:22:33:44:55:66  txqueuelen 1000  (Ethernet)

lo: flags=73<UP,LOOPBACK,RUNNING>  mtu 65536
        inet 127.0.0.1  netmask 255.0.0.0
        loop  txqueuelen 1000  (Local Loopback)
";

pub fn ifconfig_eth0(mac: &str) -> String {
    format!(
        "eth0: flags=4163<UP,BROADCAST,RUNNING,MULTICAST>  mtu 1500\n        \
         inet 192.168.1.23  netmask 255.255.255.0\n        \
         ether {mac}  txqueuelen 1000  (Ethernet)\n"
    )
}
