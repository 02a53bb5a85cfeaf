use macshift_common::error::MacError;
use macshift_common::network::interface::InterfaceName;
use macshift_common::network::mac::MacAddress;

/// What the session needs from the person at the keyboard.
///
/// Progress and errors go through `tracing`; this trait only covers output
/// that is not a log line, plus reading answers.
pub trait UserInterface {
    /// Shows the selectable interfaces as a 1-based numbered list.
    fn show_interfaces(&mut self, interfaces: &[InterfaceName]);

    fn show_current_mac(&mut self, interface: &InterfaceName, mac: Option<&MacAddress>);

    /// Prints `question` and reads one line of input, without the line break.
    ///
    /// Returns [`MacError::InputClosed`] once input is exhausted.
    fn ask(&mut self, question: &str) -> Result<String, MacError>;
}
