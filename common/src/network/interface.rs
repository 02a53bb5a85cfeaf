use std::fmt;

/// Name of an operating-system-visible network adapter (`eth0`, `en0`,
/// `Ethernet 2`).
///
/// The value is opaque: whatever the enumerating tool printed is what gets
/// handed back to the platform tools.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InterfaceName(String);

impl InterfaceName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for InterfaceName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for InterfaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
