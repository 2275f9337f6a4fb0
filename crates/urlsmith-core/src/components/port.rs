//! The port argument type for `set_port`.

/// A port value: a number, a string, or `None` to clear.
///
/// Ports are carried as text and are not range-checked, so a stored port
/// round-trips exactly as given. `Option<T>` converts through `T`, with
/// `None` mapping to the empty (cleared) port.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortValue(String);

impl PortValue {
    pub(super) fn into_string(self) -> String {
        self.0
    }
}

impl From<&str> for PortValue {
    fn from(port: &str) -> Self {
        Self(port.to_string())
    }
}

impl From<String> for PortValue {
    fn from(port: String) -> Self {
        Self(port)
    }
}

impl From<u16> for PortValue {
    fn from(port: u16) -> Self {
        Self(port.to_string())
    }
}

impl From<u32> for PortValue {
    fn from(port: u32) -> Self {
        Self(port.to_string())
    }
}

impl<T: Into<PortValue>> From<Option<T>> for PortValue {
    fn from(port: Option<T>) -> Self {
        port.map(Into::into).unwrap_or_default()
    }
}
