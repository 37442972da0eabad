//! Device records: one memristor instance per graph edge.

use serde::{Deserialize, Serialize};

/// Instance-name prefix for memristor devices. The leading `x` marks a
/// subcircuit instance in SPICE.
pub const DEVICE_PREFIX: &str = "xmem";

/// One device instance with resolved node names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRecord {
    /// Position in emission order, starting at zero.
    pub index: usize,
    pub terminal_a: String,
    pub terminal_b: String,
    /// Internal state node, always `l{index}`.
    pub state_node: String,
}

impl DeviceRecord {
    pub fn new(index: usize, terminal_a: impl Into<String>, terminal_b: impl Into<String>) -> Self {
        Self {
            index,
            terminal_a: terminal_a.into(),
            terminal_b: terminal_b.into(),
            state_node: state_node_name(index),
        }
    }

    /// `{prefix}{index} {a} {b} {state} {subcircuit}`
    pub fn instance_line(&self, prefix: &str, subcircuit: &str) -> String {
        format!(
            "{prefix}{} {} {} {} {subcircuit}",
            self.index, self.terminal_a, self.terminal_b, self.state_node
        )
    }
}

pub fn state_node_name(index: usize) -> String {
    format!("l{index}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instance_line_format() {
        let record = DeviceRecord::new(3, "vin", "n12");
        assert_eq!(record.state_node, "l3");
        assert_eq!(
            record.instance_line(DEVICE_PREFIX, "memristor"),
            "xmem3 vin n12 l3 memristor"
        );
    }
}
