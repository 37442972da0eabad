//! Analysis directives.

use serde::{Deserialize, Serialize};

/// Simulation analysis. Only transient analysis is supported.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Analysis {
    Transient {
        step: f64,
        stop: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        start: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_step: Option<f64>,
        #[serde(default)]
        uic: bool,
    },
}

impl Analysis {
    pub fn transient(step: f64, stop: f64) -> Self {
        Self::Transient {
            step,
            stop,
            start: None,
            max_step: None,
            uic: false,
        }
    }

    /// `.tran step stop [start [max_step]] [uic]`
    ///
    /// The arguments are positional, so a maximum step without a start time
    /// emits a start of `0`.
    pub fn directive(&self) -> String {
        match *self {
            Self::Transient {
                step,
                stop,
                start,
                max_step,
                uic,
            } => {
                let mut line = format!(".tran {step} {stop}");
                match (start, max_step) {
                    (Some(start), Some(max)) => line.push_str(&format!(" {start} {max}")),
                    (Some(start), None) => line.push_str(&format!(" {start}")),
                    (None, Some(max)) => line.push_str(&format!(" 0 {max}")),
                    (None, None) => {}
                }
                if uic {
                    line.push_str(" uic");
                }
                line
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_transient() {
        assert_eq!(Analysis::transient(1e-3, 1.0).directive(), ".tran 0.001 1");
    }

    #[test]
    fn optional_fields_are_positional() {
        let analysis = Analysis::Transient {
            step: 1e-3,
            stop: 2.0,
            start: None,
            max_step: Some(1e-4),
            uic: true,
        };
        assert_eq!(analysis.directive(), ".tran 0.001 2 0 0.0001 uic");
    }
}
