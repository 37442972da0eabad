//! Vectors the simulator is asked to export.

use crate::device::DeviceRecord;
use crate::mapper::INPUT_NODE;
use crate::waveform::VoltageSource;

/// Above this many devices, state nodes are left out of the export list.
pub const STATE_EXPORT_LIMIT: usize = 100;

/// `[vin, i(v<n>)]`, then every device state node, then `extra`, with
/// duplicates removed in first-seen order.
pub fn export_magnitudes(
    source: &VoltageSource,
    devices: &[DeviceRecord],
    extra: &[String],
) -> Vec<String> {
    let mut out: Vec<String> = vec![INPUT_NODE.to_string(), source.current_probe()];
    if devices.len() <= STATE_EXPORT_LIMIT {
        out.extend(devices.iter().map(|d| d.state_node.clone()));
    } else {
        tracing::debug!(
            devices = devices.len(),
            limit = STATE_EXPORT_LIMIT,
            "state nodes omitted from export"
        );
    }
    out.extend(extra.iter().cloned());

    let mut seen = std::collections::HashSet::new();
    out.retain(|name| seen.insert(name.clone()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::waveform::Waveform;

    fn source() -> VoltageSource {
        VoltageSource::across_electrodes(
            1,
            Waveform::Sine {
                offset: 0.0,
                amplitude: 1.0,
                frequency: 1.0,
                delay: 0.0,
                damping: 0.0,
                phase: 0.0,
            },
        )
    }

    fn devices(n: usize) -> Vec<DeviceRecord> {
        (0..n).map(|i| DeviceRecord::new(i, "vin", "gnd")).collect()
    }

    #[test]
    fn fixed_entries_then_states_then_extras() {
        let names = export_magnitudes(&source(), &devices(2), &["l1".into(), "n3".into()]);
        assert_eq!(names, vec!["vin", "i(v1)", "l0", "l1", "n3"]);
    }

    #[test]
    fn large_networks_skip_states() {
        let names = export_magnitudes(&source(), &devices(STATE_EXPORT_LIMIT + 1), &[]);
        assert_eq!(names, vec!["vin", "i(v1)"]);

        let names = export_magnitudes(&source(), &devices(STATE_EXPORT_LIMIT), &[]);
        assert_eq!(names.len(), STATE_EXPORT_LIMIT + 2);
    }
}
