//! Input voltage source and its waveform.

use mn_core::ensure_finite;
use serde::{Deserialize, Serialize};

use crate::error::{NetlistError, NetlistResult};

fn default_width() -> f64 {
    0.5
}

fn default_period() -> f64 {
    1.0
}

/// Waveform of the input source. Times are in seconds, levels in volts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Waveform {
    /// `sin vo va freq td theta phase`
    Sine {
        offset: f64,
        amplitude: f64,
        frequency: f64,
        #[serde(default)]
        delay: f64,
        #[serde(default)]
        damping: f64,
        #[serde(default)]
        phase: f64,
    },
    /// `pulse v1 v2 td tr tf pw per np`
    Pulse {
        initial: f64,
        pulsed: f64,
        #[serde(default)]
        delay: f64,
        #[serde(default)]
        rise: f64,
        #[serde(default)]
        fall: f64,
        #[serde(default = "default_width")]
        width: f64,
        #[serde(default = "default_period")]
        period: f64,
        #[serde(default)]
        count: u32,
    },
    /// A train of pulses from `base` to each of `levels` in turn, one per
    /// period, expanded into explicit breakpoints. Rise, width and fall must
    /// be positive and fit strictly inside the period so every breakpoint
    /// time increases.
    PiecewiseLinear {
        base: f64,
        levels: Vec<f64>,
        #[serde(default)]
        delay: f64,
        #[serde(default)]
        rise: f64,
        #[serde(default)]
        fall: f64,
        #[serde(default = "default_width")]
        width: f64,
        #[serde(default = "default_period")]
        period: f64,
    },
}

impl Waveform {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Sine { .. } => "sin",
            Self::Pulse { .. } => "pulse",
            Self::PiecewiseLinear { .. } => "pwl",
        }
    }

    pub fn validate(&self) -> NetlistResult<()> {
        match self {
            Self::Sine {
                offset,
                amplitude,
                frequency,
                delay,
                damping,
                phase,
            } => {
                finite(*offset, "sine offset")?;
                finite(*amplitude, "sine amplitude")?;
                finite(*frequency, "sine frequency")?;
                non_negative(*delay, "sine delay")?;
                finite(*damping, "sine damping")?;
                finite(*phase, "sine phase")?;
            }
            Self::Pulse {
                initial,
                pulsed,
                delay,
                rise,
                fall,
                width,
                period,
                ..
            } => {
                finite(*initial, "pulse initial level")?;
                finite(*pulsed, "pulse level")?;
                timing(*delay, *rise, *fall, *width, *period)?;
            }
            Self::PiecewiseLinear {
                base,
                levels,
                delay,
                rise,
                fall,
                width,
                period,
            } => {
                finite(*base, "pwl base level")?;
                if levels.is_empty() {
                    return Err(invalid("pwl needs at least one level"));
                }
                for level in levels {
                    finite(*level, "pwl level")?;
                }
                timing(*delay, *rise, *fall, *width, *period)?;
                breakpoints_increase(*rise, *fall, *width, *period)?;
            }
        }
        Ok(())
    }

    /// SPICE source descriptor. Piecewise-linear waveforms span several
    /// continuation lines; the others fit on one.
    pub fn descriptor(&self) -> String {
        match self {
            Self::Sine {
                offset,
                amplitude,
                frequency,
                delay,
                damping,
                phase,
            } => format!("sin {offset} {amplitude} {frequency} {delay} {damping} {phase}"),
            Self::Pulse {
                initial,
                pulsed,
                delay,
                rise,
                fall,
                width,
                period,
                count,
            } => format!("pulse {initial} {pulsed} {delay} {rise} {fall} {width} {period} {count}"),
            Self::PiecewiseLinear {
                base,
                levels,
                delay,
                rise,
                fall,
                width,
                period,
            } => {
                let mut out = format!("pwl(\n+ {delay} {base}");
                for (idx, level) in levels.iter().enumerate() {
                    let t1 = delay + period * idx as f64 + rise;
                    let t2 = t1 + width;
                    let t3 = t2 + fall;
                    let t4 = delay + period * (idx + 1) as f64;
                    out.push_str(&format!(
                        "\n+ {t1} {level} {t2} {level} {t3} {base} {t4} {base}"
                    ));
                }
                out.push_str("\n+ )");
                out
            }
        }
    }
}

fn invalid(message: impl Into<String>) -> NetlistError {
    NetlistError::InvalidWaveform {
        message: message.into(),
    }
}

fn finite(value: f64, what: &'static str) -> NetlistResult<f64> {
    ensure_finite(value, what).map_err(|e| invalid(e.to_string()))
}

fn non_negative(value: f64, what: &'static str) -> NetlistResult<f64> {
    let value = finite(value, what)?;
    if value < 0.0 {
        return Err(invalid(format!("{what} must be non-negative, got {value}")));
    }
    Ok(value)
}

/// PWL breakpoint times must strictly increase: no zero-length segment and
/// no pulse reaching the next period's start.
fn breakpoints_increase(rise: f64, fall: f64, width: f64, period: f64) -> NetlistResult<()> {
    for (value, what) in [(rise, "pwl rise time"), (width, "pwl width"), (fall, "pwl fall time")] {
        if value <= 0.0 {
            return Err(invalid(format!("{what} must be positive, got {value}")));
        }
    }
    let busy = rise + width + fall;
    if busy >= period {
        return Err(invalid(format!(
            "pwl rise + width + fall ({busy}) must be shorter than the period ({period})"
        )));
    }
    Ok(())
}

fn timing(delay: f64, rise: f64, fall: f64, width: f64, period: f64) -> NetlistResult<()> {
    non_negative(delay, "delay")?;
    non_negative(rise, "rise time")?;
    non_negative(fall, "fall time")?;
    non_negative(width, "pulse width")?;
    if finite(period, "period")? <= 0.0 {
        return Err(invalid(format!("period must be positive, got {period}")));
    }
    Ok(())
}

/// Independent voltage source driving the network between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoltageSource {
    pub number: u32,
    pub plus: String,
    pub minus: String,
    pub waveform: Waveform,
}

impl VoltageSource {
    /// Source `V{number}` across the input and ground electrodes.
    pub fn across_electrodes(number: u32, waveform: Waveform) -> Self {
        Self {
            number,
            plus: crate::mapper::INPUT_NODE.to_string(),
            minus: crate::mapper::GROUND_NODE.to_string(),
            waveform,
        }
    }

    pub fn name(&self) -> String {
        format!("V{}", self.number)
    }

    pub fn line(&self) -> String {
        format!(
            "{} {} {} {}",
            self.name(),
            self.plus,
            self.minus,
            self.waveform.descriptor()
        )
    }

    /// Branch current vector as the simulator names it, e.g. `i(v1)`.
    pub fn current_probe(&self) -> String {
        format!("i(v{})", self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pulse() -> Waveform {
        Waveform::Pulse {
            initial: 0.0,
            pulsed: 1.0,
            delay: 0.0,
            rise: 0.0,
            fall: 0.0,
            width: 0.5,
            period: 1.0,
            count: 0,
        }
    }

    #[test]
    fn sine_descriptor() {
        let sine = Waveform::Sine {
            offset: 0.0,
            amplitude: 1.5,
            frequency: 1000.0,
            delay: 0.0,
            damping: 0.0,
            phase: 0.0,
        };
        assert_eq!(sine.descriptor(), "sin 0 1.5 1000 0 0 0");
    }

    #[test]
    fn source_line_and_probe() {
        let source = VoltageSource::across_electrodes(1, pulse());
        assert_eq!(source.line(), "V1 vin gnd pulse 0 1 0 0 0 0.5 1 0");
        assert_eq!(source.current_probe(), "i(v1)");
    }

    #[test]
    fn pwl_expands_one_row_per_level() {
        let pwl = Waveform::PiecewiseLinear {
            base: 0.0,
            levels: vec![1.0, -1.0],
            delay: 0.0,
            rise: 0.25,
            fall: 0.25,
            width: 0.5,
            period: 2.0,
        };
        assert_eq!(
            pwl.descriptor(),
            "pwl(\n+ 0 0\n+ 0.25 1 0.75 1 1 0 2 0\n+ 2.25 -1 2.75 -1 3 0 4 0\n+ )"
        );
    }

    #[test]
    fn pwl_without_levels_is_invalid() {
        let pwl = Waveform::PiecewiseLinear {
            base: 0.0,
            levels: Vec::new(),
            delay: 0.0,
            rise: 0.0,
            fall: 0.0,
            width: 0.5,
            period: 1.0,
        };
        assert!(matches!(
            pwl.validate(),
            Err(NetlistError::InvalidWaveform { .. })
        ));
    }

    fn pwl(rise: f64, width: f64, fall: f64, period: f64) -> Waveform {
        Waveform::PiecewiseLinear {
            base: 0.0,
            levels: vec![1.0, -1.0],
            delay: 0.0,
            rise,
            fall,
            width,
            period,
        }
    }

    #[test]
    fn pwl_breakpoint_times_strictly_increase() {
        let ok = pwl(0.25, 0.5, 0.25, 2.0);
        ok.validate().unwrap();

        let descriptor = ok.descriptor();
        let times: Vec<f64> = descriptor
            .lines()
            .filter_map(|row| row.strip_prefix("+ "))
            .filter(|row| *row != ")")
            .flat_map(|row| {
                row.split_whitespace()
                    .step_by(2)
                    .map(|t| t.parse::<f64>().unwrap())
                    .collect::<Vec<_>>()
            })
            .collect();
        assert_eq!(times.len(), 9);
        assert!(times.windows(2).all(|w| w[0] < w[1]), "{times:?}");
    }

    #[test]
    fn pwl_zero_edges_are_invalid() {
        assert!(pwl(0.0, 0.5, 0.25, 2.0).validate().is_err());
        assert!(pwl(0.25, 0.5, 0.0, 2.0).validate().is_err());
        assert!(pwl(0.25, 0.0, 0.25, 2.0).validate().is_err());
    }

    #[test]
    fn pwl_pulse_must_end_before_period() {
        assert!(pwl(0.25, 0.5, 0.25, 1.0).validate().is_err());
        assert!(pwl(0.25, 1.0, 0.25, 1.0).validate().is_err());
        assert!(pwl(0.25, 0.5, 0.25, 1.01).validate().is_ok());
    }

    #[test]
    fn zero_period_is_invalid() {
        let bad = Waveform::Pulse {
            initial: 0.0,
            pulsed: 1.0,
            delay: 0.0,
            rise: 0.0,
            fall: 0.0,
            width: 0.5,
            period: 0.0,
            count: 0,
        };
        assert!(bad.validate().is_err());
        assert!(pulse().validate().is_ok());
    }
}
