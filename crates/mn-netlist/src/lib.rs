//! mn-netlist: SPICE netlist generation for memristor networks.
//!
//! The pipeline is
//! `Graph` + `ElectrodePair` → [`map_devices`] → `Vec<DeviceRecord>` →
//! [`compile_circuit`], with [`compile_subcircuit`] producing the shared
//! device definition the circuit includes.
//!
//! Every function here is pure: text goes in and out, files are written by
//! the caller.

pub mod analysis;
pub mod compile;
pub mod device;
pub mod error;
pub mod magnitudes;
pub mod mapper;
pub mod model;
pub mod template;
pub mod waveform;

pub use analysis::Analysis;
pub use compile::{CircuitPlan, ExportDirective, compile_circuit, compile_subcircuit};
pub use device::{DEVICE_PREFIX, DeviceRecord};
pub use error::{NetlistError, NetlistResult};
pub use magnitudes::{STATE_EXPORT_LIMIT, export_magnitudes};
pub use mapper::{map_devices, node_name};
pub use model::{
    BehaviouralSource, Component, MEMRISTOR_TERMINALS, ModelDependency, ModelParameters,
    SubcircuitDef,
};
pub use template::DeviceTemplate;
pub use waveform::{VoltageSource, Waveform};
