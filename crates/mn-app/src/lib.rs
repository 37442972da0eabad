//! Shared service layer for memnet front-ends.
//!
//! Loads simulation requests, compiles them into netlists on disk, and drives
//! the external simulator.

pub mod compile_service;
pub mod error;
pub mod progress;
pub mod request_service;
pub mod run_service;
pub mod simulator;

pub use compile_service::{CompiledRun, compile_request};
pub use error::{AppError, AppResult};
pub use progress::{RunProgressEvent, RunStage};
pub use request_service::{NetworkSummary, load_request, summarize_network};
pub use run_service::{RunResponse, run_request, run_request_with_progress};
pub use simulator::{Ngspice, Simulator};
