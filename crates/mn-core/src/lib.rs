//! mn-core: shared foundation for memnet.
//!
//! Contains:
//! - numeric (Real + finiteness and probability checks)
//! - ids (compact IDs for graph objects)
//! - model (memristor model families and their file naming)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod model;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use ids::*;
pub use model::ModelFamily;
pub use numeric::*;
