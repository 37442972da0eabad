//! mn-graph: network topologies for memnet.
//!
//! Provides:
//! - Network descriptions (`NetworkSpec`) and their flat, loosely-typed form
//!   (`NetworkParameters`) as found in request files
//! - An immutable, edge-ordered `Graph` and the incremental `GraphBuilder`
//! - Generators for 2D grids, random regular graphs and Watts–Strogatz
//!   small worlds, plus Bernoulli edge thinning
//! - Electrode selection (`ElectrodePair`)
//!
//! # Example
//!
//! ```
//! use mn_graph::{NetworkSpec, TopologyBuilder};
//!
//! let graph = TopologyBuilder::new(NetworkSpec::Grid2D { rows: 2, cols: 3 })
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(graph.node_count(), 6);
//! assert_eq!(graph.edge_count(), 7);
//! ```

pub mod builder;
pub mod electrodes;
pub mod error;
pub mod generators;
pub mod graph;
pub mod key;
pub mod spec;
pub mod thinning;
pub mod topology;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::GraphBuilder;
pub use electrodes::ElectrodePair;
pub use error::{GraphError, GraphResult};
pub use graph::{Edge, Graph};
pub use key::NodeKey;
pub use spec::{NetworkKind, NetworkParameters, NetworkSpec};
pub use thinning::thin_edges;
pub use topology::TopologyBuilder;
