//! Topology generators.
//!
//! Every generator returns a `GraphBuilder` whose insertion order is the
//! family's native edge order.

mod grid;
mod random_regular;
mod watts_strogatz;

pub use grid::grid_2d;
pub use random_regular::{MAX_PAIRING_ATTEMPTS, random_regular};
pub use watts_strogatz::watts_strogatz;

use crate::builder::GraphBuilder;
use crate::error::GraphResult;
use crate::key::NodeKey;

/// Two nodes joined by one edge.
pub fn single_device() -> GraphResult<GraphBuilder> {
    let mut builder = GraphBuilder::with_nodes([NodeKey::Index(0), NodeKey::Index(1)]);
    builder.connect(NodeKey::Index(0), NodeKey::Index(1))?;
    Ok(builder)
}
