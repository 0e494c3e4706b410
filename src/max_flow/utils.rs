//!
//! utils
//!
use super::{FlowNetwork, FlowRateLike};
use petgraph::graph::{EdgeIndex, NodeIndex};
use tracing::Level;

/// short-hand of `NodeIndex::new`
pub fn ni(index: usize) -> NodeIndex {
    NodeIndex::new(index)
}

/// short-hand of `EdgeIndex::new`
pub fn ei(index: usize) -> EdgeIndex {
    EdgeIndex::new(index)
}

///
/// Log the whole network (residual edges included) as graphviz dot, at trace level.
///
pub fn draw<F: FlowRateLike>(network: &FlowNetwork<F>) {
    if tracing::enabled!(Level::TRACE) {
        tracing::trace!("{}", network.to_dot());
    }
}
