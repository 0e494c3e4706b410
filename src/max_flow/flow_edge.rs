//!
//! FlowEdge definition
//!
use super::{Cost, FlowRateLike};
use petgraph::graph::EdgeIndex;

/// Edge of FlowNetwork
///
/// * `capacity()`: capacity `u(e)`, fixed at creation
/// * `flow()`: current flow `f(e)`
/// * `residual()`: index of the paired reverse edge
///
/// Every edge added to a network comes with a reverse edge of capacity zero.
/// The two point at each other by `EdgeIndex`, and a flow change on one is
/// mirrored on the other (see `FlowNetwork::augment`).
///
/// `u, f, c`
#[derive(Debug, Copy, Clone)]
pub struct FlowEdge<F: FlowRateLike> {
    capacity: F,
    pub(crate) flow: F,
    /// cost per unit flow. Not used by max flow.
    pub cost: Cost,
    pub original_cost: Cost,
    pub(crate) residual: EdgeIndex,
}

impl<F: FlowRateLike> FlowEdge<F> {
    pub(crate) fn new(capacity: F, cost: Cost, residual: EdgeIndex) -> FlowEdge<F> {
        FlowEdge {
            capacity,
            flow: F::zero(),
            cost,
            original_cost: cost,
            residual,
        }
    }
    /// Capacity of the edge, Upper limit of the flow
    pub fn capacity(&self) -> F {
        self.capacity
    }
    pub fn flow(&self) -> F {
        self.flow
    }
    /// The paired reverse edge
    pub fn residual(&self) -> EdgeIndex {
        self.residual
    }
    /// A residual edge exists only to cancel flow of its partner
    pub fn is_residual(&self) -> bool {
        self.capacity == F::zero()
    }
    /// `u(e) - f(e)`
    ///
    /// For a residual edge carrying `-x` this is `x`, the amount that can be cancelled.
    pub fn remaining_capacity(&self) -> F {
        self.capacity - self.flow
    }
}

impl<F: FlowRateLike> std::fmt::Display for FlowEdge<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.flow, self.capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::super::utils::ei;
    use super::*;

    #[test]
    fn flow_edge_new() {
        let e: FlowEdge<i64> = FlowEdge::new(10, 3, ei(1));
        assert_eq!(e.capacity(), 10);
        assert_eq!(e.flow(), 0);
        assert_eq!(e.cost, 3);
        assert_eq!(e.original_cost, 3);
        assert_eq!(e.residual(), ei(1));
        assert!(!e.is_residual());
        assert_eq!(e.remaining_capacity(), 10);
        assert_eq!(e.to_string(), "0/10");
    }

    #[test]
    fn residual_edge_remaining_capacity() {
        let mut r: FlowEdge<i64> = FlowEdge::new(0, -3, ei(0));
        assert!(r.is_residual());
        assert_eq!(r.remaining_capacity(), 0);
        r.flow = -4;
        assert_eq!(r.remaining_capacity(), 4);
    }
}
