//! Flow checks on a FlowNetwork
//! - capacity constraint
//! - residual symmetry
//! - flow constraint (conservation)
//! - cut capacity
use super::{FlowNetwork, FlowRateLike};
use petgraph::graph::NodeIndex;

///
/// Check if the flow is valid, i.e. it satisfies
/// - capacity constraint
/// - residual symmetry
/// - flow constraint
///
pub fn is_valid_flow<F: FlowRateLike>(network: &FlowNetwork<F>) -> bool {
    is_in_capacity(network)
        && is_residual_symmetric(network)
        && is_satisfying_flow_constraint(network)
}

///
/// For each forward edge, the flow must satisfy `0 <= flow <= capacity`.
/// This function checks it
///
pub fn is_in_capacity<F: FlowRateLike>(network: &FlowNetwork<F>) -> bool {
    network.edges().iter().all(|&e| {
        let ew = network.edge(e);
        F::zero() <= ew.flow() && ew.flow() <= ew.capacity()
    })
}

///
/// For each edge `e`, `flow(e) == -flow(residual(e))`
///
pub fn is_residual_symmetric<F: FlowRateLike>(network: &FlowNetwork<F>) -> bool {
    network.all_edges().all(|e| {
        let r = network.residual(e);
        network.residual(r) == e && network.edge(e).flow() == -network.edge(r).flow()
    })
}

///
/// (sum of out-going flows) - (sum of in-coming flows) of the node.
///
/// An in-coming edge contributes through its residual edge, which is out-going
/// and carries the negated flow.
///
pub fn net_outflow<F: FlowRateLike>(network: &FlowNetwork<F>, node: NodeIndex) -> F {
    network
        .adjacency(node)
        .iter()
        .map(|&e| network.edge(e).flow())
        .fold(F::zero(), F::saturating_add)
}

///
/// For each node except source and sink,
/// (the sum of out-going flows) should be equal to (the sum of in-coming flows).
///
pub fn is_satisfying_flow_constraint<F: FlowRateLike>(network: &FlowNetwork<F>) -> bool {
    let (s, t) = (network.source(), network.sink());
    (0..network.node_count())
        .map(NodeIndex::new)
        .filter(|&v| v != s && v != t)
        .all(|v| net_outflow(network, v) == F::zero())
}

///
/// Total capacity of forward edges going from a `true` node into a `false` node of `cut`.
/// Clamped at the max value of `F`, like the max flow.
///
pub fn cut_capacity<F: FlowRateLike>(network: &FlowNetwork<F>, cut: &[bool]) -> F {
    network
        .edges()
        .iter()
        .filter(|&&e| {
            let (u, v) = network.endpoints(e);
            cut[u.index()] && !cut[v.index()]
        })
        .map(|&e| network.edge(e).capacity())
        .fold(F::zero(), F::saturating_add)
}

//
// tests
//
#[cfg(test)]
mod tests {
    use super::super::mocks::mock_line_network;
    use super::super::utils::ni;
    use super::*;

    #[test]
    fn flow_valid_tests() {
        // 0 --5--> 1 --3--> 2
        let (mut g, [e0, e1]) = mock_line_network();
        assert!(is_valid_flow(&g));

        // this is valid flow
        g.augment(e0, 3);
        g.augment(e1, 3);
        assert!(is_in_capacity(&g));
        assert!(is_residual_symmetric(&g));
        assert!(is_satisfying_flow_constraint(&g));
        assert!(is_valid_flow(&g));
        assert_eq!(net_outflow(&g, ni(0)), 3);
        assert_eq!(net_outflow(&g, ni(2)), -3);

        // this flow overs the capacity
        g.augment(e0, 1);
        g.augment(e1, 1);
        assert!(!is_in_capacity(&g));
        assert!(is_satisfying_flow_constraint(&g));
        assert!(!is_valid_flow(&g));

        // this is a flow which not satisfies the flow constraint
        g.reset_flows();
        g.augment(e0, 2);
        assert!(is_in_capacity(&g));
        assert!(!is_satisfying_flow_constraint(&g));
        assert!(!is_valid_flow(&g));
    }

    #[test]
    fn cut_capacity_counts_forward_crossing_edges() {
        let (g, _) = mock_line_network();
        assert_eq!(cut_capacity(&g, &[true, false, false]), 5);
        assert_eq!(cut_capacity(&g, &[true, true, false]), 3);
        assert_eq!(cut_capacity(&g, &[false, true, true]), 0);
    }

    #[test]
    fn cut_capacity_is_clamped() {
        let mut g: FlowNetwork = FlowNetwork::with_nodes(2);
        g.add_edge(ni(0), ni(1), i64::MAX).unwrap();
        g.add_edge(ni(0), ni(1), 1).unwrap();
        assert_eq!(cut_capacity(&g, &[true, false]), i64::MAX);
    }
}
