pub mod dinic;
pub mod flow;
pub mod flow_edge;
pub mod flow_rate;
pub mod mocks;
pub mod network;
pub mod solver;
pub mod utils;
pub mod visit;

pub use flow_edge::FlowEdge;
pub use flow_rate::FlowRateLike;
pub use network::FlowNetwork;
pub use solver::{Algorithm, MaxFlowSolver, Solution};
pub use visit::VisitedSet;

/// Cost per unit flow. Carried on edges, unused by max flow.
pub type Cost = i64;

//
// public functions
//

///
/// Find maximum flow from `network.source()` into `network.sink()` by Dinic's algorithm.
///
/// Flows are written into the network. Use `MaxFlowSolver` to solve lazily and cache the result.
///
pub fn max_flow<F: FlowRateLike>(network: &mut FlowNetwork<F>) -> Solution<F> {
    let mut visited = VisitedSet::new(network.node_count());
    dinic::dinic(network, &mut visited)
}

#[cfg(test)]
mod tests {
    use super::flow::{cut_capacity, is_valid_flow, net_outflow};
    use super::mocks::{mock_flow_network1, mock_flow_network2};
    use super::utils::ni;
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn max_flow_free_function() {
        let mut g = mock_flow_network2();
        let sol = max_flow(&mut g);
        assert_eq!(sol.max_flow, 15);
        assert_eq!(net_outflow(&g, g.source()), 15);
        assert_eq!(net_outflow(&g, g.sink()), -15);
    }

    #[test]
    fn deterministic_across_runs() {
        let mut a = mock_flow_network1();
        let mut b = mock_flow_network1();
        assert_eq!(max_flow(&mut a), max_flow(&mut b));
        let flows = |g: &FlowNetwork| -> Vec<i64> { g.all_edges().map(|e| g.edge(e).flow()).collect() };
        assert_eq!(flows(&a), flows(&b));
    }

    #[test]
    fn works_with_i32_amounts() {
        let mut g: FlowNetwork<i32> = FlowNetwork::with_nodes(3);
        g.add_edge(ni(0), ni(1), 7).unwrap();
        g.add_edge(ni(1), ni(2), 4).unwrap();
        let mut solver = MaxFlowSolver::new(g);
        assert_eq!(solver.max_flow(), 4i32);
    }

    fn arb_network() -> impl Strategy<Value = FlowNetwork> {
        (2usize..8).prop_flat_map(|n| {
            prop::collection::vec((0..n, 0..n, 0i64..20), 0..25).prop_map(move |edges| {
                let mut g = FlowNetwork::with_nodes(n);
                for (u, v, c) in edges {
                    g.add_edge(ni(u), ni(v), c).unwrap();
                }
                g
            })
        })
    }

    proptest! {
        #[test]
        fn property_flow_is_valid_and_equals_cut(g in arb_network()) {
            let mut g = g;
            let sol = max_flow(&mut g);
            prop_assert!(is_valid_flow(&g));
            prop_assert_eq!(net_outflow(&g, g.source()), sol.max_flow);
            prop_assert_eq!(cut_capacity(&g, &sol.min_cut), sol.max_flow);
            prop_assert!(sol.min_cut[g.source().index()]);
            prop_assert!(!sol.min_cut[g.sink().index()]);
        }

        #[test]
        fn property_solver_is_idempotent(g in arb_network()) {
            let mut solver = MaxFlowSolver::new(g);
            let first = solver.max_flow();
            let second = solver.max_flow();
            prop_assert_eq!(first, second);
            prop_assert_eq!(solver.runs(), 1);
            solver.recompute();
            prop_assert_eq!(solver.max_flow(), first);
            prop_assert_eq!(solver.runs(), 2);
        }
    }
}
