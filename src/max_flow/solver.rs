//! # `MaxFlowSolver`
//!
//! Runs a max flow algorithm on an owned `FlowNetwork` at most once, and caches the result.
//!
//! Every result accessor (`max_flow`, `min_cut`, `graph`) solves lazily on first use.
//! `recompute` drops the cached result so that the next accessor solves again.
//!
use super::dinic::dinic;
use super::utils::draw;
use super::{FlowNetwork, FlowRateLike, VisitedSet};
use crate::error::Result;
use petgraph::graph::NodeIndex;
use tracing::debug;

/// Max flow algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Dinic's blocking flow algorithm
    #[default]
    Dinic,
}

/// Result of a solve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution<F: FlowRateLike> {
    /// total flow from the source into the sink
    pub max_flow: F,
    /// `min_cut[v]` is true iff `v` is on the source side of the minimum cut
    pub min_cut: Vec<bool>,
}

impl<F: FlowRateLike> Solution<F> {
    pub fn new(max_flow: F, min_cut: Vec<bool>) -> Solution<F> {
        Solution { max_flow, min_cut }
    }
}

#[derive(Debug, Clone)]
pub struct MaxFlowSolver<F: FlowRateLike = i64> {
    network: FlowNetwork<F>,
    algorithm: Algorithm,
    visited: VisitedSet,
    solution: Option<Solution<F>>,
    runs: usize,
}

impl<F: FlowRateLike> MaxFlowSolver<F> {
    pub fn new(network: FlowNetwork<F>) -> MaxFlowSolver<F> {
        MaxFlowSolver::with_algorithm(network, Algorithm::default())
    }

    pub fn with_algorithm(network: FlowNetwork<F>, algorithm: Algorithm) -> MaxFlowSolver<F> {
        let visited = VisitedSet::new(network.node_count());
        MaxFlowSolver {
            network,
            algorithm,
            visited,
            solution: None,
            runs: 0,
        }
    }

    ///
    /// Solve if not solved yet, and return the cached solution.
    ///
    pub fn execute(&mut self) -> &Solution<F> {
        let solution = match self.solution.take() {
            Some(solution) => solution,
            None => self.solve(),
        };
        self.solution.insert(solution)
    }

    fn solve(&mut self) -> Solution<F> {
        self.runs += 1;
        debug!(
            "solving {:?} source={} sink={} run={}",
            self.algorithm,
            self.network.source().index(),
            self.network.sink().index(),
            self.runs
        );
        let solution = match self.algorithm {
            Algorithm::Dinic => dinic(&mut self.network, &mut self.visited),
        };
        draw(&self.network);
        solution
    }

    /// Maximum flow from the source to the sink
    pub fn max_flow(&mut self) -> F {
        self.execute().max_flow
    }

    /// Source side (`true`) and sink side (`false`) of the minimum cut
    pub fn min_cut(&mut self) -> &[bool] {
        &self.execute().min_cut
    }

    /// The network after solving. Flow of each edge shows how the max flow is routed.
    pub fn graph(&mut self) -> &FlowNetwork<F> {
        self.execute();
        &self.network
    }

    ///
    /// Forget the cached solution and zero all flows,
    /// so that the next accessor solves again from scratch for the current source/sink.
    ///
    pub fn recompute(&mut self) {
        self.solution = None;
        self.network.reset_flows();
    }

    /// Cached solution, without solving
    pub fn solution(&self) -> Option<&Solution<F>> {
        self.solution.as_ref()
    }

    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }

    /// Number of times the algorithm has actually run
    pub fn runs(&self) -> usize {
        self.runs
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The network, without solving
    pub fn network(&self) -> &FlowNetwork<F> {
        &self.network
    }

    pub fn into_network(self) -> FlowNetwork<F> {
        self.network
    }

    //
    // source/sink. Changing them does not invalidate the cache; call `recompute`.
    //

    pub fn set_source(&mut self, s: NodeIndex) -> Result<()> {
        self.network.set_source(s)
    }

    pub fn set_sink(&mut self, t: NodeIndex) -> Result<()> {
        self.network.set_sink(t)
    }

    pub fn source(&self) -> NodeIndex {
        self.network.source()
    }

    pub fn sink(&self) -> NodeIndex {
        self.network.sink()
    }

    //
    // visited marker for graph sub-routines
    //

    pub fn visit(&mut self, node: NodeIndex) {
        self.visited.visit(node)
    }

    pub fn visited(&self, node: NodeIndex) -> bool {
        self.visited.is_visited(node)
    }

    pub fn mark_all_unvisited(&mut self) {
        self.visited.mark_all_unvisited()
    }
}

//
// tests
//
#[cfg(test)]
mod tests {
    use super::super::flow::{cut_capacity, is_valid_flow};
    use super::super::mocks::{mock_disconnected_network, mock_flow_network1};
    use super::super::utils::ni;
    use super::*;

    #[test]
    fn solves_lazily_and_once() {
        let mut solver = MaxFlowSolver::new(mock_flow_network1());
        assert!(!solver.is_solved());
        assert_eq!(solver.runs(), 0);
        assert!(solver.solution().is_none());

        assert_eq!(solver.max_flow(), 19);
        assert_eq!(solver.runs(), 1);
        assert_eq!(solver.max_flow(), 19);
        assert_eq!(solver.min_cut(), &[true, false, true, false, false, false]);
        let g = solver.graph();
        assert!(is_valid_flow(g));
        assert_eq!(solver.runs(), 1);
        assert_eq!(solver.algorithm(), Algorithm::Dinic);
    }

    #[test]
    fn graph_triggers_solve() {
        let mut solver = MaxFlowSolver::new(mock_flow_network1());
        let total: i64 = {
            let g = solver.graph();
            g.adjacency(g.source())
                .iter()
                .map(|&e| g.edge(e).flow())
                .sum()
        };
        assert_eq!(total, 19);
        assert_eq!(solver.runs(), 1);
    }

    #[test]
    fn recompute_solves_again_from_scratch() {
        let mut solver = MaxFlowSolver::new(mock_flow_network1());
        assert_eq!(solver.max_flow(), 19);

        // new source/sink is not seen until recompute
        solver.set_source(ni(1)).unwrap();
        solver.set_sink(ni(3)).unwrap();
        assert_eq!(solver.max_flow(), 19);
        assert_eq!(solver.runs(), 1);

        solver.recompute();
        assert!(!solver.is_solved());
        // 1->3 (4) and 1->4->3 (6)
        assert_eq!(solver.max_flow(), 10);
        assert_eq!(solver.runs(), 2);
        let cut = solver.min_cut().to_vec();
        assert_eq!(cut_capacity(solver.graph(), &cut), 10);

        // same source/sink again gives the same answer
        solver.recompute();
        assert_eq!(solver.max_flow(), 10);
        assert_eq!(solver.runs(), 3);
    }

    #[test]
    fn disconnected_gives_zero() {
        let mut solver = MaxFlowSolver::new(mock_disconnected_network());
        assert_eq!(solver.max_flow(), 0);
        assert_eq!(solver.min_cut(), &[true, true, false, false]);
    }

    #[test]
    fn zero_capacity_network_cut_is_just_the_source() {
        let mut g: FlowNetwork = FlowNetwork::with_nodes(3);
        g.add_edge(ni(0), ni(1), 0).unwrap();
        g.add_edge(ni(1), ni(2), 0).unwrap();
        let mut solver = MaxFlowSolver::new(g);
        assert_eq!(solver.max_flow(), 0);
        assert_eq!(solver.min_cut(), &[true, false, false]);
    }

    #[test]
    fn visited_marker() {
        let mut solver = MaxFlowSolver::new(mock_flow_network1());
        solver.mark_all_unvisited();
        solver.visit(ni(3));
        assert!(solver.visited(ni(3)));
        assert!(!solver.visited(ni(2)));
        solver.mark_all_unvisited();
        assert!(!solver.visited(ni(3)));
    }
}
