//!
//! Dinic's max flow algorithm
//!
//! Each phase
//! 1. builds the level graph by BFS from the source on edges with remaining capacity
//! 2. pushes a blocking flow along paths whose levels increase by exactly one
//!
//! and it stops when the sink is unreachable. The nodes reached by the last BFS
//! are the source side of a minimum cut.
//!
//! The blocking flow search keeps a cursor `next[v]` into the adjacency list of each node.
//! An edge leading to a dead end is skipped for the rest of the phase (Even-Itai pruning).
//!
use super::solver::Solution;
use super::{FlowNetwork, FlowRateLike, VisitedSet};
use itertools::Itertools; // for join
use petgraph::graph::{EdgeIndex, NodeIndex};
use std::collections::VecDeque;
use tracing::{debug, trace, warn};

/// Level (BFS distance from the source) of each node. `None` if unreached.
pub type Levels = Vec<Option<usize>>;

///
/// Find the maximum flow from `network.source()` to `network.sink()`.
///
/// Flows of the edges are updated in place. `visited` is resized to the node count if needed.
///
/// If the total does not fit in `F`, it is clamped at the max value of `F` and the flows
/// of the edges are still maximized.
///
pub fn dinic<F: FlowRateLike>(network: &mut FlowNetwork<F>, visited: &mut VisitedSet) -> Solution<F> {
    let n = network.node_count();
    let (s, t) = (network.source(), network.sink());
    if visited.len() != n {
        debug!("resize visited set {} -> {}", visited.len(), n);
        visited.resize(n);
    }

    if n == 0 {
        warn!("dinic on an empty network");
        return Solution::new(F::zero(), Vec::new());
    }
    if s == t {
        warn!("dinic with source == sink ({}), no flow is pushed", s.index());
        let mut min_cut = vec![false; n];
        min_cut[s.index()] = true;
        return Solution::new(F::zero(), min_cut);
    }

    let mut level: Levels = vec![None; n];
    let mut next = vec![0; n];
    let mut max_flow = F::zero();
    let mut phase = 0;
    let mut saturated = false;

    while build_level_graph(network, visited, &mut level) {
        next.fill(0);
        let mut phase_flow = F::zero();
        loop {
            let f = push_blocking_path(network, &level, &mut next);
            if !f.is_positive() {
                break;
            }
            phase_flow = accumulate(phase_flow, f, &mut saturated);
        }
        debug!(
            "dinic phase={} distance={:?} flow={}",
            phase,
            level[t.index()],
            phase_flow
        );
        max_flow = accumulate(max_flow, phase_flow, &mut saturated);
        phase += 1;
    }

    // source side of the cut: reached by the last BFS
    let min_cut: Vec<bool> = level.iter().map(Option::is_some).collect();
    debug!(
        "dinic done phases={} max_flow={} n_source_side={}",
        phase,
        max_flow,
        min_cut.iter().filter(|&&b| b).count()
    );
    Solution::new(max_flow, min_cut)
}

///
/// `total + amount`, clamped at the max value of `F`. Warns the first time it clamps.
///
fn accumulate<F: FlowRateLike>(total: F, amount: F, saturated: &mut bool) -> F {
    total.checked_add(amount).unwrap_or_else(|| {
        if !*saturated {
            warn!("max flow overflows, clamped at {}", total.saturating_add(amount));
            *saturated = true;
        }
        total.saturating_add(amount)
    })
}

///
/// BFS from the source along edges with remaining capacity.
///
/// Returns true if the sink was reached.
///
fn build_level_graph<F: FlowRateLike>(
    network: &FlowNetwork<F>,
    visited: &mut VisitedSet,
    level: &mut [Option<usize>],
) -> bool {
    let (s, t) = (network.source(), network.sink());
    level.fill(None);
    visited.mark_all_unvisited();

    let mut queue = VecDeque::with_capacity(network.node_count());
    visited.visit(s);
    level[s.index()] = Some(0);
    queue.push_back(s);

    while let Some(u) = queue.pop_front() {
        let next_level = level[u.index()].map(|l| l + 1);
        for &e in network.adjacency(u) {
            let (_, v) = network.endpoints(e);
            if network.edge(e).remaining_capacity().is_positive() && !visited.is_visited(v) {
                visited.visit(v);
                level[v.index()] = next_level;
                queue.push_back(v);
            }
        }
    }

    level[t.index()].is_some()
}

///
/// First edge at or after the cursor of `at` that has remaining capacity and goes one level deeper.
///
/// Inadmissible edges are passed over by moving the cursor.
///
fn admissible_edge<F: FlowRateLike>(
    network: &FlowNetwork<F>,
    level: &[Option<usize>],
    next: &mut [usize],
    at: NodeIndex,
) -> Option<EdgeIndex> {
    let expected = level[at.index()]? + 1;
    let adjacency = network.adjacency(at);
    let cursor = &mut next[at.index()];

    while *cursor < adjacency.len() {
        let e = adjacency[*cursor];
        let (_, to) = network.endpoints(e);
        if network.edge(e).remaining_capacity().is_positive() && level[to.index()] == Some(expected) {
            return Some(e);
        }
        *cursor += 1;
    }
    None
}

///
/// Find a single source-to-sink path in the level graph and augment it by its bottleneck.
///
/// Uses an explicit stack of edges instead of recursion. When the top node has no admissible
/// edge left, the edge into it is popped and its tail's cursor is moved past it.
///
/// Returns the augmented amount, or zero if the level graph is blocked.
///
fn push_blocking_path<F: FlowRateLike>(
    network: &mut FlowNetwork<F>,
    level: &[Option<usize>],
    next: &mut [usize],
) -> F {
    let (s, t) = (network.source(), network.sink());
    let mut path: Vec<EdgeIndex> = Vec::new();

    loop {
        let at = path.last().map_or(s, |&e| network.endpoints(e).1);

        if at == t {
            let bottleneck = path
                .iter()
                .map(|&e| network.edge(e).remaining_capacity())
                .fold(F::infinity(), std::cmp::min);
            for &e in path.iter() {
                network.augment(e, bottleneck);
            }
            trace!(
                "augment {} along {}",
                bottleneck,
                path.iter().map(|e| e.index()).join(",")
            );
            return bottleneck;
        }

        match admissible_edge(network, level, next, at) {
            Some(e) => path.push(e),
            None => match path.pop() {
                // dead end: never try this edge again in the current phase
                Some(e) => {
                    let (u, _) = network.endpoints(e);
                    next[u.index()] += 1;
                }
                None => return F::zero(),
            },
        }
    }
}
