//!
//! Visited set with O(1) reset
//!
use petgraph::graph::NodeIndex;

///
/// Visited marker of nodes.
///
/// Node `v` is visited iff `stamps[v] == token`. Incrementing `token`
/// unmarks every node at once, so there is no need to clear the array between searches.
///
#[derive(Debug, Clone)]
pub struct VisitedSet {
    token: u64,
    stamps: Vec<u64>,
}

impl VisitedSet {
    pub fn new(n: usize) -> VisitedSet {
        VisitedSet {
            token: 1,
            stamps: vec![0; n],
        }
    }
    pub fn len(&self) -> usize {
        self.stamps.len()
    }
    pub fn is_empty(&self) -> bool {
        self.stamps.is_empty()
    }
    /// Resize to `n` slots. Every node is unvisited afterwards.
    pub fn resize(&mut self, n: usize) {
        self.stamps.resize(n, 0);
        self.mark_all_unvisited();
    }
    /// Mark `node` as visited
    pub fn visit(&mut self, node: NodeIndex) {
        self.stamps[node.index()] = self.token;
    }
    /// Check if `node` was visited since the last `mark_all_unvisited`
    pub fn is_visited(&self, node: NodeIndex) -> bool {
        self.stamps[node.index()] == self.token
    }
    /// Unmark all nodes, O(1)
    pub fn mark_all_unvisited(&mut self) {
        self.token += 1;
    }
}
