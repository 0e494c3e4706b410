//! # `FlowNetwork`
//!
//! Flow network with paired residual edges.
//!
//! Edges live in a `petgraph::DiGraph` arena, so an edge and its residual partner
//! refer to each other by `EdgeIndex`. Node weights are display labels.
//!
//! Besides the arena, the network keeps
//! * a per-node adjacency list of outgoing edge indices (residual edges included)
//!   in insertion order
//! * a flat list of forward edges in insertion order
//! * the source and sink of the next solve
//!
use super::{Cost, FlowEdge, FlowRateLike};
use crate::error::{FlowError, Result};
use itertools::Itertools; // for join
use petgraph::dot::Dot;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use tracing::trace;

#[derive(Debug, Clone)]
pub struct FlowNetwork<F: FlowRateLike = i64> {
    graph: DiGraph<String, FlowEdge<F>>,
    adjacency: Vec<Vec<EdgeIndex>>,
    edges: Vec<EdgeIndex>,
    source: NodeIndex,
    sink: NodeIndex,
}

impl<F: FlowRateLike> FlowNetwork<F> {
    ///
    /// Create a network of `n` nodes labelled by `labels`.
    ///
    /// Fails if the number of labels is not `n`.
    ///
    pub fn new<I, S>(n: usize, labels: I) -> Result<FlowNetwork<F>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.len() != n {
            return Err(FlowError::invalid(format!(
                "You must pass {} number of labels, got {}",
                n,
                labels.len()
            )));
        }

        Ok(FlowNetwork::from_labels(labels))
    }

    ///
    /// Create a network of `n` nodes labelled by their index.
    ///
    pub fn with_nodes(n: usize) -> FlowNetwork<F> {
        FlowNetwork::from_labels((0..n).map(|i| i.to_string()).collect())
    }

    fn from_labels(labels: Vec<String>) -> FlowNetwork<F> {
        let n = labels.len();
        let mut graph = DiGraph::with_capacity(n, 0);
        for label in labels {
            graph.add_node(label);
        }
        FlowNetwork {
            graph,
            adjacency: vec![Vec::new(); n],
            edges: Vec::new(),
            source: NodeIndex::new(0),
            sink: NodeIndex::new(n.saturating_sub(1)),
        }
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of forward edges (residual edges are not counted)
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn label(&self, node: NodeIndex) -> &str {
        &self.graph[node]
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.graph.raw_nodes().iter().map(|node| node.weight.as_str())
    }

    fn check_node(&self, node: NodeIndex) -> Result<()> {
        if node.index() < self.node_count() {
            Ok(())
        } else {
            Err(FlowError::invalid(format!(
                "node {} is out of range (n={})",
                node.index(),
                self.node_count()
            )))
        }
    }

    //
    // construction
    //

    ///
    /// Add a directed edge `from -> to` and its residual edge `to -> from` of zero capacity.
    ///
    /// Returns the index of the forward edge.
    ///
    pub fn add_edge(&mut self, from: NodeIndex, to: NodeIndex, capacity: F) -> Result<EdgeIndex> {
        self.add_edge_with_cost(from, to, capacity, 0)
    }

    ///
    /// Cost variant of `add_edge`. The residual edge gets cost `-cost`.
    ///
    pub fn add_edge_with_cost(
        &mut self,
        from: NodeIndex,
        to: NodeIndex,
        capacity: F,
        cost: Cost,
    ) -> Result<EdgeIndex> {
        if capacity.is_negative() {
            return Err(FlowError::invalid(format!("Capacity < 0 ({})", capacity)));
        }
        self.check_node(from)?;
        self.check_node(to)?;

        // indices are assigned sequentially, so the pair is (e1, e1 + 1)
        let e1 = self.graph.add_edge(
            from,
            to,
            FlowEdge::new(capacity, cost, EdgeIndex::end()),
        );
        let e2 = self
            .graph
            .add_edge(to, from, FlowEdge::new(F::zero(), -cost, e1));
        self.graph[e1].residual = e2;

        self.adjacency[from.index()].push(e1);
        self.adjacency[to.index()].push(e2);
        self.edges.push(e1);
        trace!(
            "add_edge {} -> {} capacity={} ({:?}, {:?})",
            from.index(),
            to.index(),
            capacity,
            e1,
            e2
        );
        Ok(e1)
    }

    ///
    /// Add each `(from, to, capacity)` by `add_edge`.
    ///
    /// `None` stands for an absent collection and is rejected;
    /// an empty collection is a no-op.
    ///
    pub fn add_edges<I>(&mut self, edges: Option<I>) -> Result<Vec<EdgeIndex>>
    where
        I: IntoIterator<Item = (NodeIndex, NodeIndex, F)>,
    {
        let edges = edges.ok_or_else(|| FlowError::invalid("Edges cannot be null"))?;
        edges
            .into_iter()
            .map(|(from, to, capacity)| self.add_edge(from, to, capacity))
            .collect()
    }

    pub fn set_source(&mut self, s: NodeIndex) -> Result<()> {
        self.check_node(s)?;
        self.source = s;
        Ok(())
    }

    pub fn set_sink(&mut self, t: NodeIndex) -> Result<()> {
        self.check_node(t)?;
        self.sink = t;
        Ok(())
    }

    pub fn source(&self) -> NodeIndex {
        self.source
    }

    pub fn sink(&self) -> NodeIndex {
        self.sink
    }

    //
    // accessors
    //

    /// Forward edges in insertion order
    pub fn edges(&self) -> &[EdgeIndex] {
        &self.edges
    }

    /// Outgoing edges (residual edges included) of `node` in insertion order
    pub fn adjacency(&self, node: NodeIndex) -> &[EdgeIndex] {
        &self.adjacency[node.index()]
    }

    /// All edges, forward and residual, in the arena order
    pub fn all_edges(&self) -> impl Iterator<Item = EdgeIndex> {
        self.graph.edge_indices()
    }

    pub fn edge(&self, e: EdgeIndex) -> &FlowEdge<F> {
        &self.graph[e]
    }

    /// `(from, to)` of the edge
    pub fn endpoints(&self, e: EdgeIndex) -> (NodeIndex, NodeIndex) {
        let raw = &self.graph.raw_edges()[e.index()];
        (raw.source(), raw.target())
    }

    pub fn residual(&self, e: EdgeIndex) -> EdgeIndex {
        self.graph[e].residual
    }

    //
    // flow updates
    //

    ///
    /// Push `amount` along `e`, and cancel the same amount on its residual partner.
    ///
    pub fn augment(&mut self, e: EdgeIndex, amount: F) {
        let r = self.graph[e].residual;
        self.graph[e].flow += amount;
        self.graph[r].flow -= amount;
    }

    /// Set the flow of every edge back to zero
    pub fn reset_flows(&mut self) {
        for ew in self.graph.edge_weights_mut() {
            ew.flow = F::zero();
        }
    }

    //
    // formatting
    //

    ///
    /// `Edge s -> 3 | flow = 5 | capacity = 10 | is residual: false`
    ///
    /// source and sink are shown as `s` and `t`.
    ///
    pub fn describe_edge(&self, e: EdgeIndex) -> String {
        let (u, v) = self.endpoints(e);
        let ew = self.edge(e);
        format!(
            "Edge {} -> {} | flow = {} | capacity = {} | is residual: {}",
            self.short_name(u),
            self.short_name(v),
            ew.flow(),
            ew.capacity(),
            ew.is_residual()
        )
    }

    fn short_name(&self, node: NodeIndex) -> String {
        if node == self.source {
            "s".to_string()
        } else if node == self.sink {
            "t".to_string()
        } else {
            node.index().to_string()
        }
    }

    ///
    /// `<label> ----<capacity>----> <label>` for each forward edge, in insertion order
    ///
    pub fn printable_edges(&self) -> Vec<String> {
        self.edges
            .iter()
            .map(|&e| {
                let (u, v) = self.endpoints(e);
                format!(
                    "{} ----{}----> {}",
                    self.label(u),
                    self.edge(e).capacity(),
                    self.label(v)
                )
            })
            .collect()
    }

    /// Graphviz dot of the whole residual graph
    pub fn to_dot(&self) -> String {
        format!("{}", Dot::with_config(&self.graph, &[]))
    }
}

impl<F: FlowRateLike> std::fmt::Display for FlowNetwork<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.printable_edges().iter().join("\n"))
    }
}
