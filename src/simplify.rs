//!
//! Simplify debts among a group of people by repeated max flow.
//!
//! Debts form a FlowNetwork (`debtor -> creditor`, capacity = amount). Each round picks a pair
//! `(u, v)` of an edge not processed yet, and finds the max flow from `u` into `v` over the whole
//! network, so that chains of debts through other people are folded into the `u -> v` debt.
//! The next round works on a fresh network of
//!
//! * every edge with remaining capacity after the solve, with that capacity
//! * a new edge `u -> v` carrying the max flow
//!
//! Pairs never come back once processed, and new edges only use pairs already in the network,
//! so the rounds end after at most the number of distinct pairs.
//!
use crate::error::{FlowError, Result};
use crate::max_flow::utils::ni;
use crate::max_flow::{FlowNetwork, MaxFlowSolver};
use petgraph::graph::{EdgeIndex, NodeIndex};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Multiplier of the pair key `u * OFFSET + v`. Node indices must stay below it.
pub const OFFSET: u64 = 1_000_000_000;

/// `debtor` owes `amount` to `creditor`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Debt {
    pub debtor: usize,
    pub creditor: usize,
    pub amount: i64,
}

impl Debt {
    pub fn new(debtor: usize, creditor: usize, amount: i64) -> Debt {
        Debt {
            debtor,
            creditor,
            amount,
        }
    }
}

/// Which of the unprocessed edges to pick in each round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeSelection {
    /// the first one in the edge list
    First,
    /// the last one in the edge list
    #[default]
    Last,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimplifyConfig {
    pub selection: EdgeSelection,
}

/// Unique key of an ordered pair of nodes
pub fn pair_key(u: NodeIndex, v: NodeIndex) -> u64 {
    u.index() as u64 * OFFSET + v.index() as u64
}

/// Final set of transactions
#[derive(Debug, Clone)]
pub struct Settlement {
    network: FlowNetwork,
    rounds: usize,
}

impl Settlement {
    /// The last network. Its forward edges are the transactions.
    pub fn network(&self) -> &FlowNetwork {
        &self.network
    }
    pub fn into_network(self) -> FlowNetwork {
        self.network
    }
    /// Number of max flow rounds run
    pub fn rounds(&self) -> usize {
        self.rounds
    }
    pub fn transactions(&self) -> Vec<Debt> {
        self.network
            .edges()
            .iter()
            .map(|&e| {
                let (u, v) = self.network.endpoints(e);
                Debt::new(u.index(), v.index(), self.network.edge(e).capacity())
            })
            .collect()
    }
    /// `<debtor> ----<amount>----> <creditor>` lines
    pub fn printable_edges(&self) -> Vec<String> {
        self.network.printable_edges()
    }
}

impl std::fmt::Display for Settlement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.network)
    }
}

///
/// Net balance of each person: (total owed to them) - (total they owe).
///
/// Simplification keeps these balances unchanged.
/// Fails with `InvalidArgument` for a person out of range or a balance that does not fit in `i64`.
///
pub fn net_balances(n: usize, debts: &[Debt]) -> Result<Vec<i64>> {
    let mut balances = vec![0i64; n];
    for debt in debts {
        if debt.debtor >= n || debt.creditor >= n {
            return Err(FlowError::invalid(format!(
                "debt {:?} refers to a person out of range (n={})",
                debt, n
            )));
        }
        let overflow = || FlowError::invalid(format!("balance overflows at debt {:?}", debt));
        balances[debt.creditor] = balances[debt.creditor]
            .checked_add(debt.amount)
            .ok_or_else(overflow)?;
        balances[debt.debtor] = balances[debt.debtor]
            .checked_sub(debt.amount)
            .ok_or_else(overflow)?;
    }
    Ok(balances)
}

///
/// Simplify `debts` among people named `labels`.
///
/// Fails with `InvalidArgument` for a negative amount, a person out of range,
/// too many people for the pair key, or a total debt that does not fit in `i64`.
/// Debts to oneself are ignored.
///
pub fn simplify_debts<I, S>(labels: I, debts: &[Debt], config: &SimplifyConfig) -> Result<Settlement>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
    let n = labels.len();
    if n as u64 >= OFFSET {
        return Err(FlowError::invalid(format!(
            "too many people ({}), must be below {}",
            n, OFFSET
        )));
    }

    let mut network = FlowNetwork::new(n, labels.iter().cloned())?;
    // bounds every max flow below, so a consolidated amount is never clamped
    let mut total: i64 = 0;
    for debt in debts {
        if debt.debtor == debt.creditor {
            if debt.amount < 0 {
                return Err(FlowError::invalid(format!("negative debt {:?}", debt)));
            }
            warn!("ignoring debt to oneself {:?}", debt);
            continue;
        }
        network.add_edge(ni(debt.debtor), ni(debt.creditor), debt.amount)?;
        total = total.checked_add(debt.amount).ok_or_else(|| {
            FlowError::invalid(format!("total debt overflows at debt {:?}", debt))
        })?;
    }
    debug!("simplifying {} debts among {} people", network.edge_count(), n);

    let mut visited_pairs: HashSet<u64> = HashSet::new();
    let mut rounds = 0;

    while let Some(e) = next_unvisited_edge(&network, &visited_pairs, config.selection) {
        let (source, sink) = network.endpoints(e);
        network.set_source(source)?;
        network.set_sink(sink)?;

        let mut solver = MaxFlowSolver::new(network);
        let max_flow = solver.max_flow();
        let solved = solver.into_network();
        visited_pairs.insert(pair_key(source, sink));

        let mut next = FlowNetwork::new(n, labels.iter().cloned())?;
        next.add_edges(Some(leftover_edges(&solved)))?;
        if max_flow.is_positive() {
            next.add_edge(source, sink, max_flow)?;
        }

        debug!(
            "round={} {} -> {} max_flow={} n_edges={}",
            rounds,
            labels[source.index()],
            labels[sink.index()],
            max_flow,
            next.edge_count()
        );
        network = next;
        rounds += 1;
    }

    info!(
        "simplified {} debts into {} transactions in {} rounds",
        debts.len(),
        network.edge_count(),
        rounds
    );
    Ok(Settlement { network, rounds })
}

///
/// First or last forward edge whose `(from, to)` pair is not visited yet.
///
fn next_unvisited_edge(
    network: &FlowNetwork,
    visited_pairs: &HashSet<u64>,
    selection: EdgeSelection,
) -> Option<EdgeIndex> {
    let mut unvisited = network.edges().iter().copied().filter(|&e| {
        let (u, v) = network.endpoints(e);
        !visited_pairs.contains(&pair_key(u, v))
    });
    match selection {
        EdgeSelection::First => unvisited.next(),
        EdgeSelection::Last => unvisited.last(),
    }
}

///
/// Edges of a solved network that still can carry something, node by node in adjacency order.
///
/// The leftover of an edge is `capacity` if its flow is negative (a residual edge),
/// and `capacity - flow` otherwise.
///
fn leftover_edges(network: &FlowNetwork) -> Vec<(NodeIndex, NodeIndex, i64)> {
    (0..network.node_count())
        .map(NodeIndex::new)
        .flat_map(|v| network.adjacency(v).iter().copied())
        .filter_map(|e| {
            let ew = network.edge(e);
            let leftover = if ew.flow().is_negative() {
                ew.capacity()
            } else {
                ew.remaining_capacity()
            };
            if leftover.is_positive() {
                let (u, v) = network.endpoints(e);
                Some((u, v, leftover))
            } else {
                None
            }
        })
        .collect()
}
