use super::utils::ni;
use super::FlowNetwork;
use crate::simplify::Debt;
use petgraph::graph::EdgeIndex;

/// mock graph generation functions
///
/// `0 --5--> 1 --3--> 2`
pub fn mock_line_network() -> (FlowNetwork, [EdgeIndex; 2]) {
    let mut graph = FlowNetwork::with_nodes(3);
    let e0 = graph.add_edge(ni(0), ni(1), 5).unwrap();
    let e1 = graph.add_edge(ni(1), ni(2), 3).unwrap();
    (graph, [e0, e1])
}

/// 6 nodes, max flow from 0 into 5 is 19
pub fn mock_flow_network1() -> FlowNetwork {
    let mut graph = FlowNetwork::with_nodes(6);
    graph
        .add_edges(Some(vec![
            (ni(0), ni(1), 10),
            (ni(0), ni(2), 10),
            (ni(1), ni(3), 4),
            (ni(1), ni(4), 8),
            (ni(2), ni(4), 9),
            (ni(3), ni(5), 10),
            (ni(4), ni(3), 6),
            (ni(4), ni(5), 10),
        ]))
        .unwrap();
    graph
}

/// 7 nodes, max flow from 0 into 6 is 15, saturating both edges out of 0
pub fn mock_flow_network2() -> FlowNetwork {
    let mut graph = FlowNetwork::with_nodes(7);
    graph
        .add_edges(Some(vec![
            (ni(0), ni(1), 10),
            (ni(0), ni(2), 5),
            (ni(1), ni(3), 9),
            (ni(1), ni(4), 3),
            (ni(2), ni(4), 7),
            (ni(2), ni(5), 2),
            (ni(3), ni(6), 10),
            (ni(4), ni(6), 10),
            (ni(5), ni(6), 5),
        ]))
        .unwrap();
    graph
}

/// `0 -> 1` and `2 -> 3` with no path from 0 into 3
pub fn mock_disconnected_network() -> FlowNetwork {
    let mut graph = FlowNetwork::with_nodes(4);
    graph.add_edge(ni(0), ni(1), 10).unwrap();
    graph.add_edge(ni(2), ni(3), 5).unwrap();
    graph
}

/// two parallel edges `0 -> 1` followed by `1 -> 2`, max flow is 5
pub fn mock_flow_network_parallel_edge() -> FlowNetwork {
    let mut graph = FlowNetwork::with_nodes(3);
    graph.add_edge(ni(0), ni(1), 3).unwrap();
    graph.add_edge(ni(0), ni(1), 2).unwrap();
    graph.add_edge(ni(1), ni(2), 10).unwrap();
    graph
}

/// People of the debt example
pub const MOCK_PEOPLE: [&str; 7] = ["Alice", "Bob", "Charlie", "David", "Ema", "Fred", "Gabe"];

/// Debts among `MOCK_PEOPLE`: `Debt::new(debtor, creditor, amount)`
pub fn mock_debts() -> Vec<Debt> {
    vec![
        // Bob
        Debt::new(1, 2, 40),
        // Charlie
        Debt::new(2, 3, 20),
        // David
        Debt::new(3, 4, 50),
        // Fred
        Debt::new(5, 1, 10),
        Debt::new(5, 2, 30),
        Debt::new(5, 3, 10),
        Debt::new(5, 4, 10),
        // Gabe
        Debt::new(6, 1, 30),
        Debt::new(6, 3, 10),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_shapes() {
        assert_eq!(mock_flow_network1().edge_count(), 8);
        assert_eq!(mock_flow_network2().edge_count(), 9);
        let g = mock_flow_network_parallel_edge();
        assert_eq!(g.adjacency(ni(0)).len(), 2);
        assert_eq!(mock_debts().len(), 9);
        assert_eq!(MOCK_PEOPLE.len(), 7);
    }
}
