//!
//! debtflow computes [maximum flow](https://en.wikipedia.org/wiki/Maximum_flow_problem)
//! by Dinic's algorithm on a network with paired residual edges,
//! and uses it to simplify debts among a group of people.
//!
pub mod error;
pub mod max_flow;
pub mod simplify;

pub use error::{FlowError, Result};
pub use max_flow::{max_flow, FlowNetwork, MaxFlowSolver};
pub use simplify::{simplify_debts, Debt, Settlement, SimplifyConfig};
