pub mod edmonds_karp;
pub mod graph;
pub mod residual_network;

pub use edmonds_karp::{maximum_flow, EdmondsKarp};
pub use graph::DirectedGraph;
pub use residual_network::ResidualNetwork;
