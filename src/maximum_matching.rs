pub mod bipartition;
pub mod graph;
pub mod hopcroft_karp;

pub use bipartition::{detect_bipartition, Bipartition};
pub use graph::UndirectedGraph;
pub use hopcroft_karp::{maximum_matching, HopcroftKarp, Matching};
