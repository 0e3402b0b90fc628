use thiserror::Error;

/// Malformed input detected while building a graph or before a solver runs.
///
/// Running out of augmenting paths is the normal end of both solvers and is
/// never reported through this type.
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("vertex {0} is not in the graph")]
    VertexNotFound(usize),

    #[error("vertex {0} was added twice")]
    DuplicateVertex(usize),

    #[error("arc {from} -> {to} has a negative capacity")]
    NegativeCapacity { from: usize, to: usize },

    #[error("arc {from} -> {to} has a capacity that is not finite")]
    NonFiniteCapacity { from: usize, to: usize },

    #[error("push along {from} -> {to} exceeds its residual capacity")]
    ExceedsResidual { from: usize, to: usize },

    #[error("no arc {from} -> {to} in the residual network")]
    ArcNotFound { from: usize, to: usize },

    #[error("self-loop on vertex {0}")]
    SelfLoop(usize),

    #[error("graph is not bipartite")]
    NotBipartite,

    #[error("invalid bipartition: {0}")]
    InvalidPartition(String),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
