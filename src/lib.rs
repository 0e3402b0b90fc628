pub mod error;
pub mod loader;
pub mod maximum_flow;
pub mod maximum_matching;
pub mod status;
pub mod vertex;

pub use error::GraphError;
