use crate::error::GraphError;
use crate::vertex::{Vertex, Vertices};
use num_traits::NumAssign;

#[derive(PartialEq, Debug, Clone)]
pub struct Arc<Flow> {
    pub from: usize,
    pub to: usize,
    pub upper: Flow,
}

/// Directed graph with a capacity on every arc.
///
/// Arcs are stored on dense vertex indices; every public method takes and
/// returns vertex ids.
#[derive(Debug, Clone)]
pub struct DirectedGraph<Flow> {
    pub(crate) vertices: Vertices,
    pub(crate) arcs: Vec<Arc<Flow>>,
    pub(crate) adjacency: Vec<Vec<usize>>,
}

impl<Flow> Default for DirectedGraph<Flow> {
    fn default() -> Self {
        DirectedGraph { vertices: Vertices::default(), arcs: Vec::new(), adjacency: Vec::new() }
    }
}

impl<Flow> DirectedGraph<Flow>
where
    Flow: NumAssign + PartialOrd + Copy,
{
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn num_arcs(&self) -> usize {
        self.arcs.len()
    }

    pub fn add_vertex(&mut self, id: usize, label: Option<String>) -> Result<(), GraphError> {
        self.vertices.insert(id, label)?;
        self.adjacency.push(Vec::new());
        Ok(())
    }

    pub fn add_vertices<I>(&mut self, ids: I) -> Result<(), GraphError>
    where
        I: IntoIterator<Item = usize>,
    {
        ids.into_iter().try_for_each(|id| self.add_vertex(id, None))
    }

    // return arc index
    pub fn add_arc(&mut self, from: usize, to: usize, upper: Flow) -> Result<usize, GraphError> {
        let (u, v) = (self.vertices.index_of(from)?, self.vertices.index_of(to)?);
        self.arcs.push(Arc { from: u, to: v, upper });
        self.adjacency[u].push(self.arcs.len() - 1);
        Ok(self.arcs.len() - 1)
    }

    pub fn get_arc(&self, arc_id: usize) -> Option<Arc<Flow>> {
        let arc = self.arcs.get(arc_id)?;
        Some(Arc { from: self.vertices.id(arc.from), to: self.vertices.id(arc.to), upper: arc.upper })
    }

    pub fn contains(&self, id: usize) -> bool {
        self.vertices.contains(id)
    }

    pub fn get_all_vertices(&self) -> Vec<usize> {
        self.vertices.ids()
    }

    pub fn vertex(&self, id: usize) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    pub fn label(&self, id: usize) -> Option<&str> {
        self.vertices.get(id).map(|v| v.label.as_str())
    }

    // out-degree
    pub fn degree(&self, id: usize) -> Result<usize, GraphError> {
        Ok(self.adjacency[self.vertices.index_of(id)?].len())
    }

    pub fn neighbors(&self, id: usize) -> Result<Vec<(usize, Flow)>, GraphError> {
        let u = self.vertices.index_of(id)?;
        Ok(self.adjacency[u].iter().map(|&a| (self.vertices.id(self.arcs[a].to), self.arcs[a].upper)).collect())
    }

    /// Total capacity of the arcs `from -> to`, zero when there is none or a
    /// vertex is unknown.
    pub fn arc_capacity(&self, from: usize, to: usize) -> Flow {
        let (Ok(u), Ok(v)) = (self.vertices.index_of(from), self.vertices.index_of(to)) else {
            return Flow::zero();
        };
        self.adjacency[u].iter().map(|&a| &self.arcs[a]).filter(|arc| arc.to == v).fold(Flow::zero(), |sum, arc| sum + arc.upper)
    }
}
