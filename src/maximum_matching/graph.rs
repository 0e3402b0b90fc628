use crate::error::GraphError;
use crate::vertex::{Vertex, Vertices};

/// Undirected, unweighted graph. Every edge is stored in the adjacency of
/// both endpoints.
#[derive(Default, Debug, Clone)]
pub struct UndirectedGraph {
    pub(crate) vertices: Vertices,
    pub(crate) adjacency: Vec<Vec<usize>>,
    num_edges: usize,
}

impl UndirectedGraph {
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.num_edges
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

    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<(), GraphError> {
        let (a, b) = (self.vertices.index_of(u)?, self.vertices.index_of(v)?);
        self.adjacency[a].push(b);
        if a != b {
            self.adjacency[b].push(a);
        }
        self.num_edges += 1;
        Ok(())
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

    pub fn degree(&self, id: usize) -> Result<usize, GraphError> {
        Ok(self.adjacency[self.vertices.index_of(id)?].len())
    }

    pub fn neighbors(&self, id: usize) -> Result<Vec<usize>, GraphError> {
        let u = self.vertices.index_of(id)?;
        Ok(self.adjacency[u].iter().map(|&v| self.vertices.id(v)).collect())
    }
}
