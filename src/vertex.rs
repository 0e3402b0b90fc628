use crate::error::GraphError;
use std::collections::HashMap;

#[derive(PartialEq, Debug, Clone)]
pub struct Vertex {
    pub id: usize,
    pub label: String,
}

/// Vertex ids in insertion order together with their dense indices.
///
/// Graph stores keep adjacency on dense indices `0..len()`; the ids are only
/// seen at the API boundary.
#[derive(Default, Debug, Clone)]
pub struct Vertices {
    vertices: Vec<Vertex>,
    index: HashMap<usize, usize>,
}

impl Vertices {
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    // return dense index
    pub fn insert(&mut self, id: usize, label: Option<String>) -> Result<usize, GraphError> {
        if self.index.contains_key(&id) {
            return Err(GraphError::DuplicateVertex(id));
        }
        let label = label.unwrap_or_else(|| id.to_string());
        self.vertices.push(Vertex { id, label });
        self.index.insert(id, self.vertices.len() - 1);
        Ok(self.vertices.len() - 1)
    }

    #[inline]
    pub fn index_of(&self, id: usize) -> Result<usize, GraphError> {
        self.index.get(&id).copied().ok_or(GraphError::VertexNotFound(id))
    }

    #[inline]
    pub fn contains(&self, id: usize) -> bool {
        self.index.contains_key(&id)
    }

    #[inline]
    pub fn id(&self, index: usize) -> usize {
        self.vertices[index].id
    }

    pub fn get(&self, id: usize) -> Option<&Vertex> {
        self.index.get(&id).map(|&i| &self.vertices[i])
    }

    pub fn ids(&self) -> Vec<usize> {
        self.vertices.iter().map(|v| v.id).collect()
    }
}
