use crate::error::GraphError;
use crate::maximum_matching::graph::UndirectedGraph;
use log::debug;
use std::collections::VecDeque;

/// Two disjoint vertex sets; every edge of a bipartite graph joins `left` to
/// `right`.
#[derive(Default, PartialEq, Debug, Clone)]
pub struct Bipartition {
    pub left: Vec<usize>,
    pub right: Vec<usize>,
}

/// 2-colors the graph by BFS, starting a new component from each uncolored
/// vertex in insertion order. The first vertex of every component goes to
/// `left`, so isolated vertices always land there.
pub fn detect_bipartition(graph: &UndirectedGraph) -> Result<Bipartition, GraphError> {
    let n = graph.num_vertices();
    let mut color: Vec<Option<bool>> = vec![None; n];
    let mut que = VecDeque::new();

    for s in 0..n {
        if color[s].is_some() {
            continue;
        }
        color[s] = Some(false);
        que.push_back(s);

        while let Some(u) = que.pop_front() {
            let side = color[u] == Some(true);
            for &v in graph.adjacency[u].iter() {
                match color[v] {
                    None => {
                        color[v] = Some(!side);
                        que.push_back(v);
                    }
                    Some(c) if c == side => {
                        debug!("edge {} - {} closes an odd cycle", graph.vertices.id(u), graph.vertices.id(v));
                        return Err(GraphError::NotBipartite);
                    }
                    Some(_) => {}
                }
            }
        }
    }

    let mut bipartition = Bipartition::default();
    for (u, c) in color.into_iter().enumerate() {
        if c == Some(true) {
            bipartition.right.push(graph.vertices.id(u));
        } else {
            bipartition.left.push(graph.vertices.id(u));
        }
    }
    Ok(bipartition)
}
