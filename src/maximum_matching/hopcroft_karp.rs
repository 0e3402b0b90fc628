use crate::error::GraphError;
use crate::maximum_matching::bipartition::{detect_bipartition, Bipartition};
use crate::maximum_matching::graph::UndirectedGraph;
use crate::status::Status;
use log::{debug, trace};
use std::collections::{BTreeMap, VecDeque};

const INF: usize = usize::MAX;

/// A maximum matching: every left vertex mapped to its right mate, or `None`
/// when it stays unmatched.
#[derive(Default, PartialEq, Debug, Clone)]
pub struct Matching {
    pub size: usize,
    pub pairs: BTreeMap<usize, Option<usize>>,
}

impl Matching {
    pub fn mate(&self, left: usize) -> Option<usize> {
        self.pairs.get(&left).copied().flatten()
    }

    /// Matched edges as `(smaller id, larger id)`, sorted.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut edges: Vec<_> = self.pairs.iter().filter_map(|(&u, &v)| v.map(|v| (u.min(v), u.max(v)))).collect();
        edges.sort_unstable();
        edges
    }
}

/// Hopcroft-Karp maximum bipartite matching solver.
///
/// Works in phases: `layer` builds BFS layers from the free left vertices and
/// `augment_phase` flips a maximal set of shortest augmenting paths found by
/// a layered DFS. The solver is done once `layer` reaches no free right vertex.
pub struct HopcroftKarp {
    left: Vec<usize>,
    right: Vec<usize>,
    // left index -> right indices
    adjacency: Vec<Vec<usize>>,
    pair_left: Vec<Option<usize>>,
    pair_right: Vec<Option<usize>>,
    dist: Vec<usize>,
    // layer at which a free right vertex is first reached
    dist_free: usize,
    current_edge: Vec<usize>,
    stack: Vec<usize>,
    que: VecDeque<usize>,
    size: usize,
    num_phases: usize,
    status: Status,
}

impl HopcroftKarp {
    pub fn new(graph: &UndirectedGraph, bipartition: &Bipartition) -> Result<Self, GraphError> {
        // (is right, index within its partition) per graph vertex
        let mut side: Vec<Option<(bool, usize)>> = vec![None; graph.num_vertices()];
        for (is_right, partition) in [(false, &bipartition.left), (true, &bipartition.right)] {
            for (i, &id) in partition.iter().enumerate() {
                let u = graph.vertices.index_of(id)?;
                if side[u].is_some() {
                    return Err(GraphError::InvalidPartition(format!("vertex {} appears twice", id)));
                }
                side[u] = Some((is_right, i));
            }
        }

        for u in 0..graph.num_vertices() {
            let Some((u_right, _)) = side[u] else {
                if graph.adjacency[u].is_empty() {
                    continue;
                }
                return Err(GraphError::InvalidPartition(format!("vertex {} is in neither partition", graph.vertices.id(u))));
            };
            if graph.adjacency[u].iter().any(|&v| matches!(side[v], Some((v_right, _)) if v_right == u_right)) {
                return Err(GraphError::NotBipartite);
            }
        }

        let mut adjacency: Vec<Vec<usize>> = Vec::with_capacity(bipartition.left.len());
        for &id in bipartition.left.iter() {
            let u = graph.vertices.index_of(id)?;
            adjacency.push(graph.adjacency[u].iter().filter_map(|&v| side[v].map(|(_, j)| j)).collect());
        }

        let (nl, nr) = (bipartition.left.len(), bipartition.right.len());
        debug!("hopcroft-karp: {} left, {} right, {} edges", nl, nr, adjacency.iter().map(Vec::len).sum::<usize>());

        Ok(HopcroftKarp {
            left: bipartition.left.clone(),
            right: bipartition.right.clone(),
            adjacency,
            pair_left: vec![None; nl],
            pair_right: vec![None; nr],
            dist: vec![INF; nl],
            dist_free: INF,
            current_edge: vec![0; nl],
            stack: Vec::new(),
            que: VecDeque::new(),
            size: 0,
            num_phases: 0,
            status: Status::NotSolved,
        })
    }

    /// Builds the BFS layers of one phase. Free left vertices are layer 0;
    /// from a left vertex the search crosses any edge to a right vertex and
    /// continues to that vertex's mate. Returns whether a free right vertex
    /// is reachable.
    ///
    /// Only the layers are rebuilt, the pairing is never touched.
    pub fn layer(&mut self) -> bool {
        self.que.clear();
        for u in 0..self.left.len() {
            if self.pair_left[u].is_none() {
                self.dist[u] = 0;
                self.que.push_back(u);
            } else {
                self.dist[u] = INF;
            }
        }
        self.dist_free = INF;

        while let Some(u) = self.que.pop_front() {
            if self.dist[u] >= self.dist_free {
                continue;
            }
            for &v in self.adjacency[u].iter() {
                match self.pair_right[v] {
                    None => {
                        if self.dist_free == INF {
                            self.dist_free = self.dist[u] + 1;
                        }
                    }
                    Some(w) => {
                        if self.dist[w] == INF {
                            self.dist[w] = self.dist[u] + 1;
                            self.que.push_back(w);
                        }
                    }
                }
            }
        }

        self.dist_free != INF
    }

    /// Augments along vertex-disjoint shortest paths in the current layers
    /// until none is left. Returns the number of augmentations; zero when
    /// the last `layer` call failed.
    pub fn augment_phase(&mut self) -> usize {
        if self.dist_free == INF {
            return 0;
        }

        self.current_edge.fill(0);
        let mut count = 0;
        for u in 0..self.left.len() {
            if self.pair_left[u].is_none() && self.dist[u] != INF && self.augment_from(u) {
                count += 1;
            }
        }

        self.size += count;
        self.num_phases += 1;
        trace!("phase {}: {} augmenting paths of length {}, matching size {}", self.num_phases, count, 2 * self.dist_free - 1, self.size);
        count
    }

    // layered DFS from a free left vertex with an explicit stack of left
    // vertices; current_edge[u] points at the right vertex used to leave u
    fn augment_from(&mut self, root: usize) -> bool {
        self.stack.clear();
        self.stack.push(root);

        'search: while let Some(&u) = self.stack.last() {
            let next = self.dist[u] + 1;
            while self.current_edge[u] < self.adjacency[u].len() {
                let v = self.adjacency[u][self.current_edge[u]];
                let mate = self.pair_right[v];
                match mate {
                    None if self.dist_free == next => {
                        self.flip_path();
                        return true;
                    }
                    Some(w) if self.dist[w] == next => {
                        self.stack.push(w);
                        continue 'search;
                    }
                    _ => self.current_edge[u] += 1,
                }
            }

            // dead end for the rest of the phase
            self.dist[u] = INF;
            self.stack.pop();
            if let Some(&parent) = self.stack.last() {
                self.current_edge[parent] += 1;
            }
        }

        false
    }

    fn flip_path(&mut self) {
        for &u in self.stack.iter() {
            let v = self.adjacency[u][self.current_edge[u]];
            self.pair_left[u] = Some(v);
            self.pair_right[v] = Some(u);
        }
    }

    pub fn solve(&mut self) -> Status {
        while self.layer() {
            let augmented = self.augment_phase();
            debug_assert!(augmented > 0, "layering reached a free right vertex but nothing was augmented");
            if augmented == 0 {
                break;
            }
        }
        self.status = Status::Optimal;
        debug!("hopcroft-karp: maximum matching {} after {} phases", self.size, self.num_phases);
        self.status
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    #[inline]
    pub fn num_phases(&self) -> usize {
        self.num_phases
    }

    pub fn matching(&self) -> Matching {
        let pairs = self.left.iter().zip(self.pair_left.iter()).map(|(&u, v)| (u, v.map(|j| self.right[j]))).collect();
        Matching { size: self.size, pairs }
    }
}

/// Detects the bipartition of `graph` and computes a maximum matching with
/// the first color class on the left.
pub fn maximum_matching(graph: &UndirectedGraph) -> Result<Matching, GraphError> {
    let bipartition = detect_bipartition(graph)?;
    let mut solver = HopcroftKarp::new(graph, &bipartition)?;
    solver.solve();
    Ok(solver.matching())
}
