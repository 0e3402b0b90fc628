use crate::error::GraphError;
use crate::maximum_flow::graph::DirectedGraph;
use crate::vertex::Vertices;
use num_traits::NumAssign;
use std::collections::{HashMap, VecDeque};
use std::fmt::Debug;
use std::slice::Iter;

#[derive(PartialEq, Debug, Clone)]
pub struct ResidualArc<Flow> {
    pub to: usize,
    pub residual: Flow,
    pub upper: Flow,
    pub rev: usize,
}

impl<Flow> ResidualArc<Flow>
where
    Flow: NumAssign + PartialOrd + Copy,
{
    // never underflows for unsigned Flow
    #[inline]
    pub fn net_flow(&self) -> Flow {
        if self.upper > self.residual {
            self.upper - self.residual
        } else {
            Flow::zero()
        }
    }
}

/// Residual capacities of every ordered vertex pair that can carry flow,
/// laid out as a CSR.
///
/// Each pair `(u, v)` has exactly one entry and its reverse `(v, u)` always
/// exists, created with zero capacity when the input had no arc `v -> u`.
/// Parallel input arcs are merged into one entry.
#[derive(Debug)]
pub struct ResidualNetwork<Flow> {
    pub num_nodes: usize,
    pub start: Vec<usize>,
    pub arc_list: Vec<ResidualArc<Flow>>,
    pub(crate) vertices: Vertices,
}

impl<Flow> ResidualNetwork<Flow>
where
    Flow: NumAssign + PartialOrd + Copy + Debug,
{
    pub fn build(graph: &DirectedGraph<Flow>) -> Result<Self, GraphError> {
        let num_nodes = graph.num_vertices();

        // merge parallel arcs and pair every entry with its reverse
        let mut entry_index: HashMap<(usize, usize), usize> = HashMap::new();
        let mut entries: Vec<(usize, ResidualArc<Flow>)> = Vec::new();
        for arc in graph.arcs.iter() {
            let (u, v) = (arc.from, arc.to);
            if u == v {
                return Err(GraphError::SelfLoop(graph.vertices.id(u)));
            }
            // x - x is NaN for NaN and both infinities
            if arc.upper - arc.upper != Flow::zero() {
                return Err(GraphError::NonFiniteCapacity { from: graph.vertices.id(u), to: graph.vertices.id(v) });
            }
            if arc.upper < Flow::zero() {
                return Err(GraphError::NegativeCapacity { from: graph.vertices.id(u), to: graph.vertices.id(v) });
            }

            let e = match entry_index.get(&(u, v)) {
                Some(&e) => e,
                None => {
                    let e = entries.len();
                    entries.push((u, ResidualArc { to: v, residual: Flow::zero(), upper: Flow::zero(), rev: e + 1 }));
                    entries.push((v, ResidualArc { to: u, residual: Flow::zero(), upper: Flow::zero(), rev: e }));
                    entry_index.insert((u, v), e);
                    entry_index.insert((v, u), e + 1);
                    e
                }
            };
            entries[e].1.upper += arc.upper;
            entries[e].1.residual += arc.upper;
        }

        let mut degree = vec![0; num_nodes];
        for (u, _) in entries.iter() {
            degree[*u] += 1;
        }

        let mut start = vec![0; num_nodes + 1];
        for i in 1..=num_nodes {
            start[i] = start[i - 1] + degree[i - 1];
        }

        let mut counter = vec![0; num_nodes];
        let mut position = vec![0; entries.len()];
        for (e, (u, _)) in entries.iter().enumerate() {
            position[e] = start[*u] + counter[*u];
            counter[*u] += 1;
        }

        let mut arc_list = vec![ResidualArc { to: 0, residual: Flow::zero(), upper: Flow::zero(), rev: 0 }; entries.len()];
        for (e, (_, mut arc)) in entries.into_iter().enumerate() {
            arc.rev = position[arc.rev];
            arc_list[position[e]] = arc;
        }

        Ok(ResidualNetwork { num_nodes, start, arc_list, vertices: graph.vertices.clone() })
    }

    #[inline]
    pub fn num_arcs(&self) -> usize {
        self.arc_list.len()
    }

    #[inline]
    pub fn neighbors(&self, u: usize) -> Iter<'_, ResidualArc<Flow>> {
        self.arc_list[self.start[u]..self.start[u + 1]].iter()
    }

    // index of the entry u -> v
    pub fn find(&self, u: usize, v: usize) -> Option<usize> {
        (self.start[u]..self.start[u + 1]).find(|&i| self.arc_list[i].to == v)
    }

    #[inline]
    pub fn push_arc(&mut self, i: usize, delta: Flow) {
        debug_assert!(delta <= self.arc_list[i].residual, "push of {:?} exceeds residual {:?}", delta, self.arc_list[i].residual);
        let rev = self.arc_list[i].rev;

        // update residual capacities
        self.arc_list[i].residual -= delta;
        self.arc_list[rev].residual += delta;
    }

    fn entry(&self, from: usize, to: usize) -> Option<&ResidualArc<Flow>> {
        let (u, v) = (self.vertices.index_of(from).ok()?, self.vertices.index_of(to).ok()?);
        self.find(u, v).map(|i| &self.arc_list[i])
    }

    pub fn residual_capacity(&self, from: usize, to: usize) -> Flow {
        self.entry(from, to).map_or(Flow::zero(), |e| e.residual)
    }

    // original capacity of from -> to
    pub fn capacity(&self, from: usize, to: usize) -> Flow {
        self.entry(from, to).map_or(Flow::zero(), |e| e.upper)
    }

    /// Net flow currently sent along `from -> to`, zero when the net flow runs
    /// the other way.
    pub fn flow(&self, from: usize, to: usize) -> Flow {
        self.entry(from, to).map_or(Flow::zero(), |e| e.net_flow())
    }

    /// Sends `delta` along `from -> to`. Fails without touching the network
    /// when `delta` is negative or exceeds the residual capacity of the pair.
    pub fn push(&mut self, from: usize, to: usize, delta: Flow) -> Result<(), GraphError> {
        let (u, v) = (self.vertices.index_of(from)?, self.vertices.index_of(to)?);
        let i = self.find(u, v).ok_or(GraphError::ArcNotFound { from, to })?;
        if !(delta >= Flow::zero() && delta <= self.arc_list[i].residual) {
            return Err(GraphError::ExceedsResidual { from, to });
        }
        self.push_arc(i, delta);
        Ok(())
    }

    // O(n + m)
    // vertices reachable from u through entries with positive residual capacity
    pub fn reachable_from(&self, u: usize) -> Vec<bool> {
        let mut visited = vec![false; self.num_nodes];
        let mut que = VecDeque::from([u]);
        visited[u] = true;

        while let Some(v) = que.pop_front() {
            for e in self.neighbors(v) {
                if !visited[e.to] && e.residual > Flow::zero() {
                    visited[e.to] = true;
                    que.push_back(e.to);
                }
            }
        }
        visited
    }
}
