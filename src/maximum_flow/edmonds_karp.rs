use crate::error::GraphError;
use crate::maximum_flow::graph::DirectedGraph;
use crate::maximum_flow::residual_network::ResidualNetwork;
use crate::status::Status;
use log::{debug, trace};
use num_traits::NumAssign;
use std::collections::VecDeque;
use std::fmt::Debug;

/// Edmonds-Karp maximum flow solver.
///
/// Owns the residual network for one source/sink pair. Each round is a BFS
/// for a shortest augmenting path (`search`) followed by pushing the path's
/// bottleneck (`augment`); the solver is done once `search` fails.
pub struct EdmondsKarp<Flow> {
    network: ResidualNetwork<Flow>,
    source: usize,
    sink: usize,
    // residual entry through which each vertex was first reached
    prev: Vec<Option<usize>>,
    visited: Vec<bool>,
    que: VecDeque<usize>,
    found: bool,
    flow: Flow,
    num_augmentations: usize,
    status: Status,
}

impl<Flow> EdmondsKarp<Flow>
where
    Flow: NumAssign + PartialOrd + Copy + Debug,
{
    pub fn new(graph: &DirectedGraph<Flow>, source: usize, sink: usize) -> Result<Self, GraphError> {
        let network = ResidualNetwork::build(graph)?;
        let (s, t) = (network.vertices.index_of(source)?, network.vertices.index_of(sink)?);
        let n = network.num_nodes;
        debug!("edmonds-karp: {} vertices, {} residual arcs, source {} sink {}", n, network.num_arcs(), source, sink);

        Ok(EdmondsKarp {
            network,
            source: s,
            sink: t,
            prev: vec![None; n],
            visited: vec![false; n],
            que: VecDeque::new(),
            found: false,
            flow: Flow::zero(),
            num_augmentations: 0,
            status: Status::NotSolved,
        })
    }

    /// Breadth-first search from the source over arcs with positive residual
    /// capacity. Returns whether the sink was reached.
    ///
    /// Only the predecessor record is touched, so calling this after the
    /// solver is done keeps returning `false` and leaves the flow unchanged.
    pub fn search(&mut self) -> bool {
        self.found = false;
        if self.source == self.sink {
            return false;
        }

        self.prev.fill(None);
        self.visited.fill(false);
        self.que.clear();
        self.visited[self.source] = true;
        self.que.push_back(self.source);

        while let Some(u) = self.que.pop_front() {
            for i in self.network.start[u]..self.network.start[u + 1] {
                let arc = &self.network.arc_list[i];
                if self.visited[arc.to] || !(arc.residual > Flow::zero()) {
                    continue;
                }

                self.visited[arc.to] = true;
                self.prev[arc.to] = Some(i);
                if arc.to == self.sink {
                    self.found = true;
                    return true;
                }
                self.que.push_back(arc.to);
            }
        }

        false
    }

    /// Pushes the bottleneck along the path found by the last successful
    /// `search` and returns it. `None` when there is no pending path.
    pub fn augment(&mut self) -> Option<Flow> {
        if !self.found {
            return None;
        }
        self.found = false;

        // calculate delta
        let mut delta: Option<Flow> = None;
        let mut v = self.sink;
        while let Some(i) = self.prev[v] {
            let residual = self.network.arc_list[i].residual;
            if delta.map_or(true, |d| residual < d) {
                delta = Some(residual);
            }
            v = self.network.arc_list[self.network.arc_list[i].rev].to;
        }
        debug_assert_eq!(v, self.source);
        let delta = delta?;

        // update flow
        let mut v = self.sink;
        let mut length = 0;
        while let Some(i) = self.prev[v] {
            self.network.push_arc(i, delta);
            v = self.network.arc_list[self.network.arc_list[i].rev].to;
            length += 1;
        }

        self.flow += delta;
        self.num_augmentations += 1;
        trace!("augmenting path of {} arcs, bottleneck {:?}, flow {:?}", length, delta, self.flow);
        Some(delta)
    }

    /// One search + augment round. `None` once no augmenting path is left.
    pub fn step(&mut self) -> Option<Flow> {
        if self.search() {
            self.augment()
        } else {
            self.status = Status::Optimal;
            None
        }
    }

    pub fn solve(&mut self) -> Status {
        while self.step().is_some() {}
        debug!("edmonds-karp: maximum flow {:?} after {} augmentations", self.flow, self.num_augmentations);
        self.status
    }

    #[inline]
    pub fn flow_value(&self) -> Flow {
        self.flow
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    #[inline]
    pub fn num_augmentations(&self) -> usize {
        self.num_augmentations
    }

    #[inline]
    pub fn network(&self) -> &ResidualNetwork<Flow> {
        &self.network
    }

    pub fn residual_capacity(&self, from: usize, to: usize) -> Flow {
        self.network.residual_capacity(from, to)
    }

    /// Vertices on the source side of a minimum cut: everything reachable
    /// from the source in the residual network. Only a minimum cut once the
    /// solver is done.
    pub fn minimum_cut(&self) -> Vec<usize> {
        let reachable = self.network.reachable_from(self.source);
        (0..self.network.num_nodes).filter(|&u| reachable[u]).map(|u| self.network.vertices.id(u)).collect()
    }

    /// `(from, to, flow)` for every vertex pair carrying positive net flow.
    pub fn arc_flows(&self) -> Vec<(usize, usize, Flow)> {
        let mut flows = Vec::new();
        for u in 0..self.network.num_nodes {
            for arc in self.network.neighbors(u) {
                let flow = arc.net_flow();
                if flow > Flow::zero() {
                    flows.push((self.network.vertices.id(u), self.network.vertices.id(arc.to), flow));
                }
            }
        }
        flows
    }
}

/// Maximum flow value from `source` to `sink`.
pub fn maximum_flow<Flow>(graph: &DirectedGraph<Flow>, source: usize, sink: usize) -> Result<Flow, GraphError>
where
    Flow: NumAssign + PartialOrd + Copy + Debug,
{
    let mut solver = EdmondsKarp::new(graph, source, sink)?;
    solver.solve();
    Ok(solver.flow_value())
}
