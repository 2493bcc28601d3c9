//! The canonical node and edge collections behind a canvas session.

pub mod edge;
pub mod node;
pub mod policy;

pub use edge::*;
pub use node::*;
pub use policy::*;

use ahash::{AHashMap, AHashSet};

/// A node removed from the graph together with the edges that referenced it.
#[derive(Debug, Clone, PartialEq)]
pub struct RemovedNode {
    pub node: CanvasNode,
    pub edges: Vec<Connection>,
}

/// Placed nodes and the directed edges between them.
///
/// Every edge endpoint always names a node present in the graph: edges can only
/// be added between existing nodes and are dropped together with either endpoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    nodes: Vec<CanvasNode>,
    edges: Vec<Connection>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[CanvasNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Connection] {
        &self.edges
    }

    pub fn node(&self, id: NodeId) -> Option<&CanvasNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut CanvasNode> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    pub fn insert_node(&mut self, node: CanvasNode) -> NodeId {
        let id = node.id;
        self.nodes.push(node);
        id
    }

    /// Removes the node and every edge touching it.
    pub fn remove_node(&mut self, id: NodeId) -> Option<RemovedNode> {
        let index = self.nodes.iter().position(|n| n.id == id)?;
        let node = self.nodes.remove(index);
        let (removed, kept): (Vec<_>, Vec<_>) =
            self.edges.drain(..).partition(|edge| edge.touches(id));
        self.edges = kept;
        Some(RemovedNode {
            node,
            edges: removed,
        })
    }

    /// Adds `from -> to` if `policy` allows it. Both endpoints must be placed;
    /// the editor resolves them before calling.
    pub fn connect(
        &mut self,
        from: NodeId,
        to: NodeId,
        policy: &ConnectionPolicy,
    ) -> Result<EdgeId, ConnectRejection> {
        debug_assert!(self.contains(from) && self.contains(to));
        self.check_connection(from, to, policy)?;
        let edge = Connection::new(from, to);
        let id = edge.id;
        self.edges.push(edge);
        Ok(id)
    }

    /// Validates `from -> to` against the self-loop rule and `policy` without mutating.
    pub fn check_connection(
        &self,
        from: NodeId,
        to: NodeId,
        policy: &ConnectionPolicy,
    ) -> Result<(), ConnectRejection> {
        if from == to {
            return Err(ConnectRejection::SelfLoop);
        }
        if !policy.allow_parallel_edges && self.has_edge(from, to) {
            return Err(ConnectRejection::ParallelEdge);
        }
        if !policy.allow_cycles && self.reaches(to, from) {
            return Err(ConnectRejection::WouldCreateCycle);
        }
        Ok(())
    }

    pub fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.edges.iter().any(|e| e.from == from && e.to == to)
    }

    pub fn edges_touching(&self, id: NodeId) -> impl Iterator<Item = &Connection> {
        self.edges.iter().filter(move |e| e.touches(id))
    }

    /// Whether a directed path leads from `start` to `target`.
    pub fn reaches(&self, start: NodeId, target: NodeId) -> bool {
        let mut successors: AHashMap<NodeId, Vec<NodeId>> = AHashMap::new();
        for edge in &self.edges {
            successors.entry(edge.from).or_default().push(edge.to);
        }

        let mut visited = AHashSet::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if current == target {
                return true;
            }
            if !visited.insert(current) {
                continue;
            }
            if let Some(next) = successors.get(&current) {
                stack.extend(next.iter().copied().filter(|n| !visited.contains(n)));
            }
        }
        false
    }

    /// Whether the edge set contains a directed cycle.
    pub fn has_cycle(&self) -> bool {
        self.edges.iter().any(|e| self.reaches(e.to, e.from))
    }

    /// Edges whose endpoints are missing from the node set. Always empty.
    pub fn dangling_edges(&self) -> Vec<&Connection> {
        let ids: AHashSet<NodeId> = self.nodes.iter().map(|n| n.id).collect();
        self.edges
            .iter()
            .filter(|e| !ids.contains(&e.from) || !ids.contains(&e.to))
            .collect()
    }
}
