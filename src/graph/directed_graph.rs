//! Core graph structure — an arena of node records with bidirectional adjacency.

use std::collections::{BTreeSet, HashMap};

use crate::types::GraphSnapshot;

use super::traversal::{trace, Direction};

/// Per-node record: the identifier plus predecessor and successor slot sets.
#[derive(Debug, Clone)]
pub(crate) struct NodeRecord {
    pub(crate) id: String,
    links: [BTreeSet<usize>; 2],
}

impl NodeRecord {
    fn new(id: String) -> Self {
        Self {
            id,
            links: [BTreeSet::new(), BTreeSet::new()],
        }
    }

    /// Neighbour slots in the given direction.
    pub(crate) fn links(&self, direction: Direction) -> &BTreeSet<usize> {
        &self.links[direction.index()]
    }

    fn links_mut(&mut self, direction: Direction) -> &mut BTreeSet<usize> {
        &mut self.links[direction.index()]
    }
}

/// A directed graph over string identifiers.
///
/// Nodes live in an arena addressed by slot index; edges are stored on both
/// endpoints (successor set on the source, predecessor set on the destination)
/// and every mutation keeps the two sides in agreement. All operations are
/// total: reading or deleting something absent is an empty result or a no-op.
///
/// Query results are sorted by identifier. The graph is not synchronized;
/// share it across threads only behind a single lock.
#[derive(Debug, Clone, Default)]
pub struct DirectedGraph {
    /// Identifier -> arena slot.
    index: HashMap<String, usize>,
    /// Node records; `None` marks a freed slot.
    slots: Vec<Option<NodeRecord>>,
    /// Freed slots available for reuse.
    free: Vec<usize>,
    /// Number of distinct (source, destination) pairs.
    edge_count: usize,
}

impl DirectedGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.index.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// True when the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Add a node. Adding an existing node does nothing.
    pub fn add_node(&mut self, id: impl Into<String>) {
        self.ensure_node(id.into());
    }

    /// Remove a node together with every edge touching it.
    /// Removing an absent node does nothing.
    pub fn del_node(&mut self, id: &str) {
        let Some(slot) = self.index.remove(id) else {
            return;
        };
        let Some(record) = self.slots.get_mut(slot).and_then(Option::take) else {
            return;
        };

        let self_loop = record.links(Direction::Successor).contains(&slot);
        for direction in Direction::ALL {
            for &neighbour in record.links(direction) {
                if let Some(other) = self.record_mut(neighbour) {
                    other.links_mut(direction.opposite()).remove(&slot);
                }
            }
        }

        let removed = record.links(Direction::Successor).len()
            + record.links(Direction::Predecessor).len()
            - usize::from(self_loop);
        self.edge_count -= removed;
        self.free.push(slot);

        log::debug!("Removed node {:?} and {} edge(s)", record.id, removed);
    }

    /// True if the node exists.
    pub fn has_node(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Every node identifier, sorted.
    pub fn all_nodes(&self) -> BTreeSet<String> {
        self.index.keys().cloned().collect()
    }

    /// Add an edge from `a` to `b`, creating either endpoint if missing.
    /// Adding an existing edge does nothing.
    pub fn add_edge(&mut self, a: impl Into<String>, b: impl Into<String>) {
        let a = self.ensure_node(a.into());
        let b = self.ensure_node(b.into());
        self.link(a, b);
    }

    /// Remove the edge from `a` to `b`. Does nothing unless both nodes exist;
    /// never removes the nodes themselves.
    pub fn del_edge(&mut self, a: &str, b: &str) {
        if let (Some(a), Some(b)) = (self.slot_of(a), self.slot_of(b)) {
            self.unlink(a, b);
        }
    }

    /// True if the edge `a -> b` exists.
    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        match (self.slot_of(a), self.slot_of(b)) {
            (Some(a), Some(b)) => self
                .record(a)
                .is_some_and(|r| r.links(Direction::Successor).contains(&b)),
            _ => false,
        }
    }

    /// Direct successors of `n`, sorted. Empty if `n` is absent.
    pub fn successors(&self, n: &str) -> Vec<String> {
        self.neighbours(n, Direction::Successor)
    }

    /// Direct predecessors of `n`, sorted. Empty if `n` is absent.
    pub fn predecessors(&self, n: &str) -> Vec<String> {
        self.neighbours(n, Direction::Predecessor)
    }

    /// Direct neighbours of `n` in the given direction, sorted.
    pub fn neighbours(&self, n: &str, direction: Direction) -> Vec<String> {
        let Some(record) = self.slot_of(n).and_then(|slot| self.record(slot)) else {
            return Vec::new();
        };
        let mut result: Vec<String> = record
            .links(direction)
            .iter()
            .filter_map(|&slot| self.record(slot))
            .map(|r| r.id.clone())
            .collect();
        result.sort_unstable();
        result
    }

    /// Every node reachable from `n` along successor edges, `n` included.
    pub fn downstreams(&self, n: &str) -> BTreeSet<String> {
        trace(self, [n], Direction::Successor)
    }

    /// Every node reachable from `n` along predecessor edges, `n` included.
    pub fn upstreams(&self, n: &str) -> BTreeSet<String> {
        trace(self, [n], Direction::Predecessor)
    }

    /// Closure of several seeds in one direction, seeds included.
    pub fn closure<I, S>(&self, seeds: I, direction: Direction) -> BTreeSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        trace(self, seeds, direction)
    }

    /// Nodes lying on some path from any initiator to any terminator: the
    /// downstream closure of `initiators` intersected with the upstream
    /// closure of `terminators`.
    pub fn subgraph<I, T, S, U>(&self, initiators: I, terminators: T) -> BTreeSet<String>
    where
        I: IntoIterator<Item = S>,
        T: IntoIterator<Item = U>,
        S: AsRef<str>,
        U: AsRef<str>,
    {
        let downstreams = trace(self, initiators, Direction::Successor);
        let upstreams = trace(self, terminators, Direction::Predecessor);
        downstreams.intersection(&upstreams).cloned().collect()
    }

    /// Every edge as a `(source, destination)` pair, sorted.
    pub fn edges(&self) -> Vec<(String, String)> {
        let mut result: Vec<(String, String)> = self
            .slots
            .iter()
            .flatten()
            .flat_map(|source| {
                source
                    .links(Direction::Successor)
                    .iter()
                    .filter_map(move |&slot| self.record(slot))
                    .map(move |target| (source.id.clone(), target.id.clone()))
            })
            .collect();
        result.sort_unstable();
        result
    }

    /// Sorted, serializable copy of the graph.
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self.all_nodes().into_iter().collect(),
            edges: self.edges(),
        }
    }

    /// Arena slot of an identifier.
    pub(crate) fn slot_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Node record at a slot (immutable).
    pub(crate) fn record(&self, slot: usize) -> Option<&NodeRecord> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    fn record_mut(&mut self, slot: usize) -> Option<&mut NodeRecord> {
        self.slots.get_mut(slot).and_then(Option::as_mut)
    }

    /// Return the slot for `id`, allocating a record if it is new.
    fn ensure_node(&mut self, id: String) -> usize {
        if let Some(slot) = self.slot_of(&id) {
            return slot;
        }
        let record = NodeRecord::new(id.clone());
        let slot = match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(record);
                slot
            }
            None => {
                self.slots.push(Some(record));
                self.slots.len() - 1
            }
        };
        self.index.insert(id, slot);
        slot
    }

    fn link(&mut self, a: usize, b: usize) {
        let inserted = self
            .record_mut(a)
            .is_some_and(|r| r.links_mut(Direction::Successor).insert(b));
        if let Some(r) = self.record_mut(b) {
            r.links_mut(Direction::Predecessor).insert(a);
        }
        if inserted {
            self.edge_count += 1;
            log::trace!("Linked slot {} -> {}", a, b);
        }
    }

    fn unlink(&mut self, a: usize, b: usize) {
        let removed = self
            .record_mut(a)
            .is_some_and(|r| r.links_mut(Direction::Successor).remove(&b));
        if let Some(r) = self.record_mut(b) {
            r.links_mut(Direction::Predecessor).remove(&a);
        }
        if removed {
            self.edge_count -= 1;
            log::trace!("Unlinked slot {} -> {}", a, b);
        }
    }
}

impl From<GraphSnapshot> for DirectedGraph {
    fn from(snapshot: GraphSnapshot) -> Self {
        let mut graph = DirectedGraph::new();
        for node in snapshot.nodes {
            graph.add_node(node);
        }
        graph.extend(snapshot.edges);
        graph
    }
}

impl<A, B> Extend<(A, B)> for DirectedGraph
where
    A: Into<String>,
    B: Into<String>,
{
    fn extend<T: IntoIterator<Item = (A, B)>>(&mut self, edges: T) {
        for (a, b) in edges {
            self.add_edge(a, b);
        }
    }
}

impl<A, B> FromIterator<(A, B)> for DirectedGraph
where
    A: Into<String>,
    B: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (A, B)>>(edges: T) -> Self {
        let mut graph = DirectedGraph::new();
        graph.extend(edges);
        graph
    }
}
