//! Graph traversal algorithms (BFS closure).

use std::collections::{BTreeSet, HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use super::DirectedGraph;

/// Direction of an edge relative to a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Incoming edges (the node's direct predecessors).
    Predecessor,
    /// Outgoing edges (the node's direct successors).
    Successor,
}

impl Direction {
    /// Both directions, predecessor first.
    pub const ALL: [Direction; 2] = [Direction::Predecessor, Direction::Successor];

    /// The other direction.
    pub fn opposite(self) -> Self {
        match self {
            Self::Predecessor => Self::Successor,
            Self::Successor => Self::Predecessor,
        }
    }

    /// Return a human-readable name for this direction; matches the serde name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Predecessor => "predecessor",
            Self::Successor => "successor",
        }
    }

    /// Slot of this direction inside a node record's link pair.
    pub(crate) fn index(self) -> usize {
        match self {
            Self::Predecessor => 0,
            Self::Successor => 1,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Breadth-first closure of `seeds` following edges in `direction`.
///
/// Every seed is part of the result, including seeds the graph does not
/// contain; those contribute no neighbours. Cycles are handled by the
/// visited set, so the walk always terminates.
pub fn trace<I, S>(graph: &DirectedGraph, seeds: I, direction: Direction) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut reached: BTreeSet<String> = BTreeSet::new();
    let mut visited: HashSet<usize> = HashSet::new();
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut seed_count = 0usize;

    for seed in seeds {
        let seed = seed.as_ref();
        seed_count += 1;
        match graph.slot_of(seed) {
            Some(slot) => queue.push_back(slot),
            None => {
                reached.insert(seed.to_owned());
            }
        }
    }

    while let Some(current) = queue.pop_front() {
        if !visited.insert(current) {
            continue;
        }
        let Some(record) = graph.record(current) else {
            continue;
        };
        reached.insert(record.id.clone());
        queue.extend(record.links(direction).iter().copied());
    }

    log::debug!(
        "{} closure from {} seed(s) reached {} node(s)",
        direction,
        seed_count,
        reached.len()
    );

    reached
}
