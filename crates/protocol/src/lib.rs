use serde::{Deserialize, Serialize};

/// Single-character vertex name as it appears in the edge list.
pub type VertexName = char;

/// Stable arena index of a vertex inside a graph store.
pub type VertexId = usize;

/// Weight of one edge.
pub type Weight = u32;

/// Accumulated path cost. Wider than `Weight` so the infinity sentinel
/// (1 + sum of all edge weights) cannot overflow.
pub type Cost = u64;

/// One parsed line of the input edge list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub src: VertexName,
    pub dst: VertexName,
    pub weight: Weight,
}

/// A computed route in reportable form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub source: VertexName,
    pub target: VertexName,
    /// `None` when no path exists.
    pub cost: Option<Cost>,
    /// Vertex names in order from source to target; empty when no path exists.
    pub path: Vec<VertexName>,
}

impl RouteSummary {
    pub fn reached(source: VertexName, target: VertexName, cost: Cost, path: Vec<VertexName>) -> Self {
        Self { source, target, cost: Some(cost), path }
    }

    pub fn unreachable(source: VertexName, target: VertexName) -> Self {
        Self { source, target, cost: None, path: Vec::new() }
    }

    pub fn is_reachable(&self) -> bool {
        self.cost.is_some()
    }
}
