use crate::graph::GraphStore;
use protocol::{Cost, VertexId};
use tracing::debug;

/// Label state for one shortest-path computation, indexed by `VertexId`.
///
/// Allocated fresh on every invocation, so topology and computed results
/// have separate lifetimes and re-running can never observe stale labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathRun {
    infinity: Cost,
    dist: Vec<Cost>,
    settled: Vec<bool>,
    predecessor: Vec<Option<VertexId>>,
}

impl ShortestPathRun {
    fn new(vertex_count: usize, infinity: Cost) -> Self {
        Self {
            infinity,
            dist: vec![infinity; vertex_count],
            settled: vec![false; vertex_count],
            predecessor: vec![None; vertex_count],
        }
    }

    /// The sentinel this run was started with; a distance equal to it means
    /// the vertex was never reached.
    pub fn infinity(&self) -> Cost {
        self.infinity
    }

    /// Current distance label. Final only for settled vertices.
    pub fn distance(&self, id: VertexId) -> Cost {
        self.dist[id]
    }

    pub fn is_settled(&self, id: VertexId) -> bool {
        self.settled[id]
    }

    pub fn predecessor(&self, id: VertexId) -> Option<VertexId> {
        self.predecessor[id]
    }
}

/// Computes minimum-cost paths from `source` until `target` settles.
///
/// Label-setting without a priority queue: each iteration relaxes the
/// frontier's outgoing edges, then scans all unsettled vertices in name
/// order for the smallest label. The scan is O(V), the whole loop O(V²);
/// fine for the edge-list sizes this tool reads.
///
/// `infinity` must exceed every possible path cost and weights must be
/// non-negative; both are guaranteed by ingestion.
pub fn shortest_path(
    store: &GraphStore,
    source: VertexId,
    target: VertexId,
    infinity: Cost,
) -> ShortestPathRun {
    let mut run = ShortestPathRun::new(store.vertex_count(), infinity);

    run.dist[source] = 0;
    run.settled[source] = true;
    run.predecessor[source] = None;

    let mut frontier = source;
    while !run.settled[target] {
        for edge in store.edges(frontier) {
            let v = edge.target;
            if run.settled[v] {
                continue;
            }
            let candidate = run.dist[frontier] + Cost::from(edge.weight);
            if candidate < run.dist[v] {
                run.dist[v] = candidate;
                run.predecessor[v] = Some(frontier);
            }
        }

        // Smallest unsettled label, first match in name order on ties.
        let mut next: Option<VertexId> = None;
        for v in store.ids_by_name() {
            if run.settled[v] {
                continue;
            }
            match next {
                Some(best) if run.dist[v] >= run.dist[best] => {}
                _ => next = Some(v),
            }
        }

        match next {
            Some(v) if run.dist[v] < infinity => {
                run.settled[v] = true;
                debug!("settled '{}' at distance {}", store.name(v), run.dist[v]);
                frontier = v;
            }
            // Nothing left below the sentinel: the target is unreachable.
            _ => break,
        }
    }

    run
}
