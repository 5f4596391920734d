use crate::engine::ShortestPathRun;
use protocol::VertexId;

/// Walks predecessor links from `target` back to the source.
///
/// Returns `None` when the run never settled the target. Otherwise the
/// sequence runs from target back to source; callers reverse it for
/// source-to-target display. The walk terminates because predecessors are
/// only ever assigned to already-settled vertices, so the links form a tree
/// rooted at the source.
pub fn reconstruct(run: &ShortestPathRun, target: VertexId) -> Option<Vec<VertexId>> {
    if !run.is_settled(target) {
        return None;
    }

    let mut ids = vec![target];
    let mut current = target;
    while let Some(prev) = run.predecessor(current) {
        ids.push(prev);
        current = prev;
    }

    Some(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::shortest_path;
    use crate::graph::GraphStore;
    use protocol::EdgeRecord;

    fn diamond() -> GraphStore {
        GraphStore::build_from_records(&[
            EdgeRecord { src: 'A', dst: 'B', weight: 4 },
            EdgeRecord { src: 'A', dst: 'C', weight: 2 },
            EdgeRecord { src: 'C', dst: 'B', weight: 1 },
        ])
    }

    #[test]
    fn test_reconstruct_runs_target_to_source() {
        let store = diamond();
        let a = store.find_vertex('A').unwrap();
        let b = store.find_vertex('B').unwrap();
        let c = store.find_vertex('C').unwrap();

        let run = shortest_path(&store, a, b, 8);
        assert_eq!(reconstruct(&run, b), Some(vec![b, c, a]));
    }

    #[test]
    fn test_reconstruct_trivial_path() {
        let store = diamond();
        let a = store.find_vertex('A').unwrap();

        let run = shortest_path(&store, a, a, 8);
        assert_eq!(reconstruct(&run, a), Some(vec![a]));
    }

    #[test]
    fn test_reconstruct_unreachable() {
        let store = GraphStore::build_from_records(&[
            EdgeRecord { src: 'A', dst: 'B', weight: 1 },
            EdgeRecord { src: 'C', dst: 'A', weight: 1 },
        ]);
        let a = store.find_vertex('A').unwrap();
        let c = store.find_vertex('C').unwrap();

        let run = shortest_path(&store, a, c, 3);
        assert_eq!(reconstruct(&run, c), None);
    }
}
