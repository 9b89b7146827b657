use crate::{Error, Result};

/// Unwinds a predecessor map into the node sequence `source ..= target`.
///
/// Follows predecessor links backwards from `target` and reverses them. The
/// walk is bounded by the number of nodes, so a corrupted map with a cycle
/// fails instead of looping forever. Asking for an unreachable target is an
/// error, never a truncated path.
pub fn reconstruct_path(
    predecessors: &[Option<usize>],
    source: usize,
    target: usize,
) -> Result<Vec<usize>> {
    let node_count = predecessors.len();
    for node in [source, target] {
        if node >= node_count {
            return Err(Error::InvalidNode { node, node_count });
        }
    }

    let mut path = vec![target];
    let mut current = target;

    while current != source {
        match predecessors[current] {
            Some(pred) if pred < node_count && path.len() < node_count => {
                path.push(pred);
                current = pred;
            }
            _ => {
                return Err(Error::Unreachable {
                    from: source,
                    to: vec![target],
                })
            }
        }
    }

    path.reverse();
    Ok(path)
}
