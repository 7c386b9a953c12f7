use crate::graph::model::Graph;
use crate::graph::path::Path;

/// Chain per-component path lists, left to right.
///
/// Every working path is combined with every path of the next component
/// once per edge running from its end to the candidate's start; parallel
/// connecting edges give distinct results. A component without paths empties
/// the result, and so does an empty list of components.
pub fn stitch<'g, N, E>(
    graph: &'g Graph<N, E>,
    component_paths: Vec<Vec<Path<'g, E>>>,
) -> Vec<Path<'g, E>> {
    let mut components = component_paths.into_iter();
    let Some(mut partial) = components.next() else {
        return Vec::new();
    };

    for candidates in components {
        let mut joined = Vec::new();
        for head in &partial {
            for tail in &candidates {
                for connector in graph.edges_between(head.end(), tail.start()) {
                    joined.push(head.join(connector, tail));
                }
            }
        }
        tracing::trace!(
            heads = partial.len(),
            tails = candidates.len(),
            joined = joined.len(),
            "stitch"
        );
        partial = joined;
    }

    partial
}
