use tracing::{debug, instrument};

use crate::graph::TypeGraph;

/// Drops every deprecated field of object and interface types and returns how many
/// were removed. Types left without fields stay in the graph, and deprecated enum
/// values, arguments and input fields are untouched.
#[instrument(level = "debug", skip_all)]
pub fn remove_deprecated_fields(graph: &mut TypeGraph) -> usize {
    let mut removed = 0;

    for node in graph.nodes_mut() {
        if let Some(fields) = node.fields_mut() {
            let before = fields.len();
            fields.retain(|_, field| !field.is_deprecated);
            removed += before - fields.len();
        }
    }

    debug!(removed, "deprecated fields removed");

    removed
}
