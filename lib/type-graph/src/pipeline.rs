use graphql_introspection::{
    build_client_schema, introspection_from_schema, lexicographic_sort_schema,
    IntrospectionOptions, IntrospectionQuery,
};
use tracing::{debug, instrument};
use type_graph_config::display::DisplayOptions;

use crate::{
    assemble::assign_types_and_ids, deprecation::remove_deprecated_fields, error::PipelineError,
    graph::TypeGraph, hidden::resolve_hidden_types, simplify::simplify_schema,
};

/// Turns a raw introspection result into a type graph shaped by `options`.
///
/// A missing introspection result is not an error: the caller may simply not have
/// fetched one yet, in which case `Ok(None)` is returned.
#[instrument(level = "debug", skip_all, fields(
    sort_by_alphabet = options.sort_by_alphabet,
    skip_deprecated = options.skip_deprecated,
    show_hidden = options.show_hidden,
))]
pub fn assemble_graph(
    introspection: Option<&IntrospectionQuery>,
    options: &DisplayOptions,
) -> Result<Option<TypeGraph>, PipelineError> {
    let Some(introspection) = introspection else {
        debug!("no introspection result, nothing to assemble");
        return Ok(None);
    };

    let mut schema = build_client_schema(introspection)?;
    if options.sort_by_alphabet {
        schema = lexicographic_sort_schema(&schema);
    }

    let normalized = introspection_from_schema(
        &schema,
        IntrospectionOptions {
            descriptions: true,
        },
    );
    let simplified = simplify_schema(&normalized.__schema)?;
    let mut graph = assign_types_and_ids(simplified)?;

    if options.hides_types() {
        graph = resolve_hidden_types(&graph, &options.hide_rules)?;
    }

    if options.skip_deprecated {
        remove_deprecated_fields(&mut graph);
    }

    debug!(types = graph.len(), "type graph assembled");

    Ok(Some(graph))
}
