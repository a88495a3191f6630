use std::path::PathBuf;
use std::sync::Once;

use graphql_introspection::{parse_introspection, IntrospectionQuery};
use lazy_static::lazy_static;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use type_graph_config::display::DisplayOptions;

use crate::{graph::TypeGraph, pipeline::assemble_graph};

pub const LIBRARY_FIXTURE: &str = "fixture/library.introspection.json";

fn init_test_logger_internal() {
    let tree_layer = tracing_tree::HierarchicalLayer::new(2)
        .with_bracketed_fields(true)
        .with_deferred_spans(false)
        .with_indent_lines(true)
        .with_timer(tracing_tree::time::Uptime::default())
        .with_thread_names(false)
        .with_thread_ids(false)
        .with_targets(false);

    tracing_subscriber::registry()
        .with(tree_layer)
        .with(EnvFilter::from_default_env())
        .init();
}

lazy_static! {
    static ref TRACING_INIT: Once = Once::new();
}

pub fn init_logger() {
    TRACING_INIT.call_once(|| {
        init_test_logger_internal();
    });
}

pub fn read_introspection(fixture_path: &str) -> IntrospectionQuery {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(fixture_path);
    let source = std::fs::read_to_string(path).expect("Unable to read input file");

    parse_introspection(&source).expect("failed to parse introspection fixture")
}

pub fn parse_inline(source: &str) -> IntrospectionQuery {
    parse_introspection(source).expect("failed to parse inline introspection")
}

pub fn library_graph(options: &DisplayOptions) -> TypeGraph {
    let introspection = read_introspection(LIBRARY_FIXTURE);

    assemble_graph(Some(&introspection), options)
        .expect("failed to assemble type graph")
        .expect("introspection was provided")
}
