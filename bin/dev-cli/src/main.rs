mod logger;

use std::env;
use std::process;

use anyhow::{anyhow, Context};
use graphql_introspection::{parse_introspection, IntrospectionQuery};
use tracing::info;
use type_graph::graph::{Entity, TypeGraph};
use type_graph::simplify::simplify_schema;
use type_graph::wrappers::stringify_wrappers;
use type_graph::{assemble_graph, TypeIndex, TypeWrapper};
use type_graph_config::{load_config, TypeGraphConfig};

use crate::logger::configure_logging;

const USAGE: &str = "Usage: type-graph-cli <command> <introspection_path> [...]

Commands:
  simplify <introspection_path>              print the simplified introspection as JSON
  graph <introspection_path> [--json]        print the assembled type graph
  reachable <introspection_path> [root]      list types reachable from a root type
  lookup <introspection_path> <id>           describe the entity behind an identifier";

fn main() -> anyhow::Result<()> {
    let config_path = env::var("TYPE_GRAPH_CONFIG_FILE_PATH").ok();
    let config = load_config(config_path).context("failed to load configuration")?;
    configure_logging(&config.log);

    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("{}", USAGE);
        process::exit(1);
    }

    let introspection = read_introspection(&args[2])?;

    match args[1].as_str() {
        "simplify" => {
            let simplified = simplify_schema(&introspection.__schema)?;
            println!("{}", serde_json::to_string_pretty(&simplified)?);
        }
        "graph" => {
            let graph = build_graph(&introspection, &config)?;
            if args.get(3).map(String::as_str) == Some("--json") {
                println!("{}", serde_json::to_string_pretty(&graph)?);
            } else {
                print!("{}", graph);
            }
        }
        "reachable" => {
            let graph = build_graph(&introspection, &config)?;
            let root_type = args
                .get(3)
                .map(String::as_str)
                .or(config.display.root_type.as_deref());
            let reachable = graph
                .reachable_types(root_type)
                .ok_or_else(|| anyhow!("root type {:?} does not exist", root_type))?;

            info!(root = %reachable.root_id, "reachable types collected");
            for id in &reachable.types {
                println!("{}", id);
            }
        }
        "lookup" => {
            let id = args
                .get(3)
                .ok_or_else(|| anyhow!("lookup requires an identifier"))?;
            let graph = build_graph(&introspection, &config)?;
            let entity = graph
                .lookup(id)
                .ok_or_else(|| anyhow!("no entity with identifier '{}'", id))?;

            println!("{}", describe(&graph, &entity));
        }
        other => {
            eprintln!("Unknown command: {}\n\n{}", other, USAGE);
            process::exit(1);
        }
    }

    Ok(())
}

fn read_introspection(path: &str) -> anyhow::Result<IntrospectionQuery> {
    let source =
        std::fs::read_to_string(path).with_context(|| format!("Unable to read {}", path))?;

    parse_introspection(&source).with_context(|| format!("Invalid introspection in {}", path))
}

fn build_graph(
    introspection: &IntrospectionQuery,
    config: &TypeGraphConfig,
) -> anyhow::Result<TypeGraph> {
    assemble_graph(Some(introspection), &config.display)?
        .ok_or_else(|| anyhow!("no introspection result to assemble"))
}

fn type_ref(graph: &TypeGraph, type_index: TypeIndex, wrappers: &[TypeWrapper]) -> String {
    let (prefix, suffix) = stringify_wrappers(wrappers);
    format!("{}{}{}", prefix, graph.node(type_index).name, suffix)
}

fn describe(graph: &TypeGraph, entity: &Entity<'_>) -> String {
    match entity {
        Entity::Type(node) => {
            let mut description = format!("{} {}", node.kind(), node.name);
            if node.is_hidden_type {
                description.push_str(" (hidden)");
            }
            description
        }
        Entity::Field { owner, field } => format!(
            "{}.{}: {}",
            owner.name,
            field.name,
            type_ref(graph, field.type_index, &field.type_wrappers)
        ),
        Entity::InputField { owner, input_field } => format!(
            "{}.{}: {}",
            owner.name,
            input_field.name,
            type_ref(graph, input_field.type_index, &input_field.type_wrappers)
        ),
        Entity::Argument {
            owner,
            field,
            argument,
        } => format!(
            "{}.{}({}: {})",
            owner.name,
            field.name,
            argument.name,
            type_ref(graph, argument.type_index, &argument.type_wrappers)
        ),
        Entity::Edge { owner, edge } => format!(
            "{} -> {} {}",
            owner.name,
            graph.node(edge.type_index).kind(),
            graph.node(edge.type_index).name
        ),
    }
}
