use std::{collections::HashSet, error::Error};

use graphql_introspection::type_name;
use pretty_assertions::assert_eq;
use type_graph_config::{display::DisplayOptions, HideRule};

use crate::{
    graph::{TypeGraph, TypeNodeKind},
    pipeline::assemble_graph,
    tests::testkit::{init_logger, library_graph, read_introspection, LIBRARY_FIXTURE},
    wrappers::TypeWrapper,
};

#[test]
fn missing_introspection_yields_nothing() -> Result<(), Box<dyn Error>> {
    init_logger();
    let rule_sets = [
        vec![],
        vec![HideRule::new("^Hidden").with_proxy_field("count")],
    ];

    for sort_by_alphabet in [false, true] {
        for skip_deprecated in [false, true] {
            for show_hidden in [false, true] {
                for hide_rules in &rule_sets {
                    let options = DisplayOptions {
                        sort_by_alphabet,
                        skip_deprecated,
                        show_hidden,
                        hide_rules: hide_rules.clone(),
                        ..Default::default()
                    };

                    let graph = assemble_graph(None, &options)?;
                    assert!(graph.is_none(), "expected no graph for {:?}", options);
                }
            }
        }
    }

    Ok(())
}

#[test]
fn identical_input_gives_identical_graph() -> Result<(), Box<dyn Error>> {
    init_logger();
    let options = DisplayOptions {
        skip_deprecated: true,
        ..Default::default()
    };

    let first = serde_json::to_string(&library_graph(&options))?;
    let second = serde_json::to_string(&library_graph(&options))?;
    assert_eq!(first, second);

    Ok(())
}

#[test]
fn identifiers_are_unique_and_name_derived() {
    init_logger();
    let graph = library_graph(&DisplayOptions::default());

    let mut seen = HashSet::new();
    for (id, node) in graph.types() {
        assert_eq!(id, format!("TYPE::{}", node.name));
        assert_eq!(id, node.id);
        assert!(seen.insert(id.to_string()), "duplicate id {}", id);

        for field in node.fields().into_iter().flat_map(|fields| fields.values()) {
            assert_eq!(field.id, format!("FIELD::{}::{}", node.name, field.name));
            assert!(seen.insert(field.id.clone()), "duplicate id {}", field.id);

            for arg in field.args.values() {
                assert_eq!(
                    arg.id,
                    format!("ARGUMENT::{}::{}::{}", node.name, field.name, arg.name)
                );
                assert!(seen.insert(arg.id.clone()), "duplicate id {}", arg.id);
            }
        }

        for edge in node.edges() {
            assert!(seen.insert(edge.id.clone()), "duplicate id {}", edge.id);
        }
    }

    assert_eq!(graph.len(), 13);
}

#[test]
fn every_reference_points_into_the_graph() {
    init_logger();
    let graph = library_graph(&DisplayOptions::default());

    let query = graph.query_type().expect("query root should exist");
    assert_eq!(query.name, "Query");
    assert_eq!(
        graph.mutation_type().map(|node| node.name.as_str()),
        Some("Mutation")
    );
    assert!(graph.subscription_type().is_none());

    let books = query.field("books").expect("Query.books should exist");
    assert_eq!(graph.node(books.type_index).name, "Book");
    assert_eq!(
        books.type_wrappers,
        vec![
            TypeWrapper::NonNull,
            TypeWrapper::List,
            TypeWrapper::NonNull,
        ]
    );
    let first = &books.args["first"];
    assert_eq!(graph.node(first.type_index).name, "Int");
    assert_eq!(first.default_value.as_deref(), Some("10"));
    assert!(first.type_wrappers.is_empty());

    let search = query.field("search").expect("Query.search should exist");
    assert_eq!(graph.node(search.type_index).name, "SearchResult");
    assert_eq!(search.type_wrappers, vec![TypeWrapper::List]);

    for (_, node) in graph.types() {
        for edge in node.edges() {
            assert!(graph.type_by_id(&graph.node(edge.type_index).id).is_some());
        }
    }
}

#[test]
fn descriptions_and_deprecation_reasons_are_kept() {
    init_logger();
    let graph = library_graph(&DisplayOptions::default());
    let query = graph.type_by_name("Query").expect("Query should exist");

    assert_eq!(query.description.as_deref(), Some("The query root."));

    let book = query.field("book").expect("Query.book should exist");
    assert_eq!(book.description.as_deref(), Some("Looks up a single book."));
    assert!(!book.is_deprecated);
    assert_eq!(book.deprecation_reason, None);

    let legacy = query
        .field("legacyBooks")
        .expect("Query.legacyBooks should exist");
    assert!(legacy.is_deprecated);
    assert_eq!(legacy.deprecation_reason.as_deref(), Some("Use books"));
}

#[test]
fn sorting_changes_order_but_not_identity() {
    init_logger();
    let unsorted = library_graph(&DisplayOptions::default());
    let sorted = library_graph(&DisplayOptions {
        sort_by_alphabet: true,
        ..Default::default()
    });

    let unsorted_ids: HashSet<&str> = unsorted.type_ids().collect();
    let sorted_ids: HashSet<&str> = sorted.type_ids().collect();
    assert_eq!(unsorted_ids, sorted_ids);

    assert_eq!(
        sorted.type_ids().collect::<Vec<_>>(),
        vec![
            "TYPE::Author",
            "TYPE::Book",
            "TYPE::BookInput",
            "TYPE::Boolean",
            "TYPE::Genre",
            "TYPE::HiddenStats",
            "TYPE::ID",
            "TYPE::Int",
            "TYPE::Mutation",
            "TYPE::Node",
            "TYPE::Query",
            "TYPE::SearchResult",
            "TYPE::String",
        ]
    );

    let query_fields: Vec<&str> = sorted
        .query_type()
        .and_then(|query| query.fields())
        .map(|fields| fields.keys().map(String::as_str).collect())
        .unwrap_or_default();
    assert_eq!(
        query_fields,
        vec!["book", "books", "legacyBooks", "node", "search", "stats"]
    );

    let TypeNodeKind::Interface { derived_types, .. } = &sorted
        .type_by_name("Node")
        .expect("Node should exist")
        .kind
    else {
        panic!("Node should be an interface");
    };
    let derived: Vec<&str> = derived_types.iter().map(|edge| edge.id.as_str()).collect();
    assert_eq!(
        derived,
        vec!["DERIVED_TYPE::Node::Author", "DERIVED_TYPE::Node::Book"]
    );

    assert_eq!(reference_targets(&sorted), reference_targets(&unsorted));
}

/// Every reference in the graph as `(referrer id, target type id)`, ordered by referrer.
fn reference_targets(graph: &TypeGraph) -> Vec<(String, String)> {
    let target = |index| graph.node(index).id.clone();
    let mut references = Vec::new();

    for (_, node) in graph.types() {
        for field in node.fields().into_iter().flat_map(|fields| fields.values()) {
            references.push((field.id.clone(), target(field.type_index)));
            for arg in field.args.values() {
                references.push((arg.id.clone(), target(arg.type_index)));
            }
        }
        if let TypeNodeKind::InputObject { input_fields } = &node.kind {
            for input_field in input_fields.values() {
                references.push((input_field.id.clone(), target(input_field.type_index)));
            }
        }
        for edge in node.edges() {
            references.push((edge.id.clone(), target(edge.type_index)));
        }
    }

    references.sort();
    references
}

#[test]
fn serializes_references_as_identifiers() -> Result<(), Box<dyn Error>> {
    init_logger();
    let graph = library_graph(&DisplayOptions::default());
    let json = serde_json::to_value(&graph)?;

    assert_eq!(json["queryType"], "TYPE::Query");
    assert_eq!(json["subscriptionType"], serde_json::Value::Null);

    let books = &json["types"]["TYPE::Query"]["fields"]["books"];
    assert_eq!(books["id"], "FIELD::Query::books");
    assert_eq!(books["type"], "TYPE::Book");
    assert_eq!(
        books["typeWrappers"],
        serde_json::json!(["NON_NULL", "LIST", "NON_NULL"])
    );
    assert_eq!(
        books["args"]["first"]["id"],
        "ARGUMENT::Query::books::first"
    );
    assert_eq!(books["args"]["first"]["defaultValue"], "10");

    let related = &json["types"]["TYPE::Book"]["fields"]["related"];
    assert_eq!(related["type"], "TYPE::Book");

    assert_eq!(
        json["types"]["TYPE::SearchResult"]["possibleTypes"][0],
        serde_json::json!({ "id": "POSSIBLE_TYPE::SearchResult::Book", "type": "TYPE::Book" })
    );
    assert_eq!(
        json["types"]["TYPE::Genre"]["enumValues"][2]["name"],
        "POETRY"
    );
    assert_eq!(json["types"]["TYPE::ID"]["kind"], "SCALAR");

    Ok(())
}

#[test]
fn invalid_introspection_is_rejected() {
    init_logger();
    let mut introspection = read_introspection(LIBRARY_FIXTURE);
    introspection
        .__schema
        .types
        .retain(|candidate| type_name(candidate) != "Author");

    let result = assemble_graph(Some(&introspection), &DisplayOptions::default());
    assert!(matches!(
        result,
        Err(crate::error::PipelineError::Introspection(_))
    ));
}
