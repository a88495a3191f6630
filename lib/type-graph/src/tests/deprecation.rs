use pretty_assertions::assert_eq;
use type_graph_config::display::DisplayOptions;

use crate::{
    deprecation::remove_deprecated_fields,
    graph::TypeNodeKind,
    pipeline::assemble_graph,
    tests::testkit::{init_logger, library_graph, parse_inline},
};

#[test]
fn deprecated_fields_are_removed() {
    init_logger();
    let graph = library_graph(&DisplayOptions {
        skip_deprecated: true,
        ..Default::default()
    });

    let query = graph.query_type().expect("query root should exist");
    assert!(query.field("legacyBooks").is_none());
    assert!(query.field("books").is_some());

    let book = graph.type_by_name("Book").expect("Book should exist");
    let book_fields: Vec<&str> = book
        .fields()
        .map(|fields| fields.keys().map(String::as_str).collect())
        .unwrap_or_default();
    assert_eq!(book_fields, vec!["id", "title", "author", "related"]);

    assert!(graph.lookup("FIELD::Query::legacyBooks").is_none());
    assert!(graph.lookup("FIELD::Query::books").is_some());
}

#[test]
fn enum_values_survive() {
    init_logger();
    let graph = library_graph(&DisplayOptions {
        skip_deprecated: true,
        ..Default::default()
    });

    let genre = graph.type_by_name("Genre").expect("Genre should exist");
    let TypeNodeKind::Enum { enum_values } = &genre.kind else {
        panic!("Genre should be an enum");
    };
    let names: Vec<&str> = enum_values
        .iter()
        .map(|value| value.name.as_str())
        .collect();
    assert_eq!(names, vec!["FICTION", "HISTORY", "POETRY"]);
}

#[test]
fn counts_removed_fields() {
    init_logger();
    let mut graph = library_graph(&DisplayOptions::default());
    let types_before = graph.len();

    assert_eq!(remove_deprecated_fields(&mut graph), 2);
    assert_eq!(remove_deprecated_fields(&mut graph), 0);
    assert_eq!(graph.len(), types_before);
}

#[test]
fn fields_stay_without_the_flag() {
    init_logger();
    let graph = library_graph(&DisplayOptions::default());

    let isbn = graph
        .type_by_name("Book")
        .and_then(|book| book.field("isbn"))
        .expect("Book.isbn should exist");
    assert!(isbn.is_deprecated);
    assert_eq!(isbn.deprecation_reason.as_deref(), Some("Removed"));
}

#[test]
fn types_left_without_fields_are_kept() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();
    let introspection = parse_inline(
        r#"{
          "__schema": {
            "queryType": { "name": "Query" },
            "types": [
              {
                "kind": "OBJECT",
                "name": "Query",
                "fields": [
                  {
                    "name": "a",
                    "args": [],
                    "type": { "kind": "OBJECT", "name": "Legacy", "ofType": null },
                    "isDeprecated": false
                  },
                  {
                    "name": "b",
                    "args": [],
                    "type": { "kind": "SCALAR", "name": "String", "ofType": null },
                    "isDeprecated": true,
                    "deprecationReason": "Use a"
                  }
                ],
                "interfaces": []
              },
              {
                "kind": "OBJECT",
                "name": "Legacy",
                "fields": [
                  {
                    "name": "old",
                    "args": [],
                    "type": { "kind": "SCALAR", "name": "String", "ofType": null },
                    "isDeprecated": true
                  }
                ],
                "interfaces": []
              },
              { "kind": "SCALAR", "name": "String" }
            ],
            "directives": []
          }
        }"#,
    );
    let options = DisplayOptions {
        skip_deprecated: true,
        ..Default::default()
    };

    let graph =
        assemble_graph(Some(&introspection), &options)?.expect("introspection was provided");

    let query_fields: Vec<&str> = graph
        .query_type()
        .and_then(|query| query.fields())
        .map(|fields| fields.keys().map(String::as_str).collect())
        .unwrap_or_default();
    assert_eq!(query_fields, vec!["a"]);

    let legacy = graph.type_by_name("Legacy").expect("Legacy should be kept");
    assert_eq!(legacy.fields().map(|fields| fields.len()), Some(0));

    Ok(())
}
