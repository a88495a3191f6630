use graphql_tools::introspection::{
    IntrospectionInputTypeRef, IntrospectionInputValue, IntrospectionOutputTypeRef,
    IntrospectionQuery, IntrospectionType,
};

use crate::error::IntrospectionError;

/// One layer of a type reference: a wrapper around an optional inner reference,
/// or the named type at the bottom.
#[derive(Debug)]
pub enum TypeRefLayer<'a, T> {
    NonNull(Option<&'a T>),
    List(Option<&'a T>),
    Named(&'a str),
}

/// Shared view over field (output) and argument/input-field (input) type references,
/// so both can be unwrapped the same way.
pub trait IntrospectionTypeRef: Sized {
    fn layer(&self) -> TypeRefLayer<'_, Self>;

    /// The name of the innermost named type, or `None` when a wrapper has no `ofType`.
    fn named_type(&self) -> Option<&str> {
        let mut current = self;
        loop {
            match current.layer() {
                TypeRefLayer::Named(name) => return Some(name),
                TypeRefLayer::NonNull(of_type) | TypeRefLayer::List(of_type) => {
                    current = of_type?;
                }
            }
        }
    }
}

impl IntrospectionTypeRef for IntrospectionOutputTypeRef {
    fn layer(&self) -> TypeRefLayer<'_, Self> {
        match self {
            IntrospectionOutputTypeRef::NON_NULL { of_type } => {
                TypeRefLayer::NonNull(of_type.as_deref())
            }
            IntrospectionOutputTypeRef::LIST { of_type } => TypeRefLayer::List(of_type.as_deref()),
            IntrospectionOutputTypeRef::SCALAR(named)
            | IntrospectionOutputTypeRef::OBJECT(named)
            | IntrospectionOutputTypeRef::INTERFACE(named)
            | IntrospectionOutputTypeRef::UNION(named)
            | IntrospectionOutputTypeRef::ENUM(named)
            | IntrospectionOutputTypeRef::INPUT_OBJECT(named) => TypeRefLayer::Named(&named.name),
        }
    }
}

impl IntrospectionTypeRef for IntrospectionInputTypeRef {
    fn layer(&self) -> TypeRefLayer<'_, Self> {
        match self {
            IntrospectionInputTypeRef::NON_NULL { of_type } => {
                TypeRefLayer::NonNull(of_type.as_deref())
            }
            IntrospectionInputTypeRef::LIST { of_type } => TypeRefLayer::List(of_type.as_deref()),
            IntrospectionInputTypeRef::SCALAR(named)
            | IntrospectionInputTypeRef::ENUM(named)
            | IntrospectionInputTypeRef::INPUT_OBJECT(named) => TypeRefLayer::Named(&named.name),
        }
    }
}

pub fn type_name(introspection_type: &IntrospectionType) -> &str {
    match introspection_type {
        IntrospectionType::SCALAR(t) => &t.name,
        IntrospectionType::OBJECT(t) => &t.name,
        IntrospectionType::INTERFACE(t) => &t.name,
        IntrospectionType::UNION(t) => &t.name,
        IntrospectionType::ENUM(t) => &t.name,
        IntrospectionType::INPUT_OBJECT(t) => &t.name,
    }
}

pub fn type_description(introspection_type: &IntrospectionType) -> Option<&str> {
    match introspection_type {
        IntrospectionType::SCALAR(t) => t.description.as_deref(),
        IntrospectionType::OBJECT(t) => t.description.as_deref(),
        IntrospectionType::INTERFACE(t) => t.description.as_deref(),
        IntrospectionType::UNION(t) => t.description.as_deref(),
        IntrospectionType::ENUM(t) => t.description.as_deref(),
        IntrospectionType::INPUT_OBJECT(t) => t.description.as_deref(),
    }
}

pub fn type_kind(introspection_type: &IntrospectionType) -> &'static str {
    match introspection_type {
        IntrospectionType::SCALAR(_) => "SCALAR",
        IntrospectionType::OBJECT(_) => "OBJECT",
        IntrospectionType::INTERFACE(_) => "INTERFACE",
        IntrospectionType::UNION(_) => "UNION",
        IntrospectionType::ENUM(_) => "ENUM",
        IntrospectionType::INPUT_OBJECT(_) => "INPUT_OBJECT",
    }
}

/// The default value of an argument or input field as GraphQL source text.
/// Introspection reports it as a string already; any other JSON value is printed as-is.
pub fn default_value_literal(input_value: &IntrospectionInputValue) -> Option<String> {
    match input_value.default_value.as_ref()? {
        serde_json::Value::Null => None,
        serde_json::Value::String(literal) => Some(literal.clone()),
        other => Some(other.to_string()),
    }
}

/// Parses an introspection result, accepting both the bare `{ "__schema": ... }` document
/// and the full GraphQL response envelope `{ "data": { "__schema": ... } }`.
pub fn parse_introspection(source: &str) -> Result<IntrospectionQuery, IntrospectionError> {
    let mut value: serde_json::Value = serde_json::from_str(source)?;
    let document = match value.get_mut("data") {
        Some(data) => data.take(),
        None => value,
    };

    Ok(serde_json::from_value(document)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphql_tools::introspection::IntrospectionNamedTypeRef;
    use pretty_assertions::assert_eq;

    const BARE: &str = r#"{
      "__schema": {
        "queryType": { "name": "Query" },
        "mutationType": null,
        "subscriptionType": null,
        "types": [
          {
            "kind": "OBJECT",
            "name": "Query",
            "description": null,
            "fields": [
              {
                "name": "tags",
                "description": null,
                "args": [
                  {
                    "name": "first",
                    "description": null,
                    "type": { "kind": "SCALAR", "name": "Int", "ofType": null },
                    "defaultValue": "10"
                  }
                ],
                "type": {
                  "kind": "NON_NULL",
                  "name": null,
                  "ofType": {
                    "kind": "LIST",
                    "name": null,
                    "ofType": { "kind": "SCALAR", "name": "String", "ofType": null }
                  }
                },
                "isDeprecated": false,
                "deprecationReason": null
              }
            ],
            "inputFields": null,
            "interfaces": [],
            "enumValues": null,
            "possibleTypes": null
          },
          {
            "kind": "SCALAR",
            "name": "String",
            "description": "Text",
            "fields": null,
            "inputFields": null,
            "interfaces": null,
            "enumValues": null,
            "possibleTypes": null
          },
          {
            "kind": "SCALAR",
            "name": "Int",
            "description": null
          }
        ],
        "directives": []
      }
    }"#;

    #[test]
    fn parses_bare_document() {
        let query = parse_introspection(BARE).expect("failed to parse");
        let schema = &query.__schema;

        assert_eq!(schema.query_type.name, "Query");
        assert!(schema.mutation_type.is_none());
        assert_eq!(schema.types.len(), 3);
        assert!(schema.directives.is_empty());

        match &schema.types[0] {
            IntrospectionType::OBJECT(object) => {
                let field = &object.fields[0];
                assert_eq!(field.type_ref.named_type(), Some("String"));
                assert_eq!(
                    field.args[0].type_ref.as_ref().and_then(|t| t.named_type()),
                    Some("Int")
                );
                assert!(object.interfaces.is_empty());
            }
            other => panic!("expected OBJECT, got {}", type_kind(other)),
        }
        assert_eq!(type_name(&schema.types[1]), "String");
        assert_eq!(type_description(&schema.types[1]), Some("Text"));
    }

    #[test]
    fn parses_response_envelope() {
        let wrapped = format!(r#"{{ "data": {} }}"#, BARE);
        let bare = parse_introspection(BARE).expect("failed to parse bare");
        let enveloped = parse_introspection(&wrapped).expect("failed to parse envelope");

        assert_eq!(
            serde_json::to_value(&bare).expect("failed to serialize bare"),
            serde_json::to_value(&enveloped).expect("failed to serialize envelope")
        );
    }

    #[test]
    fn layers_unwrap_outside_in() {
        let type_ref = IntrospectionOutputTypeRef::NON_NULL {
            of_type: Some(Box::new(IntrospectionOutputTypeRef::LIST {
                of_type: Some(Box::new(IntrospectionOutputTypeRef::OBJECT(
                    IntrospectionNamedTypeRef {
                        name: "Book".to_string(),
                    },
                ))),
            })),
        };

        let TypeRefLayer::NonNull(Some(list)) = type_ref.layer() else {
            panic!("expected NON_NULL layer");
        };
        assert!(matches!(list.layer(), TypeRefLayer::List(Some(_))));
        assert_eq!(type_ref.named_type(), Some("Book"));
    }

    #[test]
    fn incomplete_wrapper_has_no_named_type() {
        let output = IntrospectionOutputTypeRef::NON_NULL {
            of_type: Some(Box::new(IntrospectionOutputTypeRef::LIST { of_type: None })),
        };
        let input = IntrospectionInputTypeRef::LIST { of_type: None };

        assert_eq!(output.named_type(), None);
        assert_eq!(input.named_type(), None);
    }

    #[test]
    fn default_values_are_graphql_literals() {
        let query = parse_introspection(BARE).expect("failed to parse");
        let IntrospectionType::OBJECT(object) = &query.__schema.types[0] else {
            panic!("expected OBJECT");
        };
        assert_eq!(
            default_value_literal(&object.fields[0].args[0]).as_deref(),
            Some("10")
        );

        let with_default = |default_value| IntrospectionInputValue {
            name: "first".to_string(),
            description: None,
            type_ref: None,
            default_value,
            is_deprecated: None,
            deprecation_reason: None,
        };
        let number = with_default(Some(serde_json::json!(25)));
        let null = with_default(Some(serde_json::Value::Null));

        assert_eq!(default_value_literal(&number).as_deref(), Some("25"));
        assert_eq!(default_value_literal(&null), None);
        assert_eq!(default_value_literal(&with_default(None)), None);
    }

    #[test]
    fn rejects_malformed_json() {
        let result = parse_introspection(r#"{ "__schema": { "types": "nope" } }"#);

        assert!(matches!(result, Err(IntrospectionError::Json(_))));
    }
}
