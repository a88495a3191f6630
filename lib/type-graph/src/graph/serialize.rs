use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::{
    graph::{
        node::{Field, HiddenOptions, InputValue, TypeEdge, TypeKind, TypeNode, TypeNodeKind},
        TypeGraph,
    },
    simplify::EnumValue,
    wrappers::TypeWrapper,
};

// Type references are written as the target's identifier, which keeps the output
// finite for self-referencing schemas.

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GraphView<'a> {
    types: IndexMap<&'a str, NodeView<'a>>,
    query_type: Option<&'a str>,
    mutation_type: Option<&'a str>,
    subscription_type: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NodeView<'a> {
    id: &'a str,
    kind: TypeKind,
    name: &'a str,
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "is_false")]
    is_hidden_type: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    hidden_options: Option<&'a HiddenOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<IndexMap<&'a str, FieldView<'a>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    interfaces: Option<Vec<EdgeView<'a>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    derived_types: Option<Vec<EdgeView<'a>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    possible_types: Option<Vec<EdgeView<'a>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enum_values: Option<&'a [EnumValue]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    input_fields: Option<IndexMap<&'a str, InputValueView<'a>>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FieldView<'a> {
    id: &'a str,
    name: &'a str,
    description: Option<&'a str>,
    #[serde(rename = "type")]
    type_id: &'a str,
    type_wrappers: &'a [TypeWrapper],
    args: IndexMap<&'a str, InputValueView<'a>>,
    is_deprecated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    deprecation_reason: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InputValueView<'a> {
    id: &'a str,
    name: &'a str,
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    default_value: Option<&'a str>,
    #[serde(rename = "type")]
    type_id: &'a str,
    type_wrappers: &'a [TypeWrapper],
}

#[derive(Serialize)]
struct EdgeView<'a> {
    id: &'a str,
    #[serde(rename = "type")]
    type_id: &'a str,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl<'a> GraphView<'a> {
    fn new(graph: &'a TypeGraph) -> Self {
        let root_id = |root: Option<&'a TypeNode>| root.map(|node| node.id.as_str());

        Self {
            types: graph
                .types()
                .map(|(id, node)| (id, NodeView::new(graph, node)))
                .collect(),
            query_type: root_id(graph.query_type()),
            mutation_type: root_id(graph.mutation_type()),
            subscription_type: root_id(graph.subscription_type()),
        }
    }
}

impl<'a> NodeView<'a> {
    fn new(graph: &'a TypeGraph, node: &'a TypeNode) -> Self {
        let mut view = NodeView {
            id: &node.id,
            kind: node.kind(),
            name: &node.name,
            description: node.description.as_deref(),
            is_hidden_type: node.is_hidden_type,
            hidden_options: node.hidden_options.as_ref(),
            fields: None,
            interfaces: None,
            derived_types: None,
            possible_types: None,
            enum_values: None,
            input_fields: None,
        };

        match &node.kind {
            TypeNodeKind::Scalar => {}
            TypeNodeKind::Object { interfaces, fields } => {
                view.interfaces = Some(edge_views(graph, interfaces));
                view.fields = Some(field_views(graph, fields));
            }
            TypeNodeKind::Interface {
                derived_types,
                fields,
            } => {
                view.derived_types = Some(edge_views(graph, derived_types));
                view.fields = Some(field_views(graph, fields));
            }
            TypeNodeKind::Union { possible_types } => {
                view.possible_types = Some(edge_views(graph, possible_types));
            }
            TypeNodeKind::Enum { enum_values } => {
                view.enum_values = Some(enum_values.as_slice());
            }
            TypeNodeKind::InputObject { input_fields } => {
                view.input_fields = Some(input_value_views(graph, input_fields));
            }
        }

        view
    }
}

fn edge_views<'a>(graph: &'a TypeGraph, edges: &'a [TypeEdge]) -> Vec<EdgeView<'a>> {
    edges
        .iter()
        .map(|edge| EdgeView {
            id: &edge.id,
            type_id: &graph.node(edge.type_index).id,
        })
        .collect()
}

fn field_views<'a>(
    graph: &'a TypeGraph,
    fields: &'a IndexMap<String, Field>,
) -> IndexMap<&'a str, FieldView<'a>> {
    fields
        .iter()
        .map(|(name, field)| {
            let view = FieldView {
                id: &field.id,
                name: &field.name,
                description: field.description.as_deref(),
                type_id: &graph.node(field.type_index).id,
                type_wrappers: &field.type_wrappers,
                args: input_value_views(graph, &field.args),
                is_deprecated: field.is_deprecated,
                deprecation_reason: field.deprecation_reason.as_deref(),
            };
            (name.as_str(), view)
        })
        .collect()
}

fn input_value_views<'a>(
    graph: &'a TypeGraph,
    input_values: &'a IndexMap<String, InputValue>,
) -> IndexMap<&'a str, InputValueView<'a>> {
    input_values
        .iter()
        .map(|(name, input_value)| {
            let view = InputValueView {
                id: &input_value.id,
                name: &input_value.name,
                description: input_value.description.as_deref(),
                default_value: input_value.default_value.as_deref(),
                type_id: &graph.node(input_value.type_index).id,
                type_wrappers: &input_value.type_wrappers,
            };
            (name.as_str(), view)
        })
        .collect()
}

impl Serialize for TypeGraph {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        GraphView::new(self).serialize(serializer)
    }
}
