use indexmap::IndexMap;
use tracing::{debug, instrument};

use crate::{
    error::SchemaIntegrityError,
    graph::{Field, InputValue, TypeEdge, TypeGraph, TypeIndex, TypeNode, TypeNodeKind},
    ids::{argument_id, derived_type_id, field_id, interface_id, possible_type_id, type_name_to_id},
    simplify::{
        SimplifiedField, SimplifiedInputValue, SimplifiedIntrospection, SimplifiedType,
        SimplifiedTypeKind,
    },
    wrappers::WrappedTypeRef,
};

/// Resolves type names to arena positions. Built before any node so that
/// forward and self references resolve the same way as backward ones.
struct TypeResolver {
    indices: IndexMap<String, TypeIndex>,
}

impl TypeResolver {
    fn new(schema: &SimplifiedIntrospection) -> Self {
        Self {
            indices: schema
                .types
                .keys()
                .enumerate()
                .map(|(index, name)| (name.clone(), TypeIndex(index)))
                .collect(),
        }
    }

    fn resolve(
        &self,
        type_name: &str,
        referenced_by: &str,
    ) -> Result<TypeIndex, SchemaIntegrityError> {
        self.indices
            .get(type_name)
            .copied()
            .ok_or_else(|| SchemaIntegrityError::UnknownType {
                type_name: type_name.to_string(),
                referenced_by: referenced_by.to_string(),
            })
    }

    fn resolve_root(
        &self,
        root: Option<&str>,
        operation: &str,
    ) -> Result<Option<TypeIndex>, SchemaIntegrityError> {
        root.map(|name| self.resolve(name, &format!("schema.{}", operation)))
            .transpose()
    }

    fn input_value(
        &self,
        id: String,
        input_value: SimplifiedInputValue,
    ) -> Result<InputValue, SchemaIntegrityError> {
        let WrappedTypeRef { name, wrappers } = input_value.type_ref;

        Ok(InputValue {
            type_index: self.resolve(&name, &id)?,
            id,
            name: input_value.name,
            description: input_value.description,
            default_value: input_value.default_value,
            type_wrappers: wrappers,
        })
    }

    fn field(
        &self,
        type_name: &str,
        field: SimplifiedField,
    ) -> Result<Field, SchemaIntegrityError> {
        let id = field_id(type_name, &field.name);
        let WrappedTypeRef { name, wrappers } = field.type_ref;
        let type_index = self.resolve(&name, &id)?;

        let args = field
            .args
            .into_iter()
            .map(|(arg_name, arg)| {
                let arg_id = argument_id(type_name, &field.name, &arg_name);
                self.input_value(arg_id, arg).map(|arg| (arg_name, arg))
            })
            .collect::<Result<IndexMap<_, _>, _>>()?;

        Ok(Field {
            id,
            name: field.name,
            description: field.description,
            type_index,
            type_wrappers: wrappers,
            args,
            is_deprecated: field.is_deprecated,
            deprecation_reason: field.deprecation_reason,
        })
    }

    fn fields(
        &self,
        type_name: &str,
        fields: IndexMap<String, SimplifiedField>,
    ) -> Result<IndexMap<String, Field>, SchemaIntegrityError> {
        fields
            .into_iter()
            .map(|(name, field)| {
                self.field(type_name, field).map(|field| (name, field))
            })
            .collect()
    }

    fn edges(
        &self,
        names: Vec<String>,
        make_id: impl Fn(&str) -> String,
    ) -> Result<Vec<TypeEdge>, SchemaIntegrityError> {
        names
            .iter()
            .map(|name| {
                let id = make_id(name);
                self.resolve(name, &id)
                    .map(|type_index| TypeEdge { id, type_index })
            })
            .collect()
    }

    fn node(&self, simplified: SimplifiedType) -> Result<TypeNode, SchemaIntegrityError> {
        let type_name = simplified.name.as_str();

        let kind = match simplified.kind {
            SimplifiedTypeKind::Scalar => TypeNodeKind::Scalar,
            SimplifiedTypeKind::Object { interfaces, fields } => TypeNodeKind::Object {
                interfaces: self.edges(interfaces, |other| interface_id(type_name, other))?,
                fields: self.fields(type_name, fields)?,
            },
            SimplifiedTypeKind::Interface {
                derived_types,
                fields,
            } => TypeNodeKind::Interface {
                derived_types: self
                    .edges(derived_types, |other| derived_type_id(type_name, other))?,
                fields: self.fields(type_name, fields)?,
            },
            SimplifiedTypeKind::Union { possible_types } => TypeNodeKind::Union {
                possible_types: self
                    .edges(possible_types, |other| possible_type_id(type_name, other))?,
            },
            SimplifiedTypeKind::Enum { enum_values } => TypeNodeKind::Enum { enum_values },
            SimplifiedTypeKind::InputObject { input_fields } => TypeNodeKind::InputObject {
                input_fields: input_fields
                    .into_iter()
                    .map(|(name, input_field)| {
                        let id = field_id(type_name, &name);
                        self.input_value(id, input_field)
                            .map(|input_field| (name, input_field))
                    })
                    .collect::<Result<_, _>>()?,
            },
        };

        Ok(TypeNode {
            id: type_name_to_id(type_name),
            name: simplified.name.clone(),
            description: simplified.description,
            is_hidden_type: false,
            hidden_options: None,
            kind,
        })
    }
}

/// Gives every entity its identifier and replaces every type name with a
/// reference to the type's node. Type order is preserved.
#[instrument(level = "debug", skip_all)]
pub fn assign_types_and_ids(
    schema: SimplifiedIntrospection,
) -> Result<TypeGraph, SchemaIntegrityError> {
    let resolver = TypeResolver::new(&schema);

    let query_type = resolver.resolve_root(schema.query_type.as_deref(), "queryType")?;
    let mutation_type = resolver.resolve_root(schema.mutation_type.as_deref(), "mutationType")?;
    let subscription_type =
        resolver.resolve_root(schema.subscription_type.as_deref(), "subscriptionType")?;

    let nodes = schema
        .types
        .into_values()
        .map(|simplified| resolver.node(simplified))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(types = nodes.len(), "ids assigned and references resolved");

    Ok(TypeGraph::new(
        nodes,
        query_type,
        mutation_type,
        subscription_type,
    ))
}
