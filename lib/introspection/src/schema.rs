use indexmap::IndexMap;
use tracing::{debug, instrument};

use graphql_tools::introspection::{
    IntrospectionDirective, IntrospectionField, IntrospectionInputValue,
    IntrospectionNamedTypeRef, IntrospectionQuery, IntrospectionSchema, IntrospectionType,
};

use crate::{
    error::IntrospectionError,
    introspection::{type_name, IntrospectionTypeRef},
};

/// A validated, name-indexed view over an introspection result.
///
/// Every type name referenced from a field, argument, input field, interface list,
/// possible-type list or root operation is guaranteed to exist in `types`.
#[derive(Debug, Clone)]
pub struct ClientSchema {
    pub description: Option<String>,
    pub query_type: String,
    pub mutation_type: Option<String>,
    pub subscription_type: Option<String>,
    pub types: IndexMap<String, IntrospectionType>,
    pub directives: Vec<IntrospectionDirective>,
}

impl ClientSchema {
    pub fn type_by_name(&self, name: &str) -> Option<&IntrospectionType> {
        self.types.get(name)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct IntrospectionOptions {
    /// Whether descriptions are kept in the produced document.
    pub descriptions: bool,
}

impl Default for IntrospectionOptions {
    fn default() -> Self {
        Self { descriptions: true }
    }
}

#[instrument(level = "debug", skip_all)]
pub fn build_client_schema(
    introspection: &IntrospectionQuery,
) -> Result<ClientSchema, IntrospectionError> {
    let raw = &introspection.__schema;
    let mut types: IndexMap<String, IntrospectionType> = IndexMap::with_capacity(raw.types.len());

    for introspection_type in &raw.types {
        let name = type_name(introspection_type).to_string();
        if types.contains_key(&name) {
            return Err(IntrospectionError::DuplicateType(name));
        }
        types.insert(name, introspection_type.clone());
    }

    let schema = ClientSchema {
        description: raw.description.clone(),
        query_type: root_type_name(&types, "query", &raw.query_type)?,
        mutation_type: raw
            .mutation_type
            .as_ref()
            .map(|root| root_type_name(&types, "mutation", root))
            .transpose()?,
        subscription_type: raw
            .subscription_type
            .as_ref()
            .map(|root| root_type_name(&types, "subscription", root))
            .transpose()?,
        types,
        directives: raw.directives.clone(),
    };

    for introspection_type in schema.types.values() {
        validate_type_references(&schema.types, introspection_type)?;
    }

    for directive in &schema.directives {
        let owner = format!("@{}", directive.name);
        validate_input_values(&schema.types, &owner, &directive.args)?;
    }

    debug!(
        types = schema.types.len(),
        directives = schema.directives.len(),
        "client schema built"
    );

    Ok(schema)
}

fn root_type_name(
    types: &IndexMap<String, IntrospectionType>,
    operation: &'static str,
    root: &IntrospectionNamedTypeRef,
) -> Result<String, IntrospectionError> {
    match types.get(&root.name) {
        Some(IntrospectionType::OBJECT(_)) => Ok(root.name.clone()),
        Some(_) => Err(IntrospectionError::InvalidRootType {
            operation,
            type_name: root.name.clone(),
        }),
        None => Err(IntrospectionError::UnknownType {
            type_name: root.name.clone(),
            referenced_by: format!("schema.{}Type", operation),
        }),
    }
}

fn ensure_named(
    types: &IndexMap<String, IntrospectionType>,
    name: &str,
    referenced_by: impl FnOnce() -> String,
) -> Result<(), IntrospectionError> {
    if types.contains_key(name) {
        Ok(())
    } else {
        Err(IntrospectionError::UnknownType {
            type_name: name.to_string(),
            referenced_by: referenced_by(),
        })
    }
}

fn ensure_type_ref(
    types: &IndexMap<String, IntrospectionType>,
    type_ref: Option<&impl IntrospectionTypeRef>,
    referenced_by: String,
) -> Result<(), IntrospectionError> {
    match type_ref.and_then(|type_ref| type_ref.named_type()) {
        Some(name) => ensure_named(types, name, || referenced_by),
        None => Err(IntrospectionError::IncompleteTypeRef(referenced_by)),
    }
}

fn validate_input_values(
    types: &IndexMap<String, IntrospectionType>,
    owner: &str,
    values: &[IntrospectionInputValue],
) -> Result<(), IntrospectionError> {
    for value in values {
        let value_path = format!("{}.{}", owner, value.name);
        ensure_type_ref(types, value.type_ref.as_ref(), value_path)?;
    }

    Ok(())
}

fn validate_fields(
    types: &IndexMap<String, IntrospectionType>,
    owner: &str,
    fields: &[IntrospectionField],
) -> Result<(), IntrospectionError> {
    for field in fields {
        let field_path = format!("{}.{}", owner, field.name);
        ensure_type_ref(types, Some(&field.type_ref), field_path.clone())?;
        validate_input_values(types, &field_path, &field.args)?;
    }

    Ok(())
}

fn validate_named_refs(
    types: &IndexMap<String, IntrospectionType>,
    owner: &str,
    refs: &[IntrospectionNamedTypeRef],
) -> Result<(), IntrospectionError> {
    for named in refs {
        ensure_named(types, &named.name, || owner.to_string())?;
    }

    Ok(())
}

fn validate_type_references(
    types: &IndexMap<String, IntrospectionType>,
    introspection_type: &IntrospectionType,
) -> Result<(), IntrospectionError> {
    match introspection_type {
        IntrospectionType::SCALAR(_) | IntrospectionType::ENUM(_) => Ok(()),
        IntrospectionType::OBJECT(object) => {
            validate_named_refs(types, &object.name, &object.interfaces)?;
            validate_fields(types, &object.name, &object.fields)
        }
        IntrospectionType::INTERFACE(interface) => {
            let interfaces = interface.interfaces.as_deref().unwrap_or_default();
            validate_named_refs(types, &interface.name, interfaces)?;
            validate_named_refs(types, &interface.name, &interface.possible_types)?;
            validate_fields(types, &interface.name, &interface.fields)
        }
        IntrospectionType::UNION(union) => {
            validate_named_refs(types, &union.name, &union.possible_types)
        }
        IntrospectionType::INPUT_OBJECT(input) => {
            validate_input_values(types, &input.name, &input.input_fields)
        }
    }
}

/// Returns a copy of the schema with every named collection ordered by name:
/// types, fields, arguments, input fields, enum values, interfaces, possible types and directives.
#[instrument(level = "debug", skip_all)]
pub fn lexicographic_sort_schema(schema: &ClientSchema) -> ClientSchema {
    let mut sorted = schema.clone();

    sorted.types.sort_keys();
    for introspection_type in sorted.types.values_mut() {
        sort_type(introspection_type);
    }

    sorted.directives.sort_by(|a, b| a.name.cmp(&b.name));
    for directive in sorted.directives.iter_mut() {
        directive.args.sort_by(|a, b| a.name.cmp(&b.name));
    }

    sorted
}

fn sort_fields(fields: &mut [IntrospectionField]) {
    fields.sort_by(|a, b| a.name.cmp(&b.name));
    for field in fields.iter_mut() {
        field.args.sort_by(|a, b| a.name.cmp(&b.name));
    }
}

fn sort_type(introspection_type: &mut IntrospectionType) {
    match introspection_type {
        IntrospectionType::SCALAR(_) => {}
        IntrospectionType::OBJECT(object) => {
            sort_fields(&mut object.fields);
            object.interfaces.sort_by(|a, b| a.name.cmp(&b.name));
        }
        IntrospectionType::INTERFACE(interface) => {
            sort_fields(&mut interface.fields);
            if let Some(interfaces) = interface.interfaces.as_mut() {
                interfaces.sort_by(|a, b| a.name.cmp(&b.name));
            }
            interface.possible_types.sort_by(|a, b| a.name.cmp(&b.name));
        }
        IntrospectionType::UNION(union) => {
            union.possible_types.sort_by(|a, b| a.name.cmp(&b.name));
        }
        IntrospectionType::ENUM(enum_type) => {
            enum_type.enum_values.sort_by(|a, b| a.name.cmp(&b.name));
        }
        IntrospectionType::INPUT_OBJECT(input) => {
            input.input_fields.sort_by(|a, b| a.name.cmp(&b.name));
        }
    }
}

/// Serializes a client schema back into the introspection document shape,
/// preserving the schema's type order.
#[instrument(level = "debug", skip_all)]
pub fn introspection_from_schema(
    schema: &ClientSchema,
    options: IntrospectionOptions,
) -> IntrospectionQuery {
    let mut types: Vec<IntrospectionType> = schema.types.values().cloned().collect();
    let mut directives = schema.directives.clone();
    let mut description = schema.description.clone();

    if !options.descriptions {
        description = None;
        types.iter_mut().for_each(strip_type_descriptions);
        for directive in directives.iter_mut() {
            directive.description = None;
            strip_input_value_descriptions(&mut directive.args);
        }
    }

    IntrospectionQuery {
        __schema: IntrospectionSchema {
            description,
            query_type: named_type_ref(&schema.query_type),
            mutation_type: schema.mutation_type.as_deref().map(named_type_ref),
            subscription_type: schema.subscription_type.as_deref().map(named_type_ref),
            types,
            directives,
        },
    }
}

fn named_type_ref(name: &str) -> IntrospectionNamedTypeRef {
    IntrospectionNamedTypeRef {
        name: name.to_string(),
    }
}

fn strip_input_value_descriptions(values: &mut [IntrospectionInputValue]) {
    for value in values.iter_mut() {
        value.description = None;
    }
}

fn strip_field_descriptions(fields: &mut [IntrospectionField]) {
    for field in fields.iter_mut() {
        field.description = None;
        strip_input_value_descriptions(&mut field.args);
    }
}

fn strip_type_descriptions(introspection_type: &mut IntrospectionType) {
    match introspection_type {
        IntrospectionType::SCALAR(scalar) => scalar.description = None,
        IntrospectionType::OBJECT(object) => {
            object.description = None;
            strip_field_descriptions(&mut object.fields);
        }
        IntrospectionType::INTERFACE(interface) => {
            interface.description = None;
            strip_field_descriptions(&mut interface.fields);
        }
        IntrospectionType::UNION(union) => union.description = None,
        IntrospectionType::ENUM(enum_type) => {
            enum_type.description = None;
            for value in enum_type.enum_values.iter_mut() {
                value.description = None;
            }
        }
        IntrospectionType::INPUT_OBJECT(input) => {
            input.description = None;
            strip_input_value_descriptions(&mut input.input_fields);
        }
    }
}
