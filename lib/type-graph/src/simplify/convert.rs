use graphql_introspection::{
    default_value_literal, type_description, type_name, IntrospectionTypeRef,
};
use graphql_tools::introspection::{
    IntrospectionEnumValue, IntrospectionField, IntrospectionInputValue, IntrospectionNamedTypeRef,
    IntrospectionType,
};
use indexmap::{IndexMap, IndexSet};

use crate::{
    error::SchemaIntegrityError,
    simplify::types::{
        EnumValue, SimplifiedField, SimplifiedInputValue, SimplifiedType, SimplifiedTypeKind,
    },
    wrappers::WrappedTypeRef,
};

/// An input value may come without a `type` at all; that counts as an incomplete reference.
fn wrapped_type_ref<T: IntrospectionTypeRef>(
    type_ref: Option<&T>,
    referenced_by: impl FnOnce() -> String,
) -> Result<WrappedTypeRef, SchemaIntegrityError> {
    type_ref
        .and_then(WrappedTypeRef::from_introspection)
        .ok_or_else(|| SchemaIntegrityError::IncompleteTypeRef {
            referenced_by: referenced_by(),
        })
}

/// Converts an argument or an input field; `owner` is the path of the field or type it belongs to.
pub fn convert_input_value(
    owner: &str,
    input_value: &IntrospectionInputValue,
) -> Result<SimplifiedInputValue, SchemaIntegrityError> {
    Ok(SimplifiedInputValue {
        name: input_value.name.clone(),
        description: input_value.description.clone(),
        default_value: default_value_literal(input_value),
        type_ref: wrapped_type_ref(input_value.type_ref.as_ref(), || {
            format!("{}.{}", owner, input_value.name)
        })?,
    })
}

fn convert_input_values(
    owner: &str,
    input_values: &[IntrospectionInputValue],
) -> Result<IndexMap<String, SimplifiedInputValue>, SchemaIntegrityError> {
    input_values
        .iter()
        .map(|input_value| {
            convert_input_value(owner, input_value)
                .map(|converted| (converted.name.clone(), converted))
        })
        .collect()
}

pub fn convert_field(
    type_name: &str,
    field: &IntrospectionField,
) -> Result<SimplifiedField, SchemaIntegrityError> {
    let path = format!("{}.{}", type_name, field.name);
    let is_deprecated = field.is_deprecated.unwrap_or(false);

    Ok(SimplifiedField {
        name: field.name.clone(),
        description: field.description.clone(),
        type_ref: wrapped_type_ref(Some(&field.type_ref), || path.clone())?,
        args: convert_input_values(&path, &field.args)?,
        is_deprecated,
        deprecation_reason: is_deprecated
            .then(|| field.deprecation_reason.clone())
            .flatten(),
    })
}

fn convert_fields(
    type_name: &str,
    fields: &[IntrospectionField],
) -> Result<IndexMap<String, SimplifiedField>, SchemaIntegrityError> {
    fields
        .iter()
        .map(|field| {
            convert_field(type_name, field).map(|converted| (converted.name.clone(), converted))
        })
        .collect()
}

fn convert_enum_value(enum_value: &IntrospectionEnumValue) -> EnumValue {
    EnumValue {
        name: enum_value.name.clone(),
        description: enum_value.description.clone(),
        is_deprecated: enum_value.is_deprecated.unwrap_or(false),
        deprecation_reason: enum_value.deprecation_reason.clone(),
    }
}

/// Names in first-seen order, without duplicates.
fn unique_names(refs: &[IntrospectionNamedTypeRef]) -> Vec<String> {
    refs.iter()
        .map(|named| named.name.as_str())
        .collect::<IndexSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

pub fn convert_type(
    introspection_type: &IntrospectionType,
) -> Result<SimplifiedType, SchemaIntegrityError> {
    let name = type_name(introspection_type);
    let kind = match introspection_type {
        IntrospectionType::SCALAR(_) => SimplifiedTypeKind::Scalar,
        IntrospectionType::OBJECT(object) => SimplifiedTypeKind::Object {
            interfaces: unique_names(&object.interfaces),
            fields: convert_fields(name, &object.fields)?,
        },
        IntrospectionType::INTERFACE(interface) => SimplifiedTypeKind::Interface {
            derived_types: unique_names(&interface.possible_types),
            fields: convert_fields(name, &interface.fields)?,
        },
        IntrospectionType::UNION(union) => SimplifiedTypeKind::Union {
            possible_types: unique_names(&union.possible_types),
        },
        IntrospectionType::ENUM(enum_type) => SimplifiedTypeKind::Enum {
            enum_values: enum_type
                .enum_values
                .iter()
                .map(convert_enum_value)
                .collect(),
        },
        IntrospectionType::INPUT_OBJECT(input) => SimplifiedTypeKind::InputObject {
            input_fields: convert_input_values(name, &input.input_fields)?,
        },
    };

    Ok(SimplifiedType {
        name: name.to_string(),
        description: type_description(introspection_type).map(str::to_string),
        kind,
    })
}
