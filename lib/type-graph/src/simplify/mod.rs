mod convert;
mod types;

use graphql_tools::introspection::IntrospectionSchema;
use indexmap::IndexMap;
use tracing::{debug, instrument};

use crate::error::SchemaIntegrityError;

pub use convert::{convert_field, convert_input_value, convert_type};
pub use types::{
    EnumValue, SimplifiedField, SimplifiedInputValue, SimplifiedIntrospection, SimplifiedType,
    SimplifiedTypeKind,
};

/// Converts every introspection type and keys the result by type name.
/// Names are expected to be unique; a repeated name replaces the earlier entry.
#[instrument(level = "debug", skip_all)]
pub fn simplify_schema(
    schema: &IntrospectionSchema,
) -> Result<SimplifiedIntrospection, SchemaIntegrityError> {
    let mut types: IndexMap<String, SimplifiedType> = IndexMap::with_capacity(schema.types.len());

    for introspection_type in &schema.types {
        let simplified = convert_type(introspection_type)?;
        types.insert(simplified.name.clone(), simplified);
    }

    debug!(types = types.len(), "schema simplified");

    Ok(SimplifiedIntrospection {
        types,
        query_type: Some(schema.query_type.name.clone()),
        mutation_type: schema.mutation_type.as_ref().map(|root| root.name.clone()),
        subscription_type: schema
            .subscription_type
            .as_ref()
            .map(|root| root.name.clone()),
    })
}
