pub mod error;
pub mod introspection;
pub mod schema;

pub use error::IntrospectionError;
pub use graphql_tools::introspection::IntrospectionQuery;
pub use introspection::{
    default_value_literal, parse_introspection, type_description, type_kind, type_name,
    IntrospectionTypeRef, TypeRefLayer,
};
pub use schema::{
    build_client_schema, introspection_from_schema, lexicographic_sort_schema, ClientSchema,
    IntrospectionOptions,
};
