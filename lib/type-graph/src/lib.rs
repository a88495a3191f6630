pub mod assemble;
pub mod deprecation;
pub mod error;
pub mod graph;
pub mod hidden;
pub mod ids;
pub mod pipeline;
pub mod simplify;
pub mod wrappers;

#[cfg(test)]
mod tests;

pub use assemble::assign_types_and_ids;
pub use deprecation::remove_deprecated_fields;
pub use error::{ConfigurationError, InvalidIdentifier, PipelineError, SchemaIntegrityError};
pub use graph::{Entity, ReachableTypes, TypeGraph, TypeIndex, TypeKind, TypeNode};
pub use hidden::resolve_hidden_types;
pub use ids::{extract_type_id, EntityId};
pub use pipeline::assemble_graph;
pub use simplify::{simplify_schema, EnumValue};
pub use wrappers::{stringify_wrappers, TypeWrapper, WrappedTypeRef};
