#[derive(thiserror::Error, Debug)]
pub enum IntrospectionError {
    #[error("Failed to parse introspection result: {0}")]
    Json(#[from] serde_json::Error),
    #[error(
        "Invalid or incomplete schema, unknown type '{type_name}' referenced by '{referenced_by}'"
    )]
    UnknownType {
        type_name: String,
        referenced_by: String,
    },
    #[error("Type '{0}' is defined more than once")]
    DuplicateType(String),
    #[error("Root {operation} type '{type_name}' must be an OBJECT type")]
    InvalidRootType {
        operation: &'static str,
        type_name: String,
    },
    #[error("Type reference on '{0}' is wrapped but has no named inner type")]
    IncompleteTypeRef(String),
}
