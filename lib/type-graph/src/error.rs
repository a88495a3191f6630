use graphql_introspection::IntrospectionError;

/// Raised while turning type names into graph references.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaIntegrityError {
    #[error("Type '{type_name}' referenced by '{referenced_by}' does not exist in the schema")]
    UnknownType {
        type_name: String,
        referenced_by: String,
    },
    #[error("Type reference of '{referenced_by}' is wrapped but has no named inner type")]
    IncompleteTypeRef { referenced_by: String },
}

/// Raised when the hide rules cannot be applied to the graph.
#[derive(thiserror::Error, Debug)]
pub enum ConfigurationError {
    #[error("Hide rule pattern '{pattern}' is not a valid regular expression: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex_automata::meta::BuildError,
    },
    #[error("Hide rule '{pattern}' proxies '{type_name}' through missing field '{proxy_field}'")]
    MissingProxyField {
        pattern: String,
        type_name: String,
        proxy_field: String,
    },
}

#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Introspection(#[from] IntrospectionError),
    #[error(transparent)]
    SchemaIntegrity(#[from] SchemaIntegrityError),
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Identifier '{0}' does not match any known identifier form")]
pub struct InvalidIdentifier(pub String);
