use indexmap::IndexMap;
use serde::Serialize;

use crate::wrappers::WrappedTypeRef;

/// The introspection schema reduced to what the graph needs, keyed by type name.
/// Every type reference is still a name at this stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplifiedIntrospection {
    pub types: IndexMap<String, SimplifiedType>,
    pub query_type: Option<String>,
    pub mutation_type: Option<String>,
    pub subscription_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimplifiedType {
    pub name: String,
    pub description: Option<String>,
    #[serde(flatten)]
    pub kind: SimplifiedTypeKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SimplifiedTypeKind {
    Scalar,
    Object {
        interfaces: Vec<String>,
        fields: IndexMap<String, SimplifiedField>,
    },
    Interface {
        #[serde(rename = "derivedTypes")]
        derived_types: Vec<String>,
        fields: IndexMap<String, SimplifiedField>,
    },
    Union {
        #[serde(rename = "possibleTypes")]
        possible_types: Vec<String>,
    },
    Enum {
        #[serde(rename = "enumValues")]
        enum_values: Vec<EnumValue>,
    },
    InputObject {
        #[serde(rename = "inputFields")]
        input_fields: IndexMap<String, SimplifiedInputValue>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplifiedField {
    pub name: String,
    pub description: Option<String>,
    #[serde(flatten)]
    pub type_ref: WrappedTypeRef,
    pub args: IndexMap<String, SimplifiedInputValue>,
    pub is_deprecated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecation_reason: Option<String>,
}

/// An argument or an input field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplifiedInputValue {
    pub name: String,
    pub description: Option<String>,
    pub default_value: Option<String>,
    #[serde(flatten)]
    pub type_ref: WrappedTypeRef,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumValue {
    pub name: String,
    pub description: Option<String>,
    pub is_deprecated: bool,
    pub deprecation_reason: Option<String>,
}
