use std::fmt::Display;

use indexmap::IndexMap;
use serde::Serialize;

use crate::{simplify::EnumValue, wrappers::TypeWrapper};

const BUILTIN_SCALARS: [&str; 5] = ["Int", "Float", "String", "Boolean", "ID"];

/// Position of a type node inside its graph's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeIndex(pub(crate) usize);

impl TypeIndex {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
}

impl TypeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Scalar => "SCALAR",
            TypeKind::Object => "OBJECT",
            TypeKind::Interface => "INTERFACE",
            TypeKind::Union => "UNION",
            TypeKind::Enum => "ENUM",
            TypeKind::InputObject => "INPUT_OBJECT",
        }
    }
}

impl Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HiddenOptions {
    /// The field of the hidden type that stands in for it.
    pub replace_field: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeNode {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_hidden_type: bool,
    pub hidden_options: Option<HiddenOptions>,
    pub kind: TypeNodeKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypeNodeKind {
    Scalar,
    Object {
        interfaces: Vec<TypeEdge>,
        fields: IndexMap<String, Field>,
    },
    Interface {
        derived_types: Vec<TypeEdge>,
        fields: IndexMap<String, Field>,
    },
    Union {
        possible_types: Vec<TypeEdge>,
    },
    Enum {
        enum_values: Vec<EnumValue>,
    },
    InputObject {
        input_fields: IndexMap<String, InputValue>,
    },
}

/// A link from a type to an interface, an implementation or a union member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeEdge {
    pub id: String,
    pub type_index: TypeIndex,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub type_index: TypeIndex,
    pub type_wrappers: Vec<TypeWrapper>,
    pub args: IndexMap<String, InputValue>,
    pub is_deprecated: bool,
    pub deprecation_reason: Option<String>,
}

/// An argument or an input field.
#[derive(Debug, Clone, PartialEq)]
pub struct InputValue {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub default_value: Option<String>,
    pub type_index: TypeIndex,
    pub type_wrappers: Vec<TypeWrapper>,
}

impl TypeNode {
    pub fn kind(&self) -> TypeKind {
        match self.kind {
            TypeNodeKind::Scalar => TypeKind::Scalar,
            TypeNodeKind::Object { .. } => TypeKind::Object,
            TypeNodeKind::Interface { .. } => TypeKind::Interface,
            TypeNodeKind::Union { .. } => TypeKind::Union,
            TypeNodeKind::Enum { .. } => TypeKind::Enum,
            TypeNodeKind::InputObject { .. } => TypeKind::InputObject,
        }
    }

    /// Output fields, present on object and interface types only.
    pub fn fields(&self) -> Option<&IndexMap<String, Field>> {
        match &self.kind {
            TypeNodeKind::Object { fields, .. } | TypeNodeKind::Interface { fields, .. } => {
                Some(fields)
            }
            _ => None,
        }
    }

    pub fn fields_mut(&mut self) -> Option<&mut IndexMap<String, Field>> {
        match &mut self.kind {
            TypeNodeKind::Object { fields, .. } | TypeNodeKind::Interface { fields, .. } => {
                Some(fields)
            }
            _ => None,
        }
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields().and_then(|fields| fields.get(name))
    }

    pub fn input_fields(&self) -> Option<&IndexMap<String, InputValue>> {
        match &self.kind {
            TypeNodeKind::InputObject { input_fields } => Some(input_fields),
            _ => None,
        }
    }

    /// Interfaces of an object, implementations of an interface or members of a union.
    pub fn edges(&self) -> &[TypeEdge] {
        match &self.kind {
            TypeNodeKind::Object { interfaces, .. } => interfaces,
            TypeNodeKind::Interface { derived_types, .. } => derived_types,
            TypeNodeKind::Union { possible_types } => possible_types,
            _ => &[],
        }
    }

    /// Leaf types: scalars and enums.
    pub fn is_scalar_type(&self) -> bool {
        matches!(self.kind, TypeNodeKind::Scalar | TypeNodeKind::Enum { .. })
    }

    pub fn is_input_object_type(&self) -> bool {
        matches!(self.kind, TypeNodeKind::InputObject { .. })
    }

    pub fn is_builtin_scalar_type(&self) -> bool {
        matches!(self.kind, TypeNodeKind::Scalar) && BUILTIN_SCALARS.contains(&self.name.as_str())
    }
}
