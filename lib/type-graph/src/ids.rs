use std::{fmt::Display, str::FromStr};

use crate::error::InvalidIdentifier;

const SEPARATOR: &str = "::";

/// Every entity of the type graph is addressed by a string identifier derived only from
/// names, so identifiers are stable across runs and independent of type order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityId {
    /// `TYPE::<TypeName>`
    Type { type_name: String },
    /// `FIELD::<TypeName>::<FieldName>`, used for fields and input fields.
    Field {
        type_name: String,
        field_name: String,
    },
    /// `ARGUMENT::<TypeName>::<FieldName>::<ArgName>`
    Argument {
        type_name: String,
        field_name: String,
        arg_name: String,
    },
    /// `POSSIBLE_TYPE::<UnionName>::<MemberName>`
    PossibleType {
        type_name: String,
        other_name: String,
    },
    /// `DERIVED_TYPE::<InterfaceName>::<ImplementationName>`
    DerivedType {
        type_name: String,
        other_name: String,
    },
    /// `INTERFACE::<TypeName>::<InterfaceName>`
    Interface {
        type_name: String,
        other_name: String,
    },
}

impl EntityId {
    /// The name of the type the entity belongs to.
    pub fn type_name(&self) -> &str {
        match self {
            EntityId::Type { type_name }
            | EntityId::Field { type_name, .. }
            | EntityId::Argument { type_name, .. }
            | EntityId::PossibleType { type_name, .. }
            | EntityId::DerivedType { type_name, .. }
            | EntityId::Interface { type_name, .. } => type_name,
        }
    }

    fn prefix(&self) -> &'static str {
        match self {
            EntityId::Type { .. } => "TYPE",
            EntityId::Field { .. } => "FIELD",
            EntityId::Argument { .. } => "ARGUMENT",
            EntityId::PossibleType { .. } => "POSSIBLE_TYPE",
            EntityId::DerivedType { .. } => "DERIVED_TYPE",
            EntityId::Interface { .. } => "INTERFACE",
        }
    }
}

impl Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.prefix(), SEPARATOR, self.type_name())?;

        match self {
            EntityId::Type { .. } => Ok(()),
            EntityId::Field { field_name, .. } => write!(f, "{}{}", SEPARATOR, field_name),
            EntityId::Argument {
                field_name,
                arg_name,
                ..
            } => write!(f, "{}{}{}{}", SEPARATOR, field_name, SEPARATOR, arg_name),
            EntityId::PossibleType { other_name, .. }
            | EntityId::DerivedType { other_name, .. }
            | EntityId::Interface { other_name, .. } => {
                write!(f, "{}{}", SEPARATOR, other_name)
            }
        }
    }
}

impl FromStr for EntityId {
    type Err = InvalidIdentifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(SEPARATOR).collect();
        let owned = |index: usize| parts[index].to_string();

        let id = match (parts.first().copied(), parts.len()) {
            (Some("TYPE"), 2) => EntityId::Type {
                type_name: owned(1),
            },
            (Some("FIELD"), 3) => EntityId::Field {
                type_name: owned(1),
                field_name: owned(2),
            },
            (Some("ARGUMENT"), 4) => EntityId::Argument {
                type_name: owned(1),
                field_name: owned(2),
                arg_name: owned(3),
            },
            (Some("POSSIBLE_TYPE"), 3) => EntityId::PossibleType {
                type_name: owned(1),
                other_name: owned(2),
            },
            (Some("DERIVED_TYPE"), 3) => EntityId::DerivedType {
                type_name: owned(1),
                other_name: owned(2),
            },
            (Some("INTERFACE"), 3) => EntityId::Interface {
                type_name: owned(1),
                other_name: owned(2),
            },
            _ => return Err(InvalidIdentifier(s.to_string())),
        };

        if parts[1..].iter().any(|part| part.is_empty()) {
            return Err(InvalidIdentifier(s.to_string()));
        }

        Ok(id)
    }
}

pub fn type_name_to_id(type_name: &str) -> String {
    format!("TYPE{SEPARATOR}{type_name}")
}

pub fn field_id(type_name: &str, field_name: &str) -> String {
    format!("FIELD{SEPARATOR}{type_name}{SEPARATOR}{field_name}")
}

pub fn argument_id(type_name: &str, field_name: &str, arg_name: &str) -> String {
    format!("ARGUMENT{SEPARATOR}{type_name}{SEPARATOR}{field_name}{SEPARATOR}{arg_name}")
}

pub fn possible_type_id(type_name: &str, other_name: &str) -> String {
    format!("POSSIBLE_TYPE{SEPARATOR}{type_name}{SEPARATOR}{other_name}")
}

pub fn derived_type_id(type_name: &str, other_name: &str) -> String {
    format!("DERIVED_TYPE{SEPARATOR}{type_name}{SEPARATOR}{other_name}")
}

pub fn interface_id(type_name: &str, other_name: &str) -> String {
    format!("INTERFACE{SEPARATOR}{type_name}{SEPARATOR}{other_name}")
}

/// Maps any identifier to the identifier of the type it is anchored on,
/// e.g. `FIELD::Query::user` to `TYPE::Query`.
pub fn extract_type_id(id: &str) -> Option<String> {
    id.parse::<EntityId>()
        .ok()
        .map(|entity| type_name_to_id(entity.type_name()))
}
