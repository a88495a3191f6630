use std::fmt::Display;

use graphql_introspection::{IntrospectionTypeRef, TypeRefLayer};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeWrapper {
    NonNull,
    List,
}

/// A bare type name plus the wrappers applied to it, outermost first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct WrappedTypeRef {
    #[serde(rename = "type")]
    pub name: String,
    #[serde(rename = "typeWrappers")]
    pub wrappers: Vec<TypeWrapper>,
}

impl WrappedTypeRef {
    /// Returns `None` when a `LIST`/`NON_NULL` wrapper has no inner type.
    pub fn from_introspection(type_ref: &impl IntrospectionTypeRef) -> Option<Self> {
        let mut wrappers = Vec::new();
        let name = unwrap_type(type_ref, &mut wrappers)?;

        Some(Self {
            name: name.to_string(),
            wrappers,
        })
    }
}

impl Display for WrappedTypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (prefix, suffix) = stringify_wrappers(&self.wrappers);
        write!(f, "{}{}{}", prefix, self.name, suffix)
    }
}

/// Pushes every wrapper kind onto `wrappers` (outermost first) until a named type is reached,
/// and returns that name.
/// Works on both field (output) and argument/input-field (input) references.
pub fn unwrap_type<'a, T: IntrospectionTypeRef>(
    type_ref: &'a T,
    wrappers: &mut Vec<TypeWrapper>,
) -> Option<&'a str> {
    let mut current = type_ref;
    loop {
        match current.layer() {
            TypeRefLayer::NonNull(of_type) => {
                wrappers.push(TypeWrapper::NonNull);
                current = of_type?;
            }
            TypeRefLayer::List(of_type) => {
                wrappers.push(TypeWrapper::List);
                current = of_type?;
            }
            TypeRefLayer::Named(name) => return Some(name),
        }
    }
}

/// Renders the wrappers as the text surrounding a type name in GraphQL notation:
/// `[LIST, NON_NULL]` becomes `("[", "!]")`.
pub fn stringify_wrappers(wrappers: &[TypeWrapper]) -> (String, String) {
    let mut prefix = String::new();
    let mut suffix = String::new();

    for wrapper in wrappers.iter().rev() {
        match wrapper {
            TypeWrapper::NonNull => suffix.push('!'),
            TypeWrapper::List => {
                prefix.push('[');
                suffix.push(']');
            }
        }
    }

    (prefix, suffix)
}
