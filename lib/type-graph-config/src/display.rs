use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Options that shape the type graph built from an introspection result.
#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DisplayOptions {
    /// Order types, fields, arguments and enum values by name.
    /// Identifiers are derived from names, so this never changes them.
    ///
    /// Can also be set via the `SORT_BY_ALPHABET` environment variable.
    #[serde(default)]
    pub sort_by_alphabet: bool,

    /// Remove fields marked with `@deprecated`.
    ///
    /// Can also be set via the `SKIP_DEPRECATED` environment variable.
    #[serde(default)]
    pub skip_deprecated: bool,

    /// Keep types matched by `hide_rules` in the graph as they are.
    ///
    /// Can also be set via the `SHOW_HIDDEN` environment variable.
    #[serde(default)]
    pub show_hidden: bool,

    /// Rules marking types as hidden, evaluated in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hide_rules: Vec<HideRule>,

    /// The type the graph is explored from. Defaults to the query root type.
    ///
    /// Can also be set via the `ROOT_TYPE` environment variable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_type: Option<String>,
}

impl DisplayOptions {
    /// Whether the hidden-type pass has anything to do.
    pub fn hides_types(&self) -> bool {
        !self.show_hidden && !self.hide_rules.is_empty()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct HideRule {
    /// A regular expression searched for in type names (unanchored).
    pub pattern: String,

    /// A field of the hidden type that replaces it wherever it is used as a field type.
    #[serde(
        default,
        alias = "proxyField",
        alias = "replaceField",
        skip_serializing_if = "Option::is_none"
    )]
    pub proxy_field: Option<String>,
}

impl HideRule {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            proxy_field: None,
        }
    }

    pub fn with_proxy_field(mut self, proxy_field: impl Into<String>) -> Self {
        self.proxy_field = Some(proxy_field.into());
        self
    }
}
