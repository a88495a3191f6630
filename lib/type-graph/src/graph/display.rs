use std::fmt::{Display, Formatter as FmtFormatter, Result as FmtResult};

use indexmap::IndexMap;

use crate::{
    graph::{
        node::{InputValue, TypeEdge, TypeNode, TypeNodeKind},
        TypeGraph, TypeIndex,
    },
    wrappers::{stringify_wrappers, TypeWrapper},
};

const INDENT: &str = "  ";

impl TypeGraph {
    fn fmt_type_ref(
        &self,
        f: &mut FmtFormatter<'_>,
        type_index: TypeIndex,
        wrappers: &[TypeWrapper],
    ) -> FmtResult {
        let (prefix, suffix) = stringify_wrappers(wrappers);
        write!(f, "{}{}{}", prefix, self.node(type_index).name, suffix)
    }

    fn fmt_edge_names(
        &self,
        f: &mut FmtFormatter<'_>,
        edges: &[TypeEdge],
        separator: &str,
    ) -> FmtResult {
        for (i, edge) in edges.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", separator)?;
            }
            write!(f, "{}", self.node(edge.type_index).name)?;
        }
        Ok(())
    }

    fn fmt_input_value(&self, f: &mut FmtFormatter<'_>, input_value: &InputValue) -> FmtResult {
        write!(f, "{}: ", input_value.name)?;
        self.fmt_type_ref(f, input_value.type_index, &input_value.type_wrappers)?;
        if let Some(default_value) = &input_value.default_value {
            write!(f, " = {}", default_value)?;
        }
        Ok(())
    }

    fn fmt_header(&self, f: &mut FmtFormatter<'_>, node: &TypeNode) -> FmtResult {
        write!(f, "{} {}", node.kind(), node.name)?;

        match &node.kind {
            TypeNodeKind::Object { interfaces, .. } if !interfaces.is_empty() => {
                write!(f, " implements ")?;
                self.fmt_edge_names(f, interfaces, " & ")?;
            }
            TypeNodeKind::Interface { derived_types, .. } if !derived_types.is_empty() => {
                write!(f, " implemented by ")?;
                self.fmt_edge_names(f, derived_types, ", ")?;
            }
            TypeNodeKind::Union { possible_types } if !possible_types.is_empty() => {
                write!(f, " = ")?;
                self.fmt_edge_names(f, possible_types, " | ")?;
            }
            _ => {}
        }

        if node.is_hidden_type {
            write!(f, " (hidden)")?;
        }

        writeln!(f)
    }

    fn fmt_input_values(
        &self,
        f: &mut FmtFormatter<'_>,
        input_values: &IndexMap<String, InputValue>,
    ) -> FmtResult {
        for input_value in input_values.values() {
            write!(f, "{}", INDENT)?;
            self.fmt_input_value(f, input_value)?;
            writeln!(f)?;
        }
        Ok(())
    }

    fn fmt_node(&self, f: &mut FmtFormatter<'_>, node: &TypeNode) -> FmtResult {
        self.fmt_header(f, node)?;

        match &node.kind {
            TypeNodeKind::Object { fields, .. } | TypeNodeKind::Interface { fields, .. } => {
                for field in fields.values() {
                    write!(f, "{}{}", INDENT, field.name)?;
                    if !field.args.is_empty() {
                        write!(f, "(")?;
                        for (i, arg) in field.args.values().enumerate() {
                            if i > 0 {
                                write!(f, ", ")?;
                            }
                            self.fmt_input_value(f, arg)?;
                        }
                        write!(f, ")")?;
                    }
                    write!(f, ": ")?;
                    self.fmt_type_ref(f, field.type_index, &field.type_wrappers)?;
                    match (field.is_deprecated, &field.deprecation_reason) {
                        (true, Some(reason)) => write!(f, " (deprecated: {})", reason)?,
                        (true, None) => write!(f, " (deprecated)")?,
                        _ => {}
                    }
                    writeln!(f)?;
                }
            }
            TypeNodeKind::Enum { enum_values } => {
                for value in enum_values {
                    write!(f, "{}{}", INDENT, value.name)?;
                    if value.is_deprecated {
                        write!(f, " (deprecated)")?;
                    }
                    writeln!(f)?;
                }
            }
            TypeNodeKind::InputObject { input_fields } => {
                self.fmt_input_values(f, input_fields)?;
            }
            TypeNodeKind::Scalar | TypeNodeKind::Union { .. } => {}
        }

        Ok(())
    }
}

/// A compact listing of every type in display order, one header line per type
/// followed by its indented members.
impl Display for TypeGraph {
    fn fmt(&self, f: &mut FmtFormatter<'_>) -> FmtResult {
        for (_, node) in self.types() {
            self.fmt_node(f, node)?;
        }
        Ok(())
    }
}
