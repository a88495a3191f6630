use regex_automata::meta::Regex;
use tracing::{debug, instrument};
use type_graph_config::HideRule;

use crate::{
    error::ConfigurationError,
    graph::{HiddenOptions, TypeGraph, TypeIndex},
    wrappers::TypeWrapper,
};

struct CompiledRule<'a> {
    rule: &'a HideRule,
    regex: Regex,
}

fn compile_rules(hide_rules: &[HideRule]) -> Result<Vec<CompiledRule<'_>>, ConfigurationError> {
    hide_rules
        .iter()
        .map(|rule| {
            Regex::new(&rule.pattern)
                .map(|regex| CompiledRule { rule, regex })
                .map_err(|source| ConfigurationError::InvalidPattern {
                    pattern: rule.pattern.clone(),
                    source,
                })
        })
        .collect()
}

struct Splice {
    owner: TypeIndex,
    field_name: String,
    type_index: TypeIndex,
    type_wrappers: Vec<TypeWrapper>,
}

/// Marks every type whose name matches a hide rule as hidden, then makes fields of
/// visible types that point at a hidden type with a proxy field point at the proxy
/// field's type instead.
///
/// Rules are unanchored searches over the type name. When several rules match the
/// same type, the last one carrying a proxy field decides it. Fields of hidden
/// types are never rewritten, and a proxy field's type is taken as it was before
/// any rewriting.
#[instrument(level = "debug", skip_all, fields(rules = hide_rules.len()))]
pub fn resolve_hidden_types(
    graph: &TypeGraph,
    hide_rules: &[HideRule],
) -> Result<TypeGraph, ConfigurationError> {
    let rules = compile_rules(hide_rules)?;
    let mut resolved = graph.clone();
    // Pattern of the rule that assigned each hidden type its proxy field.
    let mut proxy_patterns: Vec<Option<&str>> = vec![None; graph.len()];

    for (index, node) in resolved.nodes_mut().enumerate() {
        for compiled in &rules {
            if !compiled.regex.is_match(node.name.as_str()) {
                continue;
            }
            node.is_hidden_type = true;
            if let Some(proxy_field) = &compiled.rule.proxy_field {
                node.hidden_options = Some(HiddenOptions {
                    replace_field: proxy_field.clone(),
                });
                proxy_patterns[index] = Some(compiled.rule.pattern.as_str());
            }
        }
    }

    let mut splices = vec![];
    for owner_index in resolved.indices() {
        let owner = resolved.node(owner_index);
        if owner.is_hidden_type {
            continue;
        }
        let Some(fields) = owner.fields() else {
            continue;
        };

        for field in fields.values() {
            let target = resolved.node(field.type_index);
            let (true, Some(hidden_options)) = (target.is_hidden_type, &target.hidden_options)
            else {
                continue;
            };

            let proxy = target.field(&hidden_options.replace_field).ok_or_else(|| {
                ConfigurationError::MissingProxyField {
                    pattern: proxy_patterns[field.type_index.index()]
                        .unwrap_or_default()
                        .to_string(),
                    type_name: target.name.clone(),
                    proxy_field: hidden_options.replace_field.clone(),
                }
            })?;

            splices.push(Splice {
                owner: owner_index,
                field_name: field.name.clone(),
                type_index: proxy.type_index,
                type_wrappers: proxy.type_wrappers.clone(),
            });
        }
    }

    let hidden = resolved
        .types()
        .filter(|(_, node)| node.is_hidden_type)
        .count();
    debug!(hidden, spliced = splices.len(), "hidden types resolved");

    for splice in splices {
        let field = resolved
            .node_mut(splice.owner)
            .fields_mut()
            .and_then(|fields| fields.get_mut(&splice.field_name));
        if let Some(field) = field {
            field.type_index = splice.type_index;
            field.type_wrappers = splice.type_wrappers;
        }
    }

    Ok(resolved)
}
