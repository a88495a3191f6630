use std::collections::{HashSet, VecDeque};

use serde::Serialize;
use tracing::debug;

use crate::{
    graph::{TypeGraph, TypeIndex, TypeNodeKind},
    ids::type_name_to_id,
};

/// Types that can be reached from a root type by following output references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReachableTypes {
    pub root_id: String,
    /// Identifiers in breadth-first discovery order, the root first.
    pub types: Vec<String>,
}

impl ReachableTypes {
    pub fn contains(&self, id: &str) -> bool {
        self.types.iter().any(|type_id| type_id == id)
    }
}

impl TypeGraph {
    /// Walks field types, implementations and union members starting at `root_type`
    /// (the query type when `None`). Leaf types, input objects and hidden types are
    /// never entered.
    ///
    /// Returns `None` when the root does not exist in the graph.
    pub fn reachable_types(&self, root_type: Option<&str>) -> Option<ReachableTypes> {
        let root_name = root_type.or_else(|| self.default_root_type())?;
        let root_id = type_name_to_id(root_name);
        let root_index = self.index_of(&root_id)?;

        let mut visited: HashSet<TypeIndex> = HashSet::from([root_index]);
        let mut queue: VecDeque<TypeIndex> = VecDeque::from([root_index]);
        let mut types = vec![];

        while let Some(current) = queue.pop_front() {
            let node = self.node(current);
            types.push(node.id.clone());

            let targets: Vec<TypeIndex> = match &node.kind {
                TypeNodeKind::Object { fields, .. } => {
                    fields.values().map(|field| field.type_index).collect()
                }
                TypeNodeKind::Interface {
                    fields,
                    derived_types,
                } => fields
                    .values()
                    .map(|field| field.type_index)
                    .chain(derived_types.iter().map(|edge| edge.type_index))
                    .collect(),
                TypeNodeKind::Union { possible_types } => {
                    possible_types.iter().map(|edge| edge.type_index).collect()
                }
                _ => continue,
            };

            for target in targets {
                if !visited.insert(target) {
                    continue;
                }
                let target_node = self.node(target);
                if target_node.is_scalar_type()
                    || target_node.is_input_object_type()
                    || target_node.is_hidden_type
                {
                    continue;
                }
                queue.push_back(target);
            }
        }

        debug!(root = %root_id, reachable = types.len(), "reachable types collected");

        Some(ReachableTypes { root_id, types })
    }
}
