mod display;
mod node;
mod reachable;
mod serialize;

use indexmap::IndexMap;

use crate::ids::{type_name_to_id, EntityId};

pub use node::{
    Field, HiddenOptions, InputValue, TypeEdge, TypeIndex, TypeKind, TypeNode, TypeNodeKind,
};
pub use reachable::ReachableTypes;

/// The resolved schema: an arena of type nodes, where every type reference is a
/// [`TypeIndex`] into the arena, plus an identifier-keyed index over it.
///
/// Type references may form cycles (a type reaching itself through its fields),
/// so any walk over the graph has to track what it already visited.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeGraph {
    nodes: Vec<TypeNode>,
    types: IndexMap<String, TypeIndex>,
    query_type: Option<TypeIndex>,
    mutation_type: Option<TypeIndex>,
    subscription_type: Option<TypeIndex>,
}

/// Anything an identifier can point at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Entity<'a> {
    Type(&'a TypeNode),
    Field {
        owner: &'a TypeNode,
        field: &'a Field,
    },
    InputField {
        owner: &'a TypeNode,
        input_field: &'a InputValue,
    },
    Argument {
        owner: &'a TypeNode,
        field: &'a Field,
        argument: &'a InputValue,
    },
    Edge {
        owner: &'a TypeNode,
        edge: &'a TypeEdge,
    },
}

impl TypeGraph {
    pub(crate) fn new(
        nodes: Vec<TypeNode>,
        query_type: Option<TypeIndex>,
        mutation_type: Option<TypeIndex>,
        subscription_type: Option<TypeIndex>,
    ) -> Self {
        let types = nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (node.id.clone(), TypeIndex(index)))
            .collect();

        Self {
            nodes,
            types,
            query_type,
            mutation_type,
            subscription_type,
        }
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Resolves a reference held by a field, argument or edge of this graph.
    pub fn node(&self, index: TypeIndex) -> &TypeNode {
        &self.nodes[index.0]
    }

    pub(crate) fn node_mut(&mut self, index: TypeIndex) -> &mut TypeNode {
        &mut self.nodes[index.0]
    }

    pub(crate) fn nodes_mut(&mut self) -> impl Iterator<Item = &mut TypeNode> {
        self.nodes.iter_mut()
    }

    /// Types in display order, keyed by identifier.
    pub fn types(&self) -> impl Iterator<Item = (&str, &TypeNode)> {
        self.types
            .iter()
            .map(|(id, index)| (id.as_str(), &self.nodes[index.0]))
    }

    pub(crate) fn indices(&self) -> impl Iterator<Item = TypeIndex> + '_ {
        self.types.values().copied()
    }

    pub fn type_ids(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    pub fn index_of(&self, id: &str) -> Option<TypeIndex> {
        self.types.get(id).copied()
    }

    pub fn type_by_id(&self, id: &str) -> Option<&TypeNode> {
        self.index_of(id).map(|index| self.node(index))
    }

    pub fn type_by_name(&self, name: &str) -> Option<&TypeNode> {
        self.type_by_id(&type_name_to_id(name))
    }

    pub fn query_type(&self) -> Option<&TypeNode> {
        self.query_type.map(|index| self.node(index))
    }

    pub fn mutation_type(&self) -> Option<&TypeNode> {
        self.mutation_type.map(|index| self.node(index))
    }

    pub fn subscription_type(&self) -> Option<&TypeNode> {
        self.subscription_type.map(|index| self.node(index))
    }

    /// The type a graph is explored from when no other root is chosen.
    pub fn default_root_type(&self) -> Option<&str> {
        self.query_type().map(|node| node.name.as_str())
    }

    /// Finds the entity behind any identifier of the graph.
    pub fn lookup(&self, id: &str) -> Option<Entity<'_>> {
        let entity_id = id.parse::<EntityId>().ok()?;
        let owner = self.type_by_name(entity_id.type_name())?;

        match &entity_id {
            EntityId::Type { .. } => Some(Entity::Type(owner)),
            EntityId::Field { field_name, .. } => {
                if let Some(field) = owner.field(field_name) {
                    return Some(Entity::Field { owner, field });
                }
                owner
                    .input_fields()
                    .and_then(|input_fields| input_fields.get(field_name))
                    .map(|input_field| Entity::InputField { owner, input_field })
            }
            EntityId::Argument {
                field_name,
                arg_name,
                ..
            } => {
                let field = owner.field(field_name)?;
                field.args.get(arg_name).map(|argument| Entity::Argument {
                    owner,
                    field,
                    argument,
                })
            }
            EntityId::PossibleType { .. }
            | EntityId::DerivedType { .. }
            | EntityId::Interface { .. } => owner
                .edges()
                .iter()
                .find(|edge| edge.id == id)
                .map(|edge| Entity::Edge { owner, edge }),
        }
    }
}
