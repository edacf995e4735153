use crate::ast::Alias;
use crate::ast::Arguments;
use crate::ast::AstNode;
use crate::ast::Directives;
use crate::ast::Name;
use crate::ast::NodeKind;
use crate::ast::TypeAnnotation;
use crate::ast::TypeCondition;
use crate::ast::Value;
use crate::ast::Variable;
use inherent::inherent;

// =========================================================
// Operations
// =========================================================

/// The three operation kinds.
///
/// See
/// [Operations](https://spec.graphql.org/September2025/#sec-Language.Operations)
/// in the spec.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}

/// An operation definition (query, mutation, or subscription).
///
/// See
/// [Operations](https://spec.graphql.org/September2025/#sec-Language.Operations)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition<'src> {
    pub operation: OperationKind,
    /// `None` for anonymous operations (including the shorthand
    /// form where the `query` keyword is omitted).
    pub name: Option<Name<'src>>,
    pub variables_definition: Option<VariablesDefinition<'src>>,
    pub directives: Option<Directives<'src>>,
    pub selection_set: SelectionSet<'src>,
}

// =========================================================
// Variable definitions
// =========================================================

/// The parenthesized variable definition list of an operation.
#[derive(Clone, Debug, PartialEq)]
pub struct VariablesDefinition<'src> {
    pub items: Vec<VariableDefinition<'src>>,
}

/// A single variable definition (e.g. `$id: ID! = "0"`).
///
/// See
/// [Variables](https://spec.graphql.org/September2025/#sec-Language.Variables)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition<'src> {
    pub variable: Variable<'src>,
    pub var_type: TypeAnnotation<'src>,
    pub default_value: Option<Value<'src>>,
    pub directives: Option<Directives<'src>>,
}

// =========================================================
// Selections
// =========================================================

/// A braced set of selections.
///
/// See
/// [Selection Sets](https://spec.graphql.org/September2025/#sec-Selection-Sets)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet<'src> {
    pub selections: Vec<Selection<'src>>,
}

/// A single selection within a [`SelectionSet`].
#[allow(clippy::large_enum_variant)]
#[derive(Clone, Debug, PartialEq)]
pub enum Selection<'src> {
    Field(Field<'src>),
    FragmentSpread(FragmentSpread<'src>),
    InlineFragment(InlineFragment<'src>),
}

/// A field selection, optionally aliased, with arguments,
/// directives, and a nested selection set.
///
/// See
/// [Fields](https://spec.graphql.org/September2025/#sec-Language.Fields)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct Field<'src> {
    pub alias: Option<Alias<'src>>,
    pub name: Name<'src>,
    pub arguments: Option<Arguments<'src>>,
    pub directives: Option<Directives<'src>>,
    pub selection_set: Option<SelectionSet<'src>>,
}

// =========================================================
// Fragments
// =========================================================

/// A named fragment spread (e.g. `...AccountFields`).
///
/// See
/// [Fragments](https://spec.graphql.org/September2025/#sec-Language.Fragments)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread<'src> {
    pub name: Name<'src>,
    pub directives: Option<Directives<'src>>,
}

/// An inline fragment (e.g. `... on User { name }`).
///
/// See
/// [Inline Fragments](https://spec.graphql.org/September2025/#sec-Inline-Fragments)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment<'src> {
    pub type_condition: Option<TypeCondition<'src>>,
    pub directives: Option<Directives<'src>>,
    pub selection_set: SelectionSet<'src>,
}

/// A fragment definition.
///
/// See
/// [Fragments](https://spec.graphql.org/September2025/#sec-Language.Fragments)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition<'src> {
    pub name: Name<'src>,
    pub type_condition: TypeCondition<'src>,
    pub directives: Option<Directives<'src>>,
    pub selection_set: SelectionSet<'src>,
}

// =========================================================
// Kind tags
// =========================================================

#[inherent]
impl AstNode for OperationDefinition<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::OperationDefinition
    }
}

#[inherent]
impl AstNode for VariablesDefinition<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::VariablesDefinition
    }
}

#[inherent]
impl AstNode for VariableDefinition<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::VariableDefinition
    }
}

#[inherent]
impl AstNode for SelectionSet<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::SelectionSet
    }
}

#[inherent]
impl AstNode for Selection<'_> {
    pub fn kind(&self) -> NodeKind {
        match self {
            Selection::Field(s) => s.kind(),
            Selection::FragmentSpread(s) => s.kind(),
            Selection::InlineFragment(s) => s.kind(),
        }
    }
}

#[inherent]
impl AstNode for Field<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::Field
    }
}

#[inherent]
impl AstNode for FragmentSpread<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::FragmentSpread
    }
}

#[inherent]
impl AstNode for InlineFragment<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::InlineFragment
    }
}

#[inherent]
impl AstNode for FragmentDefinition<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::FragmentDefinition
    }
}
