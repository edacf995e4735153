use crate::ast::AstNode;
use crate::ast::Name;
use crate::ast::NodeKind;
use inherent::inherent;

// =========================================================
// TypeAnnotation enum
// =========================================================

/// A type reference in any type position (variable definitions,
/// field definitions, input values).
///
/// See
/// [Type References](https://spec.graphql.org/September2025/#sec-Type-References)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeAnnotation<'src> {
    List(ListType<'src>),
    Named(NamedType<'src>),
    NonNull(NonNullType<'src>),
}

// =========================================================
// Type reference nodes
// =========================================================

/// A named type reference (e.g. `String`, `User`).
#[derive(Clone, Debug, PartialEq)]
pub struct NamedType<'src> {
    pub name: Name<'src>,
}

/// A list type reference (e.g. `[String]`).
#[derive(Clone, Debug, PartialEq)]
pub struct ListType<'src> {
    pub element_type: Box<TypeAnnotation<'src>>,
}

/// A non-null type reference (e.g. `String!`, `[String]!`).
///
/// The wrapped type is always a [`NamedType`] or [`ListType`];
/// the parser never produces a non-null wrapping another
/// non-null.
#[derive(Clone, Debug, PartialEq)]
pub struct NonNullType<'src> {
    pub wrapped_type: Box<TypeAnnotation<'src>>,
}

// =========================================================
// Kind tags
// =========================================================

#[inherent]
impl AstNode for TypeAnnotation<'_> {
    pub fn kind(&self) -> NodeKind {
        match self {
            TypeAnnotation::List(t) => t.kind(),
            TypeAnnotation::Named(t) => t.kind(),
            TypeAnnotation::NonNull(t) => t.kind(),
        }
    }
}

#[inherent]
impl AstNode for NamedType<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::NamedType
    }
}

#[inherent]
impl AstNode for ListType<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::ListType
    }
}

#[inherent]
impl AstNode for NonNullType<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::NonNullType
    }
}
