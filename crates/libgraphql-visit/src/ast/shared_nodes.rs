use std::borrow::Cow;

use crate::ast::AstNode;
use crate::ast::NamedType;
use crate::ast::NodeKind;
use crate::ast::Value;
use inherent::inherent;

// =========================================================
// Name
// =========================================================

/// A GraphQL [name](https://spec.graphql.org/September2025/#sec-Names)
/// (identifier).
///
/// Names are used for type names, field names, argument names,
/// directive names, enum values, and more. The `value` field
/// borrows from the source text when possible (`Cow::Borrowed`)
/// or owns the string when the source is not available
/// (`Cow::Owned`).
#[derive(Clone, Debug, PartialEq)]
pub struct Name<'src> {
    pub value: Cow<'src, str>,
}

// =========================================================
// Alias
// =========================================================

/// A field alias (the `user:` in `user: account { ... }`).
///
/// See
/// [Field Alias](https://spec.graphql.org/September2025/#sec-Field-Alias)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct Alias<'src> {
    pub name: Name<'src>,
}

// =========================================================
// Comment and description
// =========================================================

/// A single `# ...` comment.
///
/// Comment *attachment* is a parser concern and no default
/// traversal slot produces one, but `Comment` is a first-class
/// node kind: a tool that keeps comments in a side table can
/// still dispatch them through
/// [`visit`](crate::visit).
#[derive(Clone, Debug, PartialEq)]
pub struct Comment<'src> {
    pub text: Cow<'src, str>,
}

/// A description string attached to a type-system definition.
///
/// See
/// [Descriptions](https://spec.graphql.org/September2025/#sec-Descriptions)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct Description<'src> {
    /// The processed string value after escape-sequence
    /// resolution and block-string indentation stripping.
    pub value: Cow<'src, str>,
}

// =========================================================
// Arguments
// =========================================================

/// A single argument in a field or directive application.
///
/// See
/// [Arguments](https://spec.graphql.org/September2025/#sec-Language.Arguments)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument<'src> {
    pub name: Name<'src>,
    pub value: Value<'src>,
}

/// The parenthesized argument list of a field or directive
/// application.
///
/// An absent `Arguments` (`None` on the parent node) is distinct
/// from a present one with an empty `items` list.
#[derive(Clone, Debug, PartialEq)]
pub struct Arguments<'src> {
    pub items: Vec<Argument<'src>>,
}

// =========================================================
// Directive applications
// =========================================================

/// A directive applied to a definition, field, or fragment
/// (e.g. `@deprecated(reason: "Use newField")`).
///
/// See
/// [Directives](https://spec.graphql.org/September2025/#sec-Language.Directives)
/// in the spec. Note: this represents an *applied* directive,
/// not a directive *definition*.
#[derive(Clone, Debug, PartialEq)]
pub struct Directive<'src> {
    pub name: Name<'src>,
    pub arguments: Option<Arguments<'src>>,
}

/// The ordered list of directives applied to one node.
#[derive(Clone, Debug, PartialEq)]
pub struct Directives<'src> {
    pub items: Vec<Directive<'src>>,
}

// =========================================================
// Type condition
// =========================================================

/// A type condition (e.g. `on User`) used in fragment
/// definitions and inline fragments.
///
/// See
/// [Type Conditions](https://spec.graphql.org/September2025/#sec-Type-Conditions)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeCondition<'src> {
    pub named_type: NamedType<'src>,
}

// =========================================================
// Kind tags
// =========================================================

#[inherent]
impl AstNode for Name<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::Name
    }
}

#[inherent]
impl AstNode for Alias<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::Alias
    }
}

#[inherent]
impl AstNode for Comment<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::Comment
    }
}

#[inherent]
impl AstNode for Description<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::Description
    }
}

#[inherent]
impl AstNode for Argument<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::Argument
    }
}

#[inherent]
impl AstNode for Arguments<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::Arguments
    }
}

#[inherent]
impl AstNode for Directive<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::Directive
    }
}

#[inherent]
impl AstNode for Directives<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::Directives
    }
}

#[inherent]
impl AstNode for TypeCondition<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::TypeCondition
    }
}
