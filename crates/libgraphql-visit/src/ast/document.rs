use crate::ast::AstNode;
use crate::ast::DirectiveDefinition;
use crate::ast::FragmentDefinition;
use crate::ast::NodeKind;
use crate::ast::OperationDefinition;
use crate::ast::SchemaDefinition;
use crate::ast::TypeDefinition;
use crate::ast::TypeExtension;
use inherent::inherent;

// =========================================================
// Document
// =========================================================

/// Root AST node for any GraphQL document.
///
/// A document contains a list of [`Definition`]s which may be
/// type-system definitions, type-system extensions, or
/// executable definitions (operations and fragments). The
/// [`Document`](https://spec.graphql.org/September2025/#sec-Document)
/// grammar production allows both to coexist, and a single
/// unified `Document` type serves every downstream tool
/// (formatters, linters, execution services) without rejecting
/// any valid syntax at the structural level. Validation of which
/// definition kinds are permitted in a given context is left to
/// downstream consumers; the convenience methods
/// [`schema_definitions()`](Document::schema_definitions) and
/// [`executable_definitions()`](Document::executable_definitions)
/// provide easy filtering when needed.
#[derive(Clone, Debug, PartialEq)]
pub struct Document<'src> {
    pub definitions: Vec<Definition<'src>>,
}

impl<'src> Document<'src> {
    /// Iterate over only the type-system definitions and
    /// extensions in this document.
    pub fn schema_definitions(
        &self,
    ) -> impl Iterator<Item = &Definition<'src>> {
        self.definitions.iter().filter(|d| {
            matches!(
                d,
                Definition::DirectiveDefinition(_)
                    | Definition::SchemaDefinition(_)
                    | Definition::TypeDefinition(_)
                    | Definition::TypeExtension(_)
            )
        })
    }

    /// Iterate over only the executable definitions (operations
    /// and fragments) in this document.
    pub fn executable_definitions(
        &self,
    ) -> impl Iterator<Item = &Definition<'src>> {
        self.definitions.iter().filter(|d| {
            matches!(
                d,
                Definition::FragmentDefinition(_)
                    | Definition::OperationDefinition(_)
            )
        })
    }
}

// =========================================================
// Definition
// =========================================================

/// A top-level definition in a GraphQL document.
///
/// Covers both type-system definitions (schema, types,
/// directives, extensions) and executable definitions
/// (operations, fragments).
#[allow(clippy::large_enum_variant)]
#[derive(Clone, Debug, PartialEq)]
pub enum Definition<'src> {
    DirectiveDefinition(DirectiveDefinition<'src>),
    FragmentDefinition(FragmentDefinition<'src>),
    OperationDefinition(OperationDefinition<'src>),
    SchemaDefinition(SchemaDefinition<'src>),
    TypeDefinition(TypeDefinition<'src>),
    TypeExtension(TypeExtension<'src>),
}

// =========================================================
// Kind tags
// =========================================================

#[inherent]
impl AstNode for Document<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::Document
    }
}

#[inherent]
impl AstNode for Definition<'_> {
    pub fn kind(&self) -> NodeKind {
        match self {
            Definition::DirectiveDefinition(d) => d.kind(),
            Definition::FragmentDefinition(d) => d.kind(),
            Definition::OperationDefinition(d) => d.kind(),
            Definition::SchemaDefinition(d) => d.kind(),
            Definition::TypeDefinition(d) => d.kind(),
            Definition::TypeExtension(d) => d.kind(),
        }
    }
}
