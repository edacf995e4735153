use crate::ast::NodeKind;

/// Trait implemented by all AST node types. Exposes the node's
/// kind tag.
///
/// All AST node types implement this trait via
/// `#[inherent] impl AstNode`, giving each node both an inherent
/// `kind()` method (no trait import needed) and a trait bound for
/// generic utilities (diagnostics formatters, visitors built over
/// arbitrary node sets, etc.).
///
/// The kind is fixed at construction: a node's tag never changes,
/// and the set of tags is closed (see [`NodeKind`]).
pub trait AstNode {
    /// This node's kind tag.
    fn kind(&self) -> NodeKind;
}
