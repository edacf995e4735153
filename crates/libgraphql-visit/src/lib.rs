//! An async-capable, document-order traversal engine for GraphQL
//! ASTs covering schema documents, executable documents, and
//! mixed documents.
//!
//! This crate is a library-level traversal primitive: given a
//! fully constructed, immutable AST (produced by an external
//! parser), it visits every node exactly once, in source order,
//! dispatching each node to the matching handler of a
//! caller-supplied [`GraphQLVisitor`] while threading a
//! caller-owned context value through the traversal. It performs
//! no parsing, no analysis, and no AST mutation itself — those
//! belong to the tools built on top of it (printers, linters,
//! validators).
//!
//! The three moving parts:
//!
//! - [`visit`] — the dispatch engine: one exhaustive jump from a
//!   node's kind tag to the visitor's handler for that kind.
//! - [`GraphQLVisitor`] — one suspension-capable handler per node
//!   kind, each defaulting to "recurse into my children in
//!   grammar order". Partial visitors override only the kinds
//!   they care about.
//! - [`traverse`] — the per-kind default child traversal as free
//!   functions, callable from overriding handlers as a composable
//!   step (or skipped entirely to prune a subtree).
//!
//! Handlers are `async` and may suspend pending external work;
//! the engine awaits each handler before the next sibling's
//! visit begins, so visitation order stays deterministic even
//! with asynchronous handlers. Traversal stops at the first
//! handler failure or cooperative cancellation; see
//! [`VisitInterrupt`].
//!
//! # Example
//!
//! Counting the fields of a document with a partial visitor:
//!
//! ```
//! use libgraphql_visit::ast;
//! use libgraphql_visit::traverse;
//! use libgraphql_visit::visit;
//! use libgraphql_visit::GraphQLVisitor;
//! use libgraphql_visit::VisitResult;
//!
//! struct FieldCounter;
//!
//! impl<'doc> GraphQLVisitor<'doc> for FieldCounter {
//!     type Context = usize;
//!     type Error = std::convert::Infallible;
//!
//!     async fn visit_field(
//!         &mut self,
//!         field: &'doc ast::Field<'doc>,
//!         context: &mut usize,
//!     ) -> VisitResult<Self::Error> {
//!         *context += 1;
//!         traverse::field(field, self, context).await
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! // `{ hero }` — ASTs normally come from a parser; built by
//! // hand here.
//! let document = ast::Document {
//!     definitions: vec![ast::Definition::OperationDefinition(
//!         ast::OperationDefinition {
//!             operation: ast::OperationKind::Query,
//!             name: None,
//!             variables_definition: None,
//!             directives: None,
//!             selection_set: ast::SelectionSet {
//!                 selections: vec![ast::Selection::Field(ast::Field {
//!                     alias: None,
//!                     name: ast::Name {
//!                         value: "hero".into(),
//!                     },
//!                     arguments: None,
//!                     directives: None,
//!                     selection_set: None,
//!                 })],
//!             },
//!         },
//!     )],
//! };
//!
//! let mut field_count = 0usize;
//! visit((&document).into(), &mut FieldCounter, &mut field_count)
//!     .await
//!     .unwrap();
//! assert_eq!(field_count, 1);
//! # }
//! ```

pub mod ast;
mod graphql_visitor;
pub mod traverse;
mod visit;
mod visit_interrupt;

pub use graphql_visitor::GraphQLVisitor;
pub use visit::visit;
pub use visit::VisitFuture;
pub use visit_interrupt::VisitInterrupt;
pub use visit_interrupt::VisitResult;

#[cfg(test)]
mod tests;
