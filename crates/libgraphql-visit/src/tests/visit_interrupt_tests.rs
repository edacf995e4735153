//! Tests for early-stop behavior: handler failure propagation
//! with failure-site stamping, and cooperative cancellation.

use std::convert::Infallible;

use crate::ast::Argument;
use crate::ast::Directive;
use crate::ast::NodeKind;
use crate::ast::OperationDefinition;
use crate::tests::fixtures;
use crate::traverse;
use crate::visit;
use crate::GraphQLVisitor;
use crate::VisitInterrupt;
use crate::VisitResult;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("unsupported name: {0}")]
struct UnsupportedName(String);

/// Records argument names and fails on the one named "bad".
struct ArgumentRejector;

impl<'doc> GraphQLVisitor<'doc> for ArgumentRejector {
    type Context = Vec<String>;
    type Error = UnsupportedName;

    async fn visit_argument(
        &mut self,
        argument: &'doc Argument<'doc>,
        context: &mut Vec<String>,
    ) -> VisitResult<UnsupportedName> {
        context.push(argument.name.value.to_string());
        if argument.name.value == "bad" {
            return Err(VisitInterrupt::failed(UnsupportedName(
                argument.name.value.to_string(),
            )));
        }
        traverse::argument(argument, self, context).await
    }
}

/// Fails on the directive named "skip" through `?`, relying on
/// the `From<E>` conversion into `VisitInterrupt<E>`.
struct DirectiveRejector;

impl DirectiveRejector {
    fn check(directive_name: &str) -> Result<(), UnsupportedName> {
        if directive_name == "skip" {
            Err(UnsupportedName(directive_name.to_string()))
        } else {
            Ok(())
        }
    }
}

impl<'doc> GraphQLVisitor<'doc> for DirectiveRejector {
    type Context = ();
    type Error = UnsupportedName;

    async fn visit_directive(
        &mut self,
        directive: &'doc Directive<'doc>,
        context: &mut (),
    ) -> VisitResult<UnsupportedName> {
        Self::check(&directive.name.value)?;
        traverse::directive(directive, self, context).await
    }
}

/// Counts operation definitions and cancels while visiting the
/// third one.
struct CancelAtThirdOperation;

impl<'doc> GraphQLVisitor<'doc> for CancelAtThirdOperation {
    type Context = usize;
    type Error = Infallible;

    async fn visit_operation_definition(
        &mut self,
        operation_definition: &'doc OperationDefinition<'doc>,
        context: &mut usize,
    ) -> VisitResult<Infallible> {
        *context += 1;
        if *context == 3 {
            return Err(VisitInterrupt::Cancelled);
        }
        traverse::operation_definition(operation_definition, self, context)
            .await
    }
}

// =========================================================
// Handler failure
// =========================================================

/// Verifies that a failing Argument handler surfaces at the
/// top-level `visit` call with the Argument kind stamped as the
/// failure site, and that no sibling argument after the failing
/// one is visited.
#[tokio::test]
async fn handler_failure_stops_traversal_and_stamps_site() {
    let document = fixtures::three_argument_field();

    let mut seen = Vec::new();
    let result =
        visit((&document).into(), &mut ArgumentRejector, &mut seen).await;

    let interrupt = result.unwrap_err();
    assert_eq!(interrupt.failure_site(), Some(NodeKind::Argument));
    assert!(!interrupt.is_cancelled());
    assert_eq!(
        interrupt,
        VisitInterrupt::Failed {
            node_kind: Some(NodeKind::Argument),
            source: UnsupportedName("bad".to_string()),
        },
    );
    // "after" was ordered after the failure site and never ran.
    assert_eq!(seen, ["ok", "bad"]);
}

/// Verifies that a handler can fail with `?` on its own domain
/// `Result`, and that the innermost dispatched kind — the
/// Directive, not an ancestor — is stamped.
#[tokio::test]
async fn question_mark_failures_stamp_the_innermost_kind() {
    let document = fixtures::fragment_query();

    let result =
        visit((&document).into(), &mut DirectiveRejector, &mut ()).await;

    let interrupt = result.unwrap_err();
    assert_eq!(interrupt.failure_site(), Some(NodeKind::Directive));
}

/// Verifies the failure Display names the stamped kind.
#[tokio::test]
async fn failure_display_names_the_stamped_kind() {
    let document = fixtures::three_argument_field();

    let interrupt =
        visit((&document).into(), &mut ArgumentRejector, &mut Vec::new())
            .await
            .unwrap_err();

    assert_eq!(
        interrupt.to_string(),
        "GraphQL AST visitor failed while visiting `Argument` node",
    );
}

// =========================================================
// Cancellation
// =========================================================

/// Verifies that cancelling while visiting the 3rd of 10
/// top-level definitions results in exactly 3 operation
/// definition visits, never 10, and that the interrupt reads as
/// "stopped", not "failed".
#[tokio::test]
async fn cancellation_short_circuits_remaining_definitions() {
    let document = fixtures::many_operations(10);

    let mut visited = 0usize;
    let result = visit(
        (&document).into(),
        &mut CancelAtThirdOperation,
        &mut visited,
    )
    .await;

    let interrupt = result.unwrap_err();
    assert!(interrupt.is_cancelled());
    assert_eq!(interrupt.failure_site(), None);
    assert_eq!(visited, 3);
}

/// Verifies the cancellation Display.
#[tokio::test]
async fn cancellation_display_reads_as_stopped() {
    let document = fixtures::many_operations(3);

    let interrupt = visit(
        (&document).into(),
        &mut CancelAtThirdOperation,
        &mut 0usize,
    )
    .await
    .unwrap_err();

    assert_eq!(
        interrupt.to_string(),
        "GraphQL AST traversal was cancelled by the visitor",
    );
}

// =========================================================
// Interrupt value behavior
// =========================================================

/// Verifies that the `From<E>` conversion produces an unstamped
/// failure: the engine, not the handler, supplies the node kind.
#[test]
fn from_conversion_is_unstamped() {
    let interrupt: VisitInterrupt<UnsupportedName> =
        UnsupportedName("x".to_string()).into();

    assert_eq!(interrupt.failure_site(), None);
    assert!(!interrupt.is_cancelled());
    assert_eq!(
        interrupt,
        VisitInterrupt::failed(UnsupportedName("x".to_string())),
    );
}
