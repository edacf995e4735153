//! Tests for handler-controlled recursion: pruning subtrees,
//! wrapping pre/post logic around default traversal, and
//! skipping absent optional slots.

use std::convert::Infallible;

use crate::ast::Field;
use crate::ast::Name;
use crate::ast::NodeKind;
use crate::ast::SelectionSet;
use crate::tests::fixtures;
use crate::tests::recording::record;
use crate::traverse;
use crate::visit;
use crate::GraphQLVisitor;
use crate::VisitResult;

/// Counts field visits, but returns from every selection set
/// without recursing, pruning everything beneath it.
struct SelectionSetPruner;

impl<'doc> GraphQLVisitor<'doc> for SelectionSetPruner {
    type Context = usize;
    type Error = Infallible;

    async fn visit_field(
        &mut self,
        field: &'doc Field<'doc>,
        context: &mut usize,
    ) -> VisitResult<Infallible> {
        *context += 1;
        traverse::field(field, self, context).await
    }

    async fn visit_selection_set(
        &mut self,
        _selection_set: &'doc SelectionSet<'doc>,
        _context: &mut usize,
    ) -> VisitResult<Infallible> {
        Ok(())
    }
}

/// Counts field visits and never recurses past a field,
/// pruning at the field level instead of the selection set.
struct FieldPruner;

impl<'doc> GraphQLVisitor<'doc> for FieldPruner {
    type Context = usize;
    type Error = Infallible;

    async fn visit_field(
        &mut self,
        _field: &'doc Field<'doc>,
        context: &mut usize,
    ) -> VisitResult<Infallible> {
        *context += 1;
        Ok(())
    }
}

/// Pushes "enter"/"leave" markers around the default field
/// traversal, and records field names, demonstrating manual
/// pre/post composition over `traverse`.
struct EnterLeaveRecorder;

impl<'doc> GraphQLVisitor<'doc> for EnterLeaveRecorder {
    type Context = Vec<String>;
    type Error = Infallible;

    async fn visit_field(
        &mut self,
        field: &'doc Field<'doc>,
        context: &mut Vec<String>,
    ) -> VisitResult<Infallible> {
        context.push("enter".to_string());
        traverse::field(field, self, context).await?;
        context.push("leave".to_string());
        Ok(())
    }

    async fn visit_name(
        &mut self,
        name: &'doc Name<'doc>,
        context: &mut Vec<String>,
    ) -> VisitResult<Infallible> {
        context.push(name.value.to_string());
        traverse::name(name, self, context).await
    }
}

/// Verifies that a visitor that returns without recursing at
/// every SelectionSet never visits any descendant Field.
#[tokio::test]
async fn pruned_selection_sets_hide_descendant_fields() {
    let document = fixtures::aliased_account_query();

    let mut field_count = 0usize;
    visit(
        (&document).into(),
        &mut SelectionSetPruner,
        &mut field_count,
    )
    .await
    .unwrap();

    assert_eq!(field_count, 0);
}

/// Verifies that a handler that declines to recurse prunes only
/// its own subtree: the outer field is visited, its nested field
/// is not.
#[tokio::test]
async fn non_recursing_field_handler_prunes_its_subtree() {
    let document = fixtures::aliased_account_query();

    let mut field_count = 0usize;
    visit((&document).into(), &mut FieldPruner, &mut field_count)
        .await
        .unwrap();

    assert_eq!(field_count, 1);
}

/// Verifies that a handler can wrap pre/post logic around the
/// default traversal of its own children, with nesting reflected
/// in the marker order.
#[tokio::test]
async fn handlers_compose_pre_and_post_logic_around_traverse() {
    // `{ a { b } }`
    let document = fixtures::nested_two_field_query();

    let mut events = Vec::new();
    visit((&document).into(), &mut EnterLeaveRecorder, &mut events)
        .await
        .unwrap();

    assert_eq!(events, ["enter", "a", "enter", "b", "leave", "leave"]);
}

/// Verifies that absent optional slots (alias, directives,
/// operation name) invoke no handler and do not disturb the
/// traversal of the present slots around them.
#[tokio::test]
async fn absent_optional_slots_are_skipped() {
    let document = fixtures::bare_account_query();

    let events = record(&document).await;

    assert!(!events.contains(&NodeKind::Alias));
    assert!(!events.contains(&NodeKind::Directives));
    assert_eq!(
        events,
        vec![
            NodeKind::Document,
            NodeKind::OperationDefinition,
            NodeKind::SelectionSet,
            NodeKind::Field,
            NodeKind::Name,
            NodeKind::Arguments,
            NodeKind::Argument,
            NodeKind::Name,
            NodeKind::IntValue,
            NodeKind::SelectionSet,
            NodeKind::Field,
            NodeKind::Name,
        ],
    );
}
