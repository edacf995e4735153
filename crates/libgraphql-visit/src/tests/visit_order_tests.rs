//! Tests for default traversal order: pre-order, left-to-right,
//! matching source order, for executable and schema documents.

use std::convert::Infallible;

use crate::ast::Name;
use crate::ast::Node;
use crate::ast::NodeKind;
use crate::tests::fixtures;
use crate::tests::recording::record;
use crate::tests::recording::RecordingVisitor;
use crate::traverse;
use crate::visit;
use crate::GraphQLVisitor;
use crate::VisitResult;

/// Collects the `value` of every [`Name`] node it sees, in
/// dispatch order, and otherwise traverses normally. A partial
/// visitor: only one handler is overridden.
struct NameCollector;

impl<'doc> GraphQLVisitor<'doc> for NameCollector {
    type Context = Vec<String>;
    type Error = Infallible;

    async fn visit_name(
        &mut self,
        name: &'doc Name<'doc>,
        context: &mut Vec<String>,
    ) -> VisitResult<Infallible> {
        context.push(name.value.to_string());
        traverse::name(name, self, context).await
    }
}

/// Same as [`NameCollector`], but suspends at every name before
/// recording it.
struct YieldingNameCollector;

impl<'doc> GraphQLVisitor<'doc> for YieldingNameCollector {
    type Context = Vec<String>;
    type Error = Infallible;

    async fn visit_name(
        &mut self,
        name: &'doc Name<'doc>,
        context: &mut Vec<String>,
    ) -> VisitResult<Infallible> {
        tokio::task::yield_now().await;
        context.push(name.value.to_string());
        traverse::name(name, self, context).await
    }
}

// =========================================================
// Exact pre-order sequences
// =========================================================

/// Verifies the full dispatch sequence for
/// `query GetUser { user: account(id: 4) @log { name } }`.
///
/// Field child slots must fire as Alias, Name, Arguments,
/// Directives, SelectionSet — the grammar's textual
/// left-to-right order.
#[tokio::test]
async fn aliased_account_query_visits_in_document_order() {
    let document = fixtures::aliased_account_query();

    let events = record(&document).await;

    assert_eq!(
        events,
        vec![
            NodeKind::Document,
            NodeKind::OperationDefinition,
            NodeKind::Name,
            NodeKind::SelectionSet,
            NodeKind::Field,
            NodeKind::Alias,
            NodeKind::Name,
            NodeKind::Name,
            NodeKind::Arguments,
            NodeKind::Argument,
            NodeKind::Name,
            NodeKind::IntValue,
            NodeKind::Directives,
            NodeKind::Directive,
            NodeKind::Name,
            NodeKind::SelectionSet,
            NodeKind::Field,
            NodeKind::Name,
        ],
    );
}

/// Verifies the full dispatch sequence for a document with
/// variable definitions, a fragment spread with a directive, an
/// inline fragment, and a fragment definition.
#[tokio::test]
async fn fragment_query_visits_in_document_order() {
    let document = fixtures::fragment_query();

    let events = record(&document).await;

    assert_eq!(
        events,
        vec![
            NodeKind::Document,
            NodeKind::OperationDefinition,
            NodeKind::Name,
            NodeKind::VariablesDefinition,
            NodeKind::VariableDefinition,
            NodeKind::Variable,
            NodeKind::Name,
            NodeKind::NamedType,
            NodeKind::Name,
            NodeKind::BooleanValue,
            NodeKind::SelectionSet,
            NodeKind::Field,
            NodeKind::Name,
            NodeKind::SelectionSet,
            NodeKind::FragmentSpread,
            NodeKind::Name,
            NodeKind::Directives,
            NodeKind::Directive,
            NodeKind::Name,
            NodeKind::Arguments,
            NodeKind::Argument,
            NodeKind::Name,
            NodeKind::Variable,
            NodeKind::Name,
            NodeKind::InlineFragment,
            NodeKind::TypeCondition,
            NodeKind::NamedType,
            NodeKind::Name,
            NodeKind::SelectionSet,
            NodeKind::Field,
            NodeKind::Name,
            NodeKind::FragmentDefinition,
            NodeKind::Name,
            NodeKind::TypeCondition,
            NodeKind::NamedType,
            NodeKind::Name,
            NodeKind::Directives,
            NodeKind::Directive,
            NodeKind::Name,
            NodeKind::SelectionSet,
            NodeKind::Field,
            NodeKind::Name,
        ],
    );
}

/// Verifies the full dispatch sequence for a schema document
/// with a schema definition, an object type definition (with
/// description, interfaces, directives, argument definitions,
/// and a wrapped field type), and an enum type extension.
#[tokio::test]
async fn schema_document_visits_in_document_order() {
    let document = fixtures::schema_document();

    let events = record(&document).await;

    assert_eq!(
        events,
        vec![
            NodeKind::Document,
            NodeKind::SchemaDefinition,
            NodeKind::RootOperationTypeDefinition,
            NodeKind::NamedType,
            NodeKind::Name,
            NodeKind::ObjectTypeDefinition,
            NodeKind::Description,
            NodeKind::Name,
            NodeKind::ImplementsInterfaces,
            NodeKind::NamedType,
            NodeKind::Name,
            NodeKind::Directives,
            NodeKind::Directive,
            NodeKind::Name,
            NodeKind::FieldsDefinition,
            NodeKind::FieldDefinition,
            NodeKind::Name,
            NodeKind::ArgumentsDefinition,
            NodeKind::InputValueDefinition,
            NodeKind::Name,
            NodeKind::NamedType,
            NodeKind::Name,
            NodeKind::IntValue,
            NodeKind::NonNullType,
            NodeKind::ListType,
            NodeKind::NamedType,
            NodeKind::Name,
            NodeKind::EnumTypeExtension,
            NodeKind::Name,
            NodeKind::Directives,
            NodeKind::Directive,
            NodeKind::Name,
        ],
    );
}

/// Verifies that every value kind dispatches through its own
/// handler, in argument source order. The traversal root is the
/// field itself: any node can serve as a traversal root, not
/// just documents.
#[tokio::test]
async fn value_kinds_visit_in_source_order() {
    let field = fixtures::value_kinds_field();

    let mut events = Vec::new();
    visit(Node::Field(&field), &mut RecordingVisitor, &mut events)
        .await
        .unwrap();

    assert_eq!(
        events,
        vec![
            NodeKind::Field,
            NodeKind::Name,
            NodeKind::Arguments,
            NodeKind::Argument,
            NodeKind::Name,
            NodeKind::IntValue,
            NodeKind::Argument,
            NodeKind::Name,
            NodeKind::FloatValue,
            NodeKind::Argument,
            NodeKind::Name,
            NodeKind::StringValue,
            NodeKind::Argument,
            NodeKind::Name,
            NodeKind::BooleanValue,
            NodeKind::Argument,
            NodeKind::Name,
            NodeKind::NullValue,
            NodeKind::Argument,
            NodeKind::Name,
            NodeKind::EnumValue,
            NodeKind::Name,
            NodeKind::Argument,
            NodeKind::Name,
            NodeKind::ListValue,
            NodeKind::IntValue,
            NodeKind::Variable,
            NodeKind::Name,
            NodeKind::Argument,
            NodeKind::Name,
            NodeKind::ObjectValue,
            NodeKind::ObjectField,
            NodeKind::Name,
            NodeKind::IntValue,
        ],
    );
}

// =========================================================
// Order fidelity through partial visitors
// =========================================================

/// Verifies that a partial visitor sees names in document order:
/// operation name, alias, field name, argument name, directive
/// name, nested field name.
#[tokio::test]
async fn name_values_arrive_in_document_order() {
    let document = fixtures::aliased_account_query();

    let mut names = Vec::new();
    visit((&document).into(), &mut NameCollector, &mut names)
        .await
        .unwrap();

    assert_eq!(names, ["GetUser", "user", "account", "id", "log", "name"]);
}

/// Verifies that handler suspension does not reorder visitation:
/// a visitor that yields to the runtime before every name
/// produces the same sequence as one that never suspends.
#[tokio::test]
async fn suspension_preserves_document_order() {
    let document = fixtures::fragment_query();

    let mut base = Vec::new();
    visit((&document).into(), &mut NameCollector, &mut base)
        .await
        .unwrap();

    let mut yielded = Vec::new();
    visit(
        (&document).into(),
        &mut YieldingNameCollector,
        &mut yielded,
    )
    .await
    .unwrap();

    assert_eq!(base, yielded);
}

// =========================================================
// Repeatability
// =========================================================

/// Verifies that two traversals of the same immutable document
/// with two independent contexts produce identical sequences.
#[tokio::test]
async fn repeated_traversals_are_order_identical() {
    let document = fixtures::fragment_query();

    let first = record(&document).await;
    let second = record(&document).await;

    assert_eq!(first, second);
}
