use std::future::Future;
use std::pin::Pin;

use crate::ast::Node;
use crate::GraphQLVisitor;
use crate::VisitInterrupt;
use crate::VisitResult;
use tracing::debug;
use tracing::trace;

/// The boxed future produced by [`visit`].
///
/// Boxing at the dispatch boundary breaks the type-level cycle
/// between the engine, handler futures, and default-traversal
/// futures, which is what allows unbounded recursion through
/// `visit`. The future is not `Send`: traversal is
/// single-threaded cooperative.
pub type VisitFuture<'a, E> =
    Pin<Box<dyn Future<Output = VisitResult<E>> + 'a>>;

/// Visits `node` with `visitor`, threading `context` through
/// every handler call.
///
/// This is the dispatch engine: a single exhaustive match from
/// the node's kind tag to the visitor's handler for that kind.
/// There is exactly one jump from "which kind is this" to "which
/// handler runs" — any recursion into children happens inside
/// the handler, either through its default [`traverse`]
/// delegation or through explicit calls back into `visit`. The
/// kind set is closed, so an unknown tag is unrepresentable and
/// dispatch exhaustiveness is checked at compile time.
///
/// The engine awaits each handler to completion before any
/// sibling visit begins. A suspended handler therefore suspends
/// the whole traversal, preserving deterministic document-order
/// side effects even when handlers perform asynchronous work.
///
/// On success, every node reachable from `node` (through
/// whatever recursion the handlers chose) was visited exactly
/// once, in document order. On an interrupt, traversal stops
/// immediately: handlers for nodes ordered before the stopping
/// node have already run, and no handler runs after it. When the
/// interrupt is a handler failure, the engine frame that
/// dispatched the failing handler stamps the failure with that
/// node's kind, so
/// [`failure_site`](VisitInterrupt::failure_site) names the node
/// being visited when the failure originated; outer frames
/// propagate the stamped interrupt unchanged.
///
/// The engine never inspects `context` and never polls it for
/// cancellation; see
/// [`VisitInterrupt::Cancelled`](VisitInterrupt::Cancelled).
///
/// [`traverse`]: crate::traverse
pub fn visit<'a, 'doc, V>(
    node: Node<'doc>,
    visitor: &'a mut V,
    context: &'a mut V::Context,
) -> VisitFuture<'a, V::Error>
where
    V: GraphQLVisitor<'doc>,
    'doc: 'a,
{
    Box::pin(async move {
        let kind = node.kind();
        trace!(node_kind = %kind, "dispatching visitor handler");
        let result = match node {
            Node::Alias(n) => visitor.visit_alias(n, context).await,
            Node::Argument(n) => visitor.visit_argument(n, context).await,
            Node::Arguments(n) => visitor.visit_arguments(n, context).await,
            Node::ArgumentsDefinition(n) => {
                visitor.visit_arguments_definition(n, context).await
            },
            Node::BooleanValue(n) => {
                visitor.visit_boolean_value(n, context).await
            },
            Node::Comment(n) => visitor.visit_comment(n, context).await,
            Node::Description(n) => {
                visitor.visit_description(n, context).await
            },
            Node::Directive(n) => visitor.visit_directive(n, context).await,
            Node::DirectiveDefinition(n) => {
                visitor.visit_directive_definition(n, context).await
            },
            Node::DirectiveLocations(n) => {
                visitor.visit_directive_locations(n, context).await
            },
            Node::Directives(n) => {
                visitor.visit_directives(n, context).await
            },
            Node::Document(n) => visitor.visit_document(n, context).await,
            Node::EnumTypeDefinition(n) => {
                visitor.visit_enum_type_definition(n, context).await
            },
            Node::EnumTypeExtension(n) => {
                visitor.visit_enum_type_extension(n, context).await
            },
            Node::EnumValue(n) => visitor.visit_enum_value(n, context).await,
            Node::EnumValueDefinition(n) => {
                visitor.visit_enum_value_definition(n, context).await
            },
            Node::EnumValuesDefinition(n) => {
                visitor.visit_enum_values_definition(n, context).await
            },
            Node::Field(n) => visitor.visit_field(n, context).await,
            Node::FieldDefinition(n) => {
                visitor.visit_field_definition(n, context).await
            },
            Node::FieldsDefinition(n) => {
                visitor.visit_fields_definition(n, context).await
            },
            Node::FloatValue(n) => {
                visitor.visit_float_value(n, context).await
            },
            Node::FragmentDefinition(n) => {
                visitor.visit_fragment_definition(n, context).await
            },
            Node::FragmentSpread(n) => {
                visitor.visit_fragment_spread(n, context).await
            },
            Node::ImplementsInterfaces(n) => {
                visitor.visit_implements_interfaces(n, context).await
            },
            Node::InlineFragment(n) => {
                visitor.visit_inline_fragment(n, context).await
            },
            Node::InputFieldsDefinition(n) => {
                visitor.visit_input_fields_definition(n, context).await
            },
            Node::InputObjectTypeDefinition(n) => {
                visitor.visit_input_object_type_definition(n, context).await
            },
            Node::InputObjectTypeExtension(n) => {
                visitor.visit_input_object_type_extension(n, context).await
            },
            Node::InputValueDefinition(n) => {
                visitor.visit_input_value_definition(n, context).await
            },
            Node::InterfaceTypeDefinition(n) => {
                visitor.visit_interface_type_definition(n, context).await
            },
            Node::InterfaceTypeExtension(n) => {
                visitor.visit_interface_type_extension(n, context).await
            },
            Node::IntValue(n) => visitor.visit_int_value(n, context).await,
            Node::ListType(n) => visitor.visit_list_type(n, context).await,
            Node::ListValue(n) => visitor.visit_list_value(n, context).await,
            Node::Name(n) => visitor.visit_name(n, context).await,
            Node::NamedType(n) => visitor.visit_named_type(n, context).await,
            Node::NonNullType(n) => {
                visitor.visit_non_null_type(n, context).await
            },
            Node::NullValue(n) => visitor.visit_null_value(n, context).await,
            Node::ObjectField(n) => {
                visitor.visit_object_field(n, context).await
            },
            Node::ObjectTypeDefinition(n) => {
                visitor.visit_object_type_definition(n, context).await
            },
            Node::ObjectTypeExtension(n) => {
                visitor.visit_object_type_extension(n, context).await
            },
            Node::ObjectValue(n) => {
                visitor.visit_object_value(n, context).await
            },
            Node::OperationDefinition(n) => {
                visitor.visit_operation_definition(n, context).await
            },
            Node::RootOperationTypeDefinition(n) => {
                visitor
                    .visit_root_operation_type_definition(n, context)
                    .await
            },
            Node::ScalarTypeDefinition(n) => {
                visitor.visit_scalar_type_definition(n, context).await
            },
            Node::ScalarTypeExtension(n) => {
                visitor.visit_scalar_type_extension(n, context).await
            },
            Node::SchemaDefinition(n) => {
                visitor.visit_schema_definition(n, context).await
            },
            Node::SelectionSet(n) => {
                visitor.visit_selection_set(n, context).await
            },
            Node::StringValue(n) => {
                visitor.visit_string_value(n, context).await
            },
            Node::TypeCondition(n) => {
                visitor.visit_type_condition(n, context).await
            },
            Node::UnionMemberTypes(n) => {
                visitor.visit_union_member_types(n, context).await
            },
            Node::UnionTypeDefinition(n) => {
                visitor.visit_union_type_definition(n, context).await
            },
            Node::UnionTypeExtension(n) => {
                visitor.visit_union_type_extension(n, context).await
            },
            Node::Variable(n) => visitor.visit_variable(n, context).await,
            Node::VariableDefinition(n) => {
                visitor.visit_variable_definition(n, context).await
            },
            Node::VariablesDefinition(n) => {
                visitor.visit_variables_definition(n, context).await
            },
        };
        match result {
            Err(VisitInterrupt::Failed {
                node_kind: None,
                source,
            }) => {
                // Stamp the failure site on the innermost frame
                // only; outer frames see `Some` and pass the
                // interrupt through untouched.
                debug!(node_kind = %kind, "visitor handler failed");
                Err(VisitInterrupt::Failed {
                    node_kind: Some(kind),
                    source,
                })
            },
            other => other,
        }
    })
}
