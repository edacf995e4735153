use crate::ast::Alias;
use crate::ast::Argument;
use crate::ast::Arguments;
use crate::ast::ArgumentsDefinition;
use crate::ast::BooleanValue;
use crate::ast::Comment;
use crate::ast::Description;
use crate::ast::Directive;
use crate::ast::DirectiveDefinition;
use crate::ast::DirectiveLocations;
use crate::ast::Directives;
use crate::ast::Document;
use crate::ast::EnumTypeDefinition;
use crate::ast::EnumTypeExtension;
use crate::ast::EnumValue;
use crate::ast::EnumValueDefinition;
use crate::ast::EnumValuesDefinition;
use crate::ast::Field;
use crate::ast::FieldDefinition;
use crate::ast::FieldsDefinition;
use crate::ast::FloatValue;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::ImplementsInterfaces;
use crate::ast::InlineFragment;
use crate::ast::InputFieldsDefinition;
use crate::ast::InputObjectTypeDefinition;
use crate::ast::InputObjectTypeExtension;
use crate::ast::InputValueDefinition;
use crate::ast::InterfaceTypeDefinition;
use crate::ast::InterfaceTypeExtension;
use crate::ast::IntValue;
use crate::ast::ListType;
use crate::ast::ListValue;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::NonNullType;
use crate::ast::NullValue;
use crate::ast::ObjectField;
use crate::ast::ObjectTypeDefinition;
use crate::ast::ObjectTypeExtension;
use crate::ast::ObjectValue;
use crate::ast::OperationDefinition;
use crate::ast::RootOperationTypeDefinition;
use crate::ast::ScalarTypeDefinition;
use crate::ast::ScalarTypeExtension;
use crate::ast::SchemaDefinition;
use crate::ast::SelectionSet;
use crate::ast::StringValue;
use crate::ast::TypeCondition;
use crate::ast::UnionMemberTypes;
use crate::ast::UnionTypeDefinition;
use crate::ast::UnionTypeExtension;
use crate::ast::Variable;
use crate::ast::VariableDefinition;
use crate::ast::VariablesDefinition;
use crate::traverse;
use crate::VisitResult;

/// A visitor over GraphQL AST nodes: one suspension-capable
/// handler per node kind, each receiving the node and a mutable
/// caller-owned context.
///
/// Every handler has a default implementation that delegates to
/// the matching [`traverse`] function, visiting the node's
/// children in grammar order. Partial visitors — implementations
/// that override only the kinds they care about — are the common
/// case; an implementation that overrides nothing is a
/// pass-through that walks the whole document.
///
/// An overriding handler chooses its own recursion behavior:
///
/// - delegate to [`traverse`] to visit children normally
///   (typically after doing its own work, giving pre-order
///   semantics);
/// - call [`visit`](crate::visit) on individual children to wrap
///   pre/post logic around specific slots;
/// - return `Ok(())` without recursing to prune the node's
///   entire subtree.
///
/// Handlers are `async` and may suspend pending external work
/// (remote schema lookups, streaming output, ...). While a
/// handler is suspended, no other part of the same traversal
/// proceeds: the engine awaits each handler before the next
/// sibling's visit begins, so document-order side effects stay
/// deterministic. Handler futures are not required to be `Send`.
///
/// # Context
///
/// [`Context`](GraphQLVisitor::Context) is an opaque value
/// created by the caller before visiting the root, passed by
/// `&mut` to every handler, and never read by the engine.
/// Handlers mutate it freely (accumulating results, tracking a
/// scope stack, carrying a cancellation flag). A context belongs
/// to a single traversal invocation; the immutable AST, by
/// contrast, is freely shared across repeated traversals.
///
/// # Errors and cancellation
///
/// Handlers report failure by returning
/// [`VisitInterrupt::failed`](crate::VisitInterrupt::failed)
/// (or applying `?` to a `Result<_, Self::Error>`), and signal
/// cooperative cancellation by returning
/// [`VisitInterrupt::Cancelled`](crate::VisitInterrupt::Cancelled).
/// Both unwind the traversal immediately; see
/// [`VisitInterrupt`](crate::VisitInterrupt) for the
/// stopped-versus-failed distinction.
// Handler futures are intentionally not required to be `Send`;
// callers run them on the current thread.
#[allow(async_fn_in_trait)]
pub trait GraphQLVisitor<'doc>: Sized {
    /// Caller-owned state threaded through every handler call.
    type Context;

    /// The visitor's domain error type.
    type Error;

    /// Visits a [`Name`] node.
    async fn visit_name(
        &mut self,
        name: &'doc Name<'doc>,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::name(name, self, context).await
    }

    /// Visits a [`Document`] node.
    ///
    /// A visitor that wants prompt cancellation over a large
    /// document typically overrides this (or the definition
    /// kinds) to check its signal between definitions.
    async fn visit_document(
        &mut self,
        document: &'doc Document<'doc>,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::document(document, self, context).await
    }

    /// Visits an [`OperationDefinition`] node.
    async fn visit_operation_definition(
        &mut self,
        operation_definition: &'doc OperationDefinition<'doc>,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::operation_definition(operation_definition, self, context)
            .await
    }

    /// Visits a [`VariableDefinition`] node.
    async fn visit_variable_definition(
        &mut self,
        variable_definition: &'doc VariableDefinition<'doc>,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::variable_definition(variable_definition, self, context)
            .await
    }

    /// Visits a [`VariablesDefinition`] node.
    async fn visit_variables_definition(
        &mut self,
        variables_definition: &'doc VariablesDefinition<'doc>,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::variables_definition(variables_definition, self, context)
            .await
    }

    /// Visits a [`Variable`] node.
    async fn visit_variable(
        &mut self,
        variable: &'doc Variable<'doc>,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::variable(variable, self, context).await
    }

    /// Visits a [`SelectionSet`] node.
    async fn visit_selection_set(
        &mut self,
        selection_set: &'doc SelectionSet<'doc>,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::selection_set(selection_set, self, context).await
    }

    /// Visits a [`Field`] node.
    async fn visit_field(
        &mut self,
        field: &'doc Field<'doc>,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::field(field, self, context).await
    }

    /// Visits an [`Argument`] node.
    async fn visit_argument(
        &mut self,
        argument: &'doc Argument<'doc>,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::argument(argument, self, context).await
    }

    /// Visits an [`ArgumentsDefinition`] node.
    async fn visit_arguments_definition(
        &mut self,
        arguments_definition: &'doc ArgumentsDefinition<'doc>,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::arguments_definition(arguments_definition, self, context)
            .await
    }

    /// Visits an [`Arguments`] node.
    async fn visit_arguments(
        &mut self,
        arguments: &'doc Arguments<'doc>,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::arguments(arguments, self, context).await
    }

    /// Visits a [`FragmentSpread`] node.
    async fn visit_fragment_spread(
        &mut self,
        fragment_spread: &'doc FragmentSpread<'doc>,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::fragment_spread(fragment_spread, self, context).await
    }

    /// Visits an [`InlineFragment`] node.
    async fn visit_inline_fragment(
        &mut self,
        inline_fragment: &'doc InlineFragment<'doc>,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::inline_fragment(inline_fragment, self, context).await
    }

    /// Visits a [`FragmentDefinition`] node.
    async fn visit_fragment_definition(
        &mut self,
        fragment_definition: &'doc FragmentDefinition<'doc>,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::fragment_definition(fragment_definition, self, context)
            .await
    }

    /// Visits an [`IntValue`] node.
    async fn visit_int_value(
        &mut self,
        int_value: &'doc IntValue,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::int_value(int_value, self, context).await
    }

    /// Visits a [`FloatValue`] node.
    async fn visit_float_value(
        &mut self,
        float_value: &'doc FloatValue,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::float_value(float_value, self, context).await
    }

    /// Visits a [`StringValue`] node.
    async fn visit_string_value(
        &mut self,
        string_value: &'doc StringValue<'doc>,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::string_value(string_value, self, context).await
    }

    /// Visits a [`BooleanValue`] node.
    async fn visit_boolean_value(
        &mut self,
        boolean_value: &'doc BooleanValue,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::boolean_value(boolean_value, self, context).await
    }

    /// Visits an [`EnumValue`] node.
    async fn visit_enum_value(
        &mut self,
        enum_value: &'doc EnumValue<'doc>,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::enum_value(enum_value, self, context).await
    }

    /// Visits a [`ListValue`] node.
    async fn visit_list_value(
        &mut self,
        list_value: &'doc ListValue<'doc>,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::list_value(list_value, self, context).await
    }

    /// Visits an [`ObjectValue`] node.
    async fn visit_object_value(
        &mut self,
        object_value: &'doc ObjectValue<'doc>,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::object_value(object_value, self, context).await
    }

    /// Visits an [`ObjectField`] node.
    async fn visit_object_field(
        &mut self,
        object_field: &'doc ObjectField<'doc>,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::object_field(object_field, self, context).await
    }

    /// Visits a [`NullValue`] node.
    async fn visit_null_value(
        &mut self,
        null_value: &'doc NullValue,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::null_value(null_value, self, context).await
    }

    /// Visits a [`Directive`] node.
    async fn visit_directive(
        &mut self,
        directive: &'doc Directive<'doc>,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::directive(directive, self, context).await
    }

    /// Visits a [`Directives`] node.
    async fn visit_directives(
        &mut self,
        directives: &'doc Directives<'doc>,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::directives(directives, self, context).await
    }

    /// Visits a [`NamedType`] node.
    async fn visit_named_type(
        &mut self,
        named_type: &'doc NamedType<'doc>,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::named_type(named_type, self, context).await
    }

    /// Visits a [`ListType`] node.
    async fn visit_list_type(
        &mut self,
        list_type: &'doc ListType<'doc>,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::list_type(list_type, self, context).await
    }

    /// Visits a [`NonNullType`] node.
    async fn visit_non_null_type(
        &mut self,
        non_null_type: &'doc NonNullType<'doc>,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::non_null_type(non_null_type, self, context).await
    }

    /// Visits a [`SchemaDefinition`] node.
    async fn visit_schema_definition(
        &mut self,
        schema_definition: &'doc SchemaDefinition<'doc>,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::schema_definition(schema_definition, self, context).await
    }

    /// Visits a [`RootOperationTypeDefinition`] node.
    async fn visit_root_operation_type_definition(
        &mut self,
        root_operation_type_definition:
            &'doc RootOperationTypeDefinition<'doc>,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::root_operation_type_definition(
            root_operation_type_definition,
            self,
            context,
        )
        .await
    }

    /// Visits a [`ScalarTypeDefinition`] node.
    async fn visit_scalar_type_definition(
        &mut self,
        scalar_type_definition: &'doc ScalarTypeDefinition<'doc>,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::scalar_type_definition(
            scalar_type_definition,
            self,
            context,
        )
        .await
    }

    /// Visits an [`ObjectTypeDefinition`] node.
    async fn visit_object_type_definition(
        &mut self,
        object_type_definition: &'doc ObjectTypeDefinition<'doc>,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::object_type_definition(
            object_type_definition,
            self,
            context,
        )
        .await
    }

    /// Visits a [`FieldDefinition`] node.
    async fn visit_field_definition(
        &mut self,
        field_definition: &'doc FieldDefinition<'doc>,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::field_definition(field_definition, self, context).await
    }

    /// Visits a [`FieldsDefinition`] node.
    async fn visit_fields_definition(
        &mut self,
        fields_definition: &'doc FieldsDefinition<'doc>,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::fields_definition(fields_definition, self, context).await
    }

    /// Visits an [`InputValueDefinition`] node.
    async fn visit_input_value_definition(
        &mut self,
        input_value_definition: &'doc InputValueDefinition<'doc>,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::input_value_definition(
            input_value_definition,
            self,
            context,
        )
        .await
    }

    /// Visits an [`InputFieldsDefinition`] node.
    async fn visit_input_fields_definition(
        &mut self,
        input_fields_definition: &'doc InputFieldsDefinition<'doc>,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::input_fields_definition(
            input_fields_definition,
            self,
            context,
        )
        .await
    }

    /// Visits an [`InterfaceTypeDefinition`] node.
    async fn visit_interface_type_definition(
        &mut self,
        interface_type_definition: &'doc InterfaceTypeDefinition<'doc>,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::interface_type_definition(
            interface_type_definition,
            self,
            context,
        )
        .await
    }

    /// Visits a [`UnionTypeDefinition`] node.
    async fn visit_union_type_definition(
        &mut self,
        union_type_definition: &'doc UnionTypeDefinition<'doc>,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::union_type_definition(union_type_definition, self, context)
            .await
    }

    /// Visits a [`UnionMemberTypes`] node.
    async fn visit_union_member_types(
        &mut self,
        union_member_types: &'doc UnionMemberTypes<'doc>,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::union_member_types(union_member_types, self, context).await
    }

    /// Visits an [`EnumTypeDefinition`] node.
    async fn visit_enum_type_definition(
        &mut self,
        enum_type_definition: &'doc EnumTypeDefinition<'doc>,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::enum_type_definition(enum_type_definition, self, context)
            .await
    }

    /// Visits an [`EnumValueDefinition`] node.
    async fn visit_enum_value_definition(
        &mut self,
        enum_value_definition: &'doc EnumValueDefinition<'doc>,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::enum_value_definition(enum_value_definition, self, context)
            .await
    }

    /// Visits an [`EnumValuesDefinition`] node.
    async fn visit_enum_values_definition(
        &mut self,
        enum_values_definition: &'doc EnumValuesDefinition<'doc>,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::enum_values_definition(
            enum_values_definition,
            self,
            context,
        )
        .await
    }

    /// Visits an [`InputObjectTypeDefinition`] node.
    async fn visit_input_object_type_definition(
        &mut self,
        input_object_type_definition: &'doc InputObjectTypeDefinition<'doc>,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::input_object_type_definition(
            input_object_type_definition,
            self,
            context,
        )
        .await
    }

    /// Visits a [`DirectiveDefinition`] node.
    async fn visit_directive_definition(
        &mut self,
        directive_definition: &'doc DirectiveDefinition<'doc>,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::directive_definition(directive_definition, self, context)
            .await
    }

    /// Visits a [`DirectiveLocations`] node.
    async fn visit_directive_locations(
        &mut self,
        directive_locations: &'doc DirectiveLocations,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::directive_locations(directive_locations, self, context)
            .await
    }

    /// Visits a [`Comment`] node.
    async fn visit_comment(
        &mut self,
        comment: &'doc Comment<'doc>,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::comment(comment, self, context).await
    }

    /// Visits a [`Description`] node.
    async fn visit_description(
        &mut self,
        description: &'doc Description<'doc>,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::description(description, self, context).await
    }

    /// Visits a [`TypeCondition`] node.
    async fn visit_type_condition(
        &mut self,
        type_condition: &'doc TypeCondition<'doc>,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::type_condition(type_condition, self, context).await
    }

    /// Visits an [`ImplementsInterfaces`] node.
    async fn visit_implements_interfaces(
        &mut self,
        implements_interfaces: &'doc ImplementsInterfaces<'doc>,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::implements_interfaces(
            implements_interfaces,
            self,
            context,
        )
        .await
    }

    /// Visits an [`Alias`] node.
    async fn visit_alias(
        &mut self,
        alias: &'doc Alias<'doc>,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::alias(alias, self, context).await
    }

    /// Visits a [`ScalarTypeExtension`] node.
    async fn visit_scalar_type_extension(
        &mut self,
        scalar_type_extension: &'doc ScalarTypeExtension<'doc>,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::scalar_type_extension(scalar_type_extension, self, context)
            .await
    }

    /// Visits an [`ObjectTypeExtension`] node.
    async fn visit_object_type_extension(
        &mut self,
        object_type_extension: &'doc ObjectTypeExtension<'doc>,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::object_type_extension(object_type_extension, self, context)
            .await
    }

    /// Visits an [`InterfaceTypeExtension`] node.
    async fn visit_interface_type_extension(
        &mut self,
        interface_type_extension: &'doc InterfaceTypeExtension<'doc>,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::interface_type_extension(
            interface_type_extension,
            self,
            context,
        )
        .await
    }

    /// Visits a [`UnionTypeExtension`] node.
    async fn visit_union_type_extension(
        &mut self,
        union_type_extension: &'doc UnionTypeExtension<'doc>,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::union_type_extension(union_type_extension, self, context)
            .await
    }

    /// Visits an [`EnumTypeExtension`] node.
    async fn visit_enum_type_extension(
        &mut self,
        enum_type_extension: &'doc EnumTypeExtension<'doc>,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::enum_type_extension(enum_type_extension, self, context)
            .await
    }

    /// Visits an [`InputObjectTypeExtension`] node.
    async fn visit_input_object_type_extension(
        &mut self,
        input_object_type_extension: &'doc InputObjectTypeExtension<'doc>,
        context: &mut Self::Context,
    ) -> VisitResult<Self::Error> {
        traverse::input_object_type_extension(
            input_object_type_extension,
            self,
            context,
        )
        .await
    }
}
