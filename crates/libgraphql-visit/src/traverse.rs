//! Default, grammar-order child traversal for every node kind.
//!
//! Each function here is the "no-op-but-recurse" baseline for one
//! node kind: it visits the node's present child slots, in the
//! grammar's textual left-to-right production order, by calling
//! [`visit`] on each child. Absent optional slots are skipped;
//! plural wrappers iterate their `items` in source order. Kinds
//! with no node children (names, scalar values, comments,
//! descriptions, directive locations) are explicit no-ops so that
//! every kind has a callable default.
//!
//! These are free functions rather than overridable base-class
//! behavior so that a handler can invoke "traverse my children
//! normally" as one composable step:
//!
//! - the default handlers in [`GraphQLVisitor`] delegate here,
//! - an overriding handler can do its own work and then delegate
//!   here for ordinary recursion,
//! - or skip the call entirely to prune its subtree.
//!
//! Traversal order is load-bearing: it is deterministic and
//! matches source order, so order-sensitive consumers (pretty
//! printers, for example) reproduce exact output.

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
use crate::ast::Node;
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
use crate::visit;
use crate::GraphQLVisitor;
use crate::VisitResult;

/// [`Name`]: leaf, no children.
pub async fn name<'doc, V>(
    _name: &'doc Name<'doc>,
    _visitor: &mut V,
    _context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    Ok(())
}

/// [`Document`]: each definition, in source order.
pub async fn document<'doc, V>(
    document: &'doc Document<'doc>,
    visitor: &mut V,
    context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    for definition in &document.definitions {
        visit(Node::from(definition), visitor, context).await?;
    }
    Ok(())
}

/// [`OperationDefinition`]: Name? → VariablesDefinition? →
/// Directives? → SelectionSet.
pub async fn operation_definition<'doc, V>(
    operation_definition: &'doc OperationDefinition<'doc>,
    visitor: &mut V,
    context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    if let Some(name) = &operation_definition.name {
        visit(Node::Name(name), visitor, context).await?;
    }
    if let Some(variables_definition) =
        &operation_definition.variables_definition
    {
        visit(
            Node::VariablesDefinition(variables_definition),
            visitor,
            context,
        )
        .await?;
    }
    if let Some(directives) = &operation_definition.directives {
        visit(Node::Directives(directives), visitor, context).await?;
    }
    visit(
        Node::SelectionSet(&operation_definition.selection_set),
        visitor,
        context,
    )
    .await
}

/// [`VariableDefinition`]: Variable → type → default value? →
/// Directives?.
pub async fn variable_definition<'doc, V>(
    variable_definition: &'doc VariableDefinition<'doc>,
    visitor: &mut V,
    context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    visit(
        Node::Variable(&variable_definition.variable),
        visitor,
        context,
    )
    .await?;
    visit(
        Node::from(&variable_definition.var_type),
        visitor,
        context,
    )
    .await?;
    if let Some(default_value) = &variable_definition.default_value {
        visit(Node::from(default_value), visitor, context).await?;
    }
    if let Some(directives) = &variable_definition.directives {
        visit(Node::Directives(directives), visitor, context).await?;
    }
    Ok(())
}

/// [`VariablesDefinition`]: each variable definition, in source
/// order.
pub async fn variables_definition<'doc, V>(
    variables_definition: &'doc VariablesDefinition<'doc>,
    visitor: &mut V,
    context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    for item in &variables_definition.items {
        visit(Node::VariableDefinition(item), visitor, context).await?;
    }
    Ok(())
}

/// [`Variable`]: Name.
pub async fn variable<'doc, V>(
    variable: &'doc Variable<'doc>,
    visitor: &mut V,
    context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    visit(Node::Name(&variable.name), visitor, context).await
}

/// [`SelectionSet`]: each selection, in source order.
pub async fn selection_set<'doc, V>(
    selection_set: &'doc SelectionSet<'doc>,
    visitor: &mut V,
    context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    for selection in &selection_set.selections {
        visit(Node::from(selection), visitor, context).await?;
    }
    Ok(())
}

/// [`Field`]: Alias? → Name → Arguments? → Directives? →
/// SelectionSet?.
pub async fn field<'doc, V>(
    field: &'doc Field<'doc>,
    visitor: &mut V,
    context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    if let Some(alias) = &field.alias {
        visit(Node::Alias(alias), visitor, context).await?;
    }
    visit(Node::Name(&field.name), visitor, context).await?;
    if let Some(arguments) = &field.arguments {
        visit(Node::Arguments(arguments), visitor, context).await?;
    }
    if let Some(directives) = &field.directives {
        visit(Node::Directives(directives), visitor, context).await?;
    }
    if let Some(selection_set) = &field.selection_set {
        visit(Node::SelectionSet(selection_set), visitor, context).await?;
    }
    Ok(())
}

/// [`Argument`]: Name → value.
pub async fn argument<'doc, V>(
    argument: &'doc Argument<'doc>,
    visitor: &mut V,
    context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    visit(Node::Name(&argument.name), visitor, context).await?;
    visit(Node::from(&argument.value), visitor, context).await
}

/// [`ArgumentsDefinition`]: each input value definition, in
/// source order.
pub async fn arguments_definition<'doc, V>(
    arguments_definition: &'doc ArgumentsDefinition<'doc>,
    visitor: &mut V,
    context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    for item in &arguments_definition.items {
        visit(Node::InputValueDefinition(item), visitor, context).await?;
    }
    Ok(())
}

/// [`Arguments`]: each argument, in source order.
pub async fn arguments<'doc, V>(
    arguments: &'doc Arguments<'doc>,
    visitor: &mut V,
    context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    for item in &arguments.items {
        visit(Node::Argument(item), visitor, context).await?;
    }
    Ok(())
}

/// [`FragmentSpread`]: Name → Directives?.
pub async fn fragment_spread<'doc, V>(
    fragment_spread: &'doc FragmentSpread<'doc>,
    visitor: &mut V,
    context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    visit(Node::Name(&fragment_spread.name), visitor, context).await?;
    if let Some(directives) = &fragment_spread.directives {
        visit(Node::Directives(directives), visitor, context).await?;
    }
    Ok(())
}

/// [`InlineFragment`]: TypeCondition? → Directives? →
/// SelectionSet.
pub async fn inline_fragment<'doc, V>(
    inline_fragment: &'doc InlineFragment<'doc>,
    visitor: &mut V,
    context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    if let Some(type_condition) = &inline_fragment.type_condition {
        visit(Node::TypeCondition(type_condition), visitor, context)
            .await?;
    }
    if let Some(directives) = &inline_fragment.directives {
        visit(Node::Directives(directives), visitor, context).await?;
    }
    visit(
        Node::SelectionSet(&inline_fragment.selection_set),
        visitor,
        context,
    )
    .await
}

/// [`FragmentDefinition`]: Name → TypeCondition → Directives? →
/// SelectionSet.
pub async fn fragment_definition<'doc, V>(
    fragment_definition: &'doc FragmentDefinition<'doc>,
    visitor: &mut V,
    context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    visit(Node::Name(&fragment_definition.name), visitor, context).await?;
    visit(
        Node::TypeCondition(&fragment_definition.type_condition),
        visitor,
        context,
    )
    .await?;
    if let Some(directives) = &fragment_definition.directives {
        visit(Node::Directives(directives), visitor, context).await?;
    }
    visit(
        Node::SelectionSet(&fragment_definition.selection_set),
        visitor,
        context,
    )
    .await
}

/// [`IntValue`]: leaf, no children.
pub async fn int_value<'doc, V>(
    _int_value: &'doc IntValue,
    _visitor: &mut V,
    _context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    Ok(())
}

/// [`FloatValue`]: leaf, no children.
pub async fn float_value<'doc, V>(
    _float_value: &'doc FloatValue,
    _visitor: &mut V,
    _context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    Ok(())
}

/// [`StringValue`]: leaf, no children.
pub async fn string_value<'doc, V>(
    _string_value: &'doc StringValue<'doc>,
    _visitor: &mut V,
    _context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    Ok(())
}

/// [`BooleanValue`]: leaf, no children.
pub async fn boolean_value<'doc, V>(
    _boolean_value: &'doc BooleanValue,
    _visitor: &mut V,
    _context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    Ok(())
}

/// [`EnumValue`]: Name.
pub async fn enum_value<'doc, V>(
    enum_value: &'doc EnumValue<'doc>,
    visitor: &mut V,
    context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    visit(Node::Name(&enum_value.name), visitor, context).await
}

/// [`ListValue`]: each item, in source order.
pub async fn list_value<'doc, V>(
    list_value: &'doc ListValue<'doc>,
    visitor: &mut V,
    context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    for item in &list_value.items {
        visit(Node::from(item), visitor, context).await?;
    }
    Ok(())
}

/// [`ObjectValue`]: each object field, in source order.
pub async fn object_value<'doc, V>(
    object_value: &'doc ObjectValue<'doc>,
    visitor: &mut V,
    context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    for field in &object_value.fields {
        visit(Node::ObjectField(field), visitor, context).await?;
    }
    Ok(())
}

/// [`ObjectField`]: Name → value.
pub async fn object_field<'doc, V>(
    object_field: &'doc ObjectField<'doc>,
    visitor: &mut V,
    context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    visit(Node::Name(&object_field.name), visitor, context).await?;
    visit(Node::from(&object_field.value), visitor, context).await
}

/// [`NullValue`]: leaf, no children.
pub async fn null_value<'doc, V>(
    _null_value: &'doc NullValue,
    _visitor: &mut V,
    _context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    Ok(())
}

/// [`Directive`]: Name → Arguments?.
pub async fn directive<'doc, V>(
    directive: &'doc Directive<'doc>,
    visitor: &mut V,
    context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    visit(Node::Name(&directive.name), visitor, context).await?;
    if let Some(arguments) = &directive.arguments {
        visit(Node::Arguments(arguments), visitor, context).await?;
    }
    Ok(())
}

/// [`Directives`]: each directive, in source order.
pub async fn directives<'doc, V>(
    directives: &'doc Directives<'doc>,
    visitor: &mut V,
    context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    for item in &directives.items {
        visit(Node::Directive(item), visitor, context).await?;
    }
    Ok(())
}

/// [`NamedType`]: Name.
pub async fn named_type<'doc, V>(
    named_type: &'doc NamedType<'doc>,
    visitor: &mut V,
    context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    visit(Node::Name(&named_type.name), visitor, context).await
}

/// [`ListType`]: the element type.
pub async fn list_type<'doc, V>(
    list_type: &'doc ListType<'doc>,
    visitor: &mut V,
    context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    visit(Node::from(&*list_type.element_type), visitor, context).await
}

/// [`NonNullType`]: the wrapped type.
pub async fn non_null_type<'doc, V>(
    non_null_type: &'doc NonNullType<'doc>,
    visitor: &mut V,
    context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    visit(Node::from(&*non_null_type.wrapped_type), visitor, context).await
}

/// [`SchemaDefinition`]: Description? → Directives? → each root
/// operation type definition.
pub async fn schema_definition<'doc, V>(
    schema_definition: &'doc SchemaDefinition<'doc>,
    visitor: &mut V,
    context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    if let Some(description) = &schema_definition.description {
        visit(Node::Description(description), visitor, context).await?;
    }
    if let Some(directives) = &schema_definition.directives {
        visit(Node::Directives(directives), visitor, context).await?;
    }
    for item in &schema_definition.root_operation_type_definitions {
        visit(Node::RootOperationTypeDefinition(item), visitor, context)
            .await?;
    }
    Ok(())
}

/// [`RootOperationTypeDefinition`]: NamedType.
pub async fn root_operation_type_definition<'doc, V>(
    root_operation_type_definition: &'doc RootOperationTypeDefinition<'doc>,
    visitor: &mut V,
    context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    visit(
        Node::NamedType(&root_operation_type_definition.named_type),
        visitor,
        context,
    )
    .await
}

/// [`ScalarTypeDefinition`]: Description? → Name → Directives?.
pub async fn scalar_type_definition<'doc, V>(
    scalar_type_definition: &'doc ScalarTypeDefinition<'doc>,
    visitor: &mut V,
    context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    if let Some(description) = &scalar_type_definition.description {
        visit(Node::Description(description), visitor, context).await?;
    }
    visit(Node::Name(&scalar_type_definition.name), visitor, context)
        .await?;
    if let Some(directives) = &scalar_type_definition.directives {
        visit(Node::Directives(directives), visitor, context).await?;
    }
    Ok(())
}

/// [`ObjectTypeDefinition`]: Description? → Name →
/// ImplementsInterfaces? → Directives? → FieldsDefinition?.
pub async fn object_type_definition<'doc, V>(
    object_type_definition: &'doc ObjectTypeDefinition<'doc>,
    visitor: &mut V,
    context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    if let Some(description) = &object_type_definition.description {
        visit(Node::Description(description), visitor, context).await?;
    }
    visit(Node::Name(&object_type_definition.name), visitor, context)
        .await?;
    if let Some(implements_interfaces) =
        &object_type_definition.implements_interfaces
    {
        visit(
            Node::ImplementsInterfaces(implements_interfaces),
            visitor,
            context,
        )
        .await?;
    }
    if let Some(directives) = &object_type_definition.directives {
        visit(Node::Directives(directives), visitor, context).await?;
    }
    if let Some(fields_definition) =
        &object_type_definition.fields_definition
    {
        visit(Node::FieldsDefinition(fields_definition), visitor, context)
            .await?;
    }
    Ok(())
}

/// [`FieldDefinition`]: Description? → Name →
/// ArgumentsDefinition? → type → Directives?.
pub async fn field_definition<'doc, V>(
    field_definition: &'doc FieldDefinition<'doc>,
    visitor: &mut V,
    context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    if let Some(description) = &field_definition.description {
        visit(Node::Description(description), visitor, context).await?;
    }
    visit(Node::Name(&field_definition.name), visitor, context).await?;
    if let Some(arguments_definition) =
        &field_definition.arguments_definition
    {
        visit(
            Node::ArgumentsDefinition(arguments_definition),
            visitor,
            context,
        )
        .await?;
    }
    visit(Node::from(&field_definition.field_type), visitor, context)
        .await?;
    if let Some(directives) = &field_definition.directives {
        visit(Node::Directives(directives), visitor, context).await?;
    }
    Ok(())
}

/// [`FieldsDefinition`]: each field definition, in source order.
pub async fn fields_definition<'doc, V>(
    fields_definition: &'doc FieldsDefinition<'doc>,
    visitor: &mut V,
    context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    for item in &fields_definition.items {
        visit(Node::FieldDefinition(item), visitor, context).await?;
    }
    Ok(())
}

/// [`InputValueDefinition`]: Description? → Name → type →
/// default value? → Directives?.
pub async fn input_value_definition<'doc, V>(
    input_value_definition: &'doc InputValueDefinition<'doc>,
    visitor: &mut V,
    context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    if let Some(description) = &input_value_definition.description {
        visit(Node::Description(description), visitor, context).await?;
    }
    visit(Node::Name(&input_value_definition.name), visitor, context)
        .await?;
    visit(
        Node::from(&input_value_definition.value_type),
        visitor,
        context,
    )
    .await?;
    if let Some(default_value) = &input_value_definition.default_value {
        visit(Node::from(default_value), visitor, context).await?;
    }
    if let Some(directives) = &input_value_definition.directives {
        visit(Node::Directives(directives), visitor, context).await?;
    }
    Ok(())
}

/// [`InputFieldsDefinition`]: each input value definition, in
/// source order.
pub async fn input_fields_definition<'doc, V>(
    input_fields_definition: &'doc InputFieldsDefinition<'doc>,
    visitor: &mut V,
    context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    for item in &input_fields_definition.items {
        visit(Node::InputValueDefinition(item), visitor, context).await?;
    }
    Ok(())
}

/// [`InterfaceTypeDefinition`]: Description? → Name →
/// ImplementsInterfaces? → Directives? → FieldsDefinition?.
pub async fn interface_type_definition<'doc, V>(
    interface_type_definition: &'doc InterfaceTypeDefinition<'doc>,
    visitor: &mut V,
    context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    if let Some(description) = &interface_type_definition.description {
        visit(Node::Description(description), visitor, context).await?;
    }
    visit(
        Node::Name(&interface_type_definition.name),
        visitor,
        context,
    )
    .await?;
    if let Some(implements_interfaces) =
        &interface_type_definition.implements_interfaces
    {
        visit(
            Node::ImplementsInterfaces(implements_interfaces),
            visitor,
            context,
        )
        .await?;
    }
    if let Some(directives) = &interface_type_definition.directives {
        visit(Node::Directives(directives), visitor, context).await?;
    }
    if let Some(fields_definition) =
        &interface_type_definition.fields_definition
    {
        visit(Node::FieldsDefinition(fields_definition), visitor, context)
            .await?;
    }
    Ok(())
}

/// [`UnionTypeDefinition`]: Description? → Name → Directives? →
/// UnionMemberTypes?.
pub async fn union_type_definition<'doc, V>(
    union_type_definition: &'doc UnionTypeDefinition<'doc>,
    visitor: &mut V,
    context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    if let Some(description) = &union_type_definition.description {
        visit(Node::Description(description), visitor, context).await?;
    }
    visit(Node::Name(&union_type_definition.name), visitor, context)
        .await?;
    if let Some(directives) = &union_type_definition.directives {
        visit(Node::Directives(directives), visitor, context).await?;
    }
    if let Some(union_member_types) =
        &union_type_definition.union_member_types
    {
        visit(Node::UnionMemberTypes(union_member_types), visitor, context)
            .await?;
    }
    Ok(())
}

/// [`UnionMemberTypes`]: each member type, in source order.
pub async fn union_member_types<'doc, V>(
    union_member_types: &'doc UnionMemberTypes<'doc>,
    visitor: &mut V,
    context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    for item in &union_member_types.items {
        visit(Node::NamedType(item), visitor, context).await?;
    }
    Ok(())
}

/// [`EnumTypeDefinition`]: Description? → Name → Directives? →
/// EnumValuesDefinition?.
pub async fn enum_type_definition<'doc, V>(
    enum_type_definition: &'doc EnumTypeDefinition<'doc>,
    visitor: &mut V,
    context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    if let Some(description) = &enum_type_definition.description {
        visit(Node::Description(description), visitor, context).await?;
    }
    visit(Node::Name(&enum_type_definition.name), visitor, context)
        .await?;
    if let Some(directives) = &enum_type_definition.directives {
        visit(Node::Directives(directives), visitor, context).await?;
    }
    if let Some(enum_values_definition) =
        &enum_type_definition.enum_values_definition
    {
        visit(
            Node::EnumValuesDefinition(enum_values_definition),
            visitor,
            context,
        )
        .await?;
    }
    Ok(())
}

/// [`EnumValueDefinition`]: Description? → EnumValue →
/// Directives?.
pub async fn enum_value_definition<'doc, V>(
    enum_value_definition: &'doc EnumValueDefinition<'doc>,
    visitor: &mut V,
    context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    if let Some(description) = &enum_value_definition.description {
        visit(Node::Description(description), visitor, context).await?;
    }
    visit(
        Node::EnumValue(&enum_value_definition.enum_value),
        visitor,
        context,
    )
    .await?;
    if let Some(directives) = &enum_value_definition.directives {
        visit(Node::Directives(directives), visitor, context).await?;
    }
    Ok(())
}

/// [`EnumValuesDefinition`]: each enum value definition, in
/// source order.
pub async fn enum_values_definition<'doc, V>(
    enum_values_definition: &'doc EnumValuesDefinition<'doc>,
    visitor: &mut V,
    context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    for item in &enum_values_definition.items {
        visit(Node::EnumValueDefinition(item), visitor, context).await?;
    }
    Ok(())
}

/// [`InputObjectTypeDefinition`]: Description? → Name →
/// Directives? → InputFieldsDefinition?.
pub async fn input_object_type_definition<'doc, V>(
    input_object_type_definition: &'doc InputObjectTypeDefinition<'doc>,
    visitor: &mut V,
    context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    if let Some(description) = &input_object_type_definition.description {
        visit(Node::Description(description), visitor, context).await?;
    }
    visit(
        Node::Name(&input_object_type_definition.name),
        visitor,
        context,
    )
    .await?;
    if let Some(directives) = &input_object_type_definition.directives {
        visit(Node::Directives(directives), visitor, context).await?;
    }
    if let Some(input_fields_definition) =
        &input_object_type_definition.input_fields_definition
    {
        visit(
            Node::InputFieldsDefinition(input_fields_definition),
            visitor,
            context,
        )
        .await?;
    }
    Ok(())
}

/// [`DirectiveDefinition`]: Description? → Name →
/// ArgumentsDefinition? → DirectiveLocations.
pub async fn directive_definition<'doc, V>(
    directive_definition: &'doc DirectiveDefinition<'doc>,
    visitor: &mut V,
    context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    if let Some(description) = &directive_definition.description {
        visit(Node::Description(description), visitor, context).await?;
    }
    visit(Node::Name(&directive_definition.name), visitor, context)
        .await?;
    if let Some(arguments_definition) =
        &directive_definition.arguments_definition
    {
        visit(
            Node::ArgumentsDefinition(arguments_definition),
            visitor,
            context,
        )
        .await?;
    }
    visit(
        Node::DirectiveLocations(&directive_definition.locations),
        visitor,
        context,
    )
    .await
}

/// [`DirectiveLocations`]: leaf — its entries are plain
/// [`DirectiveLocation`](crate::ast::DirectiveLocation) values,
/// not nodes.
pub async fn directive_locations<'doc, V>(
    _directive_locations: &'doc DirectiveLocations,
    _visitor: &mut V,
    _context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    Ok(())
}

/// [`Comment`]: leaf, no children.
pub async fn comment<'doc, V>(
    _comment: &'doc Comment<'doc>,
    _visitor: &mut V,
    _context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    Ok(())
}

/// [`Description`]: leaf, no children.
pub async fn description<'doc, V>(
    _description: &'doc Description<'doc>,
    _visitor: &mut V,
    _context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    Ok(())
}

/// [`TypeCondition`]: NamedType.
pub async fn type_condition<'doc, V>(
    type_condition: &'doc TypeCondition<'doc>,
    visitor: &mut V,
    context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    visit(
        Node::NamedType(&type_condition.named_type),
        visitor,
        context,
    )
    .await
}

/// [`ImplementsInterfaces`]: each interface type, in source
/// order.
pub async fn implements_interfaces<'doc, V>(
    implements_interfaces: &'doc ImplementsInterfaces<'doc>,
    visitor: &mut V,
    context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    for item in &implements_interfaces.items {
        visit(Node::NamedType(item), visitor, context).await?;
    }
    Ok(())
}

/// [`Alias`]: Name.
pub async fn alias<'doc, V>(
    alias: &'doc Alias<'doc>,
    visitor: &mut V,
    context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    visit(Node::Name(&alias.name), visitor, context).await
}

/// [`ScalarTypeExtension`]: Name → Directives?.
pub async fn scalar_type_extension<'doc, V>(
    scalar_type_extension: &'doc ScalarTypeExtension<'doc>,
    visitor: &mut V,
    context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    visit(Node::Name(&scalar_type_extension.name), visitor, context)
        .await?;
    if let Some(directives) = &scalar_type_extension.directives {
        visit(Node::Directives(directives), visitor, context).await?;
    }
    Ok(())
}

/// [`ObjectTypeExtension`]: Name → ImplementsInterfaces? →
/// Directives? → FieldsDefinition?.
pub async fn object_type_extension<'doc, V>(
    object_type_extension: &'doc ObjectTypeExtension<'doc>,
    visitor: &mut V,
    context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    visit(Node::Name(&object_type_extension.name), visitor, context)
        .await?;
    if let Some(implements_interfaces) =
        &object_type_extension.implements_interfaces
    {
        visit(
            Node::ImplementsInterfaces(implements_interfaces),
            visitor,
            context,
        )
        .await?;
    }
    if let Some(directives) = &object_type_extension.directives {
        visit(Node::Directives(directives), visitor, context).await?;
    }
    if let Some(fields_definition) =
        &object_type_extension.fields_definition
    {
        visit(Node::FieldsDefinition(fields_definition), visitor, context)
            .await?;
    }
    Ok(())
}

/// [`InterfaceTypeExtension`]: Name → ImplementsInterfaces? →
/// Directives? → FieldsDefinition?.
pub async fn interface_type_extension<'doc, V>(
    interface_type_extension: &'doc InterfaceTypeExtension<'doc>,
    visitor: &mut V,
    context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    visit(
        Node::Name(&interface_type_extension.name),
        visitor,
        context,
    )
    .await?;
    if let Some(implements_interfaces) =
        &interface_type_extension.implements_interfaces
    {
        visit(
            Node::ImplementsInterfaces(implements_interfaces),
            visitor,
            context,
        )
        .await?;
    }
    if let Some(directives) = &interface_type_extension.directives {
        visit(Node::Directives(directives), visitor, context).await?;
    }
    if let Some(fields_definition) =
        &interface_type_extension.fields_definition
    {
        visit(Node::FieldsDefinition(fields_definition), visitor, context)
            .await?;
    }
    Ok(())
}

/// [`UnionTypeExtension`]: Name → Directives? →
/// UnionMemberTypes?.
pub async fn union_type_extension<'doc, V>(
    union_type_extension: &'doc UnionTypeExtension<'doc>,
    visitor: &mut V,
    context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    visit(Node::Name(&union_type_extension.name), visitor, context)
        .await?;
    if let Some(directives) = &union_type_extension.directives {
        visit(Node::Directives(directives), visitor, context).await?;
    }
    if let Some(union_member_types) =
        &union_type_extension.union_member_types
    {
        visit(Node::UnionMemberTypes(union_member_types), visitor, context)
            .await?;
    }
    Ok(())
}

/// [`EnumTypeExtension`]: Name → Directives? →
/// EnumValuesDefinition?.
pub async fn enum_type_extension<'doc, V>(
    enum_type_extension: &'doc EnumTypeExtension<'doc>,
    visitor: &mut V,
    context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    visit(Node::Name(&enum_type_extension.name), visitor, context).await?;
    if let Some(directives) = &enum_type_extension.directives {
        visit(Node::Directives(directives), visitor, context).await?;
    }
    if let Some(enum_values_definition) =
        &enum_type_extension.enum_values_definition
    {
        visit(
            Node::EnumValuesDefinition(enum_values_definition),
            visitor,
            context,
        )
        .await?;
    }
    Ok(())
}

/// [`InputObjectTypeExtension`]: Name → Directives? →
/// InputFieldsDefinition?.
pub async fn input_object_type_extension<'doc, V>(
    input_object_type_extension: &'doc InputObjectTypeExtension<'doc>,
    visitor: &mut V,
    context: &mut V::Context,
) -> VisitResult<V::Error>
where
    V: GraphQLVisitor<'doc>,
{
    visit(
        Node::Name(&input_object_type_extension.name),
        visitor,
        context,
    )
    .await?;
    if let Some(directives) = &input_object_type_extension.directives {
        visit(Node::Directives(directives), visitor, context).await?;
    }
    if let Some(input_fields_definition) =
        &input_object_type_extension.input_fields_definition
    {
        visit(
            Node::InputFieldsDefinition(input_fields_definition),
            visitor,
            context,
        )
        .await?;
    }
    Ok(())
}
