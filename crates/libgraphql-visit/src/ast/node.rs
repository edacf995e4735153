use crate::ast::Alias;
use crate::ast::Argument;
use crate::ast::Arguments;
use crate::ast::ArgumentsDefinition;
use crate::ast::BooleanValue;
use crate::ast::Comment;
use crate::ast::Definition;
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
use crate::ast::NodeKind;
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
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::ast::StringValue;
use crate::ast::TypeAnnotation;
use crate::ast::TypeCondition;
use crate::ast::TypeDefinition;
use crate::ast::TypeExtension;
use crate::ast::UnionMemberTypes;
use crate::ast::UnionTypeDefinition;
use crate::ast::UnionTypeExtension;
use crate::ast::Value;
use crate::ast::Variable;
use crate::ast::VariableDefinition;
use crate::ast::VariablesDefinition;

/// A borrowed reference to any AST node, tagged by kind.
///
/// `Node` is the dispatch currency of the traversal engine: the
/// engine matches on the variant to select the visitor handler,
/// and the default traversal functions wrap each child in a
/// `Node` before recursing. Constructing one is free (it holds a
/// single reference) and `Node` is `Copy`.
///
/// The variant set is closed and exhaustive, one variant per
/// [`NodeKind`], which makes handler dispatch a compile-time
/// exhaustiveness guarantee: an unknown kind tag cannot be
/// constructed, so the "unrecognized node" failure mode of
/// dynamically-typed visitor implementations is unrepresentable.
///
/// `From` conversions are provided for the heterogeneous child
/// slot enums ([`Definition`], [`Selection`], [`Value`],
/// [`TypeAnnotation`], [`TypeDefinition`], [`TypeExtension`])
/// and for [`Document`] roots.
#[derive(Clone, Copy, Debug)]
pub enum Node<'doc> {
    Alias(&'doc Alias<'doc>),
    Argument(&'doc Argument<'doc>),
    Arguments(&'doc Arguments<'doc>),
    ArgumentsDefinition(&'doc ArgumentsDefinition<'doc>),
    BooleanValue(&'doc BooleanValue),
    Comment(&'doc Comment<'doc>),
    Description(&'doc Description<'doc>),
    Directive(&'doc Directive<'doc>),
    DirectiveDefinition(&'doc DirectiveDefinition<'doc>),
    DirectiveLocations(&'doc DirectiveLocations),
    Directives(&'doc Directives<'doc>),
    Document(&'doc Document<'doc>),
    EnumTypeDefinition(&'doc EnumTypeDefinition<'doc>),
    EnumTypeExtension(&'doc EnumTypeExtension<'doc>),
    EnumValue(&'doc EnumValue<'doc>),
    EnumValueDefinition(&'doc EnumValueDefinition<'doc>),
    EnumValuesDefinition(&'doc EnumValuesDefinition<'doc>),
    Field(&'doc Field<'doc>),
    FieldDefinition(&'doc FieldDefinition<'doc>),
    FieldsDefinition(&'doc FieldsDefinition<'doc>),
    FloatValue(&'doc FloatValue),
    FragmentDefinition(&'doc FragmentDefinition<'doc>),
    FragmentSpread(&'doc FragmentSpread<'doc>),
    ImplementsInterfaces(&'doc ImplementsInterfaces<'doc>),
    InlineFragment(&'doc InlineFragment<'doc>),
    InputFieldsDefinition(&'doc InputFieldsDefinition<'doc>),
    InputObjectTypeDefinition(&'doc InputObjectTypeDefinition<'doc>),
    InputObjectTypeExtension(&'doc InputObjectTypeExtension<'doc>),
    InputValueDefinition(&'doc InputValueDefinition<'doc>),
    InterfaceTypeDefinition(&'doc InterfaceTypeDefinition<'doc>),
    InterfaceTypeExtension(&'doc InterfaceTypeExtension<'doc>),
    IntValue(&'doc IntValue),
    ListType(&'doc ListType<'doc>),
    ListValue(&'doc ListValue<'doc>),
    Name(&'doc Name<'doc>),
    NamedType(&'doc NamedType<'doc>),
    NonNullType(&'doc NonNullType<'doc>),
    NullValue(&'doc NullValue),
    ObjectField(&'doc ObjectField<'doc>),
    ObjectTypeDefinition(&'doc ObjectTypeDefinition<'doc>),
    ObjectTypeExtension(&'doc ObjectTypeExtension<'doc>),
    ObjectValue(&'doc ObjectValue<'doc>),
    OperationDefinition(&'doc OperationDefinition<'doc>),
    RootOperationTypeDefinition(&'doc RootOperationTypeDefinition<'doc>),
    ScalarTypeDefinition(&'doc ScalarTypeDefinition<'doc>),
    ScalarTypeExtension(&'doc ScalarTypeExtension<'doc>),
    SchemaDefinition(&'doc SchemaDefinition<'doc>),
    SelectionSet(&'doc SelectionSet<'doc>),
    StringValue(&'doc StringValue<'doc>),
    TypeCondition(&'doc TypeCondition<'doc>),
    UnionMemberTypes(&'doc UnionMemberTypes<'doc>),
    UnionTypeDefinition(&'doc UnionTypeDefinition<'doc>),
    UnionTypeExtension(&'doc UnionTypeExtension<'doc>),
    Variable(&'doc Variable<'doc>),
    VariableDefinition(&'doc VariableDefinition<'doc>),
    VariablesDefinition(&'doc VariablesDefinition<'doc>),
}

impl Node<'_> {
    /// The kind tag of the referenced node.
    pub fn kind(self) -> NodeKind {
        match self {
            Node::Alias(_) => NodeKind::Alias,
            Node::Argument(_) => NodeKind::Argument,
            Node::Arguments(_) => NodeKind::Arguments,
            Node::ArgumentsDefinition(_) => NodeKind::ArgumentsDefinition,
            Node::BooleanValue(_) => NodeKind::BooleanValue,
            Node::Comment(_) => NodeKind::Comment,
            Node::Description(_) => NodeKind::Description,
            Node::Directive(_) => NodeKind::Directive,
            Node::DirectiveDefinition(_) => NodeKind::DirectiveDefinition,
            Node::DirectiveLocations(_) => NodeKind::DirectiveLocations,
            Node::Directives(_) => NodeKind::Directives,
            Node::Document(_) => NodeKind::Document,
            Node::EnumTypeDefinition(_) => NodeKind::EnumTypeDefinition,
            Node::EnumTypeExtension(_) => NodeKind::EnumTypeExtension,
            Node::EnumValue(_) => NodeKind::EnumValue,
            Node::EnumValueDefinition(_) => NodeKind::EnumValueDefinition,
            Node::EnumValuesDefinition(_) => NodeKind::EnumValuesDefinition,
            Node::Field(_) => NodeKind::Field,
            Node::FieldDefinition(_) => NodeKind::FieldDefinition,
            Node::FieldsDefinition(_) => NodeKind::FieldsDefinition,
            Node::FloatValue(_) => NodeKind::FloatValue,
            Node::FragmentDefinition(_) => NodeKind::FragmentDefinition,
            Node::FragmentSpread(_) => NodeKind::FragmentSpread,
            Node::ImplementsInterfaces(_) => NodeKind::ImplementsInterfaces,
            Node::InlineFragment(_) => NodeKind::InlineFragment,
            Node::InputFieldsDefinition(_) => NodeKind::InputFieldsDefinition,
            Node::InputObjectTypeDefinition(_) => {
                NodeKind::InputObjectTypeDefinition
            },
            Node::InputObjectTypeExtension(_) => {
                NodeKind::InputObjectTypeExtension
            },
            Node::InputValueDefinition(_) => NodeKind::InputValueDefinition,
            Node::InterfaceTypeDefinition(_) => {
                NodeKind::InterfaceTypeDefinition
            },
            Node::InterfaceTypeExtension(_) => {
                NodeKind::InterfaceTypeExtension
            },
            Node::IntValue(_) => NodeKind::IntValue,
            Node::ListType(_) => NodeKind::ListType,
            Node::ListValue(_) => NodeKind::ListValue,
            Node::Name(_) => NodeKind::Name,
            Node::NamedType(_) => NodeKind::NamedType,
            Node::NonNullType(_) => NodeKind::NonNullType,
            Node::NullValue(_) => NodeKind::NullValue,
            Node::ObjectField(_) => NodeKind::ObjectField,
            Node::ObjectTypeDefinition(_) => NodeKind::ObjectTypeDefinition,
            Node::ObjectTypeExtension(_) => NodeKind::ObjectTypeExtension,
            Node::ObjectValue(_) => NodeKind::ObjectValue,
            Node::OperationDefinition(_) => NodeKind::OperationDefinition,
            Node::RootOperationTypeDefinition(_) => {
                NodeKind::RootOperationTypeDefinition
            },
            Node::ScalarTypeDefinition(_) => NodeKind::ScalarTypeDefinition,
            Node::ScalarTypeExtension(_) => NodeKind::ScalarTypeExtension,
            Node::SchemaDefinition(_) => NodeKind::SchemaDefinition,
            Node::SelectionSet(_) => NodeKind::SelectionSet,
            Node::StringValue(_) => NodeKind::StringValue,
            Node::TypeCondition(_) => NodeKind::TypeCondition,
            Node::UnionMemberTypes(_) => NodeKind::UnionMemberTypes,
            Node::UnionTypeDefinition(_) => NodeKind::UnionTypeDefinition,
            Node::UnionTypeExtension(_) => NodeKind::UnionTypeExtension,
            Node::Variable(_) => NodeKind::Variable,
            Node::VariableDefinition(_) => NodeKind::VariableDefinition,
            Node::VariablesDefinition(_) => NodeKind::VariablesDefinition,
        }
    }
}

impl<'doc> From<&'doc Document<'doc>> for Node<'doc> {
    fn from(document: &'doc Document<'doc>) -> Self {
        Node::Document(document)
    }
}

impl<'doc> From<&'doc Definition<'doc>> for Node<'doc> {
    fn from(definition: &'doc Definition<'doc>) -> Self {
        match definition {
            Definition::DirectiveDefinition(d) => {
                Node::DirectiveDefinition(d)
            },
            Definition::FragmentDefinition(d) => Node::FragmentDefinition(d),
            Definition::OperationDefinition(d) => {
                Node::OperationDefinition(d)
            },
            Definition::SchemaDefinition(d) => Node::SchemaDefinition(d),
            Definition::TypeDefinition(d) => d.into(),
            Definition::TypeExtension(d) => d.into(),
        }
    }
}

impl<'doc> From<&'doc TypeDefinition<'doc>> for Node<'doc> {
    fn from(definition: &'doc TypeDefinition<'doc>) -> Self {
        match definition {
            TypeDefinition::Enum(d) => Node::EnumTypeDefinition(d),
            TypeDefinition::InputObject(d) => {
                Node::InputObjectTypeDefinition(d)
            },
            TypeDefinition::Interface(d) => Node::InterfaceTypeDefinition(d),
            TypeDefinition::Object(d) => Node::ObjectTypeDefinition(d),
            TypeDefinition::Scalar(d) => Node::ScalarTypeDefinition(d),
            TypeDefinition::Union(d) => Node::UnionTypeDefinition(d),
        }
    }
}

impl<'doc> From<&'doc TypeExtension<'doc>> for Node<'doc> {
    fn from(extension: &'doc TypeExtension<'doc>) -> Self {
        match extension {
            TypeExtension::Enum(e) => Node::EnumTypeExtension(e),
            TypeExtension::InputObject(e) => {
                Node::InputObjectTypeExtension(e)
            },
            TypeExtension::Interface(e) => Node::InterfaceTypeExtension(e),
            TypeExtension::Object(e) => Node::ObjectTypeExtension(e),
            TypeExtension::Scalar(e) => Node::ScalarTypeExtension(e),
            TypeExtension::Union(e) => Node::UnionTypeExtension(e),
        }
    }
}

impl<'doc> From<&'doc Selection<'doc>> for Node<'doc> {
    fn from(selection: &'doc Selection<'doc>) -> Self {
        match selection {
            Selection::Field(s) => Node::Field(s),
            Selection::FragmentSpread(s) => Node::FragmentSpread(s),
            Selection::InlineFragment(s) => Node::InlineFragment(s),
        }
    }
}

impl<'doc> From<&'doc Value<'doc>> for Node<'doc> {
    fn from(value: &'doc Value<'doc>) -> Self {
        match value {
            Value::Boolean(v) => Node::BooleanValue(v),
            Value::Enum(v) => Node::EnumValue(v),
            Value::Float(v) => Node::FloatValue(v),
            Value::Int(v) => Node::IntValue(v),
            Value::List(v) => Node::ListValue(v),
            Value::Null(v) => Node::NullValue(v),
            Value::Object(v) => Node::ObjectValue(v),
            Value::String(v) => Node::StringValue(v),
            Value::Variable(v) => Node::Variable(v),
        }
    }
}

impl<'doc> From<&'doc TypeAnnotation<'doc>> for Node<'doc> {
    fn from(annotation: &'doc TypeAnnotation<'doc>) -> Self {
        match annotation {
            TypeAnnotation::List(t) => Node::ListType(t),
            TypeAnnotation::Named(t) => Node::NamedType(t),
            TypeAnnotation::NonNull(t) => Node::NonNullType(t),
        }
    }
}
