use std::fmt;

/// The kind tag identifying which grammar production an AST node
/// instantiates.
///
/// This is the closed, exhaustive set of node kinds for the full
/// GraphQL grammar: executable documents, type-system (SDL)
/// documents, and mixed documents. The traversal engine dispatches
/// on this tag, and [`VisitInterrupt`](crate::VisitInterrupt)
/// reports it as the failure site when a visitor handler fails.
///
/// Note the grammar's asymmetry: every extensible type definition
/// has a matching `*TypeExtension` kind, but operations and
/// fragments have none. That asymmetry is inherent to the GraphQL
/// type-system grammar and is preserved here as-is.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NodeKind {
    Alias,
    Argument,
    Arguments,
    ArgumentsDefinition,
    BooleanValue,
    Comment,
    Description,
    Directive,
    DirectiveDefinition,
    DirectiveLocations,
    Directives,
    Document,
    EnumTypeDefinition,
    EnumTypeExtension,
    EnumValue,
    EnumValueDefinition,
    EnumValuesDefinition,
    Field,
    FieldDefinition,
    FieldsDefinition,
    FloatValue,
    FragmentDefinition,
    FragmentSpread,
    ImplementsInterfaces,
    InlineFragment,
    InputFieldsDefinition,
    InputObjectTypeDefinition,
    InputObjectTypeExtension,
    InputValueDefinition,
    InterfaceTypeDefinition,
    InterfaceTypeExtension,
    IntValue,
    ListType,
    ListValue,
    Name,
    NamedType,
    NonNullType,
    NullValue,
    ObjectField,
    ObjectTypeDefinition,
    ObjectTypeExtension,
    ObjectValue,
    OperationDefinition,
    RootOperationTypeDefinition,
    ScalarTypeDefinition,
    ScalarTypeExtension,
    SchemaDefinition,
    SelectionSet,
    StringValue,
    TypeCondition,
    UnionMemberTypes,
    UnionTypeDefinition,
    UnionTypeExtension,
    Variable,
    VariableDefinition,
    VariablesDefinition,
}

impl NodeKind {
    /// Returns the kind's name as it appears in the grammar
    /// (e.g. `"OperationDefinition"`).
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Alias => "Alias",
            NodeKind::Argument => "Argument",
            NodeKind::Arguments => "Arguments",
            NodeKind::ArgumentsDefinition => "ArgumentsDefinition",
            NodeKind::BooleanValue => "BooleanValue",
            NodeKind::Comment => "Comment",
            NodeKind::Description => "Description",
            NodeKind::Directive => "Directive",
            NodeKind::DirectiveDefinition => "DirectiveDefinition",
            NodeKind::DirectiveLocations => "DirectiveLocations",
            NodeKind::Directives => "Directives",
            NodeKind::Document => "Document",
            NodeKind::EnumTypeDefinition => "EnumTypeDefinition",
            NodeKind::EnumTypeExtension => "EnumTypeExtension",
            NodeKind::EnumValue => "EnumValue",
            NodeKind::EnumValueDefinition => "EnumValueDefinition",
            NodeKind::EnumValuesDefinition => "EnumValuesDefinition",
            NodeKind::Field => "Field",
            NodeKind::FieldDefinition => "FieldDefinition",
            NodeKind::FieldsDefinition => "FieldsDefinition",
            NodeKind::FloatValue => "FloatValue",
            NodeKind::FragmentDefinition => "FragmentDefinition",
            NodeKind::FragmentSpread => "FragmentSpread",
            NodeKind::ImplementsInterfaces => "ImplementsInterfaces",
            NodeKind::InlineFragment => "InlineFragment",
            NodeKind::InputFieldsDefinition => "InputFieldsDefinition",
            NodeKind::InputObjectTypeDefinition => "InputObjectTypeDefinition",
            NodeKind::InputObjectTypeExtension => "InputObjectTypeExtension",
            NodeKind::InputValueDefinition => "InputValueDefinition",
            NodeKind::InterfaceTypeDefinition => "InterfaceTypeDefinition",
            NodeKind::InterfaceTypeExtension => "InterfaceTypeExtension",
            NodeKind::IntValue => "IntValue",
            NodeKind::ListType => "ListType",
            NodeKind::ListValue => "ListValue",
            NodeKind::Name => "Name",
            NodeKind::NamedType => "NamedType",
            NodeKind::NonNullType => "NonNullType",
            NodeKind::NullValue => "NullValue",
            NodeKind::ObjectField => "ObjectField",
            NodeKind::ObjectTypeDefinition => "ObjectTypeDefinition",
            NodeKind::ObjectTypeExtension => "ObjectTypeExtension",
            NodeKind::ObjectValue => "ObjectValue",
            NodeKind::OperationDefinition => "OperationDefinition",
            NodeKind::RootOperationTypeDefinition => {
                "RootOperationTypeDefinition"
            },
            NodeKind::ScalarTypeDefinition => "ScalarTypeDefinition",
            NodeKind::ScalarTypeExtension => "ScalarTypeExtension",
            NodeKind::SchemaDefinition => "SchemaDefinition",
            NodeKind::SelectionSet => "SelectionSet",
            NodeKind::StringValue => "StringValue",
            NodeKind::TypeCondition => "TypeCondition",
            NodeKind::UnionMemberTypes => "UnionMemberTypes",
            NodeKind::UnionTypeDefinition => "UnionTypeDefinition",
            NodeKind::UnionTypeExtension => "UnionTypeExtension",
            NodeKind::Variable => "Variable",
            NodeKind::VariableDefinition => "VariableDefinition",
            NodeKind::VariablesDefinition => "VariablesDefinition",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
