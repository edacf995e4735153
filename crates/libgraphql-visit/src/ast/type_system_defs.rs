use crate::ast::AstNode;
use crate::ast::Description;
use crate::ast::Directives;
use crate::ast::EnumValue;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::NodeKind;
use crate::ast::OperationKind;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use inherent::inherent;

// =========================================================
// Schema definition
// =========================================================

/// A `schema { ... }` definition naming the root operation
/// types.
///
/// See
/// [Schema](https://spec.graphql.org/September2025/#sec-Schema)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaDefinition<'src> {
    pub description: Option<Description<'src>>,
    pub directives: Option<Directives<'src>>,
    pub root_operation_type_definitions:
        Vec<RootOperationTypeDefinition<'src>>,
}

/// One `query: QueryRoot` style entry in a schema definition.
///
/// See
/// [Root Operation Types](https://spec.graphql.org/September2025/#sec-Root-Operation-Types)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct RootOperationTypeDefinition<'src> {
    pub operation: OperationKind,
    pub named_type: NamedType<'src>,
}

// =========================================================
// Type definitions
// =========================================================

/// Any of the six type definition kinds.
///
/// See
/// [Types](https://spec.graphql.org/September2025/#sec-Types)
/// in the spec.
#[allow(clippy::large_enum_variant)]
#[derive(Clone, Debug, PartialEq)]
pub enum TypeDefinition<'src> {
    Enum(EnumTypeDefinition<'src>),
    InputObject(InputObjectTypeDefinition<'src>),
    Interface(InterfaceTypeDefinition<'src>),
    Object(ObjectTypeDefinition<'src>),
    Scalar(ScalarTypeDefinition<'src>),
    Union(UnionTypeDefinition<'src>),
}

/// A scalar type definition (e.g. `scalar DateTime`).
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarTypeDefinition<'src> {
    pub description: Option<Description<'src>>,
    pub name: Name<'src>,
    pub directives: Option<Directives<'src>>,
}

/// An object type definition (e.g. `type User { ... }`).
///
/// See
/// [Objects](https://spec.graphql.org/September2025/#sec-Objects)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectTypeDefinition<'src> {
    pub description: Option<Description<'src>>,
    pub name: Name<'src>,
    pub implements_interfaces: Option<ImplementsInterfaces<'src>>,
    pub directives: Option<Directives<'src>>,
    pub fields_definition: Option<FieldsDefinition<'src>>,
}

/// An interface type definition.
///
/// See
/// [Interfaces](https://spec.graphql.org/September2025/#sec-Interfaces)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceTypeDefinition<'src> {
    pub description: Option<Description<'src>>,
    pub name: Name<'src>,
    pub implements_interfaces: Option<ImplementsInterfaces<'src>>,
    pub directives: Option<Directives<'src>>,
    pub fields_definition: Option<FieldsDefinition<'src>>,
}

/// A union type definition (e.g. `union Pet = Cat | Dog`).
///
/// See
/// [Unions](https://spec.graphql.org/September2025/#sec-Unions)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct UnionTypeDefinition<'src> {
    pub description: Option<Description<'src>>,
    pub name: Name<'src>,
    pub directives: Option<Directives<'src>>,
    pub union_member_types: Option<UnionMemberTypes<'src>>,
}

/// An enum type definition.
///
/// See
/// [Enums](https://spec.graphql.org/September2025/#sec-Enums)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumTypeDefinition<'src> {
    pub description: Option<Description<'src>>,
    pub name: Name<'src>,
    pub directives: Option<Directives<'src>>,
    pub enum_values_definition: Option<EnumValuesDefinition<'src>>,
}

/// An input object type definition.
///
/// See
/// [Input Objects](https://spec.graphql.org/September2025/#sec-Input-Objects)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectTypeDefinition<'src> {
    pub description: Option<Description<'src>>,
    pub name: Name<'src>,
    pub directives: Option<Directives<'src>>,
    pub input_fields_definition: Option<InputFieldsDefinition<'src>>,
}

// =========================================================
// Field and input value definitions
// =========================================================

/// The braced field list of an object or interface type.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldsDefinition<'src> {
    pub items: Vec<FieldDefinition<'src>>,
}

/// A field definition within an object or interface type.
///
/// See
/// [Field Definitions](https://spec.graphql.org/September2025/#FieldsDefinition)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefinition<'src> {
    pub description: Option<Description<'src>>,
    pub name: Name<'src>,
    pub arguments_definition: Option<ArgumentsDefinition<'src>>,
    pub field_type: TypeAnnotation<'src>,
    pub directives: Option<Directives<'src>>,
}

/// The parenthesized argument definition list of a field or
/// directive definition.
///
/// Distinct from [`Arguments`](crate::ast::Arguments), which is
/// the *applied* argument list of a field or directive in an
/// executable document.
#[derive(Clone, Debug, PartialEq)]
pub struct ArgumentsDefinition<'src> {
    pub items: Vec<InputValueDefinition<'src>>,
}

/// An input value definition, used for field arguments and
/// input object fields.
///
/// See
/// [Input Values Definitions](https://spec.graphql.org/September2025/#InputValueDefinition)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct InputValueDefinition<'src> {
    pub description: Option<Description<'src>>,
    pub name: Name<'src>,
    pub value_type: TypeAnnotation<'src>,
    pub default_value: Option<Value<'src>>,
    pub directives: Option<Directives<'src>>,
}

/// The braced field list of an input object type.
#[derive(Clone, Debug, PartialEq)]
pub struct InputFieldsDefinition<'src> {
    pub items: Vec<InputValueDefinition<'src>>,
}

// =========================================================
// Enum values
// =========================================================

/// The braced value list of an enum type.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValuesDefinition<'src> {
    pub items: Vec<EnumValueDefinition<'src>>,
}

/// An enum value definition within an enum type.
///
/// See
/// [Enum Value Definitions](https://spec.graphql.org/September2025/#EnumValuesDefinition)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValueDefinition<'src> {
    pub description: Option<Description<'src>>,
    pub enum_value: EnumValue<'src>,
    pub directives: Option<Directives<'src>>,
}

// =========================================================
// Union members and implemented interfaces
// =========================================================

/// The `= A | B | C` member list of a union type.
#[derive(Clone, Debug, PartialEq)]
pub struct UnionMemberTypes<'src> {
    pub items: Vec<NamedType<'src>>,
}

/// The `implements A & B` list of an object or interface type.
///
/// See
/// [Interfaces](https://spec.graphql.org/September2025/#sec-Interfaces)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct ImplementsInterfaces<'src> {
    pub items: Vec<NamedType<'src>>,
}

// =========================================================
// Directive definitions
// =========================================================

/// A directive definition
/// (e.g. `directive @traced repeatable on FIELD`).
///
/// See
/// [Directive Definitions](https://spec.graphql.org/September2025/#sec-Type-System.Directives)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDefinition<'src> {
    pub description: Option<Description<'src>>,
    pub name: Name<'src>,
    pub arguments_definition: Option<ArgumentsDefinition<'src>>,
    pub repeatable: bool,
    pub locations: DirectiveLocations,
}

/// The `on QUERY | FIELD | ...` location list of a directive
/// definition.
///
/// Locations are plain [`DirectiveLocation`] entries rather than
/// nodes, so this node is a traversal leaf.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveLocations {
    pub items: Vec<DirectiveLocation>,
}

/// A location where a directive may be applied.
///
/// See
/// [Directive Locations](https://spec.graphql.org/September2025/#DirectiveLocations)
/// in the spec.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DirectiveLocation {
    ArgumentDefinition,
    Enum,
    EnumValue,
    Field,
    FieldDefinition,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    InputFieldDefinition,
    InputObject,
    Interface,
    Mutation,
    Object,
    Query,
    Scalar,
    Schema,
    Subscription,
    Union,
    VariableDefinition,
}

// =========================================================
// Kind tags
// =========================================================

#[inherent]
impl AstNode for SchemaDefinition<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::SchemaDefinition
    }
}

#[inherent]
impl AstNode for RootOperationTypeDefinition<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::RootOperationTypeDefinition
    }
}

#[inherent]
impl AstNode for TypeDefinition<'_> {
    pub fn kind(&self) -> NodeKind {
        match self {
            TypeDefinition::Enum(d) => d.kind(),
            TypeDefinition::InputObject(d) => d.kind(),
            TypeDefinition::Interface(d) => d.kind(),
            TypeDefinition::Object(d) => d.kind(),
            TypeDefinition::Scalar(d) => d.kind(),
            TypeDefinition::Union(d) => d.kind(),
        }
    }
}

#[inherent]
impl AstNode for ScalarTypeDefinition<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::ScalarTypeDefinition
    }
}

#[inherent]
impl AstNode for ObjectTypeDefinition<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::ObjectTypeDefinition
    }
}

#[inherent]
impl AstNode for InterfaceTypeDefinition<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::InterfaceTypeDefinition
    }
}

#[inherent]
impl AstNode for UnionTypeDefinition<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::UnionTypeDefinition
    }
}

#[inherent]
impl AstNode for EnumTypeDefinition<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::EnumTypeDefinition
    }
}

#[inherent]
impl AstNode for InputObjectTypeDefinition<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::InputObjectTypeDefinition
    }
}

#[inherent]
impl AstNode for FieldsDefinition<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::FieldsDefinition
    }
}

#[inherent]
impl AstNode for FieldDefinition<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::FieldDefinition
    }
}

#[inherent]
impl AstNode for ArgumentsDefinition<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::ArgumentsDefinition
    }
}

#[inherent]
impl AstNode for InputValueDefinition<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::InputValueDefinition
    }
}

#[inherent]
impl AstNode for InputFieldsDefinition<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::InputFieldsDefinition
    }
}

#[inherent]
impl AstNode for EnumValuesDefinition<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::EnumValuesDefinition
    }
}

#[inherent]
impl AstNode for EnumValueDefinition<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::EnumValueDefinition
    }
}

#[inherent]
impl AstNode for UnionMemberTypes<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::UnionMemberTypes
    }
}

#[inherent]
impl AstNode for ImplementsInterfaces<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::ImplementsInterfaces
    }
}

#[inherent]
impl AstNode for DirectiveDefinition<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::DirectiveDefinition
    }
}

#[inherent]
impl AstNode for DirectiveLocations {
    pub fn kind(&self) -> NodeKind {
        NodeKind::DirectiveLocations
    }
}
