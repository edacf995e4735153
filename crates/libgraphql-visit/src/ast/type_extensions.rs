use crate::ast::AstNode;
use crate::ast::Directives;
use crate::ast::EnumValuesDefinition;
use crate::ast::FieldsDefinition;
use crate::ast::ImplementsInterfaces;
use crate::ast::InputFieldsDefinition;
use crate::ast::Name;
use crate::ast::NodeKind;
use crate::ast::UnionMemberTypes;
use inherent::inherent;

// =========================================================
// TypeExtension enum
// =========================================================

/// Any of the six type extension kinds.
///
/// Every extensible type definition has a matching extension
/// kind; operations and fragments have none (a grammar
/// asymmetry preserved as-is).
///
/// See
/// [Type Extensions](https://spec.graphql.org/September2025/#sec-Type-Extensions)
/// in the spec.
#[allow(clippy::large_enum_variant)]
#[derive(Clone, Debug, PartialEq)]
pub enum TypeExtension<'src> {
    Enum(EnumTypeExtension<'src>),
    InputObject(InputObjectTypeExtension<'src>),
    Interface(InterfaceTypeExtension<'src>),
    Object(ObjectTypeExtension<'src>),
    Scalar(ScalarTypeExtension<'src>),
    Union(UnionTypeExtension<'src>),
}

// =========================================================
// Extension nodes
// =========================================================

/// A scalar type extension (e.g. `extend scalar DateTime @tz`).
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarTypeExtension<'src> {
    pub name: Name<'src>,
    pub directives: Option<Directives<'src>>,
}

/// An object type extension.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectTypeExtension<'src> {
    pub name: Name<'src>,
    pub implements_interfaces: Option<ImplementsInterfaces<'src>>,
    pub directives: Option<Directives<'src>>,
    pub fields_definition: Option<FieldsDefinition<'src>>,
}

/// An interface type extension.
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceTypeExtension<'src> {
    pub name: Name<'src>,
    pub implements_interfaces: Option<ImplementsInterfaces<'src>>,
    pub directives: Option<Directives<'src>>,
    pub fields_definition: Option<FieldsDefinition<'src>>,
}

/// A union type extension.
#[derive(Clone, Debug, PartialEq)]
pub struct UnionTypeExtension<'src> {
    pub name: Name<'src>,
    pub directives: Option<Directives<'src>>,
    pub union_member_types: Option<UnionMemberTypes<'src>>,
}

/// An enum type extension.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumTypeExtension<'src> {
    pub name: Name<'src>,
    pub directives: Option<Directives<'src>>,
    pub enum_values_definition: Option<EnumValuesDefinition<'src>>,
}

/// An input object type extension.
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectTypeExtension<'src> {
    pub name: Name<'src>,
    pub directives: Option<Directives<'src>>,
    pub input_fields_definition: Option<InputFieldsDefinition<'src>>,
}

// =========================================================
// Kind tags
// =========================================================

#[inherent]
impl AstNode for TypeExtension<'_> {
    pub fn kind(&self) -> NodeKind {
        match self {
            TypeExtension::Enum(e) => e.kind(),
            TypeExtension::InputObject(e) => e.kind(),
            TypeExtension::Interface(e) => e.kind(),
            TypeExtension::Object(e) => e.kind(),
            TypeExtension::Scalar(e) => e.kind(),
            TypeExtension::Union(e) => e.kind(),
        }
    }
}

#[inherent]
impl AstNode for ScalarTypeExtension<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::ScalarTypeExtension
    }
}

#[inherent]
impl AstNode for ObjectTypeExtension<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::ObjectTypeExtension
    }
}

#[inherent]
impl AstNode for InterfaceTypeExtension<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::InterfaceTypeExtension
    }
}

#[inherent]
impl AstNode for UnionTypeExtension<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::UnionTypeExtension
    }
}

#[inherent]
impl AstNode for EnumTypeExtension<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::EnumTypeExtension
    }
}

#[inherent]
impl AstNode for InputObjectTypeExtension<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::InputObjectTypeExtension
    }
}
