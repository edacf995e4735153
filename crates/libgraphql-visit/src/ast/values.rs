use std::borrow::Cow;

use crate::ast::AstNode;
use crate::ast::Name;
use crate::ast::NodeKind;
use inherent::inherent;

// =========================================================
// Value enum
// =========================================================

/// A GraphQL input value.
///
/// Represents all possible GraphQL value literals as defined in
/// the
/// [Input Values](https://spec.graphql.org/September2025/#sec-Input-Values)
/// section of the spec, plus variable references.
#[derive(Clone, Debug, PartialEq)]
pub enum Value<'src> {
    Boolean(BooleanValue),
    Enum(EnumValue<'src>),
    Float(FloatValue),
    Int(IntValue),
    List(ListValue<'src>),
    Null(NullValue),
    Object(ObjectValue<'src>),
    String(StringValue<'src>),
    Variable(Variable<'src>),
}

// =========================================================
// Scalar value types
// =========================================================

/// A GraphQL integer value.
///
/// Per the
/// [Int Value](https://spec.graphql.org/September2025/#sec-Int-Value)
/// section of the spec, Int is a signed 32-bit integer.
#[derive(Clone, Debug, PartialEq)]
pub struct IntValue {
    pub value: i32,
}

impl IntValue {
    /// Widen to `i64` (infallible).
    pub fn as_i64(&self) -> i64 {
        self.value as i64
    }
}

/// A GraphQL float value (double-precision, IEEE 754).
///
/// See the
/// [Float Value](https://spec.graphql.org/September2025/#sec-Float-Value)
/// section of the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatValue {
    pub value: f64,
}

/// A GraphQL string value.
///
/// Contains the processed string after escape-sequence
/// resolution and block-string indentation stripping, both
/// performed by the parser.
///
/// See the
/// [String Value](https://spec.graphql.org/September2025/#sec-String-Value)
/// section of the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct StringValue<'src> {
    pub value: Cow<'src, str>,
}

/// A GraphQL boolean value (`true` or `false`).
///
/// See the
/// [Boolean Value](https://spec.graphql.org/September2025/#sec-Boolean-Value)
/// section of the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct BooleanValue {
    pub value: bool,
}

/// A GraphQL null literal.
///
/// See the
/// [Null Value](https://spec.graphql.org/September2025/#sec-Null-Value)
/// section of the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct NullValue;

/// A GraphQL enum value (an unquoted name that is not `true`,
/// `false`, or `null`).
///
/// See the
/// [Enum Value](https://spec.graphql.org/September2025/#sec-Enum-Value)
/// section of the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue<'src> {
    pub name: Name<'src>,
}

// =========================================================
// Variable references
// =========================================================

/// A variable reference in a value position (e.g. `$id`).
///
/// See
/// [Variables](https://spec.graphql.org/September2025/#sec-Language.Variables)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable<'src> {
    pub name: Name<'src>,
}

// =========================================================
// Composite value types
// =========================================================

/// A GraphQL list value (e.g. `[1, 2, 3]`).
///
/// See the
/// [List Value](https://spec.graphql.org/September2025/#sec-List-Value)
/// section of the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct ListValue<'src> {
    pub items: Vec<Value<'src>>,
}

/// A GraphQL input object value (e.g. `{ depth: 3 }`).
///
/// See the
/// [Input Object Values](https://spec.graphql.org/September2025/#sec-Input-Object-Values)
/// section of the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectValue<'src> {
    pub fields: Vec<ObjectField<'src>>,
}

/// A single `name: value` entry within an [`ObjectValue`].
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectField<'src> {
    pub name: Name<'src>,
    pub value: Value<'src>,
}

// =========================================================
// Kind tags
// =========================================================

#[inherent]
impl AstNode for Value<'_> {
    pub fn kind(&self) -> NodeKind {
        match self {
            Value::Boolean(v) => v.kind(),
            Value::Enum(v) => v.kind(),
            Value::Float(v) => v.kind(),
            Value::Int(v) => v.kind(),
            Value::List(v) => v.kind(),
            Value::Null(v) => v.kind(),
            Value::Object(v) => v.kind(),
            Value::String(v) => v.kind(),
            Value::Variable(v) => v.kind(),
        }
    }
}

#[inherent]
impl AstNode for IntValue {
    pub fn kind(&self) -> NodeKind {
        NodeKind::IntValue
    }
}

#[inherent]
impl AstNode for FloatValue {
    pub fn kind(&self) -> NodeKind {
        NodeKind::FloatValue
    }
}

#[inherent]
impl AstNode for StringValue<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::StringValue
    }
}

#[inherent]
impl AstNode for BooleanValue {
    pub fn kind(&self) -> NodeKind {
        NodeKind::BooleanValue
    }
}

#[inherent]
impl AstNode for NullValue {
    pub fn kind(&self) -> NodeKind {
        NodeKind::NullValue
    }
}

#[inherent]
impl AstNode for EnumValue<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::EnumValue
    }
}

#[inherent]
impl AstNode for Variable<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::Variable
    }
}

#[inherent]
impl AstNode for ListValue<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::ListValue
    }
}

#[inherent]
impl AstNode for ObjectValue<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::ObjectValue
    }
}

#[inherent]
impl AstNode for ObjectField<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::ObjectField
    }
}
