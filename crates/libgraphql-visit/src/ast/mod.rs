//! AST node model for GraphQL documents.
//!
//! This module defines the closed set of node kinds forming the
//! GraphQL document grammar: executable documents, type-system
//! (SDL) documents, and mixed documents that combine both. All
//! node types are parameterized over a `'src` lifetime that
//! borrows strings from the source text via
//! [`Cow<'src, str>`](std::borrow::Cow).
//!
//! Nodes are plain data: public fields, typed child slots, no
//! behavior beyond the [`AstNode`] kind-tag accessor. They are
//! produced once by an external parser and are immutable for the
//! lifetime of a traversal; the traversal engine never allocates,
//! deletes, or reorders nodes.
//!
//! Structural conventions:
//!
//! - Optional children are `Option<...>`; `None` ("not present")
//!   is distinct from a present plural wrapper whose `items` list
//!   is empty.
//! - Plural wrapper kinds ([`Arguments`], [`Directives`],
//!   [`VariablesDefinition`], [`FieldsDefinition`], ...) hold
//!   their elements in source order, which is also traversal
//!   order.
//! - Heterogeneous child slots use sum types ([`Definition`],
//!   [`Selection`], [`Value`], [`TypeAnnotation`],
//!   [`TypeDefinition`], [`TypeExtension`]).
//! - Nodes own their children exclusively (a tree, not a graph)
//!   and hold no parent back-references; traversal carries
//!   ancestry implicitly on the call stack.

mod ast_node;
mod document;
mod executable_defs;
mod node;
mod node_kind;
mod shared_nodes;
mod type_annotation;
mod type_extensions;
mod type_system_defs;
mod values;

pub use ast_node::AstNode;
pub use document::Definition;
pub use document::Document;
pub use executable_defs::Field;
pub use executable_defs::FragmentDefinition;
pub use executable_defs::FragmentSpread;
pub use executable_defs::InlineFragment;
pub use executable_defs::OperationDefinition;
pub use executable_defs::OperationKind;
pub use executable_defs::Selection;
pub use executable_defs::SelectionSet;
pub use executable_defs::VariableDefinition;
pub use executable_defs::VariablesDefinition;
pub use node::Node;
pub use node_kind::NodeKind;
pub use shared_nodes::Alias;
pub use shared_nodes::Argument;
pub use shared_nodes::Arguments;
pub use shared_nodes::Comment;
pub use shared_nodes::Description;
pub use shared_nodes::Directive;
pub use shared_nodes::Directives;
pub use shared_nodes::Name;
pub use shared_nodes::TypeCondition;
pub use type_annotation::ListType;
pub use type_annotation::NamedType;
pub use type_annotation::NonNullType;
pub use type_annotation::TypeAnnotation;
pub use type_extensions::EnumTypeExtension;
pub use type_extensions::InputObjectTypeExtension;
pub use type_extensions::InterfaceTypeExtension;
pub use type_extensions::ObjectTypeExtension;
pub use type_extensions::ScalarTypeExtension;
pub use type_extensions::TypeExtension;
pub use type_extensions::UnionTypeExtension;
pub use type_system_defs::ArgumentsDefinition;
pub use type_system_defs::DirectiveDefinition;
pub use type_system_defs::DirectiveLocation;
pub use type_system_defs::DirectiveLocations;
pub use type_system_defs::EnumTypeDefinition;
pub use type_system_defs::EnumValueDefinition;
pub use type_system_defs::EnumValuesDefinition;
pub use type_system_defs::FieldDefinition;
pub use type_system_defs::FieldsDefinition;
pub use type_system_defs::ImplementsInterfaces;
pub use type_system_defs::InputFieldsDefinition;
pub use type_system_defs::InputObjectTypeDefinition;
pub use type_system_defs::InputValueDefinition;
pub use type_system_defs::InterfaceTypeDefinition;
pub use type_system_defs::ObjectTypeDefinition;
pub use type_system_defs::RootOperationTypeDefinition;
pub use type_system_defs::ScalarTypeDefinition;
pub use type_system_defs::SchemaDefinition;
pub use type_system_defs::TypeDefinition;
pub use type_system_defs::UnionMemberTypes;
pub use type_system_defs::UnionTypeDefinition;
pub use values::BooleanValue;
pub use values::EnumValue;
pub use values::FloatValue;
pub use values::IntValue;
pub use values::ListValue;
pub use values::NullValue;
pub use values::ObjectField;
pub use values::ObjectValue;
pub use values::StringValue;
pub use values::Value;
pub use values::Variable;
