//! Hand-built fixture documents for traversal tests.
//!
//! ASTs normally come from a parser; tests build them by hand so
//! that the expected visitation sequence can be derived directly
//! from the fixture's shape.

use std::borrow::Cow;

use crate::ast::Alias;
use crate::ast::Argument;
use crate::ast::Arguments;
use crate::ast::ArgumentsDefinition;
use crate::ast::BooleanValue;
use crate::ast::Definition;
use crate::ast::Description;
use crate::ast::Directive;
use crate::ast::Directives;
use crate::ast::Document;
use crate::ast::EnumTypeExtension;
use crate::ast::EnumValue;
use crate::ast::Field;
use crate::ast::FieldDefinition;
use crate::ast::FieldsDefinition;
use crate::ast::FloatValue;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::ImplementsInterfaces;
use crate::ast::InlineFragment;
use crate::ast::InputValueDefinition;
use crate::ast::IntValue;
use crate::ast::ListType;
use crate::ast::ListValue;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::NonNullType;
use crate::ast::NullValue;
use crate::ast::ObjectField;
use crate::ast::ObjectTypeDefinition;
use crate::ast::ObjectValue;
use crate::ast::OperationDefinition;
use crate::ast::OperationKind;
use crate::ast::RootOperationTypeDefinition;
use crate::ast::SchemaDefinition;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::ast::StringValue;
use crate::ast::TypeAnnotation;
use crate::ast::TypeCondition;
use crate::ast::TypeDefinition;
use crate::ast::TypeExtension;
use crate::ast::Value;
use crate::ast::Variable;
use crate::ast::VariableDefinition;
use crate::ast::VariablesDefinition;

// =========================================================
// Small node constructors
// =========================================================

pub(crate) fn name(value: &'static str) -> Name<'static> {
    Name {
        value: Cow::Borrowed(value),
    }
}

pub(crate) fn named_type(type_name: &'static str) -> NamedType<'static> {
    NamedType {
        name: name(type_name),
    }
}

pub(crate) fn directives(names: &[&'static str]) -> Directives<'static> {
    Directives {
        items: names
            .iter()
            .map(|directive_name| Directive {
                name: name(directive_name),
                arguments: None,
            })
            .collect(),
    }
}

pub(crate) fn int_argument(
    argument_name: &'static str,
    value: i32,
) -> Argument<'static> {
    Argument {
        name: name(argument_name),
        value: Value::Int(IntValue { value }),
    }
}

pub(crate) fn leaf_field(field_name: &'static str) -> Field<'static> {
    Field {
        alias: None,
        name: name(field_name),
        arguments: None,
        directives: None,
        selection_set: None,
    }
}

pub(crate) fn operation(
    operation_name: Option<&'static str>,
    selections: Vec<Selection<'static>>,
) -> OperationDefinition<'static> {
    OperationDefinition {
        operation: OperationKind::Query,
        name: operation_name.map(name),
        variables_definition: None,
        directives: None,
        selection_set: SelectionSet { selections },
    }
}

// =========================================================
// Executable fixtures
// =========================================================

/// `query GetUser { user: account(id: 4) @log { name } }`
pub(crate) fn aliased_account_query() -> Document<'static> {
    Document {
        definitions: vec![Definition::OperationDefinition(operation(
            Some("GetUser"),
            vec![Selection::Field(Field {
                alias: Some(Alias { name: name("user") }),
                name: name("account"),
                arguments: Some(Arguments {
                    items: vec![int_argument("id", 4)],
                }),
                directives: Some(directives(&["log"])),
                selection_set: Some(SelectionSet {
                    selections: vec![Selection::Field(leaf_field("name"))],
                }),
            })],
        ))],
    }
}

/// `{ account(id: 4) { name } }` — no alias, no directives, no
/// operation name.
pub(crate) fn bare_account_query() -> Document<'static> {
    Document {
        definitions: vec![Definition::OperationDefinition(operation(
            None,
            vec![Selection::Field(Field {
                alias: None,
                name: name("account"),
                arguments: Some(Arguments {
                    items: vec![int_argument("id", 4)],
                }),
                directives: None,
                selection_set: Some(SelectionSet {
                    selections: vec![Selection::Field(leaf_field("name"))],
                }),
            })],
        ))],
    }
}

/// ```graphql
/// query Q($v: Boolean = false) {
///   me {
///     ...Parts @skip(if: $v)
///     ... on User { id }
///   }
/// }
/// fragment Parts on User @internal { email }
/// ```
pub(crate) fn fragment_query() -> Document<'static> {
    Document {
        definitions: vec![
            Definition::OperationDefinition(OperationDefinition {
                operation: OperationKind::Query,
                name: Some(name("Q")),
                variables_definition: Some(VariablesDefinition {
                    items: vec![VariableDefinition {
                        variable: Variable { name: name("v") },
                        var_type: TypeAnnotation::Named(named_type(
                            "Boolean",
                        )),
                        default_value: Some(Value::Boolean(BooleanValue {
                            value: false,
                        })),
                        directives: None,
                    }],
                }),
                directives: None,
                selection_set: SelectionSet {
                    selections: vec![Selection::Field(Field {
                        alias: None,
                        name: name("me"),
                        arguments: None,
                        directives: None,
                        selection_set: Some(SelectionSet {
                            selections: vec![
                                Selection::FragmentSpread(FragmentSpread {
                                    name: name("Parts"),
                                    directives: Some(Directives {
                                        items: vec![Directive {
                                            name: name("skip"),
                                            arguments: Some(Arguments {
                                                items: vec![Argument {
                                                    name: name("if"),
                                                    value: Value::Variable(
                                                        Variable {
                                                            name: name("v"),
                                                        },
                                                    ),
                                                }],
                                            }),
                                        }],
                                    }),
                                }),
                                Selection::InlineFragment(InlineFragment {
                                    type_condition: Some(TypeCondition {
                                        named_type: named_type("User"),
                                    }),
                                    directives: None,
                                    selection_set: SelectionSet {
                                        selections: vec![Selection::Field(
                                            leaf_field("id"),
                                        )],
                                    },
                                }),
                            ],
                        }),
                    })],
                },
            }),
            Definition::FragmentDefinition(FragmentDefinition {
                name: name("Parts"),
                type_condition: TypeCondition {
                    named_type: named_type("User"),
                },
                directives: Some(directives(&["internal"])),
                selection_set: SelectionSet {
                    selections: vec![Selection::Field(leaf_field("email"))],
                },
            }),
        ],
    }
}

/// `{ a { b } }`
pub(crate) fn nested_two_field_query() -> Document<'static> {
    Document {
        definitions: vec![Definition::OperationDefinition(operation(
            None,
            vec![Selection::Field(Field {
                alias: None,
                name: name("a"),
                arguments: None,
                directives: None,
                selection_set: Some(SelectionSet {
                    selections: vec![Selection::Field(leaf_field("b"))],
                }),
            })],
        ))],
    }
}

/// A document of `count` trivial anonymous operations:
/// `{ f } { f } ...`
pub(crate) fn many_operations(count: usize) -> Document<'static> {
    Document {
        definitions: (0..count)
            .map(|_| {
                Definition::OperationDefinition(operation(
                    None,
                    vec![Selection::Field(leaf_field("f"))],
                ))
            })
            .collect(),
    }
}

/// A field whose arguments cover every value kind:
/// `all(i: 4, f: 0.5, s: "x", b: true, n: null, e: RED,
/// l: [1, $v], o: { k: 1 })`
pub(crate) fn value_kinds_field() -> Field<'static> {
    Field {
        alias: None,
        name: name("all"),
        arguments: Some(Arguments {
            items: vec![
                int_argument("i", 4),
                Argument {
                    name: name("f"),
                    value: Value::Float(FloatValue { value: 0.5 }),
                },
                Argument {
                    name: name("s"),
                    value: Value::String(StringValue {
                        value: Cow::Borrowed("x"),
                    }),
                },
                Argument {
                    name: name("b"),
                    value: Value::Boolean(BooleanValue { value: true }),
                },
                Argument {
                    name: name("n"),
                    value: Value::Null(NullValue),
                },
                Argument {
                    name: name("e"),
                    value: Value::Enum(EnumValue { name: name("RED") }),
                },
                Argument {
                    name: name("l"),
                    value: Value::List(ListValue {
                        items: vec![
                            Value::Int(IntValue { value: 1 }),
                            Value::Variable(Variable { name: name("v") }),
                        ],
                    }),
                },
                Argument {
                    name: name("o"),
                    value: Value::Object(ObjectValue {
                        fields: vec![ObjectField {
                            name: name("k"),
                            value: Value::Int(IntValue { value: 1 }),
                        }],
                    }),
                },
            ],
        }),
        directives: None,
        selection_set: None,
    }
}

/// A field with three arguments, the middle one named "bad".
pub(crate) fn three_argument_field() -> Document<'static> {
    Document {
        definitions: vec![Definition::OperationDefinition(operation(
            None,
            vec![Selection::Field(Field {
                alias: None,
                name: name("lookup"),
                arguments: Some(Arguments {
                    items: vec![
                        int_argument("ok", 1),
                        int_argument("bad", 2),
                        int_argument("after", 3),
                    ],
                }),
                directives: None,
                selection_set: None,
            })],
        ))],
    }
}

// =========================================================
// Schema fixtures
// =========================================================

/// ```graphql
/// schema { query: Query }
/// "An object."
/// type Query implements Node @cache {
///   hero(limit: Int = 10): [Character]!
/// }
/// extend enum Episode @internal
/// ```
pub(crate) fn schema_document() -> Document<'static> {
    Document {
        definitions: vec![
            Definition::SchemaDefinition(SchemaDefinition {
                description: None,
                directives: None,
                root_operation_type_definitions: vec![
                    RootOperationTypeDefinition {
                        operation: OperationKind::Query,
                        named_type: named_type("Query"),
                    },
                ],
            }),
            Definition::TypeDefinition(TypeDefinition::Object(
                ObjectTypeDefinition {
                    description: Some(Description {
                        value: Cow::Borrowed("An object."),
                    }),
                    name: name("Query"),
                    implements_interfaces: Some(ImplementsInterfaces {
                        items: vec![named_type("Node")],
                    }),
                    directives: Some(directives(&["cache"])),
                    fields_definition: Some(FieldsDefinition {
                        items: vec![FieldDefinition {
                            description: None,
                            name: name("hero"),
                            arguments_definition: Some(
                                ArgumentsDefinition {
                                    items: vec![InputValueDefinition {
                                        description: None,
                                        name: name("limit"),
                                        value_type: TypeAnnotation::Named(
                                            named_type("Int"),
                                        ),
                                        default_value: Some(Value::Int(
                                            IntValue { value: 10 },
                                        )),
                                        directives: None,
                                    }],
                                },
                            ),
                            field_type: TypeAnnotation::NonNull(
                                NonNullType {
                                    wrapped_type: Box::new(
                                        TypeAnnotation::List(ListType {
                                            element_type: Box::new(
                                                TypeAnnotation::Named(
                                                    named_type("Character"),
                                                ),
                                            ),
                                        }),
                                    ),
                                },
                            ),
                            directives: None,
                        }],
                    }),
                },
            )),
            Definition::TypeExtension(TypeExtension::Enum(
                EnumTypeExtension {
                    name: name("Episode"),
                    directives: Some(directives(&["internal"])),
                    enum_values_definition: None,
                },
            )),
        ],
    }
}
