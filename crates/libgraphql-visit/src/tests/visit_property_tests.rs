//! Property tests: for arbitrary selection trees, the engine's
//! dispatch sequence equals an independently computed pre-order,
//! left-to-right walk, and repeated traversals are
//! order-identical.

use std::borrow::Cow;

use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;

use crate::ast::Alias;
use crate::ast::Definition;
use crate::ast::Document;
use crate::ast::Field;
use crate::ast::Name;
use crate::ast::NodeKind;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::tests::fixtures::operation;
use crate::tests::recording::record;

fn owned_name(value: String) -> Name<'static> {
    Name {
        value: Cow::Owned(value),
    }
}

fn arb_field() -> impl Strategy<Value = Field<'static>> {
    let leaf = ("[a-z]{1,8}", option::of("[a-z]{1,8}")).prop_map(
        |(field_name, alias)| Field {
            alias: alias.map(|a| Alias {
                name: owned_name(a),
            }),
            name: owned_name(field_name),
            arguments: None,
            directives: None,
            selection_set: None,
        },
    );
    leaf.prop_recursive(4, 24, 3, |inner| {
        ("[a-z]{1,8}", option::of("[a-z]{1,8}"), vec(inner, 1..4))
            .prop_map(|(field_name, alias, children)| Field {
                alias: alias.map(|a| Alias {
                    name: owned_name(a),
                }),
                name: owned_name(field_name),
                arguments: None,
                directives: None,
                selection_set: Some(SelectionSet {
                    selections: children
                        .into_iter()
                        .map(Selection::Field)
                        .collect(),
                }),
            })
    })
}

fn arb_document() -> impl Strategy<Value = Document<'static>> {
    vec(arb_field(), 1..4).prop_map(|fields| Document {
        definitions: vec![Definition::OperationDefinition(operation(
            None,
            fields.into_iter().map(Selection::Field).collect(),
        ))],
    })
}

/// Straight-line pre-order over the restricted shape
/// `arb_field` generates (alias?, name, selection set of
/// fields), written independently of the `traverse` module.
fn push_expected_field_events(field: &Field<'_>, out: &mut Vec<NodeKind>) {
    out.push(NodeKind::Field);
    if field.alias.is_some() {
        out.push(NodeKind::Alias);
        out.push(NodeKind::Name);
    }
    out.push(NodeKind::Name);
    if let Some(selection_set) = &field.selection_set {
        out.push(NodeKind::SelectionSet);
        for selection in &selection_set.selections {
            if let Selection::Field(child) = selection {
                push_expected_field_events(child, out);
            }
        }
    }
}

fn expected_events(document: &Document<'_>) -> Vec<NodeKind> {
    let mut out = vec![NodeKind::Document];
    for definition in &document.definitions {
        if let Definition::OperationDefinition(op) = definition {
            out.push(NodeKind::OperationDefinition);
            out.push(NodeKind::SelectionSet);
            for selection in &op.selection_set.selections {
                if let Selection::Field(field) = selection {
                    push_expected_field_events(field, &mut out);
                }
            }
        }
    }
    out
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(future)
}

proptest! {
    /// The engine visits every node exactly once, in an order
    /// equal to a pre-order, left-to-right traversal of the
    /// document.
    #[test]
    fn dispatch_sequence_is_preorder(document in arb_document()) {
        let events = block_on(record(&document));
        prop_assert_eq!(events, expected_events(&document));
    }

    /// Two traversals with independent contexts produce
    /// identical sequences.
    #[test]
    fn traversal_is_repeatable(document in arb_document()) {
        let first = block_on(record(&document));
        let second = block_on(record(&document));
        prop_assert_eq!(first, second);
    }
}
