//! Tests for the AST model's structural surface: kind tags and
//! the document definition filters.

use crate::ast::IntValue;
use crate::ast::Node;
use crate::ast::NodeKind;
use crate::tests::fixtures;

/// Verifies that `kind()` is available both on concrete nodes
/// and on `Node` references, and that the two agree.
#[test]
fn kind_tags_agree_between_nodes_and_node_refs() {
    let field = fixtures::leaf_field("f");

    assert_eq!(field.kind(), NodeKind::Field);
    assert_eq!(Node::Field(&field).kind(), NodeKind::Field);
    assert_eq!(field.name.kind(), NodeKind::Name);
}

/// Verifies the kind name surface used in diagnostics.
#[test]
fn kind_names_render_as_grammar_productions() {
    assert_eq!(NodeKind::OperationDefinition.as_str(), "OperationDefinition");
    assert_eq!(
        NodeKind::InputObjectTypeExtension.to_string(),
        "InputObjectTypeExtension",
    );
}

/// Verifies that a mixed document filters into its executable
/// and type-system halves without reordering.
#[test]
fn document_definition_filters_split_mixed_documents() {
    let mut mixed = fixtures::fragment_query();
    mixed
        .definitions
        .extend(fixtures::schema_document().definitions);

    assert_eq!(mixed.definitions.len(), 5);
    assert_eq!(mixed.executable_definitions().count(), 2);
    assert_eq!(mixed.schema_definitions().count(), 3);
}

/// Verifies the `IntValue` widening helper.
#[test]
fn int_values_widen_losslessly() {
    let value = IntValue { value: i32::MIN };

    assert_eq!(value.as_i64(), i64::from(i32::MIN));
}
