//! Property-based tests for flatten/unflatten fidelity

use layerconf::config::{flatten, unflatten, Document, Node};
use layerconf::ConfigValue;
use proptest::prelude::*;

fn scalar() -> impl Strategy<Value = ConfigValue> {
    prop_oneof![
        "[a-zA-Z0-9/:._-]{0,16}".prop_map(ConfigValue::String),
        any::<bool>().prop_map(ConfigValue::Bool),
        any::<i64>().prop_map(ConfigValue::Integer),
        (-1.0e6f64..1.0e6).prop_map(ConfigValue::Float),
    ]
}

/// Documents whose tables are never empty, since an empty table has no
/// dotted-key representation.
fn document() -> impl Strategy<Value = Document> {
    let leaf = scalar().prop_map(Node::Scalar);
    let node = leaf.prop_recursive(3, 24, 4, |inner| {
        prop::collection::btree_map("[a-z_]{1,8}", inner, 1..4).prop_map(Node::Table)
    });
    prop::collection::btree_map("[a-z_]{1,8}", node, 0..5)
}

proptest! {
    #[test]
    fn test_unflatten_inverts_flatten(doc in document()) {
        prop_assert_eq!(unflatten(&flatten(&doc)), doc);
    }

    #[test]
    fn test_flatten_keys_have_no_leaf_prefix(doc in document()) {
        let flat = flatten(&doc);
        for key in flat.keys() {
            for other in flat.keys() {
                let prefix = format!("{}.", key);
                prop_assert!(!other.starts_with(&prefix));
            }
        }
    }
}
