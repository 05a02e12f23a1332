//! Build failure cases: duplicate ids, dangling edges, type mismatches, duplicate edges.

use dagflow::{GraphBuilder, GraphSpec, State, StructuralError, ValueKind};

use crate::common::key;

#[test]
fn build_succeeds_for_matching_int_keys() {
    let mut b = GraphBuilder::new();
    b.add_node("A", key(10))
        .add_node("B", key(0))
        .add_edge("A", "B", [("key", "key")]);
    let g = b.build().expect("int -> int builds");
    assert_eq!(g.node_count(), 2);
    assert_eq!(g.edge_count(), 1);
}

#[test]
fn build_fails_on_kind_mismatch_naming_key_pair() {
    let mut b = GraphBuilder::new();
    b.add_node("A", key(10))
        .add_node("B", key("zero"))
        .add_edge("A", "B", [("key", "key")]);

    match b.build() {
        Err(err @ StructuralError::TypeMismatch { .. }) => {
            assert!(
                err.to_string().contains("key -> key"),
                "error should name the key pair: {}",
                err
            );
            if let StructuralError::TypeMismatch {
                src_kind, dst_kind, ..
            } = err
            {
                assert_eq!(src_kind, ValueKind::Int);
                assert_eq!(dst_kind, ValueKind::String);
            }
        }
        other => panic!("expected TypeMismatch, got {:?}", other),
    }
}

#[test]
fn build_fails_on_duplicate_edge() {
    let mut b = GraphBuilder::new();
    b.add_node("A", key(10))
        .add_node("B", key(0))
        .add_edge("A", "B", [("key", "key")])
        .add_edge("A", "B", [("key", "key")]);
    assert_eq!(
        b.build().unwrap_err(),
        StructuralError::DuplicateEdge {
            src: "A".into(),
            dst: "B".into()
        }
    );
}

/// **Scenario**: An ordering-only edge on a pair that already has a mapped edge folds into it.
#[test]
fn build_folds_dependency_edge_into_mapped_edge() {
    let mut b = GraphBuilder::new();
    b.add_node("B", key(0))
        .add_node("D", key(0))
        .add_edge("B", "D", [("key", "key")])
        .add_dependency("B", "D");
    let g = b.build().expect("redundant dependency edge is accepted");
    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.edges().next().unwrap().keys().len(), 1);
}

#[test]
fn build_fails_on_duplicate_node_id() {
    let mut b = GraphBuilder::new();
    b.add_node("A", key(1)).add_node("A", key(2));
    assert_eq!(
        b.build().unwrap_err(),
        StructuralError::DuplicateNode("A".into())
    );
}

#[test]
fn build_fails_when_edge_refers_to_unknown_destination() {
    let mut b = GraphBuilder::new();
    b.add_node("A", key(1)).add_edge("A", "missing", [("key", "key")]);
    match b.build() {
        Err(StructuralError::DanglingEdge { missing, .. }) => assert_eq!(missing, "missing"),
        other => panic!("expected DanglingEdge, got {:?}", other),
    }
}

/// **Scenario**: Reversed edges are distinct pairs; the cycle is only caught by a run.
#[test]
fn build_accepts_cycle_with_distinct_pairs() {
    let mut b = GraphBuilder::new();
    b.add_node("A", key(10))
        .add_node("B", key(0))
        .add_edge("A", "B", [("key", "key")])
        .add_edge("B", "A", [("key", "key")]);
    assert!(b.build().is_ok());
}

#[test]
fn build_fails_on_null_destination_value() {
    let json = r#"{
        "nodes": [
            {"id": "A", "state": {"key": 1}},
            {"id": "B", "state": {"key": null}}
        ],
        "edges": [{"src": "A", "dst": "B", "keys": {"key": "key"}}]
    }"#;
    let spec: GraphSpec = serde_json::from_str(json).unwrap();
    assert!(matches!(
        spec.build(),
        Err(StructuralError::TypeMismatch {
            dst_kind: ValueKind::Null,
            ..
        })
    ));
}

/// **Scenario**: A destination without the mapped key accepts any source kind.
#[test]
fn build_succeeds_when_destination_lacks_key() {
    let mut b = GraphBuilder::new();
    b.add_node("A", key(vec!["x", "y"]))
        .add_node("B", State::new())
        .add_edge("A", "B", [("key", "key")]);
    assert!(b.build().is_ok());
}
