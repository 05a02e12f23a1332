//! Queries: node state, leaf outputs, islands, levels.

use dagflow::{GraphBuilder, QueryError, RunConfig, RunError, State, Value};

use crate::common::{chain, diamond, key};

#[test]
fn state_of_unknown_node_is_not_found() {
    let g = chain();
    assert_eq!(
        g.state("missing").unwrap_err(),
        QueryError::NodeNotFound("missing".into())
    );
}

/// **Scenario**: Leaf outputs cover the full graph, even nodes disabled in the last run.
#[test]
fn leaf_outputs_ignore_run_filters() {
    let mut b = GraphBuilder::new();
    b.add_node("A", key(1))
        .add_node("B", key(0))
        .add_node("C", key(0))
        .add_edge("A", "B", [("key", "key")])
        .add_edge("A", "C", [("key", "key")]);
    let mut g = b.build().unwrap();
    g.run(&RunConfig::new().disable(["C"])).unwrap();

    let leaves = g.leaf_outputs();
    assert_eq!(leaves.len(), 2);
    assert_eq!(leaves["B"]["key"], Value::Int(1));
    assert_eq!(leaves["C"]["key"], Value::Int(0));
}

#[test]
fn islands_follow_working_set() {
    let mut b = GraphBuilder::new();
    for id in ["A", "B", "C", "D"] {
        b.add_node(id, State::new());
    }
    b.add_dependency("A", "B").add_dependency("C", "D");
    let g = b.build().unwrap();

    let all = g.islands(&RunConfig::new()).unwrap();
    assert_eq!(all.len(), 2);
    let only = g.islands(&RunConfig::new().enable(["A", "D"])).unwrap();
    assert_eq!(only, vec![vec!["A".to_string()], vec!["D".to_string()]]);
}

#[test]
fn levels_of_diamond() {
    let g = diamond();
    assert_eq!(
        g.levels(&RunConfig::new()).unwrap(),
        vec![vec!["A"], vec!["B", "C"], vec!["D"]]
    );
}

/// **Scenario**: levels() is a dry run; it leaves state untouched.
#[test]
fn levels_query_does_not_mutate() {
    let g = chain();
    let before = g.states();
    g.levels(&RunConfig::new().with_root_input("A", "key", 99))
        .unwrap();
    assert_eq!(g.states(), before);
}

/// **Scenario**: levels() on a cyclic graph reports the cycle instead of partial levels.
#[test]
fn levels_query_on_cycle_fails() {
    let mut b = GraphBuilder::new();
    b.add_node("A", key(1))
        .add_node("B", key(0))
        .add_node("C", key(0))
        .add_edge("A", "B", [("key", "key")])
        .add_edge("B", "C", [("key", "key")])
        .add_edge("C", "B", [("key", "key")]);
    let g = b.build().unwrap();
    assert!(matches!(
        g.levels(&RunConfig::new()),
        Err(RunError::Cycle(_))
    ));
}
