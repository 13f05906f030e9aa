// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Registry end to end: JSON literals in, result rows out.

use anyhow::Result;
use serde_json::{Value, json};
use traverse_algo::{AlgoContext, AlgoResultRow, AlgorithmConfig, AlgorithmRegistry};
use traverse_common::TraversalError;

fn call(name: &str, args: Vec<Value>) -> Result<Vec<AlgoResultRow>> {
    AlgorithmRegistry::new().call(&AlgoContext::default(), name, args)
}

/// The single row of a one-row procedure.
fn single(name: &str, args: Vec<Value>) -> Result<Vec<Value>> {
    let mut rows = call(name, args)?;
    assert_eq!(rows.len(), 1, "{name} should yield one row");
    Ok(rows.remove(0).values)
}

#[test]
fn test_every_signature_starts_with_an_input_literal() {
    let registry = AlgorithmRegistry::new();
    for name in registry.list() {
        let signature = registry.get(name).unwrap().signature();
        let (arg, _) = signature.args[0];
        assert!(arg == "graph" || arg == "grid", "{name} starts with {arg}");
        assert!(!signature.yields.is_empty(), "{name} yields nothing");
    }
}

#[test]
fn test_min_passes_fixture() -> Result<()> {
    let grid = json!([
        [-1, -9, 0, -1, 0],
        [-8, -3, -2, 9, -7],
        [2, 0, 0, -6, 0],
        [0, -7, -3, 5, -4]
    ]);
    let values = single("traverse.min_passes", vec![grid])?;
    assert_eq!(values[0], json!(3));
    assert_eq!(values[1][0], json!([1, 9, 0, 1, 0]));
    Ok(())
}

#[test]
fn test_mine_distance_fixture() -> Result<()> {
    let maze = json!(["OMOOX", "OXXOM", "OOOOO", "OXXXO", "OOMOO", "OXXMO"]);
    let values = single("traverse.mine_distance", vec![maze])?;
    assert_eq!(
        values[0],
        json!([
            [1, 0, 1, 2, -1],
            [2, -1, -1, 1, 0],
            [3, 4, 3, 2, 1],
            [3, -1, -1, -1, 2],
            [2, 1, 0, 1, 2],
            [3, -1, -1, 0, 1]
        ])
    );
    Ok(())
}

#[test]
fn test_mine_distance_custom_symbols() -> Result<()> {
    let values = single(
        "traverse.mine_distance",
        vec![json!(["*.", ".."]), json!("*"), json!(".")],
    )?;
    assert_eq!(values[0], json!([[0, 1], [1, 2]]));
    Ok(())
}

#[test]
fn test_jump_path_fixture() -> Result<()> {
    let grid = json!([
        [4, 4, 6, 5, 5, 1, 1, 1, 7, 4],
        [3, 6, 2, 4, 6, 5, 7, 2, 6, 6],
        [1, 3, 6, 1, 1, 1, 7, 1, 4, 5],
        [7, 5, 6, 3, 1, 3, 3, 1, 1, 7],
        [3, 4, 6, 4, 7, 2, 6, 5, 4, 4],
        [3, 2, 5, 1, 2, 5, 1, 2, 3, 4],
        [4, 2, 2, 2, 5, 2, 3, 7, 7, 3],
        [7, 2, 4, 3, 5, 2, 2, 3, 6, 3],
        [5, 1, 4, 2, 6, 4, 6, 7, 3, 7],
        [1, 4, 1, 7, 5, 3, 6, 5, 3, 4]
    ]);
    let values = single("traverse.jump_path", vec![grid])?;
    assert_eq!(
        values[0],
        json!([[0, 0], [0, 4], [5, 4], [5, 2], [5, 7], [5, 9], [9, 9]])
    );
    assert_eq!(values[1], json!(6));
    Ok(())
}

#[test]
fn test_safe_route_fixture() -> Result<()> {
    let field = json!([
        [0, 1, 1, 1, 0, 1, 1, 1, 1, 1],
        [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        [1, 1, 1, 1, 1, 1, 1, 1, 0, 1],
        [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        [1, 1, 1, 1, 1, 0, 1, 1, 1, 1],
        [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        [1, 0, 1, 1, 1, 1, 1, 1, 1, 1],
        [1, 1, 1, 1, 1, 1, 1, 1, 1, 0],
        [1, 1, 1, 1, 1, 0, 1, 1, 1, 1],
        [1, 1, 1, 1, 1, 1, 1, 1, 1, 1]
    ]);
    assert_eq!(single("traverse.safe_route", vec![field])?, vec![json!(11)]);
    Ok(())
}

fn max_cost_graph() -> Value {
    json!({
        "nodes": 8,
        "directed": false,
        "edges": [
            [0, 6, 11], [0, 1, 5], [1, 6, 3], [1, 5, 5], [1, 2, 7], [2, 3, -8],
            [3, 4, 10], [5, 2, -1], [5, 3, 9], [5, 4, 1], [6, 5, 2], [7, 6, 9], [7, 1, 6]
        ]
    })
}

#[test]
fn test_max_cost_path_fixture() -> Result<()> {
    let values = single(
        "traverse.max_cost_path",
        vec![max_cost_graph(), json!(0), json!(50)],
    )?;
    assert_eq!(values, vec![json!(51)]);
    Ok(())
}

#[test]
fn test_max_cost_path_expansion_limit() {
    let err = call(
        "traverse.max_cost_path",
        vec![max_cost_graph(), json!(0), json!(50), json!(10)],
    )
    .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<TraversalError>(),
        Some(TraversalError::LimitExceeded { limit: 10, .. })
    ));
}

#[test]
fn test_max_cost_path_overflow() {
    let graph = json!({
        "nodes": 3,
        "directed": false,
        "edges": [[0, 1, i64::MAX], [1, 2, 1]]
    });
    let err = call("traverse.max_cost_path", vec![graph, json!(0), json!(0)]).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<TraversalError>(),
        Some(TraversalError::Overflow { .. })
    ));
}

#[test]
fn test_transitive_closure_fixture() -> Result<()> {
    let graph = json!({"nodes": 4, "edges": [[0, 2], [1, 0], [3, 1]]});
    let rows = call("traverse.transitive_closure", vec![graph])?;
    let reachable: Vec<Value> = rows.into_iter().map(|r| r.values[1].clone()).collect();
    assert_eq!(
        reachable,
        vec![json!([0, 2]), json!([0, 1, 2]), json!([2]), json!([0, 1, 2, 3])]
    );
    Ok(())
}

#[test]
fn test_bridges_fixture() -> Result<()> {
    let graph = json!({
        "nodes": 10,
        "directed": false,
        "edges": [[0, 2], [1, 2], [2, 3], [2, 4], [3, 4], [3, 5]]
    });
    let rows = call("traverse.bridges", vec![graph])?;
    let bridges: Vec<Value> = rows.into_iter().map(|r| json!(r.values)).collect();
    assert_eq!(bridges, vec![json!([0, 2]), json!([2, 1]), json!([3, 5])]);
    Ok(())
}

#[test]
fn test_strong_connectivity_variants() -> Result<()> {
    let graph = json!({
        "nodes": 5,
        "edges": [[0, 4], [1, 0], [1, 2], [2, 1], [2, 4], [3, 1], [3, 2], [4, 3]]
    });
    for name in [
        "traverse.strong_connectivity",
        "traverse.strong_connectivity_one_pass",
    ] {
        assert_eq!(single(name, vec![graph.clone()])?, vec![json!(true)]);
    }

    let path = json!({"nodes": 3, "edges": [[0, 1], [1, 2]]});
    assert_eq!(
        single("traverse.strong_connectivity_one_pass", vec![path])?,
        vec![json!(false)]
    );
    Ok(())
}

#[test]
fn test_dag_check_and_topological_sort() -> Result<()> {
    let cyclic = json!({
        "nodes": 7,
        "edges": [[0, 1], [0, 3], [1, 2], [1, 3], [3, 2], [3, 4], [3, 0], [5, 6], [6, 3]]
    });
    assert_eq!(
        single("traverse.dag_check", vec![cyclic.clone()])?,
        vec![json!(false), json!([3, 0])]
    );
    assert!(call("traverse.topological_sort", vec![cyclic]).is_err());

    let dag = json!({
        "nodes": 8,
        "edges": [[0, 6], [1, 2], [1, 4], [1, 6], [3, 0], [3, 4], [5, 1], [7, 0], [7, 1]]
    });
    let order: Vec<Value> = call("traverse.topological_sort", vec![dag])?
        .into_iter()
        .map(|r| r.values[0].clone())
        .collect();
    assert_eq!(order, vec![json!(7), json!(5), json!(3), json!(1), json!(4), json!(2), json!(0), json!(6)]);
    Ok(())
}

#[test]
fn test_cycle_checks_and_tree_check() -> Result<()> {
    let ring = json!({
        "nodes": 6,
        "directed": false,
        "edges": [[0, 1], [1, 2], [2, 3], [3, 4], [4, 5], [5, 0]]
    });
    for name in ["traverse.bfs_cycle_check", "traverse.dfs_cycle_check"] {
        let values = single(name, vec![ring.clone()])?;
        assert_eq!(values[0], json!(true));
        assert!(values[1].is_array());
    }
    assert_eq!(single("traverse.tree_check", vec![ring])?, vec![json!(false)]);

    let star = json!({"nodes": 4, "directed": false, "edges": [[0, 1], [0, 2], [0, 3]]});
    assert_eq!(
        single("traverse.bfs_cycle_check", vec![star.clone()])?,
        vec![json!(false), Value::Null]
    );
    assert_eq!(single("traverse.tree_check", vec![star])?, vec![json!(true)]);
    Ok(())
}

#[test]
fn test_bipartite_check() -> Result<()> {
    let square = json!({"nodes": 4, "directed": false, "edges": [[0, 1], [1, 2], [2, 3], [3, 0]]});
    let values = single("traverse.bipartite_check", vec![square])?;
    assert_eq!(values[0], json!(true));
    assert_eq!(values[1], json!({"0": 0, "1": 1, "2": 0, "3": 1}));

    let triangle = json!({"nodes": 3, "directed": false, "edges": [[0, 1], [1, 2], [2, 0]]});
    let values = single("traverse.bipartite_check", vec![triangle])?;
    assert_eq!(values, vec![json!(false), json!({})]);
    Ok(())
}

#[test]
fn test_iterative_dfs_from_source() -> Result<()> {
    let graph = json!({
        "nodes": 13,
        "directed": false,
        "edges": [[1, 2], [1, 7], [1, 8], [2, 3], [2, 6], [3, 4], [3, 5], [8, 9], [8, 12], [9, 10], [9, 11]]
    });
    let order: Vec<u64> = call("traverse.iterative_dfs", vec![graph, json!(8)])?
        .into_iter()
        .filter_map(|r| r.values[0].as_u64())
        .collect();
    assert_eq!(order, vec![8, 1, 2, 3, 4, 5, 6, 7, 9, 10, 11, 12]);
    Ok(())
}

#[test]
fn test_reachable_path() -> Result<()> {
    let graph = json!({
        "nodes": 8,
        "edges": [[0, 3], [1, 0], [1, 2], [1, 4], [2, 7], [3, 4], [3, 5], [4, 3], [4, 6], [5, 6], [6, 7]]
    });
    assert_eq!(
        single("traverse.reachable_path", vec![graph.clone(), json!(0), json!(7)])?,
        vec![json!(true), json!([0, 3, 4, 6, 7])]
    );
    assert_eq!(
        single("traverse.reachable_path", vec![graph.clone(), json!(7), json!(0)])?,
        vec![json!(false), Value::Null]
    );
    assert!(call("traverse.reachable_path", vec![graph, json!(0), json!(8)]).is_err());
    Ok(())
}

#[test]
fn test_word_search_and_boggle() -> Result<()> {
    let board = json!(["DEMXB", "AOEPE", "DDCOD", "EBEDS", "CPYEN"]);
    let rows = call("traverse.word_search", vec![board, json!("CODE")])?;
    assert_eq!(rows.len(), 8);
    assert_eq!(rows[0].values[0], json!([[2, 2], [1, 1], [0, 0], [0, 1]]));

    let rows = call(
        "traverse.boggle",
        vec![
            json!(["MSEF", "RATD", "LONE"]),
            json!(["START", "NOTE", "SAND", "STONED"]),
        ],
    )?;
    let words: Vec<Value> = rows.into_iter().map(|r| r.values[0].clone()).collect();
    assert_eq!(words, vec![json!("NOTE"), json!("SAND"), json!("STONED")]);
    Ok(())
}

#[test]
fn test_replace_border_zeros() -> Result<()> {
    let values = single(
        "traverse.replace_border_zeros",
        vec![json!([[0, 1, 1], [1, 1, 0], [1, 0, 0]])],
    )?;
    assert_eq!(values[0], json!([[1, 1, 1], [1, 1, 1], [1, 1, 1]]));
    assert_eq!(values[1], json!(4));
    Ok(())
}

#[test]
fn test_argument_validation() {
    // missing required source/target
    assert!(call("traverse.reachable_path", vec![json!({"nodes": 2})]).is_err());
    // wrong input kind
    assert!(call("traverse.bridges", vec![json!([[0, 1]])]).is_err());
    // edge outside the graph
    let err = call(
        "traverse.bridges",
        vec![json!({"nodes": 2, "edges": [[0, 5]]})],
    )
    .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<TraversalError>(),
        Some(TraversalError::InvalidEdge { dst: 5, .. })
    ));
    // ragged grid
    assert!(call("traverse.safe_route", vec![json!([[1, 1], [1]])]).is_err());
}

#[test]
fn test_context_limits() {
    let ctx = AlgoContext::new(AlgorithmConfig {
        max_vertices: 4,
        max_grid_cells: 4,
    });
    let registry = AlgorithmRegistry::new();
    assert!(
        registry
            .call(&ctx, "traverse.tree_check", vec![json!({"nodes": 5})])
            .is_err()
    );
    assert!(
        registry
            .call(&ctx, "traverse.safe_route", vec![json!([[1, 1, 1], [1, 1, 1]])])
            .is_err()
    );
    assert!(
        registry
            .call(&ctx, "traverse.safe_route", vec![json!([[1, 1], [1, 1]])])
            .is_ok()
    );
}
