// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use serde_json::{Value, json};

/// One procedure call with its positional arguments.
#[derive(Debug, Clone)]
pub struct Fixture {
    pub procedure: &'static str,
    pub args: Vec<Value>,
}

fn fixture(procedure: &'static str, args: Vec<Value>) -> Fixture {
    Fixture { procedure, args }
}

fn undirected(nodes: usize, edges: Value) -> Value {
    json!({"nodes": nodes, "edges": edges, "directed": false})
}

fn directed(nodes: usize, edges: Value) -> Value {
    json!({"nodes": nodes, "edges": edges})
}

pub fn fixtures() -> Vec<Fixture> {
    let strongly_connected = directed(
        5,
        json!([[0, 4], [1, 0], [1, 2], [2, 1], [2, 4], [3, 1], [3, 2], [4, 3]]),
    );

    vec![
        fixture(
            "traverse.bipartite_check",
            vec![undirected(
                9,
                json!([[0, 1], [1, 2], [1, 7], [2, 3], [3, 5], [4, 6], [4, 8], [7, 8]]),
            )],
        ),
        fixture(
            "traverse.bfs_cycle_check",
            vec![undirected(
                12,
                json!([
                    [0, 1], [0, 2], [0, 3], [1, 4], [1, 5], [4, 8],
                    [4, 9], [3, 6], [3, 7], [6, 10], [6, 11], [5, 9]
                ]),
            )],
        ),
        fixture(
            "traverse.dfs_cycle_check",
            vec![undirected(
                12,
                json!([
                    [0, 1], [0, 6], [0, 7], [1, 2], [1, 5], [2, 3],
                    [2, 4], [7, 8], [7, 11], [8, 9], [8, 10], [10, 11]
                ]),
            )],
        ),
        fixture(
            "traverse.min_passes",
            vec![json!([
                [-1, -9, 0, -1, 0],
                [-8, -3, -2, 9, -7],
                [2, 0, 0, -6, 0],
                [0, -7, -3, 5, -4]
            ])],
        ),
        fixture(
            "traverse.mine_distance",
            vec![json!(["OMOOX", "OXXOM", "OOOOO", "OXXXO", "OOMOO", "OXXMO"])],
        ),
        fixture(
            "traverse.jump_path",
            vec![json!([
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
            ])],
        ),
        fixture(
            "traverse.safe_route",
            vec![json!([
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
            ])],
        ),
        fixture(
            "traverse.max_cost_path",
            vec![
                undirected(
                    8,
                    json!([
                        [0, 6, 11], [0, 1, 5], [1, 6, 3], [1, 5, 5], [1, 2, 7],
                        [2, 3, -8], [3, 4, 10], [5, 2, -1], [5, 3, 9], [5, 4, 1],
                        [6, 5, 2], [7, 6, 9], [7, 1, 6]
                    ]),
                ),
                json!(0),
                json!(50),
            ],
        ),
        fixture(
            "traverse.transitive_closure",
            vec![directed(4, json!([[0, 2], [1, 0], [3, 1]]))],
        ),
        fixture(
            "traverse.bridges",
            vec![undirected(
                10,
                json!([[0, 2], [1, 2], [2, 3], [2, 4], [3, 4], [3, 5]]),
            )],
        ),
        fixture(
            "traverse.strong_connectivity",
            vec![strongly_connected.clone()],
        ),
        fixture(
            "traverse.strong_connectivity_one_pass",
            vec![strongly_connected],
        ),
        fixture(
            "traverse.dag_check",
            vec![directed(
                7,
                json!([[0, 1], [0, 3], [1, 2], [1, 3], [3, 2], [3, 4], [3, 0], [5, 6], [6, 3]]),
            )],
        ),
        fixture(
            "traverse.topological_sort",
            vec![directed(
                8,
                json!([[0, 6], [1, 2], [1, 4], [1, 6], [3, 0], [3, 4], [5, 1], [7, 0], [7, 1]]),
            )],
        ),
        fixture(
            "traverse.tree_check",
            vec![undirected(
                6,
                json!([[0, 1], [1, 2], [2, 3], [3, 4], [4, 5], [5, 0]]),
            )],
        ),
        fixture(
            "traverse.iterative_dfs",
            vec![undirected(
                13,
                json!([
                    [1, 2], [1, 7], [1, 8], [2, 3], [2, 6], [3, 4],
                    [3, 5], [8, 9], [8, 12], [9, 10], [9, 11]
                ]),
            )],
        ),
        fixture(
            "traverse.word_search",
            vec![
                json!(["DEMXB", "AOEPE", "DDCOD", "EBEDS", "CPYEN"]),
                json!("CODE"),
            ],
        ),
        fixture(
            "traverse.reachable_path",
            vec![
                directed(
                    8,
                    json!([
                        [0, 3], [1, 0], [1, 2], [1, 4], [2, 7], [3, 4],
                        [3, 5], [4, 3], [4, 6], [5, 6], [6, 7]
                    ]),
                ),
                json!(0),
                json!(7),
            ],
        ),
        fixture(
            "traverse.boggle",
            vec![
                json!(["MSEF", "RATD", "LONE"]),
                json!(["START", "NOTE", "SAND", "STONED"]),
            ],
        ),
        fixture(
            "traverse.replace_border_zeros",
            vec![json!([
                [1, 1, 1, 1, 0, 0, 1, 1, 0, 1],
                [1, 0, 0, 1, 1, 0, 1, 1, 1, 1],
                [1, 0, 0, 1, 1, 1, 1, 1, 1, 1],
                [1, 1, 1, 1, 0, 0, 1, 1, 0, 1],
                [1, 1, 1, 1, 0, 0, 0, 1, 0, 1],
                [1, 1, 0, 1, 1, 0, 1, 1, 0, 0],
                [1, 1, 0, 1, 1, 1, 1, 1, 1, 1],
                [1, 1, 0, 1, 1, 0, 0, 1, 0, 1],
                [1, 1, 1, 0, 1, 0, 1, 0, 0, 1],
                [1, 1, 1, 0, 1, 1, 1, 1, 1, 1]
            ])],
        ),
    ]
}
