// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Named procedure interface over the traversal policies.
//!
//! Procedures are registered with `AlgorithmRegistry` and invoked by name
//! (`traverse.<policy>`) with positional JSON arguments. The first argument
//! is always the input literal:
//!
//! - graph: `{"nodes": n, "edges": [[u, v], [u, v, w], ...], "directed": bool}`
//!   (`directed` defaults to `true`)
//! - integer grid: `[[1, 0, -1], ...]`
//! - character grid: `["MSEF", "RATD", ...]`, one string per row

use crate::algo::AlgorithmConfig;
use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use serde_json::Value;
use traverse_common::{Cell, Graph, GraphBuilder, Grid, TraversalError};

/// Procedure signature for documentation and validation.
#[derive(Debug, Clone)]
pub struct ProcedureSignature {
    /// Required arguments: (name, type)
    pub args: Vec<(&'static str, ValueType)>,
    /// Optional arguments: (name, type, default)
    pub optional_args: Vec<(&'static str, ValueType, Value)>,
    /// Output columns: (name, type)
    pub yields: Vec<(&'static str, ValueType)>,
}

impl ProcedureSignature {
    /// Validate arguments against signature and fill defaults for optional args.
    pub fn validate_args(&self, mut args: Vec<Value>) -> Result<Vec<Value>> {
        let required = self.args.len();
        let total = required + self.optional_args.len();

        if args.len() < required {
            return Err(anyhow!(
                "Too few arguments. Expected at least {}, got {}",
                required,
                args.len()
            ));
        }
        if args.len() > total {
            return Err(anyhow!(
                "Too many arguments. Expected at most {}, got {}",
                total,
                args.len()
            ));
        }

        for ((name, ty), value) in self.args.iter().zip(&args) {
            if !ty.matches(value) {
                return Err(anyhow!(
                    "Invalid type for argument '{}'. Expected {:?}, got {}",
                    name,
                    ty,
                    value
                ));
            }
        }

        for (i, (name, ty, default)) in self.optional_args.iter().enumerate() {
            match args.get(required + i) {
                Some(value) if !ty.matches(value) => {
                    return Err(anyhow!(
                        "Invalid type for optional argument '{}'. Expected {:?}, got {}",
                        name,
                        ty,
                        value
                    ));
                }
                Some(_) => {}
                None => args.push(default.clone()),
            }
        }

        Ok(args)
    }

    /// Column names in output order.
    pub fn columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.yields.iter().map(|(name, _)| *name)
    }
}

/// Value types for procedure signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Int,
    String,
    Bool,
    List,
    Map,
    /// Graph literal object.
    Graph,
    /// Grid literal: nested integer rows or one string per row.
    Grid,
    /// `[row, col]` pair.
    Cell,
    Any,
}

impl ValueType {
    pub fn matches(&self, val: &Value) -> bool {
        match self {
            ValueType::Int => val.is_i64() || val.is_u64(),
            ValueType::String => val.is_string(),
            ValueType::Bool => val.is_boolean(),
            ValueType::List => val.is_array(),
            ValueType::Map => val.is_object(),
            ValueType::Graph => val.get("nodes").is_some_and(Value::is_u64),
            ValueType::Grid => val.is_array(),
            ValueType::Cell => val
                .as_array()
                .is_some_and(|pair| pair.len() == 2 && pair.iter().all(Value::is_u64)),
            ValueType::Any => true,
        }
    }
}

/// Result row from procedure execution.
#[derive(Debug, Clone, PartialEq)]
pub struct AlgoResultRow {
    /// Column values in order matching `yields`.
    pub values: Vec<Value>,
}

/// Trait for named procedures.
///
/// Implement this to expose a policy through the registry.
pub trait AlgoProcedure: Send + Sync {
    /// Procedure name (e.g., "traverse.bridges").
    fn name(&self) -> &str;

    /// Procedure signature for validation and documentation.
    fn signature(&self) -> ProcedureSignature;

    /// Execute the procedure with given arguments.
    fn execute(&self, ctx: &AlgoContext, args: Vec<Value>) -> Result<Vec<AlgoResultRow>>;
}

/// Execution context for procedures.
#[derive(Debug, Clone, Default)]
pub struct AlgoContext {
    pub config: AlgorithmConfig,
}

impl AlgoContext {
    pub fn new(config: AlgorithmConfig) -> Self {
        Self { config }
    }
}

/// A policy input that can be materialized from the first procedure argument.
pub trait ProcedureInput: Sized {
    /// Signature type of the input argument.
    const VALUE_TYPE: ValueType;
    /// Argument name shown in errors and signatures.
    const ARG_NAME: &'static str;

    fn from_arg(value: &Value, config: &AlgorithmConfig) -> Result<Self>;
}

#[derive(Deserialize)]
struct GraphLiteral {
    nodes: usize,
    #[serde(default)]
    edges: Vec<Vec<i64>>,
    #[serde(default = "default_directed")]
    directed: bool,
}

fn default_directed() -> bool {
    true
}

fn node_id(raw: i64, edge: usize) -> Result<u32> {
    u32::try_from(raw).map_err(|_| {
        invalid_argument("graph", format!("edge {edge} has node id {raw} out of range")).into()
    })
}

impl ProcedureInput for Graph {
    const VALUE_TYPE: ValueType = ValueType::Graph;
    const ARG_NAME: &'static str = "graph";

    fn from_arg(value: &Value, config: &AlgorithmConfig) -> Result<Self> {
        let literal = GraphLiteral::deserialize(value).context("Malformed graph literal")?;
        if literal.nodes > config.max_vertices {
            return Err(TraversalError::LimitExceeded {
                what: "graph vertices".to_string(),
                limit: config.max_vertices,
            }
            .into());
        }

        let mut builder = if literal.directed {
            GraphBuilder::directed(literal.nodes)
        } else {
            GraphBuilder::undirected(literal.nodes)
        };
        for (i, edge) in literal.edges.iter().enumerate() {
            builder = match edge.as_slice() {
                &[src, dst] => builder.edge(node_id(src, i)?, node_id(dst, i)?),
                &[src, dst, weight] => {
                    builder.weighted_edge(node_id(src, i)?, node_id(dst, i)?, weight)
                }
                _ => {
                    return Err(invalid_argument(
                        "graph",
                        format!("edge {i} must be [src, dst] or [src, dst, weight]"),
                    )
                    .into());
                }
            };
        }
        Ok(builder.build()?)
    }
}

fn check_grid_size(cells: usize, config: &AlgorithmConfig) -> Result<()> {
    if cells > config.max_grid_cells {
        return Err(TraversalError::LimitExceeded {
            what: "grid cells".to_string(),
            limit: config.max_grid_cells,
        }
        .into());
    }
    Ok(())
}

impl ProcedureInput for Grid<i64> {
    const VALUE_TYPE: ValueType = ValueType::Grid;
    const ARG_NAME: &'static str = "grid";

    fn from_arg(value: &Value, config: &AlgorithmConfig) -> Result<Self> {
        let rows = Vec::<Vec<i64>>::deserialize(value).context("Malformed integer grid")?;
        check_grid_size(rows.iter().map(Vec::len).sum(), config)?;
        Ok(Grid::from_rows(rows)?)
    }
}

impl ProcedureInput for Grid<char> {
    const VALUE_TYPE: ValueType = ValueType::Grid;
    const ARG_NAME: &'static str = "grid";

    fn from_arg(value: &Value, config: &AlgorithmConfig) -> Result<Self> {
        let rows = Vec::<String>::deserialize(value).context("Malformed character grid")?;
        let rows: Vec<Vec<char>> = rows.iter().map(|r| r.chars().collect()).collect();
        check_grid_size(rows.iter().map(Vec::len).sum(), config)?;
        Ok(Grid::from_rows(rows)?)
    }
}

pub(crate) fn invalid_argument(arg: &str, message: impl Into<String>) -> TraversalError {
    TraversalError::InvalidArgument {
        arg: arg.to_string(),
        message: message.into(),
    }
}

/// Non-negative integer argument that fits a node id.
pub fn u32_arg(value: &Value, name: &str) -> Result<u32> {
    value
        .as_u64()
        .and_then(|v| u32::try_from(v).ok())
        .ok_or_else(|| invalid_argument(name, format!("expected a node id, got {value}")).into())
}

/// Like [`u32_arg`], with `null` meaning absent.
pub fn optional_u32_arg(value: &Value, name: &str) -> Result<Option<u32>> {
    if value.is_null() {
        return Ok(None);
    }
    u32_arg(value, name).map(Some)
}

pub fn i64_arg(value: &Value, name: &str) -> Result<i64> {
    value
        .as_i64()
        .ok_or_else(|| invalid_argument(name, format!("expected an integer, got {value}")).into())
}

pub fn string_arg(value: &Value, name: &str) -> Result<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| invalid_argument(name, format!("expected a string, got {value}")).into())
}

/// A string argument holding exactly one character.
pub fn char_arg(value: &Value, name: &str) -> Result<char> {
    let text = string_arg(value, name)?;
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(invalid_argument(name, format!("expected one character, got {text:?}")).into()),
    }
}

pub fn string_list_arg(value: &Value, name: &str) -> Result<Vec<String>> {
    Vec::<String>::deserialize(value)
        .map_err(|e| invalid_argument(name, format!("expected a list of strings: {e}")).into())
}

/// `[row, col]`, with `null` meaning absent.
pub fn optional_cell_arg(value: &Value, name: &str) -> Result<Option<Cell>> {
    if value.is_null() {
        return Ok(None);
    }
    let (row, col) = <(usize, usize)>::deserialize(value)
        .map_err(|e| invalid_argument(name, format!("expected [row, col]: {e}")))?;
    Ok(Some(Cell::new(row, col)))
}

/// JSON form of a cell used in result rows.
pub fn cell_value(cell: Cell) -> Value {
    serde_json::json!([cell.row, cell.col])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn signature() -> ProcedureSignature {
        ProcedureSignature {
            args: vec![("graph", ValueType::Graph), ("source", ValueType::Int)],
            optional_args: vec![("limit", ValueType::Int, Value::Null)],
            yields: vec![("value", ValueType::Int)],
        }
    }

    #[test]
    fn test_validate_args_fills_defaults() {
        let args = signature()
            .validate_args(vec![json!({"nodes": 1}), json!(0)])
            .unwrap();
        assert_eq!(args.len(), 3);
        assert!(args[2].is_null());
    }

    #[test]
    fn test_validate_args_rejects_bad_shapes() {
        let sig = signature();
        assert!(sig.validate_args(vec![json!({"nodes": 1})]).is_err());
        assert!(
            sig.validate_args(vec![json!({"nodes": 1}), json!(0), json!(1), json!(2)])
                .is_err()
        );
        assert!(
            sig.validate_args(vec![json!({"nodes": 1}), json!("zero")])
                .is_err()
        );
        assert!(sig.validate_args(vec![json!([1]), json!(0)]).is_err());
    }

    #[test]
    fn test_graph_literal() {
        let value = json!({"nodes": 3, "edges": [[0, 1], [1, 2, 7]], "directed": false});
        let graph = Graph::from_arg(&value, &AlgorithmConfig::default()).unwrap();
        assert_eq!(graph.node_count(), 3);
        assert!(!graph.is_directed());
        assert_eq!(graph.neighbors(1), &[0, 2]);
        assert!(graph.has_weights());
    }

    #[test]
    fn test_graph_literal_errors() {
        let config = AlgorithmConfig::default();
        assert!(Graph::from_arg(&json!({"nodes": 2, "edges": [[0, 2]]}), &config).is_err());
        assert!(Graph::from_arg(&json!({"nodes": 2, "edges": [[0]]}), &config).is_err());
        assert!(Graph::from_arg(&json!({"nodes": 2, "edges": [[-1, 0]]}), &config).is_err());
    }

    #[test]
    fn test_limits_are_enforced() {
        let config = AlgorithmConfig {
            max_vertices: 2,
            max_grid_cells: 3,
        };
        let err = Graph::from_arg(&json!({"nodes": 3}), &config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TraversalError>(),
            Some(TraversalError::LimitExceeded { limit: 2, .. })
        ));
        assert!(Grid::<i64>::from_arg(&json!([[1, 2], [3, 4]]), &config).is_err());
        assert!(Grid::<char>::from_arg(&json!(["AB"]), &config).is_ok());
    }

    #[test]
    fn test_grid_literals() {
        let config = AlgorithmConfig::default();
        let ints = Grid::<i64>::from_arg(&json!([[1, -2], [0, 3]]), &config).unwrap();
        assert_eq!(ints[Cell::new(0, 1)], -2);
        let chars = Grid::<char>::from_arg(&json!(["MO", "OO"]), &config).unwrap();
        assert_eq!(chars[Cell::new(0, 0)], 'M');
        assert!(Grid::<i64>::from_arg(&json!([[1, 2], [3]]), &config).is_err());
    }

    #[test]
    fn test_scalar_args() {
        assert_eq!(u32_arg(&json!(4), "source").unwrap(), 4);
        assert!(u32_arg(&json!(-1), "source").is_err());
        assert_eq!(optional_u32_arg(&Value::Null, "source").unwrap(), None);
        assert_eq!(char_arg(&json!("M"), "mine").unwrap(), 'M');
        assert!(char_arg(&json!("MM"), "mine").is_err());
        assert_eq!(
            optional_cell_arg(&json!([9, 9]), "target").unwrap(),
            Some(Cell::new(9, 9))
        );
    }
}
