use std::fmt;

use serde::Serialize;
use thiserror::Error;

pub mod generator;
pub mod limits;
pub mod noise;
pub mod sampler;
pub mod table;

/// A single dataset cell: a numeric measurement or a missing value.
///
/// Missing cells serialize as empty CSV fields and print as `NaN`, but are
/// represented explicitly instead of overloading a float sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Cell(Option<f64>);

impl Cell {
    pub const MISSING: Cell = Cell(None);

    pub fn value(self) -> Option<f64> {
        self.0
    }

    pub fn is_missing(self) -> bool {
        self.0.is_none()
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell(Some(value))
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell(Some(value as f64))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{value}"),
            None => write!(f, "NaN"),
        }
    }
}

/// Widens a generated integer sequence into dataset cells.
pub fn widen(values: &[i64]) -> Vec<Cell> {
    values.iter().map(|&v| Cell::from(v)).collect()
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    #[error("limits must hold exactly two bounds, got {0}")]
    LimitShape(usize),
    #[error("limit bounds must be integers or floats, got {0}")]
    LimitType(&'static str),
    #[error("cannot draw {requested} unique values from a domain of {available}")]
    RangeTooSmall { requested: usize, available: i64 },
    #[error("step range must have a non-zero step")]
    ZeroStep,
    #[error("empty step range ({start}, {stop}, {step})")]
    EmptyStepRange { start: i64, stop: i64, step: i64 },
    #[error("column \"{name}\" has {actual} rows, expected {expected}")]
    ColumnLengthMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },
}
