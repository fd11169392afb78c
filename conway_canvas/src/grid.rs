// grid.rs - Fixed-size grid of binary cells, stored column by column

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::LifeError;

/// A grid whose dimensions are fixed at construction. Indexed `[column][row]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<Vec<u8>>", try_from = "Vec<Vec<u8>>")]
pub struct Grid {
    cells: Vec<Vec<bool>>,
    rows: usize,
}

impl Grid {
    /// All cells dead.
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            cells: vec![vec![false; rows]; columns],
            rows,
        }
    }

    pub fn columns(&self) -> usize {
        self.cells.len()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn same_shape(&self, other: &Grid) -> bool {
        self.columns() == other.columns() && self.rows() == other.rows()
    }

    /// Positions outside the grid read as dead.
    pub fn get(&self, col: usize, row: usize) -> bool {
        self.cells
            .get(col)
            .and_then(|column| column.get(row))
            .copied()
            .unwrap_or(false)
    }

    pub fn set(&mut self, col: usize, row: usize, alive: bool) -> bool {
        match self.cells.get_mut(col).and_then(|column| column.get_mut(row)) {
            Some(cell) => {
                *cell = alive;
                true
            }
            None => false,
        }
    }

    /// Flips one cell. Returns `false` without touching anything when out of bounds.
    pub fn toggle(&mut self, col: usize, row: usize) -> bool {
        match self.cells.get_mut(col).and_then(|column| column.get_mut(row)) {
            Some(cell) => {
                *cell = !*cell;
                true
            }
            None => false,
        }
    }

    pub fn population(&self) -> usize {
        self.cells
            .iter()
            .map(|column| column.iter().filter(|&&alive| alive).count())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|column| column.iter().all(|&alive| !alive))
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.cells.iter().enumerate().flat_map(|(col, column)| {
            column
                .iter()
                .enumerate()
                .map(move |(row, &alive)| (col, row, alive))
        })
    }

    /// Replaces every cell; each is alive with probability `density`.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        let density = density.clamp(0.0, 1.0);
        for column in &mut self.cells {
            for cell in column.iter_mut() {
                *cell = rng.gen_bool(density);
            }
        }
    }
}

impl From<Grid> for Vec<Vec<u8>> {
    fn from(grid: Grid) -> Self {
        grid.cells
            .into_iter()
            .map(|column| column.into_iter().map(u8::from).collect())
            .collect()
    }
}

impl TryFrom<Vec<Vec<u8>>> for Grid {
    type Error = LifeError;

    fn try_from(columns: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        let rows = columns.first().map(Vec::len).unwrap_or(0);
        if columns.is_empty() || rows == 0 {
            return Err(LifeError::MalformedGrid("grid has no cells".into()));
        }

        let mut cells = Vec::with_capacity(columns.len());
        for (col, column) in columns.into_iter().enumerate() {
            if column.len() != rows {
                return Err(LifeError::MalformedGrid(format!(
                    "column {col} has {} rows, expected {rows}",
                    column.len()
                )));
            }
            let decoded = column
                .into_iter()
                .enumerate()
                .map(|(row, value)| match value {
                    0 => Ok(false),
                    1 => Ok(true),
                    other => Err(LifeError::MalformedGrid(format!(
                        "cell ({col}, {row}) holds {other}"
                    ))),
                })
                .collect::<Result<Vec<bool>, LifeError>>()?;
            cells.push(decoded);
        }

        Ok(Self { cells, rows })
    }
}
