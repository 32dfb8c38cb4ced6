use crate::grid::{Cell, Grid};
use std::fmt;

/// Errors from parsing a textual grid layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// A row's length disagrees with the width taken from the first row.
    RowLengthMismatch {
        row: usize,
        len: usize,
        expected: usize,
    },
    /// A character outside the symbol table.
    UnknownSymbol { x: i32, y: i32, symbol: char },
    /// No rows at all, or an empty first row.
    EmptyLayout,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::RowLengthMismatch { row, len, expected } => {
                write!(
                    f,
                    "row {} has invalid length {}; expected {}",
                    row, len, expected
                )
            }
            LoadError::UnknownSymbol { x, y, symbol } => {
                write!(f, "bad input at ({}, {}): '{}'", x, y, symbol)
            }
            LoadError::EmptyLayout => write!(f, "layout has no cells"),
        }
    }
}

impl std::error::Error for LoadError {}

fn cell_for_symbol(symbol: char) -> Option<Cell> {
    match symbol {
        '-' => Some(Cell::Empty),
        'X' => Some(Cell::Blocking),
        _ => None,
    }
}

/// Build a grid from rows of single-character symbols.
///
/// `'-'` is an empty cell and `'X'` a blocking cell. The first row fixes
/// the width; every later row must match it. Rows flatten row-major, so
/// `rows[y]` char `x` lands at cell `(x, y)`.
pub fn grid_from_rows(rows: &[&str]) -> Result<Grid, LoadError> {
    if rows.is_empty() {
        return Err(LoadError::EmptyLayout);
    }
    let width = rows[0].chars().count();
    if width == 0 {
        return Err(LoadError::EmptyLayout);
    }
    for (i, row) in rows.iter().enumerate() {
        let len = row.chars().count();
        if len != width {
            return Err(LoadError::RowLengthMismatch {
                row: i,
                len,
                expected: width,
            });
        }
    }

    let height = rows.len();
    let mut cells = Vec::with_capacity(width * height);
    for (y, row) in rows.iter().enumerate() {
        for (x, symbol) in row.chars().enumerate() {
            match cell_for_symbol(symbol) {
                Some(cell) => cells.push(cell),
                None => {
                    return Err(LoadError::UnknownSymbol {
                        x: x as i32,
                        y: y as i32,
                        symbol,
                    })
                }
            }
        }
    }

    Ok(Grid::new(width as i32, height as i32, cells))
}

/// Build a grid from a whole layout file: one row per line, blank lines
/// and surrounding whitespace ignored.
pub fn grid_from_layout(layout: &str) -> Result<Grid, LoadError> {
    let rows: Vec<&str> = layout
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();
    grid_from_rows(&rows)
}
