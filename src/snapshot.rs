use crate::grid::{Cell, Grid};
use serde::{Deserialize, Serialize};
use std::fs;

/// Serializable snapshot of a grid: dimensions plus the IDs of its
/// blocking cells. Marker cells are not preserved; they belong to a
/// query, not to the board.
#[derive(Debug, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub width: i32,
    pub height: i32,
    pub blocking_cells: Vec<i32>,
}

impl GridSnapshot {
    /// Capture the blocking layout of a grid.
    pub fn from_grid(grid: &Grid) -> Self {
        let mut blocking_cells = Vec::new();
        for y in 0..grid.height {
            for x in 0..grid.width {
                if grid.get_cell(x, y) == Cell::Blocking {
                    blocking_cells.push(grid.cell_id(x, y));
                }
            }
        }
        GridSnapshot {
            width: grid.width,
            height: grid.height,
            blocking_cells,
        }
    }

    /// Rebuild a grid from the snapshot.
    pub fn to_grid(&self) -> Grid {
        Grid::with_blocking(self.width, self.height, &self.blocking_cells)
    }

    /// Save to a JSON file.
    pub fn save_to_file(&self, path: &str) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize snapshot: {}", e))?;
        fs::write(path, json).map_err(|e| format!("Failed to write snapshot file: {}", e))?;
        Ok(())
    }

    /// Load from a JSON file.
    pub fn load_from_file(path: &str) -> Result<Self, String> {
        let json =
            fs::read_to_string(path).map_err(|e| format!("Failed to read snapshot file: {}", e))?;
        serde_json::from_str(&json).map_err(|e| format!("Failed to parse snapshot file: {}", e))
    }
}
