use gridsight::loader::grid_from_rows;
use gridsight::{Cell, Corner, Grid};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Line-of-sight test fixture matching the JSON files under test_data/.
#[derive(Debug, Clone, Deserialize)]
pub struct LosFixture {
    #[serde(rename = "testName")]
    pub test_name: String,
    pub layout: Vec<String>,
    #[serde(rename = "sourceX")]
    pub source_x: i32,
    #[serde(rename = "sourceY")]
    pub source_y: i32,
    #[serde(rename = "targetX")]
    pub target_x: i32,
    #[serde(rename = "targetY")]
    pub target_y: i32,
    #[serde(rename = "expectLineOfSight")]
    pub expect_line_of_sight: bool,
    #[serde(rename = "expectedSourceCorner", default)]
    pub expected_source_corner: Option<String>,
    #[serde(rename = "expectedTargetCorners", default)]
    pub expected_target_corners: Option<Vec<String>>,
}

/// Load a fixture from a JSON file.
pub fn load_fixture(path: &Path) -> Result<LosFixture, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)?;
    let fixture: LosFixture = serde_json::from_str(&contents)?;
    Ok(fixture)
}

/// Build the grid described by a fixture's layout rows.
pub fn fixture_grid(fixture: &LosFixture) -> Grid {
    let rows: Vec<&str> = fixture.layout.iter().map(|s| s.as_str()).collect();
    match grid_from_rows(&rows) {
        Ok(grid) => grid,
        Err(e) => panic!("fixture '{}' has a bad layout: {}", fixture.test_name, e),
    }
}

/// Resolve a corner name from fixture JSON.
pub fn corner_from_name(name: &str) -> Corner {
    match name {
        "TopLeft" => Corner::TopLeft,
        "TopRight" => Corner::TopRight,
        "BottomLeft" => Corner::BottomLeft,
        "BottomRight" => Corner::BottomRight,
        other => panic!("unknown corner name '{}'", other),
    }
}

fn blocking_ids(grid: &Grid) -> Vec<i32> {
    let mut ids = Vec::new();
    for y in 0..grid.height {
        for x in 0..grid.width {
            if grid.get_cell(x, y) == Cell::Blocking {
                ids.push(grid.cell_id(x, y));
            }
        }
    }
    ids
}

/// Mirror a grid left-right.
pub fn flip_grid_horizontal(grid: &Grid) -> Grid {
    let flipped: Vec<i32> = blocking_ids(grid)
        .iter()
        .map(|&id| {
            let (x, y) = grid.cell_coords(id);
            grid.cell_id(grid.width - 1 - x, y)
        })
        .collect();
    Grid::with_blocking(grid.width, grid.height, &flipped)
}

/// Mirror a grid top-bottom.
pub fn flip_grid_vertical(grid: &Grid) -> Grid {
    let flipped: Vec<i32> = blocking_ids(grid)
        .iter()
        .map(|&id| {
            let (x, y) = grid.cell_coords(id);
            grid.cell_id(x, grid.height - 1 - y)
        })
        .collect();
    Grid::with_blocking(grid.width, grid.height, &flipped)
}

pub fn flip_x(grid: &Grid, x: i32) -> i32 {
    grid.width - 1 - x
}

pub fn flip_y(grid: &Grid, y: i32) -> i32 {
    grid.height - 1 - y
}
