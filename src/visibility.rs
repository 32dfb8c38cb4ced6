use crate::corners::{corner_point, Corner, CORNERS};
use crate::grid::Grid;
use crate::raycast::{GridWalk, RayTraversal};
use std::fmt;

/// A ray endpoint: a cell coordinate plus the corner to shoot from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RayCastPoint {
    pub x: i32,
    pub y: i32,
    pub corner: Corner,
}

impl RayCastPoint {
    pub fn new(x: i32, y: i32, corner: Corner) -> Self {
        RayCastPoint { x, y, corner }
    }
}

/// Outcome of a line-of-sight query between two cells.
///
/// When `has_line_of_sight` is true, `source_corner` is the first corner
/// in `CORNERS` order that reaches the target at all, and `target_corners`
/// are the target corners reachable from it, in `CORNERS` order. Both are
/// `None` when no corner pair connects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineOfSightResult {
    pub has_line_of_sight: bool,
    pub source_corner: Option<Corner>,
    pub target_corners: Option<Vec<Corner>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityError {
    /// Operation is deliberately not provided. Surfaced as an error so a
    /// caller can never mistake a stub default for a real answer.
    Unsupported(&'static str),
}

impl fmt::Display for VisibilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisibilityError::Unsupported(what) => write!(f, "unsupported operation: {}", what),
        }
    }
}

impl std::error::Error for VisibilityError {}

/// Check whether the ray between two cell corners is blocked.
///
/// Both endpoints are mapped to corner-space lattice points and the
/// segment between them is walked with the default traversal; any crossed
/// cell that is not Empty/Source/Target blocks the ray.
pub fn check_ray(grid: &Grid, source: RayCastPoint, dest: RayCastPoint) -> bool {
    check_ray_with(grid, &GridWalk, source, dest)
}

/// `check_ray` with an explicit traversal strategy.
pub fn check_ray_with(
    grid: &Grid,
    traversal: &impl RayTraversal,
    source: RayCastPoint,
    dest: RayCastPoint,
) -> bool {
    let (sx, sy) = corner_point(source.x, source.y, source.corner);
    let (dx, dy) = corner_point(dest.x, dest.y, dest.corner);
    traversal.traverse(sx, sy, dx, dy, &mut |x, y| grid.get_cell(x, y).is_opaque())
}

/// Resolve line of sight between two cells in cell space.
///
/// Runs all 16 source-corner/target-corner rays in the fixed `CORNERS`
/// order and reports the first source corner with any unblocked ray,
/// together with the target corners it reaches.
pub fn check_line_of_sight(
    grid: &Grid,
    source_x: i32,
    source_y: i32,
    target_x: i32,
    target_y: i32,
) -> LineOfSightResult {
    check_line_of_sight_with(grid, &GridWalk, source_x, source_y, target_x, target_y)
}

/// `check_line_of_sight` with an explicit traversal strategy.
pub fn check_line_of_sight_with(
    grid: &Grid,
    traversal: &impl RayTraversal,
    source_x: i32,
    source_y: i32,
    target_x: i32,
    target_y: i32,
) -> LineOfSightResult {
    for source_corner in CORNERS {
        let mut reachable = Vec::new();
        for target_corner in CORNERS {
            let blocked = check_ray_with(
                grid,
                traversal,
                RayCastPoint::new(source_x, source_y, source_corner),
                RayCastPoint::new(target_x, target_y, target_corner),
            );
            if !blocked {
                reachable.push(target_corner);
            }
        }
        if !reachable.is_empty() {
            return LineOfSightResult {
                has_line_of_sight: true,
                source_corner: Some(source_corner),
                target_corners: Some(reachable),
            };
        }
    }

    LineOfSightResult {
        has_line_of_sight: false,
        source_corner: None,
        target_corners: None,
    }
}

/// Cell-to-cell connectivity is not provided by this crate.
pub fn are_cells_connected(
    _grid: &Grid,
    _x0: i32,
    _y0: i32,
    _x1: i32,
    _y1: i32,
) -> Result<bool, VisibilityError> {
    Err(VisibilityError::Unsupported("cell-to-cell connectivity"))
}
