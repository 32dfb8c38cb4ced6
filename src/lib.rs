pub mod config;
pub mod corners;
pub mod grid;
pub mod loader;
pub mod raycast;
pub mod snapshot;
pub mod visibility;

pub use corners::{corner_point, Corner, CORNERS};
pub use grid::{Cell, Edge, EdgeDirection, Grid, GridError};
pub use loader::{grid_from_layout, grid_from_rows, LoadError};
pub use raycast::{grid_cast_ray, GridWalk, RayTraversal};
pub use snapshot::GridSnapshot;
pub use visibility::{
    are_cells_connected, check_line_of_sight, check_ray, LineOfSightResult, RayCastPoint,
    VisibilityError,
};
