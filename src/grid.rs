use std::fmt;

/// State of a single grid cell.
///
/// `Source` and `Target` are markers for the endpoints of a query; for
/// visibility purposes they behave exactly like `Empty`. `OutOfBounds` is
/// never stored in a grid - it is the synthesized answer for any cell query
/// outside `[0,width) x [0,height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Blocking,
    Source,
    Target,
    OutOfBounds,
}

impl Cell {
    /// Whether a ray passing through this cell is stopped by it.
    pub fn is_opaque(self) -> bool {
        !matches!(self, Cell::Empty | Cell::Source | Cell::Target)
    }
}

/// Passability of the boundary around a lattice point, derived on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Clear,
    Blocked,
}

/// Direction selector for edge queries at a lattice point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeDirection {
    Down,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Lattice coordinate outside `[0,width] x [0,height]` passed to an
    /// edge query. Callers wanting to avoid this must validate first.
    InvalidCoordinate { x: i32, y: i32 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidCoordinate { x, y } => {
                write!(f, "bad lattice coordinate ({}, {})", x, y)
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Grid structure storing cell states in row-major order.
///
/// Immutable after construction: every query is a pure read, so a grid can
/// be shared across threads without locking.
#[derive(Debug, Clone)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid from explicit dimensions and cells.
    /// `cells.len()` must equal `width * height`; cell `(x, y)` lives at
    /// index `x + y * width`.
    pub fn new(width: i32, height: i32, cells: Vec<Cell>) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        assert_eq!(
            cells.len(),
            (width * height) as usize,
            "cell count must match dimensions"
        );
        Grid {
            width,
            height,
            cells,
        }
    }

    /// Create a grid with all cells empty.
    pub fn empty(width: i32, height: i32) -> Self {
        Self::new(width, height, vec![Cell::Empty; (width * height) as usize])
    }

    /// Create a grid with specific blocking cells, given as cell IDs.
    pub fn with_blocking(width: i32, height: i32, blocking: &[i32]) -> Self {
        let mut cells = vec![Cell::Empty; (width * height) as usize];
        for &cell_id in blocking {
            if cell_id >= 0 && cell_id < width * height {
                cells[cell_id as usize] = Cell::Blocking;
            }
        }
        Self::new(width, height, cells)
    }

    /// Convert (x, y) cell coordinates to a cell ID.
    pub fn cell_id(&self, x: i32, y: i32) -> i32 {
        x + y * self.width
    }

    /// Convert a cell ID back to (x, y) cell coordinates.
    pub fn cell_coords(&self, id: i32) -> (i32, i32) {
        (id % self.width, id / self.width)
    }

    /// Get the cell at (x, y) in cell space. Never fails: coordinates
    /// outside `[0,width) x [0,height)` answer `OutOfBounds`.
    pub fn get_cell(&self, x: i32, y: i32) -> Cell {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return Cell::OutOfBounds;
        }
        self.cells[self.cell_id(x, y) as usize]
    }

    /// Query the edge at lattice point (x, y) in the given direction.
    ///
    /// `x` and `y` are corner-space coordinates, valid over the inclusive
    /// range `[0,width] x [0,height]`. The edge is `Blocked` when the cell
    /// at `(x, y)` or the cell one step back across the other axis is
    /// blocking or out of bounds; a backward step that goes negative counts
    /// as blocked. This answers whether a diagonal-adjacent pair of cells
    /// sharing only this lattice point can see past the corner.
    pub fn get_edge(&self, x: i32, y: i32, dir: EdgeDirection) -> Result<Edge, GridError> {
        if x < 0 || x > self.width || y < 0 || y > self.height {
            return Err(GridError::InvalidCoordinate { x, y });
        }
        if self.get_cell(x, y).is_opaque() {
            return Ok(Edge::Blocked);
        }
        let (bx, by) = match dir {
            EdgeDirection::Down => (x - 1, y),
            EdgeDirection::Right => (x, y - 1),
        };
        if bx < 0 || by < 0 || self.get_cell(bx, by).is_opaque() {
            return Ok(Edge::Blocked);
        }
        Ok(Edge::Clear)
    }
}
