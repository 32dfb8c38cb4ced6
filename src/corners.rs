/// Corner selectors for a cell. A cell at (x, y) occupies the unit square
/// between lattice points (x, y) and (x+1, y+1); its four corners are the
/// surrounding lattice points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Fixed corner enumeration order. Line-of-sight resolution ties break on
/// the first corner in this order, so it is an explicit constant rather
/// than whatever order an iterator happens to produce.
pub const CORNERS: [Corner; 4] = [
    Corner::TopLeft,
    Corner::TopRight,
    Corner::BottomLeft,
    Corner::BottomRight,
];

/// Map a cell coordinate plus corner selector to a corner-space lattice
/// point. Pure arithmetic; bounds are the caller's concern.
pub fn corner_point(cell_x: i32, cell_y: i32, corner: Corner) -> (i32, i32) {
    let dx = match corner {
        Corner::TopRight | Corner::BottomRight => 1,
        Corner::TopLeft | Corner::BottomLeft => 0,
    };
    let dy = match corner {
        Corner::BottomLeft | Corner::BottomRight => 1,
        Corner::TopLeft | Corner::TopRight => 0,
    };
    (cell_x + dx, cell_y + dy)
}
