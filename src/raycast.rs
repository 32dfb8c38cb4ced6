/// Strategy interface for walking a grid segment.
///
/// Contract: visit, in order along the segment from (x0, y0) to (x1, y1)
/// in corner space, every grid cell whose interior the segment passes
/// through. Cells the segment only touches at a lattice point are skipped.
/// Traversal stops at the first cell for which `visit` returns true and
/// reports true; otherwise it runs to the end and reports false.
///
/// Implemented as a trait so the ray tester can be exercised against a
/// scripted cell sequence independent of any stepping algorithm.
pub trait RayTraversal {
    fn traverse(
        &self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        visit: &mut dyn FnMut(i32, i32) -> bool,
    ) -> bool;
}

/// Default segment walker, see [`grid_cast_ray`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GridWalk;

impl RayTraversal for GridWalk {
    fn traverse(
        &self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        visit: &mut dyn FnMut(i32, i32) -> bool,
    ) -> bool {
        grid_cast_ray(x0, y0, x1, y1, visit)
    }
}

/// Walk the segment between two lattice points, calling `visit` for every
/// cell whose interior it crosses, in segment order. Returns true as soon
/// as `visit` does; false if the walk completes.
///
/// All arithmetic is integer-only. The segment parameter is scaled to the
/// common denominator `|dx| * |dy|`: crossings of vertical grid lines land
/// on multiples of `|dy|` and crossings of horizontal grid lines on
/// multiples of `|dx|`. Merging the two event streams splits the segment
/// into open intervals, one per crossed cell interior; the doubled
/// midpoint of each interval picks the cell. A coincident pair of events
/// is a lattice-point touch, which contributes no interval and therefore
/// no cell, so exact corner grazes are skipped without a special case.
pub fn grid_cast_ray<F>(x0: i32, y0: i32, x1: i32, y1: i32, mut visit: F) -> bool
where
    F: FnMut(i32, i32) -> bool,
{
    let dx = x1 - x0;
    let dy = y1 - y0;
    let adx = dx.abs() as i64;
    let ady = dy.abs() as i64;

    // Horizontal, vertical, and zero-length segments run along grid lines
    // and cross no cell interior.
    if adx == 0 || ady == 0 {
        return false;
    }

    let sx = dx.signum();
    let sy = dy.signum();

    let mut prev = 0i64;
    let mut vi = 1i64; // next vertical crossing index
    let mut hi = 1i64; // next horizontal crossing index

    while vi <= adx || hi <= ady {
        let ve = if vi <= adx { vi * ady } else { i64::MAX };
        let he = if hi <= ady { hi * adx } else { i64::MAX };
        let next = ve.min(he);
        if ve == next {
            vi += 1;
        }
        if he == next {
            hi += 1;
        }

        // Doubled midpoint of the open interval (prev, next).
        let m2 = prev + next;
        let ci = (m2 / (2 * ady)) as i32; // whole cells advanced along x
        let cj = (m2 / (2 * adx)) as i32; // whole cells advanced along y
        let cx = if sx > 0 { x0 + ci } else { x0 - 1 - ci };
        let cy = if sy > 0 { y0 + cj } else { y0 - 1 - cj };
        if visit(cx, cy) {
            return true;
        }

        prev = next;
    }

    false
}
