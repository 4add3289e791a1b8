//! Geometric region transforms over a grid.
//!
//! The single transform here classifies every cell against an implicit
//! line and inverts the cells on one side of it, in place. It is the only
//! mutating operation in the crate besides indexed writes.

use crate::element::Element;
use crate::primitives::Grid;

/// Inverts every cell lying strictly on the negative side of the line
/// through `(x1, y1)` and `(x2, y2)`, where `x` is the column index and
/// `y` is the row index.
///
/// The line is the implicit `A*x + B*y + C = 0` with `A = y1 - y2`,
/// `B = x2 - x1`, `C = x1*y2 - x2*y1`. A cell whose substituted value is
/// strictly negative is inverted under its kind's rule (logical NOT for
/// booleans, arithmetic negation otherwise); cells on the line or on the
/// positive side are untouched. All coefficient and classification math
/// runs in `i128`, so coordinate products can never overflow.
///
/// Two identical points degenerate to `A = B = 0`: every cell then
/// classifies as the constant `C`, which is exactly zero for coincident
/// points, so no cell is inverted. That is defined behavior, not an
/// error.
///
/// # Examples
///
/// ```
/// use trama::primitives::Grid;
/// use trama::transform::invert_half_plane;
///
/// let mut g = Grid::from_vec(3, 3, vec![true; 9]).expect("3*3=9 cells");
/// invert_half_plane(&mut g, 0, 0, 2, 2);
/// // Cells above the main diagonal (row < col) were inverted.
/// assert_eq!(g.get(0, 2).expect("in bounds"), false);
/// assert_eq!(g.get(1, 1).expect("in bounds"), true);
/// ```
pub fn invert_half_plane<T: Element>(grid: &mut Grid<T>, x1: i64, y1: i64, x2: i64, y2: i64) {
    let a = i128::from(y1) - i128::from(y2);
    let b = i128::from(x2) - i128::from(x1);
    let c = i128::from(x1) * i128::from(y2) - i128::from(x2) * i128::from(y1);

    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let value = a * col as i128 + b * row as i128 + c;
            if value < 0 {
                if let Ok(cell) = grid.get_mut(row, col) {
                    *cell = cell.negate();
                }
            }
        }
    }
}
