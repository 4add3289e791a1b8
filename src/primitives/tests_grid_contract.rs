// =========================================================================
// FALSIFY-GR: Grid primitives contract (trama primitives)
//
// Each test pins one clause of the grid arithmetic contract: saturation
// happens exactly at the representable bounds, broadcasting exists for
// add and only for add, and the half-plane transform inverts exactly the
// strictly-negative side of the implicit line.
//
// References:
//   - Hennessy & Patterson (2017) "Computer Architecture", app. J
//     (saturating fixed-point arithmetic)
// =========================================================================

use super::*;
use crate::transform::invert_half_plane;

/// FALSIFY-GR-001: Scalar add clamps at MAX, never wraps
#[test]
fn falsify_gr_001_scalar_add_clamps_at_max() {
    let g = Grid::from_vec(3, 3, vec![100_i8; 9]).expect("valid");
    let out = g.add_scalar(100);

    for row in 0..3 {
        for col in 0..3 {
            assert_eq!(
                out.get(row, col).expect("valid"),
                i8::MAX,
                "FALSIFIED GR-001: 100 + 100 wrapped at ({row},{col})"
            );
        }
    }
}

/// FALSIFY-GR-002: Scalar add clamps at MIN, never wraps
#[test]
fn falsify_gr_002_scalar_add_clamps_at_min() {
    let g = Grid::from_vec(3, 3, vec![-100_i8; 9]).expect("valid");
    let out = g.add_scalar(-100);

    assert!(
        out.iter().all(|&c| c == i8::MIN),
        "FALSIFIED GR-002: -100 + -100 did not clamp to {}",
        i8::MIN
    );
}

/// FALSIFY-GR-003: Clamping engages only past the exact boundary
#[test]
fn falsify_gr_003_saturation_boundary_is_exact() {
    let g = Grid::from_vec(1, 1, vec![27_i8]).expect("valid");

    // 27 + 100 = 127 fits exactly: no clamp, exact sum.
    assert_eq!(
        g.add_scalar(100).get(0, 0).expect("valid"),
        127,
        "FALSIFIED GR-003: in-range sum altered by clamp"
    );
    // 28 + 100 overflows by one: clamps to MAX.
    let h = Grid::from_vec(1, 1, vec![28_i8]).expect("valid");
    assert_eq!(
        h.add_scalar(100).get(0, 0).expect("valid"),
        i8::MAX,
        "FALSIFIED GR-003: one-past-max sum did not clamp"
    );
}

/// FALSIFY-GR-004: Scalar multiply clamps through a wide intermediate
#[test]
fn falsify_gr_004_scalar_mul_clamps() {
    let g = Grid::from_vec(2, 2, vec![100_i8; 4]).expect("valid");

    assert!(
        g.mul_scalar(2).iter().all(|&c| c == i8::MAX),
        "FALSIFIED GR-004: 100 * 2 did not clamp to {}",
        i8::MAX
    );
    assert!(
        g.mul_scalar(i8::MIN).iter().all(|&c| c == i8::MIN),
        "FALSIFIED GR-004: 100 * MIN did not clamp to {}",
        i8::MIN
    );
}

/// FALSIFY-GR-005: Add broadcasts to the pairwise maximum extent
#[test]
fn falsify_gr_005_add_broadcast_shape() {
    let a = Grid::<i16>::new(5, 7).expect("valid");
    let b = Grid::<i16>::new(2, 2).expect("valid");
    let c = a.add(&b);

    assert_eq!(
        c.shape(),
        (5, 7),
        "FALSIFIED GR-005: (5x7)+(2x2) shape={:?}, expected (5,7)",
        c.shape()
    );
}

/// FALSIFY-GR-006: Multiply never broadcasts (asymmetry with add)
#[test]
fn falsify_gr_006_mul_rejects_mismatch() {
    let a = Grid::<i16>::new(5, 7).expect("valid");
    let b = Grid::<i16>::new(2, 2).expect("valid");

    assert!(
        matches!(a.mul(&b), Err(TramaError::DimensionMismatch { .. })),
        "FALSIFIED GR-006: mismatched multiply produced a result"
    );
}

/// FALSIFY-GR-007: Equality tolerance is exactly 1e-6, inclusive
#[test]
fn falsify_gr_007_equality_tolerance_inclusive() {
    let a = Grid::from_vec(1, 1, vec![0.0_f64]).expect("valid");
    let at_tol = Grid::from_vec(1, 1, vec![1e-6_f64]).expect("valid");
    let past_tol = Grid::from_vec(1, 1, vec![2e-6_f64]).expect("valid");

    assert_eq!(a, at_tol, "FALSIFIED GR-007: diff == 1e-6 compared unequal");
    assert_ne!(a, past_tol, "FALSIFIED GR-007: diff > 1e-6 compared equal");
}

/// FALSIFY-GR-008: Half-plane transform inverts the strictly-negative
/// side of the diagonal and nothing else
#[test]
fn falsify_gr_008_half_plane_diagonal() {
    let mut g = Grid::from_vec(5, 5, vec![true; 25]).expect("valid");
    invert_half_plane(&mut g, 0, 0, 4, 4);

    // A = -4, B = 4, C = 0: sign(row - col) classifies each cell.
    for row in 0..5 {
        for col in 0..5 {
            let inverted = row < col;
            assert_eq!(
                g.get(row, col).expect("valid"),
                !inverted,
                "FALSIFIED GR-008: wrong state at ({row},{col})"
            );
        }
    }
}

/// FALSIFY-GR-009: Line coefficients survive coordinate magnitudes whose
/// products overflow i64
#[test]
fn falsify_gr_009_half_plane_wide_coefficients() {
    let mut g = Grid::from_vec(2, 2, vec![1_i8; 4]).expect("valid");
    // x1*y2 overflows i64; the classification must still be finite and
    // uniform (all four cells sit on the same side of this far-away line).
    invert_half_plane(&mut g, i64::MAX, i64::MAX, i64::MAX - 1, i64::MAX);

    let first = g.get(0, 0).expect("valid");
    assert!(
        g.iter().all(|&c| c == first),
        "FALSIFIED GR-009: non-uniform classification under a far line"
    );
}

/// FALSIFY-GR-010: Fill factor is normalized to [0, 1]
#[test]
fn falsify_gr_010_fill_factor_normalized() {
    let zeros = Grid::<i16>::new(8, 8).expect("valid");
    let full = Grid::from_vec(8, 8, vec![i16::MAX; 64]).expect("valid");

    assert!(
        zeros.fill_factor().abs() < 1e-12,
        "FALSIFIED GR-010: all-zero grid fill factor != 0"
    );
    assert!(
        (full.fill_factor() - 1.0).abs() < 1e-12,
        "FALSIFIED GR-010: all-max grid fill factor != 1"
    );
}
