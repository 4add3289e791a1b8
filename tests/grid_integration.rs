//! End-to-end walk of the public API through the prelude: construction,
//! copying, scalar and elementwise arithmetic, density, and the
//! half-plane transform, in the order a caller would chain them.

use trama::prelude::*;

#[test]
fn short_kind_demonstration_sequence() -> Result<()> {
    // Randomly filled 5x7 grid, deterministic for the test.
    let img1 = Grid::<i16>::random(5, 7, Some(42))?;
    assert_eq!(img1.shape(), (5, 7));

    // Deep copy compares equal until the copy diverges.
    let mut img2 = img1.clone();
    assert_eq!(img1, img2);
    *img2.get_mut(2, 3)? = 999;
    assert_ne!(img1, img2);

    // Whole-object replacement by assignment.
    let mut img3 = Grid::<i16>::new(1, 1)?;
    assert_eq!(img3.get(0, 0)?, 0);
    img3 = img2.clone();
    assert_eq!(img3, img2);
    assert_eq!(img3.get(2, 3)?, 999);

    // (img1 + 1000) * 2 saturates rather than wrapping.
    let img4 = img1.add_scalar(1000).mul_scalar(2);
    for (orig, scaled) in img1.iter().zip(img4.iter()) {
        assert_eq!(*scaled, orig.saturating_add(1000).saturating_mul(2));
    }

    // Inversion negates every cell.
    let negated = !&img1;
    for (orig, neg) in img1.iter().zip(negated.iter()) {
        assert_eq!(*neg, orig.wrapping_neg());
    }

    // Adding a smaller grid zero-pads it up to the larger extent.
    let small = Grid::<i16>::random(2, 2, Some(7))?;
    let sum = img1.add(&small);
    assert_eq!(sum.shape(), (5, 7));
    assert_eq!(sum.get(4, 4)?, img1.get(4, 4)?);

    // Density is a finite ratio.
    assert!(img1.fill_factor().is_finite());

    // Multiply stays strict about shape.
    assert!(matches!(
        img1.mul(&small),
        Err(TramaError::DimensionMismatch { .. })
    ));

    Ok(())
}

#[test]
fn diagonal_inversion_over_random_raster() -> Result<()> {
    let mut task = Grid::<i16>::random(10, 10, Some(1234))?;
    let before = task.clone();

    invert_half_plane(&mut task, 0, 1, 9, 9);

    // A = -8, B = 9, C = -9: cells with 9*row - 8*col - 9 < 0 flip.
    for row in 0..10 {
        for col in 0..10 {
            let value = -8 * (col as i64) + 9 * (row as i64) - 9;
            let expected = if value < 0 {
                before.get(row, col)?.wrapping_neg()
            } else {
                before.get(row, col)?
            };
            assert_eq!(task.get(row, col)?, expected);
        }
    }
    Ok(())
}

#[test]
fn textual_dump_is_row_major() {
    let grid = Grid::from_vec(3, 2, vec![true, false, true, false, true, false])
        .expect("3*2=6 cells");
    let dump = grid.to_string();
    let lines: Vec<&str> = dump.lines().collect();
    assert_eq!(lines, vec!["true false true", "false true false"]);
}
