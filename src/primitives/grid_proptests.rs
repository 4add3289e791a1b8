use super::*;
use proptest::prelude::*;

proptest! {
    /// Equality is reflexive for any seeded random grid.
    #[test]
    fn prop_eq_reflexive(
        width in 1_usize..16,
        height in 1_usize..16,
        seed in any::<u64>()
    ) {
        let g = Grid::<i16>::random(width, height, Some(seed)).expect("valid dims");
        prop_assert_eq!(&g, &g);
    }

    /// Equality is symmetric.
    #[test]
    fn prop_eq_symmetric(
        width in 1_usize..16,
        height in 1_usize..16,
        seed in any::<u64>()
    ) {
        let a = Grid::<f32>::random(width, height, Some(seed)).expect("valid dims");
        let b = a.clone();
        prop_assert!(a == b && b == a);
    }

    /// Mutating a clone never leaks into the original.
    #[test]
    fn prop_clone_independent(
        width in 1_usize..16,
        height in 1_usize..16,
        seed in any::<u64>(),
        value in any::<i32>()
    ) {
        let original = Grid::<i32>::random(width, height, Some(seed)).expect("valid dims");
        let snapshot = original.clone();
        let mut copy = original.clone();
        copy.set(height - 1, width - 1, value).expect("in bounds");
        prop_assert_eq!(original, snapshot);
    }

    /// Saturating scalar add always lands inside the representable range
    /// and matches the margin-check rule cell by cell.
    #[test]
    fn prop_scalar_add_in_range(
        seed in any::<u64>(),
        scalar in any::<i8>()
    ) {
        let g = Grid::<i8>::random(8, 8, Some(seed)).expect("valid dims");
        let out = g.add_scalar(scalar);
        for (cell, sum) in g.iter().zip(out.iter()) {
            prop_assert_eq!(*sum, cell.saturating_add(scalar));
        }
    }

    /// Saturating scalar multiply always lands inside the representable
    /// range.
    #[test]
    fn prop_scalar_mul_in_range(
        seed in any::<u64>(),
        scalar in any::<i8>()
    ) {
        let g = Grid::<i8>::random(8, 8, Some(seed)).expect("valid dims");
        let out = g.mul_scalar(scalar);
        for (cell, product) in g.iter().zip(out.iter()) {
            prop_assert_eq!(*product, cell.saturating_mul(scalar));
        }
    }

    /// Elementwise add spans the pairwise maximum extent.
    #[test]
    fn prop_add_shape_is_pairwise_max(
        w1 in 1_usize..12, h1 in 1_usize..12,
        w2 in 1_usize..12, h2 in 1_usize..12
    ) {
        let a = Grid::<i16>::new(w1, h1).expect("valid dims");
        let b = Grid::<i16>::new(w2, h2).expect("valid dims");
        prop_assert_eq!(a.add(&b).shape(), (w1.max(w2), h1.max(h2)));
    }

    /// Adding an all-zero grid of the same shape is an identity.
    #[test]
    fn prop_add_zero_identity(
        width in 1_usize..12,
        height in 1_usize..12,
        seed in any::<u64>()
    ) {
        let g = Grid::<i32>::random(width, height, Some(seed)).expect("valid dims");
        let zero = Grid::<i32>::new(width, height).expect("valid dims");
        prop_assert_eq!(g.add(&zero), g);
    }

    /// Boolean inversion is an involution.
    #[test]
    fn prop_bool_double_invert_identity(
        width in 1_usize..12,
        height in 1_usize..12,
        seed in any::<u64>()
    ) {
        let g = Grid::<bool>::random(width, height, Some(seed)).expect("valid dims");
        prop_assert_eq!(g.invert().invert(), g);
    }

    /// Fill factor of a boolean grid is always a ratio in [0, 1].
    #[test]
    fn prop_fill_factor_in_unit_interval(
        width in 1_usize..12,
        height in 1_usize..12,
        seed in any::<u64>()
    ) {
        let g = Grid::<bool>::random(width, height, Some(seed)).expect("valid dims");
        let ff = g.fill_factor();
        prop_assert!((0.0..=1.0).contains(&ff));
    }
}
