//! Per-kind arithmetic rules for grid elements.
//!
//! The element kind is a closed, compile-time choice: boolean,
//! floating-point, or fixed-width signed integer. The kind decides what
//! "add" and "multiply" mean (logical OR/AND for booleans, real arithmetic
//! for floats, saturating arithmetic for integers), how equality is
//! checked, and the theoretical per-cell maximum used by density metrics.
//! Resolved once per `Grid<T>` instantiation, never branched per cell.

use rand::Rng;
use std::fmt;

/// Arithmetic and equality rules for a grid element kind.
///
/// # Examples
///
/// ```
/// use trama::element::Element;
///
/// // Boolean "add" is logical OR, "multiply" is logical AND.
/// assert_eq!(true.combine_add(false), true);
/// assert_eq!(true.combine_mul(false), false);
///
/// // Integer arithmetic saturates instead of wrapping.
/// assert_eq!(100_i8.combine_add(100), 127);
/// assert_eq!(100_i8.combine_mul(2), 127);
/// ```
pub trait Element: Copy + PartialEq + fmt::Debug {
    /// Absolute tolerance for floating-point equality.
    ///
    /// Exact-equality kinds ignore it.
    const PRECISION: f64 = 1e-6;

    /// The kind's additive identity, used for zero fill and padding.
    fn zero() -> Self;

    /// The theoretical per-cell maximum: `true` / `1.0` for boolean and
    /// floating-point kinds, the largest representable value for integers.
    fn max_value() -> Self;

    /// Combines two cells under the kind's "add" rule.
    fn combine_add(self, rhs: Self) -> Self;

    /// Combines two cells under the kind's "multiply" rule.
    fn combine_mul(self, rhs: Self) -> Self;

    /// Inverts a cell: logical NOT for booleans, arithmetic negation
    /// otherwise.
    fn negate(self) -> Self;

    /// Equality under the kind's rule: exact for boolean and integer
    /// kinds, within [`Element::PRECISION`] for floating-point kinds.
    fn approx_eq(self, rhs: Self) -> bool;

    /// Draws one uniform value: a fair coin for booleans, `[0, 1)` for
    /// floats, the full representable range for integers.
    fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self;

    /// Widens to `f64` for overflow-safe accumulation.
    fn as_f64(self) -> f64;
}

impl Element for bool {
    fn zero() -> Self {
        false
    }

    fn max_value() -> Self {
        true
    }

    fn combine_add(self, rhs: Self) -> Self {
        self || rhs
    }

    fn combine_mul(self, rhs: Self) -> Self {
        self && rhs
    }

    fn negate(self) -> Self {
        !self
    }

    fn approx_eq(self, rhs: Self) -> bool {
        self == rhs
    }

    fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        rng.gen()
    }

    fn as_f64(self) -> f64 {
        if self {
            1.0
        } else {
            0.0
        }
    }
}

macro_rules! element_impl_float {
    ($t:ty) => {
        impl Element for $t {
            fn zero() -> Self {
                0.0
            }

            fn max_value() -> Self {
                1.0
            }

            fn combine_add(self, rhs: Self) -> Self {
                self + rhs
            }

            fn combine_mul(self, rhs: Self) -> Self {
                self * rhs
            }

            fn negate(self) -> Self {
                -self
            }

            fn approx_eq(self, rhs: Self) -> bool {
                f64::from((self - rhs).abs()) <= Self::PRECISION
            }

            fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
                rng.gen()
            }

            fn as_f64(self) -> f64 {
                f64::from(self)
            }
        }
    };
}

element_impl_float!(f32);
element_impl_float!(f64);

macro_rules! element_impl_int {
    ($t:ty) => {
        impl Element for $t {
            fn zero() -> Self {
                0
            }

            fn max_value() -> Self {
                <$t>::MAX
            }

            // Margin check against the representable bounds; the sum
            // itself is only formed once it is known not to overflow.
            fn combine_add(self, rhs: Self) -> Self {
                if rhs > 0 && self > <$t>::MAX - rhs {
                    <$t>::MAX
                } else if rhs < 0 && self < <$t>::MIN - rhs {
                    <$t>::MIN
                } else {
                    self + rhs
                }
            }

            fn combine_mul(self, rhs: Self) -> Self {
                let wide = i128::from(self) * i128::from(rhs);
                if wide > i128::from(<$t>::MAX) {
                    <$t>::MAX
                } else if wide < i128::from(<$t>::MIN) {
                    <$t>::MIN
                } else {
                    wide as $t
                }
            }

            // Two's-complement negation: negate(MIN) == MIN.
            fn negate(self) -> Self {
                self.wrapping_neg()
            }

            fn approx_eq(self, rhs: Self) -> bool {
                self == rhs
            }

            fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
                rng.gen()
            }

            #[allow(clippy::cast_precision_loss)]
            fn as_f64(self) -> f64 {
                self as f64
            }
        }
    };
}

element_impl_int!(i8);
element_impl_int!(i16);
element_impl_int!(i32);
element_impl_int!(i64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_table() {
        assert!(!bool::zero());
        assert!(bool::max_value());
        assert!(false.combine_add(true));
        assert!(!false.combine_add(false));
        assert!(!true.combine_mul(false));
        assert!(true.combine_mul(true));
        assert!(!true.negate());
        assert!(false.negate());
    }

    #[test]
    fn test_float_tolerance_boundary() {
        // Exactly at the tolerance compares equal, just beyond does not.
        assert!(1.0_f64.approx_eq(1.0 + 1e-6));
        assert!(!1.0_f64.approx_eq(1.0 + 2e-6));
        assert!(0.5_f32.approx_eq(0.5));
    }

    #[test]
    fn test_int_add_saturates_high() {
        assert_eq!(100_i8.combine_add(100), i8::MAX);
        assert_eq!(i8::MAX.combine_add(1), i8::MAX);
        assert_eq!(i16::MAX.combine_add(i16::MAX), i16::MAX);
    }

    #[test]
    fn test_int_add_saturates_low() {
        assert_eq!((-100_i8).combine_add(-100), i8::MIN);
        assert_eq!(i8::MIN.combine_add(-1), i8::MIN);
        assert_eq!(i64::MIN.combine_add(i64::MIN), i64::MIN);
    }

    #[test]
    fn test_int_add_in_range_is_exact() {
        assert_eq!(100_i8.combine_add(27), 127);
        assert_eq!((-100_i8).combine_add(-28), -128);
        assert_eq!(3_i32.combine_add(-5), -2);
    }

    #[test]
    fn test_int_mul_saturates() {
        assert_eq!(100_i8.combine_mul(2), i8::MAX);
        assert_eq!((-100_i8).combine_mul(2), i8::MIN);
        assert_eq!(i64::MAX.combine_mul(i64::MAX), i64::MAX);
        assert_eq!(i64::MIN.combine_mul(i64::MAX), i64::MIN);
    }

    #[test]
    fn test_int_mul_in_range_is_exact() {
        assert_eq!(11_i8.combine_mul(-11), -121);
        assert_eq!(0_i32.combine_mul(i32::MIN), 0);
    }

    #[test]
    fn test_int_negate_is_twos_complement() {
        assert_eq!(5_i8.negate(), -5);
        assert_eq!((-5_i8).negate(), 5);
        assert_eq!(i8::MIN.negate(), i8::MIN);
        assert_eq!(i32::MIN.negate(), i32::MIN);
    }

    #[test]
    fn test_sample_is_deterministic_with_seed() {
        use rand::{rngs::StdRng, SeedableRng};

        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(<i16 as Element>::sample(&mut a), <i16 as Element>::sample(&mut b));
        let x: f64 = Element::sample(&mut a);
        let y: f64 = Element::sample(&mut b);
        assert!((0.0..1.0).contains(&x));
        assert!(x.approx_eq(y));
    }
}
