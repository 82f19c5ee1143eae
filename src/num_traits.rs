//! # Numeric weights
//!
//! Edge weights and capacities are generic over [`Weight`], implemented for every
//! primitive integer and float. The trait only asks for what the algorithms in
//! this crate actually do with a weight: compare it, add and subtract it, and
//! produce the neutral values `zero` and `one` (the latter is the weight every
//! edge of an unweighted graph receives).
//!
//! ## Capacity validity
//!
//! Spanning forests and flows require non-negative weights. For floats `NaN`
//! and the infinities are rejected as well: `NaN` poisons every comparison and
//! `inf - inf` turns a saturated arc into `NaN`.
//!
//! Sums that the algorithms accumulate (forest weights, residual pairs, flow
//! values) go through [`Weight::checked_add`] first, so a narrow integer type
//! is reported as too small instead of overflowing.

use duplicate::duplicate;
use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Sub, SubAssign};

pub trait Weight:
    Copy
    + PartialOrd
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + AddAssign
    + SubAssign
{
    fn zero() -> Self;

    fn one() -> Self;

    /// `true` when the value can be used as a capacity: at least zero and finite.
    fn is_valid_capacity(&self) -> bool;

    /// `self + other`, or `None` when the sum leaves the representable range
    /// (overflow for integers, infinity for floats).
    fn checked_add(self, other: Self) -> Option<Self>;

    fn is_positive(&self) -> bool {
        *self > Self::zero()
    }

    /// The smaller of the two values, preferring `self` on ties.
    fn min_of(self, other: Self) -> Self {
        if other < self {
            other
        } else {
            self
        }
    }
}

duplicate! {
    [types zero_value one_value;
        [f32] [0.0] [1.];
        [f64] [0.0] [1.];
        ]

    impl Weight for types {
        fn zero() -> Self {
            zero_value
        }

        fn one() -> Self {
            one_value
        }

        fn is_valid_capacity(&self) -> bool {
            self.is_finite() && *self >= zero_value
        }

        fn checked_add(self, other: Self) -> Option<Self> {
            let sum = self + other;
            sum.is_finite().then_some(sum)
        }
    }
}

duplicate! {
    [types;
        [i8]; [i16]; [i32]; [i64]; [i128]; [isize];
        [u8]; [u16]; [u32]; [u64]; [u128]; [usize];
        ]

    impl Weight for types {
        fn zero() -> Self {
            0
        }

        fn one() -> Self {
            1
        }

        #[allow(unused_comparisons)]
        fn is_valid_capacity(&self) -> bool {
            *self >= 0
        }

        fn checked_add(self, other: Self) -> Option<Self> {
            types::checked_add(self, other)
        }
    }
}

#[cfg(test)]
mod test {
    use super::Weight;

    #[test]
    fn capacities() {
        assert!(0u32.is_valid_capacity());
        assert!(3i64.is_valid_capacity());
        assert!(!(-1i32).is_valid_capacity());
        assert!(!f64::NAN.is_valid_capacity());
        assert!(!(-0.5f32).is_valid_capacity());
        assert!(!f64::INFINITY.is_valid_capacity());
        assert!(!f32::NEG_INFINITY.is_valid_capacity());
        assert!(f32::MAX.is_valid_capacity());
    }

    #[test]
    fn checked_sums() {
        assert_eq!(Weight::checked_add(200u8, 55), Some(255));
        assert_eq!(Weight::checked_add(200u8, 56), None);
        assert_eq!(Weight::checked_add(i64::MAX, -1), Some(i64::MAX - 1));
        assert_eq!(Weight::checked_add(1.5f64, 2.0), Some(3.5));
        assert_eq!(Weight::checked_add(f32::MAX, f32::MAX), None);
    }

    #[test]
    fn min_prefers_left_on_ties() {
        assert_eq!(4u8.min_of(7), 4);
        assert_eq!(7.5f64.min_of(2.5), 2.5);
        assert_eq!(i8::one().min_of(i8::one()), 1);
    }
}
