//!
//! FlowRateLike trait for generics of Flow amount
//!
//! i32 and i64 implements FlowRateLike
//!

use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

///
/// generic FlowRate
///
/// Flow on a residual edge is the negation of its partner's flow,
/// so the amount must be signed.
///
pub trait FlowRateLike:
    Copy
    + Eq
    + Ord
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + Sum
    + Default
    + std::fmt::Debug
    + std::fmt::Display
{
    /// zero value = 0
    fn zero() -> Self;
    /// effectively-infinite amount, bounding a path search.
    /// Half of the max value so that `infinity() + x` never overflows for a valid capacity `x`.
    fn infinity() -> Self;
    /// `self + rhs`, or `None` on overflow
    fn checked_add(self, rhs: Self) -> Option<Self>;
    /// `self + rhs`, clamped at the max/min value
    fn saturating_add(self, rhs: Self) -> Self;
    /// is strictly positive
    fn is_positive(self) -> bool {
        self > Self::zero()
    }
    /// is strictly negative
    fn is_negative(self) -> bool {
        self < Self::zero()
    }
}

macro_rules! impl_flow_rate_like {
    ($($t:ty),*) => {
        $(
            impl FlowRateLike for $t {
                fn zero() -> Self {
                    0
                }
                fn infinity() -> Self {
                    <$t>::MAX / 2
                }
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }
                fn saturating_add(self, rhs: Self) -> Self {
                    <$t>::saturating_add(self, rhs)
                }
            }
        )*
    };
}

impl_flow_rate_like!(i32, i64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infinity_does_not_overflow_on_add() {
        assert_eq!(i64::infinity(), i64::MAX / 2);
        assert!(i64::infinity().checked_add(i64::infinity()).is_some());
        assert!(i32::infinity().checked_add(i32::infinity()).is_some());
    }

    #[test]
    fn sign_helpers() {
        assert!(FlowRateLike::is_positive(5i64));
        assert!(!FlowRateLike::is_positive(0i64));
        assert!(FlowRateLike::is_negative(-3i32));
        assert!(!FlowRateLike::is_negative(0i32));
        assert_eq!(<i64 as FlowRateLike>::zero(), 0);
    }

    #[test]
    fn checked_and_saturating_add() {
        assert_eq!(FlowRateLike::checked_add(3i64, 4), Some(7));
        assert_eq!(FlowRateLike::checked_add(i64::MAX, 1), None);
        assert_eq!(FlowRateLike::checked_add(i32::MIN, -1), None);
        assert_eq!(FlowRateLike::saturating_add(i32::MAX, 1), i32::MAX);
        assert_eq!(FlowRateLike::saturating_add(i64::MIN, -5), i64::MIN);
        assert_eq!(FlowRateLike::saturating_add(-2i64, 5), 3);
    }
}
