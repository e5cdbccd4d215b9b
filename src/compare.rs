// Copyright (c) 2025 the intcheck developers.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Sign-Safe Comparison
//!
//! Comparisons between integers of any two types that are always
//! mathematically correct over the integers. Mixed-sign comparisons in C
//! silently convert the signed operand and make `-1 > 1u32` true; these
//! functions instead compare the exact values: operands with the same sign
//! compare directly, and a negative operand is always the smaller one. That
//! rule is carried by the [`SignMagnitude`](crate::int::SignMagnitude)
//! ordering.
//!
//! # Examples
//!
//! ```rust
//! use intcheck::compare;
//!
//! assert!(compare::less_than(-1i8, 1u32));
//! assert!(compare::greater_than(u64::MAX, i64::MAX));
//! assert!(compare::equal(-5i8, -5i64));
//! ```

use crate::int::CheckedInteger;

/// Returns `true` iff `t < u` over the integers.
#[inline]
pub fn less_than<T, U>(t: T, u: U) -> bool
where
    T: CheckedInteger,
    U: CheckedInteger,
{
    t.widen() < u.widen()
}

/// Returns `true` iff `t > u` over the integers.
#[inline]
pub fn greater_than<T, U>(t: T, u: U) -> bool
where
    T: CheckedInteger,
    U: CheckedInteger,
{
    t.widen() > u.widen()
}

/// Returns `true` iff `t == u` over the integers.
#[inline]
pub fn equal<T, U>(t: T, u: U) -> bool
where
    T: CheckedInteger,
    U: CheckedInteger,
{
    t.widen() == u.widen()
}

/// Returns `true` iff `t <= u` over the integers.
#[inline]
pub fn less_than_equal<T, U>(t: T, u: U) -> bool
where
    T: CheckedInteger,
    U: CheckedInteger,
{
    t.widen() <= u.widen()
}

/// Returns `true` iff `t >= u` over the integers.
#[inline]
pub fn greater_than_equal<T, U>(t: T, u: U) -> bool
where
    T: CheckedInteger,
    U: CheckedInteger,
{
    t.widen() >= u.widen()
}

/// Returns `true` iff `t != u` over the integers.
#[inline]
pub fn not_equal<T, U>(t: T, u: U) -> bool
where
    T: CheckedInteger,
    U: CheckedInteger,
{
    t.widen() != u.widen()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_sign_is_exact() {
        assert!(less_than(-1i8, 0u8));
        assert!(less_than(-1i8, u128::MAX));
        assert!(greater_than(1u8, -1i128));
        assert!(!less_than(u32::MAX, -1i8));
        assert!(less_than(i128::MIN, i8::MIN));
    }

    #[test]
    fn test_same_sign_compares_directly() {
        assert!(less_than(3u8, 4u64));
        assert!(less_than(-4i64, -3i8));
        assert!(greater_than(-3i8, -4i64));
        assert!(!greater_than(7u16, 7u16));
    }

    #[test]
    fn test_equality_across_widths() {
        assert!(equal(200u8, 200i32));
        assert!(equal(-128i8, -128i64));
        assert!(not_equal(-1i8, 255u8));
        assert!(!equal(u64::MAX, i64::MAX));
    }

    #[test]
    fn test_non_strict_orderings() {
        assert!(less_than_equal(5i8, 5u8));
        assert!(less_than_equal(-6i8, 5u8));
        assert!(greater_than_equal(5u8, 5i8));
        assert!(greater_than_equal(5u8, -6i8));
        assert!(!less_than_equal(6u8, 5i8));
    }

    #[test]
    fn test_exhaustive_against_reference_i8_u8() {
        for t in i8::MIN..=i8::MAX {
            for u in u8::MIN..=u8::MAX {
                let (wt, wu) = (i32::from(t), i32::from(u));
                assert_eq!(less_than(t, u), wt < wu);
                assert_eq!(greater_than(t, u), wt > wu);
                assert_eq!(equal(t, u), wt == wu);
            }
        }
    }
}
