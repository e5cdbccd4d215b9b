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

//! # Checked Shifts
//!
//! Left and right shift under the INT34-C rules. Both directions share a
//! frame that handles the degenerate counts first: a zero count is the
//! identity, a negative count or a count reaching the width of the result
//! type is implementation defined in the C family, and a zero operand
//! shifts to zero. What remains is dispatched on the signedness of the
//! operand type; shifting a negative value left is undefined behavior, and
//! shifting one right is implementation defined.
//!
//! The shift itself is evaluated on the operand's widened magnitude, so a
//! count that exceeds the operand type's own width (legal when the result
//! type is wider) cannot trap the way a native shift would.

use crate::bits::significant_bits;
use crate::int::{CheckedInteger, SignMagnitude};
use crate::ops::cast::{cast, narrow_checked};
use crate::result::{CheckedError, CheckedResult, ErrorKind};

/// Validates the shift count against the result type and returns it as a
/// plain machine count.
fn shift_amount<R, U>(u: U) -> Result<u32, CheckedError>
where
    R: CheckedInteger,
    U: CheckedInteger,
{
    if u < U::zero() {
        return Err(CheckedError::new(
            ErrorKind::ImplementationDefined,
            "shifting negative amount is implementation defined behavior",
        ));
    }
    let amount = u.widen().magnitude();
    if amount >= u128::from(R::BITS) {
        return Err(CheckedError::new(
            ErrorKind::ImplementationDefined,
            "shifting more bits than available is implementation defined behavior",
        ));
    }
    Ok(amount as u32)
}

/// Checked left shift: `t << u` as an `R`.
///
/// A shifted bit must never leave the value bits of `R`: the count plus the
/// significant width of the operand has to stay within `R`'s width (minus
/// the sign bit for signed `R`). Shifting a negative operand left is
/// undefined behavior in the C family and is rejected outright.
///
/// # Examples
///
/// ```rust
/// use intcheck::{left_shift, ErrorKind};
///
/// assert_eq!(left_shift::<u8, _, _>(1u8, 7u8), Ok(128u8));
/// assert_eq!(
///     left_shift::<u8, _, _>(1u8, 8u8).unwrap_err().kind(),
///     ErrorKind::ImplementationDefined,
/// );
/// assert_eq!(
///     left_shift::<u16, _, _>(0xFFu16, 9u8).unwrap_err().kind(),
///     ErrorKind::UndefinedBehavior,
/// );
/// assert_eq!(left_shift::<u16, _, _>(0xFFu16, 8u8), Ok(0xFF00u16));
/// ```
pub fn left_shift<R, T, U>(t: T, u: U) -> CheckedResult<R>
where
    R: CheckedInteger,
    T: CheckedInteger,
    U: CheckedInteger,
{
    if u == U::zero() {
        return cast::<R, T>(t);
    }
    let amount = shift_amount::<R, U>(u)?;
    if t == T::zero() {
        return Ok(R::zero());
    }
    if T::SIGNED && t < T::zero() {
        return Err(CheckedError::new(
            ErrorKind::UndefinedBehavior,
            "shifting a negative value is undefined behavior",
        ));
    }
    let value_bits = if R::SIGNED { R::BITS - 1 } else { R::BITS };
    if amount + significant_bits(t) > value_bits {
        return Err(CheckedError::new(
            ErrorKind::UndefinedBehavior,
            "shifting left more bits than available is undefined behavior",
        ));
    }
    narrow_checked(
        SignMagnitude::positive(t.widen().magnitude() << amount),
        T::SIGNED,
    )
}

/// Checked right shift: `t >> u` as an `R`.
///
/// Right-shifting a negative operand is implementation defined in the C
/// family and is rejected; for a non-negative operand the result is the
/// truncated quotient by a power of two, converted into `R` under the cast
/// rules.
///
/// # Examples
///
/// ```rust
/// use intcheck::{right_shift, ErrorKind};
///
/// assert_eq!(right_shift::<u8, _, _>(128u8, 7u8), Ok(1u8));
/// assert_eq!(right_shift::<u8, _, _>(1000u16, 2u8), Ok(250u8));
/// assert_eq!(
///     right_shift::<i8, _, _>(-4i8, 1u8).unwrap_err().kind(),
///     ErrorKind::ImplementationDefined,
/// );
/// ```
pub fn right_shift<R, T, U>(t: T, u: U) -> CheckedResult<R>
where
    R: CheckedInteger,
    T: CheckedInteger,
    U: CheckedInteger,
{
    if u == U::zero() {
        return cast::<R, T>(t);
    }
    let amount = shift_amount::<R, U>(u)?;
    if t == T::zero() {
        return Ok(R::zero());
    }
    if T::SIGNED && t < T::zero() {
        return Err(CheckedError::new(
            ErrorKind::ImplementationDefined,
            "shifting a negative value is implementation defined behavior",
        ));
    }
    narrow_checked(
        SignMagnitude::positive(t.widen().magnitude() >> amount),
        T::SIGNED,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_shift_boundaries() {
        assert_eq!(left_shift::<u8, _, _>(1u8, 7u8), Ok(128u8));
        assert_eq!(
            left_shift::<u8, _, _>(1u8, 8u8).unwrap_err().kind(),
            ErrorKind::ImplementationDefined
        );
        assert_eq!(
            left_shift::<i8, _, _>(-1i8, 1u8).unwrap_err().kind(),
            ErrorKind::UndefinedBehavior
        );
        assert_eq!(
            left_shift::<u16, _, _>(0xFFu16, 9u8).unwrap_err().kind(),
            ErrorKind::UndefinedBehavior
        );
        assert_eq!(left_shift::<u16, _, _>(0xFFu16, 8u8), Ok(0xFF00u16));
        assert_eq!(
            left_shift::<u8, _, _>(1u8, -1i8).unwrap_err().kind(),
            ErrorKind::ImplementationDefined
        );
    }

    #[test]
    fn test_shift_zero_count_is_identity() {
        assert_eq!(left_shift::<u8, _, _>(200u8, 0u8), Ok(200u8));
        assert_eq!(right_shift::<i8, _, _>(-4i8, 0u8), Ok(-4i8));
        // the identity still has to produce a value of the result type
        assert_eq!(
            left_shift::<u8, _, _>(-1i8, 0u8).unwrap_err().kind(),
            ErrorKind::Domain
        );
    }

    #[test]
    fn test_shift_zero_operand() {
        assert_eq!(left_shift::<u8, _, _>(0u8, 5u8), Ok(0u8));
        assert_eq!(right_shift::<u64, _, _>(0i8, 63u8), Ok(0u64));
    }

    #[test]
    fn test_left_shift_signed_result_keeps_sign_bit_clear() {
        assert_eq!(left_shift::<i8, _, _>(1i8, 6u8), Ok(64i8));
        assert_eq!(
            left_shift::<i8, _, _>(1i8, 7u8).unwrap_err().kind(),
            ErrorKind::UndefinedBehavior
        );
        assert_eq!(
            left_shift::<i8, _, _>(64u8, 1u8).unwrap_err().kind(),
            ErrorKind::UndefinedBehavior
        );
    }

    #[test]
    fn test_left_shift_into_wider_result() {
        assert_eq!(left_shift::<u64, _, _>(0xFFu8, 32u8), Ok(0xFF_0000_0000u64));
        assert_eq!(left_shift::<u128, _, _>(1u8, 127u8), Ok(1u128 << 127));
    }

    #[test]
    fn test_right_shift_boundaries() {
        assert_eq!(
            right_shift::<i8, _, _>(-4i8, 1u8).unwrap_err().kind(),
            ErrorKind::ImplementationDefined
        );
        assert_eq!(
            right_shift::<u8, _, _>(1u8, 8u8).unwrap_err().kind(),
            ErrorKind::ImplementationDefined
        );
        assert_eq!(
            right_shift::<u8, _, _>(1u8, -2i8).unwrap_err().kind(),
            ErrorKind::ImplementationDefined
        );
        assert_eq!(right_shift::<u8, _, _>(255u8, 7u8), Ok(1u8));
    }

    #[test]
    fn test_right_shift_count_beyond_operand_width() {
        // legal: the count is checked against the result type, and the
        // widened shift cannot trap
        assert_eq!(right_shift::<u64, _, _>(5u8, 20u8), Ok(0u64));
        assert_eq!(right_shift::<u64, _, _>(u32::MAX, 33u8), Ok(0u64));
    }

    #[test]
    fn test_right_shift_result_must_convert() {
        assert_eq!(right_shift::<u8, _, _>(1000u16, 2u8), Ok(250u8));
        assert_eq!(
            right_shift::<u8, _, _>(1000u16, 1u8).unwrap_err().kind(),
            ErrorKind::PositiveOverflow
        );
    }

    #[test]
    fn test_left_shift_matches_reference_for_all_u8() {
        for t in u8::MIN..=u8::MAX {
            for amount in 0u8..=9 {
                let result = left_shift::<u8, _, _>(t, amount);
                if amount == 0 {
                    assert_eq!(result, Ok(t));
                } else if amount >= 8 {
                    assert_eq!(result.unwrap_err().kind(), ErrorKind::ImplementationDefined);
                } else if t == 0 {
                    assert_eq!(result, Ok(0));
                } else if u32::from(t) << amount > u32::from(u8::MAX) {
                    assert_eq!(result.unwrap_err().kind(), ErrorKind::UndefinedBehavior);
                } else {
                    assert_eq!(result, Ok(t << amount));
                }
            }
        }
    }

    #[test]
    fn test_right_shift_matches_reference_for_all_i8() {
        for t in i8::MIN..=i8::MAX {
            for amount in 1u8..=7 {
                let result = right_shift::<i8, _, _>(t, amount);
                if t == 0 {
                    assert_eq!(result, Ok(0));
                } else if t < 0 {
                    assert_eq!(result.unwrap_err().kind(), ErrorKind::ImplementationDefined);
                } else {
                    assert_eq!(result, Ok(t >> amount));
                }
            }
        }
    }
}
