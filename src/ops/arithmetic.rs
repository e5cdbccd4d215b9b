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

//! # Checked Arithmetic
//!
//! Addition, subtraction, multiplication, division, and modulus with
//! pre-checks phrased against the bounds of the result type. The additive
//! operations compare the operands with a rearranged bound (INT30-C,
//! INT32-C); multiplication either promotes through a 128-bit intermediate
//! that cannot overflow or, for the 128-bit result types, pre-checks by
//! division; division and modulus reject the zero divisor and the one
//! signed quotient that has no representation.
//!
//! Every guard is arranged so its own arithmetic stays in range, which
//! keeps the functions total and the debug-build overflow checks silent.

use crate::int::{CheckedInteger, SignMagnitude};
use crate::ops::cast::{cast, narrow_checked};
use crate::result::{CheckedError, CheckedResult, ErrorKind};

/// Checked addition: `t + u` as an `R`, or the overflow category the sum
/// falls into.
///
/// # Examples
///
/// ```rust
/// use intcheck::{add, ErrorKind};
///
/// assert_eq!(add::<u8, _, _>(200u8, 55u8), Ok(255u8));
/// assert_eq!(
///     add::<u8, _, _>(200u8, 56u8).unwrap_err().kind(),
///     ErrorKind::PositiveOverflow,
/// );
/// assert_eq!(add::<i16, _, _>(200u8, 56u8), Ok(256i16));
/// ```
pub fn add<R, T, U>(t: T, u: U) -> CheckedResult<R>
where
    R: CheckedInteger,
    T: CheckedInteger,
    U: CheckedInteger,
{
    let t = cast::<R, T>(t)?;
    let u = cast::<R, U>(u)?;
    if R::SIGNED {
        add_signed(t, u)
    } else {
        add_unsigned(t, u)
    }
}

fn add_unsigned<R>(t: R, u: R) -> CheckedResult<R>
where
    R: CheckedInteger,
{
    if R::max_value() - u < t {
        Err(CheckedError::new(
            ErrorKind::PositiveOverflow,
            "addition result too large",
        ))
    } else {
        Ok(t + u)
    }
}

fn add_signed<R>(t: R, u: R) -> CheckedResult<R>
where
    R: CheckedInteger,
{
    if u > R::zero() && t > R::max_value() - u {
        Err(CheckedError::new(
            ErrorKind::PositiveOverflow,
            "addition result too large",
        ))
    } else if u < R::zero() && t < R::min_value() - u {
        Err(CheckedError::new(
            ErrorKind::NegativeOverflow,
            "addition result too low",
        ))
    } else {
        Ok(t + u)
    }
}

/// Checked subtraction: `t - u` as an `R`.
///
/// An unsigned result type rejects any difference below zero as a range
/// error rather than wrapping.
///
/// # Examples
///
/// ```rust
/// use intcheck::{subtract, ErrorKind};
///
/// assert_eq!(subtract::<u8, _, _>(5u8, 3u8), Ok(2u8));
/// assert_eq!(
///     subtract::<u8, _, _>(3u8, 5u8).unwrap_err().kind(),
///     ErrorKind::Range,
/// );
/// assert_eq!(subtract::<i8, _, _>(3u8, 5u8), Ok(-2i8));
/// ```
pub fn subtract<R, T, U>(t: T, u: U) -> CheckedResult<R>
where
    R: CheckedInteger,
    T: CheckedInteger,
    U: CheckedInteger,
{
    let t = cast::<R, T>(t)?;
    let u = cast::<R, U>(u)?;
    if R::SIGNED {
        subtract_signed(t, u)
    } else {
        subtract_unsigned(t, u)
    }
}

fn subtract_unsigned<R>(t: R, u: R) -> CheckedResult<R>
where
    R: CheckedInteger,
{
    if t < u {
        Err(CheckedError::new(
            ErrorKind::Range,
            "subtraction result cannot be negative",
        ))
    } else {
        Ok(t - u)
    }
}

fn subtract_signed<R>(t: R, u: R) -> CheckedResult<R>
where
    R: CheckedInteger,
{
    if u > R::zero() && t < R::min_value() + u {
        Err(CheckedError::new(
            ErrorKind::PositiveOverflow,
            "subtraction result overflows result type",
        ))
    } else if u < R::zero() && t > R::max_value() + u {
        Err(CheckedError::new(
            ErrorKind::NegativeOverflow,
            "subtraction result overflows result type",
        ))
    } else {
        Ok(t - u)
    }
}

/// Checked multiplication: `t * u` as an `R`.
///
/// Result types up to 64 bits are verified through a 128-bit intermediate
/// product that cannot itself overflow. The 128-bit result types have no
/// wider intermediate available, so they are verified by dividing the bound
/// by one operand, split over the sign quadrants to keep every division in
/// range.
///
/// # Examples
///
/// ```rust
/// use intcheck::{multiply, ErrorKind};
///
/// assert_eq!(multiply::<i8, _, _>(-16i8, 8i8), Ok(-128i8));
/// assert_eq!(
///     multiply::<i8, _, _>(-128i8, -1i8).unwrap_err().kind(),
///     ErrorKind::PositiveOverflow,
/// );
/// assert_eq!(multiply::<i128, _, _>(i64::MAX, 4i8), Ok(i128::from(i64::MAX) * 4));
/// ```
pub fn multiply<R, T, U>(t: T, u: U) -> CheckedResult<R>
where
    R: CheckedInteger,
    T: CheckedInteger,
    U: CheckedInteger,
{
    let t = cast::<R, T>(t)?;
    let u = cast::<R, U>(u)?;
    if R::BITS <= 64 {
        multiply_promoted(t, u)
    } else if R::SIGNED {
        multiply_by_division_signed(t, u)
    } else {
        multiply_by_division_unsigned(t, u)
    }
}

fn multiply_promoted<R>(t: R, u: R) -> CheckedResult<R>
where
    R: CheckedInteger,
{
    let lhs = t.widen();
    let rhs = u.widen();
    // both magnitudes occupy at most 64 bits, so the product fits in 128
    let magnitude = lhs.magnitude() * rhs.magnitude();
    let product = if lhs.is_negative() != rhs.is_negative() {
        SignMagnitude::negative(magnitude)
    } else {
        SignMagnitude::positive(magnitude)
    };
    if product > R::max_value().widen() {
        Err(CheckedError::new(
            ErrorKind::PositiveOverflow,
            "multiplication overflow",
        ))
    } else if product < R::min_value().widen() {
        Err(CheckedError::new(
            ErrorKind::NegativeOverflow,
            "multiplication overflow",
        ))
    } else {
        Ok(t * u)
    }
}

fn multiply_by_division_unsigned<R>(t: R, u: R) -> CheckedResult<R>
where
    R: CheckedInteger,
{
    if u > R::zero() && t > R::max_value() / u {
        Err(CheckedError::new(
            ErrorKind::PositiveOverflow,
            "multiplication overflow",
        ))
    } else {
        Ok(t * u)
    }
}

fn multiply_by_division_signed<R>(t: R, u: R) -> CheckedResult<R>
where
    R: CheckedInteger,
{
    let overflow = CheckedError::new(ErrorKind::PositiveOverflow, "multiplication overflow");
    let underflow = CheckedError::new(ErrorKind::NegativeOverflow, "multiplication overflow");
    if t > R::zero() {
        if u > R::zero() {
            if t > R::max_value() / u {
                return Err(overflow);
            }
        } else if u < R::min_value() / t {
            return Err(underflow);
        }
    } else if u > R::zero() {
        if t < R::min_value() / u {
            return Err(underflow);
        }
    } else if t != R::zero() && u < R::max_value() / t {
        return Err(overflow);
    }
    Ok(t * u)
}

/// Checked division: `t / u` as an `R`, truncated toward zero.
///
/// A zero divisor is a domain error. An operand that does not convert into
/// `R` is reported as a domain error as well, since the quotient is then
/// not meaningful in `R`. For signed `R`, `R::MIN / -1` is the one quotient
/// whose magnitude exceeds the type and is rejected as a range error.
///
/// # Examples
///
/// ```rust
/// use intcheck::{divide, ErrorKind};
///
/// assert_eq!(divide::<i32, _, _>(7i32, -2i32), Ok(-3i32));
/// assert_eq!(
///     divide::<i32, _, _>(10i32, 0i32).unwrap_err().kind(),
///     ErrorKind::Domain,
/// );
/// assert_eq!(
///     divide::<i8, _, _>(-128i8, -1i8).unwrap_err().kind(),
///     ErrorKind::Range,
/// );
/// ```
pub fn divide<R, T, U>(t: T, u: U) -> CheckedResult<R>
where
    R: CheckedInteger,
    T: CheckedInteger,
    U: CheckedInteger,
{
    if u == U::zero() {
        return Err(CheckedError::new(ErrorKind::Domain, "divide by zero"));
    }
    let (t, u) = match (cast::<R, T>(t), cast::<R, U>(u)) {
        (Ok(t), Ok(u)) => (t, u),
        _ => {
            return Err(CheckedError::new(
                ErrorKind::Domain,
                "failure converting argument types",
            ))
        }
    };
    if R::SIGNED {
        let minus_one = R::zero() - R::one();
        if u == minus_one && t == R::min_value() {
            return Err(CheckedError::new(
                ErrorKind::Range,
                "result cannot be represented",
            ));
        }
    }
    Ok(t / u)
}

/// Checked modulus: `t mod |u|` as an `R`, with the sign of the dividend.
///
/// The remainder is computed on exact magnitudes rather than with the
/// native remainder instruction, which evaluates `t / u` as a side effect
/// and traps on `MIN / -1`. Working on magnitudes also makes `|U::MIN|`
/// exact, so no divisor needs special-casing.
///
/// # Examples
///
/// ```rust
/// use intcheck::{modulus, ErrorKind};
///
/// assert_eq!(modulus::<i8, _, _>(-7i8, 3i8), Ok(-1i8));
/// assert_eq!(modulus::<i8, _, _>(-128i8, -1i8), Ok(0i8));
/// assert_eq!(
///     modulus::<i8, _, _>(1i8, 0i8).unwrap_err().kind(),
///     ErrorKind::Domain,
/// );
/// ```
pub fn modulus<R, T, U>(t: T, u: U) -> CheckedResult<R>
where
    R: CheckedInteger,
    T: CheckedInteger,
    U: CheckedInteger,
{
    if u == U::zero() {
        return Err(CheckedError::new(ErrorKind::Domain, "denominator is zero"));
    }
    let dividend = t.widen();
    let magnitude = dividend.magnitude() % u.widen().magnitude();
    let remainder = if dividend.is_negative() {
        SignMagnitude::negative(magnitude)
    } else {
        SignMagnitude::positive(magnitude)
    };
    narrow_checked(remainder, T::SIGNED)
}
