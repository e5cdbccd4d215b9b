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

//! # Checked Cast
//!
//! Conversion of a value of any integer type into any other, reported
//! against the four signedness quadrants of source and destination:
//!
//! | to       | from     | failure                                         |
//! |----------|----------|-------------------------------------------------|
//! | signed   | signed   | positive or negative overflow                   |
//! | signed   | unsigned | positive overflow                               |
//! | unsigned | unsigned | positive overflow                               |
//! | unsigned | signed   | domain error below zero, else positive overflow |
//!
//! The comparisons behind the checks are exact for every pair of types; a
//! value that converts successfully always round-trips.

use num_traits::Float;

use crate::int::{CheckedInteger, SignMagnitude};
use crate::result::{CheckedError, CheckedResult, ErrorKind};

/// Converts `t` into the integer type `R`, or reports which bound of `R`
/// the value violates.
///
/// # Examples
///
/// ```rust
/// use intcheck::{cast, ErrorKind};
///
/// assert_eq!(cast::<u8, _>(200i32), Ok(200u8));
/// assert_eq!(cast::<i32, _>(-7i8), Ok(-7i32));
/// assert_eq!(cast::<u8, _>(-1i8).unwrap_err().kind(), ErrorKind::Domain);
/// assert_eq!(
///     cast::<i8, _>(128u8).unwrap_err().kind(),
///     ErrorKind::PositiveOverflow,
/// );
/// ```
#[inline]
pub fn cast<R, T>(t: T) -> CheckedResult<R>
where
    R: CheckedInteger,
    T: CheckedInteger,
{
    narrow_checked(t.widen(), T::SIGNED)
}

/// Converts `t` into the floating-point type `R`.
///
/// Every primitive integer value has a defined (possibly rounded) float
/// counterpart, so this conversion cannot fail for the types this crate
/// implements.
///
/// # Examples
///
/// ```rust
/// use intcheck::cast_float;
///
/// assert_eq!(cast_float::<f64, _>(42u8), Ok(42.0));
/// assert_eq!(cast_float::<f32, _>(-3i64), Ok(-3.0));
/// ```
#[inline]
pub fn cast_float<R, T>(t: T) -> CheckedResult<R>
where
    R: Float,
    T: CheckedInteger,
{
    match num_traits::cast(t) {
        Some(value) => Ok(value),
        None => Err(CheckedError::new(
            ErrorKind::Domain,
            "failure converting argument types",
        )),
    }
}

/// Converts an exact sign-magnitude value into `R`, categorizing a failure
/// by the quadrant it occurred in. `from_signed` selects the diagnostic for
/// the signedness of the originating type.
pub(crate) fn narrow_checked<R>(value: SignMagnitude, from_signed: bool) -> CheckedResult<R>
where
    R: CheckedInteger,
{
    match R::narrow(value) {
        Some(converted) => Ok(converted),
        None if value.is_negative() && !R::SIGNED => Err(CheckedError::new(
            ErrorKind::Domain,
            "converted negative value to unsigned",
        )),
        None if value.is_negative() => Err(CheckedError::new(
            ErrorKind::NegativeOverflow,
            "converted signed value too small",
        )),
        None if from_signed => Err(CheckedError::new(
            ErrorKind::PositiveOverflow,
            "converted signed value too large",
        )),
        None => Err(CheckedError::new(
            ErrorKind::PositiveOverflow,
            "converted unsigned value too large",
        )),
    }
}
