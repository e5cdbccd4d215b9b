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

//! # Checked Comparison
//!
//! `<`, `>`, and `==` lifted through the checked cast: both operands are
//! brought into `R` first, and a conversion failure is the result. For a
//! comparison that cannot fail, see the [`compare`](crate::compare) module,
//! which compares exact values without nominating a result type.

use crate::int::CheckedInteger;
use crate::ops::cast::cast;
use crate::result::CheckedResult;

/// Checked less-than in the domain of `R`.
///
/// # Examples
///
/// ```rust
/// use intcheck::{less_than, ErrorKind};
///
/// assert_eq!(less_than::<i32, _, _>(-1i8, 1u8), Ok(true));
/// assert_eq!(
///     less_than::<u8, _, _>(-1i8, 1u8).unwrap_err().kind(),
///     ErrorKind::Domain,
/// );
/// ```
pub fn less_than<R, T, U>(t: T, u: U) -> CheckedResult<bool>
where
    R: CheckedInteger,
    T: CheckedInteger,
    U: CheckedInteger,
{
    let t = cast::<R, T>(t)?;
    let u = cast::<R, U>(u)?;
    Ok(t < u)
}

/// Checked greater-than in the domain of `R`.
pub fn greater_than<R, T, U>(t: T, u: U) -> CheckedResult<bool>
where
    R: CheckedInteger,
    T: CheckedInteger,
    U: CheckedInteger,
{
    let t = cast::<R, T>(t)?;
    let u = cast::<R, U>(u)?;
    Ok(t > u)
}

/// Checked equality in the domain of `R`.
pub fn equal<R, T, U>(t: T, u: U) -> CheckedResult<bool>
where
    R: CheckedInteger,
    T: CheckedInteger,
    U: CheckedInteger,
{
    let t = cast::<R, T>(t)?;
    let u = cast::<R, U>(u)?;
    Ok(t == u)
}
