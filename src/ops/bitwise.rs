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

//! # Checked Bitwise Operations
//!
//! Or, xor, and and on the operands' two's-complement patterns. The guard is
//! a width check: the significant width of the result — the wider operand
//! for or and xor, the narrower for and — must fit the result type. The
//! operation itself runs on the sign-extended 128-bit patterns and the low
//! bits are taken as the result, so signed operands are permitted and keep
//! their familiar pattern semantics.

use crate::bits::{bits_of, significant_bits};
use crate::int::CheckedInteger;
use crate::result::{CheckedError, CheckedResult, ErrorKind};

/// Checked bitwise or.
///
/// # Examples
///
/// ```rust
/// use intcheck::bitwise_or;
///
/// assert_eq!(bitwise_or::<u8, _, _>(0xF0u8, 0x0Fu8), Ok(0xFFu8));
/// assert!(bitwise_or::<u8, _, _>(0x1FFu16, 1u8).is_err());
/// ```
pub fn bitwise_or<R, T, U>(t: T, u: U) -> CheckedResult<R>
where
    R: CheckedInteger,
    T: CheckedInteger,
    U: CheckedInteger,
{
    let result_width = significant_bits(t).max(significant_bits(u));
    if result_width > bits_of::<R>() {
        return Err(CheckedError::new(
            ErrorKind::PositiveOverflow,
            "result type too small to hold bitwise or",
        ));
    }
    Ok(R::from_bits(t.to_bits() | u.to_bits()))
}

/// Checked bitwise xor.
pub fn bitwise_xor<R, T, U>(t: T, u: U) -> CheckedResult<R>
where
    R: CheckedInteger,
    T: CheckedInteger,
    U: CheckedInteger,
{
    let result_width = significant_bits(t).max(significant_bits(u));
    if result_width > bits_of::<R>() {
        return Err(CheckedError::new(
            ErrorKind::PositiveOverflow,
            "result type too small to hold bitwise xor",
        ));
    }
    Ok(R::from_bits(t.to_bits() ^ u.to_bits()))
}

/// Checked bitwise and.
///
/// And can only clear bits, so the width bound is the narrower of the two
/// operands.
pub fn bitwise_and<R, T, U>(t: T, u: U) -> CheckedResult<R>
where
    R: CheckedInteger,
    T: CheckedInteger,
    U: CheckedInteger,
{
    let result_width = significant_bits(t).min(significant_bits(u));
    if result_width > bits_of::<R>() {
        return Err(CheckedError::new(
            ErrorKind::PositiveOverflow,
            "result type too small to hold bitwise and",
        ));
    }
    Ok(R::from_bits(t.to_bits() & u.to_bits()))
}
