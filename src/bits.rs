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

//! # Bit Utilities
//!
//! Width facts about runtime values and about types, consumed by the shift
//! and bitwise cores.

use crate::int::CheckedInteger;

/// Returns the minimal number of bits required to represent the magnitude of
/// `value`: the position of the highest set bit of `|value|` plus one, and
/// zero for a zero value.
///
/// Defined for every value including `T::MIN`, whose magnitude is taken
/// exactly.
///
/// # Examples
///
/// ```rust
/// use intcheck::bits::significant_bits;
///
/// assert_eq!(significant_bits(0u8), 0);
/// assert_eq!(significant_bits(1u8), 1);
/// assert_eq!(significant_bits(255u8), 8);
/// assert_eq!(significant_bits(-4i8), 3);
/// assert_eq!(significant_bits(i8::MIN), 8);
/// ```
#[inline]
pub fn significant_bits<T>(value: T) -> u32
where
    T: CheckedInteger,
{
    u128::BITS - value.widen().magnitude().leading_zeros()
}

/// Returns the fixed bit width of the integer type `T`.
///
/// # Examples
///
/// ```rust
/// use intcheck::bits::bits_of;
///
/// assert_eq!(bits_of::<u16>(), 16);
/// assert_eq!(bits_of::<i128>(), 128);
/// ```
#[inline]
pub fn bits_of<T>() -> u32
where
    T: CheckedInteger,
{
    T::BITS
}
