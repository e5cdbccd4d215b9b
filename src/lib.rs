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

//! # Intcheck
//!
//! Checked primitives for machine-integer arithmetic. Every operation takes
//! operands of any two primitive integer types, nominates a result type `R`,
//! and returns a [`CheckedResult<R>`]: the mathematically correct value when
//! it is representable in `R`, and a categorized [`CheckedError`] otherwise.
//! No operation wraps, truncates, saturates, or reaches undefined behavior.
//!
//! All overflow detection is done with pre-checks phrased against the bounds
//! of the result type, never by performing the native operation and
//! inspecting the aftermath. The error taxonomy follows the CERT secure
//! coding rules INT30-C (unsigned wrap), INT32-C (signed overflow), and
//! INT34-C (shift misuse).
//!
//! ## Modules
//!
//! - `result`: the [`CheckedResult`] value, [`CheckedError`], and the closed
//!   [`ErrorKind`] taxonomy.
//! - `int`: the [`CheckedInteger`] trait implemented by every primitive
//!   integer type, plus the lossless [`SignMagnitude`] operand view that
//!   backs conversions and cross-type comparison.
//! - `compare`: sign-safe comparisons between values of any two integer
//!   types, immune to the surprises of implicit conversion.
//! - `bits`: bit-width utilities ([`bits::significant_bits`],
//!   [`bits::bits_of`]).
//! - `ops`: the checked operations themselves — cast, arithmetic, shifts,
//!   bitwise, and comparisons — re-exported at the crate root.
//!
//! ## Example
//!
//! ```rust
//! use intcheck::{add, cast, divide, ErrorKind};
//!
//! // In-range results come back as plain values of the nominated type.
//! assert_eq!(add::<u8, _, _>(200u8, 55u8), Ok(255u8));
//!
//! // Out-of-range results are categorized, never wrapped.
//! let err = add::<u8, _, _>(200u8, 56u8).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::PositiveOverflow);
//!
//! // Conversions are part of every operation: operands of mixed types and
//! // signedness are first brought into the result type, safely.
//! assert_eq!(cast::<u8, _>(-1i8).unwrap_err().kind(), ErrorKind::Domain);
//! assert_eq!(divide::<i32, _, _>(10i32, 0i32).unwrap_err().kind(), ErrorKind::Domain);
//! ```
//!
//! ## Purpose
//!
//! The crate is a policy-free core: it reports failures as values and leaves
//! the decision to panic, propagate, log, or substitute entirely to the
//! caller. Every operation is a pure function of its operands — no shared
//! state, no allocation, no side effects — and is safe to call from any
//! thread.

pub mod bits;
pub mod compare;
pub mod int;
pub mod ops;
pub mod result;

pub use crate::int::{CheckedInteger, SignMagnitude};
pub use crate::ops::arithmetic::{add, divide, modulus, multiply, subtract};
pub use crate::ops::bitwise::{bitwise_and, bitwise_or, bitwise_xor};
pub use crate::ops::cast::{cast, cast_float};
pub use crate::ops::comparison::{equal, greater_than, less_than};
pub use crate::ops::shift::{left_shift, right_shift};
pub use crate::result::{CheckedError, CheckedResult, ErrorKind};
