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

//! # Checked Operations
//!
//! The operation family `op::<R, T, U>(t, u) -> CheckedResult<R>`. Every
//! binary operation follows the same shape: bring each operand into the
//! result type `R` with the checked [`cast`](cast::cast) (the first failed
//! conversion is returned as-is), then run a per-operation pre-check against
//! the bounds of `R` that guarantees the native operation produces the exact
//! mathematical result. No operation performs the native computation first
//! and inspects flags or wrapped values afterwards.
//!
//! ## Submodules
//!
//! - `cast`: the four-quadrant checked conversion every other operation
//!   builds on, plus the trivial integer-to-float cast.
//! - `arithmetic`: checked add, subtract, multiply, divide, and modulus.
//! - `shift`: checked left and right shift with the degenerate-count frame.
//! - `bitwise`: or, xor, and and, gated on the significant width of the
//!   operands.
//! - `comparison`: `<`, `>`, `==` lifted through the checked cast.

pub mod arithmetic;
pub mod bitwise;
pub mod cast;
pub mod comparison;
pub mod shift;
