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

//! # Checked Results
//!
//! The value every checked operation returns. A [`CheckedResult<T>`] is an
//! ordinary [`Result`] whose error side is a [`CheckedError`]: a closed
//! diagnostic category plus a short static message. Keeping the alias on
//! `Result` means callers get `is_ok`/`is_err`, combinators, and `?`
//! propagation for free, and the crate's internal "first error wins" rule is
//! simply the `?` operator.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// The closed set of diagnostic categories a checked operation can report.
///
/// The categories track the CERT secure-coding rules the operations enforce:
/// INT30-C for unsigned wrap, INT32-C for signed overflow, INT34-C for shift
/// misuse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The mathematical result exceeds the maximum of the result type.
    PositiveOverflow,
    /// The mathematical result is less than the minimum of the result type.
    NegativeOverflow,
    /// The result is a valid integer but not representable in the result
    /// type, e.g. `i8::MIN / -1` or an unsigned subtraction going below
    /// zero.
    Range,
    /// The operation is mathematically undefined (division or modulus by
    /// zero) or a negative value was converted to an unsigned type.
    Domain,
    /// The native operation would be undefined behavior in the C family,
    /// such as left-shifting a negative value.
    UndefinedBehavior,
    /// The native operation is implementation defined in the C family, such
    /// as right-shifting a negative value or shifting by a negative amount.
    ImplementationDefined,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::PositiveOverflow => f.write_str("positive overflow"),
            ErrorKind::NegativeOverflow => f.write_str("negative overflow"),
            ErrorKind::Range => f.write_str("range error"),
            ErrorKind::Domain => f.write_str("domain error"),
            ErrorKind::UndefinedBehavior => f.write_str("undefined behavior"),
            ErrorKind::ImplementationDefined => f.write_str("implementation defined behavior"),
        }
    }
}

/// A failed checked operation: a category plus a short static diagnostic.
///
/// Errors are plain immutable values. The message is a `'static` literal, so
/// no allocation happens on the failure path.
///
/// # Examples
///
/// ```rust
/// use intcheck::{add, ErrorKind};
///
/// let err = add::<i8, _, _>(101i8, 27i8).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::PositiveOverflow);
/// assert_eq!(err.message(), "addition result too large");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CheckedError {
    kind: ErrorKind,
    message: &'static str,
}

impl CheckedError {
    /// Creates a new error from a category and a static diagnostic.
    #[inline]
    pub const fn new(kind: ErrorKind, message: &'static str) -> Self {
        Self { kind, message }
    }

    /// Returns the diagnostic category.
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the static human-readable diagnostic.
    #[inline]
    pub const fn message(&self) -> &'static str {
        self.message
    }
}

impl Display for CheckedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl Error for CheckedError {}

/// The outcome of a checked operation: either the exact result in the
/// nominated type, or a [`CheckedError`] describing why it does not exist.
pub type CheckedResult<T> = Result<T, CheckedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let err = CheckedError::new(ErrorKind::Range, "result cannot be represented");
        assert_eq!(err.kind(), ErrorKind::Range);
        assert_eq!(err.message(), "result cannot be represented");
    }

    #[test]
    fn test_display() {
        let err = CheckedError::new(ErrorKind::Domain, "divide by zero");
        assert_eq!(format!("{}", err), "domain error: divide by zero");
        assert_eq!(format!("{}", ErrorKind::PositiveOverflow), "positive overflow");
        assert_eq!(
            format!("{}", ErrorKind::ImplementationDefined),
            "implementation defined behavior"
        );
    }

    #[test]
    fn test_result_alias_behaves_like_result() {
        let ok: CheckedResult<u8> = Ok(5);
        let err: CheckedResult<u8> =
            Err(CheckedError::new(ErrorKind::PositiveOverflow, "addition result too large"));
        assert!(ok.is_ok());
        assert!(err.is_err());
        assert_eq!(ok.unwrap(), 5);
        assert_eq!(err.unwrap_err().kind(), ErrorKind::PositiveOverflow);
    }
}
