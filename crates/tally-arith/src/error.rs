// Copyright (c) 2025 Felix Kahle.
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

//! Error taxonomy shared by every fallible arithmetic operation.
//!
//! All overflow is reported through `ArithmeticError::Overflow`; no function
//! in this crate wraps or saturates.

/// The error type returned by the arithmetic and exercise functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ArithmeticError {
    /// A divisor was zero.
    #[error("division by zero")]
    DivideByZero,
    /// The exact result is not representable in the integer type.
    #[error("arithmetic overflow in `{operation}`")]
    Overflow {
        /// The name of the operation that overflowed.
        operation: &'static str,
    },
    /// An input violated the operation's domain constraint.
    #[error("domain error in `{operation}`: {reason}")]
    Domain {
        /// The name of the operation that rejected its input.
        operation: &'static str,
        /// The violated constraint.
        reason: &'static str,
    },
}

impl ArithmeticError {
    #[inline]
    pub(crate) const fn overflow(operation: &'static str) -> Self {
        Self::Overflow { operation }
    }

    #[inline]
    pub(crate) const fn negative_input(operation: &'static str) -> Self {
        Self::Domain {
            operation,
            reason: "input must be non-negative",
        }
    }

    /// Returns `true` if this is an `Overflow` error.
    #[inline]
    pub const fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow { .. })
    }

    /// Returns `true` if this is a `Domain` error.
    #[inline]
    pub const fn is_domain(&self) -> bool {
        matches!(self, Self::Domain { .. })
    }
}

/// Shorthand for results of the arithmetic functions.
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;
