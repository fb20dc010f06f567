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

//! # Tally Arith
//!
//! Pure, stateless integer arithmetic with explicitly documented behavior at
//! the edges of each function's domain: zero, negative values and the bounds
//! of the integer type.
//!
//! ## Modules
//!
//! - `math`: `negate`, `abs`, `gcd`, `lcm`, `factorial`, `fibonacci`,
//!   `divides_by`, `is_prime`, generic over every signed primitive.
//! - `exercises`: `i32` recursion exercises (`recursive_factorial`,
//!   `naive_fib`, `complex_function`, `is_n238`) and small helpers.
//! - `greeting`: greeting string formatting.
//! - `stats`: call counters for the naive recursions.
//! - `error`: the `ArithmeticError` taxonomy.
//!
//! ## Guarantees
//!
//! - Overflow is always reported as `ArithmeticError::Overflow`.
//! - Negative inputs to `factorial` and `fibonacci` are rejected with
//!   `ArithmeticError::Domain` instead of recursing without end.
//! - The naive Fibonacci functions keep their exponential running time.
//! - No function holds state, so all of them may be called concurrently.

pub mod error;
pub mod exercises;
pub mod greeting;
pub mod math;
pub mod stats;

pub use error::{ArithmeticError, ArithmeticResult};

/// The crate version, fixed at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::VERSION;

    #[test]
    fn test_version_matches_manifest() {
        assert!(!VERSION.is_empty());
        assert_eq!(VERSION.split('.').count(), 3);
    }
}
