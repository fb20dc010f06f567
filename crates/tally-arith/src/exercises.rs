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

//! Small recursion and arithmetic exercises on `i32`.
//!
//! The functions are fixed to the 32-bit reference width and share the checked
//! overflow policy of [`crate::math`].

use crate::{
    error::{ArithmeticError, ArithmeticResult},
    math::{check_fibonacci_index, checked_factorial, naive_fibonacci, naive_fibonacci_tracked},
    stats::RecursionStats,
};

/// The value returned by [`get_num`].
pub const MAGIC_NUMBER: i32 = 42;

/// The input [`is_n238`] matches.
pub const SENTINEL_INPUT: i32 = 238;

/// The value [`is_n238`] returns on a match.
pub const SENTINEL_HIT: i32 = 100;

/// Index used by [`calling_inefficient_function`].
pub const INEFFICIENT_INDEX: i32 = 40;

const BITS_PER_BYTE: i32 = 8;
const LOOP_SIDE: i32 = 1_000;

/// Returns [`MAGIC_NUMBER`].
#[inline]
pub const fn get_num() -> i32 {
    MAGIC_NUMBER
}

/// Returns `a + 5`.
///
/// # Errors
///
/// Returns `ArithmeticError::Overflow` if the sum is not representable.
#[inline]
pub fn add5(a: i32) -> ArithmeticResult<i32> {
    a.checked_add(5).ok_or(ArithmeticError::overflow("add5"))
}

/// Converts a byte count to a bit count.
///
/// # Errors
///
/// Returns `ArithmeticError::Overflow` if `bytes * 8` is not representable.
#[inline]
pub fn convert_bytes_to_bits(bytes: i32) -> ArithmeticResult<i32> {
    bytes
        .checked_mul(BITS_PER_BYTE)
        .ok_or(ArithmeticError::overflow("convert_bytes_to_bits"))
}

/// Counts the iterations of a 1000 by 1000 nested loop.
///
/// The count is accumulated step by step rather than computed, and always
/// ends at `1_000_000`.
pub fn some_loops() -> i32 {
    let mut count = 0;
    for _ in 0..LOOP_SIDE {
        for _ in 0..LOOP_SIDE {
            count += 1;
        }
    }
    count
}

/// Returns `n!`, sharing the contract of [`crate::math::factorial`].
///
/// # Errors
///
/// - `ArithmeticError::Domain` if `n` is negative.
/// - `ArithmeticError::Overflow` for `n >= 13`.
///
/// # Examples
///
/// ```rust
/// # use tally_arith::exercises::recursive_factorial;
/// assert_eq!(recursive_factorial(3), Ok(6));
/// ```
#[inline]
pub fn recursive_factorial(n: i32) -> ArithmeticResult<i32> {
    checked_factorial(n, "recursive_factorial")
}

/// Naive exponential Fibonacci: `0` for `n < 1`, `1` for `n == 1`, otherwise
/// `naive_fib(n - 1) + naive_fib(n - 2)`.
///
/// Negative indices are not an error; they return `0`.
///
/// # Errors
///
/// Returns `ArithmeticError::Overflow` for `n > 46`.
///
/// # Examples
///
/// ```rust
/// # use tally_arith::exercises::naive_fib;
/// assert_eq!(naive_fib(10), Ok(55));
/// assert_eq!(naive_fib(-10), Ok(0));
/// ```
pub fn naive_fib(n: i32) -> ArithmeticResult<i32> {
    if n < 1 {
        return Ok(0);
    }
    check_fibonacci_index(n, "naive_fib")?;
    Ok(naive_fibonacci(n))
}

/// Like [`naive_fib`], but also reports the recursion statistics.
///
/// # Errors
///
/// Returns `ArithmeticError::Overflow` for `n > 46`.
pub fn naive_fib_with_stats(n: i32) -> ArithmeticResult<(i32, RecursionStats)> {
    let mut stats = RecursionStats::new();
    if n < 1 {
        stats.on_enter(1);
        return Ok((0, stats));
    }
    check_fibonacci_index(n, "naive_fib")?;
    let value = naive_fibonacci_tracked(n, 1, &mut stats);
    Ok((value, stats))
}

/// Evaluates `naive_fib(40)` the slow way.
///
/// # Errors
///
/// Never fails in practice; the result type is shared with [`naive_fib`].
pub fn calling_inefficient_function() -> ArithmeticResult<i32> {
    naive_fib(INEFFICIENT_INDEX)
}

/// Returns `add5(42 * i)`.
///
/// # Errors
///
/// Returns `ArithmeticError::Overflow` if either step is not representable.
///
/// # Examples
///
/// ```rust
/// # use tally_arith::exercises::complex_function;
/// assert_eq!(complex_function(1), Ok(47));
/// assert!(complex_function(i32::MAX).is_err());
/// ```
pub fn complex_function(i: i32) -> ArithmeticResult<i32> {
    let scaled = MAGIC_NUMBER
        .checked_mul(i)
        .ok_or(ArithmeticError::overflow("complex_function"))?;
    add5(scaled).map_err(|_| ArithmeticError::overflow("complex_function"))
}

/// Returns [`SENTINEL_HIT`] if `n == 238`, otherwise `0`.
#[inline]
pub const fn is_n238(n: i32) -> i32 {
    if n == SENTINEL_INPUT { SENTINEL_HIT } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_num() {
        assert_eq!(get_num(), 42);
    }

    #[test]
    fn test_add5() {
        for a in 0..4 {
            assert_eq!(add5(a), Ok(a + 5));
        }
        assert_eq!(add5(i32::MAX - 5), Ok(i32::MAX));
        assert!(add5(i32::MAX - 4).unwrap_err().is_overflow());
    }

    #[test]
    fn test_convert_bytes_to_bits() {
        assert_eq!(convert_bytes_to_bits(0), Ok(0));
        assert_eq!(convert_bytes_to_bits(1), Ok(8));
        assert_eq!(convert_bytes_to_bits(2), Ok(16));
        assert_eq!(convert_bytes_to_bits(3), Ok(24));
        assert!(convert_bytes_to_bits(i32::MAX / 4).unwrap_err().is_overflow());
    }

    #[test]
    fn test_some_loops() {
        assert_eq!(some_loops(), 1_000_000);
    }

    #[test]
    fn test_recursive_factorial() {
        assert_eq!(recursive_factorial(0), Ok(1));
        assert_eq!(recursive_factorial(1), Ok(1));
        assert_eq!(recursive_factorial(2), Ok(2));
        assert_eq!(recursive_factorial(3), Ok(6));
        assert_eq!(
            recursive_factorial(-1),
            Err(ArithmeticError::Domain {
                operation: "recursive_factorial",
                reason: "input must be non-negative"
            })
        );
        assert!(recursive_factorial(13).unwrap_err().is_overflow());
    }

    #[test]
    fn test_naive_fib_small_values() {
        assert_eq!(naive_fib(0), Ok(0));
        assert_eq!(naive_fib(-10), Ok(0));
        assert_eq!(naive_fib(i32::MIN), Ok(0));
        assert_eq!(naive_fib(1), Ok(1));
        assert_eq!(naive_fib(2), Ok(1));
        assert_eq!(naive_fib(3), Ok(2));
        assert_eq!(naive_fib(4), Ok(3));
        assert_eq!(naive_fib(10), Ok(55));
    }

    #[test]
    fn test_naive_fib_overflow() {
        assert_eq!(
            naive_fib(47),
            Err(ArithmeticError::Overflow {
                operation: "naive_fib"
            })
        );
    }

    #[test]
    fn test_naive_fib_with_stats() {
        let (value, stats) = naive_fib_with_stats(15).unwrap();
        assert_eq!(value, 610);
        assert_eq!(stats.calls, 2 * 987 - 1);
        assert_eq!(stats.max_depth, 15);

        let (value, stats) = naive_fib_with_stats(-4).unwrap();
        assert_eq!(value, 0);
        assert_eq!(stats.calls, 1);
        assert_eq!(stats.max_depth, 1);

        assert_eq!(
            naive_fib_with_stats(47),
            Err(ArithmeticError::Overflow {
                operation: "naive_fib"
            })
        );
    }

    #[test]
    fn test_complex_function() {
        assert_eq!(complex_function(0), Ok(5));
        assert_eq!(complex_function(1), Ok(47));
        assert_eq!(complex_function(2), Ok(89));
        assert_eq!(complex_function(3), Ok(131));
        assert_eq!(complex_function(-1), Ok(-37));
    }

    #[test]
    fn test_complex_function_overflow() {
        let largest = (i32::MAX - 5) / 42;
        assert!(complex_function(largest).is_ok());
        assert!(complex_function(largest + 1).unwrap_err().is_overflow());
        assert!(complex_function(i32::MIN).unwrap_err().is_overflow());
    }

    #[test]
    fn test_is_n238() {
        assert_eq!(is_n238(0), 0);
        assert_eq!(is_n238(238), 100);
        assert_eq!(is_n238(10), 0);
        assert_eq!(is_n238(-18_280), 0);
    }
}
