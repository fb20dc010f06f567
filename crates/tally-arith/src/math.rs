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

//! # Integer Arithmetic
//!
//! Pure functions over signed fixed-width integers with explicit behavior at
//! the edges of their domain. Every function is generic over
//! [`IntegerNumeric`]; `i32` is the reference width.
//!
//! ## Overflow policy
//!
//! All operations are checked. A result that is not representable is
//! reported as [`ArithmeticError::Overflow`], never wrapped or saturated.
//! This includes `negate`/`abs` (and therefore `gcd`) at `T::min_value()`.
//!
//! ## Cost
//!
//! [`fibonacci`] deliberately uses naive double recursion without
//! memoization, so its running time grows like `φ^n`. [`is_prime`] uses
//! trial division up to `n / 2`. Both costs are part of the contract.
//! [`factorial`] is a loop and runs in linear time.

use crate::{
    error::{ArithmeticError, ArithmeticResult},
    stats::RecursionStats,
};
use tally_core::num::numeric::IntegerNumeric;

/// Returns `-n`.
///
/// # Errors
///
/// Returns `ArithmeticError::Overflow` when `n == T::min_value()`.
///
/// # Examples
///
/// ```rust
/// # use tally_arith::math::negate;
/// assert_eq!(negate(5), Ok(-5));
/// assert_eq!(negate(-5), Ok(5));
/// assert!(negate(i32::MIN).is_err());
/// ```
#[inline]
pub fn negate<T>(n: T) -> ArithmeticResult<T>
where
    T: IntegerNumeric,
{
    n.checked_neg_val()
        .ok_or(ArithmeticError::overflow("negate"))
}

/// Returns the magnitude of `n`, computed as `negate(n)` for negative inputs.
///
/// # Errors
///
/// Returns `ArithmeticError::Overflow` when `n == T::min_value()`.
///
/// # Examples
///
/// ```rust
/// # use tally_arith::math::abs;
/// assert_eq!(abs(-5), Ok(5));
/// assert_eq!(abs(0), Ok(0));
/// assert!(abs(i32::MIN).is_err());
/// ```
#[inline]
pub fn abs<T>(n: T) -> ArithmeticResult<T>
where
    T: IntegerNumeric,
{
    if n < T::ZERO {
        negate(n).map_err(|_| ArithmeticError::overflow("abs"))
    } else {
        Ok(n)
    }
}

/// Returns the non-negative greatest common divisor of `a` and `b`.
///
/// Runs the Euclidean algorithm on `abs(a)` and `abs(b)`: `(a, b)` is
/// replaced by `(b, a mod b)` until `b` is zero. `gcd(0, 0) == 0` and
/// `gcd(0, b) == abs(b)`.
///
/// # Errors
///
/// Returns `ArithmeticError::Overflow` when either input is `T::min_value()`,
/// because its magnitude is not representable.
///
/// # Examples
///
/// ```rust
/// # use tally_arith::math::gcd;
/// assert_eq!(gcd(48, 18), Ok(6));
/// assert_eq!(gcd(-48, 18), Ok(6));
/// assert_eq!(gcd(0, 0), Ok(0));
/// ```
pub fn gcd<T>(a: T, b: T) -> ArithmeticResult<T>
where
    T: IntegerNumeric,
{
    let mut a = abs(a).map_err(|_| ArithmeticError::overflow("gcd"))?;
    let mut b = abs(b).map_err(|_| ArithmeticError::overflow("gcd"))?;

    // Both operands are non-negative and `b` is non-zero inside the loop,
    // so the remainder cannot fail.
    while b != T::ZERO {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    Ok(a)
}

/// Returns the non-negative least common multiple of `a` and `b`.
///
/// Defined as `abs(a * b) / gcd(a, b)`. If either input is zero the result
/// is zero and no division takes place. The magnitude of `a` is divided by
/// the gcd before multiplying, so the only overflow reported is that of the
/// true result.
///
/// # Errors
///
/// Returns `ArithmeticError::Overflow` when the least common multiple is not
/// representable, or when an input is `T::min_value()`.
///
/// # Examples
///
/// ```rust
/// # use tally_arith::math::lcm;
/// assert_eq!(lcm(4, 6), Ok(12));
/// assert_eq!(lcm(0, 5), Ok(0));
/// assert_eq!(lcm(-4, 6), Ok(12));
/// ```
pub fn lcm<T>(a: T, b: T) -> ArithmeticResult<T>
where
    T: IntegerNumeric,
{
    if a == T::ZERO || b == T::ZERO {
        return Ok(T::ZERO);
    }

    let divisor = gcd(a, b).map_err(|_| ArithmeticError::overflow("lcm"))?;
    let a = abs(a).map_err(|_| ArithmeticError::overflow("lcm"))?;
    let b = abs(b).map_err(|_| ArithmeticError::overflow("lcm"))?;

    // `divisor >= 1` because neither input is zero.
    a.checked_div_val(divisor)
        .and_then(|reduced| reduced.checked_mul_val(b))
        .ok_or(ArithmeticError::overflow("lcm"))
}

/// Returns `n!`.
///
/// # Errors
///
/// - `ArithmeticError::Domain` if `n` is negative.
/// - `ArithmeticError::Overflow` once `n!` leaves the range of `T`
///   (`n >= 13` for `i32`).
///
/// # Examples
///
/// ```rust
/// # use tally_arith::math::factorial;
/// assert_eq!(factorial(0), Ok(1));
/// assert_eq!(factorial(4), Ok(24));
/// assert!(factorial(-1).is_err());
/// assert!(factorial(13).is_err());
/// ```
#[inline]
pub fn factorial<T>(n: T) -> ArithmeticResult<T>
where
    T: IntegerNumeric,
{
    checked_factorial(n, "factorial")
}

pub(crate) fn checked_factorial<T>(n: T, operation: &'static str) -> ArithmeticResult<T>
where
    T: IntegerNumeric,
{
    if n < T::ZERO {
        return Err(ArithmeticError::negative_input(operation));
    }

    let mut acc = T::PLUS_ONE;
    let mut k = T::PLUS_TWO;
    // `acc` overflows long before `k` could reach `T::max_value()`.
    while k <= n {
        acc = acc
            .checked_mul_val(k)
            .ok_or(ArithmeticError::overflow(operation))?;
        k = k + T::PLUS_ONE;
    }
    Ok(acc)
}

/// Returns the largest index `n` such that `fib(n)` is representable in `T`.
///
/// # Examples
///
/// ```rust
/// # use tally_arith::math::max_fibonacci_index;
/// assert_eq!(max_fibonacci_index::<i32>(), 46);
/// assert_eq!(max_fibonacci_index::<i8>(), 11);
/// ```
pub fn max_fibonacci_index<T>() -> T
where
    T: IntegerNumeric,
{
    let mut previous = T::ZERO;
    let mut current = T::PLUS_ONE;
    let mut index = T::PLUS_ONE;
    while let Some(next) = previous.checked_add_val(current) {
        previous = current;
        current = next;
        index = index + T::PLUS_ONE;
    }
    index
}

/// Returns the `n`-th Fibonacci number, with `fib(0) = 0` and `fib(1) = 1`.
///
/// The value is computed by naive double recursion without memoization, so
/// the running time is exponential in `n`.
///
/// # Errors
///
/// - `ArithmeticError::Domain` if `n` is negative.
/// - `ArithmeticError::Overflow` if `n > max_fibonacci_index::<T>()`. This is
///   detected before recursing.
///
/// # Examples
///
/// ```rust
/// # use tally_arith::math::fibonacci;
/// assert_eq!(fibonacci(0), Ok(0));
/// assert_eq!(fibonacci(5), Ok(5));
/// assert!(fibonacci(-3).is_err());
/// assert!(fibonacci(47).is_err());
/// ```
pub fn fibonacci<T>(n: T) -> ArithmeticResult<T>
where
    T: IntegerNumeric,
{
    check_fibonacci_index(n, "fibonacci")?;
    Ok(naive_fibonacci(n))
}

/// Like [`fibonacci`], but also reports how many recursive calls were made.
///
/// # Examples
///
/// ```rust
/// # use tally_arith::math::fibonacci_with_stats;
/// let (value, stats) = fibonacci_with_stats(10).unwrap();
/// assert_eq!(value, 55);
/// assert_eq!(stats.calls, 177);
/// assert_eq!(stats.max_depth, 10);
/// ```
pub fn fibonacci_with_stats<T>(n: T) -> ArithmeticResult<(T, RecursionStats)>
where
    T: IntegerNumeric,
{
    check_fibonacci_index(n, "fibonacci")?;
    let mut stats = RecursionStats::new();
    let value = naive_fibonacci_tracked(n, 1, &mut stats);
    Ok((value, stats))
}

pub(crate) fn check_fibonacci_index<T>(n: T, operation: &'static str) -> ArithmeticResult<()>
where
    T: IntegerNumeric,
{
    if n < T::ZERO {
        return Err(ArithmeticError::negative_input(operation));
    }
    if n > max_fibonacci_index::<T>() {
        return Err(ArithmeticError::overflow(operation));
    }
    Ok(())
}

/// Naive recursion for `0 <= n <= max_fibonacci_index::<T>()`. Every partial
/// sum is bounded by `fib(n)`, so the additions cannot overflow.
pub(crate) fn naive_fibonacci<T>(n: T) -> T
where
    T: IntegerNumeric,
{
    if n <= T::PLUS_ONE {
        return n;
    }
    naive_fibonacci(n - T::PLUS_ONE) + naive_fibonacci(n - T::PLUS_TWO)
}

pub(crate) fn naive_fibonacci_tracked<T>(n: T, depth: u32, stats: &mut RecursionStats) -> T
where
    T: IntegerNumeric,
{
    stats.on_enter(depth);
    if n <= T::PLUS_ONE {
        return n;
    }
    naive_fibonacci_tracked(n - T::PLUS_ONE, depth + 1, stats)
        + naive_fibonacci_tracked(n - T::PLUS_TWO, depth + 1, stats)
}

/// Returns `true` if `b` divides `a` evenly.
///
/// `divides_by(T::min_value(), -1)` is `Ok(true)`.
///
/// # Errors
///
/// Returns `ArithmeticError::DivideByZero` when `b == 0`.
///
/// # Examples
///
/// ```rust
/// # use tally_arith::math::divides_by;
/// assert_eq!(divides_by(10, 2), Ok(true));
/// assert_eq!(divides_by(10, 3), Ok(false));
/// assert!(divides_by(10, 0).is_err());
/// ```
#[inline]
pub fn divides_by<T>(a: T, b: T) -> ArithmeticResult<bool>
where
    T: IntegerNumeric,
{
    if b == T::ZERO {
        return Err(ArithmeticError::DivideByZero);
    }
    // The only remaining `None` is `MIN % -1`, which divides evenly.
    match a.checked_rem_val(b) {
        Some(remainder) => Ok(remainder == T::ZERO),
        None => Ok(true),
    }
}

/// Returns `true` if `n` is prime.
///
/// Values `<= 1` are never prime. Candidates `2..=n / 2` are tried in order;
/// the bound is `n / 2`, not `sqrt(n)`.
///
/// # Examples
///
/// ```rust
/// # use tally_arith::math::is_prime;
/// assert!(is_prime(17));
/// assert!(!is_prime(18));
/// assert!(!is_prime(1));
/// ```
pub fn is_prime<T>(n: T) -> bool
where
    T: IntegerNumeric,
{
    if n <= T::PLUS_ONE {
        return false;
    }

    let bound = n / T::PLUS_TWO;
    let mut divisor = T::PLUS_TWO;
    while divisor <= bound {
        if let Ok(true) = divides_by(n, divisor) {
            return false;
        }
        divisor = divisor + T::PLUS_ONE;
    }
    true
}
