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

//! Property tests for the arithmetic laws the `math` functions must satisfy.

use proptest::prelude::*;
use tally_arith::{
    ArithmeticError,
    exercises::{INEFFICIENT_INDEX, calling_inefficient_function, naive_fib},
    math::{abs, divides_by, factorial, fibonacci, gcd, is_prime, lcm, negate},
};

proptest! {
    #[test]
    fn prop_factorial_recurrence(n in 1_i32..=12) {
        let previous = factorial(n - 1).unwrap();
        prop_assert_eq!(factorial(n).unwrap(), n * previous);
    }

    #[test]
    fn prop_factorial_rejects_every_negative(n in i32::MIN..0) {
        prop_assert!(factorial(n).unwrap_err().is_domain());
    }

    #[test]
    fn prop_gcd_is_symmetric(a in (i32::MIN + 1)..=i32::MAX, b in (i32::MIN + 1)..=i32::MAX) {
        prop_assert_eq!(gcd(a, b), gcd(b, a));
    }

    #[test]
    fn prop_gcd_divides_both(a in (i32::MIN + 1)..=i32::MAX, b in (i32::MIN + 1)..=i32::MAX) {
        let g = gcd(a, b).unwrap();
        prop_assert!(g >= 0);
        if g == 0 {
            prop_assert_eq!((a, b), (0, 0));
        } else {
            prop_assert!(divides_by(a, g).unwrap());
            prop_assert!(divides_by(b, g).unwrap());
        }
    }

    #[test]
    fn prop_lcm_times_gcd_is_abs_product(a in -10_000_i32..=10_000, b in -10_000_i32..=10_000) {
        prop_assume!(a != 0 || b != 0);
        let product = (i64::from(a) * i64::from(b)).abs();
        let lhs = i64::from(lcm(a, b).unwrap()) * i64::from(gcd(a, b).unwrap());
        prop_assert_eq!(lhs, product);
    }

    #[test]
    fn prop_abs_is_non_negative_and_idempotent(n in (i32::MIN + 1)..=i32::MAX) {
        let once = abs(n).unwrap();
        prop_assert!(once >= 0);
        prop_assert_eq!(abs(once).unwrap(), once);
    }

    #[test]
    fn prop_negate_is_an_involution(n in (i32::MIN + 1)..=i32::MAX) {
        prop_assert_eq!(negate(negate(n).unwrap()).unwrap(), n);
    }

    #[test]
    fn prop_is_prime_false_at_or_below_one(n in i32::MIN..=1) {
        prop_assert!(!is_prime(n));
    }

    #[test]
    fn prop_divides_by_zero_always_fails(a in any::<i32>()) {
        prop_assert_eq!(divides_by(a, 0), Err(ArithmeticError::DivideByZero));
    }

    #[test]
    fn prop_divides_by_agrees_with_wide_remainder(a in any::<i32>(), b in any::<i32>()) {
        prop_assume!(b != 0);
        let expected = i64::from(a) % i64::from(b) == 0;
        prop_assert_eq!(divides_by(a, b), Ok(expected));
    }

    #[test]
    fn prop_fibonacci_recurrence(n in 2_i32..=20) {
        let expected = fibonacci(n - 1).unwrap() + fibonacci(n - 2).unwrap();
        prop_assert_eq!(fibonacci(n).unwrap(), expected);
        prop_assert_eq!(naive_fib(n).unwrap(), expected);
    }
}

#[test]
fn gcd_of_zero_and_zero_is_zero() {
    assert_eq!(gcd(0, 0), Ok(0));
}

#[test]
fn naive_fib_forty_completes_on_the_exponential_path() {
    // `calling_inefficient_function` is `naive_fib(INEFFICIENT_INDEX)`.
    assert_eq!(INEFFICIENT_INDEX, 40);
    assert_eq!(calling_inefficient_function(), Ok(102_334_155));
}
