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

//! # Integer Numeric Trait
//!
//! `IntegerNumeric` collects the bounds required by the generic arithmetic
//! functions: `num_traits::PrimInt`, the sentinel constants and the by-value
//! checked operations from this crate.
//!
//! Every signed primitive satisfies it through the blanket implementation.
//! `i32` is the reference width of the library.

use crate::num::{
    constants::{PlusOne, PlusTwo, Zero},
    ops::checked_arithmetic,
};
use num_traits::PrimInt;

/// A trait alias for the signed integer types the arithmetic library is
/// generic over: `i8`, `i16`, `i32`, `i64`, `isize` and `i128`.
pub trait IntegerNumeric:
    PrimInt
    + Zero
    + PlusOne
    + PlusTwo
    + checked_arithmetic::CheckedAddVal
    + checked_arithmetic::CheckedMulVal
    + checked_arithmetic::CheckedDivVal
    + checked_arithmetic::CheckedRemVal
    + checked_arithmetic::CheckedNegVal
    + Send
    + Sync
{
}

impl<T> IntegerNumeric for T where
    T: PrimInt
        + Zero
        + PlusOne
        + PlusTwo
        + checked_arithmetic::CheckedAddVal
        + checked_arithmetic::CheckedMulVal
        + checked_arithmetic::CheckedDivVal
        + checked_arithmetic::CheckedRemVal
        + checked_arithmetic::CheckedNegVal
        + Send
        + Sync
{
}

#[cfg(test)]
mod tests {
    use super::IntegerNumeric;

    fn assert_integer_numeric<T: IntegerNumeric>() {}

    #[test]
    fn test_signed_primitives_are_integer_numeric() {
        assert_integer_numeric::<i8>();
        assert_integer_numeric::<i16>();
        assert_integer_numeric::<i32>();
        assert_integer_numeric::<i64>();
        assert_integer_numeric::<isize>();
        assert_integer_numeric::<i128>();
    }

    #[test]
    fn test_bounds_compose_in_generic_code() {
        fn double_checked<T: IntegerNumeric>(v: T) -> Option<T> {
            v.checked_mul_val(T::PLUS_TWO)
        }
        assert_eq!(double_checked(21_i32), Some(42));
        assert_eq!(double_checked(i32::MAX), None);
    }
}
