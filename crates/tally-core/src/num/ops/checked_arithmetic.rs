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

use core::ops::{Add, Div, Mul, Rem};

macro_rules! checked_binary_val {
    ($trait_name:ident, $method:ident, $src_method:ident; $($t:ty),+ $(,)?) => {
        $(
            impl $trait_name for $t {
                #[inline(always)]
                fn $method(self, v: $t) -> Option<$t> {
                    <$t>::$src_method(self, v)
                }
            }
        )+
    };
}

macro_rules! checked_unary_val {
    ($trait_name:ident, $method:ident, $src_method:ident; $($t:ty),+ $(,)?) => {
        $(
            impl $trait_name for $t {
                #[inline(always)]
                fn $method(self) -> Option<$t> {
                    <$t>::$src_method(self)
                }
            }
        )+
    };
}

/// Checked addition by value.
///
/// Mirrors the primitive `checked_add`, but as a trait so generic arithmetic
/// can require it without going through references.
///
/// # Examples
///
/// ```rust
/// # use tally_core::num::ops::checked_arithmetic::CheckedAddVal;
/// assert_eq!(i32::MAX.checked_add_val(1), None);
/// assert_eq!(40_i32.checked_add_val(2), Some(42));
/// ```
pub trait CheckedAddVal: Sized + Add<Self, Output = Self> {
    /// Performs checked addition by value, returning `None` if overflow occurs.
    fn checked_add_val(self, v: Self) -> Option<Self>;
}

checked_binary_val!(CheckedAddVal, checked_add_val, checked_add; i8, i16, i32, i64, isize, i128);

/// Checked multiplication by value.
///
/// # Examples
///
/// ```rust
/// # use tally_core::num::ops::checked_arithmetic::CheckedMulVal;
/// assert_eq!(479_001_600_i32.checked_mul_val(13), None); // 13! does not fit
/// assert_eq!(6_i32.checked_mul_val(4), Some(24));
/// ```
pub trait CheckedMulVal: Sized + Mul<Self, Output = Self> {
    /// Performs checked multiplication by value, returning `None` if overflow occurs.
    fn checked_mul_val(self, v: Self) -> Option<Self>;
}

checked_binary_val!(CheckedMulVal, checked_mul_val, checked_mul; i8, i16, i32, i64, isize, i128);

/// Checked division by value.
///
/// Returns `None` on division by zero and on `MIN / -1`.
///
/// # Examples
///
/// ```rust
/// # use tally_core::num::ops::checked_arithmetic::CheckedDivVal;
/// assert_eq!(10_i32.checked_div_val(0), None);
/// assert_eq!(i32::MIN.checked_div_val(-1), None);
/// assert_eq!(24_i32.checked_div_val(2), Some(12));
/// ```
pub trait CheckedDivVal: Sized + Div<Self, Output = Self> {
    /// Performs checked division by value.
    fn checked_div_val(self, v: Self) -> Option<Self>;
}

checked_binary_val!(CheckedDivVal, checked_div_val, checked_div; i8, i16, i32, i64, isize, i128);

/// Checked remainder by value.
///
/// Returns `None` on a zero divisor and on `MIN % -1`, whose intermediate
/// quotient is not representable.
///
/// # Examples
///
/// ```rust
/// # use tally_core::num::ops::checked_arithmetic::CheckedRemVal;
/// assert_eq!(10_i32.checked_rem_val(0), None);
/// assert_eq!(10_i32.checked_rem_val(3), Some(1));
/// assert_eq!((-10_i32).checked_rem_val(3), Some(-1)); // sign follows the dividend
/// ```
pub trait CheckedRemVal: Sized + Rem<Self, Output = Self> {
    /// Performs checked remainder by value.
    fn checked_rem_val(self, v: Self) -> Option<Self>;
}

checked_binary_val!(CheckedRemVal, checked_rem_val, checked_rem; i8, i16, i32, i64, isize, i128);

/// Checked negation by value.
///
/// # Examples
///
/// ```rust
/// # use tally_core::num::ops::checked_arithmetic::CheckedNegVal;
/// assert_eq!(i32::MIN.checked_neg_val(), None);
/// assert_eq!(5_i32.checked_neg_val(), Some(-5));
/// ```
pub trait CheckedNegVal: Sized {
    /// Performs checked negation by value, returning `None` if overflow occurs.
    fn checked_neg_val(self) -> Option<Self>;
}

checked_unary_val!(CheckedNegVal, checked_neg_val, checked_neg; i8, i16, i32, i64, isize, i128);
