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

//! Greeting formatting helpers.

use std::fmt::Display;

/// The salutation used by [`default_greeting`].
pub const DEFAULT_SALUTATION: &str = "Hello";

/// Formats `"{greeting}, {name}!"`.
///
/// `name` may be anything printable.
///
/// # Examples
///
/// ```rust
/// # use tally_arith::greeting::get_greeting;
/// assert_eq!(get_greeting("Yo", "World"), "Yo, World!");
/// assert_eq!(get_greeting("Hi", 7), "Hi, 7!");
/// ```
#[inline]
pub fn get_greeting<N>(greeting: &str, name: N) -> String
where
    N: Display,
{
    format!("{greeting}, {name}!")
}

/// Formats a greeting with the [`DEFAULT_SALUTATION`].
#[inline]
pub fn default_greeting<N>(name: N) -> String
where
    N: Display,
{
    get_greeting(DEFAULT_SALUTATION, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_greeting_with_str() {
        assert_eq!(get_greeting("Yo", "World"), "Yo, World!");
    }

    #[test]
    fn test_get_greeting_with_display_value() {
        assert_eq!(get_greeting("Count", 3_i32), "Count, 3!");
        assert_eq!(get_greeting("Ready", 'x'), "Ready, x!");
    }

    #[test]
    fn test_default_greeting() {
        assert_eq!(default_greeting("Tally"), "Hello, Tally!");
    }

    #[test]
    fn test_empty_parts_are_kept() {
        assert_eq!(get_greeting("", ""), ", !");
    }
}
