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

/// Counters collected while evaluating a naive recursion.
///
/// The root call has depth `1`. For the naive Fibonacci recursion at index
/// `n >= 0`, `calls` equals `2 * fib(n + 1) - 1` and `max_depth` equals
/// `max(n, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RecursionStats {
    /// Total number of recursive invocations, including the root.
    pub calls: u64,
    /// Deepest nesting level reached.
    pub max_depth: u32,
}

impl RecursionStats {
    /// Creates empty statistics.
    #[inline]
    pub const fn new() -> Self {
        Self {
            calls: 0,
            max_depth: 0,
        }
    }

    #[inline(always)]
    pub(crate) fn on_enter(&mut self, depth: u32) {
        self.calls += 1;
        if depth > self.max_depth {
            self.max_depth = depth;
        }
    }
}

impl std::fmt::Display for RecursionStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Recursion Statistics:")?;
        writeln!(f, "  Calls: {}", self.calls)?;
        writeln!(f, "  Max Depth: {}", self.max_depth)
    }
}

#[cfg(test)]
mod tests {
    use super::RecursionStats;

    #[test]
    fn test_new_is_empty() {
        let stats = RecursionStats::new();
        assert_eq!(stats, RecursionStats::default());
        assert_eq!(stats.calls, 0);
        assert_eq!(stats.max_depth, 0);
    }

    #[test]
    fn test_on_enter_counts_calls_and_keeps_deepest_level() {
        let mut stats = RecursionStats::new();
        stats.on_enter(1);
        stats.on_enter(2);
        stats.on_enter(3);
        stats.on_enter(2);
        assert_eq!(stats.calls, 4);
        assert_eq!(stats.max_depth, 3);
    }

    #[test]
    fn test_display_formats_all_fields() {
        let stats = RecursionStats {
            calls: 177,
            max_depth: 10,
        };
        let rendered = format!("{}", stats);

        assert!(rendered.contains("Recursion Statistics:"), "missing header");
        assert!(rendered.contains("Calls: 177"), "missing calls");
        assert!(rendered.contains("Max Depth: 10"), "missing max_depth");
    }
}
