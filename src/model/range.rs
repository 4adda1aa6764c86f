//! Bounded stepped integer sequence with restart semantics
//!
//! Three of these drive the architecture-space enumerator, one per swept
//! parameter, nested like a multi-digit counter.

/// A stepped sequence over `start..=end` with wrap-around.
///
/// `advance` moves the current value by `step`; a move past `end` wraps back
/// to `start`, which `at_start` reports so an outer range can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub start: usize,
    pub end: usize,
    pub step: usize,
    crt: usize,
}

impl Range {
    /// Creates a range positioned at `start`.
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero or `start > end`.
    pub fn new(start: usize, end: usize, step: usize) -> Self {
        assert!(step > 0, "Range step must be positive");
        assert!(start <= end, "Range start must not exceed end");
        Self { start, end, step, crt: start }
    }

    /// The current value.
    pub fn crt(&self) -> usize {
        self.crt
    }

    /// Steps the current value, wrapping past `end` back to `start`.
    pub fn advance(&mut self) {
        self.crt += self.step;
        if self.crt > self.end {
            self.crt = self.start;
        }
    }

    /// True when the current value has wrapped back to `start`.
    pub fn at_start(&self) -> bool {
        self.crt == self.start
    }

    /// Resets the current value to `start`.
    pub fn restart(&mut self) {
        self.crt = self.start;
    }

    /// Number of values the range visits before wrapping.
    pub fn len(&self) -> usize {
        (self.end - self.start) / self.step + 1
    }

    /// Always false; a range visits at least `start`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterator over one full pass of the range's values.
    pub fn values(&self) -> impl Iterator<Item = usize> {
        let Range { start, end, step, .. } = *self;
        (start..=end).step_by(step)
    }
}

impl From<(usize, usize, usize)> for Range {
    fn from((start, end, step): (usize, usize, usize)) -> Self {
        Range::new(start, end, step)
    }
}
