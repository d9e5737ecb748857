//! Candidate grouping generation.
//!
//! Every gap between two adjacent tokens is either fused (the tokens are
//! joined with a hyphen into one unit) or split. For `N` tokens there are
//! `N - 1` gaps and therefore `2^(N-1)` groupings.
//!
//! Groupings are emitted depth-first over the gaps, left to right, with the
//! fuse branch before the split branch:
//!
//! ```text
//! a b c  ->  [a-b-c]  [a-b, c]  [a, b-c]  [a, b, c]
//! ```
//!
//! The order matters: when two groupings score the same, the one emitted first
//! wins.

use std::iter::FusedIterator;
use std::ops::Range;

/// Separator placed between fused tokens.
pub const FUSE_SEPARATOR: char = '-';

/// Largest token count the segmenter can enumerate.
pub const MAX_SEGMENT_TOKENS: usize = 64;

/// One way of grouping a token sequence into units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grouping {
    units: Vec<String>,
    spans: Vec<Range<usize>>,
}

impl Grouping {
    /// The units of this grouping, left to right.
    pub fn units(&self) -> &[String] {
        &self.units
    }

    /// For each unit, the range of token indices it covers.
    pub fn spans(&self) -> &[Range<usize>] {
        &self.spans
    }

    /// Number of units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the grouping has no units (only for an empty token sequence).
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Consume the grouping, returning its units.
    pub fn into_units(self) -> Vec<String> {
        self.units
    }
}

/// Number of groupings produced for `token_count` tokens.
pub fn candidate_count(token_count: usize) -> u64 {
    match token_count {
        0 => 1,
        n => 1u64 << (n - 1),
    }
}

/// Enumerate every grouping of `tokens` in emission order.
///
/// An empty token sequence yields a single empty grouping.
///
/// # Panics
///
/// Panics if `tokens` holds more than [`MAX_SEGMENT_TOKENS`] tokens.
pub fn generate<S: AsRef<str>>(tokens: &[S]) -> Segmentations<'_, S> {
    Segmentations::new(tokens)
}

/// Iterator over the groupings of a token sequence.
///
/// Grouping `k` is described by the bits of `k`: the most significant of the
/// `N - 1` bits belongs to the leftmost gap, `0` means fuse and `1` means
/// split. Counting upwards from zero walks the fuse-first depth-first order.
#[derive(Debug)]
pub struct Segmentations<'a, S> {
    tokens: &'a [S],
    next: u64,
    total: u64,
}

impl<'a, S: AsRef<str>> Segmentations<'a, S> {
    fn new(tokens: &'a [S]) -> Self {
        assert!(
            tokens.len() <= MAX_SEGMENT_TOKENS,
            "cannot segment {} tokens (limit {MAX_SEGMENT_TOKENS})",
            tokens.len()
        );
        Segmentations {
            tokens,
            next: 0,
            total: candidate_count(tokens.len()),
        }
    }

    fn build(&self, mask: u64) -> Grouping {
        let gaps = self.tokens.len().saturating_sub(1);
        let mut units = Vec::new();
        let mut spans = Vec::new();
        let mut start = 0;

        for (index, token) in self.tokens.iter().enumerate() {
            if index == start {
                units.push(token.as_ref().to_string());
            } else if let Some(unit) = units.last_mut() {
                unit.push(FUSE_SEPARATOR);
                unit.push_str(token.as_ref());
            }

            let is_last = index + 1 == self.tokens.len();
            let splits_here = !is_last && (mask >> (gaps - 1 - index)) & 1 == 1;
            if is_last || splits_here {
                spans.push(start..index + 1);
                start = index + 1;
            }
        }

        Grouping { units, spans }
    }
}

impl<S: AsRef<str>> Iterator for Segmentations<'_, S> {
    type Item = Grouping;

    fn next(&mut self) -> Option<Grouping> {
        if self.next >= self.total {
            return None;
        }
        let grouping = self.build(self.next);
        self.next += 1;
        Some(grouping)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.total - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl<S: AsRef<str>> ExactSizeIterator for Segmentations<'_, S> {}

impl<S: AsRef<str>> FusedIterator for Segmentations<'_, S> {}
