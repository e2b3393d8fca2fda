//! Subsequence search.
//!
//! [`Matcher`] anchors on the first element of the needle, finds candidate
//! starts by a plain forward scan and then confirms the rest of the needle
//! one element at a time. After a partial match it skips ahead as far as
//! is safe: a new occurrence can only start where the first element of the
//! needle repeats, so the distance to that repeat bounds the skip.
//!
//! There is no precomputed failure table, so the worst case is
//! `O(haystack * needle)`; the inputs this is used on are small.

/// Finds occurrences of a needle in a haystack.
///
/// An empty needle occurs nowhere.
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'n, E> {
    needle: &'n [E],
    // how far a partial match may advance the candidate start
    skip: usize,
}

impl<'n, E: PartialEq> Matcher<'n, E> {
    pub fn new(needle: &'n [E]) -> Self {
        let skip = match needle.split_first() {
            Some((first, rest)) => rest
                .iter()
                .position(|element| element == first)
                .map_or(needle.len(), |position| position + 1),
            None => 1,
        };
        Matcher { needle, skip }
    }

    pub fn needle(&self) -> &'n [E] {
        self.needle
    }

    /// The start of the first occurrence at or after `start`.
    pub fn find_from(&self, haystack: &[E], start: usize) -> Option<usize> {
        let (first, rest) = self.needle.split_first()?;
        let width = self.needle.len();
        let last_start = haystack.len().checked_sub(width)?;
        let mut candidate = start;
        while candidate <= last_start {
            candidate += haystack[candidate..=last_start]
                .iter()
                .position(|element| element == first)?;
            let matched = 1 + haystack[candidate + 1..candidate + width]
                .iter()
                .zip(rest)
                .take_while(|(element, expected)| element == expected)
                .count();
            if matched == width {
                return Some(candidate);
            }
            candidate += matched.min(self.skip);
        }
        None
    }

    /// The starts of all non-overlapping occurrences, left to right.
    pub fn find_all(&self, haystack: &[E]) -> Vec<usize> {
        let mut found = Vec::new();
        let mut start = 0;
        while let Some(offset) = self.find_from(haystack, start) {
            found.push(offset);
            start = offset + self.needle.len();
        }
        found
    }

    pub fn find_first(&self, haystack: &[E]) -> Option<usize> {
        self.find_from(haystack, 0)
    }

    /// The start of the rightmost occurrence, which may overlap earlier
    /// ones.
    pub fn find_last(&self, haystack: &[E]) -> Option<usize> {
        if self.needle.is_empty() {
            return None;
        }
        let last_start = haystack.len().checked_sub(self.needle.len())?;
        (0..=last_start)
            .rev()
            .find(|&start| haystack[start..start + self.needle.len()] == *self.needle)
    }

    pub fn contains(&self, haystack: &[E]) -> bool {
        self.find_first(haystack).is_some()
    }
}
