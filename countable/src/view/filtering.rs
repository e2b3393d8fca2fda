use std::hash::Hash;

use ahash::{HashSet, HashSetExt};

use crate::index::clamp_all;
use crate::search::Matcher;
use crate::value::{Countable, CountableCore};
use crate::{ElementsCore, Index, Rule};

use super::View;

impl<E: Clone> View<E> {
    /// Keep the elements matching `predicate`.
    pub fn filter(self, predicate: impl FnMut(&E) -> bool) -> Self {
        self.shrink(Rule::EmptyAfterFilter, format_args!("filter"), |elements| {
            elements.filter(predicate)
        })
    }

    /// Keep the elements that are among `values`.
    pub fn keep(mut self, values: &Countable<E>) -> Self
    where
        E: Hash + Eq,
    {
        let Some(values) = self.argument(values, "keep") else {
            return self;
        };
        let lookup = lookup(values);
        self.shrink(
            Rule::EmptyAfterKeep,
            format_args!("keep {} values", values.len()),
            |elements| elements.filter(|element| lookup.contains(element)),
        )
    }

    /// Remove the elements that are among `values`.
    pub fn remove(mut self, values: &Countable<E>) -> Self
    where
        E: Hash + Eq,
    {
        let Some(values) = self.argument(values, "remove") else {
            return self;
        };
        let lookup = lookup(values);
        self.shrink(
            Rule::EmptyAfterRemove,
            format_args!("remove {} values", values.len()),
            |elements| elements.filter(|element| !lookup.contains(element)),
        )
    }

    /// Keep the elements at `indices`. Indices that address nothing are
    /// ignored, and so are repeats.
    pub fn keep_indices(self, indices: &[Index]) -> Self {
        self.shrink(Rule::EmptyAfterKeepIndices, indices, |elements| {
            let offsets = clamp_all(indices, elements.len());
            elements.keep_unchecked(&offsets)
        })
    }

    /// Remove the elements at `indices`. Indices that address nothing are
    /// ignored, and so are repeats.
    pub fn remove_indices(self, indices: &[Index]) -> Self {
        self.shrink(Rule::EmptyAfterRemoveIndices, indices, |elements| {
            let offsets = clamp_all(indices, elements.len());
            elements.remove_unchecked(&offsets)
        })
    }

    /// Keep the elements from `start` through `end`, both included.
    ///
    /// Nothing is left when either index addresses nothing or `end` comes
    /// before `start`.
    pub fn range(self, start: Index, end: Index) -> Self {
        self.shrink(Rule::EmptyAfterRange, (start, end), |elements| {
            match inclusive(start, end, elements.len()) {
                Some((first, last)) => elements.keep_range_unchecked(first..last + 1),
                None => elements.keep_unchecked(&[]),
            }
        })
    }

    /// Remove the elements from `start` through `end`, both included.
    ///
    /// Nothing is removed when either index addresses nothing or `end`
    /// comes before `start`.
    pub fn remove_range(self, start: Index, end: Index) -> Self {
        self.shrink(Rule::EmptyAfterRemoveRange, (start, end), |elements| {
            match inclusive(start, end, elements.len()) {
                Some((first, last)) => elements.remove_range_unchecked(first..last + 1),
                None => elements,
            }
        })
    }

    /// Keep the first `count` elements.
    pub fn keep_first(self, count: usize) -> Self {
        self.shrink(Rule::EmptyAfterKeepFirst, count, |elements| {
            let count = count.min(elements.len());
            elements.keep_range_unchecked(0..count)
        })
    }

    /// Keep the last `count` elements.
    pub fn keep_last(self, count: usize) -> Self {
        self.shrink(Rule::EmptyAfterKeepLast, count, |elements| {
            let length = elements.len();
            elements.keep_range_unchecked(length - count.min(length)..length)
        })
    }

    /// Remove the first `count` elements.
    pub fn remove_first(self, count: usize) -> Self {
        self.shrink(Rule::EmptyAfterRemoveFirst, count, |elements| {
            let count = count.min(elements.len());
            elements.remove_range_unchecked(0..count)
        })
    }

    /// Remove the last `count` elements.
    pub fn remove_last(self, count: usize) -> Self {
        self.shrink(Rule::EmptyAfterRemoveLast, count, |elements| {
            let length = elements.len();
            elements.remove_range_unchecked(length - count.min(length)..length)
        })
    }

    /// Keep only the element at `index`.
    pub fn at(self, index: Index) -> Self {
        self.shrink(Rule::IndexOutOfBounds, index, |elements| {
            match index.clamp(elements.len()) {
                Some(offset) => elements.keep_range_unchecked(offset..offset + 1),
                None => elements.keep_unchecked(&[]),
            }
        })
    }

    /// Drop repeated elements, keeping each first occurrence.
    pub fn unique(self) -> Self
    where
        E: Hash + Eq,
    {
        self.edit(|elements| {
            let mut seen = HashSet::with_capacity(elements.len());
            elements.filter(|element| seen.insert(element.clone()))
        })
    }

    /// Whether `sub` occurs as a contiguous subsequence. An empty or
    /// abnormal `sub` never does.
    pub fn contains(&self, sub: &Countable<E>) -> bool
    where
        E: PartialEq,
    {
        if self.is_abnormal() || sub.is_abnormal() {
            return false;
        }
        Matcher::new(sub.as_slice()).contains(self.items())
    }
}

fn lookup<E: Hash + Eq>(values: &[E]) -> HashSet<&E> {
    let mut lookup = HashSet::with_capacity(values.len());
    lookup.extend(values.iter());
    lookup
}

fn inclusive(start: Index, end: Index, length: usize) -> Option<(usize, usize)> {
    let first = start.clamp(length)?;
    let last = end.clamp(length)?;
    (first <= last).then_some((first, last))
}
