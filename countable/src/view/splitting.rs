use crate::search::Matcher;
use crate::value::{Countable, CountableCore};
use crate::{diagnose, Index, Rule};

use super::View;

/// Which segment the element at a split index ends up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SplitBoundary {
    /// Forward indices start the next segment, backward indices end the
    /// previous one. Splitting at [`Index::FIRST`] or [`Index::LAST`] thus
    /// yields an empty first or last segment.
    #[default]
    Natural,
    StartsNext,
    EndsPrevious,
    /// The element belongs to neither segment.
    Removed,
}

impl<E: Clone> View<E> {
    /// Split into contiguous segments at `indices`; there is one more
    /// segment than there are distinct elements the indices address.
    ///
    /// An abnormal view splits into just its abnormal value.
    pub fn split_at(&self, indices: &[Index], boundary: SplitBoundary) -> Vec<Countable<E>> {
        if let Some(abnormal) = &self.abnormal {
            return vec![abnormal.clone().into()];
        }
        let length = self.length();
        let mut cuts: Vec<(usize, usize)> = indices
            .iter()
            .filter_map(|index| {
                let offset = index.clamp(length)?;
                let after = match boundary {
                    SplitBoundary::Natural => index.is_backward(),
                    SplitBoundary::StartsNext => false,
                    SplitBoundary::EndsPrevious => true,
                    SplitBoundary::Removed => return Some((offset, offset + 1)),
                };
                let cut = if after { offset + 1 } else { offset };
                Some((cut, cut))
            })
            .collect();
        cuts.sort_unstable();
        cuts.dedup();
        self.segments(cuts)
    }

    /// Split around every non-overlapping occurrence of `sub`, which is
    /// left out of the segments.
    pub fn split_by(&self, sub: &Countable<E>) -> Vec<Countable<E>>
    where
        E: PartialEq,
    {
        if let Some(abnormal) = &self.abnormal {
            return vec![abnormal.clone().into()];
        }
        if let Countable::Abnormal(abnormal) = sub {
            return vec![abnormal.as_input_to("split").into()];
        }
        let width = sub.len();
        let cuts = Matcher::new(sub.as_slice())
            .find_all(self.items())
            .into_iter()
            .map(|start| (start, start + width))
            .collect();
        self.segments(cuts)
    }

    /// Split into `count` contiguous segments of nearly equal length, the
    /// earlier ones one element longer where it does not divide evenly.
    pub fn split_into(&self, count: usize) -> Vec<Countable<E>> {
        if let Some(abnormal) = &self.abnormal {
            return vec![abnormal.clone().into()];
        }
        if count == 0 {
            return Vec::new();
        }
        let length = self.length();
        let (base, longer) = (length / count, length % count);
        let mut cut = 0;
        let cuts = (1..count)
            .map(|segment| {
                cut += if segment <= longer { base + 1 } else { base };
                (cut, cut)
            })
            .collect();
        self.segments(cuts)
    }

    // `cuts` are ascending (end of a segment, start of the next) pairs
    fn segments(&self, cuts: Vec<(usize, usize)>) -> Vec<Countable<E>> {
        if cuts.is_empty() {
            return vec![self.value()];
        }
        let mut segments = Vec::with_capacity(cuts.len() + 1);
        let mut start = 0;
        for (end, next) in cuts {
            segments.push(self.segment(start, end));
            start = next;
        }
        segments.push(self.segment(start, self.length()));
        segments
    }

    fn segment(&self, start: usize, end: usize) -> Countable<E> {
        let start = start.min(end);
        Countable::from_parts(
            self.items()[start..end].to_vec(),
            Some(diagnose(Rule::EmptySegment, start..end)),
        )
    }
}
