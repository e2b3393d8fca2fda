use crate::elements::edit::checked_length;
use crate::error::Result;
use crate::index::clamp_all;
use crate::search::Matcher;
use crate::value::Countable;
use crate::{Index, Rule};

use super::View;

impl<E: Clone> View<E> {
    /// Insert a copy of `sub` at each of `indices`.
    ///
    /// Forward indices insert before the element they address, backward
    /// ones after it, and [`Index::AfterLast`] appends. Inserting at the
    /// same place more than once stacks the copies. Indices that address
    /// no place are ignored.
    pub fn insert(mut self, sub: &Countable<E>, indices: &[Index]) -> Result<Self> {
        let Some(sub) = self.argument(sub, "insert") else {
            return Ok(self);
        };
        let length = self.length();
        let mut positions: Vec<usize> = indices
            .iter()
            .filter_map(|index| index.insertion_point(length))
            .collect();
        positions.sort_unstable();
        self.try_edit(|elements| elements.insert_all(&positions, sub))
    }

    /// Insert elements of `padding` at `indices` until there are
    /// `target_length` elements.
    ///
    /// Each pass walks the indices in the order given and inserts the whole
    /// of `padding` at each, one element at a time, stopping as soon as the
    /// target is reached. Later passes add to the end of what earlier passes
    /// put in the same place. A view that is already long enough is left
    /// alone, and so is one where `padding` or the places are empty.
    pub fn pad(
        mut self,
        padding: &Countable<E>,
        indices: &[Index],
        target_length: usize,
    ) -> Result<Self> {
        let Some(padding) = self.argument(padding, "pad") else {
            return Ok(self);
        };
        let target_length = checked_length::<E>(Some(target_length))?;
        let length = self.length();
        let mut places: Vec<(usize, Vec<E>)> = indices
            .iter()
            .filter_map(|index| index.insertion_point(length))
            .map(|position| (position, Vec::new()))
            .collect();
        if target_length <= length || places.is_empty() || padding.is_empty() {
            return Ok(self);
        }
        let mut missing = target_length - length;
        'passes: loop {
            for (_, block) in places.iter_mut() {
                for element in padding {
                    if missing == 0 {
                        break 'passes;
                    }
                    block.push(element.clone());
                    missing -= 1;
                }
            }
        }
        // stable, so places sharing a position keep their order
        places.sort_by_key(|(position, _)| *position);
        Ok(self.edit_items(|items| {
            let old = std::mem::take(items);
            let mut places = places.into_iter().peekable();
            for (position, element) in old.into_iter().enumerate() {
                while let Some((_, block)) = places.next_if(|(at, _)| *at == position) {
                    items.extend(block);
                }
                items.push(element);
            }
            for (_, block) in places {
                items.extend(block);
            }
        }))
    }

    /// Replace every non-overlapping occurrence of `sub`, left to right,
    /// with `replacement`. Scanning resumes after each replaced occurrence.
    pub fn replace(mut self, sub: &Countable<E>, replacement: &Countable<E>) -> Result<Self>
    where
        E: PartialEq,
    {
        let Some(sub) = self.argument(sub, "replace") else {
            return Ok(self);
        };
        let Some(replacement) = self.argument(replacement, "replace") else {
            return Ok(self);
        };
        let starts = Matcher::new(sub).find_all(self.items());
        if starts.is_empty() {
            return Ok(self);
        }
        let width = sub.len();
        let kept = self.length() - starts.len() * width;
        let length = checked_length::<E>(
            starts
                .len()
                .checked_mul(replacement.len())
                .and_then(|added| kept.checked_add(added)),
        )?;
        Ok(self.shrink_items(
            Rule::EmptyAfterReplace,
            format_args!("replace {} occurrences", starts.len()),
            |items| {
                let windows = starts.iter().map(|&start| (start, start + width));
                *items = splice_windows(std::mem::take(items), windows, replacement, length);
            },
        ))
    }

    /// Replace the `count` elements starting at each of `indices` with
    /// `replacement`.
    ///
    /// Indices address the elements as they were before the call; a window
    /// running past the end is cut short, and a window starting inside an
    /// earlier one is skipped.
    pub fn replace_indices(
        mut self,
        count: usize,
        indices: &[Index],
        replacement: &Countable<E>,
    ) -> Result<Self> {
        let Some(replacement) = self.argument(replacement, "replace") else {
            return Ok(self);
        };
        let length = self.length();
        let mut windows = Vec::new();
        let mut covered = 0;
        for start in clamp_all(indices, length) {
            if start < covered {
                continue;
            }
            let end = start.saturating_add(count).min(length);
            windows.push((start, end));
            covered = end;
        }
        if windows.is_empty() {
            return Ok(self);
        }
        let removed: usize = windows.iter().map(|(start, end)| end - start).sum();
        let new_length = checked_length::<E>(
            windows
                .len()
                .checked_mul(replacement.len())
                .and_then(|added| (length - removed).checked_add(added)),
        )?;
        Ok(self.shrink_items(
            Rule::EmptyAfterReplace,
            format_args!("replace {count} elements at {indices:?}"),
            |items| {
                *items = splice_windows(
                    std::mem::take(items),
                    windows.into_iter(),
                    replacement,
                    new_length,
                );
            },
        ))
    }

    /// Repeat the elements `times` times over; fewer than two times leaves
    /// them as they are.
    pub fn repeat(self, times: usize) -> Result<Self> {
        if times <= 1 || self.length() == 0 || self.is_abnormal() {
            return Ok(self);
        }
        let length = checked_length::<E>(self.length().checked_mul(times))?;
        Ok(self.edit_items(|items| {
            let mut repeated = Vec::with_capacity(length);
            for _ in 0..times {
                repeated.extend_from_slice(items);
            }
            *items = repeated;
        }))
    }

    pub fn reverse(self) -> Self {
        self.edit_items(|items| items.reverse())
    }
}

// Copy `items`, putting `replacement` in place of each of the ascending,
// disjoint `windows`.
fn splice_windows<E: Clone>(
    items: Vec<E>,
    windows: impl Iterator<Item = (usize, usize)>,
    replacement: &[E],
    capacity: usize,
) -> Vec<E> {
    let mut result = Vec::with_capacity(capacity);
    let mut items = items.into_iter();
    let mut position = 0;
    for (start, end) in windows {
        result.extend(items.by_ref().take(start - position));
        result.extend_from_slice(replacement);
        items.by_ref().take(end - start).for_each(drop);
        position = end;
    }
    result.extend(items);
    result
}
