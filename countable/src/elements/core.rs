// Elements wires the three backings up behind one type. Edits consume the
// container and hand back either the same storage, edited in place when the
// flags allow it, or a freshly built one of the same kind and flags.

use std::cmp::Ordering;
use std::hash::Hash;
use std::ops::Range;

use indexmap::{IndexMap, IndexSet};
use strum_macros::Display;
use tracing::trace;

use crate::error::{Error, Result};
use crate::Flags;

use super::edit::{self, check_offsets, checked_length};
use super::order::Order;
use super::traits::{BoxedElementIter, ElementsCore};
use super::variant::{ArrayElements, GeneratedElements, ListElements};

/// The backing representation of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Kind {
    Array,
    List,
    Generated,
}

#[derive(Debug, Clone)]
pub(super) enum Backing<E> {
    Array(ArrayElements<E>),
    List(ListElements<E>),
    Generated(GeneratedElements<E>),
}

/// A container of elements.
///
/// Two containers are equal when they hold equal elements, whatever their
/// representation, flags or recorded orders.
#[derive(Debug, Clone)]
pub struct Elements<E> {
    pub(super) backing: Backing<E>,
    // most recent first
    pub(super) order: Vec<Order<E>>,
}

impl<E: Clone> ElementsCore<E> for Elements<E> {
    fn flags(&self) -> Flags {
        match &self.backing {
            Backing::Array(inner) => inner.flags(),
            Backing::List(inner) => inner.flags(),
            Backing::Generated(inner) => inner.flags(),
        }
    }

    fn supported_flags(&self, requested: Flags) -> Flags {
        match &self.backing {
            Backing::Array(inner) => inner.supported_flags(requested),
            Backing::List(inner) => inner.supported_flags(requested),
            Backing::Generated(inner) => inner.supported_flags(requested),
        }
    }

    fn len(&self) -> usize {
        match &self.backing {
            Backing::Array(inner) => inner.len(),
            Backing::List(inner) => inner.len(),
            Backing::Generated(inner) => inner.len(),
        }
    }

    fn get(&self, offset: usize) -> Option<E> {
        match &self.backing {
            Backing::Array(inner) => inner.get(offset),
            Backing::List(inner) => inner.get(offset),
            Backing::Generated(inner) => inner.get(offset),
        }
    }

    fn iter(&self) -> BoxedElementIter<'_, E> {
        match &self.backing {
            Backing::Array(inner) => inner.iter(),
            Backing::List(inner) => inner.iter(),
            Backing::Generated(inner) => inner.iter(),
        }
    }
}

impl<E> Default for Elements<E> {
    fn default() -> Self {
        Elements {
            backing: Backing::List(ListElements::new(Vec::new(), Flags::Mutable)),
            order: Vec::new(),
        }
    }
}

impl<E: Clone + PartialEq> PartialEq for Elements<E> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<E: Clone> Elements<E> {
    pub fn kind(&self) -> Kind {
        match &self.backing {
            Backing::Array(_) => Kind::Array,
            Backing::List(_) => Kind::List,
            Backing::Generated(_) => Kind::Generated,
        }
    }

    /// The orders this container is known to be sorted by, most recent
    /// first.
    pub fn order(&self) -> &[Order<E>] {
        &self.order
    }

    /// The stored elements, unless they are generated on demand.
    pub fn as_slice(&self) -> Option<&[E]> {
        match &self.backing {
            Backing::Array(inner) => Some(inner.as_slice()),
            Backing::List(inner) => Some(inner.as_slice()),
            Backing::Generated(_) => None,
        }
    }

    /// The offsets of all elements, `0..len`.
    pub fn offsets(&self) -> Elements<usize> {
        Elements::generated(self.len(), |offset| offset)
    }

    pub fn singleton(&self) -> Option<E> {
        if self.len() == 1 {
            self.get(0)
        } else {
            None
        }
    }

    pub fn to_set(&self) -> IndexSet<E>
    where
        E: Hash + Eq,
    {
        self.iter().collect()
    }

    /// Map every distinct element to `default`, in order of first
    /// occurrence.
    pub fn to_map<V: Clone>(&self, default: V) -> IndexMap<E, V>
    where
        E: Hash + Eq,
    {
        self.iter()
            .map(|element| (element, default.clone()))
            .collect()
    }

    pub fn into_vec(self) -> Result<Vec<E>> {
        if let Backing::Generated(_) = self.backing {
            checked_length::<E>(Some(self.len()))?;
        }
        Ok(self.into_items())
    }

    // moves stored elements out; generated ones are computed without a
    // length check
    pub(crate) fn into_items(self) -> Vec<E> {
        match self.backing {
            Backing::Array(inner) => inner.into_vec(),
            Backing::List(inner) => inner.into_vec(),
            Backing::Generated(inner) => inner.iter().collect(),
        }
    }

    /// Change the flags of this container in place.
    ///
    /// Fails when the representation cannot honor them; use
    /// [`Elements::duplicate`] to switch representation instead.
    pub fn with_flags(mut self, flags: Flags) -> Result<Self> {
        let granted = self.supported_flags(flags);
        if granted != flags {
            return Err(Error::UnsupportedFlags {
                requested: flags,
                granted,
            });
        }
        match &mut self.backing {
            Backing::Array(inner) => inner.set_flags(flags),
            Backing::List(inner) => inner.set_flags(flags),
            Backing::Generated(_) => {}
        }
        Ok(self)
    }

    /// An independent copy with the given flags.
    ///
    /// The copy keeps the representation when it supports the flags, and
    /// otherwise becomes an array (fixed length) or a list.
    pub fn duplicate(&self, flags: Flags) -> Result<Self> {
        let backing = match &self.backing {
            Backing::Generated(inner) if flags == Flags::Immutable => {
                Backing::Generated(inner.clone())
            }
            Backing::Array(_) | Backing::Generated(_) if !flags.is_variable_length() => {
                Backing::Array(ArrayElements::new(
                    self.materialize()?.into_boxed_slice(),
                    flags,
                ))
            }
            _ => Backing::List(ListElements::new(self.materialize()?, flags)),
        };
        Ok(Elements {
            backing,
            order: self.order.clone(),
        })
    }

    /// Insert `elements` before `offset`; `offset == len` appends.
    pub fn insert(self, offset: usize, elements: &[E]) -> Result<Self> {
        self.insert_all(&[offset], elements)
    }

    /// Insert a copy of `elements` before each of `offsets`.
    ///
    /// The offsets address the container as it was before the call and
    /// must be ascending; an offset given more than once stacks copies.
    pub fn insert_all(mut self, offsets: &[usize], elements: &[E]) -> Result<Self> {
        let length = self.len();
        if offsets.windows(2).any(|pair| pair[1] < pair[0]) {
            return Err(Error::OffsetsNotAscending);
        }
        if let Some(&offset) = offsets.last() {
            if offset > length {
                return Err(Error::OffsetOutOfBounds { offset, length });
            }
        }
        if offsets.is_empty() || elements.is_empty() {
            return Ok(self);
        }
        let new_length = checked_length::<E>(
            offsets
                .len()
                .checked_mul(elements.len())
                .and_then(|added| added.checked_add(length)),
        )?;
        self.order.clear();
        if let Some(items) = self.in_place_list() {
            // back to front, so the earlier offsets stay put
            for &offset in offsets.iter().rev() {
                items.splice(offset..offset, elements.iter().cloned());
            }
            return Ok(self);
        }
        let items = edit::insert_blocks(self.iter(), offsets, elements, new_length);
        Ok(self.rebuild(items))
    }

    /// Overwrite the elements starting at `offset` with `elements`.
    pub fn overwrite(mut self, offset: usize, elements: &[E]) -> Result<Self> {
        let length = self.len();
        if elements.is_empty() {
            return if offset <= length {
                Ok(self)
            } else {
                Err(Error::OffsetOutOfBounds { offset, length })
            };
        }
        let end = offset.saturating_add(elements.len());
        if end > length {
            return Err(Error::OffsetOutOfBounds {
                offset: end - 1,
                length,
            });
        }
        self.order.clear();
        if let Some(slice) = self.overwritable_slice() {
            slice[offset..end].clone_from_slice(elements);
            return Ok(self);
        }
        let mut items = self.materialize()?;
        items[offset..end].clone_from_slice(elements);
        Ok(self.rebuild(items))
    }

    /// Remove the elements at `offsets`, which must be ascending, unique and
    /// in bounds.
    pub fn remove(self, offsets: &[usize]) -> Result<Self> {
        check_offsets(offsets, self.len())?;
        Ok(self.remove_unchecked(offsets))
    }

    /// Keep only the elements at `offsets`, which must be ascending, unique
    /// and in bounds.
    pub fn keep(self, offsets: &[usize]) -> Result<Self> {
        check_offsets(offsets, self.len())?;
        Ok(self.keep_unchecked(offsets))
    }

    pub fn keep_range(self, range: Range<usize>) -> Result<Self> {
        check_range(&range, self.len())?;
        Ok(self.keep_range_unchecked(range))
    }

    pub fn remove_range(self, range: Range<usize>) -> Result<Self> {
        check_range(&range, self.len())?;
        Ok(self.remove_range_unchecked(range))
    }

    /// Keep the elements matching `predicate`. When every element matches,
    /// the container comes back untouched.
    pub fn filter(self, mut predicate: impl FnMut(&E) -> bool) -> Self {
        let rejected: Vec<usize> = self
            .iter()
            .enumerate()
            .filter(|(_, element)| !predicate(element))
            .map(|(offset, _)| offset)
            .collect();
        self.remove_unchecked(&rejected)
    }

    /// Stable sort by `order`.
    ///
    /// Sorting by the order most recently sorted by does nothing, and
    /// neither does sorting elements that are already in order.
    pub fn sort(self, order: &Order<E>) -> Result<Self> {
        if let Backing::Generated(_) = self.backing {
            checked_length::<E>(Some(self.len()))?;
        }
        Ok(self.sort_unchecked(order))
    }

    /// Edit the elements as a vector, in place for a mutable list and on a
    /// copy otherwise. Recorded orders are forgotten.
    pub(crate) fn edit_items(mut self, edit: impl FnOnce(&mut Vec<E>)) -> Self {
        self.order.clear();
        if let Some(items) = self.in_place_list() {
            edit(items);
            return self;
        }
        let mut items = self.to_vec();
        edit(&mut items);
        self.rebuild(items)
    }

    pub(crate) fn keep_unchecked(mut self, offsets: &[usize]) -> Self {
        if offsets.len() == self.len() {
            return self;
        }
        if let Some(items) = self.in_place_list() {
            edit::keep_sorted(items, offsets);
            return self;
        }
        let items = edit::select_sorted(self.iter(), offsets, true);
        self.rebuild(items)
    }

    pub(crate) fn keep_range_unchecked(mut self, range: Range<usize>) -> Self {
        if range.start == 0 && range.end == self.len() {
            return self;
        }
        if let Some(items) = self.in_place_list() {
            items.truncate(range.end);
            items.drain(..range.start);
            return self;
        }
        let items = self.iter().skip(range.start).take(range.len()).collect();
        self.rebuild(items)
    }

    pub(crate) fn remove_range_unchecked(mut self, range: Range<usize>) -> Self {
        if range.is_empty() {
            return self;
        }
        if let Some(items) = self.in_place_list() {
            items.drain(range);
            return self;
        }
        let items = self
            .iter()
            .enumerate()
            .filter(|(offset, _)| !range.contains(offset))
            .map(|(_, element)| element)
            .collect();
        self.rebuild(items)
    }

    pub(crate) fn sort_unchecked(mut self, order: &Order<E>) -> Self {
        if self.order.first().is_some_and(|recent| recent.same(order)) {
            return self;
        }
        if !self.is_sorted_by(order) {
            if let Some(slice) = self.overwritable_slice() {
                slice.sort_by(|a, b| order.compare(a, b));
            } else {
                let mut items = self.to_vec();
                items.sort_by(|a, b| order.compare(a, b));
                self = self.rebuild(items);
            }
        }
        self.order.retain(|recorded| !recorded.same(order));
        self.order.insert(0, order.clone());
        self
    }

    fn is_sorted_by(&self, order: &Order<E>) -> bool {
        let mut iter = self.iter();
        let Some(mut previous) = iter.next() else {
            return true;
        };
        for element in iter {
            if order.compare(&previous, &element) == Ordering::Greater {
                return false;
            }
            previous = element;
        }
        true
    }

    pub(crate) fn remove_unchecked(mut self, offsets: &[usize]) -> Self {
        if offsets.is_empty() {
            return self;
        }
        if let Some(items) = self.in_place_list() {
            edit::remove_sorted(items, offsets);
            return self;
        }
        let items = edit::select_sorted(self.iter(), offsets, false);
        self.rebuild(items)
    }

    fn materialize(&self) -> Result<Vec<E>> {
        checked_length::<E>(Some(self.len()))?;
        Ok(self.to_vec())
    }

    fn in_place_list(&mut self) -> Option<&mut Vec<E>> {
        match &mut self.backing {
            Backing::List(inner) if inner.flags() == Flags::Mutable => Some(inner.as_mut_vec()),
            _ => None,
        }
    }

    fn overwritable_slice(&mut self) -> Option<&mut [E]> {
        match &mut self.backing {
            Backing::Array(inner) if inner.flags().is_overwritable() => Some(inner.as_mut_slice()),
            Backing::List(inner) if inner.flags().is_overwritable() => {
                Some(inner.as_mut_vec().as_mut_slice())
            }
            _ => None,
        }
    }

    // a new container of the same kind and flags holding `items`
    fn rebuild(self, items: Vec<E>) -> Self {
        let kind = self.kind();
        let flags = self.flags();
        let backing = match self.backing {
            Backing::Array(_) => {
                trace!(%kind, %flags, length = items.len(), "copied elements");
                Backing::Array(ArrayElements::new(items.into_boxed_slice(), flags))
            }
            Backing::List(_) => {
                trace!(%kind, %flags, length = items.len(), "copied elements");
                Backing::List(ListElements::new(items, flags))
            }
            Backing::Generated(_) => {
                trace!(length = items.len(), "materialized generated elements");
                Backing::Array(ArrayElements::new(
                    items.into_boxed_slice(),
                    Flags::Immutable,
                ))
            }
        };
        Elements {
            backing,
            order: self.order,
        }
    }
}

fn check_range(range: &Range<usize>, length: usize) -> Result<()> {
    if range.start > range.end {
        return Err(Error::OffsetsNotAscending);
    }
    if range.end > length {
        return Err(Error::OffsetOutOfBounds {
            offset: range.end - 1,
            length,
        });
    }
    Ok(())
}
