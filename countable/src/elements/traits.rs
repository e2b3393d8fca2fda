use crate::{Elements, Flags, Index};

pub type BoxedElementIter<'a, E> = Box<dyn Iterator<Item = E> + 'a>;

/// The core container interface: a backing representation must implement
/// this to function.
///
/// Elements are handed out by value, as a generated container has nothing
/// to borrow from.
pub trait ElementsCore<E> {
    /// The capabilities this container currently has
    fn flags(&self) -> Flags;

    /// The capabilities this container could honor, nearest to `requested`
    fn supported_flags(&self, requested: Flags) -> Flags;

    /// The number of elements
    fn len(&self) -> usize;

    /// Get the element at an offset, if it exists
    fn get(&self, offset: usize) -> Option<E>;

    /// Get the elements as an iterator
    fn iter(&self) -> BoxedElementIter<'_, E>;

    /// Check whether the container is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the element an index addresses, if any
    fn at(&self, index: Index) -> Option<E> {
        index
            .clamp(self.len())
            .and_then(|offset| self.get(offset))
    }

    /// Check whether an index addresses an element
    fn has_offset(&self, index: Index) -> bool {
        index.clamp(self.len()).is_some()
    }

    /// Check whether an element occurs at all
    fn has(&self, element: &E) -> bool
    where
        E: PartialEq,
    {
        self.iter().any(|candidate| &candidate == element)
    }

    /// Copy the elements out into a vector
    fn to_vec(&self) -> Vec<E> {
        self.iter().collect()
    }

    /// The offsets at which an element occurs, ascending, as an immutable
    /// container
    fn find(&self, element: &E) -> Elements<usize>
    where
        E: PartialEq,
    {
        self.iter()
            .enumerate()
            .filter(|(_, candidate)| candidate == element)
            .map(|(offset, _)| offset)
            .collect()
    }
}
