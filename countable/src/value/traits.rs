use crate::Diagnosis;

/// The core countable interface: each variant implements this, and
/// [`Countable`](crate::Countable) dispatches to it.
pub trait CountableCore<E> {
    /// The elements as a slice; abnormal values have none
    fn as_slice(&self) -> &[E];

    /// Get a single element, if there is exactly one
    fn one(self) -> Result<E, Diagnosis>;

    /// Get an optional element, if there is at most one
    fn option(self) -> Result<Option<E>, Diagnosis>;

    /// The number of elements
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Check whether there are no elements
    fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Get the element at an offset, if it exists
    fn get(&self, offset: usize) -> Option<&E> {
        self.as_slice().get(offset)
    }

    /// Get the elements as an iterator
    fn iter(&self) -> std::slice::Iter<'_, E> {
        self.as_slice().iter()
    }
}
