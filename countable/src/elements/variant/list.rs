use crate::elements::traits::{BoxedElementIter, ElementsCore};
use crate::Flags;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ListElements<E> {
    items: Vec<E>,
    flags: Flags,
}

impl<E> ListElements<E> {
    pub(crate) fn new(items: Vec<E>, flags: Flags) -> Self {
        ListElements { items, flags }
    }

    pub(crate) fn as_slice(&self) -> &[E] {
        &self.items
    }

    pub(crate) fn as_mut_vec(&mut self) -> &mut Vec<E> {
        &mut self.items
    }

    pub(crate) fn set_flags(&mut self, flags: Flags) {
        self.flags = flags;
    }

    pub(crate) fn into_vec(self) -> Vec<E> {
        self.items
    }
}

impl<E: Clone> ElementsCore<E> for ListElements<E> {
    #[inline]
    fn flags(&self) -> Flags {
        self.flags
    }

    // a list can be anything
    #[inline]
    fn supported_flags(&self, requested: Flags) -> Flags {
        requested
    }

    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    fn get(&self, offset: usize) -> Option<E> {
        self.items.get(offset).cloned()
    }

    #[inline]
    fn iter(&self) -> BoxedElementIter<'_, E> {
        Box::new(self.items.iter().cloned())
    }
}
