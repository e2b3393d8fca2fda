use crate::elements::traits::{BoxedElementIter, ElementsCore};
use crate::Flags;

// an array can never change its length
const SUPPORTED: [Flags; 2] = [Flags::Immutable, Flags::Overwritable];

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ArrayElements<E> {
    items: Box<[E]>,
    flags: Flags,
}

impl<E> ArrayElements<E> {
    pub(crate) fn new(items: Box<[E]>, flags: Flags) -> Self {
        ArrayElements {
            items,
            flags: flags.nearest(&SUPPORTED),
        }
    }

    pub(crate) fn as_slice(&self) -> &[E] {
        &self.items
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [E] {
        &mut self.items
    }

    pub(crate) fn set_flags(&mut self, flags: Flags) {
        self.flags = flags.nearest(&SUPPORTED);
    }

    pub(crate) fn into_vec(self) -> Vec<E> {
        self.items.into_vec()
    }
}

impl<E: Clone> ElementsCore<E> for ArrayElements<E> {
    #[inline]
    fn flags(&self) -> Flags {
        self.flags
    }

    #[inline]
    fn supported_flags(&self, requested: Flags) -> Flags {
        requested.nearest(&SUPPORTED)
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
