use std::fmt;
use std::sync::Arc;

use crate::elements::traits::{BoxedElementIter, ElementsCore};
use crate::Flags;

type Generator<E> = dyn Fn(usize) -> E + Send + Sync;

/// Elements computed on demand from their offset.
///
/// Nothing is stored, so nothing can be overwritten, inserted or removed;
/// any edit materializes the elements first.
pub(crate) struct GeneratedElements<E> {
    length: usize,
    generator: Arc<Generator<E>>,
}

impl<E> GeneratedElements<E> {
    pub(crate) fn new(length: usize, generator: impl Fn(usize) -> E + Send + Sync + 'static) -> Self
    where
        E: 'static,
    {
        GeneratedElements {
            length,
            generator: Arc::new(generator),
        }
    }
}

impl<E> Clone for GeneratedElements<E> {
    fn clone(&self) -> Self {
        GeneratedElements {
            length: self.length,
            generator: Arc::clone(&self.generator),
        }
    }
}

impl<E> fmt::Debug for GeneratedElements<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratedElements")
            .field("length", &self.length)
            .finish_non_exhaustive()
    }
}

impl<E> ElementsCore<E> for GeneratedElements<E> {
    #[inline]
    fn flags(&self) -> Flags {
        Flags::Immutable
    }

    #[inline]
    fn supported_flags(&self, _requested: Flags) -> Flags {
        Flags::Immutable
    }

    #[inline]
    fn len(&self) -> usize {
        self.length
    }

    #[inline]
    fn get(&self, offset: usize) -> Option<E> {
        if offset < self.length {
            Some((self.generator)(offset))
        } else {
            None
        }
    }

    #[inline]
    fn iter(&self) -> BoxedElementIter<'_, E> {
        Box::new((0..self.length).map(move |offset| (self.generator)(offset)))
    }
}
