use crate::Flags;

use super::core::{Backing, Elements};
use super::variant::{ArrayElements, GeneratedElements, ListElements};

impl<E> Elements<E> {
    /// A fixed length container. Arrays can only be immutable or
    /// overwritable; other flags degrade to the nearest of those.
    pub fn array(items: Vec<E>, flags: Flags) -> Self {
        Elements {
            backing: Backing::Array(ArrayElements::new(items.into_boxed_slice(), flags)),
            order: Vec::new(),
        }
    }

    pub fn list(items: Vec<E>, flags: Flags) -> Self {
        Elements {
            backing: Backing::List(ListElements::new(items, flags)),
            order: Vec::new(),
        }
    }

    /// An immutable container of `length` elements computed from their
    /// offset on every access.
    pub fn generated(length: usize, generator: impl Fn(usize) -> E + Send + Sync + 'static) -> Self
    where
        E: 'static,
    {
        Elements {
            backing: Backing::Generated(GeneratedElements::new(length, generator)),
            order: Vec::new(),
        }
    }
}

impl<E> From<Vec<E>> for Elements<E> {
    fn from(items: Vec<E>) -> Self {
        Elements::array(items, Flags::Immutable)
    }
}

impl<E> FromIterator<E> for Elements<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Elements::from(iter.into_iter().collect::<Vec<_>>())
    }
}
