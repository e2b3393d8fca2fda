// Countable dispatches to its variants by hand, like the rest of the
// crate; each arm is trivial.

use crate::{Diagnosis, Severity};

use super::traits::CountableCore;
use super::variant::{Abnormal, Empty, Many, One};

/// Zero, one or many elements, or an abnormal outcome.
///
/// The variant always agrees with the number of elements: `Many` holds at
/// least two, and `Abnormal` holds none.
#[derive(Debug, Clone, PartialEq)]
pub enum Countable<E> {
    Empty(Empty),
    One(One<E>),
    Many(Many<E>),
    Abnormal(Abnormal),
}

impl<E> Default for Countable<E> {
    fn default() -> Self {
        Self::Empty(Empty::default())
    }
}

impl<E> CountableCore<E> for Countable<E> {
    fn as_slice(&self) -> &[E] {
        match self {
            Countable::Empty(inner) => inner.as_slice(),
            Countable::One(inner) => inner.as_slice(),
            Countable::Many(inner) => inner.as_slice(),
            Countable::Abnormal(inner) => inner.as_slice(),
        }
    }

    fn one(self) -> Result<E, Diagnosis> {
        match self {
            Countable::Empty(inner) => inner.one(),
            Countable::One(inner) => inner.one(),
            Countable::Many(inner) => inner.one(),
            Countable::Abnormal(inner) => inner.one(),
        }
    }

    fn option(self) -> Result<Option<E>, Diagnosis> {
        match self {
            Countable::Empty(inner) => inner.option(),
            Countable::One(inner) => inner.option(),
            Countable::Many(inner) => inner.option(),
            Countable::Abnormal(inner) => inner.option(),
        }
    }
}

impl<E> Countable<E> {
    pub fn is_abnormal(&self) -> bool {
        matches!(self, Countable::Abnormal(_))
    }

    pub fn severity(&self) -> Option<Severity> {
        match self {
            Countable::Abnormal(inner) => Some(inner.severity()),
            _ => None,
        }
    }

    /// Why this value has no elements, if it has none.
    pub fn diagnosis(&self) -> Option<&Diagnosis> {
        match self {
            Countable::Empty(inner) => Some(inner.diagnosis()),
            Countable::Abnormal(inner) => Some(inner.diagnosis()),
            Countable::One(_) | Countable::Many(_) => None,
        }
    }
}
