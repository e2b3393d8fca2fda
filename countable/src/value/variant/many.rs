use std::sync::Arc;

use crate::value::traits::CountableCore;
use crate::{diagnose, Diagnosis, Rule};

/// Two or more elements. Clones share the elements.
#[derive(Debug, Clone, PartialEq)]
pub struct Many<E> {
    elements: Arc<[E]>,
}

impl<E> Many<E> {
    pub(crate) fn new(elements: Vec<E>) -> Self {
        debug_assert!(elements.len() > 1);
        Many {
            elements: elements.into(),
        }
    }
}

impl<E> CountableCore<E> for Many<E> {
    #[inline]
    fn as_slice(&self) -> &[E] {
        &self.elements
    }

    #[inline]
    fn one(self) -> Result<E, Diagnosis> {
        Err(diagnose(Rule::MustNotHaveMany, self.elements.len()))
    }

    #[inline]
    fn option(self) -> Result<Option<E>, Diagnosis> {
        Err(diagnose(Rule::MustNotHaveMany, self.elements.len()))
    }
}
