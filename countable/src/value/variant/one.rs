use std::slice;

use crate::value::traits::CountableCore;
use crate::Diagnosis;

#[derive(Debug, Clone, PartialEq)]
pub struct One<E> {
    element: E,
}

impl<E> One<E> {
    pub fn element(&self) -> &E {
        &self.element
    }

    pub fn into_element(self) -> E {
        self.element
    }
}

impl<E> From<E> for One<E> {
    fn from(element: E) -> Self {
        One { element }
    }
}

impl<E> CountableCore<E> for One<E> {
    #[inline]
    fn as_slice(&self) -> &[E] {
        slice::from_ref(&self.element)
    }

    #[inline]
    fn one(self) -> Result<E, Diagnosis> {
        Ok(self.element)
    }

    #[inline]
    fn option(self) -> Result<Option<E>, Diagnosis> {
        Ok(Some(self.element))
    }
}
