use crate::value::traits::CountableCore;
use crate::{diagnose, Diagnosis, Rule};

/// No elements, and the reason why.
#[derive(Debug, Clone, PartialEq)]
pub struct Empty {
    diagnosis: Diagnosis,
}

impl Empty {
    pub fn because(diagnosis: Diagnosis) -> Self {
        Empty { diagnosis }
    }

    pub fn diagnosis(&self) -> &Diagnosis {
        &self.diagnosis
    }

    pub(crate) fn into_diagnosis(self) -> Diagnosis {
        self.diagnosis
    }
}

impl Default for Empty {
    fn default() -> Self {
        Empty {
            diagnosis: diagnose(Rule::MustNotBeEmpty, [(); 0]),
        }
    }
}

impl<E> CountableCore<E> for Empty {
    #[inline]
    fn as_slice(&self) -> &[E] {
        &[]
    }

    #[inline]
    fn one(self) -> Result<E, Diagnosis> {
        Err(self.diagnosis)
    }

    #[inline]
    fn option(self) -> Result<Option<E>, Diagnosis> {
        Ok(None)
    }
}
