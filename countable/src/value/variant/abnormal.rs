use crate::value::traits::CountableCore;
use crate::{diagnose, Diagnosis, Rule, Severity};

/// An upstream error or warning in place of elements.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Abnormal {
    severity: Severity,
    diagnosis: Diagnosis,
}

impl Abnormal {
    pub fn new(severity: Severity, diagnosis: Diagnosis) -> Self {
        Abnormal {
            severity,
            diagnosis,
        }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn diagnosis(&self) -> &Diagnosis {
        &self.diagnosis
    }

    /// The outcome of an operation that was handed this abnormal value as
    /// an argument: same severity, with this diagnosis as the cause.
    pub(crate) fn as_input_to(&self, operation: &str) -> Abnormal {
        Abnormal {
            severity: self.severity,
            diagnosis: diagnose(Rule::AbnormalInput, format_args!("{operation}"))
                .with_cause(self.diagnosis.clone()),
        }
    }
}

impl<E> CountableCore<E> for Abnormal {
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
        Err(self.diagnosis)
    }
}
