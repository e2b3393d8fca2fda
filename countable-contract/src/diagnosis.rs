use std::fmt;

use strum_macros::Display;

use crate::rule::Rule;

// longer renderings of the offending input are cut off
const MAXIMUM_INPUT_LENGTH: usize = 256;

/// How serious an abnormal outcome is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// An explanation of why a countable value is empty or abnormal.
///
/// A diagnosis names the [`Rule`] involved and a rendering of the input
/// that triggered it. When an operation was combined with an abnormal
/// value, the diagnosis of that value is kept as the cause.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Diagnosis {
    rule: Rule,
    input: String,
    cause: Option<Box<Diagnosis>>,
}

/// Diagnose a rule against the input that broke it.
pub fn diagnose(rule: Rule, offending_input: impl fmt::Debug) -> Diagnosis {
    let mut input = format!("{:?}", offending_input);
    if input.len() > MAXIMUM_INPUT_LENGTH {
        let mut end = MAXIMUM_INPUT_LENGTH;
        while !input.is_char_boundary(end) {
            end -= 1;
        }
        input.truncate(end);
        input.push_str("...");
    }
    Diagnosis {
        rule,
        input,
        cause: None,
    }
}

impl Diagnosis {
    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// The rendering of the input that broke the rule.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn cause(&self) -> Option<&Diagnosis> {
        self.cause.as_deref()
    }

    /// Wrap another diagnosis as the cause of this one.
    pub fn with_cause(mut self, cause: Diagnosis) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// The diagnosis at the bottom of the cause chain.
    pub fn root_cause(&self) -> &Diagnosis {
        let mut diagnosis = self;
        while let Some(cause) = diagnosis.cause() {
            diagnosis = cause;
        }
        diagnosis
    }

    pub fn message(&self) -> &str {
        self.rule.message()
    }
}

impl fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} (input: {})", self.rule, self.message(), self.input)?;
        if let Some(cause) = &self.cause {
            write!(f, "; caused by {}", cause)?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnosis {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}
