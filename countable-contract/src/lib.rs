//! The contract side of countable values.
//!
//! A countable value that holds no elements is not an error: it carries a
//! [`Diagnosis`] naming the [`Rule`] that left it empty, so the caller can
//! find out why. Abnormal values carry a diagnosis and a [`Severity`]
//! instead of elements.
mod diagnosis;
mod rule;

pub use diagnosis::{diagnose, Diagnosis, Severity};
pub use rule::Rule;
