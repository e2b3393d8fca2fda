//! Countable values and the builder that transforms them.
//!
//! A [`Countable`] is zero, one or many elements of the same type, or an
//! abnormal outcome carrying a [`Diagnosis`] instead of elements. It is
//! immutable; to transform it, open a [`View`], chain operations on it and
//! materialize the result with [`View::value`].
//!
//! Positions are addressed with [`Index`], which counts either forward from
//! the first element or backward from the last one.
//!
//! The [`elements`] module holds the lower level containers (fixed arrays,
//! growable lists and generated sequences) whose mutability is described
//! by [`Flags`].
pub mod elements;
pub mod error;
mod flags;
mod index;
pub mod search;
mod value;
mod view;

pub use countable_contract::{diagnose, Diagnosis, Rule, Severity};
pub use elements::{Elements, ElementsCore, Order};
pub use flags::Flags;
pub use index::Index;
pub use value::{Abnormal, Countable, CountableCore, Empty, Many, One};
pub use view::{Categorized, Indices, SplitBoundary, View};
