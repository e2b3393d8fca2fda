//! A countable value is zero, one or many elements, or an abnormal outcome
//! that carries a diagnosis instead of elements.
//!
//! Values are immutable; they are built from elements directly or
//! materialized from a [`View`](crate::View).
mod core;
mod creation;
mod traits;
mod variant;

pub use self::core::Countable;
pub use traits::CountableCore;
pub use variant::{Abnormal, Empty, Many, One};
