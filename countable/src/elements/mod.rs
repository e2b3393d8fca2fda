//! Element containers.
//!
//! An [`Elements`] value wraps one backing representation, a fixed length
//! array, a growable list or a generator, together with its [`Flags`](crate::Flags)
//! and the orders it is known to be sorted by. All of them share the
//! [`ElementsCore`] interface; the edit operations on [`Elements`] decide per
//! call whether they can change the backing storage in place or have to
//! copy it.
mod core;
mod creation;
pub(crate) mod edit;
mod order;
mod traits;
mod variant;

pub use self::core::{Elements, Kind};
pub use edit::maximum_length;
pub use order::Order;
pub use traits::{BoxedElementIter, ElementsCore};
