use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

type Compare<E> = dyn Fn(&E, &E) -> Ordering + Send + Sync;

/// A total order over elements.
///
/// Containers remember the orders they were sorted by, so sorting again by
/// the same order (the same `Order` value or a clone of it) is free.
pub struct Order<E> {
    compare: Arc<Compare<E>>,
}

impl<E: 'static> Order<E> {
    pub fn new(compare: impl Fn(&E, &E) -> Ordering + Send + Sync + 'static) -> Self {
        Order {
            compare: Arc::new(compare),
        }
    }

    pub fn by_key<K: Ord>(key: impl Fn(&E) -> K + Send + Sync + 'static) -> Self {
        Self::new(move |a, b| key(a).cmp(&key(b)))
    }

    pub fn reversed(&self) -> Self {
        let compare = Arc::clone(&self.compare);
        Self::new(move |a, b| compare(b, a))
    }
}

impl<E: Ord + 'static> Order<E> {
    pub fn natural() -> Self {
        Self::new(E::cmp)
    }
}

impl<E> Order<E> {
    pub fn compare(&self, a: &E, b: &E) -> Ordering {
        (self.compare)(a, b)
    }

    /// Whether both are the very same order, not merely equivalent ones.
    pub fn same(&self, other: &Order<E>) -> bool {
        Arc::ptr_eq(&self.compare, &other.compare)
    }
}

impl<E> Clone for Order<E> {
    fn clone(&self) -> Self {
        Order {
            compare: Arc::clone(&self.compare),
        }
    }
}

impl<E> fmt::Debug for Order<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Order({:p})", Arc::as_ptr(&self.compare) as *const ())
    }
}
