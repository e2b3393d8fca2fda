use std::fmt;

use tracing::debug;

use crate::error::Result;
use crate::value::{Abnormal, Countable, CountableCore};
use crate::{diagnose, Diagnosis, Elements, ElementsCore, Flags, Rule};

/// A working copy of a countable value that operations transform in turn.
///
/// The working elements live in a mutable list container, so operations
/// edit them in place, and the orders a sort records let a repeated sort
/// of the same order do nothing.
///
/// Open one with [`Countable::view`], chain operations, and materialize the
/// outcome with [`View::value`] or [`View::into_value`].
///
/// A view of an abnormal value stays abnormal: every operation on it does
/// nothing, and the value it materializes is that abnormal value. When the
/// elements run out, the view remembers which operation emptied it, so the
/// empty value it materializes can say why.
///
/// ```
/// use countable::{Countable, Index};
///
/// let value = Countable::new(vec![3, 1, 4, 1, 5])
///     .view()
///     .filter(|n| *n > 1)
///     .remove_indices(&[Index::LAST])
///     .value();
/// assert_eq!(value.to_vec(), vec![3, 4]);
/// ```
#[derive(Debug, Clone)]
pub struct View<E> {
    pub(super) abnormal: Option<Abnormal>,
    // always a mutable list
    pub(super) elements: Elements<E>,
    // set exactly when `elements` is empty
    pub(super) empty_diagnosis: Option<Diagnosis>,
}

impl<E: Clone> From<Countable<E>> for View<E> {
    fn from(value: Countable<E>) -> Self {
        match value {
            Countable::Abnormal(abnormal) => {
                debug!(diagnosis = %abnormal.diagnosis(), "viewing an abnormal value");
                View {
                    abnormal: Some(abnormal),
                    elements: Elements::default(),
                    empty_diagnosis: None,
                }
            }
            Countable::Empty(empty) => View {
                abnormal: None,
                elements: Elements::default(),
                empty_diagnosis: Some(empty.into_diagnosis()),
            },
            value => View {
                abnormal: None,
                elements: Elements::list(value.to_vec(), Flags::Mutable),
                empty_diagnosis: None,
            },
        }
    }
}

impl<E: Clone> Countable<E> {
    /// Open a view on a copy of this value.
    pub fn view(&self) -> View<E> {
        View::from(self.clone())
    }

    pub fn into_view(self) -> View<E> {
        View::from(self)
    }
}

impl<E: Clone> View<E> {
    /// A view of the elements in a container, which keeps the orders the
    /// container is known to be sorted by.
    ///
    /// Fails when generated elements are too many to store.
    pub fn from_elements(elements: &Elements<E>) -> Result<Self> {
        let elements = elements.duplicate(Flags::Mutable)?;
        let mut view = Self::from(Countable::empty());
        if !elements.is_empty() {
            view.empty_diagnosis = None;
        }
        view.elements = elements;
        Ok(view)
    }

    /// An independent copy of this view.
    pub fn duplicate(&self) -> Self {
        self.clone()
    }

    pub fn is_abnormal(&self) -> bool {
        self.abnormal.is_some()
    }

    pub fn length(&self) -> usize {
        self.elements.len()
    }

    /// The working container.
    pub fn elements(&self) -> &Elements<E> {
        &self.elements
    }

    /// The elements as they stand; abnormal views have none.
    pub fn as_slice(&self) -> &[E] {
        self.items()
    }

    /// Materialize the outcome so far, leaving the view usable.
    pub fn value(&self) -> Countable<E> {
        self.clone().into_value()
    }

    pub fn into_value(self) -> Countable<E> {
        match self.abnormal {
            Some(abnormal) => Countable::Abnormal(abnormal),
            None => Countable::from_parts(self.elements.into_items(), self.empty_diagnosis),
        }
    }

    pub(super) fn items(&self) -> &[E] {
        self.elements.as_slice().unwrap_or_default()
    }

    // An operation that cannot empty the view.
    pub(super) fn edit(mut self, edit: impl FnOnce(Elements<E>) -> Elements<E>) -> Self {
        if self.abnormal.is_some() {
            return self;
        }
        self.elements = edit(std::mem::take(&mut self.elements));
        if !self.elements.is_empty() {
            self.empty_diagnosis = None;
        }
        self
    }

    pub(super) fn try_edit(
        mut self,
        edit: impl FnOnce(Elements<E>) -> Result<Elements<E>>,
    ) -> Result<Self> {
        if self.abnormal.is_some() {
            return Ok(self);
        }
        self.elements = edit(std::mem::take(&mut self.elements))?;
        if !self.elements.is_empty() {
            self.empty_diagnosis = None;
        }
        Ok(self)
    }

    pub(super) fn edit_items(self, edit: impl FnOnce(&mut Vec<E>)) -> Self {
        self.edit(|elements| elements.edit_items(edit))
    }

    // An operation that may empty the view; `rule` explains it if it does.
    pub(super) fn shrink(
        mut self,
        rule: Rule,
        input: impl fmt::Debug,
        edit: impl FnOnce(Elements<E>) -> Elements<E>,
    ) -> Self {
        if self.abnormal.is_some() {
            return self;
        }
        self.elements = edit(std::mem::take(&mut self.elements));
        self.settle(rule, input);
        self
    }

    pub(super) fn shrink_items(
        self,
        rule: Rule,
        input: impl fmt::Debug,
        edit: impl FnOnce(&mut Vec<E>),
    ) -> Self {
        self.shrink(rule, input, |elements| elements.edit_items(edit))
    }

    pub(super) fn settle(&mut self, rule: Rule, input: impl fmt::Debug) {
        if !self.elements.is_empty() {
            self.empty_diagnosis = None;
        } else if self.empty_diagnosis.is_none() {
            let diagnosis = diagnose(rule, input);
            debug!(%diagnosis, "view emptied");
            self.empty_diagnosis = Some(diagnosis);
        }
    }

    /// The elements of an argument, or `None` when the operation must not
    /// run: either this view is abnormal already, or the argument is, in
    /// which case this view becomes abnormal with the argument as cause.
    pub(super) fn argument<'c>(
        &mut self,
        argument: &'c Countable<E>,
        operation: &str,
    ) -> Option<&'c [E]> {
        if self.abnormal.is_some() {
            return None;
        }
        match argument {
            Countable::Abnormal(abnormal) => {
                self.absorb(abnormal, operation);
                None
            }
            argument => Some(argument.as_slice()),
        }
    }

    pub(super) fn absorb(&mut self, abnormal: &Abnormal, operation: &str) {
        debug!(operation, diagnosis = %abnormal.diagnosis(), "abnormal argument");
        self.abnormal = Some(abnormal.as_input_to(operation));
        self.elements = Elements::default();
        self.empty_diagnosis = None;
    }
}
