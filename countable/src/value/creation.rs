use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};

use crate::{Diagnosis, Elements, Flags, Index, Severity};

use super::core::Countable;
use super::traits::CountableCore;
use super::variant::{Abnormal, Empty, Many, One};

impl<E> Countable<E> {
    pub fn new(mut elements: Vec<E>) -> Self {
        match elements.len() {
            0 => Self::Empty(Empty::default()),
            1 => match elements.pop() {
                Some(element) => Self::One(element.into()),
                None => Self::Empty(Empty::default()),
            },
            _ => Self::Many(Many::new(elements)),
        }
    }

    /// Elements, or when there are none, an empty value explained by
    /// `diagnosis` rather than the generic reason.
    pub(crate) fn from_parts(elements: Vec<E>, diagnosis: Option<Diagnosis>) -> Self {
        match diagnosis {
            Some(diagnosis) if elements.is_empty() => Self::empty_because(diagnosis),
            _ => Self::new(elements),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn empty_because(diagnosis: Diagnosis) -> Self {
        Self::Empty(Empty::because(diagnosis))
    }

    pub fn single(element: E) -> Self {
        Self::One(element.into())
    }

    pub fn error(diagnosis: Diagnosis) -> Self {
        Self::Abnormal(Abnormal::new(Severity::Error, diagnosis))
    }

    pub fn warning(diagnosis: Diagnosis) -> Self {
        Self::Abnormal(Abnormal::new(Severity::Warning, diagnosis))
    }

    /// The element an index addresses, if any.
    pub fn at(&self, index: Index) -> Option<&E> {
        index.clamp(self.len()).and_then(|offset| self.get(offset))
    }
}

impl<E: Clone> Countable<E> {
    pub fn to_vec(&self) -> Vec<E> {
        self.as_slice().to_vec()
    }

    /// The distinct elements in order of first occurrence.
    pub fn to_set(&self) -> IndexSet<E>
    where
        E: Hash + Eq,
    {
        self.iter().cloned().collect()
    }

    /// Map every distinct element to `default`, in order of first
    /// occurrence.
    pub fn to_map<V: Clone>(&self, default: V) -> IndexMap<E, V>
    where
        E: Hash + Eq,
    {
        self.iter()
            .map(|element| (element.clone(), default.clone()))
            .collect()
    }

    /// Copy the elements into a container; abnormal values give an empty
    /// one.
    pub fn to_elements(&self, flags: Flags) -> Elements<E> {
        if flags.is_variable_length() {
            Elements::list(self.to_vec(), flags)
        } else {
            Elements::array(self.to_vec(), flags)
        }
    }
}

impl<E> From<Vec<E>> for Countable<E> {
    fn from(elements: Vec<E>) -> Self {
        Self::new(elements)
    }
}

impl<E> From<Option<E>> for Countable<E> {
    fn from(element: Option<E>) -> Self {
        match element {
            Some(element) => Self::single(element),
            None => Self::empty(),
        }
    }
}

impl<E> From<One<E>> for Countable<E> {
    fn from(inner: One<E>) -> Self {
        Self::One(inner)
    }
}

impl<E> From<Abnormal> for Countable<E> {
    fn from(inner: Abnormal) -> Self {
        Self::Abnormal(inner)
    }
}

impl<E> FromIterator<E> for Countable<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{diagnose, ElementsCore, Rule};

    #[test]
    fn test_variant_follows_length() {
        assert!(matches!(Countable::<u8>::new(vec![]), Countable::Empty(_)));
        assert!(matches!(Countable::new(vec![1]), Countable::One(_)));
        assert!(matches!(Countable::new(vec![1, 2]), Countable::Many(_)));
        assert!(matches!(
            Countable::from(Some('a')),
            Countable::One(_)
        ));
        assert!(matches!(
            Countable::<char>::from(None),
            Countable::Empty(_)
        ));
    }

    #[test]
    fn test_empty_explains_itself() {
        let empty = Countable::<u8>::empty();
        assert_eq!(empty.diagnosis().map(|d| d.rule()), Some(Rule::MustNotBeEmpty));
        assert_eq!(empty.clone().option(), Ok(None));
        assert_eq!(
            empty.one().map_err(|d| d.rule()),
            Err(Rule::MustNotBeEmpty)
        );

        let because = diagnose(Rule::EmptyAfterFilter, "odd");
        let empty = Countable::<u8>::from_parts(vec![], Some(because.clone()));
        assert_eq!(empty.diagnosis(), Some(&because));
        assert_eq!(
            Countable::from_parts(vec![1], Some(because)).diagnosis(),
            None
        );
    }

    #[test]
    fn test_one_and_option() {
        assert_eq!(Countable::single(3).one(), Ok(3));
        assert_eq!(Countable::single(3).option(), Ok(Some(3)));
        let many = Countable::new(vec![1, 2, 3]);
        assert_eq!(
            many.clone().one().map_err(|d| d.rule()),
            Err(Rule::MustNotHaveMany)
        );
        assert_eq!(
            many.option().map_err(|d| d.rule()),
            Err(Rule::MustNotHaveMany)
        );
    }

    #[test]
    fn test_abnormal_holds_no_elements() {
        let upstream = diagnose(Rule::Violation, "upstream");
        let error = Countable::<u8>::error(upstream.clone());
        assert!(error.is_abnormal());
        assert!(error.is_empty());
        assert_eq!(error.severity(), Some(Severity::Error));
        assert_eq!(error.diagnosis(), Some(&upstream));
        assert_eq!(error.clone().option(), Err(upstream.clone()));
        assert_eq!(
            Countable::<u8>::warning(upstream).severity(),
            Some(Severity::Warning)
        );
        assert!(error.to_elements(Flags::Mutable).is_empty());
    }

    #[test]
    fn test_at() {
        let value: Countable<char> = "abc".chars().collect();
        assert_eq!(value.at(Index::FIRST), Some(&'a'));
        assert_eq!(value.at(Index::LAST), Some(&'c'));
        assert_eq!(value.at(Index::FromEnd(1)), Some(&'b'));
        assert_eq!(value.at(Index::Forward(3)), None);
        assert_eq!(value.at(Index::AfterLast), None);
    }

    #[test]
    fn test_exports() {
        let value = Countable::new(vec!["b", "a", "b"]);
        assert_eq!(value.to_vec(), vec!["b", "a", "b"]);
        assert_eq!(
            value.to_set().into_iter().collect::<Vec<_>>(),
            vec!["b", "a"]
        );
        insta::assert_debug_snapshot!(value.to_map(false), @r###"
        {
            "b": false,
            "a": false,
        }
        "###);
        let elements = value.to_elements(Flags::Mutable);
        assert_eq!(elements.kind(), crate::elements::Kind::List);
        let elements = value.to_elements(Flags::Overwritable);
        assert_eq!(elements.kind(), crate::elements::Kind::Array);
    }
}
