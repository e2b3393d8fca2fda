use std::fmt;

use crate::search::Matcher;
use crate::value::{Countable, CountableCore};
use crate::{diagnose, Index, Rule};

use super::View;

/// Elements that belong to a category, for [`Indices::instances_of`].
pub trait Categorized {
    type Category: PartialEq;

    fn category(&self) -> Self::Category;
}

/// Queries for the offsets of elements rather than the elements.
///
/// Borrowing the view keeps it from changing while the indices are in use,
/// so every query sees the same elements. Results are countable values of
/// offsets: an abnormal view answers with its abnormal value, and a query
/// that finds nothing answers with an empty value saying why.
#[derive(Debug)]
pub struct Indices<'v, E> {
    view: &'v View<E>,
}

impl<E: Clone> View<E> {
    pub fn indices(&self) -> Indices<'_, E> {
        Indices { view: self }
    }
}

impl<E: Clone> Indices<'_, E> {
    fn len(&self) -> usize {
        self.view.length()
    }

    fn positions(
        &self,
        rule: Rule,
        input: impl fmt::Debug,
        positions: Vec<usize>,
    ) -> Countable<usize> {
        if let Some(abnormal) = &self.view.abnormal {
            return abnormal.clone().into();
        }
        if !positions.is_empty() {
            return Countable::new(positions);
        }
        let diagnosis = match &self.view.empty_diagnosis {
            Some(diagnosis) => diagnosis.clone(),
            None => diagnose(rule, input),
        };
        Countable::empty_because(diagnosis)
    }

    fn ends(&self, rule: Rule, ends: impl FnOnce(usize) -> Vec<usize>) -> Countable<usize> {
        let positions = match self.len() {
            0 => Vec::new(),
            length => ends(length - 1),
        };
        self.positions(rule, format_args!("{rule}"), positions)
    }

    /// Every offset, ascending.
    pub fn all(&self) -> Countable<usize> {
        self.positions(Rule::MustNotBeEmpty, "all", (0..self.len()).collect())
    }

    pub fn first(&self) -> Countable<usize> {
        self.ends(Rule::MustNotBeEmpty, |_| vec![0])
    }

    pub fn last(&self) -> Countable<usize> {
        self.ends(Rule::MustNotBeEmpty, |last| vec![last])
    }

    /// The first and the last offset; a single element yields just one.
    pub fn first_and_last(&self) -> Countable<usize> {
        self.ends(Rule::MustNotBeEmpty, |last| {
            if last == 0 {
                vec![0]
            } else {
                vec![0, last]
            }
        })
    }

    pub fn last_and_first(&self) -> Countable<usize> {
        self.ends(Rule::MustNotBeEmpty, |last| {
            if last == 0 {
                vec![0]
            } else {
                vec![last, 0]
            }
        })
    }

    /// The offset `index` addresses.
    pub fn index(&self, index: Index) -> Countable<usize> {
        let positions = index.clamp(self.len()).into_iter().collect();
        self.positions(Rule::IndexOutOfBounds, index, positions)
    }

    /// The offsets of the `indices` that address an element, in the order
    /// given.
    pub fn clamp(&self, indices: &[Index]) -> Countable<usize> {
        let positions = indices
            .iter()
            .filter_map(|index| index.clamp(self.len()))
            .collect();
        self.positions(Rule::IndexOutOfBounds, indices, positions)
    }

    /// Whether every one of `indices` addresses an element.
    pub fn contains(&self, indices: &[Index]) -> bool {
        if self.view.is_abnormal() {
            return false;
        }
        indices
            .iter()
            .all(|index| index.clamp(self.len()).is_some())
    }

    /// The offsets of the elements matching `predicate`.
    pub fn filter(&self, mut predicate: impl FnMut(&E) -> bool) -> Countable<usize> {
        let positions = self
            .view
            .items()
            .iter()
            .enumerate()
            .filter(|(_, element)| predicate(*element))
            .map(|(offset, _)| offset)
            .collect();
        self.positions(Rule::NoMatchingElement, "filter", positions)
    }

    pub fn filter_first(&self, predicate: impl FnMut(&E) -> bool) -> Countable<usize> {
        let positions = self.view.items().iter().position(predicate).into_iter().collect();
        self.positions(Rule::NoMatchingElement, "filter first", positions)
    }

    pub fn filter_last(&self, predicate: impl FnMut(&E) -> bool) -> Countable<usize> {
        let positions = self.view.items().iter().rposition(predicate).into_iter().collect();
        self.positions(Rule::NoMatchingElement, "filter last", positions)
    }

    /// The starts of the non-overlapping occurrences of `sub`, left to
    /// right.
    pub fn find(&self, sub: &Countable<E>) -> Countable<usize>
    where
        E: PartialEq,
    {
        self.search(sub, "find", |matcher, items| matcher.find_all(items))
    }

    pub fn find_first(&self, sub: &Countable<E>) -> Countable<usize>
    where
        E: PartialEq,
    {
        self.search(sub, "find first", |matcher, items| {
            matcher.find_first(items).into_iter().collect()
        })
    }

    /// The start of the rightmost occurrence of `sub`.
    pub fn find_last(&self, sub: &Countable<E>) -> Countable<usize>
    where
        E: PartialEq,
    {
        self.search(sub, "find last", |matcher, items| {
            matcher.find_last(items).into_iter().collect()
        })
    }

    fn search(
        &self,
        sub: &Countable<E>,
        operation: &str,
        search: impl FnOnce(&Matcher<'_, E>, &[E]) -> Vec<usize>,
    ) -> Countable<usize>
    where
        E: PartialEq,
    {
        if let (None, Countable::Abnormal(abnormal)) = (&self.view.abnormal, sub) {
            return abnormal.as_input_to(operation).into();
        }
        let matcher = Matcher::new(sub.as_slice());
        let positions = search(&matcher, self.view.items());
        self.positions(Rule::SubsequenceNotFound, format_args!("{operation}"), positions)
    }

    /// The offsets of the elements in `category`.
    pub fn instances_of(&self, category: &E::Category) -> Countable<usize>
    where
        E: Categorized,
    {
        let positions = self
            .view
            .items()
            .iter()
            .enumerate()
            .filter(|(_, element)| element.category() == *category)
            .map(|(offset, _)| offset)
            .collect();
        self.positions(Rule::NoInstances, "instances of", positions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(text: &str) -> Countable<char> {
        text.chars().collect()
    }

    fn offsets(value: Countable<usize>) -> Vec<usize> {
        value.to_vec()
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Token {
        Word(&'static str),
        Number(i64),
    }

    #[derive(Debug, PartialEq)]
    enum Kind {
        Word,
        Number,
    }

    impl Categorized for Token {
        type Category = Kind;

        fn category(&self) -> Kind {
            match self {
                Token::Word(_) => Kind::Word,
                Token::Number(_) => Kind::Number,
            }
        }
    }

    #[test]
    fn test_ends() {
        let view = letters("abc").view();
        let indices = view.indices();
        assert_eq!(offsets(indices.all()), vec![0, 1, 2]);
        assert_eq!(offsets(indices.first()), vec![0]);
        assert_eq!(offsets(indices.last()), vec![2]);
        assert_eq!(offsets(indices.first_and_last()), vec![0, 2]);
        assert_eq!(offsets(indices.last_and_first()), vec![2, 0]);

        let view = letters("a").view();
        assert_eq!(offsets(view.indices().first_and_last()), vec![0]);
    }

    #[test]
    fn test_empty_view_explains_itself() {
        let view = letters("abc").view().filter(|_| false);
        let all = view.indices().all();
        assert!(all.is_empty());
        assert_eq!(all.diagnosis().map(|d| d.rule()), Some(Rule::EmptyAfterFilter));
    }

    #[test]
    fn test_index_and_clamp() {
        let view = letters("abcde").view();
        let indices = view.indices();
        assert_eq!(indices.index(Index::FromEnd(1)).one(), Ok(3));
        assert_eq!(
            indices.index(Index::Forward(5)).diagnosis().map(|d| d.rule()),
            Some(Rule::IndexOutOfBounds)
        );
        assert_eq!(
            offsets(indices.clamp(&[Index::LAST, Index::Forward(9), Index::FIRST])),
            vec![4, 0]
        );
        assert!(indices.contains(&[Index::LAST, Index::Forward(4)]));
        assert!(!indices.contains(&[Index::LAST, Index::AfterLast]));
    }

    #[test]
    fn test_filter() {
        let view = letters("aBcDe").view();
        let indices = view.indices();
        assert_eq!(offsets(indices.filter(|c| c.is_uppercase())), vec![1, 3]);
        assert_eq!(offsets(indices.filter_first(|c| c.is_uppercase())), vec![1]);
        assert_eq!(offsets(indices.filter_last(|c| c.is_uppercase())), vec![3]);
        assert_eq!(
            indices
                .filter(|c| c.is_numeric())
                .diagnosis()
                .map(|d| d.rule()),
            Some(Rule::NoMatchingElement)
        );
    }

    #[test]
    fn test_find() {
        let value = Countable::new([0u8, 1, 2, 3].repeat(3));
        let view = value.view();
        let indices = view.indices();
        let needle = Countable::new(vec![1, 2]);
        assert_eq!(offsets(indices.find(&needle)), vec![1, 5, 9]);
        assert_eq!(offsets(indices.find_first(&needle)), vec![1]);
        assert_eq!(offsets(indices.find_last(&needle)), vec![9]);
        assert_eq!(
            indices
                .find(&Countable::new(vec![3, 3]))
                .diagnosis()
                .map(|d| d.rule()),
            Some(Rule::SubsequenceNotFound)
        );
    }

    #[test]
    fn test_find_abnormal_needle() {
        let view = letters("abc").view();
        let needle = Countable::error(diagnose(Rule::Violation, "upstream"));
        let found = view.indices().find(&needle);
        assert!(found.is_abnormal());
        assert_eq!(found.diagnosis().map(|d| d.rule()), Some(Rule::AbnormalInput));
    }

    #[test]
    fn test_instances_of() {
        let value = Countable::new(vec![
            Token::Word("a"),
            Token::Number(1),
            Token::Word("b"),
        ]);
        let view = value.view();
        assert_eq!(offsets(view.indices().instances_of(&Kind::Word)), vec![0, 2]);
        assert_eq!(offsets(view.indices().instances_of(&Kind::Number)), vec![1]);
    }
}
