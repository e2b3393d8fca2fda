// Set operations that keep duplicates and order rather than collapsing to
// mathematical sets.

use std::hash::Hash;

use ahash::HashSet;

use crate::value::Countable;
use crate::Rule;

use super::View;

impl<E: Clone + Hash + Eq> View<E> {
    /// Append the elements of `other` that are not among the elements of
    /// this view.
    pub fn union(mut self, other: &Countable<E>) -> Self {
        let Some(other) = self.argument(other, "union") else {
            return self;
        };
        let additions = missing_from(self.items(), other);
        if additions.is_empty() {
            return self;
        }
        self.edit_items(|items| items.extend(additions))
    }

    /// Keep the elements that also occur in `other`.
    pub fn intersection(mut self, other: &Countable<E>) -> Self {
        let Some(other) = self.argument(other, "intersection") else {
            return self;
        };
        let lookup: HashSet<&E> = other.iter().collect();
        self.shrink(
            Rule::EmptyAfterIntersection,
            format_args!("intersection with {} elements", other.len()),
            |elements| elements.filter(|element| lookup.contains(element)),
        )
    }

    /// Remove the elements that occur in `other`, then append the elements
    /// of `other` that did not occur here.
    pub fn difference(mut self, other: &Countable<E>) -> Self {
        let Some(other) = self.argument(other, "difference") else {
            return self;
        };
        let additions = missing_from(self.items(), other);
        let lookup: HashSet<&E> = other.iter().collect();
        self.shrink_items(
            Rule::EmptyAfterDifference,
            format_args!("difference with {} elements", other.len()),
            |items| {
                items.retain(|element| !lookup.contains(element));
                items.extend(additions);
            },
        )
    }
}

// the elements of `other` that do not occur in `items`, duplicates included
fn missing_from<E: Clone + Hash + Eq>(items: &[E], other: &[E]) -> Vec<E> {
    let present: HashSet<&E> = items.iter().collect();
    other
        .iter()
        .filter(|element| !present.contains(element))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CountableCore;

    fn letters(text: &str) -> Countable<char> {
        text.chars().collect()
    }

    fn text(value: &Countable<char>) -> String {
        value.to_vec().into_iter().collect()
    }

    #[test]
    fn test_difference() {
        let value = letters("ABCBA").view().difference(&letters("B")).value();
        assert_eq!(text(&value), "ACA");
        let value = letters("ABC").view().difference(&letters("CDD")).value();
        assert_eq!(text(&value), "ABDD");
    }

    #[test]
    fn test_difference_twice_restores_without_duplicates() {
        let value = letters("ABC");
        let other = letters("CD");
        let twice = value
            .view()
            .difference(&other)
            .difference(&other)
            .value();
        assert_eq!(text(&twice), "ABC");
    }

    #[test]
    fn test_union() {
        let value = letters("ABA").view().union(&letters("BCC")).value();
        assert_eq!(text(&value), "ABACC");
        let value = letters("AB");
        assert_eq!(value.view().union(&Countable::empty()).value(), value);
    }

    #[test]
    fn test_union_without_additions_keeps_order() {
        let order = crate::Order::natural();
        let view = letters("CAB").view().sort(&order).union(&letters("BA"));
        assert_eq!(view.as_slice(), &['A', 'B', 'C']);
        assert!(view.elements().order()[0].same(&order));
        let view = view.intersection(&letters("CA"));
        assert!(view.elements().order()[0].same(&order));
    }

    #[test]
    fn test_intersection() {
        let value = letters("ABCBA").view().intersection(&letters("BX")).value();
        assert_eq!(text(&value), "BB");
        let emptied = letters("AB").view().intersection(&Countable::empty()).value();
        assert!(emptied.is_empty());
        assert_eq!(
            emptied.diagnosis().map(|d| d.rule()),
            Some(Rule::EmptyAfterIntersection)
        );
    }

    #[test]
    fn test_difference_empties() {
        let emptied = letters("AA").view().difference(&letters("A")).value();
        assert_eq!(
            emptied.diagnosis().map(|d| d.rule()),
            Some(Rule::EmptyAfterDifference)
        );
    }
}
