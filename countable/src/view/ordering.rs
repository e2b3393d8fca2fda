use std::cmp::Ordering;
use std::iter;

use rand::Rng;

use crate::Order;

use super::View;

impl<E: Clone> View<E> {
    /// Reorder the elements by rank.
    ///
    /// `ranks` supplies one rank per element, in the current order, and may
    /// be endless. Elements end up in ascending order of rank; elements of
    /// equal rank keep their relative order, and elements left without a
    /// rank because `ranks` ran out come last, also in their relative order.
    pub fn shuffle<R: Ord>(self, ranks: impl IntoIterator<Item = R>) -> Self {
        self.edit_items(|items| {
            let ranks = ranks.into_iter().map(Some).chain(iter::repeat_with(|| None));
            let mut ranked: Vec<(Option<R>, E)> = items
                .drain(..)
                .zip(ranks)
                .map(|(element, rank)| (rank, element))
                .collect();
            ranked.sort_by(|(a, _), (b, _)| by_rank(a, b));
            items.extend(ranked.into_iter().map(|(_, element)| element));
        })
    }

    /// Reorder the elements randomly.
    pub fn shuffle_with<G: Rng>(self, rng: &mut G) -> Self {
        let ranks: Vec<u64> = (0..self.length()).map(|_| rng.gen()).collect();
        self.shuffle(ranks)
    }

    /// Stable sort by `order`. Sorting again by the order last sorted by
    /// does nothing.
    pub fn sort(self, order: &Order<E>) -> Self {
        self.edit(|elements| elements.sort_unchecked(order))
    }
}

// unranked sorts last
fn by_rank<R: Ord>(a: &Option<R>, b: &Option<R>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    use super::*;
    use crate::Countable;

    fn letters(text: &str) -> Countable<char> {
        text.chars().collect()
    }

    fn text(value: &Countable<char>) -> String {
        value.to_vec().into_iter().collect()
    }

    #[test]
    fn test_shuffle_groups_by_rank() {
        let shuffled = letters("abcd").view().shuffle([3, 1, 2, 1]).value();
        assert_eq!(text(&shuffled), "bdca");
    }

    #[test]
    fn test_shuffle_unranked_last() {
        let shuffled = letters("abcd").view().shuffle([2, 1]).value();
        assert_eq!(text(&shuffled), "bacd");
    }

    #[test]
    fn test_shuffle_endless_ranks() {
        let shuffled = letters("abcd").view().shuffle((0i64..).map(|i| -i)).value();
        assert_eq!(text(&shuffled), "dcba");
    }

    #[test]
    fn test_shuffle_with_is_a_reproducible_permutation() {
        let value: Countable<u32> = (0..50).collect();
        let first = value
            .view()
            .shuffle_with(&mut Xoshiro256PlusPlus::seed_from_u64(7))
            .value();
        let second = value
            .view()
            .shuffle_with(&mut Xoshiro256PlusPlus::seed_from_u64(7))
            .value();
        assert_eq!(first, second);
        assert_ne!(first, value);
        let mut sorted = first.to_vec();
        sorted.sort();
        assert_eq!(sorted, value.to_vec());
    }

    #[test]
    fn test_sort_is_stable_and_idempotent() {
        let by_length = Order::by_key(|word: &&str| word.len());
        let value = Countable::new(vec!["ccc", "a", "bb", "b", "aa"]);
        let once = value.view().sort(&by_length).value();
        assert_eq!(once.to_vec(), vec!["a", "b", "bb", "aa", "ccc"]);
        assert_eq!(once.view().sort(&by_length).value(), once);
    }

    #[test]
    fn test_sort_remembers_order() {
        let natural = Order::natural();
        let view = letters("cab").view().sort(&natural);
        assert!(view.elements().order()[0].same(&natural));
        let before = view.as_slice().as_ptr();
        let view = view.sort(&natural);
        assert_eq!(view.as_slice().as_ptr(), before);
        assert_eq!(view.elements().order().len(), 1);

        let reversed = natural.reversed();
        let view = view.sort(&reversed);
        assert_eq!(view.as_slice(), &['c', 'b', 'a']);
        assert!(view.elements().order()[0].same(&reversed));
        let view = view.shuffle([1, 0]);
        assert!(view.elements().order().is_empty());
    }
}
