// Properties checked over seeded random inputs.
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use countable::{Countable, CountableCore, Index, Order};

const ROUNDS: usize = 200;

fn random_value(rng: &mut Xoshiro256PlusPlus) -> Countable<u8> {
    let length = rng.gen_range(0..12);
    (0..length).map(|_| rng.gen_range(0..4)).collect()
}

#[test]
fn test_clamp_stays_in_bounds() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
    for _ in 0..ROUNDS {
        let length = rng.gen_range(0..10usize);
        let raw = match rng.gen_range(0..4) {
            0 => Index::RAW_LAST - rng.gen_range(0..12),
            1 => Index::RAW_AFTER_LAST,
            2 => Index::RAW_NONE,
            _ => rng.gen_range(0..12),
        };
        let index = Index::decode(raw);
        if let Some(offset) = index.clamp(length) {
            assert!(offset < length, "{index:?} clamped to {offset} for {length}");
        }
        assert_eq!(Index::AfterLast.clamp(length), None);
        assert_eq!(
            Index::LAST.clamp(length),
            length.checked_sub(1),
        );
    }
}

#[test]
fn test_round_trip() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(2);
    for _ in 0..ROUNDS {
        let value = random_value(&mut rng);
        assert_eq!(value.view().value(), value);
    }
}

#[test]
fn test_idempotent_operations() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);
    let order = Order::natural();
    for _ in 0..ROUNDS {
        let value = random_value(&mut rng);
        let filtered = value.view().filter(|n| n % 2 == 0).value();
        assert_eq!(filtered.view().filter(|n| n % 2 == 0).value(), filtered);
        let unique = value.view().unique().value();
        assert_eq!(unique.view().unique().value(), unique);
        let sorted = value.view().sort(&order).value();
        assert_eq!(sorted.view().sort(&order).value(), sorted);
        let reversed = value.view().reverse().reverse().value();
        assert_eq!(reversed, value);
    }
}

#[test]
fn test_set_identities() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(4);
    for _ in 0..ROUNDS {
        let value = random_value(&mut rng);
        if value.is_empty() {
            continue;
        }
        assert_eq!(value.view().union(&Countable::empty()).value(), value);
        assert!(value
            .view()
            .intersection(&Countable::empty())
            .value()
            .is_empty());
        let other = random_value(&mut rng);
        let unique = value.view().unique().value();
        let other_unique = other.view().unique().value();
        let twice = unique
            .view()
            .difference(&other_unique)
            .difference(&other_unique)
            .value();
        let mut expected = unique.to_vec();
        let mut restored = twice.to_vec();
        expected.sort();
        restored.sort();
        assert_eq!(restored, expected);
    }
}

#[test]
fn test_split_then_join() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(5);
    for _ in 0..ROUNDS {
        let value = random_value(&mut rng);
        let count = rng.gen_range(1..5);
        let joined: Vec<u8> = value
            .view()
            .split_into(count)
            .iter()
            .flat_map(|segment| segment.to_vec())
            .collect();
        assert_eq!(joined, value.to_vec());
    }
}
