// Offset based edits shared by the containers and the views. They all take
// offsets that are ascending, unique and in bounds; `check_offsets` verifies
// that for callers that hand offsets in from outside.
use crate::error::{Error, Result};

/// The largest number of elements a contiguous allocation can hold.
pub fn maximum_length<E>() -> usize {
    isize::MAX as usize / std::mem::size_of::<E>().max(1)
}

/// Verify that a computed length is representable.
///
/// `None` stands for a length that overflowed while computing it.
pub(crate) fn checked_length<E>(length: Option<usize>) -> Result<usize> {
    let maximum = maximum_length::<E>();
    match length {
        Some(length) if length <= maximum => Ok(length),
        Some(length) => Err(Error::LengthExceeded { length, maximum }),
        None => Err(Error::LengthExceeded {
            length: usize::MAX,
            maximum,
        }),
    }
}

pub(crate) fn check_offsets(offsets: &[usize], length: usize) -> Result<()> {
    for pair in offsets.windows(2) {
        if pair[1] == pair[0] {
            return Err(Error::DuplicateOffset(pair[0]));
        }
        if pair[1] < pair[0] {
            return Err(Error::OffsetsNotAscending);
        }
    }
    match offsets.last() {
        Some(&offset) if offset >= length => Err(Error::OffsetOutOfBounds { offset, length }),
        _ => Ok(()),
    }
}

// walks ascending offsets alongside a forward scan
struct Cursor<'a> {
    offsets: &'a [usize],
    next: usize,
}

impl<'a> Cursor<'a> {
    fn new(offsets: &'a [usize]) -> Self {
        Cursor { offsets, next: 0 }
    }

    fn hit(&mut self, position: usize) -> bool {
        if self.offsets.get(self.next) == Some(&position) {
            self.next += 1;
            true
        } else {
            false
        }
    }
}

pub(crate) fn remove_sorted<E>(items: &mut Vec<E>, offsets: &[usize]) {
    let mut cursor = Cursor::new(offsets);
    let mut position = 0;
    items.retain(|_| {
        let hit = cursor.hit(position);
        position += 1;
        !hit
    });
}

pub(crate) fn keep_sorted<E>(items: &mut Vec<E>, offsets: &[usize]) {
    let mut cursor = Cursor::new(offsets);
    let mut position = 0;
    items.retain(|_| {
        let hit = cursor.hit(position);
        position += 1;
        hit
    });
}

/// Collect the elements at `offsets` (`keep`) or all the others.
pub(crate) fn select_sorted<E>(
    items: impl Iterator<Item = E>,
    offsets: &[usize],
    keep: bool,
) -> Vec<E> {
    let mut cursor = Cursor::new(offsets);
    items
        .enumerate()
        .filter(|(position, _)| cursor.hit(*position) == keep)
        .map(|(_, element)| element)
        .collect()
}

/// Copy `items`, putting a copy of `block` before each of the ascending
/// `offsets`. Offsets equal to the length append.
pub(crate) fn insert_blocks<E: Clone>(
    items: impl Iterator<Item = E>,
    offsets: &[usize],
    block: &[E],
    capacity: usize,
) -> Vec<E> {
    let mut result = Vec::with_capacity(capacity);
    let mut pending = offsets.iter().peekable();
    for (position, element) in items.enumerate() {
        while pending.next_if(|offset| **offset == position).is_some() {
            result.extend_from_slice(block);
        }
        result.push(element);
    }
    for _ in pending {
        result.extend_from_slice(block);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_offsets() {
        assert_eq!(check_offsets(&[0, 2, 4], 5), Ok(()));
        assert_eq!(check_offsets(&[], 0), Ok(()));
        assert_eq!(check_offsets(&[2, 1], 5), Err(Error::OffsetsNotAscending));
        assert_eq!(check_offsets(&[1, 1], 5), Err(Error::DuplicateOffset(1)));
        assert_eq!(
            check_offsets(&[1, 5], 5),
            Err(Error::OffsetOutOfBounds {
                offset: 5,
                length: 5
            })
        );
    }

    #[test]
    fn test_remove_and_keep_sorted() {
        let mut removed = vec!['a', 'b', 'c', 'd', 'e'];
        remove_sorted(&mut removed, &[0, 2, 4]);
        assert_eq!(removed, vec!['b', 'd']);

        let mut kept = vec!['a', 'b', 'c', 'd', 'e'];
        keep_sorted(&mut kept, &[0, 4]);
        assert_eq!(kept, vec!['a', 'e']);
    }

    #[test]
    fn test_select_sorted() {
        let items = ['a', 'b', 'c', 'd'];
        assert_eq!(
            select_sorted(items.iter().copied(), &[1, 2], true),
            vec!['b', 'c']
        );
        assert_eq!(
            select_sorted(items.iter().copied(), &[1, 2], false),
            vec!['a', 'd']
        );
    }

    #[test]
    fn test_insert_blocks() {
        assert_eq!(
            insert_blocks([1, 2, 3].into_iter(), &[0, 2, 2, 3], &[0], 7),
            vec![0, 1, 2, 0, 0, 3, 0]
        );
        assert_eq!(insert_blocks([].into_iter(), &[0], &[7, 8], 2), vec![7, 8]);
    }

    #[test]
    fn test_checked_length() {
        assert_eq!(checked_length::<u64>(Some(10)), Ok(10));
        assert_eq!(
            checked_length::<u8>(None),
            Err(Error::LengthExceeded {
                length: usize::MAX,
                maximum: isize::MAX as usize
            })
        );
        assert!(checked_length::<u64>(Some(isize::MAX as usize)).is_err());
    }
}
