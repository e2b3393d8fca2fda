/// A position in a sequence whose length is not known yet.
///
/// An index counts either forward from the first element or backward from
/// the last one. `AfterLast` is the position just past the end: it never
/// addresses an element, but it is a valid insertion point. `None` is the
/// explicit "no such index".
///
/// An index is turned into a concrete position by clamping it against the
/// length of the sequence it addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Index {
    /// The nth element counting from the first one.
    Forward(usize),
    /// The nth element counting backward from the last one.
    FromEnd(usize),
    AfterLast,
    None,
}

#[cfg(target_pointer_width = "64")]
static_assertions::assert_eq_size!(Index, [u8; 16]);

impl Index {
    pub const FIRST: Index = Index::Forward(0);
    pub const LAST: Index = Index::FromEnd(0);

    /// Highest raw value that still counts forward in the signed encoding.
    pub const FORWARD_LIMIT: i64 = i32::MAX as i64;
    /// Raw encoding of [`Index::LAST`].
    pub const RAW_LAST: i64 = i64::MAX;
    /// Raw encoding of [`Index::AfterLast`].
    pub const RAW_AFTER_LAST: i64 = i64::MIN;
    /// Raw encoding of [`Index::None`].
    pub const RAW_NONE: i64 = -1;

    /// The position this index addresses in a sequence of `length`
    /// elements, if any.
    pub fn clamp(self, length: usize) -> Option<usize> {
        match self {
            Index::Forward(offset) if offset < length => Some(offset),
            Index::FromEnd(back) if back < length => Some(length - back - 1),
            _ => None,
        }
    }

    /// The position before which new elements go when inserting at this
    /// index.
    ///
    /// A forward index inserts before the element it addresses, or appends
    /// when it equals `length`. A backward index inserts after the element
    /// it addresses, so [`Index::LAST`] appends as well; one that reaches
    /// past the first element appends too, which makes [`Index::LAST`] an
    /// insertion point even in an empty sequence. [`Index::AfterLast`]
    /// always appends.
    pub fn insertion_point(self, length: usize) -> Option<usize> {
        match self {
            Index::Forward(offset) if offset <= length => Some(offset),
            Index::Forward(_) | Index::None => None,
            Index::FromEnd(back) if back < length => Some(length - back),
            Index::FromEnd(_) | Index::AfterLast => Some(length),
        }
    }

    pub fn is_backward(self) -> bool {
        matches!(self, Index::FromEnd(_))
    }

    /// Decode the signed sentinel encoding.
    ///
    /// Non-negative values up to [`Index::FORWARD_LIMIT`] count forward;
    /// larger values count backward from [`Index::RAW_LAST`]. Negative
    /// values other than [`Index::RAW_AFTER_LAST`] mean no index at all.
    pub fn decode(raw: i64) -> Index {
        if raw == Self::RAW_AFTER_LAST {
            Index::AfterLast
        } else if raw < 0 {
            Index::None
        } else if raw <= Self::FORWARD_LIMIT {
            usize::try_from(raw).map_or(Index::None, Index::Forward)
        } else {
            usize::try_from(Self::RAW_LAST - raw).map_or(Index::None, Index::FromEnd)
        }
    }

    /// Encode into the signed sentinel encoding.
    ///
    /// Indices too far from either end to be represented give `None`.
    pub fn encode(self) -> Option<i64> {
        match self {
            Index::Forward(offset) => i64::try_from(offset)
                .ok()
                .filter(|raw| *raw <= Self::FORWARD_LIMIT),
            Index::FromEnd(back) => i64::try_from(back)
                .ok()
                .map(|back| Self::RAW_LAST - back)
                .filter(|raw| *raw > Self::FORWARD_LIMIT),
            Index::AfterLast => Some(Self::RAW_AFTER_LAST),
            Index::None => Some(Self::RAW_NONE),
        }
    }
}

impl From<usize> for Index {
    fn from(offset: usize) -> Self {
        Index::Forward(offset)
    }
}

/// Clamp a batch of indices into ascending, de-duplicated positions,
/// dropping the ones that address nothing.
pub(crate) fn clamp_all(indices: &[Index], length: usize) -> Vec<usize> {
    let mut positions = indices
        .iter()
        .filter_map(|index| index.clamp(length))
        .collect::<Vec<_>>();
    positions.sort_unstable();
    positions.dedup();
    positions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_boundaries() {
        let length = 5;
        assert_eq!(Index::Forward(0).clamp(length), Some(0));
        assert_eq!(Index::Forward(4).clamp(length), Some(4));
        assert_eq!(Index::Forward(5).clamp(length), None);
        assert_eq!(Index::LAST.clamp(length), Some(4));
        assert_eq!(Index::FromEnd(1).clamp(length), Some(3));
        assert_eq!(Index::FromEnd(4).clamp(length), Some(0));
        assert_eq!(Index::FromEnd(5).clamp(length), None);
        assert_eq!(Index::AfterLast.clamp(length), None);
        assert_eq!(Index::None.clamp(length), None);
    }

    #[test]
    fn test_clamp_empty() {
        assert_eq!(Index::FIRST.clamp(0), None);
        assert_eq!(Index::LAST.clamp(0), None);
        assert_eq!(Index::AfterLast.clamp(0), None);
        assert_eq!(Index::None.clamp(0), None);
    }

    #[test]
    fn test_clamp_always_in_range() {
        let indices = [
            Index::FIRST,
            Index::Forward(1),
            Index::Forward(7),
            Index::LAST,
            Index::FromEnd(1),
            Index::FromEnd(7),
            Index::AfterLast,
            Index::None,
        ];
        for length in 0..10 {
            for index in indices {
                if let Some(position) = index.clamp(length) {
                    assert!(position < length, "{index:?} in {length}");
                }
            }
            if length > 0 {
                assert_eq!(Index::LAST.clamp(length), Some(length - 1));
            }
        }
    }

    #[test]
    fn test_insertion_point() {
        assert_eq!(Index::Forward(0).insertion_point(3), Some(0));
        assert_eq!(Index::Forward(3).insertion_point(3), Some(3));
        assert_eq!(Index::Forward(4).insertion_point(3), None);
        assert_eq!(Index::LAST.insertion_point(3), Some(3));
        assert_eq!(Index::FromEnd(2).insertion_point(3), Some(1));
        assert_eq!(Index::FromEnd(3).insertion_point(3), Some(3));
        assert_eq!(Index::FromEnd(9).insertion_point(3), Some(3));
        assert_eq!(Index::AfterLast.insertion_point(3), Some(3));
        assert_eq!(Index::AfterLast.insertion_point(0), Some(0));
        assert_eq!(Index::LAST.insertion_point(0), Some(0));
        assert_eq!(Index::None.insertion_point(3), None);
    }

    #[test]
    fn test_decode_sentinels() {
        assert_eq!(Index::decode(Index::RAW_LAST), Index::LAST);
        assert_eq!(Index::decode(Index::RAW_LAST - 1), Index::FromEnd(1));
        assert_eq!(Index::decode(Index::RAW_AFTER_LAST), Index::AfterLast);
        assert_eq!(Index::decode(Index::RAW_NONE), Index::None);
        assert_eq!(Index::decode(-42), Index::None);
        assert_eq!(Index::decode(0), Index::FIRST);
        assert_eq!(
            Index::decode(Index::FORWARD_LIMIT),
            Index::Forward(i32::MAX as usize)
        );
        assert!(Index::decode(Index::FORWARD_LIMIT + 1).is_backward());
    }

    #[test]
    fn test_decoded_clamp() {
        // the threshold arithmetic: LAST - n addresses length - n - 1
        let length = 4;
        assert_eq!(Index::decode(Index::RAW_LAST).clamp(length), Some(3));
        assert_eq!(Index::decode(Index::RAW_LAST - 1).clamp(length), Some(2));
        assert_eq!(Index::decode(Index::RAW_LAST - 4).clamp(length), None);
        assert_eq!(Index::decode(3).clamp(length), Some(3));
        assert_eq!(Index::decode(4).clamp(length), None);
        assert_eq!(Index::decode(Index::RAW_AFTER_LAST).clamp(length), None);
        assert_eq!(Index::decode(Index::RAW_NONE).clamp(length), None);
    }

    #[test]
    fn test_encode() {
        for index in [
            Index::FIRST,
            Index::Forward(12),
            Index::LAST,
            Index::FromEnd(12),
            Index::AfterLast,
            Index::None,
        ] {
            let raw = index.encode().unwrap();
            assert_eq!(Index::decode(raw), index);
        }
        assert_eq!(Index::Forward(i32::MAX as usize + 1).encode(), None);
    }

    #[test]
    fn test_clamp_all() {
        let indices = [
            Index::Forward(3),
            Index::LAST,
            Index::Forward(0),
            Index::Forward(9),
            Index::Forward(3),
            Index::None,
        ];
        assert_eq!(clamp_all(&indices, 5), vec![0, 3, 4]);
        assert_eq!(clamp_all(&indices, 0), Vec::<usize>::new());
    }
}
