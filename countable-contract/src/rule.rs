use strum::EnumMessage;
use strum_macros::{Display, EnumIter, EnumMessage};

/// A rule that explains why a countable value ended up without elements.
///
/// The documentation of each rule doubles as its message: the first
/// paragraph is a one line summary, the rest is a longer note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumMessage, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Rule {
    /// Must not be empty.
    ///
    /// The countable value was built without any elements.
    MustNotBeEmpty,
    /// Must not have more than one element.
    ///
    /// A single element was requested from a countable value holding
    /// several.
    MustNotHaveMany,
    /// Contract violated.
    ///
    /// An upstream contract was violated; the abnormal value carries no
    /// further detail.
    Violation,
    /// Empty after filter.
    ///
    /// Every element was rejected by the filter predicate.
    EmptyAfterFilter,
    /// Empty after keep.
    ///
    /// None of the elements is one of the values to keep.
    EmptyAfterKeep,
    /// Empty after remove.
    ///
    /// Every element is one of the values to remove.
    EmptyAfterRemove,
    /// Empty after keeping indices.
    ///
    /// None of the indices to keep addresses an element.
    EmptyAfterKeepIndices,
    /// Empty after removing indices.
    ///
    /// The indices to remove address every element.
    EmptyAfterRemoveIndices,
    /// Empty after range.
    ///
    /// The requested range of indices addresses no element, or its end
    /// precedes its start.
    EmptyAfterRange,
    /// Empty after removing a range.
    ///
    /// The removed range of indices covers every element.
    EmptyAfterRemoveRange,
    /// Empty after keeping the first elements.
    ///
    /// The number of leading elements to keep was zero.
    EmptyAfterKeepFirst,
    /// Empty after keeping the last elements.
    ///
    /// The number of trailing elements to keep was zero.
    EmptyAfterKeepLast,
    /// Empty after removing the first elements.
    ///
    /// The number of leading elements to remove was at least the number
    /// of elements.
    EmptyAfterRemoveFirst,
    /// Empty after removing the last elements.
    ///
    /// The number of trailing elements to remove was at least the number
    /// of elements.
    EmptyAfterRemoveLast,
    /// Empty after replace.
    ///
    /// Every element was part of a replaced subsequence and the
    /// replacement was empty.
    EmptyAfterReplace,
    /// Empty after intersection.
    ///
    /// No element also occurs in the other countable value.
    EmptyAfterIntersection,
    /// Empty after difference.
    ///
    /// Every element also occurs in the other countable value, and the
    /// other value has nothing to contribute.
    EmptyAfterDifference,
    /// Empty segment.
    ///
    /// A split produced a segment without elements, for instance between
    /// two adjacent split points.
    EmptySegment,
    /// Index out of bounds.
    ///
    /// The requested index does not address any element.
    IndexOutOfBounds,
    /// No matching element.
    ///
    /// No element satisfies the predicate.
    NoMatchingElement,
    /// Subsequence not found.
    ///
    /// The subsequence does not occur, or is itself empty.
    SubsequenceNotFound,
    /// No instances.
    ///
    /// No element belongs to the requested category.
    NoInstances,
    /// Abnormal input.
    ///
    /// An operation was combined with an abnormal countable value; the
    /// diagnosis of that value is the cause.
    AbnormalInput,
}

impl Rule {
    pub fn code(&self) -> String {
        self.to_string()
    }

    pub fn message(&self) -> &str {
        self.documentation_pieces().0
    }

    pub fn note(&self) -> &str {
        self.documentation_pieces().1
    }

    fn documentation_pieces(&self) -> (&str, &str) {
        if let Some(documentation) = self.get_documentation() {
            let mut pieces = documentation.splitn(2, "\n\n");
            let first = pieces.next().unwrap_or("");
            let second = pieces.next().unwrap_or("");
            (first.trim(), second.trim())
        } else {
            ("", "")
        }
    }
}
