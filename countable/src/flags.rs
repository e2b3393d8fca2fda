use strum_macros::Display;

/// What a container lets you change: the values of its elements, its
/// length, both or neither.
///
/// An operation on a container mutates it in place only when its flags
/// allow it; otherwise it produces a copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[strum(serialize_all = "kebab-case")]
pub enum Flags {
    /// Neither values nor length can change.
    #[default]
    Immutable,
    /// Elements can be inserted and removed, but not overwritten.
    VariableLength,
    /// Elements can be overwritten, but the length is fixed.
    Overwritable,
    /// Anything goes.
    Mutable,
}

static_assertions::assert_eq_size!(Flags, u8);

impl Flags {
    pub const ALL: [Flags; 4] = [
        Flags::Immutable,
        Flags::VariableLength,
        Flags::Overwritable,
        Flags::Mutable,
    ];

    pub const fn from_bits(overwritable: bool, variable_length: bool) -> Self {
        match (overwritable, variable_length) {
            (false, false) => Flags::Immutable,
            (false, true) => Flags::VariableLength,
            (true, false) => Flags::Overwritable,
            (true, true) => Flags::Mutable,
        }
    }

    pub const fn is_overwritable(self) -> bool {
        matches!(self, Flags::Overwritable | Flags::Mutable)
    }

    pub const fn is_variable_length(self) -> bool {
        matches!(self, Flags::VariableLength | Flags::Mutable)
    }

    pub const fn make_fixed_length(self) -> Self {
        Self::from_bits(self.is_overwritable(), false)
    }

    pub const fn make_variable_length(self) -> Self {
        Self::from_bits(self.is_overwritable(), true)
    }

    pub const fn make_fixed_values(self) -> Self {
        Self::from_bits(false, self.is_variable_length())
    }

    pub const fn make_overwritable(self) -> Self {
        Self::from_bits(true, self.is_variable_length())
    }

    /// Whether these flags grant everything `other` grants.
    pub const fn contains(self, other: Flags) -> bool {
        (self.is_overwritable() || !other.is_overwritable())
            && (self.is_variable_length() || !other.is_variable_length())
    }

    fn grants(self) -> usize {
        self.is_overwritable() as usize + self.is_variable_length() as usize
    }

    /// The flags among `supported` closest to these without granting
    /// anything extra.
    ///
    /// Falls back to [`Flags::Immutable`], which every container supports.
    pub fn nearest(self, supported: &[Flags]) -> Flags {
        supported
            .iter()
            .copied()
            .filter(|candidate| self.contains(*candidate))
            .max_by_key(|candidate| candidate.grants())
            .unwrap_or(Flags::Immutable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitions_flip_one_bit() {
        assert_eq!(Flags::Immutable.make_variable_length(), Flags::VariableLength);
        assert_eq!(Flags::Immutable.make_overwritable(), Flags::Overwritable);
        assert_eq!(Flags::Mutable.make_fixed_length(), Flags::Overwritable);
        assert_eq!(Flags::Mutable.make_fixed_values(), Flags::VariableLength);
        assert_eq!(Flags::VariableLength.make_overwritable(), Flags::Mutable);
        assert_eq!(Flags::Overwritable.make_variable_length(), Flags::Mutable);
    }

    #[test]
    fn test_transitions_idempotent() {
        for flags in Flags::ALL {
            assert_eq!(
                flags.make_fixed_length().make_fixed_length(),
                flags.make_fixed_length()
            );
            assert_eq!(
                flags.make_overwritable().make_overwritable(),
                flags.make_overwritable()
            );
        }
        assert_eq!(Flags::Mutable.make_overwritable(), Flags::Mutable);
        assert_eq!(Flags::Immutable.make_fixed_values(), Flags::Immutable);
    }

    #[test]
    fn test_from_bits_round_trip() {
        for flags in Flags::ALL {
            assert_eq!(
                Flags::from_bits(flags.is_overwritable(), flags.is_variable_length()),
                flags
            );
        }
    }

    #[test]
    fn test_nearest() {
        let fixed = [Flags::Immutable, Flags::Overwritable];
        assert_eq!(Flags::Mutable.nearest(&fixed), Flags::Overwritable);
        assert_eq!(Flags::VariableLength.nearest(&fixed), Flags::Immutable);
        assert_eq!(Flags::Overwritable.nearest(&fixed), Flags::Overwritable);
        assert_eq!(Flags::Mutable.nearest(&[Flags::Immutable]), Flags::Immutable);
        assert_eq!(Flags::Mutable.nearest(&Flags::ALL), Flags::Mutable);
    }

    #[test]
    fn test_display() {
        assert_eq!(Flags::VariableLength.to_string(), "variable-length");
    }
}
