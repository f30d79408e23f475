use std::fmt;
use std::iter::{Extend, FromIterator};
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use super::iter::MonthSetIter;
use super::month::Month;

/// Bitfield that encodes the months selected by a training plan.
///
/// Each calendar month owns one bit, assigned in calendar order starting
/// from bit 0. The remaining twenty bits of the `u32` representation carry
/// no meaning; they are preserved by the explicit integer conversions but
/// skipped by decoding, so callers holding values produced by newer
/// revisions with more defined bits keep working unchanged.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct MonthSet {
    bits: u32,
}

impl MonthSet {
    const fn new(bits: u32) -> Self {
        Self { bits }
    }

    /// No months selected.
    pub const EMPTY: Self = Self::new(0);
    /// January (bit 0).
    pub const JANUARY: Self = Self::new(1 << 0);
    /// February (bit 1).
    pub const FEBRUARY: Self = Self::new(1 << 1);
    /// March (bit 2).
    pub const MARCH: Self = Self::new(1 << 2);
    /// April (bit 3).
    pub const APRIL: Self = Self::new(1 << 3);
    /// May (bit 4).
    pub const MAY: Self = Self::new(1 << 4);
    /// June (bit 5).
    pub const JUNE: Self = Self::new(1 << 5);
    /// July (bit 6).
    pub const JULY: Self = Self::new(1 << 6);
    /// August (bit 7).
    pub const AUGUST: Self = Self::new(1 << 7);
    /// September (bit 8).
    pub const SEPTEMBER: Self = Self::new(1 << 8);
    /// October (bit 9).
    pub const OCTOBER: Self = Self::new(1 << 9);
    /// November (bit 10).
    pub const NOVEMBER: Self = Self::new(1 << 10);
    /// December (bit 11).
    pub const DECEMBER: Self = Self::new(1 << 11);

    /// Bitfield containing every calendar month.
    pub const ALL_MONTHS: Self = Self::new(Self::MONTH_MASK);

    pub(crate) const MONTH_MASK: u32 = Self::JANUARY.bits
        | Self::FEBRUARY.bits
        | Self::MARCH.bits
        | Self::APRIL.bits
        | Self::MAY.bits
        | Self::JUNE.bits
        | Self::JULY.bits
        | Self::AUGUST.bits
        | Self::SEPTEMBER.bits
        | Self::OCTOBER.bits
        | Self::NOVEMBER.bits
        | Self::DECEMBER.bits;

    /// Returns a bitfield constructed from the raw `bits` without masking.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self { bits }
    }

    /// Returns the raw bit representation of the selection.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.bits
    }

    /// Returns `true` when no months are selected.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Reports the subset of bits that do not correspond to a calendar month.
    #[must_use]
    pub const fn undefined_bits(self) -> u32 {
        self.bits & !Self::MONTH_MASK
    }

    /// Returns `true` when the bitfield contains bits outside the defined months.
    ///
    /// Decoding tolerates such values by skipping the off-range bits, but
    /// higher layers often want to detect the situation so they can log a
    /// diagnostic or refuse input that was clearly not produced by this
    /// revision. This helper performs that check without forcing callers to
    /// compare masks themselves.
    #[must_use]
    pub const fn has_undefined_bits(self) -> bool {
        self.undefined_bits() != 0
    }

    /// Returns a new bitfield with all undefined bits cleared.
    #[must_use]
    pub const fn without_undefined_bits(self) -> Self {
        Self::new(self.bits & Self::MONTH_MASK)
    }

    /// Checks whether all months in `other` are selected in `self`.
    ///
    /// The comparison uses the equality form `(bits & other) == other` so
    /// composite arguments covering several bits are checked as a whole
    /// rather than reporting a match on any single overlapping bit.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        (self.bits & other.bits) == other.bits
    }

    /// Returns a new bitfield containing the union of both operands.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self::new(self.bits | other.bits)
    }

    /// Returns a new bitfield containing only the months common to both operands.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self::new(self.bits & other.bits)
    }

    /// Returns a new bitfield containing the months present in `self` but not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self::new(self.bits & !other.bits)
    }

    /// Returns an iterator over the months selected in the bitfield.
    ///
    /// The iterator yields [`Month`] values in calendar (ascending bit)
    /// order. Undefined bits outside the twelve months are skipped.
    /// Decoding is a pure function of the value: calling `iter` again
    /// restarts it with identical results.
    #[must_use]
    pub fn iter(self) -> MonthSetIter {
        MonthSetIter::new(self)
    }
}

impl FromIterator<Month> for MonthSet {
    /// Builds a [`MonthSet`] from an iterator of months.
    ///
    /// Selections are folded into the bitfield by OR-ing the corresponding
    /// bits. Duplicate months are irrelevant because they do not affect the
    /// resulting mask; the empty iterator yields [`MonthSet::EMPTY`].
    fn from_iter<I: IntoIterator<Item = Month>>(iter: I) -> Self {
        let mut bits = 0u32;
        for month in iter {
            bits |= month.as_flag().bits();
        }
        Self::from_bits(bits)
    }
}

impl Extend<Month> for MonthSet {
    /// Adds each month yielded by the iterator to the bitfield.
    fn extend<I: IntoIterator<Item = Month>>(&mut self, iter: I) {
        for month in iter {
            *self |= month.as_flag();
        }
    }
}

impl IntoIterator for MonthSet {
    type Item = Month;
    type IntoIter = MonthSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &MonthSet {
    type Item = Month;
    type IntoIter = MonthSetIter;

    fn into_iter(self) -> Self::IntoIter {
        (*self).iter()
    }
}

impl IntoIterator for &mut MonthSet {
    type Item = Month;
    type IntoIter = MonthSetIter;

    fn into_iter(self) -> Self::IntoIter {
        (*self).iter()
    }
}

impl fmt::Debug for MonthSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MonthSet")
            .field("bits", &format_args!("0x{:x}", self.bits))
            .finish()
    }
}

impl fmt::Display for MonthSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("None");
        }

        let mut first = true;
        for month in self.iter() {
            if !first {
                f.write_str(" | ")?;
            }
            first = false;
            fmt::Display::fmt(&month, f)?;
        }

        let undefined = self.undefined_bits();
        if undefined != 0 {
            if !first {
                f.write_str(" | ")?;
            }
            write!(f, "undefined(0x{undefined:x})")?;
        }

        Ok(())
    }
}

impl Not for MonthSet {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self::new(!self.bits)
    }
}

impl BitOr for MonthSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl BitOrAssign for MonthSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl BitAnd for MonthSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl BitAndAssign for MonthSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.bits &= rhs.bits;
    }
}

impl BitXor for MonthSet {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        Self::new(self.bits ^ rhs.bits)
    }
}

impl BitXorAssign for MonthSet {
    fn bitxor_assign(&mut self, rhs: Self) {
        self.bits ^= rhs.bits;
    }
}

impl From<MonthSet> for u32 {
    fn from(set: MonthSet) -> Self {
        set.bits
    }
}

impl From<u32> for MonthSet {
    fn from(bits: u32) -> Self {
        Self::from_bits(bits)
    }
}

impl From<Month> for MonthSet {
    /// Converts a single month into the corresponding bitfield value.
    fn from(month: Month) -> Self {
        month.as_flag()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for MonthSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.bits)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for MonthSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u32::deserialize(deserializer).map(Self::from_bits)
    }
}
