use std::fmt;
use std::str::FromStr;

use super::flags::MonthSet;

/// Enumerates the twelve calendar months backing the plan bitmask.
///
/// The variants serve as a strongly-typed view that avoids leaking raw bit
/// positions into higher layers while still supporting inexpensive
/// conversions back into [`MonthSet`]. The iterator returned by
/// [`MonthSet::iter`] yields values in ascending bit order, which coincides
/// with calendar order.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Month {
    /// January (bit 0).
    January,
    /// February (bit 1).
    February,
    /// March (bit 2).
    March,
    /// April (bit 3).
    April,
    /// May (bit 4).
    May,
    /// June (bit 5).
    June,
    /// July (bit 6).
    July,
    /// August (bit 7).
    August,
    /// September (bit 8).
    September,
    /// October (bit 9).
    October,
    /// November (bit 10).
    November,
    /// December (bit 11).
    December,
}

impl Month {
    /// Calendar ordering of the months.
    ///
    /// The array lists variants in ascending bit order so it can be used to
    /// populate [`MonthSet::ALL_MONTHS`] or iterate over every month without
    /// duplicating match statements. The ordering matches the iteration
    /// semantics of [`MonthSet::iter`].
    pub const ALL: [Self; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// Returns the [`MonthSet`] bit corresponding to the enum variant.
    #[must_use]
    pub const fn as_flag(self) -> MonthSet {
        match self {
            Self::January => MonthSet::JANUARY,
            Self::February => MonthSet::FEBRUARY,
            Self::March => MonthSet::MARCH,
            Self::April => MonthSet::APRIL,
            Self::May => MonthSet::MAY,
            Self::June => MonthSet::JUNE,
            Self::July => MonthSet::JULY,
            Self::August => MonthSet::AUGUST,
            Self::September => MonthSet::SEPTEMBER,
            Self::October => MonthSet::OCTOBER,
            Self::November => MonthSet::NOVEMBER,
            Self::December => MonthSet::DECEMBER,
        }
    }

    /// Returns the English month name used in reports and parsing.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::January => "January",
            Self::February => "February",
            Self::March => "March",
            Self::April => "April",
            Self::May => "May",
            Self::June => "June",
            Self::July => "July",
            Self::August => "August",
            Self::September => "September",
            Self::October => "October",
            Self::November => "November",
            Self::December => "December",
        }
    }

    pub(crate) const fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            _ if bits == MonthSet::JANUARY.bits() => Some(Self::January),
            _ if bits == MonthSet::FEBRUARY.bits() => Some(Self::February),
            _ if bits == MonthSet::MARCH.bits() => Some(Self::March),
            _ if bits == MonthSet::APRIL.bits() => Some(Self::April),
            _ if bits == MonthSet::MAY.bits() => Some(Self::May),
            _ if bits == MonthSet::JUNE.bits() => Some(Self::June),
            _ if bits == MonthSet::JULY.bits() => Some(Self::July),
            _ if bits == MonthSet::AUGUST.bits() => Some(Self::August),
            _ if bits == MonthSet::SEPTEMBER.bits() => Some(Self::September),
            _ if bits == MonthSet::OCTOBER.bits() => Some(Self::October),
            _ if bits == MonthSet::NOVEMBER.bits() => Some(Self::November),
            _ if bits == MonthSet::DECEMBER.bits() => Some(Self::December),
            _ => None,
        }
    }

    /// Attempts to parse a month name into the corresponding variant.
    ///
    /// The parser accepts full English month names and their three-letter
    /// abbreviations, ignoring ASCII case, so command-line operands like
    /// `march` or `MAR` resolve without forcing callers to normalise input
    /// first. Any other input is rejected; the returned [`ParseMonthError`]
    /// exposes the offending identifier via
    /// [`ParseMonthError::identifier`], making it trivial for callers to
    /// surface actionable diagnostics.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::str::FromStr;
    /// use calendar::Month;
    ///
    /// let parsed = Month::from_str("march").expect("known month");
    /// assert_eq!(parsed, Month::March);
    /// assert!(Month::from_str("Smarch").is_err());
    /// ```
    #[must_use = "discarding the parsed month would drop potential parse errors"]
    pub fn from_name(name: &str) -> Result<Self, ParseMonthError> {
        Self::from_str(name)
    }
}

impl FromStr for Month {
    type Err = ParseMonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for month in Self::ALL {
            let name = month.name();
            if s.eq_ignore_ascii_case(name) || s.eq_ignore_ascii_case(&name[..3]) {
                return Ok(month);
            }
        }

        Err(ParseMonthError::new(s))
    }
}

/// Error returned when parsing a [`Month`] from an invalid identifier.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseMonthError {
    identifier: Box<str>,
}

impl ParseMonthError {
    pub(crate) fn new(identifier: impl Into<Box<str>>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }

    /// Returns the identifier that failed to parse.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

impl fmt::Display for ParseMonthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized month name: {}", self.identifier())
    }
}

impl std::error::Error for ParseMonthError {}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
