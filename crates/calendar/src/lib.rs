#![deny(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(missing_docs)]

//! Month bitmask primitives for the `trainsched` workspace.
//!
//! A training plan is the set of calendar months in which an obligation must
//! be completed. The crate stores that selection as a single `u32` with one
//! bit per month (January is bit 0, December is bit 11) and exposes a typed
//! bitfield so higher layers can combine and decode selections without
//! manipulating raw integers directly.
//!
//! # Examples
//!
//! Combine individual months into a plan and decode the result back into
//! named months:
//!
//! ```
//! use calendar::{Month, MonthSet};
//!
//! let plan = MonthSet::MARCH | MonthSet::APRIL | MonthSet::MAY;
//! assert_eq!(plan.bits(), 28);
//!
//! let decoded: Vec<Month> = plan.iter().collect();
//! assert_eq!(decoded, vec![Month::March, Month::April, Month::May]);
//! ```
//!
//! Bits outside the twelve defined months are tolerated but never decoded:
//!
//! ```
//! use calendar::MonthSet;
//!
//! let value = MonthSet::from_bits(MonthSet::DECEMBER.bits() | 1 << 20);
//! assert_eq!(value.iter().count(), 1);
//! assert_eq!(value.undefined_bits(), 1 << 20);
//! ```

mod flags;
mod iter;
mod month;

pub use flags::MonthSet;
pub use iter::MonthSetIter;
pub use month::{Month, ParseMonthError};

#[cfg(test)]
mod tests;
