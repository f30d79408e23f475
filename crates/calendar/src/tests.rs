use std::str::FromStr;

use crate::{Month, MonthSet};

#[test]
fn bit_constants_match_calendar_order() {
    assert_eq!(MonthSet::JANUARY.bits(), 1);
    assert_eq!(MonthSet::FEBRUARY.bits(), 1 << 1);
    assert_eq!(MonthSet::MARCH.bits(), 1 << 2);
    assert_eq!(MonthSet::APRIL.bits(), 1 << 3);
    assert_eq!(MonthSet::MAY.bits(), 1 << 4);
    assert_eq!(MonthSet::JUNE.bits(), 1 << 5);
    assert_eq!(MonthSet::JULY.bits(), 1 << 6);
    assert_eq!(MonthSet::AUGUST.bits(), 1 << 7);
    assert_eq!(MonthSet::SEPTEMBER.bits(), 1 << 8);
    assert_eq!(MonthSet::OCTOBER.bits(), 1 << 9);
    assert_eq!(MonthSet::NOVEMBER.bits(), 1 << 10);
    assert_eq!(MonthSet::DECEMBER.bits(), 1 << 11);
}

#[test]
fn all_months_covers_exactly_the_twelve_defined_bits() {
    let combined: MonthSet = Month::ALL.into_iter().collect();
    assert_eq!(combined, MonthSet::ALL_MONTHS);
    assert_eq!(MonthSet::ALL_MONTHS.bits(), (1 << 12) - 1);
}

#[test]
fn training_window_encodes_to_twenty_eight() {
    let plan = MonthSet::MARCH | MonthSet::APRIL | MonthSet::MAY;
    assert_eq!(plan.bits(), 28);

    let decoded: Vec<Month> = plan.iter().collect();
    assert_eq!(decoded, vec![Month::March, Month::April, Month::May]);
}

#[test]
fn year_boundary_pair_encodes_to_2049() {
    let plan: MonthSet = [Month::December, Month::January].into_iter().collect();
    assert_eq!(plan.bits(), 2049);

    let decoded: Vec<Month> = plan.iter().collect();
    assert_eq!(decoded, vec![Month::January, Month::December]);
}

#[test]
fn contains_reports_missing_months() {
    let plan = MonthSet::from_bits(28);
    assert!(plan.contains(MonthSet::MARCH));
    assert!(plan.contains(MonthSet::MARCH | MonthSet::MAY));
    assert!(!plan.contains(MonthSet::JUNE));
    assert!(!plan.contains(MonthSet::MARCH | MonthSet::JUNE));
}

#[test]
fn empty_selection_is_zero_and_decodes_to_nothing() {
    let empty: MonthSet = std::iter::empty::<Month>().collect();
    assert_eq!(empty, MonthSet::EMPTY);
    assert_eq!(empty.bits(), 0);
    assert!(empty.is_empty());
    assert_eq!(empty.iter().count(), 0);
}

#[test]
fn decode_then_recombine_is_idempotent() {
    let sets = [
        MonthSet::EMPTY,
        MonthSet::MARCH | MonthSet::APRIL | MonthSet::MAY,
        MonthSet::ALL_MONTHS,
        MonthSet::from_bits(MonthSet::JULY.bits() | 1 << 25),
    ];

    for set in sets {
        let recombined: MonthSet = set.iter().collect();
        assert_eq!(recombined, set.without_undefined_bits());
    }
}

#[test]
fn iter_yields_months_in_calendar_order() {
    let plan = MonthSet::DECEMBER | MonthSet::JANUARY | MonthSet::JUNE;

    let collected: Vec<_> = plan.iter().collect();
    assert_eq!(
        collected,
        vec![Month::January, Month::June, Month::December]
    );

    let mut iter = plan.iter();
    assert_eq!(iter.size_hint(), (3, Some(3)));
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.next(), Some(Month::January));
    assert_eq!(iter.size_hint(), (2, Some(2)));
    assert_eq!(iter.len(), 2);
}

#[test]
fn iter_skips_undefined_bits() {
    let value = MonthSet::from_bits(1 << 15) | MonthSet::APRIL | MonthSet::NOVEMBER;

    let collected: Vec<_> = value.iter().collect();
    assert_eq!(collected, vec![Month::April, Month::November]);
}

#[test]
fn reverse_iteration_yields_calendar_order_reversed() {
    let plan = MonthSet::MARCH | MonthSet::APRIL | MonthSet::MAY;

    let reversed: Vec<_> = plan.iter().rev().collect();
    assert_eq!(reversed, vec![Month::May, Month::April, Month::March]);
}

#[test]
fn undefined_bits_survive_conversions_untouched() {
    let value = MonthSet::from_bits(0xFFF | (1 << 12));
    assert_eq!(value.undefined_bits(), 1 << 12);
    assert!(value.has_undefined_bits());
    assert_eq!(u32::from(value), 0xFFF | (1 << 12));
    assert_eq!(value.without_undefined_bits(), MonthSet::ALL_MONTHS);
}

#[test]
fn bitwise_operators_behave_like_bitfields() {
    let mut plan = MonthSet::MARCH;
    plan |= MonthSet::APRIL;
    assert!(plan.contains(MonthSet::APRIL));

    plan &= MonthSet::APRIL;
    assert_eq!(plan, MonthSet::APRIL);

    plan ^= MonthSet::APRIL;
    assert!(plan.is_empty());

    plan |= MonthSet::MAY;
    assert!(plan.contains(MonthSet::MAY));
    assert!(!plan.contains(MonthSet::APRIL));

    let inverted = !MonthSet::EMPTY;
    assert!(inverted.contains(MonthSet::ALL_MONTHS));
}

#[test]
fn extend_adds_months_to_existing_selection() {
    let mut plan = MonthSet::MARCH;
    plan.extend([Month::April, Month::May, Month::April]);
    assert_eq!(plan.bits(), 28);
}

#[test]
fn display_joins_month_names_in_calendar_order() {
    assert_eq!(MonthSet::EMPTY.to_string(), "None");
    assert_eq!(
        (MonthSet::MARCH | MonthSet::APRIL | MonthSet::MAY).to_string(),
        "March | April | May"
    );
    assert_eq!(
        (MonthSet::JANUARY | MonthSet::from_bits(1 << 20)).to_string(),
        "January | undefined(0x100000)"
    );
}

#[test]
fn debug_shows_raw_bits_in_hex() {
    let plan = MonthSet::from_bits(28);
    assert_eq!(format!("{plan:?}"), "MonthSet { bits: 0x1c }");
}

#[test]
fn month_names_parse_case_insensitively() {
    assert_eq!(Month::from_str("March"), Ok(Month::March));
    assert_eq!(Month::from_str("march"), Ok(Month::March));
    assert_eq!(Month::from_str("MAR"), Ok(Month::March));
    assert_eq!(Month::from_str("dec"), Ok(Month::December));
    assert_eq!(Month::from_name("September"), Ok(Month::September));
}

#[test]
fn unknown_month_names_are_rejected_with_the_input() {
    let err = Month::from_str("Smarch").expect_err("unknown month must be rejected");
    assert_eq!(err.identifier(), "Smarch");
    assert_eq!(err.to_string(), "unrecognized month name: Smarch");
}

#[test]
fn every_month_round_trips_through_its_flag() {
    for month in Month::ALL {
        let flag = month.as_flag();
        assert!(flag.contains(MonthSet::from(month)));

        let decoded: Vec<_> = flag.iter().collect();
        assert_eq!(decoded, vec![month]);
    }
}

#[cfg(feature = "serde")]
mod serde_tests {
    use crate::{Month, MonthSet};

    #[test]
    fn month_serializes_by_name() {
        let json = serde_json::to_string(&Month::March).expect("serialization succeeds");
        assert_eq!(json, "\"March\"");

        let parsed: Month = serde_json::from_str("\"March\"").expect("deserialization succeeds");
        assert_eq!(parsed, Month::March);
    }

    #[test]
    fn month_set_serializes_as_raw_bits() {
        let plan = MonthSet::MARCH | MonthSet::APRIL | MonthSet::MAY;
        let json = serde_json::to_string(&plan).expect("serialization succeeds");
        assert_eq!(json, "28");

        let parsed: MonthSet = serde_json::from_str("28").expect("deserialization succeeds");
        assert_eq!(parsed, plan);
    }
}
