/// End-to-end integration tests for the converter library
///
/// These tests verify complete workflows: convert → log → read back → export
mod common;

use common::TestLog;
use instant_convert::engine::{ConversionError, convert, format_magnitude};
use instant_convert::history::{ConversionRecord, to_csv};
use instant_convert::{catalog, trivia};

#[test]
fn test_e2e_convert_and_log() {
    let log = TestLog::new();
    let store = log.store();

    let result = convert(5.0, "meter", "foot", "Length").unwrap();
    let record = ConversionRecord::new(5.0, "meter", &result.unit_label, result.magnitude);
    store.append(&record).unwrap();

    let entries = store.entries().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries.last().unwrap().description, "5 meter -> 16.40419948 foot");
}

#[test]
fn test_e2e_history_accumulates_in_append_order() {
    let log = TestLog::new();
    let store = log.store();

    for (value, from, to, category) in [
        (1.0, "kilometer", "mile", "Length"),
        (100.0, "celsius", "fahrenheit", "Temperature"),
        (2.0, "gigabyte", "megabyte", "Digital Storage"),
    ] {
        let result = convert(value, from, to, category).unwrap();
        store
            .append(&ConversionRecord::new(value, from, &result.unit_label, result.magnitude))
            .unwrap();
    }

    let entries = store.entries().unwrap();
    assert_eq!(entries.len(), 3);
    assert!(entries[0].description.starts_with("1 kilometer"));
    assert!(entries[1].description.starts_with("100 celsius"));
    assert!(entries[2].description.starts_with("2 gigabyte"));
}

#[test]
fn test_e2e_csv_export_round_trip() {
    let log = TestLog::new().with_records(&[
        (1.0, "kilometer", "mile", 0.621_371_192),
        (0.0, "celsius", "fahrenheit", 32.0),
    ]);

    let csv = to_csv(&log.store().entries().unwrap());
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Timestamp,Conversion");
    assert!(lines[1].ends_with("1 kilometer -> 0.62137119 mile"));
    assert!(lines[2].ends_with("0 celsius -> 32 fahrenheit"));
}

#[test]
fn test_e2e_clear_resets_history() {
    let log = TestLog::new().with_records(&[(5.0, "meter", "foot", 16.4)]);
    let store = log.store();

    store.clear().unwrap();
    assert!(store.entries().unwrap().is_empty());

    // The store remains usable after clearing
    store.append(&ConversionRecord::new(1.0, "mile", "yard", 1760.0)).unwrap();
    assert_eq!(store.entries().unwrap().len(), 1);
}

#[test]
fn test_e2e_round_trip_for_every_category() {
    // Convert the first catalog unit to the last and back; the result must
    // return to the original value within floating-point tolerance.
    for category in catalog::CATEGORIES {
        let units = catalog::units_for(category).unwrap();
        let from = units[0];
        let to = units[units.len() - 1];

        let there = convert(3.5, from, to, category).unwrap();
        let back = convert(there.magnitude, to, from, category).unwrap();
        assert!(
            (back.magnitude - 3.5).abs() < 1e-9,
            "{}: {} -> {} -> {} gave {}",
            category,
            from,
            to,
            from,
            back.magnitude
        );
    }
}

#[test]
fn test_e2e_failed_conversion_has_diagnostic() {
    let err = convert(1.0, "meter", "kilogram", "Length").unwrap_err();
    assert!(matches!(err, ConversionError::IncompatibleDimensions { .. }));
    assert!(err.to_string().contains("meter"));
    assert!(err.to_string().contains("kilogram"));
}

#[test]
fn test_e2e_formatting_matches_display_contract() {
    assert_eq!(format_magnitude(5.0), "5");
    assert_eq!(format_magnitude(5.1234), "5.1234");
    assert_eq!(format_magnitude(0.00000001), "0.00000001");
}

#[test]
fn test_e2e_trivia_pool_is_closed() {
    for _ in 0..50 {
        assert!(trivia::FACTS.contains(&trivia::random_fact()));
    }
}
