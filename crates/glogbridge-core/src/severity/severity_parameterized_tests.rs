#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test_case(NativeSeverity::ERROR, RuntimeLevel::Error)]
#[test_case(NativeSeverity::CRITICAL, RuntimeLevel::Critical)]
#[test_case(NativeSeverity::WARNING, RuntimeLevel::Warning)]
#[test_case(NativeSeverity::MESSAGE, RuntimeLevel::Info)]
#[test_case(NativeSeverity::INFO, RuntimeLevel::Info)]
#[test_case(NativeSeverity::DEBUG, RuntimeLevel::Debug)]
fn native_to_runtime___single_level_bit___maps_per_table(
    severity: NativeSeverity,
    expected: RuntimeLevel,
) {
    let level = native_to_runtime(severity, &FieldMap::new(), false, RuntimeLevel::Info);

    assert_eq!(level, expected);
}

#[test_case("0", RuntimeLevel::Critical)]
#[test_case("1", RuntimeLevel::Warning)]
#[test_case("2", RuntimeLevel::Critical)]
#[test_case("3", RuntimeLevel::Error)]
#[test_case("4", RuntimeLevel::Critical)]
#[test_case("5", RuntimeLevel::Info)]
#[test_case("6", RuntimeLevel::Info)]
#[test_case("7", RuntimeLevel::Debug)]
fn native_to_runtime___priority_digit___maps_per_table(digit: &str, expected: RuntimeLevel) {
    let mut fields = FieldMap::new();
    fields.insert(keys::PRIORITY, digit);

    let level = native_to_runtime(NativeSeverity::INFO, &fields, true, RuntimeLevel::Info);

    assert_eq!(level, expected);
}

#[test_case(50, NativeSeverity::WARNING)]
#[test_case(40, NativeSeverity::WARNING)]
#[test_case(30, NativeSeverity::WARNING)]
#[test_case(20, NativeSeverity::INFO)]
#[test_case(10, NativeSeverity::DEBUG)]
fn runtime_to_native___named_thresholds___map_per_table(level: u8, expected: NativeSeverity) {
    let severity = runtime_to_native(level, NativeSeverity::DEBUG);

    assert_eq!(severity, expected);
}

#[test_case(55, NativeSeverity::WARNING)]
#[test_case(45, NativeSeverity::WARNING)]
#[test_case(35, NativeSeverity::WARNING)]
#[test_case(25, NativeSeverity::INFO)]
#[test_case(15, NativeSeverity::DEBUG)]
fn runtime_to_native___intermediate_ordinals___use_nearest_lower_threshold(
    level: u8,
    expected: NativeSeverity,
) {
    let severity = runtime_to_native(level, NativeSeverity::DEBUG);

    assert_eq!(severity, expected);
}
