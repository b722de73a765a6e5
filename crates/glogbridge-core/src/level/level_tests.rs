#![allow(non_snake_case)]

use super::*;

// RuntimeLevel tests

#[test]
fn RuntimeLevel___ordering___follows_numeric_scale() {
    assert!(RuntimeLevel::Debug < RuntimeLevel::Info);
    assert!(RuntimeLevel::Info < RuntimeLevel::Warning);
    assert!(RuntimeLevel::Warning < RuntimeLevel::Error);
    assert!(RuntimeLevel::Error < RuntimeLevel::Critical);
}

#[test]
fn RuntimeLevel___value___matches_discriminant() {
    assert_eq!(RuntimeLevel::Debug.value(), 10);
    assert_eq!(RuntimeLevel::Info.value(), 20);
    assert_eq!(RuntimeLevel::Warning.value(), 30);
    assert_eq!(RuntimeLevel::Error.value(), 40);
    assert_eq!(RuntimeLevel::Critical.value(), 50);
}

#[test]
fn RuntimeLevel___from_value___floors_intermediate_ordinals() {
    assert_eq!(RuntimeLevel::from_value(45), RuntimeLevel::Error);
    assert_eq!(RuntimeLevel::from_value(35), RuntimeLevel::Warning);
    assert_eq!(RuntimeLevel::from_value(25), RuntimeLevel::Info);
}

#[test]
fn RuntimeLevel___from_value___below_debug_floors_to_debug() {
    assert_eq!(RuntimeLevel::from_value(0), RuntimeLevel::Debug);
    assert_eq!(RuntimeLevel::from_value(5), RuntimeLevel::Debug);
}

#[test]
fn RuntimeLevel___from_value___above_critical_is_critical() {
    assert_eq!(RuntimeLevel::from_value(255), RuntimeLevel::Critical);
}

#[test]
fn RuntimeLevel___display___uppercase_names() {
    assert_eq!(RuntimeLevel::Warning.to_string(), "WARNING");
    assert_eq!(RuntimeLevel::Critical.to_string(), "CRITICAL");
}

// NativeSeverity tests

#[test]
fn NativeSeverity___level_bits___strips_marker_flags() {
    let severity = NativeSeverity::WARNING | NativeSeverity::FLAG_FATAL | NativeSeverity::FLAG_RECURSION;

    assert_eq!(severity.level_bits(), NativeSeverity::WARNING);
}

#[test]
fn NativeSeverity___intersects___detects_shared_bits() {
    let severity = NativeSeverity::WARNING | NativeSeverity::DEBUG;

    assert!(severity.intersects(NativeSeverity::WARNING));
    assert!(severity.intersects(NativeSeverity::DEBUG));
    assert!(!severity.intersects(NativeSeverity::ERROR));
}

#[test]
fn NativeSeverity___is_fatal___only_with_fatal_flag() {
    assert!((NativeSeverity::ERROR | NativeSeverity::FLAG_FATAL).is_fatal());
    assert!(!NativeSeverity::ERROR.is_fatal());
}

#[test]
fn NativeSeverity___bits___roundtrips_through_from_bits() {
    let severity = NativeSeverity::from_bits(0b1010_0110);

    assert_eq!(NativeSeverity::from_bits(severity.bits()), severity);
}

#[test]
fn NativeSeverity___display___names_single_level_bits() {
    assert_eq!(NativeSeverity::INFO.to_string(), "INFO");
    assert_eq!(NativeSeverity::CRITICAL.to_string(), "CRITICAL");
}
