//! Severity mapping between the native flag word and the runtime scale
//!
//! Two fixed lookup tables, initialized as immutable statics and scanned on
//! every translation. The native-to-runtime direction optionally honors a
//! journal PRIORITY field; the runtime-to-native direction is a descending
//! threshold scan.

use crate::fields::{FieldMap, keys};
use crate::level::{NativeSeverity, RuntimeLevel};

/// Journal PRIORITY digit to runtime level
///
/// Indexed by the digit value 0..=7. The journal scale packs emergency,
/// alert, and critical severities into slots the runtime does not
/// distinguish, hence the repeated Critical entries.
static PRIORITY_TO_RUNTIME: [RuntimeLevel; 8] = [
    RuntimeLevel::Critical, // 0: emerg
    RuntimeLevel::Warning,  // 1: alert
    RuntimeLevel::Critical, // 2: crit
    RuntimeLevel::Error,    // 3: err
    RuntimeLevel::Critical, // 4: warning slot reserved by convention
    RuntimeLevel::Info,     // 5: notice
    RuntimeLevel::Info,     // 6: info
    RuntimeLevel::Debug,    // 7: debug
];

/// Native level flag to runtime level, most restrictive first
///
/// A flag word may carry several level bits; the first match in this order
/// decides.
static NATIVE_TO_RUNTIME: [(NativeSeverity, RuntimeLevel); 6] = [
    (NativeSeverity::ERROR, RuntimeLevel::Error),
    (NativeSeverity::CRITICAL, RuntimeLevel::Critical),
    (NativeSeverity::WARNING, RuntimeLevel::Warning),
    (NativeSeverity::MESSAGE, RuntimeLevel::Info),
    (NativeSeverity::INFO, RuntimeLevel::Info),
    (NativeSeverity::DEBUG, RuntimeLevel::Debug),
];

/// Runtime ordinal threshold to native severity, descending
///
/// Critical and Error deliberately map to WARNING: the native backend may
/// treat its own ERROR/CRITICAL severities as fatal and terminate the
/// process, and a forwarded runtime error must never do that.
static RUNTIME_TO_NATIVE: [(u8, NativeSeverity); 5] = [
    (RuntimeLevel::Critical as u8, NativeSeverity::WARNING),
    (RuntimeLevel::Error as u8, NativeSeverity::WARNING),
    (RuntimeLevel::Warning as u8, NativeSeverity::WARNING),
    (RuntimeLevel::Info as u8, NativeSeverity::INFO),
    (RuntimeLevel::Debug as u8, NativeSeverity::DEBUG),
];

/// Map a native severity (and optionally a PRIORITY field) to a runtime level
///
/// When `use_priority_field` is set and `fields` carries a recognized
/// PRIORITY digit, the digit wins. Otherwise the flag word is masked down to
/// its level bits and scanned against the fixed table; `default` is returned
/// when nothing matches.
pub fn native_to_runtime(
    severity: NativeSeverity,
    fields: &FieldMap,
    use_priority_field: bool,
    default: RuntimeLevel,
) -> RuntimeLevel {
    if use_priority_field {
        if let Some(priority) = fields.text(keys::PRIORITY) {
            if let Some(level) = priority_level(&priority) {
                return level;
            }
        }
    }

    // Fallback when the priority is invalid or absent
    let bits = severity.level_bits();
    for (flag, level) in NATIVE_TO_RUNTIME {
        if bits.intersects(flag) {
            return level;
        }
    }

    default
}

/// Map a runtime ordinal to a native severity via the threshold table
///
/// Returns the first threshold `level` meets or exceeds, else `default`.
pub fn runtime_to_native(level: u8, default: NativeSeverity) -> NativeSeverity {
    for (threshold, severity) in RUNTIME_TO_NATIVE {
        if level >= threshold {
            return severity;
        }
    }
    default
}

/// Look up a PRIORITY field value, accepting exactly one digit 0..=7
fn priority_level(priority: &str) -> Option<RuntimeLevel> {
    let mut chars = priority.chars();
    let digit = chars.next()?.to_digit(10)?;
    if chars.next().is_some() || digit > 7 {
        return None;
    }
    Some(PRIORITY_TO_RUNTIME[digit as usize])
}


#[cfg(test)]
#[path = "severity/severity_parameterized_tests.rs"]
mod severity_parameterized_tests;
