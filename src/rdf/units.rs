//! Unit codes carried by control ports.

use super::LadspaProperty;

// ---------------------------------------------------------------------------
// Unit codes
// ---------------------------------------------------------------------------

pub const LADSPA_UNIT_DB: LadspaProperty = 0x01;
pub const LADSPA_UNIT_COEF: LadspaProperty = 0x02;
pub const LADSPA_UNIT_HZ: LadspaProperty = 0x04;
pub const LADSPA_UNIT_S: LadspaProperty = 0x08;
pub const LADSPA_UNIT_MS: LadspaProperty = 0x10;
pub const LADSPA_UNIT_MIN: LadspaProperty = 0x20;

// ---------------------------------------------------------------------------
// Unit classes
// ---------------------------------------------------------------------------

pub const LADSPA_UNIT_CLASS_AMPLITUDE: LadspaProperty = LADSPA_UNIT_DB | LADSPA_UNIT_COEF;
pub const LADSPA_UNIT_CLASS_FREQUENCY: LadspaProperty = LADSPA_UNIT_HZ;
pub const LADSPA_UNIT_CLASS_TIME: LadspaProperty =
    LADSPA_UNIT_S | LADSPA_UNIT_MS | LADSPA_UNIT_MIN;

// ---------------------------------------------------------------------------
// Exact-match predicates
// ---------------------------------------------------------------------------

#[inline]
pub const fn is_unit_db(unit: LadspaProperty) -> bool {
    unit == LADSPA_UNIT_DB
}

#[inline]
pub const fn is_unit_coef(unit: LadspaProperty) -> bool {
    unit == LADSPA_UNIT_COEF
}

#[inline]
pub const fn is_unit_hz(unit: LadspaProperty) -> bool {
    unit == LADSPA_UNIT_HZ
}

#[inline]
pub const fn is_unit_s(unit: LadspaProperty) -> bool {
    unit == LADSPA_UNIT_S
}

#[inline]
pub const fn is_unit_ms(unit: LadspaProperty) -> bool {
    unit == LADSPA_UNIT_MS
}

#[inline]
pub const fn is_unit_min(unit: LadspaProperty) -> bool {
    unit == LADSPA_UNIT_MIN
}

// ---------------------------------------------------------------------------
// Class predicates
// ---------------------------------------------------------------------------

/// dB or linear coefficient.
#[inline]
pub const fn is_unit_class_amplitude(unit: LadspaProperty) -> bool {
    unit & LADSPA_UNIT_CLASS_AMPLITUDE != 0
}

#[inline]
pub const fn is_unit_class_frequency(unit: LadspaProperty) -> bool {
    unit & LADSPA_UNIT_CLASS_FREQUENCY != 0
}

/// Seconds, milliseconds or minutes.
#[inline]
pub const fn is_unit_class_time(unit: LadspaProperty) -> bool {
    unit & LADSPA_UNIT_CLASS_TIME != 0
}

/// Short display symbol for an exact unit code.
///
/// Combined or unknown codes have no symbol.
pub fn unit_symbol(unit: LadspaProperty) -> Option<&'static str> {
    match unit {
        LADSPA_UNIT_DB => Some("dB"),
        LADSPA_UNIT_COEF => Some("coef"),
        LADSPA_UNIT_HZ => Some("Hz"),
        LADSPA_UNIT_S => Some("s"),
        LADSPA_UNIT_MS => Some("ms"),
        LADSPA_UNIT_MIN => Some("min"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_UNITS: [LadspaProperty; 6] = [
        LADSPA_UNIT_DB,
        LADSPA_UNIT_COEF,
        LADSPA_UNIT_HZ,
        LADSPA_UNIT_S,
        LADSPA_UNIT_MS,
        LADSPA_UNIT_MIN,
    ];

    #[test]
    fn test_unit_values() {
        assert_eq!(LADSPA_UNIT_DB, 0x01);
        assert_eq!(LADSPA_UNIT_COEF, 0x02);
        assert_eq!(LADSPA_UNIT_HZ, 0x04);
        assert_eq!(LADSPA_UNIT_S, 0x08);
        assert_eq!(LADSPA_UNIT_MS, 0x10);
        assert_eq!(LADSPA_UNIT_MIN, 0x20);
        assert_eq!(LADSPA_UNIT_CLASS_AMPLITUDE, 0x03);
        assert_eq!(LADSPA_UNIT_CLASS_FREQUENCY, 0x04);
        assert_eq!(LADSPA_UNIT_CLASS_TIME, 0x38);
    }

    #[test]
    fn test_exact_predicates() {
        let predicates: [(LadspaProperty, fn(LadspaProperty) -> bool); 6] = [
            (LADSPA_UNIT_DB, is_unit_db),
            (LADSPA_UNIT_COEF, is_unit_coef),
            (LADSPA_UNIT_HZ, is_unit_hz),
            (LADSPA_UNIT_S, is_unit_s),
            (LADSPA_UNIT_MS, is_unit_ms),
            (LADSPA_UNIT_MIN, is_unit_min),
        ];

        for (own, pred) in predicates {
            for unit in ALL_UNITS {
                assert_eq!(pred(unit), unit == own, "unit {:#x}", unit);
            }
            // Exact match only, combined codes never qualify
            assert!(!pred(own | LADSPA_UNIT_CLASS_TIME | LADSPA_UNIT_CLASS_AMPLITUDE));
            assert!(!pred(0));
        }
    }

    #[test]
    fn test_class_predicates() {
        for unit in ALL_UNITS {
            assert_eq!(
                is_unit_class_amplitude(unit),
                unit == LADSPA_UNIT_DB || unit == LADSPA_UNIT_COEF
            );
            assert_eq!(is_unit_class_frequency(unit), unit == LADSPA_UNIT_HZ);
            assert_eq!(
                is_unit_class_time(unit),
                matches!(unit, LADSPA_UNIT_S | LADSPA_UNIT_MS | LADSPA_UNIT_MIN)
            );
        }
        assert!(!is_unit_class_amplitude(0));
        assert!(!is_unit_class_frequency(0));
        assert!(!is_unit_class_time(0));
    }

    #[test]
    fn test_unit_symbol() {
        assert_eq!(unit_symbol(LADSPA_UNIT_DB), Some("dB"));
        assert_eq!(unit_symbol(LADSPA_UNIT_HZ), Some("Hz"));
        assert_eq!(unit_symbol(LADSPA_UNIT_MIN), Some("min"));
        assert_eq!(unit_symbol(LADSPA_UNIT_S | LADSPA_UNIT_MS), None);
        assert_eq!(unit_symbol(0), None);
    }
}
