//! Port flags and the per-port RDF record.

use serde::{Deserialize, Serialize};

use super::units::unit_symbol;
use super::{LadspaData, LadspaProperty};

// ---------------------------------------------------------------------------
// Port types (same bits as the binary LADSPA API)
// ---------------------------------------------------------------------------

pub const LADSPA_PORT_INPUT: LadspaProperty = 0x1;
pub const LADSPA_PORT_OUTPUT: LadspaProperty = 0x2;
pub const LADSPA_PORT_CONTROL: LadspaProperty = 0x4;
pub const LADSPA_PORT_AUDIO: LadspaProperty = 0x8;

#[inline]
pub const fn is_port_input(port_type: LadspaProperty) -> bool {
    port_type & LADSPA_PORT_INPUT != 0
}

#[inline]
pub const fn is_port_output(port_type: LadspaProperty) -> bool {
    port_type & LADSPA_PORT_OUTPUT != 0
}

#[inline]
pub const fn is_port_control(port_type: LadspaProperty) -> bool {
    port_type & LADSPA_PORT_CONTROL != 0
}

#[inline]
pub const fn is_port_audio(port_type: LadspaProperty) -> bool {
    port_type & LADSPA_PORT_AUDIO != 0
}

// ---------------------------------------------------------------------------
// Port hints
// ---------------------------------------------------------------------------

pub const LADSPA_PORT_UNIT: LadspaProperty = 0x1;
pub const LADSPA_PORT_DEFAULT: LadspaProperty = 0x2;
pub const LADSPA_PORT_LABEL: LadspaProperty = 0x4;

#[inline]
pub const fn port_has_unit(hints: LadspaProperty) -> bool {
    hints & LADSPA_PORT_UNIT != 0
}

#[inline]
pub const fn port_has_default(hints: LadspaProperty) -> bool {
    hints & LADSPA_PORT_DEFAULT != 0
}

#[inline]
pub const fn port_has_label(hints: LadspaProperty) -> bool {
    hints & LADSPA_PORT_LABEL != 0
}

// ---------------------------------------------------------------------------
// Scale point
// ---------------------------------------------------------------------------

/// JSON has no NaN or infinity. Non-finite values are written as `null`
/// and read back as zero.
mod finite_f32 {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::LadspaData;

    pub fn serialize<S: Serializer>(value: &LadspaData, s: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            s.serialize_f32(*value)
        } else {
            s.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<LadspaData, D::Error> {
        Ok(Option::<LadspaData>::deserialize(d)?.unwrap_or(0.0))
    }
}

/// A named value a control port can snap to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RdfScalePoint {
    #[serde(default, with = "finite_f32")]
    pub value: LadspaData,
    pub label: Option<String>,
}

impl RdfScalePoint {
    pub fn new(value: LadspaData, label: impl Into<String>) -> Self {
        Self {
            value,
            label: Some(label.into()),
        }
    }
}

// ---------------------------------------------------------------------------
// Port
// ---------------------------------------------------------------------------

/// RDF metadata for one plugin port.
///
/// `hints` decides which of `label`, `default` and `unit` carry meaning.
/// A loader may leave the unhinted fields at arbitrary values, so read
/// them through the accessors rather than the raw fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RdfPort {
    pub port_type: LadspaProperty,
    pub hints: LadspaProperty,
    pub label: Option<String>,
    #[serde(default, with = "finite_f32")]
    pub default: LadspaData,
    pub unit: LadspaProperty,
    #[serde(default)]
    pub scale_points: Vec<RdfScalePoint>,
}

impl RdfPort {
    pub fn new(port_type: LadspaProperty) -> Self {
        Self {
            port_type,
            ..Default::default()
        }
    }

    /// Set the label and its hint bit.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self.hints |= LADSPA_PORT_LABEL;
        self
    }

    /// Set the default value and its hint bit.
    pub fn with_default(mut self, default: LadspaData) -> Self {
        self.default = default;
        self.hints |= LADSPA_PORT_DEFAULT;
        self
    }

    /// Set the unit code and its hint bit.
    pub fn with_unit(mut self, unit: LadspaProperty) -> Self {
        self.unit = unit;
        self.hints |= LADSPA_PORT_UNIT;
        self
    }

    pub fn with_scale_point(mut self, value: LadspaData, label: impl Into<String>) -> Self {
        self.scale_points.push(RdfScalePoint::new(value, label));
        self
    }

    pub fn label(&self) -> Option<&str> {
        if port_has_label(self.hints) {
            self.label.as_deref()
        } else {
            None
        }
    }

    pub fn default_value(&self) -> Option<LadspaData> {
        port_has_default(self.hints).then_some(self.default)
    }

    /// Hinted default, or `fallback` when the RDF gives none.
    pub fn default_or(&self, fallback: LadspaData) -> LadspaData {
        self.default_value().unwrap_or(fallback)
    }

    pub fn unit(&self) -> Option<LadspaProperty> {
        port_has_unit(self.hints).then_some(self.unit)
    }

    pub fn unit_symbol(&self) -> Option<&'static str> {
        self.unit().and_then(unit_symbol)
    }

    pub fn scale_point_count(&self) -> usize {
        self.scale_points.len()
    }

    /// Label of the scale point whose value equals `value` exactly.
    pub fn scale_point_label(&self, value: LadspaData) -> Option<&str> {
        self.scale_points
            .iter()
            .find(|sp| sp.value == value)
            .and_then(|sp| sp.label.as_deref())
    }

    pub fn is_input(&self) -> bool {
        is_port_input(self.port_type)
    }

    pub fn is_output(&self) -> bool {
        is_port_output(self.port_type)
    }

    pub fn is_control(&self) -> bool {
        is_port_control(self.port_type)
    }

    pub fn is_audio(&self) -> bool {
        is_port_audio(self.port_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdf::units::{LADSPA_UNIT_DB, LADSPA_UNIT_HZ};

    #[test]
    fn test_flag_values() {
        assert_eq!(LADSPA_PORT_INPUT, 0x1);
        assert_eq!(LADSPA_PORT_OUTPUT, 0x2);
        assert_eq!(LADSPA_PORT_CONTROL, 0x4);
        assert_eq!(LADSPA_PORT_AUDIO, 0x8);
        assert_eq!(LADSPA_PORT_UNIT, 0x1);
        assert_eq!(LADSPA_PORT_DEFAULT, 0x2);
        assert_eq!(LADSPA_PORT_LABEL, 0x4);
    }

    #[test]
    fn test_hint_predicates() {
        assert!(port_has_unit(LADSPA_PORT_UNIT));
        assert!(!port_has_unit(LADSPA_PORT_DEFAULT | LADSPA_PORT_LABEL));
        assert!(port_has_default(LADSPA_PORT_DEFAULT));
        assert!(!port_has_default(LADSPA_PORT_UNIT | LADSPA_PORT_LABEL));
        assert!(port_has_label(LADSPA_PORT_LABEL));
        assert!(!port_has_label(LADSPA_PORT_UNIT | LADSPA_PORT_DEFAULT));
        assert!(!port_has_unit(0) && !port_has_default(0) && !port_has_label(0));
    }

    #[test]
    fn test_empty_port_drops_cleanly() {
        let port = RdfPort::default();
        assert_eq!(port.port_type, 0);
        assert_eq!(port.hints, 0);
        assert!(port.label.is_none());
        assert_eq!(port.scale_point_count(), 0);
        drop(port);

        let sp = RdfScalePoint::default();
        assert_eq!(sp.value, 0.0);
        assert!(sp.label.is_none());
        drop(sp);
    }

    #[test]
    fn test_unhinted_fields_are_hidden() {
        // Storage populated but no hint bits set
        let port = RdfPort {
            port_type: LADSPA_PORT_INPUT | LADSPA_PORT_CONTROL,
            hints: 0,
            label: Some("Gain".into()),
            default: 0.5,
            unit: LADSPA_UNIT_DB,
            scale_points: Vec::new(),
        };
        assert_eq!(port.label(), None);
        assert_eq!(port.default_value(), None);
        assert_eq!(port.unit(), None);
        assert_eq!(port.unit_symbol(), None);
        assert_eq!(port.default_or(1.0), 1.0);
    }

    #[test]
    fn test_hinted_fields() {
        let port = RdfPort::new(LADSPA_PORT_INPUT | LADSPA_PORT_CONTROL)
            .with_label("Cutoff")
            .with_default(440.0)
            .with_unit(LADSPA_UNIT_HZ);
        assert_eq!(port.label(), Some("Cutoff"));
        assert_eq!(port.default_value(), Some(440.0));
        assert_eq!(port.default_or(1.0), 440.0);
        assert_eq!(port.unit(), Some(LADSPA_UNIT_HZ));
        assert_eq!(port.unit_symbol(), Some("Hz"));
        assert!(port.is_input() && port.is_control());
        assert!(!port.is_output() && !port.is_audio());
    }

    #[test]
    fn test_label_hint_without_storage() {
        let port = RdfPort {
            hints: LADSPA_PORT_LABEL,
            ..Default::default()
        };
        assert_eq!(port.label(), None);
    }

    #[test]
    fn test_non_finite_values_serialize_as_null() {
        let port = RdfPort {
            port_type: LADSPA_PORT_INPUT | LADSPA_PORT_CONTROL,
            default: f32::NAN,
            scale_points: vec![RdfScalePoint {
                value: f32::INFINITY,
                label: Some("Max".into()),
            }],
            ..Default::default()
        };
        let json = serde_json::to_string(&port).unwrap();
        assert!(json.contains("\"default\":null"), "{}", json);
        assert!(json.contains("\"value\":null"), "{}", json);

        let back: RdfPort = serde_json::from_str(&json).unwrap();
        assert_eq!(back.default, 0.0);
        assert_eq!(back.default_value(), None);
        assert_eq!(back.scale_points[0].value, 0.0);
        assert_eq!(back.scale_points[0].label.as_deref(), Some("Max"));
    }

    #[test]
    fn test_finite_values_round_trip() {
        let port = RdfPort::new(LADSPA_PORT_INPUT | LADSPA_PORT_CONTROL)
            .with_default(-12.5)
            .with_scale_point(0.25, "Quarter");
        let back: RdfPort = serde_json::from_str(&serde_json::to_string(&port).unwrap()).unwrap();
        assert_eq!(back, port);

        // Older caches may omit the field entirely
        let sparse: RdfPort =
            serde_json::from_str(r#"{"port_type": 5, "hints": 0, "label": null, "unit": 0}"#)
                .unwrap();
        assert_eq!(sparse.default, 0.0);
    }

    #[test]
    fn test_scale_points() {
        let port = RdfPort::new(LADSPA_PORT_INPUT | LADSPA_PORT_CONTROL)
            .with_scale_point(0.0, "Off")
            .with_scale_point(1.0, "Lowpass")
            .with_scale_point(2.0, "Highpass");
        assert_eq!(port.scale_point_count(), 3);
        assert_eq!(port.scale_point_label(1.0), Some("Lowpass"));
        assert_eq!(port.scale_point_label(1.5), None);
    }
}
