//! Plugin class flags and functional groups.
//!
//! A plugin's class mask is an OR of base flags. Groups are fixed unions of
//! base flags (and of other groups); membership means sharing at least one
//! bit with the group mask.

use super::LadspaPluginType;

// ---------------------------------------------------------------------------
// Base classes
// ---------------------------------------------------------------------------

pub const LADSPA_CLASS_UTILITY: LadspaPluginType = 0x000000001;
pub const LADSPA_CLASS_GENERATOR: LadspaPluginType = 0x000000002;
pub const LADSPA_CLASS_SIMULATOR: LadspaPluginType = 0x000000004;
pub const LADSPA_CLASS_OSCILLATOR: LadspaPluginType = 0x000000008;
pub const LADSPA_CLASS_TIME: LadspaPluginType = 0x000000010;
pub const LADSPA_CLASS_DELAY: LadspaPluginType = 0x000000020;
pub const LADSPA_CLASS_PHASER: LadspaPluginType = 0x000000040;
pub const LADSPA_CLASS_FLANGER: LadspaPluginType = 0x000000080;
pub const LADSPA_CLASS_CHORUS: LadspaPluginType = 0x000000100;
pub const LADSPA_CLASS_REVERB: LadspaPluginType = 0x000000200;
pub const LADSPA_CLASS_FREQUENCY: LadspaPluginType = 0x000000400;
pub const LADSPA_CLASS_FREQUENCY_METER: LadspaPluginType = 0x000000800;
pub const LADSPA_CLASS_FILTER: LadspaPluginType = 0x000001000;
pub const LADSPA_CLASS_LOWPASS: LadspaPluginType = 0x000002000;
pub const LADSPA_CLASS_HIGHPASS: LadspaPluginType = 0x000004000;
pub const LADSPA_CLASS_BANDPASS: LadspaPluginType = 0x000008000;
pub const LADSPA_CLASS_COMB: LadspaPluginType = 0x000010000;
pub const LADSPA_CLASS_ALLPASS: LadspaPluginType = 0x000020000;
pub const LADSPA_CLASS_EQ: LadspaPluginType = 0x000040000;
pub const LADSPA_CLASS_PARAEQ: LadspaPluginType = 0x000080000;
pub const LADSPA_CLASS_MULTIEQ: LadspaPluginType = 0x000100000;
pub const LADSPA_CLASS_AMPLITUDE: LadspaPluginType = 0x000200000;
pub const LADSPA_CLASS_PITCH: LadspaPluginType = 0x000400000;
pub const LADSPA_CLASS_AMPLIFIER: LadspaPluginType = 0x000800000;
pub const LADSPA_CLASS_WAVESHAPER: LadspaPluginType = 0x001000000;
pub const LADSPA_CLASS_MODULATOR: LadspaPluginType = 0x002000000;
pub const LADSPA_CLASS_DISTORTION: LadspaPluginType = 0x004000000;
pub const LADSPA_CLASS_DYNAMICS: LadspaPluginType = 0x008000000;
pub const LADSPA_CLASS_COMPRESSOR: LadspaPluginType = 0x010000000;
pub const LADSPA_CLASS_EXPANDER: LadspaPluginType = 0x020000000;
pub const LADSPA_CLASS_LIMITER: LadspaPluginType = 0x040000000;
pub const LADSPA_CLASS_GATE: LadspaPluginType = 0x080000000;
pub const LADSPA_CLASS_SPECTRAL: LadspaPluginType = 0x100000000;
pub const LADSPA_CLASS_NOTCH: LadspaPluginType = 0x200000000;

// ---------------------------------------------------------------------------
// Groups
// ---------------------------------------------------------------------------

pub const LADSPA_GROUP_DYNAMICS: LadspaPluginType = LADSPA_CLASS_DYNAMICS
    | LADSPA_CLASS_COMPRESSOR
    | LADSPA_CLASS_EXPANDER
    | LADSPA_CLASS_LIMITER
    | LADSPA_CLASS_GATE;

pub const LADSPA_GROUP_AMPLITUDE: LadspaPluginType = LADSPA_CLASS_AMPLITUDE
    | LADSPA_CLASS_AMPLIFIER
    | LADSPA_CLASS_WAVESHAPER
    | LADSPA_CLASS_MODULATOR
    | LADSPA_CLASS_DISTORTION
    | LADSPA_GROUP_DYNAMICS;

pub const LADSPA_GROUP_EQ: LadspaPluginType =
    LADSPA_CLASS_EQ | LADSPA_CLASS_PARAEQ | LADSPA_CLASS_MULTIEQ;

pub const LADSPA_GROUP_FILTER: LadspaPluginType = LADSPA_CLASS_FILTER
    | LADSPA_CLASS_LOWPASS
    | LADSPA_CLASS_HIGHPASS
    | LADSPA_CLASS_BANDPASS
    | LADSPA_CLASS_COMB
    | LADSPA_CLASS_ALLPASS
    | LADSPA_CLASS_NOTCH;

pub const LADSPA_GROUP_FREQUENCY: LadspaPluginType = LADSPA_CLASS_FREQUENCY
    | LADSPA_CLASS_FREQUENCY_METER
    | LADSPA_GROUP_FILTER
    | LADSPA_GROUP_EQ
    | LADSPA_CLASS_PITCH;

pub const LADSPA_GROUP_SIMULATOR: LadspaPluginType =
    LADSPA_CLASS_SIMULATOR | LADSPA_CLASS_REVERB;

pub const LADSPA_GROUP_TIME: LadspaPluginType = LADSPA_CLASS_TIME
    | LADSPA_CLASS_DELAY
    | LADSPA_CLASS_PHASER
    | LADSPA_CLASS_FLANGER
    | LADSPA_CLASS_CHORUS
    | LADSPA_CLASS_REVERB;

pub const LADSPA_GROUP_GENERATOR: LadspaPluginType =
    LADSPA_CLASS_GENERATOR | LADSPA_CLASS_OSCILLATOR;

#[inline]
pub const fn is_plugin_dynamics(plugin_type: LadspaPluginType) -> bool {
    plugin_type & LADSPA_GROUP_DYNAMICS != 0
}

#[inline]
pub const fn is_plugin_amplitude(plugin_type: LadspaPluginType) -> bool {
    plugin_type & LADSPA_GROUP_AMPLITUDE != 0
}

#[inline]
pub const fn is_plugin_eq(plugin_type: LadspaPluginType) -> bool {
    plugin_type & LADSPA_GROUP_EQ != 0
}

#[inline]
pub const fn is_plugin_filter(plugin_type: LadspaPluginType) -> bool {
    plugin_type & LADSPA_GROUP_FILTER != 0
}

#[inline]
pub const fn is_plugin_frequency(plugin_type: LadspaPluginType) -> bool {
    plugin_type & LADSPA_GROUP_FREQUENCY != 0
}

#[inline]
pub const fn is_plugin_simulator(plugin_type: LadspaPluginType) -> bool {
    plugin_type & LADSPA_GROUP_SIMULATOR != 0
}

#[inline]
pub const fn is_plugin_time(plugin_type: LadspaPluginType) -> bool {
    plugin_type & LADSPA_GROUP_TIME != 0
}

#[inline]
pub const fn is_plugin_generator(plugin_type: LadspaPluginType) -> bool {
    plugin_type & LADSPA_GROUP_GENERATOR != 0
}

// ---------------------------------------------------------------------------
// RDF class names
// ---------------------------------------------------------------------------

/// Every base class flag with its class name in the LADSPA RDF schema,
/// in flag order.
pub const CLASS_LABELS: &[(LadspaPluginType, &str)] = &[
    (LADSPA_CLASS_UTILITY, "UtilityPlugin"),
    (LADSPA_CLASS_GENERATOR, "GeneratorPlugin"),
    (LADSPA_CLASS_SIMULATOR, "SimulatorPlugin"),
    (LADSPA_CLASS_OSCILLATOR, "OscillatorPlugin"),
    (LADSPA_CLASS_TIME, "TimePlugin"),
    (LADSPA_CLASS_DELAY, "DelayPlugin"),
    (LADSPA_CLASS_PHASER, "PhaserPlugin"),
    (LADSPA_CLASS_FLANGER, "FlangerPlugin"),
    (LADSPA_CLASS_CHORUS, "ChorusPlugin"),
    (LADSPA_CLASS_REVERB, "ReverbPlugin"),
    (LADSPA_CLASS_FREQUENCY, "FrequencyPlugin"),
    (LADSPA_CLASS_FREQUENCY_METER, "FrequencyMeterPlugin"),
    (LADSPA_CLASS_FILTER, "FilterPlugin"),
    (LADSPA_CLASS_LOWPASS, "LowpassPlugin"),
    (LADSPA_CLASS_HIGHPASS, "HighpassPlugin"),
    (LADSPA_CLASS_BANDPASS, "BandpassPlugin"),
    (LADSPA_CLASS_COMB, "CombPlugin"),
    (LADSPA_CLASS_ALLPASS, "AllpassPlugin"),
    (LADSPA_CLASS_EQ, "EQPlugin"),
    (LADSPA_CLASS_PARAEQ, "ParaEQPlugin"),
    (LADSPA_CLASS_MULTIEQ, "MultiEQPlugin"),
    (LADSPA_CLASS_AMPLITUDE, "AmplitudePlugin"),
    (LADSPA_CLASS_PITCH, "PitchPlugin"),
    (LADSPA_CLASS_AMPLIFIER, "AmplifierPlugin"),
    (LADSPA_CLASS_WAVESHAPER, "WaveshaperPlugin"),
    (LADSPA_CLASS_MODULATOR, "ModulatorPlugin"),
    (LADSPA_CLASS_DISTORTION, "DistortionPlugin"),
    (LADSPA_CLASS_DYNAMICS, "DynamicsPlugin"),
    (LADSPA_CLASS_COMPRESSOR, "CompressorPlugin"),
    (LADSPA_CLASS_EXPANDER, "ExpanderPlugin"),
    (LADSPA_CLASS_LIMITER, "LimiterPlugin"),
    (LADSPA_CLASS_GATE, "GatePlugin"),
    (LADSPA_CLASS_SPECTRAL, "SpectralPlugin"),
    (LADSPA_CLASS_NOTCH, "NotchPlugin"),
];

/// Flag for an RDF class name. Accepts a full URI or a `prefix:` form and
/// compares the trailing name exactly.
pub fn class_from_label(label: &str) -> Option<LadspaPluginType> {
    let name = label
        .rsplit(['#', ':', '/'])
        .next()
        .unwrap_or(label);
    CLASS_LABELS
        .iter()
        .find(|(_, l)| *l == name)
        .map(|(flag, _)| *flag)
}

/// Class names of every base flag set in `plugin_type`.
pub fn class_labels(plugin_type: LadspaPluginType) -> Vec<&'static str> {
    CLASS_LABELS
        .iter()
        .filter(|(flag, _)| plugin_type & flag != 0)
        .map(|(_, l)| *l)
        .collect()
}
