//! Host-facing plugin types derived from RDF descriptors.

use serde::{Deserialize, Serialize};

use crate::rdf::*;

// ---------------------------------------------------------------------------
// Port types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PluginPortType {
    AudioInput,
    AudioOutput,
    ControlInput,
    ControlOutput,
}

impl PluginPortType {
    /// Classify a LADSPA port type mask. Masks without exactly one
    /// direction and one kind have no port type.
    pub fn from_ladspa(port_type: LadspaProperty) -> Option<Self> {
        let input = is_port_input(port_type);
        let output = is_port_output(port_type);
        let audio = is_port_audio(port_type);
        let control = is_port_control(port_type);

        match (input, output, audio, control) {
            (true, false, true, false) => Some(Self::AudioInput),
            (false, true, true, false) => Some(Self::AudioOutput),
            (true, false, false, true) => Some(Self::ControlInput),
            (false, true, false, true) => Some(Self::ControlOutput),
            _ => None,
        }
    }

    pub fn is_audio(&self) -> bool {
        matches!(self, Self::AudioInput | Self::AudioOutput)
    }

    pub fn is_control(&self) -> bool {
        matches!(self, Self::ControlInput | Self::ControlOutput)
    }

    pub fn is_input(&self) -> bool {
        matches!(self, Self::AudioInput | Self::ControlInput)
    }

    pub fn is_output(&self) -> bool {
        matches!(self, Self::AudioOutput | Self::ControlOutput)
    }
}

// ---------------------------------------------------------------------------
// Port info
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginPortInfo {
    pub index: usize,
    pub name: String,
    pub port_type: PluginPortType,
    pub default_value: Option<f32>,
    /// Display symbol of the hinted unit ("dB", "Hz", ...).
    pub unit: Option<String>,
    pub scale_points: Vec<RdfScalePoint>,
}

// ---------------------------------------------------------------------------
// Plugin category
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PluginCategory {
    Amplifier,
    Chorus,
    Compressor,
    Delay,
    Distortion,
    Dynamics,
    Equaliser,
    Expander,
    Filter,
    Flanger,
    Gate,
    Generator,
    Limiter,
    Modulator,
    Oscillator,
    Phaser,
    Reverb,
    Simulator,
    Utility,
    Waveshaper,
    Other(String),
}

/// Single classes that name a category on their own, most specific first.
const SPECIFIC_CLASSES: &[(LadspaPluginType, PluginCategory)] = &[
    (LADSPA_CLASS_DELAY, PluginCategory::Delay),
    (LADSPA_CLASS_REVERB, PluginCategory::Reverb),
    (LADSPA_CLASS_PHASER, PluginCategory::Phaser),
    (LADSPA_CLASS_FLANGER, PluginCategory::Flanger),
    (LADSPA_CLASS_CHORUS, PluginCategory::Chorus),
    (LADSPA_CLASS_COMPRESSOR, PluginCategory::Compressor),
    (LADSPA_CLASS_EXPANDER, PluginCategory::Expander),
    (LADSPA_CLASS_LIMITER, PluginCategory::Limiter),
    (LADSPA_CLASS_GATE, PluginCategory::Gate),
    (LADSPA_CLASS_AMPLIFIER, PluginCategory::Amplifier),
    (LADSPA_CLASS_WAVESHAPER, PluginCategory::Waveshaper),
    (LADSPA_CLASS_DISTORTION, PluginCategory::Distortion),
    (LADSPA_CLASS_OSCILLATOR, PluginCategory::Oscillator),
    (LADSPA_CLASS_UTILITY, PluginCategory::Utility),
];

impl PluginCategory {
    /// Category for an RDF class mask.
    ///
    /// Specific base classes win over the broad groups; a mask in no group
    /// falls back to `Other("Plugin")`.
    pub fn from_plugin_type(plugin_type: LadspaPluginType) -> Self {
        if let Some((_, category)) = SPECIFIC_CLASSES
            .iter()
            .find(|(class, _)| plugin_type & class != 0)
        {
            return category.clone();
        }

        if is_plugin_dynamics(plugin_type) {
            Self::Dynamics
        } else if is_plugin_eq(plugin_type) {
            Self::Equaliser
        } else if is_plugin_filter(plugin_type) || is_plugin_frequency(plugin_type) {
            Self::Filter
        } else if is_plugin_amplitude(plugin_type) {
            Self::Modulator
        } else if is_plugin_simulator(plugin_type) {
            Self::Simulator
        } else if is_plugin_time(plugin_type) {
            Self::Delay
        } else if is_plugin_generator(plugin_type) {
            Self::Generator
        } else {
            Self::Other("Plugin".to_string())
        }
    }

    /// Category for a class label.
    ///
    /// RDF class names (`"NotchPlugin"`, `"ladspa:TimePlugin"`) resolve
    /// through their flag, so they agree with [`Self::from_plugin_type`].
    /// Other labels are matched on keywords.
    pub fn from_class_label(label: &str) -> Self {
        if let Some(class) = class_from_label(label) {
            return Self::from_plugin_type(class);
        }

        let lower = label.to_lowercase();
        let has_word = |w: &str| lower.split(|c: char| !c.is_alphanumeric()).any(|x| x == w);

        match lower.as_str() {
            s if s.contains("amplifier") => Self::Amplifier,
            s if s.contains("chorus") => Self::Chorus,
            s if s.contains("compressor") => Self::Compressor,
            s if s.contains("delay") => Self::Delay,
            s if s.contains("distortion") => Self::Distortion,
            s if s.contains("dynamics") => Self::Dynamics,
            s if s.contains("equaliser") || s.contains("equalizer") || has_word("eq") => {
                Self::Equaliser
            }
            s if s.contains("expander") => Self::Expander,
            s if s.contains("filter") => Self::Filter,
            s if s.contains("flanger") => Self::Flanger,
            s if s.contains("gate") => Self::Gate,
            s if s.contains("generator") => Self::Generator,
            s if s.contains("limiter") => Self::Limiter,
            s if s.contains("modulator") => Self::Modulator,
            s if s.contains("oscillator") => Self::Oscillator,
            s if s.contains("phaser") => Self::Phaser,
            s if s.contains("reverb") => Self::Reverb,
            s if s.contains("simulator") => Self::Simulator,
            s if s.contains("utility") => Self::Utility,
            s if s.contains("waveshaper") => Self::Waveshaper,
            _ => Self::Other(label.to_string()),
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Self::Amplifier => "Amplifier",
            Self::Chorus => "Chorus",
            Self::Compressor => "Compressor",
            Self::Delay => "Delay",
            Self::Distortion => "Distortion",
            Self::Dynamics => "Dynamics",
            Self::Equaliser => "Equaliser",
            Self::Expander => "Expander",
            Self::Filter => "Filter",
            Self::Flanger => "Flanger",
            Self::Gate => "Gate",
            Self::Generator => "Generator",
            Self::Limiter => "Limiter",
            Self::Modulator => "Modulator",
            Self::Oscillator => "Oscillator",
            Self::Phaser => "Phaser",
            Self::Reverb => "Reverb",
            Self::Simulator => "Simulator",
            Self::Utility => "Utility",
            Self::Waveshaper => "Waveshaper",
            Self::Other(s) => s.as_str(),
        }
    }
}

impl std::fmt::Display for PluginCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

// ---------------------------------------------------------------------------
// Plugin info (catalog entry)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginInfo {
    pub unique_id: u64,
    pub name: String,
    pub category: PluginCategory,
    pub author: Option<String>,
    pub ports: Vec<PluginPortInfo>,
    pub audio_inputs: usize,
    pub audio_outputs: usize,
    pub control_inputs: usize,
    pub control_outputs: usize,
}

impl PluginInfo {
    /// Host-facing summary of an RDF descriptor.
    ///
    /// Ports whose type mask is not a single direction and kind are skipped
    /// but keep their original index.
    pub fn from_rdf(desc: &RdfDescriptor) -> Self {
        let mut ports = Vec::new();
        let mut audio_inputs = 0usize;
        let mut audio_outputs = 0usize;
        let mut control_inputs = 0usize;
        let mut control_outputs = 0usize;

        for (i, port) in desc.ports.iter().enumerate() {
            let port_type = match PluginPortType::from_ladspa(port.port_type) {
                Some(t) => t,
                None => {
                    log::debug!(
                        "RDF {}: skipping port {} with type {:#x}",
                        desc.unique_id,
                        i,
                        port.port_type
                    );
                    continue;
                }
            };

            match (port_type.is_audio(), port_type.is_input()) {
                (true, true) => audio_inputs += 1,
                (true, false) => audio_outputs += 1,
                (false, true) => control_inputs += 1,
                (false, false) => control_outputs += 1,
            }

            let name = match port.label() {
                Some(l) => l.to_string(),
                None => format!("port_{}", i),
            };

            ports.push(PluginPortInfo {
                index: i,
                name,
                port_type,
                default_value: port.default_value(),
                unit: port.unit_symbol().map(String::from),
                scale_points: port.scale_points.clone(),
            });
        }

        let name = match desc.title() {
            Some(t) => t.to_string(),
            None => format!("LADSPA {}", desc.unique_id),
        };

        Self {
            unique_id: desc.unique_id,
            name,
            category: PluginCategory::from_plugin_type(desc.plugin_type),
            author: desc.creator.clone(),
            ports,
            audio_inputs,
            audio_outputs,
            control_inputs,
            control_outputs,
        }
    }

    pub fn is_effect(&self) -> bool {
        self.audio_inputs > 0 && self.audio_outputs > 0
    }

    pub fn is_instrument(&self) -> bool {
        self.audio_inputs == 0 && self.audio_outputs > 0
    }

    pub fn is_analyser(&self) -> bool {
        self.audio_inputs > 0 && self.audio_outputs == 0
    }
}
