//! The per-plugin RDF record.

use serde::{Deserialize, Serialize};

use super::class::*;
use super::port::RdfPort;
use super::LadspaPluginType;

/// RDF metadata for one LADSPA plugin.
///
/// Built empty and then filled in field by field by whatever reads the RDF
/// files. Owns its strings and ports outright.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RdfDescriptor {
    /// Class bitmask (`LADSPA_CLASS_*`).
    pub plugin_type: LadspaPluginType,
    pub unique_id: u64,
    pub title: Option<String>,
    pub creator: Option<String>,
    #[serde(default)]
    pub ports: Vec<RdfPort>,
}

impl RdfDescriptor {
    pub fn new(unique_id: u64) -> Self {
        Self {
            unique_id,
            ..Default::default()
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn creator(&self) -> Option<&str> {
        self.creator.as_deref()
    }

    pub fn port_count(&self) -> usize {
        self.ports.len()
    }

    pub fn port(&self, index: usize) -> Option<&RdfPort> {
        self.ports.get(index)
    }

    pub fn has_class(&self, class: LadspaPluginType) -> bool {
        self.plugin_type & class != 0
    }

    pub fn is_dynamics(&self) -> bool {
        is_plugin_dynamics(self.plugin_type)
    }

    pub fn is_amplitude(&self) -> bool {
        is_plugin_amplitude(self.plugin_type)
    }

    pub fn is_eq(&self) -> bool {
        is_plugin_eq(self.plugin_type)
    }

    pub fn is_filter(&self) -> bool {
        is_plugin_filter(self.plugin_type)
    }

    pub fn is_frequency(&self) -> bool {
        is_plugin_frequency(self.plugin_type)
    }

    pub fn is_simulator(&self) -> bool {
        is_plugin_simulator(self.plugin_type)
    }

    pub fn is_time(&self) -> bool {
        is_plugin_time(self.plugin_type)
    }

    pub fn is_generator(&self) -> bool {
        is_plugin_generator(self.plugin_type)
    }

    /// RDF class names of every base class set on this plugin.
    pub fn class_labels(&self) -> Vec<&'static str> {
        class_labels(self.plugin_type)
    }
}
