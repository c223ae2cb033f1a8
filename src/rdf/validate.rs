//! Checking RDF metadata against the plugin it claims to describe.
//!
//! RDF files are installed separately from plugin libraries and can go stale,
//! so a host should only trust a descriptor whose id and port layout agree
//! with the binary plugin.

use super::descriptor::RdfDescriptor;
use super::port::*;
use super::LadspaPortDescriptor;

/// Whether every direction/kind bit set on the RDF port is also set on the
/// plugin's port descriptor.
pub fn is_port_compatible(
    rdf_type: LadspaPortDescriptor,
    plugin_port: LadspaPortDescriptor,
) -> bool {
    let checks = [
        (is_port_input(rdf_type), is_port_input(plugin_port)),
        (is_port_output(rdf_type), is_port_output(plugin_port)),
        (is_port_control(rdf_type), is_port_control(plugin_port)),
        (is_port_audio(rdf_type), is_port_audio(plugin_port)),
    ];
    checks.iter().all(|&(rdf, plugin)| !rdf || plugin)
}

impl RdfDescriptor {
    /// Check this descriptor against a loaded plugin's unique id and port
    /// descriptors.
    ///
    /// The plugin may have more ports than the RDF lists, never fewer.
    pub fn matches_plugin(
        &self,
        unique_id: u64,
        port_descriptors: &[LadspaPortDescriptor],
    ) -> bool {
        if self.unique_id != unique_id {
            log::warn!(
                "RDF: unique id mismatch (rdf {} vs plugin {})",
                self.unique_id,
                unique_id
            );
            return false;
        }

        if self.ports.len() > port_descriptors.len() {
            log::warn!(
                "RDF: descriptor {} lists {} ports but the plugin has {}",
                self.unique_id,
                self.ports.len(),
                port_descriptors.len()
            );
            return false;
        }

        for (i, (port, &plugin_port)) in self.ports.iter().zip(port_descriptors).enumerate() {
            if !is_port_compatible(port.port_type, plugin_port) {
                log::warn!(
                    "RDF: descriptor {} port {} type {:#x} does not match plugin type {:#x}",
                    self.unique_id,
                    i,
                    port.port_type,
                    plugin_port
                );
                return false;
            }
        }

        true
    }
}
