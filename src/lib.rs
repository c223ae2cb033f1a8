//! ladspa-rdf - LADSPA plugin metadata
//!
//! Flag constants and descriptor records for the metadata that LADSPA RDF
//! files add to a plugin (class, title, creator, port labels, defaults,
//! units and scale points), plus the host-side catalog built from them.

pub mod plugin;
pub mod rdf;

pub use plugin::{DescriptorCatalog, PluginCategory, PluginInfo};
pub use rdf::{RdfDescriptor, RdfPort, RdfScalePoint};
