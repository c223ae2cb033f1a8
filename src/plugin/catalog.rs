//! Catalog of RDF descriptors keyed by LADSPA unique id.
//!
//! This is what a host keeps around after reading RDF files once, for
//! category browsing and for attaching metadata to plugins as they load.

use crate::rdf::{LadspaPluginType, RdfDescriptor};

use super::types::PluginInfo;

#[derive(Debug, Default)]
pub struct DescriptorCatalog {
    descriptors: Vec<RdfDescriptor>,
}

impl DescriptorCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_descriptors(descriptors: Vec<RdfDescriptor>) -> Self {
        let mut catalog = Self::new();
        catalog.extend_descriptors(descriptors);
        catalog
    }

    // ----- Catalog -----

    /// Replace the entire catalog.
    pub fn set_descriptors(&mut self, descriptors: Vec<RdfDescriptor>) {
        self.descriptors.clear();
        self.extend_descriptors(descriptors);
    }

    /// Add descriptors; one whose unique id is already present replaces
    /// the existing entry.
    pub fn extend_descriptors(&mut self, descriptors: Vec<RdfDescriptor>) {
        for desc in descriptors {
            if let Some(existing) = self.find_mut(desc.unique_id) {
                log::debug!("RDF catalog: replacing descriptor {}", desc.unique_id);
                *existing = desc;
            } else {
                self.descriptors.push(desc);
            }
        }
    }

    /// Sort alphabetically by title (case-insensitive), untitled last.
    pub fn sort_catalog(&mut self) {
        self.descriptors.sort_by(|a, b| match (a.title(), b.title()) {
            (Some(x), Some(y)) => x.to_lowercase().cmp(&y.to_lowercase()),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.unique_id.cmp(&b.unique_id),
        });
    }

    pub fn descriptors(&self) -> &[RdfDescriptor] {
        &self.descriptors
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn find(&self, unique_id: u64) -> Option<&RdfDescriptor> {
        self.descriptors.iter().find(|d| d.unique_id == unique_id)
    }

    pub fn find_mut(&mut self, unique_id: u64) -> Option<&mut RdfDescriptor> {
        self.descriptors.iter_mut().find(|d| d.unique_id == unique_id)
    }

    pub fn remove(&mut self, unique_id: u64) -> Option<RdfDescriptor> {
        let pos = self
            .descriptors
            .iter()
            .position(|d| d.unique_id == unique_id)?;
        Some(self.descriptors.remove(pos))
    }

    /// Descriptors sharing at least one bit with `mask` (a class flag or a
    /// `LADSPA_GROUP_*` union).
    pub fn in_group(&self, mask: LadspaPluginType) -> impl Iterator<Item = &RdfDescriptor> {
        self.descriptors
            .iter()
            .filter(move |d| d.plugin_type & mask != 0)
    }

    pub fn plugin_infos(&self) -> Vec<PluginInfo> {
        self.descriptors.iter().map(PluginInfo::from_rdf).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdf::*;

    fn desc(id: u64, title: Option<&str>, plugin_type: LadspaPluginType) -> RdfDescriptor {
        RdfDescriptor {
            plugin_type,
            unique_id: id,
            title: title.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_extend_replaces_same_id() {
        let mut catalog = DescriptorCatalog::from_descriptors(vec![
            desc(1, Some("Delay"), LADSPA_CLASS_DELAY),
            desc(2, Some("Gate"), LADSPA_CLASS_GATE),
        ]);
        catalog.extend_descriptors(vec![desc(1, Some("Echo"), LADSPA_CLASS_DELAY)]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.find(1).and_then(|d| d.title()), Some("Echo"));
    }

    #[test]
    fn test_set_replaces_everything() {
        let mut catalog = DescriptorCatalog::from_descriptors(vec![desc(1, None, 0)]);
        catalog.set_descriptors(vec![desc(5, None, 0), desc(6, None, 0)]);
        assert!(catalog.find(1).is_none());
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_sort_catalog() {
        let mut catalog = DescriptorCatalog::from_descriptors(vec![
            desc(3, None, 0),
            desc(1, Some("zita reverb"), 0),
            desc(2, Some("Amp"), 0),
        ]);
        catalog.sort_catalog();
        let ids: Vec<u64> = catalog.descriptors().iter().map(|d| d.unique_id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_in_group() {
        let catalog = DescriptorCatalog::from_descriptors(vec![
            desc(1, Some("Compressor"), LADSPA_CLASS_COMPRESSOR),
            desc(2, Some("Lowpass"), LADSPA_CLASS_LOWPASS),
            desc(3, Some("Plate"), LADSPA_CLASS_REVERB),
        ]);
        let dynamics: Vec<u64> = catalog
            .in_group(LADSPA_GROUP_DYNAMICS)
            .map(|d| d.unique_id)
            .collect();
        assert_eq!(dynamics, vec![1]);
        let time: Vec<u64> = catalog.in_group(LADSPA_GROUP_TIME).map(|d| d.unique_id).collect();
        assert_eq!(time, vec![3]);
        assert_eq!(catalog.in_group(LADSPA_GROUP_FREQUENCY).count(), 1);
        assert_eq!(catalog.in_group(LADSPA_GROUP_GENERATOR).count(), 0);
    }

    #[test]
    fn test_remove() {
        let mut catalog = DescriptorCatalog::from_descriptors(vec![desc(1, None, 0)]);
        assert_eq!(catalog.remove(1).map(|d| d.unique_id), Some(1));
        assert!(catalog.remove(1).is_none());
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_plugin_infos() {
        let catalog = DescriptorCatalog::from_descriptors(vec![desc(
            9,
            Some("Noise"),
            LADSPA_CLASS_GENERATOR,
        )]);
        let infos = catalog.plugin_infos();
        assert_eq!(infos.len(), 1);
        assert_eq!(infos[0].name, "Noise");
    }
}
