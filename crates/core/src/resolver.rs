//! Component image lookup rebased onto a configured static URL prefix.
//!
//! The compiled table in [`crate::component_images`] assumes assets are
//! mounted at `/static`. [`ComponentImageResolver`] swaps that prefix for
//! the one in [`AssetConfig`], keeping the same empty-path fallback.

use crate::component_images::{component_image, ComponentImage, NO_IMAGE, STATIC_URL_PREFIX};
use crate::components::ComponentType;
use crate::config::AssetConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentImageResolver {
    static_url_prefix: String,
}

impl Default for ComponentImageResolver {
    fn default() -> Self {
        Self::new(&AssetConfig::default())
    }
}

impl ComponentImageResolver {
    pub fn new(config: &AssetConfig) -> Self {
        Self {
            static_url_prefix: config.static_url_prefix.clone(),
        }
    }

    pub fn static_url_prefix(&self) -> &str {
        &self.static_url_prefix
    }

    /// Image path for `key` under the configured prefix, or `""` if the key
    /// is not a recognised component type.
    pub fn resolve(&self, key: &str) -> String {
        let path = component_image(key);
        if path == NO_IMAGE {
            tracing::debug!(key, "No image for unknown component type");
            return String::new();
        }
        self.rebase(path)
    }

    pub fn resolve_type(&self, component_type: ComponentType) -> String {
        self.rebase(component_image(component_type.as_str()))
    }

    /// Every component with its image path under the configured prefix.
    pub fn manifest(&self) -> Vec<ComponentImage> {
        ComponentType::ALL
            .iter()
            .map(|&ty| ComponentImage::new(ty, self.resolve_type(ty)))
            .collect()
    }

    fn rebase(&self, path: &str) -> String {
        match path.strip_prefix(STATIC_URL_PREFIX) {
            Some(rest) => format!("{}{rest}", self.static_url_prefix),
            None => path.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component_images::{component_image_manifest, COMPONENT_IMAGES};

    fn resolver_with(prefix: &str) -> ComponentImageResolver {
        ComponentImageResolver::new(&AssetConfig {
            static_url_prefix: prefix.to_string(),
        })
    }

    #[test]
    fn default_matches_compiled_table() {
        let resolver = ComponentImageResolver::default();
        for key in ["flexDuctwork", "hru", "nonexistentType", "", "Hru"] {
            assert_eq!(resolver.resolve(key), component_image(key));
        }
    }

    #[test]
    fn default_manifest_matches_compiled_manifest() {
        assert_eq!(
            ComponentImageResolver::default().manifest(),
            component_image_manifest()
        );
    }

    #[test]
    fn rebases_onto_configured_prefix() {
        let resolver = resolver_with("/assets");
        assert_eq!(
            resolver.resolve("bend250mm"),
            "/assets/images/components/bend_250mm.svg"
        );
    }

    #[test]
    fn rebases_onto_cdn_url() {
        let resolver = resolver_with("https://cdn.example.com/ductscan");
        assert_eq!(
            resolver.resolve_type(ComponentType::Hru),
            "https://cdn.example.com/ductscan/images/components/hru.svg"
        );
    }

    #[test]
    fn unknown_key_stays_empty_under_any_prefix() {
        let resolver = resolver_with("/assets");
        assert_eq!(resolver.resolve("nonexistentType"), "");
        assert_eq!(resolver.resolve(""), "");
    }

    #[test]
    fn every_entry_rebased() {
        let resolver = resolver_with("/cdn");
        for (key, path) in COMPONENT_IMAGES {
            let expected = path.replacen("/static", "/cdn", 1);
            assert_eq!(resolver.resolve(key), expected);
        }
    }

    #[test]
    fn manifest_uses_prefix_and_labels() {
        let manifest = resolver_with("/assets").manifest();
        assert_eq!(manifest.len(), ComponentType::ALL.len());
        assert!(manifest.iter().all(|row| row.path.starts_with("/assets/")));
        assert_eq!(manifest[4].component_type, ComponentType::Vcd);
        assert_eq!(manifest[4].label, "Volume Control Damper");
    }
}
