//! Component type → static image path table.
//!
//! The table is compiled in and never changes at runtime. Lookups are total:
//! an unrecognised key yields an empty path, and the caller decides whether
//! to omit the image.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

use crate::components::{
    ComponentType, KEY_ATTENUATORS, KEY_BEND_250MM, KEY_EXTRACT_FANS, KEY_EXTRACT_GRILLES,
    KEY_EXTRACT_LOUVRE, KEY_FLEX_DUCTWORK, KEY_HRU, KEY_REDUCERS, KEY_SHOES, KEY_VCD,
};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// URL prefix the compiled paths assume the static directory is mounted at.
pub const STATIC_URL_PREFIX: &str = "/static";

/// Directory of component images, relative to the static root.
pub const COMPONENT_IMAGE_DIR: &str = "images/components";

/// File extension shared by every component image.
pub const COMPONENT_IMAGE_EXT: &str = "svg";

/// Returned by [`component_image`] for unrecognised keys.
pub const NO_IMAGE: &str = "";

/// Key → path table, in catalogue order.
pub const COMPONENT_IMAGES: &[(&str, &str)] = &[
    (KEY_FLEX_DUCTWORK, "/static/images/components/flex_ductwork.svg"),
    (KEY_BEND_250MM, "/static/images/components/bend_250mm.svg"),
    (KEY_EXTRACT_LOUVRE, "/static/images/components/extract_louvre.svg"),
    (KEY_EXTRACT_GRILLES, "/static/images/components/extract_grilles.svg"),
    (KEY_VCD, "/static/images/components/vcd.svg"),
    (KEY_EXTRACT_FANS, "/static/images/components/extract_fans.svg"),
    (KEY_ATTENUATORS, "/static/images/components/attenuators.svg"),
    (KEY_REDUCERS, "/static/images/components/reducers.svg"),
    (KEY_SHOES, "/static/images/components/shoes.svg"),
    (KEY_HRU, "/static/images/components/hru.svg"),
];

static COMPONENT_IMAGE_INDEX: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| COMPONENT_IMAGES.iter().copied().collect());

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

/// Return the image path for a component type key, or `""` if the key is
/// not recognised.
///
/// # Examples
///
/// ```
/// use ductscan_core::component_image;
///
/// assert_eq!(
///     component_image("flexDuctwork"),
///     "/static/images/components/flex_ductwork.svg"
/// );
/// assert_eq!(component_image("nonexistentType"), "");
/// ```
pub fn component_image(key: &str) -> &'static str {
    COMPONENT_IMAGE_INDEX.get(key).copied().unwrap_or(NO_IMAGE)
}

/// Image path for a known component type. Never empty.
pub fn component_image_for(component_type: ComponentType) -> &'static str {
    component_image(component_type.as_str())
}

/// Iterate the table as `(key, path)` pairs in catalogue order.
pub fn component_images() -> impl Iterator<Item = (&'static str, &'static str)> {
    COMPONENT_IMAGES.iter().copied()
}

// ---------------------------------------------------------------------------
// Manifest
// ---------------------------------------------------------------------------

/// One row of the table as handed to the frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentImage {
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    pub path: String,
    pub label: &'static str,
}

impl ComponentImage {
    pub(crate) fn new(component_type: ComponentType, path: String) -> Self {
        Self {
            component_type,
            path,
            label: component_type.label(),
        }
    }
}

/// Every component with its compiled image path.
pub fn component_image_manifest() -> Vec<ComponentImage> {
    ComponentType::ALL
        .iter()
        .map(|&ty| ComponentImage::new(ty, component_image_for(ty).to_string()))
        .collect()
}

/// The table as a flat JSON object (`{"flexDuctwork": "/static/...", ...}`),
/// the shape the frontend keeps as its image constant.
pub fn component_images_json() -> serde_json::Value {
    let map: serde_json::Map<String, serde_json::Value> = component_images()
        .map(|(key, path)| (key.to_string(), serde_json::Value::from(path)))
        .collect();
    serde_json::Value::Object(map)
}
