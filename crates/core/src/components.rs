//! Duct/HVAC component types recognised by the measurement UI.
//!
//! The wire keys are the camelCase identifiers the frontend uses when it
//! asks for a component image (see [`crate::component_images`]).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Wire keys
// ---------------------------------------------------------------------------

pub const KEY_FLEX_DUCTWORK: &str = "flexDuctwork";
pub const KEY_BEND_250MM: &str = "bend250mm";
pub const KEY_EXTRACT_LOUVRE: &str = "extractLouvre";
pub const KEY_EXTRACT_GRILLES: &str = "extractGrilles";
pub const KEY_VCD: &str = "vcd";
pub const KEY_EXTRACT_FANS: &str = "extractFans";
pub const KEY_ATTENUATORS: &str = "attenuators";
pub const KEY_REDUCERS: &str = "reducers";
pub const KEY_SHOES: &str = "shoes";
pub const KEY_HRU: &str = "hru";

/// All wire keys, in catalogue order.
pub const VALID_COMPONENT_KEYS: &[&str] = &[
    KEY_FLEX_DUCTWORK,
    KEY_BEND_250MM,
    KEY_EXTRACT_LOUVRE,
    KEY_EXTRACT_GRILLES,
    KEY_VCD,
    KEY_EXTRACT_FANS,
    KEY_ATTENUATORS,
    KEY_REDUCERS,
    KEY_SHOES,
    KEY_HRU,
];

// ---------------------------------------------------------------------------
// ComponentType
// ---------------------------------------------------------------------------

/// A category of physical ductwork component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ComponentType {
    FlexDuctwork,
    Bend250mm,
    ExtractLouvre,
    ExtractGrilles,
    /// Volume control damper.
    Vcd,
    ExtractFans,
    Attenuators,
    Reducers,
    Shoes,
    /// Heat recovery unit.
    Hru,
}

impl ComponentType {
    /// Every component type, in catalogue order.
    pub const ALL: [ComponentType; 10] = [
        Self::FlexDuctwork,
        Self::Bend250mm,
        Self::ExtractLouvre,
        Self::ExtractGrilles,
        Self::Vcd,
        Self::ExtractFans,
        Self::Attenuators,
        Self::Reducers,
        Self::Shoes,
        Self::Hru,
    ];

    /// Return the wire key used by the frontend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FlexDuctwork => KEY_FLEX_DUCTWORK,
            Self::Bend250mm => KEY_BEND_250MM,
            Self::ExtractLouvre => KEY_EXTRACT_LOUVRE,
            Self::ExtractGrilles => KEY_EXTRACT_GRILLES,
            Self::Vcd => KEY_VCD,
            Self::ExtractFans => KEY_EXTRACT_FANS,
            Self::Attenuators => KEY_ATTENUATORS,
            Self::Reducers => KEY_REDUCERS,
            Self::Shoes => KEY_SHOES,
            Self::Hru => KEY_HRU,
        }
    }

    /// Parse a wire key, returning an error for unknown types.
    ///
    /// Matching is exact: `"FlexDuctwork"` and `" hru"` are rejected.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            KEY_FLEX_DUCTWORK => Ok(Self::FlexDuctwork),
            KEY_BEND_250MM => Ok(Self::Bend250mm),
            KEY_EXTRACT_LOUVRE => Ok(Self::ExtractLouvre),
            KEY_EXTRACT_GRILLES => Ok(Self::ExtractGrilles),
            KEY_VCD => Ok(Self::Vcd),
            KEY_EXTRACT_FANS => Ok(Self::ExtractFans),
            KEY_ATTENUATORS => Ok(Self::Attenuators),
            KEY_REDUCERS => Ok(Self::Reducers),
            KEY_SHOES => Ok(Self::Shoes),
            KEY_HRU => Ok(Self::Hru),
            other => Err(CoreError::Validation(format!(
                "Unknown component type: '{other}'. Valid types: {}",
                VALID_COMPONENT_KEYS.join(", ")
            ))),
        }
    }

    /// Snake_case basename (without extension) of the component's image.
    pub fn file_stem(&self) -> &'static str {
        match self {
            Self::FlexDuctwork => "flex_ductwork",
            Self::Bend250mm => "bend_250mm",
            Self::ExtractLouvre => "extract_louvre",
            Self::ExtractGrilles => "extract_grilles",
            Self::Vcd => "vcd",
            Self::ExtractFans => "extract_fans",
            Self::Attenuators => "attenuators",
            Self::Reducers => "reducers",
            Self::Shoes => "shoes",
            Self::Hru => "hru",
        }
    }

    /// Human-readable name, used as image alt text.
    pub fn label(&self) -> &'static str {
        match self {
            Self::FlexDuctwork => "Flex Ductwork",
            Self::Bend250mm => "Bend 250mm",
            Self::ExtractLouvre => "Extract Louvre",
            Self::ExtractGrilles => "Extract Grilles",
            Self::Vcd => "Volume Control Damper",
            Self::ExtractFans => "Extract Fans",
            Self::Attenuators => "Attenuators",
            Self::Reducers => "Reducers",
            Self::Shoes => "Shoes",
            Self::Hru => "Heat Recovery Unit",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ComponentType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComponentType::from_str(s)
    }
}

impl TryFrom<&str> for ComponentType {
    type Error = CoreError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        ComponentType::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn as_str_round_trips_through_from_str() {
        for ty in ComponentType::ALL {
            assert_eq!(ComponentType::from_str(ty.as_str()).unwrap(), ty);
        }
    }

    #[test]
    fn all_matches_valid_keys() {
        let keys: Vec<&str> = ComponentType::ALL.iter().map(|t| t.as_str()).collect();
        assert_eq!(keys, VALID_COMPONENT_KEYS);
    }

    #[test]
    fn unknown_key_rejected() {
        let err = ComponentType::from_str("nonexistentType").unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("nonexistentType"));
    }

    #[test]
    fn matching_is_case_and_whitespace_sensitive() {
        assert_matches!(
            ComponentType::from_str("FlexDuctwork"),
            Err(CoreError::Validation(_))
        );
        assert_matches!(ComponentType::from_str(" hru"), Err(CoreError::Validation(_)));
        assert_matches!(ComponentType::from_str(""), Err(CoreError::Validation(_)));
    }

    #[test]
    fn error_lists_valid_types() {
        let msg = ComponentType::from_str("duct").unwrap_err().to_string();
        assert!(msg.contains("flexDuctwork"));
        assert!(msg.contains("hru"));
    }

    #[test]
    fn std_parse_and_try_from_agree() {
        let parsed: ComponentType = "bend250mm".parse().unwrap();
        assert_eq!(parsed, ComponentType::Bend250mm);
        assert_eq!(ComponentType::try_from("vcd").unwrap(), ComponentType::Vcd);
        assert!("nope".parse::<ComponentType>().is_err());
    }

    #[test]
    fn display_is_wire_key() {
        assert_eq!(ComponentType::ExtractGrilles.to_string(), "extractGrilles");
    }

    #[test]
    fn serde_uses_wire_keys() {
        for ty in ComponentType::ALL {
            let json = serde_json::to_string(&ty).unwrap();
            assert_eq!(json, format!("\"{}\"", ty.as_str()));
            let back: ComponentType = serde_json::from_str(&json).unwrap();
            assert_eq!(back, ty);
        }
    }

    #[test]
    fn file_stems_and_labels_unique() {
        let stems: HashSet<_> = ComponentType::ALL.iter().map(|t| t.file_stem()).collect();
        let labels: HashSet<_> = ComponentType::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(stems.len(), ComponentType::ALL.len());
        assert_eq!(labels.len(), ComponentType::ALL.len());
    }

    #[test]
    fn file_stem_is_snake_case_of_key() {
        for ty in ComponentType::ALL {
            let squashed: String = ty.file_stem().chars().filter(|c| *c != '_').collect();
            assert_eq!(squashed, ty.as_str().to_lowercase());
        }
    }
}
