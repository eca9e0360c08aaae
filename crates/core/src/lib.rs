//! Ductscan component catalogue.
//!
//! Maps duct/HVAC component types to the static images the frontend shows
//! next to measured ductwork:
//!
//! - [`component_images`]: the compiled-in key → image path table and its
//!   total lookup [`component_image`].
//! - [`components`]: the closed [`ComponentType`] enum behind those keys.
//! - [`resolver`]: [`ComponentImageResolver`], the same table rebased onto
//!   a configured static URL prefix.
//! - [`config`] / [`logging`]: environment configuration and tracing setup
//!   for hosts embedding the crate.

pub mod component_images;
pub mod components;
pub mod config;
pub mod error;
pub mod logging;
pub mod resolver;

pub use component_images::{component_image, component_image_for, ComponentImage};
pub use components::ComponentType;
pub use config::AssetConfig;
pub use error::CoreError;
pub use resolver::ComponentImageResolver;
