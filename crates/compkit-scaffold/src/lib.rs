//! # compkit Scaffold
//!
//! Generates React component boilerplate from embedded templates.
//!
//! A component directory holds the component source, an optional CSS
//! module, a barrel `index.ts` and a test stub.

pub mod generator;
pub mod options;
pub mod templates;

pub use generator::{
    DEFAULT_COMPONENTS_DIR, GeneratedFile, generate, render, validate_component_name, write_files,
};
pub use options::GenerationOptions;
pub use templates::{ALL_TEMPLATES, ComponentTemplate, TemplateKind};
