//! compkit Core Library
//!
//! Error taxonomy and configuration shared by the scaffolder, the style
//! validator and the type generator.

pub mod config;
pub mod error;

pub use config::{CompkitConfig, ScaffoldSection, StyleSection, TypesSection};
pub use error::{CompkitError, CompkitResult};
