//! # compkit Types
//!
//! Converts a JSON Schema document or a GraphQL schema into TypeScript
//! interface declarations.
//!
//! Both inputs reduce to a flat list of [`FieldSchema`] which is emitted as
//! an interface plus an identical `...Props` interface.

pub mod emit;
pub mod field;
pub mod graphql;
pub mod json_schema;

pub use emit::{default_output_file, render_interfaces};
pub use field::FieldSchema;
pub use graphql::{from_graphql_schema, graphql_fields};
pub use json_schema::{from_json_schema, from_json_schema_str, json_schema_fields};
