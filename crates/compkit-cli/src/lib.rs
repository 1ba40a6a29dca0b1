//! compkit CLI - command-line front ends for the component toolkit.
//!
//! Three binaries share this library: `generate-component`,
//! `style-validator` and `type-generator`.

pub mod commands;
pub mod logging;
pub mod output;
