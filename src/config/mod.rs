//! Configuration parsing and validation
//!
//! This module handles discovery and decoding of orbit.yml configuration
//! files and the optional reference checks run before execution.

pub mod parse;
pub mod schema;
pub mod types;

// Re-export main types
pub use parse::*;
pub use schema::*;
pub use types::*;
