//! Data layer - Static mappings and constants
//!
//! This module contains all static data used for document → LaTeX conversion:
//! - Document preamble and naming constants
//! - Equation function mappings
//! - List glyph mappings

pub mod constants;
pub mod equations;
pub mod lists;

// Re-export commonly used items
pub use equations::{argument_separator, function_handler, FunctionHandler, EQUATION_FUNCTIONS};
pub use lists::{environment_for_glyph, ListEnvironment, GLYPH_ENVIRONMENTS};
