//! Input document model
//!
//! The tree supplied by the document-editing host:
//! - `node`: the closed set of element kinds and their accessors
//! - `json`: the tagged JSON form used by the CLI and WASM bindings

pub mod node;

#[cfg(feature = "serde")]
pub mod json;

pub use node::{
    Body, CharStyle, Equation, EquationFunction, EquationSymbol, Footnote, GlyphType,
    InlineImage, ListItem, Node, Paragraph, ParagraphHeading, StyleSpan, TextRun, Unsupported,
};

#[cfg(feature = "serde")]
pub use json::from_json;
