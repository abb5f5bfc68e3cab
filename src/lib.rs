//! # doctex
//!
//! Converts structured rich-text documents into compilable LaTeX.
//!
//! ## Features
//!
//! - **Tree Encoder**: headings, paragraphs, styled runs, lists, equations
//! - **Per-character Styles**: bold/italic/underline runs recovered from
//!   per-character queries
//! - **Bibliography**: footnotes become citations plus a `thebibliography` section
//! - **Inline Images**: collected for the compile service, named by directive
//! - **Compile Service**: optional blocking client for a pdflatex server
//! - **WASM Support**: compiles to WebAssembly for browser usage
//!
//! ## Usage Examples
//!
//! ### Building a Tree in Code
//!
//! ```rust
//! use doctex::model::{Node, ParagraphHeading};
//! use doctex::{encode_document, EncodeOptions};
//!
//! let doc = Node::body(vec![
//!     Node::paragraph(ParagraphHeading::Heading1, vec![Node::text("Intro")]),
//!     Node::plain_paragraph("Hello, world!"),
//! ]);
//! let encoded = encode_document(&doc, &EncodeOptions::fragment()).unwrap();
//! assert_eq!(encoded.latex, "\\section{Intro}\n\\noindent Hello, world!\n\n");
//! ```
//!
//! ### From JSON
//!
//! ```rust
//! # #[cfg(feature = "serde")]
//! # {
//! let latex = doctex::json_to_latex(r#"{
//!     "type": "body",
//!     "children": [{"type": "paragraph", "children": [{"type": "text", "text": "Hi"}]}]
//! }"#).unwrap();
//! assert!(latex.starts_with("\\documentclass[a4paper]{article}"));
//! # }
//! ```

/// Core conversion modules
pub mod core;

/// Data layer - static mappings and constants
pub mod data;

/// Feature modules - references, images, directives
pub mod features;

/// Input document model
pub mod model;

/// Compile service collaborator
pub mod service;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export core conversion functions
pub use core::encoder;
pub use core::{document_to_latex, encode_document, EncodeOptions, Encoded};

// Re-export data modules
pub use data::constants;

// Re-export feature modules
pub use features::directives;
pub use features::images;
pub use features::refs;

// Re-export the model
pub use model::Node;

// Re-export the service
pub use service::{convert_and_compile, CompileError, CompileOutcome, Compiler};

// Re-export utilities
pub use utils::error::{ConversionError, ConversionResult, ConversionWarning, WarningKind};

/// Parse a JSON document tree and convert it to a complete LaTeX document.
#[cfg(feature = "serde")]
pub fn json_to_latex(json: &str) -> ConversionResult<String> {
    json_to_latex_with_options(json, &EncodeOptions::default()).map(|encoded| encoded.latex)
}

/// Parse a JSON document tree and convert it with custom options.
#[cfg(feature = "serde")]
pub fn json_to_latex_with_options(
    json: &str,
    options: &EncodeOptions,
) -> ConversionResult<Encoded> {
    let root = model::from_json(json)?;
    encode_document(&root, options)
}
