//! WASM bindings for doctex
//!
//! This module provides JavaScript-accessible functions for document tree to
//! LaTeX conversion. Trees are passed as JSON strings in the same form the
//! CLI reads.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "wasm")]
use crate::features::CollectedImage;

/// Conversion options (exposed to WASM)
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct ConvertOptions {
    /// Whether to wrap the body in the preamble and closer
    #[serde(default = "default_true")]
    pub full_document: bool,
    /// Character that marks a directive paragraph
    #[serde(default)]
    pub directive_marker: Option<char>,
    /// Word wrapped in a highlight box; an empty string disables highlighting
    #[serde(default)]
    pub highlight_word: Option<String>,
    /// Fail on unknown directives
    #[serde(default)]
    pub strict: bool,
}

#[cfg(feature = "wasm")]
impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            full_document: true,
            directive_marker: None,
            highlight_word: None,
            strict: false,
        }
    }
}

#[cfg(feature = "wasm")]
fn default_true() -> bool {
    true
}

#[cfg(feature = "wasm")]
impl ConvertOptions {
    fn to_encode_options(&self) -> crate::EncodeOptions {
        let mut options = if self.full_document {
            crate::EncodeOptions::default()
        } else {
            crate::EncodeOptions::fragment()
        };
        if let Some(marker) = self.directive_marker {
            options.directive_marker = marker;
        }
        if let Some(word) = &self.highlight_word {
            options.highlight_word = if word.is_empty() {
                None
            } else {
                Some(word.clone())
            };
        }
        options.strict_directives = self.strict;
        options
    }
}

/// Conversion result with additional metadata
#[cfg(feature = "wasm")]
#[derive(Serialize)]
pub struct ConvertResult {
    /// The generated LaTeX
    pub output: String,
    /// Whether the conversion was successful
    pub success: bool,
    /// Error message if conversion failed
    pub error: Option<String>,
    /// Warnings during conversion
    pub warnings: Vec<String>,
    /// Collected images, for handing to a compile service
    pub images: Vec<CollectedImage>,
}

#[cfg(feature = "wasm")]
impl ConvertResult {
    fn failed(error: String) -> Self {
        Self {
            output: String::new(),
            success: false,
            error: Some(error),
            warnings: vec![],
            images: vec![],
        }
    }
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Convert a JSON document tree into a complete LaTeX document.
///
/// Returns an empty string when the tree cannot be converted; use
/// `convertJson` to get the error.
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "jsonToLatex")]
pub fn json_to_latex_wasm(input: &str) -> String {
    crate::json_to_latex(input).unwrap_or_default()
}

/// Convert a JSON document tree with options, returning a result object.
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "convertJson")]
pub fn convert_json(input: &str, options: JsValue) -> JsValue {
    let opts: ConvertOptions = if options.is_undefined() || options.is_null() {
        ConvertOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options).unwrap_or_default()
    };

    let result = match crate::json_to_latex_with_options(input, &opts.to_encode_options()) {
        Ok(encoded) => ConvertResult {
            warnings: encoded.format_warnings(),
            output: encoded.latex,
            success: true,
            error: None,
            images: encoded.images,
        },
        Err(err) => ConvertResult::failed(err.to_string()),
    };

    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

/// Get version information
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
