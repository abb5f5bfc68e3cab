//! Document tree to LaTeX encoder
//!
//! This module walks a document tree depth-first and emits LaTeX. Each
//! node-kind handler reads and updates an explicit [`EncodeState`] that lives
//! for exactly one conversion; nothing is shared between conversions.

pub mod context;
mod list;
mod markup;
mod math;
mod text;
pub mod utils;

pub use context::{EncodeOptions, EncodeState, NodeCx};
pub use markup::{encode_children, encode_node};
pub use text::encode_styled;

use crate::features::CollectedImage;
use crate::model::Node;
use crate::utils::error::{ConversionResult, ConversionWarning, WarningKind};

/// Result of a successful conversion.
///
/// Besides the LaTeX source this carries the images referenced by it, in the
/// order they appear, and every non-fatal degradation that happened on the
/// way.
#[derive(Debug, Clone, PartialEq)]
pub struct Encoded {
    /// The generated LaTeX
    pub latex: String,
    /// Collected inline images, named as referenced by `\includegraphics`
    pub images: Vec<CollectedImage>,
    /// Warnings generated during conversion
    pub warnings: Vec<ConversionWarning>,
}

impl Encoded {
    /// Check if there are any warnings.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Get warnings as formatted strings.
    pub fn format_warnings(&self) -> Vec<String> {
        self.warnings.iter().map(|w| w.to_string()).collect()
    }
}

/// Convert a document tree to LaTeX.
///
/// `root` is normally a [`Node::Body`]; any other node is encoded as a
/// fragment without preamble. A fatal error (an image blob that is not an
/// image, or an unknown directive in strict mode) discards all partial
/// output.
///
/// # Example
/// ```
/// use doctex::core::encoder::{encode_document, EncodeOptions};
/// use doctex::model::Node;
///
/// let doc = Node::body(vec![Node::plain_paragraph("Hello & welcome")]);
/// let encoded = encode_document(&doc, &EncodeOptions::fragment()).unwrap();
/// assert_eq!(encoded.latex, "\\noindent Hello \\& welcome\n\n");
/// ```
pub fn encode_document(root: &Node, options: &EncodeOptions) -> ConversionResult<Encoded> {
    let mut state = EncodeState::new(options.clone());
    let latex = encode_node(root, NodeCx::root(), &mut state)?;

    let unused: Vec<&str> = state.images.pending_names().collect();
    if !unused.is_empty() {
        let message = format!("no image left for: {}", unused.join(", "));
        state.warn(WarningKind::UnusedImageNames, message);
    }

    log::debug!(
        "encoded {} bytes of LaTeX, {} image(s), {} reference(s), {} warning(s)",
        latex.len(),
        state.images.len(),
        state.references.len(),
        state.warnings.len()
    );

    Ok(Encoded {
        latex,
        images: state.images.into_images(),
        warnings: state.warnings,
    })
}

/// Convert a document tree to a complete LaTeX document with default options.
pub fn document_to_latex(root: &Node) -> ConversionResult<String> {
    encode_document(root, &EncodeOptions::default()).map(|encoded| encoded.latex)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::constants::{DOCUMENT_FOOTER, DOCUMENT_HEADER};

    #[test]
    fn test_full_document_wrapping() {
        let doc = Node::body(vec![Node::plain_paragraph("Hi")]);
        let latex = document_to_latex(&doc).unwrap();
        assert!(latex.starts_with(DOCUMENT_HEADER));
        assert!(latex.ends_with(DOCUMENT_FOOTER));
        assert!(latex.contains("\\noindent Hi\n\n"));
    }

    #[test]
    fn test_unused_image_names_warn() {
        let doc = Node::body(vec![Node::plain_paragraph("#images never used")]);
        let encoded = encode_document(&doc, &EncodeOptions::fragment()).unwrap();
        assert_eq!(encoded.latex, "");
        assert!(encoded.has_warnings());
        assert_eq!(encoded.warnings[0].kind, WarningKind::UnusedImageNames);
        assert_eq!(
            encoded.format_warnings(),
            vec!["[unused image names] no image left for: never, used".to_string()]
        );
    }

    #[test]
    fn test_conversions_are_independent() {
        let doc = Node::body(vec![Node::paragraph(
            crate::model::ParagraphHeading::Normal,
            vec![Node::footnote(vec![Node::text("x")])],
        )]);
        let first = encode_document(&doc, &EncodeOptions::fragment()).unwrap();
        let second = encode_document(&doc, &EncodeOptions::fragment()).unwrap();
        assert_eq!(first, second);
        assert!(second.latex.contains("\\cite{a1}"));
        assert!(!second.latex.contains("a2"));
    }
}
