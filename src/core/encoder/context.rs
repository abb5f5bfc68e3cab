//! Encoding context and options
//!
//! This module handles the per-conversion state threaded through the tree
//! walk, and the options that tune the encoder.

use crate::data::constants::{DEFAULT_DIRECTIVE_MARKER, DEFAULT_HIGHLIGHT_WORD};
use crate::data::ListEnvironment;
use crate::features::{ImageCollector, ReferenceCollector};
use crate::model::Node;
use crate::utils::error::{ConversionWarning, WarningKind};

/// Options for document to LaTeX conversion
#[derive(Debug, Clone, PartialEq)]
pub struct EncodeOptions {
    /// Whether to wrap the body in the preamble and closer
    pub full_document: bool,
    /// Character that marks a directive paragraph
    pub directive_marker: char,
    /// Word wrapped in a highlight box (`None` disables highlighting)
    pub highlight_word: Option<String>,
    /// Fail on unknown directives instead of rendering them as text
    pub strict_directives: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            full_document: true,
            directive_marker: DEFAULT_DIRECTIVE_MARKER,
            highlight_word: Some(DEFAULT_HIGHLIGHT_WORD.to_string()),
            strict_directives: false,
        }
    }
}

impl EncodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode the body content only, without preamble and closer.
    pub fn fragment() -> Self {
        Self {
            full_document: false,
            ..Default::default()
        }
    }

    /// Reject unknown directives.
    pub fn strict() -> Self {
        Self {
            strict_directives: true,
            ..Default::default()
        }
    }
}

/// Position of a node relative to its parent and siblings.
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeCx<'a> {
    pub parent: Option<&'a Node>,
    pub prev: Option<&'a Node>,
    pub next: Option<&'a Node>,
}

impl<'a> NodeCx<'a> {
    /// Context of the root node: no parent, no siblings.
    pub fn root() -> Self {
        Self::default()
    }

    /// Context of `children[index]` under `parent`.
    pub fn child(parent: Option<&'a Node>, children: &'a [Node], index: usize) -> Self {
        Self {
            parent,
            prev: index.checked_sub(1).and_then(|i| children.get(i)),
            next: children.get(index + 1),
        }
    }

    /// Whether the node stands alone (no siblings at all).
    pub fn is_alone(&self) -> bool {
        self.prev.is_none() && self.next.is_none()
    }

    /// Code of the parent equation function, if any.
    pub fn parent_function_code(&self) -> Option<&'a str> {
        match self.parent {
            Some(Node::EquationFunction(f)) => Some(f.code.as_str()),
            _ => None,
        }
    }

    /// Whether the parent is an equation or equation function, where LaTeX
    /// would swallow literal spaces.
    pub fn in_equation_parent(&self) -> bool {
        matches!(
            self.parent,
            Some(Node::Equation(_)) | Some(Node::EquationFunction(_))
        )
    }
}

/// Mutable state of one conversion. Never shared between conversions.
#[derive(Debug)]
pub struct EncodeState<'a> {
    /// Conversion options
    pub options: EncodeOptions,
    /// Whether we're inside an equation subtree
    pub in_math: bool,
    /// Currently open list environments, innermost last
    pub list_stack: Vec<ListEnvironment>,
    /// Whether an abstract environment is open
    pub abstract_open: bool,
    /// Collected footnote contents
    pub references: ReferenceCollector<'a>,
    /// Collected images and pending image names
    pub images: ImageCollector,
    /// Collected warnings during conversion
    pub warnings: Vec<ConversionWarning>,
}

impl<'a> EncodeState<'a> {
    pub fn new(options: EncodeOptions) -> Self {
        Self {
            options,
            in_math: false,
            list_stack: Vec::new(),
            abstract_open: false,
            references: ReferenceCollector::new(),
            images: ImageCollector::new(),
            warnings: Vec::new(),
        }
    }

    // =========================================================================
    // Math Mode
    // =========================================================================

    /// Enter math mode, returning the previous flag for [`Self::restore_math`].
    pub fn enter_math(&mut self) -> bool {
        std::mem::replace(&mut self.in_math, true)
    }

    pub fn restore_math(&mut self, previous: bool) {
        self.in_math = previous;
    }

    // =========================================================================
    // List Environments
    // =========================================================================

    pub fn push_list(&mut self, env: ListEnvironment) {
        self.list_stack.push(env);
    }

    pub fn pop_list(&mut self) -> Option<ListEnvironment> {
        self.list_stack.pop()
    }

    pub fn list_depth(&self) -> usize {
        self.list_stack.len()
    }

    /// Record a warning and log it
    pub fn warn(&mut self, kind: WarningKind, message: impl Into<String>) {
        let warning = ConversionWarning::new(kind, message);
        log::warn!("{}", warning);
        self.warnings.push(warning);
    }
}

impl Default for EncodeState<'_> {
    fn default() -> Self {
        Self::new(EncodeOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_default() {
        let opts = EncodeOptions::new();
        assert!(opts.full_document);
        assert_eq!(opts.directive_marker, '#');
        assert_eq!(opts.highlight_word.as_deref(), Some("TODO"));
        assert!(!opts.strict_directives);
    }

    #[test]
    fn test_options_presets() {
        assert!(!EncodeOptions::fragment().full_document);
        assert!(EncodeOptions::strict().strict_directives);
    }

    #[test]
    fn test_math_flag_restores_previous_value() {
        let mut state = EncodeState::default();
        let outer = state.enter_math();
        let inner = state.enter_math();
        assert!(state.in_math);
        state.restore_math(inner);
        assert!(state.in_math);
        state.restore_math(outer);
        assert!(!state.in_math);
    }

    #[test]
    fn test_node_cx_siblings() {
        let children = vec![Node::text("a"), Node::text("b"), Node::text("c")];
        let first = NodeCx::child(None, &children, 0);
        assert!(first.prev.is_none());
        assert_eq!(first.next, Some(&children[1]));
        let last = NodeCx::child(None, &children, 2);
        assert_eq!(last.prev, Some(&children[1]));
        assert!(last.next.is_none());
        assert!(!last.is_alone());
    }

    #[test]
    fn test_parent_function_code() {
        let parent = Node::function("\\sumab", vec![]);
        let children = vec![Node::EquationSeparator];
        let cx = NodeCx::child(Some(&parent), &children, 0);
        assert_eq!(cx.parent_function_code(), Some("\\sumab"));
        assert!(cx.in_equation_parent());
        assert!(cx.is_alone());
    }

    #[test]
    fn test_warn_records() {
        let mut state = EncodeState::default();
        state.warn(WarningKind::UnsupportedNodeKind, "TABLE");
        assert_eq!(state.warnings.len(), 1);
        assert_eq!(state.warnings[0].kind, WarningKind::UnsupportedNodeKind);
    }
}
