//! Text runs and style wrappers
//!
//! The host only answers "is character `i` bold / italic / underlined", so
//! runs are found by a forward scan comparing each character's style with the
//! previous one. At every change all open wrappers are closed and the new set
//! is opened, which keeps the markup properly nested.

use super::context::{EncodeState, NodeCx};
use super::utils::{escape_latex_text, math_spaces};
use crate::model::{CharStyle, TextRun};

const BOLD_OPEN: &str = "\\textbf{";
const ITALIC_OPEN: &str = "\\textit{";
const UNDERLINE_OPEN: &str = "\\underline{";
const WRAPPER_CLOSE: &str = "}";

/// Opening wrappers for a style: bold, then italic, then underline.
pub fn open_style(style: CharStyle) -> String {
    let mut result = String::new();
    if style.bold {
        result.push_str(BOLD_OPEN);
    }
    if style.italic {
        result.push_str(ITALIC_OPEN);
    }
    if style.underline {
        result.push_str(UNDERLINE_OPEN);
    }
    result
}

/// Closing wrappers for a style: underline, then italic, then bold.
pub fn close_style(style: CharStyle) -> String {
    let mut result = String::new();
    if style.underline {
        result.push_str(WRAPPER_CLOSE);
    }
    if style.italic {
        result.push_str(WRAPPER_CLOSE);
    }
    if style.bold {
        result.push_str(WRAPPER_CLOSE);
    }
    result
}

/// Interleave style wrappers with the run's text, passing each maximal
/// same-style segment through `escape`.
pub fn encode_styled<F>(run: &TextRun, mut escape: F) -> String
where
    F: FnMut(&str) -> String,
{
    let mut result = String::with_capacity(run.text.len());
    let mut segment = String::new();
    let mut current: Option<CharStyle> = None;

    for (index, ch) in run.text.chars().enumerate() {
        let style = run.style_at(index);
        if current != Some(style) {
            if !segment.is_empty() {
                result.push_str(&escape(&segment));
                segment.clear();
            }
            if let Some(previous) = current {
                result.push_str(&close_style(previous));
            }
            result.push_str(&open_style(style));
            current = Some(style);
        }
        segment.push(ch);
    }

    if !segment.is_empty() {
        result.push_str(&escape(&segment));
    }
    if let Some(last) = current {
        result.push_str(&close_style(last));
    }
    result
}

/// Encode a TEXT node.
pub fn encode_text(run: &TextRun, cx: NodeCx<'_>, state: &EncodeState<'_>) -> String {
    let in_math = state.in_math;
    let highlight = state.options.highlight_word.as_deref();
    let spaced = cx.in_equation_parent();

    encode_styled(run, |segment| {
        let escaped = escape_latex_text(segment, in_math, highlight);
        if spaced {
            math_spaces(&escaped)
        } else {
            escaped
        }
    })
}
