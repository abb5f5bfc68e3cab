//! Text escaping for LaTeX output
//!
//! Literal text goes through the stages in a fixed order:
//! 1. structural characters, one pass per character
//! 2. quote normalisation and the highlight box
//! 3. underscores, outside math mode only
//!
//! Later stages never see the raw reserved characters, so an escaped
//! backslash is not reprocessed by the quote or underscore rules.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Quote rules, applied in order. Opening marks follow a non-word
    /// character or the start of the text, closing marks follow a word character.
    static ref QUOTE_RULES: Vec<(Regex, &'static str)> = vec![
        (Regex::new(r"(\W)['‘’](\w)").unwrap(), "$1`$2"),
        (Regex::new(r"^['‘’](\w)").unwrap(), "`$1"),
        (Regex::new(r"(\w)['‘’]").unwrap(), "$1'"),
        (Regex::new(r#"(\W)["“”](\w)"#).unwrap(), "$1``$2"),
        (Regex::new(r#"^["“”](\w)"#).unwrap(), "``$1"),
        (Regex::new(r#"(\w)["“”]"#).unwrap(), "$1''"),
    ];
}

/// Escape reserved LaTeX characters. Replacement text is never re-escaped.
pub fn escape_structural(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 4);
    for ch in text.chars() {
        match ch {
            '\\' => result.push_str("\\textbackslash{}"),
            '{' => result.push_str("\\{"),
            '}' => result.push_str("\\}"),
            '[' => result.push_str("{[}"),
            ']' => result.push_str("{]}"),
            '&' => result.push_str("\\&"),
            '#' => result.push_str("\\#"),
            _ => result.push(ch),
        }
    }
    result
}

/// Turn straight and curly quotes into LaTeX quote ligatures.
pub fn normalize_quotes(text: &str) -> String {
    let mut result = text.to_string();
    for (pattern, replacement) in QUOTE_RULES.iter() {
        if pattern.is_match(&result) {
            result = pattern.replace_all(&result, *replacement).into_owned();
        }
    }
    result
}

/// Wrap each occurrence of `word` in a yellow highlight box.
///
/// `text` is expected to be structurally escaped already, so `word` is
/// escaped the same way before matching.
pub fn highlight(text: &str, word: &str) -> String {
    if word.is_empty() {
        return text.to_string();
    }
    let needle = escape_structural(word);
    text.replace(&needle, &format!("\\colorbox{{yellow}}{{{}}}", needle))
}

/// Escape underscores (text mode only).
pub fn escape_underscore(text: &str) -> String {
    text.replace('_', "\\_")
}

/// Force visible spaces inside math mode, where LaTeX collapses whitespace.
pub fn math_spaces(text: &str) -> String {
    text.replace(' ', "\\ \\ ")
}

/// Full escaping pipeline for a literal text fragment.
pub fn escape_latex_text(text: &str, in_math: bool, highlight_word: Option<&str>) -> String {
    let mut result = escape_structural(text);
    result = normalize_quotes(&result);
    if let Some(word) = highlight_word {
        result = highlight(&result, word);
    }
    if !in_math {
        result = escape_underscore(&result);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_escaping() {
        assert_eq!(escape_structural("a & b"), "a \\& b");
        assert_eq!(escape_structural("#1"), "\\#1");
        assert_eq!(escape_structural("[x]"), "{[}x{]}");
        assert_eq!(escape_structural("{x}"), "\\{x\\}");
        assert_eq!(escape_structural("C:\\dir"), "C:\\textbackslash{}dir");
    }

    #[test]
    fn test_escaping_is_single_pass() {
        // The braces introduced by \textbackslash{} are not escaped again.
        assert_eq!(escape_structural("\\"), "\\textbackslash{}");
        // Literal escaped forms stay distinguishable from escaped originals.
        assert_eq!(escape_structural("\\{"), "\\textbackslash{}\\{");
        assert_ne!(escape_structural("\\{"), escape_structural("{"));
        assert_eq!(escape_structural("{[}"), "\\{{[}\\}");
    }

    #[test]
    fn test_single_quotes() {
        assert_eq!(normalize_quotes("say 'hi'"), "say `hi'");
        assert_eq!(normalize_quotes("'tis"), "`tis");
        assert_eq!(normalize_quotes("don’t"), "don't");
        assert_eq!(normalize_quotes("‘quoted’"), "`quoted'");
    }

    #[test]
    fn test_double_quotes() {
        assert_eq!(normalize_quotes("he said \"yes\""), "he said ``yes''");
        assert_eq!(normalize_quotes("“Hello”"), "``Hello''");
    }

    #[test]
    fn test_highlight() {
        assert_eq!(
            highlight("TODO: fix", "TODO"),
            "\\colorbox{yellow}{TODO}: fix"
        );
        assert_eq!(highlight("nothing", "TODO"), "nothing");
        assert_eq!(highlight("TODO", ""), "TODO");
    }

    #[test]
    fn test_underscore_only_outside_math() {
        assert_eq!(escape_latex_text("a_b", false, None), "a\\_b");
        assert_eq!(escape_latex_text("a_b", true, None), "a_b");
    }

    #[test]
    fn test_pipeline_order() {
        assert_eq!(
            escape_latex_text("TODO: a_b & {c}", false, Some("TODO")),
            "\\colorbox{yellow}{TODO}: a\\_b \\& \\{c\\}"
        );
    }

    #[test]
    fn test_math_spaces() {
        assert_eq!(math_spaces("a b"), "a\\ \\ b");
    }
}
