//! Footnote references and bibliography
//!
//! Footnotes are turned into citations. Their contents are collected in
//! encounter order and rendered as a `thebibliography` section once the whole
//! document has been walked; the Nth footnote always gets the key `a<N>`.

use crate::data::constants::{BIBLIOGRAPHY_LABEL_WIDTH, CITATION_KEY_PREFIX};
use crate::model::Node;

/// Append-only store of footnote contents.
#[derive(Debug, Clone, Default)]
pub struct ReferenceCollector<'a> {
    entries: Vec<&'a [Node]>,
}

impl<'a> ReferenceCollector<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a footnote and return its citation key.
    pub fn push(&mut self, contents: &'a [Node]) -> String {
        self.entries.push(contents);
        citation_key(self.entries.len())
    }

    /// Footnote contents by zero-based index.
    pub fn get(&self, index: usize) -> Option<&'a [Node]> {
        self.entries.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Citation key of the 1-based reference number `n`.
pub fn citation_key(n: usize) -> String {
    format!("{}{}", CITATION_KEY_PREFIX, n)
}

/// `\cite{..}` marker for a key.
pub fn cite(key: &str) -> String {
    format!("\\cite{{{}}}", key)
}

/// Opening of the bibliography section.
pub fn bibliography_begin() -> String {
    format!("\n\\begin{{thebibliography}}{{{}}}\n", BIBLIOGRAPHY_LABEL_WIDTH)
}

/// Closing of the bibliography section.
pub fn bibliography_end() -> &'static str {
    "\\end{thebibliography}\n"
}

/// A single bibliography entry with already-encoded content.
pub fn bibitem(key: &str, content: &str) -> String {
    format!("\\bibitem{{{}}} {}", key, content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_follow_encounter_order() {
        let first = vec![Node::plain_paragraph("one")];
        let second = vec![Node::plain_paragraph("two")];
        let mut refs = ReferenceCollector::new();
        assert_eq!(refs.push(&first), "a1");
        assert_eq!(refs.push(&second), "a2");
        assert_eq!(refs.len(), 2);
        assert_eq!(refs.get(1).unwrap()[0].raw_text(), "two");
        assert!(refs.get(2).is_none());
    }

    #[test]
    fn test_markup() {
        assert_eq!(cite("a3"), "\\cite{a3}");
        assert_eq!(bibliography_begin(), "\n\\begin{thebibliography}{9}\n");
        assert_eq!(bibitem("a1", "Knuth."), "\\bibitem{a1} Knuth.");
    }
}
