//! List glyph mappings

use phf::phf_map;
use std::fmt;

/// A LaTeX list environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListEnvironment {
    Itemize,
    Enumerate,
}

impl ListEnvironment {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListEnvironment::Itemize => "itemize",
            ListEnvironment::Enumerate => "enumerate",
        }
    }

    pub fn begin(&self) -> String {
        format!("\\begin{{{}}}\n", self.as_str())
    }

    pub fn end(&self) -> String {
        format!("\\end{{{}}}\n", self.as_str())
    }
}

impl fmt::Display for ListEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Host glyph type names to list environments
pub static GLYPH_ENVIRONMENTS: phf::Map<&'static str, ListEnvironment> = phf_map! {
    "BULLET" => ListEnvironment::Itemize,
    "HOLLOW_BULLET" => ListEnvironment::Itemize,
    "SQUARE_BULLET" => ListEnvironment::Itemize,
    "NUMBER" => ListEnvironment::Enumerate,
    "LATIN_UPPER" => ListEnvironment::Enumerate,
    "LATIN_LOWER" => ListEnvironment::Enumerate,
    "ROMAN_UPPER" => ListEnvironment::Enumerate,
    "ROMAN_LOWER" => ListEnvironment::Enumerate,
};

/// Environment for a glyph name; anything not bullet-like is ordered.
pub fn environment_for_glyph(glyph: &str) -> ListEnvironment {
    GLYPH_ENVIRONMENTS
        .get(glyph)
        .copied()
        .unwrap_or(ListEnvironment::Enumerate)
}
