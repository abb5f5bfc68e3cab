//! Constants for LaTeX document generation

/// Fixed document preamble.
pub const DOCUMENT_HEADER: &str = "\\documentclass[a4paper]{article}\n\n\
\\usepackage{xcolor}\n\
\\usepackage[margin=1in]{geometry}\n\
\\usepackage{graphicx}\n\
\\setlength{\\parindent}{10ex}\n\n\
\\begin{document}\n\n";

/// Fixed document closer.
pub const DOCUMENT_FOOTER: &str = "\\end{document}\n";

/// Heading text that opens an abstract environment instead of a section.
pub const ABSTRACT_HEADING: &str = "Abstract";

/// Pixel to point conversion factor (96 dpi).
pub const PX_TO_PT: f64 = 0.75;

/// Content type prefix every inline image blob must carry.
pub const IMAGE_CONTENT_PREFIX: &str = "image/";

/// Widest label argument of `thebibliography`.
pub const BIBLIOGRAPHY_LABEL_WIDTH: &str = "9";

/// Prefix of generated citation keys (`a1`, `a2`, ...).
pub const CITATION_KEY_PREFIX: &str = "a";

/// Prefix of generated image names (`image-1`, ...).
pub const IMAGE_NAME_PREFIX: &str = "image-";

/// Character that marks a directive paragraph.
pub const DEFAULT_DIRECTIVE_MARKER: char = '#';

/// Word that gets wrapped in a highlight box.
pub const DEFAULT_HIGHLIGHT_WORD: &str = "TODO";

/// Non-collapsing empty group.
pub const EMPTY_GROUP: &str = "{}";
