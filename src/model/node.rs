//! Document tree nodes
//!
//! The host editor hands the encoder a tree of these nodes. Sibling links are
//! never stored on the nodes themselves; the encoder derives them from the
//! parent's child slice while walking.

use std::fmt;
use std::ops::Range;

/// A node of the input document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// The document body (root).
    Body(Body),
    /// A paragraph or heading.
    Paragraph(Paragraph),
    /// A run of text with per-character style attributes.
    Text(TextRun),
    /// An equation; its subtree is rendered in math mode.
    Equation(Equation),
    /// An opaque equation symbol such as `\alpha`.
    EquationSymbol(EquationSymbol),
    /// An equation function; its children are the arguments.
    EquationFunction(EquationFunction),
    /// Separates two arguments of the enclosing equation function.
    EquationSeparator,
    /// A list item.
    ListItem(ListItem),
    /// A footnote reference holding the footnote contents.
    Footnote(Footnote),
    /// An inline image blob.
    InlineImage(InlineImage),
    /// Any element kind outside the supported set (tables, page breaks, ...).
    Unsupported(Unsupported),
}

impl Node {
    /// Ordered children of this node. Leaves and footnotes return an empty
    /// slice (footnote contents are not children of the reference).
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Body(b) => &b.children,
            Node::Paragraph(p) => &p.children,
            Node::Equation(e) => &e.children,
            Node::EquationFunction(f) => &f.children,
            Node::ListItem(l) => &l.children,
            Node::Unsupported(u) => &u.children,
            Node::Text(_)
            | Node::EquationSymbol(_)
            | Node::EquationSeparator
            | Node::Footnote(_)
            | Node::InlineImage(_) => &[],
        }
    }

    /// Raw text of this node and its descendants, without any markup.
    pub fn raw_text(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }

    pub fn as_list_item(&self) -> Option<&ListItem> {
        match self {
            Node::ListItem(item) => Some(item),
            _ => None,
        }
    }

    // Construction helpers, mostly for hosts building trees in code.

    pub fn body(children: Vec<Node>) -> Self {
        Node::Body(Body { children })
    }

    pub fn paragraph(heading: ParagraphHeading, children: Vec<Node>) -> Self {
        Node::Paragraph(Paragraph { heading, children })
    }

    /// A normal paragraph holding a single plain text run.
    pub fn plain_paragraph(text: &str) -> Self {
        Self::paragraph(ParagraphHeading::Normal, vec![Self::text(text)])
    }

    pub fn text(text: &str) -> Self {
        Node::Text(TextRun::plain(text))
    }

    pub fn equation(children: Vec<Node>) -> Self {
        Node::Equation(Equation { children })
    }

    pub fn symbol(code: &str) -> Self {
        Node::EquationSymbol(EquationSymbol {
            code: code.to_string(),
        })
    }

    pub fn function(code: &str, children: Vec<Node>) -> Self {
        Node::EquationFunction(EquationFunction {
            code: code.to_string(),
            children,
        })
    }

    pub fn list_item(glyph: GlyphType, nesting: u32, list_id: &str, children: Vec<Node>) -> Self {
        Node::ListItem(ListItem {
            glyph,
            nesting,
            list_id: list_id.to_string(),
            children,
        })
    }

    pub fn footnote(contents: Vec<Node>) -> Self {
        Node::Footnote(Footnote { contents })
    }
}

fn collect_text(node: &Node, out: &mut String) {
    match node {
        Node::Text(run) => out.push_str(&run.text),
        other => {
            for child in other.children() {
                collect_text(child, out);
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct Body {
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<Node>,
}

/// Paragraph heading level as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum ParagraphHeading {
    #[default]
    Normal,
    Title,
    Subtitle,
    Heading1,
    Heading2,
    Heading3,
    Heading4,
    Heading5,
    Heading6,
}

impl ParagraphHeading {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParagraphHeading::Normal => "NORMAL",
            ParagraphHeading::Title => "TITLE",
            ParagraphHeading::Subtitle => "SUBTITLE",
            ParagraphHeading::Heading1 => "HEADING1",
            ParagraphHeading::Heading2 => "HEADING2",
            ParagraphHeading::Heading3 => "HEADING3",
            ParagraphHeading::Heading4 => "HEADING4",
            ParagraphHeading::Heading5 => "HEADING5",
            ParagraphHeading::Heading6 => "HEADING6",
        }
    }
}

impl fmt::Display for ParagraphHeading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct Paragraph {
    #[cfg_attr(feature = "serde", serde(default))]
    pub heading: ParagraphHeading,
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<Node>,
}

impl Paragraph {
    /// Raw paragraph text (concatenated text runs).
    pub fn text(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            collect_text(child, &mut out);
        }
        out
    }
}

/// Style flags of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct CharStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl CharStyle {
    pub const PLAIN: CharStyle = CharStyle {
        bold: false,
        italic: false,
        underline: false,
    };

    pub fn bold() -> Self {
        Self {
            bold: true,
            ..Self::PLAIN
        }
    }

    pub fn italic() -> Self {
        Self {
            italic: true,
            ..Self::PLAIN
        }
    }

    pub fn underline() -> Self {
        Self {
            underline: true,
            ..Self::PLAIN
        }
    }

    /// Combine the flags of two styles.
    pub fn union(self, other: CharStyle) -> Self {
        Self {
            bold: self.bold || other.bold,
            italic: self.italic || other.italic,
            underline: self.underline || other.underline,
        }
    }

    pub fn is_plain(&self) -> bool {
        *self == Self::PLAIN
    }
}

/// Style flags applied to a half-open range of character indices.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct StyleSpan {
    pub start: usize,
    pub end: usize,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bold: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub italic: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub underline: bool,
}

impl StyleSpan {
    pub fn new(range: Range<usize>, style: CharStyle) -> Self {
        Self {
            start: range.start,
            end: range.end,
            bold: style.bold,
            italic: style.italic,
            underline: style.underline,
        }
    }

    fn style(&self) -> CharStyle {
        CharStyle {
            bold: self.bold,
            italic: self.italic,
            underline: self.underline,
        }
    }
}

/// A text element. Styles are only observable per character through
/// [`TextRun::style_at`]; overlapping spans combine.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct TextRun {
    pub text: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub styles: Vec<StyleSpan>,
}

impl TextRun {
    pub fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            styles: Vec::new(),
        }
    }

    /// Add a styled character range.
    pub fn styled(mut self, range: Range<usize>, style: CharStyle) -> Self {
        self.styles.push(StyleSpan::new(range, style));
        self
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn style_at(&self, index: usize) -> CharStyle {
        self.styles
            .iter()
            .filter(|span| span.start <= index && index < span.end)
            .fold(CharStyle::PLAIN, |acc, span| acc.union(span.style()))
    }

    pub fn is_bold(&self, index: usize) -> bool {
        self.style_at(index).bold
    }

    pub fn is_italic(&self, index: usize) -> bool {
        self.style_at(index).italic
    }

    pub fn is_underline(&self, index: usize) -> bool {
        self.style_at(index).underline
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct Equation {
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct EquationSymbol {
    pub code: String,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct EquationFunction {
    pub code: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<Node>,
}

/// Bullet glyph of a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum GlyphType {
    #[default]
    Bullet,
    HollowBullet,
    SquareBullet,
    Number,
    LatinUpper,
    LatinLower,
    RomanUpper,
    RomanLower,
}

impl GlyphType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GlyphType::Bullet => "BULLET",
            GlyphType::HollowBullet => "HOLLOW_BULLET",
            GlyphType::SquareBullet => "SQUARE_BULLET",
            GlyphType::Number => "NUMBER",
            GlyphType::LatinUpper => "LATIN_UPPER",
            GlyphType::LatinLower => "LATIN_LOWER",
            GlyphType::RomanUpper => "ROMAN_UPPER",
            GlyphType::RomanLower => "ROMAN_LOWER",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct ListItem {
    #[cfg_attr(feature = "serde", serde(default))]
    pub glyph: GlyphType,
    #[cfg_attr(feature = "serde", serde(default))]
    pub nesting: u32,
    pub list_id: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<Node>,
}

impl ListItem {
    /// Whether `other` is an item of the same list.
    pub fn same_list(&self, other: &ListItem) -> bool {
        self.list_id == other.list_id
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct Footnote {
    #[cfg_attr(feature = "serde", serde(default))]
    pub contents: Vec<Node>,
}

/// An inline image blob with its pixel size.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct InlineImage {
    pub content_type: String,
    #[cfg_attr(
        feature = "serde",
        serde(deserialize_with = "super::json::deserialize_base64")
    )]
    pub data: Vec<u8>,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Unsupported {
    /// The host's name for the element kind.
    pub kind: String,
    pub children: Vec<Node>,
}
