//! Document structure conversion
//!
//! Handles the body, paragraphs and headings, footnotes, images and
//! unsupported elements, and dispatches every node kind to its handler.

use super::context::{EncodeState, NodeCx};
use super::list::encode_list_item;
use super::math::{encode_equation, encode_function, encode_separator, encode_symbol};
use super::text::encode_text;
use super::utils::{escape_structural, escape_underscore};
use crate::data::constants::{ABSTRACT_HEADING, DOCUMENT_FOOTER, DOCUMENT_HEADER, EMPTY_GROUP};
use crate::features::images::include_graphics;
use crate::features::parse_directive;
use crate::features::refs::{bibitem, bibliography_begin, bibliography_end, citation_key, cite};
use crate::model::{Body, Footnote, InlineImage, Node, Paragraph, ParagraphHeading, Unsupported};
use crate::utils::error::{ConversionError, ConversionResult, WarningKind};

const ABSTRACT_BEGIN: &str = "\\begin{abstract}\n";
const ABSTRACT_END: &str = "\\end{abstract}\n";

/// Encode a single node.
pub fn encode_node<'a>(
    node: &'a Node,
    cx: NodeCx<'a>,
    state: &mut EncodeState<'a>,
) -> ConversionResult<String> {
    match node {
        Node::Body(body) => encode_body(body, node, state),
        Node::Paragraph(paragraph) => encode_paragraph(paragraph, node, state),
        Node::Text(run) => Ok(encode_text(run, cx, state)),
        Node::Equation(equation) => encode_equation(equation, node, cx, state),
        Node::EquationSymbol(symbol) => Ok(encode_symbol(symbol)),
        Node::EquationFunction(function) => encode_function(function, node, state),
        Node::EquationSeparator => Ok(encode_separator(cx).to_string()),
        Node::ListItem(item) => encode_list_item(item, node, cx, state),
        Node::Footnote(footnote) => Ok(encode_footnote(footnote, state)),
        Node::InlineImage(image) => encode_image(image, state),
        Node::Unsupported(unsupported) => Ok(encode_unsupported(unsupported, state)),
    }
}

/// Encode `children` in document order and concatenate the results.
pub fn encode_children<'a>(
    children: &'a [Node],
    parent: Option<&'a Node>,
    state: &mut EncodeState<'a>,
) -> ConversionResult<String> {
    let mut result = String::new();
    for (index, child) in children.iter().enumerate() {
        let cx = NodeCx::child(parent, children, index);
        result.push_str(&encode_node(child, cx, state)?);
    }
    Ok(result)
}

fn encode_body<'a>(
    body: &'a Body,
    node: &'a Node,
    state: &mut EncodeState<'a>,
) -> ConversionResult<String> {
    let content = encode_children(&body.children, Some(node), state)?;

    let mut result = String::new();
    if state.options.full_document {
        result.push_str(DOCUMENT_HEADER);
    }
    result.push_str(&content);
    if state.abstract_open {
        // The abstract ran to the end of the body.
        state.abstract_open = false;
        result.push_str(ABSTRACT_END);
    }
    result.push_str(&encode_references(state)?);
    if state.options.full_document {
        result.push_str(DOCUMENT_FOOTER);
    }
    Ok(result)
}

fn close_abstract(state: &mut EncodeState<'_>) -> &'static str {
    if std::mem::replace(&mut state.abstract_open, false) {
        ABSTRACT_END
    } else {
        ""
    }
}

fn encode_paragraph<'a>(
    paragraph: &'a Paragraph,
    node: &'a Node,
    state: &mut EncodeState<'a>,
) -> ConversionResult<String> {
    match paragraph.heading {
        ParagraphHeading::Title => {
            let content = encode_children(&paragraph.children, Some(node), state)?;
            Ok(format!("\\title{{{}}}\n\\date{{}}\n\\maketitle\n\n", content))
        }
        ParagraphHeading::Heading1 if paragraph.text() == ABSTRACT_HEADING => {
            let close = close_abstract(state);
            state.abstract_open = true;
            Ok(format!("{}{}", close, ABSTRACT_BEGIN))
        }
        ParagraphHeading::Heading1 => {
            let content = encode_children(&paragraph.children, Some(node), state)?;
            let close = close_abstract(state);
            Ok(format!("{}\\section{{{}}}\n", close, content))
        }
        ParagraphHeading::Heading2 => {
            let content = encode_children(&paragraph.children, Some(node), state)?;
            Ok(format!("\\subsection{{{}}}\n", content))
        }
        ParagraphHeading::Heading3 => {
            let content = encode_children(&paragraph.children, Some(node), state)?;
            Ok(format!("\\subsubsection{{{}}}\n", content))
        }
        ParagraphHeading::Normal => encode_normal_paragraph(paragraph, node, state),
        ParagraphHeading::Subtitle
        | ParagraphHeading::Heading4
        | ParagraphHeading::Heading5
        | ParagraphHeading::Heading6 => {
            state.warn(WarningKind::UnsupportedHeadingKind, paragraph.heading.to_string());
            let content = encode_children(&paragraph.children, Some(node), state)?;
            Ok(format!(
                "\\noindent {{[}}{}{{]}} {}\n\n",
                paragraph.heading, content
            ))
        }
    }
}

fn encode_normal_paragraph<'a>(
    paragraph: &'a Paragraph,
    node: &'a Node,
    state: &mut EncodeState<'a>,
) -> ConversionResult<String> {
    let text = paragraph.text();
    match parse_directive(&text, state.options.directive_marker) {
        Some(Ok(directive)) => {
            directive.apply(&mut state.images);
            return Ok(String::new());
        }
        Some(Err(unknown)) => {
            if state.options.strict_directives {
                return Err(ConversionError::unsupported_directive(unknown.name, text));
            }
            // Rendered as an ordinary paragraph below.
            state.warn(
                WarningKind::UnsupportedDirective,
                format!("{} in line: {}", unknown, text),
            );
        }
        None => {}
    }

    let content = encode_children(&paragraph.children, Some(node), state)?;
    let content = if content.is_empty() {
        EMPTY_GROUP.to_string()
    } else {
        content
    };
    Ok(format!("\\noindent {}\n\n", content))
}

fn encode_footnote<'a>(footnote: &'a Footnote, state: &mut EncodeState<'a>) -> String {
    let key = state.references.push(&footnote.contents);
    cite(&key)
}

fn encode_image(image: &InlineImage, state: &mut EncodeState<'_>) -> ConversionResult<String> {
    let collected = state.images.collect(image)?;
    Ok(include_graphics(&collected.name, image.width, image.height))
}

fn encode_unsupported(unsupported: &Unsupported, state: &mut EncodeState<'_>) -> String {
    state.warn(WarningKind::UnsupportedNodeKind, unsupported.kind.as_str());
    let kind = escape_underscore(&escape_structural(&unsupported.kind));
    format!("{{[}}{}{{]}}", kind)
}

/// Render the bibliography for every collected footnote. Footnote contents
/// are walked here, so footnotes nested inside them are collected and
/// rendered too.
fn encode_references<'a>(state: &mut EncodeState<'a>) -> ConversionResult<String> {
    if state.references.is_empty() {
        return Ok(String::new());
    }

    let mut result = bibliography_begin();
    let mut index = 0;
    while let Some(contents) = state.references.get(index) {
        let content = encode_children(contents, None, state)?;
        result.push_str(&bibitem(&citation_key(index + 1), &content));
        index += 1;
    }
    result.push_str(bibliography_end());
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::encoder::context::EncodeOptions;

    fn heading(level: ParagraphHeading, text: &str) -> Node {
        Node::paragraph(level, vec![Node::text(text)])
    }

    fn encode_with(nodes: &[Node], options: EncodeOptions) -> (ConversionResult<String>, usize) {
        let mut state = EncodeState::new(options);
        let out = encode_children(nodes, None, &mut state);
        (out, state.warnings.len())
    }

    fn encode(nodes: &[Node]) -> String {
        encode_with(nodes, EncodeOptions::default()).0.unwrap()
    }

    #[test]
    fn test_headings() {
        assert_eq!(
            encode(&[heading(ParagraphHeading::Title, "Paper")]),
            "\\title{Paper}\n\\date{}\n\\maketitle\n\n"
        );
        assert_eq!(
            encode(&[heading(ParagraphHeading::Heading2, "Setup")]),
            "\\subsection{Setup}\n"
        );
        assert_eq!(
            encode(&[heading(ParagraphHeading::Heading3, "Detail")]),
            "\\subsubsection{Detail}\n"
        );
    }

    #[test]
    fn test_abstract_closed_by_next_section() {
        let nodes = vec![
            heading(ParagraphHeading::Heading1, "Abstract"),
            Node::plain_paragraph("Summary."),
            heading(ParagraphHeading::Heading1, "Intro"),
        ];
        assert_eq!(
            encode(&nodes),
            "\\begin{abstract}\n\\noindent Summary.\n\n\\end{abstract}\n\\section{Intro}\n"
        );
    }

    #[test]
    fn test_repeated_abstract_closes_first() {
        let nodes = vec![
            heading(ParagraphHeading::Heading1, "Abstract"),
            heading(ParagraphHeading::Heading1, "Abstract"),
        ];
        assert_eq!(
            encode(&nodes),
            "\\begin{abstract}\n\\end{abstract}\n\\begin{abstract}\n"
        );
    }

    #[test]
    fn test_empty_paragraph_keeps_blank_line() {
        let empty = Node::paragraph(ParagraphHeading::Normal, vec![]);
        assert_eq!(encode(&[empty]), "\\noindent {}\n\n");
    }

    #[test]
    fn test_images_directive_emits_nothing() {
        let nodes = vec![Node::plain_paragraph("#images figure")];
        let mut state = EncodeState::default();
        let out = encode_children(&nodes, None, &mut state).unwrap();
        assert_eq!(out, "");
        assert_eq!(state.images.pending_names().collect::<Vec<_>>(), vec!["figure"]);
    }

    #[test]
    fn test_unknown_directive_rendered_as_text() {
        let (out, warnings) = encode_with(
            &[Node::plain_paragraph("#1 priority")],
            EncodeOptions::default(),
        );
        assert_eq!(out.unwrap(), "\\noindent \\#1 priority\n\n");
        assert_eq!(warnings, 1);
    }

    #[test]
    fn test_unknown_directive_strict() {
        let (out, _) = encode_with(
            &[Node::plain_paragraph("#figure a")],
            EncodeOptions::strict(),
        );
        assert_eq!(
            out.unwrap_err(),
            ConversionError::unsupported_directive("figure", "#figure a")
        );
    }

    #[test]
    fn test_unsupported_heading_placeholder() {
        let (out, warnings) = encode_with(
            &[heading(ParagraphHeading::Heading4, "Deep")],
            EncodeOptions::default(),
        );
        assert_eq!(out.unwrap(), "\\noindent {[}HEADING4{]} Deep\n\n");
        assert_eq!(warnings, 1);
    }

    #[test]
    fn test_unsupported_heading_warning_names_level() {
        let nodes = vec![heading(ParagraphHeading::Subtitle, "Secret_plan")];
        let mut state = EncodeState::default();
        encode_children(&nodes, None, &mut state).unwrap();
        assert_eq!(state.warnings.len(), 1);
        assert_eq!(state.warnings[0].kind, WarningKind::UnsupportedHeadingKind);
        assert_eq!(state.warnings[0].message, "SUBTITLE");
    }

    #[test]
    fn test_unsupported_node_placeholder() {
        let table = Node::Unsupported(Unsupported {
            kind: "TABLE".to_string(),
            children: vec![Node::text("cell")],
        });
        let (out, warnings) = encode_with(&[table], EncodeOptions::default());
        assert_eq!(out.unwrap(), "{[}TABLE{]}");
        assert_eq!(warnings, 1);

        let page_break = Node::Unsupported(Unsupported {
            kind: "PAGE_BREAK".to_string(),
            children: vec![],
        });
        assert_eq!(encode(&[page_break]), "{[}PAGE\\_BREAK{]}");
    }

    #[test]
    fn test_footnotes_become_citations() {
        let para = Node::paragraph(
            ParagraphHeading::Normal,
            vec![
                Node::text("Known"),
                Node::footnote(vec![Node::plain_paragraph("First.")]),
                Node::text(" fact"),
                Node::footnote(vec![Node::plain_paragraph("Second.")]),
            ],
        );
        let body = Node::body(vec![para]);
        let mut state = EncodeState::new(EncodeOptions::fragment());
        let out = encode_node(&body, NodeCx::root(), &mut state).unwrap();
        assert_eq!(
            out,
            "\\noindent Known\\cite{a1} fact\\cite{a2}\n\n\
             \n\\begin{thebibliography}{9}\n\
             \\bibitem{a1} \\noindent First.\n\n\
             \\bibitem{a2} \\noindent Second.\n\n\
             \\end{thebibliography}\n"
        );
    }

    #[test]
    fn test_dangling_abstract_closed_before_bibliography() {
        let body = Node::body(vec![
            heading(ParagraphHeading::Heading1, "Abstract"),
            Node::paragraph(
                ParagraphHeading::Normal,
                vec![Node::footnote(vec![Node::text("ref")])],
            ),
        ]);
        let mut state = EncodeState::new(EncodeOptions::fragment());
        let out = encode_node(&body, NodeCx::root(), &mut state).unwrap();
        assert_eq!(
            out,
            "\\begin{abstract}\n\\noindent \\cite{a1}\n\n\\end{abstract}\n\
             \n\\begin{thebibliography}{9}\n\\bibitem{a1} ref\\end{thebibliography}\n"
        );
        assert!(!state.abstract_open);
    }

    #[test]
    fn test_image_uses_fallback_name() {
        let image = Node::InlineImage(InlineImage {
            content_type: "image/png".to_string(),
            data: vec![1, 2, 3],
            width: 100.0,
            height: 40.0,
        });
        let mut state = EncodeState::default();
        let out = encode_node(&image, NodeCx::root(), &mut state).unwrap();
        assert_eq!(out, "\\includegraphics[height=30pt,width=75pt]{image-1}");
        assert_eq!(state.images.len(), 1);
    }

    #[test]
    fn test_invalid_image_is_fatal() {
        let image = Node::InlineImage(InlineImage {
            content_type: "application/octet-stream".to_string(),
            data: vec![],
            width: 1.0,
            height: 1.0,
        });
        let mut state = EncodeState::default();
        let err = encode_node(&image, NodeCx::root(), &mut state).unwrap_err();
        assert_eq!(err.to_string(), "Bad blob type: application/octet-stream");
    }
}
