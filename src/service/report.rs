//! HTML report of a compile attempt
//!
//! The report is a small HTML fragment: a link to the PDF on success, or the
//! error text on failure, followed by the generated LaTeX. All text is
//! escaped and newlines become `<br>` so the LaTeX stays readable.

use super::CompileOutcome;

/// Escape text for HTML and keep its line breaks.
pub fn escape_html(text: &str) -> String {
    html_escape::encode_text(text).replace('\n', "<br>")
}

/// Title for the report panel.
pub fn report_title(outcome: &CompileOutcome) -> &'static str {
    if outcome.is_success() {
        "LaTeX"
    } else {
        "Error"
    }
}

/// Render the report fragment.
pub fn render_html(outcome: &CompileOutcome) -> String {
    let mut html = String::new();
    match &outcome.result {
        Ok(document) => {
            html.push_str("Open <a href=\"");
            html.push_str(html_escape::encode_double_quoted_attribute(&document.url).as_ref());
            html.push_str("\">this</a> in a new tab.");
        }
        Err(err) => {
            html.push_str("<h2>Error</h2>");
            html.push_str(&escape_html(&err.to_string()));
        }
    }

    if !outcome.warnings.is_empty() {
        html.push_str("<h2>Warnings</h2>");
        for warning in &outcome.warnings {
            html.push_str(&escape_html(&warning.to_string()));
            html.push_str("<br>");
        }
    }

    html.push_str("<h2>Generated LaTeX</h2>");
    html.push_str(&escape_html(&outcome.latex));
    html
}

/// Render a complete page around the fragment.
pub fn render_page(outcome: &CompileOutcome) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n<body>{}</body>\n</html>\n",
        report_title(outcome),
        render_html(outcome)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::{CompileError, CompiledDocument};
    use crate::utils::error::{ConversionWarning, WarningKind};

    fn outcome(result: Result<CompiledDocument, CompileError>) -> CompileOutcome {
        CompileOutcome {
            latex: "\\noindent a < b & c\n\n".to_string(),
            warnings: Vec::new(),
            result,
        }
    }

    #[test]
    fn test_success_report() {
        let report = render_html(&outcome(Ok(CompiledDocument {
            id: "5".to_string(),
            url: "http://tex.test/pdf?id=5&x=1".to_string(),
        })));
        assert_eq!(
            report,
            "Open <a href=\"http://tex.test/pdf?id=5&amp;x=1\">this</a> in a new tab.\
             <h2>Generated LaTeX</h2>\\noindent a &lt; b &amp; c<br><br>"
        );
    }

    #[test]
    fn test_error_report_keeps_latex() {
        let failed = outcome(Err(CompileError::ServiceFailure {
            status: 400,
            body: "ERROR: <missing $>".to_string(),
        }));
        let report = render_html(&failed);
        assert!(report.starts_with(
            "<h2>Error</h2>compile service returned 400: ERROR: &lt;missing $&gt;"
        ));
        assert!(report.ends_with("<h2>Generated LaTeX</h2>\\noindent a &lt; b &amp; c<br><br>"));
        assert_eq!(report_title(&failed), "Error");
    }

    #[test]
    fn test_warnings_listed() {
        let mut with_warning = outcome(Err(CompileError::Transport("timeout".to_string())));
        with_warning.warnings.push(ConversionWarning::new(
            WarningKind::UnsupportedNodeKind,
            "TABLE",
        ));
        let page = render_page(&with_warning);
        assert!(page.contains("<h2>Warnings</h2>[unsupported node kind] TABLE<br>"));
        assert!(page.contains("<title>Error</title>"));
    }
}
