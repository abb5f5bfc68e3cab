//! Compile service collaborator
//!
//! A pdflatex server accepts the generated LaTeX plus the collected images as
//! a form POST on `/compile` and answers with a document id. The PDF is then
//! served from `/pdf?id=<id>`. Only one blocking call is made per
//! conversion; the generated LaTeX is kept on failure so callers can show
//! what would have been sent.

pub mod report;

use crate::core::encoder::{encode_document, EncodeOptions, Encoded};
use crate::features::CollectedImage;
use crate::model::Node;
use crate::utils::error::{ConversionResult, ConversionWarning};
use std::fmt;

/// Payload of one compile call.
#[derive(Debug, Clone, PartialEq)]
pub struct CompileRequest {
    /// The LaTeX source
    pub source: String,
    /// Images referenced by the source, in reference order
    pub images: Vec<CollectedImage>,
}

impl CompileRequest {
    pub fn new(source: impl Into<String>, images: Vec<CollectedImage>) -> Self {
        Self {
            source: source.into(),
            images,
        }
    }

    pub fn from_encoded(encoded: &Encoded) -> Self {
        Self::new(encoded.latex.clone(), encoded.images.clone())
    }

    /// Form fields: `src`, then `image<i>name`, `image<i>type` and
    /// `image<i>data` for each image, numbered from 1.
    pub fn form_fields(&self) -> Vec<(String, String)> {
        let mut fields = Vec::with_capacity(1 + self.images.len() * 3);
        fields.push(("src".to_string(), self.source.clone()));
        for (i, image) in self.images.iter().enumerate() {
            let n = i + 1;
            fields.push((format!("image{}name", n), image.name.clone()));
            fields.push((format!("image{}type", n), image.subtype.clone()));
            fields.push((format!("image{}data", n), image.data.clone()));
        }
        fields
    }
}

/// Compile service error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// The service answered with a non-success status
    ServiceFailure { status: u16, body: String },
    /// The request never got an answer
    Transport(String),
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::ServiceFailure { status, body } => {
                write!(f, "compile service returned {}: {}", status, body)
            }
            CompileError::Transport(message) => {
                write!(f, "compile service unreachable: {}", message)
            }
        }
    }
}

impl std::error::Error for CompileError {}

/// Something that turns LaTeX into a downloadable PDF.
pub trait Compiler {
    /// Submit the request and return the document id.
    fn compile(&self, request: &CompileRequest) -> Result<String, CompileError>;

    /// Where the compiled document can be fetched.
    fn document_url(&self, id: &str) -> String;
}

/// Blocking HTTP client for the pdflatex server.
#[cfg(feature = "remote")]
#[derive(Debug, Clone)]
pub struct HttpCompiler {
    server: String,
    client: reqwest::blocking::Client,
}

#[cfg(feature = "remote")]
impl HttpCompiler {
    pub fn new(server: impl Into<String>) -> Result<Self, CompileError> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|err| CompileError::Transport(err.to_string()))?;
        Ok(Self::with_client(server, client))
    }

    pub fn with_client(server: impl Into<String>, client: reqwest::blocking::Client) -> Self {
        let server = server.into();
        Self {
            server: server.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    pub fn compile_url(&self) -> String {
        format!("{}/compile", self.server)
    }

    pub fn pdf_url(&self, id: &str) -> String {
        format!("{}/pdf?id={}", self.server, id)
    }
}

#[cfg(feature = "remote")]
impl Compiler for HttpCompiler {
    fn compile(&self, request: &CompileRequest) -> Result<String, CompileError> {
        let url = self.compile_url();
        log::info!(
            "compiling {} bytes, {} image(s) at {}",
            request.source.len(),
            request.images.len(),
            url
        );

        let response = self
            .client
            .post(&url)
            .form(&request.form_fields())
            .send()
            .map_err(|err| CompileError::Transport(err.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .map_err(|err| CompileError::Transport(err.to_string()))?;

        if status == reqwest::StatusCode::OK {
            let id = body.trim().to_string();
            log::debug!("compile service assigned id {}", id);
            Ok(id)
        } else {
            log::error!("compile service failed with {}: {}", status, body);
            Err(CompileError::ServiceFailure {
                status: status.as_u16(),
                body,
            })
        }
    }

    fn document_url(&self, id: &str) -> String {
        self.pdf_url(id)
    }
}

/// A compiled document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledDocument {
    pub id: String,
    pub url: String,
}

/// Result of converting and compiling one document.
#[derive(Debug, Clone, PartialEq)]
pub struct CompileOutcome {
    /// The LaTeX that was sent, available whether or not compilation worked
    pub latex: String,
    /// Conversion warnings
    pub warnings: Vec<ConversionWarning>,
    pub result: Result<CompiledDocument, CompileError>,
}

impl CompileOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    pub fn url(&self) -> Option<&str> {
        self.result.as_ref().ok().map(|doc| doc.url.as_str())
    }
}

/// Submit an already encoded document.
pub fn compile_encoded<C: Compiler + ?Sized>(encoded: Encoded, compiler: &C) -> CompileOutcome {
    let request = CompileRequest::from_encoded(&encoded);
    let result = compiler.compile(&request).map(|id| CompiledDocument {
        url: compiler.document_url(&id),
        id,
    });
    CompileOutcome {
        latex: encoded.latex,
        warnings: encoded.warnings,
        result,
    }
}

/// Convert a document tree and submit it for compilation.
///
/// Conversion errors are returned directly since there is no LaTeX to
/// report; compile failures are carried inside the outcome.
pub fn convert_and_compile<C: Compiler + ?Sized>(
    root: &Node,
    options: &EncodeOptions,
    compiler: &C,
) -> ConversionResult<CompileOutcome> {
    let encoded = encode_document(root, options)?;
    Ok(compile_encoded(encoded, compiler))
}
