//! Inline image collection
//!
//! Each inline image is validated, base64-encoded and appended to the
//! collector. Its LaTeX name comes from the queue filled by the `images`
//! directive, or falls back to `image-<n>` where `n` counts every collected
//! image including the named ones.

use crate::data::constants::{IMAGE_CONTENT_PREFIX, IMAGE_NAME_PREFIX, PX_TO_PT};
use crate::model::InlineImage;
use crate::utils::error::{ConversionError, ConversionResult};
use base64::Engine;
use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::Path;

/// An image handed to the compile collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CollectedImage {
    /// Name referenced by `\includegraphics`
    pub name: String,
    /// Image subtype, e.g. `png`
    pub subtype: String,
    /// URL-safe base64 of the raw bytes
    pub data: String,
}

impl CollectedImage {
    /// File name the compile service stores the image under.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, self.subtype)
    }

    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        base64::engine::general_purpose::URL_SAFE.decode(&self.data)
    }
}

/// Append-only image list plus the FIFO of pending names.
#[derive(Debug, Clone, Default)]
pub struct ImageCollector {
    images: Vec<CollectedImage>,
    pending_names: VecDeque<String>,
}

impl ImageCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue names for the next images, in order.
    pub fn enqueue_names<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pending_names.extend(names.into_iter().map(Into::into));
    }

    /// Validate and record an image, returning the collected entry.
    pub fn collect(&mut self, image: &InlineImage) -> ConversionResult<&CollectedImage> {
        let subtype = image_subtype(&image.content_type)?.to_string();
        let name = self
            .pending_names
            .pop_front()
            .unwrap_or_else(|| format!("{}{}", IMAGE_NAME_PREFIX, self.images.len() + 1));
        let data = base64::engine::general_purpose::URL_SAFE.encode(&image.data);

        log::debug!("collected image {} ({}, {} bytes)", name, subtype, image.data.len());
        self.images.push(CollectedImage {
            name,
            subtype,
            data,
        });
        Ok(&self.images[self.images.len() - 1])
    }

    pub fn images(&self) -> &[CollectedImage] {
        &self.images
    }

    pub fn into_images(self) -> Vec<CollectedImage> {
        self.images
    }

    /// Names queued by a directive that no image consumed.
    pub fn pending_names(&self) -> impl Iterator<Item = &str> {
        self.pending_names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// Subtype of an `image/<subtype>` content type.
pub fn image_subtype(content_type: &str) -> ConversionResult<&str> {
    match content_type.strip_prefix(IMAGE_CONTENT_PREFIX) {
        Some(subtype) if !subtype.is_empty() => Ok(subtype),
        _ => Err(ConversionError::invalid_image(content_type)),
    }
}

/// Convert pixels to points.
pub fn px_to_pt(px: f64) -> f64 {
    px * PX_TO_PT
}

/// `\includegraphics` sized from pixel dimensions.
pub fn include_graphics(name: &str, width_px: f64, height_px: f64) -> String {
    format!(
        "\\includegraphics[height={}pt,width={}pt]{{{}}}",
        px_to_pt(height_px),
        px_to_pt(width_px),
        name
    )
}

/// Write `src.tex` and every image as `<name>.<subtype>` into `dir`, the
/// layout the compile service builds before running pdflatex.
pub fn write_bundle(dir: &Path, latex: &str, images: &[CollectedImage]) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    fs::write(dir.join("src.tex"), latex)?;
    for image in images {
        let bytes = image
            .decode()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(dir.join(image.file_name()), bytes)?;
    }
    Ok(())
}
