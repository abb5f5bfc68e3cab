//! Feature modules - collectors and directives
//!
//! This module contains the side-collecting parts of the encoder:
//! - Footnote references and the bibliography
//! - Inline images handed to the compile service
//! - In-text directives

pub mod directives;
pub mod images;
pub mod refs;

// Re-export commonly used types
pub use directives::{parse_directive, Directive, UnknownDirective};
pub use images::{write_bundle, CollectedImage, ImageCollector};
pub use refs::ReferenceCollector;
