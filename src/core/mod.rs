//! Core conversion modules
//!
//! This module contains the conversion engine:
//! - `encoder`: document tree to LaTeX encoder

pub mod encoder;

// Re-export main types and functions from the encoder
pub use encoder::{
    document_to_latex, encode_children, encode_document, encode_node, EncodeOptions,
    EncodeState, Encoded, NodeCx,
};
