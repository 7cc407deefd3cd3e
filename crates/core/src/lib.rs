//! passage - paragraph reconstruction and quote filing for scanned book pages.
//!
//! A text-recognition pass over a photographed page yields a flat, unordered
//! list of lines with vertical positions. This crate turns that list back
//! into paragraph-structured prose ([`layout::reconstruct_paragraphs`]) and
//! files the result as a quote under a book ([`model::Library`]). The
//! recognition engine itself is an external black box; see [`recognize`]
//! for the boundary format.

pub mod error;
pub mod high_level;
pub mod layout;
pub mod model;
pub mod recognize;

pub use error::{PassageError, Result};
pub use layout::{ReflowParams, reconstruct_paragraphs};
pub use recognize::RecognizedLine;
