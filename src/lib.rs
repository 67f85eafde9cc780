//! A small configuration language with nested sections and typed values.
//!
//! ```text
//! # comment
//! devices {
//!     dir = "/dev"
//!     scan = [ "/dev", "/mnt" ]
//! }
//! log { level = 3 ratio = 0.5 }
//! ```
//!
//! Parse with [`from_str`] or [`Document::load`], query with
//! [`Document::find_node`] and the typed `find_*` helpers, and write the
//! canonical form back with [`to_writer`] or [`to_file`].

pub mod arena;
pub mod constants;
pub mod decode;
pub mod encode;
pub mod error;
pub mod json;
pub mod num;
pub mod options;
pub mod parallel;
pub mod path;
pub mod text;
pub mod types;

#[cfg(test)]
mod test_log;

use std::io::{Read, Write};
use std::path::Path;

pub use crate::arena::NodeKind;
pub use crate::error::{Error, ErrorKind, Location};
pub use crate::options::{DecodeOptions, EncodeOptions, Indent};
pub use crate::parallel::load_files_parallel;
pub use crate::types::{Document, NodeRef, Nodes, Value, Values};

pub type Result<T> = std::result::Result<T, Error>;

pub fn from_str(input: &str) -> Result<Document> {
    from_str_with_options(input, &DecodeOptions::default())
}

pub fn from_str_with_options(input: &str, options: &DecodeOptions) -> Result<Document> {
    decode::from_str(input, options)
}

pub fn from_slice(input: &[u8]) -> Result<Document> {
    from_slice_with_options(input, &DecodeOptions::default())
}

pub fn from_slice_with_options(input: &[u8], options: &DecodeOptions) -> Result<Document> {
    decode::from_slice(input, options)
}

pub fn from_reader<R: Read>(reader: R) -> Result<Document> {
    from_reader_with_options(reader, &DecodeOptions::default())
}

pub fn from_reader_with_options<R: Read>(reader: R, options: &DecodeOptions) -> Result<Document> {
    decode::from_reader(reader, options)
}

pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    from_file_with_options(path, &DecodeOptions::default())
}

pub fn from_file_with_options<P: AsRef<Path>>(
    path: P,
    options: &DecodeOptions,
) -> Result<Document> {
    decode::from_file(path.as_ref(), options)
}

pub fn to_string(document: &Document) -> Result<String> {
    to_string_with_options(document, &EncodeOptions::default())
}

pub fn to_string_with_options(document: &Document, options: &EncodeOptions) -> Result<String> {
    encode::to_string(document, options)
}

pub fn to_vec(document: &Document) -> Result<Vec<u8>> {
    encode::to_vec(document, &EncodeOptions::default())
}

pub fn to_writer<W: Write>(writer: W, document: &Document) -> Result<()> {
    to_writer_with_options(writer, document, &EncodeOptions::default())
}

pub fn to_writer_with_options<W: Write>(
    writer: W,
    document: &Document,
    options: &EncodeOptions,
) -> Result<()> {
    encode::to_writer(writer, document, options).map(|_| ())
}

pub fn to_file<P: AsRef<Path>>(document: &Document, path: P) -> Result<()> {
    to_file_with_options(document, path, &EncodeOptions::default())
}

pub fn to_file_with_options<P: AsRef<Path>>(
    document: &Document,
    path: P,
    options: &EncodeOptions,
) -> Result<()> {
    encode::to_file(document, path.as_ref(), options)
}
