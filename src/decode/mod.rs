pub mod parser;
pub mod scanner;

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use memchr::memchr_iter;
use tracing::{error, trace};

use crate::arena::Arena;
use crate::{DecodeOptions, Document, Error, Result};

pub fn from_str(input: &str, options: &DecodeOptions) -> Result<Document> {
    let mut arena = Arena::with_limit(options.arena_limit);
    let roots = parser::parse_into(&mut arena, input, options)?;
    trace!(
        nodes = arena.nodes.len(),
        bytes = arena.bytes_used(),
        "parsed configuration"
    );
    Ok(Document::from_parts(arena, roots))
}

pub fn from_slice(input: &[u8], options: &DecodeOptions) -> Result<Document> {
    let text = std::str::from_utf8(input).map_err(|err| {
        let valid = &input[..err.valid_up_to()];
        let line = memchr_iter(b'\n', valid).count() + 1;
        error!(line, "parse error: invalid utf-8");
        Error::parse(line, "invalid utf-8")
    })?;
    from_str(text, options)
}

pub fn from_reader<R: Read>(mut reader: R, options: &DecodeOptions) -> Result<Document> {
    let mut buf = Vec::new();
    reader
        .read_to_end(&mut buf)
        .map_err(|err| Error::io("read configuration", err))?;
    from_slice(&buf, options)
}

/// Reads the whole file, then parses it. The buffer is dropped on every
/// exit path, including parse failure.
pub fn from_file(path: &Path, options: &DecodeOptions) -> Result<Document> {
    let metadata = fs::metadata(path).map_err(|err| Error::io_at(path, "stat", err))?;
    if metadata.is_dir() {
        let err = io::Error::new(io::ErrorKind::InvalidInput, "is a directory");
        return Err(Error::io_at(path, "stat", err));
    }
    let buf = fs::read(path).map_err(|err| Error::io_at(path, "read", err))?;
    trace!(path = %path.display(), bytes = buf.len(), "read configuration file");
    from_slice(&buf, options).map_err(|err| {
        if err.is_parse() {
            error!(path = %path.display(), "failed to load configuration: {err}");
        }
        err
    })
}
