mod writer;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::trace;

use crate::types::{Document, Nodes};
use crate::{EncodeOptions, Error, Result};

use writer::Writer;

/// Writes the canonical form of `document` to `sink`.
///
/// Sections print as `key {` ... `}`, bindings as `key=value` or
/// `key=[v1, v2]`. Sibling order is preserved.
pub fn to_writer<W: Write>(sink: W, document: &Document, options: &EncodeOptions) -> Result<W> {
    let mut writer = Writer::new(sink, options.clone());
    write_nodes(&mut writer, document.roots(), 0)?;
    writer.finish()
}

pub fn to_vec(document: &Document, options: &EncodeOptions) -> Result<Vec<u8>> {
    to_writer(Vec::new(), document, options)
}

pub fn to_string(document: &Document, options: &EncodeOptions) -> Result<String> {
    let bytes = to_vec(document, options)?;
    // Keys and strings come from `&str` input, so the output is UTF-8.
    String::from_utf8(bytes).map_err(|err| {
        Error::io(
            "encode configuration",
            std::io::Error::new(std::io::ErrorKind::InvalidData, err),
        )
    })
}

pub fn to_file(document: &Document, path: &Path, options: &EncodeOptions) -> Result<()> {
    let file = File::create(path).map_err(|err| Error::io_at(path, "open", err))?;
    let sink = to_writer(BufWriter::new(file), document, options)?;
    let file = sink
        .into_inner()
        .map_err(|err| Error::io_at(path, "write", err.into_error()))?;
    file.sync_all()
        .map_err(|err| Error::io_at(path, "close", err))?;
    trace!(path = %path.display(), "wrote configuration file");
    Ok(())
}

fn write_nodes<W: Write>(writer: &mut Writer<W>, nodes: Nodes<'_>, depth: usize) -> Result<()> {
    for node in nodes {
        writer.write_indent(depth);
        writer.write_str(node.key());
        if node.is_section() {
            writer.write_str(" {");
            writer.end_line()?;
            write_nodes(writer, node.children(), depth + 1)?;
            writer.write_indent(depth);
            writer.write_str("}");
        } else {
            writer.write_str("=");
            let mut values = node.values();
            if values.len() > 1 {
                writer.write_str("[");
                for (idx, value) in values.enumerate() {
                    if idx > 0 {
                        writer.write_str(", ");
                    }
                    writer.write_value(value);
                }
                writer.write_str("]");
            } else if let Some(value) = values.next() {
                writer.write_value(value);
            }
        }
        writer.end_line()?;
    }
    Ok(())
}
