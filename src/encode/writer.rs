use std::io::Write;

use crate::num::number::{write_float_into, write_int_into};
use crate::text::string::write_quoted_into;
use crate::types::Value;
use crate::{EncodeOptions, Error, Result};

/// Buffers one line at a time and hands it to the sink.
pub(crate) struct Writer<W: Write> {
    sink: W,
    line: Vec<u8>,
    options: EncodeOptions,
}

impl<W: Write> Writer<W> {
    pub fn new(sink: W, options: EncodeOptions) -> Self {
        Self {
            sink,
            line: Vec::with_capacity(128),
            options,
        }
    }

    pub fn write_indent(&mut self, depth: usize) {
        let columns = self.options.indent.columns(depth);
        self.line.resize(self.line.len() + columns, b' ');
    }

    pub fn write_str(&mut self, s: &str) {
        self.line.extend_from_slice(s.as_bytes());
    }

    pub fn write_value(&mut self, value: Value<'_>) {
        match value {
            Value::Int(value) => write_int_into(value, &mut self.line),
            Value::Float(value) => write_float_into(value, &mut self.line),
            Value::String(value) => write_quoted_into(value, &mut self.line),
        }
    }

    pub fn end_line(&mut self) -> Result<()> {
        self.line.push(b'\n');
        self.sink
            .write_all(&self.line)
            .map_err(|err| Error::io("write configuration", err))?;
        self.line.clear();
        Ok(())
    }

    pub fn finish(mut self) -> Result<W> {
        self.sink
            .flush()
            .map_err(|err| Error::io("flush configuration", err))?;
        Ok(self.sink)
    }
}
