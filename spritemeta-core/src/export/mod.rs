//! Descriptor serialization and sidecar writing.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter, Serializer};

use crate::descriptor::SpriteDescriptor;
use crate::error::GenerateError;

pub const INDENT: &[u8] = b"    ";

/// Pretty layout with every character outside printable ASCII written as
/// `\uXXXX` (UTF-16 surrogate pairs above the BMP).
pub struct AsciiPretty<'a> {
    inner: PrettyFormatter<'a>,
}

impl<'a> AsciiPretty<'a> {
    pub fn with_indent(indent: &'a [u8]) -> Self {
        Self { inner: PrettyFormatter::with_indent(indent) }
    }
}

impl Formatter for AsciiPretty<'_> {
    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_array(writer)
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object(writer)
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + Write>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()> {
        let mut start = 0;
        for (i, ch) in fragment.char_indices() {
            if (' '..='~').contains(&ch) {
                continue;
            }
            writer.write_all(fragment[start..i].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = i + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

/// Pretty JSON with 4-space indentation, ASCII only, no trailing newline.
pub fn to_json_vec(desc: &SpriteDescriptor) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::with_capacity(256);
    let mut ser = Serializer::with_formatter(&mut buf, AsciiPretty::with_indent(INDENT));
    desc.serialize(&mut ser)?;
    Ok(buf)
}

pub fn to_json_string(desc: &SpriteDescriptor) -> Result<String, serde_json::Error> {
    String::from_utf8(to_json_vec(desc)?)
        .map_err(|e| serde_json::Error::io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Create or truncate `path` and write `desc` into it. The handle is closed on return.
pub fn write_descriptor(path: &Path, desc: &SpriteDescriptor) -> Result<(), GenerateError> {
    let bytes = to_json_vec(desc)?;
    let write_err = |source| GenerateError::Write { path: path.to_path_buf(), source };
    let mut file = File::create(path).map_err(write_err)?;
    file.write_all(&bytes).map_err(write_err)?;
    file.flush().map_err(write_err)?;
    Ok(())
}
