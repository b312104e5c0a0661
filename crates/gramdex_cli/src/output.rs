//! Rendering of command results.

use std::io::Write;

use serde::Serialize;

use gramdex_foundation::{Error, ErrorKind, Result};
use gramdex_inventory::{ClassifiedName, DeclarationKind};

use crate::Format;

/// One name with everything known about its declaration.
#[derive(Debug, Serialize)]
struct NameRecord<'a> {
    name: &'a str,
    spelling: String,
    kind: DeclarationKind,
    pinned: bool,
    inner: bool,
    conditional: bool,
}

impl<'a> From<&'a ClassifiedName> for NameRecord<'a> {
    fn from(name: &'a ClassifiedName) -> Self {
        Self {
            name: &name.base_name,
            spelling: name.spelling(),
            kind: name.kind,
            pinned: name.is_pinned(),
            inner: name.is_inner(),
            conditional: name.is_conditional(),
        }
    }
}

/// Writes classified names, optionally with their markers.
pub(crate) fn names(
    out: &mut impl Write,
    names: &[ClassifiedName],
    format: Format,
    markers: bool,
) -> Result<()> {
    match (format, markers) {
        (Format::Json, true) => {
            let records: Vec<NameRecord<'_>> = names.iter().map(NameRecord::from).collect();
            json(out, &records)
        }
        (Format::Text, true) => {
            let width = names.iter().map(|n| n.base_name.len()).max().unwrap_or(0);
            for name in names {
                writeln!(
                    out,
                    "{:width$}  {:5}  {}",
                    name.base_name,
                    name.kind.as_str(),
                    flags(name)
                )
                .map_err(Error::output)?;
            }
            Ok(())
        }
        (format, false) => {
            let plain: Vec<&str> = names.iter().map(|n| n.base_name.as_str()).collect();
            strings(out, &plain, format)
        }
    }
}

/// Writes a list of strings.
pub(crate) fn strings<S>(out: &mut impl Write, items: &[S], format: Format) -> Result<()>
where
    S: AsRef<str> + Serialize,
{
    match format {
        Format::Text => {
            for item in items {
                writeln!(out, "{}", item.as_ref()).map_err(Error::output)?;
            }
            Ok(())
        }
        Format::Json => json(out, items),
    }
}

fn json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)
        .map_err(|err| Error::new(ErrorKind::Serialization(err.to_string())))?;
    writeln!(out).map_err(Error::output)
}

/// Describes the markers of a name, e.g. `!_tok  pinned, inner`.
fn flags(name: &ClassifiedName) -> String {
    let mut flags = Vec::new();
    if name.is_pinned() {
        flags.push("pinned");
    }
    if name.is_inner() {
        flags.push("inner");
    }
    if name.is_conditional() {
        flags.push("conditional");
    }
    if flags.is_empty() {
        return name.spelling();
    }
    format!("{}  {}", name.spelling(), flags.join(", "))
}
