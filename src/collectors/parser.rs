//! Row parser for NX-OS `| xml` output
//!
//! NX-OS wraps every table in `TABLE_<name>` / `ROW_<name>` element pairs. The
//! parser flattens each `ROW_*` element into a [`Row`] of leaf fields, keeps
//! nested rows (port-channel members) as children, and returns the top-level
//! rows of the type the data source is known to produce.

use std::collections::HashMap;

use log::trace;
use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::reader::NsReader;

use crate::collectors::errors::ParseError;
use crate::collectors::sources::DataSource;

const ROW_PREFIX: &str = "ROW_";
const END_OF_MESSAGE: &str = "]]>]]>";

/// One flattened record of a `ROW_*` element
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    kind: String,
    fields: HashMap<String, String>,
    children: Vec<Row>,
}

impl Row {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Self::default()
        }
    }

    /// Adds a leaf field, replacing an earlier value of the same name
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Attaches a nested row
    pub fn with_child(mut self, child: Row) -> Self {
        self.children.push(child);
        self
    }

    /// Element name of the row, e.g. `ROW_interface`
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Text of a leaf field; empty elements count as absent
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Nested rows of the given kind in document order
    pub fn children<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a Row> + 'a {
        self.children.iter().filter(move |child| child.kind == kind)
    }
}

/// Parses the raw reply of `source` into its top-level rows
///
/// Only rows bound to the source's namespace are returned. An empty reply,
/// invalid XML, or a reply without a single row of the expected type is an
/// error.
pub fn parse_rows(source: DataSource, raw: &str) -> Result<Vec<Row>, ParseError> {
    let body = raw.trim().trim_end_matches(END_OF_MESSAGE).trim_end();
    if body.is_empty() {
        return Err(ParseError::Empty {
            data_source: source,
        });
    }

    let malformed = |message: String| ParseError::Malformed {
        data_source: source,
        message,
    };

    let mut reader = NsReader::from_str(body);
    reader.trim_text(true);

    // Open rows with a flag telling whether the row element is in the source namespace
    let mut open: Vec<(Row, bool)> = Vec::new();
    let mut rows = Vec::new();
    let mut field: Option<String> = None;
    let mut text = String::new();
    let mut saw_element = false;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| malformed(format!("at byte {}: {e}", reader.buffer_position())))?;

        match event {
            Event::Start(e) => {
                saw_element = true;
                let (namespace, local) = reader.resolve_element(e.name());
                let tag = std::str::from_utf8(local.as_ref())
                    .map_err(|e| malformed(format!("invalid element name: {e}")))?;

                if tag.starts_with(ROW_PREFIX) {
                    let bound = matches!(
                        namespace,
                        ResolveResult::Bound(Namespace(uri)) if uri == source.namespace().as_bytes()
                    );
                    open.push((Row::new(tag), bound));
                    field = None;
                } else {
                    field = Some(tag.to_string());
                }
                text.clear();
            }
            Event::Text(e) => {
                if field.is_some() {
                    let unescaped = e
                        .unescape()
                        .map_err(|e| malformed(format!("bad text content: {e}")))?;
                    text.push_str(&unescaped);
                }
            }
            Event::CData(e) => {
                if field.is_some() {
                    text.push_str(&String::from_utf8_lossy(&e));
                }
            }
            Event::End(e) => {
                let local = e.local_name();
                let tag = std::str::from_utf8(local.as_ref())
                    .map_err(|e| malformed(format!("invalid element name: {e}")))?;

                if tag.starts_with(ROW_PREFIX) {
                    let Some((row, bound)) = open.pop() else {
                        return Err(malformed(format!("unexpected closing </{tag}>")));
                    };
                    match open.last_mut() {
                        Some((parent, _)) => parent.children.push(row),
                        None if bound && row.kind == source.row_type() => rows.push(row),
                        None => trace!("{source}: ignoring top-level {}", row.kind),
                    }
                } else if field.as_deref() == Some(tag) {
                    if let Some((row, _)) = open.last_mut() {
                        if !text.is_empty() {
                            row.fields.insert(tag.to_string(), std::mem::take(&mut text));
                        }
                    }
                    field = None;
                }
                text.clear();
            }
            Event::Empty(_) => saw_element = true,
            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_element {
        return Err(malformed("no XML elements found".to_string()));
    }
    if let Some((row, _)) = open.last() {
        return Err(malformed(format!("document ends inside {}", row.kind)));
    }
    if rows.is_empty() {
        return Err(ParseError::MissingRowType {
            data_source: source,
            row_type: source.row_type(),
        });
    }

    trace!("{source}: parsed {} {} rows", rows.len(), source.row_type());
    Ok(rows)
}
