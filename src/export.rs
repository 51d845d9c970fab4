// Author: Dustin Pilgrim
// License: MIT

//! Flatten a document tree into `#define` lines and write a C header.
//!
//! Every leaf in the tree becomes one macro definition whose name is the
//! underscore-joined, sanitized path from the root to the leaf:
//!
//! ```text
//! server:            #define SERVER_HOST "localhost"
//!   host: localhost  #define SERVER_PORT 8080
//!   port: 8080       #define SERVER_TAGS_0 "a"
//!   tags: [a]
//! ```
//!
//! Definitions are emitted in document order for mappings and ascending
//! index order for sequences. Nothing deduplicates names; when two paths
//! sanitize to the same macro the later `#define` wins in the
//! preprocessor.

use std::io::{self, Write};

use crate::ast::Node;
use crate::encode::{derive_identifier, encode_literal};

/// Opening guard line written before the first definition.
///
/// The guard text is the same for every generated file, so two generated
/// headers cannot be included from one compilation unit without a name
/// collision. Known limitation, kept for compatibility with existing
/// consumers (note there is also no matching `#define` of the guard).
pub const GUARD_OPEN: &str = "#ifndef YAML_CONTENT_H\n";

/// Closing guard text written after the last definition.
pub const GUARD_CLOSE: &str = "\n#endif \n";

/// One emitted constant definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Definition {
    pub name: String,
    pub value: String,
}

/// Recursively flatten `node` into definition records, appending to `out`.
///
/// `prefix` is the underscore-joined path from the document root; pass an
/// empty string for the root call. Each nesting level sanitizes the joined
/// prefix before recursing, so `prefix` is always already a valid macro
/// name fragment on entry (sanitization is idempotent, a bare scalar root
/// re-sanitizes harmlessly).
pub fn flatten(prefix: &str, node: &Node, out: &mut Vec<Definition>) {
    match node {
        Node::Mapping(entries) => {
            for (key, child) in entries {
                let joined = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}_{}", prefix, key)
                };
                flatten(&derive_identifier(&joined), child, out);
            }
        }
        Node::Sequence(items) => {
            for (idx, item) in items.iter().enumerate() {
                let joined = format!("{}_{}", prefix, idx);
                flatten(&derive_identifier(&joined), item, out);
            }
        }
        Node::Scalar(scalar) => {
            out.push(Definition {
                name: derive_identifier(prefix),
                value: encode_literal(scalar),
            });
        }
    }
}

/// Write a complete header for `doc`: open guard, one `#define` per leaf,
/// close guard. The writer is the only I/O this module touches.
pub fn write_header<W: Write>(doc: &Node, writer: &mut W) -> io::Result<()> {
    let mut definitions = Vec::new();
    flatten("", doc, &mut definitions);

    writer.write_all(GUARD_OPEN.as_bytes())?;
    for def in &definitions {
        writeln!(writer, "#define {} {}", def.name, def.value)?;
    }
    writer.write_all(GUARD_CLOSE.as_bytes())?;
    Ok(())
}
