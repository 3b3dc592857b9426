// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON Lines export of Tracery drawing logs.
//!
//! The encoding is one JSON object per line. A path becomes a
//! `{"op":"dfpt","id":[p,g],"ops":[...]}` definition record; a context log
//! becomes the definition records for every path it references followed by
//! its command records in call order. Definitions always precede the records
//! that reference them, dependencies before dependents, so a consumer can
//! replay a document in a single pass.
//!
//! Encoding validates references: a `pth` operand whose id has no preceding
//! definition fails with [`RecordError::StaleReference`] before anything is
//! handed to the caller.
//!
//! # Example
//!
//! ```
//! use tracery_record::GraphicsContext;
//!
//! let mut gc = GraphicsContext::new(100, 100);
//! gc.rect(10.0, 10.0, 50.0, 50.0);
//! gc.fill_path();
//! let document = tracery_json::context_lines(&gc).unwrap();
//! let mut lines = document.lines();
//! assert!(lines.next().unwrap().starts_with(r#"{"op":"dfpt","id":[0,0]"#));
//! assert_eq!(lines.next().unwrap(), r#"{"op":"fpth","pth":[0,0]}"#);
//! ```

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

use alloc::string::String;
use alloc::vec::Vec;

use serde::Serialize;
use tracery_record::{
    DEFINE_PATH, GraphicsContext, PathId, PathOp, PathSnapshot, RecordError,
};

/// Failure encoding a log.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum EncodeError {
    /// A record could not be serialized.
    #[error("failed to encode a record as JSON")]
    Json(#[from] serde_json::Error),
    /// The log itself is inconsistent.
    #[error(transparent)]
    Record(#[from] RecordError),
}

/// Failure writing an encoded log to an output stream.
#[cfg(feature = "std")]
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SaveError {
    /// The log could not be encoded.
    #[error(transparent)]
    Encode(#[from] EncodeError),
    /// The destination refused the bytes.
    #[error("failed to write the encoded log")]
    Io(#[from] std::io::Error),
}

/// The `dfpt` container record binding a path id to its op list.
#[derive(Serialize)]
struct PathDefRecord<'a> {
    op: &'static str,
    id: PathId,
    ops: &'a [PathOp],
}

/// Encode a flushed path as JSON Lines.
///
/// Emits one definition record per path, the dependencies of `snapshot`
/// (recursively) before `snapshot` itself, each id at most once.
pub fn path_lines(snapshot: &PathSnapshot) -> Result<String, EncodeError> {
    let mut out = String::new();
    let mut defined = Vec::new();
    push_definitions(snapshot, &mut defined, &mut out)?;
    Ok(out)
}

/// Encode a context's whole recording as JSON Lines.
///
/// Definition records for every path the log references come first, then the
/// command log, one record per line.
pub fn context_lines(gc: &GraphicsContext) -> Result<String, EncodeError> {
    let mut out = String::new();
    let mut defined = Vec::new();
    for snapshot in gc.path_definitions() {
        push_definitions(snapshot, &mut defined, &mut out)?;
    }
    for op in gc.log() {
        if let Some(id) = op.path_ref() {
            if !defined.contains(&id) {
                return Err(RecordError::StaleReference { id }.into());
            }
        }
        push_line(&serde_json::to_string(op)?, &mut out);
    }
    Ok(out)
}

/// Write a flushed path to an output stream as JSON Lines.
#[cfg(feature = "std")]
pub fn write_path<W: std::io::Write>(writer: &mut W, snapshot: &PathSnapshot) -> Result<(), SaveError> {
    writer.write_all(path_lines(snapshot)?.as_bytes())?;
    Ok(())
}

/// Write a context's whole recording to an output stream as JSON Lines.
#[cfg(feature = "std")]
pub fn write_context<W: std::io::Write>(writer: &mut W, gc: &GraphicsContext) -> Result<(), SaveError> {
    writer.write_all(context_lines(gc)?.as_bytes())?;
    Ok(())
}

fn push_definitions(
    snapshot: &PathSnapshot,
    defined: &mut Vec<PathId>,
    out: &mut String,
) -> Result<(), EncodeError> {
    for dep in snapshot.deps.iter() {
        push_definitions(dep, defined, out)?;
    }
    if defined.contains(&snapshot.id) {
        return Ok(());
    }
    for op in snapshot.ops.iter() {
        if let Some(id) = op.path_ref() {
            if !defined.contains(&id) {
                return Err(RecordError::StaleReference { id }.into());
            }
        }
    }
    let line = serde_json::to_string(&PathDefRecord {
        op: DEFINE_PATH,
        id: snapshot.id,
        ops: &snapshot.ops,
    })?;
    push_line(&line, out);
    defined.push(snapshot.id);
    Ok(())
}

fn push_line(line: &str, out: &mut String) {
    out.push_str(line);
    out.push('\n');
}
