// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracery Record: a serializing 2D vector-graphics recording layer.
//!
//! This crate is the development backend of a multi-backend graphics-context
//! API. Instead of producing pixels, every drawing call is captured as an
//! ordered, replayable command log while the recorder keeps the live state
//! callers query synchronously up to date.
//!
//! # Core concepts
//!
//! - **Opcode vocabulary**: every operation maps to a stable 4-byte code in
//!   [`OPCODES`]. Implementations that share the table can record on one side
//!   and replay on the other; the table is wire-format v1.
//! - **[`CompiledPath`]**: an append-only log of geometry records
//!   ([`PathOp`]) with incrementally maintained current-point and
//!   bounding-box state, so queries never replay the log. Flushing a path
//!   freezes it into an immutable, shareable [`PathSnapshot`].
//! - **[`GraphicsContext`]**: the full drawing surface. It owns the
//!   in-progress path, appends every non-path operation to its own log
//!   ([`ContextOp`]), composes the coordinate transform live, and keeps an
//!   explicit save/restore stack of graphics state.
//!
//! Path identity is a version token ([`PathId`]): mutating a path after it
//! has been flushed mints a new generation, so an embedding or paint record
//! always names exactly the content that existed when it was recorded.
//!
//! Rasterization, font shaping, and windowing are out of scope; a consumer
//! replays the log against a real backend. The `tracery_json` crate encodes
//! logs as JSON Lines.
//!
//! # Example
//!
//! ```
//! use tracery_record::{GraphicsContext, PathDrawMode};
//!
//! let mut gc = GraphicsContext::new(100, 100);
//! gc.move_to(0.0, 0.0);
//! gc.line_to(10.0, 0.0);
//! gc.line_to(10.0, 10.0);
//! gc.close_path();
//! gc.draw_path(PathDrawMode::FillStroke);
//! assert_eq!(gc.log().len(), 1);
//! assert_eq!(gc.path_definitions().len(), 1);
//! ```

#![no_std]

extern crate alloc;

use alloc::string::String;

mod context;
mod ops;
mod path;

pub use context::{GraphicsContext, GraphicsState};
pub use ops::{
    ContextOp, DEFINE_PATH, Font, FontStyle, GradientStop, GradientUnits, ImageData, LineCap,
    LineJoin, OPCODES, PathDrawMode, PathId, PathOp, PixelFormat, SpreadMethod, TextDrawMode,
    opcode_for,
};
pub use path::{CompiledPath, PathSnapshot};

/// Failure recording a drawing operation.
///
/// Appending is atomic per operation: when one of these is returned, nothing
/// was logged and no tracked state changed.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RecordError {
    /// The operation is part of the API surface but this backend refuses it.
    #[error("operation `{op}` is not supported by this backend")]
    NotSupported {
        /// Name of the refused operation.
        op: &'static str,
    },
    /// The operation's geometry operands are degenerate.
    #[error("invalid geometry in `{op}`: {detail}")]
    InvalidGeometry {
        /// Name of the failed operation.
        op: &'static str,
        /// What was wrong with the operands.
        detail: String,
    },
    /// A path reference names content that is not defined.
    #[error("stale path reference {id:?}")]
    StaleReference {
        /// The dangling version token.
        id: PathId,
    },
    /// `restore_state` without a matching `save_state`.
    #[error("restore_state without a matching save_state")]
    StateUnderflow,
}
