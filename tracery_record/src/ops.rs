// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The wire vocabulary: opcode table, command records, and operand types.
//!
//! Every drawing operation that reaches a log is represented by exactly one
//! record here. Records are internally tagged with a 4-byte `op` code so that
//! any two implementations sharing [`OPCODES`] can interoperate: one side
//! records, the other replays. The table is wire-format v1; adding or
//! changing an operation requires a new version.

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// Identity of a compiled path, as recorded in embedding and paint records.
///
/// The first element is the path number, minted by the owning
/// [`GraphicsContext`](crate::GraphicsContext) from a context-local counter;
/// the second is the generation, bumped whenever a previously-flushed path is
/// mutated. An id is therefore a version token: two ids with the same path
/// number but different generations name different (replaced) content.
///
/// On the wire an id is a two-element array `[path, generation]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathId(pub u64, pub u32);

impl PathId {
    /// Returns the id for the next generation of the same path.
    #[must_use]
    pub fn next_generation(self) -> Self {
        Self(self.0, self.1 + 1)
    }
}

/// Operation name to 4-byte opcode, for the whole vocabulary.
///
/// Codes marked reserved below never appear in a log produced by this
/// backend but remain part of the shared wire contract:
/// `begin_path`/`close_path` are structural (a reset and a synthesized
/// `line_to`), `line_set` lowers to move/line pairs, and the color-space,
/// glyph, flatness, and `fill_rects` operations are refused with
/// `NotSupported`.
pub const OPCODES: &[(&str, &str)] = &[
    // CompiledPath
    ("begin_path", "bpth"),
    ("close_path", "cpth"),
    ("add_path", "apth"),
    ("arc", "arc-"),
    ("arc_to", "arct"),
    ("curve_to", "crvt"),
    ("quad_curve_to", "qcrv"),
    ("move_to", "mvto"),
    ("line_to", "lnto"),
    ("lines", "lns-"),
    ("rect", "rect"),
    ("rects", "rcts"),
    // GraphicsContext
    ("scale_ctm", "smtx"),
    ("translate_ctm", "tmtx"),
    ("rotate_ctm", "rmtx"),
    ("concat_ctm", "cmtx"),
    ("save_state", "push"),
    ("restore_state", "pop-"),
    ("set_antialias", "staa"),
    ("set_line_width", "stlw"),
    ("set_line_join", "stlj"),
    ("set_miter_limit", "stml"),
    ("set_line_cap", "stlc"),
    ("set_line_dash", "stld"),
    ("set_flatness", "stfl"),
    ("flush", "flsh"),
    ("synchronize", "sync"),
    ("begin_page", "bpge"),
    ("end_page", "epge"),
    ("line_set", "lnst"),
    ("draw_rect", "drwr"),
    ("stroke_rect", "stkr"),
    ("stroke_rect_with_width", "srww"),
    ("fill_rect", "frct"),
    ("fill_rects", "frts"),
    ("clip", "clip"),
    ("even_odd_clip", "eocl"),
    ("clip_to_rect", "clrt"),
    ("clip_to_rects", "clrs"),
    ("stroke_path", "spth"),
    ("fill_path", "fpth"),
    ("eof_fill_path", "efpt"),
    ("draw_path", "drpt"),
    ("draw_path_at_points", "dpap"),
    ("draw_image", "dimg"),
    ("clear_rect", "clrr"),
    ("clear", "clr-"),
    ("set_fill_color_space", "sfcs"),
    ("set_stroke_color_space", "sscs"),
    ("set_rendering_intent", "srin"),
    ("set_fill_color", "sfcr"),
    ("set_stroke_color", "sscr"),
    ("set_alpha", "salp"),
    ("linear_gradient", "ling"),
    ("radial_gradient", "radg"),
    ("select_font", "slft"),
    ("set_font", "stft"),
    ("set_font_size", "sfsz"),
    ("set_character_spacing", "schs"),
    ("set_text_drawing_mode", "stdm"),
    ("set_text_position", "stps"),
    ("set_text_matrix", "stmt"),
    ("show_text", "shtx"),
    ("show_text_at_point", "stap"),
    ("show_glyphs", "shgl"),
    // Container format (definitions emitted before the records that
    // reference them).
    ("define_path", "dfpt"),
];

/// Opcode of the path-definition container record.
pub const DEFINE_PATH: &str = "dfpt";

// Duplicate or mis-sized codes are a wire-format defect, so reject them when
// the table is compiled rather than when a log is produced.
const _: () = {
    let mut i = 0;
    while i < OPCODES.len() {
        assert!(OPCODES[i].1.len() == 4, "opcodes are exactly four bytes");
        let mut j = i + 1;
        while j < OPCODES.len() {
            assert!(
                !bytes_eq(OPCODES[i].1.as_bytes(), OPCODES[j].1.as_bytes()),
                "opcode table contains a duplicate code"
            );
            assert!(
                !bytes_eq(OPCODES[i].0.as_bytes(), OPCODES[j].0.as_bytes()),
                "opcode table contains a duplicate operation name"
            );
            j += 1;
        }
        i += 1;
    }
};

const fn bytes_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Look up the opcode for an operation name.
pub fn opcode_for(name: &str) -> Option<&'static str> {
    OPCODES
        .iter()
        .find(|(op_name, _)| *op_name == name)
        .map(|(_, code)| *code)
}

/// Line cap style.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    /// Flat edge at the line end.
    #[default]
    Butt,
    /// Semicircular cap past the line end.
    Round,
    /// Square cap past the line end.
    Square,
}

/// Line join style.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineJoin {
    /// Sharp corner, subject to the miter limit.
    #[default]
    Miter,
    /// Rounded corner.
    Round,
    /// Flattened corner.
    Bevel,
}

/// How a path-painting operation combines filling and stroking.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathDrawMode {
    /// Fill with the non-zero winding rule.
    Fill,
    /// Fill with the even-odd rule.
    EofFill,
    /// Stroke only.
    Stroke,
    /// Fill (non-zero) then stroke.
    FillStroke,
    /// Fill (even-odd) then stroke.
    EofFillStroke,
}

/// Gradient spread outside the stop range.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpreadMethod {
    /// Extend the terminal stop colors.
    #[default]
    Pad,
    /// Repeat the stop sequence.
    Repeat,
    /// Mirror the stop sequence.
    Reflect,
}

/// Coordinate system gradient geometry is expressed in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GradientUnits {
    /// Coordinates are in user space.
    #[default]
    #[serde(rename = "userSpaceOnUse")]
    UserSpace,
    /// Coordinates are fractions of the painted object's bounding box.
    #[serde(rename = "objectBoundingBox")]
    ObjectBoundingBox,
}

/// A single gradient stop: an offset in `[0, 1]` and an RGBA color.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position of the stop along the gradient axis.
    pub offset: f32,
    /// Stop color as straight-alpha RGBA components.
    pub color: [f32; 4],
}

impl GradientStop {
    /// Create a stop from an offset and a color.
    pub fn new(offset: f32, color: peniko::Color) -> Self {
        Self {
            offset,
            color: color.components,
        }
    }
}

/// Font slant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    /// Upright glyphs.
    #[default]
    Regular,
    /// Italic glyphs.
    Italic,
    /// Slanted (synthesized oblique) glyphs.
    Oblique,
}

/// Font selection recorded by `set_font`.
///
/// This is a plain descriptor, not a resolved font: resolution against the
/// installed font set is the consuming renderer's concern.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Font {
    /// Family name.
    pub family: String,
    /// Size in points.
    pub size: f64,
    /// Weight on the usual 100–900 scale.
    pub weight: u16,
    /// Slant.
    pub style: FontStyle,
}

impl Font {
    /// Create a regular-weight, upright font descriptor.
    pub fn new(family: impl Into<String>, size: f64) -> Self {
        Self {
            family: family.into(),
            size,
            weight: 400,
            style: FontStyle::Regular,
        }
    }
}

/// Text rendering mode recorded by `set_text_drawing_mode`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextDrawMode {
    /// Fill glyph outlines.
    #[default]
    Fill,
    /// Stroke glyph outlines.
    Stroke,
    /// Fill then stroke.
    FillStroke,
    /// Record positions without producing pixels.
    Invisible,
    /// Fill and add outlines to the clip region.
    FillClip,
    /// Stroke and add outlines to the clip region.
    StrokeClip,
    /// Fill, stroke, and add outlines to the clip region.
    FillStrokeClip,
    /// Add outlines to the clip region only.
    Clip,
}

/// Pixel layout of an inline image payload.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PixelFormat {
    /// 8-bit RGB, tightly packed.
    Rgb8,
    /// 8-bit RGBA, tightly packed.
    Rgba8,
}

/// Inline image payload recorded by `draw_image`.
///
/// Pixels are row-major and tightly packed. This backend inlines the bytes
/// into the log; a transport that has already shipped the image to the
/// consumer would reference it instead.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageData {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel layout of `pixels`.
    pub format: PixelFormat,
    /// Raw pixel bytes.
    pub pixels: Vec<u8>,
}

/// A geometry record in a compiled path's log.
///
/// Operand names are part of the wire format. Points are `[x, y]`, rects are
/// `[x, y, w, h]`, angles are radians.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op")]
pub enum PathOp {
    /// Begin a new subpath at a point.
    #[serde(rename = "mvto")]
    MoveTo {
        /// The new current point.
        pnt: [f64; 2],
    },
    /// Straight segment from the current point.
    #[serde(rename = "lnto")]
    LineTo {
        /// Segment endpoint.
        to: [f64; 2],
    },
    /// Polyline through a point sequence.
    #[serde(rename = "lns-")]
    Lines {
        /// Points visited in order.
        pnts: Vec<[f64; 2]>,
    },
    /// Cubic Bézier segment from the current point.
    #[serde(rename = "crvt")]
    CurveTo {
        /// First control point.
        cp1: [f64; 2],
        /// Second control point.
        cp2: [f64; 2],
        /// Segment endpoint.
        to: [f64; 2],
    },
    /// Quadratic Bézier segment from the current point.
    #[serde(rename = "qcrv")]
    QuadCurveTo {
        /// Control point.
        cp: [f64; 2],
        /// Segment endpoint.
        to: [f64; 2],
    },
    /// Axis-aligned rectangle subpath.
    #[serde(rename = "rect")]
    Rect {
        /// Origin and size as `[x, y, w, h]`.
        rect: [f64; 4],
    },
    /// Several rectangle subpaths.
    #[serde(rename = "rcts")]
    Rects {
        /// Origin-and-size quads.
        rects: Vec<[f64; 4]>,
    },
    /// Circular arc.
    #[serde(rename = "arc-")]
    Arc {
        /// Circle center.
        cntr: [f64; 2],
        /// Circle radius.
        rad: f64,
        /// Start angle in radians, within `[0, 2π]`.
        start: f64,
        /// End angle in radians, within `[0, 2π]`.
        end: f64,
        /// Traversal direction.
        clock: bool,
    },
    /// Arc through a corner defined by two tangent lines.
    #[serde(rename = "arct")]
    ArcTo {
        /// Corner point.
        p1: [f64; 2],
        /// Endpoint of the second tangent line.
        p2: [f64; 2],
        /// Arc radius.
        rad: f64,
    },
    /// Embed another compiled path by reference.
    ///
    /// The referenced path must be defined (a `dfpt` record) before this
    /// record is replayed.
    #[serde(rename = "apth")]
    AddPath {
        /// Version token of the embedded path.
        pth: PathId,
    },
}

impl PathOp {
    /// The record's 4-byte opcode.
    pub fn opcode(&self) -> &'static str {
        match self {
            Self::MoveTo { .. } => "mvto",
            Self::LineTo { .. } => "lnto",
            Self::Lines { .. } => "lns-",
            Self::CurveTo { .. } => "crvt",
            Self::QuadCurveTo { .. } => "qcrv",
            Self::Rect { .. } => "rect",
            Self::Rects { .. } => "rcts",
            Self::Arc { .. } => "arc-",
            Self::ArcTo { .. } => "arct",
            Self::AddPath { .. } => "apth",
        }
    }

    /// The embedded path reference, if this record carries one.
    pub fn path_ref(&self) -> Option<PathId> {
        match self {
            Self::AddPath { pth } => Some(*pth),
            _ => None,
        }
    }
}

/// A non-path record in a graphics context's log.
///
/// Operand names are part of the wire format. Matrices are the six affine
/// coefficients `[a, b, c, d, e, f]`, colors are straight-alpha RGBA.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op")]
pub enum ContextOp {
    /// Scale the coordinate system.
    #[serde(rename = "smtx")]
    ScaleCtm {
        /// Scale factors `[sx, sy]`.
        scale: [f64; 2],
    },
    /// Translate the coordinate system.
    #[serde(rename = "tmtx")]
    TranslateCtm {
        /// Offsets `[tx, ty]`.
        offset: [f64; 2],
    },
    /// Rotate the coordinate system.
    #[serde(rename = "rmtx")]
    RotateCtm {
        /// Rotation in radians.
        angle: f64,
    },
    /// Concatenate a matrix onto the coordinate transform.
    #[serde(rename = "cmtx")]
    ConcatCtm {
        /// Affine coefficients.
        transform: [f64; 6],
    },
    /// Push the graphics state.
    #[serde(rename = "push")]
    SaveState,
    /// Pop the graphics state.
    #[serde(rename = "pop-")]
    RestoreState,
    /// Toggle antialiasing.
    #[serde(rename = "staa")]
    SetAntialias {
        /// Whether antialiasing is on.
        value: bool,
    },
    /// Set the stroke width.
    #[serde(rename = "stlw")]
    SetLineWidth {
        /// Width in user-space units.
        width: f64,
    },
    /// Set the line join style.
    #[serde(rename = "stlj")]
    SetLineJoin {
        /// Join style.
        style: LineJoin,
    },
    /// Set the miter limit.
    #[serde(rename = "stml")]
    SetMiterLimit {
        /// Limit ratio above which miters become bevels.
        limit: f64,
    },
    /// Set the line cap style.
    #[serde(rename = "stlc")]
    SetLineCap {
        /// Cap style.
        style: LineCap,
    },
    /// Set the dash pattern.
    #[serde(rename = "stld")]
    SetLineDash {
        /// Alternating on/off lengths.
        lengths: Vec<f64>,
        /// Offset into the pattern.
        phase: f64,
    },
    /// Flush drawing to the destination device.
    #[serde(rename = "flsh")]
    Flush,
    /// Synchronize with the destination device.
    #[serde(rename = "sync")]
    Synchronize,
    /// Start a page.
    #[serde(rename = "bpge")]
    BeginPage,
    /// End the current page.
    #[serde(rename = "epge")]
    EndPage,
    /// Paint a rectangle in the given mode.
    #[serde(rename = "drwr")]
    DrawRect {
        /// Rectangle as `[x, y, w, h]`.
        rect: [f64; 4],
        /// Fill/stroke combination.
        mode: PathDrawMode,
    },
    /// Stroke a rectangle.
    #[serde(rename = "stkr")]
    StrokeRect {
        /// Rectangle as `[x, y, w, h]`.
        rect: [f64; 4],
    },
    /// Stroke a rectangle with an explicit width.
    #[serde(rename = "srww")]
    StrokeRectWithWidth {
        /// Rectangle as `[x, y, w, h]`.
        rect: [f64; 4],
        /// Stroke width for this rectangle only.
        width: f64,
    },
    /// Fill a rectangle.
    #[serde(rename = "frct")]
    FillRect {
        /// Rectangle as `[x, y, w, h]`.
        rect: [f64; 4],
    },
    /// Clear a rectangle to transparent.
    #[serde(rename = "clrr")]
    ClearRect {
        /// Rectangle as `[x, y, w, h]`.
        rect: [f64; 4],
    },
    /// Clear the whole surface to a color.
    #[serde(rename = "clr-")]
    Clear {
        /// Clear color.
        color: [f32; 4],
    },
    /// Clip to the current path (non-zero winding).
    #[serde(rename = "clip")]
    Clip,
    /// Clip to the current path (even-odd).
    #[serde(rename = "eocl")]
    EvenOddClip,
    /// Clip to a rectangle.
    #[serde(rename = "clrt")]
    ClipToRect {
        /// Rectangle as `[x, y, w, h]`.
        rect: [f64; 4],
    },
    /// Clip to the union of several rectangles.
    #[serde(rename = "clrs")]
    ClipToRects {
        /// Origin-and-size quads.
        rects: Vec<[f64; 4]>,
    },
    /// Stroke a flushed path.
    #[serde(rename = "spth")]
    StrokePath {
        /// Version token of the painted path.
        pth: PathId,
    },
    /// Fill a flushed path (non-zero winding).
    #[serde(rename = "fpth")]
    FillPath {
        /// Version token of the painted path.
        pth: PathId,
    },
    /// Fill a flushed path (even-odd).
    #[serde(rename = "efpt")]
    EofFillPath {
        /// Version token of the painted path.
        pth: PathId,
    },
    /// Paint a flushed path in the given mode.
    #[serde(rename = "drpt")]
    DrawPath {
        /// Version token of the painted path.
        pth: PathId,
        /// Fill/stroke combination.
        mode: PathDrawMode,
    },
    /// Stamp a flushed path at several points.
    #[serde(rename = "dpap")]
    DrawPathAtPoints {
        /// Version token of the stamped path.
        pth: PathId,
        /// Stamp positions.
        points: Vec<[f64; 2]>,
        /// Fill/stroke combination.
        mode: PathDrawMode,
    },
    /// Draw an inline image.
    #[serde(rename = "dimg")]
    DrawImage {
        /// Image payload.
        img: ImageData,
        /// Destination rectangle; the image's natural bounds when absent.
        #[serde(skip_serializing_if = "Option::is_none", default)]
        rect: Option<[f64; 4]>,
    },
    /// Set the fill color.
    #[serde(rename = "sfcr")]
    SetFillColor {
        /// Straight-alpha RGBA components.
        color: [f32; 4],
    },
    /// Set the stroke color.
    #[serde(rename = "sscr")]
    SetStrokeColor {
        /// Straight-alpha RGBA components.
        color: [f32; 4],
    },
    /// Set the global alpha.
    #[serde(rename = "salp")]
    SetAlpha {
        /// Alpha in `[0, 1]`.
        alpha: f64,
    },
    /// Use a linear gradient as the current brush.
    #[serde(rename = "ling")]
    LinearGradient {
        /// Gradient axis start.
        start: [f64; 2],
        /// Gradient axis end.
        end: [f64; 2],
        /// Color stops.
        stops: Vec<GradientStop>,
        /// Spread outside the stop range.
        spread: SpreadMethod,
        /// Coordinate system of the gradient geometry.
        units: GradientUnits,
    },
    /// Use a radial gradient as the current brush.
    #[serde(rename = "radg")]
    RadialGradient {
        /// Circle center.
        center: [f64; 2],
        /// Focal point.
        focus: [f64; 2],
        /// Circle radius.
        radius: f64,
        /// Color stops.
        stops: Vec<GradientStop>,
        /// Spread outside the stop range.
        spread: SpreadMethod,
        /// Coordinate system of the gradient geometry.
        units: GradientUnits,
    },
    /// Select a font by face name.
    #[serde(rename = "slft")]
    SelectFont {
        /// Face name.
        face: String,
        /// Size in points.
        size: f64,
        /// Text encoding label.
        #[serde(rename = "textEncoding")]
        encoding: String,
    },
    /// Set the font from a descriptor.
    #[serde(rename = "stft")]
    SetFont {
        /// Font descriptor.
        font: Font,
    },
    /// Change only the font size.
    #[serde(rename = "sfsz")]
    SetFontSize {
        /// Size in points.
        size: f64,
    },
    /// Set inter-character spacing.
    #[serde(rename = "schs")]
    SetCharacterSpacing {
        /// Extra advance between glyphs.
        spacing: f64,
    },
    /// Set the text rendering mode.
    #[serde(rename = "stdm")]
    SetTextDrawingMode {
        /// Rendering mode.
        mode: TextDrawMode,
    },
    /// Set the text position.
    #[serde(rename = "stps")]
    SetTextPosition {
        /// New text position.
        pos: [f64; 2],
    },
    /// Set the text transform matrix.
    #[serde(rename = "stmt")]
    SetTextMatrix {
        /// Affine coefficients.
        matrix: [f64; 6],
    },
    /// Show text at the current text position.
    #[serde(rename = "shtx")]
    ShowText {
        /// Text to draw.
        text: String,
        /// Optional explicit position.
        #[serde(skip_serializing_if = "Option::is_none", default)]
        pos: Option<[f64; 2]>,
    },
    /// Show text at an explicit point.
    #[serde(rename = "stap")]
    ShowTextAtPoint {
        /// Text to draw.
        text: String,
        /// Position.
        pos: [f64; 2],
    },
}

impl ContextOp {
    /// The record's 4-byte opcode.
    pub fn opcode(&self) -> &'static str {
        match self {
            Self::ScaleCtm { .. } => "smtx",
            Self::TranslateCtm { .. } => "tmtx",
            Self::RotateCtm { .. } => "rmtx",
            Self::ConcatCtm { .. } => "cmtx",
            Self::SaveState => "push",
            Self::RestoreState => "pop-",
            Self::SetAntialias { .. } => "staa",
            Self::SetLineWidth { .. } => "stlw",
            Self::SetLineJoin { .. } => "stlj",
            Self::SetMiterLimit { .. } => "stml",
            Self::SetLineCap { .. } => "stlc",
            Self::SetLineDash { .. } => "stld",
            Self::Flush => "flsh",
            Self::Synchronize => "sync",
            Self::BeginPage => "bpge",
            Self::EndPage => "epge",
            Self::DrawRect { .. } => "drwr",
            Self::StrokeRect { .. } => "stkr",
            Self::StrokeRectWithWidth { .. } => "srww",
            Self::FillRect { .. } => "frct",
            Self::ClearRect { .. } => "clrr",
            Self::Clear { .. } => "clr-",
            Self::Clip => "clip",
            Self::EvenOddClip => "eocl",
            Self::ClipToRect { .. } => "clrt",
            Self::ClipToRects { .. } => "clrs",
            Self::StrokePath { .. } => "spth",
            Self::FillPath { .. } => "fpth",
            Self::EofFillPath { .. } => "efpt",
            Self::DrawPath { .. } => "drpt",
            Self::DrawPathAtPoints { .. } => "dpap",
            Self::DrawImage { .. } => "dimg",
            Self::SetFillColor { .. } => "sfcr",
            Self::SetStrokeColor { .. } => "sscr",
            Self::SetAlpha { .. } => "salp",
            Self::LinearGradient { .. } => "ling",
            Self::RadialGradient { .. } => "radg",
            Self::SelectFont { .. } => "slft",
            Self::SetFont { .. } => "stft",
            Self::SetFontSize { .. } => "sfsz",
            Self::SetCharacterSpacing { .. } => "schs",
            Self::SetTextDrawingMode { .. } => "stdm",
            Self::SetTextPosition { .. } => "stps",
            Self::SetTextMatrix { .. } => "stmt",
            Self::ShowText { .. } => "shtx",
            Self::ShowTextAtPoint { .. } => "stap",
        }
    }

    /// The painted/stamped path reference, if this record carries one.
    pub fn path_ref(&self) -> Option<PathId> {
        match self {
            Self::StrokePath { pth }
            | Self::FillPath { pth }
            | Self::EofFillPath { pth }
            | Self::DrawPath { pth, .. }
            | Self::DrawPathAtPoints { pth, .. } => Some(*pth),
            _ => None,
        }
    }
}
