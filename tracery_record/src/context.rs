// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The graphics context: the full drawing surface as an op recorder.

use alloc::string::ToString;
use alloc::vec::Vec;

use kurbo::{Affine, Point, Rect};
use peniko::Color;
use smallvec::SmallVec;

use crate::ops::{
    ContextOp, Font, GradientStop, GradientUnits, ImageData, LineCap, LineJoin, PathDrawMode,
    PathId, SpreadMethod, TextDrawMode,
};
use crate::path::{CompiledPath, PathSnapshot};
use crate::RecordError;

/// The graphics state affected by `save_state`/`restore_state`.
///
/// Text position and text matrix are deliberately not part of this: they are
/// context-level state that survives a restore.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphicsState {
    /// Current coordinate transform.
    pub transform: Affine,
    /// Fill color.
    pub fill_color: Color,
    /// Stroke color.
    pub stroke_color: Color,
    /// Global alpha in `[0, 1]`.
    pub alpha: f64,
    /// Stroke width in user-space units.
    pub line_width: f64,
    /// Line cap style.
    pub line_cap: LineCap,
    /// Line join style.
    pub line_join: LineJoin,
    /// Miter limit ratio.
    pub miter_limit: f64,
    /// Dash pattern as alternating on/off lengths; empty means solid.
    pub line_dash: Vec<f64>,
    /// Offset into the dash pattern.
    pub dash_phase: f64,
    /// Whether antialiasing is on.
    pub antialias: bool,
}

impl Default for GraphicsState {
    fn default() -> Self {
        Self {
            transform: Affine::IDENTITY,
            fill_color: Color::BLACK,
            stroke_color: Color::BLACK,
            alpha: 1.0,
            line_width: 1.0,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Miter,
            miter_limit: 10.0,
            line_dash: Vec::new(),
            dash_phase: 0.0,
            antialias: true,
        }
    }
}

/// A drawing surface that records operations instead of producing pixels.
///
/// Every call appends at most one record to the context's ordered log (path
/// construction goes to the active [`CompiledPath`]'s log instead), while
/// the state callers query synchronously — coordinate transform, paint
/// attributes, path geometry, text position — is tracked live. Replaying the
/// log in order against a real backend reproduces the drawing.
///
/// Path-painting operations flush the active path into the context's
/// definition table and reference it by [`PathId`], then start a fresh path.
#[derive(Clone, Debug)]
pub struct GraphicsContext {
    width: u32,
    height: u32,
    path: CompiledPath,
    state: GraphicsState,
    saved: SmallVec<[GraphicsState; 4]>,
    text_position: Point,
    text_matrix: Affine,
    log: Vec<ContextOp>,
    paths: Vec<PathSnapshot>,
    next_path: u64,
}

impl GraphicsContext {
    /// Create a context for a surface of the given pixel size.
    ///
    /// Path ids are minted from a counter local to the context, so identical
    /// call sequences against fresh contexts produce identical logs.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            path: CompiledPath::new(PathId(0, 0)),
            state: GraphicsState::default(),
            saved: SmallVec::new(),
            text_position: Point::ZERO,
            text_matrix: Affine::IDENTITY,
            log: Vec::new(),
            paths: Vec::new(),
            next_path: 1,
        }
    }

    /// Surface width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Surface height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The recorded non-path operations, in call order.
    pub fn log(&self) -> &[ContextOp] {
        &self.log
    }

    /// Flushed snapshots of every path the log references, dependencies
    /// before dependents.
    pub fn path_definitions(&self) -> &[PathSnapshot] {
        &self.paths
    }

    /// The live graphics state.
    pub fn state(&self) -> &GraphicsState {
        &self.state
    }

    /// The path currently under construction.
    pub fn active_path(&self) -> &CompiledPath {
        &self.path
    }

    // --- Path construction -------------------------------------------------
    //
    // These delegate to the active path's log; none of them appends to the
    // context log.

    /// Discard the active path and start a pristine one.
    pub fn begin_path(&mut self) {
        self.path.begin_path();
    }

    /// Begin a new subpath at `(x, y)`.
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.path.move_to(x, y);
    }

    /// Straight segment from the current point.
    pub fn line_to(&mut self, x: f64, y: f64) {
        self.path.line_to(x, y);
    }

    /// Polyline through `points`.
    pub fn lines(&mut self, points: &[Point]) {
        self.path.lines(points);
    }

    /// Disjoint segments from each start to the matching end.
    ///
    /// Lowers to move/line pairs in the active path's log; unmatched extra
    /// points in the longer slice are ignored.
    pub fn line_set(&mut self, starts: &[Point], ends: &[Point]) {
        for (start, end) in starts.iter().zip(ends) {
            self.path.move_to(start.x, start.y);
            self.path.line_to(end.x, end.y);
        }
    }

    /// Cubic Bézier segment from the current point.
    pub fn curve_to(&mut self, cp1x: f64, cp1y: f64, cp2x: f64, cp2y: f64, x: f64, y: f64) {
        self.path.curve_to(cp1x, cp1y, cp2x, cp2y, x, y);
    }

    /// Quadratic Bézier segment from the current point.
    pub fn quad_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64) {
        self.path.quad_curve_to(cpx, cpy, x, y);
    }

    /// Axis-aligned rectangle subpath.
    pub fn rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.path.rect(x, y, w, h);
    }

    /// Several rectangle subpaths.
    pub fn rects(&mut self, rects: &[[f64; 4]]) {
        self.path.rects(rects);
    }

    /// Circular arc; see [`CompiledPath::arc`] for angle requirements.
    pub fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        clockwise: bool,
    ) -> Result<(), RecordError> {
        self.path.arc(x, y, radius, start_angle, end_angle, clockwise)
    }

    /// Arc through a corner defined by two tangent lines.
    pub fn arc_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, radius: f64) {
        self.path.arc_to(x1, y1, x2, y2, radius);
    }

    /// Embed another path into the active path by reference.
    pub fn add_path(&mut self, other: &mut CompiledPath) {
        self.path.add_path(other);
    }

    /// Close the active subpath.
    pub fn close_path(&mut self) {
        self.path.close_path();
    }

    /// Whether the active path has any geometry.
    pub fn is_path_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// The active path's current point.
    pub fn get_path_current_point(&self) -> Point {
        self.path.get_current_point()
    }

    /// The active path's bounding box.
    pub fn get_path_bounding_box(&self) -> Rect {
        self.path.get_bounding_box()
    }

    /// Mint a fresh, independent path with a context-unique id.
    ///
    /// Build fragments here, then stamp them with [`add_path`](Self::add_path)
    /// or [`draw_path_at_points`](Self::draw_path_at_points).
    pub fn get_empty_path(&mut self) -> CompiledPath {
        CompiledPath::new(self.alloc_path_id())
    }

    // --- Coordinate transforms ---------------------------------------------

    /// Scale the coordinate system.
    pub fn scale_ctm(&mut self, sx: f64, sy: f64) {
        self.state.transform *= Affine::scale_non_uniform(sx, sy);
        self.log.push(ContextOp::ScaleCtm { scale: [sx, sy] });
    }

    /// Translate the coordinate system.
    pub fn translate_ctm(&mut self, tx: f64, ty: f64) {
        self.state.transform *= Affine::translate((tx, ty));
        self.log.push(ContextOp::TranslateCtm { offset: [tx, ty] });
    }

    /// Rotate the coordinate system by `angle` radians.
    pub fn rotate_ctm(&mut self, angle: f64) {
        self.state.transform *= Affine::rotate(angle);
        self.log.push(ContextOp::RotateCtm { angle });
    }

    /// Concatenate a transform onto the coordinate system.
    pub fn concat_ctm(&mut self, transform: Affine) {
        self.state.transform *= transform;
        self.log.push(ContextOp::ConcatCtm {
            transform: transform.as_coeffs(),
        });
    }

    /// The current coordinate transform.
    pub fn get_ctm(&self) -> Affine {
        self.state.transform
    }

    // --- Graphics state stack ----------------------------------------------

    /// Push the current graphics state.
    pub fn save_state(&mut self) {
        self.saved.push(self.state.clone());
        self.log.push(ContextOp::SaveState);
    }

    /// Pop the most recently saved graphics state.
    ///
    /// Fails with [`RecordError::StateUnderflow`] when no matching
    /// `save_state` exists; nothing is logged in that case.
    pub fn restore_state(&mut self) -> Result<(), RecordError> {
        let restored = self.saved.pop().ok_or(RecordError::StateUnderflow)?;
        self.state = restored;
        self.log.push(ContextOp::RestoreState);
        Ok(())
    }

    /// Run `f` between a save/restore pair.
    ///
    /// The final restore matches the save made here, so it cannot underflow
    /// unless `f` itself pops more states than it pushes; an unbalanced
    /// closure leaves the stack wherever it put it.
    pub fn with_state<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.save_state();
        let result = f(self);
        let _ = self.restore_state();
        result
    }

    // --- Paint attributes ---------------------------------------------------

    /// Toggle antialiasing.
    pub fn set_antialias(&mut self, value: bool) {
        self.state.antialias = value;
        self.log.push(ContextOp::SetAntialias { value });
    }

    /// Set the stroke width.
    pub fn set_line_width(&mut self, width: f64) {
        self.state.line_width = width;
        self.log.push(ContextOp::SetLineWidth { width });
    }

    /// Set the line join style.
    pub fn set_line_join(&mut self, style: LineJoin) {
        self.state.line_join = style;
        self.log.push(ContextOp::SetLineJoin { style });
    }

    /// Set the miter limit.
    pub fn set_miter_limit(&mut self, limit: f64) {
        self.state.miter_limit = limit;
        self.log.push(ContextOp::SetMiterLimit { limit });
    }

    /// Set the line cap style.
    pub fn set_line_cap(&mut self, style: LineCap) {
        self.state.line_cap = style;
        self.log.push(ContextOp::SetLineCap { style });
    }

    /// Set the dash pattern. An empty `lengths` means solid lines.
    pub fn set_line_dash(&mut self, lengths: &[f64], phase: f64) {
        self.state.line_dash = lengths.to_vec();
        self.state.dash_phase = phase;
        self.log.push(ContextOp::SetLineDash {
            lengths: lengths.to_vec(),
            phase,
        });
    }

    /// Set the fill color.
    pub fn set_fill_color(&mut self, color: Color) {
        self.state.fill_color = color;
        self.log.push(ContextOp::SetFillColor {
            color: color.components,
        });
    }

    /// Set the stroke color.
    pub fn set_stroke_color(&mut self, color: Color) {
        self.state.stroke_color = color;
        self.log.push(ContextOp::SetStrokeColor {
            color: color.components,
        });
    }

    /// Set the global alpha.
    pub fn set_alpha(&mut self, alpha: f64) {
        self.state.alpha = alpha;
        self.log.push(ContextOp::SetAlpha { alpha });
    }

    /// Use a linear gradient as the current brush.
    pub fn linear_gradient(
        &mut self,
        start: Point,
        end: Point,
        stops: &[GradientStop],
        spread: SpreadMethod,
        units: GradientUnits,
    ) {
        self.log.push(ContextOp::LinearGradient {
            start: [start.x, start.y],
            end: [end.x, end.y],
            stops: stops.to_vec(),
            spread,
            units,
        });
    }

    /// Use a radial gradient as the current brush.
    pub fn radial_gradient(
        &mut self,
        center: Point,
        focus: Point,
        radius: f64,
        stops: &[GradientStop],
        spread: SpreadMethod,
        units: GradientUnits,
    ) {
        self.log.push(ContextOp::RadialGradient {
            center: [center.x, center.y],
            focus: [focus.x, focus.y],
            radius,
            stops: stops.to_vec(),
            spread,
            units,
        });
    }

    // --- Device and page records ---------------------------------------------

    /// Record a flush of pending drawing to the destination device.
    pub fn flush(&mut self) {
        self.log.push(ContextOp::Flush);
    }

    /// Record a synchronization point with the destination device.
    pub fn synchronize(&mut self) {
        self.log.push(ContextOp::Synchronize);
    }

    /// Record the start of a page.
    pub fn begin_page(&mut self) {
        self.log.push(ContextOp::BeginPage);
    }

    /// Record the end of the current page.
    pub fn end_page(&mut self) {
        self.log.push(ContextOp::EndPage);
    }

    // --- Rectangle painting ---------------------------------------------------

    /// Paint a rectangle in the given mode.
    pub fn draw_rect(&mut self, rect: [f64; 4], mode: PathDrawMode) {
        self.log.push(ContextOp::DrawRect { rect, mode });
    }

    /// Stroke a rectangle with the current stroke attributes.
    pub fn stroke_rect(&mut self, rect: [f64; 4]) {
        self.log.push(ContextOp::StrokeRect { rect });
    }

    /// Stroke a rectangle with an explicit width, leaving the tracked line
    /// width unchanged.
    pub fn stroke_rect_with_width(&mut self, rect: [f64; 4], width: f64) {
        self.log.push(ContextOp::StrokeRectWithWidth { rect, width });
    }

    /// Fill a rectangle with the current fill color.
    pub fn fill_rect(&mut self, rect: [f64; 4]) {
        self.log.push(ContextOp::FillRect { rect });
    }

    /// Filling a list of rectangles is not supported by this backend.
    pub fn fill_rects(&mut self, _rects: &[[f64; 4]]) -> Result<(), RecordError> {
        Err(RecordError::NotSupported { op: "fill_rects" })
    }

    /// Clear a rectangle to transparent.
    pub fn clear_rect(&mut self, rect: [f64; 4]) {
        self.log.push(ContextOp::ClearRect { rect });
    }

    /// Clear the whole surface to a color.
    pub fn clear(&mut self, color: Color) {
        self.log.push(ContextOp::Clear {
            color: color.components,
        });
    }

    // --- Clipping ---------------------------------------------------------------

    /// Clip to the active path using the non-zero winding rule.
    pub fn clip(&mut self) {
        self.log.push(ContextOp::Clip);
    }

    /// Clip to the active path using the even-odd rule.
    pub fn even_odd_clip(&mut self) {
        self.log.push(ContextOp::EvenOddClip);
    }

    /// Clip to a rectangle.
    pub fn clip_to_rect(&mut self, rect: [f64; 4]) {
        self.log.push(ContextOp::ClipToRect { rect });
    }

    /// Clip to the union of several rectangles.
    pub fn clip_to_rects(&mut self, rects: &[[f64; 4]]) {
        self.log.push(ContextOp::ClipToRects {
            rects: rects.to_vec(),
        });
    }

    // --- Path painting -------------------------------------------------------

    /// Stroke the active path, then start a fresh one.
    pub fn stroke_path(&mut self) {
        let pth = self.consume_path();
        self.log.push(ContextOp::StrokePath { pth });
        self.reset_path();
    }

    /// Fill the active path (non-zero winding), then start a fresh one.
    pub fn fill_path(&mut self) {
        let pth = self.consume_path();
        self.log.push(ContextOp::FillPath { pth });
        self.reset_path();
    }

    /// Fill the active path (even-odd), then start a fresh one.
    pub fn eof_fill_path(&mut self) {
        let pth = self.consume_path();
        self.log.push(ContextOp::EofFillPath { pth });
        self.reset_path();
    }

    /// Paint the active path in the given mode, then start a fresh one.
    pub fn draw_path(&mut self, mode: PathDrawMode) {
        let pth = self.consume_path();
        self.log.push(ContextOp::DrawPath { pth, mode });
        self.reset_path();
    }

    /// Stamp a path at each of the given points.
    ///
    /// The path argument is flushed and referenced by id; the active path is
    /// not consumed.
    pub fn draw_path_at_points(
        &mut self,
        points: &[Point],
        path: &mut CompiledPath,
        mode: PathDrawMode,
    ) {
        let snapshot = path.flush();
        let pth = snapshot.id;
        self.retain_snapshot(snapshot);
        self.log.push(ContextOp::DrawPathAtPoints {
            pth,
            points: points.iter().map(|p| [p.x, p.y]).collect(),
            mode,
        });
    }

    // --- Images ---------------------------------------------------------------

    /// Draw an image, inlining its pixels into the log.
    ///
    /// `rect` is the destination rectangle; `None` draws at the image's
    /// natural bounds.
    pub fn draw_image(&mut self, image: ImageData, rect: Option<[f64; 4]>) {
        self.log.push(ContextOp::DrawImage { img: image, rect });
    }

    // --- Text -------------------------------------------------------------------

    /// Select a font by face name.
    pub fn select_font(&mut self, face: &str, size: f64, encoding: &str) {
        self.log.push(ContextOp::SelectFont {
            face: face.to_string(),
            size,
            encoding: encoding.to_string(),
        });
    }

    /// Set the font from a descriptor.
    pub fn set_font(&mut self, font: &Font) {
        self.log.push(ContextOp::SetFont { font: font.clone() });
    }

    /// Change only the font size.
    pub fn set_font_size(&mut self, size: f64) {
        self.log.push(ContextOp::SetFontSize { size });
    }

    /// Set inter-character spacing.
    pub fn set_character_spacing(&mut self, spacing: f64) {
        self.log.push(ContextOp::SetCharacterSpacing { spacing });
    }

    /// Set the text rendering mode.
    pub fn set_text_drawing_mode(&mut self, mode: TextDrawMode) {
        self.log.push(ContextOp::SetTextDrawingMode { mode });
    }

    /// Set the text position.
    ///
    /// Text state is context-level: it is not saved or restored by the
    /// graphics-state stack.
    pub fn set_text_position(&mut self, x: f64, y: f64) {
        self.text_position = Point::new(x, y);
        self.log.push(ContextOp::SetTextPosition { pos: [x, y] });
    }

    /// The current text position.
    pub fn get_text_position(&self) -> Point {
        self.text_position
    }

    /// Set the text transform matrix.
    pub fn set_text_matrix(&mut self, matrix: Affine) {
        self.text_matrix = matrix;
        self.log.push(ContextOp::SetTextMatrix {
            matrix: matrix.as_coeffs(),
        });
    }

    /// The current text transform matrix.
    pub fn get_text_matrix(&self) -> Affine {
        self.text_matrix
    }

    /// Show text at the current text position, or at an explicit point.
    ///
    /// Glyph metrics are a consumer concern, so the tracked text position
    /// does not advance.
    pub fn show_text(&mut self, text: &str, pos: Option<Point>) {
        self.log.push(ContextOp::ShowText {
            text: text.to_string(),
            pos: pos.map(|p| [p.x, p.y]),
        });
    }

    /// Show text at an explicit point.
    pub fn show_text_at_point(&mut self, text: &str, x: f64, y: f64) {
        self.log.push(ContextOp::ShowTextAtPoint {
            text: text.to_string(),
            pos: [x, y],
        });
    }

    // --- Unsupported operations ---------------------------------------------

    /// Fill color spaces are not supported by this backend.
    pub fn set_fill_color_space(&mut self) -> Result<(), RecordError> {
        Err(RecordError::NotSupported {
            op: "set_fill_color_space",
        })
    }

    /// Stroke color spaces are not supported by this backend.
    pub fn set_stroke_color_space(&mut self) -> Result<(), RecordError> {
        Err(RecordError::NotSupported {
            op: "set_stroke_color_space",
        })
    }

    /// Rendering intents are not supported by this backend.
    pub fn set_rendering_intent(&mut self) -> Result<(), RecordError> {
        Err(RecordError::NotSupported {
            op: "set_rendering_intent",
        })
    }

    /// Raw glyph runs are not supported by this backend; record text with
    /// [`show_text`](Self::show_text) instead.
    pub fn show_glyphs(&mut self) -> Result<(), RecordError> {
        Err(RecordError::NotSupported { op: "show_glyphs" })
    }

    /// Flatness has no meaning for a recording backend.
    pub fn set_flatness(&mut self, _flatness: f64) -> Result<(), RecordError> {
        Err(RecordError::NotSupported { op: "set_flatness" })
    }

    // --- Internals -----------------------------------------------------------

    fn alloc_path_id(&mut self) -> PathId {
        let id = PathId(self.next_path, 0);
        self.next_path += 1;
        id
    }

    /// Flush the active path into the definition table and return its id.
    fn consume_path(&mut self) -> PathId {
        let snapshot = self.path.flush();
        let id = snapshot.id;
        self.retain_snapshot(snapshot);
        id
    }

    fn reset_path(&mut self) {
        let id = self.alloc_path_id();
        self.path = CompiledPath::new(id);
    }

    /// Record a snapshot and its embedded dependencies, dependencies first,
    /// skipping ids the table already holds.
    fn retain_snapshot(&mut self, snapshot: PathSnapshot) {
        for dep in snapshot.deps.iter() {
            self.retain_snapshot(dep.clone());
        }
        if !self.paths.iter().any(|known| known.id == snapshot.id) {
            self.paths.push(snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::FRAC_PI_2;

    #[test]
    fn transforms_compose_into_the_ctm() {
        let mut gc = GraphicsContext::new(100, 100);
        gc.translate_ctm(10.0, 20.0);
        gc.scale_ctm(2.0, 3.0);
        let expected = Affine::translate((10.0, 20.0)) * Affine::scale_non_uniform(2.0, 3.0);
        assert_eq!(gc.get_ctm(), expected);
        assert_eq!(gc.log().len(), 2);

        gc.concat_ctm(Affine::rotate(FRAC_PI_2));
        assert_eq!(gc.get_ctm(), expected * Affine::rotate(FRAC_PI_2));
    }

    #[test]
    fn nested_save_restore_round_trips_the_state() {
        let mut gc = GraphicsContext::new(10, 10);
        let initial = gc.get_ctm();
        gc.save_state();
        gc.scale_ctm(2.0, 2.0);
        gc.save_state();
        gc.rotate_ctm(1.0);
        gc.set_line_width(5.0);
        gc.restore_state().expect("stack has two saves");
        assert_eq!(gc.state().line_width, 1.0);
        gc.restore_state().expect("stack has one save");
        assert_eq!(gc.get_ctm(), initial);
        // push, smtx, push, rmtx, stlw, pop-, pop-
        assert_eq!(gc.log().len(), 7);
        assert_eq!(gc.log()[0], ContextOp::SaveState);
        assert_eq!(gc.log()[6], ContextOp::RestoreState);
    }

    #[test]
    fn unbalanced_restore_underflows_and_logs_nothing() {
        let mut gc = GraphicsContext::new(10, 10);
        assert!(matches!(
            gc.restore_state(),
            Err(RecordError::StateUnderflow)
        ));
        assert!(gc.log().is_empty());
    }

    #[test]
    fn with_state_scopes_changes() {
        let mut gc = GraphicsContext::new(10, 10);
        let answer = gc.with_state(|gc| {
            gc.set_alpha(0.5);
            gc.scale_ctm(4.0, 4.0);
            42
        });
        assert_eq!(answer, 42);
        assert_eq!(gc.state().alpha, 1.0);
        assert_eq!(gc.get_ctm(), Affine::IDENTITY);
        assert_eq!(gc.log().len(), 4);
    }

    #[test]
    fn restore_does_not_touch_text_state() {
        let mut gc = GraphicsContext::new(10, 10);
        gc.save_state();
        gc.set_text_position(5.0, 6.0);
        gc.set_text_matrix(Affine::translate((1.0, 1.0)));
        gc.restore_state().expect("stack has one save");
        assert_eq!(gc.get_text_position(), Point::new(5.0, 6.0));
        assert_eq!(gc.get_text_matrix(), Affine::translate((1.0, 1.0)));
    }

    #[test]
    fn paint_setters_track_live_state() {
        let mut gc = GraphicsContext::new(10, 10);
        gc.set_fill_color(Color::from_rgba8(255, 0, 0, 255));
        gc.set_stroke_color(Color::from_rgba8(0, 255, 0, 255));
        gc.set_line_width(3.0);
        gc.set_line_cap(LineCap::Round);
        gc.set_line_join(LineJoin::Bevel);
        gc.set_miter_limit(4.0);
        gc.set_line_dash(&[2.0, 1.0], 0.5);
        gc.set_antialias(false);
        gc.set_alpha(0.25);
        let state = gc.state();
        assert_eq!(state.fill_color, Color::from_rgba8(255, 0, 0, 255));
        assert_eq!(state.line_width, 3.0);
        assert_eq!(state.line_cap, LineCap::Round);
        assert_eq!(state.line_join, LineJoin::Bevel);
        assert_eq!(state.line_dash, [2.0, 1.0]);
        assert_eq!(state.dash_phase, 0.5);
        assert!(!state.antialias);
        assert_eq!(state.alpha, 0.25);
        assert_eq!(gc.log().len(), 9);
    }

    #[test]
    fn painting_consumes_the_path_and_starts_fresh() {
        let mut gc = GraphicsContext::new(10, 10);
        gc.move_to(0.0, 0.0);
        gc.line_to(5.0, 5.0);
        gc.stroke_path();
        assert!(gc.is_path_empty());
        assert_eq!(gc.path_definitions().len(), 1);
        assert_eq!(gc.path_definitions()[0].id, PathId(0, 0));
        assert_eq!(gc.log().len(), 1);
        assert_eq!(gc.log()[0], ContextOp::StrokePath { pth: PathId(0, 0) });

        // The fresh path has its own identity.
        gc.rect(0.0, 0.0, 2.0, 2.0);
        gc.fill_path();
        assert_eq!(gc.path_definitions().len(), 2);
        assert_eq!(gc.log()[1], ContextOp::FillPath { pth: PathId(1, 0) });
    }

    #[test]
    fn draw_path_modes_record_their_mode() {
        let mut gc = GraphicsContext::new(10, 10);
        gc.rect(0.0, 0.0, 1.0, 1.0);
        gc.draw_path(PathDrawMode::EofFillStroke);
        assert_eq!(
            gc.log()[0],
            ContextOp::DrawPath {
                pth: PathId(0, 0),
                mode: PathDrawMode::EofFillStroke,
            }
        );
        gc.rect(0.0, 0.0, 1.0, 1.0);
        gc.eof_fill_path();
        assert_eq!(gc.log()[1], ContextOp::EofFillPath { pth: PathId(1, 0) });
    }

    #[test]
    fn draw_path_at_points_leaves_the_active_path_alone() {
        let mut gc = GraphicsContext::new(10, 10);
        gc.move_to(9.0, 9.0);
        let mut marker = gc.get_empty_path();
        marker.rect(-1.0, -1.0, 2.0, 2.0);
        gc.draw_path_at_points(
            &[Point::new(0.0, 0.0), Point::new(5.0, 5.0)],
            &mut marker,
            PathDrawMode::Fill,
        );
        assert_eq!(gc.get_path_current_point(), Point::new(9.0, 9.0));
        assert_eq!(gc.path_definitions().len(), 1);
        assert_eq!(gc.path_definitions()[0].id, marker.id());
        assert!(matches!(
            &gc.log()[0],
            ContextOp::DrawPathAtPoints { points, .. } if points.len() == 2
        ));
    }

    #[test]
    fn stamping_twice_defines_the_path_once() {
        let mut gc = GraphicsContext::new(10, 10);
        let mut marker = gc.get_empty_path();
        marker.rect(0.0, 0.0, 1.0, 1.0);
        gc.draw_path_at_points(&[Point::new(0.0, 0.0)], &mut marker, PathDrawMode::Fill);
        gc.draw_path_at_points(&[Point::new(2.0, 2.0)], &mut marker, PathDrawMode::Fill);
        assert_eq!(gc.path_definitions().len(), 1);
        assert_eq!(gc.log().len(), 2);
    }

    #[test]
    fn embedded_paths_are_defined_before_their_dependents() {
        let mut gc = GraphicsContext::new(10, 10);
        let mut fragment = gc.get_empty_path();
        fragment.move_to(0.0, 0.0);
        fragment.line_to(1.0, 1.0);
        gc.move_to(5.0, 5.0);
        gc.add_path(&mut fragment);
        gc.fill_path();
        let defs = gc.path_definitions();
        assert_eq!(defs.len(), 2);
        assert_eq!(defs[0].id, fragment.id());
        assert_eq!(defs[1].id, PathId(0, 0));
    }

    #[test]
    fn line_set_lowers_to_move_line_pairs() {
        let mut gc = GraphicsContext::new(10, 10);
        gc.line_set(
            &[Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(9.0, 9.0)],
            &[Point::new(1.0, 0.0), Point::new(3.0, 0.0)],
        );
        assert_eq!(gc.active_path().ops().len(), 4);
        assert_eq!(gc.get_path_current_point(), Point::new(3.0, 0.0));
        assert!(gc.log().is_empty());
    }

    #[test]
    fn unsupported_operations_fail_without_logging() {
        let mut gc = GraphicsContext::new(10, 10);
        let results = [
            gc.set_fill_color_space(),
            gc.set_stroke_color_space(),
            gc.set_rendering_intent(),
            gc.show_glyphs(),
            gc.set_flatness(0.1),
            gc.fill_rects(&[[0.0, 0.0, 1.0, 1.0]]),
        ];
        for result in results {
            assert!(matches!(result, Err(RecordError::NotSupported { .. })));
        }
        assert!(gc.log().is_empty());
    }

    #[test]
    fn page_and_device_records_log_in_order() {
        let mut gc = GraphicsContext::new(10, 10);
        gc.begin_page();
        gc.fill_rect([0.0, 0.0, 5.0, 5.0]);
        gc.flush();
        gc.synchronize();
        gc.end_page();
        let opcodes: alloc::vec::Vec<&str> = gc.log().iter().map(ContextOp::opcode).collect();
        assert_eq!(opcodes, ["bpge", "frct", "flsh", "sync", "epge"]);
    }

    #[test]
    fn identical_call_sequences_produce_identical_logs() {
        let build = || {
            let mut gc = GraphicsContext::new(64, 64);
            gc.set_fill_color(Color::from_rgba8(10, 20, 30, 255));
            gc.move_to(0.0, 0.0);
            gc.line_to(8.0, 8.0);
            gc.fill_path();
            let mut marker = gc.get_empty_path();
            marker.rect(0.0, 0.0, 1.0, 1.0);
            gc.draw_path_at_points(&[Point::new(4.0, 4.0)], &mut marker, PathDrawMode::Stroke);
            gc
        };
        let a = build();
        let b = build();
        assert_eq!(a.log(), b.log());
        assert_eq!(a.path_definitions(), b.path_definitions());
    }
}
