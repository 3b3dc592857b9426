// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compiled paths: append-only geometry logs with tracked state.

use alloc::format;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::f64::consts::{FRAC_PI_2, PI, TAU};

use kurbo::{Point, Rect};
use smallvec::SmallVec;

use crate::ops::{PathId, PathOp};
use crate::RecordError;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `sin`/`cos`

/// Angles at which an arc crosses a coordinate axis, indexed so that
/// `QUADRANT_AXES[q - 1]` is the angle beginning quadrant `q`.
const QUADRANT_AXES: [f64; 4] = [0.0, FRAC_PI_2, PI, 3.0 * FRAC_PI_2];

/// An immutable, flushed view of a [`CompiledPath`].
///
/// Snapshots are cheap to clone and freely shareable; the op list behind the
/// `Arc` never changes. `deps` holds the snapshots of every path this one
/// embeds via `add_path`, frozen at embed time, so a snapshot is always
/// replayable on its own.
#[derive(Clone, Debug, PartialEq)]
pub struct PathSnapshot {
    /// Version token of the path at the moment it was flushed.
    pub id: PathId,
    /// The geometry records, in call order.
    pub ops: Arc<[PathOp]>,
    /// Frozen snapshots of embedded paths.
    pub deps: Arc<[PathSnapshot]>,
}

/// An append-only log of path-construction operations.
///
/// Geometry calls append records and incrementally maintain the current
/// point and bounding box, so queries are O(1) reads and never replay the
/// log. [`flush`](Self::flush) freezes the content into a [`PathSnapshot`];
/// mutating the path afterwards mints the next generation of its [`PathId`],
/// making every recorded reference a version token.
#[derive(Clone, Debug)]
pub struct CompiledPath {
    id: PathId,
    ops: Vec<PathOp>,
    deps: Vec<PathSnapshot>,
    start_point: Point,
    current_point: Point,
    extent: Option<Rect>,
    empty: bool,
    snapshot: Option<PathSnapshot>,
}

impl CompiledPath {
    /// Create a pristine path with the given identity.
    ///
    /// Paths meant to be embedded or painted should be minted by their
    /// context ([`GraphicsContext::get_empty_path`]) so their ids are unique
    /// within that context's logs.
    ///
    /// [`GraphicsContext::get_empty_path`]: crate::GraphicsContext::get_empty_path
    pub fn new(id: PathId) -> Self {
        Self {
            id,
            ops: Vec::new(),
            deps: Vec::new(),
            start_point: Point::ZERO,
            current_point: Point::ZERO,
            extent: None,
            empty: true,
            snapshot: None,
        }
    }

    /// The path's current version token.
    pub fn id(&self) -> PathId {
        self.id
    }

    /// Whether any geometry has been recorded since the last reset.
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    /// Whether the path has records not yet captured by a flush.
    pub fn is_dirty(&self) -> bool {
        !self.ops.is_empty() && self.snapshot.is_none()
    }

    /// The point the next segment continues from.
    pub fn get_current_point(&self) -> Point {
        self.current_point
    }

    /// The box bounding every point the path has touched.
    ///
    /// Curve control points are included, so the box is conservative for
    /// curved segments. A path with no geometry reports [`Rect::ZERO`].
    pub fn get_bounding_box(&self) -> Rect {
        self.extent.unwrap_or(Rect::ZERO)
    }

    /// The recorded geometry, in call order.
    pub fn ops(&self) -> &[PathOp] {
        &self.ops
    }

    /// Snapshots of paths embedded via [`add_path`](Self::add_path).
    pub fn deps(&self) -> &[PathSnapshot] {
        &self.deps
    }

    /// Reset to a pristine path, discarding all recorded geometry.
    ///
    /// Nothing is logged. If the discarded content had been flushed, the id
    /// moves to its next generation so references to the old content stay
    /// unambiguous.
    pub fn begin_path(&mut self) {
        if self.snapshot.take().is_some() {
            self.id = self.id.next_generation();
        }
        self.ops.clear();
        self.deps.clear();
        self.start_point = Point::ZERO;
        self.current_point = Point::ZERO;
        self.extent = None;
        self.empty = true;
    }

    /// Begin a new subpath at `(x, y)`.
    pub fn move_to(&mut self, x: f64, y: f64) {
        let p = Point::new(x, y);
        self.record(PathOp::MoveTo { pnt: [x, y] });
        self.start_point = p;
        self.current_point = p;
        self.expand(p);
    }

    /// Straight segment from the current point to `(x, y)`.
    pub fn line_to(&mut self, x: f64, y: f64) {
        let p = Point::new(x, y);
        self.record(PathOp::LineTo { to: [x, y] });
        self.current_point = p;
        self.expand(p);
    }

    /// Polyline through `points`. An empty slice records nothing.
    pub fn lines(&mut self, points: &[Point]) {
        let Some(last) = points.last() else {
            return;
        };
        self.record(PathOp::Lines {
            pnts: points.iter().map(|p| [p.x, p.y]).collect(),
        });
        for p in points {
            self.expand(*p);
        }
        self.current_point = *last;
    }

    /// Cubic Bézier segment from the current point.
    ///
    /// The extent expands by both control points as well as the endpoint,
    /// bounding the curve conservatively by its hull.
    pub fn curve_to(&mut self, cp1x: f64, cp1y: f64, cp2x: f64, cp2y: f64, x: f64, y: f64) {
        self.record(PathOp::CurveTo {
            cp1: [cp1x, cp1y],
            cp2: [cp2x, cp2y],
            to: [x, y],
        });
        self.expand(Point::new(cp1x, cp1y));
        self.expand(Point::new(cp2x, cp2y));
        self.expand(Point::new(x, y));
        self.current_point = Point::new(x, y);
    }

    /// Quadratic Bézier segment from the current point.
    pub fn quad_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64) {
        self.record(PathOp::QuadCurveTo {
            cp: [cpx, cpy],
            to: [x, y],
        });
        self.expand(Point::new(cpx, cpy));
        self.expand(Point::new(x, y));
        self.current_point = Point::new(x, y);
    }

    /// Axis-aligned rectangle subpath. The current point becomes the
    /// rectangle's origin.
    pub fn rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.record(PathOp::Rect { rect: [x, y, w, h] });
        self.expand_rect([x, y, w, h]);
        self.current_point = Point::new(x, y);
    }

    /// Several rectangle subpaths. The current point becomes the last
    /// rectangle's origin. An empty slice records nothing.
    pub fn rects(&mut self, rects: &[[f64; 4]]) {
        let Some(last) = rects.last() else {
            return;
        };
        let last_origin = Point::new(last[0], last[1]);
        self.record(PathOp::Rects {
            rects: rects.to_vec(),
        });
        for r in rects {
            self.expand_rect(*r);
        }
        self.current_point = last_origin;
    }

    /// Circular arc around `(x, y)`.
    ///
    /// Angles are radians and must be finite and within `[0, 2π]`; the
    /// current point becomes the arc endpoint at `end_angle`. The extent
    /// expands by both arc endpoints and by each axis-crossing point the
    /// sweep passes. When both angles fall in the same quadrant only the
    /// endpoints bound the arc, which under-reports a sweep that goes the
    /// long way around; this conservative classification is part of the
    /// recorded contract.
    pub fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        clockwise: bool,
    ) -> Result<(), RecordError> {
        // Classify before touching any state so a bad angle leaves the path
        // exactly as it was.
        let center = Point::new(x, y);
        let bounds = arc_bound_points(center, radius, start_angle, end_angle, clockwise)?;
        self.record(PathOp::Arc {
            cntr: [x, y],
            rad: radius,
            start: start_angle,
            end: end_angle,
            clock: clockwise,
        });
        for p in &bounds {
            self.expand(*p);
        }
        self.current_point = point_on_circle(center, radius, end_angle);
        Ok(())
    }

    /// Arc through the corner at `(x1, y1)` toward `(x2, y2)`.
    ///
    /// Bounded conservatively by the current point and both tangent-line
    /// points. The current point becomes `(x2, y2)`.
    pub fn arc_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, radius: f64) {
        let from = self.current_point;
        self.record(PathOp::ArcTo {
            p1: [x1, y1],
            p2: [x2, y2],
            rad: radius,
        });
        self.expand(from);
        self.expand(Point::new(x1, y1));
        self.expand(Point::new(x2, y2));
        self.current_point = Point::new(x2, y2);
    }

    /// Embed another path by reference.
    ///
    /// The other path is flushed and its snapshot retained as a dependency,
    /// freezing the embedded content at this moment: mutating `other`
    /// afterwards mints a new generation of its id and cannot change what
    /// was embedded here. The current point is unchanged.
    pub fn add_path(&mut self, other: &mut Self) {
        let snapshot = other.flush();
        self.record(PathOp::AddPath { pth: snapshot.id });
        if !other.is_empty() {
            let bounds = other.get_bounding_box();
            self.expand(Point::new(bounds.x0, bounds.y0));
            self.expand(Point::new(bounds.x1, bounds.y1));
        }
        self.deps.push(snapshot);
    }

    /// Close the current subpath with a segment back to its start.
    ///
    /// Records a `line_to` only when the path is non-empty and the current
    /// point differs from the subpath start, so closing twice is the same as
    /// closing once.
    pub fn close_path(&mut self) {
        if self.empty || self.current_point == self.start_point {
            return;
        }
        let start = self.start_point;
        self.line_to(start.x, start.y);
    }

    /// Freeze the path into an immutable snapshot.
    ///
    /// Idempotent: flushing again without intervening mutation returns the
    /// same snapshot.
    pub fn flush(&mut self) -> PathSnapshot {
        if let Some(snapshot) = &self.snapshot {
            return snapshot.clone();
        }
        let snapshot = PathSnapshot {
            id: self.id,
            ops: self.ops.as_slice().into(),
            deps: self.deps.as_slice().into(),
        };
        self.snapshot = Some(snapshot.clone());
        snapshot
    }

    /// Append one record, minting the next generation when the previous
    /// content had already been flushed.
    fn record(&mut self, op: PathOp) {
        if self.snapshot.take().is_some() {
            self.id = self.id.next_generation();
        }
        self.ops.push(op);
        self.empty = false;
    }

    fn expand(&mut self, p: Point) {
        self.extent = Some(match self.extent {
            Some(extent) => extent.union_pt(p),
            None => Rect::from_points(p, p),
        });
    }

    fn expand_rect(&mut self, [x, y, w, h]: [f64; 4]) {
        self.expand(Point::new(x, y));
        self.expand(Point::new(x + w, y + h));
    }
}

fn point_on_circle(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

/// Quadrant of an angle in `[0, 2π]`, numbered 1 through 4.
///
/// Angles exactly on an axis classify into the following quadrant; `2π`
/// wraps around to quadrant 1.
fn quadrant_of(angle: f64, op: &'static str) -> Result<usize, RecordError> {
    if !angle.is_finite() || !(0.0..=TAU).contains(&angle) {
        return Err(RecordError::InvalidGeometry {
            op,
            detail: format!("angle {angle} is not within [0, 2\u{3c0}]"),
        });
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "angle / (pi/2) is within [0.0, 4.0] here"
    )]
    let q = (angle / FRAC_PI_2) as usize;
    Ok(q % 4 + 1)
}

/// Points bounding a circular arc: both endpoints plus every axis-crossing
/// point between the start and end quadrants in the traversal direction.
fn arc_bound_points(
    center: Point,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
    clockwise: bool,
) -> Result<SmallVec<[Point; 6]>, RecordError> {
    let start_quadrant = quadrant_of(start_angle, "arc")?;
    let end_quadrant = quadrant_of(end_angle, "arc")?;
    let mut points = SmallVec::new();
    points.push(point_on_circle(center, radius, start_angle));
    points.push(point_on_circle(center, radius, end_angle));
    let mut q = start_quadrant;
    while q != end_quadrant {
        if clockwise {
            points.push(point_on_circle(center, radius, QUADRANT_AXES[q - 1]));
            q = if q == 1 { 4 } else { q - 1 };
        } else {
            points.push(point_on_circle(center, radius, QUADRANT_AXES[q % 4]));
            q = q % 4 + 1;
        }
    }
    Ok(points)
}
