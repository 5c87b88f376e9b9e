//! Geometry and transform utilities.
//!
//! Pure functions that turn pointer deltas and handle drags into position,
//! size and rotation updates. Coordinates are scene units with the origin at
//! the top-left and +Y pointing down; angles are degrees, clockwise.
//! An element's position is its rotation origin (its unrotated top-left).

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A point (or vector) in scene coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Width and height in scene units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }

    /// Clamp both axes to `min`; non-finite values collapse to `min` too.
    pub fn clamped_min(&self, min: f64) -> Self {
        Self::new(at_least(self.width, min), at_least(self.height, min))
    }
}

/// Position, size and rotation of a box on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Frame {
    pub position: Point,
    pub size: Size,
    pub rotation: f64,
}

impl Frame {
    pub fn new(position: Point, size: Size, rotation: f64) -> Self {
        Self {
            position,
            size,
            rotation,
        }
    }

    /// Center of the rotated box.
    pub fn center(&self) -> Point {
        self.position + rotate(self.half_extent(), self.rotation)
    }

    /// Corners in order top-left, top-right, bottom-right, bottom-left.
    pub fn corners(&self) -> [Point; 4] {
        let w = self.size.width;
        let h = self.size.height;
        [
            Point::new(0.0, 0.0),
            Point::new(w, 0.0),
            Point::new(w, h),
            Point::new(0.0, h),
        ]
        .map(|local| self.position + rotate(local, self.rotation))
    }

    /// World position of one resize anchor.
    pub fn anchor_point(&self, anchor: Anchor) -> Point {
        let corners = self.corners();
        match anchor {
            Anchor::TopLeft => corners[0],
            Anchor::TopRight => corners[1],
            Anchor::BottomRight => corners[2],
            Anchor::BottomLeft => corners[3],
        }
    }

    /// Hit test against the rotated box.
    pub fn contains(&self, point: Point) -> bool {
        let local = rotate(point - self.position, -self.rotation);
        local.x >= 0.0
            && local.y >= 0.0
            && local.x <= self.size.width
            && local.y <= self.size.height
    }

    fn half_extent(&self) -> Point {
        Point::new(self.size.width / 2.0, self.size.height / 2.0)
    }
}

/// Corner handles of the selection overlay. Edge midpoints are not offered,
/// so a handle drag always changes both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Anchor {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Anchor {
    pub const ALL: [Anchor; 4] = [
        Anchor::TopLeft,
        Anchor::TopRight,
        Anchor::BottomLeft,
        Anchor::BottomRight,
    ];
}

/// Normalize degrees into `[0, 360)`.
pub fn normalize_rotation(degrees: f64) -> f64 {
    ((degrees % 360.0) + 360.0) % 360.0
}

/// Clamp `value` into `[min, max]`, returning `None` for NaN.
pub fn clamp_finite(value: f64, min: f64, max: f64) -> Option<f64> {
    if value.is_nan() {
        None
    } else {
        Some(value.clamp(min, max))
    }
}

/// `value` if it is finite and at least `min`, otherwise `min`.
pub fn at_least(value: f64, min: f64) -> f64 {
    if value.is_finite() && value >= min {
        value
    } else {
        min
    }
}

/// Rotate a vector clockwise by `degrees` (screen coordinates, +Y down).
pub fn rotate(v: Point, degrees: f64) -> Point {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Point::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Snap `degrees` to the nearest multiple of `step` when within `tolerance`.
///
/// The result is always normalized into `[0, 360)`.
pub fn snap_rotation(degrees: f64, step: f64, tolerance: f64) -> f64 {
    if step <= 0.0 {
        return normalize_rotation(degrees);
    }
    let nearest = (degrees / step).round() * step;
    if (degrees - nearest).abs() <= tolerance {
        normalize_rotation(nearest)
    } else {
        normalize_rotation(degrees)
    }
}

/// Absolute rotation implied by a rotation handle held at `pointer`.
///
/// The handle sits above the top edge, so a pointer straight above the
/// center means 0 degrees.
pub fn handle_rotation(center: Point, pointer: Point) -> f64 {
    let d = pointer - center;
    normalize_rotation(d.y.atan2(d.x).to_degrees() + 90.0)
}

/// Rotate a frame to `rotation` about its own center.
pub fn rotate_about_center(frame: &Frame, rotation: f64) -> Frame {
    let center = frame.center();
    let rotation = normalize_rotation(rotation);
    Frame {
        position: center - rotate(frame.half_extent(), rotation),
        size: frame.size,
        rotation,
    }
}

/// Resize `start` by dragging `anchor` by `delta` (scene units).
///
/// The corner opposite the anchor stays fixed. Returns `None` when the
/// resulting box would be smaller than `min_size` on either axis; callers
/// keep the previous box in that case.
pub fn resize_from_anchor(start: &Frame, anchor: Anchor, delta: Point, min_size: f64) -> Option<Frame> {
    let local = rotate(delta, -start.rotation);
    let (dw, dh, shift) = match anchor {
        Anchor::TopLeft => (-local.x, -local.y, local),
        Anchor::TopRight => (local.x, -local.y, Point::new(0.0, local.y)),
        Anchor::BottomLeft => (-local.x, local.y, Point::new(local.x, 0.0)),
        Anchor::BottomRight => (local.x, local.y, Point::default()),
    };

    let size = Size::new(start.size.width + dw, start.size.height + dh);
    if !(size.width >= min_size && size.height >= min_size) {
        return None;
    }

    Some(Frame {
        position: start.position + rotate(shift, start.rotation),
        size,
        rotation: start.rotation,
    })
}

/// Shrink `size` to fit inside `bounds`, preserving aspect ratio.
/// Sizes that already fit are returned unchanged.
pub fn fit_within(size: Size, bounds: Size) -> Size {
    if size.width <= 0.0 || size.height <= 0.0 {
        return size;
    }
    let ratio = (bounds.width / size.width)
        .min(bounds.height / size.height)
        .min(1.0);
    size.scaled(ratio)
}

/// Uniform contain-fit of a source inside a stage, centered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub scale: f64,
    pub offset: Point,
}

/// Scale `source` uniformly so it fits `stage`, and center it.
pub fn contain_fit(source: Size, stage: Size) -> Placement {
    if source.width <= 0.0 || source.height <= 0.0 {
        return Placement {
            scale: 1.0,
            offset: Point::default(),
        };
    }
    let scale = (stage.width / source.width).min(stage.height / source.height);
    Placement {
        scale,
        offset: Point::new(
            (stage.width - source.width * scale) / 2.0,
            (stage.height - source.height * scale) / 2.0,
        ),
    }
}
