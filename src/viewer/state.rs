use serde::{Deserialize, Serialize};

/// Smallest allowed zoom
pub const MIN_SCALE: f64 = 0.2;
/// Largest allowed zoom
pub const MAX_SCALE: f64 = 5.0;
/// Scale multiplier for one wheel step towards the screen
pub const ZOOM_IN_FACTOR: f64 = 1.1;
/// Scale multiplier for one wheel step away from the screen
pub const ZOOM_OUT_FACTOR: f64 = 0.9;

/// Viewport coordinate in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Wheel direction, derived from the sign of the vertical wheel delta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Negative deltas scroll up, which zooms in.
    pub fn from_wheel_delta(delta_y: f64) -> Self {
        if delta_y < 0.0 {
            Self::In
        } else {
            Self::Out
        }
    }

    pub fn factor(&self) -> f64 {
        match self {
            Self::In => ZOOM_IN_FACTOR,
            Self::Out => ZOOM_OUT_FACTOR,
        }
    }
}

/// Pan and zoom state of the modal viewer.
///
/// `drag_anchor` is only meaningful while `dragging` is set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewerState {
    pub scale: f64,
    pub translate: Point,
    pub dragging: bool,
    #[serde(skip)]
    pub drag_anchor: Point,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            translate: Point::ORIGIN,
            dragging: false,
            drag_anchor: Point::ORIGIN,
        }
    }
}

impl ViewerState {
    /// Back to identity scale and translation. Drag state is left alone.
    pub fn reset_transform(&mut self) {
        self.scale = 1.0;
        self.translate = Point::ORIGIN;
    }

    /// Zoom one step around `offset`, the pointer position relative to the
    /// displayed image's top-left corner.
    pub fn zoom_at(&mut self, offset: Point, direction: ZoomDirection) {
        let new_scale = clamp_scale(self.scale * direction.factor());
        let ratio = new_scale / self.scale - 1.0;

        self.translate.x -= offset.x * ratio;
        self.translate.y -= offset.y * ratio;
        self.scale = new_scale;
    }

    pub fn begin_drag(&mut self, pointer: Point) {
        self.dragging = true;
        self.drag_anchor = pointer - self.translate;
    }

    /// Returns whether the translation changed.
    pub fn continue_drag(&mut self, pointer: Point) -> bool {
        if !self.dragging {
            return false;
        }
        self.translate = pointer - self.drag_anchor;
        true
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Equality of the observable state, ignoring a stale drag anchor.
    pub fn same_as(&self, other: &ViewerState) -> bool {
        self.scale == other.scale
            && self.translate == other.translate
            && self.dragging == other.dragging
            && (!self.dragging || self.drag_anchor == other.drag_anchor)
    }
}

pub fn clamp_scale(scale: f64) -> f64 {
    scale.clamp(MIN_SCALE, MAX_SCALE)
}
