/// Axis-aligned rectangle in normalized frame coordinates.
///
/// `(x, y)` is the top-left corner and all four components live in
/// [0, 1] relative to the source frame. The same type represents face
/// bounding boxes (detector output) and crop rectangles (smoother
/// output).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Top-left x coordinate
    pub x: f32,
    /// Top-left y coordinate
    pub y: f32,
    /// Width of the rectangle
    pub width: f32,
    /// Height of the rectangle
    pub height: f32,
}

impl Rect {
    /// Create a new Rect from top-left coordinates and dimensions.
    #[inline]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The whole source frame: `(0, 0, 1, 1)`.
    #[inline]
    pub fn full_frame() -> Self {
        Self::new(0.0, 0.0, 1.0, 1.0)
    }

    /// Create a Rect of the given size centered on a point.
    #[inline]
    pub fn centered_on(cx: f32, cy: f32, width: f32, height: f32) -> Self {
        Self {
            x: cx - width / 2.0,
            y: cy - height / 2.0,
            width,
            height,
        }
    }

    /// Get the center point of the rectangle.
    #[inline]
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Get the area of the rectangle.
    #[inline]
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// True when all four components are finite numbers.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
    }

    /// True when any component is non-finite or the extent is not
    /// strictly positive. Degenerate rects must never enter the
    /// smoother.
    pub fn is_degenerate(&self) -> bool {
        !self.is_finite() || self.width <= 0.0 || self.height <= 0.0
    }

    /// Slide the rectangle so it lies fully inside [0,1]² without
    /// changing its size. Extents larger than the frame are reduced to
    /// the frame, which pins the corresponding origin to 0. Non-finite
    /// components fall back to the full frame.
    pub fn clamp_to_frame(&self) -> Self {
        let this = if self.is_finite() {
            *self
        } else {
            self.sanitize(&Rect::full_frame())
        };
        let width = this.width.clamp(0.0, 1.0);
        let height = this.height.clamp(0.0, 1.0);
        Self {
            x: this.x.clamp(0.0, 1.0 - width),
            y: this.y.clamp(0.0, 1.0 - height),
            width,
            height,
        }
    }

    /// True when the rectangle lies fully inside [0,1]².
    pub fn is_in_frame(&self) -> bool {
        self.x >= 0.0
            && self.y >= 0.0
            && self.width >= 0.0
            && self.height >= 0.0
            && self.x + self.width <= 1.0 + f32::EPSILON
            && self.y + self.height <= 1.0 + f32::EPSILON
    }

    /// Component-wise linear interpolation toward `other` by factor `t`.
    #[inline]
    pub fn lerp(&self, other: &Rect, t: f32) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
            width: self.width + (other.width - self.width) * t,
            height: self.height + (other.height - self.height) * t,
        }
    }

    /// Largest absolute per-component difference to `other`.
    pub fn max_component_delta(&self, other: &Rect) -> f32 {
        (self.x - other.x)
            .abs()
            .max((self.y - other.y).abs())
            .max((self.width - other.width).abs())
            .max((self.height - other.height).abs())
    }

    /// Replace non-finite components with the matching component of
    /// `fallback`.
    pub fn sanitize(&self, fallback: &Rect) -> Self {
        let pick = |v: f32, fb: f32| if v.is_finite() { v } else { fb };
        Self {
            x: pick(self.x, fallback.x),
            y: pick(self.y, fallback.y),
            width: pick(self.width, fallback.width),
            height: pick(self.height, fallback.height),
        }
    }
}
