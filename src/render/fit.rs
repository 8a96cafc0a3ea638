// SPDX-License-Identifier: MPL-2.0
//! Uniform fit-to-bounds placement.
//!
//! The document is scaled by `min(canvas_w / view_w, canvas_h / view_h)` so
//! it is as large as possible without being clipped or distorted, and its
//! view box midpoint lands on the canvas center.

use tiny_skia::Transform;

/// Rectangle in document units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ViewBox {
    #[must_use]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn mid_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn mid_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// A view box that cannot be scaled (zero, negative or non finite size).
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }
}

/// Placement of a view box inside a canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitTransform {
    pub scale: f32,
    pub center_x: f32,
    pub center_y: f32,
    pub view_box: ViewBox,
}

impl FitTransform {
    /// Computes the placement of `view_box` in a `width` x `height` canvas.
    ///
    /// Returns `None` when nothing can be drawn: a degenerate view box, or a
    /// canvas with no area.
    #[must_use]
    pub fn compute(width: u32, height: u32, view_box: ViewBox) -> Option<Self> {
        if view_box.is_degenerate() || width == 0 || height == 0 {
            return None;
        }

        let width = width as f32;
        let height = height as f32;
        let x_ratio = width / view_box.width;
        let y_ratio = height / view_box.height;

        Some(Self {
            scale: x_ratio.min(y_ratio),
            center_x: width / 2.0,
            center_y: height / 2.0,
            view_box,
        })
    }

    /// Canvas transform: translate to center, scale, then move the view box
    /// midpoint to the origin.
    pub fn to_transform(&self) -> Transform {
        Transform::from_translate(self.center_x, self.center_y)
            .pre_scale(self.scale, self.scale)
            .pre_translate(-self.view_box.mid_x(), -self.view_box.mid_y())
    }

    /// Area covered by the drawn document as `(left, top, width, height)` in
    /// canvas pixels.
    pub fn placed_bounds(&self) -> (f32, f32, f32, f32) {
        let width = self.view_box.width * self.scale;
        let height = self.view_box.height * self.scale;
        (
            self.center_x - width / 2.0,
            self.center_y - height / 2.0,
            width,
            height,
        )
    }
}
