// SPDX-License-Identifier: MPL-2.0
//! SVG loading, placement and software rasterization.

pub mod document;
pub mod fit;
pub mod surface;

pub use document::SvgDocument;
pub use fit::{FitTransform, ViewBox};
pub use surface::{Canvas, Invalidate, Surface};
