// SPDX-License-Identifier: MPL-2.0
//! Drawing surfaces and repaint notification.

use crate::render::document::SvgDocument;
use tiny_skia::{Color, Pixmap, Transform};

/// A 2D surface an icon can be painted into.
pub trait Surface {
    /// Size in device pixels.
    fn size(&self) -> (u32, u32);

    /// Resets every pixel to transparent.
    fn clear(&mut self);

    /// Draws the whole document through `transform`.
    fn draw(&mut self, document: &SvgDocument, transform: Transform);
}

/// Receives repaint requests from a widget whose content changed.
pub trait Invalidate {
    fn invalidate(&mut self);
}

impl<F: FnMut()> Invalidate for F {
    fn invalidate(&mut self) {
        self()
    }
}

/// Software canvas backed by a tiny-skia pixmap.
///
/// A canvas with no area holds no pixmap; drawing into it does nothing.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixmap: Option<Pixmap>,
}

impl Canvas {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixmap: Pixmap::new(width, height),
        }
    }

    /// Reallocates the backing pixmap. Returns `true` if the size changed.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if self.width == width && self.height == height {
            return false;
        }
        *self = Self::new(width, height);
        true
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixmap(&self) -> Option<&Pixmap> {
        self.pixmap.as_ref()
    }

    /// Straight (non premultiplied) RGBA bytes, row major.
    pub fn to_rgba(&self) -> Option<Vec<u8>> {
        let pixmap = self.pixmap.as_ref()?;
        let mut rgba = Vec::with_capacity(pixmap.data().len());
        for pixel in pixmap.pixels() {
            let color = pixel.demultiply();
            rgba.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
        }
        Some(rgba)
    }

    /// Number of pixels that are not fully transparent.
    pub fn painted_pixels(&self) -> usize {
        self.pixmap
            .as_ref()
            .map(|pixmap| pixmap.pixels().iter().filter(|p| p.alpha() > 0).count())
            .unwrap_or(0)
    }
}

impl Surface for Canvas {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        if let Some(pixmap) = self.pixmap.as_mut() {
            pixmap.fill(Color::TRANSPARENT);
        }
    }

    fn draw(&mut self, document: &SvgDocument, transform: Transform) {
        if let Some(pixmap) = self.pixmap.as_mut() {
            document.render(transform, &mut pixmap.as_mut());
        }
    }
}

impl Surface for Pixmap {
    fn size(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn clear(&mut self) {
        self.fill(Color::TRANSPARENT);
    }

    fn draw(&mut self, document: &SvgDocument, transform: Transform) {
        document.render(transform, &mut self.as_mut());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10"><rect width="10" height="10" fill="#0000ff"/></svg>"##;

    #[test]
    fn zero_sized_canvas_has_no_pixmap() {
        let mut canvas = Canvas::new(0, 16);
        assert!(canvas.pixmap().is_none());
        assert!(canvas.to_rgba().is_none());
        canvas.clear();
        assert_eq!(canvas.painted_pixels(), 0);
    }

    #[test]
    fn resize_reports_changes() {
        let mut canvas = Canvas::new(4, 4);
        assert!(!canvas.resize(4, 4));
        assert!(canvas.resize(8, 2));
        assert_eq!(canvas.size(), (8, 2));
        assert_eq!(canvas.to_rgba().map(|d| d.len()), Some(8 * 2 * 4));
    }

    #[test]
    fn draw_then_clear_leaves_canvas_transparent() {
        let document = SvgDocument::from_data(SQUARE.as_bytes()).expect("svg should parse");
        let mut canvas = Canvas::new(10, 10);

        canvas.draw(&document, Transform::identity());
        assert_eq!(canvas.painted_pixels(), 100);

        canvas.clear();
        assert_eq!(canvas.painted_pixels(), 0);
    }

    #[test]
    fn rgba_output_is_demultiplied() {
        let document = SvgDocument::from_data(SQUARE.as_bytes()).expect("svg should parse");
        let mut canvas = Canvas::new(10, 10);
        canvas.draw(&document, Transform::identity());

        let rgba = canvas.to_rgba().expect("canvas has pixels");
        assert_eq!(&rgba[0..4], &[0, 0, 255, 255]);
    }

    #[test]
    fn closures_receive_invalidations() {
        let mut count = 0;
        {
            let mut observer = || count += 1;
            observer.invalidate();
            observer.invalidate();
        }
        assert_eq!(count, 2);
    }

    #[test]
    fn pixmap_is_a_surface() {
        let mut pixmap = Pixmap::new(3, 2).expect("pixmap should allocate");
        assert_eq!(Surface::size(&pixmap), (3, 2));
        Surface::clear(&mut pixmap);
        assert!(pixmap.pixels().iter().all(|p| p.alpha() == 0));
    }
}
