// SPDX-License-Identifier: MPL-2.0
//! iced integration for [`Icon`].
//!
//! The icon paints into its own software canvas; the view hands the pixels
//! to iced as an RGBA image inside a zero padding container so the frame
//! itself is invisible.

use crate::render::Canvas;
use crate::widget::icon::Icon;
use iced::widget::image::{Handle, Image};
use iced::widget::{container, Space};
use iced::{Element, Length};

impl Icon<Canvas> {
    /// Current canvas content as an image handle, if the canvas has area.
    pub fn image_handle(&self) -> Option<Handle> {
        let canvas = self.surface();
        let pixels = canvas.to_rgba()?;
        Some(Handle::from_rgba(canvas.width(), canvas.height(), pixels))
    }

    /// Widget showing the last painted canvas.
    ///
    /// Call [`Icon::paint_if_dirty`] from `update` so the pixels are current.
    pub fn view<'a, Message: 'a>(&self) -> Element<'a, Message> {
        let canvas = self.surface();
        let width = Length::Fixed(canvas.width() as f32);
        let height = Length::Fixed(canvas.height() as f32);

        let content: Element<'a, Message> = match self.image_handle() {
            Some(handle) => Image::new(handle).width(width).height(height).into(),
            None => Space::new().width(width).height(height).into(),
        };

        container(content).padding(0).into()
    }
}
