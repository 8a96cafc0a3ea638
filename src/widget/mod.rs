// SPDX-License-Identifier: MPL-2.0
//! The icon widget and its iced view.

pub mod icon;
mod view;

pub use icon::{Icon, PaintOutcome, PaintState};
