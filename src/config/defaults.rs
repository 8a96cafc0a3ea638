// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Modules**: entry module and infrastructure filters for host discovery
//! - **Canvas**: default icon canvas size

// ==========================================================================
// Module Defaults
// ==========================================================================

/// Descriptor of the entry module when none is configured.
pub const ENTRY_MODULE: &str = "App, Version=1.0.0.0, Culture=neutral, PublicKeyToken=null";

/// Signing token carried by platform framework modules.
pub const PLATFORM_KEY_TOKEN: &str = "7cec85d7bea7798e";

/// Simple name of the markup processing module.
pub const MARKUP_MODULE: &str = "Xamarin.Forms.Xaml";

// ==========================================================================
// Canvas Defaults
// ==========================================================================

/// Default canvas width in pixels.
pub const CANVAS_WIDTH: u32 = 64;

/// Default canvas height in pixels.
pub const CANVAS_HEIGHT: u32 = 64;

/// Largest accepted canvas side, in pixels.
pub const MAX_CANVAS_SIDE: u32 = 8192;

const _: () = {
    assert!(CANVAS_WIDTH > 0 && CANVAS_WIDTH <= MAX_CANVAS_SIDE);
    assert!(CANVAS_HEIGHT > 0 && CANVAS_HEIGHT <= MAX_CANVAS_SIDE);
};
