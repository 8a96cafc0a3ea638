// SPDX-License-Identifier: MPL-2.0
//! `iced_svg_icon` is an icon widget that draws an SVG resource embedded in
//! the application, scaled to fit its canvas.
//!
//! Resources are looked up by a dotted name made of the owning module's
//! simple name and the declared path (`icons/star.svg` in `MyApp` becomes
//! `MyApp.icons.star.svg`). The owning module is resolved once, when the
//! icon is created, from the chain of modules that declared it; the entry
//! module is used when none qualifies.
//!
//! ```no_run
//! use iced_svg_icon::module::{Module, ModuleRegistry};
//! use iced_svg_icon::resource::ResourceMap;
//! use iced_svg_icon::widget::Icon;
//!
//! let mut resources = ResourceMap::new();
//! resources.insert_bytes(
//!     "MyApp.icons.star.svg",
//!     br#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><circle cx="12" cy="12" r="10"/></svg>"#,
//! );
//! let app = Module::new("MyApp, Version=1.0.0.0", resources);
//!
//! let registry = ModuleRegistry::new(app.clone());
//! let mut icon = Icon::new(&registry, &[app]);
//! icon.resize(64, 64);
//! icon.set_resource_id("icons/star.svg");
//! icon.paint().expect("icon should paint");
//! ```

#![doc(html_root_url = "https://docs.rs/iced_svg_icon/0.1.0")]

pub mod config;
pub mod error;
pub mod module;
pub mod render;
pub mod resource;
pub mod widget;
