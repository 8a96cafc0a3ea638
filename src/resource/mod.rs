// SPDX-License-Identifier: MPL-2.0
//! Embedded resource naming and lookup.

pub mod name;
pub mod table;

pub use name::{normalize_path, qualified_name, qualify};
pub use table::{DirectoryResources, EmbeddedAssets, ResourceMap, ResourceTable};
