// SPDX-License-Identifier: MPL-2.0
//! Fully qualified resource names.
//!
//! Embedded resources are namespaced by the simple name of the module that
//! owns them: `icons/star.svg` declared in `MyApp` lives under
//! `MyApp.icons.star.svg`.

use crate::module::descriptor::ModuleDescriptor;

/// Separator used between namespace segments of a resource name.
pub const SEPARATOR: char = '.';

/// Replaces forward and back slashes with [`SEPARATOR`].
#[must_use]
pub fn normalize_path(path: &str) -> String {
    path.chars()
        .map(|c| match c {
            '/' | '\\' => SEPARATOR,
            other => other,
        })
        .collect()
}

/// Builds the fully qualified name of `path` inside the module described by
/// `module_full_name`.
///
/// Returns the normalized path unprefixed when the module has no simple name,
/// and an empty string for an empty path.
#[must_use]
pub fn qualified_name(module_full_name: &str, path: &str) -> String {
    let descriptor = ModuleDescriptor::parse(module_full_name);
    qualify(&descriptor.name, path)
}

/// Same as [`qualified_name`] for an already parsed simple name.
#[must_use]
pub fn qualify(module_name: &str, path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }

    let normalized = normalize_path(path);
    if module_name.is_empty() {
        normalized
    } else {
        format!("{module_name}{SEPARATOR}{normalized}")
    }
}
