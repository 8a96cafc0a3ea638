// SPDX-License-Identifier: MPL-2.0
//! Parsing of module descriptor strings.
//!
//! A descriptor is the module's simple name followed by comma separated
//! metadata fields, each optionally written as `key=value`:
//!
//! ```text
//! MyApp, Version=1.0.0.0, Culture=neutral, PublicKeyToken=null
//! ```
//!
//! Parsing never fails. Malformed input degrades to whatever can be read,
//! with the first comma delimited segment always taken as the name.

/// Sentinel reported when a descriptor carries no signing token.
pub const NULL_TOKEN: &str = "null";

const VERSION_KEY: &str = "Version=";
const CULTURE_KEY: &str = "Culture=";
const TOKEN_KEY: &str = "PublicKeyToken=";

/// Fields extracted from a module descriptor string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModuleDescriptor {
    pub name: String,
    pub version: Option<String>,
    pub culture: Option<String>,
    pub public_key_token: Option<String>,
}

impl ModuleDescriptor {
    /// Parses a full descriptor string.
    #[must_use]
    pub fn parse(full_name: &str) -> Self {
        let mut parts = full_name.split(',').map(str::trim);
        let name = parts.next().unwrap_or_default().to_string();

        let mut descriptor = Self {
            name,
            ..Self::default()
        };

        for part in parts {
            if let Some(value) = part.strip_prefix(VERSION_KEY) {
                descriptor.version.get_or_insert_with(|| value.to_string());
            } else if let Some(value) = part.strip_prefix(CULTURE_KEY) {
                descriptor.culture.get_or_insert_with(|| value.to_string());
            } else if let Some(value) = part.strip_prefix(TOKEN_KEY) {
                descriptor
                    .public_key_token
                    .get_or_insert_with(|| value.to_string());
            }
        }

        descriptor
    }

    /// Signing token, or [`NULL_TOKEN`] when none was declared.
    #[must_use]
    pub fn token(&self) -> &str {
        self.public_key_token.as_deref().unwrap_or(NULL_TOKEN)
    }
}

/// Splits a descriptor into `(simple name, signing token)`.
///
/// The token is [`NULL_TOKEN`] when the descriptor has no `PublicKeyToken=`
/// field.
#[must_use]
pub fn parse(full_name: &str) -> (String, String) {
    let descriptor = ModuleDescriptor::parse(full_name);
    let token = descriptor.token().to_string();
    (descriptor.name, token)
}
