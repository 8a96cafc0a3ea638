// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Svg(String),
    Config(String),
    /// No embedded resource exists under the computed name.
    ///
    /// Carries the fully qualified name so a namespace mismatch between the
    /// declared path and the owning module is visible at a glance.
    ResourceNotFound {
        name: String,
        module: String,
    },
}

impl Error {
    /// Returns the fully qualified resource name for a lookup failure.
    pub fn resource_name(&self) -> Option<&str> {
        match self {
            Error::ResourceNotFound { name, .. } => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Svg(e) => write!(f, "SVG Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::ResourceNotFound { name, module } => write!(
                f,
                "Resource Error: embedded resource '{}' not found in module '{}'",
                name, module
            ),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Svg(s)
    }
}

impl From<resvg::usvg::Error> for Error {
    fn from(err: resvg::usvg::Error) -> Self {
        Error::Svg(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Svg(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn svg_error_from_string() {
        let err: Error = "invalid svg data".to_string().into();
        match err {
            Error::Svg(message) => assert!(message.contains("invalid svg")),
            _ => panic!("expected Svg variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn resource_not_found_message_contains_exact_name() {
        let err = Error::ResourceNotFound {
            name: "MyApp.icons.star.svg".into(),
            module: "MyApp, Version=1.0.0.0".into(),
        };
        let message = err.to_string();
        assert!(message.contains("'MyApp.icons.star.svg'"));
        assert_eq!(err.resource_name(), Some("MyApp.icons.star.svg"));
    }

    #[test]
    fn resource_name_is_absent_for_other_variants() {
        assert!(Error::Svg("x".into()).resource_name().is_none());
    }
}
