//! Attribute configuration for Theophile components.
//!
//! `theophile_config` turns the compact configuration strings embedded in
//! markup attributes into nested [`ConfigValue`] trees.
//!
//! - [`ConfigParser`] - clause parsing (`key: value; ...`) and compound
//!   property resolution (`borderColor` → `border.color`)
//! - [`PropertyPath`] - identifier decomposition
//! - [`DatasetLoader`] - per-element loading from `data-*` attributes
//!
//! # Example
//!
//! ```
//! use theophile_config::{parse, ConfigValue};
//!
//! let config = parse("color: red; borderWidth: 2px");
//! assert_eq!(config.get_path("color"), Some(&ConfigValue::from("red")));
//! assert_eq!(config.get_path("border.width"), Some(&ConfigValue::from("2px")));
//!
//! // Strings without a colon are opaque scalars.
//! assert_eq!(parse("red; big"), ConfigValue::from("red; big"));
//! ```

/// Per-element configuration from markup data attributes.
pub mod dataset;

/// Clause parsing and compound property resolution.
pub mod parser;

/// Identifier decomposition into property paths.
pub mod path;

/// Configuration tree types.
pub mod value;

pub use dataset::{DEFAULT_PREFIX, DatasetLoader, dataset_key};
pub use parser::{ConfigParser, SkippedClause};
pub use path::PropertyPath;
pub use value::{ConfigMap, ConfigValue};

/// Parses a configuration string with a default [`ConfigParser`].
#[must_use]
pub fn parse(raw: &str) -> ConfigValue {
    ConfigParser::new().parse(raw)
}

/// Parses a configuration string into an existing value with a default
/// [`ConfigParser`]. See [`ConfigParser::merge`].
#[must_use]
pub fn merge(raw: &str, into: Option<ConfigValue>) -> ConfigValue {
    ConfigParser::new().merge(raw, into)
}

/// Writes a compound property with a default [`ConfigParser`]. See
/// [`ConfigParser::set_compound`].
pub fn set_compound(identifier: &str, value: &str, into: &mut ConfigMap) {
    ConfigParser::new().set_compound(identifier, value, into);
}

/// Re-export all common types for easy access.
pub mod prelude {
    pub use crate::dataset::{DatasetLoader, dataset_key};
    pub use crate::parser::{ConfigParser, SkippedClause};
    pub use crate::path::PropertyPath;
    pub use crate::value::{ConfigMap, ConfigValue};
}
