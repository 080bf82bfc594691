//! Configuration tree produced by parsing.
//!
//! A [`ConfigValue`] is either a scalar string or a nested [`ConfigMap`].
//! Trees only ever grow: parsing merges into existing branches rather than
//! replacing them.

use core::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Mapping from key to configuration value.
///
/// Insertion order is preserved for stable output but has no meaning.
pub type ConfigMap = IndexMap<String, ConfigValue>;

/// A node in the configuration tree.
///
/// Serializes untagged, so a tree maps directly onto JSON objects and strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// A leaf string value.
    Scalar(String),
    /// A nested mapping.
    Map(ConfigMap),
}

impl Default for ConfigValue {
    fn default() -> Self {
        ConfigValue::Map(ConfigMap::new())
    }
}

impl ConfigValue {
    /// Returns an empty mapping.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns `true` if this value is a mapping.
    #[must_use]
    pub fn is_map(&self) -> bool {
        matches!(self, ConfigValue::Map(_))
    }

    /// Returns `true` if this value is a scalar.
    #[must_use]
    pub fn is_scalar(&self) -> bool {
        matches!(self, ConfigValue::Scalar(_))
    }

    /// Returns the scalar string, if this value is one.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::Scalar(value) => Some(value),
            ConfigValue::Map(_) => None,
        }
    }

    /// Returns the mapping, if this value is one.
    #[must_use]
    pub fn as_map(&self) -> Option<&ConfigMap> {
        match self {
            ConfigValue::Map(map) => Some(map),
            ConfigValue::Scalar(_) => None,
        }
    }

    /// Consumes the value, returning the mapping if it is one.
    #[must_use]
    pub fn into_map(self) -> Option<ConfigMap> {
        match self {
            ConfigValue::Map(map) => Some(map),
            ConfigValue::Scalar(_) => None,
        }
    }

    /// Looks up a nested value by a dot-separated key path.
    ///
    /// ```
    /// use theophile_config::parse;
    ///
    /// let config = parse("border-color: blue");
    /// assert_eq!(config.get_path("border.color").and_then(|v| v.as_str()), Some("blue"));
    /// ```
    #[must_use]
    pub fn get_path(&self, path: &str) -> Option<&ConfigValue> {
        path.split('.').try_fold(self, |node, key| node.as_map()?.get(key))
    }

    /// Returns the mapping held by this value, replacing a scalar with an
    /// empty mapping first.
    pub(crate) fn map_mut(&mut self) -> &mut ConfigMap {
        if let ConfigValue::Scalar(_) = self {
            *self = ConfigValue::empty();
        }
        match self {
            ConfigValue::Map(map) => map,
            ConfigValue::Scalar(_) => unreachable!("scalar replaced with a mapping above"),
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::Scalar(value.to_owned())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::Scalar(value)
    }
}

impl From<ConfigMap> for ConfigValue {
    fn from(map: ConfigMap) -> Self {
        ConfigValue::Map(map)
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Scalar(value) => write!(f, "{value:?}"),
            ConfigValue::Map(map) => {
                write!(f, "{{")?;
                for (index, (key, value)) in map.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty_map() {
        let value = ConfigValue::default();
        assert!(value.is_map());
        assert!(value.as_map().is_some_and(IndexMap::is_empty));
    }

    #[test]
    fn map_mut_replaces_scalar() {
        let mut value = ConfigValue::from("red");
        value.map_mut().insert("a".into(), "b".into());
        assert_eq!(value.get_path("a"), Some(&ConfigValue::from("b")));
    }

    #[test]
    fn get_path_stops_at_scalar() {
        let mut root = ConfigMap::new();
        root.insert("color".into(), "red".into());
        let value = ConfigValue::Map(root);

        assert!(value.get_path("color.shade").is_none());
        assert!(value.get_path("missing").is_none());
    }

    #[test]
    fn display_is_compact() {
        let mut inner = ConfigMap::new();
        inner.insert("color".into(), "blue".into());
        let mut root = ConfigMap::new();
        root.insert("border".into(), ConfigValue::Map(inner));

        assert_eq!(
            ConfigValue::Map(root).to_string(),
            r#"{border: {color: "blue"}}"#
        );
    }
}
