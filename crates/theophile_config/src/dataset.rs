//! Per-element configuration from markup data attributes.
//!
//! A component element carries its configuration in `data-*` attributes.
//! With the default `th` prefix:
//!
//! - `data-th="color: red; size: big"` is the bulk attribute, parsed as a
//!   clause list;
//! - `data-th-border-color="blue"` (dataset key `thBorderColor`) is resolved
//!   as the compound property `border.color`.
//!
//! Everything else on the element is ignored.

use crate::parser::ConfigParser;
use crate::value::{ConfigMap, ConfigValue};

/// Default attribute namespace.
pub const DEFAULT_PREFIX: &str = "th";

/// Loads element datasets into configuration mappings.
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    prefix: String,
    parser: ConfigParser,
}

impl Default for DatasetLoader {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_owned(),
            parser: ConfigParser::new(),
        }
    }
}

impl DatasetLoader {
    /// Creates a loader for the default `th` namespace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the attribute namespace.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Uses the given parser, e.g. one with a diagnostics sink installed.
    #[must_use]
    pub fn with_parser(mut self, parser: ConfigParser) -> Self {
        self.parser = parser;
        self
    }

    /// Returns the attribute namespace.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Merges one element's dataset into `into`.
    ///
    /// Entries are applied in iteration order, so a later compound attribute
    /// overrides an earlier bulk clause for the same path and vice versa.
    pub fn load<I, K, V>(&self, dataset: I, into: &mut ConfigMap)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (key, raw) in dataset {
            let (key, raw) = (key.as_ref(), raw.as_ref());
            if key == self.prefix {
                self.parser.apply_clauses(raw, into);
            } else if let Some(property) = self.compound_property(key) {
                self.parser.set_compound(property, raw, into);
            }
        }
    }

    /// Loads one element's dataset into a fresh mapping.
    #[must_use]
    pub fn load_new<I, K, V>(&self, dataset: I) -> ConfigValue
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = ConfigMap::new();
        self.load(dataset, &mut config);
        ConfigValue::Map(config)
    }

    /// Returns the property part of a namespaced key (`thBorderColor` →
    /// `BorderColor`).
    fn compound_property<'k>(&self, key: &'k str) -> Option<&'k str> {
        let rest = key.strip_prefix(self.prefix.as_str())?;
        rest.starts_with(|ch: char| ch.is_ascii_uppercase())
            .then_some(rest)
    }
}

/// Converts a markup attribute name into its dataset key.
///
/// `data-th-border-color` becomes `thBorderColor`: the `data-` prefix is
/// dropped and every `-` followed by a lowercase ASCII letter is removed,
/// uppercasing the letter. Returns `None` for non-data attributes.
///
/// ```
/// use theophile_config::dataset_key;
///
/// assert_eq!(dataset_key("data-th-border-color").as_deref(), Some("thBorderColor"));
/// assert_eq!(dataset_key("class"), None);
/// ```
#[must_use]
pub fn dataset_key(attribute: &str) -> Option<String> {
    let name = attribute.get(..5)?;
    if !name.eq_ignore_ascii_case("data-") {
        return None;
    }

    let rest = &attribute[5..];
    let mut key = String::with_capacity(rest.len());
    let mut chars = rest.chars().peekable();
    while let Some(ch) = chars.next() {
        match (ch, chars.peek()) {
            ('-', Some(next)) if next.is_ascii_lowercase() => {
                key.push(next.to_ascii_uppercase());
                chars.next();
            }
            _ => key.push(ch),
        }
    }
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalar(value: &str) -> ConfigValue {
        ConfigValue::from(value)
    }

    #[test]
    fn bulk_and_compound_attributes_merge() {
        let loaded = DatasetLoader::new().load_new([
            ("th", "color: red; size: big"),
            ("thBorderColor", "blue"),
        ]);

        assert_eq!(loaded.get_path("color"), Some(&scalar("red")));
        assert_eq!(loaded.get_path("size"), Some(&scalar("big")));
        assert_eq!(loaded.get_path("border.color"), Some(&scalar("blue")));
    }

    #[test]
    fn unrelated_attributes_are_ignored() {
        let loaded = DatasetLoader::new().load_new([
            ("role", "button"),
            ("theme", "dark"),
            ("thborder", "none"),
        ]);

        assert_eq!(loaded, ConfigValue::empty());
    }

    #[test]
    fn later_entries_override_earlier_ones() {
        let loaded = DatasetLoader::new().load_new([
            ("th", "border-color: red"),
            ("thBorderColor", "blue"),
        ]);

        assert_eq!(loaded.get_path("border.color"), Some(&scalar("blue")));
    }

    #[test]
    fn colon_free_bulk_attribute_applies_nothing() {
        let loaded = DatasetLoader::new().load_new([("th", "just-a-word")]);
        assert_eq!(loaded, ConfigValue::empty());
    }

    #[test]
    fn custom_prefix() {
        let loader = DatasetLoader::new().with_prefix("ui");
        let loaded = loader.load_new([("ui", "size: big"), ("uiGridGap", "4px"), ("th", "a: b")]);

        assert_eq!(loader.prefix(), "ui");
        assert_eq!(loaded.get_path("size"), Some(&scalar("big")));
        assert_eq!(loaded.get_path("grid.gap"), Some(&scalar("4px")));
        assert!(loaded.get_path("a").is_none());
    }

    #[test]
    fn compound_attribute_value_may_be_a_clause_list() {
        let loaded = DatasetLoader::new().load_new([("thLayout", "columns: 3; gap: 1em")]);

        assert_eq!(loaded.get_path("layout.columns"), Some(&scalar("3")));
        assert_eq!(loaded.get_path("layout.gap"), Some(&scalar("1em")));
    }

    #[test]
    fn dataset_key_camel_cases_attribute_names() {
        assert_eq!(dataset_key("data-th").as_deref(), Some("th"));
        assert_eq!(dataset_key("data-th-grid-gap").as_deref(), Some("thGridGap"));
        assert_eq!(dataset_key("DATA-th-x").as_deref(), Some("thX"));
        assert_eq!(dataset_key("data-th--x").as_deref(), Some("th-X"));
        assert_eq!(dataset_key("data-th-1x").as_deref(), Some("th-1x"));
    }

    #[test]
    fn dataset_key_rejects_other_attributes() {
        assert_eq!(dataset_key("id"), None);
        assert_eq!(dataset_key("aria-label"), None);
        assert_eq!(dataset_key(""), None);
    }
}
