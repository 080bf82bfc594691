//! Configuration string parsing and compound property resolution.
//!
//! The parser turns `key: value; key: value` strings into a [`ConfigMap`].
//! Each clause is written through [`ConfigParser::set_compound`], which
//! decodes the key into a [`PropertyPath`] and re-parses the value. A value
//! that itself contains `:` is therefore expanded one level deeper:
//!
//! ```
//! use theophile_config::{ConfigMap, ConfigParser};
//!
//! let parser = ConfigParser::new();
//! let mut config = ConfigMap::new();
//! parser.set_compound("a-b", "c: 1; d: 2", &mut config);
//!
//! let value = theophile_config::ConfigValue::Map(config);
//! assert_eq!(value.get_path("a.b.c").and_then(|v| v.as_str()), Some("1"));
//! assert_eq!(value.get_path("a.b.d").and_then(|v| v.as_str()), Some("2"));
//! ```
//!
//! # Leniency
//!
//! Segments that do not look like `identifier: value` are skipped. They are
//! logged at `debug` level and, when a sink is installed with
//! [`ConfigParser::with_diagnostics`], reported as [`SkippedClause`].

use core::fmt;
use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::path::PropertyPath;
use crate::value::{ConfigMap, ConfigValue};

/// One clause: identifier, colon, value. Surrounding whitespace is trimmed.
static CLAUSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^\s*([A-Za-z_-][A-Za-z0-9_-]*)\s*:\s*(.*?)\s*$")
        .expect("clause pattern is a valid regex")
});

// ─────────────────────────────────────────────────────────────────────────────
// SkippedClause
// ─────────────────────────────────────────────────────────────────────────────

/// A segment of a configuration string that was not a valid clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedClause {
    /// Zero-based position of the segment within its source string.
    pub index: usize,
    /// The raw segment text.
    pub segment: String,
}

impl fmt::Display for SkippedClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "skipped clause #{}: {:?}", self.index, self.segment)
    }
}

type DiagnosticSink = Arc<dyn Fn(&SkippedClause) + Send + Sync>;

// ─────────────────────────────────────────────────────────────────────────────
// ConfigParser
// ─────────────────────────────────────────────────────────────────────────────

/// Parser for attribute configuration strings.
///
/// Stateless apart from the optional diagnostics sink; every call re-parses
/// its input and writes only into the map the caller passes in.
#[derive(Clone, Default)]
pub struct ConfigParser {
    diagnostics: Option<DiagnosticSink>,
}

impl fmt::Debug for ConfigParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigParser")
            .field("diagnostics", &self.diagnostics.is_some())
            .finish()
    }
}

impl ConfigParser {
    /// Creates a parser without a diagnostics sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a sink that receives every skipped segment.
    #[must_use]
    pub fn with_diagnostics(
        mut self,
        sink: impl Fn(&SkippedClause) + Send + Sync + 'static,
    ) -> Self {
        self.diagnostics = Some(Arc::new(sink));
        self
    }

    /// Parses `raw` into a fresh value.
    ///
    /// Shorthand for [`merge(raw, None)`](Self::merge).
    #[must_use]
    pub fn parse(&self, raw: &str) -> ConfigValue {
        self.merge(raw, None)
    }

    /// Parses `raw`, merging its clauses into `into`.
    ///
    /// - An empty string yields an empty mapping and `into` is discarded.
    /// - A string without `:` is returned verbatim as a scalar, even if it
    ///   contains `;`.
    /// - Otherwise every clause is written into `into` (a fresh mapping when
    ///   `into` is absent or a scalar) and the mapping is returned.
    #[must_use]
    pub fn merge(&self, raw: &str, into: Option<ConfigValue>) -> ConfigValue {
        if raw.is_empty() {
            return ConfigValue::empty();
        }
        if !raw.contains(':') {
            return ConfigValue::Scalar(raw.to_owned());
        }

        let mut target = into.unwrap_or_default();
        self.apply_clauses(raw, target.map_mut());
        target
    }

    /// Writes every clause of `raw` into `into`, returning how many were
    /// applied.
    ///
    /// Empty and colon-free input applies nothing. Use this to accumulate
    /// one configuration from several source strings.
    pub fn apply_clauses(&self, raw: &str, into: &mut ConfigMap) -> usize {
        if !raw.contains(':') {
            return 0;
        }

        let mut applied = 0;
        for (index, segment) in strip_trailing_separator(raw).split(';').enumerate() {
            if segment.trim().is_empty() {
                continue;
            }

            let Some(captures) = CLAUSE.captures(segment) else {
                self.report(SkippedClause {
                    index,
                    segment: segment.to_owned(),
                });
                continue;
            };

            let identifier = &captures[1];
            let value = &captures[2];
            tracing::trace!(identifier, value, "applying configuration clause");
            self.set_compound(identifier, value, into);
            applied += 1;
        }
        applied
    }

    /// Writes `value` at the path encoded by `identifier`.
    ///
    /// Missing intermediate mappings are created and intermediate scalars are
    /// replaced by mappings. The value is parsed with [`merge`](Self::merge)
    /// against whatever the final key currently holds, so a value containing
    /// `:` becomes a nested mapping merged into any existing one.
    pub fn set_compound(&self, identifier: &str, value: &str, into: &mut ConfigMap) {
        let path = PropertyPath::parse(identifier);
        let (parents, last) = path.split_last();

        let mut destination = into;
        for segment in parents {
            destination = destination.entry(segment.clone()).or_default().map_mut();
        }

        let previous = destination.get_mut(last).map(core::mem::take);
        let merged = self.merge(value, previous);
        destination.insert(last.to_owned(), merged);
    }

    fn report(&self, skipped: SkippedClause) {
        tracing::debug!(
            index = skipped.index,
            segment = %skipped.segment,
            "skipping malformed configuration clause"
        );
        if let Some(sink) = &self.diagnostics {
            sink(&skipped);
        }
    }
}

/// Removes one trailing `;` along with whitespace around it.
fn strip_trailing_separator(raw: &str) -> &str {
    match raw.trim_end().strip_suffix(';') {
        Some(rest) => rest.trim_end(),
        None => raw,
    }
}
