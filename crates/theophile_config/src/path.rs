//! Property path decomposition.
//!
//! An identifier such as `borderTopColor` or `border-top-color` names the
//! nested key `border.top.color`. Uppercase letters and hyphens are both
//! segment boundaries, so the two naming conventions are interchangeable.

use core::fmt;

/// Ordered list of segment names decoded from one identifier.
///
/// Always holds at least one segment. Decoding performs no validation:
/// doubled hyphens yield empty segments and an empty identifier yields a
/// single empty segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyPath {
    segments: Vec<String>,
}

impl PropertyPath {
    /// Decodes an identifier into its path.
    ///
    /// ```
    /// use theophile_config::PropertyPath;
    ///
    /// let path = PropertyPath::parse("borderColor");
    /// assert_eq!(path.segments(), ["border", "color"]);
    /// assert_eq!(path, PropertyPath::parse("border-color"));
    /// ```
    #[must_use]
    pub fn parse(identifier: &str) -> Self {
        let mut hyphenated = String::with_capacity(identifier.len() + 4);
        for ch in identifier.chars() {
            if ch.is_ascii_uppercase() {
                hyphenated.push('-');
            }
            hyphenated.push(ch);
        }

        let trimmed = hyphenated.strip_prefix('-').unwrap_or(&hyphenated);
        let segments = trimmed
            .to_lowercase()
            .split('-')
            .map(str::to_owned)
            .collect();

        Self { segments }
    }

    /// Returns the segments in order.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always `false`; kept for API symmetry with [`len`](Self::len).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Splits the path into its parent segments and the final key.
    #[must_use]
    pub fn split_last(&self) -> (&[String], &str) {
        match self.segments.split_last() {
            Some((last, parents)) => (parents, last.as_str()),
            None => (&[], ""),
        }
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_word() {
        assert_eq!(PropertyPath::parse("color").segments(), ["color"]);
    }

    #[test]
    fn mixed_case_splits_on_uppercase() {
        assert_eq!(
            PropertyPath::parse("fooBarBaz").segments(),
            ["foo", "bar", "baz"]
        );
    }

    #[test]
    fn leading_uppercase_does_not_produce_empty_segment() {
        assert_eq!(
            PropertyPath::parse("BorderColor").segments(),
            ["border", "color"]
        );
    }

    #[test]
    fn leading_hyphen_is_stripped_once() {
        assert_eq!(PropertyPath::parse("-foo").segments(), ["foo"]);
        assert_eq!(PropertyPath::parse("--foo").segments(), ["", "foo"]);
    }

    #[test]
    fn doubled_hyphen_keeps_empty_segment() {
        assert_eq!(PropertyPath::parse("a--b").segments(), ["a", "", "b"]);
    }

    #[test]
    fn consecutive_capitals_split_per_letter() {
        assert_eq!(PropertyPath::parse("fooURL").segments(), ["foo", "u", "r", "l"]);
    }

    #[test]
    fn empty_identifier_is_one_empty_segment() {
        let path = PropertyPath::parse("");
        assert_eq!(path.len(), 1);
        assert_eq!(path.split_last(), (&[][..], ""));
    }

    #[test]
    fn display_joins_with_dots() {
        assert_eq!(PropertyPath::parse("borderTopColor").to_string(), "border.top.color");
    }
}
