use std::{collections::HashSet, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Placeholder token such as `%{name}` or `%{user_name}`.
static INTERPOLATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%\{[a-z]+(_[a-z]+)?\}").unwrap());

/// One flattened translation key.
///
/// `path` is the dot-joined list of ancestor keys with the locale root removed,
/// e.g. `errors.not_found` for `en.errors.not_found`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyEntry {
    pub path: String,
    pub value: String,
    pub has_interpolation: bool,
}

impl KeyEntry {
    pub fn new(path: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            path: path.into(),
            has_interpolation: has_interpolation(&value),
            value,
        }
    }

    /// The first dot segment of the path (the file's top-level namespace).
    pub fn first_segment(&self) -> &str {
        self.path.split('.').next().unwrap_or_default()
    }

    /// Display form used for listing, selection and de-duplication.
    pub fn render(&self, separator: &str) -> String {
        format!("{}{}{}", self.path, separator, self.value)
    }
}

/// Checks whether a translation value contains a `%{placeholder}` token.
///
/// # Examples
///
/// ```
/// use lokey::core::has_interpolation;
///
/// assert!(has_interpolation("Hello %{name}"));
/// assert!(has_interpolation("Welcome, %{user_name}!"));
/// assert!(!has_interpolation("Hello world"));
/// assert!(!has_interpolation("100%"));
/// ```
pub fn has_interpolation(value: &str) -> bool {
    INTERPOLATION_REGEX.is_match(value)
}

/// Drops entries whose rendered form was already seen, keeping first-seen order.
pub fn dedup_by_rendered(entries: Vec<KeyEntry>, separator: &str) -> Vec<KeyEntry> {
    let mut seen = HashSet::with_capacity(entries.len());
    entries
        .into_iter()
        .filter(|entry| seen.insert(entry.render(separator)))
        .collect()
}
