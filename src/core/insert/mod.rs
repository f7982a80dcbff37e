//! Building the translation call inserted at the cursor.
//!
//! ## Module Structure
//!
//! - `namespace`: file role detection and view namespace derivation

use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use serde::Serialize;

use crate::config::QuoteStyle;
use crate::core::has_interpolation;

pub mod namespace;

pub use namespace::{FileRole, strip_namespace, view_namespace};

/// Formatting settings taken from the project configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertOptions {
    pub quote: QuoteStyle,
    /// Qualifier used outside views and helpers, e.g. `I18n`.
    pub namespace: String,
    pub separator: String,
}

/// A picked entry from the key list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub key: String,
    /// `None` when only a bare key was given.
    pub value: Option<String>,
}

impl Selection {
    /// Parse `path<separator>value` or a bare key. A leading dot is dropped.
    pub fn parse(selection: &str, separator: &str) -> Self {
        let selection = selection.strip_prefix('.').unwrap_or(selection);
        match selection.split_once(separator) {
            Some((key, value)) => Self {
                key: key.to_string(),
                value: Some(value.to_string()),
            },
            None => Self {
                key: selection.trim().to_string(),
                value: None,
            },
        }
    }

    pub fn has_interpolation(&self) -> bool {
        self.value.as_deref().is_some_and(has_interpolation)
    }
}

/// Text to insert and where the cursor ends up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Insertion {
    pub snippet: String,
    /// Cursor position after insertion, in chars from the start of `snippet`.
    pub cursor: usize,
}

impl Insertion {
    pub fn cursor_byte(&self) -> usize {
        self.snippet
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.snippet.len())
    }
}

/// Format the call for `selection` as it should appear in `file`.
///
/// Views and helpers get a bare `t('key')`; inside a view the namespace implied
/// by the template's location is removed from the key. Other files get
/// `<namespace>.t('key')`. When the value has placeholders, `, ` is placed
/// before the closing parenthesis and the cursor is left after it.
pub fn format_insertion(
    selection: &Selection,
    file: &Path,
    root: &Path,
    options: &InsertOptions,
) -> Insertion {
    // Directories above the project root say nothing about the file's role.
    let role = FileRole::of(file.strip_prefix(root).unwrap_or(file));
    let quote = options.quote.as_char();

    let key = match (role, view_namespace(root, file)) {
        (FileRole::View, Some(namespace)) => strip_namespace(&selection.key, &namespace),
        _ => selection.key.clone(),
    };

    let call = format!("t({quote}{key}{quote})");
    let mut snippet = if role.is_view_or_helper() {
        call
    } else {
        format!("{}.{}", options.namespace, call)
    };

    if selection.has_interpolation() {
        snippet.insert_str(snippet.len() - 1, ", ");
        let cursor = snippet.chars().count() - 1;
        return Insertion { snippet, cursor };
    }

    let cursor = snippet.chars().count();
    Insertion { snippet, cursor }
}

/// Write `insertion` into `file` at `offset` (bytes) and return the resulting
/// cursor byte offset.
pub fn splice_into_file(file: &Path, offset: usize, insertion: &Insertion) -> Result<usize> {
    let mut content = fs::read_to_string(file)
        .with_context(|| format!("Failed to read file: {}", file.display()))?;

    if offset > content.len() || !content.is_char_boundary(offset) {
        bail!(
            "Offset {} is not a valid position in {} ({} bytes)",
            offset,
            file.display(),
            content.len()
        );
    }

    content.insert_str(offset, &insertion.snippet);
    fs::write(file, content)
        .with_context(|| format!("Failed to write file: {}", file.display()))?;

    Ok(offset + insertion.cursor_byte())
}
