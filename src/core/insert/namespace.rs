use std::path::{Component, Path};

/// Where the translation call is being inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRole {
    /// A template under a `views` directory.
    View,
    /// A file under a `helpers` directory.
    Helper,
    Other,
}

impl FileRole {
    pub fn of(path: &Path) -> Self {
        let segments = normal_segments(path);
        if segments.contains(&"views") {
            FileRole::View
        } else if segments.contains(&"helpers") {
            FileRole::Helper
        } else {
            FileRole::Other
        }
    }

    /// Views and helpers call `t(...)` directly.
    pub fn is_view_or_helper(self) -> bool {
        matches!(self, FileRole::View | FileRole::Helper)
    }
}

/// Derive the controller/action namespace implied by a view's location.
///
/// The path below `views` is taken, partial prefixes are dropped, separators
/// become dots and the last two segments (template name and extension) are cut:
///
/// - `app/views/users/show.html.erb` → `users.show`
/// - `app/views/admin/users/_form.html.haml` → `admin.users.form`
///
/// Returns `None` for files outside a `views` directory or too shallow to name a
/// namespace.
pub fn view_namespace(root: &Path, file: &Path) -> Option<String> {
    let relative = file.strip_prefix(root).unwrap_or(file);
    let segments = normal_segments(relative);
    let views = segments.iter().position(|s| *s == "views")?;

    let dotted = segments[views + 1..]
        .iter()
        .copied()
        .map(|s| s.strip_prefix('_').unwrap_or(s))
        .collect::<Vec<_>>()
        .join(".");
    let parts: Vec<&str> = dotted.split('.').collect();
    if parts.len() <= 2 {
        return None;
    }
    Some(parts[..parts.len() - 2].join("."))
}

/// Remove `namespace` from `key` when it appears as a run of whole segments.
///
/// The key is left unchanged if that would leave nothing behind.
pub fn strip_namespace(key: &str, namespace: &str) -> String {
    let key_parts: Vec<&str> = key.split('.').collect();
    let ns_parts: Vec<&str> = namespace.split('.').collect();
    if ns_parts.len() >= key_parts.len() {
        return key.to_string();
    }

    match key_parts
        .windows(ns_parts.len())
        .position(|window| window == ns_parts.as_slice())
    {
        Some(start) => key_parts[..start]
            .iter()
            .chain(&key_parts[start + ns_parts.len()..])
            .copied()
            .collect::<Vec<_>>()
            .join("."),
        None => key.to_string(),
    }
}

fn normal_segments(path: &Path) -> Vec<&str> {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(s) => s.to_str(),
            _ => None,
        })
        .collect()
}
