use super::KeyEntry;

/// Parsed form of one translation document.
///
/// Mappings keep document order, so flattening is deterministic for identical
/// file contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationNode {
    Mapping(Vec<(String, TranslationNode)>),
    Scalar(String),
}

impl TranslationNode {
    /// Flattens the document into key entries.
    ///
    /// Top-level keys are locale codes (`en`, `ja`, ...) and are not part of the
    /// emitted paths. Leaves sitting directly under the root would have an empty
    /// path and are dropped, as are children with an empty key.
    pub fn flatten(&self) -> Vec<KeyEntry> {
        let mut entries = Vec::new();
        if let TranslationNode::Mapping(locales) = self {
            for (_locale, subtree) in locales {
                if let TranslationNode::Mapping(children) = subtree {
                    for (key, child) in children {
                        flatten_into(child, key.clone(), &mut entries);
                    }
                }
            }
        }
        entries
    }
}

fn flatten_into(node: &TranslationNode, path: String, entries: &mut Vec<KeyEntry>) {
    if path.split('.').any(str::is_empty) {
        return;
    }
    match node {
        TranslationNode::Mapping(children) => {
            for (key, child) in children {
                flatten_into(child, format!("{}.{}", path, key), entries);
            }
        }
        TranslationNode::Scalar(value) => entries.push(KeyEntry::new(path, value.clone())),
    }
}
