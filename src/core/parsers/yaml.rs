use std::{fs, path::Path};

use serde_yaml::Value;

use crate::core::{ScanError, TranslationNode};

pub fn parse_yaml_file(path: &Path) -> Result<TranslationNode, ScanError> {
    let content = fs::read_to_string(path).map_err(|source| ScanError::Read {
        file: path.to_path_buf(),
        source,
    })?;
    parse_yaml_str(&content).map_err(|e| ScanError::Parse {
        file: path.to_path_buf(),
        reason: e.to_string(),
    })
}

pub fn parse_yaml_str(content: &str) -> Result<TranslationNode, serde_yaml::Error> {
    let mut value: Value = serde_yaml::from_str(content)?;
    // Rails locale files lean on `<<: *defaults` anchors.
    value.apply_merge()?;
    Ok(to_node(&value))
}

fn to_node(value: &Value) -> TranslationNode {
    match value {
        Value::Mapping(map) => TranslationNode::Mapping(
            map.iter()
                .map(|(key, child)| (scalar_string(key).unwrap_or_default(), to_node(child)))
                .collect(),
        ),
        Value::Sequence(items) => {
            // Arrays such as `date.day_names` are shown as a single key
            let values: Vec<String> = items.iter().filter_map(scalar_string).collect();
            TranslationNode::Scalar(values.join(", "))
        }
        Value::Tagged(tagged) => to_node(&tagged.value),
        other => TranslationNode::Scalar(scalar_string(other).unwrap_or_default()),
    }
}

/// String form of a scalar; `None` for collections.
fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some(String::new()),
        Value::Tagged(tagged) => scalar_string(&tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => None,
    }
}
