//! YAML text → document tree.

use indexmap::IndexMap;
use serde_yaml::Value as YamlValue;

use crate::ast::{Node, Scalar};
use crate::error::DefgenError;

/// Parse YAML text into a document tree.
///
/// The returned error carries no path; callers that know the source file
/// attach one via [`DefgenError::with_path`].
///
/// # Errors
/// Returns [`DefgenError::ParseError`] if the input is not well-formed
/// YAML or uses a composite (sequence/mapping) value as a mapping key.
pub fn parse_document(text: &str) -> Result<Node, DefgenError> {
    let value: YamlValue = serde_yaml::from_str(text).map_err(|e| DefgenError::ParseError {
        message: e.to_string(),
        path: String::new(),
    })?;
    yaml_to_node(&value)
}

fn yaml_to_node(value: &YamlValue) -> Result<Node, DefgenError> {
    match value {
        YamlValue::Null => Ok(Node::Scalar(Scalar::Null)),
        YamlValue::Bool(b) => Ok(Node::Scalar(Scalar::Bool(*b))),
        YamlValue::Number(n) => Ok(Node::Scalar(number_to_scalar(n))),
        YamlValue::String(s) => Ok(Node::Scalar(Scalar::String(s.clone()))),
        YamlValue::Sequence(items) => {
            let nodes = items
                .iter()
                .map(yaml_to_node)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Node::Sequence(nodes))
        }
        YamlValue::Mapping(map) => {
            let mut entries = IndexMap::with_capacity(map.len());
            for (key, val) in map {
                entries.insert(key_to_string(key)?, yaml_to_node(val)?);
            }
            Ok(Node::Mapping(entries))
        }
        // Tags carry no meaning for macro generation; use the inner value.
        YamlValue::Tagged(tagged) => yaml_to_node(&tagged.value),
    }
}

fn number_to_scalar(n: &serde_yaml::Number) -> Scalar {
    if let Some(i) = n.as_i64() {
        Scalar::Int(i)
    } else if let Some(u) = n.as_u64() {
        // Above i64::MAX; a float round-trip here would lose digits.
        Scalar::UInt(u)
    } else {
        Scalar::Float(n.as_f64().unwrap_or(f64::NAN))
    }
}

// YAML allows non-string mapping keys. Scalar keys are flattened to their
// plain text form so they can join the macro name path; composite keys
// have no sensible name and are rejected.
fn key_to_string(key: &YamlValue) -> Result<String, DefgenError> {
    match key {
        YamlValue::String(s) => Ok(s.clone()),
        YamlValue::Bool(b) => Ok(b.to_string()),
        YamlValue::Number(n) => Ok(n.to_string()),
        YamlValue::Null => Ok("null".to_string()),
        YamlValue::Tagged(tagged) => key_to_string(&tagged.value),
        YamlValue::Sequence(_) | YamlValue::Mapping(_) => Err(DefgenError::ParseError {
            message: "Mapping keys must be scalars".to_string(),
            path: String::new(),
        }),
    }
}
