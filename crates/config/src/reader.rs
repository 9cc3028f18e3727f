use std::collections::BTreeMap;
use std::path;

use crate::Result;
use crate::Status;

/// Raw `Staticfile` entries, before any directive is decoded.
pub type DirectiveMap = BTreeMap<String, String>;

/// Reads a directive file into a flat key/value mapping.
pub trait DirectiveReader {
    /// Returns `Ok(None)` when `path` does not exist.
    fn read(&self, path: &path::Path) -> Result<Option<DirectiveMap>>;
}

/// Reads `Staticfile`s written in YAML.
#[derive(Copy, Clone, Debug, Default)]
pub struct YamlReader;

impl DirectiveReader for YamlReader {
    fn read(&self, path: &path::Path) -> Result<Option<DirectiveMap>> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(Status::new("Failed to read Staticfile")
                    .with_source(e)
                    .context_with(|c| c.insert("Path", path.display().to_string())));
            }
        };

        parse_directives(&content)
            .map(Some)
            .map_err(|e| e.context_with(|c| c.insert("Path", path.display().to_string())))
    }
}

/// Parse YAML `content` into directive entries.
///
/// Values keep their source text, so `root: 1.10` stays `1.10` and
/// `ssi: TRUE` is the string `TRUE`. `null` and empty values read as the
/// empty string.
pub fn parse_directives(content: &str) -> Result<DirectiveMap> {
    let is_blank = content
        .lines()
        .map(str::trim)
        .all(|l| l.is_empty() || l.starts_with('#'));
    if is_blank {
        return Ok(DirectiveMap::new());
    }

    // Shape check first so nested values can be reported by key.
    let document: serde_yaml::Value = serde_yaml::from_str(content)
        .map_err(|e| Status::new("Failed to parse Staticfile").with_source(e))?;
    let mapping = match document {
        serde_yaml::Value::Null => return Ok(DirectiveMap::new()),
        serde_yaml::Value::Mapping(mapping) => mapping,
        _ => return Err(Status::new("Staticfile must be a mapping of directives")),
    };
    for (key, value) in &mapping {
        if !is_scalar(key) {
            return Err(Status::new("Staticfile keys must be plain values"));
        }
        if !is_scalar(value) {
            let key = serde_yaml::to_string(key).unwrap_or_default();
            return Err(Status::new("Staticfile values must be plain values")
                .context_with(|c| c.insert("Key", key.trim_end().to_owned())));
        }
    }

    let raw: BTreeMap<String, Option<String>> = serde_yaml::from_str(content)
        .map_err(|e| Status::new("Failed to parse Staticfile").with_source(e))?;
    let entries = raw
        .into_iter()
        .map(|(key, value)| (key, value.unwrap_or_default()))
        .collect();
    Ok(entries)
}

fn is_scalar(value: &serde_yaml::Value) -> bool {
    match value {
        serde_yaml::Value::Tagged(tagged) => is_scalar(&tagged.value),
        serde_yaml::Value::Sequence(_) | serde_yaml::Value::Mapping(_) => false,
        serde_yaml::Value::Null
        | serde_yaml::Value::Bool(_)
        | serde_yaml::Value::Number(_)
        | serde_yaml::Value::String(_) => true,
    }
}
