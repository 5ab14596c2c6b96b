use std::str::FromStr;

use serde_yaml::Value;
use tracing::warn;

use super::resource::{ResourceReference, ResourceType};

/// An agent definition document: markdown with one fenced `yaml` block (the
/// structured-configuration block) carrying activation instructions and the
/// declared dependency map.
#[derive(Debug, Clone)]
pub struct AgentDocument {
    pub id: String,
    pub raw: String,
}

/// Declared dependencies in document order: resource types in the order the
/// mapping keys appear, names in the order they are listed.
#[derive(Debug, Clone, Default)]
pub struct DependencyMap {
    pub groups: Vec<(ResourceType, Vec<String>)>,
}

impl DependencyMap {
    /// Flatten into a single ordered reference list.
    pub fn references(&self) -> Vec<ResourceReference> {
        self.groups
            .iter()
            .flat_map(|(ty, names)| {
                names
                    .iter()
                    .map(|name| ResourceReference::new(*ty, name.clone()))
            })
            .collect()
    }
}

impl AgentDocument {
    pub fn new(id: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            raw: raw.into(),
        }
    }

    /// The content of the first fenced `yaml` block, if any.
    pub fn config_block(&self) -> Option<&str> {
        config_block_span(&self.raw).map(|(start, end)| &self.raw[start..end])
    }

    /// Parse the declared dependency map out of the configuration block.
    ///
    /// Returns an error only when the block itself is unparseable YAML; a
    /// missing block or a missing `dependencies` key yields an empty map.
    /// Unknown resource-type keys are warned about and skipped rather than
    /// failing the build.
    pub fn dependencies(&self) -> Result<DependencyMap, serde_yaml::Error> {
        let Some(block) = self.config_block() else {
            return Ok(DependencyMap::default());
        };

        let config: Value = serde_yaml::from_str(block)?;
        let Some(deps) = config.get("dependencies").and_then(Value::as_mapping) else {
            return Ok(DependencyMap::default());
        };

        let mut groups = Vec::new();
        for (key, value) in deps {
            let Some(key) = key.as_str() else {
                continue;
            };
            let Ok(resource_type) = ResourceType::from_str(key) else {
                warn!(agent = %self.id, key, "unknown resource type in dependency map, skipping");
                continue;
            };

            let names = match value {
                Value::Sequence(seq) => seq
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect(),
                Value::String(name) => vec![name.clone()],
                Value::Null => Vec::new(),
                other => {
                    warn!(
                        agent = %self.id,
                        key,
                        ?other,
                        "dependency value is neither a name nor a list, skipping"
                    );
                    Vec::new()
                }
            };

            if !names.is_empty() {
                groups.push((resource_type, names));
            }
        }

        Ok(DependencyMap { groups })
    }

    /// Pure transform: return a copy of the document with `instruction`
    /// appended to the configuration block's `activation-instructions` list,
    /// creating the list when absent. The block is re-serialized from its
    /// parsed form; the surrounding markdown is untouched.
    pub fn with_activation_instruction(
        &self,
        instruction: &str,
    ) -> Result<String, serde_yaml::Error> {
        let Some((start, end)) = config_block_span(&self.raw) else {
            return Ok(self.raw.clone());
        };

        let mut config: Value = serde_yaml::from_str(&self.raw[start..end])?;
        if let Value::Mapping(map) = &mut config {
            let entry = map
                .entry(Value::from("activation-instructions"))
                .or_insert_with(|| Value::Sequence(Vec::new()));
            match entry {
                Value::Sequence(seq) => seq.push(Value::from(instruction)),
                other => *other = Value::Sequence(vec![Value::from(instruction)]),
            }
        }

        let block = serde_yaml::to_string(&config)?;
        let mut rewritten = String::with_capacity(self.raw.len() + block.len());
        rewritten.push_str(&self.raw[..start]);
        rewritten.push_str(&block);
        rewritten.push_str(&self.raw[end..]);
        Ok(rewritten)
    }
}

/// Byte range of the body of the first fenced `yaml`/`yml` block.
fn config_block_span(doc: &str) -> Option<(usize, usize)> {
    let mut offset = 0;
    let mut body_start = None;

    for line in doc.split_inclusive('\n') {
        let trimmed = line.trim();
        match body_start {
            None => {
                if trimmed == "```yaml" || trimmed == "```yml" {
                    body_start = Some(offset + line.len());
                }
            }
            Some(start) => {
                if trimmed == "```" {
                    return Some((start, offset));
                }
            }
        }
        offset += line.len();
    }

    None
}
