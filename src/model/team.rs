use serde::Deserialize;

/// A team manifest document. Only the member list is interpreted; the raw
/// text ships in the bundle verbatim, so everything else is passed through.
#[derive(Debug, Clone)]
pub struct TeamDocument {
    pub id: String,
    pub raw: String,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct TeamManifest {
    #[serde(default)]
    pub agents: Vec<String>,
}

impl TeamDocument {
    pub fn new(id: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            raw: raw.into(),
        }
    }

    /// Extract the ordered member agent id list.
    pub fn manifest(&self) -> Result<TeamManifest, serde_yaml::Error> {
        serde_yaml::from_str(&self.raw)
    }
}
