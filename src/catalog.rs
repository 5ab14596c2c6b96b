use std::fs;
use std::path::Path;

use crate::error::BundlerError;
use crate::model::namespace::EXPANSION_PACKS_DIR;
use crate::model::ResourceType;

/// Enumerate the bare resource names of one type within a tier, sorted.
/// An absent directory is an empty enumeration.
pub fn resource_names(tier: &Path, resource_type: ResourceType) -> Result<Vec<String>, BundlerError> {
    let dir = tier.join(resource_type.dir_name());
    let entries = match fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => return Err(BundlerError::DirList { path: dir, source }),
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| BundlerError::DirList {
            path: dir.clone(),
            source,
        })?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(resource_type.extension()) {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            names.push(stem.to_string());
        }
    }
    names.sort();
    Ok(names)
}

/// Agent ids defined in a tier (`agents/*.md`), sorted.
pub fn agent_ids(tier: &Path) -> Result<Vec<String>, BundlerError> {
    resource_names(tier, ResourceType::Agents)
}

/// Team ids defined in a tier (`agent-teams/*.yaml`), sorted.
pub fn team_ids(tier: &Path) -> Result<Vec<String>, BundlerError> {
    resource_names(tier, ResourceType::AgentTeams)
}

/// Expansion pack names under the source root, sorted. An absent
/// `expansion-packs/` directory means no packs.
pub fn pack_names(source_root: &Path) -> Result<Vec<String>, BundlerError> {
    let dir = source_root.join(EXPANSION_PACKS_DIR);
    let entries = match fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => return Err(BundlerError::DirList { path: dir, source }),
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| BundlerError::DirList {
            path: dir.clone(),
            source,
        })?;
        if entry.path().is_dir() {
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
    }
    names.sort();
    Ok(names)
}
