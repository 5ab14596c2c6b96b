use std::path::Path;

use tracing::{debug, warn};

use crate::error::BundlerError;
use crate::model::{
    Namespace, ResourceReference, ResourceType, TeamDocument, OVERRIDE_CATEGORIES,
};

use super::agent::{append_agent, BuildOptions};
use super::{locate, logical_path, Bundle, Section};

/// Build a bundle for a core team: preamble, team manifest, then the union
/// of all member agents' definitions and dependencies, deduplicated across
/// the whole bundle.
pub async fn build_core_team(
    source_root: &Path,
    team_id: &str,
    options: &BuildOptions,
) -> Result<Bundle, BundlerError> {
    let namespace = Namespace::core(source_root);
    build_team(source_root, &namespace, team_id, options).await
}

/// Build a bundle for an expansion-pack team. On top of the core team
/// algorithm, pack-owned resources that no member declared are appended at
/// the end, so pack-local overrides ship even when nothing names them.
pub async fn build_pack_team(
    source_root: &Path,
    pack_name: &str,
    team_id: &str,
    options: &BuildOptions,
) -> Result<Bundle, BundlerError> {
    let namespace = Namespace::pack(source_root, pack_name);
    let mut bundle = build_team(source_root, &namespace, team_id, options).await?;
    append_undeclared_pack_resources(&mut bundle, source_root, &namespace).await?;
    Ok(bundle)
}

async fn build_team(
    source_root: &Path,
    namespace: &Namespace,
    team_id: &str,
    options: &BuildOptions,
) -> Result<Bundle, BundlerError> {
    let team_ref = ResourceReference::new(ResourceType::AgentTeams, team_id);
    let resolved = locate(&team_ref, namespace)
        .await
        .ok_or_else(|| BundlerError::TeamNotFound {
            id: team_id.to_string(),
        })?;

    let mut bundle = Bundle::new();
    let path = logical_path(&resolved.absolute_path, source_root)?;
    let document = TeamDocument::new(team_id, resolved.content);
    bundle.push(team_ref, Section::new(path, document.raw.clone()));

    let manifest = match document.manifest() {
        Ok(manifest) => manifest,
        Err(err) => {
            warn!(team = team_id, error = %err, "malformed team manifest, emitting manifest section only");
            return Ok(bundle);
        }
    };

    for agent_id in &manifest.agents {
        match append_agent(&mut bundle, source_root, namespace, agent_id, options).await {
            Ok(()) => {}
            Err(BundlerError::AgentNotFound { id }) => {
                warn!(team = team_id, agent = %id, "member agent not found in any tier, skipping");
            }
            Err(err) => return Err(err),
        }
    }

    Ok(bundle)
}

/// Append every pack-owned resource in the override-scanned categories that
/// no explicit dependency already pulled in. Enumeration is sorted by file
/// name so output never depends on directory iteration order; an absent
/// category directory is an empty enumeration, not an error.
async fn append_undeclared_pack_resources(
    bundle: &mut Bundle,
    source_root: &Path,
    namespace: &Namespace,
) -> Result<(), BundlerError> {
    let Some(pack) = &namespace.pack else {
        return Ok(());
    };

    for category in OVERRIDE_CATEGORIES {
        let dir = pack.path.join(category.dir_name());
        let extension = category.extension();

        let mut names = Vec::new();
        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(pack = %pack.name, category = %category, "no such category directory in pack");
                continue;
            }
            Err(source) => return Err(BundlerError::DirList { path: dir, source }),
        };

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|source| BundlerError::DirList {
                path: dir.clone(),
                source,
            })?
        {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(extension) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();

        for name in names {
            let reference = ResourceReference::new(category, &name);
            if bundle.contains(&reference) {
                continue;
            }

            let file = dir.join(category.file_name(&name));
            let content = tokio::fs::read_to_string(&file)
                .await
                .map_err(|source| BundlerError::FileRead {
                    path: file.clone(),
                    source,
                })?;

            let path = logical_path(&file, source_root)?;
            debug!(pack = %pack.name, reference = %reference, "including undeclared pack resource");
            bundle.push(reference, Section::new(path, content));
        }
    }

    Ok(())
}
