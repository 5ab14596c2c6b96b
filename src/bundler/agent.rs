use std::path::Path;

use tracing::warn;

use crate::error::BundlerError;
use crate::model::{AgentDocument, Namespace, ResourceReference, ResourceType};

use super::{locate, logical_path, Bundle, Section};

/// Knobs for a single build invocation.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// When set, an extra activation instruction pinning the response
    /// language is injected into each agent's configuration block.
    pub language: Option<String>,
}

impl BuildOptions {
    fn activation_instruction(&self) -> Option<String> {
        self.language
            .as_ref()
            .map(|lang| format!("ALWAYS communicate in {lang} when interacting with the user"))
    }
}

/// Build a bundle for one core agent (no pack tier in the search path).
pub async fn build_core_agent(
    source_root: &Path,
    agent_id: &str,
    options: &BuildOptions,
) -> Result<Bundle, BundlerError> {
    let namespace = Namespace::core(source_root);
    let mut bundle = Bundle::new();
    append_agent(&mut bundle, source_root, &namespace, agent_id, options).await?;
    Ok(bundle)
}

/// Build a bundle for one expansion-pack agent: the pack tier shadows core,
/// core shadows common.
pub async fn build_pack_agent(
    source_root: &Path,
    pack_name: &str,
    agent_id: &str,
    options: &BuildOptions,
) -> Result<Bundle, BundlerError> {
    let namespace = Namespace::pack(source_root, pack_name);
    let mut bundle = Bundle::new();
    append_agent(&mut bundle, source_root, &namespace, agent_id, options).await?;
    Ok(bundle)
}

/// Append one agent's definition and resolved dependencies to `bundle`.
///
/// Shared between the agent builders and the team builder; the bundle's
/// dedup set decides what actually lands, so a team member whose definition
/// was already emitted contributes nothing further.
///
/// Failure semantics: an unlocatable agent document is fatal for this
/// build; an unparseable configuration block degrades to the definition
/// section alone; each unresolved dependency is warned about and skipped.
pub(crate) async fn append_agent(
    bundle: &mut Bundle,
    source_root: &Path,
    namespace: &Namespace,
    agent_id: &str,
    options: &BuildOptions,
) -> Result<(), BundlerError> {
    let agent_ref = ResourceReference::new(ResourceType::Agents, agent_id);
    if bundle.contains(&agent_ref) {
        return Ok(());
    }

    let resolved = locate(&agent_ref, namespace)
        .await
        .ok_or_else(|| BundlerError::AgentNotFound {
            id: agent_id.to_string(),
        })?;

    let document = AgentDocument::new(agent_id, resolved.content);

    let body = match options.activation_instruction() {
        Some(instruction) => match document.with_activation_instruction(&instruction) {
            Ok(rewritten) => rewritten,
            Err(err) => {
                warn!(agent = agent_id, error = %err, "could not inject activation instruction, emitting definition unchanged");
                document.raw.clone()
            }
        },
        None => document.raw.clone(),
    };

    let path = logical_path(&resolved.absolute_path, source_root)?;
    bundle.push(agent_ref, Section::new(path, body));

    let dependencies = match document.dependencies() {
        Ok(deps) => deps,
        Err(err) => {
            warn!(agent = agent_id, error = %err, "malformed configuration block, emitting definition only");
            return Ok(());
        }
    };

    for reference in dependencies.references() {
        if bundle.contains(&reference) {
            continue;
        }
        match locate(&reference, namespace).await {
            Some(resolved) => {
                let path = logical_path(&resolved.absolute_path, source_root)?;
                bundle.push(reference, Section::new(path, resolved.content));
            }
            None => {
                warn!(agent = agent_id, reference = %reference, "dependency not found in any tier, skipping");
            }
        }
    }

    Ok(())
}
