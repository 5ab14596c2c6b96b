use std::path::PathBuf;

use tracing::debug;

use crate::model::{Namespace, ResourceReference};

/// A dependency reference resolved to a physical file.
#[derive(Debug, Clone)]
pub struct Resolved {
    pub content: String,
    pub absolute_path: PathBuf,
}

/// Look a reference up through the namespace tiers in precedence order:
/// pack (when present), then core, then common. First hit wins; tiers are
/// never merged. `None` is the recoverable not-found signal — the caller
/// decides whether to warn.
pub async fn locate(reference: &ResourceReference, namespace: &Namespace) -> Option<Resolved> {
    let file_name = reference.resource_type.file_name(&reference.name);

    for tier in namespace.tiers() {
        let candidate = tier
            .join(reference.resource_type.dir_name())
            .join(&file_name);

        match tokio::fs::read_to_string(&candidate).await {
            Ok(content) => {
                debug!(reference = %reference, path = %candidate.display(), "resolved");
                return Some(Resolved {
                    content,
                    absolute_path: candidate,
                });
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => continue,
            Err(err) => {
                debug!(
                    reference = %reference,
                    path = %candidate.display(),
                    error = %err,
                    "tier read failed, trying next tier"
                );
                continue;
            }
        }
    }

    None
}
