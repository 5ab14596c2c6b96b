use std::path::{Path, PathBuf};

pub const CORE_DIR: &str = "bmad-core";
pub const COMMON_DIR: &str = "common";
pub const EXPANSION_PACKS_DIR: &str = "expansion-packs";

/// Bundle-root label for resources that live in the core or common tier.
pub const CORE_BUNDLE_ROOT: &str = ".bmad-core";

/// The three-tier search path for one build: pack-local (optional), shared
/// core, shared common. Resolution order is pack -> core -> common.
#[derive(Debug, Clone)]
pub struct Namespace {
    pub core_path: PathBuf,
    pub common_path: PathBuf,
    pub pack: Option<PackContext>,
}

/// Expansion-pack context, present only for pack builds.
#[derive(Debug, Clone)]
pub struct PackContext {
    pub name: String,
    pub path: PathBuf,
}

impl Namespace {
    /// Namespace for a core build (no pack tier).
    pub fn core(source_root: &Path) -> Self {
        Self {
            core_path: source_root.join(CORE_DIR),
            common_path: source_root.join(COMMON_DIR),
            pack: None,
        }
    }

    /// Namespace for a build inside an expansion pack.
    pub fn pack(source_root: &Path, pack_name: &str) -> Self {
        Self {
            core_path: source_root.join(CORE_DIR),
            common_path: source_root.join(COMMON_DIR),
            pack: Some(PackContext {
                name: pack_name.to_string(),
                path: source_root
                    .join(EXPANSION_PACKS_DIR)
                    .join(pack_name),
            }),
        }
    }

    /// Search roots in precedence order.
    pub fn tiers(&self) -> Vec<&Path> {
        let mut tiers = Vec::with_capacity(3);
        if let Some(pack) = &self.pack {
            tiers.push(pack.path.as_path());
        }
        tiers.push(self.core_path.as_path());
        tiers.push(self.common_path.as_path());
        tiers
    }
}
