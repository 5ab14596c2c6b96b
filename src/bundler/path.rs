use std::path::{Component, Path};

use crate::error::BundlerError;
use crate::model::namespace::{CORE_BUNDLE_ROOT, EXPANSION_PACKS_DIR};

/// Convert an absolute source path into the stable logical path used inside
/// bundles: `.{bundleRoot}/{relativePath}`.
///
/// The first segment under the source root decides the bundle root: files
/// under `expansion-packs/{pack}/` get `.{pack}`, everything else (core and
/// common) gets `.bmad-core`. Pure function of its inputs; never touches
/// the filesystem.
pub fn logical_path(absolute: &Path, root: &Path) -> Result<String, BundlerError> {
    let relative = absolute
        .strip_prefix(root)
        .map_err(|_| BundlerError::PathOutsideRoot {
            path: absolute.to_path_buf(),
            root: root.to_path_buf(),
        })?;

    let segments: Vec<&str> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => s.to_str(),
            _ => None,
        })
        .collect();

    let (bundle_root, rest) = match segments.split_first() {
        Some((first, rest)) if *first == EXPANSION_PACKS_DIR => match rest.split_first() {
            Some((pack, rest)) => (format!(".{pack}"), rest),
            None => (CORE_BUNDLE_ROOT.to_string(), rest),
        },
        Some((_, rest)) => (CORE_BUNDLE_ROOT.to_string(), rest),
        None => (CORE_BUNDLE_ROOT.to_string(), &segments[..]),
    };

    if rest.is_empty() {
        return Ok(bundle_root);
    }
    Ok(format!("{bundle_root}/{}", rest.join("/")))
}
