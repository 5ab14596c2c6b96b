use std::path::Path;

use anyhow::{Context, Result};

use crate::catalog;
use crate::cli::ListSubcommand;
use crate::model::namespace::{CORE_DIR, EXPANSION_PACKS_DIR};

pub fn run(source: &Path, cmd: ListSubcommand) -> Result<()> {
    match cmd {
        ListSubcommand::Agents => run_targets(source, "agents", catalog::agent_ids),
        ListSubcommand::Teams => run_targets(source, "teams", catalog::team_ids),
        ListSubcommand::Packs => run_packs(source),
    }
}

fn run_targets(
    source: &Path,
    label: &str,
    ids: impl Fn(&Path) -> Result<Vec<String>, crate::error::BundlerError>,
) -> Result<()> {
    let core_ids = ids(&source.join(CORE_DIR))
        .with_context(|| format!("failed to enumerate core {label}"))?;

    if core_ids.is_empty() {
        println!("No core {label}.");
    } else {
        println!("Core {label}:");
        for id in core_ids {
            println!("  {id}");
        }
    }

    for pack in catalog::pack_names(source).context("failed to enumerate expansion packs")? {
        let pack_ids = ids(&source.join(EXPANSION_PACKS_DIR).join(&pack))
            .with_context(|| format!("failed to enumerate {label} in pack '{pack}'"))?;
        if pack_ids.is_empty() {
            continue;
        }
        println!("{pack} {label}:");
        for id in pack_ids {
            println!("  {id}");
        }
    }

    Ok(())
}

fn run_packs(source: &Path) -> Result<()> {
    let packs = catalog::pack_names(source).context("failed to enumerate expansion packs")?;
    if packs.is_empty() {
        println!("No expansion packs.");
        return Ok(());
    }
    for pack in packs {
        println!("  {pack}");
    }
    Ok(())
}
