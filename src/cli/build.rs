use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::bundler::{
    build_core_agent, build_core_team, build_pack_agent, build_pack_team, BuildOptions, Bundle,
};
use crate::catalog;
use crate::model::namespace::{CORE_DIR, EXPANSION_PACKS_DIR};

pub struct BuildAllArgs {
    pub output: PathBuf,
    pub agents_only: bool,
    pub teams_only: bool,
    pub core_only: bool,
    pub expansions_only: bool,
    pub language: Option<String>,
}

/// Build every agent and team bundle. Each target is independent: a failed
/// target is reported and the loop moves on; the command exits non-zero at
/// the end if anything failed.
pub async fn run_all(source: &Path, args: BuildAllArgs) -> Result<()> {
    let options = BuildOptions {
        language: args.language,
    };

    let mut built = 0usize;
    let mut failed = 0usize;

    if !args.expansions_only {
        let core = source.join(CORE_DIR);

        if !args.teams_only {
            for id in catalog::agent_ids(&core).context("failed to enumerate core agents")? {
                match build_core_agent(source, &id, &options).await {
                    Ok(bundle) => {
                        write_bundle(&args.output.join("agents"), &id, &bundle)?;
                        println!("  agent {id}: built ({} sections)", bundle.sections().len());
                        built += 1;
                    }
                    Err(err) => {
                        eprintln!("  agent {id}: FAILED - {err}");
                        failed += 1;
                    }
                }
            }
        }

        if !args.agents_only {
            for id in catalog::team_ids(&core).context("failed to enumerate core teams")? {
                match build_core_team(source, &id, &options).await {
                    Ok(bundle) => {
                        write_bundle(&args.output.join("teams"), &id, &bundle)?;
                        println!("  team {id}: built ({} sections)", bundle.sections().len());
                        built += 1;
                    }
                    Err(err) => {
                        eprintln!("  team {id}: FAILED - {err}");
                        failed += 1;
                    }
                }
            }
        }
    }

    if !args.core_only {
        for pack in catalog::pack_names(source).context("failed to enumerate expansion packs")? {
            let pack_dir = source.join(EXPANSION_PACKS_DIR).join(&pack);
            let pack_out = args.output.join(EXPANSION_PACKS_DIR).join(&pack);

            if !args.teams_only {
                for id in catalog::agent_ids(&pack_dir)
                    .with_context(|| format!("failed to enumerate agents in pack '{pack}'"))?
                {
                    match build_pack_agent(source, &pack, &id, &options).await {
                        Ok(bundle) => {
                            write_bundle(&pack_out.join("agents"), &id, &bundle)?;
                            println!("  {pack}/agent {id}: built ({} sections)", bundle.sections().len());
                            built += 1;
                        }
                        Err(err) => {
                            eprintln!("  {pack}/agent {id}: FAILED - {err}");
                            failed += 1;
                        }
                    }
                }
            }

            if !args.agents_only {
                for id in catalog::team_ids(&pack_dir)
                    .with_context(|| format!("failed to enumerate teams in pack '{pack}'"))?
                {
                    match build_pack_team(source, &pack, &id, &options).await {
                        Ok(bundle) => {
                            write_bundle(&pack_out.join("teams"), &id, &bundle)?;
                            println!("  {pack}/team {id}: built ({} sections)", bundle.sections().len());
                            built += 1;
                        }
                        Err(err) => {
                            eprintln!("  {pack}/team {id}: FAILED - {err}");
                            failed += 1;
                        }
                    }
                }
            }
        }
    }

    println!("\nBuild complete: {built} bundles, {failed} failed");
    if failed > 0 {
        anyhow::bail!("{failed} build(s) failed");
    }
    Ok(())
}

pub async fn run_agent(
    source: &Path,
    id: String,
    pack: Option<String>,
    output: PathBuf,
    language: Option<String>,
) -> Result<()> {
    let options = BuildOptions { language };

    let (bundle, out_dir) = match &pack {
        Some(pack) => (
            build_pack_agent(source, pack, &id, &options)
                .await
                .with_context(|| format!("failed to build agent '{id}' in pack '{pack}'"))?,
            output.join(EXPANSION_PACKS_DIR).join(pack).join("agents"),
        ),
        None => (
            build_core_agent(source, &id, &options)
                .await
                .with_context(|| format!("failed to build agent '{id}'"))?,
            output.join("agents"),
        ),
    };

    let path = write_bundle(&out_dir, &id, &bundle)?;
    println!("Built agent bundle: {}", path.display());
    Ok(())
}

pub async fn run_team(
    source: &Path,
    id: String,
    pack: Option<String>,
    output: PathBuf,
    language: Option<String>,
) -> Result<()> {
    let options = BuildOptions { language };

    let (bundle, out_dir) = match &pack {
        Some(pack) => (
            build_pack_team(source, pack, &id, &options)
                .await
                .with_context(|| format!("failed to build team '{id}' in pack '{pack}'"))?,
            output.join(EXPANSION_PACKS_DIR).join(pack).join("teams"),
        ),
        None => (
            build_core_team(source, &id, &options)
                .await
                .with_context(|| format!("failed to build team '{id}'"))?,
            output.join("teams"),
        ),
    };

    let path = write_bundle(&out_dir, &id, &bundle)?;
    println!("Built team bundle: {}", path.display());
    Ok(())
}

/// Serialize a bundle to `{dir}/{id}.txt`, creating the directory first.
fn write_bundle(dir: &Path, id: &str, bundle: &Bundle) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    let path = dir.join(format!("{id}.txt"));
    fs::write(&path, bundle.render())
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}
