use predicates::prelude::*;

use crate::common::{agent_markdown, team_yaml, TestEnv};

#[test]
fn list_agents_shows_core_and_packs() {
    let env = TestEnv::new();
    env.write_core("agents/analyst.md", &agent_markdown("analyst", ""));
    env.write_core("agents/pm.md", &agent_markdown("pm", ""));
    env.write_pack("bmad-godot", "agents/dev.md", &agent_markdown("dev", ""));

    env.cmd()
        .args(["list", "agents"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Core agents:"))
        .stdout(predicate::str::contains("analyst"))
        .stdout(predicate::str::contains("pm"))
        .stdout(predicate::str::contains("bmad-godot agents:"))
        .stdout(predicate::str::contains("dev"));
}

#[test]
fn list_teams_shows_manifests() {
    let env = TestEnv::new();
    env.write_core("agents/analyst.md", &agent_markdown("analyst", ""));
    env.write_core(
        "agent-teams/team-all.yaml",
        &team_yaml("Team All", &["analyst"]),
    );

    env.cmd()
        .args(["list", "teams"])
        .assert()
        .success()
        .stdout(predicate::str::contains("team-all"));
}

#[test]
fn list_packs_handles_empty_tree() {
    let env = TestEnv::new();

    env.cmd()
        .args(["list", "packs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expansion packs"));

    env.write_pack("bmad-godot", "agents/dev.md", &agent_markdown("dev", ""));
    env.write_pack("bmad-2d-unity", "agents/dev.md", &agent_markdown("dev", ""));

    env.cmd()
        .args(["list", "packs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bmad-2d-unity"))
        .stdout(predicate::str::contains("bmad-godot"));
}

#[test]
fn list_agents_on_empty_tree() {
    let env = TestEnv::new();

    env.cmd()
        .args(["list", "agents"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No core agents"));
}
