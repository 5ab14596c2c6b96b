use predicates::prelude::*;

use crate::common::{agent_markdown, section_starts, TestEnv};

#[test]
fn agent_without_dependencies_is_preamble_plus_definition() {
    let env = TestEnv::new();
    env.write_core("agents/analyst.md", &agent_markdown("analyst", ""));

    env.cmd()
        .args(["build-agent", "analyst", "--output"])
        .arg(env.out())
        .assert()
        .success();

    let bundle = env.read_output("agents/analyst.txt");
    assert!(bundle.starts_with("# Web Agent Bundle Instructions"));
    assert_eq!(section_starts(&bundle), 1);
    assert!(bundle.contains("START: .bmad-core/agents/analyst.md"));
    assert!(bundle.contains("END: .bmad-core/agents/analyst.md"));
}

#[test]
fn dependencies_are_emitted_in_declaration_order() {
    let env = TestEnv::new();
    env.write_core(
        "agents/analyst.md",
        &agent_markdown(
            "analyst",
            "  tasks:\n    - brainstorm\n  data:\n    - techniques\n",
        ),
    );
    env.write_core("tasks/brainstorm.md", "Brainstorm task.\n");
    env.write_core("data/techniques.md", "Techniques data.\n");

    env.cmd()
        .args(["build-agent", "analyst", "--output"])
        .arg(env.out())
        .assert()
        .success();

    let bundle = env.read_output("agents/analyst.txt");
    let agent = bundle.find("START: .bmad-core/agents/analyst.md").unwrap();
    let task = bundle.find("START: .bmad-core/tasks/brainstorm.md").unwrap();
    let data = bundle.find("START: .bmad-core/data/techniques.md").unwrap();
    assert!(agent < task && task < data);
}

#[test]
fn pack_copy_shadows_core_copy() {
    let env = TestEnv::new();
    env.write_pack(
        "bmad-godot",
        "agents/dev.md",
        &agent_markdown("dev", "  tasks:\n    - setup\n"),
    );
    env.write_pack("bmad-godot", "tasks/setup.md", "PACK COPY\n");
    env.write_core("tasks/setup.md", "CORE COPY\n");

    env.cmd()
        .args(["build-agent", "dev", "--pack", "bmad-godot", "--output"])
        .arg(env.out())
        .assert()
        .success();

    let bundle = env.read_output("expansion-packs/bmad-godot/agents/dev.txt");
    assert!(bundle.contains("PACK COPY"));
    assert!(!bundle.contains("CORE COPY"));
    assert!(bundle.contains("START: .bmad-godot/tasks/setup.md"));
}

#[test]
fn common_is_the_last_resort_tier() {
    let env = TestEnv::new();
    env.write_core(
        "agents/analyst.md",
        &agent_markdown("analyst", "  utils:\n    - doc-template\n"),
    );
    env.write_common("utils/doc-template.md", "COMMON COPY\n");

    env.cmd()
        .args(["build-agent", "analyst", "--output"])
        .arg(env.out())
        .assert()
        .success()
        // Resolved in a tier, so no warning.
        .stderr(predicate::str::contains("not found").not());

    let bundle = env.read_output("agents/analyst.txt");
    assert!(bundle.contains("COMMON COPY"));
    assert!(bundle.contains("START: .bmad-core/utils/doc-template.md"));
}

#[test]
fn missing_dependency_warns_and_is_omitted() {
    let env = TestEnv::new();
    env.write_core(
        "agents/analyst.md",
        &agent_markdown("analyst", "  tasks:\n    - nowhere\n"),
    );

    env.cmd()
        .args(["build-agent", "analyst", "--output"])
        .arg(env.out())
        .assert()
        .success()
        .stderr(predicate::str::contains("tasks#nowhere"));

    let bundle = env.read_output("agents/analyst.txt");
    assert!(!bundle.contains("tasks/nowhere.md"));
    assert_eq!(section_starts(&bundle), 1);
}

#[test]
fn malformed_config_block_degrades_to_definition_only() {
    let env = TestEnv::new();
    env.write_core(
        "agents/broken.md",
        "# broken\n\n```yaml\ndependencies: [unclosed\n```\n",
    );

    env.cmd()
        .args(["build-agent", "broken", "--output"])
        .arg(env.out())
        .assert()
        .success()
        .stderr(predicate::str::contains("malformed configuration block"));

    let bundle = env.read_output("agents/broken.txt");
    assert!(bundle.contains("START: .bmad-core/agents/broken.md"));
    assert_eq!(section_starts(&bundle), 1);
}

#[test]
fn language_option_injects_activation_instruction() {
    let env = TestEnv::new();
    env.write_core("agents/analyst.md", &agent_markdown("analyst", ""));

    env.cmd()
        .args([
            "build-agent",
            "analyst",
            "--language",
            "French",
            "--output",
        ])
        .arg(env.out())
        .assert()
        .success();

    let bundle = env.read_output("agents/analyst.txt");
    assert!(bundle.contains("ALWAYS communicate in French"));
    // The original instruction survives the rewrite.
    assert!(bundle.contains("Stay in character"));
}

#[test]
fn builds_are_byte_identical() {
    let env = TestEnv::new();
    env.write_core(
        "agents/analyst.md",
        &agent_markdown("analyst", "  tasks:\n    - brainstorm\n"),
    );
    env.write_core("tasks/brainstorm.md", "Brainstorm task.\n");

    env.cmd()
        .args(["build-agent", "analyst", "--output"])
        .arg(env.out())
        .assert()
        .success();
    let first = env.read_output("agents/analyst.txt");

    env.cmd()
        .args(["build-agent", "analyst", "--output"])
        .arg(env.out())
        .assert()
        .success();
    let second = env.read_output("agents/analyst.txt");

    assert_eq!(first, second);
}

#[test]
fn unknown_agent_fails() {
    let env = TestEnv::new();

    env.cmd()
        .args(["build-agent", "ghost", "--output"])
        .arg(env.out())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}
