//! Import end to end

mod common;

use common::*;

#[test]
fn import_restores_remote_scripts_into_identity_sources() {
    let env = TestEnv::new();
    env.write_remote_file("alice/scripts/tool.js", SHARED_SCRIPT_REMOTE);
    env.write_remote_file("bob/scripts/other.js", OWNED_SCRIPT_REMOTE);

    let result = env.run(&["import"]);

    assert!(result.success, "{}", result.combined_output());
    let tool = env.read_project_file("src/js/alice/tool.js");
    assert!(tool.contains("function wrapper (context, args) {"));
    assert!(tool.contains("$fs.scripts.lib()"));
    assert_eq!(
        env.read_project_file("src/js/bob/other.js"),
        "function wrapper (context, args) {\n  $D(args);\n}\n"
    );
    assert!(!env.project_path("src/js/alice/other.js").exists());
}

#[test]
fn import_then_build_round_trips_remote_dialect() {
    let env = TestEnv::new();
    env.write_remote_file("bob/scripts/other.js", OWNED_SCRIPT_REMOTE);

    assert!(env.run(&["import"]).success);
    let result = env.run(&["build:remote"]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(env.read_remote_file("bob/scripts/other.js"), OWNED_SCRIPT_REMOTE);
}

#[test]
fn import_without_remote_root_fails() {
    let env = TestEnv::with_manifest("users = [\"alice\"]\n");

    let result = env.run(&["import"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("remote root is not configured"));
}
