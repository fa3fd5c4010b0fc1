use crate::harness::TestContext;
use serde_json::json;

#[test]
fn defaults_resolve_against_working_directory() {
    let ctx = TestContext::new();

    ctx.cli().assert().success();

    let invocation = ctx.invocation();
    let work = ctx.work_dir();
    assert_eq!(invocation["config"]["source"], work.join("test").to_str().unwrap());
    assert_eq!(invocation["config"]["destination"], work.join("generated").to_str().unwrap());
}

#[test]
fn positionals_set_source_and_destination() {
    let ctx = TestContext::new();

    ctx.cli().args(["foo", "bar"]).assert().success();

    let invocation = ctx.invocation();
    let work = ctx.work_dir();
    assert_eq!(invocation["config"]["source"], work.join("foo").to_str().unwrap());
    assert_eq!(invocation["config"]["destination"], work.join("bar").to_str().unwrap());
    assert_eq!(invocation["options"]["positionals"], json!(["foo", "bar"]));
}

#[test]
fn prelude_defaults_environment_and_exports_it() {
    let ctx = TestContext::new();

    ctx.cli().assert().success();

    assert_eq!(
        ctx.prelude_lines(),
        vec!["process.env.NODE_ENV=\"spec\"", "process.env.PORT=8081"]
    );
    assert_eq!(ctx.runner_env("node_env"), "spec");
    assert_eq!(ctx.runner_env("port"), "8081");
}

#[test]
fn existing_environment_is_never_overridden() {
    let ctx = TestContext::new();

    ctx.cli().env("NODE_ENV", "ci").env("PORT", "9001").assert().success();

    assert_eq!(
        ctx.prelude_lines(),
        vec!["process.env.NODE_ENV=\"ci\"", "process.env.PORT=9001"]
    );
    assert_eq!(ctx.runner_env("node_env"), "ci");
    assert_eq!(ctx.runner_env("port"), "9001");
}

#[test]
fn require_values_become_load_statements_in_order() {
    let ctx = TestContext::new();
    let runtime = ctx.write_file("support/runtime.js", "");

    ctx.cli()
        .args(["-R", "./support/runtime.js", "--require", "chai", "--require=missing.js"])
        .assert()
        .success();

    let lines = ctx.prelude_lines();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[2], format!("require({})", json!(runtime.to_str().unwrap())));
    assert_eq!(lines[3], "require(\"chai\")");
    assert_eq!(lines[4], "require(\"missing.js\")");
}

#[test]
fn forwarded_options_reach_the_runner() {
    let ctx = TestContext::new();

    ctx.cli()
        .args([
            "-FS",
            "-T",
            "integration",
            "--browser=safari",
            "-L",
            "Spanish",
            "--env",
            "chrome",
            "--",
            "python",
            "-m",
            "http.server",
        ])
        .assert()
        .success();

    let options = &ctx.invocation()["options"];
    assert_eq!(options["force"], true);
    assert_eq!(options["standalone"], true);
    assert_eq!(options["target"], "integration");
    assert_eq!(options["browser"], "safari");
    assert_eq!(options["language"], "Spanish");
    assert_eq!(options["steps"], serde_json::Value::Null);
    assert_eq!(options["unknown"], json!(["--env", "chrome"]));
    assert_eq!(options["trailing"], json!(["python", "-m", "http.server"]));
}

#[test]
fn runner_can_be_configured_from_file() {
    let ctx = TestContext::new();
    ctx.write_file(
        "nahual.toml",
        &format!(
            "[runner]\nprogram = \"sh\"\nargs = [{}]\n",
            json!(ctx.runner_path().to_str().unwrap())
        ),
    );

    ctx.cli().env_remove("NAHUAL_RUNNER").assert().success();

    assert!(ctx.runner_invoked());
}
