use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn run_applies_default_manifest() {
    let ctx = TestContext::new();
    ctx.write_artifact("greeting", "Hello, World!");
    ctx.write_artifact("token", "abc123");
    ctx.write_file(
        "artvar.toml",
        "[[bindings]]\nfile = \"greeting\"\nvar = \"msg\"\n\n[[bindings]]\nfile = \"token\"\nvar = \"auth\"\n",
    );

    ctx.cli()
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""auth": "abc123""#))
        .stdout(predicate::str::contains(r#""msg": "Hello, World!""#));
}

#[test]
fn run_uses_manifest_root() {
    let ctx = TestContext::new();
    ctx.write_file("suite/data/artifacts/user.txt", "bob");
    let manifest = ctx.write_file(
        "suite/artvar.toml",
        "root = \"data\"\n\n[[bindings]]\nfile = \"user\"\nvar = \"name\"\n",
    );

    ctx.cli()
        .args(["run", "--manifest"])
        .arg(&manifest)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""name": "bob""#));
}

#[test]
fn run_without_manifest_fails() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Manifest not found"));
}

#[test]
fn run_reports_missing_artifact() {
    let ctx = TestContext::new();
    ctx.write_file("artvar.toml", "[[bindings]]\nfile = \"ghost\"\nvar = \"g\"\n");

    ctx.cli()
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("ghost.txt"));
}
