//! Cross-process determinism for the `plan_fixture` binary.
//!
//! Writes a fixture file, spawns the binary under several environment
//! variants and asserts the stdout lines are identical.

use std::io::Write;
use std::process::Command;

use lock_tests::fixtures::{SMALL_WORLD_FINGERPRINT, SMALL_WORLD_JSON};

fn binary_path() -> String {
    let mut path = std::env::current_exe()
        .expect("can resolve test binary path")
        .parent()
        .expect("binary dir exists")
        .parent()
        .expect("deps parent exists")
        .to_path_buf();
    path.push("plan_fixture");
    path.to_string_lossy().to_string()
}

fn write_fixture(parses: &serde_json::Value, config: &serde_json::Value) -> tempfile::NamedTempFile {
    let world: serde_json::Value = serde_json::from_str(SMALL_WORLD_JSON).unwrap();
    let fixture = serde_json::json!({
        "world": world,
        "parses": parses,
        "config": config,
    });
    let mut file = tempfile::NamedTempFile::new().expect("create fixture file");
    file.write_all(fixture.to_string().as_bytes())
        .expect("write fixture file");
    file
}

fn run_variant(fixture: &str, env_overrides: &[(&str, &str)]) -> (bool, String) {
    let bin = binary_path();

    let mut command = Command::new(&bin);
    command.arg(fixture);
    command
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE")
        .env_remove("RUST_LOG");

    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (overrides={env_overrides:?}): {e}")
    });

    (
        output.status.success(),
        String::from_utf8(output.stdout).expect("stdout is valid UTF-8"),
    )
}

fn default_parses() -> serde_json::Value {
    serde_json::json!([
        {"verb": "take", "entity": {"form": "pyramid"}},
        {"verb": "take", "entity": {"form": "ball", "location":
            {"relation": "inside", "entity": {"form": "box"}}}},
        {"verb": "put", "location": {"relation": "ontop", "entity": {"form": "floor"}}},
    ])
}

#[test]
fn crossproc_determinism_four_env_variants() {
    let fixture = write_fixture(&default_parses(), &serde_json::json!({"narrate": false}));
    let path = fixture.path().to_string_lossy().to_string();

    let (ok, baseline) = run_variant(&path, &[]);
    assert!(ok, "baseline run failed");

    assert!(baseline.contains(&format!("start_fingerprint={SMALL_WORLD_FINGERPRINT}")));
    assert!(baseline.contains("outcome_count=2"));
    assert!(baseline.contains("parse.1.formula=holding(f)"));
    assert!(baseline.contains("parse.2.actions=rrd"));
    assert!(baseline.contains("parse.1.replay_ok=true"));
    assert!(baseline.contains("parse.2.replay_ok=true"));
    assert!(baseline.contains("parse.1.stats_digest=sha256:"));
    assert!(baseline.contains("shortest=2"));
    assert!(!baseline.contains("parse.0."));

    let variants: [&[(&str, &str)]; 3] = [
        &[("LC_ALL", "C")],
        &[("LANG", "en_US.UTF-8"), ("RUST_LOG", "trace")],
        &[("RUST_LOG", "gripper_search=debug"), ("TZ", "America/Los_Angeles")],
    ];
    for overrides in variants {
        let (ok, output) = run_variant(&path, overrides);
        assert!(ok, "run failed under {overrides:?}");
        assert_eq!(output, baseline, "stdout diverged under {overrides:?}");
    }
}

#[test]
fn every_parse_failing_prints_the_first_error() {
    let parses = serde_json::json!([
        {"verb": "take", "entity": {"form": "pyramid"}},
        {"verb": "put", "entity": {"form": "ball"},
         "location": {"relation": "ontop", "entity": {"form": "table"}}},
    ]);
    let fixture = write_fixture(&parses, &serde_json::json!({}));
    let (ok, output) = run_variant(&fixture.path().to_string_lossy(), &[]);
    assert!(ok);
    assert!(output.contains("error=no possible objects found"), "{output}");
}

#[test]
fn malformed_fixture_fails_closed() {
    let fixture = write_fixture(&default_parses(), &serde_json::json!({"max_expansions": 0}));
    let (ok, output) = run_variant(&fixture.path().to_string_lossy(), &[]);
    assert!(!ok);
    assert!(output.is_empty() || !output.contains("outcome_count"));
}
