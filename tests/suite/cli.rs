//! End-to-end tests against the `jackhouse` binary

use crate::common::{REFERENCE_LINE, Sandbox, stderr, stdout};

#[test]
fn default_invocation_prints_reference_line() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&[]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), REFERENCE_LINE);
}

#[test]
fn explicit_default_policy_matches_reference() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["--policy", "default"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), REFERENCE_LINE);
}

#[test]
fn recite_prints_twelve_lines() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["--recite"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert_eq!(text.matches("This is ").count(), 12);
    assert!(text.starts_with("This is the house that Jack built.\n"));
    assert!(text.ends_with(REFERENCE_LINE));
}

#[test]
fn line_flag_selects_a_line() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["--line", "2"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "This is the malt that lay in the house that Jack built.\n"
    );
}

#[test]
fn out_of_range_line_fails() {
    let sandbox = Sandbox::new();
    for number in ["0", "13"] {
        let output = sandbox.run(&["--line", number]);
        assert!(!output.status.success());
        assert!(stdout(&output).is_empty());
        assert!(stderr(&output).contains("out of range"));
    }
}

#[test]
fn unknown_policy_fails() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["--policy", "sideways"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("sideways"));
}

#[test]
fn seeded_random_runs_repeat() {
    let sandbox = Sandbox::new();
    let first = sandbox.run(&["--policy", "random", "--seed", "1234", "--recite"]);
    let second = sandbox.run(&["--policy", "random", "--seed", "1234", "--recite"]);
    assert!(first.status.success());
    assert_eq!(stdout(&first), stdout(&second));
}

#[test]
fn mostly_random_ends_with_the_house() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["--policy", "mostly_random"]);
    assert!(output.status.success());
    assert!(stdout(&output).ends_with("the house that Jack built.\n"));
}

#[test]
fn every_policy_prints_headers() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["--every-policy", "--seed", "5"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.starts_with(&format!("--default--\n{REFERENCE_LINE}")));
    assert!(text.contains("--random--\n"));
    assert!(text.contains("--mostly_random--\n"));
}

#[test]
fn config_file_supplies_policy_and_mode() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[recital]\npolicy = \"mostly_random\"\nmode = \"recital\"\nseed = 3\n");
    let output = sandbox.run(&[]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert_eq!(text.matches("This is ").count(), 12);
    assert!(text.starts_with("This is the house that Jack built.\n"));
}

#[test]
fn env_policy_overrides_config() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[recital]\npolicy = \"random\"\n");
    let output = sandbox
        .command()
        .env("JACKHOUSE_POLICY", "default")
        .output()
        .expect("run jackhouse");
    assert!(output.status.success());
    assert_eq!(stdout(&output), REFERENCE_LINE);
}

#[test]
fn invalid_env_policy_fails() {
    let sandbox = Sandbox::new();
    let output = sandbox
        .command()
        .env("JACKHOUSE_POLICY", "nonsense")
        .output()
        .expect("run jackhouse");
    assert!(!output.status.success());
    assert!(stderr(&output).contains("JACKHOUSE_POLICY"));
}

#[test]
fn malformed_config_fails() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[recital]\npolicy = \"upside_down\"\n");
    let output = sandbox.run(&[]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Failed to load config"));
}

#[test]
fn save_policy_writes_config() {
    let sandbox = Sandbox::new();
    sandbox.write_config("# keep me\n[recital]\nmode = \"line\"\n");
    let output = sandbox.run(&["--policy", "mostly_random", "--save-policy"]);
    assert!(output.status.success(), "{}", stderr(&output));

    let saved = sandbox.read_config();
    assert!(saved.contains("# keep me"));
    assert!(saved.contains("policy = \"mostly_random\""));
    assert!(saved.contains("mode = \"line\""));
}
