//! End-to-end tests for the `corkboard` binary
//!
//! Each test runs in its own temp directory so no stray `corkboard.yaml`
//! is picked up.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

struct CorkboardTest {
    temp_dir: TempDir,
}

impl CorkboardTest {
    fn new() -> Self {
        CorkboardTest {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    fn write(&self, name: &str, content: &str) {
        fs::write(self.path().join(name), content).expect("Failed to write file");
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_corkboard"))
            .args(args)
            .current_dir(self.path())
            .env_remove("CORKBOARD_CONFIG")
            .env("NO_COLOR", "1")
            .output()
            .expect("Failed to execute command")
    }

    fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "command {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(!output.status.success(), "command {:?} should fail", args);
        String::from_utf8_lossy(&output.stderr).to_string()
    }
}

const TWO_LISTS: &str = r#"
lists:
  - title: to do
    cards: [A, B, C]
  - title: doing
    cards: [D, E]
"#;

#[test]
fn test_show_default_board() {
    let t = CorkboardTest::new();
    let stdout = t.run_success(&["show"]);
    assert!(stdout.contains("to do (3)"));
    assert!(stdout.contains("in progress (4)"));
    assert!(stdout.contains("0. implement player movement"));
}

#[test]
fn test_show_reads_working_directory_config() {
    let t = CorkboardTest::new();
    t.write("corkboard.yaml", TWO_LISTS);
    let stdout = t.run_success(&["show"]);
    assert!(stdout.contains("doing (2)"));
    assert!(!stdout.contains("in progress"));
}

#[test]
fn test_show_json() {
    let t = CorkboardTest::new();
    t.write("board.yaml", TWO_LISTS);
    let stdout = t.run_success(&["show", "--json", "--config", "board.yaml"]);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["card_count"], 5);
    assert_eq!(value["lists"][1]["title"], "doing");
    assert_eq!(value["lists"][0]["cards"][2]["content"], "C");
}

#[test]
fn test_replay_moves_card() {
    let t = CorkboardTest::new();
    t.write("corkboard.yaml", TWO_LISTS);
    t.write(
        "move.yaml",
        r#"
steps:
  - op: drag
    kind: card
    source: { container_index: 0, item_index: 1 }
    hover:
      - { container_index: 1, item_index: 0 }
    destination: { container_index: 1, item_index: 0 }
"#,
    );

    let stdout = t.run_success(&["replay", "move.yaml", "--json"]);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(value["steps"][0]["outcome"], "card move [0:1] -> [1:0]");
    assert_eq!(value["steps"][0]["placeholders"][1]["offset_y"], 8.0);
    let moved: Vec<&str> = value["board"]["lists"][1]["cards"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["content"].as_str().unwrap())
        .collect();
    assert_eq!(moved, vec!["B", "D", "E"]);
}

#[test]
fn test_replay_text_output() {
    let t = CorkboardTest::new();
    t.write("corkboard.yaml", TWO_LISTS);
    t.write(
        "script.yaml",
        r#"
steps:
  - op: add_list
    title: done
  - op: drag
    kind: list
    source: { container_index: 2 }
    destination: { container_index: 0 }
"#,
    );

    let stdout = t.run_success(&["replay", "script.yaml"]);
    assert!(stdout.contains("add list \"done\""));
    assert!(stdout.contains("=> list reorder 2 -> 0"));
    assert!(stdout.contains("Final board:"));
    assert!(stdout.find("done (0)").unwrap() < stdout.find("to do (3)").unwrap());
}

#[test]
fn test_replay_reports_failing_step() {
    let t = CorkboardTest::new();
    t.write("corkboard.yaml", TWO_LISTS);
    t.write(
        "bad.yaml",
        r#"
steps:
  - op: add_card
    list: 0
    content: F
  - op: remove_card
    list: 1
    card: 7
"#,
    );

    let stderr = t.run_failure(&["replay", "bad.yaml"]);
    assert!(stderr.contains("step 2"), "stderr: {stderr}");
}

#[test]
fn test_replay_missing_script() {
    let t = CorkboardTest::new();
    let stderr = t.run_failure(&["replay", "nope.yaml"]);
    assert!(stderr.contains("nope.yaml"), "stderr: {stderr}");
}

#[test]
fn test_malformed_config_fails() {
    let t = CorkboardTest::new();
    t.write("corkboard.yaml", "lists: {not: a list}\n");
    t.run_failure(&["show"]);
}

#[test]
fn test_config_prints_effective_yaml() {
    let t = CorkboardTest::new();
    let stdout = t.run_success(&["config"]);
    assert!(stdout.contains("card_height: 48"));
    assert!(stdout.contains("title: to do"));
}
