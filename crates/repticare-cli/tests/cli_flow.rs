use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_repticare"))
}

struct Env {
    root: TempDir,
}

impl Env {
    fn new() -> Self {
        let root = tempfile::tempdir().expect("tempdir");
        std::fs::create_dir_all(root.path().join("config")).expect("create config dir");
        std::fs::create_dir_all(root.path().join("data")).expect("create data dir");
        Self { root }
    }

    fn data_dir(&self) -> PathBuf {
        self.root.path().join("data").join("repticare")
    }

    fn config_file(&self) -> PathBuf {
        self.root.path().join("config").join("repticare").join("config.toml")
    }

    fn run(&self, args: &[&str]) -> Output {
        let mut cmd = Command::new(bin());
        cmd.args(args)
            .env("XDG_CONFIG_HOME", self.root.path().join("config"))
            .env("XDG_DATA_HOME", self.root.path().join("data"))
            .env("HOME", self.root.path())
            .env_remove("REPTICARE_DATA_DIR")
            .env_remove("REPTICARE_CONFIG")
            .env_remove("RUST_LOG");
        cmd.output().expect("run repticare")
    }

    fn run_ok(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "repticare {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("utf8 stdout")
    }

    fn run_json(&self, args: &[&str]) -> serde_json::Value {
        serde_json::from_str(&self.run_ok(args)).expect("valid JSON output")
    }
}

fn write_file(path: &Path, contents: &str) {
    std::fs::create_dir_all(path.parent().expect("parent")).expect("create dir");
    std::fs::write(path, contents).expect("write file");
}

#[test]
fn test_first_reptile_is_selected_by_default() {
    let env = Env::new();

    let out = env.run_ok(&["reptile", "add", "Spike"]);
    assert!(out.contains("Added reptile Spike"));
    assert!(out.contains("Spike is now selected by default."));

    let out = env.run_ok(&["reptile", "add", "Noodle"]);
    assert!(!out.contains("selected by default"));

    let reptiles = env.run_json(&["reptile", "list", "--json"]);
    let reptiles = reptiles.as_array().expect("array");
    assert_eq!(reptiles.len(), 2);
    assert_eq!(reptiles[0]["name"], "Spike");
    assert_eq!(reptiles[0]["selected"], true);
    assert_eq!(reptiles[1]["selected"], false);
}

#[test]
fn test_blank_reptile_name_is_rejected() {
    let env = Env::new();

    let output = env.run(&["reptile", "add", "   "]);
    assert_eq!(output.status.code(), Some(4));
    assert!(String::from_utf8_lossy(&output.stderr).contains("must not be empty"));
    assert!(!env.data_dir().join("reptiles.json").exists());
}

#[test]
fn test_add_list_and_stats_flow() {
    let env = Env::new();
    env.run_ok(&["reptile", "add", "Spike"]);

    env.run_ok(&["add", "feeding", "--notes", "crickets"]);
    env.run_ok(&["add", "FEEDING"]);
    env.run_ok(&["add", "bath"]);

    let entries = env.run_json(&["list", "--json"]);
    let entries = entries.as_array().expect("array");
    assert_eq!(entries.len(), 3);
    let timestamps: Vec<_> = entries
        .iter()
        .map(|e| {
            chrono::DateTime::parse_from_rfc3339(e["timestamp"].as_str().expect("timestamp"))
                .expect("RFC 3339 timestamp")
        })
        .collect();
    let mut sorted = timestamps.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(timestamps, sorted);
    assert!(entries.iter().any(|e| e["notes"] == "crickets"));
    assert_eq!(
        entries.iter().filter(|e| e.get("notes").is_none()).count(),
        2
    );

    let stats = env.run_json(&["stats", "--json"]);
    assert_eq!(stats["reptile"]["name"], "Spike");
    assert_eq!(stats["stats"]["totalEntries"], 3);
    assert_eq!(stats["stats"]["perType"]["feeding"]["count"], 2);
    assert_eq!(stats["stats"]["perType"]["bath"]["count"], 1);
    assert_eq!(stats["stats"]["perType"]["toilet"]["count"], 0);
    assert!(stats["stats"]["perType"]["vet"]["last"].is_null());

    let text = env.run_ok(&["stats"]);
    assert!(text.contains("Total entries:  3"));
    assert!(text.contains("Vet visit"));

    let feedings = env.run_json(&["list", "--type", "feeding", "--limit", "1", "--json"]);
    assert_eq!(feedings.as_array().expect("array").len(), 1);
    assert_eq!(feedings[0]["type"], "feeding");
}

#[test]
fn test_entries_stay_with_their_reptile() {
    let env = Env::new();
    env.run_ok(&["reptile", "add", "Spike"]);
    env.run_ok(&["reptile", "add", "Noodle"]);

    env.run_ok(&["add", "vet", "--reptile", "noodle"]);
    env.run_ok(&["add", "toilet"]);

    let spike = env.run_json(&["list", "--json"]);
    let noodle = env.run_json(&["list", "--reptile", "Noodle", "--json"]);
    assert_eq!(spike.as_array().expect("array").len(), 1);
    assert_eq!(spike[0]["type"], "toilet");
    assert_eq!(noodle.as_array().expect("array").len(), 1);
    assert_eq!(noodle[0]["type"], "vet");
    assert_ne!(spike[0]["reptileId"], noodle[0]["reptileId"]);
}

#[test]
fn test_stats_without_entries() {
    let env = Env::new();
    env.run_ok(&["reptile", "add", "Spike"]);

    let out = env.run_ok(&["stats"]);
    assert!(out.contains("No entries yet for Spike."));

    let stats = env.run_json(&["stats", "--json"]);
    assert!(stats["stats"].is_null());

    let quiet = env.run_ok(&["--quiet", "stats"]);
    assert!(quiet.is_empty());
}

#[test]
fn test_undecodable_data_is_reported_as_corrupt() {
    let env = Env::new();
    let reptiles = env.data_dir().join("reptiles.json");
    std::fs::create_dir_all(env.data_dir()).expect("create data dir");
    std::fs::write(&reptiles, [0x5b, 0xff, 0xfe, 0x5d]).expect("write file");

    let output = env.run(&["reptile", "list"]);
    assert_eq!(output.status.code(), Some(6));
    assert!(String::from_utf8_lossy(&output.stderr).contains("left untouched"));
}

#[test]
fn test_commands_need_a_reptile() {
    let env = Env::new();

    let output = env.run(&["add", "feeding"]);
    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stderr).contains("repticare reptile add"));

    env.run_ok(&["reptile", "add", "Spike"]);
    let output = env.run(&["list", "--reptile", "Rex"]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_unknown_entry_type_is_invalid_input() {
    let env = Env::new();
    env.run_ok(&["reptile", "add", "Spike"]);

    let output = env.run(&["add", "shed"]);
    assert_eq!(output.status.code(), Some(4));
    assert!(!env.data_dir().join("entries.json").exists());
}

#[test]
fn test_corrupt_data_fails_loudly() {
    let env = Env::new();
    let reptiles = env.data_dir().join("reptiles.json");
    write_file(&reptiles, "[{\"id\": \"1\", \"name\"");

    let output = env.run(&["reptile", "list"]);
    assert_eq!(output.status.code(), Some(6));
    assert!(String::from_utf8_lossy(&output.stderr).contains("corrupt"));
    assert_eq!(
        std::fs::read_to_string(&reptiles).expect("read"),
        "[{\"id\": \"1\", \"name\""
    );
}

#[test]
fn test_loads_legacy_data() {
    let env = Env::new();
    write_file(
        &env.data_dir().join("reptiles.json"),
        r#"[{"id":"1716200000000","name":"Spike"}]"#,
    );
    write_file(
        &env.data_dir().join("entries.json"),
        r#"[{"id":"1716200000100","reptileId":"1716200000000","type":"feeding","timestamp":"2024-05-20T10:13:20.100Z","notes":"crickets"}]"#,
    );

    let stats = env.run_json(&["stats", "--reptile", "1716200000000", "--json"]);
    assert_eq!(stats["stats"]["totalEntries"], 1);
    assert_eq!(stats["stats"]["lastActivity"], "2024-05-20T10:13:20.100Z");

    let text = env.run_ok(&["list"]);
    assert!(text.contains("20 May 2024, 10:13"));
    assert!(text.contains("crickets"));
}

#[test]
fn test_config_data_dir_and_timezone() {
    let env = Env::new();
    let custom = env.root.path().join("elsewhere");
    write_file(
        &env.config_file(),
        &format!(
            "[storage]\ndata_dir = \"{}\"\n\n[ui]\ntimezone = \"Europe/Moscow\"\n",
            custom.to_string_lossy()
        ),
    );
    write_file(
        &custom.join("reptiles.json"),
        r#"[{"id":"r1","name":"Spike"}]"#,
    );
    write_file(
        &custom.join("entries.json"),
        r#"[{"id":"e1","reptileId":"r1","type":"bath","timestamp":"2024-03-05T21:07:00Z"}]"#,
    );

    let text = env.run_ok(&["list"]);
    assert!(text.contains("6 March 2024, 00:07"));

    env.run_ok(&["reptile", "add", "Noodle"]);
    assert!(!env.data_dir().exists());
}

#[test]
fn test_data_dir_flag_overrides_default() {
    let env = Env::new();
    let custom = env.root.path().join("flag-dir");
    let custom_str = custom.to_string_lossy().to_string();

    env.run_ok(&["--data-dir", &custom_str, "reptile", "add", "Spike"]);

    assert!(custom.join("reptiles.json").exists());
    assert!(!env.data_dir().exists());
}

#[test]
fn test_completions() {
    let env = Env::new();
    let out = env.run_ok(&["completions", "bash"]);
    assert!(out.contains("repticare"));
}
