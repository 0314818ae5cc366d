//! Integration tests for the leaderboard CLI.
//!
//! These tests drive the built binary against the demo roster and against
//! roster files written into temporary directories.

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

/// A home directory for global config and a separate working directory
/// for project config and roster files.
struct Sandbox {
    home: TempDir,
    work: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            home: TempDir::new().unwrap(),
            work: TempDir::new().unwrap(),
        }
    }

    /// Get a command for running leaderboard, isolated from any user config.
    fn leaderboard(&self) -> Command {
        let mut cmd = Command::cargo_bin("leaderboard").unwrap();
        cmd.env_remove("LEADERBOARD_CONFIG")
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.home.path().join("xdg"))
            .arg("--cwd")
            .arg(self.work.path());
        cmd
    }
}

const TWO_USERS: &str = r#"[
    { "id": "a", "name": "Ann", "stats": { "totalContributions": 5, "xp": 50 } },
    { "id": "b", "name": "Bo", "stats": { "totalContributions": 9, "xp": 90 } }
]"#;

#[test]
fn version_flag_works() {
    let sandbox = Sandbox::new();
    sandbox
        .leaderboard()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("leaderboard"));
}

mod show {
    use super::*;

    #[test]
    fn demo_board() {
        let sandbox = Sandbox::new();
        sandbox
            .leaderboard()
            .arg("show")
            .assert()
            .success()
            .stdout(predicate::str::contains("Leaderboard"))
            .stdout(predicate::str::contains("crown #1"))
            .stdout(predicate::str::contains("All Rankings"))
            .stdout(predicate::str::contains("Morgan Davis (You)"))
            .stdout(predicate::str::contains("Total Contributors: 8"));
    }

    #[test]
    fn json_podium_order() {
        let sandbox = Sandbox::new();
        let output = sandbox
            .leaderboard()
            .args(["show", "--format", "json"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let ranks: Vec<u64> = value["podium"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["layout"]["rank"].as_u64().unwrap())
            .collect();
        assert_eq!(ranks, vec![2, 1, 3]);
        assert_eq!(value["remainder"][0]["rank"], 4);
        assert_eq!(value["current_user"]["user"]["id"], "5");
    }

    #[test]
    fn two_user_roster() {
        let sandbox = Sandbox::new();
        sandbox.work.child("roster.json").write_str(TWO_USERS).unwrap();

        sandbox
            .leaderboard()
            .args(["show", "--roster", "roster.json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("crown #1"))
            .stdout(predicate::str::contains("award #3").not())
            .stdout(predicate::str::contains("Total Contributors: 2"));
    }

    #[test]
    fn unknown_current_user_flags_nobody() {
        let sandbox = Sandbox::new();
        sandbox
            .leaderboard()
            .args(["show", "--current-user", "ghost"])
            .assert()
            .success()
            .stdout(predicate::str::contains("(You)").not());
    }

    #[test]
    fn user_without_stats_ranks_last() {
        let sandbox = Sandbox::new();
        sandbox
            .work
            .child("roster.json")
            .write_str(
                r#"[
                    { "id": "x", "name": "Nostats" },
                    { "id": "a", "name": "A", "stats": { "totalContributions": 3 } },
                    { "id": "b", "name": "B", "stats": { "totalContributions": 2 } },
                    { "id": "c", "name": "C", "stats": { "totalContributions": 1 } }
                ]"#,
            )
            .unwrap();

        sandbox
            .leaderboard()
            .args(["show", "--roster", "roster.json"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "4. Nostats · 0 contributions · 0 XP",
            ));
    }

    #[test]
    fn invalid_roster_fails() {
        let sandbox = Sandbox::new();
        sandbox.work.child("roster.json").write_str("{ nope").unwrap();

        sandbox
            .leaderboard()
            .args(["show", "--roster", "roster.json"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to load roster"));
    }

    #[test]
    fn missing_roster_reports_io_error_once() {
        let sandbox = Sandbox::new();
        let output = sandbox
            .leaderboard()
            .args(["show", "--roster", "nowhere.json"])
            .output()
            .unwrap();
        assert!(!output.status.success());

        let stderr = String::from_utf8(output.stderr).unwrap();
        assert!(stderr.contains("Failed to load roster"));
        assert_eq!(stderr.matches("(os error").count(), 1, "{stderr}");
    }

    #[test]
    fn global_config_roster_is_relative_to_config_file() {
        let sandbox = Sandbox::new();
        let shared = sandbox.home.child("shared");
        shared.child("people.json").write_str(TWO_USERS).unwrap();
        shared
            .child("config.toml")
            .write_str("roster = \"people.json\"")
            .unwrap();

        sandbox
            .leaderboard()
            .env("LEADERBOARD_CONFIG", shared.child("config.toml").path())
            .arg("show")
            .assert()
            .success()
            .stdout(predicate::str::contains("Total Contributors: 2"))
            .stderr(predicate::str::contains("warning").not());
    }

    #[test]
    fn duplicate_ids_fail() {
        let sandbox = Sandbox::new();
        sandbox
            .work
            .child("roster.json")
            .write_str(r#"[{ "id": "a", "name": "A" }, { "id": "a", "name": "B" }]"#)
            .unwrap();

        sandbox
            .leaderboard()
            .args(["show", "--roster", "roster.json"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("duplicate user id 'a'"));
    }

    #[test]
    fn markdown_format() {
        let sandbox = Sandbox::new();
        sandbox
            .leaderboard()
            .args(["show", "--format", "markdown", "--no-header"])
            .assert()
            .success()
            .stdout(predicate::str::contains("| 🥈 2 | 👑 1 | 🥉 3 |"))
            .stdout(predicate::str::contains("🏆").not());
    }
}

mod podium {
    use super::*;

    #[test]
    fn omits_remainder() {
        let sandbox = Sandbox::new();
        sandbox
            .leaderboard()
            .arg("podium")
            .assert()
            .success()
            .stdout(predicate::str::contains("Sarah Chen"))
            .stdout(predicate::str::contains("Taylor Kim").not());
    }
}

mod rank {
    use super::*;

    #[test]
    fn known_user() {
        let sandbox = Sandbox::new();
        sandbox
            .leaderboard()
            .args(["rank", "1"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Sarah Chen is ranked 1 of 8 with 247 contributions",
            ));
    }

    #[test]
    fn quiet_prints_number_only() {
        let sandbox = Sandbox::new();
        sandbox
            .leaderboard()
            .args(["--quiet", "rank", "5"])
            .assert()
            .success()
            .stdout("5\n");
    }

    #[test]
    fn json_reports_resolved_inputs() {
        let sandbox = Sandbox::new();
        let output = sandbox
            .leaderboard()
            .args(["rank", "1", "--format", "json"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(value["rank"], 1);
        assert_eq!(value["tie_break"], "xp");
        assert_eq!(value["current_user"], "5");
    }

    #[test]
    fn unknown_user_fails() {
        let sandbox = Sandbox::new();
        sandbox
            .leaderboard()
            .args(["rank", "99"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("not in the roster"));
    }

    #[test]
    fn custom_roster_tie_break() {
        let sandbox = Sandbox::new();
        sandbox
            .work
            .child("roster.json")
            .write_str(
                r#"[
                    { "id": "low", "name": "Low", "stats": { "totalContributions": 7, "xp": 1 } },
                    { "id": "high", "name": "High", "stats": { "totalContributions": 7, "xp": 9 } }
                ]"#,
            )
            .unwrap();

        sandbox
            .leaderboard()
            .args(["--quiet", "rank", "high", "--roster", "roster.json"])
            .assert()
            .success()
            .stdout("1\n");

        sandbox
            .leaderboard()
            .args([
                "--quiet",
                "rank",
                "high",
                "--roster",
                "roster.json",
                "--tie-break",
                "input-order",
            ])
            .assert()
            .success()
            .stdout("2\n");
    }
}

mod layout {
    use super::*;

    #[test]
    fn winner_layout() {
        let sandbox = Sandbox::new();
        sandbox
            .leaderboard()
            .args(["layout", "1"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Slot: center (2 of 3)"))
            .stdout(predicate::str::contains("Icon: crown"))
            .stdout(predicate::str::contains("Winner: yes"));
    }

    #[test]
    fn markdown_layout_is_a_table() {
        let sandbox = Sandbox::new();
        sandbox
            .leaderboard()
            .args(["layout", "3", "--format", "md"])
            .assert()
            .success()
            .stdout(predicate::str::contains("| Icon | award |"));
    }

    #[test]
    fn non_podium_rank_rejected() {
        let sandbox = Sandbox::new();
        sandbox.leaderboard().args(["layout", "4"]).assert().failure();
    }
}

mod config {
    use super::*;

    #[test]
    fn set_then_get() {
        let sandbox = Sandbox::new();
        sandbox
            .leaderboard()
            .args(["config", "set", "current_user", "2"])
            .assert()
            .success();

        sandbox
            .work
            .child(".leaderboard/config.toml")
            .assert(predicate::path::exists());
        sandbox
            .home
            .child(".leaderboard/config.toml")
            .assert(predicate::path::missing());

        sandbox
            .leaderboard()
            .args(["config", "get", "current_user"])
            .assert()
            .success()
            .stdout("2\n");

        sandbox
            .leaderboard()
            .arg("show")
            .assert()
            .success()
            .stdout(predicate::str::contains("Alex Rivera (You)"));
    }

    #[test]
    fn set_global_then_project_override() {
        let sandbox = Sandbox::new();
        sandbox
            .leaderboard()
            .args(["config", "set", "--global", "tie_break", "input-order"])
            .assert()
            .success();

        sandbox
            .home
            .child(".leaderboard/config.toml")
            .assert(predicate::path::exists());
        sandbox
            .work
            .child(".leaderboard/config.toml")
            .assert(predicate::path::missing());

        sandbox
            .leaderboard()
            .args(["config", "get", "tie_break"])
            .assert()
            .success()
            .stdout("input-order\n");

        sandbox
            .leaderboard()
            .args(["config", "set", "tie_break", "xp"])
            .assert()
            .success();

        sandbox
            .leaderboard()
            .args(["config", "get", "tie_break"])
            .assert()
            .success()
            .stdout("xp\n");
    }

    #[test]
    fn set_accepts_md_alias() {
        let sandbox = Sandbox::new();
        sandbox
            .leaderboard()
            .args(["config", "set", "format", "md"])
            .assert()
            .success();

        sandbox
            .leaderboard()
            .args(["show", "--no-header"])
            .assert()
            .success()
            .stdout(predicate::str::contains("### Podium"));
    }

    #[test]
    fn set_rejects_invalid_value() {
        let sandbox = Sandbox::new();
        sandbox
            .leaderboard()
            .args(["config", "set", "format", "pdf"])
            .assert()
            .failure();
    }

    #[test]
    fn list_shows_defaults() {
        let sandbox = Sandbox::new();
        sandbox
            .leaderboard()
            .args(["config", "list"])
            .assert()
            .success()
            .stdout(predicate::str::contains("tie_break = xp"))
            .stdout(predicate::str::contains("current_user = (not set)"));
    }
}
