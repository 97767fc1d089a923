use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

mod common;
use common::{assertions, repository::*};

/// Unstyled output so that the status string can be compared as a whole
const PLAIN_STYLES: &str = "
tmux:
  styles:
    clear: ''
    state: ''
    branch: ''
    remote: ''
    divergence: ''
    staged: ''
    conflict: ''
    modified: ''
    untracked: ''
    stashed: ''
    clean: ''
    insertions: ''
    deletions: ''
  symbols:
    branch: ''
";

fn gitmux() -> anyhow::Result<Command> {
    Ok(Command::cargo_bin("gitmux")?)
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn test_printcfg_prints_default_config() -> anyhow::Result<()> {
        gitmux()?
            .arg("--printcfg")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("tmux:"))
            .stdout(predicate::str::contains("layout:"))
            .stdout(predicate::str::contains("branch_trim: right"));

        Ok(())
    }

    #[test]
    fn test_clean_repository() -> anyhow::Result<()> {
        let repo = setup_test_repo_with_initial_commit()?;

        gitmux()?
            .current_dir(repo.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("main"))
            .stdout(predicate::str::contains("✔"))
            .stdout(assertions::ends_with_reset());

        Ok(())
    }

    #[test]
    fn test_dirty_repository_flags() -> anyhow::Result<()> {
        let repo = setup_test_repo_with_initial_commit()?;

        create_file(repo.path(), "initial.txt", "modified content\nsecond line\n")?;
        create_file(repo.path(), "new.txt", "new\n")?;
        create_file(repo.path(), "staged.txt", "staged\n")?;
        git_add(repo.path(), "staged.txt")?;

        gitmux()?
            .current_dir(repo.path())
            .assert()
            .success()
            .stdout(assertions::has_flag("● ", 1))
            .stdout(assertions::has_flag("✚ ", 1))
            .stdout(assertions::has_flag("… ", 1))
            .stdout(predicate::str::contains("✔").not());

        Ok(())
    }

    #[test]
    fn test_directory_argument() -> anyhow::Result<()> {
        let repo = setup_test_repo_with_initial_commit()?;
        let elsewhere = TempDir::new()?;

        gitmux()?
            .current_dir(elsewhere.path())
            .arg(repo.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("main"));

        Ok(())
    }

    #[test]
    fn test_custom_layout() -> anyhow::Result<()> {
        let repo = setup_test_repo_with_initial_commit()?;
        let cfg = write_config(
            &repo,
            &format!("{PLAIN_STYLES}  layout: [branch, ' | ', flags]\n"),
        )?;

        gitmux()?
            .current_dir(repo.path())
            .arg("--cfg")
            .arg(&cfg)
            .assert()
            .success()
            .stdout("main | ✔#[norange default]");

        Ok(())
    }

    #[test]
    fn test_branch_truncation() -> anyhow::Result<()> {
        let repo = setup_test_repo_with_initial_commit()?;
        git(repo.path(), &["checkout", "-q", "-b", "feature/long-branch"])?;
        let cfg = write_config(
            &repo,
            &format!(
                "{PLAIN_STYLES}  layout: [branch]\n  options:\n    branch_max_len: 8\n    branch_trim: left\n"
            ),
        )?;

        gitmux()?
            .current_dir(repo.path())
            .arg("--cfg")
            .arg(&cfg)
            .assert()
            .success()
            .stdout("…-branch#[norange default]");

        Ok(())
    }

    #[test]
    fn test_repository_without_commits() -> anyhow::Result<()> {
        let repo = setup_test_repo()?;
        create_file(repo.path(), "new.txt", "new\n")?;
        let cfg = write_config(&repo, PLAIN_STYLES)?;

        gitmux()?
            .current_dir(repo.path())
            .arg("--cfg")
            .arg(&cfg)
            .assert()
            .success()
            .stdout("main [no commits yet]… 1#[norange default]");

        Ok(())
    }

    #[test]
    fn test_dbg_prints_json_status() -> anyhow::Result<()> {
        let repo = setup_test_repo_with_initial_commit()?;

        let output = gitmux()?
            .current_dir(repo.path())
            .arg("--dbg")
            .output()?;
        assert!(output.status.success());

        let status: serde_json::Value = serde_json::from_slice(&output.stdout)?;
        assert_eq!(status["local_branch"], "main");
        assert_eq!(status["is_clean"], true);
        assert_eq!(status["state"], "default");

        Ok(())
    }

    #[test]
    fn test_not_in_git_repo_is_silent() -> anyhow::Result<()> {
        let dir = TempDir::new()?;

        gitmux()?
            .current_dir(dir.path())
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::is_empty());

        Ok(())
    }

    #[test]
    fn test_not_in_git_repo_reported_with_dbg() -> anyhow::Result<()> {
        let dir = TempDir::new()?;

        gitmux()?
            .current_dir(dir.path())
            .arg("--dbg")
            .assert()
            .failure()
            .stderr(assertions::not_in_git_repo());

        Ok(())
    }

    #[test]
    fn test_invalid_trim_direction() -> anyhow::Result<()> {
        let repo = setup_test_repo_with_initial_commit()?;
        let cfg = write_config(&repo, "tmux:\n  options:\n    branch_trim: sideways\n")?;

        gitmux()?
            .current_dir(repo.path())
            .args(["--dbg", "--cfg"])
            .arg(&cfg)
            .assert()
            .failure()
            .stderr(predicate::str::contains("branch_trim"))
            .stderr(predicate::str::contains("sideways"));

        Ok(())
    }

    #[test]
    fn test_missing_config_file() -> anyhow::Result<()> {
        let repo = setup_test_repo_with_initial_commit()?;

        gitmux()?
            .current_dir(repo.path())
            .args(["--dbg", "--cfg", "does-not-exist.yml"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("does-not-exist.yml"));

        Ok(())
    }

    #[test]
    fn test_branch_trim_direction_alias() -> anyhow::Result<()> {
        let repo = setup_test_repo_with_initial_commit()?;
        git(repo.path(), &["checkout", "-q", "-b", "feature/long-branch"])?;
        let cfg = write_config(
            &repo,
            &format!(
                "{PLAIN_STYLES}  layout: [branch]\n  options:\n    branch_max_len: 8\n    branch_trim_direction: left\n"
            ),
        )?;

        gitmux()?
            .current_dir(repo.path())
            .arg("--cfg")
            .arg(&cfg)
            .assert()
            .success()
            .stdout("…-branch#[norange default]");

        Ok(())
    }

    #[test]
    fn test_single_dash_options() -> anyhow::Result<()> {
        let repo = setup_test_repo_with_initial_commit()?;
        let cfg = write_config(
            &repo,
            &format!("{PLAIN_STYLES}  layout: [branch, ' | ', flags]\n"),
        )?;

        gitmux()?
            .current_dir(repo.path())
            .arg("-cfg")
            .arg(&cfg)
            .args(["-timeout", "30s"])
            .assert()
            .success()
            .stdout("main | ✔#[norange default]");

        Ok(())
    }

    #[test]
    fn test_timeout_long_enough() -> anyhow::Result<()> {
        let repo = setup_test_repo_with_initial_commit()?;

        gitmux()?
            .current_dir(repo.path())
            .args(["--timeout", "30s"])
            .assert()
            .success()
            .stdout(assertions::ends_with_reset());

        Ok(())
    }

    #[test]
    fn test_timeout_expired() -> anyhow::Result<()> {
        let repo = setup_test_repo_with_initial_commit()?;

        gitmux()?
            .current_dir(repo.path())
            .args(["--dbg", "--timeout", "1ns"])
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("timed out"));

        gitmux()?
            .current_dir(repo.path())
            .args(["--timeout", "1ns"])
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::is_empty());

        Ok(())
    }

    #[test]
    fn test_invalid_timeout() -> anyhow::Result<()> {
        gitmux()?
            .args(["--timeout", "soon"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("soon"));

        Ok(())
    }

    #[test]
    fn test_failing_git_command_is_reported() -> anyhow::Result<()> {
        let repo = setup_test_repo()?;

        let err = git(repo.path(), &["checkout", "-q", "no-such-branch"]).unwrap_err();
        assert!(err.to_string().contains("checkout"), "{err}");

        Ok(())
    }
}
