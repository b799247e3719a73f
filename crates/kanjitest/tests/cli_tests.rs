//! Integration tests for the kanjitest command

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo_bin;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use kanjitest_testkit::{create_test_project, temp_dir_in_workspace, with_isolated_latex_env};

fn kanjitest() -> Command {
    let mut cmd = Command::new(cargo_bin!(env!("CARGO_PKG_NAME")));
    cmd.env_remove("KANJITEST_CONFIG");
    cmd
}

#[test]
fn test_cli_version_flag() {
    kanjitest()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("kanjitest"));
}

#[test]
fn test_cli_help_flag() {
    kanjitest()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--columns"))
        .stdout(predicate::str::contains("--seed"));
}

#[test]
fn test_odd_grid_fails_before_any_io() {
    let temp = temp_dir_in_workspace();
    let root = temp.path();

    kanjitest()
        .args(["--columns", "3", "--rows", "3", "--no-render"])
        .current_dir(root)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: CONFIG_ODD_CELL_COUNT"))
        .stderr(predicate::str::contains("config validation"));

    assert!(!root.join("output").exists());
}

#[test]
fn test_negative_seed_is_rejected() {
    let temp = temp_dir_in_workspace();
    let root = temp.path();
    create_test_project(root, 21, 26);

    kanjitest()
        .args(["-c", "2", "-r", "2", "--seed", "-5", "--no-render"])
        .current_dir(root)
        .assert()
        .failure()
        .stderr(predicate::str::contains("CONFIG_INVALID_VALUE"));
}

#[test]
fn test_insufficient_rows_writes_nothing() {
    let temp = temp_dir_in_workspace();
    let root = temp.path();
    create_test_project(root, 21, 26);

    kanjitest()
        .args(["--columns", "4", "--rows", "6", "--seed", "1", "--no-render"])
        .current_dir(root)
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATA_INSUFFICIENT_ROWS"))
        .stderr(predicate::str::contains("data loading"));

    assert!(!root.join("output").exists());
}

#[test]
fn test_no_render_writes_both_sources() {
    let temp = temp_dir_in_workspace();
    let root = temp.path();
    create_test_project(root, 21, 26);

    kanjitest()
        .args(["--columns", "4", "--rows", "5", "--seed", "7", "--no-render"])
        .arg("--title")
        .arg("Weekly quiz")
        .current_dir(root)
        .assert()
        .success()
        .stdout(predicate::str::contains("test.tex"))
        .stdout(predicate::str::contains("solution.tex"));

    let test = fs::read_to_string(root.join("output/test.tex")).unwrap();
    let solution = fs::read_to_string(root.join("output/solution.tex")).unwrap();
    assert!(test.contains("% title: Weekly quiz"));
    assert!(test.contains("% points: 20"));
    assert!(test.contains("cell[size=50]"));
    assert!(test.contains("(white)"));
    assert!(!solution.contains("(white)"));
}

#[test]
fn test_same_seed_produces_identical_sources() {
    let temp = temp_dir_in_workspace();
    let root = temp.path();
    create_test_project(root, 41, 50);

    let mut outputs = Vec::new();
    for dir in ["first", "second"] {
        kanjitest()
            .args(["-c", "4", "-r", "4", "--seed", "99", "--no-render", "--output", dir])
            .current_dir(root)
            .assert()
            .success();
        outputs.push(fs::read_to_string(root.join(dir).join("test.tex")).unwrap());
    }

    assert_eq!(outputs[0], outputs[1]);
}

#[test]
fn test_config_file_supplies_defaults() {
    let temp = temp_dir_in_workspace();
    let root = temp.path();
    create_test_project(root, 21, 26);
    fs::write(
        root.join("kanjitest.toml"),
        r#"
[worksheet]
language = "fr"
title = "Contrôle"

[paths]
output = "dist"
"#,
    )
    .unwrap();

    kanjitest()
        .args(["-c", "2", "-r", "2", "--seed", "3", "--no-render"])
        .args(["--config", "kanjitest.toml"])
        .current_dir(root)
        .assert()
        .success();

    let solution = fs::read_to_string(root.join("dist/solution.tex")).unwrap();
    assert!(solution.contains("% title: Contrôle"));
    assert!(solution.contains("Test de kanji"));
    assert!(solution.contains("=mot"));
}

#[test]
fn test_missing_latex_reports_not_found_and_keeps_sources() {
    let temp = temp_dir_in_workspace();
    let root = temp.path();
    create_test_project(root, 21, 26);

    with_isolated_latex_env(None, || {
        kanjitest()
            .args(["-c", "2", "-r", "2", "--seed", "3"])
            .current_dir(root)
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Error: RENDER_NOT_FOUND"))
            .stderr(predicate::str::contains("pdflatex -v"));
    });

    assert!(root.join("output/test.tex").exists());
    assert!(root.join("output/solution.tex").exists());
}

#[cfg(unix)]
mod with_fake_latex {
    use super::*;
    use kanjitest_testkit::{recorded_calls, write_fake_latex};

    #[test]
    fn test_render_then_clean_up() {
        let temp = temp_dir_in_workspace();
        let root = temp.path();
        create_test_project(root, 21, 26);
        let bin = root.join("bin");
        let fake = write_fake_latex(&bin, 0);

        kanjitest()
            .args(["-c", "4", "-r", "5", "--seed", "1"])
            .arg("--latex")
            .arg(&fake)
            .current_dir(root)
            .assert()
            .success()
            .stdout(predicate::str::contains("test.pdf"))
            .stdout(predicate::str::contains("solution.pdf"));

        assert_eq!(recorded_calls(&bin), vec!["test.tex", "solution.tex"]);

        let output = root.join("output");
        assert!(output.join("test.pdf").exists());
        assert!(output.join("solution.pdf").exists());
        for leftover in ["test.tex", "test.aux", "test.log", "solution.tex", "solution.aux", "solution.log"] {
            assert!(!output.join(leftover).exists(), "{leftover} left behind");
        }
    }

    #[test]
    fn test_keep_source_leaves_everything() {
        let temp = temp_dir_in_workspace();
        let root = temp.path();
        create_test_project(root, 21, 26);
        let fake = write_fake_latex(&root.join("bin"), 0);

        kanjitest()
            .args(["-c", "2", "-r", "2", "--keep-source"])
            .arg("--latex")
            .arg(&fake)
            .current_dir(root)
            .assert()
            .success();

        let output = root.join("output");
        for kept in ["test.tex", "test.aux", "test.log", "test.pdf", "solution.tex", "solution.pdf"] {
            assert!(output.join(kept).exists(), "{kept} missing");
        }
    }

    #[test]
    fn test_render_failure_stops_before_solution() {
        let temp = temp_dir_in_workspace();
        let root = temp.path();
        create_test_project(root, 21, 26);
        let bin = root.join("bin");
        let fake = write_fake_latex(&bin, 1);

        kanjitest()
            .args(["-c", "2", "-r", "2", "--seed", "1"])
            .arg("--latex")
            .arg(&fake)
            .current_dir(root)
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Error: RENDER_FAILED"))
            .stderr(predicate::str::contains("fake failure in test.tex"));

        assert_eq!(recorded_calls(&bin), vec!["test.tex"]);
        assert!(root.join("output/test.tex").exists());
        assert!(root.join("output/solution.tex").exists());
    }

    #[test]
    fn test_latex_from_environment() {
        let temp = temp_dir_in_workspace();
        let root = temp.path();
        create_test_project(root, 21, 26);
        let bin = root.join("bin");
        let fake = write_fake_latex(&bin, 0);

        with_isolated_latex_env(Some(&fake), || {
            kanjitest()
                .args(["-c", "2", "-r", "2"])
                .current_dir(root)
                .assert()
                .success();
        });

        assert_eq!(recorded_calls(&bin), vec!["test.tex", "solution.tex"]);
    }

    #[test]
    fn test_no_keep_source_overrides_config_file() {
        let temp = temp_dir_in_workspace();
        let root = temp.path();
        create_test_project(root, 21, 26);
        let fake = write_fake_latex(&root.join("bin"), 0);
        fs::write(root.join("kanjitest.toml"), "[render]\nkeep_source = true\n").unwrap();

        kanjitest()
            .args(["-c", "2", "-r", "2", "--config", "kanjitest.toml", "--no-keep-source"])
            .arg("--latex")
            .arg(&fake)
            .current_dir(root)
            .assert()
            .success();

        let output = root.join("output");
        assert!(output.join("test.pdf").exists());
        assert!(!output.join("test.tex").exists());
        assert!(!output.join("solution.aux").exists());
    }
}

#[test]
fn test_grid_overflow_is_a_config_error() {
    let temp = temp_dir_in_workspace();
    let root = temp.path();
    let huge = (usize::MAX / 2 + 1).to_string();

    kanjitest()
        .args(["--columns", huge.as_str(), "--rows", "2", "--no-render"])
        .current_dir(root)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("CONFIG_INVALID_VALUE"))
        .stderr(predicate::str::contains("overflows"));

    assert!(!root.join("output").exists());
}
