/// End-to-end tests for the CLI
///
/// These tests run the built binary against the manifest fixtures, using
/// `assert_cmd` and `tempfile` for isolated output directories.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

mod exit_code_tests {
    use super::*;

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("fsio-gen").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("fsio-gen").arg("--version").assert().code(0);
    }

    /// Exit code 2: missing required --manifest
    #[test]
    fn test_exit_code_missing_manifest() {
        cargo_bin_cmd!("fsio-gen").assert().code(2);
    }

    /// Exit code 2: invalid line ending value
    #[test]
    fn test_exit_code_invalid_line_ending() {
        cargo_bin_cmd!("fsio-gen")
            .args(["-m", "settings.yml", "-l", "unix"])
            .assert()
            .code(2);
    }

    /// Exit code 1: manifest does not exist
    #[test]
    fn test_exit_code_manifest_not_found() {
        let dir = TempDir::new().unwrap();
        cargo_bin_cmd!("fsio-gen")
            .current_dir(dir.path())
            .args(["-m", "missing.yml", "-e", "e.h", "-g", "g.h"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Settings manifest not found"));
    }

    /// Exit code 1: output directory does not exist
    #[test]
    fn test_exit_code_output_directory_missing() {
        let dir = TempDir::new().unwrap();
        cargo_bin_cmd!("fsio-gen")
            .current_dir(dir.path())
            .arg("-m")
            .arg(fixture("fsio_settings.yml"))
            .args(["-e", "nope/e.h", "-g", "g.h"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Parent directory does not exist"));
    }

    /// Exit code 1: enum and getters outputs are the same file
    #[test]
    fn test_exit_code_same_output_for_both_files() {
        let dir = TempDir::new().unwrap();
        cargo_bin_cmd!("fsio-gen")
            .current_dir(dir.path())
            .arg("-m")
            .arg(fixture("fsio_settings.yml"))
            .args(["-e", "fsio.h", "-g", "./fsio.h"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("same file as the enum output"));

        assert!(!dir.path().join("fsio.h").exists());
    }

    /// Exit code 1: no getters output anywhere
    #[test]
    fn test_exit_code_missing_getters_output() {
        let dir = TempDir::new().unwrap();
        cargo_bin_cmd!("fsio-gen")
            .current_dir(dir.path())
            .arg("-m")
            .arg(fixture("fsio_settings.yml"))
            .args(["-e", "e.h"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("--getters-output"));
    }
}

#[test]
fn test_e2e_generates_both_files() {
    let dir = TempDir::new().unwrap();
    let enum_path = dir.path().join("fsio_enums.h");
    let getters_path = dir.path().join("fsio_getters.h");

    cargo_bin_cmd!("fsio-gen")
        .current_dir(dir.path())
        .arg("-m")
        .arg(fixture("fsio_settings.yml"))
        .arg("-e")
        .arg(&enum_path)
        .arg("-g")
        .arg(&getters_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Generated 3 FSIO setting(s)"));

    let enum_content = fs::read_to_string(&enum_path).unwrap();
    assert!(enum_content
        .starts_with("// this file was generated automatically by fsio-gen\n\n// by "));
    assert!(enum_content.contains("FileSettingsEmitter\n"));
    assert!(enum_content.ends_with(
        "\tFSIO_SETTING_FANONTEMPERATURE = 1000,\n\
         \tFSIO_SETTING_FANOFFTEMPERATURE = 1001,\n\
         \tFSIO_SETTING_RPMHARDLIMIT = 1002,\n"
    ));

    let getters_content = fs::read_to_string(&getters_path).unwrap();
    assert!(getters_content.contains(
        "\tcase FSIO_SETTING_RPMHARDLIMIT:\n\t\treturn engineConfiguration->rpmHardLimit;\n"
    ));
    assert!(!getters_content.contains("debugMode"));
}

#[test]
fn test_e2e_json_manifest_quiet() {
    let dir = TempDir::new().unwrap();

    cargo_bin_cmd!("fsio-gen")
        .current_dir(dir.path())
        .arg("-m")
        .arg(fixture("fsio_settings.json"))
        .args(["-e", "e.h", "-g", "g.h", "--quiet"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    let enum_content = fs::read_to_string(dir.path().join("e.h")).unwrap();
    assert!(enum_content.ends_with("\tFSIO_SETTING_TPSMIN = 1000,\n\tFSIO_SETTING_TPSMAX = 1001,\n"));
}

#[test]
fn test_e2e_config_file_discovered() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("fsio-gen.config.yml"),
        "generation_message: was generated from config\n\
         line_ending: crlf\n\
         enum_output: enums.h\n\
         getters_output: getters.h\n",
    )
    .unwrap();

    cargo_bin_cmd!("fsio-gen")
        .current_dir(dir.path())
        .arg("-m")
        .arg(fixture("fsio_settings.json"))
        .arg("-q")
        .assert()
        .success();

    let enum_content = fs::read_to_string(dir.path().join("enums.h")).unwrap();
    assert!(enum_content.starts_with("// this file was generated from config\r\n\r\n// by "));
    assert!(dir.path().join("getters.h").exists());
}

#[test]
fn test_e2e_cli_overrides_config_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("custom.yml");
    fs::write(
        &config_path,
        "line_ending: crlf\nenum_output: from_config.h\ngetters_output: getters.h\n",
    )
    .unwrap();

    cargo_bin_cmd!("fsio-gen")
        .current_dir(dir.path())
        .arg("-m")
        .arg(fixture("fsio_settings.json"))
        .arg("-c")
        .arg(&config_path)
        .args(["-e", "from_cli.h", "-l", "lf", "--message", "was overridden", "-q"])
        .assert()
        .success();

    assert!(!dir.path().join("from_config.h").exists());
    let enum_content = fs::read_to_string(dir.path().join("from_cli.h")).unwrap();
    assert!(enum_content.starts_with("// this file was overridden\n\n"));
    assert!(!enum_content.contains('\r'));
}

#[test]
fn test_e2e_unknown_config_field_warns() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("fsio-gen.config.yml"),
        "enum_output: e.h\ngetters_output: g.h\nnames_output: n.h\n",
    )
    .unwrap();

    cargo_bin_cmd!("fsio-gen")
        .current_dir(dir.path())
        .arg("-m")
        .arg(fixture("fsio_settings.yml"))
        .arg("-q")
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown config field 'names_output'"));
}
