use clap::Parser;
use dupes::cli::Cli;
use dupes::error::{ConfigError, ExitCode};
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

/// Parse a command line with an empty config file so user settings never leak in.
fn parse(config_dir: &TempDir, args: &[&str]) -> Cli {
    let config = config_dir.path().join("empty.toml");
    fs::write(&config, "").unwrap();
    let mut argv = vec!["dupes", "--config", config.to_str().unwrap()];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

fn run(cli: &Cli) -> (anyhow::Result<ExitCode>, String) {
    let mut out = Vec::new();
    let result = dupes::run_with_output(cli, &mut out);
    (result, String::from_utf8(out).unwrap())
}

fn p(path: &Path) -> String {
    path.display().to_string()
}

#[test]
fn test_no_roots_is_config_error() {
    let config_dir = tempdir().unwrap();
    let cli = parse(&config_dir, &[]);

    let (result, output) = run(&cli);
    let err = result.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::NoRoots)
    ));
    assert!(output.is_empty());
}

#[test]
fn test_invalid_glob_fails_before_scanning() {
    let config_dir = tempdir().unwrap();
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a"), "x").unwrap();
    fs::write(dir.path().join("b"), "x").unwrap();

    let cli = parse(&config_dir, &["-g", "[abc", dir.path().to_str().unwrap()]);
    let (result, output) = run(&cli);

    let err = result.unwrap_err();
    let config_error = err.downcast_ref::<ConfigError>().unwrap();
    assert!(matches!(config_error, ConfigError::InvalidPattern(_)));
    assert!(config_error
        .to_string()
        .starts_with("invalid pattern for -g ("));
    assert!(output.is_empty());
}

#[test]
fn test_missing_config_file_is_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.toml");
    let cli = Cli::try_parse_from([
        "dupes",
        "--config",
        missing.to_str().unwrap(),
        dir.path().to_str().unwrap(),
    ])
    .unwrap();

    let (result, _) = run(&cli);
    assert!(matches!(
        result.unwrap_err().downcast_ref::<ConfigError>(),
        Some(ConfigError::MissingFile(_))
    ));
}

#[test]
fn test_three_file_scenario_text_output() {
    let config_dir = tempdir().unwrap();
    let dir = tempdir().unwrap();
    let a = dir.path().join("a");
    let b = dir.path().join("b");
    fs::write(&a, "X").unwrap();
    fs::write(&b, "X").unwrap();
    fs::write(dir.path().join("c"), "Y").unwrap();

    let cli = parse(&config_dir, &[dir.path().to_str().unwrap()]);
    let (result, output) = run(&cli);

    assert_eq!(result.unwrap(), ExitCode::Success);
    assert_eq!(
        output,
        format!(
            "{}\n{}\n\n3 files examined, 1 duplicates found, 1.00 bytes wasted\n",
            p(&a),
            p(&b)
        )
    );
}

#[test]
fn test_min_size_flag() {
    let config_dir = tempdir().unwrap();
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("small1"), "abc").unwrap();
    fs::write(dir.path().join("small2"), "abc").unwrap();

    let cli = parse(&config_dir, &["-s", "5", dir.path().to_str().unwrap()]);
    let (result, output) = run(&cli);

    assert_eq!(result.unwrap(), ExitCode::Success);
    // Nothing was indexed, so not even the summary is printed.
    assert!(output.is_empty());
}

#[test]
fn test_glob_flag_filters_names() {
    let config_dir = tempdir().unwrap();
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.jpg"), "img").unwrap();
    fs::write(dir.path().join("b.jpg"), "img").unwrap();
    fs::write(dir.path().join("c.txt"), "img").unwrap();

    let cli = parse(&config_dir, &["-g", "*.jpg", dir.path().to_str().unwrap()]);
    let (_, output) = run(&cli);

    assert!(output.ends_with("2 files examined, 1 duplicates found, 3.00 bytes wasted\n"));
    assert!(!output.contains("c.txt"));
}

#[test]
fn test_paranoid_flag_still_reports_real_duplicates() {
    let config_dir = tempdir().unwrap();
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a"), "same content").unwrap();
    fs::write(dir.path().join("b"), "same content").unwrap();

    let cli = parse(&config_dir, &["-p", dir.path().to_str().unwrap()]);
    let (_, output) = run(&cli);

    assert!(!output.contains("cool:"));
    assert!(output.ends_with("2 files examined, 1 duplicates found, 12.00 bytes wasted\n"));
}

#[test]
fn test_json_output() {
    let config_dir = tempdir().unwrap();
    let dir = tempdir().unwrap();
    let a = dir.path().join("a");
    fs::write(&a, "dup").unwrap();
    fs::write(dir.path().join("b"), "dup").unwrap();

    let cli = parse(
        &config_dir,
        &["--output", "json", "-a", "blake3", dir.path().to_str().unwrap()],
    );
    let (result, output) = run(&cli);
    assert_eq!(result.unwrap(), ExitCode::Success);

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["clusters"][0]["original"], p(&a));
    assert_eq!(value["summary"]["files_examined"], 2);
    assert_eq!(value["summary"]["duplicates_found"], 1);
    assert_eq!(value["summary"]["bytes_wasted"], 3);
    assert_eq!(value["summary"]["algorithm"], "blake3");
    assert_eq!(value["summary"]["exit_code"], 0);
}

#[test]
fn test_config_file_supplies_defaults() {
    let dir = tempdir().unwrap();
    let scan = dir.path().join("scan");
    fs::create_dir(&scan).unwrap();
    fs::write(scan.join("small1"), "abc").unwrap();
    fs::write(scan.join("small2"), "abc").unwrap();

    let config = dir.path().join("dupes.toml");
    fs::write(&config, "min_size = 10\n").unwrap();

    let cli = Cli::try_parse_from([
        "dupes",
        "--config",
        config.to_str().unwrap(),
        scan.to_str().unwrap(),
    ])
    .unwrap();
    let (_, output) = run(&cli);
    assert!(output.is_empty());

    // The command line wins over the file.
    let cli = Cli::try_parse_from([
        "dupes",
        "--config",
        config.to_str().unwrap(),
        "-s",
        "1",
        scan.to_str().unwrap(),
    ])
    .unwrap();
    let (_, output) = run(&cli);
    assert!(output.ends_with("2 files examined, 1 duplicates found, 3.00 bytes wasted\n"));
}

#[test]
fn test_print_config_needs_no_roots() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("dupes.toml");
    fs::write(&config, "min_size = 42\nglob = \"*.png\"\n").unwrap();

    let cli = Cli::try_parse_from([
        "dupes",
        "--config",
        config.to_str().unwrap(),
        "-p",
        "--print-config",
    ])
    .unwrap();
    let (result, output) = run(&cli);

    assert_eq!(result.unwrap(), ExitCode::Success);
    assert!(output.contains("min_size = 42"), "{output}");
    assert!(output.contains("glob = \"*.png\""), "{output}");
    assert!(output.contains("paranoid = true"), "{output}");
}

#[test]
fn test_no_flags_override_config_file() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("dupes.toml");
    fs::write(&config, "paranoid = true\nfollow_symlinks = true\n").unwrap();

    let cli = Cli::try_parse_from([
        "dupes",
        "--config",
        config.to_str().unwrap(),
        "--no-paranoid",
        "--no-follow-symlinks",
        "--print-config",
    ])
    .unwrap();
    let (_, output) = run(&cli);

    assert!(output.contains("paranoid = false"), "{output}");
    assert!(output.contains("follow_symlinks = false"), "{output}");
}
