#![cfg(feature = "cli")]

use anyhow::Result;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn conf_append() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_conf-append"));
    cmd.env("RUST_LOG", "off");
    cmd
}

#[test]
fn test_cli_appends_and_exits_zero() -> Result<()> {
    let temp_dir = TempDir::new()?;
    fs::create_dir(temp_dir.path().join("node1"))?;
    fs::write(temp_dir.path().join("node1/bitcoin.conf"), "")?;

    let status = conf_append().arg(temp_dir.path()).status()?;

    assert!(status.success());
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("node1/bitcoin.conf"))?,
        "rpcuser=user\nrpcallowip=0.0.0.0/0\n\n"
    );
    Ok(())
}

#[test]
fn test_cli_missing_root_fails() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let output = conf_append().arg(temp_dir.path().join("missing")).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(!output.stderr.is_empty());
    Ok(())
}

#[test]
fn test_cli_invalid_setting_exits_two() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let output = conf_append()
        .arg(temp_dir.path())
        .args(["--suffix", "a/b"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    Ok(())
}

#[test]
fn test_cli_config_file_and_dry_run() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let sandbox = temp_dir.path().join("sandbox");
    fs::create_dir_all(sandbox.join("node1"))?;
    fs::write(sandbox.join("node1/app.cfg"), "keep\n")?;
    let config_path = temp_dir.path().join("append.toml");
    fs::write(&config_path, "[append]\nsuffix = \".cfg\"\nlines = [\"x=1\"]\n")?;

    let status = conf_append()
        .arg(&sandbox)
        .arg("--config")
        .arg(&config_path)
        .arg("--dry-run")
        .status()?;
    assert!(status.success());
    assert_eq!(fs::read_to_string(sandbox.join("node1/app.cfg"))?, "keep\n");

    let status = conf_append()
        .arg(&sandbox)
        .arg("--config")
        .arg(&config_path)
        .status()?;
    assert!(status.success());
    assert_eq!(fs::read_to_string(sandbox.join("node1/app.cfg"))?, "keep\nx=1\n\n");
    Ok(())
}
