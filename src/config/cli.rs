use crate::config::toml_config::FileConfig;
use crate::config::AppendSettings;
use crate::domain::model::AppendPayload;
use crate::utils::error::Result;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "conf-append")]
#[command(about = "Append RPC settings to every .conf file in a sandbox's node directories")]
pub struct CliConfig {
    /// Sandbox root containing one directory per node
    pub sandbox_root: PathBuf,

    /// TOML file with [append] suffix and lines
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File name suffix to match (default ".conf")
    #[arg(long)]
    pub suffix: Option<String>,

    /// Payload line, repeat for several (replaces the default lines)
    #[arg(long = "line")]
    pub lines: Vec<String>,

    /// List matching files without writing to them
    #[arg(long)]
    pub dry_run: bool,

    /// Emit JSON log lines
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Defaults, then the settings file, then flags given on the command line.
    pub fn resolve(&self) -> Result<AppendSettings> {
        let mut settings = AppendSettings::new(self.sandbox_root.clone());

        if let Some(path) = &self.config {
            tracing::debug!("Loading settings from {}", path.display());
            settings = settings.merge_file(FileConfig::from_file(path)?);
        }

        if let Some(suffix) = &self.suffix {
            settings.suffix = suffix.clone();
        }
        if !self.lines.is_empty() {
            settings.payload = AppendPayload::new(self.lines.clone());
        }
        settings.dry_run = self.dry_run;

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_single_positional_argument() {
        let cli = CliConfig::try_parse_from(["conf-append", "/tmp/x/"]).unwrap();
        let settings = cli.resolve().unwrap();

        assert_eq!(settings.sandbox_root, PathBuf::from("/tmp/x/"));
        assert_eq!(settings.suffix, ".conf");
        assert_eq!(settings.payload, AppendPayload::default());
        assert!(!settings.dry_run);
    }

    #[test]
    fn test_root_is_required() {
        assert!(CliConfig::try_parse_from(["conf-append"]).is_err());
    }

    #[test]
    fn test_flags_override_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("append.toml");
        std::fs::write(
            &config_path,
            "[append]\nsuffix = \".cfg\"\nlines = [\"from=file\"]\n",
        )
        .unwrap();

        let cli = CliConfig::try_parse_from([
            "conf-append",
            "/tmp/x",
            "--config",
            config_path.to_str().unwrap(),
            "--line",
            "rpcuser=cli",
            "--line",
            "rpcallowip=127.0.0.1",
            "--dry-run",
        ])
        .unwrap();
        let settings = cli.resolve().unwrap();

        assert_eq!(settings.suffix, ".cfg");
        assert_eq!(
            settings.payload.lines(),
            ["rpcuser=cli".to_string(), "rpcallowip=127.0.0.1".to_string()]
        );
        assert!(settings.dry_run);
    }
}
