pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::local_fs::LocalFs;
pub use crate::config::{toml_config::FileConfig, AppendSettings};
pub use crate::core::appender::BatchAppender;
pub use crate::domain::model::{AppendPayload, RunReport};
pub use crate::utils::error::{AppendError, Result};
