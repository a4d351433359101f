pub mod appender;
pub mod discovery;
pub mod writer;

pub use crate::domain::model::{AppendPayload, CandidateFile, RunReport};
pub use crate::domain::ports::{ConfigProvider, ConfigTree};
pub use crate::utils::error::Result;
