use std::{path::PathBuf, time::Duration};

use chrono::{DateTime, Utc};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct FridgeChefConfig {
    pub llm: LLMConfig,
    pub upload: UploadConfig,
    pub session: SessionConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

#[derive(Clone, Debug)]
pub struct UploadConfig {
    pub directory: PathBuf,
    /// Files older than this are removed by the startup sweep. `None` disables it.
    pub retention: Option<Duration>,
}

#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub idle_ttl: Duration,
}

pub fn generate_timestamp() -> DateTime<Utc> {
    Utc::now()
}
