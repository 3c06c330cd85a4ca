use std::path::{Component, PathBuf};
use std::time::Duration;

use clap::{Args as ClapArgs, Parser};
use fridgechef_core::{
    domain::common::{FridgeChefConfig, LLMConfig, SessionConfig, UploadConfig},
    infrastructure::llm::openai_client::{DEFAULT_BASE_URL, DEFAULT_MODEL},
};

#[derive(Debug, Clone, Parser)]
#[command(name = "fridgechef", version, about = "Photo-to-recipe web application")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub storage: StorageArgs,

    #[command(flatten)]
    pub session: SessionArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// PEM certificate; serving switches to HTTPS when set together with `--tls-key`
    #[arg(long, env = "TLS_CERT", requires = "tls_key")]
    pub tls_cert: Option<PathBuf>,

    #[arg(long, env = "TLS_KEY", requires = "tls_cert")]
    pub tls_key: Option<PathBuf>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long = "openai-api-key", env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: String,

    #[arg(long = "llm-model", env = "LLM_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    #[arg(long = "llm-base-url", env = "LLM_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct StorageArgs {
    #[arg(long, env = "STATIC_DIR", default_value = "static")]
    pub static_dir: PathBuf,

    #[arg(long, env = "UPLOAD_DIR", default_value = "static/uploads")]
    pub upload_dir: PathBuf,

    /// Uploads older than this are deleted at startup; 0 disables the sweep
    #[arg(long, env = "UPLOAD_RETENTION_SECS", default_value_t = 3600)]
    pub upload_retention_secs: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct SessionArgs {
    #[arg(long, env = "SESSION_TTL_SECS", default_value_t = 14 * 24 * 60 * 60)]
    pub session_ttl_secs: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    /// Used when RUST_LOG is not set
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

impl Args {
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.llm.api_key.trim().is_empty() {
            anyhow::bail!("OPENAI_API_KEY is not set; add it to the environment or .env file");
        }
        self.upload_url_prefix()?;
        Ok(())
    }

    /// URL path the stored uploads are reachable under. `/static` serves
    /// `static_dir`, so `upload_dir` has to live inside it.
    pub fn upload_url_prefix(&self) -> Result<String, anyhow::Error> {
        let StorageArgs {
            static_dir,
            upload_dir,
            ..
        } = &self.storage;

        let relative = upload_dir.strip_prefix(static_dir).map_err(|_| {
            anyhow::anyhow!(
                "upload dir {} must be inside static dir {}",
                upload_dir.display(),
                static_dir.display()
            )
        })?;

        let mut prefix = String::from("/static");
        for component in relative.components() {
            match component {
                Component::Normal(part) => {
                    prefix.push('/');
                    prefix.push_str(&part.to_string_lossy());
                }
                Component::CurDir => {}
                _ => anyhow::bail!(
                    "upload dir {} must be inside static dir {}",
                    upload_dir.display(),
                    static_dir.display()
                ),
            }
        }
        Ok(prefix)
    }
}

impl From<Args> for FridgeChefConfig {
    fn from(args: Args) -> Self {
        let retention = match args.storage.upload_retention_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };

        FridgeChefConfig {
            llm: LLMConfig {
                api_key: args.llm.api_key,
                model: args.llm.model,
                base_url: args.llm.base_url,
            },
            upload: UploadConfig {
                directory: args.storage.upload_dir,
                retention,
            },
            session: SessionConfig {
                idle_ttl: Duration::from_secs(args.session.session_ttl_secs),
            },
        }
    }
}
