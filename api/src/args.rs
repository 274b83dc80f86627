use std::time::Duration;

use clap::{Args as ClapArgs, Parser};
use nutriagent_core::domain::common::{
    CatalogConfig, HttpClientConfig, LLMConfig, NutriAgentConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "nutriagent-api")]
#[command(about = "NutriAgent food safety consultant HTTP API")]
#[command(version)]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub log: LogArgs,

    #[command(flatten)]
    pub llm: LLMArgs,

    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Timeout applied to every outbound HTTP request, in seconds
    #[arg(long, env = "HTTP_TIMEOUT_SECS", default_value_t = 60)]
    pub http_timeout_secs: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/api`
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "server-allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

#[derive(Clone, ClapArgs)]
pub struct LLMArgs {
    /// Used by sessions that have not stored a key of their own
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY")]
    pub gemini_api_key: Option<String>,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = "gemini-2.5-flash")]
    pub gemini_model: String,

    #[arg(
        long = "gemini-base-url",
        env = "GEMINI_BASE_URL",
        default_value = "https://generativelanguage.googleapis.com"
    )]
    pub gemini_base_url: String,
}

impl std::fmt::Debug for LLMArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LLMArgs")
            .field("gemini_api_key", &self.gemini_api_key.as_ref().map(|_| "<redacted>"))
            .field("gemini_model", &self.gemini_model)
            .field("gemini_base_url", &self.gemini_base_url)
            .finish()
    }
}

#[derive(Debug, Clone, ClapArgs)]
pub struct CatalogArgs {
    #[arg(
        long = "catalog-base-url",
        env = "CATALOG_BASE_URL",
        default_value = "https://world.openfoodfacts.org"
    )]
    pub base_url: String,

    #[arg(long = "catalog-language", env = "CATALOG_LANGUAGE", default_value = "en")]
    pub language: String,

    #[arg(
        long = "catalog-user-agent",
        env = "CATALOG_USER_AGENT",
        default_value = "NutriAgent/0.1 (https://github.com/nutriagent/nutriagent)"
    )]
    pub user_agent: String,
}

impl From<Args> for NutriAgentConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_base_url: args.llm.gemini_base_url,
            },
            catalog: CatalogConfig {
                base_url: args.catalog.base_url,
                language: args.catalog.language,
                user_agent: args.catalog.user_agent,
            },
            http: HttpClientConfig {
                timeout: Duration::from_secs(args.http_timeout_secs),
            },
        }
    }
}
