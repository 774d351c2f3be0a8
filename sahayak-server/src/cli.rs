use clap::Parser;
use sahayak_types::models::config::{
    DEFAULT_GATEWAY_MODEL, DEFAULT_GATEWAY_URL, DEFAULT_GEMINI_MODEL, DEFAULT_GEMINI_URL,
};
use sahayak_types::models::{ProviderSettings, ServerConfig};
use sahayak_types::{AppConfig, ModelSettings, ProvidersConfig};

#[derive(Parser, Debug)]
#[command(
    name = "sahayak-server",
    about = "Sahayak Server - AI teaching assistant functions",
    version = env!("CARGO_PKG_VERSION"),
    author
)]
pub struct Cli {
    #[arg(short, long, env = "SAHAYAK_PORT", default_value = "8045")]
    pub port: u16,

    #[arg(long, env = "SAHAYAK_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    #[arg(long, env = "SAHAYAK_GATEWAY_API_KEY", hide_env_values = true)]
    pub gateway_api_key: Option<String>,

    #[arg(long, env = "SAHAYAK_GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: Option<String>,

    #[arg(long, env = "SAHAYAK_GATEWAY_URL", default_value = DEFAULT_GATEWAY_URL)]
    pub gateway_url: String,

    #[arg(long, env = "SAHAYAK_GEMINI_URL", default_value = DEFAULT_GEMINI_URL)]
    pub gemini_url: String,

    #[arg(long, env = "SAHAYAK_GATEWAY_MODEL", default_value = DEFAULT_GATEWAY_MODEL)]
    pub gateway_model: String,

    #[arg(long, env = "SAHAYAK_GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub gemini_model: String,

    #[arg(long, env = "SAHAYAK_VISUAL_AID_MODEL", help = "Model for visual aids (defaults to the Gemini model)")]
    pub visual_aid_model: Option<String>,
}

impl Cli {
    pub fn into_config(self) -> AppConfig {
        AppConfig {
            server: ServerConfig { host: self.host, port: self.port, ..ServerConfig::default() },
            providers: ProvidersConfig {
                gateway: ProviderSettings::new(self.gateway_url, self.gateway_api_key),
                gemini: ProviderSettings::new(self.gemini_url, self.gemini_api_key),
            },
            models: ModelSettings {
                gateway_model: self.gateway_model,
                gemini_model: self.gemini_model,
                visual_aid_model: self.visual_aid_model,
            },
        }
    }
}
