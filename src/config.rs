// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{Result, ServiceError};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub embedding: EmbeddingConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub bind: String,
    pub max_upload_mb: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmbeddingConfig {
    pub model: String,
    pub cache_dir: Option<String>,
    pub show_download_progress: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    pub endpoint: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("DOCSIM")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| ServiceError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| ServiceError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            server: ServerConfig {
                bind: "0.0.0.0:8000".to_string(),
                max_upload_mb: 25,
            },
            embedding: EmbeddingConfig {
                model: "paraphrase-multilingual-minilm-l12-v2".to_string(),
                cache_dir: None,
                show_download_progress: false,
            },
            search: SearchConfig {
                endpoint: "https://html.duckduckgo.com/html/".to_string(),
                user_agent: "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0"
                    .to_string(),
                timeout_secs: 30,
            },
        }
    }

    fn validate(&self) -> Result<()> {
        if self.server.bind.trim().is_empty() {
            return Err(ServiceError::Config(
                "server.bind must not be empty".to_string(),
            ));
        }

        if self.server.max_upload_mb == 0 {
            return Err(ServiceError::Config(
                "server.max_upload_mb must be greater than 0".to_string(),
            ));
        }

        if !self.search.endpoint.starts_with("http://") && !self.search.endpoint.starts_with("https://")
        {
            return Err(ServiceError::Config(format!(
                "search.endpoint must be an http(s) URL: {}",
                self.search.endpoint
            )));
        }

        Ok(())
    }
}
