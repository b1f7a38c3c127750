use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    pub endpoint: String,
    pub model: String,
    /// Read from the file or `HF_API_TOKEN`, never written back out.
    #[serde(skip_serializing)]
    pub api_token: Option<String>,
    pub timeout_ms: u64,
    pub top_k: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api-inference.huggingface.co/models".to_string(),
            model: "j-hartmann/emotion-english-distilroberta-base".to_string(),
            api_token: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            top_k: 3,
        }
    }
}

impl RankingConfig {
    /// Zero means unset and falls back to the default.
    pub fn timeout(&self) -> Duration {
        match self.timeout_ms {
            0 => Duration::from_millis(DEFAULT_TIMEOUT_MS),
            value => Duration::from_millis(value),
        }
    }

    pub fn model_url(&self) -> String {
        let endpoint = self.endpoint.trim_end_matches('/');
        let model = self.model.trim_matches('/');
        if model.is_empty() {
            endpoint.to_string()
        } else {
            format!("{}/{}", endpoint, model)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub web_root: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            web_root: "static".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToneConfig {
    pub ranking: RankingConfig,
    pub server: ServerConfig,
}

impl ToneConfig {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>), String> {
        let config_path = path.or_else(default_config_path);
        let mut config = match config_path.as_ref() {
            Some(path) if path.exists() => {
                let contents = std::fs::read_to_string(path)
                    .map_err(|err| format!("failed to read config: {}", err))?;
                ToneConfig::parse(&contents)?
            }
            _ => ToneConfig::default(),
        };

        config.apply_env_overrides();
        Ok((config, config_path))
    }

    pub fn parse(contents: &str) -> Result<Self, String> {
        toml::from_str(contents).map_err(|err| format!("failed to parse config: {}", err))
    }

    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|err| format!("failed to serialize config: {}", err))
    }

    pub fn write(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|err| format!("failed to create config dir: {}", err))?;
        }
        std::fs::write(path, self.to_toml()?)
            .map_err(|err| format!("failed to write config: {}", err))?;
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(endpoint) = env::var("RANKING_ENDPOINT") {
            if !endpoint.trim().is_empty() {
                self.ranking.endpoint = endpoint;
            }
        }
        if let Ok(model) = env::var("RANKING_MODEL") {
            if !model.trim().is_empty() {
                self.ranking.model = model;
            }
        }
        if let Ok(token) = env::var("HF_API_TOKEN") {
            if !token.trim().is_empty() {
                self.ranking.api_token = Some(token);
            }
        }
        if let Ok(timeout) = env::var("RANKING_TIMEOUT_MS") {
            if let Ok(value) = timeout.parse::<u64>() {
                self.ranking.timeout_ms = value;
            }
        }
        if let Ok(top_k) = env::var("RANKING_TOP_K") {
            if let Ok(value) = top_k.parse::<usize>() {
                self.ranking.top_k = value;
            }
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    env::var("TONE_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/tone.toml")))
}
