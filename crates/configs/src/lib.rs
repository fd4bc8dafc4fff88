use std::time::Duration;

use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

pub const DEFAULT_UPSTREAM_URL: &str = "http://localhost:8112/api/v1/employee";

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8111, worker_threads: Some(4) }
    }
}

/// Where the employee records live and how long we wait for them.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct UpstreamConfig {
    #[serde(default = "default_upstream_url")]
    pub base_url: String,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_upstream_url(),
            connect_timeout_secs: default_connect_timeout(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

fn default_upstream_url() -> String {
    DEFAULT_UPSTREAM_URL.to_string()
}

fn default_connect_timeout() -> u64 {
    5
}

fn default_request_timeout() -> u64 {
    30
}

pub fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

/// Read `path`, or build from the environment when no such file exists.
/// Any other read or parse failure is returned.
pub fn load_or_env(path: &str) -> Result<AppConfig> {
    match load_from_file(path) {
        Ok(cfg) => Ok(cfg),
        Err(e) if is_missing_file(&e) => Ok(from_env()),
        Err(e) => Err(e.context(format!("failed to load config file {path}"))),
    }
}

fn is_missing_file(err: &anyhow::Error) -> bool {
    err.downcast_ref::<std::io::Error>()
        .is_some_and(|io| io.kind() == std::io::ErrorKind::NotFound)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

/// Build a config purely from environment variables, falling back to defaults.
pub fn from_env() -> AppConfig {
    let mut cfg = AppConfig::default();
    if let Ok(host) = std::env::var("SERVER_HOST") {
        cfg.server.host = host;
    }
    if let Some(port) = env_parse::<u16>("SERVER_PORT") {
        cfg.server.port = port;
    }
    if let Some(w) = env_parse::<usize>("TOKIO_WORKER_THREADS") {
        cfg.server.worker_threads = Some(w);
    }
    if let Some(secs) = env_parse::<u64>("UPSTREAM_CONNECT_TIMEOUT_SECS") {
        cfg.upstream.connect_timeout_secs = secs;
    }
    if let Some(secs) = env_parse::<u64>("UPSTREAM_REQUEST_TIMEOUT_SECS") {
        cfg.upstream.request_timeout_secs = secs;
    }
    cfg
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse::<T>().ok())
}

impl AppConfig {
    /// File first, environment second; always normalised and validated.
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_or_env(&config_path())?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.upstream.normalize_from_env();
        self.upstream.validate()?;
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be within 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }
}

impl UpstreamConfig {
    /// `UPSTREAM_BASE_URL` wins over whatever the file says.
    pub fn normalize_from_env(&mut self) {
        if let Ok(url) = std::env::var("UPSTREAM_BASE_URL") {
            if !url.trim().is_empty() {
                self.base_url = url;
            }
        }
        self.base_url = self.base_url.trim().trim_end_matches('/').to_string();
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(anyhow!(
                "upstream.base_url is empty; set it in config.toml or UPSTREAM_BASE_URL"
            ));
        }
        let lower = self.base_url.to_lowercase();
        if !(lower.starts_with("http://") || lower.starts_with("https://")) {
            return Err(anyhow!("upstream.base_url must start with http:// or https://"));
        }
        if self.connect_timeout_secs == 0 || self.request_timeout_secs == 0 {
            return Err(anyhow!("upstream timeouts must be positive seconds"));
        }
        Ok(())
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
