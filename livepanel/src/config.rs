use std::{env, fs, net::SocketAddr, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::constant;

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub http: Http,
    #[serde(default)]
    pub log: Log,
    #[serde(default)]
    pub upstream: Upstream,
    #[serde(default)]
    pub stream: Stream,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Http {
    #[serde(default = "default_http_listen")]
    pub listen: SocketAddr,
    #[serde(default)]
    pub cors: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Log {
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// The remote collaborator holding overlay records and resolving stream
/// URLs. Timeouts are milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Upstream {
    #[serde(default = "default_upstream_url")]
    pub url: String,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stream {
    #[serde(default = "default_fallback_url")]
    pub fallback_url: String,
    #[serde(default)]
    pub ready_timeout: ReadyTimeout,
    #[serde(default)]
    pub play_result_timeout: PlayResultTimeout,
}

/// Bound on the wait for a `canplay` signal before a play attempt, ms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadyTimeout(pub u64);

impl Default for ReadyTimeout {
    fn default() -> Self {
        ReadyTimeout(5000)
    }
}

/// Bound on the wait for the page to report a play outcome, ms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayResultTimeout(pub u64);

impl Default for PlayResultTimeout {
    fn default() -> Self {
        PlayResultTimeout(10_000)
    }
}

impl Default for Http {
    fn default() -> Self {
        Self {
            listen: default_http_listen(),
            cors: Default::default(),
        }
    }
}

impl Default for Log {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for Upstream {
    fn default() -> Self {
        Self {
            url: default_upstream_url(),
            connect_timeout: default_connect_timeout(),
            timeout: default_timeout(),
        }
    }
}

impl Default for Stream {
    fn default() -> Self {
        Self {
            fallback_url: default_fallback_url(),
            ready_timeout: Default::default(),
            play_result_timeout: Default::default(),
        }
    }
}

fn default_http_listen() -> SocketAddr {
    SocketAddr::from_str(&format!(
        "0.0.0.0:{}",
        env::var("PORT").unwrap_or(String::from("8888"))
    ))
    .expect("invalid listen address")
}

fn default_log_level() -> String {
    env::var("LOG_LEVEL").unwrap_or_else(|_| {
        if cfg!(debug_assertions) {
            "debug".to_string()
        } else {
            "info".to_string()
        }
    })
}

fn default_upstream_url() -> String {
    env::var("UPSTREAM_URL").unwrap_or_else(|_| String::from("http://127.0.0.1:7777"))
}

fn default_connect_timeout() -> u64 {
    500
}

fn default_timeout() -> u64 {
    3000
}

fn default_fallback_url() -> String {
    constant::FALLBACK_STREAM_URL.to_string()
}

impl Config {
    pub fn parse(path: Option<String>) -> Self {
        let result = fs::read_to_string(path.unwrap_or(String::from("livepanel.toml")))
            .or(fs::read_to_string("/etc/livepanel/livepanel.toml"))
            .unwrap_or("".to_string());
        let cfg: Self = toml::from_str(result.as_str()).expect("config parse error");
        match cfg.validate() {
            Ok(_) => cfg,
            Err(err) => panic!("config validate [{}]", err),
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        reqwest::Url::parse(&self.upstream.url)
            .map_err(|err| anyhow::anyhow!("upstream url [{}]", err))?;
        if self.stream.ready_timeout.0 == 0 {
            return Err(anyhow::anyhow!("stream ready_timeout must be nonzero"));
        }
        Ok(())
    }
}
