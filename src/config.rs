use std::time::Duration;

use secstr::SecStr;
use serde::{Deserialize, Deserializer};

pub const ENV_PREFIX: &str = "HOOKSERVE_";

/// Receiver settings, read once at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_path")]
    pub path: String,
    #[serde(default = "default_ping_path")]
    pub ping_path: String,
    /// Shared HMAC secret; `None` accepts unsigned deliveries.
    #[serde(default, deserialize_with = "deserialize_opt_secstr")]
    pub secret: Option<SecStr>,
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
    #[serde(default = "default_max_body_size")]
    pub max_body_size: usize,
    #[serde(default)]
    pub enqueue_timeout_ms: Option<u64>,
    /// Deliver unsupported event kinds as raw JSON instead of answering 501.
    #[serde(default)]
    pub accept_unknown: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed(ENV_PREFIX).from_env()
    }

    pub fn enqueue_timeout(&self) -> Option<Duration> {
        self.enqueue_timeout_ms.map(Duration::from_millis)
    }

    pub fn bind_address(&self) -> (&str, u16) {
        let host = if self.host.is_empty() {
            "0.0.0.0"
        } else {
            self.host.as_str()
        };
        (host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: default_port(),
            path: default_path(),
            ping_path: default_ping_path(),
            secret: None,
            queue_capacity: default_queue_capacity(),
            max_body_size: default_max_body_size(),
            enqueue_timeout_ms: None,
            accept_unknown: false,
        }
    }
}

fn default_port() -> u16 {
    80
}

fn default_path() -> String {
    "/webhook".into()
}

fn default_ping_path() -> String {
    "/webhook/ping".into()
}

fn default_queue_capacity() -> usize {
    10
}

fn default_max_body_size() -> usize {
    25 * 1024 * 1024
}

fn deserialize_opt_secstr<'de, D>(de: D) -> Result<Option<SecStr>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(de).map(|o| {
        o.filter(|s| !s.is_empty())
            .map(|s| SecStr::new(s.into_bytes()))
    })
}
