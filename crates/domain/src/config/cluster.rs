use crate::credentials::Credentials;
use crate::errors::DomainError;
use crate::host::Host;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClusterConfig {
    /// Seed hosts as `host[:port]`
    #[serde(default)]
    pub seeds: Vec<String>,

    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,

    #[serde(default)]
    pub user: Option<String>,

    #[serde(default)]
    pub password: Option<String>,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            seeds: vec![format!("127.0.0.1:{}", crate::host::DEFAULT_PORT)],
            connect_timeout_ms: default_connect_timeout_ms(),
            user: None,
            password: None,
        }
    }
}

impl ClusterConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    /// Credentials are only configured when both user and password are set.
    pub fn credentials(&self) -> Option<Credentials> {
        match (&self.user, &self.password) {
            (Some(user), Some(password)) => Some(Credentials::new(user, password)),
            _ => None,
        }
    }

    pub fn seed_hosts(&self) -> Result<Vec<Host>, DomainError> {
        self.seeds.iter().map(|seed| seed.parse()).collect()
    }
}

fn default_connect_timeout_ms() -> u64 {
    1000
}
