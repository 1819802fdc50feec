use std::time::Duration;

use serde::Deserialize;

/// Client settings, loaded once at startup and shared by every command.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Seconds to wait for the TCP connection to be established.
    pub connect_timeout_secs: u64,
    /// Seconds to wait for each read before giving up on the response.
    pub read_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 10,
            read_timeout_secs: 30,
        }
    }
}

impl Config {
    /// Load settings from the YAML file named by the `HTTPC_CONFIG`
    /// environment variable. Defaults apply when the variable is unset or
    /// the file is unusable; a bad file is reported, not fatal.
    pub fn load() -> Self {
        let Some(path) = std::env::var_os("HTTPC_CONFIG") else {
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(text) => match Self::from_yaml(&text) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::warn!(
                        path = %path.to_string_lossy(),
                        error = %e,
                        "Ignoring malformed config file"
                    );
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(
                    path = %path.to_string_lossy(),
                    error = %e,
                    "Cannot read config file"
                );
                Self::default()
            }
        }
    }

    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }
}
