use serde::Deserialize;

/// Listener settings, read from `HOST` and `PORT`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_source(config::Environment::default())
    }

    fn from_source<S>(source: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

#[cfg(test)]
mod tests {
    use super::*;

    fn environment(vars: &[(&str, &str)]) -> config::Environment {
        let map: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        config::Environment::default().source(Some(map))
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = Config::from_source(environment(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.address(), "127.0.0.1:3000");
    }

    #[test]
    fn port_and_host_are_read() {
        let config =
            Config::from_source(environment(&[("HOST", "0.0.0.0"), ("PORT", "8080")])).unwrap();
        assert_eq!(config.address(), "0.0.0.0:8080");
    }

    #[test]
    fn invalid_port_is_an_error() {
        assert!(Config::from_source(environment(&[("PORT", "not-a-port")])).is_err());
    }
}
