use serde::Deserialize;

/// Configuration options of the monitoring console server.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    /// Interface the HTTP server binds to.
    pub address: String,
    pub port: u16,
    /// Path of the SQLite database file.
    pub database_url: String,
    /// Create the camera fleet at startup when the registry is empty.
    #[serde(default = "default_initialize_cameras")]
    pub initialize_cameras_on_start: bool,
}

fn default_initialize_cameras() -> bool {
    true
}

#[cfg(feature = "server")]
impl ServerConfig {
    /// Layers `default.yaml`, the optional `{APP_ENV}.yaml` and `APP__*`
    /// environment variables found under `config_dir`.
    pub fn load(config_dir: &std::path::Path) -> Result<Self, config::ConfigError> {
        use config::{Config, Environment, File};

        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        Config::builder()
            .add_source(File::from(config_dir.join("default.yaml")))
            .add_source(File::from(config_dir.join(format!("{app_env}.yaml"))).required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;

    #[test]
    fn loads_defaults_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("default.yaml"),
            "address: 0.0.0.0\nport: 9090\ndatabase_url: monitoring.db\n",
        )
        .unwrap();

        let config = ServerConfig::load(dir.path()).unwrap();

        assert_eq!(config.port, 9090);
        assert_eq!(config.database_url, "monitoring.db");
        assert!(config.initialize_cameras_on_start);
    }

    #[test]
    fn missing_default_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ServerConfig::load(dir.path()).is_err());
    }
}
