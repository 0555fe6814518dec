/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::{Path, PathBuf};

/// Directory searched for `default.toml` and `<environment>.toml`
pub const DEFAULT_CONFIG_DIR: &str = "config";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Application name, logged at startup
    #[serde(default = "default_nombre")]
    pub nombre: String,

    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_config_db")]
    pub config_db: DatabaseSettings,

    /// Selected from `APP_ENV`, never from config files
    #[serde(skip)]
    pub environment: Environment,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Static assets served for any path the API does not handle
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,
}

/// Database connection settings.
///
/// Users are held in memory; the host is only reported at startup.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseSettings {
    #[serde(default = "default_db_host")]
    pub host: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    /// Read `APP_ENV`, falling back to development
    pub fn from_env() -> Self {
        std::env::var("APP_ENV")
            .map(|value| Self::parse(&value))
            .unwrap_or_default()
    }

    /// Parse an environment name; anything unrecognised is development
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            _ => Environment::Development,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

impl ServerConfig {
    /// Load configuration from `./config`, the environment, and `PORT`
    pub fn load() -> Result<Self> {
        Self::load_from_dir(Path::new(DEFAULT_CONFIG_DIR))
    }

    /// Load configuration from `dir`, the environment, and `PORT`
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let mut config = Self::load_from(dir, Environment::from_env())?;

        if let Ok(port) = std::env::var("PORT") {
            config.apply_port_override(&port)?;
        }

        Ok(config)
    }

    /// Load configuration files for `environment` from `dir`, then apply
    /// `USUARIOS__`-prefixed environment variables
    pub fn load_from(dir: &Path, environment: Environment) -> Result<Self> {
        let mut settings = config::Config::builder();

        // Both files are optional; the environment file wins over the default one
        for name in ["default", environment.as_str()] {
            let path = dir.join(format!("{name}.toml"));
            settings = settings.add_source(config::File::from(path).required(false));
        }

        // Override with environment variables, e.g. USUARIOS__SERVER__HOST
        settings = settings.add_source(
            config::Environment::with_prefix("USUARIOS")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let built = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        let mut config: ServerConfig = built
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))?;
        config.environment = environment;

        Ok(config)
    }

    /// Replace the listen port with a raw value such as the `PORT` variable
    pub fn apply_port_override(&mut self, raw: &str) -> Result<()> {
        let port = raw
            .trim()
            .parse::<u16>()
            .map_err(|e| ServerError::Config(format!("Invalid port {raw:?}: {e}")))?;
        self.server.port = port;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(ServerError::Config("Port must be non-zero".to_string()));
        }

        if self.server.host.parse::<IpAddr>().is_err() {
            return Err(ServerError::Config(format!(
                "Host {:?} is not an IP address",
                self.server.host
            )));
        }

        Ok(())
    }
}

// Default values
fn default_nombre() -> String {
    "Usuarios".to_string()
}

fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
        public_dir: default_public_dir(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}

fn default_config_db() -> DatabaseSettings {
    DatabaseSettings {
        host: default_db_host(),
    }
}

fn default_db_host() -> String {
    "localhost".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            nombre: default_nombre(),
            server: default_server(),
            config_db: default_config_db(),
            environment: Environment::default(),
        }
    }
}
