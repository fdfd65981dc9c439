//! Connection configuration

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Where and how an engine connects
///
/// Deserializable from JSON; every field but `database` has a default.
///
/// ```
/// use quarry_core::Configuration;
///
/// let config = Configuration::from_json(r#"{"database": "auth", "username": "app"}"#).unwrap();
/// assert_eq!(config.host(), "localhost");
/// assert_eq!(config.port(), 3306);
/// assert_eq!(config.charset(), "utf8mb4");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(default = "default_host")]
    host: String,
    #[serde(default = "default_port")]
    port: u16,
    database: String,
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
    #[serde(default = "default_charset")]
    charset: String,
    #[serde(default = "default_collation")]
    collation: String,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    3306
}

fn default_charset() -> String {
    "utf8mb4".to_string()
}

fn default_collation() -> String {
    "utf8mb4_unicode_ci".to_string()
}

impl Configuration {
    pub fn new(database: impl Into<String>) -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            database: database.into(),
            username: String::new(),
            password: String::new(),
            charset: default_charset(),
            collation: default_collation(),
        }
    }

    /// Parse and validate a JSON configuration document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    pub fn with_charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = charset.into();
        self
    }

    pub fn with_collation(mut self, collation: impl Into<String>) -> Self {
        self.collation = collation.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.database.is_empty() {
            return Err(Error::configuration("database name must not be empty"));
        }
        if self.host.is_empty() {
            return Err(Error::configuration("host must not be empty"));
        }
        Ok(())
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn charset(&self) -> &str {
        &self.charset
    }

    pub fn collation(&self) -> &str {
        &self.collation
    }

    /// Credential-free description of the target, safe to log
    pub fn dsn(&self) -> String {
        format!(
            "mysql:dbname={};host={};port={};charset={};collation={}",
            self.database, self.host, self.port, self.charset, self.collation
        )
    }
}
