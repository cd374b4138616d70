use crate::error::ConfigError;
use dotenv::dotenv;

const DEFAULT_POOL_MAX_SIZE: usize = 16;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub pool_max_size: usize,
    pub ca_file: Option<String>,
}

impl Config {
    pub fn init() -> Result<Config, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let pool_max_size = match lookup("DATABASE_POOL_MAX_SIZE").filter(|v| !v.is_empty()) {
            None => DEFAULT_POOL_MAX_SIZE,
            Some(value) => match value.parse::<usize>() {
                Ok(size) if size > 0 => size,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "DATABASE_POOL_MAX_SIZE",
                        expected: "a positive integer",
                        value,
                    })
                }
            },
        };

        // TLS is only used when a CA bundle is provided
        let ca_file = lookup("DATABASE_CA_FILE").filter(|path| !path.is_empty());

        Ok(Config {
            database_url,
            pool_max_size,
            ca_file,
        })
    }
}
