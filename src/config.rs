use std::{env, time::Duration};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
    pub connect_retries: u32,
    pub connect_delay: Duration,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")?;
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env_or("APP_PORT", 3000);
        let max_connections = env_or("DB_MAX_CONNECTIONS", 10);
        let connect_retries = env_or("DB_CONNECT_RETRIES", 3);
        let connect_delay = Duration::from_millis(env_or("DB_CONNECT_DELAY_MS", 1000));
        Ok(Self {
            port,
            database_url,
            host,
            max_connections,
            connect_retries,
            connect_delay,
        })
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}
