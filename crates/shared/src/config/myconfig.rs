use anyhow::{Context, Result, anyhow};
use std::{net::SocketAddr, time::Duration};

const DEFAULT_ADDRESS: &str = "127.0.0.1:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub address: SocketAddr,
    pub context_timeout: Duration,
    pub server_timeout: Duration,
    pub graceful_timeout: Duration,
    pub is_debug: bool,
    pub enable_file_log: bool,
    pub run_migrations: bool,
    pub db_min_conn: u32,
    pub db_max_conn: u32,
}

impl Config {
    /// Loads the dotenv file named by `ENV_FILE` (or `.env`) and reads the process environment.
    pub fn init() -> Result<Self> {
        match std::env::var("ENV_FILE") {
            Ok(path) if !path.is_empty() => {
                dotenv::from_filename(&path)
                    .with_context(|| format!("Failed to load env file: {path}"))?;
            }
            _ => {
                dotenv::dotenv().ok();
            }
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;

        let address = lookup("ADDRESS")
            .unwrap_or_else(|| DEFAULT_ADDRESS.to_string())
            .parse::<SocketAddr>()
            .context("ADDRESS must be a valid socket address, e.g. 127.0.0.1:8080")?;

        let context_timeout = parse_seconds(&lookup, "CONTEXT_TIMEOUT")?;
        let server_timeout = parse_seconds(&lookup, "SERVER_TIMEOUT")?;
        let graceful_timeout = parse_seconds(&lookup, "GRACEFUL_TIMEOUT")?;

        let is_debug = parse_bool(&lookup, "DEBUG", true)?;
        let enable_file_log = parse_bool(&lookup, "ENABLE_FILE_LOG", false)?;
        let run_migrations = parse_bool(&lookup, "RUN_MIGRATIONS", true)?;

        let db_min_conn = parse_u32(&lookup, "DB_MIN_CONN", 1)?;
        let db_max_conn = parse_u32(&lookup, "DB_MAX_CONN", 5)?;

        if db_min_conn > db_max_conn {
            return Err(anyhow!(
                "DB_MIN_CONN ({db_min_conn}) must not exceed DB_MAX_CONN ({db_max_conn})"
            ));
        }

        Ok(Self {
            database_url,
            address,
            context_timeout,
            server_timeout,
            graceful_timeout,
            is_debug,
            enable_file_log,
            run_migrations,
            db_min_conn,
            db_max_conn,
        })
    }
}

fn parse_seconds<F>(lookup: &F, key: &str) -> Result<Duration>
where
    F: Fn(&str) -> Option<String>,
{
    let secs = match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .with_context(|| format!("{key} must be a whole number of seconds"))?,
        None => DEFAULT_TIMEOUT_SECS,
    };

    Ok(Duration::from_secs(secs))
}

fn parse_bool<F>(lookup: &F, key: &str, default: bool) -> Result<bool>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).as_deref().map(str::trim) {
        None => Ok(default),
        Some("true") | Some("1") => Ok(true),
        Some("false") | Some("0") => Ok(false),
        Some(other) => Err(anyhow!("{key} must be 'true' or 'false', got '{other}'")),
    }
}

fn parse_u32<F>(lookup: &F, key: &str, default: u32) -> Result<u32>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<u32>()
            .with_context(|| format!("{key} must be a valid u32 integer")),
        None => Ok(default),
    }
}
