use std::env;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    MongoDB,
    /// Process-local, lost on restart
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mongodb" | "mongo" => Ok(StoreBackend::MongoDB),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(format!("Unknown STORE_BACKEND '{}' (expected 'mongodb' or 'memory')", other)),
        }
    }
}

/// Settings read once at startup from the environment (and `.env`)
#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub store_backend: StoreBackend,
    pub database_url: String,
    pub database_name: String,
    pub password_hash_cost: u32,
    pub allowed_origins: Vec<String>,
}

impl Settings {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let port = var("PORT", "4000")
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        let store_backend = var("STORE_BACKEND", "mongodb").parse::<StoreBackend>()?;

        let password_hash_cost = match lookup("PASSWORD_HASH_COST") {
            Some(raw) => raw
                .parse::<u32>()
                .map_err(|e| format!("Invalid PASSWORD_HASH_COST: {}", e))?,
            None => bcrypt::DEFAULT_COST,
        };
        if !(4..=31).contains(&password_hash_cost) {
            return Err(format!(
                "PASSWORD_HASH_COST must be between 4 and 31, got {}",
                password_hash_cost
            ));
        }

        let allowed_origins = var("CORS_ALLOWED_ORIGINS", "http://localhost:3000")
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        Ok(Settings {
            host: var("HOST", "0.0.0.0"),
            port,
            store_backend,
            database_url: var("DATABASE_URL", "mongodb://localhost:27017"),
            database_name: var("DATABASE_NAME", "task_manager"),
            password_hash_cost,
            allowed_origins,
        })
    }
}
