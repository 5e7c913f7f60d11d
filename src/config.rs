/// Connection settings for the GeneWeaver database.
///
/// Values come from `GWDB_*` environment variables; a `.env` file in the working
/// directory is loaded first when present.
#[derive(Debug, Clone)]
pub struct Config {
    pub server: String,
    pub user: String,
    pub password: String,
    pub name: String,
    /// Explicit connection string. Takes precedence over the individual parts.
    pub uri: Option<String>,
    // Connection pool settings
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub db_acquire_timeout_secs: u64,
    pub db_idle_timeout_secs: u64,
    pub db_max_lifetime_secs: u64,
    pub db_connect_retries: u32,
}

impl Config {
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        Self {
            server: std::env::var("GWDB_SERVER").unwrap_or_default(),
            user: std::env::var("GWDB_USER").unwrap_or_default(),
            password: std::env::var("GWDB_PASSWORD").unwrap_or_default(),
            name: std::env::var("GWDB_NAME").unwrap_or_default(),
            uri: std::env::var("GWDB_URI").ok().filter(|s| !s.is_empty()),
            db_max_connections: std::env::var("GWDB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            db_min_connections: std::env::var("GWDB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1),
            db_acquire_timeout_secs: std::env::var("GWDB_ACQUIRE_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
            db_idle_timeout_secs: std::env::var("GWDB_IDLE_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(600), // 10 minutes
            db_max_lifetime_secs: std::env::var("GWDB_MAX_LIFETIME_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1800), // 30 minutes
            db_connect_retries: std::env::var("GWDB_CONNECT_RETRIES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3),
        }
    }

    /// Settings pointing at an explicit connection string, pool defaults otherwise.
    pub fn with_uri(uri: impl Into<String>) -> Self {
        Self {
            server: String::new(),
            user: String::new(),
            password: String::new(),
            name: String::new(),
            uri: Some(uri.into()),
            db_max_connections: 10,
            db_min_connections: 1,
            db_acquire_timeout_secs: 30,
            db_idle_timeout_secs: 600,
            db_max_lifetime_secs: 1800,
            db_connect_retries: 3,
        }
    }

    /// Connection string, assembled from the parts unless `GWDB_URI` was given.
    pub fn uri(&self) -> String {
        if let Some(uri) = &self.uri {
            return uri.clone();
        }
        let credentials = if self.password.is_empty() {
            self.user.clone()
        } else {
            format!("{}:{}", self.user, self.password)
        };
        format!("postgresql://{}@{}/{}", credentials, self.server, self.name)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        let uri = self.uri();
        if !uri.starts_with("postgres://") && !uri.starts_with("postgresql://") {
            return Err("GWDB_URI must start with postgres:// or postgresql://".to_string());
        }

        if self.uri.is_none() {
            if self.server.is_empty() {
                return Err("GWDB_SERVER is required when GWDB_URI is not set".to_string());
            }
            if self.user.is_empty() {
                return Err("GWDB_USER is required when GWDB_URI is not set".to_string());
            }
        }

        if self.db_max_connections == 0 {
            return Err("GWDB_MAX_CONNECTIONS must be greater than 0".to_string());
        }

        if self.db_min_connections > self.db_max_connections {
            return Err(
                "GWDB_MIN_CONNECTIONS cannot be greater than GWDB_MAX_CONNECTIONS".to_string(),
            );
        }

        if self.db_acquire_timeout_secs == 0 {
            return Err("GWDB_ACQUIRE_TIMEOUT_SECS must be greater than 0".to_string());
        }

        Ok(())
    }
}
