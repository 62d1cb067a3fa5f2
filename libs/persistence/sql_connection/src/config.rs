pub trait DbConnectConfig {
    fn username(&self) -> &str;
    fn password(&self) -> &str;
    fn host(&self) -> &str;
    fn port(&self) -> u16;
    fn name(&self) -> &str;

    /// Full connection string; takes precedence over the individual parts.
    fn uri(&self) -> Option<&str> { None }
}

/// Configure database connection pool data
pub trait DbOptionsConfig {
    fn max_conn(&self) -> Option<u32> { None }
    fn wait_timeout_ms(&self) -> u64 { 2000 }
    fn create_timeout_ms(&self) -> u64 { 5000 }
}

#[derive(Debug, Clone)]
pub struct PostgresDbConfig {
    pub uri: Option<String>,
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
    pub max_conn: Option<u32>,
}

impl Default for PostgresDbConfig {
    fn default() -> Self {
        Self {
            uri: None,
            host: host_default(),
            port: port_default(),
            username: username_default(),
            password: String::new(),
            name: name_default(),
            max_conn: None,
        }
    }
}

impl DbConnectConfig for PostgresDbConfig {
    fn username(&self) -> &str { &self.username }

    fn password(&self) -> &str { &self.password }

    fn host(&self) -> &str { &self.host }

    fn port(&self) -> u16 { self.port }

    fn name(&self) -> &str { &self.name }

    fn uri(&self) -> Option<&str> { self.uri.as_deref() }
}

impl DbOptionsConfig for PostgresDbConfig {
    fn max_conn(&self) -> Option<u32> { self.max_conn }
}

fn host_default() -> String { "localhost".to_string() }

fn port_default() -> u16 { 5432 }

fn username_default() -> String { "postgres".to_string() }

fn name_default() -> String { "events".to_string() }
