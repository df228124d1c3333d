use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    pub port: Option<u16>,

    pub database_url: String,
    pub database_max_connections: Option<u32>,

    // unset means any origin
    pub frontend_url: Option<String>,
    pub rate_limit_per_sec: Option<u64>,
}
