//! Environment-driven configuration.

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub api_base: String,
}

impl AppConfig {
    /// Load configuration from the environment, reading `.env` first.
    /// Missing values warn and fall back to development defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let bind_addr = match std::env::var("BIND_ADDR") {
            Ok(addr) => addr,
            Err(_) => {
                log::warn!("No BIND_ADDR set — defaulting to 127.0.0.1:8080");
                "127.0.0.1:8080".to_string()
            }
        };

        let api_base = match std::env::var("ERP_API_BASE") {
            Ok(base) => base,
            Err(_) => {
                log::warn!("No ERP_API_BASE set — defaulting to http://127.0.0.1:5000/api");
                "http://127.0.0.1:5000/api".to_string()
            }
        };

        AppConfig { bind_addr, api_base }
    }
}
