use std::env;

use lazy_static::lazy_static;

use crate::constants::{DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};

lazy_static! {
    pub static ref CONFIG: Config = Config::from_env();
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub mongodb_uri: String,
    pub database_name: String,
    pub jwt_secret: String,
    pub default_page_limit: u64,
    pub max_page_limit: u64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let max_page_limit: u64 = env::var("PAGINATION_MAX_LIMIT")
            .map(|v| v.parse().expect("PAGINATION_MAX_LIMIT must be a valid number"))
            .unwrap_or(MAX_PAGE_LIMIT)
            .max(1);

        Self {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("SERVER_PORT must be a valid number"),
            mongodb_uri: env::var("MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database_name: env::var("DATABASE_NAME")
                .unwrap_or_else(|_| "employee_management".to_string()),
            jwt_secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "your-super-secret-jwt-key-change-in-production".to_string()),
            default_page_limit: env::var("PAGINATION_DEFAULT_LIMIT")
                .map(|v| {
                    v.parse()
                        .expect("PAGINATION_DEFAULT_LIMIT must be a valid number")
                })
                .unwrap_or(DEFAULT_PAGE_LIMIT)
                .clamp(1, max_page_limit),
            max_page_limit,
        }
    }

    /// Page size for a request: the configured default when absent, capped
    /// at the configured maximum.
    pub fn page_limit(&self, requested: Option<u64>) -> u64 {
        requested
            .unwrap_or(self.default_page_limit)
            .clamp(1, self.max_page_limit)
    }
}
