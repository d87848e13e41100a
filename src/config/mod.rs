//! Configuration module

pub mod loader;

pub use loader::Config;

use serde::{Deserialize, Serialize};

/// Files checked by `verify`, grouped by check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyConfig {
    /// Environment files checked for critical keys
    #[serde(default = "default_env_files")]
    pub env_files: Vec<String>,

    /// nginx-style configurations checked for default domains
    #[serde(default = "default_server_configs")]
    pub server_configs: Vec<String>,

    /// docker-compose files checked for default passwords
    #[serde(default = "default_compose_files")]
    pub compose_files: Vec<String>,

    /// Placeholder values to flag in addition to the built-in list
    #[serde(default)]
    pub extra_default_values: Vec<String>,

    /// Keys to treat as critical in addition to the built-in list
    #[serde(default)]
    pub extra_critical_keys: Vec<String>,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            env_files: default_env_files(),
            server_configs: default_server_configs(),
            compose_files: default_compose_files(),
            extra_default_values: Vec::new(),
            extra_critical_keys: Vec::new(),
        }
    }
}

fn default_env_files() -> Vec<String> {
    to_strings(&[
        ".env",
        ".env.microservices.example",
        "app/.env",
        "app/.env.example",
        "services/admin-backend/.env.example",
        "services/blog-backend/.env.example",
        "services/payment-service/.env.example",
    ])
}

fn default_server_configs() -> Vec<String> {
    to_strings(&[
        "nginx/microservices.conf",
        "nginx/prod.conf",
        "nginx/staging.conf",
        "nginx/dev.conf",
    ])
}

fn default_compose_files() -> Vec<String> {
    to_strings(&[
        "docker-compose.microservices.yml",
        "docker-compose.prod.yml",
        "docker-compose.staging.yml",
        "docker-compose.dev.yml",
    ])
}

pub(crate) fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
