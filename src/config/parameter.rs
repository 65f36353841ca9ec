use dotenv;
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::{error, info, warn};

static CONFIG: OnceLock<HashMap<String, String>> = OnceLock::new();

/// Default configuration values
const DEFAULTS: &[(&str, &str)] = &[
    ("SERVER_ADDRESS", "127.0.0.1"),
    ("SERVER_PORT", "8081"),
    ("ACCESS_TOKEN_EXPIRE_MINUTES", "30"),
    ("REFRESH_TOKEN_LEEWAY_SECONDS", "300"),
    ("BCRYPT_COST", "12"),
    ("LOG_LEVEL", "info"),
    ("DB_MAX_CONNECTIONS", "20"),
    ("DB_MIN_CONNECTIONS", "5"),
];

/// Parameters with no compiled default; present only when the environment
/// provides them.
const OPTIONAL: &[&str] = &[
    "DATABASE_URL",
    "JWT_SECRET",
    "INITIAL_ADMIN_USERNAME",
    "INITIAL_ADMIN_PASSWORD",
    "INITIAL_ADMIN_EMAIL",
    "INITIAL_ADMIN_FIRST_NAME",
    "INITIAL_ADMIN_LAST_NAME",
];

pub fn init() {
    match dotenv::dotenv() {
        Ok(path) => info!("Loaded environment file: {:?}", path),
        Err(_) => warn!("No .env file found, using system environment variables"),
    }

    let mut config = HashMap::new();

    for (key, value) in DEFAULTS {
        config.insert(key.to_string(), value.to_string());
    }

    // Environment overrides defaults
    for (key, _) in DEFAULTS {
        if let Ok(value) = std::env::var(key) {
            config.insert(key.to_string(), value);
        }
    }

    for key in OPTIONAL {
        if let Ok(value) = std::env::var(key) {
            config.insert(key.to_string(), value);
        }
    }

    if CONFIG.set(config).is_err() {
        error!("Configuration already initialized");
    } else {
        info!("Configuration initialized successfully");
    }
}

pub fn get(parameter: &str) -> String {
    CONFIG
        .get()
        .and_then(|config| config.get(parameter))
        .cloned()
        .unwrap_or_else(|| {
            error!("Configuration parameter '{}' not found", parameter);
            panic!("Required configuration parameter '{}' is missing", parameter);
        })
}

pub fn get_optional(parameter: &str) -> Option<String> {
    CONFIG
        .get()
        .and_then(|config| config.get(parameter))
        .cloned()
}

pub fn get_i64(parameter: &str) -> i64 {
    let value = get(parameter);
    value.parse::<i64>().unwrap_or_else(|_| {
        error!("Configuration parameter '{}' is not a valid i64: {}", parameter, value);
        panic!("Configuration parameter '{}' is not a valid i64", parameter);
    })
}

pub fn get_u64(parameter: &str) -> u64 {
    let value = get(parameter);
    value.parse::<u64>().unwrap_or_else(|_| {
        error!("Configuration parameter '{}' is not a valid u64: {}", parameter, value);
        panic!("Configuration parameter '{}' is not a valid u64", parameter);
    })
}
