use crate::config::parameter;
use tracing_subscriber::EnvFilter;

const KNOWN_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Resolve the filter directive from the LOG_LEVEL parameter, falling back
/// to `info` for anything unrecognized.
fn filter_directive(configured: Option<String>) -> String {
    match configured {
        Some(level) => {
            let level = level.to_lowercase();
            if KNOWN_LEVELS.contains(&level.as_str()) {
                level
            } else {
                "info".to_string()
            }
        }
        None => "info".to_string(),
    }
}

/// Install the global tracing subscriber. Runs before the parameter store
/// is populated, so the level is read from the process environment directly
/// when the store has nothing yet.
pub fn init() {
    let configured =
        parameter::get_optional("LOG_LEVEL").or_else(|| std::env::var("LOG_LEVEL").ok());
    let directive = filter_directive(configured);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Logging configured: level={}", directive);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive_known_levels() {
        assert_eq!(filter_directive(Some("debug".to_string())), "debug");
        assert_eq!(filter_directive(Some("WARN".to_string())), "warn");
        assert_eq!(filter_directive(Some("trace".to_string())), "trace");
    }

    #[test]
    fn test_filter_directive_defaults_to_info() {
        assert_eq!(filter_directive(None), "info");
        assert_eq!(filter_directive(Some("verbose".to_string())), "info");
    }
}
