use std::str::FromStr;
use std::time::Duration;

/// Completion-service parameters for the coach.
#[derive(Debug, Clone)]
pub struct CoachSettings {
    pub key: Option<String>,
    pub model: String,
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Overall bound on one explanation, retries included.
    pub deadline: Duration,
    pub attempts: usize,
    /// Target explanation length in characters.
    pub budget: usize,
}

/// Runtime configuration, read from the environment (and `.env`).
#[derive(Debug, Clone)]
pub struct Settings {
    pub bind: String,
    pub workers: usize,
    pub coach: CoachSettings,
}

impl Settings {
    pub fn from_env() -> Self {
        if let Ok(path) = dotenv::dotenv() {
            log::debug!("loaded environment from {}", path.display());
        }
        Self {
            bind: var("BIND_ADDR", "127.0.0.1:8080".to_string()),
            workers: var("SERVER_WORKERS", 4),
            coach: CoachSettings {
                key: std::env::var("OPENAI_API_KEY").ok().filter(|k| !k.trim().is_empty()),
                model: var("OPENAI_MODEL", "gpt-3.5-turbo".to_string()),
                base_url: var("OPENAI_BASE_URL", "https://api.openai.com/v1".to_string()),
                timeout: Duration::from_secs(var("EXPLANATION_TIMEOUT_SECS", 10)),
                deadline: Duration::from_secs(var("EXPLANATION_DEADLINE_SECS", 30)),
                attempts: var("EXPLANATION_ATTEMPTS", 3),
                budget: var("EXPLANATION_BUDGET", 250),
            },
        }
    }
}

/// Reads and parses `name`, falling back to `default` when unset or
/// unparsable.
fn var<T>(name: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(name) {
        Err(_) => default,
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("ignoring unparsable {}={:?}", name, raw);
            default
        }),
    }
}
