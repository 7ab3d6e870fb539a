//! Server configuration

/// Settings for the chat-completion API behind the problem constructor
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    pub api_key: Option<String>,
    pub cors_origins: Vec<String>,
    pub rate_limit_rps: u32,
    /// Base URL of the question service; the built-in catalog is used when unset
    pub question_source_url: Option<String>,
    /// Page size used when walking the service's question listing
    pub question_page_size: usize,
    pub llm: Option<LlmConfig>,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key = key, value = %raw, "Invalid value, using default");
            default
        }),
        Err(_) => default,
    }
}

/// Split a comma-separated origin list, dropping blanks
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let llm = env_opt("OPENAI_API_KEY").map(|api_key| LlmConfig {
            api_key,
            api_url: env_or(
                "OPENAI_API_URL",
                "https://api.openai.com/v1/chat/completions",
            ),
            model: env_or("OPENAI_MODEL", "gpt-3.5-turbo"),
            temperature: env_parse("OPENAI_TEMPERATURE", 0.7),
            max_tokens: env_parse("OPENAI_MAX_TOKENS", 500),
        });

        Self {
            bind_address: env_or("BIND_ADDRESS", "0.0.0.0:8080"),
            api_key: env_opt("API_KEY"),
            cors_origins: parse_origins(&env_or("CORS_ORIGINS", "http://localhost:3000")),
            rate_limit_rps: env_parse("RATE_LIMIT_RPS", 100).max(1),
            question_source_url: env_opt("QUESTION_SOURCE_URL"),
            question_page_size: env_parse("QUESTION_PAGE_SIZE", 100).max(1),
            llm,
        }
    }
}
