//! Server configuration, read once from environment variables.
//!
//! The storage handle is created from this at process start and passed down;
//! there is no ambient global. Provider keys are optional so the server can
//! come up unconfigured -- `GET /api/config/check` reports which keys are
//! present, and the upload/generate endpoints reject requests that need a
//! missing key.

use std::env;

use vaultsmith_check::ValidationPolicy;

/// OCR provider settings.
#[derive(Debug, Clone)]
pub struct OcrConfig {
    /// OCR.space API key (`OCR_SPACE_KEY`).
    pub api_key: Option<String>,
    /// Parse endpoint URL.
    pub endpoint: String,
}

/// LLM provider settings (OpenAI-compatible chat completions).
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Groq API key (`GROQ_API_KEY`).
    pub api_key: Option<String>,
    /// Chat completions endpoint URL.
    pub endpoint: String,
    /// Model identifier.
    pub model: String,
}

/// Complete server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database file path.
    pub db_path: String,
    /// Listen port.
    pub port: String,
    /// OCR provider settings.
    pub ocr: OcrConfig,
    /// LLM provider settings.
    pub llm: LlmConfig,
    /// Whether model validation enforces naming conventions and `reasoning`.
    pub strict_validation: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            db_path: "vaultsmith.db".to_string(),
            port: "5000".to_string(),
            ocr: OcrConfig {
                api_key: None,
                endpoint: "https://api.ocr.space/parse/image".to_string(),
            },
            llm: LlmConfig {
                api_key: None,
                endpoint: "https://api.groq.com/openai/v1/chat/completions".to_string(),
                model: "llama-3.3-70b-versatile".to_string(),
            },
            strict_validation: false,
        }
    }
}

impl Config {
    /// Reads configuration from environment variables, falling back to
    /// defaults for anything unset.
    ///
    /// - `VAULTSMITH_DB_PATH`: SQLite database file path (default: "vaultsmith.db")
    /// - `VAULTSMITH_PORT`: Server listen port (default: "5000")
    /// - `OCR_SPACE_KEY`: OCR.space API key
    /// - `GROQ_API_KEY`: Groq API key
    /// - `VAULTSMITH_OCR_URL` / `VAULTSMITH_GROQ_URL`: provider endpoint
    ///   overrides (local mocks, tests)
    /// - `VAULTSMITH_GROQ_MODEL`: model override
    /// - `VAULTSMITH_STRICT_VALIDATION`: enable strict model validation
    pub fn from_env() -> Self {
        let mut config = Config::default();

        if let Ok(path) = env::var("VAULTSMITH_DB_PATH") {
            config.db_path = path;
        }
        if let Ok(port) = env::var("VAULTSMITH_PORT") {
            config.port = port;
        }
        config.ocr.api_key = non_empty(env::var("OCR_SPACE_KEY").ok());
        config.llm.api_key = non_empty(env::var("GROQ_API_KEY").ok());
        if let Ok(url) = env::var("VAULTSMITH_OCR_URL") {
            config.ocr.endpoint = url;
        }
        if let Ok(url) = env::var("VAULTSMITH_GROQ_URL") {
            config.llm.endpoint = url;
        }
        if let Ok(model) = env::var("VAULTSMITH_GROQ_MODEL") {
            config.llm.model = model;
        }
        config.strict_validation = env::var("VAULTSMITH_STRICT_VALIDATION")
            .map(|v| {
                matches!(
                    v.trim().to_ascii_lowercase().as_str(),
                    "1" | "true" | "yes" | "on"
                )
            })
            .unwrap_or(false);

        config
    }

    /// Returns the validation policy the generate endpoint applies.
    pub fn validation_policy(&self) -> ValidationPolicy {
        if self.strict_validation {
            ValidationPolicy::Strict
        } else {
            ValidationPolicy::Lenient
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
