use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// LLM provider
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Request timeout for one `generateContent` call.
    #[serde(default = "d_30u")]
    pub timeout_secs: u64,
    /// Additional attempts after a transient transport failure.
    /// The default of 1 gives one retry; 0 disables retries entirely.
    #[serde(default = "d_1")]
    pub max_retries: u32,
    /// Sampling temperature. Pinned to 0.0 so replies are grounded in the
    /// supplied project data rather than creatively embellished.
    #[serde(default)]
    pub temperature: f32,
    #[serde(default)]
    pub provider: ProviderConfig,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            max_retries: 1,
            temperature: 0.0,
            provider: ProviderConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Provider instance identifier, used in logs and error messages.
    #[serde(default = "d_id")]
    pub id: String,
    #[serde(default = "d_base_url")]
    pub base_url: String,
    #[serde(default = "d_model")]
    pub model: String,
    #[serde(default)]
    pub auth: AuthConfig,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            id: d_id(),
            base_url: d_base_url(),
            model: d_model(),
            auth: AuthConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Env var containing the API key.
    #[serde(default = "d_env")]
    pub env: String,
    /// Direct key (for config-only setups; prefer env).
    #[serde(default)]
    pub key: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            env: d_env(),
            key: None,
        }
    }
}

// ── serde default helpers ───────────────────────────────────────────

fn d_30u() -> u64 {
    30
}
fn d_1() -> u32 {
    1
}
fn d_id() -> String {
    "google".into()
}
fn d_base_url() -> String {
    "https://generativelanguage.googleapis.com".into()
}
fn d_model() -> String {
    "gemini-2.5-flash-lite".into()
}
fn d_env() -> String {
    "GOOGLE_API_KEY".into()
}
