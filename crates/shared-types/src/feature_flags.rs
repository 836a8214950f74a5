use serde::{Deserialize, Serialize};

/// Feature flags controlling optional behaviour.
///
/// Loaded from `config.toml` at server startup and exposed to clients
/// via a server function. Every field defaults to `false` so that a
/// missing or incomplete config file disables all optional features.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Export traces and logs over OTLP.
    #[serde(default)]
    pub telemetry: bool,
    /// Let signed-in users create or complete their own profile.
    #[serde(default)]
    pub self_registration: bool,
}

/// An account seeded into the session store at startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DemoAccount {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Raw role as it would be stored on a real profile. Leave unset to
    /// seed an account with no profile.
    #[serde(default)]
    pub role: Option<String>,
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub demo_accounts: Vec<DemoAccount>,
}
