use shared_types::{AppConfig, DemoAccount, FeatureFlags};
use std::path::Path;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Load `config.toml` into the global config. Only the first call reads the
/// file; later calls return the cached value.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let config = read_config(Path::new(CONFIG_PATH));
        tracing::info!(
            features = ?config.features,
            demo_accounts = config.demo_accounts.len(),
            "configuration loaded"
        );
        config
    })
}

/// Parse a config file, falling back to defaults (all flags off, no demo
/// accounts) when it is missing or malformed.
pub fn read_config(path: &Path) -> AppConfig {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "config file not readable, using defaults");
            return AppConfig::default();
        }
    };

    toml::from_str(&contents).unwrap_or_else(|e| {
        tracing::warn!(path = %path.display(), error = %e, "config file invalid, using defaults");
        AppConfig::default()
    })
}

/// Loaded feature flags, or all-off defaults before [`load_config`] runs.
pub fn feature_flags() -> &'static FeatureFlags {
    static DEFAULT: FeatureFlags = FeatureFlags {
        telemetry: false,
        self_registration: false,
    };
    CONFIG.get().map(|c| &c.features).unwrap_or(&DEFAULT)
}

/// Accounts to seed into the session store.
pub fn demo_accounts() -> &'static [DemoAccount] {
    CONFIG
        .get()
        .map(|c| c.demo_accounts.as_slice())
        .unwrap_or_default()
}
