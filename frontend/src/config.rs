use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

pub const PAYPAL_SDK_ORIGIN: &str = "https://www.paypal.com";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default, alias = "PAYPAL_CLIENT_ID")]
    pub paypal_client_id: Option<String>,
    #[serde(default, alias = "PAYPAL_PLAN_ID")]
    pub paypal_plan_id: Option<String>,
}

impl RuntimeConfig {
    /// Values baked in by the build (`PAYPAL_CLIENT_ID=... trunk build`).
    pub fn build_time() -> Self {
        Self {
            paypal_client_id: option_env!("PAYPAL_CLIENT_ID").map(str::to_string),
            paypal_plan_id: option_env!("PAYPAL_PLAN_ID").map(str::to_string),
        }
        .normalized()
    }

    /// Blank values count as unset.
    pub fn normalized(self) -> Self {
        fn clean(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }
        Self {
            paypal_client_id: clean(self.paypal_client_id),
            paypal_plan_id: clean(self.paypal_plan_id),
        }
    }

    /// Field-wise merge where `self` wins over `fallback`.
    pub fn or(self, fallback: RuntimeConfig) -> Self {
        let this = self.normalized();
        let fallback = fallback.normalized();
        Self {
            paypal_client_id: this.paypal_client_id.or(fallback.paypal_client_id),
            paypal_plan_id: this.paypal_plan_id.or(fallback.paypal_plan_id),
        }
    }

    pub fn client_id(&self) -> Result<ClientId, ConfigError> {
        ClientId::parse(self.paypal_client_id.as_deref())
    }

    pub fn plan_id(&self) -> Option<String> {
        self.paypal_plan_id.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("payment client id is not configured")]
    MissingClientId,
    #[error("payment client id {0:?} contains unsupported characters")]
    MalformedClientId(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientId(String);

impl ClientId {
    pub fn parse(raw: Option<&str>) -> Result<Self, ConfigError> {
        let value = raw.map(str::trim).unwrap_or_default();
        if value.is_empty() {
            return Err(ConfigError::MissingClientId);
        }
        let valid = value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(ConfigError::MalformedClientId(value.to_string()));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

fn get_from_env_js() -> Option<RuntimeConfig> {
    // Optional global object: window.__POLYGLOT_ENV = { PAYPAL_CLIENT_ID: "...", PAYPAL_PLAN_ID: "..." }
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &"__POLYGLOT_ENV".into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    let read = |upper: &str, lower: &str| {
        js_sys::Reflect::get(&obj, &upper.into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .or_else(|| js_sys::Reflect::get(&obj, &lower.into()).ok())
            .and_then(|v| v.as_string())
    };
    Some(RuntimeConfig {
        paypal_client_id: read("PAYPAL_CLIENT_ID", "paypal_client_id"),
        paypal_plan_id: read("PAYPAL_PLAN_ID", "paypal_plan_id"),
    })
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let origin = web_sys::window()?.location().origin().ok()?;
    let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
    if !resp.status().is_success() {
        log::debug!("config.json unavailable ({})", resp.status());
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

fn cache(config: RuntimeConfig) -> RuntimeConfig {
    let _ = RUNTIME_CONFIG.set(config.clone());
    RUNTIME_CONFIG.get().cloned().unwrap_or(config)
}

/// Resolves the runtime config once per page session. Precedence is
/// `window.__POLYGLOT_ENV`, then `./config.json`, then build-time values.
pub async fn await_runtime_config() -> RuntimeConfig {
    if let Some(cached) = RUNTIME_CONFIG.get() {
        return cached.clone();
    }
    let mut resolved = RuntimeConfig::build_time();
    if let Some(file) = fetch_runtime_config().await {
        resolved = file.or(resolved);
    }
    if let Some(globals) = get_from_env_js() {
        resolved = globals.or(resolved);
    }
    cache(resolved)
}

/// Synchronous view for components: cached config if already resolved,
/// build-time values otherwise.
pub fn current() -> RuntimeConfig {
    RUNTIME_CONFIG
        .get()
        .cloned()
        .unwrap_or_else(RuntimeConfig::build_time)
}

pub async fn init() {
    let config = await_runtime_config().await;
    match config.client_id() {
        Ok(_) => log::info!("Payment client id configured"),
        Err(err) => log::warn!("Payment configuration incomplete: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn client_id_rejects_missing_and_blank() {
        assert_eq!(ClientId::parse(None), Err(ConfigError::MissingClientId));
        assert_eq!(ClientId::parse(Some("   ")), Err(ConfigError::MissingClientId));
    }

    #[test]
    fn client_id_rejects_url_breaking_characters() {
        let err = ClientId::parse(Some("abc&intent=capture")).unwrap_err();
        assert!(matches!(err, ConfigError::MalformedClientId(_)));
    }

    #[test]
    fn client_id_accepts_provider_format() {
        let id = ClientId::parse(Some(" AbC-12_x ")).unwrap();
        assert_eq!(id.as_str(), "AbC-12_x");
    }

    #[test]
    fn merge_prefers_primary_and_skips_blank_values() {
        let primary = RuntimeConfig {
            paypal_client_id: Some(" ".into()),
            paypal_plan_id: Some("P-1".into()),
        };
        let fallback = RuntimeConfig {
            paypal_client_id: Some("client".into()),
            paypal_plan_id: Some("P-2".into()),
        };
        let merged = primary.or(fallback);
        assert_eq!(merged.paypal_client_id.as_deref(), Some("client"));
        assert_eq!(merged.plan_id().as_deref(), Some("P-1"));
    }

    #[test]
    fn config_json_accepts_both_key_styles() {
        let upper: RuntimeConfig =
            serde_json::from_value(json!({ "PAYPAL_CLIENT_ID": "abc" })).unwrap();
        let lower: RuntimeConfig =
            serde_json::from_value(json!({ "paypal_client_id": "abc", "paypal_plan_id": "P-9" }))
                .unwrap();
        assert_eq!(upper.paypal_client_id.as_deref(), Some("abc"));
        assert_eq!(upper.paypal_plan_id, None);
        assert_eq!(lower.plan_id().as_deref(), Some("P-9"));
    }
}
