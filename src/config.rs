use gloo::console::{log, warn};
use serde::Deserialize;
use web_sys::window;

/// `<script id="site-config" type="application/json">` in index.html.
pub const CONFIG_SCRIPT_ID: &str = "site-config";

// Local `npx convex dev` backend.
const DEFAULT_DEPLOYMENT_URL: &str = "http://127.0.0.1:3210";
const DEFAULT_JOIN_WAITLIST_PATH: &str = "myFunctions:joinWaitlist";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Base URL of the Convex deployment, e.g. `https://happy-otter-123.convex.cloud`.
    pub deployment_url: String,
    /// `module:function` path of the waitlist mutation.
    pub join_waitlist_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            // CONVEX_URL at build time beats the local dev backend.
            deployment_url: option_env!("CONVEX_URL")
                .unwrap_or(DEFAULT_DEPLOYMENT_URL)
                .to_string(),
            join_waitlist_path: DEFAULT_JOIN_WAITLIST_PATH.to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut cfg: SiteConfig = serde_json::from_str(json)?;
        // An empty string in the page means "not configured".
        let defaults = SiteConfig::default();
        if cfg.deployment_url.trim().is_empty() {
            cfg.deployment_url = defaults.deployment_url;
        }
        if cfg.join_waitlist_path.trim().is_empty() {
            cfg.join_waitlist_path = defaults.join_waitlist_path;
        }
        Ok(cfg)
    }

    /// Read the embedded config block, falling back to defaults when it is
    /// missing or broken.
    pub fn load() -> Self {
        let Some(json) = read_embedded_json(CONFIG_SCRIPT_ID) else {
            log!("no #site-config block, using default backend");
            return SiteConfig::default();
        };
        match SiteConfig::from_json(&json) {
            Ok(cfg) => {
                log!(format!("waitlist backend: {}", cfg.deployment_url));
                cfg
            }
            Err(e) => {
                warn!(format!("ignoring malformed #site-config: {e}"));
                SiteConfig::default()
            }
        }
    }
}

fn read_embedded_json(script_id: &str) -> Option<String> {
    let doc = window()?.document()?;
    let el = doc.get_element_by_id(script_id)?;
    el.text_content()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config() {
        let cfg = SiteConfig::from_json(
            r#"{"deployment_url":"https://happy-otter-123.convex.cloud","join_waitlist_path":"waitlist:join"}"#,
        )
        .unwrap();
        assert_eq!(cfg.deployment_url, "https://happy-otter-123.convex.cloud");
        assert_eq!(cfg.join_waitlist_path, "waitlist:join");
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let cfg = SiteConfig::from_json("{}").unwrap();
        assert_eq!(cfg, SiteConfig::default());
        assert_eq!(cfg.join_waitlist_path, "myFunctions:joinWaitlist");
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let cfg = SiteConfig::from_json(r#"{"deployment_url":"  "}"#).unwrap();
        assert_eq!(cfg.deployment_url, SiteConfig::default().deployment_url);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(SiteConfig::from_json("{deployment_url:").is_err());
    }
}
