use gloo::console::warn;
use serde::Deserialize;
use web_sys::window;

pub const CONFIG_SCRIPT_ID: &str = "ddate-config";
const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:4943/api";
const DEFAULT_PAGE_SIZE: usize = 10;

/// Runtime settings, embedded in `index.html` as
/// `<script id="ddate-config" type="application/json">`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub backend_url: String,
    pub matches_page_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            matches_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut cfg: AppConfig = serde_json::from_str(json)?;
        if cfg.backend_url.trim().is_empty() {
            cfg.backend_url = DEFAULT_BACKEND_URL.to_string();
        }
        if cfg.matches_page_size == 0 {
            cfg.matches_page_size = DEFAULT_PAGE_SIZE;
        }
        Ok(cfg)
    }

    /// Reads the embedded config, falling back to defaults.
    pub fn load() -> Self {
        let Some(json) = read_embedded_json(CONFIG_SCRIPT_ID) else {
            warn!("no #ddate-config block found, using defaults");
            return Self::default();
        };
        match Self::from_json(&json) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!(format!("ignoring malformed #ddate-config: {e}"));
                Self::default()
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
    fn reads_all_fields() {
        let cfg = AppConfig::from_json(
            r#"{"backend_url": "https://ddate.example/api", "matches_page_size": 25}"#,
        )
        .unwrap();
        assert_eq!(cfg.backend_url, "https://ddate.example/api");
        assert_eq!(cfg.matches_page_size, 25);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let cfg = AppConfig::from_json("{}").unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn blank_or_zero_values_take_defaults() {
        let cfg = AppConfig::from_json(r#"{"backend_url": " ", "matches_page_size": 0}"#).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(AppConfig::from_json("{backend_url:").is_err());
    }
}
