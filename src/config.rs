//! Page interaction settings.
//!
//! Defaults match the markup the server templates render. A page can pass a
//! partial JSON object to override any of them; unknown keys are rejected so
//! typos surface instead of silently falling back.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::alert::AlertLifecycle;
use crate::consts::{
    ACTIVE_CLASS, ALERT_FADE_DELAY_MS, ALERT_REMOVE_DELAY_MS, ALERT_SELECTOR, CONFIRM_ATTRIBUTE, MOBILE_BREAKPOINT_PX,
    SIDEBAR_SELECTOR, TOGGLE_ID,
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid page config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid page config: {field} must not be empty")]
    Empty { field: &'static str },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct PageConfig {
    pub toggle_id: String,
    pub sidebar_selector: String,
    pub active_class: String,
    pub confirm_attribute: String,
    pub alert_selector: String,
    pub mobile_breakpoint_px: f64,
    pub alert_fade_delay_ms: u32,
    pub alert_remove_delay_ms: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            toggle_id: TOGGLE_ID.to_owned(),
            sidebar_selector: SIDEBAR_SELECTOR.to_owned(),
            active_class: ACTIVE_CLASS.to_owned(),
            confirm_attribute: CONFIRM_ATTRIBUTE.to_owned(),
            alert_selector: ALERT_SELECTOR.to_owned(),
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
            alert_fade_delay_ms: ALERT_FADE_DELAY_MS,
            alert_remove_delay_ms: ALERT_REMOVE_DELAY_MS,
        }
    }
}

impl PageConfig {
    /// Parse a JSON override object on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for malformed JSON, unknown keys, or an empty
    /// selector, id, class, or attribute name.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("toggleId", &self.toggle_id),
            ("sidebarSelector", &self.sidebar_selector),
            ("activeClass", &self.active_class),
            ("confirmAttribute", &self.confirm_attribute),
            ("alertSelector", &self.alert_selector),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(ConfigError::Empty { field });
            }
        }
        Ok(())
    }

    /// Selector matching every confirmation-guarded element.
    #[must_use]
    pub fn confirm_selector(&self) -> String {
        format!("[{}]", self.confirm_attribute)
    }

    #[must_use]
    pub fn alert_lifecycle(&self) -> AlertLifecycle {
        AlertLifecycle::new(self.alert_fade_delay_ms, self.alert_remove_delay_ms)
    }
}
