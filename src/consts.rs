//! Default DOM contract and timings for the page interaction layer.

// ── DOM contract ────────────────────────────────────────────────

/// Element id of the hamburger control that toggles the sidebar.
pub const TOGGLE_ID: &str = "menuToggle";

/// Selector for the collapsible navigation panel.
pub const SIDEBAR_SELECTOR: &str = ".sidebar";

/// Class marking the sidebar as open.
pub const ACTIVE_CLASS: &str = "active";

/// Attribute carrying the confirmation message of a guarded element.
pub const CONFIRM_ATTRIBUTE: &str = "data-confirm";

/// Selector for alert banners that dismiss themselves.
pub const ALERT_SELECTOR: &str = ".alert";

// ── Layout ──────────────────────────────────────────────────────

/// Viewport widths at or below this value (CSS px) count as the mobile layout.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

// ── Alerts ──────────────────────────────────────────────────────

/// Delay from setup until an alert starts fading.
pub const ALERT_FADE_DELAY_MS: u32 = 5000;

/// Delay from the start of the fade until the alert is detached.
pub const ALERT_REMOVE_DELAY_MS: u32 = 300;

/// Inline opacity applied when an alert starts fading.
pub const FADED_OPACITY: &str = "0";

// ── Formatting ──────────────────────────────────────────────────

/// Prefix for formatted amounts (Indian Rupee sign).
pub const CURRENCY_SYMBOL: &str = "₹";

/// Text produced for dates that cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";
