//! Client-side behavior for the server-rendered property-management pages.
//!
//! This crate is compiled to WebAssembly and loaded by every page. It wires a
//! handful of stateless UI behaviors to the document once the host calls
//! `initialize`: sidebar toggling, closing the
//! sidebar on outside clicks, confirmation prompts for destructive actions,
//! and auto-dismissal of alert banners. It also exports the currency and date
//! formatters used by inline page scripts.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`sidebar`] | Sidebar visibility state and the outside-click rule |
//! | [`confirm`] | Confirmation guard over a pluggable [`confirm::Prompt`] |
//! | [`alert`] | Alert fade/remove lifecycle and a virtual-clock tracker |
//! | [`format`] | Currency and date display formatting |
//! | [`config`] | [`config::PageConfig`] selectors, class names, delays |
//! | [`consts`] | Default selectors and timings |
//! | `page` | DOM wiring (`browser` feature only) |
//! | `exports` | `#[wasm_bindgen]` entry points (`browser` feature only) |
//!
//! Everything outside `page` and `exports` is plain Rust and is tested
//! natively without a browser.

pub mod alert;
pub mod config;
pub mod confirm;
pub mod consts;
pub mod format;
pub mod sidebar;

#[cfg(feature = "browser")]
pub mod exports;
#[cfg(feature = "browser")]
pub mod page;
