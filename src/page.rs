//! DOM wiring for the page interaction layer.
//!
//! Queries run once, at setup. Elements added to the document afterwards are
//! not covered. Listeners and timers live for the page lifetime, so their
//! closures are handed to the browser with `forget()`. Every browser API
//! failure is logged and skips only the affected behavior.

use std::cell::Cell;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Node, Window};

use crate::alert::{AlertLifecycle, AlertPhase, AlertTransition};
use crate::config::PageConfig;
use crate::confirm::{self, Prompt};
use crate::consts::FADED_OPACITY;
use crate::sidebar::{ClickContext, Sidebar};

thread_local! {
    static INITIALIZED: Cell<bool> = const { Cell::new(false) };
}

/// Wire every behavior to `document`. Runs at most once per page.
pub fn initialize(window: &Window, document: &Document, config: &PageConfig) {
    if INITIALIZED.with(|done| done.replace(true)) {
        log::debug!("page interactions already initialized");
        return;
    }

    let sidebar_wired = wire_sidebar(window, document, config);
    let guarded = wire_confirm_targets(window, document, config);
    let alerts = schedule_alert_dismissal(document, config);
    log::debug!("page interactions ready: sidebar={sidebar_wired} confirm_targets={guarded} alerts={alerts}");
}

// =============================================================================
// SIDEBAR
// =============================================================================

fn wire_sidebar(window: &Window, document: &Document, config: &PageConfig) -> bool {
    let toggle = document.get_element_by_id(&config.toggle_id);
    let sidebar = query_one(document, &config.sidebar_selector);
    let (Some(toggle), Some(sidebar)) = (toggle, sidebar) else {
        return false;
    };

    let on_toggle = {
        let sidebar = sidebar.clone();
        let class = config.active_class.clone();
        Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            let mut state = read_sidebar(&sidebar, &class);
            state.toggle();
            write_sidebar(&sidebar, &class, state);
        })
    };
    let toggle_wired = listen(&toggle, "click", on_toggle);

    let on_document_click = {
        let window = window.clone();
        let class = config.active_class.clone();
        let breakpoint = config.mobile_breakpoint_px;
        Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let Some(viewport_width) = viewport_width(&window) else {
                return;
            };
            let target = event.target();
            let node = target.as_ref().and_then(|t| t.dyn_ref::<Node>());
            let click = ClickContext {
                viewport_width,
                inside_sidebar: sidebar.contains(node),
                inside_toggle: toggle.contains(node),
            };
            let mut state = read_sidebar(&sidebar, &class);
            if state.handle_document_click(&click, breakpoint) {
                write_sidebar(&sidebar, &class, state);
            }
        })
    };
    let outside_wired = listen(document, "click", on_document_click);

    toggle_wired && outside_wired
}

fn read_sidebar(sidebar: &Element, class: &str) -> Sidebar {
    Sidebar::new(sidebar.class_list().contains(class))
}

fn write_sidebar(sidebar: &Element, class: &str, state: Sidebar) {
    if let Err(err) = sidebar.class_list().toggle_with_force(class, state.is_active()) {
        log::warn!("failed to update sidebar class {class}: {err:?}");
    }
}

fn viewport_width(window: &Window) -> Option<f64> {
    match window.inner_width() {
        Ok(width) => width.as_f64(),
        Err(err) => {
            log::warn!("failed to read viewport width: {err:?}");
            None
        }
    }
}

// =============================================================================
// CONFIRMATION GUARDS
// =============================================================================

/// `window.confirm`, which blocks until the user answers.
struct WindowPrompt(Window);

impl Prompt for WindowPrompt {
    fn confirm(&self, message: &str) -> bool {
        match self.0.confirm_with_message(message) {
            Ok(answer) => answer,
            Err(err) => {
                log::warn!("confirm prompt unavailable, declining: {err:?}");
                false
            }
        }
    }
}

fn wire_confirm_targets(window: &Window, document: &Document, config: &PageConfig) -> usize {
    let mut wired = 0;
    for element in query_all(document, &config.confirm_selector()) {
        let prompt = WindowPrompt(window.clone());
        let attribute = config.confirm_attribute.clone();
        let target = element.clone();
        let handler = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let message = target.get_attribute(&attribute).unwrap_or_default();
            if confirm::guard(&prompt, &message).prevents_default() {
                event.prevent_default();
            }
        });
        if listen(&element, "click", handler) {
            wired += 1;
        }
    }
    wired
}

// =============================================================================
// ALERTS
// =============================================================================

fn schedule_alert_dismissal(document: &Document, config: &PageConfig) -> usize {
    let lifecycle = config.alert_lifecycle();
    let mut scheduled = 0;
    for element in query_all(document, &config.alert_selector) {
        let Some(alert) = element.dyn_ref::<HtmlElement>().cloned() else {
            continue;
        };
        schedule_next(alert, lifecycle, AlertPhase::Visible);
        scheduled += 1;
    }
    scheduled
}

/// Arm the timer for the transition out of `phase`; chains until removed.
fn schedule_next(alert: HtmlElement, lifecycle: AlertLifecycle, phase: AlertPhase) {
    let Some((transition, next)) = phase.next() else {
        return;
    };
    Timeout::new(lifecycle.delay_before(transition), move || {
        apply_transition(&alert, transition);
        schedule_next(alert, lifecycle, next);
    })
    .forget();
}

fn apply_transition(alert: &HtmlElement, transition: AlertTransition) {
    match transition {
        AlertTransition::Fade => {
            if let Err(err) = alert.style().set_property("opacity", FADED_OPACITY) {
                log::warn!("failed to fade alert: {err:?}");
            }
        }
        AlertTransition::Remove => alert.remove(),
    }
}

// =============================================================================
// HELPERS
// =============================================================================

/// Attach `handler` for the page lifetime. Returns whether it was attached.
fn listen(target: &EventTarget, event: &str, handler: Closure<dyn FnMut(Event)>) -> bool {
    if let Err(err) = target.add_event_listener_with_callback(event, handler.as_ref().unchecked_ref()) {
        log::warn!("failed to attach {event} listener: {err:?}");
        return false;
    }
    handler.forget();
    true
}

fn query_one(document: &Document, selector: &str) -> Option<Element> {
    match document.query_selector(selector) {
        Ok(element) => element,
        Err(err) => {
            log::warn!("invalid selector {selector}: {err:?}");
            None
        }
    }
}

fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    match document.query_selector_all(selector) {
        Ok(nodes) => (0..nodes.length())
            .filter_map(|index| nodes.item(index))
            .filter_map(|node| node.dyn_ref::<Element>().cloned())
            .collect(),
        Err(err) => {
            log::warn!("invalid selector {selector}: {err:?}");
            Vec::new()
        }
    }
}
