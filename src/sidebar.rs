//! Sidebar visibility and the outside-click close rule.
//!
//! The live state is the `active` class on the sidebar element; [`Sidebar`]
//! is a snapshot of it that the DOM layer reads, mutates, and writes back.
//! Keeping the decision here lets the rule be tested without a document.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

/// Where a document click landed, relative to the sidebar and its toggle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickContext {
    /// `window.innerWidth` at the time of the click.
    pub viewport_width: f64,
    /// Target is the sidebar or one of its descendants.
    pub inside_sidebar: bool,
    /// Target is the toggle control or one of its descendants.
    pub inside_toggle: bool,
}

impl ClickContext {
    #[must_use]
    pub fn is_outside(&self) -> bool {
        !self.inside_sidebar && !self.inside_toggle
    }
}

/// Whether a viewport width counts as the narrow (mobile) layout.
#[must_use]
pub fn is_narrow(viewport_width: f64, breakpoint: f64) -> bool {
    viewport_width <= breakpoint
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sidebar {
    active: bool,
}

impl Sidebar {
    #[must_use]
    pub fn new(active: bool) -> Self {
        Self { active }
    }

    #[must_use]
    pub fn is_active(self) -> bool {
        self.active
    }

    /// Flip visibility in response to a click on the toggle control.
    pub fn toggle(&mut self) -> bool {
        self.active = !self.active;
        self.active
    }

    /// Apply the document-wide click rule.
    ///
    /// Closes the sidebar only on a narrow viewport when the click landed
    /// outside both the sidebar and the toggle. Returns `true` if the state
    /// changed.
    pub fn handle_document_click(&mut self, click: &ClickContext, breakpoint: f64) -> bool {
        if !is_narrow(click.viewport_width, breakpoint) || !click.is_outside() {
            return false;
        }
        let was_active = self.active;
        self.active = false;
        was_active
    }
}
