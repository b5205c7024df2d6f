//! Confirmation guards for destructive actions.
//!
//! A guarded element carries its prompt text in the confirm attribute. On
//! click the user is asked synchronously; a declined prompt suppresses the
//! element's default action (form submission, navigation).

#[cfg(test)]
#[path = "confirm_test.rs"]
mod confirm_test;

/// A yes/no question put to the user.
///
/// In the browser this is `window.confirm`, which blocks the event loop until
/// answered. A non-blocking host would implement it as an awaited dialog.
pub trait Prompt {
    fn confirm(&self, message: &str) -> bool;
}

impl<F> Prompt for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// What to do with the click that triggered a guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Let the default action run unmodified.
    Proceed,
    /// Call `preventDefault` on the event.
    Suppress,
}

impl ClickOutcome {
    #[must_use]
    pub fn prevents_default(self) -> bool {
        self == Self::Suppress
    }
}

/// Ask `prompt` with `message` and map the answer to a click outcome.
pub fn guard<P: Prompt + ?Sized>(prompt: &P, message: &str) -> ClickOutcome {
    if prompt.confirm(message) { ClickOutcome::Proceed } else { ClickOutcome::Suppress }
}
