//! Alert banner auto-dismissal.
//!
//! Each banner present at setup goes Visible → Fading → Removed on two
//! chained timers: the fade starts after `fade_delay_ms`, and the node is
//! detached `remove_delay_ms` after that. Nothing cancels the timers, and a
//! removed banner is never touched again.
//!
//! The DOM layer walks [`AlertPhase::next`] and waits
//! [`AlertLifecycle::delay_before`] each transition. [`AlertTracker`] replays the same schedule for many banners
//! against a virtual clock.

#[cfg(test)]
#[path = "alert_test.rs"]
mod alert_test;

use crate::consts::{ALERT_FADE_DELAY_MS, ALERT_REMOVE_DELAY_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertPhase {
    Visible,
    /// Opacity set to zero; the CSS transition runs.
    Fading,
    /// Detached from the document.
    Removed,
}

impl AlertPhase {
    /// The phase a transition leads to, or `None` once removed.
    #[must_use]
    pub fn next(self) -> Option<(AlertTransition, AlertPhase)> {
        match self {
            Self::Visible => Some((AlertTransition::Fade, Self::Fading)),
            Self::Fading => Some((AlertTransition::Remove, Self::Removed)),
            Self::Removed => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertTransition {
    Fade,
    Remove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertLifecycle {
    fade_delay_ms: u32,
    remove_delay_ms: u32,
}

impl Default for AlertLifecycle {
    fn default() -> Self {
        Self { fade_delay_ms: ALERT_FADE_DELAY_MS, remove_delay_ms: ALERT_REMOVE_DELAY_MS }
    }
}

impl AlertLifecycle {
    #[must_use]
    pub fn new(fade_delay_ms: u32, remove_delay_ms: u32) -> Self {
        Self { fade_delay_ms, remove_delay_ms }
    }

    /// Delay before `transition`, counted from the previous transition (or
    /// from setup, for the fade).
    #[must_use]
    pub fn delay_before(self, transition: AlertTransition) -> u32 {
        match transition {
            AlertTransition::Fade => self.fade_delay_ms,
            AlertTransition::Remove => self.remove_delay_ms,
        }
    }

    /// Milliseconds after setup at which the fade starts.
    #[must_use]
    pub fn fade_at_ms(self) -> u64 {
        u64::from(self.fade_delay_ms)
    }

    /// Milliseconds after setup at which the banner is detached.
    #[must_use]
    pub fn remove_at_ms(self) -> u64 {
        self.fade_at_ms() + u64::from(self.remove_delay_ms)
    }

    /// Phase of a banner `elapsed_ms` after setup.
    #[must_use]
    pub fn phase_at(self, elapsed_ms: u64) -> AlertPhase {
        if elapsed_ms < self.fade_at_ms() {
            AlertPhase::Visible
        } else if elapsed_ms < self.remove_at_ms() {
            AlertPhase::Fading
        } else {
            AlertPhase::Removed
        }
    }
}

/// Handle to a banner registered with an [`AlertTracker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AlertId(u32);

/// A transition that fired while advancing the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertEvent {
    pub at_ms: u64,
    pub id: AlertId,
    pub transition: AlertTransition,
}

#[derive(Debug)]
struct TrackedAlert {
    id: AlertId,
    registered_at_ms: u64,
    phase: AlertPhase,
}

impl TrackedAlert {
    fn due_at_ms(&self, lifecycle: AlertLifecycle) -> Option<u64> {
        match self.phase {
            AlertPhase::Visible => Some(self.registered_at_ms + lifecycle.fade_at_ms()),
            AlertPhase::Fading => Some(self.registered_at_ms + lifecycle.remove_at_ms()),
            AlertPhase::Removed => None,
        }
    }
}

/// Virtual-clock driver for any number of banners.
#[derive(Debug, Default)]
pub struct AlertTracker {
    lifecycle: AlertLifecycle,
    alerts: Vec<TrackedAlert>,
    now_ms: u64,
    next_id: u32,
}

impl AlertTracker {
    #[must_use]
    pub fn new(lifecycle: AlertLifecycle) -> Self {
        Self { lifecycle, ..Self::default() }
    }

    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Start tracking a banner at the current time.
    pub fn register(&mut self) -> AlertId {
        let id = AlertId(self.next_id);
        self.next_id += 1;
        self.alerts.push(TrackedAlert { id, registered_at_ms: self.now_ms, phase: AlertPhase::Visible });
        id
    }

    /// Current phase, or `None` once the banner has been removed.
    #[must_use]
    pub fn phase(&self, id: AlertId) -> Option<AlertPhase> {
        self.alerts.iter().find(|a| a.id == id).map(|a| a.phase)
    }

    #[must_use]
    pub fn is_present(&self, id: AlertId) -> bool {
        self.phase(id).is_some()
    }

    /// Number of banners still attached.
    #[must_use]
    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    /// Move the clock forward to `now_ms`, firing every due transition.
    ///
    /// Events come back in firing order; ties keep registration order.
    /// Removed banners are dropped and never reported again. Moving the
    /// clock backwards is a no-op.
    pub fn advance_to(&mut self, now_ms: u64) -> Vec<AlertEvent> {
        if now_ms < self.now_ms {
            return Vec::new();
        }
        self.now_ms = now_ms;

        let lifecycle = self.lifecycle;
        let mut events = Vec::new();
        for alert in &mut self.alerts {
            while let Some(due) = alert.due_at_ms(lifecycle) {
                if due > now_ms {
                    break;
                }
                let Some((transition, phase)) = alert.phase.next() else {
                    break;
                };
                alert.phase = phase;
                events.push(AlertEvent { at_ms: due, id: alert.id, transition });
            }
        }
        self.alerts.retain(|a| a.phase != AlertPhase::Removed);
        events.sort_by_key(|e| (e.at_ms, e.id));
        events
    }
}
