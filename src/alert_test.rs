use super::*;

#[test]
fn default_lifecycle_uses_page_timings() {
    let lifecycle = AlertLifecycle::default();
    assert_eq!(lifecycle.fade_at_ms(), 5000);
    assert_eq!(lifecycle.remove_at_ms(), 5300);
}

#[test]
fn phase_boundaries() {
    let lifecycle = AlertLifecycle::default();
    assert_eq!(lifecycle.phase_at(0), AlertPhase::Visible);
    assert_eq!(lifecycle.phase_at(4999), AlertPhase::Visible);
    assert_eq!(lifecycle.phase_at(5000), AlertPhase::Fading);
    assert_eq!(lifecycle.phase_at(5299), AlertPhase::Fading);
    assert_eq!(lifecycle.phase_at(5300), AlertPhase::Removed);
    assert_eq!(lifecycle.phase_at(u64::MAX), AlertPhase::Removed);
}

#[test]
fn delays_are_relative_to_previous_transition() {
    let lifecycle = AlertLifecycle::new(1000, 50);
    assert_eq!(lifecycle.delay_before(AlertTransition::Fade), 1000);
    assert_eq!(lifecycle.delay_before(AlertTransition::Remove), 50);
}

#[test]
fn walking_the_phases_sums_to_the_removal_time() {
    // Same walk the DOM layer chains its timers along.
    let lifecycle = AlertLifecycle::default();
    let mut phase = AlertPhase::Visible;
    let mut elapsed = 0u64;
    let mut seen = Vec::new();
    while let Some((transition, next)) = phase.next() {
        elapsed += u64::from(lifecycle.delay_before(transition));
        assert_eq!(lifecycle.phase_at(elapsed), next);
        assert_eq!(lifecycle.phase_at(elapsed - 1), phase);
        seen.push(transition);
        phase = next;
    }
    assert_eq!(seen, vec![AlertTransition::Fade, AlertTransition::Remove]);
    assert_eq!(elapsed, lifecycle.remove_at_ms());
}

#[test]
fn removed_is_terminal() {
    assert_eq!(AlertPhase::Visible.next(), Some((AlertTransition::Fade, AlertPhase::Fading)));
    assert_eq!(AlertPhase::Fading.next(), Some((AlertTransition::Remove, AlertPhase::Removed)));
    assert_eq!(AlertPhase::Removed.next(), None);
}

#[test]
fn alert_present_at_4999_and_gone_at_5301() {
    let mut tracker = AlertTracker::new(AlertLifecycle::default());
    let id = tracker.register();

    assert!(tracker.advance_to(4999).is_empty());
    assert_eq!(tracker.phase(id), Some(AlertPhase::Visible));

    let events = tracker.advance_to(5301);
    assert_eq!(
        events,
        vec![
            AlertEvent { at_ms: 5000, id, transition: AlertTransition::Fade },
            AlertEvent { at_ms: 5300, id, transition: AlertTransition::Remove },
        ]
    );
    assert!(!tracker.is_present(id));
    assert!(tracker.is_empty());
}

#[test]
fn fading_alert_is_still_attached() {
    let mut tracker = AlertTracker::default();
    let id = tracker.register();
    tracker.advance_to(5100);
    assert_eq!(tracker.phase(id), Some(AlertPhase::Fading));
    assert!(tracker.is_present(id));
}

#[test]
fn removed_alert_is_never_reported_again() {
    let mut tracker = AlertTracker::default();
    tracker.register();
    assert_eq!(tracker.advance_to(6000).len(), 2);
    assert!(tracker.advance_to(60_000).is_empty());
}

#[test]
fn alerts_registered_at_setup_dismiss_together() {
    let mut tracker = AlertTracker::default();
    let a = tracker.register();
    let b = tracker.register();
    let events = tracker.advance_to(5000);
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].id, a);
    assert_eq!(events[1].id, b);
    assert!(events.iter().all(|e| e.transition == AlertTransition::Fade));
    assert_eq!(tracker.len(), 2);
}

#[test]
fn later_registration_is_scheduled_from_its_own_start() {
    let mut tracker = AlertTracker::new(AlertLifecycle::new(100, 10));
    let early = tracker.register();
    tracker.advance_to(50);
    let late = tracker.register();

    let events = tracker.advance_to(200);
    let at = |id: AlertId, transition: AlertTransition| events.iter().find(|e| e.id == id && e.transition == transition).map(|e| e.at_ms);
    assert_eq!(at(early, AlertTransition::Fade), Some(100));
    assert_eq!(at(early, AlertTransition::Remove), Some(110));
    assert_eq!(at(late, AlertTransition::Fade), Some(150));
    assert_eq!(at(late, AlertTransition::Remove), Some(160));
    assert!(events.windows(2).all(|w| w[0].at_ms <= w[1].at_ms));
}

#[test]
fn clock_never_moves_backwards() {
    let mut tracker = AlertTracker::default();
    let id = tracker.register();
    tracker.advance_to(5000);
    assert!(tracker.advance_to(10).is_empty());
    assert_eq!(tracker.now_ms(), 5000);
    assert_eq!(tracker.phase(id), Some(AlertPhase::Fading));
}
