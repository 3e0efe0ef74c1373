//! Timed driver for the overlay state machine.
//!
//! `OverlayHost` owns the manager behind `Rc<RefCell<..>>` and chains the
//! scheduled transitions: reveal one tick after mount, auto-dismiss after
//! the notification dwell, detach one exit-transition after dismissal.
//! Generic over port and scheduler, so the full timing contract runs under
//! a virtual clock in tests.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config;
use crate::overlay::manager::{OverlayId, OverlayManager, OverlayPort, OverlaySpec, Phase, Variant};
use crate::overlay::scheduler::Scheduler;

pub struct OverlayHost<P: OverlayPort + 'static, S: Scheduler> {
    manager: Rc<RefCell<OverlayManager<P>>>,
    scheduler: S,
}

impl<P: OverlayPort + 'static, S: Scheduler> Clone for OverlayHost<P, S> {
    fn clone(&self) -> Self {
        Self { manager: self.manager.clone(), scheduler: self.scheduler.clone() }
    }
}

// Context equality: same host, not same contents.
impl<P: OverlayPort + 'static, S: Scheduler> PartialEq for OverlayHost<P, S> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.manager, &other.manager)
    }
}

impl<P: OverlayPort + 'static, S: Scheduler> OverlayHost<P, S> {
    pub fn new(port: P, scheduler: S) -> Self {
        Self {
            manager: Rc::new(RefCell::new(OverlayManager::new(port))),
            scheduler,
        }
    }

    /// Shows a corner notification that dismisses itself after the dwell
    /// and detaches once its exit transition has played out.
    pub fn notify(&self, message: impl Into<String>, variant: Variant) -> OverlayId {
        let id = self.manager.borrow_mut().mount(OverlaySpec::Notification {
            message: message.into(),
            variant,
        });
        self.schedule_reveal(id);
        let host = self.clone();
        self.scheduler.schedule(
            config::NOTIFICATION_DWELL_MS,
            Box::new(move || host.dismiss(id)),
        );
        id
    }

    /// Opens the lightbox. An already-active lightbox is dismissed on the
    /// spot, so two surfaces only coexist within the exit window.
    pub fn open_lightbox(
        &self,
        image: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> OverlayId {
        let previous = self.manager.borrow().active_lightbox();
        if let Some(old) = previous {
            self.dismiss(old);
        }
        let id = self.manager.borrow_mut().mount(OverlaySpec::Lightbox {
            image: image.into(),
            title: title.into(),
            description: description.into(),
        });
        self.schedule_reveal(id);
        id
    }

    /// Begins the exit transition and schedules detachment. Safe to call
    /// any number of times; only the first call on a live overlay does
    /// anything.
    pub fn dismiss(&self, id: OverlayId) {
        if self.manager.borrow_mut().dismiss(id) {
            let manager = self.manager.clone();
            self.scheduler.schedule(
                config::OVERLAY_EXIT_MS,
                Box::new(move || {
                    manager.borrow_mut().remove(id);
                }),
            );
        }
    }

    pub fn close_lightbox(&self) {
        let active = self.manager.borrow().active_lightbox();
        if let Some(id) = active {
            self.dismiss(id);
        }
    }

    pub fn active_lightbox(&self) -> Option<OverlayId> {
        self.manager.borrow().active_lightbox()
    }

    pub fn phase(&self, id: OverlayId) -> Phase {
        self.manager.borrow().phase(id)
    }

    pub fn mounted_count(&self) -> usize {
        self.manager.borrow().mounted_count()
    }

    fn schedule_reveal(&self, id: OverlayId) {
        let manager = self.manager.clone();
        self.scheduler.schedule(
            config::REVEAL_TICK_MS,
            Box::new(move || {
                manager.borrow_mut().reveal(id);
            }),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::manager::{PortEvent, RecordingPort};
    use crate::overlay::scheduler::ManualScheduler;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Events = Rc<RefCell<Vec<PortEvent>>>;

    fn host() -> (OverlayHost<RecordingPort, ManualScheduler>, ManualScheduler, Events) {
        let (port, events) = RecordingPort::new();
        let sched = ManualScheduler::new();
        (OverlayHost::new(port, sched.clone()), sched, events)
    }

    #[test]
    fn notification_follows_the_documented_timeline() {
        let (host, sched, events) = host();
        let id = host.notify("Message sent successfully!", Variant::Success);

        // Mounted immediately, still hidden.
        assert_eq!(host.phase(id), Phase::Created);
        assert!(events.borrow().contains(&PortEvent::Mounted(id, false)));

        // Not yet visible one tick early.
        sched.advance(9);
        assert_eq!(host.phase(id), Phase::Created);

        sched.advance(1);
        assert_eq!(host.phase(id), Phase::Visible);

        // Dwell runs from mount time: exit begins at 4000ms.
        sched.advance(3989);
        assert_eq!(host.phase(id), Phase::Visible);
        sched.advance(1);
        assert_eq!(host.phase(id), Phase::Dismissing);

        // Detached once the exit transition has elapsed.
        sched.advance(299);
        assert_eq!(host.phase(id), Phase::Dismissing);
        sched.advance(1);
        assert_eq!(host.phase(id), Phase::Removed);
        assert_eq!(host.mounted_count(), 0);

        assert_eq!(
            *events.borrow(),
            vec![
                PortEvent::Mounted(id, false),
                PortEvent::Slot(id, 0),
                PortEvent::Visible(id, true),
                PortEvent::Visible(id, false),
                PortEvent::Unmounted(id),
            ]
        );
    }

    #[test]
    fn reopening_the_lightbox_replaces_the_old_one() {
        let (host, sched, events) = host();
        let first = host.open_lightbox("/assets/a.jpg", "A", "first");
        sched.advance(10);
        assert_eq!(host.phase(first), Phase::Visible);

        let second = host.open_lightbox("/assets/b.jpg", "B", "second");
        // The old surface starts leaving in the same tick the new one
        // mounts; both attached only through the shared exit window.
        assert_eq!(host.phase(first), Phase::Dismissing);
        assert_eq!(host.active_lightbox(), Some(second));
        assert_eq!(host.mounted_count(), 2);

        sched.advance(300);
        assert_eq!(host.phase(first), Phase::Removed);
        assert_eq!(host.phase(second), Phase::Visible);
        assert_eq!(host.mounted_count(), 1);

        // The old lightbox was never visible again after the replacement.
        let visibles: Vec<_> = events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                PortEvent::Visible(id, v) => Some((*id, *v)),
                _ => None,
            })
            .collect();
        assert_eq!(visibles, vec![(first, true), (first, false), (second, true)]);
    }

    #[test]
    fn user_dismissal_cuts_the_dwell_short() {
        let (host, sched, events) = host();
        let id = host.open_lightbox("/assets/a.jpg", "", "");
        sched.advance(10);
        host.dismiss(id);
        assert_eq!(host.phase(id), Phase::Dismissing);
        sched.advance(300);
        assert_eq!(host.phase(id), Phase::Removed);
        let unmounts = events
            .borrow()
            .iter()
            .filter(|e| matches!(e, PortEvent::Unmounted(_)))
            .count();
        assert_eq!(unmounts, 1);
    }

    #[test]
    fn double_dismiss_detaches_once() {
        let (host, sched, events) = host();
        let id = host.notify("once only", Variant::Info);
        sched.advance(10);
        host.dismiss(id);
        host.dismiss(id);
        sched.advance(5_000);
        let unmounts = events
            .borrow()
            .iter()
            .filter(|e| matches!(e, PortEvent::Unmounted(_)))
            .count();
        assert_eq!(unmounts, 1);
    }

    #[test]
    fn close_lightbox_without_one_open_is_a_noop() {
        let (host, sched, events) = host();
        host.close_lightbox();
        sched.advance(1_000);
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn stacked_notifications_compact_after_the_first_expires() {
        let (host, sched, events) = host();
        let a = host.notify("a", Variant::Info);
        sched.advance(1_000);
        let b = host.notify("b", Variant::Info);
        sched.advance(1_000);
        let c = host.notify("c", Variant::Info);

        // a expires at 4000ms and detaches at 4300ms; b and c close up.
        sched.advance(2_300);
        assert_eq!(host.phase(a), Phase::Removed);
        assert_eq!(host.phase(b), Phase::Visible);
        assert_eq!(host.phase(c), Phase::Visible);
        let slots: Vec<_> = events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                PortEvent::Slot(id, slot) => Some((*id, *slot)),
                _ => None,
            })
            .collect();
        assert_eq!(slots, vec![(a, 0), (b, 1), (c, 2), (b, 0), (c, 1)]);
    }
}
