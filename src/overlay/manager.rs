//! Overlay lifecycle state machine.
//!
//! Every transient surface (corner notification, lightbox) moves through
//! `Created -> Visible -> Dismissing -> Removed`. The manager owns the
//! bookkeeping and talks to the page through an [`OverlayPort`], so the
//! whole lifecycle runs without a rendering environment.

pub type OverlayId = u64;

/// Visual flavor of a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Info,
    Success,
    Error,
}

impl Variant {
    pub fn class_name(self) -> &'static str {
        match self {
            Variant::Info => "info",
            Variant::Success => "success",
            Variant::Error => "error",
        }
    }
}

/// Content of an overlay, fixed at mount time.
#[derive(Clone, Debug, PartialEq)]
pub enum OverlaySpec {
    Notification { message: String, variant: Variant },
    Lightbox { image: String, title: String, description: String },
}

impl OverlaySpec {
    pub fn is_lightbox(&self) -> bool {
        matches!(self, OverlaySpec::Lightbox { .. })
    }
}

/// Lifecycle phase. `Removed` is terminal; a removed overlay's id is never
/// reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Created,
    Visible,
    Dismissing,
    Removed,
}

/// Presentation capability the manager drives. The browser implementation
/// mutates real nodes; tests record the calls.
pub trait OverlayPort {
    /// Attach the overlay's surface, hidden.
    fn mount(&mut self, id: OverlayId, spec: &OverlaySpec);
    /// Flip the visible presentation state (starts the CSS transition).
    fn set_visible(&mut self, id: OverlayId, visible: bool);
    /// Position a notification at its stacking slot from the screen corner.
    fn set_slot(&mut self, id: OverlayId, slot: usize);
    /// Detach the overlay's surface.
    fn unmount(&mut self, id: OverlayId);
}

struct Entry {
    id: OverlayId,
    lightbox: bool,
    phase: Phase,
    slot: Option<usize>,
}

pub struct OverlayManager<P: OverlayPort> {
    port: P,
    next_id: OverlayId,
    entries: Vec<Entry>,
}

impl<P: OverlayPort> OverlayManager<P> {
    pub fn new(port: P) -> Self {
        Self { port, next_id: 1, entries: Vec::new() }
    }

    /// Mounts a new overlay in `Created`. Notifications get a stacking
    /// slot immediately; the surface stays hidden until [`reveal`].
    ///
    /// [`reveal`]: Self::reveal
    pub fn mount(&mut self, spec: OverlaySpec) -> OverlayId {
        let id = self.next_id;
        self.next_id += 1;
        let lightbox = spec.is_lightbox();
        self.port.mount(id, &spec);
        self.entries.push(Entry { id, lightbox, phase: Phase::Created, slot: None });
        if !lightbox {
            self.reslot();
        }
        id
    }

    /// `Created -> Visible`. Returns false (and does nothing) from any
    /// other phase.
    pub fn reveal(&mut self, id: OverlayId) -> bool {
        let Some(entry) = self.entry_mut(id) else { return false };
        if entry.phase != Phase::Created {
            return false;
        }
        entry.phase = Phase::Visible;
        self.port.set_visible(id, true);
        true
    }

    /// `Created | Visible -> Dismissing`. Idempotent: dismissing an
    /// already-dismissing or removed overlay is a no-op returning false.
    pub fn dismiss(&mut self, id: OverlayId) -> bool {
        let Some(entry) = self.entry_mut(id) else { return false };
        if !matches!(entry.phase, Phase::Created | Phase::Visible) {
            return false;
        }
        entry.phase = Phase::Dismissing;
        self.port.set_visible(id, false);
        true
    }

    /// `Dismissing -> Removed`: detaches the surface and compacts the
    /// notification stack.
    pub fn remove(&mut self, id: OverlayId) -> bool {
        let Some(pos) = self.entries.iter().position(|e| e.id == id) else {
            return false;
        };
        if self.entries[pos].phase != Phase::Dismissing {
            return false;
        }
        self.entries.remove(pos);
        self.port.unmount(id);
        self.reslot();
        true
    }

    pub fn phase(&self, id: OverlayId) -> Phase {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.phase)
            .unwrap_or(Phase::Removed)
    }

    /// The lightbox currently on its way in or shown, if any. A lightbox
    /// already dismissing no longer counts as active.
    pub fn active_lightbox(&self) -> Option<OverlayId> {
        self.entries
            .iter()
            .find(|e| e.lightbox && matches!(e.phase, Phase::Created | Phase::Visible))
            .map(|e| e.id)
    }

    pub fn mounted_count(&self) -> usize {
        self.entries.len()
    }

    fn entry_mut(&mut self, id: OverlayId) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|e| e.id == id)
    }

    // Live notifications keep contiguous slots in mount order.
    fn reslot(&mut self) {
        let mut moves = Vec::new();
        for (slot, entry) in self.entries.iter_mut().filter(|e| !e.lightbox).enumerate() {
            if entry.slot != Some(slot) {
                entry.slot = Some(slot);
                moves.push((entry.id, slot));
            }
        }
        for (id, slot) in moves {
            self.port.set_slot(id, slot);
        }
    }
}

#[cfg(test)]
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum PortEvent {
    Mounted(OverlayId, bool),
    Visible(OverlayId, bool),
    Slot(OverlayId, usize),
    Unmounted(OverlayId),
}

/// Records port calls for assertions; shared via `Rc` so tests keep a view
/// after handing the port to a manager.
#[cfg(test)]
pub(crate) struct RecordingPort {
    pub events: std::rc::Rc<std::cell::RefCell<Vec<PortEvent>>>,
}

#[cfg(test)]
impl RecordingPort {
    pub fn new() -> (Self, std::rc::Rc<std::cell::RefCell<Vec<PortEvent>>>) {
        let events = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        (Self { events: events.clone() }, events)
    }
}

#[cfg(test)]
impl OverlayPort for RecordingPort {
    fn mount(&mut self, id: OverlayId, spec: &OverlaySpec) {
        self.events.borrow_mut().push(PortEvent::Mounted(id, spec.is_lightbox()));
    }

    fn set_visible(&mut self, id: OverlayId, visible: bool) {
        self.events.borrow_mut().push(PortEvent::Visible(id, visible));
    }

    fn set_slot(&mut self, id: OverlayId, slot: usize) {
        self.events.borrow_mut().push(PortEvent::Slot(id, slot));
    }

    fn unmount(&mut self, id: OverlayId) {
        self.events.borrow_mut().push(PortEvent::Unmounted(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(msg: &str) -> OverlaySpec {
        OverlaySpec::Notification { message: msg.into(), variant: Variant::Info }
    }

    fn lightbox() -> OverlaySpec {
        OverlaySpec::Lightbox {
            image: "/assets/one.jpg".into(),
            title: String::new(),
            description: String::new(),
        }
    }

    #[test]
    fn walks_the_full_lifecycle() {
        let (port, events) = RecordingPort::new();
        let mut mgr = OverlayManager::new(port);
        let id = mgr.mount(notification("hi"));
        assert_eq!(mgr.phase(id), Phase::Created);
        assert!(mgr.reveal(id));
        assert_eq!(mgr.phase(id), Phase::Visible);
        assert!(mgr.dismiss(id));
        assert_eq!(mgr.phase(id), Phase::Dismissing);
        assert!(mgr.remove(id));
        assert_eq!(mgr.phase(id), Phase::Removed);
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
    fn dismiss_is_idempotent() {
        let (port, events) = RecordingPort::new();
        let mut mgr = OverlayManager::new(port);
        let id = mgr.mount(notification("once"));
        mgr.reveal(id);
        assert!(mgr.dismiss(id));
        assert!(!mgr.dismiss(id));
        assert!(mgr.remove(id));
        assert!(!mgr.remove(id));
        let unmounts = events
            .borrow()
            .iter()
            .filter(|e| matches!(e, PortEvent::Unmounted(_)))
            .count();
        assert_eq!(unmounts, 1);
    }

    #[test]
    fn removal_requires_a_dismissal_first() {
        let (port, _) = RecordingPort::new();
        let mut mgr = OverlayManager::new(port);
        let id = mgr.mount(notification("stay"));
        mgr.reveal(id);
        assert!(!mgr.remove(id));
        assert_eq!(mgr.phase(id), Phase::Visible);
    }

    #[test]
    fn reveal_after_dismiss_is_rejected() {
        let (port, _) = RecordingPort::new();
        let mut mgr = OverlayManager::new(port);
        let id = mgr.mount(notification("gone"));
        mgr.dismiss(id);
        assert!(!mgr.reveal(id));
        assert_eq!(mgr.phase(id), Phase::Dismissing);
    }

    #[test]
    fn notifications_stack_and_compact() {
        let (port, events) = RecordingPort::new();
        let mut mgr = OverlayManager::new(port);
        let a = mgr.mount(notification("a"));
        let b = mgr.mount(notification("b"));
        let c = mgr.mount(notification("c"));
        assert_eq!(
            slot_events(&events.borrow()),
            vec![(a, 0), (b, 1), (c, 2)]
        );

        mgr.dismiss(a);
        mgr.remove(a);
        // b and c shift up one slot each.
        assert_eq!(
            slot_events(&events.borrow()),
            vec![(a, 0), (b, 1), (c, 2), (b, 0), (c, 1)]
        );
    }

    #[test]
    fn lightbox_does_not_occupy_a_slot() {
        let (port, events) = RecordingPort::new();
        let mut mgr = OverlayManager::new(port);
        mgr.mount(lightbox());
        let n = mgr.mount(notification("beside it"));
        assert_eq!(slot_events(&events.borrow()), vec![(n, 0)]);
    }

    #[test]
    fn active_lightbox_tracks_phase() {
        let (port, _) = RecordingPort::new();
        let mut mgr = OverlayManager::new(port);
        assert_eq!(mgr.active_lightbox(), None);
        let id = mgr.mount(lightbox());
        assert_eq!(mgr.active_lightbox(), Some(id));
        mgr.reveal(id);
        assert_eq!(mgr.active_lightbox(), Some(id));
        mgr.dismiss(id);
        assert_eq!(mgr.active_lightbox(), None);
    }

    fn slot_events(events: &[PortEvent]) -> Vec<(OverlayId, usize)> {
        events
            .iter()
            .filter_map(|e| match e {
                PortEvent::Slot(id, slot) => Some((*id, *slot)),
                _ => None,
            })
            .collect()
    }
}
