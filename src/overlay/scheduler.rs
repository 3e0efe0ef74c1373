//! Single delayed-callback abstraction driving every overlay transition.
//!
//! The browser implementation rides on `gloo_timers`; tests drive the same
//! code on a virtual clock, so transition timing never depends on real
//! wall-clock delays.

pub trait Scheduler: Clone + 'static {
    fn schedule(&self, after_ms: u32, f: Box<dyn FnOnce()>);
}

/// Browser scheduler backed by `setTimeout` via `gloo_timers`.
#[derive(Clone, Copy, Default)]
pub struct GlooScheduler;

impl Scheduler for GlooScheduler {
    fn schedule(&self, after_ms: u32, f: Box<dyn FnOnce()>) {
        gloo_timers::callback::Timeout::new(after_ms, move || f()).forget();
    }
}

/// Virtual-clock scheduler. Callbacks fire in due order when the clock is
/// advanced past them; a firing callback may schedule further callbacks.
#[cfg(test)]
pub struct ManualScheduler {
    inner: std::rc::Rc<std::cell::RefCell<ManualInner>>,
}

#[cfg(test)]
struct ManualInner {
    now: u64,
    next_seq: u64,
    queue: Vec<Pending>,
}

#[cfg(test)]
struct Pending {
    due: u64,
    seq: u64,
    run: Box<dyn FnOnce()>,
}

#[cfg(test)]
impl Clone for ManualScheduler {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

#[cfg(test)]
impl ManualScheduler {
    pub fn new() -> Self {
        Self {
            inner: std::rc::Rc::new(std::cell::RefCell::new(ManualInner {
                now: 0,
                next_seq: 0,
                queue: Vec::new(),
            })),
        }
    }

    pub fn now(&self) -> u64 {
        self.inner.borrow().now
    }

    /// Moves the clock forward, firing every callback due on the way in
    /// (due, insertion) order. The queue borrow is released before each
    /// callback runs so callbacks can schedule again.
    pub fn advance(&self, ms: u64) {
        let target = self.inner.borrow().now + ms;
        loop {
            let next = {
                let mut inner = self.inner.borrow_mut();
                let idx = inner
                    .queue
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.due <= target)
                    .min_by_key(|(_, p)| (p.due, p.seq))
                    .map(|(i, _)| i);
                idx.map(|i| {
                    let pending = inner.queue.remove(i);
                    inner.now = pending.due;
                    pending
                })
            };
            match next {
                Some(pending) => (pending.run)(),
                None => break,
            }
        }
        self.inner.borrow_mut().now = target;
    }
}

#[cfg(test)]
impl Scheduler for ManualScheduler {
    fn schedule(&self, after_ms: u32, f: Box<dyn FnOnce()>) {
        let mut inner = self.inner.borrow_mut();
        let due = inner.now + u64::from(after_ms);
        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.queue.push(Pending { due, seq, run: f });
    }
}

#[cfg(test)]
mod tests {
    use super::{ManualScheduler, Scheduler};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn fires_in_due_order() {
        let sched = ManualScheduler::new();
        let fired = Rc::new(RefCell::new(Vec::new()));
        for (label, delay) in [("b", 20u32), ("a", 10), ("c", 30)] {
            let fired = fired.clone();
            sched.schedule(delay, Box::new(move || fired.borrow_mut().push(label)));
        }
        sched.advance(25);
        assert_eq!(*fired.borrow(), vec!["a", "b"]);
        sched.advance(5);
        assert_eq!(*fired.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn callback_can_schedule_followups() {
        let sched = ManualScheduler::new();
        let fired = Rc::new(RefCell::new(Vec::new()));
        {
            let chain = sched.clone();
            let fired = fired.clone();
            sched.schedule(
                10,
                Box::new(move || {
                    fired.borrow_mut().push(chain.now());
                    let fired = fired.clone();
                    let inner = chain.clone();
                    chain.schedule(
                        10,
                        Box::new(move || fired.borrow_mut().push(inner.now())),
                    );
                }),
            );
        }
        sched.advance(30);
        assert_eq!(*fired.borrow(), vec![10, 20]);
    }

    #[test]
    fn same_due_time_preserves_insertion_order() {
        let sched = ManualScheduler::new();
        let fired = Rc::new(RefCell::new(Vec::new()));
        for label in ["first", "second"] {
            let fired = fired.clone();
            sched.schedule(5, Box::new(move || fired.borrow_mut().push(label)));
        }
        sched.advance(5);
        assert_eq!(*fired.borrow(), vec!["first", "second"]);
    }
}
