//! Transient notifications.
//!
//! A [`Toaster`] owns every toast on the page. Each toast moves through
//! `Appearing -> Visible -> Dismissing` and is dropped from the list once its
//! exit transition has run. Rendering is not done here: the view layer
//! subscribes and receives a snapshot after every change.

use crate::timer::{Scheduler, TimerHandle};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

pub const DEFAULT_TIMEOUT_MS: i32 = 2800;
pub const DEFAULT_EXIT_MS: u32 = 250;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    /// Brand-colored, used for the bargain action
    Brand,
    /// Neutral outline, used for the buy action
    Ghost,
}

impl ToastVariant {
    pub fn class_name(self) -> &'static str {
        match self {
            ToastVariant::Brand => "toast--brand",
            ToastVariant::Ghost => "toast--ghost",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Appearing,
    Visible,
    Dismissing,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    id: ToastId,
    message: String,
    variant: ToastVariant,
    phase: ToastPhase,
}

impl Toast {
    pub fn id(&self) -> ToastId {
        self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn variant(&self) -> ToastVariant {
        self.variant
    }

    pub fn phase(&self) -> ToastPhase {
        self.phase
    }

    /// Whether the toast still counts as shown (not yet dismissed).
    pub fn is_visible(&self) -> bool {
        self.phase != ToastPhase::Dismissing
    }

    /// CSS classes for the toast element; `is-shown` drives the transitions.
    pub fn class_name(&self) -> String {
        let state = match self.phase {
            ToastPhase::Appearing => "",
            ToastPhase::Visible => " is-shown",
            ToastPhase::Dismissing => " is-leaving",
        };
        format!("toast {}{}", self.variant.class_name(), state)
    }
}

type Listener = Rc<dyn Fn(&[Toast])>;

struct Entry {
    toast: Toast,
    timer: Option<TimerHandle>,
}

struct ToasterInner {
    scheduler: Rc<dyn Scheduler>,
    exit_ms: u32,
    entries: RefCell<Vec<Entry>>,
    next_id: Cell<u64>,
    listeners: RefCell<Vec<Listener>>,
}

/// Cheap-to-clone handle to the page's toast list.
#[derive(Clone)]
pub struct Toaster {
    inner: Rc<ToasterInner>,
}

impl Toaster {
    pub fn new(scheduler: Rc<dyn Scheduler>, exit_ms: u32) -> Self {
        Self {
            inner: Rc::new(ToasterInner {
                scheduler,
                exit_ms,
                entries: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Register a callback that receives the full toast list after every change.
    pub fn subscribe(&self, listener: impl Fn(&[Toast]) + 'static) {
        self.inner.listeners.borrow_mut().push(Rc::new(listener));
    }

    /// Show a toast that dismisses itself after [`DEFAULT_TIMEOUT_MS`].
    pub fn show(&self, message: impl Into<String>, variant: ToastVariant) -> ToastId {
        self.show_for(message, variant, DEFAULT_TIMEOUT_MS)
    }

    /// Show a toast. A `timeout_ms` of zero or less keeps it up until the
    /// user dismisses it.
    pub fn show_for(
        &self,
        message: impl Into<String>,
        variant: ToastVariant,
        timeout_ms: i32,
    ) -> ToastId {
        let id = ToastId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);

        self.inner.entries.borrow_mut().push(Entry {
            toast: Toast {
                id,
                message: message.into(),
                variant,
                phase: ToastPhase::Appearing,
            },
            timer: None,
        });

        // Entry transition starts on the next tick, after the element is in the DOM
        self.schedule(0, id, Toaster::settle);

        if let Ok(delay) = u32::try_from(timeout_ms) {
            if delay > 0 {
                let handle = self.schedule(delay, id, |toaster, id| {
                    toaster.dismiss(id);
                });
                if let Some(entry) = self.inner.entries.borrow_mut().iter_mut().find(|e| e.toast.id == id) {
                    entry.timer = Some(handle);
                }
            }
        }

        self.notify();
        id
    }

    /// Start the exit transition. Returns `false` if the toast is unknown or
    /// already leaving.
    pub fn dismiss(&self, id: ToastId) -> bool {
        let timer = {
            let mut entries = self.inner.entries.borrow_mut();
            let Some(entry) = entries.iter_mut().find(|e| e.toast.id == id) else {
                return false;
            };
            if entry.toast.phase == ToastPhase::Dismissing {
                return false;
            }
            entry.toast.phase = ToastPhase::Dismissing;
            entry.timer.take()
        };

        if let Some(handle) = timer {
            self.inner.scheduler.cancel(handle);
        }
        self.schedule(self.inner.exit_ms, id, Toaster::remove);
        self.notify();
        true
    }

    /// Dismiss every visible toast. Returns how many were dismissed.
    pub fn dismiss_all(&self) -> usize {
        let ids: Vec<ToastId> = self.visible().iter().map(Toast::id).collect();
        ids.into_iter().filter(|&id| self.dismiss(id)).count()
    }

    /// Every toast still in the DOM, including ones running their exit transition.
    pub fn toasts(&self) -> Vec<Toast> {
        self.inner
            .entries
            .borrow()
            .iter()
            .map(|e| e.toast.clone())
            .collect()
    }

    pub fn visible(&self) -> Vec<Toast> {
        self.inner
            .entries
            .borrow()
            .iter()
            .filter(|e| e.toast.is_visible())
            .map(|e| e.toast.clone())
            .collect()
    }

    pub fn is_visible(&self, id: ToastId) -> bool {
        self.inner
            .entries
            .borrow()
            .iter()
            .any(|e| e.toast.id == id && e.toast.is_visible())
    }

    fn settle(&self, id: ToastId) {
        let changed = {
            let mut entries = self.inner.entries.borrow_mut();
            match entries.iter_mut().find(|e| e.toast.id == id) {
                Some(entry) if entry.toast.phase == ToastPhase::Appearing => {
                    entry.toast.phase = ToastPhase::Visible;
                    true
                }
                _ => false,
            }
        };
        if changed {
            self.notify();
        }
    }

    fn remove(&self, id: ToastId) {
        let removed = {
            let mut entries = self.inner.entries.borrow_mut();
            let before = entries.len();
            entries.retain(|e| e.toast.id != id);
            entries.len() != before
        };
        if removed {
            self.notify();
        }
    }

    fn schedule(&self, delay_ms: u32, id: ToastId, step: fn(&Toaster, ToastId)) -> TimerHandle {
        let weak: Weak<ToasterInner> = Rc::downgrade(&self.inner);
        self.inner.scheduler.schedule(
            delay_ms,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    step(&Toaster { inner }, id);
                }
            }),
        )
    }

    fn notify(&self) {
        let snapshot = self.toasts();
        // Clone the list so a listener may subscribe or show without a double borrow
        let listeners: Vec<Listener> = self.inner.listeners.borrow().clone();
        for listener in listeners {
            listener(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::ManualScheduler;

    fn setup() -> (Rc<ManualScheduler>, Toaster) {
        let scheduler = Rc::new(ManualScheduler::new());
        let toaster = Toaster::new(scheduler.clone(), DEFAULT_EXIT_MS);
        (scheduler, toaster)
    }

    fn phase_of(toaster: &Toaster, id: ToastId) -> Option<ToastPhase> {
        toaster
            .toasts()
            .into_iter()
            .find(|t| t.id() == id)
            .map(|t| t.phase())
    }

    #[test]
    fn test_show_enters_then_settles() {
        let (scheduler, toaster) = setup();
        let id = toaster.show("Saved", ToastVariant::Brand);

        assert_eq!(phase_of(&toaster, id), Some(ToastPhase::Appearing));
        assert!(toaster.is_visible(id));

        scheduler.advance(0);
        assert_eq!(phase_of(&toaster, id), Some(ToastPhase::Visible));
        assert_eq!(toaster.toasts()[0].message(), "Saved");
        assert_eq!(toaster.toasts()[0].variant(), ToastVariant::Brand);
    }

    #[test]
    fn test_timeout_dismisses_then_removes() {
        let (scheduler, toaster) = setup();
        let id = toaster.show("Saved", ToastVariant::Ghost);

        scheduler.advance(2799);
        assert!(toaster.is_visible(id));

        scheduler.advance(1);
        assert!(!toaster.is_visible(id));
        assert_eq!(phase_of(&toaster, id), Some(ToastPhase::Dismissing));

        scheduler.advance(u64::from(DEFAULT_EXIT_MS));
        assert!(toaster.toasts().is_empty());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_custom_timeout() {
        let (scheduler, toaster) = setup();
        let id = toaster.show_for("Quick", ToastVariant::Brand, 500);
        scheduler.advance(499);
        assert!(toaster.is_visible(id));
        scheduler.advance(1);
        assert!(!toaster.is_visible(id));
    }

    #[test]
    fn test_non_positive_timeout_stays_until_dismissed() {
        let (scheduler, toaster) = setup();
        let zero = toaster.show_for("Sticky", ToastVariant::Brand, 0);
        let negative = toaster.show_for("Also sticky", ToastVariant::Ghost, -1);

        scheduler.advance(60_000);
        assert!(toaster.is_visible(zero));
        assert!(toaster.is_visible(negative));
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_click_dismiss_is_immediate_and_cancels_timeout() {
        let (scheduler, toaster) = setup();
        let id = toaster.show("Saved", ToastVariant::Brand);
        scheduler.advance(100);

        assert!(toaster.dismiss(id));
        assert!(!toaster.is_visible(id));
        assert!(toaster.visible().is_empty());

        scheduler.advance(u64::from(DEFAULT_EXIT_MS));
        assert!(toaster.toasts().is_empty());
        // The auto-dismiss timer was cancelled, nothing left to fire
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_dismiss_during_entry_never_flips_back_to_visible() {
        let (scheduler, toaster) = setup();
        let id = toaster.show("Saved", ToastVariant::Brand);
        toaster.dismiss(id);
        scheduler.advance(0);
        assert_eq!(phase_of(&toaster, id), Some(ToastPhase::Dismissing));
    }

    #[test]
    fn test_dismiss_twice_is_noop() {
        let (scheduler, toaster) = setup();
        let id = toaster.show("Saved", ToastVariant::Brand);
        assert!(toaster.dismiss(id));
        assert!(!toaster.dismiss(id));
        scheduler.advance(u64::from(DEFAULT_EXIT_MS));
        assert!(!toaster.dismiss(id));
    }

    #[test]
    fn test_escape_dismisses_all_visible() {
        let (scheduler, toaster) = setup();
        let a = toaster.show("One", ToastVariant::Brand);
        let b = toaster.show_for("Two", ToastVariant::Ghost, 0);
        let c = toaster.show("Three", ToastVariant::Ghost);
        toaster.dismiss(c);

        assert_eq!(toaster.dismiss_all(), 2);
        assert!(!toaster.is_visible(a));
        assert!(!toaster.is_visible(b));

        scheduler.advance(u64::from(DEFAULT_EXIT_MS));
        assert!(toaster.toasts().is_empty());
    }

    #[test]
    fn test_concurrent_toasts_dismiss_independently() {
        let (scheduler, toaster) = setup();
        let short = toaster.show_for("Short", ToastVariant::Brand, 1000);
        let long = toaster.show_for("Long", ToastVariant::Ghost, 3000);

        scheduler.advance(1000);
        assert!(!toaster.is_visible(short));
        assert!(toaster.is_visible(long));

        scheduler.advance(2000);
        assert!(!toaster.is_visible(long));
        assert_eq!(toaster.toasts().len(), 1);
    }

    #[test]
    fn test_subscribers_see_every_transition() {
        let (scheduler, toaster) = setup();
        let seen: Rc<RefCell<Vec<Vec<ToastPhase>>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        toaster.subscribe(move |toasts| {
            sink.borrow_mut()
                .push(toasts.iter().map(Toast::phase).collect());
        });

        toaster.show_for("Hi", ToastVariant::Brand, 100);
        scheduler.advance(100 + u64::from(DEFAULT_EXIT_MS));

        assert_eq!(
            *seen.borrow(),
            vec![
                vec![ToastPhase::Appearing],
                vec![ToastPhase::Visible],
                vec![ToastPhase::Dismissing],
                vec![],
            ]
        );
    }

    #[test]
    fn test_dropped_toaster_ignores_pending_timers() {
        let (scheduler, toaster) = setup();
        toaster.show("Bye", ToastVariant::Brand);
        drop(toaster);
        scheduler.advance(10_000);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_class_name_tracks_phase() {
        let (scheduler, toaster) = setup();
        let id = toaster.show("Hi", ToastVariant::Ghost);
        assert_eq!(toaster.toasts()[0].class_name(), "toast toast--ghost");
        scheduler.advance(0);
        assert_eq!(toaster.toasts()[0].class_name(), "toast toast--ghost is-shown");
        toaster.dismiss(id);
        assert_eq!(toaster.toasts()[0].class_name(), "toast toast--ghost is-leaving");
    }
}
