//! Delayed callbacks behind a small trait, so presentation timing can be
//! driven by `setTimeout` in the browser and by a virtual clock in tests.

use std::cell::{Cell, RefCell};
use wasm_bindgen::prelude::*;

/// Identifies a scheduled task for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(i32);

impl TimerHandle {
    /// Returned when scheduling failed; cancelling it is a no-op.
    pub const NONE: TimerHandle = TimerHandle(0);
}

pub type Task = Box<dyn FnOnce()>;

pub trait Scheduler {
    /// Run `task` once after `delay_ms` milliseconds.
    fn schedule(&self, delay_ms: u32, task: Task) -> TimerHandle;

    /// Cancel a pending task. Unknown or already-fired handles are ignored.
    fn cancel(&self, handle: TimerHandle);
}

/// `window.setTimeout` / `window.clearTimeout`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) -> TimerHandle {
        let Some(window) = web_sys::window() else {
            return TimerHandle::NONE;
        };
        // Frees itself after the single invocation
        let callback = Closure::once_into_js(move || task());
        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay,
        ) {
            Ok(id) => TimerHandle(id),
            Err(_) => {
                log::warn!("setTimeout failed, delayed effect dropped");
                TimerHandle::NONE
            }
        }
    }

    fn cancel(&self, handle: TimerHandle) {
        if handle == TimerHandle::NONE {
            return;
        }
        if let Some(window) = web_sys::window() {
            window.clear_timeout_with_handle(handle.0);
        }
    }
}

struct Pending {
    handle: TimerHandle,
    due: u64,
    task: Task,
}

/// Deterministic virtual clock. Nothing runs until `advance` is called, and
/// tasks then fire in due-time order (ties in scheduling order).
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<u64>,
    next_id: Cell<i32>,
    queue: RefCell<Vec<Pending>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u64 {
        self.now.get()
    }

    /// Number of tasks still waiting to fire.
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Move the clock forward by `ms`, running every task that comes due,
    /// including ones scheduled by tasks fired during this call.
    pub fn advance(&self, ms: u64) {
        let target = self.now.get() + ms;
        loop {
            // The queue borrow must end before the task runs: tasks reschedule.
            let next = {
                let mut queue = self.queue.borrow_mut();
                queue
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.due <= target)
                    .min_by_key(|(_, p)| (p.due, p.handle.0))
                    .map(|(idx, _)| idx)
                    .map(|idx| queue.remove(idx))
            };
            let Some(pending) = next else { break };
            self.now.set(pending.due);
            (pending.task)();
        }
        self.now.set(target);
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) -> TimerHandle {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        let handle = TimerHandle(id);
        self.queue.borrow_mut().push(Pending {
            handle,
            due: self.now.get() + u64::from(delay_ms),
            task,
        });
        handle
    }

    fn cancel(&self, handle: TimerHandle) {
        self.queue.borrow_mut().retain(|p| p.handle != handle);
    }
}
