use crate::frame_clock::FrameClock;
use crate::platform::RuntimeScheduler;
use crate::{FrameCallbackId, TimerId, NANOS_PER_MILLI};
use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};
use std::sync::Arc;

struct FrameCallbackEntry {
    id: FrameCallbackId,
    callback: Option<Box<dyn FnOnce(u64) + 'static>>,
}

struct TimerEntry {
    id: TimerId,
    deadline_millis: u64,
    callback: Box<dyn FnOnce() + 'static>,
}

struct RuntimeInner {
    scheduler: Arc<dyn RuntimeScheduler>,
    needs_frame: Cell<bool>,
    now_millis: Cell<u64>,
    frame_callbacks: RefCell<VecDeque<FrameCallbackEntry>>,
    next_frame_callback_id: Cell<u64>,
    // A swipe row has at most a couple of timers in flight.
    timers: RefCell<SmallVec<[TimerEntry; 4]>>,
    next_timer_id: Cell<u64>,
}

impl RuntimeInner {
    fn new(scheduler: Arc<dyn RuntimeScheduler>) -> Self {
        Self {
            scheduler,
            needs_frame: Cell::new(false),
            now_millis: Cell::new(0),
            frame_callbacks: RefCell::new(VecDeque::new()),
            next_frame_callback_id: Cell::new(1),
            timers: RefCell::new(SmallVec::new()),
            next_timer_id: Cell::new(1),
        }
    }

    fn schedule(&self) {
        self.needs_frame.set(true);
        self.scheduler.schedule_frame();
    }

    fn has_frame_callbacks(&self) -> bool {
        !self.frame_callbacks.borrow().is_empty()
    }

    fn has_pending_timers(&self) -> bool {
        !self.timers.borrow().is_empty()
    }

    fn refresh_needs_frame(&self) {
        if !self.has_frame_callbacks() && !self.has_pending_timers() {
            self.needs_frame.set(false);
        }
    }

    fn register_frame_callback(&self, callback: Box<dyn FnOnce(u64) + 'static>) -> FrameCallbackId {
        let id = self.next_frame_callback_id.get();
        self.next_frame_callback_id.set(id + 1);
        self.frame_callbacks
            .borrow_mut()
            .push_back(FrameCallbackEntry {
                id,
                callback: Some(callback),
            });
        self.schedule();
        id
    }

    fn cancel_frame_callback(&self, id: FrameCallbackId) {
        let mut callbacks = self.frame_callbacks.borrow_mut();
        if let Some(index) = callbacks.iter().position(|entry| entry.id == id) {
            callbacks.remove(index);
        }
        drop(callbacks);
        self.refresh_needs_frame();
    }

    fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        let mut callbacks = self.frame_callbacks.borrow_mut();
        let mut pending: Vec<Box<dyn FnOnce(u64) + 'static>> = Vec::with_capacity(callbacks.len());
        while let Some(mut entry) = callbacks.pop_front() {
            if let Some(callback) = entry.callback.take() {
                pending.push(callback);
            }
        }
        drop(callbacks);
        for callback in pending {
            callback(frame_time_nanos);
        }
        self.refresh_needs_frame();
    }

    fn schedule_timer(&self, delay_millis: u64, callback: Box<dyn FnOnce() + 'static>) -> TimerId {
        let id = self.next_timer_id.get();
        self.next_timer_id.set(id + 1);
        let deadline_millis = self.now_millis.get().saturating_add(delay_millis);
        self.timers.borrow_mut().push(TimerEntry {
            id,
            deadline_millis,
            callback,
        });
        log::trace!("timer {id} scheduled for {deadline_millis}ms");
        self.schedule();
        id
    }

    fn cancel_timer(&self, id: TimerId) -> bool {
        let mut timers = self.timers.borrow_mut();
        let removed = match timers.iter().position(|entry| entry.id == id) {
            Some(index) => {
                timers.remove(index);
                true
            }
            None => false,
        };
        drop(timers);
        if removed {
            log::trace!("timer {id} cancelled");
            self.refresh_needs_frame();
        }
        removed
    }

    fn is_timer_pending(&self, id: TimerId) -> bool {
        self.timers.borrow().iter().any(|entry| entry.id == id)
    }

    /// Removes the earliest timer due at or before `limit_millis`.
    /// Ties on deadline resolve in registration order.
    fn take_due_timer(&self, limit_millis: u64) -> Option<TimerEntry> {
        let mut timers = self.timers.borrow_mut();
        let index = timers
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.deadline_millis <= limit_millis)
            .min_by_key(|(_, entry)| (entry.deadline_millis, entry.id))
            .map(|(index, _)| index)?;
        Some(timers.remove(index))
    }

    fn advance_time_to(&self, target_millis: u64) {
        // Callbacks may schedule more timers, so the borrow is released
        // before each one runs.
        while let Some(entry) = self.take_due_timer(target_millis) {
            if entry.deadline_millis > self.now_millis.get() {
                self.now_millis.set(entry.deadline_millis);
            }
            log::trace!("timer {} fired at {}ms", entry.id, self.now_millis.get());
            (entry.callback)();
        }
        if target_millis > self.now_millis.get() {
            self.now_millis.set(target_millis);
        }
        self.refresh_needs_frame();
    }

    fn next_deadline(&self) -> Option<u64> {
        self.timers
            .borrow()
            .iter()
            .map(|entry| entry.deadline_millis)
            .min()
    }
}

/// Owner of the timer queue and frame callbacks for one UI thread.
#[derive(Clone)]
pub struct Runtime {
    inner: Rc<RuntimeInner>,
}

impl Runtime {
    pub fn new(scheduler: Arc<dyn RuntimeScheduler>) -> Self {
        Self {
            inner: Rc::new(RuntimeInner::new(scheduler)),
        }
    }

    pub fn handle(&self) -> RuntimeHandle {
        RuntimeHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }

    pub fn needs_frame(&self) -> bool {
        self.inner.needs_frame.get()
    }

    pub fn now_millis(&self) -> u64 {
        self.inner.now_millis.get()
    }

    /// Fire every timer due at or before `now_millis`, then move the clock
    /// there. The clock never moves backwards.
    pub fn advance_time_to(&self, now_millis: u64) {
        self.inner.advance_time_to(now_millis);
    }

    pub fn advance_time_by(&self, delta_millis: u64) {
        let target = self.inner.now_millis.get().saturating_add(delta_millis);
        self.inner.advance_time_to(target);
    }

    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        self.inner.drain_frame_callbacks(frame_time_nanos);
    }

    /// Run one host frame: timers first, then frame callbacks.
    pub fn advance_frame(&self, frame_time_nanos: u64) {
        self.inner.advance_time_to(frame_time_nanos / NANOS_PER_MILLI);
        self.inner.drain_frame_callbacks(frame_time_nanos);
    }

    pub fn has_pending_timers(&self) -> bool {
        self.inner.has_pending_timers()
    }

    pub fn has_frame_callbacks(&self) -> bool {
        self.inner.has_frame_callbacks()
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.inner.next_deadline()
    }

    pub fn frame_clock(&self) -> FrameClock {
        FrameClock::new(self.handle())
    }
}

/// Weak handle to a [`Runtime`].
///
/// Everything registered through a handle whose runtime is gone comes back as
/// an inactive registration and never fires.
#[derive(Clone)]
pub struct RuntimeHandle {
    inner: Weak<RuntimeInner>,
}

impl RuntimeHandle {
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }

    pub fn now_millis(&self) -> u64 {
        self.inner
            .upgrade()
            .map(|inner| inner.now_millis.get())
            .unwrap_or_default()
    }

    /// Run `callback` once `delay_millis` have elapsed on the runtime clock.
    pub fn schedule_after(
        &self,
        delay_millis: u64,
        callback: impl FnOnce() + 'static,
    ) -> TimerRegistration {
        let id = self
            .inner
            .upgrade()
            .map(|inner| inner.schedule_timer(delay_millis, Box::new(callback)));
        TimerRegistration {
            runtime: self.clone(),
            id,
        }
    }

    pub(crate) fn register_frame_callback(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> Option<FrameCallbackId> {
        self.inner
            .upgrade()
            .map(|inner| inner.register_frame_callback(Box::new(callback)))
    }

    pub(crate) fn cancel_frame_callback(&self, id: FrameCallbackId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.cancel_frame_callback(id);
        }
    }

    fn cancel_timer(&self, id: TimerId) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.cancel_timer(id))
            .unwrap_or(false)
    }

    fn is_timer_pending(&self, id: TimerId) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.is_timer_pending(id))
            .unwrap_or(false)
    }

    pub fn frame_clock(&self) -> FrameClock {
        FrameClock::new(self.clone())
    }
}

/// Cancellable handle for a deferred callback.
///
/// Dropping the registration cancels the timer if it has not fired yet.
pub struct TimerRegistration {
    runtime: RuntimeHandle,
    id: Option<TimerId>,
}

impl TimerRegistration {
    pub fn id(&self) -> Option<TimerId> {
        self.id
    }

    pub fn is_pending(&self) -> bool {
        self.id
            .map(|id| self.runtime.is_timer_pending(id))
            .unwrap_or(false)
    }

    /// Cancel the timer. Returns `true` if it was still pending.
    pub fn cancel(mut self) -> bool {
        match self.id.take() {
            Some(id) => self.runtime.cancel_timer(id),
            None => false,
        }
    }
}

impl Drop for TimerRegistration {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            self.runtime.cancel_timer(id);
        }
    }
}

impl std::fmt::Debug for TimerRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerRegistration")
            .field("id", &self.id)
            .field("pending", &self.is_pending())
            .finish()
    }
}
