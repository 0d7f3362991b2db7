use crate::item::ItemId;
use crate::motion::OneShot;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Leave the rotation alone.
    Ignore,
    /// Rotate to the reported item if it is not already shown.
    Follow,
}

/// What happened during one `poll`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GuardTick {
    pub settled: bool,
    pub lock_expired: bool,
}

impl GuardTick {
    pub fn any(&self) -> bool {
        self.settled || self.lock_expired
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SyncGuard {
    lock_target: Option<ItemId>,
    lock_timer: OneShot,
    interaction_lock: bool,
    settle_timer: OneShot,
}

impl SyncGuard {
    pub fn new(lock_timeout: Duration, settle: Duration) -> Self {
        Self {
            lock_target: None,
            lock_timer: OneShot::new(lock_timeout),
            interaction_lock: false,
            settle_timer: OneShot::new(settle),
        }
    }

    pub fn lock_target(&self) -> Option<&ItemId> {
        self.lock_target.as_ref()
    }

    pub fn is_interacting(&self) -> bool {
        self.interaction_lock
    }

    /// Expect `target` to be confirmed; mutes reports until the commit settles.
    pub fn arm(&mut self, target: ItemId) {
        self.lock_target = Some(target);
        self.lock_timer.arm();
        self.hold();
    }

    /// Mutes reports without expecting a particular id.
    pub fn hold(&mut self) {
        self.interaction_lock = true;
        self.settle_timer.cancel();
    }

    /// Starts the grace period after which reports are listened to again.
    pub fn settle(&mut self) {
        self.settle_timer.arm();
    }

    pub fn release(&mut self) {
        self.interaction_lock = false;
        self.settle_timer.cancel();
    }

    pub fn poll(&mut self, now: Duration) -> GuardTick {
        let mut tick = GuardTick::default();
        if self.settle_timer.poll(now) {
            self.interaction_lock = false;
            tick.settled = true;
        }
        if self.lock_timer.poll(now) {
            if let Some(target) = self.lock_target.take() {
                log::debug!("Host never confirmed '{}', dropping the lock", target);
            }
            tick.lock_expired = true;
        }
        tick
    }

    pub fn judge(&mut self, active: Option<&ItemId>, animating: bool) -> Verdict {
        if self.interaction_lock || animating {
            return Verdict::Ignore;
        }

        if let Some(target) = &self.lock_target {
            if active != Some(target) {
                return Verdict::Ignore;
            }
            log::trace!("Host confirmed '{}'", target);
            self.lock_target = None;
            self.lock_timer.cancel();
        }

        Verdict::Follow
    }

    pub fn has_pending_timers(&self) -> bool {
        self.lock_timer.is_pending() || self.settle_timer.is_pending()
    }

    pub fn teardown(&mut self) {
        self.lock_target = None;
        self.lock_timer.cancel();
        self.interaction_lock = false;
        self.settle_timer.cancel();
    }
}
