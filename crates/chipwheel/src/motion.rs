use std::time::Duration;

pub fn ease_out_cubic(p: f64) -> f64 {
    let p = p.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

// Start times and deadlines latch on the first `now` seen after creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    duration: Duration,
    started_at: Option<Duration>,
}

/// Progress of a tween after one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweenStep {
    Running(f64),
    Done(f64),
}

impl Tween {
    pub fn new(from: f64, to: f64, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            started_at: None,
        }
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    /// True when there is nothing to interpolate.
    pub fn is_trivial(&self, epsilon: f64) -> bool {
        (self.to - self.from).abs() < epsilon || self.duration.is_zero()
    }

    pub fn tick(&mut self, now: Duration) -> TweenStep {
        let t0 = *self.started_at.get_or_insert(now);
        let elapsed = now.saturating_sub(t0);
        let p = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
        };

        if p < 1.0 {
            TweenStep::Running(self.from + (self.to - self.from) * ease_out_cubic(p))
        } else {
            TweenStep::Done(self.to)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum TimerState {
    #[default]
    Disarmed,
    Armed,
    Running(Duration),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OneShot {
    delay: Duration,
    state: TimerState,
}

impl OneShot {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            state: TimerState::Disarmed,
        }
    }

    /// (Re)starts the countdown; an earlier pending deadline is dropped.
    pub fn arm(&mut self) {
        self.state = TimerState::Armed;
    }

    pub fn cancel(&mut self) {
        self.state = TimerState::Disarmed;
    }

    pub fn is_pending(&self) -> bool {
        self.state != TimerState::Disarmed
    }

    /// Returns true exactly once, on the first poll at or past the deadline.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.state {
            TimerState::Disarmed => false,
            TimerState::Armed if self.delay.is_zero() => {
                self.state = TimerState::Disarmed;
                true
            }
            TimerState::Armed => {
                self.state = TimerState::Running(now + self.delay);
                false
            }
            TimerState::Running(deadline) if now >= deadline => {
                self.state = TimerState::Disarmed;
                true
            }
            TimerState::Running(_) => false,
        }
    }
}
