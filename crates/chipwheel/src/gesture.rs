use crate::geometry::{Point, WheelGeometry, pointer_angle_deg, signed_delta_deg};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureRules {
    pub deadzone_deg: f64,
    pub hysteresis: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSession {
    press: Point,
    start_angle_deg: f64,
    start_step_f: f64,
    started: bool,
    candidate: i64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureUpdate {
    Pending,
    Rotating {
        step_f: f64,
        candidate: i64,
        /// Set on the move that left the dead zone.
        just_started: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEnd {
    /// Released without leaving the dead zone.
    Tap { press: Point },
    /// Released after rotating; `candidate` is the step to commit.
    Release { candidate: i64 },
    /// Capture lost. Never commits.
    Aborted { started: bool },
}

impl GestureSession {
    pub fn begin(center: Point, pointer: Point, step_f: f64) -> Self {
        Self {
            press: pointer,
            start_angle_deg: pointer_angle_deg(center, pointer),
            start_step_f: step_f,
            started: false,
            candidate: step_f.round() as i64,
        }
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn candidate(&self) -> i64 {
        self.candidate
    }

    pub fn start_step_f(&self) -> f64 {
        self.start_step_f
    }

    /// The band follows the finger: moving the pointer clockwise on screen
    /// turns the icons clockwise, which brings earlier steps to the center.
    pub fn update(
        &mut self,
        center: Point,
        pointer: Point,
        step_deg: f64,
        rules: GestureRules,
    ) -> GestureUpdate {
        let angle = pointer_angle_deg(center, pointer);
        let delta_deg = -signed_delta_deg(angle, self.start_angle_deg);

        let just_started = !self.started;
        if just_started {
            if delta_deg.abs() < rules.deadzone_deg {
                return GestureUpdate::Pending;
            }
            self.started = true;
        }

        let step_f = self.start_step_f + delta_deg / step_deg;
        self.candidate =
            WheelGeometry::pick_candidate(step_f, Some(self.candidate), rules.hysteresis);

        GestureUpdate::Rotating {
            step_f,
            candidate: self.candidate,
            just_started,
        }
    }

    pub fn release(self) -> GestureEnd {
        if self.started {
            GestureEnd::Release {
                candidate: self.candidate,
            }
        } else {
            GestureEnd::Tap { press: self.press }
        }
    }

    pub fn abort(self) -> GestureEnd {
        GestureEnd::Aborted {
            started: self.started,
        }
    }
}
