use std::cmp::Ordering;

// Degrees in screen orientation: y grows downwards, so growing angles turn clockwise.

/// How many logical steps on each side of `floor(step_f)` are rendered.
pub const WINDOW_REACH: i64 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

pub fn normalize_deg(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Shortest signed angular distance from `start` to `current`, in (-180, 180].
pub fn signed_delta_deg(current: f64, start: f64) -> f64 {
    let delta = current - start;
    if !delta.is_finite() {
        return 0.0;
    }
    let wrapped = delta.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

pub fn pointer_angle_deg(center: Point, pointer: Point) -> f64 {
    (pointer.y - center.y).atan2(pointer.x - center.x).to_degrees()
}

pub fn logical_to_index(logical_step: i64, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    logical_step.rem_euclid(count as i64) as usize
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleSlot {
    pub logical_step: i64,
    pub item_index: usize,
    pub angle_deg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelGeometry {
    pub count: usize,
    pub step_deg: f64,
    pub center_deg: f64,
}

impl WheelGeometry {
    pub fn new(count: usize, step_deg: Option<f64>, center_deg: f64) -> Self {
        let even = if count > 0 { 360.0 / count as f64 } else { 360.0 };
        Self {
            count,
            step_deg: step_deg.unwrap_or(even),
            center_deg,
        }
    }

    pub fn is_rotatable(&self) -> bool {
        self.count > 1 && self.step_deg.is_finite() && self.step_deg != 0.0
    }

    pub fn index_of(&self, logical_step: i64) -> usize {
        logical_to_index(logical_step, self.count)
    }

    pub fn angle_of(&self, logical_step: i64, step_f: f64) -> f64 {
        self.center_deg + (logical_step as f64 - step_f) * self.step_deg
    }

    pub fn visible_window(&self, step_f: f64) -> Vec<VisibleSlot> {
        if self.count == 0 {
            return Vec::new();
        }
        let base = step_f.floor() as i64;
        (-WINDOW_REACH..=WINDOW_REACH)
            .map(|offset| {
                let logical_step = base + offset;
                VisibleSlot {
                    logical_step,
                    item_index: self.index_of(logical_step),
                    angle_deg: self.angle_of(logical_step, step_f),
                }
            })
            .collect()
    }

    /// Nearest integer step, except that a `previous` candidate is kept until
    /// `step_f` moves more than half a step plus `hysteresis` away from it.
    pub fn pick_candidate(step_f: f64, previous: Option<i64>, hysteresis: f64) -> i64 {
        match previous {
            Some(prev) if (step_f - prev as f64).abs() <= 0.5 + hysteresis.max(0.0) => prev,
            _ => step_f.round() as i64,
        }
    }

    /// The logical step showing `index` that lies closest to `step_f`,
    /// whatever number of revolutions has accumulated.
    pub fn nearest_winding(&self, index: usize, step_f: f64) -> i64 {
        let n = self.count.max(1) as i64;
        let turns = (step_f / n as f64).round() as i64;
        (-1..=1)
            .map(|k| index as i64 + (turns + k) * n)
            .min_by(|a, b| {
                (*a as f64 - step_f)
                    .abs()
                    .partial_cmp(&(*b as f64 - step_f).abs())
                    .unwrap_or(Ordering::Equal)
            })
            .unwrap_or(index as i64)
    }

    /// Logical step of the visible chip under `pointer`, if any. `center` is
    /// the wheel center, `radius` the icon track and `chip_size` the chip diameter.
    pub fn hit_test(
        &self,
        step_f: f64,
        center: Point,
        pointer: Point,
        radius: f64,
        chip_size: f64,
    ) -> Option<i64> {
        let reach = chip_size / 2.0;
        self.visible_window(step_f)
            .into_iter()
            .map(|slot| {
                let a = slot.angle_deg.to_radians();
                let chip = Point::new(center.x + radius * a.cos(), center.y + radius * a.sin());
                (slot.logical_step, chip.distance(pointer))
            })
            .filter(|(_, dist)| *dist <= reach)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(step, _)| step)
    }
}
