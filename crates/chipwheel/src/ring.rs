use crate::geometry::{WheelGeometry, normalize_deg};
use crate::options::SkinOptions;

/// Steps drawn on either side of the active one, at most.
const MAX_REACH: i64 = 720;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Red,
    Ivory,
}

/// Two-colouring of the band. `phase0` is fixed for the lifetime of a wheel.
pub fn parity(logical_step: i64, phase0: i64) -> Tone {
    if (logical_step - phase0).rem_euclid(2) == 0 {
        Tone::Red
    } else {
        Tone::Ivory
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceKind {
    Wedge(Tone),
    Divider,
}

/// An arc of the annulus, `0 <= start_deg < end_deg <= 360`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSlice {
    pub logical_step: i64,
    pub kind: SliceKind,
    pub start_deg: f64,
    pub end_deg: f64,
}

impl RingSlice {
    pub fn span(&self) -> f64 {
        self.end_deg - self.start_deg
    }

    pub fn contains(&self, deg: f64) -> bool {
        let deg = normalize_deg(deg);
        deg >= self.start_deg && deg < self.end_deg
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RingLayout {
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub wedge_deg: f64,
    pub gap_deg: f64,
    pub slices: Vec<RingSlice>,
}

impl RingLayout {
    pub fn compute(
        geometry: &WheelGeometry,
        step_f: f64,
        phase0: i64,
        size: f64,
        skin: &SkinOptions,
    ) -> Self {
        let outer_radius = size / 2.0;
        let inner_radius = (outer_radius - skin.rim_width).max(0.0);
        let step = geometry.step_deg.abs();

        if geometry.count == 0 || !step.is_finite() || step == 0.0 {
            return Self {
                outer_radius,
                inner_radius,
                ..Default::default()
            };
        }

        let wedge_deg = skin
            .wedge_fill_deg
            .unwrap_or(step - skin.gap_deg)
            .clamp(0.0, step);
        let gap_deg = step - wedge_deg;

        let lo = geometry.center_deg - 180.0;
        let hi = geometry.center_deg + 180.0;
        let reach = (180.0 / step).ceil().min(MAX_REACH as f64) as i64 + 1;
        let base = step_f.round() as i64;

        let mut slices = Vec::new();
        for logical_step in base.saturating_sub(reach)..=base.saturating_add(reach) {
            let mid = geometry.angle_of(logical_step, step_f) + skin.phase_deg;
            let wedge_start = mid - wedge_deg / 2.0;
            let wedge_end = mid + wedge_deg / 2.0;

            push_clipped(
                &mut slices,
                logical_step,
                SliceKind::Wedge(parity(logical_step, phase0)),
                (wedge_start, wedge_end),
                (lo, hi),
            );
            if skin.show_gaps && gap_deg > 0.0 {
                push_clipped(
                    &mut slices,
                    logical_step,
                    SliceKind::Divider,
                    (wedge_end, wedge_end + gap_deg),
                    (lo, hi),
                );
            }
        }

        Self {
            outer_radius,
            inner_radius,
            wedge_deg,
            gap_deg,
            slices,
        }
    }

    pub fn wedges(&self) -> impl Iterator<Item = &RingSlice> {
        self.slices
            .iter()
            .filter(|s| matches!(s.kind, SliceKind::Wedge(_)))
    }

    pub fn dividers(&self) -> impl Iterator<Item = &RingSlice> {
        self.slices
            .iter()
            .filter(|s| s.kind == SliceKind::Divider)
    }

    pub fn tone_at(&self, deg: f64) -> Option<Tone> {
        self.wedges().find(|s| s.contains(deg)).and_then(|s| match s.kind {
            SliceKind::Wedge(tone) => Some(tone),
            SliceKind::Divider => None,
        })
    }
}

fn push_clipped(
    slices: &mut Vec<RingSlice>,
    logical_step: i64,
    kind: SliceKind,
    (start, end): (f64, f64),
    (lo, hi): (f64, f64),
) {
    let (start, end) = (start.max(lo), end.min(hi));
    if end - start <= f64::EPSILON {
        return;
    }

    // arcs crossing 0/360 are drawn as two pieces
    let s = normalize_deg(start);
    let e = s + (end - start);
    let mut push = |start_deg: f64, end_deg: f64| {
        if end_deg - start_deg > f64::EPSILON {
            slices.push(RingSlice {
                logical_step,
                kind,
                start_deg,
                end_deg,
            });
        }
    };
    if e <= 360.0 {
        push(s, e);
    } else {
        push(s, 360.0);
        push(0.0, e - 360.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(step_f: f64, count: usize, center: f64) -> RingLayout {
        let geometry = WheelGeometry::new(count, None, center);
        RingLayout::compute(&geometry, step_f, 0, 230.0, &SkinOptions::default())
    }

    fn total_span(layout: &RingLayout) -> f64 {
        layout.slices.iter().map(RingSlice::span).sum()
    }

    #[test]
    fn parity_depends_only_on_the_absolute_step() {
        assert_eq!(parity(0, 0), Tone::Red);
        assert_eq!(parity(1, 0), Tone::Ivory);
        assert_eq!(parity(-1, 0), Tone::Ivory);
        assert_eq!(parity(-8, 0), Tone::Red);
        assert_eq!(parity(7, 1), Tone::Red);
        for step in -20..20 {
            assert_eq!(parity(step, 3), parity(step, 3));
            assert_ne!(parity(step, 3), parity(step + 1, 3));
        }
    }

    #[test]
    fn ring_covers_the_full_circle_once() {
        for &(count, step_f) in &[(5, 0.0), (5, 4.9), (5, -7.35), (8, 1.5), (3, 100.25), (2, 0.5)] {
            let ring = layout(step_f, count, 215.0);
            assert!(
                (total_span(&ring) - 360.0).abs() < 1e-6,
                "count {count} step_f {step_f}"
            );
            for slice in &ring.slices {
                assert!(slice.start_deg >= 0.0 && slice.end_deg <= 360.0);
                assert!(slice.start_deg < slice.end_deg);
            }
        }
    }

    #[test]
    fn wedge_width_is_step_minus_gap() {
        let ring = layout(0.0, 5, 215.0);
        assert!((ring.wedge_deg - 70.0).abs() < 1e-9);
        assert!((ring.gap_deg - 2.0).abs() < 1e-9);

        let skin = SkinOptions {
            wedge_fill_deg: Some(500.0),
            ..Default::default()
        };
        let geometry = WheelGeometry::new(5, None, 0.0);
        let ring = RingLayout::compute(&geometry, 0.0, 0, 230.0, &skin);
        assert_eq!(ring.wedge_deg, 72.0);
        assert_eq!(ring.dividers().count(), 0);
    }

    #[test]
    fn wedges_across_zero_are_split() {
        // step 0 centred on angle 0 straddles the seam
        let ring = layout(0.0, 5, 0.0);
        let pieces: Vec<_> = ring.wedges().filter(|s| s.logical_step == 0).collect();
        assert_eq!(pieces.len(), 2);
        assert!(pieces.iter().any(|s| s.end_deg == 360.0));
        assert!(pieces.iter().any(|s| s.start_deg == 0.0));
        let span: f64 = pieces.iter().map(|s| s.span()).sum();
        assert!((span - 70.0).abs() < 1e-9);
    }

    #[test]
    fn annulus_is_masked_inside_the_rim() {
        let ring = layout(0.0, 5, 215.0);
        assert_eq!(ring.outer_radius, 115.0);
        assert_eq!(ring.inner_radius, 89.0);

        let geometry = WheelGeometry::new(5, None, 0.0);
        let skin = SkinOptions {
            rim_width: 400.0,
            ..Default::default()
        };
        let ring = RingLayout::compute(&geometry, 0.0, 0, 230.0, &skin);
        assert_eq!(ring.inner_radius, 0.0);
    }

    #[test]
    fn a_wedge_keeps_its_tone_while_the_band_slides() {
        let geometry = WheelGeometry::new(5, None, 215.0);
        let skin = SkinOptions::default();
        for logical_step in -1..=3 {
            let expected = parity(logical_step, 0);
            let mut step_f = -1.0;
            while step_f <= 3.0 {
                let ring = RingLayout::compute(&geometry, step_f, 0, 230.0, &skin);
                let mid = geometry.angle_of(logical_step, step_f);
                // only check while the wedge is away from the far seam
                if (mid - 215.0).abs() < 150.0 {
                    assert_eq!(
                        ring.tone_at(mid),
                        Some(expected),
                        "step {logical_step} at step_f {step_f}"
                    );
                }
                step_f += 0.05;
            }
        }
    }

    #[test]
    fn tiny_steps_stay_bounded() {
        let skin = SkinOptions::default();
        for step in [1e-300, 0.001] {
            let geometry = WheelGeometry::new(5, Some(step), 215.0);
            let ring = RingLayout::compute(&geometry, 3.0, 0, 230.0, &skin);
            assert!(ring.wedges().count() <= 2 * (MAX_REACH as usize + 1) + 1);
        }
    }

    #[test]
    fn empty_wheel_has_no_ring() {
        let ring = layout(0.0, 0, 215.0);
        assert!(ring.slices.is_empty());
    }
}
