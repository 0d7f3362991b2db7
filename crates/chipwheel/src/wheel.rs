use crate::geometry::{Point, VisibleSlot, WheelGeometry};
use crate::gesture::{GestureEnd, GestureRules, GestureSession, GestureUpdate};
use crate::item::{ItemId, NavItem};
use crate::motion::{Tween, TweenStep};
use crate::options::WheelOptions;
use crate::ring::RingLayout;
use crate::sync::{SyncGuard, Verdict};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AnimationKind {
    Commit,
    Resync,
}

#[derive(Debug, Clone, PartialEq)]
struct Animation {
    tween: Tween,
    kind: AnimationKind,
}

#[derive(Debug, Clone, PartialEq)]
enum Motion {
    Idle,
    Dragging(GestureSession),
    Animating(Animation),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WheelResponse {
    pub redraw: bool,
    pub selected: Option<ItemId>,
    /// The press turned into a rotation; stop the page from scrolling with it.
    pub claim_pointer: bool,
}

impl WheelResponse {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn redraw() -> Self {
        Self {
            redraw: true,
            ..Default::default()
        }
    }

    pub fn merge(self, other: WheelResponse) -> Self {
        Self {
            redraw: self.redraw || other.redraw,
            selected: self.selected.or(other.selected),
            claim_pointer: self.claim_pointer || other.claim_pointer,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<'a> {
    pub items: &'a [NavItem],
    pub step_f: f64,
    pub base: i64,
    pub frac: f64,
    pub step_deg: f64,
    pub center_deg: f64,
    pub current_index: Option<usize>,
    pub window: Vec<VisibleSlot>,
    pub dragging: bool,
    pub animating: bool,
}

impl Snapshot<'_> {
    pub fn current_item(&self) -> Option<&NavItem> {
        self.current_index.and_then(|i| self.items.get(i))
    }

    pub fn label(&self) -> Option<&str> {
        self.current_item().map(|item| item.label.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct ChipWheel {
    items: Vec<NavItem>,
    options: WheelOptions,
    geometry: WheelGeometry,
    step_f: f64,
    motion: Motion,
    committed_step: Option<i64>,
    guard: SyncGuard,
    active_id: Option<ItemId>,
    phase0: i64,
    torn_down: bool,
}

impl ChipWheel {
    pub fn new(items: impl IntoIterator<Item = NavItem>, options: WheelOptions) -> Self {
        let items = NavItem::clean(items);
        let geometry = WheelGeometry::new(items.len(), options.step_deg, options.center_deg());
        let guard = SyncGuard::new(options.tuning.lock_timeout(), options.tuning.settle());
        let step_f = 0.0;

        Self {
            items,
            options,
            geometry,
            step_f,
            motion: Motion::Idle,
            committed_step: None,
            guard,
            active_id: None,
            phase0: step_f.round() as i64,
            torn_down: false,
        }
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    pub fn options(&self) -> &WheelOptions {
        &self.options
    }

    pub fn geometry(&self) -> &WheelGeometry {
        &self.geometry
    }

    pub fn step_f(&self) -> f64 {
        self.step_f
    }

    pub fn phase0(&self) -> i64 {
        self.phase0
    }

    pub fn committed_step(&self) -> Option<i64> {
        self.committed_step
    }

    pub fn active_id(&self) -> Option<&ItemId> {
        self.active_id.as_ref()
    }

    pub fn lock_target(&self) -> Option<&ItemId> {
        self.guard.lock_target()
    }

    pub fn is_interacting(&self) -> bool {
        self.guard.is_interacting()
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.motion, Motion::Animating(_))
    }

    pub fn is_dragging(&self) -> bool {
        matches!(&self.motion, Motion::Dragging(session) if session.is_started())
    }

    /// Whether `tick` still has work: a running tween or a pending timer.
    pub fn needs_tick(&self) -> bool {
        !self.torn_down && (self.is_animating() || self.guard.has_pending_timers())
    }

    pub fn center(&self) -> Point {
        Point::new(self.options.size / 2.0, self.options.size / 2.0)
    }

    fn is_live(&self) -> bool {
        !self.torn_down && !self.items.is_empty()
    }

    fn rules(&self) -> GestureRules {
        GestureRules {
            deadzone_deg: self.options.tuning.deadzone_deg,
            hysteresis: self.options.tuning.hysteresis,
        }
    }

    pub fn current_index(&self) -> Option<usize> {
        if self.items.is_empty() {
            return None;
        }
        let step = self
            .committed_step
            .or(match &self.motion {
                Motion::Dragging(session) if session.is_started() => Some(session.candidate()),
                _ => None,
            })
            .unwrap_or_else(|| self.step_f.round() as i64);
        Some(self.geometry.index_of(step))
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        let base = self.step_f.floor() as i64;
        Snapshot {
            items: &self.items,
            step_f: self.step_f,
            base,
            frac: self.step_f - base as f64,
            step_deg: self.geometry.step_deg,
            center_deg: self.geometry.center_deg,
            current_index: self.current_index(),
            window: self.geometry.visible_window(self.step_f),
            dragging: self.is_dragging(),
            animating: self.is_animating(),
        }
    }

    pub fn ring(&self) -> RingLayout {
        RingLayout::compute(
            &self.geometry,
            self.step_f,
            self.phase0,
            self.options.size,
            &self.options.skin_options,
        )
    }

    pub fn pointer_down(&mut self, pointer: Point) -> WheelResponse {
        if !self.is_live() {
            return WheelResponse::none();
        }
        // a new gesture supersedes whatever was animating
        if let Motion::Animating(animation) = &self.motion {
            log::trace!("Press interrupts {:?} animation", animation.kind);
        }
        self.guard.hold();
        self.motion = Motion::Dragging(GestureSession::begin(self.center(), pointer, self.step_f));
        WheelResponse::none()
    }

    pub fn pointer_move(&mut self, pointer: Point) -> WheelResponse {
        if !self.is_live() || !self.options.enable_swipe || !self.geometry.is_rotatable() {
            return WheelResponse::none();
        }
        let (center, step_deg, rules) = (self.center(), self.geometry.step_deg, self.rules());

        let Motion::Dragging(session) = &mut self.motion else {
            return WheelResponse::none();
        };
        match session.update(center, pointer, step_deg, rules) {
            GestureUpdate::Pending => WheelResponse::none(),
            GestureUpdate::Rotating {
                step_f,
                just_started,
                ..
            } => {
                self.step_f = step_f;
                WheelResponse {
                    redraw: true,
                    selected: None,
                    claim_pointer: just_started,
                }
            }
        }
    }

    pub fn pointer_up(&mut self) -> WheelResponse {
        let Some(session) = self.take_session() else {
            return WheelResponse::none();
        };
        match session.release() {
            GestureEnd::Release { candidate } => self.commit(candidate),
            GestureEnd::Tap { press } => {
                let radius = self.options.radius;
                let chip = self.options.chip_size;
                match self
                    .geometry
                    .hit_test(self.step_f, self.center(), press, radius, chip)
                {
                    Some(step) => self.commit(step),
                    None => self.resume(),
                }
            }
            GestureEnd::Aborted { .. } => self.resume(),
        }
    }

    /// Capture lost mid-gesture. The in-progress candidate is discarded.
    pub fn pointer_cancel(&mut self) -> WheelResponse {
        let Some(session) = self.take_session() else {
            return WheelResponse::none();
        };
        if let GestureEnd::Aborted { started: true } = session.abort() {
            log::debug!("Gesture aborted at step {:.3}, not committing", self.step_f);
        }
        self.resume()
    }

    fn take_session(&mut self) -> Option<GestureSession> {
        match std::mem::replace(&mut self.motion, Motion::Idle) {
            Motion::Dragging(session) => Some(session),
            other => {
                self.motion = other;
                None
            }
        }
    }

    pub fn click_step(&mut self, logical_step: i64) -> WheelResponse {
        if matches!(self.motion, Motion::Dragging(_)) {
            return WheelResponse::none();
        }
        self.commit(logical_step)
    }

    pub fn step_by(&mut self, delta: i64) -> WheelResponse {
        if matches!(self.motion, Motion::Dragging(_)) || !self.geometry.is_rotatable() {
            return WheelResponse::none();
        }
        let from = self
            .committed_step
            .unwrap_or_else(|| self.step_f.round() as i64);
        self.commit(from + delta)
    }

    fn commit(&mut self, logical_step: i64) -> WheelResponse {
        if !self.is_live() {
            return WheelResponse::none();
        }
        let target = if self.geometry.is_rotatable() {
            logical_step
        } else {
            self.step_f.round() as i64
        };
        let id = self.items[self.geometry.index_of(target)].id.clone();

        self.committed_step = Some(target);
        self.guard.arm(id.clone());
        let selected = (self.active_id.as_ref() != Some(&id)).then(|| id.clone());
        log::debug!("Committing step {} ('{}')", target, id);

        self.animate_to(target, AnimationKind::Commit).merge(WheelResponse {
            redraw: true,
            selected,
            claim_pointer: false,
        })
    }

    fn resume(&mut self) -> WheelResponse {
        if let Some(step) = self.committed_step {
            return self.animate_to(step, AnimationKind::Commit).merge(WheelResponse::redraw());
        }
        self.guard.release();
        let response = self.reconcile();
        if self.is_animating() {
            return response.merge(WheelResponse::redraw());
        }
        let nearest = self.step_f.round() as i64;
        self.animate_to(nearest, AnimationKind::Resync)
            .merge(WheelResponse::redraw())
    }

    fn animate_to(&mut self, target: i64, kind: AnimationKind) -> WheelResponse {
        let tween = Tween::new(
            self.step_f,
            target as f64,
            self.options.tuning.snap_duration(),
        );
        if tween.is_trivial(self.options.tuning.resync_epsilon) {
            self.step_f = target as f64;
            self.motion = Motion::Idle;
            return self.finish(kind).merge(WheelResponse::redraw());
        }
        self.motion = Motion::Animating(Animation { tween, kind });
        WheelResponse::redraw()
    }

    fn finish(&mut self, kind: AnimationKind) -> WheelResponse {
        match kind {
            AnimationKind::Commit => {
                self.guard.settle();
                WheelResponse::none()
            }
            AnimationKind::Resync => self.reconcile(),
        }
    }

    pub fn set_active_id(&mut self, id: Option<ItemId>) -> WheelResponse {
        if self.torn_down {
            return WheelResponse::none();
        }
        self.active_id = id;
        self.reconcile()
    }

    /// Rotates to the host's active item when the guard allows it. Never selects.
    fn reconcile(&mut self) -> WheelResponse {
        if !self.is_live() || matches!(self.motion, Motion::Dragging(_)) {
            return WheelResponse::none();
        }
        let animating = self.is_animating();
        if self.guard.judge(self.active_id.as_ref(), animating) == Verdict::Ignore {
            return WheelResponse::none();
        }
        if !self.geometry.is_rotatable() {
            return WheelResponse::none();
        }
        let Some(index) = self
            .active_id
            .as_ref()
            .and_then(|id| self.items.iter().position(|item| &item.id == id))
        else {
            return WheelResponse::none();
        };

        let target = self.geometry.nearest_winding(index, self.step_f);
        if (target as f64 - self.step_f).abs() > self.options.tuning.resync_epsilon {
            log::trace!("Following host to step {}", target);
            return self.animate_to(target, AnimationKind::Resync);
        }
        WheelResponse::none()
    }

    pub fn tick(&mut self, now: Duration) -> WheelResponse {
        if self.torn_down {
            return WheelResponse::none();
        }
        let mut response = WheelResponse::none();

        if let Motion::Animating(animation) = &mut self.motion {
            match animation.tween.tick(now) {
                TweenStep::Running(value) => {
                    self.step_f = value;
                    response = WheelResponse::redraw();
                }
                TweenStep::Done(value) => {
                    let kind = animation.kind;
                    self.step_f = value;
                    self.motion = Motion::Idle;
                    response = WheelResponse::redraw().merge(self.finish(kind));
                }
            }
        }

        let guard = self.guard.poll(now);
        if guard.settled {
            self.committed_step = None;
            response = response.merge(WheelResponse::redraw());
        }
        if guard.any() {
            response = response.merge(self.reconcile());
        }
        response
    }

    /// Drops the in-flight animation and every timer; later calls are no-ops.
    pub fn teardown(&mut self) {
        self.motion = Motion::Idle;
        self.committed_step = None;
        self.guard.teardown();
        self.torn_down = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn items() -> Vec<NavItem> {
        ["A", "B", "C", "D", "E"]
            .into_iter()
            .map(|id| NavItem::new(id, format!("Item {id}")))
            .collect()
    }

    fn wheel() -> ChipWheel {
        let mut wheel = ChipWheel::new(items(), WheelOptions::default());
        wheel.set_active_id(Some(ItemId::from("A")));
        wheel
    }

    /// A point at `angle_deg` on a circle inside the icon track.
    fn at(wheel: &ChipWheel, angle_deg: f64) -> Point {
        let c = wheel.center();
        let a = angle_deg.to_radians();
        Point::new(c.x + 60.0 * a.cos(), c.y + 60.0 * a.sin())
    }

    /// Ticks every 16ms from `from` to `to` and collects the responses.
    fn run(wheel: &mut ChipWheel, from: u64, to: u64) -> Vec<WheelResponse> {
        (from..=to)
            .step_by(16)
            .chain(std::iter::once(to))
            .map(|t| wheel.tick(ms(t)))
            .collect()
    }

    fn selections(responses: &[WheelResponse]) -> Vec<ItemId> {
        responses.iter().filter_map(|r| r.selected.clone()).collect()
    }

    #[test]
    fn smallest_step_builds_a_full_ring() {
        let options = WheelOptions {
            step_deg: Some(crate::options::MIN_STEP_DEG),
            ..Default::default()
        };
        assert!(options.validate().is_ok());
        let wheel = ChipWheel::new(items(), options);
        let ring = wheel.ring();
        let span: f64 = ring.slices.iter().map(|s| s.span()).sum();
        assert!((span - 360.0).abs() < 1e-6);
        assert!(ring.slices.len() <= 400);
    }

    #[test]
    fn drag_release_commits_once_and_settles_on_the_candidate() {
        let mut wheel = wheel();
        let mut responses = vec![wheel.pointer_down(at(&wheel, 200.0))];
        let moved = wheel.pointer_move(at(&wheel, 50.0));
        assert!(moved.claim_pointer);
        assert!((wheel.step_f() - 150.0 / 72.0).abs() < 1e-9);
        assert_eq!(wheel.current_index(), Some(2));
        responses.push(moved);

        let released = wheel.pointer_up();
        assert_eq!(released.selected, Some(ItemId::from("C")));
        assert_eq!(wheel.committed_step(), Some(2));
        assert!(wheel.is_animating());
        responses.push(released);

        responses.extend(run(&mut wheel, 0, 160));
        assert_eq!(wheel.step_f(), 2.0);
        assert_eq!(wheel.current_index(), Some(2));

        // the host follows and reports C while the commit is settling
        responses.push(wheel.set_active_id(Some(ItemId::from("C"))));
        responses.extend(run(&mut wheel, 176, 500));
        assert_eq!(wheel.committed_step(), None);
        assert_eq!(wheel.lock_target(), None);
        assert!(!wheel.is_interacting());
        assert_eq!(wheel.current_index(), Some(2));
        assert_eq!(wheel.step_f(), 2.0);

        assert_eq!(selections(&responses), vec![ItemId::from("C")]);
        assert!(!wheel.needs_tick());
    }

    #[test]
    fn commits_land_on_any_winding() {
        for (step, index) in [(-7, 3), (12, 2), (-1, 4), (0, 0)] {
            let mut wheel = wheel();
            wheel.click_step(step);
            run(&mut wheel, 0, 1000);
            assert_eq!(wheel.step_f(), step as f64);
            assert_eq!(wheel.current_index(), Some(index), "step {step}");
        }
    }

    #[test]
    fn confirmation_echo_does_not_select_again() {
        let mut wheel = wheel();
        let mut responses = vec![wheel.click_step(1)];
        responses.extend(run(&mut wheel, 0, 600));
        responses.push(wheel.set_active_id(Some(ItemId::from("B"))));
        responses.push(wheel.set_active_id(Some(ItemId::from("B"))));
        responses.extend(run(&mut wheel, 616, 2000));
        assert_eq!(selections(&responses), vec![ItemId::from("B")]);
        assert_eq!(wheel.step_f(), 1.0);
    }

    #[test]
    fn reselecting_the_active_item_snaps_without_selecting() {
        let mut wheel = wheel();
        let response = wheel.click_step(5);
        assert_eq!(response.selected, None);
        run(&mut wheel, 0, 1000);
        assert_eq!(wheel.step_f(), 5.0);
    }

    #[test]
    fn dead_zone_moves_change_nothing() {
        let mut wheel = wheel();
        wheel.pointer_down(at(&wheel, 100.0));
        for angle in [101.0, 103.0, 96.5, 105.9] {
            let response = wheel.pointer_move(at(&wheel, angle));
            assert_eq!(response, WheelResponse::none());
        }
        assert_eq!(wheel.step_f(), 0.0);
        let released = wheel.pointer_up();
        assert_eq!(released.selected, None);
        assert_eq!(wheel.committed_step(), None);
        assert!(!wheel.is_animating());
        assert!(!wheel.is_interacting());
    }

    #[test]
    fn tap_on_a_chip_commits_its_step() {
        let mut wheel = wheel();
        let c = wheel.center();
        // step 1 rests one step clockwise of the center angle
        let a = (215.0f64 + 72.0).to_radians();
        let chip = Point::new(c.x + 99.0 * a.cos(), c.y + 99.0 * a.sin());
        wheel.pointer_down(chip);
        let response = wheel.pointer_up();
        assert_eq!(response.selected, Some(ItemId::from("B")));
        assert_eq!(wheel.committed_step(), Some(1));
    }

    #[test]
    fn locked_guard_ignores_host_reports() {
        let mut wheel = wheel();
        wheel.click_step(2);
        run(&mut wheel, 0, 200);
        assert_eq!(wheel.step_f(), 2.0);
        assert!(wheel.is_interacting());

        for id in ["A", "E", "B", "D", "nope"] {
            let response = wheel.set_active_id(Some(ItemId::from(id)));
            assert_eq!(response, WheelResponse::none());
            assert!(!wheel.is_animating());
            assert_eq!(wheel.step_f(), 2.0);
        }
    }

    #[test]
    fn silent_host_is_resynced_after_the_lock_times_out() {
        let mut wheel = wheel();
        let selected = wheel.click_step(2).selected;
        assert_eq!(selected, Some(ItemId::from("C")));

        run(&mut wheel, 0, 1100);
        // settled, but still waiting for C
        assert_eq!(wheel.step_f(), 2.0);
        assert_eq!(wheel.lock_target(), Some(&ItemId::from("C")));

        let responses = run(&mut wheel, 1116, 1600);
        assert!(selections(&responses).is_empty());
        assert_eq!(wheel.lock_target(), None);
        assert_eq!(wheel.step_f(), 0.0);
        assert_eq!(wheel.current_index(), Some(0));
    }

    #[test]
    fn external_navigation_takes_the_short_way_round() {
        let mut wheel = wheel();
        let response = wheel.set_active_id(Some(ItemId::from("D")));
        assert!(response.redraw);
        assert_eq!(response.selected, None);
        let responses = run(&mut wheel, 0, 400);
        assert!(selections(&responses).is_empty());
        assert_eq!(wheel.step_f(), -2.0);
        assert_eq!(wheel.current_index(), Some(3));
    }

    #[test]
    fn reports_during_a_resync_are_picked_up_when_it_ends() {
        let mut wheel = wheel();
        wheel.set_active_id(Some(ItemId::from("B")));
        wheel.tick(ms(0));
        wheel.tick(ms(50));
        // ignored while animating, remembered for later
        assert_eq!(
            wheel.set_active_id(Some(ItemId::from("C"))),
            WheelResponse::none()
        );
        run(&mut wheel, 66, 1000);
        assert_eq!(wheel.step_f(), 2.0);
    }

    #[test]
    fn unknown_host_id_is_ignored() {
        let mut wheel = wheel();
        let response = wheel.set_active_id(Some(ItemId::from("footer")));
        assert_eq!(response, WheelResponse::none());
        assert_eq!(wheel.step_f(), 0.0);
    }

    #[test]
    fn cancel_discards_the_candidate() {
        let mut wheel = wheel();
        wheel.pointer_down(at(&wheel, 0.0));
        wheel.pointer_move(at(&wheel, -100.0));
        assert!(wheel.step_f() > 1.0);
        let response = wheel.pointer_cancel();
        assert_eq!(response.selected, None);
        assert_eq!(wheel.committed_step(), None);
        run(&mut wheel, 0, 400);
        assert_eq!(wheel.step_f(), 0.0);
        assert_eq!(wheel.current_index(), Some(0));
    }

    #[test]
    fn moves_after_release_are_ignored() {
        let mut wheel = wheel();
        wheel.pointer_down(at(&wheel, 0.0));
        wheel.pointer_move(at(&wheel, -30.0));
        wheel.pointer_up();
        let before = wheel.step_f();
        assert_eq!(
            wheel.pointer_move(at(&wheel, -170.0)),
            WheelResponse::none()
        );
        assert_eq!(wheel.step_f(), before);
        assert_eq!(wheel.pointer_up(), WheelResponse::none());
    }

    #[test]
    fn rapid_clicks_restart_from_the_interpolated_position() {
        let mut wheel = wheel();
        let first = wheel.click_step(1);
        wheel.tick(ms(0));
        wheel.tick(ms(80));
        let mid = wheel.step_f();
        assert!(mid > 0.0 && mid < 1.0);

        let second = wheel.click_step(3);
        assert_eq!(wheel.step_f(), mid);
        let responses = run(&mut wheel, 96, 600);
        assert_eq!(wheel.step_f(), 3.0);
        assert_eq!(first.selected, Some(ItemId::from("B")));
        assert_eq!(second.selected, Some(ItemId::from("D")));
        assert!(selections(&responses).is_empty());
    }

    #[test]
    fn press_during_a_snap_resumes_it_without_selecting_again() {
        let mut wheel = wheel();
        wheel.click_step(2);
        wheel.tick(ms(0));
        wheel.tick(ms(60));
        let mid = wheel.step_f();

        wheel.pointer_down(at(&wheel, 10.0));
        assert!(!wheel.is_animating());
        assert_eq!(wheel.step_f(), mid);

        let released = wheel.pointer_up();
        assert_eq!(released.selected, None);
        assert!(wheel.is_animating());
        run(&mut wheel, 76, 700);
        assert_eq!(wheel.step_f(), 2.0);
        assert_eq!(wheel.current_index(), Some(2));
    }

    #[test]
    fn dragging_mutes_host_reports() {
        let mut wheel = wheel();
        wheel.pointer_down(at(&wheel, 0.0));
        wheel.pointer_move(at(&wheel, -40.0));
        let step = wheel.step_f();
        assert_eq!(
            wheel.set_active_id(Some(ItemId::from("D"))),
            WheelResponse::none()
        );
        assert_eq!(wheel.step_f(), step);
        assert!(wheel.is_dragging());
    }

    #[test]
    fn keyboard_steps_commit_neighbours() {
        let mut wheel = wheel();
        assert_eq!(wheel.step_by(1).selected, Some(ItemId::from("B")));
        // a second press before settling builds on the pending commit
        assert_eq!(wheel.step_by(1).selected, Some(ItemId::from("C")));
        run(&mut wheel, 0, 400);
        assert_eq!(wheel.step_f(), 2.0);
        assert_eq!(wheel.step_by(-3).selected, Some(ItemId::from("E")));
    }

    #[test]
    fn window_tracks_the_rotation() {
        let mut wheel = wheel();
        wheel.click_step(7);
        run(&mut wheel, 0, 400);
        let snapshot = wheel.snapshot();
        assert_eq!(snapshot.base, 7);
        assert_eq!(snapshot.frac, 0.0);
        assert_eq!(snapshot.label(), Some("Item C"));
        let indices: Vec<_> = snapshot.window.iter().map(|s| s.item_index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
        assert!(!wheel.ring().slices.is_empty());
    }

    #[test]
    fn empty_wheel_is_inert() {
        let mut wheel = ChipWheel::new(vec![NavItem::new("", "blank")], WheelOptions::default());
        assert!(wheel.items().is_empty());
        assert_eq!(wheel.pointer_down(Point::new(1.0, 1.0)), WheelResponse::none());
        assert_eq!(wheel.pointer_up(), WheelResponse::none());
        assert_eq!(wheel.click_step(3), WheelResponse::none());
        assert_eq!(wheel.step_by(1), WheelResponse::none());
        assert_eq!(
            wheel.set_active_id(Some(ItemId::from("x"))),
            WheelResponse::none()
        );
        let snapshot = wheel.snapshot();
        assert!(snapshot.window.is_empty());
        assert_eq!(snapshot.current_index, None);
        assert!(wheel.ring().slices.is_empty());
    }

    #[test]
    fn single_item_never_rotates() {
        let mut wheel = ChipWheel::new(vec![NavItem::new("hero", "Home")], WheelOptions::default());
        wheel.pointer_down(at(&wheel, 0.0));
        assert_eq!(wheel.pointer_move(at(&wheel, 120.0)), WheelResponse::none());
        wheel.pointer_up();
        assert_eq!(wheel.step_f(), 0.0);

        let response = wheel.click_step(4);
        assert_eq!(response.selected, Some(ItemId::from("hero")));
        run(&mut wheel, 0, 400);
        assert_eq!(wheel.step_f(), 0.0);
        assert_eq!(wheel.current_index(), Some(0));
    }

    #[test]
    fn swipe_can_be_disabled() {
        let options = WheelOptions {
            enable_swipe: false,
            ..Default::default()
        };
        let mut wheel = ChipWheel::new(items(), options);
        wheel.pointer_down(at(&wheel, 0.0));
        wheel.pointer_move(at(&wheel, -90.0));
        assert_eq!(wheel.step_f(), 0.0);
    }

    #[test]
    fn teardown_stops_everything() {
        let mut wheel = wheel();
        wheel.click_step(2);
        wheel.tick(ms(0));
        wheel.tick(ms(40));
        let frozen = wheel.step_f();
        wheel.teardown();
        assert!(!wheel.needs_tick());
        assert_eq!(wheel.tick(ms(5000)), WheelResponse::none());
        assert_eq!(wheel.step_f(), frozen);
        assert_eq!(
            wheel.set_active_id(Some(ItemId::from("E"))),
            WheelResponse::none()
        );
    }
}
