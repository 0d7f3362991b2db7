use super::view::{self, IconCache};
use crate::gui::theme::ThemeColors;
use crate::gui::window::Placement;
use chipwheel::{ChipWheel, ItemId, Point, WheelResponse};
use gtk::prelude::*;
use gtk4 as gtk;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

#[derive(Clone)]
pub struct WheelWidget {
    area: gtk::DrawingArea,
    wheel: Rc<RefCell<ChipWheel>>,
    placement: Rc<Cell<Placement>>,
    icons: Rc<IconCache>,
    ticking: Rc<Cell<bool>>,
    on_select: Rc<dyn Fn(ItemId)>,
}

impl WheelWidget {
    pub fn new(
        area: gtk::DrawingArea,
        wheel: ChipWheel,
        on_select: impl Fn(ItemId) + 'static,
    ) -> Self {
        let placement = Placement::for_wheel(wheel.options());
        let widget = Self {
            area,
            wheel: Rc::new(RefCell::new(wheel)),
            placement: Rc::new(Cell::new(placement)),
            icons: Rc::new(IconCache::default()),
            ticking: Rc::new(Cell::new(false)),
            on_select: Rc::new(on_select),
        };

        widget.place();
        widget.connect_draw();
        widget.connect_drag();
        widget
    }

    pub fn area(&self) -> &gtk::DrawingArea {
        &self.area
    }

    /// Host report of the section in view.
    pub fn set_active_id(&self, id: Option<ItemId>) {
        let response = self.wheel.borrow_mut().set_active_id(id);
        self.apply(response);
    }

    pub fn step_by(&self, delta: i64) {
        let response = self.wheel.borrow_mut().step_by(delta);
        self.apply(response);
    }

    /// Swaps in a wheel built from new items or options. The active id
    /// carries over; gestures and animations of the old wheel are dropped.
    pub fn replace(&self, mut wheel: ChipWheel) {
        let active = {
            let mut old = self.wheel.borrow_mut();
            old.teardown();
            old.active_id().cloned()
        };
        let response = wheel.set_active_id(active);
        *self.wheel.borrow_mut() = wheel;

        self.icons.clear();
        self.place();
        self.apply(response.merge(WheelResponse::redraw()));
    }

    pub fn teardown(&self) {
        self.wheel.borrow_mut().teardown();
    }

    fn place(&self) {
        let placement = Placement::for_wheel(self.wheel.borrow().options());
        self.placement.set(placement);

        let area = &self.area;
        area.set_content_width(placement.width.ceil() as i32);
        area.set_content_height(placement.height.ceil() as i32);
        area.set_halign(placement.halign());
        area.set_valign(placement.valign());

        let (mx, my) = (placement.margin_x as i32, placement.margin_y as i32);
        area.set_margin_start(if placement.right { 0 } else { mx });
        area.set_margin_end(if placement.right { mx } else { 0 });
        area.set_margin_top(if placement.bottom { 0 } else { my });
        area.set_margin_bottom(if placement.bottom { my } else { 0 });
    }

    fn connect_draw(&self) {
        let wheel = self.wheel.clone();
        let placement = self.placement.clone();
        let icons = self.icons.clone();
        self.area.set_draw_func(move |area, cr, _, _| {
            let colors = ThemeColors::from_context(&area.style_context());
            let (ox, oy) = placement.get().origin();
            cr.translate(ox, oy);
            if let Err(e) = view::draw(cr, &wheel.borrow(), &icons, &colors) {
                log::error!("Drawing error: {}", e);
            }
        });
    }

    fn to_wheel(&self, x: f64, y: f64) -> Point {
        self.placement.get().to_wheel(Point::new(x, y))
    }

    fn connect_drag(&self) {
        let drag = gtk::GestureDrag::new();

        let this = self.clone();
        drag.connect_drag_begin(move |_, x, y| {
            let response = this.wheel.borrow_mut().pointer_down(this.to_wheel(x, y));
            this.apply(response);
        });

        let this = self.clone();
        drag.connect_drag_update(move |gesture, dx, dy| {
            let Some((x, y)) = gesture.start_point() else {
                return;
            };
            let response = this
                .wheel
                .borrow_mut()
                .pointer_move(this.to_wheel(x + dx, y + dy));
            if response.claim_pointer {
                gesture.set_state(gtk::EventSequenceState::Claimed);
            }
            this.apply(response);
        });

        let this = self.clone();
        drag.connect_drag_end(move |_, _, _| {
            let response = this.wheel.borrow_mut().pointer_up();
            this.apply(response);
        });

        let this = self.clone();
        drag.connect_cancel(move |_, _| {
            let response = this.wheel.borrow_mut().pointer_cancel();
            this.apply(response);
        });

        self.area.add_controller(drag);
    }

    fn apply(&self, response: WheelResponse) {
        if response.redraw {
            self.area.queue_draw();
        }
        if let Some(id) = response.selected {
            (self.on_select)(id);
        }
        self.ensure_ticking();
    }

    /// The tick callback runs only while the wheel has a tween or a timer
    /// pending, and removes itself afterwards.
    fn ensure_ticking(&self) {
        if self.ticking.get() || !self.wheel.borrow().needs_tick() {
            return;
        }
        self.ticking.set(true);

        let this = self.clone();
        self.area.add_tick_callback(move |_, clock| {
            let now = Duration::from_micros(clock.frame_time().max(0) as u64);
            let response = this.wheel.borrow_mut().tick(now);
            if response.redraw {
                this.area.queue_draw();
            }
            if let Some(id) = response.selected {
                (this.on_select)(id);
            }

            if this.wheel.borrow().needs_tick() {
                glib::ControlFlow::Continue
            } else {
                this.ticking.set(false);
                glib::ControlFlow::Break
            }
        });
    }
}
