use chipwheel::{Point, WheelOptions};
use gtk4 as gtk;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub width: f64,
    pub height: f64,
    /// Wheel center in drawing area coordinates.
    pub center: Point,
    /// Gap between the area and the window edges it is docked to.
    pub margin_x: f64,
    pub margin_y: f64,
    pub right: bool,
    pub bottom: bool,
    radius: f64,
}

fn fit(inset: f64, radius: f64) -> (f64, f64, f64) {
    let margin = (inset - radius).max(0.0);
    let inset = inset - margin;
    let extent = (inset + radius).max(0.0);
    (extent, inset, margin)
}

impl Placement {
    pub fn for_wheel(options: &WheelOptions) -> Self {
        let (sx, sy) = options.dock.anchor_signs();
        let radius = options.size / 2.0;
        let (width, inset_x, margin_x) = fit(-options.offset.x, radius);
        let (height, inset_y, margin_y) = fit(-options.offset.y, radius);
        let right = sx > 0.0;
        let bottom = sy > 0.0;

        Self {
            width,
            height,
            center: Point::new(
                if right { width - inset_x } else { inset_x },
                if bottom { height - inset_y } else { inset_y },
            ),
            margin_x,
            margin_y,
            right,
            bottom,
            radius,
        }
    }

    /// Translation that maps wheel coordinates onto the drawing area.
    pub fn origin(&self) -> (f64, f64) {
        (self.center.x - self.radius, self.center.y - self.radius)
    }

    pub fn to_wheel(&self, area_point: Point) -> Point {
        let (ox, oy) = self.origin();
        Point::new(area_point.x - ox, area_point.y - oy)
    }

    pub fn halign(&self) -> gtk::Align {
        if self.right {
            gtk::Align::End
        } else {
            gtk::Align::Start
        }
    }

    pub fn valign(&self) -> gtk::Align {
        if self.bottom {
            gtk::Align::End
        } else {
            gtk::Align::Start
        }
    }
}
