use super::skin::{LabelBox, SkinFrame, SkinKindExt};
use super::{ACTIVE_CHIP_SCALE, ICON_PIXELS, LABEL_FONT_SIZE, LABEL_PADDING_X, LABEL_PADDING_Y};
use crate::gui::theme::ThemeColors;
use crate::sys::icon;
use cairo::Context;
use chipwheel::{ChipWheel, ItemIcon, ItemId, NavItem, Point};
use gdk_pixbuf::Pixbuf;
use gdk4::prelude::*;
use palette::Srgba;
use std::cell::RefCell;
use std::collections::HashMap;
use std::f64::consts::PI;

/// Pixbufs per item; glyph items and failed loads are remembered as `None`.
#[derive(Default)]
pub struct IconCache {
    pixbufs: RefCell<HashMap<ItemId, Option<Pixbuf>>>,
}

impl IconCache {
    pub fn get(&self, item: &NavItem) -> Option<Pixbuf> {
        if let Some(hit) = self.pixbufs.borrow().get(&item.id) {
            return hit.clone();
        }
        let pixbuf = item.icon.as_ref().and_then(Self::load);
        self.pixbufs
            .borrow_mut()
            .insert(item.id.clone(), pixbuf.clone());
        pixbuf
    }

    pub fn clear(&self) {
        self.pixbufs.borrow_mut().clear();
    }

    fn load(icon: &ItemIcon) -> Option<Pixbuf> {
        let path = icon::image_path(icon)?;
        Pixbuf::from_file_at_scale(&path, ICON_PIXELS, ICON_PIXELS, true)
            .inspect_err(|e| log::warn!("Failed to load icon {}: {}", path.display(), e))
            .ok()
    }
}

fn set_srgba(cr: &Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

struct ChipRenderer<'a> {
    item: &'a NavItem,
    center: Point,
    radius: f64,
    icon_size: f64,
    active: bool,
    pixbuf: Option<Pixbuf>,
}

impl ChipRenderer<'_> {
    fn draw(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        self.draw_circle(cr, colors)?;
        self.draw_content(cr, colors)
    }

    fn draw_circle(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        set_srgba(cr, if self.active { colors.chip_active } else { colors.chip });
        cr.new_path();
        cr.arc(self.center.x, self.center.y, self.radius, 0.0, 2.0 * PI);
        cr.fill()
    }

    fn draw_content(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        match (&self.pixbuf, &self.item.icon) {
            (Some(pixbuf), _) => self.draw_icon(cr, pixbuf),
            (None, Some(ItemIcon::Glyph(glyph))) => self.draw_text(cr, glyph, colors),
            // unresolved icons fall back to the label's initial
            _ => match self.item.label.chars().next() {
                Some(initial) => self.draw_text(cr, &initial.to_uppercase().to_string(), colors),
                None => Ok(()),
            },
        }
    }

    fn draw_icon(&self, cr: &Context, pixbuf: &Pixbuf) -> Result<(), cairo::Error> {
        let longest = pixbuf.width().max(pixbuf.height()).max(1) as f64;
        let icon_scale = self.icon_size / longest;
        let (iw, ih) = (
            pixbuf.width() as f64 * icon_scale,
            pixbuf.height() as f64 * icon_scale,
        );

        cr.save()?;
        cr.translate(self.center.x - iw / 2.0, self.center.y - ih / 2.0);
        cr.scale(icon_scale, icon_scale);
        cr.set_source_pixbuf(pixbuf, 0.0, 0.0);
        cr.paint()?;
        cr.restore()
    }

    fn draw_text(&self, cr: &Context, text: &str, colors: &ThemeColors) -> Result<(), cairo::Error> {
        set_srgba(cr, colors.label);
        cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
        cr.set_font_size(self.icon_size);
        let ext = cr.text_extents(text)?;
        cr.move_to(
            self.center.x - ext.width() / 2.0 - ext.x_bearing(),
            self.center.y - ext.height() / 2.0 - ext.y_bearing(),
        );
        cr.show_text(text)
    }
}

/// Paints the wheel in its own coordinates, center at `(size / 2, size / 2)`.
pub fn draw(
    cr: &Context,
    wheel: &ChipWheel,
    icons: &IconCache,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    let snapshot = wheel.snapshot();
    if snapshot.items.is_empty() {
        return Ok(());
    }

    let options = wheel.options();
    let ring = wheel.ring();
    let frame = SkinFrame {
        snapshot: &snapshot,
        ring: &ring,
        options,
        center: wheel.center(),
        colors,
    };
    let painter = options.skin.painter();

    draw_disk(cr, &frame)?;
    painter.before_icons(cr, &frame)?;
    draw_label(cr, &frame, painter)?;

    for slot in &snapshot.window {
        let item = &snapshot.items[slot.item_index];
        let active = Some(slot.item_index) == snapshot.current_index;
        let angle = slot.angle_deg.to_radians();
        let at = Point::new(
            frame.center.x + options.radius * angle.cos(),
            frame.center.y + options.radius * angle.sin(),
        );
        let scale = if active { ACTIVE_CHIP_SCALE } else { 1.0 };

        painter.decorate_icon(cr, &frame, at, active)?;
        ChipRenderer {
            item,
            center: at,
            radius: options.chip_size / 2.0 * scale,
            icon_size: options.icon_size * scale,
            active,
            pixbuf: icons.get(item),
        }
        .draw(cr, colors)?;
    }

    painter.after_icons(cr, &frame)
}

fn draw_disk(cr: &Context, frame: &SkinFrame) -> Result<(), cairo::Error> {
    let c = frame.center;
    cr.new_path();
    cr.arc(c.x, c.y, frame.options.size / 2.0 - 0.5, 0.0, 2.0 * PI);
    set_srgba(cr, frame.colors.glass);
    cr.fill_preserve()?;
    set_srgba(cr, frame.colors.outline);
    cr.set_line_width(1.0);
    cr.stroke()
}

fn draw_label(
    cr: &Context,
    frame: &SkinFrame,
    painter: &dyn super::skin::SkinPainter,
) -> Result<(), cairo::Error> {
    let Some(text) = frame.snapshot.label() else {
        return Ok(());
    };

    cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
    cr.set_font_size(LABEL_FONT_SIZE);
    let ext = cr.text_extents(text)?;
    let offset = frame.options.label_offset;
    let (mx, my) = (frame.center.x + offset.x, frame.center.y + offset.y);

    let width = ext.width() + 2.0 * LABEL_PADDING_X;
    let height = ext.height() + 2.0 * LABEL_PADDING_Y;
    painter.label_backdrop(
        cr,
        frame,
        LabelBox {
            x: mx - width / 2.0,
            y: my - height / 2.0,
            width,
            height,
        },
    )?;

    set_srgba(cr, frame.colors.label);
    cr.move_to(
        mx - ext.width() / 2.0 - ext.x_bearing(),
        my - ext.height() / 2.0 - ext.y_bearing(),
    );
    cr.show_text(text)
}
