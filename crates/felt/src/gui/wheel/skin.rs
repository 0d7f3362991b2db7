use super::{
    DRAG_INDICATOR_PEAK, DRAG_INDICATOR_SLICE_DEG, DRAG_INDICATOR_SPAN_DEG, GLOW_ALPHA, GLOW_WIDTH,
    INNER_SHADOW_ALPHA, INNER_SHADOW_WIDTH,
};
use crate::gui::theme::ThemeColors;
use cairo::{Context, RadialGradient};
use chipwheel::ring::{RingSlice, SliceKind};
use chipwheel::{Point, Rgba, RingLayout, SkinKind, Snapshot, Tone, WheelOptions};
use std::f64::consts::PI;

/// Everything a skin may look at while painting one frame.
pub struct SkinFrame<'a> {
    pub snapshot: &'a Snapshot<'a>,
    pub ring: &'a RingLayout,
    pub options: &'a WheelOptions,
    pub center: Point,
    pub colors: &'a ThemeColors,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Paint hooks around the icon band. Skins add decoration only; chips,
/// icons and the label text are drawn by the view.
pub trait SkinPainter {
    fn before_icons(&self, cr: &Context, frame: &SkinFrame) -> Result<(), cairo::Error>;

    fn decorate_icon(
        &self,
        _cr: &Context,
        _frame: &SkinFrame,
        _at: Point,
        _active: bool,
    ) -> Result<(), cairo::Error> {
        Ok(())
    }

    fn label_backdrop(
        &self,
        _cr: &Context,
        _frame: &SkinFrame,
        _label: LabelBox,
    ) -> Result<(), cairo::Error> {
        Ok(())
    }

    fn after_icons(&self, _cr: &Context, _frame: &SkinFrame) -> Result<(), cairo::Error> {
        Ok(())
    }
}

pub trait SkinKindExt {
    fn painter(self) -> &'static dyn SkinPainter;
}

impl SkinKindExt for SkinKind {
    fn painter(self) -> &'static dyn SkinPainter {
        match self {
            SkinKind::Glass => &GlassSkin,
            SkinKind::Poker => &PokerSkin,
        }
    }
}

fn set_rgba(cr: &Context, color: Rgba) {
    let (r, g, b, a) = color.components();
    cr.set_source_rgba(r, g, b, a);
}

fn annulus_sector(cr: &Context, c: Point, outer: f64, inner: f64, slice: &RingSlice) {
    let (start, end) = (slice.start_deg.to_radians(), slice.end_deg.to_radians());
    cr.new_path();
    cr.arc(c.x, c.y, outer, start, end);
    cr.arc_negative(c.x, c.y, inner, end, start);
    cr.close_path();
}

fn pill(cr: &Context, label: LabelBox) {
    let r = label.height / 2.0;
    cr.new_path();
    cr.arc(label.x + label.width - r, label.y + r, r, -PI / 2.0, PI / 2.0);
    cr.arc(label.x + r, label.y + r, r, PI / 2.0, 3.0 * PI / 2.0);
    cr.close_path();
}

/// Plain frosted disk; shows a soft highlight at the active angle while dragging.
pub struct GlassSkin;

impl SkinPainter for GlassSkin {
    fn before_icons(&self, _cr: &Context, _frame: &SkinFrame) -> Result<(), cairo::Error> {
        Ok(())
    }

    fn label_backdrop(
        &self,
        cr: &Context,
        _frame: &SkinFrame,
        label: LabelBox,
    ) -> Result<(), cairo::Error> {
        pill(cr, label);
        cr.set_source_rgba(1.0, 1.0, 1.0, 0.10);
        cr.fill_preserve()?;
        cr.set_source_rgba(1.0, 1.0, 1.0, 0.15);
        cr.set_line_width(1.0);
        cr.stroke()
    }

    fn after_icons(&self, cr: &Context, frame: &SkinFrame) -> Result<(), cairo::Error> {
        if !frame.options.skin_options.show_drag_indicator || !frame.snapshot.dragging {
            return Ok(());
        }

        let (r, g, b, _) = frame.options.skin_options.accent.components();
        let c = frame.center;
        let outer = frame.options.size / 2.0;
        let center = frame.snapshot.center_deg;

        let mut offset = -DRAG_INDICATOR_SPAN_DEG;
        while offset < DRAG_INDICATOR_SPAN_DEG {
            let mid = offset + DRAG_INDICATOR_SLICE_DEG / 2.0;
            let alpha = drag_indicator_alpha(mid);
            let start = (center + offset).to_radians();
            let end = (center + offset + DRAG_INDICATOR_SLICE_DEG).to_radians();

            cr.new_path();
            cr.move_to(c.x, c.y);
            cr.arc(c.x, c.y, outer, start, end);
            cr.close_path();
            cr.set_source_rgba(r, g, b, alpha);
            cr.fill()?;
            offset += DRAG_INDICATOR_SLICE_DEG;
        }
        Ok(())
    }
}

/// Accent alpha at `offset_deg` from the active angle: peaks at the center,
/// 0.12 twenty degrees out, gone at the edge of the span.
pub fn drag_indicator_alpha(offset_deg: f64) -> f64 {
    let d = offset_deg.abs();
    if d >= DRAG_INDICATOR_SPAN_DEG {
        0.0
    } else if d <= 20.0 {
        DRAG_INDICATOR_PEAK - (DRAG_INDICATOR_PEAK - 0.12) * d / 20.0
    } else {
        0.12 * (DRAG_INDICATOR_SPAN_DEG - d) / (DRAG_INDICATOR_SPAN_DEG - 20.0)
    }
}

/// Casino chip: dark base disk, a two-tone wedge rim that slides with the
/// icons, thin dividers and a gold glow behind the active chip.
pub struct PokerSkin;

impl PokerSkin {
    fn draw_base(&self, cr: &Context, frame: &SkinFrame) -> Result<(), cairo::Error> {
        let skin = &frame.options.skin_options;
        let c = frame.center;
        let outer = frame.ring.outer_radius;

        let gradient = RadialGradient::new(c.x, c.y - 0.08 * outer, 0.0, c.x, c.y, outer);
        for (offset, color) in [
            (0.0, skin.base_dark),
            (0.72, skin.base_dark2),
            (1.0, Rgba::black()),
        ] {
            let (r, g, b, a) = color.components();
            gradient.add_color_stop_rgba(offset, r, g, b, a);
        }

        cr.new_path();
        cr.arc(c.x, c.y, outer, 0.0, 2.0 * PI);
        cr.set_source(&gradient)?;
        cr.fill()
    }

    fn draw_ring(&self, cr: &Context, frame: &SkinFrame) -> Result<(), cairo::Error> {
        let skin = &frame.options.skin_options;
        let ring = frame.ring;
        let (red, ivory, gap) = (skin.red_tint(), skin.ivory_tint(), skin.gap_color());

        for slice in &ring.slices {
            annulus_sector(cr, frame.center, ring.outer_radius, ring.inner_radius, slice);
            set_rgba(
                cr,
                match slice.kind {
                    SliceKind::Wedge(Tone::Red) => red,
                    SliceKind::Wedge(Tone::Ivory) => ivory,
                    SliceKind::Divider => gap,
                },
            );
            cr.fill()?;
        }
        Ok(())
    }

    fn draw_inner_shadow(&self, cr: &Context, frame: &SkinFrame) -> Result<(), cairo::Error> {
        let ring = frame.ring;
        if ring.outer_radius <= ring.inner_radius {
            return Ok(());
        }
        let c = frame.center;
        let reach = (ring.inner_radius + INNER_SHADOW_WIDTH).min(ring.outer_radius);

        let gradient = RadialGradient::new(c.x, c.y, ring.inner_radius, c.x, c.y, reach);
        gradient.add_color_stop_rgba(0.0, 0.0, 0.0, 0.0, INNER_SHADOW_ALPHA);
        gradient.add_color_stop_rgba(1.0, 0.0, 0.0, 0.0, 0.0);

        cr.new_path();
        cr.arc(c.x, c.y, ring.outer_radius, 0.0, 2.0 * PI);
        cr.arc_negative(c.x, c.y, ring.inner_radius, 2.0 * PI, 0.0);
        cr.set_source(&gradient)?;
        cr.fill()
    }
}

impl SkinPainter for PokerSkin {
    fn before_icons(&self, cr: &Context, frame: &SkinFrame) -> Result<(), cairo::Error> {
        if frame.options.skin_options.show_base {
            self.draw_base(cr, frame)?;
        }
        self.draw_ring(cr, frame)?;
        self.draw_inner_shadow(cr, frame)
    }

    fn decorate_icon(
        &self,
        cr: &Context,
        frame: &SkinFrame,
        at: Point,
        active: bool,
    ) -> Result<(), cairo::Error> {
        if !active {
            return Ok(());
        }
        let (r, g, b, _) = frame.options.skin_options.accent.components();
        let chip = frame.options.chip_size / 2.0;

        let glow = RadialGradient::new(at.x, at.y, chip, at.x, at.y, chip + GLOW_WIDTH);
        glow.add_color_stop_rgba(0.0, r, g, b, GLOW_ALPHA);
        glow.add_color_stop_rgba(1.0, r, g, b, 0.0);
        cr.new_path();
        cr.arc(at.x, at.y, chip + GLOW_WIDTH, 0.0, 2.0 * PI);
        cr.set_source(&glow)?;
        cr.fill()
    }
}
