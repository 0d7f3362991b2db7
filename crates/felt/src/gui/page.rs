use crate::config::SectionConfig;
use chipwheel::ItemId;
use gtk::prelude::*;
use gtk4 as gtk;

pub const SECTION_HEIGHT: f64 = 560.0;
pub const SECTION_SPACING: f64 = 24.0;
/// Share of the viewport ignored at its top and at its bottom.
pub const SPY_MARGIN: f64 = 0.2;

#[derive(Debug, Clone, PartialEq)]
pub struct SectionExtent {
    pub id: ItemId,
    pub top: f64,
    pub height: f64,
}

impl SectionExtent {
    fn overlap(&self, lo: f64, hi: f64) -> f64 {
        (self.top + self.height).min(hi) - self.top.max(lo)
    }
}

/// Extents of fixed-height sections stacked with `SECTION_SPACING` between them.
pub fn stack(ids: impl IntoIterator<Item = ItemId>) -> Vec<SectionExtent> {
    ids.into_iter()
        .enumerate()
        .map(|(i, id)| SectionExtent {
            id,
            top: i as f64 * (SECTION_HEIGHT + SECTION_SPACING),
            height: SECTION_HEIGHT,
        })
        .collect()
}

/// The section with the largest visible share of itself inside the middle
/// band of the viewport. `None` when no section reaches into the band, in
/// which case the previous answer should stand.
pub fn active_section(
    sections: &[SectionExtent],
    scroll_top: f64,
    viewport_height: f64,
) -> Option<&ItemId> {
    let lo = scroll_top + viewport_height * SPY_MARGIN;
    let hi = scroll_top + viewport_height * (1.0 - SPY_MARGIN);
    if hi <= lo {
        return None;
    }

    sections
        .iter()
        .filter(|s| s.height > 0.0)
        .map(|s| (s, s.overlap(lo, hi) / s.height))
        .filter(|(_, ratio)| *ratio > 0.0)
        .fold(None, |best: Option<(&SectionExtent, f64)>, (s, ratio)| match best {
            Some((_, best_ratio)) if best_ratio >= ratio => best,
            _ => Some((s, ratio)),
        })
        .map(|(s, _)| &s.id)
}

pub fn scroll_target(sections: &[SectionExtent], id: &ItemId) -> Option<f64> {
    sections.iter().find(|s| &s.id == id).map(|s| s.top)
}

pub fn build_page(sections: &[SectionConfig]) -> gtk::Box {
    let page = gtk::Box::new(gtk::Orientation::Vertical, SECTION_SPACING as i32);
    page.add_css_class("felt-page");

    for section in sections {
        let panel = gtk::Box::new(gtk::Orientation::Vertical, 12);
        panel.set_height_request(SECTION_HEIGHT as i32);
        panel.add_css_class("felt-section");
        panel.set_widget_name(section.id.as_str());

        let title = gtk::Label::new(Some(&section.label));
        title.add_css_class("title-1");
        title.set_halign(gtk::Align::Start);
        panel.append(&title);

        if !section.blurb.is_empty() {
            let blurb = gtk::Label::new(Some(&section.blurb));
            blurb.set_wrap(true);
            blurb.set_halign(gtk::Align::Start);
            panel.append(&blurb);
        }
        page.append(&panel);
    }
    page
}
