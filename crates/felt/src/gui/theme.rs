use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::{Srgb, Srgba, WithAlpha};

const APP_CSS: &str = "
.felt-wheel {
    background: none;
}
.felt-section {
    padding: 48px;
    border-radius: 12px;
    background-color: alpha(@theme_fg_color, 0.04);
}
";

pub struct ThemeColors {
    pub label: Srgba<f64>,
    pub chip: Srgba<f64>,
    pub chip_active: Srgba<f64>,
    pub glass: Srgba<f64>,
    pub outline: Srgba<f64>,
}

impl ThemeColors {
    /// Wheel colours from the theme's foreground, background and accent.
    pub fn from_base(fg: Srgb<f64>, bg: Srgb<f64>, accent: Srgb<f64>) -> Self {
        Self {
            label: fg.with_alpha(1.0),
            chip: bg.with_alpha(0.7),
            chip_active: accent.with_alpha(0.9),
            glass: bg.with_alpha(0.55),
            outline: fg.with_alpha(0.15),
        }
    }

    pub fn from_context(context: &gtk::StyleContext) -> Self {
        let named = |name: &str| {
            context
                .lookup_color(name)
                .map(|c| Srgb::new(c.red() as f64, c.green() as f64, c.blue() as f64))
        };
        Self::from_base(
            named("theme_fg_color").unwrap_or(Srgb::new(0.95, 0.95, 0.95)),
            named("theme_bg_color").unwrap_or(Srgb::new(0.12, 0.12, 0.14)),
            named("accent_bg_color")
                .or_else(|| named("theme_selected_bg_color"))
                .unwrap_or(Srgb::new(0.4, 0.4, 0.8)),
        )
    }
}

pub fn install_css(display: &gdk::Display) {
    let provider = gtk::CssProvider::new();
    provider.load_from_data(APP_CSS);
    gtk::style_context_add_provider_for_display(
        display,
        &provider,
        gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
}
