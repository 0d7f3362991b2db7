pub mod skin;
pub mod view;
pub mod widget;

pub use skin::{SkinKindExt, SkinPainter};
pub use view::{IconCache, draw};
pub use widget::WheelWidget;

pub const ICON_PIXELS: i32 = 64; // pixbuf load size, scaled down to icon_size
pub const ACTIVE_CHIP_SCALE: f64 = 1.06;
pub const LABEL_FONT_SIZE: f64 = 13.0;
pub const LABEL_PADDING_X: f64 = 16.0;
pub const LABEL_PADDING_Y: f64 = 8.0;

// Poker skin
pub const GLOW_WIDTH: f64 = 10.0;
pub const GLOW_ALPHA: f64 = 0.28;
pub const INNER_SHADOW_WIDTH: f64 = 24.0;
pub const INNER_SHADOW_ALPHA: f64 = 0.45;

// Glass skin
pub const DRAG_INDICATOR_SPAN_DEG: f64 = 45.0;
pub const DRAG_INDICATOR_SLICE_DEG: f64 = 3.0;
pub const DRAG_INDICATOR_PEAK: f64 = 0.22;
