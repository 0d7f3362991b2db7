pub mod macros;

pub mod color;
pub mod geometry;
pub mod gesture;
pub mod item;
pub mod motion;
pub mod options;
pub mod ring;
pub mod sync;
pub mod wheel;

pub use color::Rgba;
pub use geometry::{Point, VisibleSlot, WheelGeometry};
pub use item::{ItemIcon, ItemId, NavItem};
pub use options::{Dock, SkinKind, SkinOptions, Tuning, WheelOptions};
pub use ring::{RingLayout, RingSlice, Tone};
pub use wheel::{ChipWheel, Snapshot, WheelResponse};
