use crate::color::Rgba;
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::time::Duration;
use strum::{Display as StrumDisplay, EnumIter, EnumString};
use thiserror::Error;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    SerializeDisplay,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
pub enum Dock {
    #[default]
    #[strum(to_string = "br", serialize = "BottomRight", serialize = "bottom-right")]
    BottomRight,
    #[strum(to_string = "bl", serialize = "BottomLeft", serialize = "bottom-left")]
    BottomLeft,
    #[strum(to_string = "tr", serialize = "TopRight", serialize = "top-right")]
    TopRight,
    #[strum(to_string = "tl", serialize = "TopLeft", serialize = "top-left")]
    TopLeft,
}

impl Dock {
    /// Angle pointing from the corner into the screen, where the active icon rests.
    pub fn default_center_deg(&self) -> f64 {
        match self {
            Self::BottomRight => 215.0,
            Self::BottomLeft => 325.0,
            Self::TopRight => 145.0,
            Self::TopLeft => 35.0,
        }
    }

    /// Horizontal and vertical sign of the corner: `+1` for right/bottom.
    pub fn anchor_signs(&self) -> (f64, f64) {
        match self {
            Self::BottomRight => (1.0, 1.0),
            Self::BottomLeft => (-1.0, 1.0),
            Self::TopRight => (1.0, -1.0),
            Self::TopLeft => (-1.0, -1.0),
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    SerializeDisplay,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SkinKind {
    Glass,
    #[default]
    Poker,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkinOptions {
    pub rim_width: f64,
    pub gap_deg: f64,
    /// Overrides `step_deg - gap_deg`.
    pub wedge_fill_deg: Option<f64>,
    /// Fine alignment of the wedge band against the icons.
    pub phase_deg: f64,
    pub tint_alpha_red: f64,
    pub tint_alpha_ivory: f64,
    pub show_gaps: bool,
    pub gap_alpha: f64,
    pub crimson: Rgba,
    pub ivory: Rgba,
    pub show_base: bool,
    pub base_dark: Rgba,
    pub base_dark2: Rgba,
    pub accent: Rgba,
    pub show_drag_indicator: bool,
}

impl Default for SkinOptions {
    fn default() -> Self {
        Self {
            rim_width: 26.0,
            gap_deg: 2.0,
            wedge_fill_deg: None,
            phase_deg: 0.0,
            tint_alpha_red: 0.46,
            tint_alpha_ivory: 0.20,
            show_gaps: true,
            gap_alpha: 0.28,
            crimson: Rgba::new(238.0 / 255.0, 35.0 / 255.0, 70.0 / 255.0, 1.0),
            ivory: Rgba::white(),
            show_base: true,
            base_dark: Rgba::new(20.0 / 255.0, 26.0 / 255.0, 34.0 / 255.0, 1.0),
            base_dark2: Rgba::new(11.0 / 255.0, 13.0 / 255.0, 18.0 / 255.0, 1.0),
            accent: Rgba::new(212.0 / 255.0, 175.0 / 255.0, 55.0 / 255.0, 1.0),
            show_drag_indicator: true,
        }
    }
}

impl SkinOptions {
    pub fn red_tint(&self) -> Rgba {
        self.crimson
            .mix_oklab(Rgba::black(), 0.78)
            .fade(self.tint_alpha_red)
    }

    /// Off-white wedge tint, pulled slightly towards the page background.
    pub fn ivory_tint(&self) -> Rgba {
        self.ivory
            .mix_oklab(self.base_dark2, 0.92)
            .fade(self.tint_alpha_ivory)
    }

    pub fn gap_color(&self) -> Rgba {
        Rgba::white().with_alpha(self.gap_alpha)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Angular travel (degrees) before a press turns into a rotation.
    #[serde(alias = "deadzone_px")]
    pub deadzone_deg: f64,
    pub snap_duration_ms: u64,
    pub settle_ms: u64,
    pub lock_timeout_ms: u64,
    /// Fraction of a step the drag candidate lags behind the half-way mark.
    pub hysteresis: f64,
    /// Drift (in steps) below which the host's active item counts as shown.
    pub resync_epsilon: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            deadzone_deg: 6.0,
            snap_duration_ms: 160,
            settle_ms: 250,
            lock_timeout_ms: 1200,
            hysteresis: 0.08,
            resync_epsilon: 1e-3,
        }
    }
}

impl Tuning {
    pub fn snap_duration(&self) -> Duration {
        Duration::from_millis(self.snap_duration_ms)
    }

    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    pub fn lock_timeout(&self) -> Duration {
        Duration::from_millis(self.lock_timeout_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelOptions {
    pub dock: Dock,
    pub offset: Offset,
    pub size: f64,
    pub radius: f64,
    pub center_angle: Option<f64>,
    pub step_deg: Option<f64>,
    pub icon_size: f64,
    pub chip_size: f64,
    pub label_offset: Offset,
    pub enable_swipe: bool,
    pub skin: SkinKind,
    #[serde(alias = "skin_props")]
    pub skin_options: SkinOptions,
    pub tuning: Tuning,
}

impl Default for WheelOptions {
    fn default() -> Self {
        Self {
            dock: Dock::default(),
            offset: Offset::new(-36.0, -15.0),
            size: 230.0,
            radius: 99.0,
            center_angle: None,
            step_deg: None,
            icon_size: 17.0,
            chip_size: 25.0,
            label_offset: Offset::new(-12.0, -18.0),
            enable_swipe: true,
            skin: SkinKind::default(),
            skin_options: SkinOptions::default(),
            tuning: Tuning::default(),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum OptionsError {
    #[error("{field} must be a finite number greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("{field} must be a finite, non-negative number, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f64 },
    #[error("hysteresis must lie in [0, 0.5), got {0}")]
    Hysteresis(f64),
    #[error("step_deg must be at least 1 degree, got {0}")]
    StepTooSmall(f64),
}

/// Smallest accepted angular step; keeps the wedge ring to a few hundred slices.
pub const MIN_STEP_DEG: f64 = 1.0;

fn positive(field: &'static str, value: f64) -> Result<(), OptionsError> {
    (value.is_finite() && value > 0.0)
        .then_some(())
        .ok_or(OptionsError::NotPositive { field, value })
}

fn non_negative(field: &'static str, value: f64) -> Result<(), OptionsError> {
    (value.is_finite() && value >= 0.0)
        .then_some(())
        .ok_or(OptionsError::Negative { field, value })
}

fn finite(field: &'static str, value: f64) -> Result<(), OptionsError> {
    value
        .is_finite()
        .then_some(())
        .ok_or(OptionsError::NotFinite { field, value })
}

impl WheelOptions {
    pub fn center_deg(&self) -> f64 {
        self.center_angle
            .unwrap_or_else(|| self.dock.default_center_deg())
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        positive("size", self.size)?;
        non_negative("radius", self.radius)?;
        positive("icon_size", self.icon_size)?;
        positive("chip_size", self.chip_size)?;
        if let Some(center) = self.center_angle {
            finite("center_angle", center)?;
        }
        if let Some(step) = self.step_deg {
            positive("step_deg", step)?;
            if step < MIN_STEP_DEG {
                return Err(OptionsError::StepTooSmall(step));
            }
        }
        finite("offset.x", self.offset.x)?;
        finite("offset.y", self.offset.y)?;

        let skin = &self.skin_options;
        non_negative("rim_width", skin.rim_width)?;
        non_negative("gap_deg", skin.gap_deg)?;
        if let Some(fill) = skin.wedge_fill_deg {
            non_negative("wedge_fill_deg", fill)?;
        }
        finite("phase_deg", skin.phase_deg)?;

        let tuning = &self.tuning;
        non_negative("deadzone_deg", tuning.deadzone_deg)?;
        non_negative("resync_epsilon", tuning.resync_epsilon)?;
        if !(0.0..0.5).contains(&tuning.hysteresis) {
            return Err(OptionsError::Hysteresis(tuning.hysteresis));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dock_deserialization() {
        let cases = vec![
            ("\"br\"", Dock::BottomRight),
            ("\"BR\"", Dock::BottomRight),
            ("\"bottom-right\"", Dock::BottomRight),
            ("\"BottomLeft\"", Dock::BottomLeft),
            ("\"tr\"", Dock::TopRight),
            ("\"tl\"", Dock::TopLeft),
        ];

        for (json, expected) in cases {
            let deserialized: Dock = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized, expected);
        }
        assert!(serde_json::from_str::<Dock>("\"middle\"").is_err());
        assert_eq!(serde_json::to_string(&Dock::TopLeft).unwrap(), "\"tl\"");
    }

    #[test]
    fn test_skin_deserialization() {
        let glass: SkinKind = serde_json::from_str("\"Glass\"").unwrap();
        assert_eq!(glass, SkinKind::Glass);
        assert_eq!(SkinKind::Poker.to_string(), "poker");
    }

    #[test]
    fn dock_picks_center_angle_unless_overridden() {
        let mut options = WheelOptions {
            dock: Dock::TopLeft,
            ..Default::default()
        };
        assert_eq!(options.center_deg(), 35.0);
        options.center_angle = Some(90.0);
        assert_eq!(options.center_deg(), 90.0);
    }

    #[test]
    fn partial_options_fill_in_defaults() {
        let options: WheelOptions = serde_json::from_str(
            r#"{"dock":"bl","tuning":{"deadzone_px":10},"skin_props":{"gap_deg":3}}"#,
        )
        .unwrap();
        assert_eq!(options.dock, Dock::BottomLeft);
        assert_eq!(options.size, 230.0);
        assert_eq!(options.tuning.deadzone_deg, 10.0);
        assert_eq!(options.tuning.settle_ms, 250);
        assert_eq!(options.skin_options.gap_deg, 3.0);
        assert_eq!(options.skin_options.rim_width, 26.0);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn validation_rejects_broken_numbers() {
        let bad_step = WheelOptions {
            step_deg: Some(0.0),
            ..Default::default()
        };
        assert_eq!(
            bad_step.validate(),
            Err(OptionsError::NotPositive {
                field: "step_deg",
                value: 0.0
            })
        );

        let tiny_step = WheelOptions {
            step_deg: Some(0.001),
            ..Default::default()
        };
        assert_eq!(tiny_step.validate(), Err(OptionsError::StepTooSmall(0.001)));
        let smallest = WheelOptions {
            step_deg: Some(MIN_STEP_DEG),
            ..Default::default()
        };
        assert!(smallest.validate().is_ok());

        let mut bad_hysteresis = WheelOptions::default();
        bad_hysteresis.tuning.hysteresis = 0.5;
        assert_eq!(
            bad_hysteresis.validate(),
            Err(OptionsError::Hysteresis(0.5))
        );

        let mut bad_rim = WheelOptions::default();
        bad_rim.skin_options.rim_width = f64::NAN;
        assert!(bad_rim.validate().is_err());
    }

    #[test]
    fn tints_are_translucent() {
        let skin = SkinOptions::default();
        assert!((skin.red_tint().alpha() - 0.46).abs() < 1e-9);
        assert!((skin.ivory_tint().alpha() - 0.20).abs() < 1e-9);
        assert!((skin.gap_color().alpha() - 0.28).abs() < 1e-9);
    }
}
