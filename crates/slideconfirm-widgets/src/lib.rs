//! Slide-to-confirm widget for egui.
//!
//! A knob is dragged along a track; passing the configured threshold and
//! releasing commits an irreversible confirmed state, fires haptic
//! feedback and notifies the caller. The interaction logic lives in
//! `slideconfirm-core`; this crate wires it into egui's gesture and
//! paint pipeline.

pub mod slide_to_confirm;

pub use slide_to_confirm::{SlideToConfirm, SlideToConfirmResponse, SlideToConfirmStyle};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Track height
    pub const TRACK_HEIGHT: f32 = 60.0;
    /// Knob container width
    pub const KNOB_WIDTH: f32 = 60.0;
    /// Knob icon size
    pub const ICON_SIZE: f32 = 32.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 12;
    /// Border stroke width
    pub const BORDER_WIDTH: f32 = 1.0;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Knob and swiped-area background (indigo)
    pub const INDIGO: Color32 = Color32::from_rgb(0x48, 0x4E, 0xAA);
    /// Border and engage text color
    pub const GRAY: Color32 = Color32::from_rgb(128, 128, 128);
}
