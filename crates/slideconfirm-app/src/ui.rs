//! Demo UI: three configurations of the slide-to-confirm widget.

use egui::{Color32, Context, Frame, Margin, RichText};
use slideconfirm_core::{LogHaptics, SlideStatus, SliderState};
use slideconfirm_widgets::{theme, SlideToConfirm, SlideToConfirmStyle};

const PINK: Color32 = Color32::from_rgb(0xD8, 0x1B, 0x60);

/// State backing the demo screen: one `SliderState` per slider.
pub struct UiState {
    default_slider: SliderState,
    billing_slider: SliderState,
    unlock_slider: SliderState,
    haptics: LogHaptics,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            default_slider: SliderState::new(0.95, SlideStatus::Init),
            billing_slider: SliderState::new(0.95, SlideStatus::Init),
            unlock_slider: SliderState::new(0.95, SlideStatus::Init),
            haptics: LogHaptics,
        }
    }
}

/// Render the demo screen.
pub fn render_ui(ctx: &Context, state: &mut UiState) {
    egui::CentralPanel::default()
        .frame(
            Frame::new()
                .fill(Color32::from_gray(245))
                .inner_margin(Margin::same(24)),
        )
        .show(ctx, |ui| {
            ui.spacing_mut().item_spacing.y = 16.0;

            ui.label(
                RichText::new("Slide to confirm")
                    .size(18.0)
                    .color(Color32::from_gray(60)),
            );

            // Default styling with a pink swiped area.
            SlideToConfirm::new(&mut state.default_slider)
                .style(SlideToConfirmStyle {
                    border_color: theme::INDIGO,
                    swiped_background: Some(PINK),
                    ..Default::default()
                })
                .haptics(&state.haptics)
                .on_confirmed(|| log::info!("slider 1: confirmed!"))
                .show(ui);

            // Heavily customized: wide knob, thick round border, big text.
            SlideToConfirm::new(&mut state.billing_slider)
                .style(SlideToConfirmStyle {
                    knob_width: 80.0,
                    icon_size: 24.0,
                    icon_tint: PINK,
                    border_width: 2.0,
                    border_color: theme::INDIGO,
                    corner_radius: 30,
                    swiped_background: Some(PINK),
                    engage_text: "Slide to stop billing".to_owned(),
                    engage_text_color: PINK,
                    engage_font_size: 17.0,
                    ..Default::default()
                })
                .haptics(&state.haptics)
                .on_confirmed(|| log::info!("slider 2: confirmed!"))
                .show(ui);

            // Inverted colors: pink track, indigo swiped area.
            SlideToConfirm::new(&mut state.unlock_slider)
                .style(SlideToConfirmStyle {
                    knob_width: 40.0,
                    icon_size: 24.0,
                    border_color: theme::INDIGO,
                    track_background: PINK,
                    swiped_background: Some(theme::INDIGO),
                    engage_text: "Swipe right to unlock".to_owned(),
                    engage_text_color: Color32::WHITE,
                    confirmed_text: "Unlocked!".to_owned(),
                    ..Default::default()
                })
                .haptics(&state.haptics)
                .on_confirmed(|| log::info!("slider 3: unlocked!"))
                .show(ui);
        });
}
