//! The slide-to-confirm widget: layered rendering and gesture wiring.

use egui::{
    vec2, Align2, Color32, CornerRadius, CursorIcon, FontId, Image, ImageSource, Pos2, Rect,
    Response, Sense, Stroke, StrokeKind, Ui, Vec2,
};
use slideconfirm_core::{HapticFeedback, NoHaptics, SlideEvent, SliderState};

use crate::{sizing, theme};

/// Style configuration for the slide-to-confirm widget.
///
/// All fields are independent; the only defensive handling is in the
/// state machine (threshold and travel clamping). `swiped_background`
/// unset means it follows `knob_background`.
#[derive(Clone)]
pub struct SlideToConfirmStyle {
    /// Track height
    pub track_height: f32,
    /// Fixed track width (None = use the available width)
    pub track_width: Option<f32>,
    /// Width of the draggable knob container
    pub knob_width: f32,
    /// Size of the icon inside the knob
    pub icon_size: f32,
    /// Icon tint
    pub icon_tint: Color32,
    /// Knob background color
    pub knob_background: Color32,
    /// Track background color while not confirmed
    pub track_background: Color32,
    /// Swiped-area background (None = knob background)
    pub swiped_background: Option<Color32>,
    /// Corner radius of the track, swiped area and knob
    pub corner_radius: u8,
    /// Border stroke width
    pub border_width: f32,
    /// Border color
    pub border_color: Color32,
    /// Text shown while not confirmed
    pub engage_text: String,
    /// Engage text color
    pub engage_text_color: Color32,
    /// Engage text size
    pub engage_font_size: f32,
    /// Text shown once confirmed
    pub confirmed_text: String,
    /// Confirmed text color
    pub confirmed_text_color: Color32,
    /// Confirmed text size
    pub confirmed_font_size: f32,
    /// Haptic duration on confirmation, in milliseconds (0 disables)
    pub haptic_ms: u64,
}

impl Default for SlideToConfirmStyle {
    fn default() -> Self {
        Self {
            track_height: sizing::TRACK_HEIGHT,
            track_width: None,
            knob_width: sizing::KNOB_WIDTH,
            icon_size: sizing::ICON_SIZE,
            icon_tint: Color32::WHITE,
            knob_background: theme::INDIGO,
            track_background: Color32::WHITE,
            swiped_background: None,
            corner_radius: sizing::CORNER_RADIUS,
            border_width: sizing::BORDER_WIDTH,
            border_color: theme::GRAY,
            engage_text: "Slide to confirm".to_owned(),
            engage_text_color: theme::GRAY,
            engage_font_size: 12.0,
            confirmed_text: "Confirmed!".to_owned(),
            confirmed_text_color: Color32::WHITE,
            confirmed_font_size: 12.0,
            haptic_ms: 100,
        }
    }
}

impl SlideToConfirmStyle {
    /// Resolved swiped-area background.
    pub fn swiped_background(&self) -> Color32 {
        self.swiped_background.unwrap_or(self.knob_background)
    }
}

/// Response from showing a [`SlideToConfirm`].
pub struct SlideToConfirmResponse {
    /// The underlying egui response for the whole track
    pub response: Response,
    /// Whether the slider is in its terminal confirmed state
    pub confirmed: bool,
    /// Whether confirmation happened during this frame
    pub just_confirmed: bool,
}

/// A slide-to-confirm control.
///
/// The caller owns the [`SliderState`] (and thereby the confirmed flag's
/// lifetime across reconfiguration); the widget is rebuilt every frame.
///
/// ```no_run
/// # use slideconfirm_core::SliderState;
/// # use slideconfirm_widgets::SlideToConfirm;
/// # fn ui(ui: &mut egui::Ui, state: &mut SliderState) {
/// let response = SlideToConfirm::new(state)
///     .on_confirmed(|| log::info!("confirmed!"))
///     .show(ui);
/// # }
/// ```
pub struct SlideToConfirm<'a> {
    state: &'a mut SliderState,
    style: SlideToConfirmStyle,
    icon: Option<ImageSource<'a>>,
    haptics: &'a dyn HapticFeedback,
    on_confirmed: Option<Box<dyn FnOnce() + 'a>>,
}

impl<'a> SlideToConfirm<'a> {
    /// Create a slider over caller-owned interaction state.
    pub fn new(state: &'a mut SliderState) -> Self {
        Self {
            state,
            style: SlideToConfirmStyle::default(),
            icon: None,
            haptics: &NoHaptics,
            on_confirmed: None,
        }
    }

    /// Set the widget style.
    pub fn style(mut self, style: SlideToConfirmStyle) -> Self {
        self.style = style;
        self
    }

    /// Use an image for the knob icon instead of the painted chevron.
    pub fn icon(mut self, icon: ImageSource<'a>) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Inject a haptic feedback provider (default: silent no-op).
    pub fn haptics(mut self, haptics: &'a dyn HapticFeedback) -> Self {
        self.haptics = haptics;
        self
    }

    /// Set the confirmation callback, invoked exactly once when the
    /// slider reaches its terminal state.
    pub fn on_confirmed(mut self, f: impl FnOnce() + 'a) -> Self {
        self.on_confirmed = Some(Box::new(f));
        self
    }

    /// Show the slider and return what happened.
    pub fn show(mut self, ui: &mut Ui) -> SlideToConfirmResponse {
        let style = &self.style;
        let width = style.track_width.unwrap_or_else(|| ui.available_width());
        let (rect, response) =
            ui.allocate_exact_size(vec2(width, style.track_height), Sense::hover());

        self.state.set_track(rect.width(), style.knob_width);

        // Gesture handling on the knob only; the knob is not part of the
        // interactive tree once confirmed.
        if !self.state.is_confirmed() {
            let knob_rect = knob_rect(rect, self.state.offset(), style.knob_width);
            let knob = ui.interact(knob_rect, response.id.with("knob"), Sense::drag());
            if knob.dragged() {
                self.state.drag_by(knob.drag_delta().x);
            }
            if knob.drag_stopped() {
                self.state.release();
            }
            knob.on_hover_cursor(if self.state.is_dragging() {
                CursorIcon::Grabbing
            } else {
                CursorIcon::Grab
            });
        }

        // Step settle animations and the confirmation delay.
        let dt = ui.input(|i| i.stable_dt).min(0.1);
        let mut just_confirmed = false;
        if let Some(SlideEvent::Confirmed) = self.state.tick(dt) {
            just_confirmed = true;
            if style.haptic_ms > 0 {
                if let Err(e) = self.haptics.fire(style.haptic_ms) {
                    log::warn!("haptic feedback failed: {e}");
                }
            }
            if let Some(on_confirmed) = self.on_confirmed.take() {
                on_confirmed();
            }
        }
        if self.state.is_animating() {
            ui.ctx().request_repaint();
        }

        if ui.is_rect_visible(rect) {
            self.paint(ui, rect);
        }

        SlideToConfirmResponse {
            response,
            confirmed: self.state.is_confirmed(),
            just_confirmed,
        }
    }

    fn paint(&self, ui: &Ui, rect: Rect) {
        let style = &self.style;
        let painter = ui.painter_at(rect);
        let radius = style.corner_radius;
        let confirmed = self.state.is_confirmed();
        let offset = self.state.offset();

        // Background layer, with the engage text until confirmed.
        painter.rect_filled(rect, CornerRadius::same(radius), style.track_background);
        if !confirmed {
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                &style.engage_text,
                FontId::proportional(style.engage_font_size),
                style.engage_text_color,
            );
        }

        // Swiped area grows with the offset; the extra corner radius
        // tucks its trailing edge under the rounded knob. Leading corners
        // are always rounded, trailing corners only once confirmed.
        let swiped_width = if confirmed {
            rect.width()
        } else if offset > 0.0 {
            (offset + f32::from(radius)).min(rect.width())
        } else {
            0.0
        };
        if swiped_width > 0.0 {
            let swiped_rect =
                Rect::from_min_size(rect.min, vec2(swiped_width, rect.height()));
            let swiped_radius = CornerRadius {
                nw: radius,
                sw: radius,
                ne: if confirmed { radius } else { 0 },
                se: if confirmed { radius } else { 0 },
            };
            painter.rect_filled(swiped_rect, swiped_radius, style.swiped_background());
            if confirmed {
                painter.text(
                    swiped_rect.center(),
                    Align2::CENTER_CENTER,
                    &style.confirmed_text,
                    FontId::proportional(style.confirmed_font_size),
                    style.confirmed_text_color,
                );
            }
        }

        // Knob layer, only while not confirmed.
        if !confirmed {
            let knob_rect = knob_rect(rect, offset, style.knob_width);
            painter.rect_filled(knob_rect, CornerRadius::same(radius), style.knob_background);
            match &self.icon {
                Some(source) => {
                    let icon_rect =
                        Rect::from_center_size(knob_rect.center(), Vec2::splat(style.icon_size));
                    Image::new(source.clone())
                        .fit_to_exact_size(icon_rect.size())
                        .tint(style.icon_tint)
                        .paint_at(ui, icon_rect);
                }
                None => paint_chevrons(&painter, knob_rect, style.icon_size, style.icon_tint),
            }
        }

        // Border on top of everything.
        if style.border_width > 0.0 {
            painter.rect_stroke(
                rect,
                CornerRadius::same(radius),
                Stroke::new(style.border_width, style.border_color),
                StrokeKind::Inside,
            );
        }
    }
}

fn knob_rect(track: Rect, offset: f32, knob_width: f32) -> Rect {
    Rect::from_min_size(
        Pos2::new(track.left() + offset, track.top()),
        vec2(knob_width, track.height()),
    )
}

/// Default knob icon: two right-pointing chevrons.
fn paint_chevrons(painter: &egui::Painter, knob: Rect, icon_size: f32, tint: Color32) {
    let stroke = Stroke::new(2.0, tint);
    let half = icon_size / 4.0;
    let center = knob.center();
    for dx in [-half / 2.0, half] {
        let x = center.x + dx - half / 2.0;
        painter.line_segment(
            [Pos2::new(x, center.y - half), Pos2::new(x + half, center.y)],
            stroke,
        );
        painter.line_segment(
            [Pos2::new(x + half, center.y), Pos2::new(x, center.y + half)],
            stroke,
        );
    }
}
