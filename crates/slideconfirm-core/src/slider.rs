//! Drag-to-threshold state machine for the slide-to-confirm control.
//!
//! The state machine is pure and frame-driven: the host widget feeds it
//! drag deltas and release events, then steps it with `tick(dt)` every
//! frame. Settle animations and the pre-confirmation delay run entirely
//! inside `tick`, so the machine is testable without any UI stack.

use serde::{Deserialize, Serialize};

/// Duration of the post-release settle animation, in seconds.
const SETTLE_SECONDS: f32 = 0.2;

/// Default delay between reaching the end and firing confirmation, in ms.
pub const DEFAULT_CONFIRM_DELAY_MS: u64 = 100;

/// Initial status of the slider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlideStatus {
    /// Not yet confirmed; the knob sits at the start of the track.
    #[default]
    Init,
    /// Already confirmed; the slider renders its terminal visual state.
    Confirmed,
}

/// Which end of the track a settle animation moves toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleTarget {
    Start,
    End,
}

/// Interaction phase of the slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlidePhase {
    /// Settled at the start of the track, waiting for a drag.
    Idle,
    /// A drag gesture is moving the knob.
    Dragging,
    /// Post-release animation toward one end of the track.
    Settling {
        from: f32,
        toward: SettleTarget,
        elapsed: f32,
    },
    /// The knob reached the end; counting down the confirmation delay.
    Holding { remaining: f32 },
    /// Terminal: confirmed. No further input is accepted.
    Confirmed,
}

/// Event reported by [`SliderState::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideEvent {
    /// The slider transitioned into its terminal confirmed state.
    /// Reported exactly once per slider lifetime.
    Confirmed,
}

/// State of one slide-to-confirm control.
///
/// `offset` is the knob position along the drag axis, kept within
/// `[0, max_offset]` at every step. `max_offset` is derived from layout
/// via [`set_track`](Self::set_track) and clamped to be non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderState {
    offset: f32,
    max_offset: f32,
    threshold: f32,
    confirm_delay: f32,
    phase: SlidePhase,
}

impl SliderState {
    /// Create a slider with the given confirmation threshold (fraction of
    /// the travel distance, clamped to `[0, 1]`) and initial status.
    ///
    /// Starting from [`SlideStatus::Confirmed`] lands directly in the
    /// terminal phase: no animation runs and no event is ever reported.
    pub fn new(threshold: f32, status: SlideStatus) -> Self {
        Self {
            offset: 0.0,
            max_offset: 0.0,
            threshold: threshold.clamp(0.0, 1.0),
            confirm_delay: DEFAULT_CONFIRM_DELAY_MS as f32 / 1000.0,
            phase: match status {
                SlideStatus::Init => SlidePhase::Idle,
                SlideStatus::Confirmed => SlidePhase::Confirmed,
            },
        }
    }

    /// Override the delay between reaching the end and confirmation.
    pub fn set_confirm_delay_ms(&mut self, ms: u64) {
        self.confirm_delay = ms as f32 / 1000.0;
    }

    /// Update travel geometry from layout. Called every frame before
    /// processing input; `max_offset = track_width - knob_width`, clamped
    /// to zero when the knob fills (or overflows) the track.
    pub fn set_track(&mut self, track_width: f32, knob_width: f32) {
        self.max_offset = (track_width - knob_width).max(0.0);
        self.offset = if self.is_confirmed() {
            self.max_offset
        } else {
            self.offset.clamp(0.0, self.max_offset)
        };
    }

    /// Apply a horizontal drag delta, clamping into `[0, max_offset]`.
    ///
    /// Accepted while idle, dragging, or settling back toward the start
    /// (a new grab takes over the settle animation). Ignored once a
    /// release has latched toward the end, and in the terminal phase.
    pub fn drag_by(&mut self, delta: f32) {
        match self.phase {
            SlidePhase::Idle
            | SlidePhase::Dragging
            | SlidePhase::Settling {
                toward: SettleTarget::Start,
                ..
            } => {
                self.phase = SlidePhase::Dragging;
                self.offset = (self.offset + delta).clamp(0.0, self.max_offset);
            }
            _ => {}
        }
    }

    /// End the current drag gesture and evaluate the threshold.
    ///
    /// At or beyond `threshold * max_offset` the knob settles toward the
    /// end and confirmation follows after the configured delay; otherwise
    /// it settles back to the start.
    pub fn release(&mut self) {
        if self.phase != SlidePhase::Dragging {
            return;
        }
        let toward = if self.confirm_position_reached() {
            SettleTarget::End
        } else {
            SettleTarget::Start
        };
        self.phase = SlidePhase::Settling {
            from: self.offset,
            toward,
            elapsed: 0.0,
        };
    }

    /// Advance animations by `dt` seconds.
    ///
    /// Returns [`SlideEvent::Confirmed`] on the single tick that crosses
    /// into the terminal phase; every other call returns `None`.
    pub fn tick(&mut self, dt: f32) -> Option<SlideEvent> {
        match self.phase {
            SlidePhase::Settling {
                from,
                toward,
                elapsed,
            } => {
                let elapsed = elapsed + dt;
                let target = match toward {
                    SettleTarget::Start => 0.0,
                    SettleTarget::End => self.max_offset,
                };
                let t = (elapsed / SETTLE_SECONDS).min(1.0);
                // `from` was captured at release; the track may have shrunk
                // since, so the interpolated value needs the clamp too.
                self.offset =
                    (from + (target - from) * ease_out_cubic(t)).clamp(0.0, self.max_offset);
                if t >= 1.0 {
                    self.offset = target;
                    self.phase = match toward {
                        SettleTarget::Start => SlidePhase::Idle,
                        SettleTarget::End => SlidePhase::Holding {
                            remaining: self.confirm_delay,
                        },
                    };
                } else {
                    self.phase = SlidePhase::Settling {
                        from,
                        toward,
                        elapsed,
                    };
                }
                None
            }
            SlidePhase::Holding { remaining } => {
                let remaining = remaining - dt;
                if remaining <= 0.0 {
                    self.phase = SlidePhase::Confirmed;
                    log::debug!("slider confirmed");
                    Some(SlideEvent::Confirmed)
                } else {
                    self.phase = SlidePhase::Holding { remaining };
                    None
                }
            }
            _ => None,
        }
    }

    /// Current knob offset along the track.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Maximum knob travel distance.
    pub fn max_offset(&self) -> f32 {
        self.max_offset
    }

    /// Confirmation threshold as a fraction of the travel distance.
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Current interaction phase.
    pub fn phase(&self) -> SlidePhase {
        self.phase
    }

    /// Whether the slider reached its terminal confirmed state.
    pub fn is_confirmed(&self) -> bool {
        self.phase == SlidePhase::Confirmed
    }

    /// Whether a drag gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.phase == SlidePhase::Dragging
    }

    /// Whether a settle animation or the confirmation delay is running.
    /// The host should keep driving `tick` (repainting) while this holds.
    pub fn is_animating(&self) -> bool {
        matches!(
            self.phase,
            SlidePhase::Settling { .. } | SlidePhase::Holding { .. }
        )
    }

    /// Persistable status; what the host stashes across reconfiguration.
    pub fn status(&self) -> SlideStatus {
        if self.is_confirmed() {
            SlideStatus::Confirmed
        } else {
            SlideStatus::Init
        }
    }

    fn confirm_position_reached(&self) -> bool {
        if self.max_offset <= 0.0 {
            // Degenerate track: the knob cannot travel. Only a zero
            // threshold counts the (immobile) release as reaching the end.
            self.threshold <= 0.0
        } else {
            self.offset >= self.threshold * self.max_offset
        }
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn slider(track: f32, knob: f32, threshold: f32) -> SliderState {
        let mut s = SliderState::new(threshold, SlideStatus::Init);
        s.set_track(track, knob);
        s
    }

    /// Run ticks until nothing animates, collecting events.
    fn run_to_rest(s: &mut SliderState) -> Vec<SlideEvent> {
        let mut events = Vec::new();
        for _ in 0..1000 {
            if let Some(e) = s.tick(DT) {
                events.push(e);
            }
            if !s.is_animating() {
                break;
            }
        }
        assert!(!s.is_animating(), "slider did not settle within 1000 ticks");
        events
    }

    #[test]
    fn test_offset_stays_clamped() {
        let mut s = slider(360.0, 60.0, 0.95);
        for delta in [50.0, -500.0, 120.0, 9000.0, -3.0, -0.001, 42.0] {
            s.drag_by(delta);
            assert!(s.offset() >= 0.0 && s.offset() <= s.max_offset());
        }
    }

    #[test]
    fn test_threshold_clamped_at_construction() {
        assert_eq!(SliderState::new(1.5, SlideStatus::Init).threshold(), 1.0);
        assert_eq!(SliderState::new(-0.2, SlideStatus::Init).threshold(), 0.0);
    }

    #[test]
    fn test_release_below_threshold_settles_back() {
        // max_offset = 300, threshold 0.95 -> confirm boundary at 285.
        let mut s = slider(360.0, 60.0, 0.95);
        s.drag_by(280.0);
        s.release();
        let events = run_to_rest(&mut s);
        assert!(events.is_empty());
        assert_eq!(s.offset(), 0.0);
        assert_eq!(s.phase(), SlidePhase::Idle);
        assert!(!s.is_confirmed());
    }

    #[test]
    fn test_release_above_threshold_confirms_once() {
        let mut s = slider(360.0, 60.0, 0.95);
        s.drag_by(290.0);
        s.release();
        let events = run_to_rest(&mut s);
        assert_eq!(events, vec![SlideEvent::Confirmed]);
        assert_eq!(s.offset(), 300.0);
        assert!(s.is_confirmed());
    }

    #[test]
    fn test_release_exactly_at_boundary_confirms() {
        let mut s = slider(360.0, 60.0, 0.95);
        s.drag_by(285.0);
        s.release();
        assert_eq!(run_to_rest(&mut s), vec![SlideEvent::Confirmed]);
    }

    #[test]
    fn test_confirm_waits_for_delay() {
        let mut s = slider(360.0, 60.0, 0.5);
        s.drag_by(300.0);
        s.release();
        // Settle to the end first.
        while !matches!(s.phase(), SlidePhase::Holding { .. }) {
            assert_eq!(s.tick(DT), None);
        }
        assert_eq!(s.offset(), 300.0);
        // 100 ms default delay: 0.05 s in is still holding.
        assert_eq!(s.tick(0.05), None);
        assert!(!s.is_confirmed());
        assert_eq!(s.tick(0.06), Some(SlideEvent::Confirmed));
    }

    #[test]
    fn test_confirmed_is_absorbing() {
        let mut s = slider(360.0, 60.0, 0.5);
        s.drag_by(300.0);
        s.release();
        assert_eq!(run_to_rest(&mut s).len(), 1);

        s.drag_by(-100.0);
        assert_eq!(s.offset(), 300.0);
        s.release();
        for _ in 0..100 {
            assert_eq!(s.tick(DT), None);
        }
        assert!(s.is_confirmed());
    }

    #[test]
    fn test_initially_confirmed_fires_nothing() {
        let mut s = SliderState::new(0.95, SlideStatus::Confirmed);
        s.set_track(360.0, 60.0);
        assert!(s.is_confirmed());
        assert!(!s.is_animating());
        // Renders directly at full travel.
        assert_eq!(s.offset(), 300.0);
        for _ in 0..10 {
            assert_eq!(s.tick(DT), None);
        }
        assert_eq!(s.status(), SlideStatus::Confirmed);
    }

    #[test]
    fn test_degenerate_track_never_moves() {
        // Knob wider than the track: max_offset clamps to 0.
        let mut s = slider(60.0, 80.0, 0.95);
        assert_eq!(s.max_offset(), 0.0);
        s.drag_by(50.0);
        assert_eq!(s.offset(), 0.0);
        s.release();
        assert!(run_to_rest(&mut s).is_empty());
        assert!(!s.is_confirmed());
    }

    #[test]
    fn test_degenerate_track_with_zero_threshold_confirms() {
        let mut s = slider(60.0, 80.0, 0.0);
        s.drag_by(10.0);
        s.release();
        assert_eq!(run_to_rest(&mut s), vec![SlideEvent::Confirmed]);
    }

    #[test]
    fn test_drag_takes_over_settle_back() {
        let mut s = slider(360.0, 60.0, 0.95);
        s.drag_by(200.0);
        s.release();
        s.tick(DT);
        assert!(matches!(s.phase(), SlidePhase::Settling { .. }));
        let mid = s.offset();
        assert!(mid > 0.0 && mid < 200.0);

        // Grabbing again resumes dragging from the animated position.
        s.drag_by(10.0);
        assert!(s.is_dragging());
        assert!((s.offset() - (mid + 10.0)).abs() < 1e-4);
    }

    #[test]
    fn test_drag_ignored_while_settling_to_end() {
        let mut s = slider(360.0, 60.0, 0.5);
        s.drag_by(290.0);
        s.release();
        s.tick(DT);
        let before = s.offset();
        s.drag_by(-200.0);
        assert_eq!(s.offset(), before);
        assert_eq!(run_to_rest(&mut s), vec![SlideEvent::Confirmed]);
    }

    #[test]
    fn test_release_without_drag_is_ignored() {
        let mut s = slider(360.0, 60.0, 0.95);
        s.release();
        assert_eq!(s.phase(), SlidePhase::Idle);
        assert!(run_to_rest(&mut s).is_empty());
    }

    #[test]
    fn test_set_track_reclamps_offset() {
        let mut s = slider(360.0, 60.0, 0.95);
        s.drag_by(250.0);
        s.set_track(160.0, 60.0);
        assert_eq!(s.offset(), 100.0);
    }

    #[test]
    fn test_track_shrink_mid_settle_keeps_offset_clamped() {
        let mut s = slider(360.0, 60.0, 0.95);
        s.drag_by(290.0);
        s.release();
        s.tick(DT);

        // Window resize mid-animation: travel shrinks below the settle
        // start position. Every subsequent step must stay clamped.
        s.set_track(160.0, 60.0);
        assert_eq!(s.max_offset(), 100.0);
        let mut events = Vec::new();
        for _ in 0..1000 {
            if let Some(e) = s.tick(DT) {
                events.push(e);
            }
            assert!(
                s.offset() >= 0.0 && s.offset() <= s.max_offset(),
                "offset {} exceeds max_offset {}",
                s.offset(),
                s.max_offset()
            );
            if !s.is_animating() {
                break;
            }
        }
        assert_eq!(events, vec![SlideEvent::Confirmed]);
        assert_eq!(s.offset(), 100.0);
    }

    #[test]
    fn test_custom_confirm_delay() {
        let mut s = slider(360.0, 60.0, 0.5);
        s.set_confirm_delay_ms(0);
        s.drag_by(300.0);
        s.release();
        assert_eq!(run_to_rest(&mut s), vec![SlideEvent::Confirmed]);
    }
}
