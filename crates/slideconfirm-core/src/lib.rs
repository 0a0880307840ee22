//! SlideConfirm Core Library
//!
//! UI-framework-agnostic logic for the slide-to-confirm control: the
//! drag-to-threshold state machine and the haptic feedback capability.

pub mod haptics;
pub mod slider;

pub use haptics::{HapticError, HapticFeedback, LogHaptics, NoHaptics};
pub use slider::{SettleTarget, SlideEvent, SlidePhase, SlideStatus, SliderState};
