//! Haptic feedback capability.
//!
//! Confirmation asks the platform for a short vibration. Desktops have no
//! vibrator and mobile targets may deny the permission, so the contract
//! is: implementations report failure through [`HapticError`], and the
//! caller logs and discards it. A haptic failure never reaches the
//! application or affects the confirmation transition.

use thiserror::Error;

/// Why a haptic request could not be served.
#[derive(Debug, Error)]
pub enum HapticError {
    /// The platform has no vibration hardware or API.
    #[error("haptic feedback is not supported on this platform")]
    Unsupported,
    /// The platform API failed or denied the request.
    #[error("haptic request failed: {0}")]
    Platform(String),
}

/// A one-shot vibration request.
///
/// Injected per target platform; the widget invokes it on confirmation
/// with the configured duration. A duration of zero is never dispatched.
pub trait HapticFeedback {
    fn fire(&self, duration_ms: u64) -> Result<(), HapticError>;
}

/// Silent no-op haptics; the widget default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHaptics;

impl HapticFeedback for NoHaptics {
    fn fire(&self, _duration_ms: u64) -> Result<(), HapticError> {
        Ok(())
    }
}

/// Haptics that log the request instead of vibrating. Useful on desktop
/// demos where the confirmation buzz has no hardware to land on.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogHaptics;

impl HapticFeedback for LogHaptics {
    fn fire(&self, duration_ms: u64) -> Result<(), HapticError> {
        log::info!("haptic feedback requested: {duration_ms} ms");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DeniedHaptics;

    impl HapticFeedback for DeniedHaptics {
        fn fire(&self, _duration_ms: u64) -> Result<(), HapticError> {
            Err(HapticError::Platform("permission denied".into()))
        }
    }

    #[test]
    fn test_noop_haptics_succeed() {
        assert!(NoHaptics.fire(100).is_ok());
        assert!(LogHaptics.fire(100).is_ok());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            HapticError::Unsupported.to_string(),
            "haptic feedback is not supported on this platform"
        );
        assert_eq!(
            DeniedHaptics.fire(100).unwrap_err().to_string(),
            "haptic request failed: permission denied"
        );
    }
}
