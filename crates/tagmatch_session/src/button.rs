//! Finish-button state

/// Feedback to play when the button changes state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonFeedback {
    /// Button went down
    Pushed,
    /// Button came back up
    Released,
}

/// Toggle-state of the finish button.
///
/// Disabled once a run reaches a final outcome; further presses are
/// ignored.
#[derive(Debug, Clone, Default)]
pub struct FinishButton {
    pressed: bool,
    disabled: bool,
}

impl FinishButton {
    /// Create an enabled, unpressed button
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle the button; returns the feedback to play, or `None` if the
    /// button is disabled
    pub fn toggle(&mut self) -> Option<ButtonFeedback> {
        if self.disabled {
            return None;
        }

        self.pressed = !self.pressed;
        Some(if self.pressed {
            ButtonFeedback::Pushed
        } else {
            ButtonFeedback::Released
        })
    }

    /// Stop accepting presses
    pub fn disable(&mut self) {
        self.disabled = true;
    }

    /// Check if the button is currently down
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Check if the button still accepts presses
    pub fn is_enabled(&self) -> bool {
        !self.disabled
    }
}
