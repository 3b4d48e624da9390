//! A full training run

use crate::button::FinishButton;
use crate::feedback::{FeedbackTracker, SocketVisual};
use crate::outcome::SessionOutcome;
use crate::writer::{ReportWriter, SessionError};
use std::path::PathBuf;
use tagmatch_core::{Item, SocketId};
use tagmatch_registry::{RegistryError, SocketRegistry};

/// Result of a finish-button press
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishResult {
    /// Evaluated outcome
    pub outcome: SessionOutcome,
    /// Path of the persisted report, when one was written
    pub log_path: Option<PathBuf>,
}

/// One training run: the registry plus the collaborators around it.
///
/// Place/remove calls route the registry's placement events into the
/// feedback tracker. Pressing finish evaluates the outcome; a final
/// outcome disables the button and persists the report. An incomplete
/// press leaves the run going and writes nothing.
pub struct Session {
    registry: SocketRegistry,
    button: FinishButton,
    feedback: FeedbackTracker,
    writer: Option<ReportWriter>,
}

impl Session {
    /// Create a session over a prepared registry
    pub fn new(registry: SocketRegistry) -> Self {
        Self {
            registry,
            button: FinishButton::new(),
            feedback: FeedbackTracker::new(),
            writer: None,
        }
    }

    /// Persist reports of finished runs with this writer
    pub fn with_writer(mut self, writer: ReportWriter) -> Self {
        self.writer = Some(writer);
        self
    }

    /// Get the underlying registry
    pub fn registry(&self) -> &SocketRegistry {
        &self.registry
    }

    /// Get mutable access to the underlying registry
    pub fn registry_mut(&mut self) -> &mut SocketRegistry {
        &mut self.registry
    }

    /// Place an item into a socket; returns placement correctness
    pub fn place(&mut self, socket: SocketId, item: Item) -> Result<bool, RegistryError> {
        let correct = self.registry.place(socket, item)?;
        self.sync_feedback();
        Ok(correct)
    }

    /// Clear a socket's occupant
    pub fn remove(&mut self, socket: SocketId) -> Result<(), RegistryError> {
        self.registry.remove(socket)?;
        self.sync_feedback();
        Ok(())
    }

    /// Get the visual state of a socket
    pub fn visual(&self, socket: SocketId) -> SocketVisual {
        self.feedback.visual(socket)
    }

    /// Check if the finish button still accepts presses
    pub fn finish_enabled(&self) -> bool {
        self.button.is_enabled()
    }

    /// Press the finish button and evaluate the run.
    ///
    /// Final outcomes (success/failure) disable the button and, when a
    /// writer is configured, persist the report. Errors if the button was
    /// already disabled by an earlier final outcome.
    pub fn press_finish(&mut self) -> Result<FinishResult, SessionError> {
        if self.button.toggle().is_none() {
            return Err(SessionError::ButtonDisabled);
        }

        let outcome = SessionOutcome::evaluate(&self.registry);
        log::info!("finish pressed: {outcome}");

        let mut log_path = None;
        if outcome.is_final() {
            self.button.disable();
            if let Some(writer) = &self.writer {
                log_path = Some(writer.write(&self.registry.snapshot(), outcome)?);
            }
        }

        Ok(FinishResult { outcome, log_path })
    }

    fn sync_feedback(&mut self) {
        for event in self.registry.drain_events() {
            self.feedback.apply(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::ReportFormat;
    use tagmatch_core::Tag;
    use tagmatch_registry::SocketDef;

    fn two_socket_session() -> (Session, SocketId, SocketId) {
        let mut registry = SocketRegistry::new();
        let red = SocketDef::new("anchor_red", Tag::new("Red"));
        let blue = SocketDef::new("anchor_blue", Tag::new("Blue"));
        let ids = (red.id, blue.id);
        registry.register(red).unwrap();
        registry.register(blue).unwrap();
        (Session::new(registry), ids.0, ids.1)
    }

    #[test]
    fn test_incomplete_press_keeps_running() {
        let (mut session, red, _) = two_socket_session();

        session
            .place(red, Item::new("red_cube", Tag::new("Red")))
            .unwrap();

        let result = session.press_finish().unwrap();
        assert_eq!(result.outcome, SessionOutcome::Incomplete);
        assert!(result.log_path.is_none());
        assert!(session.finish_enabled());
    }

    #[test]
    fn test_success_disables_button_and_writes_log() {
        let dir = tempfile::tempdir().unwrap();
        let mut registry = SocketRegistry::new();
        let red_def = SocketDef::new("anchor_red", Tag::new("Red"));
        let blue_def = SocketDef::new("anchor_blue", Tag::new("Blue"));
        let (red, blue) = (red_def.id, blue_def.id);
        registry.register(red_def).unwrap();
        registry.register(blue_def).unwrap();

        let mut session = Session::new(registry)
            .with_writer(ReportWriter::new(dir.path()).with_format(ReportFormat::Text));

        session
            .place(red, Item::new("red_cube", Tag::new("Red")))
            .unwrap();
        session
            .place(blue, Item::new("blue_cube", Tag::new("Blue")))
            .unwrap();

        let result = session.press_finish().unwrap();
        assert_eq!(result.outcome, SessionOutcome::Success);
        let path = result.log_path.unwrap();
        assert!(path.is_file());

        assert!(!session.finish_enabled());
        assert!(matches!(
            session.press_finish(),
            Err(SessionError::ButtonDisabled)
        ));
    }

    #[test]
    fn test_failure_outcome_with_feedback() {
        let (mut session, red, blue) = two_socket_session();

        session
            .place(red, Item::new("blue_cube", Tag::new("Blue")))
            .unwrap();
        session
            .place(blue, Item::new("blue_cube_2", Tag::new("Blue")))
            .unwrap();

        assert_eq!(session.visual(red), SocketVisual::Wrong);
        assert_eq!(session.visual(blue), SocketVisual::Correct);

        let result = session.press_finish().unwrap();
        assert_eq!(result.outcome, SessionOutcome::Failure);
        assert!(!session.finish_enabled());
    }

    #[test]
    fn test_removal_resets_visual() {
        let (mut session, red, _) = two_socket_session();

        session
            .place(red, Item::new("red_cube", Tag::new("Red")))
            .unwrap();
        assert_eq!(session.visual(red), SocketVisual::Correct);

        session.remove(red).unwrap();
        assert_eq!(session.visual(red), SocketVisual::Neutral);
    }
}
