pub mod builder_session;
pub mod save_coordinator;

pub use builder_session::{spawn_autosave, BuilderSession, SaveStatus, SessionError};
pub use save_coordinator::{SaveCoordinator, SaveOutcome, SaveOutcomeKind};
