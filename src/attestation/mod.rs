pub mod cms;
pub mod payload;
pub mod workflow;

pub use payload::{AttestationId, AttestationPayload};
pub use workflow::{EventDraft, RegistrationWorkflow, WorkflowState};
