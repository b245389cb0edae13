pub mod types;
pub mod ledger;
pub mod registry;
pub mod tickets;
pub mod treasury;
pub mod vault;
pub mod attestation;
pub mod platform;

// Re-export the main contracts
pub use platform::{NexusEventGate, SharedEventGate};
pub use vault::NexusTokenVault;
pub use attestation::{EventDraft, RegistrationWorkflow, WorkflowState};
pub use ledger::generate_token_id;
pub use types::{
    config::GateConfig,
    context::CallContext,
    errors::{GateError, Result},
    AccessLevelInfo, AccessLevelSpec, EventInfo, EventKind,
};

// The event gate is the default entrypoint
pub use platform::NexusEventGate as Contract;
