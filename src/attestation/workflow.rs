use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::attestation::{cms, AttestationId, AttestationPayload};
use crate::platform::{NexusEventGate, SharedEventGate};
use crate::types::{
    config::GateConfig,
    context::CallContext,
    errors::{require_valid_input, GateError, Result},
    interfaces::{AttestationService, CmsStore, FanTokenRegistry},
    AccessLevelSpec, EventKind,
};

/// Event details captured before anything is committed anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub name: String,
    pub kind: EventKind,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub start_timestamp: u64,
    #[serde(default)]
    pub metadata: String,
    pub gating_token: Address,
    pub manager: Address,
    pub end_timestamp: u64,
    #[serde(default)]
    pub access_levels: Vec<AccessLevelSpec>,
    #[serde(default)]
    pub ticket_limit: u64,
}

impl EventDraft {
    pub fn live(
        name: impl Into<String>,
        gating_token: Address,
        manager: Address,
        end_timestamp: u64,
        access_levels: Vec<AccessLevelSpec>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: EventKind::Live,
            location: String::new(),
            start_timestamp: 0,
            metadata: String::new(),
            gating_token,
            manager,
            end_timestamp,
            access_levels,
            ticket_limit: 0,
        }
    }

    pub fn community(
        name: impl Into<String>,
        gating_token: Address,
        manager: Address,
        end_timestamp: u64,
        ticket_limit: u64,
    ) -> Self {
        Self {
            name: name.into(),
            kind: EventKind::Community,
            location: String::new(),
            start_timestamp: 0,
            metadata: String::new(),
            gating_token,
            manager,
            end_timestamp,
            access_levels: Vec::new(),
            ticket_limit,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_start_timestamp(mut self, start_timestamp: u64) -> Self {
        self.start_timestamp = start_timestamp;
        self
    }

    pub fn with_metadata(mut self, metadata: impl Into<String>) -> Self {
        self.metadata = metadata.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        require_valid_input(!self.name.trim().is_empty(), "Event name is required")?;
        match self.kind {
            EventKind::Live => require_valid_input(
                !self.access_levels.is_empty(),
                "A live event needs at least one access level",
            ),
            EventKind::Community => {
                require_valid_input(self.ticket_limit > 0, "Ticket limit must be positive")
            }
        }
    }

    /// Seats across all tiers; for community events, the single tier's limit.
    pub fn total_ticket_limit(&self) -> u64 {
        match self.kind {
            EventKind::Live => self
                .access_levels
                .iter()
                .fold(0u64, |total, level| total.saturating_add(level.ticket_limit)),
            EventKind::Community => self.ticket_limit,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowState {
    Draft,
    Attested {
        attestation_id: AttestationId,
    },
    Registered {
        event_id: u64,
    },
    /// Registration failed after a successful attestation. The attestation
    /// stays committed off-chain; only `restart` leaves this state.
    Orphaned {
        attestation_id: AttestationId,
        reason: GateError,
    },
}

/// Attest-then-register for one event draft. The two steps share no
/// transaction, and nothing is retried automatically.
#[derive(Debug, Clone)]
pub struct RegistrationWorkflow {
    draft: EventDraft,
    state: WorkflowState,
}

impl RegistrationWorkflow {
    pub fn new(draft: EventDraft) -> Self {
        Self {
            draft,
            state: WorkflowState::Draft,
        }
    }

    pub fn draft(&self) -> &EventDraft {
        &self.draft
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    /// Whether the on-chain registration step may be submitted.
    pub fn can_register(&self) -> bool {
        matches!(self.state, WorkflowState::Attested { .. })
    }

    /// Notarizes the draft. On any failure the workflow stays in `Draft`.
    pub async fn attest<S: AttestationService>(
        &mut self,
        service: &S,
        config: &GateConfig,
    ) -> Result<AttestationId> {
        require_valid_input(
            self.state == WorkflowState::Draft,
            "Only a draft can be attested",
        )?;
        self.draft.validate()?;

        let request = AttestationPayload::from_draft(&self.draft, config.max_location_len)
            .to_request(&config.attestation_schema_id)?;
        let raw_id = service
            .create_attestation(request)
            .await
            .map_err(|e| GateError::ExternalDependencyFailure(e.reason().to_string()))?;
        let attestation_id: AttestationId = raw_id.parse()?;

        self.state = WorkflowState::Attested { attestation_id };
        Ok(attestation_id)
    }

    /// Registers the attested event on `gate`, using the attestation id as
    /// the event id.
    pub fn register<F: FanTokenRegistry>(
        &mut self,
        gate: &mut NexusEventGate<F>,
        ctx: &CallContext,
    ) -> Result<u64> {
        let attestation_id = self.pending()?;
        let outcome = submit(&self.draft, gate, ctx, attestation_id.event_id());
        self.settle(attestation_id, outcome)
    }

    /// Same as `register`, holding the shared gate's write lock for the one
    /// registration call only.
    pub async fn register_shared<F: FanTokenRegistry>(
        &mut self,
        shared: &SharedEventGate<F>,
        ctx: &CallContext,
    ) -> Result<u64> {
        let attestation_id = self.pending()?;
        let draft = &self.draft;
        let outcome = shared
            .write(|gate| submit(draft, gate, ctx, attestation_id.event_id()))
            .await;
        self.settle(attestation_id, outcome)
    }

    /// Turns an orphaned workflow back into a draft. The old attestation is
    /// abandoned and a new one is required.
    pub fn restart(&mut self) -> Result<()> {
        require_valid_input(
            matches!(self.state, WorkflowState::Orphaned { .. }),
            "Only an orphaned workflow can be restarted",
        )?;
        self.state = WorkflowState::Draft;
        Ok(())
    }

    /// Creates the event's CMS document and links it under `parent_id`.
    pub async fn publish<S: CmsStore>(&self, store: &S, parent_id: &str) -> Result<String> {
        let WorkflowState::Registered { event_id } = self.state else {
            return Err(GateError::InvalidInput(
                "Only a registered event can be published".to_string(),
            ));
        };
        cms::publish_event_document(store, parent_id, &self.draft, event_id).await
    }

    fn pending(&self) -> Result<AttestationId> {
        match &self.state {
            WorkflowState::Attested { attestation_id } => Ok(*attestation_id),
            _ => Err(GateError::InvalidInput(
                "Event must be attested before registration".to_string(),
            )),
        }
    }

    fn settle(&mut self, attestation_id: AttestationId, outcome: Result<()>) -> Result<u64> {
        match outcome {
            Ok(()) => {
                let event_id = attestation_id.event_id();
                self.state = WorkflowState::Registered { event_id };
                Ok(event_id)
            }
            Err(reason) => {
                self.state = WorkflowState::Orphaned {
                    attestation_id,
                    reason: reason.clone(),
                };
                Err(reason)
            }
        }
    }
}

fn submit<F: FanTokenRegistry>(
    draft: &EventDraft,
    gate: &mut NexusEventGate<F>,
    ctx: &CallContext,
    event_id: u64,
) -> Result<()> {
    match draft.kind {
        EventKind::Live => gate.register_live_event(
            ctx,
            event_id,
            draft.gating_token,
            draft.manager,
            draft.end_timestamp,
            &draft.access_levels,
        ),
        EventKind::Community => gate.register_community_event(
            ctx,
            event_id,
            draft.gating_token,
            draft.manager,
            draft.end_timestamp,
            draft.ticket_limit,
        ),
    }
}
