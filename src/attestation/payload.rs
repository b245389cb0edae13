use std::fmt;
use std::str::FromStr;

use hex::FromHex;
use serde::Serialize;

use crate::attestation::workflow::EventDraft;
use crate::types::{
    errors::{GateError, Result},
    interfaces::AttestationRequest,
    EventKind,
};

/// Body notarized by the attestation service. Field names follow the
/// on-chain schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttestationPayload {
    pub name: String,
    pub event_type: EventKind,
    pub location: String,
    pub timestamp: u64,
    pub ticket_limit: u64,
    pub metadata: String,
}

impl AttestationPayload {
    pub fn from_draft(draft: &EventDraft, max_location_len: usize) -> Self {
        Self {
            name: draft.name.clone(),
            event_type: draft.kind,
            location: truncate_chars(&draft.location, max_location_len),
            timestamp: draft.start_timestamp,
            ticket_limit: draft.total_ticket_limit(),
            metadata: draft.metadata.clone(),
        }
    }

    pub fn to_request(&self, schema_id: &str) -> Result<AttestationRequest> {
        let data = serde_json::to_string(self)
            .map_err(|e| GateError::InvalidInput(format!("Unencodable attestation payload: {e}")))?;
        Ok(AttestationRequest {
            schema_id: schema_id.to_string(),
            data,
        })
    }
}

fn truncate_chars(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}

/// Attestation id as issued by the service. It doubles as the on-chain
/// event id, so it must fit in 8 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttestationId(pub u64);

impl AttestationId {
    pub fn event_id(self) -> u64 {
        self.0
    }
}

impl FromStr for AttestationId {
    type Err = GateError;

    fn from_str(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if digits.is_empty() {
            return Err(GateError::ExternalDependencyFailure(
                "Attestation service returned no id".to_string(),
            ));
        }
        if digits.len() > 16 {
            return Err(GateError::ExternalDependencyFailure(format!(
                "Attestation id {trimmed} does not fit in 8 bytes"
            )));
        }

        let word = <[u8; 8]>::from_hex(format!("{digits:0>16}")).map_err(|e| {
            GateError::ExternalDependencyFailure(format!("Malformed attestation id {trimmed}: {e}"))
        })?;
        Ok(AttestationId(u64::from_be_bytes(word)))
    }
}

impl fmt::Display for AttestationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}
