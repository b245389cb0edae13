use alloy_primitives::Address;
use serde::Serialize;
use uuid::Uuid;

use crate::attestation::workflow::EventDraft;
use crate::types::{
    errors::{GateError, Result},
    interfaces::{CmsReference, CmsStore},
    EventKind,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EventDocument<'a> {
    #[serde(rename = "_type")]
    doc_type: &'static str,
    event_id: u64,
    name: &'a str,
    description: &'a str,
    address: &'a str,
    start_timestamp: u64,
    end_timestamp: u64,
    gating_token: Address,
    manager: Address,
}

/// Parent field (and document type) holding events of `kind`.
pub fn collection_for(kind: EventKind) -> &'static str {
    match kind {
        EventKind::Live => "events",
        EventKind::Community => "communityEvents",
    }
}

/// Creates the event document and appends a reference to it on the parent
/// document. Returns the new document id.
pub async fn publish_event_document<S: CmsStore>(
    store: &S,
    parent_id: &str,
    draft: &EventDraft,
    event_id: u64,
) -> Result<String> {
    let collection = collection_for(draft.kind);
    let document = serde_json::to_value(EventDocument {
        doc_type: collection,
        event_id,
        name: &draft.name,
        description: &draft.metadata,
        address: &draft.location,
        start_timestamp: draft.start_timestamp,
        end_timestamp: draft.end_timestamp,
        gating_token: draft.gating_token,
        manager: draft.manager,
    })
    .map_err(|e| GateError::InvalidInput(format!("Unencodable event document: {e}")))?;

    let document_id = store
        .create_document(document)
        .await
        .map_err(cms_failure)?;
    if document_id.is_empty() {
        return Err(GateError::ExternalDependencyFailure(
            "CMS returned no document id".to_string(),
        ));
    }

    let reference = CmsReference {
        key: Uuid::new_v4().to_string(),
        kind: "reference".to_string(),
        target: document_id.clone(),
    };
    store
        .append_reference(parent_id, collection, reference)
        .await
        .map_err(cms_failure)?;

    Ok(document_id)
}

fn cms_failure(err: GateError) -> GateError {
    GateError::ExternalDependencyFailure(format!("CMS write failed: {}", err.reason()))
}
