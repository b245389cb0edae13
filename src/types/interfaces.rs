use std::future::Future;

use alloy_primitives::Address;
use serde::Serialize;

use crate::types::errors::Result;

/// The fan-token bridge an event gate consults for gating decisions.
pub trait FanTokenRegistry {
    fn address(&self) -> Address;
    fn is_supported_fan_token(&self, fan_token: Address) -> bool;
    fn check_user_own_fan_tokens(&self, fan_token: Address, user: Address) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttestationRequest {
    pub schema_id: String,
    pub data: String,
}

/// Off-chain notarization service. A single request/response; callers get no
/// retry from here.
pub trait AttestationService {
    /// Returns the raw attestation id (a `0x`-prefixed hex string).
    fn create_attestation(
        &self,
        request: AttestationRequest,
    ) -> impl Future<Output = Result<String>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmsReference {
    #[serde(rename = "_key")]
    pub key: String,
    #[serde(rename = "_type")]
    pub kind: String,
    #[serde(rename = "_ref")]
    pub target: String,
}

/// Document store holding event metadata. Only create-and-link is used.
pub trait CmsStore {
    /// Creates a document from the given JSON body and returns its id.
    fn create_document(
        &self,
        document: serde_json::Value,
    ) -> impl Future<Output = Result<String>> + Send;

    /// Appends `reference` to the array field `field` of document `parent_id`,
    /// creating the array if missing.
    fn append_reference(
        &self,
        parent_id: &str,
        field: &str,
        reference: CmsReference,
    ) -> impl Future<Output = Result<()>> + Send;
}
