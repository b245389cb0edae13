use alloy_primitives::Address;
use serde::Deserialize;

use crate::types::errors::{GateError, Result};
use crate::types::{
    DEFAULT_ATTESTATION_SCHEMA_ID, DEFAULT_BASE_URI, DEFAULT_GATE_ADDRESS,
    DEFAULT_MAX_ACCESS_LEVEL_NAME_LEN, DEFAULT_MAX_LOCATION_LEN,
};

/// Deployment settings for an event gate. Missing fields fall back to the
/// defaults in `types`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GateConfig {
    pub contract_address: Address,
    pub base_uri: String,
    pub max_access_level_name_len: usize,
    pub max_location_len: usize,
    pub attestation_schema_id: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            contract_address: DEFAULT_GATE_ADDRESS,
            base_uri: DEFAULT_BASE_URI.to_string(),
            max_access_level_name_len: DEFAULT_MAX_ACCESS_LEVEL_NAME_LEN,
            max_location_len: DEFAULT_MAX_LOCATION_LEN,
            attestation_schema_id: DEFAULT_ATTESTATION_SCHEMA_ID.to_string(),
        }
    }
}

impl GateConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: GateConfig = serde_json::from_str(raw)
            .map_err(|e| GateError::InvalidInput(format!("Invalid gate config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_access_level_name_len == 0 {
            return Err(GateError::InvalidInput(
                "maxAccessLevelNameLen must be positive".to_string(),
            ));
        }
        if self.attestation_schema_id.is_empty() {
            return Err(GateError::InvalidInput(
                "attestationSchemaId is required".to_string(),
            ));
        }
        Ok(())
    }
}
